//! Daily totals across bullpen, workouts and games.
use anyhow::Result;
use athly_core::{DailyReport, daily_totals};
use clap::Parser;
use client_core::AthlyContext;
use client_core::format::{REPORT_HEADERS, report_cells};
use console::style;

/// Daily totals across all records
#[derive(Parser, Debug)]
pub struct Report {
    /// Print the rows as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl Report {
    pub fn execute(self, ctx: &AthlyContext) -> Result<()> {
        let rows = daily_totals(ctx.document());

        if self.json {
            println!("{}", super::to_pretty_json(&rows)?);
            return Ok(());
        }

        super::print_header("일자별 합계", "불펜 투구수 / 운동 시간 / 경기 투구수");
        if rows.is_empty() {
            println!("{}", style("기록이 없습니다.").dim());
            return Ok(());
        }

        let mut lines = table_lines(&rows).into_iter();
        if let Some(header) = lines.next() {
            println!("{}", style(header).bold());
        }
        for line in lines {
            println!("{line}");
        }
        Ok(())
    }
}

/// Header line followed by one line per row.
fn table_lines(rows: &[DailyReport]) -> Vec<String> {
    std::iter::once(table_line(REPORT_HEADERS.map(String::from)))
        .chain(rows.iter().map(|row| table_line(report_cells(row))))
        .collect()
}

fn table_line(cells: [String; 4]) -> String {
    let [date, bullpen, workouts, games] = cells;
    format!("{date:<12}{bullpen:>10}{workouts:>10}{games:>10}")
}
