//! Subcommand implementations.
//!
//! Each command is a separate module that owns its CLI args and execution
//! logic, and works against the [`client_core::AthlyContext`] opened by `main`.

mod bullpen;
mod game;
mod home;
mod player;
mod report;
mod reset;
mod sync;
mod workout;

pub use bullpen::BullpenCommand;
pub use game::GameCommand;
pub use home::Home;
pub use player::PlayerCommand;
pub use report::Report;
pub use reset::Reset;
pub use sync::SyncData;
pub use workout::WorkoutCommand;

use anyhow::{Context, Result};
use athly_core::Document;
use client_core::AthlyContext;
use client_core::format::Card;
use console::style;

/// Persist `next` and report the outcome.
///
/// A failed write keeps the new snapshot in memory and is only logged, the
/// same way every mutation is best-effort.
fn commit(ctx: &mut AthlyContext, next: Document, saved: &str) {
    match ctx.store_mut().replace(next) {
        Ok(_) => println!("{} {}", style("✓").green(), saved),
        Err(e) => {
            tracing::warn!("Failed to persist document: {}", e);
            eprintln!("{} 저장 실패: {}", style("✗").red().bold(), e);
        }
    }
}

fn print_cards(cards: impl IntoIterator<Item = Card>) {
    let mut empty = true;
    for card in cards {
        empty = false;
        println!(
            "{}  {}",
            style(&card.title).bold(),
            style(&card.summary).dim()
        );
        if !card.chips.is_empty() {
            let chips: Vec<String> = card
                .chips
                .iter()
                .map(|chip| format!("[{chip}]"))
                .collect();
            println!("  {}", style(chips.join(" ")).cyan());
        }
        if let Some(body) = &card.body {
            println!("  {body}");
        }
    }
    if empty {
        println!("{}", style("기록이 없습니다.").dim());
    }
}

fn print_header(title: &str, subtitle: &str) {
    println!("{}", style(title).yellow().bold());
    println!("{}", style(subtitle).dim());
    println!();
}

/// `--date` value, defaulting to today.
fn date_or_today(date: Option<String>) -> String {
    date.unwrap_or_else(athly_core::date::today_iso)
}

/// Render `value` as pretty JSON for `--json` output.
fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}
