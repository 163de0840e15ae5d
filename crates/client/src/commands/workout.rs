//! Workouts made of timed blocks.
use anyhow::Result;
use athly_core::date::parse_iso_date;
use athly_core::{WorkoutBlock, WorkoutForm};
use clap::{Parser, Subcommand};
use client_core::AthlyContext;
use client_core::format::workout_card;

#[derive(Subcommand, Debug)]
pub enum WorkoutCommand {
    /// Log a workout
    Add(WorkoutAdd),

    /// List workouts, most recent first
    List,
}

#[derive(Parser, Debug)]
pub struct WorkoutAdd {
    /// Workout date, YYYY-MM-DD (default: today)
    #[arg(long, value_parser = parse_iso_date)]
    pub date: Option<String>,

    /// Block as type:minutes, e.g. 유산소:30; repeat for more blocks
    /// (default: 유산소:30 and 상체:30)
    #[arg(long = "block", value_name = "TYPE:MINUTES")]
    pub blocks: Vec<String>,

    /// Session RPE on the 1-10 scale
    #[arg(long, default_value = WorkoutForm::DEFAULT_RPE)]
    pub rpe: String,

    #[arg(long, default_value = "")]
    pub notes: String,
}

impl WorkoutCommand {
    pub fn execute(self, ctx: &mut AthlyContext) -> Result<()> {
        match self {
            WorkoutCommand::Add(args) => {
                let mut form = args.into_form();
                let next = form.save(ctx.document().clone());
                super::commit(ctx, next, "운동 기록을 저장했습니다.");
            }
            WorkoutCommand::List => {
                super::print_header("운동 기록", "예: 유산소 30분 / 상체 30분");
                super::print_cards(
                    ctx.document()
                        .workouts_latest_first()
                        .into_iter()
                        .map(workout_card),
                );
            }
        }
        Ok(())
    }
}

impl WorkoutAdd {
    fn into_form(self) -> WorkoutForm {
        let mut form = WorkoutForm::new(super::date_or_today(self.date));
        if !self.blocks.is_empty() {
            form.blocks = self
                .blocks
                .iter()
                .map(|spec| WorkoutBlock::from_spec(spec))
                .collect();
        }
        form.rpe = self.rpe;
        form.notes = self.notes;
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_default_to_the_form_blocks() {
        let add = WorkoutAdd {
            date: Some("2024-05-01".to_string()),
            blocks: Vec::new(),
            rpe: "6".to_string(),
            notes: String::new(),
        };
        assert_eq!(add.into_form(), WorkoutForm::new("2024-05-01"));
    }

    #[test]
    fn block_specs_replace_defaults() {
        let add = WorkoutAdd {
            date: Some("2024-05-01".to_string()),
            blocks: vec!["하체:40".to_string(), "스트레칭".to_string()],
            rpe: "7".to_string(),
            notes: "무릎 주의".to_string(),
        };
        let entry = add.into_form().to_entry();

        assert_eq!(
            entry.blocks,
            vec![WorkoutBlock::new("하체", 40), WorkoutBlock::new("스트레칭", 0)]
        );
        assert_eq!(entry.total_minutes(), 40);
        assert_eq!(entry.rpe, 7);
    }
}
