//! Bullpen sessions: warm-ups, side sessions and training throws.
use anyhow::Result;
use athly_core::date::parse_iso_date;
use athly_core::{BullpenContext, BullpenForm};
use clap::{Parser, Subcommand};
use client_core::AthlyContext;
use client_core::format::bullpen_card;

#[derive(Subcommand, Debug)]
pub enum BullpenCommand {
    /// Log a bullpen session
    Add(BullpenAdd),

    /// List bullpen sessions, most recent first
    List,
}

#[derive(Parser, Debug)]
pub struct BullpenAdd {
    /// Session date, YYYY-MM-DD (default: today)
    #[arg(long, value_parser = parse_iso_date)]
    pub date: Option<String>,

    /// 경기 전 | 경기 중 | 경기 후 | 훈련 (or pre, in, post, training)
    #[arg(long, default_value = "경기 전")]
    pub context: BullpenContext,

    /// Start time, e.g. 18:20
    #[arg(long, default_value = "")]
    pub start_time: String,

    /// Total pitches; anything non-numeric counts as 0
    #[arg(long, default_value = "")]
    pub pitches: String,

    /// Intensity on the 1-10 RPE scale
    #[arg(long, default_value = BullpenForm::DEFAULT_RPE)]
    pub rpe: String,

    /// Pitch mix memo, e.g. "직50 슬30 체20"
    #[arg(long, default_value = BullpenForm::DEFAULT_MIX)]
    pub mix: String,

    #[arg(long, default_value = "")]
    pub notes: String,
}

impl BullpenCommand {
    pub fn execute(self, ctx: &mut AthlyContext) -> Result<()> {
        match self {
            BullpenCommand::Add(args) => {
                let mut form = args.into_form();
                let next = form.save(ctx.document().clone());
                super::commit(ctx, next, "불펜 기록을 저장했습니다.");
            }
            BullpenCommand::List => {
                super::print_header("불펜 기록", "팔 풀었는지/언제/강도/구종 비율");
                super::print_cards(
                    ctx.document()
                        .bullpen_latest_first()
                        .into_iter()
                        .map(bullpen_card),
                );
            }
        }
        Ok(())
    }
}

impl BullpenAdd {
    fn into_form(self) -> BullpenForm {
        BullpenForm {
            context: self.context,
            start_time: self.start_time,
            total_pitches: self.pitches,
            intensity_rpe: self.rpe,
            mix: self.mix,
            notes: self.notes,
            ..BullpenForm::new(super::date_or_today(self.date))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    /// Wraps the add args so they can be parsed on their own.
    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        add: BullpenAdd,
    }

    #[test]
    fn defaults_match_the_form() {
        let args = Harness::try_parse_from(["bullpen", "--date", "2024-05-01"])
            .unwrap()
            .add;
        let form = args.into_form();

        assert_eq!(form, BullpenForm::new("2024-05-01"));
    }

    #[test]
    fn context_accepts_aliases() {
        let args = Harness::try_parse_from(["bullpen", "--context", "training", "--pitches", "30"])
            .unwrap()
            .add;
        let entry = args.into_form().to_entry();

        assert_eq!(entry.context, BullpenContext::Training);
        assert_eq!(entry.total_pitches, 30);
        assert_eq!(entry.intensity_rpe, 5);
    }
}
