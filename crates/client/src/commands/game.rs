//! Game log: appearances in official games.
use anyhow::Result;
use athly_core::date::parse_iso_date;
use athly_core::{GameForm, HomeAway};
use clap::{Parser, Subcommand};
use client_core::AthlyContext;
use client_core::format::game_card;

#[derive(Subcommand, Debug)]
pub enum GameCommand {
    /// Log a game appearance
    Add(GameAdd),

    /// List game appearances, most recent first
    List,
}

#[derive(Parser, Debug)]
pub struct GameAdd {
    /// Game date, YYYY-MM-DD (default: today)
    #[arg(long, value_parser = parse_iso_date)]
    pub date: Option<String>,

    #[arg(long, default_value = "")]
    pub opponent: String,

    /// H (home) or A (away)
    #[arg(long, default_value = "H")]
    pub home_away: HomeAway,

    /// First inning pitched
    #[arg(long = "from", default_value = "")]
    pub used_inning_from: String,

    /// Last inning pitched
    #[arg(long = "to", default_value = "")]
    pub used_inning_to: String,

    /// Pitch count; anything non-numeric counts as 0
    #[arg(long, default_value = "")]
    pub pitches: String,

    #[arg(long, default_value = "")]
    pub notes: String,
}

impl GameCommand {
    pub fn execute(self, ctx: &mut AthlyContext) -> Result<()> {
        match self {
            GameCommand::Add(args) => {
                let mut form = args.into_form();
                let next = form.save(ctx.document().clone());
                super::commit(ctx, next, "경기 기록을 저장했습니다.");
            }
            GameCommand::List => {
                super::print_header("경기 기록", "실전 등판 기록");
                super::print_cards(ctx.document().games_latest_first().into_iter().map(game_card));
            }
        }
        Ok(())
    }
}

impl GameAdd {
    fn into_form(self) -> GameForm {
        GameForm {
            opponent: self.opponent,
            home_away: self.home_away,
            used_inning_from: self.used_inning_from,
            used_inning_to: self.used_inning_to,
            pitches: self.pitches,
            notes: self.notes,
            ..GameForm::new(super::date_or_today(self.date))
        }
    }
}
