//! Text rendering of the document for list and header views.
//!
//! Every record renders as a [`Card`]: a title line, a right-hand summary, and
//! optional chips and body text. Front-ends decide how to lay cards out.

use athly_core::{BullpenEntry, DailyReport, GameEntry, Player, WorkoutBlock, WorkoutEntry};

/// Rendered form of one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub summary: String,
    pub chips: Vec<String>,
    pub body: Option<String>,
}

pub const LINK_PROMPT: &str = "아직 KBO 선수 연결이 필요해요.";

/// Header line describing the linked player, or the prompt to link one.
pub fn linked_player_line(player: Option<&Player>) -> String {
    match player {
        Some(p) => format!("연결된 선수: {} ({}) · ID: {}", p.name, p.team, p.id),
        None => LINK_PROMPT.to_string(),
    }
}

/// Secondary line of a search result.
pub fn player_detail(player: &Player) -> String {
    format!("{} · {} · ID {}", player.team, player.position, player.id)
}

pub fn game_card(entry: &GameEntry) -> Card {
    Card {
        title: format!(
            "{} · {} vs {}",
            entry.date,
            entry.home_away.label(),
            entry.opponent
        ),
        summary: format!("{}구", entry.pitches),
        chips: Vec::new(),
        body: non_empty(&entry.notes),
    }
}

pub fn bullpen_card(entry: &BullpenEntry) -> Card {
    let body = [entry.mix.as_str(), entry.notes.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" · ");

    Card {
        title: format!("{} · {}", entry.date, entry.context.as_ref()),
        summary: format!("{}구 · RPE{}", entry.total_pitches, entry.intensity_rpe),
        chips: Vec::new(),
        body: non_empty(&body),
    }
}

pub fn workout_card(entry: &WorkoutEntry) -> Card {
    Card {
        title: entry.date.clone(),
        summary: format!("RPE{}", entry.rpe),
        chips: entry.blocks.iter().map(block_chip).collect(),
        body: non_empty(&entry.notes),
    }
}

/// `"{type} {n}분"`, or just the type when no duration was entered.
pub fn block_chip(block: &WorkoutBlock) -> String {
    if block.duration == 0 {
        block.kind.clone()
    } else {
        format!("{} {}분", block.kind, block.duration)
    }
}

pub const REPORT_HEADERS: [&str; 4] = ["날짜", "불펜(구)", "운동(분)", "경기(구)"];

/// One report row as table cells, in [`REPORT_HEADERS`] order.
pub fn report_cells(row: &DailyReport) -> [String; 4] {
    [
        row.date.clone(),
        row.totals.bullpen_pitches.to_string(),
        row.totals.workouts_min.to_string(),
        row.totals.games_pitches.to_string(),
    ]
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}
