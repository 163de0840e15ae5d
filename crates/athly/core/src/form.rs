//! Entry forms: raw text input turned into entries on save.
//!
//! A form holds what the user has typed so far. `save` coerces the numeric
//! fields, appends the new entry to the document and resets the fields that
//! are expected to change between entries (the date and selections stay, so
//! logging several entries for one day is quick).

use crate::coerce;
use crate::date::today_iso;
use crate::document::Document;
use crate::entry::{BullpenContext, BullpenEntry, GameEntry, HomeAway, WorkoutBlock, WorkoutEntry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameForm {
    pub date: String,
    pub opponent: String,
    pub home_away: HomeAway,
    pub used_inning_from: String,
    pub used_inning_to: String,
    pub pitches: String,
    pub notes: String,
}

impl GameForm {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            opponent: String::new(),
            home_away: HomeAway::Home,
            used_inning_from: String::new(),
            used_inning_to: String::new(),
            pitches: String::new(),
            notes: String::new(),
        }
    }

    pub fn to_entry(&self) -> GameEntry {
        GameEntry {
            date: self.date.clone(),
            opponent: self.opponent.clone(),
            home_away: self.home_away,
            used_inning_from: self.used_inning_from.clone(),
            used_inning_to: self.used_inning_to.clone(),
            pitches: coerce::count(&self.pitches),
            notes: self.notes.clone(),
        }
    }

    /// Appends the entry to `doc` and clears the per-game fields.
    pub fn save(&mut self, doc: Document) -> Document {
        let entry = self.to_entry();
        self.opponent.clear();
        self.used_inning_from.clear();
        self.used_inning_to.clear();
        self.pitches.clear();
        self.notes.clear();
        doc.with_game(entry)
    }
}

impl Default for GameForm {
    fn default() -> Self {
        Self::new(today_iso())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BullpenForm {
    pub date: String,
    pub context: BullpenContext,
    pub start_time: String,
    pub total_pitches: String,
    pub intensity_rpe: String,
    pub mix: String,
    pub notes: String,
}

impl BullpenForm {
    pub const DEFAULT_RPE: &'static str = "5";
    pub const DEFAULT_MIX: &'static str = "직구/슬라이더/체인지업";

    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            context: BullpenContext::PreGame,
            start_time: String::new(),
            total_pitches: String::new(),
            intensity_rpe: Self::DEFAULT_RPE.to_string(),
            mix: Self::DEFAULT_MIX.to_string(),
            notes: String::new(),
        }
    }

    pub fn to_entry(&self) -> BullpenEntry {
        BullpenEntry {
            date: self.date.clone(),
            context: self.context,
            start_time: self.start_time.clone(),
            total_pitches: coerce::count(&self.total_pitches),
            intensity_rpe: coerce::rpe(&self.intensity_rpe),
            mix: self.mix.clone(),
            notes: self.notes.clone(),
        }
    }

    /// Appends the entry to `doc`; intensity and mix carry over to the next one.
    pub fn save(&mut self, doc: Document) -> Document {
        let entry = self.to_entry();
        self.start_time.clear();
        self.total_pitches.clear();
        self.notes.clear();
        doc.with_bullpen(entry)
    }
}

impl Default for BullpenForm {
    fn default() -> Self {
        Self::new(today_iso())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutForm {
    pub date: String,
    pub blocks: Vec<WorkoutBlock>,
    pub rpe: String,
    pub notes: String,
}

impl WorkoutForm {
    pub const DEFAULT_RPE: &'static str = "6";

    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            blocks: vec![WorkoutBlock::new("유산소", 30), WorkoutBlock::new("상체", 30)],
            rpe: Self::DEFAULT_RPE.to_string(),
            notes: String::new(),
        }
    }

    /// Adds an empty block for the user to fill in.
    pub fn add_block(&mut self) {
        self.blocks.push(WorkoutBlock::default());
    }

    pub fn to_entry(&self) -> WorkoutEntry {
        WorkoutEntry {
            date: self.date.clone(),
            blocks: self.blocks.clone(),
            rpe: coerce::rpe(&self.rpe),
            notes: self.notes.clone(),
        }
    }

    /// Appends the entry to `doc` and starts the next workout from a single
    /// cardio block.
    pub fn save(&mut self, doc: Document) -> Document {
        let entry = self.to_entry();
        self.blocks = vec![WorkoutBlock::new("유산소", 30)];
        self.rpe = Self::DEFAULT_RPE.to_string();
        self.notes.clear();
        doc.with_workout(entry)
    }
}

impl Default for WorkoutForm {
    fn default() -> Self {
        Self::new(today_iso())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_form_coerces_and_resets() {
        let mut form = GameForm::new("2024-05-01");
        form.opponent = "LG".to_string();
        form.home_away = HomeAway::Away;
        form.used_inning_from = "7".to_string();
        form.pitches = "22".to_string();
        form.notes = "주자 1,2루".to_string();

        let doc = form.save(Document::empty());

        assert_eq!(doc.games.len(), 1);
        assert_eq!(doc.games[0].pitches, 22);
        assert_eq!(doc.games[0].home_away, HomeAway::Away);
        assert_eq!(form.date, "2024-05-01");
        assert_eq!(form.home_away, HomeAway::Away);
        assert!(form.opponent.is_empty());
        assert!(form.pitches.is_empty());
        assert!(form.notes.is_empty());
    }

    #[test]
    fn game_form_non_numeric_pitches_save_as_zero() {
        let mut form = GameForm::new("2024-05-01");
        form.pitches = "많이".to_string();
        let doc = form.save(Document::empty());
        assert_eq!(doc.games[0].pitches, 0);
    }

    #[test]
    fn bullpen_form_defaults_and_reset() {
        let mut form = BullpenForm::new("2024-05-01");
        assert_eq!(form.context, BullpenContext::PreGame);
        assert_eq!(form.to_entry().intensity_rpe, 5);
        assert_eq!(form.mix, BullpenForm::DEFAULT_MIX);

        form.start_time = "18:20".to_string();
        form.total_pitches = "30".to_string();
        form.intensity_rpe = "8".to_string();
        let doc = form.save(Document::empty());

        assert_eq!(doc.bullpen[0].total_pitches, 30);
        assert_eq!(doc.bullpen[0].intensity_rpe, 8);
        assert!(form.start_time.is_empty());
        assert!(form.total_pitches.is_empty());
        assert_eq!(form.intensity_rpe, "8");
    }

    #[test]
    fn workout_form_blocks_and_reset() {
        let mut form = WorkoutForm::new("2024-05-01");
        assert_eq!(form.blocks.len(), 2);
        form.add_block();
        assert_eq!(form.blocks[2], WorkoutBlock::default());
        form.rpe = "9".to_string();

        let doc = form.save(Document::empty());

        assert_eq!(doc.workouts[0].blocks.len(), 3);
        assert_eq!(doc.workouts[0].rpe, 9);
        assert_eq!(form.blocks, vec![WorkoutBlock::new("유산소", 30)]);
        assert_eq!(form.rpe, WorkoutForm::DEFAULT_RPE);
    }
}
