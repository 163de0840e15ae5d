//! Record collection entries.
//!
//! Each collection is append-only: entries are created by a form's save action
//! and never edited or removed afterwards. Collections keep insertion order;
//! views sort them with [`latest_first`].

mod bullpen;
mod game;
mod workout;

pub use bullpen::{BullpenContext, BullpenEntry};
pub use game::{GameEntry, HomeAway};
pub use workout::{WorkoutBlock, WorkoutEntry};

/// Entries that carry an ISO `YYYY-MM-DD` date.
pub trait Dated {
    fn date(&self) -> &str;
}

/// Returns the entries sorted by date, most recent first.
///
/// The sort is stable, so entries sharing a date stay in insertion order.
pub fn latest_first<T: Dated>(entries: &[T]) -> Vec<&T> {
    let mut sorted: Vec<&T> = entries.iter().collect();
    sorted.sort_by(|a, b| b.date().cmp(a.date()));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(date: &str, opponent: &str) -> GameEntry {
        GameEntry {
            date: date.to_string(),
            opponent: opponent.to_string(),
            ..GameEntry::default()
        }
    }

    #[test]
    fn latest_first_orders_by_date_descending() {
        let games = vec![
            game("2024-05-01", "LG"),
            game("2024-05-03", "KT"),
            game("2024-04-30", "SSG"),
        ];

        let dates: Vec<&str> = latest_first(&games).iter().map(|g| g.date()).collect();
        assert_eq!(dates, ["2024-05-03", "2024-05-01", "2024-04-30"]);
    }

    #[test]
    fn latest_first_keeps_insertion_order_within_a_date() {
        let games = vec![game("2024-05-01", "LG"), game("2024-05-01", "KT")];

        let opponents: Vec<&str> = latest_first(&games)
            .iter()
            .map(|g| g.opponent.as_str())
            .collect();
        assert_eq!(opponents, ["LG", "KT"]);
    }
}
