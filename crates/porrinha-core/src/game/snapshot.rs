use crate::model::guess::Guess;
use crate::model::seat::Seat;
use crate::model::view::GameView;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatState {
    pub name: String,
    pub available: u32,
    #[serde(default)]
    pub guess: Guess,
}

/// In-memory picture of a table between host steps.
///
/// A guess is accepted when it does not exceed the table capacity and no
/// other seat has already called the same total this round.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableSnapshot {
    seats: Vec<SeatState>,
}

impl TableSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seat(mut self, name: impl Into<String>, available: u32) -> Self {
        self.push_seat(name, available);
        self
    }

    pub fn push_seat(&mut self, name: impl Into<String>, available: u32) -> Seat {
        self.seats.push(SeatState {
            name: name.into(),
            available,
            guess: Guess::Pending,
        });
        Seat::new(self.seats.len() - 1)
    }

    pub fn seats(&self) -> &[SeatState] {
        &self.seats
    }

    pub fn set_guess(&mut self, seat: Seat, guess: Guess) {
        if let Some(state) = self.seats.get_mut(seat.index()) {
            state.guess = guess;
        }
    }

    pub fn set_available(&mut self, seat: Seat, available: u32) {
        if let Some(state) = self.seats.get_mut(seat.index()) {
            state.available = available;
        }
    }

    /// Forget every called total; seats sitting out stay out.
    pub fn clear_guesses(&mut self) {
        for state in &mut self.seats {
            if state.guess.is_playing() {
                state.guess = Guess::Pending;
            }
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl GameView for TableSnapshot {
    fn player_count(&self) -> usize {
        self.seats.len()
    }

    fn seat_of(&self, name: &str) -> Option<Seat> {
        self.seats
            .iter()
            .position(|state| state.name == name)
            .map(Seat::new)
    }

    fn revealed_guess(&self, seat: Seat) -> Guess {
        self.seats
            .get(seat.index())
            .map(|state| state.guess)
            .unwrap_or(Guess::NotPlaying)
    }

    fn available_items(&self, seat: Seat) -> u32 {
        self.seats
            .get(seat.index())
            .map(|state| state.available)
            .unwrap_or(0)
    }

    fn is_valid_guess(&self, candidate: u32) -> bool {
        candidate <= self.total_capacity()
            && !self
                .seats
                .iter()
                .any(|state| state.guess == Guess::Called(candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::TableSnapshot;
    use crate::model::guess::Guess;
    use crate::model::seat::Seat;
    use crate::model::view::GameView;

    fn three_seats() -> TableSnapshot {
        TableSnapshot::new()
            .with_seat("ana", 3)
            .with_seat("bruno", 3)
            .with_seat("carla", 2)
    }

    #[test]
    fn capacity_sums_available_items() {
        assert_eq!(three_seats().total_capacity(), 8);
    }

    #[test]
    fn seat_lookup_by_name() {
        let table = three_seats();
        assert_eq!(table.seat_of("bruno"), Some(Seat::new(1)));
        assert_eq!(table.seat_of("dora"), None);
    }

    #[test]
    fn claimed_and_out_of_range_guesses_are_rejected() {
        let mut table = three_seats();
        table.set_guess(Seat::new(0), Guess::Called(4));
        assert!(!table.is_valid_guess(4));
        assert!(!table.is_valid_guess(9));
        assert!(table.is_valid_guess(8));
        assert!(table.is_valid_guess(0));
    }

    #[test]
    fn clear_guesses_keeps_sitting_out_seats() {
        let mut table = three_seats();
        table.set_guess(Seat::new(0), Guess::Called(4));
        table.set_guess(Seat::new(2), Guess::NotPlaying);
        table.clear_guesses();
        assert_eq!(table.revealed_guess(Seat::new(0)), Guess::Pending);
        assert_eq!(table.revealed_guess(Seat::new(2)), Guess::NotPlaying);
    }

    #[test]
    fn unknown_seat_reads_as_not_playing() {
        let table = three_seats();
        assert_eq!(table.revealed_guess(Seat::new(9)), Guess::NotPlaying);
        assert_eq!(table.available_items(Seat::new(9)), 0);
    }

    #[test]
    fn snapshot_roundtrip_restores_guesses() {
        let mut table = three_seats();
        table.set_guess(Seat::new(1), Guess::Called(5));
        let json = table.to_json().unwrap();
        assert!(json.contains("\"bruno\""));
        let restored = TableSnapshot::from_json(&json).unwrap();
        assert_eq!(restored, table);
    }

    #[test]
    fn snapshot_from_json_defaults_missing_guess_to_pending() {
        let legacy = r#"{
            "seats": [
                { "name": "ana", "available": 3 },
                { "name": "bruno", "available": 1, "guess": "not_playing" }
            ]
        }"#;
        let table = TableSnapshot::from_json(legacy).unwrap();
        assert_eq!(table.revealed_guess(Seat::new(0)), Guess::Pending);
        assert_eq!(table.revealed_guess(Seat::new(1)), Guess::NotPlaying);
        assert_eq!(table.total_capacity(), 4);
    }
}
