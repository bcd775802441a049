use porrinha_core::{GameView, Guess, Seat};
use serde::{Deserialize, Serialize};

/// Verdict on how an opponent tends to guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Guesses cluster around the middle of the possible totals.
    Centrist,
    /// Guesses show no pull toward the middle.
    Erratic,
}

/// Running evidence about one opponent.
///
/// `internal` and `external` only ever grow within a game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OpponentRecord {
    pub internal: f64,
    pub external: f64,
    pub has_played: bool,
}

impl OpponentRecord {
    pub fn new(internal: f64, external: f64) -> Self {
        Self {
            internal,
            external,
            has_played: true,
        }
    }

    /// Fold one revealed guess into the record.
    ///
    /// `deviation` is 0 when the guess sits on the midpoint of the table
    /// capacity and 1 when it sits on either end.
    pub fn observe(&mut self, guess: u32, total_capacity: u32) {
        // Placeholder statistic, not a validated estimator.
        let midpoint = f64::from(total_capacity) / 2.0;
        let deviation = (midpoint - f64::from(guess)).abs() / midpoint;
        self.internal += deviation;
        self.external += 1.0 - deviation;
        self.has_played = true;
    }

    /// Normalised imbalance between the two accumulators, `None` without evidence.
    pub fn imbalance(&self) -> Option<f64> {
        let mass = self.internal + self.external;
        if mass == 0.0 {
            return None;
        }
        Some((self.internal - self.external).abs() / mass)
    }

    /// Classify the opponent; `None` until it has played with non-zero evidence.
    pub fn verdict(&self, threshold: f64) -> Option<Verdict> {
        if !self.has_played {
            return None;
        }
        let imbalance = self.imbalance()?;
        if imbalance > threshold {
            Some(Verdict::Centrist)
        } else {
            Some(Verdict::Erratic)
        }
    }
}

/// Verdict counts across the active opponents of one decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub gaussian: u32,
    pub erratic: u32,
}

impl Tally {
    pub const fn new(gaussian: u32, erratic: u32) -> Self {
        Self { gaussian, erratic }
    }

    pub fn add(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Centrist => self.gaussian += 1,
            Verdict::Erratic => self.erratic += 1,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.gaussian == 0 && self.erratic == 0
    }
}

/// One record per seat, including our own (which is never read).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpponentStats {
    records: Vec<OpponentRecord>,
}

impl OpponentStats {
    pub fn with_seats(count: usize) -> Self {
        Self {
            records: vec![OpponentRecord::default(); count],
        }
    }

    pub fn from_records(records: Vec<OpponentRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[OpponentRecord] {
        &self.records
    }

    pub fn record(&self, seat: Seat) -> Option<&OpponentRecord> {
        self.records.get(seat.index())
    }

    /// Prepare for a new game of `count` seats.
    ///
    /// Records survive only when `retain` is set and the table size matches.
    /// Returns whether the records were kept.
    pub fn reset_for_game(&mut self, count: usize, retain: bool) -> bool {
        if retain && self.records.len() == count {
            return true;
        }
        *self = Self::with_seats(count);
        false
    }

    /// Count verdicts for opponents that play this round and have history.
    pub fn tally(&self, game: &dyn GameView, own: Seat, threshold: f64) -> Tally {
        let mut tally = Tally::default();
        for seat in Seat::all(game.player_count()) {
            if seat == own {
                continue;
            }
            if !game.revealed_guess(seat).is_playing() {
                continue;
            }
            let Some(record) = self.record(seat) else {
                continue;
            };
            if let Some(verdict) = record.verdict(threshold) {
                tally.add(verdict);
            }
        }
        tally
    }

    /// Fold every called guess of the finished round into the records.
    ///
    /// Returns the number of opponents observed.
    pub fn record_round(&mut self, game: &dyn GameView, own: Seat) -> usize {
        let capacity = game.total_capacity();
        let mut observed = 0;
        for seat in Seat::all(game.player_count()) {
            if seat == own {
                continue;
            }
            let Guess::Called(value) = game.revealed_guess(seat) else {
                continue;
            };
            if let Some(record) = self.records.get_mut(seat.index()) {
                record.observe(value, capacity);
                observed += 1;
            }
        }
        observed
    }
}
