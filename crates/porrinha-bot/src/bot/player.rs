use super::params::{DerandomParams, details_logging_enabled};
use super::search::search_guess;
use super::sink::{NullSink, RationaleSink};
use super::stats::{OpponentRecord, OpponentStats, Tally};
use crate::policy::{HandDecision, choose_hand};
use porrinha_core::{GameView, Player, PlayerError, Seat};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{Level, event};

/// Player that sorts opponents into centrist and erratic guessers and
/// commits its hand to work against the majority.
pub struct DerandomPlayer {
    seed: u64,
    name: String,
    params: DerandomParams,
    rng: StdRng,
    own_seat: Option<Seat>,
    stats: OpponentStats,
    tally: Tally,
    chosen_hand: u32,
    sink: Box<dyn RationaleSink>,
}

impl DerandomPlayer {
    pub fn new(seed: u64, name: impl Into<String>, retain_history: bool) -> Self {
        Self::with_params(
            seed,
            name,
            DerandomParams::default().with_retain_history(retain_history),
        )
    }

    pub fn with_params(seed: u64, name: impl Into<String>, params: DerandomParams) -> Self {
        Self {
            seed,
            name: name.into(),
            params,
            rng: StdRng::seed_from_u64(seed),
            own_seat: None,
            stats: OpponentStats::default(),
            tally: Tally::default(),
            chosen_hand: 0,
            sink: Box::new(NullSink),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn params(&self) -> &DerandomParams {
        &self.params
    }

    pub fn retain_history(&self) -> bool {
        self.params.retain_history
    }

    pub fn own_seat(&self) -> Option<Seat> {
        self.own_seat
    }

    pub fn records(&self) -> &[OpponentRecord] {
        self.stats.records()
    }

    pub fn stats(&self) -> &OpponentStats {
        &self.stats
    }

    /// Tally computed for the latest hand decision.
    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn chosen_hand(&self) -> u32 {
        self.chosen_hand
    }

    /// Swap the rationale sink, handing back the previous one.
    pub fn set_sink(&mut self, sink: Box<dyn RationaleSink>) -> Box<dyn RationaleSink> {
        std::mem::replace(&mut self.sink, sink)
    }

    pub fn sink(&self) -> &dyn RationaleSink {
        self.sink.as_ref()
    }

    fn seat(&self) -> Result<Seat, PlayerError> {
        self.own_seat.ok_or(PlayerError::GameNotStarted)
    }

    fn log_classification(&self, game: &dyn GameView, own: Seat) {
        if !tracing::enabled!(Level::DEBUG) || !details_logging_enabled() {
            return;
        }
        for seat in Seat::all(game.player_count()) {
            if seat == own {
                continue;
            }
            let Some(record) = self.stats.record(seat) else {
                continue;
            };
            event!(
                target: "porrinha_bot::classify",
                Level::DEBUG,
                player = %self.name,
                opponent = %seat,
                guess = %game.revealed_guess(seat),
                internal = record.internal,
                external = record.external,
                has_played = record.has_played,
                verdict = ?record.verdict(self.params.centrist_threshold),
            );
        }
    }
}

impl Player for DerandomPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn begin_game(&mut self, game: &dyn GameView) -> Result<(), PlayerError> {
        let seat = game
            .seat_of(&self.name)
            .ok_or_else(|| PlayerError::UnknownPlayer {
                name: self.name.clone(),
            })?;
        self.own_seat = Some(seat);
        let retained = self
            .stats
            .reset_for_game(game.player_count(), self.params.retain_history);
        event!(
            target: "porrinha_bot::round",
            Level::DEBUG,
            player = %self.name,
            seat = %seat,
            players = game.player_count(),
            retained,
            "begin game"
        );
        Ok(())
    }

    fn choose_hand(&mut self, game: &dyn GameView) -> Result<u32, PlayerError> {
        let seat = self.seat()?;
        self.log_classification(game, seat);
        self.tally = self
            .stats
            .tally(game, seat, self.params.centrist_threshold);
        let available = game.available_items(seat);
        let HandDecision { hand, branch } = choose_hand(self.tally, available, &mut self.rng);
        self.sink
            .report(&format!("[{}]: {}", self.name, branch.rationale()));
        event!(
            target: "porrinha_bot::hand",
            Level::INFO,
            player = %self.name,
            seat = %seat,
            gaussian = self.tally.gaussian,
            erratic = self.tally.erratic,
            available,
            branch = branch.as_str(),
            hand,
        );
        self.chosen_hand = hand;
        Ok(hand)
    }

    fn choose_guess(&mut self, game: &dyn GameView) -> Result<u32, PlayerError> {
        let seat = self.seat()?;
        let available = game.available_items(seat);
        let capacity = game.total_capacity();
        let result = search_guess(
            self.chosen_hand,
            available,
            capacity,
            self.params.max_search_attempts,
            |candidate| game.is_valid_guess(candidate),
        );
        match &result {
            Ok(guess) => event!(
                target: "porrinha_bot::guess",
                Level::INFO,
                player = %self.name,
                seat = %seat,
                hand = self.chosen_hand,
                capacity,
                guess = *guess,
            ),
            Err(err) => tracing::warn!(
                target: "porrinha_bot::guess",
                player = %self.name,
                seat = %seat,
                hand = self.chosen_hand,
                capacity,
                error = %err,
                message = "guess search exhausted"
            ),
        }
        result
    }

    fn end_round(&mut self, game: &dyn GameView) -> Result<(), PlayerError> {
        let seat = self.seat()?;
        if game.total_capacity() == 0 {
            tracing::warn!(
                target: "porrinha_bot::round",
                player = %self.name,
                message = "skipping statistics update on zero capacity table"
            );
            return Err(PlayerError::ZeroCapacity);
        }
        let observed = self.stats.record_round(game, seat);
        event!(
            target: "porrinha_bot::round",
            Level::DEBUG,
            player = %self.name,
            observed,
            "end round"
        );
        Ok(())
    }
}
