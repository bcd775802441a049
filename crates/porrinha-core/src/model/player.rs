use super::view::GameView;
use crate::game::error::PlayerError;

/// Host-facing surface of an automated participant.
///
/// The host drives the calls in order: `begin_game` once, then for every
/// round `choose_hand`, `choose_guess` and `end_round`, and finally
/// `end_game`.
pub trait Player {
    fn name(&self) -> &str;

    fn begin_game(&mut self, game: &dyn GameView) -> Result<(), PlayerError>;

    /// Items this player privately commits for the round.
    fn choose_hand(&mut self, game: &dyn GameView) -> Result<u32, PlayerError>;

    /// Public call of the round total; must be accepted by `is_valid_guess`.
    fn choose_guess(&mut self, game: &dyn GameView) -> Result<u32, PlayerError>;

    /// Invoked once every guess of the round has been revealed.
    fn end_round(&mut self, game: &dyn GameView) -> Result<(), PlayerError>;

    fn end_game(&mut self, _game: &dyn GameView) {}
}
