use super::guess::Guess;
use super::seat::Seat;

/// Read-only view of the game a player is seated at.
///
/// The host hands this to the player on every call; players never hold on
/// to it between calls.
pub trait GameView {
    /// Number of seats at the table, including seats sitting a round out.
    fn player_count(&self) -> usize;

    /// Seat occupied by the player with the given display name.
    fn seat_of(&self, name: &str) -> Option<Seat>;

    /// Guess revealed by `seat` in the current round.
    fn revealed_guess(&self, seat: Seat) -> Guess;

    /// Items `seat` still has available to commit.
    fn available_items(&self, seat: Seat) -> u32;

    /// Sum of every seat's available items, saturating at `u32::MAX`.
    fn total_capacity(&self) -> u32 {
        Seat::all(self.player_count())
            .map(|seat| self.available_items(seat))
            .fold(0u32, u32::saturating_add)
    }

    /// Whether the host would accept `candidate` as a guess right now.
    fn is_valid_guess(&self, candidate: u32) -> bool;
}
