#![deny(warnings)]
pub mod game;
pub mod model;

pub use game::error::PlayerError;
pub use game::snapshot::TableSnapshot;
pub use model::guess::Guess;
pub use model::player::Player;
pub use model::seat::Seat;
pub use model::view::GameView;
