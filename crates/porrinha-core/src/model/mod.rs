pub mod guess;
pub mod player;
pub mod seat;
pub mod view;
