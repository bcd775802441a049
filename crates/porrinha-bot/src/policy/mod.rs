mod hand;

pub use hand::{HandBranch, HandDecision, choose_hand};
