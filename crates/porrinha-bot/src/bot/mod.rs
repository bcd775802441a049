mod params;
mod player;
mod search;
mod sink;
mod stats;

pub use params::DerandomParams;
pub use player::DerandomPlayer;
pub use search::{OutwardCandidates, center_of, search_guess, total_range};
pub use sink::{MemorySink, NullSink, RationaleSink, TracingSink, WriterSink};
pub use stats::{OpponentRecord, OpponentStats, Tally, Verdict};
