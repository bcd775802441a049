pub mod bot;
pub mod policy;

pub use bot::{
    DerandomParams, DerandomPlayer, MemorySink, NullSink, OpponentRecord, OpponentStats,
    OutwardCandidates, RationaleSink, Tally, TracingSink, Verdict, WriterSink,
};
pub use policy::{HandBranch, HandDecision, choose_hand};
