//! Batch ranking of candidate answers.
//!
//! Every answer is evaluated independently, then the batch is stable-sorted by score,
//! highest first. Answers with equal scores keep their input order.

pub mod ranker;
pub mod types;


pub use ranker::rank_candidates;
pub use types::RankedCandidate;
