//! Request routing heuristics
//!
//! Pure text heuristics deciding which agents claim a request and how
//! strongly each candidate matches it. No I/O, no state.

pub mod keywords;
pub mod score;
