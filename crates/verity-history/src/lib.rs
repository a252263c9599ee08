//! # verity-history
//!
//! Converts a claim plus its evidence and related claims into a
//! chronological trust trajectory, a merged timeline, and narrative
//! summaries. Pure computation; performs no I/O.

pub mod builder;
pub mod provenance;

pub use builder::HistoryBuilder;
