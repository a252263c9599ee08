//! # verity-graph
//!
//! Traces how a claim propagates and mutates across related claims via a
//! bounded breadth-first traversal of the store's neighbor relation, and
//! classifies each edge's relationship.

pub mod tracer;

pub use tracer::GraphTracer;
