// Idea Generation Engine
// Table lookups, relevance tie-breaking, ML metadata and starter templates.
// Pure and synchronous; the only I/O on the generation path is the detached audit write.

pub mod generator;
pub mod handlers;
pub mod ml;
pub mod scoring;
pub mod stack;
pub mod tables;
pub mod templates;
