//! Analyzer implementations that combine char filters, a segmenter and token filters.

#[allow(clippy::module_inception)]
mod analyzer;
mod pipeline;

pub use analyzer::Analyzer;
pub use pipeline::PipelineAnalyzer;
