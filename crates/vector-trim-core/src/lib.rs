//! Vector Trim Core Library
//!
//! This crate shrinks JSON test-vector files to one test per test group and
//! writes a bzip2-compressed copy next to each trimmed file.

pub mod algorithm;
pub mod compression;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod store;
pub mod vectors;

pub use algorithm::Algorithm;
pub use config::Config;
pub use error::{Error, Result, ShapeError, Stage};
pub use pipeline::{AlgorithmReport, RunSummary};
pub use store::VectorStore;
pub use vectors::{keep_index, trim, TestGroup, TrimStats, VectorFile, VectorSet, KEEP_INDEX};
