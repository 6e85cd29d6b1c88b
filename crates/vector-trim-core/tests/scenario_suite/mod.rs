//! Scenario tests for vector-trim-core.

pub mod run;
