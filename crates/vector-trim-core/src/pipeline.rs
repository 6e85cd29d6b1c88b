//! Per-algorithm trimming pipeline and the sequential run loop.
//!
//! Each algorithm goes through read, trim, write and compress. The first
//! failure stops the run: earlier algorithms stay fully written and later
//! ones are never opened.

use std::path::PathBuf;

use tracing::info;

use crate::compression;
use crate::error::Stage;
use crate::store::VectorStore;
use crate::vectors::{self, TrimStats};
use crate::{Algorithm, Config, Error, Result};

/// Outcome of trimming one algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmReport {
    pub algorithm: Algorithm,
    pub trimmed_path: PathBuf,
    pub compressed_path: PathBuf,
    pub original_bytes: usize,
    pub trimmed_bytes: usize,
    pub stats: TrimStats,
}

/// Outcome of a whole run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub algorithms: Vec<AlgorithmReport>,
}

impl RunSummary {
    pub fn total_groups(&self) -> usize {
        self.algorithms.iter().map(|r| r.stats.groups).sum()
    }

    pub fn total_tests_removed(&self) -> usize {
        self.algorithms.iter().map(|r| r.stats.tests_removed()).sum()
    }
}

/// Trim and compress every configured algorithm in order.
pub fn run(config: &Config) -> Result<RunSummary> {
    let store = VectorStore::new(&config.vectors_dir);
    let mut summary = RunSummary::default();

    for algorithm in &config.algorithms {
        let report = process(&store, algorithm)?;
        summary.algorithms.push(report);
    }

    info!(
        "Trimmed {} algorithm(s): {} groups, {} tests removed",
        summary.algorithms.len(),
        summary.total_groups(),
        summary.total_tests_removed()
    );
    Ok(summary)
}

/// Trim and compress a single algorithm's vector file.
pub fn process(store: &VectorStore, algorithm: &Algorithm) -> Result<AlgorithmReport> {
    info!("trimming algorithm: {:?}", algorithm.as_str());

    let failed_at = |stage: Stage| {
        move |source: Error| Error::Algorithm {
            algorithm: algorithm.to_string(),
            stage,
            source: Box::new(source),
        }
    };

    let original = store.read(algorithm).map_err(failed_at(Stage::Reading))?;
    let (trimmed, stats) =
        vectors::trim_with_stats(&original).map_err(failed_at(Stage::Trimming))?;
    let trimmed_path = store
        .write_trimmed(algorithm, &trimmed)
        .map_err(failed_at(Stage::Writing))?;
    let compressed_path =
        compression::write_bz2(&trimmed_path, &trimmed).map_err(failed_at(Stage::Compressing))?;

    info!(
        algorithm = algorithm.as_str(),
        groups = stats.groups,
        tests_removed = stats.tests_removed(),
        "Trimmed {} -> {} bytes",
        original.len(),
        trimmed.len()
    );

    Ok(AlgorithmReport {
        algorithm: algorithm.clone(),
        trimmed_path,
        compressed_path,
        original_bytes: original.len(),
        trimmed_bytes: trimmed.len(),
        stats,
    })
}
