use anyhow::Result;
use tracing::info;
use vector_trim_core::{pipeline, Config};

pub fn run(algorithms: &str, vectors_dir: &str) -> Result<()> {
    let config = Config::from_algorithms_flag(algorithms, vectors_dir)?;

    info!(
        "Trimming {} algorithm(s) in {}",
        config.algorithms.len(),
        config.vectors_dir.display()
    );

    let summary = pipeline::run(&config)?;

    for report in &summary.algorithms {
        println!(
            "{}: {} groups, {} -> {} bytes ({})",
            report.algorithm,
            report.stats.groups,
            report.original_bytes,
            report.trimmed_bytes,
            report.compressed_path.display()
        );
    }

    info!("Trimming completed successfully");
    Ok(())
}
