use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs, path::PathBuf};

use solver_log_stats::best_known::{self, BestFound};

#[derive(Serialize, Deserialize, Debug, Clone)]
struct BestKnownTableConfig {
    /// Files with `<instance> <objective>` lines
    best_known: Vec<PathBuf>,
    /// Result files with `improved` lines
    best_found: Vec<PathBuf>,
    /// Factor applied to the found objectives before printing
    #[serde(default = "default_scale")]
    scale: f64,
}

fn default_scale() -> f64 {
    10.0
}

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to the json config
    #[arg(short, long)]
    pub config: PathBuf,
    #[command(flatten)]
    pub verbosity: Verbosity,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();
    let config: BestKnownTableConfig = serde_json::from_str(
        &fs::read_to_string(&args.config)
            .with_context(|| format!("failed to read {:?}", args.config))?,
    )?;

    let mut known = BTreeMap::new();
    for path in &config.best_known {
        known.extend(best_known::read_best_known(path)?);
    }
    let mut best_found = BestFound::new();
    for path in &config.best_found {
        info!("reading solutions from {path:?}");
        if let Err(err) = best_found.record_file(path) {
            warn!("skipping {path:?}: {err}");
        }
    }
    info!("{} improved instances", best_found.len());

    for row in best_known::improvement_rows(&best_found, &known, config.scale)
    {
        println!("{row}");
    }
    Ok(())
}
