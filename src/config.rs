use std::{collections::BTreeMap, fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use serde::{Deserialize, Serialize};

use crate::baseline::BaselineTable;
use crate::instance_index::MergePolicy;

/// Settings of a report run, read from JSON and overridden by [`Args`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Solver log files to aggregate
    pub files: Vec<PathBuf>,
    /// Plot data is only written if set
    #[serde(default)]
    pub out_dir: Option<PathBuf>,
    /// Solver name → label used in tables and plots
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    /// JSON baseline table, the LNS-FFPA results if missing
    #[serde(default)]
    pub baseline: Option<PathBuf>,
    /// Restrict baseline tables to one class
    #[serde(default)]
    pub instance_class: Option<char>,
    /// Digits after the point in tables
    #[serde(default = "default_decimals")]
    pub decimals: usize,
    /// Table caption
    #[serde(default = "default_caption")]
    pub caption: String,
    /// How duplicate (instance, solver) logs are resolved
    #[serde(default)]
    pub merge_policy: MergePolicy,
    /// Write convergence plot data
    #[serde(default = "default_plots")]
    pub plots: bool,
}

impl Config {
    /// Read the config file named by `args` and apply its overrides.
    pub fn from_cli(args: &Args) -> Result<Config> {
        let config_path = &args.config;
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("failed to read {config_path:?}"))?;
        let mut config: Config = serde_json::from_str(&config_str)?;
        if let Some(files) = &args.files {
            config.files = files.to_vec();
        }
        if let Some(out_dir) = &args.out_dir {
            config.out_dir = Some(out_dir.to_path_buf());
        }
        if let Some(baseline) = &args.baseline {
            config.baseline = Some(baseline.to_path_buf());
        }
        if let Some(instance_class) = args.instance_class {
            config.instance_class = Some(instance_class);
        }
        if let Some(decimals) = args.decimals {
            config.decimals = decimals;
        }
        if args.no_plots {
            config.plots = false;
        }
        config.validate()?;
        Ok(config)
    }

    /// The configured baseline table, the LNS-FFPA results if none is set.
    pub fn load_baseline(&self) -> Result<BaselineTable> {
        match &self.baseline {
            Some(path) => BaselineTable::from_json(path)
                .with_context(|| format!("invalid baseline {path:?}")),
            None => Ok(BaselineTable::lns_ffpa()),
        }
    }

    /// Reject configurations without input files or with a bad class.
    pub fn validate(&self) -> Result<()> {
        if self.files.is_empty() {
            anyhow::bail!("no log files given");
        }
        if let Some(class) = self.instance_class {
            if !class.is_ascii_lowercase() {
                anyhow::bail!("instance class must be a letter, got {class}");
            }
        }
        Ok(())
    }
}

fn default_decimals() -> usize {
    2
}

fn default_caption() -> String {
    "5 minutes run".to_string()
}

fn default_plots() -> bool {
    true
}

/// Command line arguments, each one overriding the config file.
#[derive(Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Path to the json config
    #[arg(short, long)]
    pub config: PathBuf,
    /// Solver log files, named <class><vehicles>-<requests>_<tag>.txt
    #[arg(short, long, value_delimiter = ' ', num_args = 0..)]
    pub files: Option<Vec<PathBuf>>,
    /// Directory the plot data is written to
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
    /// JSON file with the (mean, best) results of the reference solver
    #[arg(short, long, value_name = "FILE")]
    pub baseline: Option<PathBuf>,
    /// Only compare instances of this class (a or b)
    #[arg(short, long, value_name = "CLASS")]
    pub instance_class: Option<char>,
    /// Number of decimals in the tables
    #[arg(short, long)]
    pub decimals: Option<usize>,
    /// Do not write plot data
    #[arg(long)]
    pub no_plots: bool,
    /// Log level
    #[command(flatten)]
    pub verbosity: Verbosity,
}

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::instance_index::MergePolicy;
    use std::{env, fs, path::PathBuf};

    #[test]
    fn test_config_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"files": ["a5-48_insertion_0.txt"]}"#)
                .unwrap();
        assert_eq!(config.decimals, 2);
        assert_eq!(config.caption, "5 minutes run");
        assert_eq!(config.merge_policy, MergePolicy::LastWriteWins);
        assert!(config.plots);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let config: Config = serde_json::from_str(
            r#"{"files": [], "instance_class": "a", "merge_policy": "keep_first"}"#,
        )
        .unwrap();
        assert_eq!(config.merge_policy, MergePolicy::KeepFirst);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_baseline() {
        let mut config: Config =
            serde_json::from_str(r#"{"files": ["a5-48_insertion_0.txt"]}"#)
                .unwrap();
        assert_eq!(config.load_baseline().unwrap().solver, "LNS-FFPA");

        config.baseline =
            Some(PathBuf::from("data/test/does_not_exist/baseline.json"));
        assert!(config.load_baseline().is_err());

        let path = env::temp_dir().join("solver_log_stats_bad_baseline.json");
        fs::write(&path, "{\"solver\": \"ref\"}").unwrap();
        config.baseline = Some(path);
        assert!(config.load_baseline().is_err());
    }
}
