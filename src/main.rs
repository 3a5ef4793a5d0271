use anyhow::Result;
use clap::Parser;
use log::{error, info, warn};
use std::fs;

use solver_log_stats::config::{Args, Config};
use solver_log_stats::{plot, run_collector, summary, table};

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();
    let config = match Config::from_cli(&args) {
        Ok(config) => config,
        Err(err) => {
            error!("invalid configuration: {err:#}");
            std::process::exit(exitcode::CONFIG);
        }
    };
    let baseline = match config.load_baseline() {
        Ok(baseline) => baseline,
        Err(err) => {
            error!("invalid configuration: {err:#}");
            std::process::exit(exitcode::CONFIG);
        }
    };

    let index = run_collector::collect_files(&config.files, config.merge_policy);
    info!("parsed {} instances", index.len());
    for summary in summary::summarize_index(&index) {
        info!("{summary}");
    }

    for solver in index.solvers() {
        let label = config.labels.get(solver).unwrap_or(solver);
        let values = summary::result_set(&index, solver);
        match table::build_table_vs_baseline(
            label,
            &values,
            &baseline,
            config.instance_class,
        ) {
            Ok(comparison) => println!(
                "{}",
                comparison.latex(&config.caption, config.decimals)
            ),
            Err(err) => warn!("no table for {label}: {err}"),
        }
    }

    let Some(out_dir) = config.out_dir.as_ref().filter(|_| config.plots) else {
        return Ok(());
    };
    fs::create_dir_all(out_dir)?;
    for (instance, solvers) in index.iter() {
        match plot::best_run_figure(instance, solvers, &config.labels) {
            Ok(figure) => {
                plot::write_figure(out_dir, &instance.to_string(), &figure)?;
            }
            Err(err) => warn!("no best run plot for {instance}: {err}"),
        }
        for (solver, result) in solvers {
            let label = config.labels.get(solver).unwrap_or(solver);
            match plot::all_runs_figure(instance, solver, result, &config.labels)
            {
                Ok(figure) => {
                    let name = plot::figure_file_name(instance, label);
                    plot::write_figure(out_dir, &name, &figure)?;
                }
                Err(err) => warn!("no plot of {label} on {instance}: {err}"),
            }
        }
    }
    Ok(())
}
