//! Command-line front end for the growth Euler stepper.
//!
//! Parses the five run parameters, runs the stepper, and prints the step
//! table with an accuracy summary (or JSON with `--json`).

mod render;

use anyhow::{Context, Result};
use clap::Parser;
use growth_stepper::{Config, Parameters, Thresholds, analytical, run_observed};
use tracing::{Level, info};

#[derive(Parser)]
#[command(name = "growth")]
#[command(about = "Approximate dy/dx = k·y with Euler's method", long_about = None)]
struct Cli {
    /// Proportionality constant
    #[arg(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
    k: f64,

    /// Initial x value
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    x0: f64,

    /// Initial y value
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    y0: f64,

    /// Target x value
    #[arg(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
    target: f64,

    /// Step size (negative to walk toward a smaller target)
    #[arg(short = 's', long = "step", default_value_t = 0.1, allow_negative_numbers = true)]
    h: f64,

    /// Maximum number of steps a run may take
    #[arg(long)]
    max_steps: Option<usize>,

    /// Upper relative error (%) for the "excellent" band
    #[arg(long, default_value_t = 1.0)]
    excellent: f64,

    /// Upper relative error (%) for the "good" band
    #[arg(long, default_value_t = 5.0)]
    good: f64,

    /// Upper relative error (%) for the "fair" band
    #[arg(long, default_value_t = 15.0)]
    fair: f64,

    /// Also sample the exact solution at this many points
    #[arg(long)]
    curve: Option<usize>,

    /// Print the result as JSON (non-finite values appear as "inf", "-inf" or "NaN")
    #[arg(long)]
    json: bool,

    /// Verbosity level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn", value_parser = clap::value_parser!(Level))]
    log_level: Level,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .init();

    let params = Parameters::new(cli.k, cli.x0, cli.y0, cli.target, cli.h);
    let config = match cli.max_steps {
        Some(max_steps) => Config::new(max_steps).context("invalid --max-steps")?,
        None => Config::default(),
    };
    let thresholds = Thresholds::new(cli.excellent, cli.good, cli.fair)
        .context("invalid accuracy thresholds")?;

    info!(?params, "running Euler stepper");
    let solution = run_observed(&params, &config, ()).context("Euler run failed")?;
    let accuracy = solution.accuracy(&thresholds);

    if cli.json {
        let curve = cli.curve.map(|samples| analytical::curve(&params, samples));
        let report = render::Report {
            parameters: params,
            solution: &solution,
            accuracy,
            recommendation: accuracy.recommendation(),
            curve,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", render::table(&solution));
    println!();
    print!("{}", render::summary(&params, &solution, accuracy));

    if let Some(samples) = cli.curve {
        println!();
        print!("{}", render::curve(&analytical::curve(&params, samples)));
    }

    Ok(())
}
