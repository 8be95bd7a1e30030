//! Registry Lookup Demo
//!
//! Walks the experiment configuration surface the way the pipeline
//! drivers do: enumerate seasons, resolve file naming for each, and show
//! the diagnostic for an unconfigured year.
//!
//! Run with: cargo run --example registry_lookup

use duernast_config::experiment::{get_config, list_available_experiments};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Duernast Experiment Registry ===\n");

    // -------------------------------------------------------------------------
    // 1. Enumerate configured seasons
    // -------------------------------------------------------------------------
    println!("1. Available experiments...");

    let years = list_available_experiments();
    println!("   Years: {years:?}");

    // -------------------------------------------------------------------------
    // 2. Resolve file naming per season
    // -------------------------------------------------------------------------
    println!("\n2. Resolving configurations...");

    for year in years {
        let config = get_config(year).expect("listed year is configured");
        println!("   {} ({})", config.experiment_name(), config.crop_type());
        println!("      input prefix:  {}", config.file_prefix());
        println!("      output prefix: {}", config.output_prefix());
        println!("      directory:     {}", config.experiment_dir());
        match config.additional_weather_file() {
            Some(file) => println!("      extra weather: {file}"),
            None => println!("      extra weather: (single-year)"),
        }
    }

    // -------------------------------------------------------------------------
    // 3. Lookup miss diagnostics
    // -------------------------------------------------------------------------
    println!("\n3. Looking up an unconfigured year...");

    match get_config(1999) {
        Ok(_) => unreachable!("1999 is not configured"),
        Err(err) => println!("   {err}"),
    }
}
