#![deny(unsafe_code)]
//! CLI binary for line integral convolution.
//!
//! Subcommands:
//! - `run <source>`: rasterise a named vector field, convolve a seeded noise
//!   texture along it, and print summary statistics
//! - `list`: print available sources with their parameters

mod error;
mod summary;

use clap::{Parser, Subcommand};
use error::CliError;
use lic_convolve::config::DEFAULT_SEED;
use lic_convolve::filter::DEFAULT_HIGHPASS_SIGMA;
use lic_convolve::{compute_lic_timed, LicConfig};
use lic_core::Boundary;
use lic_sources::{rasterize, Bounds, SourceKind};
use log::debug;
use std::process;
use summary::Summary;

#[derive(Parser)]
#[command(name = "lic", about = "Line integral convolution of analytic vector fields")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convolve a seeded noise texture along a named vector field.
    Run {
        /// Source name (e.g. "vortex").
        source: String,

        /// Grid rows.
        #[arg(short = 'R', long, default_value_t = 256)]
        rows: usize,

        /// Grid columns.
        #[arg(short = 'C', long, default_value_t = 256)]
        cols: usize,

        /// Steps per tracing direction; defaults to min(rows, cols) / 4.
        #[arg(short, long)]
        streamlength: Option<usize>,

        /// Stop streamlines at the grid edge instead of wrapping.
        #[arg(long)]
        open: bool,

        /// PRNG seed for the input texture and noise-based sources [default: 42].
        #[arg(long)]
        seed: Option<u64>,

        /// Worker threads; defaults to the global rayon pool.
        #[arg(long)]
        threads: Option<usize>,

        /// High-pass filter the output; SIGMA is the Gaussian width [default: 3].
        #[arg(long, value_name = "SIGMA")]
        highpass: Option<Option<f64>>,

        /// Source parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Plane region covered by the grid: xmin,xmax,ymin,ymax.
        #[arg(long, allow_hyphen_values = true)]
        bounds: Option<String>,

        /// Base run configuration as a JSON string; explicit flags override it.
        #[arg(long, default_value = "{}")]
        config: String,
    },
    /// List available sources and their parameters.
    List,
}

/// Applies explicitly given command-line flags on top of `config`.
fn overlay_flags(
    mut config: LicConfig,
    streamlength: Option<usize>,
    open: bool,
    seed: Option<u64>,
    threads: Option<usize>,
    highpass: Option<f64>,
) -> LicConfig {
    if streamlength.is_some() {
        config.streamlength = streamlength;
    }
    if open {
        config.boundary = Boundary::Open;
    }
    if let Some(seed) = seed {
        config.seed = seed;
    }
    if let Some(threads) = threads.filter(|&n| n > 0) {
        config.threads = Some(threads);
    }
    if highpass.is_some() {
        config.highpass_sigma = highpass;
    }
    config
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let sources = SourceKind::list_sources();
            let mut schemas = serde_json::Map::new();
            for name in sources {
                let source = SourceKind::from_name(name, DEFAULT_SEED, &serde_json::json!({}))?;
                schemas.insert(name.to_string(), source.param_schema());
            }
            if cli.json {
                let info = serde_json::json!({
                    "sources": sources,
                    "source_params": schemas,
                    "config": LicConfig::param_schema(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Sources:");
                for (name, schema) in &schemas {
                    let keys: Vec<&str> = schema
                        .as_object()
                        .map(|o| o.keys().map(String::as_str).collect())
                        .unwrap_or_default();
                    println!("  {name:<16} {}", keys.join(", "));
                }
            }
        }
        Command::Run {
            source,
            rows,
            cols,
            streamlength,
            open,
            seed,
            threads,
            highpass,
            params,
            bounds,
            config,
        } => {
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
            let config: serde_json::Value = serde_json::from_str(&config)
                .map_err(|e| CliError::Input(format!("invalid --config JSON: {e}")))?;
            let config = overlay_flags(
                LicConfig::from_json(&config),
                streamlength,
                open,
                seed,
                threads,
                highpass.map(|sigma| sigma.unwrap_or(DEFAULT_HIGHPASS_SIGMA)),
            );
            let bounds = match bounds {
                Some(text) => text.parse::<Bounds>()?,
                None => Bounds::default(),
            };

            let field_source = SourceKind::from_name(&source, config.seed, &params)?;
            debug!("rasterising {source} over {bounds} at {rows}x{cols}");
            let vfield = rasterize(&field_source, rows, cols, &bounds)?;

            let result = compute_lic_timed(&vfield, None, &config)?;
            let stats = Summary::of(&result.texture);
            let elapsed_ms = result.elapsed.as_secs_f64() * 1000.0;

            if cli.json {
                let info = serde_json::json!({
                    "source": source,
                    "params": field_source.params(),
                    "bounds": bounds,
                    "rows": rows,
                    "cols": cols,
                    "streamlength": result.streamlength,
                    "boundary": config.boundary,
                    "seed": config.seed,
                    "elapsed_ms": elapsed_ms,
                    "stats": stats,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("source:       {source}");
                println!("size:         {rows}x{cols}");
                println!("streamlength: {}", result.streamlength);
                println!("boundary:     {}", config.boundary);
                println!("elapsed:      {elapsed_ms:.3} ms");
                println!(
                    "min/max/mean: {:.6} / {:.6} / {:.6}",
                    stats.min, stats.max, stats.mean
                );
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn run_defaults() {
        let cli = parse(&["lic", "run", "vortex"]);
        match cli.command {
            Command::Run {
                rows,
                cols,
                streamlength,
                open,
                seed,
                bounds,
                ..
            } => {
                assert_eq!((rows, cols), (256, 256));
                assert_eq!(streamlength, None);
                assert!(!open);
                assert_eq!(seed, None);
                assert!(bounds.is_none());
            }
            Command::List => panic!("expected run"),
        }
    }

    #[test]
    fn negative_bounds_parse_as_value() {
        let cli = parse(&["lic", "run", "saddle", "--bounds", "-2,2,-1,1", "--json"]);
        assert!(cli.json);
        match cli.command {
            Command::Run { bounds, .. } => assert_eq!(bounds.as_deref(), Some("-2,2,-1,1")),
            Command::List => panic!("expected run"),
        }
    }

    #[test]
    fn bare_highpass_flag_takes_no_value() {
        let cli = parse(&["lic", "run", "vortex", "--highpass"]);
        match cli.command {
            Command::Run { highpass, .. } => assert_eq!(highpass, Some(None)),
            Command::List => panic!("expected run"),
        }
        let cli = parse(&["lic", "run", "vortex", "--highpass", "1.5"]);
        match cli.command {
            Command::Run { highpass, .. } => assert_eq!(highpass, Some(Some(1.5))),
            Command::List => panic!("expected run"),
        }
    }

    #[test]
    fn list_succeeds() {
        assert!(run(parse(&["lic", "list"])).is_ok());
        assert!(run(parse(&["lic", "--json", "list"])).is_ok());
    }

    #[test]
    fn small_run_succeeds() {
        let cli = parse(&["lic", "run", "sink", "-R", "12", "-C", "10", "-s", "3", "--open"]);
        assert!(run(cli).is_ok());
    }

    #[test]
    fn unknown_source_exits_10() {
        let cli = parse(&["lic", "run", "whirlpool", "-R", "8", "-C", "8"]);
        assert_eq!(run(cli).err().map(|e| e.exit_code()), Some(10));
    }

    #[test]
    fn bad_params_exit_12() {
        let cli = parse(&["lic", "run", "vortex", "--params", "{nope"]);
        assert_eq!(run(cli).err().map(|e| e.exit_code()), Some(12));
    }

    #[test]
    fn bad_bounds_exit_12() {
        let cli = parse(&["lic", "run", "vortex", "--bounds", "1,0,0,1"]);
        assert_eq!(run(cli).err().map(|e| e.exit_code()), Some(12));
    }

    #[test]
    fn bad_config_exits_12() {
        let cli = parse(&["lic", "run", "vortex", "--config", "[1,"]);
        assert_eq!(run(cli).err().map(|e| e.exit_code()), Some(12));
    }

    #[test]
    fn flags_override_config_json() {
        let base = LicConfig::from_json(&serde_json::json!({
            "boundary": "open",
            "seed": 7,
            "streamlength": 5,
            "rows_per_task": 8
        }));
        let cfg = overlay_flags(base.clone(), None, false, None, None, None);
        assert_eq!(cfg, base);

        let cfg = overlay_flags(base, Some(2), false, Some(9), Some(0), Some(1.5));
        assert_eq!(cfg.streamlength, Some(2));
        assert_eq!(cfg.boundary, Boundary::Open);
        assert_eq!(cfg.seed, 9);
        assert_eq!(cfg.threads, None);
        assert_eq!(cfg.highpass_sigma, Some(1.5));
        assert_eq!(cfg.rows_per_task, 8);
    }

    #[test]
    fn zero_rows_is_a_computation_error() {
        let cli = parse(&["lic", "run", "uniform", "-R", "0"]);
        assert_eq!(run(cli).err().map(|e| e.exit_code()), Some(10));
    }
}
