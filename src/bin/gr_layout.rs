//! Lay out a goods receipt from a JSON job file.
//!
//! Writes the recorded drawing instructions (three pages) as JSON.
//!
//! Usage:
//!   cargo run --release --bin gr_layout -- job.json
//!   cargo run --release --bin gr_layout -- job.json --logo logo.png --output gr.json
//!   cargo run --release --bin gr_layout -- job.json --config layout.json --date 2024-01-05 -v

use chrono::NaiveDate;
use gr_layout::{DocumentLayoutEngine, Error, GrJob, LayoutConfig};
use std::fs;
use std::path::PathBuf;

struct CliConfig {
    job: PathBuf,
    layout: Option<PathBuf>,
    logo: Option<String>,
    output: Option<PathBuf>,
    date: Option<NaiveDate>,
    verbose: bool,
}

const USAGE: &str = "Usage: gr_layout <job.json> [--config cfg.json] [--logo file.png|data:URI] \
                     [--output out.json] [--date YYYY-MM-DD] [--verbose]";

impl CliConfig {
    fn from_args() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().collect();
        let mut job = None;
        let mut layout = None;
        let mut logo = None;
        let mut output = None;
        let mut date = None;
        let mut verbose = false;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--config" | "--logo" | "--output" | "-o" | "--date" => {
                    let flag = args[i].as_str();
                    i += 1;
                    let value = args
                        .get(i)
                        .ok_or_else(|| format!("{} needs a value", flag))?;
                    match flag {
                        "--config" => layout = Some(PathBuf::from(value)),
                        "--logo" => logo = Some(value.clone()),
                        "--date" => {
                            let parsed = NaiveDate::parse_from_str(value, "%Y-%m-%d")
                                .map_err(|e| format!("Invalid --date {:?}: {}", value, e))?;
                            date = Some(parsed);
                        },
                        _ => output = Some(PathBuf::from(value)),
                    }
                },
                "--verbose" | "-v" => {
                    verbose = true;
                },
                "--help" | "-h" => return Err(USAGE.to_string()),
                arg if arg.starts_with('-') => return Err(format!("Unknown option {}", arg)),
                arg => {
                    if job.replace(PathBuf::from(arg)).is_some() {
                        return Err("Only one job file may be given".to_string());
                    }
                },
            }
            i += 1;
        }

        Ok(Self {
            job: job.ok_or_else(|| USAGE.to_string())?,
            layout,
            logo,
            output,
            date,
            verbose,
        })
    }
}

fn run(cli: &CliConfig) -> Result<usize, Error> {
    let config = match &cli.layout {
        Some(path) => LayoutConfig::from_json_str(&fs::read_to_string(path)?)?,
        None => LayoutConfig::default(),
    };
    let mut engine = DocumentLayoutEngine::new(config);
    if let Some(logo) = &cli.logo {
        engine = engine.with_logo(logo);
    }

    let job = GrJob::from_path(&cli.job)?;
    let document = match cli.date {
        Some(today) => engine.generate_on(&job.request, job.details(), today)?,
        None => engine.generate(&job.request, job.details())?,
    };

    let json = document.to_json()?;
    match &cli.output {
        Some(path) => fs::write(path, json)?,
        None => println!("{}", json),
    }
    Ok(document.page_count())
}

fn main() {
    let cli = match CliConfig::from_args() {
        Ok(cli) => cli,
        Err(msg) => {
            eprintln!("{}", msg);
            std::process::exit(1);
        },
    };

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(&cli) {
        Ok(pages) => {
            if let Some(path) = &cli.output {
                eprintln!("✓ Wrote {} page(s) to {}", pages, path.display());
            }
        },
        Err(e) => {
            eprintln!("✗ Error: {}", e);
            std::process::exit(1);
        },
    }
}
