//! `rainorshine` CLI
//!
//! Classifies condition codes and turns provider payloads into visual selections.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use rainorshine::models::{ConditionCode, HourlyVisual, Units, UvBand, WeatherResponse};
use rainorshine::{Classification, RainOrShineConfig, RainOrShineError, VisualState, explain};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// RainOrShine weather visuals
#[derive(Parser)]
#[command(name = "rainorshine")]
#[command(author, version, about = "Weather condition classification and visual selection", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single condition code
    Classify {
        /// Provider condition code
        #[arg(allow_negative_numbers = true)]
        code: i32,

        /// Use the night-time tint
        #[arg(long)]
        night: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Render visuals for a provider payload (reads stdin without --file)
    Render {
        /// Payload file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Override configured units (metric or imperial)
        #[arg(long)]
        units: Option<Units>,

        /// Override configured number of hourly entries (1-168)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=168))]
        max_hours: Option<u32>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List every documented code with its category
    Table {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct ClassifyReport<'a> {
    description: Option<&'static str>,
    classification: &'a Classification,
    visuals: &'a VisualState,
}

#[derive(Serialize)]
struct RenderReport {
    location: String,
    temperature: String,
    feels_like: String,
    wind: String,
    uv: Option<UvBand>,
    current: VisualState,
    hourly: Vec<HourlyVisual>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<RainOrShineError>() {
                Some(app_err) => eprintln!("Error: {}", app_err.user_message()),
                None => eprintln!("Error: {err}"),
            }
            eprintln!("Details: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match cli.config.clone() {
        Some(path) => RainOrShineConfig::load_from_path(Some(path)),
        None => RainOrShineConfig::load(),
    }
    .with_context(|| "Failed to load configuration")?;
    init_tracing(&config, cli.verbose)?;

    info!("Starting rainorshine v{}", rainorshine::VERSION);
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Classify { code, night, json } => classify_command(code, !night, json),
        Commands::Render {
            file,
            units,
            max_hours,
            json,
        } => {
            let units = units.unwrap_or_else(|| config.units());
            let max_hours = max_hours
                .map_or_else(|| config.max_hourly_items(), |hours| {
                    usize::try_from(hours).unwrap_or(usize::MAX)
                });
            render_command(file, units, max_hours, config.fallback_code(), json)
        }
        Commands::Table { json } => table_command(json),
    }
}

fn init_tracing(config: &RainOrShineConfig, verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { config.logging.level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let json = config.logging.format == "json";

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .try_init()
        .with_context(|| "Failed to initialize logging")?;
    Ok(())
}

fn classify_command(code: i32, is_day: bool, json: bool) -> Result<()> {
    let classification = explain(code);
    let visuals = VisualState::resolve(code, is_day);
    let description = ConditionCode(code).description();

    if json {
        let report = ClassifyReport {
            description,
            classification: &classification,
            visuals: &visuals,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let matched = if classification.memberships.is_empty() {
        "none".to_string()
    } else {
        join(&classification.memberships)
    };
    let profile = visuals.animation_profile();

    println!("Code:      {code} ({})", description.unwrap_or("undocumented"));
    println!("Category:  {}", visuals.category);
    println!("Matched:   {matched}");
    println!("Gradient:  {}", visuals.gradient.to_css());
    println!("Icon:      {} {}", visuals.icon.shape, visuals.icon.tint);
    print!("Animation: {}", visuals.animation);
    if visuals.animation.is_animated() {
        print!(
            " ({} elements, {}-{}s cycle",
            profile.particles, profile.min_cycle_secs, profile.max_cycle_secs
        );
        if let Some(lightning) = profile.lightning {
            print!(", {} lightning bolts", lightning.bolt_delays_secs.len());
        }
        print!(")");
    }
    println!();
    Ok(())
}

fn render_command(
    file: Option<PathBuf>,
    units: Units,
    max_hours: usize,
    fallback: ConditionCode,
    json: bool,
) -> Result<()> {
    let payload = read_payload(file.as_ref())?;
    let response = WeatherResponse::from_json(&payload)?;
    let now = Utc::now();

    let current = response.current_visuals(fallback);
    let hourly = response
        .today_hourly()
        .visuals(max_hours, units, fallback, now);
    info!(
        location = %response.location.name,
        category = %current.category,
        hours = hourly.len(),
        "rendered weather payload"
    );

    let report = RenderReport {
        location: response.location.display_name(),
        temperature: units.format_temperature(response.current.temperature(units)),
        feels_like: units.format_temperature(response.current.feels_like(units)),
        wind: units.format_wind(response.current.wind_speed(units)),
        uv: response.current.uv_band(),
        current,
        hourly,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} ({})",
        report.location,
        response.location.format_coordinates()
    );
    println!(
        "  {} (feels like {}), wind {}",
        report.temperature, report.feels_like, report.wind
    );
    println!(
        "  {}: {} icon, {} animation",
        report.current.category, report.current.icon.shape, report.current.animation
    );
    println!("  Background: {}", report.current.gradient.to_css());
    if let Some(uv) = report.uv {
        println!("  UV: {} ({})", uv.label(), uv.color());
    }

    if !report.hourly.is_empty() {
        println!();
        println!("Hourly forecast:");
        for hour in &report.hourly {
            let marker = if hour.is_current { "*" } else { " " };
            println!(
                "{marker} {:<18} {:>6}  {:<14} {}",
                hour.time, hour.temperature, hour.visuals.category, hour.visuals.icon.shape
            );
        }
    }
    Ok(())
}

fn table_command(json: bool) -> Result<()> {
    let rows: Vec<Classification> = ConditionCode::DOCUMENTED.into_iter().map(explain).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for row in &rows {
        let marker = if row.is_overlap() { "!" } else { " " };
        println!(
            "{marker} {:>5}  {:<14} {:<22} {}",
            row.code,
            row.category.label(),
            join(&row.memberships),
            row.code.description().unwrap_or_default()
        );
    }
    Ok(())
}

fn read_payload(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => {
            debug!(path = %path.display(), "reading payload file");
            std::fs::read_to_string(path)
                .map_err(RainOrShineError::from)
                .with_context(|| format!("Failed to read payload file: {}", path.display()))
        }
        None => {
            debug!("reading payload from stdin");
            let mut payload = String::new();
            std::io::stdin()
                .read_to_string(&mut payload)
                .map_err(RainOrShineError::from)
                .with_context(|| "Failed to read payload from stdin")?;
            Ok(payload)
        }
    }
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
