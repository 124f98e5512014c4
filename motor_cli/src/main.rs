//! # Motor Sizing CLI
//!
//! Command-line front end for `motor_core`. Reads a winch specification from
//! flags or a JSON file, runs the sizing calculation and prints a text
//! report (or JSON with `--json`).

mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use log::{debug, LevelFilter};

use motor_core::file_io::{load_duty_cycle, load_hoist_input, load_specification, save_report};
use motor_core::hoist::{size_hoist_motor, HoistInput};
use motor_core::recommendations::compare_environments;
use motor_core::{
    ClassificationSociety, DutyCycle, MarineEnvironment, MotorSpecification, SizingError,
    SizingReport, SizingResult,
};

/// Marine winch and hoist motor sizing.
#[derive(Parser)]
#[command(name = "motor-sizing")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print results as JSON instead of a text report.
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging (otherwise RUST_LOG applies).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Size a winch motor from a specification.
    Size {
        #[command(flatten)]
        spec: SpecArgs,

        /// JSON file with `time_s` and `torque_nm` arrays.
        #[arg(long)]
        duty_cycle: Option<PathBuf>,

        /// Label stored in the report.
        #[arg(long, default_value = "Winch")]
        label: String,

        /// Save the report as JSON to this file.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run the built-in 50 t container-ship winch example.
    Example {
        /// Save the report as JSON to this file.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Size the same specification in every marine environment.
    Compare {
        #[command(flatten)]
        spec: SpecArgs,
    },

    /// Size a reeved rope hoist motor from hook load and speed.
    Hoist {
        /// JSON file with hoist parameters (overrides the flags below).
        #[arg(long)]
        input: Option<PathBuf>,

        /// Hook load in tonnes.
        #[arg(long, default_value = "50.0")]
        load_ton: f64,

        /// Hook speed in m/min.
        #[arg(long, default_value = "10.0")]
        speed_m_per_min: f64,

        /// Drum diameter in metres.
        #[arg(long, default_value = "1.2")]
        drum_diameter_m: f64,

        /// Number of rope parts.
        #[arg(long, default_value = "4")]
        reeving: u32,

        /// Acceleration time in seconds (0 ignores acceleration).
        #[arg(long, default_value = "3.0")]
        acceleration_time_s: f64,

        /// Motor speed in rpm.
        #[arg(long, default_value = "1750")]
        motor_rpm: f64,
    },
}

/// Specification flags; defaults describe the reference container-ship winch.
#[derive(Args)]
struct SpecArgs {
    /// JSON specification file (overrides the flags below).
    #[arg(long)]
    spec: Option<PathBuf>,

    /// Load capacity in tonnes.
    #[arg(long, default_value = "50.0")]
    load_ton: f64,

    /// Operating speed in rpm.
    #[arg(long, default_value = "1800")]
    speed_rpm: f64,

    /// Drum radius in metres.
    #[arg(long, default_value = "1.2")]
    drum_radius_m: f64,

    /// System efficiency (0-1].
    #[arg(long, default_value = "0.85")]
    efficiency: f64,

    /// Additional safety factor (> 1).
    #[arg(long, default_value = "1.2")]
    safety_factor: f64,

    /// Load inertia in kg·m².
    #[arg(long, default_value = "4250")]
    load_inertia: f64,

    /// Motor inertia in kg·m².
    #[arg(long, default_value = "125")]
    motor_inertia: f64,

    /// Operating environment (coastal, offshore, deep-sea, arctic, tropical).
    #[arg(long, default_value = "offshore")]
    environment: MarineEnvironment,

    /// Classification society (DNV, ABS, KR, BV, LR; others use 2.0).
    #[arg(long, default_value = "DNV")]
    classification: ClassificationSociety,
}

impl SpecArgs {
    fn resolve(&self) -> SizingResult<MotorSpecification> {
        if let Some(path) = &self.spec {
            debug!("Loading specification from {}", path.display());
            return load_specification(path);
        }
        Ok(MotorSpecification {
            load_capacity_ton: self.load_ton,
            operating_speed_rpm: self.speed_rpm,
            drum_radius_m: self.drum_radius_m,
            system_efficiency: self.efficiency,
            safety_factor: self.safety_factor,
            load_inertia_kgm2: self.load_inertia,
            motor_inertia_kgm2: self.motor_inertia,
            environment: self.environment,
            classification: self.classification,
        })
    }
}

/// Sample winch operating pattern: hoist, hold, idle, lower, hold, idle
fn example_duty_cycle() -> DutyCycle {
    DutyCycle::new(
        vec![10.0, 5.0, 3.0, 10.0, 5.0, 2.0],
        vec![120_000.0, 80_000.0, 0.0, 50_000.0, 80_000.0, 0.0],
    )
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn print_json<T: serde::Serialize>(value: &T) -> SizingResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn emit_report(report: &SizingReport, json: bool, output: Option<&PathBuf>) -> SizingResult<()> {
    if json {
        print_json(report)?;
    } else {
        print!("{}", render::sizing_report(report));
    }
    if let Some(path) = output {
        save_report(report, path)?;
        if !json {
            println!("Report saved to {}", path.display());
        }
    }
    Ok(())
}

fn run(cli: Cli) -> SizingResult<()> {
    match cli.command {
        Commands::Size {
            spec,
            duty_cycle,
            label,
            output,
        } => {
            let specification = spec.resolve()?;
            let duty_cycle = duty_cycle.as_deref().map(load_duty_cycle).transpose()?;
            let report = SizingReport::generate(label, specification, duty_cycle)?;
            emit_report(&report, cli.json, output.as_ref())
        }

        Commands::Example { output } => {
            let report = SizingReport::generate(
                "Container ship winch (example)",
                MotorSpecification::container_ship_winch(),
                Some(example_duty_cycle()),
            )?;
            emit_report(&report, cli.json, output.as_ref())?;

            if !cli.json {
                let others = [
                    MarineEnvironment::Coastal,
                    MarineEnvironment::DeepSea,
                    MarineEnvironment::Arctic,
                ];
                let comparisons = compare_environments(&report.specification, &others)?;
                print!("{}", render::environment_comparison(&comparisons));
            }
            Ok(())
        }

        Commands::Compare { spec } => {
            let specification = spec.resolve()?;
            let comparisons = compare_environments(&specification, &MarineEnvironment::ALL)?;
            if cli.json {
                print_json(&comparisons)
            } else {
                print!("{}", render::environment_comparison(&comparisons));
                Ok(())
            }
        }

        Commands::Hoist {
            input,
            load_ton,
            speed_m_per_min,
            drum_diameter_m,
            reeving,
            acceleration_time_s,
            motor_rpm,
        } => {
            let hoist = match input {
                Some(path) => load_hoist_input(&path)?,
                None => HoistInput {
                    drum_diameter_m,
                    reeving,
                    acceleration_time_s,
                    motor_rpm,
                    ..HoistInput::new(load_ton, speed_m_per_min)
                },
            };
            let result = size_hoist_motor(&hoist)?;
            if cli.json {
                print_json(&result)
            } else {
                print!("{}", render::hoist_report(&hoist, &result));
                Ok(())
            }
        }
    }
}

fn report_error(error: &SizingError) {
    eprintln!("Error: {}", error);
    if let Ok(json) = serde_json::to_string_pretty(error) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report_error(&error);
            ExitCode::FAILURE
        }
    }
}
