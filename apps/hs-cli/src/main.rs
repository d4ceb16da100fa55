use clap::{Args, Parser, Subcommand, ValueEnum};
use hs_app::{
    AppError, AppResult, PredictRequest, ReverseRequest, SweepRequest, error_json,
    load_scenarios, report, run_scenarios, service,
};
use hs_model::{EnergySource, Region, SweepAxis};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hs-cli")]
#[command(about = "HydroSim CLI - Electrolytic hydrogen production estimates", long_about = None)]
struct Cli {
    /// Print results and errors as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate production, cost and emissions for a plant configuration
    Predict(PredictArgs),
    /// Recommend a configuration for production, efficiency and cost targets
    Reverse(ReverseArgs),
    /// List supported regions
    Regions,
    /// List supported energy sources
    Sources,
    /// Evaluate every scenario in a YAML or JSON file
    Batch {
        /// Path to the scenario file
        path: PathBuf,
    },
    /// Tabulate efficiency across temperature or pressure
    Sweep {
        /// solar, wind, grid or hybrid
        #[arg(long)]
        energy_source: String,
        /// Variable to sweep
        #[arg(long, value_enum, default_value_t = AxisArg::Temperature)]
        axis: AxisArg,
        #[arg(long, allow_negative_numbers = true)]
        start: f64,
        #[arg(long, allow_negative_numbers = true)]
        end: f64,
        /// Number of points
        #[arg(long, default_value_t = 11)]
        points: usize,
        /// Logarithmic spacing
        #[arg(long)]
        log: bool,
        /// Fixed temperature in °C
        #[arg(long, default_value_t = 80.0, allow_negative_numbers = true)]
        temperature: f64,
        /// Fixed pressure in bar
        #[arg(long, default_value_t = 30.0, allow_negative_numbers = true)]
        pressure: f64,
    },
}

#[derive(Args)]
struct PredictArgs {
    /// JSON request body (replaces the individual flags)
    #[arg(long, conflicts_with_all = ["region", "raw_material_cost", "energy_source", "capacity", "temperature", "pressure"])]
    request: Option<PathBuf>,
    /// north_america, europe or asia_pacific
    #[arg(long)]
    region: Option<String>,
    /// Cost per unit feedstock
    #[arg(long, allow_negative_numbers = true)]
    raw_material_cost: Option<f64>,
    /// solar, wind, grid or hybrid
    #[arg(long)]
    energy_source: Option<String>,
    /// Nameplate capacity in kg/day
    #[arg(long, allow_negative_numbers = true)]
    capacity: Option<f64>,
    /// Stack temperature in °C
    #[arg(long, allow_negative_numbers = true)]
    temperature: Option<f64>,
    /// Stack pressure in bar
    #[arg(long, allow_negative_numbers = true)]
    pressure: Option<f64>,
}

impl PredictArgs {
    fn into_request(self) -> AppResult<PredictRequest> {
        if let Some(path) = self.request {
            return read_request(&path);
        }
        Ok(PredictRequest {
            region: required(self.region, "--region")?,
            raw_material_cost: required(self.raw_material_cost, "--raw-material-cost")?,
            energy_source: required(self.energy_source, "--energy-source")?,
            production_capacity: required(self.capacity, "--capacity")?,
            temperature: required(self.temperature, "--temperature")?,
            pressure: required(self.pressure, "--pressure")?,
        })
    }
}

#[derive(Args)]
struct ReverseArgs {
    /// JSON request body (replaces the individual flags)
    #[arg(long, conflicts_with_all = ["target_production", "target_efficiency", "target_cost_per_kg"])]
    request: Option<PathBuf>,
    /// Target production in kg/day
    #[arg(long, allow_negative_numbers = true)]
    target_production: Option<f64>,
    /// Target efficiency in percent (0-100)
    #[arg(long, allow_negative_numbers = true)]
    target_efficiency: Option<f64>,
    /// Target cost per kg
    #[arg(long, allow_negative_numbers = true)]
    target_cost_per_kg: Option<f64>,
}

impl ReverseArgs {
    fn into_request(self) -> AppResult<ReverseRequest> {
        if let Some(path) = self.request {
            return read_request(&path);
        }
        Ok(ReverseRequest {
            target_production: required(self.target_production, "--target-production")?,
            target_efficiency: required(self.target_efficiency, "--target-efficiency")?,
            target_cost_per_kg: required(self.target_cost_per_kg, "--target-cost-per-kg")?,
        })
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum AxisArg {
    Temperature,
    Pressure,
}

impl From<AxisArg> for SweepAxis {
    fn from(axis: AxisArg) -> Self {
        match axis {
            AxisArg::Temperature => SweepAxis::Temperature,
            AxisArg::Pressure => SweepAxis::Pressure,
        }
    }
}

fn main() -> ExitCode {
    // Initialize tracing; logs go to stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json = cli.json;

    let result = match cli.command {
        Commands::Predict(args) => args
            .into_request()
            .and_then(|request| cmd_predict(&request, json)),
        Commands::Reverse(args) => args
            .into_request()
            .and_then(|request| cmd_reverse(&request, json)),
        Commands::Regions => cmd_regions(json),
        Commands::Sources => cmd_sources(json),
        Commands::Batch { path } => cmd_batch(&path, json),
        Commands::Sweep {
            energy_source,
            axis,
            start,
            end,
            points,
            log,
            temperature,
            pressure,
        } => cmd_sweep(
            &SweepRequest {
                energy_source,
                axis: axis.into(),
                start,
                end,
                points,
                logarithmic: log,
                temperature,
                pressure,
            },
            json,
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&err, json);
            if err.is_client_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn required<T>(value: Option<T>, flag: &str) -> AppResult<T> {
    value.ok_or_else(|| AppError::Request(format!("missing {} (or pass --request)", flag)))
}

fn read_request<T: serde::de::DeserializeOwned>(path: &Path) -> AppResult<T> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::RequestFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| AppError::Request(e.to_string()))
}

fn print_error(err: &AppError, json: bool) {
    // Rejected batch entries already carry their errors in the outcome array
    if json && !matches!(err, AppError::ScenariosRejected { .. }) {
        match error_json(err) {
            Ok(body) => println!("{}", body),
            Err(_) => eprintln!("Error: {}", err),
        }
    } else {
        eprintln!("Error: {}", err);
    }
}

fn cmd_predict(request: &PredictRequest, json: bool) -> AppResult<()> {
    let output = service::predict(request)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", report::format_production(&output));
    }
    Ok(())
}

fn cmd_reverse(request: &ReverseRequest, json: bool) -> AppResult<()> {
    let output = service::reverse(request)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", report::format_reverse(&output));
    }
    Ok(())
}

fn cmd_regions(json: bool) -> AppResult<()> {
    if json {
        println!("{}", serde_json::to_string(&service::regions())?);
    } else {
        for region in Region::ALL {
            println!("  {:<14} {}", region.key(), region.label());
        }
    }
    Ok(())
}

fn cmd_sources(json: bool) -> AppResult<()> {
    if json {
        println!("{}", serde_json::to_string(&service::energy_sources())?);
    } else {
        for source in EnergySource::ALL {
            println!(
                "  {:<8} factor {:.2}, {:>4.1} kg CO2/kg H2 base",
                source.key(),
                source.conversion_factor(),
                source.base_emissions()
            );
        }
    }
    Ok(())
}

fn cmd_batch(path: &Path, json: bool) -> AppResult<()> {
    let file = load_scenarios(path)?;
    if !json {
        let title = if file.name.is_empty() {
            path.display().to_string()
        } else {
            file.name.clone()
        };
        println!("Running {} scenarios from {}", file.len(), title);
    }

    let outcomes = run_scenarios(&file);
    if json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        for outcome in &outcomes {
            print!("{}", report::format_outcome(outcome));
        }
    }

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    if failed > 0 {
        return Err(AppError::ScenariosRejected {
            failed,
            total: outcomes.len(),
        });
    }
    Ok(())
}

fn cmd_sweep(request: &SweepRequest, json: bool) -> AppResult<()> {
    let result = service::sweep(request)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", report::format_sweep(&result));
    }
    Ok(())
}
