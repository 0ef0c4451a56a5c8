use std::{
    error::Error,
    fs::File,
    io::{self, Read},
    path::PathBuf,
    process,
};

use clap::{Parser, ValueEnum};
use gauss_rs::{EquationSystem, EvalEquationSystem, GaussError, SolveOptions};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InputFormat {
    /// One equation per line: coefficients followed by the constant
    Text,
    /// Headerless CSV, one record per equation
    Csv,
    /// A serialized equation system
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "gauss",
    about = "Solve a dense square linear system with Gaussian elimination"
)]
struct Cli {
    /// Input file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Input format
    #[arg(long, value_enum, default_value_t = InputFormat::Text)]
    format: InputFormat,

    /// JSON file with solve options; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pivot magnitude below which the system is reported as singular
    #[arg(long)]
    tolerance: Option<f64>,

    /// Maximum number of equations accepted (0 disables the limit)
    #[arg(long)]
    max_equations: Option<usize>,

    /// Decimal places in the printed solution
    #[arg(long)]
    precision: Option<usize>,

    /// Skip recomputing each equation with the solution
    #[arg(long)]
    no_verify: bool,

    /// Print the report as JSON
    #[arg(long)]
    json_report: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        log::error!("{}", e);
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let options = load_options(cli)?;
    let system = read_system(cli)?;
    log::info!("Read {} equations", system.len());

    let report = EvalEquationSystem::try_from(system)?.evaluate(&options)?;
    if cli.json_report {
        println!("{}", report.to_json()?);
    } else {
        print!("{report}");
    }
    Ok(())
}

fn load_options(cli: &Cli) -> Result<SolveOptions, GaussError> {
    let mut options = match &cli.config {
        Some(path) => serde_json::from_reader(File::open(path)?)?,
        None => SolveOptions::default(),
    };
    if let Some(tolerance) = cli.tolerance {
        options.tolerance = tolerance;
    }
    if let Some(max) = cli.max_equations {
        options.max_equations = (max > 0).then_some(max);
    }
    if let Some(precision) = cli.precision {
        options.precision = precision;
    }
    if cli.no_verify {
        options.verify = false;
    }
    log::debug!("Solve options: {:?}", options);
    Ok(options)
}

fn read_system(cli: &Cli) -> Result<EquationSystem, GaussError> {
    let reader: Box<dyn Read> = match &cli.input {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin().lock()),
    };
    match cli.format {
        InputFormat::Csv => EquationSystem::from_csv_reader(reader),
        InputFormat::Json => Ok(serde_json::from_reader(reader)?),
        InputFormat::Text => {
            let mut text = String::new();
            let mut reader = reader;
            reader.read_to_string(&mut text)?;
            Ok(EquationSystem::parse(&text)?)
        }
    }
}
