use anyhow::Context;
use clap::{Parser, ValueEnum};
use project_spec::{DEFAULT_PROJECT_PATH, Groups};
use std::path::PathBuf;
use std::process::ExitCode;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "project-spec")]
#[command(about = "Validate and inspect an optimization project file", long_about = None)]
struct Cli {
    /// Project file to read.
    #[arg(default_value = DEFAULT_PROJECT_PATH)]
    path: PathBuf,

    /// Print a derived view instead of validating.
    #[arg(long, value_enum)]
    show: Option<View>,

    /// Restrict inputs/ranges to these groups (repeatable).
    #[arg(long = "group", value_name = "NAME")]
    groups: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum View {
    Inputs,
    Ranges,
    Constraints,
}

fn main() -> ExitCode {
    project_spec::logging::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let kind = err
                .downcast_ref::<project_spec::Error>()
                .map_or("Error", project_spec::Error::kind);
            println!("ERROR: {} {}", kind, err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli { path, show, groups } = cli;

    match show {
        None => {
            project_spec::validate(&path)?;
            println!("VALID: true");
        }
        Some(View::Inputs) => {
            let groups = (!groups.is_empty()).then(|| Groups::from(groups));
            let inputs = project_spec::inputs(&path, groups.as_ref())?;
            println!("{}", serde_json::to_string_pretty(&inputs).context("render inputs")?);
        }
        Some(View::Ranges) => {
            let groups = if groups.is_empty() {
                Groups::geometry()
            } else {
                Groups::from(groups)
            };
            let ranges = project_spec::input_ranges(&path, &groups)?;
            println!("{}", serde_json::to_string_pretty(&ranges).context("render ranges")?);
        }
        Some(View::Constraints) => {
            let constraints = project_spec::constraint_strs(&path)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&constraints).context("render constraints")?
            );
        }
    }

    Ok(())
}
