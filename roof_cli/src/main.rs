//! # Roofcalc CLI
//!
//! Command-line front end for `roof_core`. Collects input, enforces the
//! caller-side bounds (area cap), and prints results as text or JSON.
//!
//! ```text
//! roofcalc materials --category commercial
//! roofcalc area --footprint 1000 --overhang 12 --pitch medium
//! roofcalc estimate --category residential --material asphalt --area 1800 --job-type replacement --tearoff
//! roofcalc estimate --category residential --material asphalt --footprint 1000 --overhang 12
//! roofcalc batch jobs.json
//! ```

mod format;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use roof_core::calculations::cost::{calculate_with, MAX_AREA_SQFT};
use roof_core::{
    estimate_area, AreaInput, CalcError, CalculationItem, CalculationOutput, Catalog, Category,
    Complexity, EstimateRequest, JobType, Pitch,
};

/// Exit status for "not enough input to estimate"
const EXIT_NOT_APPLICABLE: u8 = 2;

/// Roofing cost and roof area estimator
#[derive(Parser, Debug)]
#[command(name = "roofcalc", version)]
#[command(about = "Estimate roofing project costs and roof area")]
struct Cli {
    /// Pricing catalog TOML file (defaults to the built-in table)
    #[arg(long, global = true, env = "ROOF_CATALOG")]
    catalog: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the materials offered for a category
    Materials {
        #[arg(long, value_parser = parse_category)]
        category: Category,
    },
    /// Estimate roof area from a building footprint
    Area(AreaArgs),
    /// Estimate the cost of a roofing job
    Estimate(EstimateArgs),
    /// Run a JSON array of calculation items
    Batch {
        /// Path to the JSON file
        file: PathBuf,
    },
}

#[derive(Args, Debug)]
struct AreaArgs {
    /// Building footprint (sq ft)
    #[arg(long)]
    footprint: f64,

    /// Eave overhang (inches)
    #[arg(long, default_value_t = 0.0)]
    overhang: f64,

    #[arg(long, value_parser = parse_pitch, default_value = "medium")]
    pitch: Pitch,
}

#[derive(Args, Debug)]
struct EstimateArgs {
    #[arg(long, value_parser = parse_category)]
    category: Category,

    /// Material code (see `roofcalc materials`)
    #[arg(long, default_value = "")]
    material: String,

    /// Roof area (sq ft), capped at 50,000
    #[arg(long, conflicts_with = "footprint")]
    area: Option<f64>,

    /// Derive the roof area from this footprint (sq ft) instead of --area
    #[arg(long)]
    footprint: Option<f64>,

    /// Eave overhang (inches), used with --footprint
    #[arg(long, default_value_t = 0.0)]
    overhang: f64,

    /// Roof pitch, used with --footprint
    #[arg(long, value_parser = parse_pitch, default_value = "medium")]
    pitch: Pitch,

    #[arg(long, value_parser = parse_job_type, default_value = "new")]
    job_type: JobType,

    #[arg(long, value_parser = parse_complexity, default_value = "simple")]
    complexity: Complexity,

    /// Tear off the existing roof (replacements only)
    #[arg(long)]
    tearoff: bool,

    /// Include a permit allowance
    #[arg(long)]
    permits: bool,
}

fn parse_category(s: &str) -> Result<Category, String> {
    Category::from_str_flexible(s).map_err(|e| e.to_string())
}

fn parse_pitch(s: &str) -> Result<Pitch, String> {
    Pitch::from_str_flexible(s).map_err(|e| e.to_string())
}

fn parse_job_type(s: &str) -> Result<JobType, String> {
    JobType::from_str_flexible(s).map_err(|e| e.to_string())
}

fn parse_complexity(s: &str) -> Result<Complexity, String> {
    Complexity::from_str_flexible(s).map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let catalog = match load_catalog(cli.catalog.as_deref()) {
        Ok(catalog) => catalog,
        Err(e) => return report_error(&e),
    };

    let result = match cli.command {
        Command::Materials { category } => {
            list_materials(&catalog, category, cli.json);
            Ok(())
        }
        Command::Area(args) => {
            run_area(&args, cli.json);
            Ok(())
        }
        Command::Estimate(args) => run_estimate(&catalog, &args, cli.json),
        Command::Batch { file } => run_batch(&catalog, &file),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_error(&e),
    }
}

fn load_catalog(path: Option<&std::path::Path>) -> Result<Catalog, CalcError> {
    match path {
        Some(path) => {
            let catalog = Catalog::load_from_toml(path)?;
            debug!(path = %path.display(), "using custom catalog");
            Ok(catalog)
        }
        None => Ok(Catalog::builtin().clone()),
    }
}

fn report_error(e: &CalcError) -> ExitCode {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
    if e.is_not_applicable() {
        ExitCode::from(EXIT_NOT_APPLICABLE)
    } else {
        ExitCode::FAILURE
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: could not serialize output: {}", e),
    }
}

fn list_materials(catalog: &Catalog, category: Category, json: bool) {
    let listing = catalog.list_materials(category);
    if json {
        print_json(&listing);
        return;
    }

    println!(
        "{} materials ({} {} pricing)",
        category, catalog.info.region, catalog.info.year
    );
    for item in &listing {
        println!("  {:<12} {}", item.code, item.label);
    }
}

fn run_area(args: &AreaArgs, json: bool) {
    let input = AreaInput {
        footprint_sqft: args.footprint,
        overhang_in: args.overhang,
        pitch: args.pitch,
    };
    let area = estimate_area(&input);

    if json {
        print_json(&CalculationOutput::Area { area_sqft: area });
    } else {
        println!("Estimated roof area: {}", format::sqft(area as f64));
        println!(
            "  footprint {}, overhang {}\", pitch {}, incl. 12.5% waste",
            format::sqft(args.footprint),
            args.overhang,
            args.pitch
        );
    }
}

/// Area from --area or --footprint, capped at the form limit.
fn resolve_area(args: &EstimateArgs) -> f64 {
    let area = match (args.area, args.footprint) {
        (Some(area), _) => area,
        (None, Some(footprint)) => estimate_area(&AreaInput {
            footprint_sqft: footprint,
            overhang_in: args.overhang,
            pitch: args.pitch,
        }) as f64,
        (None, None) => 0.0,
    };

    if area > MAX_AREA_SQFT {
        warn!(
            requested = area,
            max = MAX_AREA_SQFT,
            "roof area capped at maximum"
        );
        MAX_AREA_SQFT
    } else {
        area
    }
}

fn run_estimate(catalog: &Catalog, args: &EstimateArgs, json: bool) -> Result<(), CalcError> {
    let request = EstimateRequest {
        category: args.category,
        area_sqft: resolve_area(args),
        material: args.material.clone(),
        job_type: args.job_type,
        complexity: args.complexity,
        tearoff: args.tearoff,
        permits: args.permits,
    };

    let breakdown = calculate_with(catalog, &request)?;

    if json {
        print_json(&breakdown);
    } else {
        let label = catalog
            .material(request.category, &request.material)
            .map(|m| m.label())
            .unwrap_or_else(|| request.material.clone());
        println!("{}", format::breakdown_report(&request, &label, &breakdown));
    }
    Ok(())
}

fn run_batch(catalog: &Catalog, file: &std::path::Path) -> Result<(), CalcError> {
    let content = std::fs::read_to_string(file)
        .map_err(|e| CalcError::invalid_input("file", file.display().to_string(), e.to_string()))?;
    let items: Vec<CalculationItem> = serde_json::from_str(&content)
        .map_err(|e| CalcError::invalid_input("file", file.display().to_string(), e.to_string()))?;

    debug!(items = items.len(), "running batch");
    let outputs: Vec<CalculationOutput> = items.iter().map(|item| item.run(catalog)).collect();
    print_json(&outputs);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate_args(extra: &[&str]) -> EstimateArgs {
        let argv = ["roofcalc", "estimate", "--category", "residential", "--material", "asphalt"];
        let cli = Cli::try_parse_from(argv.iter().chain(extra).copied()).unwrap();
        match cli.command {
            Command::Estimate(args) => args,
            other => panic!("expected estimate command, got {:?}", other),
        }
    }

    #[test]
    fn test_area_passes_through() {
        assert_eq!(resolve_area(&estimate_args(&["--area", "1200"])), 1200.0);
    }

    #[test]
    fn test_area_capped_at_maximum() {
        assert_eq!(resolve_area(&estimate_args(&["--area", "80000"])), MAX_AREA_SQFT);
    }

    #[test]
    fn test_footprint_derives_area() {
        let args = estimate_args(&["--footprint", "1000", "--overhang", "12", "--pitch", "medium"]);
        assert_eq!(resolve_area(&args), 1647.0);
    }

    #[test]
    fn test_huge_footprint_capped() {
        let args = estimate_args(&["--footprint", "1000000", "--pitch", "steep"]);
        assert_eq!(resolve_area(&args), MAX_AREA_SQFT);
    }

    #[test]
    fn test_no_area_is_zero() {
        // left for the core to report as insufficient input
        assert_eq!(resolve_area(&estimate_args(&[])), 0.0);
    }

    #[test]
    fn test_area_and_footprint_conflict() {
        let argv = [
            "roofcalc", "estimate", "--category", "residential", "--area", "1200", "--footprint", "1000",
        ];
        assert!(Cli::try_parse_from(argv).is_err());
    }
}
