use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Instant;

use truesize::config::FileConfig;
use truesize::domain::{Catalog, DraggableClone, FeatureKind, Palette};
use truesize::io::{
    FeatureCollection, clone_to_feature, frames_to_collection, parse_boundaries, read_collection,
    write_collection,
};
use truesize::geometry::{LatLng, ScaleCorrector, bounds_center};

/// Compare the true size of countries and states by moving their outlines
///
/// Examples:
///   # Find boundaries whose name contains "land"
///   truesize search land
///
///   # Move Greenland to the equator and write the outline to a file
///   truesize relocate Greenland --lat 0 --lon -40 -o greenland.geojson
///
///   # Put Texas and France side by side at 60°N, 10 drag frames each
///   truesize relocate Texas France --lat 60 --lon 10 --steps 10
///
///   # Turn Chile on its side and drop it over Australia
///   truesize relocate Chile --lat -25 --lon 134 --rotate 90
#[derive(Parser, Debug)]
#[command(name = "truesize")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches truesize.toml if not provided)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Country boundaries GeoJSON (name in the ADMIN property)
    #[arg(long, global = true)]
    countries: Option<PathBuf>,

    /// State boundaries GeoJSON (name in the name property)
    #[arg(long, global = true)]
    states: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List boundaries whose name contains QUERY
    Search {
        query: String,

        /// Maximum number of results
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Move one or more boundaries to a new centre at their true size
    Relocate {
        /// Boundary names (exact, case-insensitive)
        #[arg(required = true)]
        names: Vec<String>,

        /// Destination latitude
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Destination longitude
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Only match countries or only states
        #[arg(long)]
        kind: Option<FeatureKind>,

        /// Rotation in degrees, counter-clockwise, about the destination
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        rotate: f64,

        /// Number of drag frames from the original position to the destination
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        steps: u32,

        /// Output GeoJSON path (defaults to stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config: FileConfig = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            toml::from_str(&contents).context("Failed to parse config file")?
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load().unwrap_or_default()
    };

    let verbose = args.verbose || file_config.verbose;
    let countries = args
        .countries
        .clone()
        .unwrap_or_else(|| file_config.countries.clone());
    let states = args
        .states
        .clone()
        .unwrap_or_else(|| file_config.states.clone());
    let corrector = file_config
        .correction
        .corrector()
        .context("Invalid [correction] settings in config file")?;

    if verbose {
        eprintln!("Configuration:");
        eprintln!("  Countries: {}", countries.display());
        eprintln!("  States: {}", states.display());
        eprintln!(
            "  Latitude clamp: {}..{} deg",
            corrector.min_latitude(),
            corrector.max_latitude()
        );
        eprintln!("  Dead zone: {}", corrector.dead_zone());
        eprintln!();
    }

    let catalog = load_catalog(&countries, &states, verbose)?;

    match args.command {
        Command::Search { query, limit } => {
            let limit = limit.unwrap_or(file_config.search_limit);
            let results = catalog.search(&query, limit);
            if results.is_empty() {
                eprintln!("No matches for {:?}", query);
            }
            for feature in results {
                println!("{}", feature.display_name());
            }
        }
        Command::Relocate {
            names,
            lat,
            lon,
            kind,
            rotate,
            steps,
            output,
        } => {
            let target = LatLng::checked(lat, lon)
                .context("--lat must be within -90..90 and --lon must be finite")?;
            if !rotate.is_finite() {
                bail!("--rotate must be a finite number of degrees, got {}", rotate);
            }
            let output = output.or_else(|| file_config.output.clone());
            let placement = Placement {
                target,
                rotation: rotate,
                steps: steps as usize,
            };
            let collection = relocate_all(&catalog, &names, kind, &placement, corrector, verbose)?;
            write_collection(output.as_deref(), &collection)
                .context("Failed to write relocated boundaries")?;
            if let Some(path) = output {
                eprintln!("Output: {}", path.display());
            }
        }
    }

    Ok(())
}

/// Load whichever boundary files exist; at least one must
fn load_catalog(countries: &Path, states: &Path, verbose: bool) -> Result<Catalog> {
    let mut catalog = Catalog::new();

    for (path, kind) in [(countries, FeatureKind::Country), (states, FeatureKind::State)] {
        if !path.exists() {
            if verbose {
                eprintln!("Skipping missing {} file: {}", kind.label(), path.display());
            }
            continue;
        }

        let spinner = create_spinner(&format!("Loading {}...", path.display()));
        let start = Instant::now();
        let collection = read_collection(path)?;
        let report = parse_boundaries(&collection, kind);
        spinner.finish_with_message(format!(
            "Loaded {} {} boundaries ({} skipped) [{:.1}s]",
            report.features.len(),
            kind.label().to_lowercase(),
            report.skipped.len(),
            start.elapsed().as_secs_f32()
        ));

        if verbose {
            for skipped in &report.skipped {
                eprintln!("  Skipped feature #{}: {}", skipped.index, skipped.reason);
            }
        }
        catalog.extend(report.features);
    }

    if catalog.is_empty() {
        bail!(
            "No boundaries loaded. Provide --countries and/or --states pointing at GeoJSON files"
        );
    }

    Ok(catalog)
}

/// Where and how every requested clone is placed
struct Placement {
    target: LatLng,
    rotation: f64,
    steps: usize,
}

fn relocate_all(
    catalog: &Catalog,
    names: &[String],
    kind: Option<FeatureKind>,
    placement: &Placement,
    corrector: ScaleCorrector,
    verbose: bool,
) -> Result<FeatureCollection> {
    let Placement {
        target,
        rotation,
        steps,
    } = *placement;
    let mut palette = Palette::new();
    let mut features = Vec::new();

    for name in names {
        let Some(feature) = catalog.find(name, kind) else {
            let suggestions: Vec<String> = catalog
                .search(name, 3)
                .iter()
                .map(|f| f.display_name())
                .collect();
            if suggestions.is_empty() {
                bail!("Boundary not found: {}", name);
            }
            bail!(
                "Boundary not found: {} (did you mean {}?)",
                name,
                suggestions.join(", ")
            );
        };

        let clone = DraggableClone::new(feature.clone(), palette.next_style())
            .with_context(|| format!("Cannot relocate {}", feature.display_name()))?
            .with_corrector(corrector)
            .with_rotation(rotation);

        let spinner = create_spinner(&format!("Relocating {}...", feature.display_name()));
        let start = Instant::now();
        if steps > 1 {
            let frames = clone.drag_frames(target, steps);
            features.extend(frames_to_collection(&clone, &frames).features);
        } else {
            let geometry = clone.move_to(target);
            features.push(clone_to_feature(&clone, &geometry, target));
        }
        let factor = corrector.scale_factor(clone.origin().lat, target.lat);
        spinner.finish_with_message(format!(
            "{}: ({:.2}, {:.2}) -> ({:.2}, {:.2}), width x{:.3} [{:.1}s]",
            feature.display_name(),
            clone.origin().lat,
            clone.origin().lng,
            target.lat,
            target.lng,
            factor,
            start.elapsed().as_secs_f32()
        ));

        if verbose {
            eprintln!(
                "  {} vertices in {} rings, colour {}",
                feature.geometry.vertex_count(),
                feature.geometry.ring_count(),
                clone.style().color
            );
            eprintln!(
                "  Area: {:.2} sq deg -> {:.2} sq deg",
                feature.geometry.area_sq_degrees(),
                clone.move_to(target).area_sq_degrees()
            );
            if let Ok(bounds) = bounds_center(&feature.geometry) {
                eprintln!(
                    "  Bounding box centre: ({:.2}, {:.2})",
                    bounds.lat, bounds.lng
                );
            }
            if corrector.in_dead_zone(factor) {
                eprintln!("  Scale factor inside dead zone, translated only");
            }
        }
    }

    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
