//! `geophase` command-line interface
//!
//! ## Commands
//!
//! - `geophase interfaces` - Print the interface catalog and alias table
//! - `geophase resolve <NAME>` - Resolve an interface name or alias
//! - `geophase neighbor <START>` - Nearest model-defined interface in a group
//! - `geophase phase <NAME>` - Show one phase descriptor
//! - `geophase phases` - List registered phases
//! - `geophase classify` - Name the phase of a computed ray
//! - `geophase remap <PHASE>` - Resolve a phase's interfaces against a model

use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use geophase_interfaces::EarthInterface;
use geophase_interfaces::InterfaceGroup;
use geophase_interfaces::LayerRemap;
use geophase_interfaces::ModelInterfaces;
use geophase_interfaces::SearchDirection;
use geophase_interfaces::catalog;
use geophase_phases::PhaseClassifier;
use geophase_phases::PhaseConfig;
use geophase_phases::PhaseName;
use geophase_phases::PhaseRegistry;
use geophase_phases::RayObservation;
use geophase_phases::RayType;
use geophase_phases::SeismicPhaseDescriptor;
use geophase_phases::WaveType;
use geophase_phases::remap;
use serde::Serialize;

/// Exit status for lookups that find nothing.
pub const EXIT_NOT_FOUND: i32 = 1;

/// Earth interface catalog and seismic phase tools
#[derive(Debug, Parser)]
#[command(name = "geophase", version, about)]
pub struct Cli {
    /// Classifier threshold file (defaults to $GEOPHASE_CONFIG)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output as JSON for automation
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the interface definition and alias tables
    Interfaces,

    /// Resolve an interface name or alias to its canonical interface
    Resolve {
        name: String,
    },

    /// Find the nearest interface a model defines within the start's group
    ///
    /// `up` walks toward increasing ordinal (shallower), `down` toward
    /// decreasing ordinal (deeper). The start itself counts when defined.
    Neighbor {
        /// Canonical start interface name
        start: String,

        /// Interfaces the model defines
        #[arg(long, value_delimiter = ',', value_name = "NAMES")]
        defined: Vec<String>,

        #[arg(long, value_enum, default_value_t = Direction::Up)]
        direction: Direction,
    },

    /// Show a phase descriptor
    Phase {
        name: String,
    },

    /// List registered phases
    Phases {
        /// Only phases with this primary wave type
        #[arg(long, value_name = "P|S")]
        wave_type: Option<WaveType>,
    },

    /// Name the phase of a computed ray
    Classify {
        #[arg(long, value_name = "RAY_TYPE")]
        ray_type: RayType,

        /// Turning depth in km; omit (or pass -999999) when unavailable
        #[arg(long, allow_negative_numbers = true)]
        depth: Option<f64>,

        /// Source-receiver distance in degrees
        #[arg(long)]
        distance: f64,

        /// Travel time in seconds
        #[arg(long)]
        travel_time: f64,

        #[arg(long, value_name = "P|S")]
        wave_type: WaveType,
    },

    /// Resolve a phase's interfaces against a model's layers
    Remap {
        phase: String,

        /// Model layer names, deepest first
        #[arg(long, value_delimiter = ',', value_name = "NAMES", required = true)]
        layers: Vec<String>,

        /// Extra layer name mappings, e.g. "LID MOHO; LVZ M210"
        #[arg(long, value_name = "MAP")]
        layer_map: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    Up,
    Down,
}

impl From<Direction> for SearchDirection {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => SearchDirection::Upward,
            Direction::Down => SearchDirection::Downward,
        }
    }
}

#[derive(Debug, Serialize)]
struct InterfaceSummary {
    name: &'static str,
    ordinal: usize,
    group: InterfaceGroup,
    default_layer_name: &'static str,
    description: &'static str,
    homogeneous_constant_velocity: bool,
}

impl From<EarthInterface> for InterfaceSummary {
    fn from(iface: EarthInterface) -> Self {
        Self {
            name: iface.name(),
            ordinal: iface.ordinal(),
            group: iface.group(),
            default_layer_name: iface.default_layer_name(),
            description: iface.description(),
            homogeneous_constant_velocity: iface.is_homogeneous_constant_velocity_layer(),
        }
    }
}

#[derive(Debug, Serialize)]
struct PhaseSummary {
    name: &'static str,
    primary_wave_type: Option<WaveType>,
    description: &'static str,
}

#[derive(Debug, Serialize)]
struct Classification {
    phase: PhaseName,
    observation: RayObservation,
}

impl Cli {
    /// Runs the command and returns the process exit status.
    pub fn run(self) -> Result<i32> {
        let json = self.json;
        match self.command {
            Command::Interfaces => run_interfaces(json),
            Command::Resolve { name } => run_resolve(&name, json),
            Command::Neighbor {
                start,
                defined,
                direction,
            } => run_neighbor(&start, &defined, direction, json),
            Command::Phase { name } => run_phase(&name, json),
            Command::Phases { wave_type } => run_phases(wave_type, json),
            Command::Classify {
                ray_type,
                depth,
                distance,
                travel_time,
                wave_type,
            } => {
                let config = load_config(self.config.as_deref())?;
                let observation = match depth {
                    Some(depth) => RayObservation::with_raw_turning_depth(
                        ray_type,
                        depth,
                        distance,
                        travel_time,
                        wave_type,
                    ),
                    None => RayObservation {
                        ray_type,
                        turning_depth_km: None,
                        distance_deg: distance,
                        travel_time_s: travel_time,
                        wave_type,
                    },
                };
                run_classify(&config, observation, json)
            }
            Command::Remap {
                phase,
                layers,
                layer_map,
            } => run_remap(&phase, &layers, layer_map.as_deref(), json),
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<PhaseConfig> {
    match path {
        Some(path) => PhaseConfig::load_from_path(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => PhaseConfig::load().context("failed to load config from GEOPHASE_CONFIG"),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("failed to serialize output")?
    );
    Ok(())
}

fn not_found(json: bool) -> Result<i32> {
    if json {
        println!("null");
    } else {
        println!("not found");
    }
    Ok(EXIT_NOT_FOUND)
}

fn run_interfaces(json: bool) -> Result<i32> {
    if json {
        let interfaces: Vec<InterfaceSummary> = EarthInterface::all()
            .filter(|iface| *iface != EarthInterface::NoInterface)
            .map(InterfaceSummary::from)
            .collect();
        let aliases: std::collections::BTreeMap<&str, &str> = catalog::aliases()
            .map(|(alias, iface)| (alias, iface.name()))
            .collect();
        print_json(&serde_json::json!({
            "interfaces": interfaces,
            "aliases": aliases,
        }))?;
    } else {
        println!("{}", catalog::definitions_table());
        print!("{}", catalog::alias_table());
    }
    Ok(0)
}

fn run_resolve(name: &str, json: bool) -> Result<i32> {
    let Some(iface) = catalog::resolve(name) else {
        return not_found(json);
    };
    if json {
        print_json(&InterfaceSummary::from(iface))?;
    } else {
        println!("{iface}");
    }
    Ok(0)
}

fn run_neighbor(start: &str, defined: &[String], direction: Direction, json: bool) -> Result<i32> {
    let start_iface: EarthInterface = start
        .parse()
        .map_err(|_| geophase_interfaces::InterfaceError::UnknownName(start.to_string()))
        .context("invalid start interface")?;
    // Model names may be aliases; the walk compares canonical names.
    let mut model: std::collections::HashSet<String> = std::collections::HashSet::new();
    for name in defined {
        match catalog::resolve_name(name) {
            Some(canonical) => {
                model.insert(canonical.to_string());
            }
            None => tracing::warn!(
                %name,
                "ignoring defined name that is not an EarthInterface or alias"
            ),
        }
    }
    let found = catalog::find_defined_neighbor_in_group(start_iface, &model, direction.into());
    match found {
        Some(iface) if json => print_json(&InterfaceSummary::from(iface))?,
        Some(iface) => println!("{iface}"),
        None => return not_found(json),
    }
    Ok(0)
}

fn run_phase(name: &str, json: bool) -> Result<i32> {
    let Some(phase) = PhaseRegistry::global().lookup(name) else {
        return not_found(json);
    };
    if json {
        print_json(phase)?;
    } else {
        print_descriptor(phase);
    }
    Ok(0)
}

fn print_descriptor(phase: &SeismicPhaseDescriptor) {
    let wave = |w: Option<WaveType>| w.map_or_else(|| "unknown".to_string(), |w| w.to_string());
    println!("name:               {}", phase.name);
    println!("description:        {}", phase.description);
    println!(
        "primary wave type:  {}",
        phase
            .primary_wave_type
            .map_or_else(|| "none".to_string(), |w| w.to_string())
    );
    println!(
        "source -> receiver: {} -> {}",
        wave(phase.source_wave_type),
        wave(phase.receiver_wave_type)
    );
    if let Some(seq) = &phase.wave_types {
        println!("wave types:         {seq}");
    }
    if let Some(seq) = &phase.ray_events {
        println!("ray events:         {seq}");
    }
    println!(
        "distance (deg):     {} - {}",
        phase.distance.min, phase.distance.max
    );
    println!("file name:          {}", phase.file_name);
}

fn run_phases(wave_type: Option<WaveType>, json: bool) -> Result<i32> {
    let registry = PhaseRegistry::global();
    let phases: Vec<PhaseSummary> = registry
        .iter()
        .filter(|phase| wave_type.is_none() || phase.primary_wave_type == wave_type)
        .map(|phase| PhaseSummary {
            name: phase.name,
            primary_wave_type: phase.primary_wave_type,
            description: phase.description,
        })
        .collect();
    if json {
        print_json(&phases)?;
    } else {
        for phase in &phases {
            println!("{:<10} {}", phase.name, phase.description);
        }
    }
    Ok(0)
}

fn run_classify(config: &PhaseConfig, observation: RayObservation, json: bool) -> Result<i32> {
    let classifier = PhaseClassifier::new(config.classifier.clone());
    let phase = classifier.classify(&observation);
    tracing::debug!(%phase, ?observation, "classified ray");
    if json {
        print_json(&Classification { phase, observation })?;
    } else {
        println!("{phase}");
    }
    Ok(0)
}

fn run_remap(phase: &str, layers: &[String], layer_map: Option<&str>, json: bool) -> Result<i32> {
    let Some(descriptor) = PhaseRegistry::global().lookup(phase) else {
        return not_found(json);
    };
    let layer_remap = match layer_map {
        Some(text) => LayerRemap::parse(text).context("invalid --layer-map")?,
        None => LayerRemap::default(),
    };
    let model =
        ModelInterfaces::from_layer_names(layers, &layer_remap).context("invalid model layers")?;
    let remapped = remap::remap_phase(descriptor, &model)
        .with_context(|| format!("cannot remap {phase} for this model"))?;
    if json {
        print_json(&remapped)?;
        return Ok(0);
    }
    println!("phase: {}", remapped.phase);
    println!("initial wave type: {}", remapped.initial_wave_type);
    for change in &remapped.wave_type_changes {
        println!(
            "wave type -> {} at {} => {} ({})",
            change.wave_type, change.remap.requested, change.remap.resolved, change.remap.reason
        );
    }
    for event in &remapped.ray_events {
        println!(
            "{} at {} => {} ({})",
            event.kind, event.remap.requested, event.remap.resolved, event.remap.reason
        );
    }
    Ok(0)
}
