//! surfmap CLI: surface distance measurement, projection and benchmarking.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "surfmap")]
#[command(version, about = "surfmap: point-to-triangle-mesh projection and surface distance")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Measure the symmetric distance between two meshes.
    Measure {
        /// Source mesh (JSON).
        #[arg(short, long)]
        source: String,

        /// Target mesh (JSON).
        #[arg(short, long)]
        target: String,

        /// Projection config (TOML).
        #[arg(short, long)]
        config: Option<String>,

        /// Write the full report (JSON).
        #[arg(short, long)]
        output: Option<String>,

        /// Write the coloured source deviation (JSON).
        #[arg(long)]
        export: Option<String>,
    },

    /// Project query points onto a mesh.
    Project {
        /// Projection input (JSON: mesh, points, optional triangles and config).
        input: String,

        /// Write the projections (JSON).
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List vertex pairs of a mesh closer than a threshold.
    ClosePoints {
        /// Mesh (JSON).
        mesh: String,

        /// Distance threshold.
        #[arg(short, long)]
        threshold: f64,
    },

    /// Run benchmark suite.
    Benchmark {
        /// Which scenario to run (plane_offset, grid_refinement, sphere_resolution, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,

        /// Disable parallel batch projection.
        #[arg(long)]
        sequential: bool,
    },

    /// Validate a mesh, measurement input or projection config.
    Validate {
        /// Path to mesh/input (.json) or config (.toml) file.
        path: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Measure {
            source,
            target,
            config,
            output,
            export,
        } => commands::measure(&source, &target, config.as_deref(), output.as_deref(), export.as_deref()),
        Commands::Project { input, output } => commands::project(&input, output.as_deref()),
        Commands::ClosePoints { mesh, threshold } => commands::close_points(&mesh, threshold),
        Commands::Benchmark {
            scenario,
            output,
            sequential,
        } => commands::benchmark(&scenario, output.as_deref(), sequential),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
