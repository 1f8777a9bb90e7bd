use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use shipping_dashboard::{
    analysis::{compute_metric, WeightDistribution},
    models::{MetricKind, MetricOutcome, MetricResult},
    visualization::{print_dataset_summary, print_metric_table, print_weight_histogram},
    ReportConfig, ReportGenerator,
};

#[derive(Parser)]
#[command(
    name = "shipping-dashboard",
    about = "Shipping Dashboard - charts and an HTML page from a shipping dataset",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the four charts and index.html (the default)
    Generate {
        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Directory that relative input and output paths are resolved against
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Override the output directory
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Print the computed metrics without writing any files
    Summary {
        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Directory that relative input paths are resolved against
        #[arg(short, long)]
        root: Option<PathBuf>,
    },
}

fn build_generator(
    config: Option<PathBuf>,
    root: Option<PathBuf>,
    output_dir: Option<PathBuf>,
) -> Result<ReportGenerator> {
    let mut config = match config {
        Some(path) => ReportConfig::load(&path)?,
        None => ReportConfig::default(),
    };
    if let Some(dir) = output_dir {
        config.output_dir = dir;
    }
    let generator = ReportGenerator::new(config);
    Ok(match root {
        Some(root) => generator.with_root(root),
        None => generator,
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Generate {
        config: None,
        root: None,
        output_dir: None,
    }) {
        Commands::Generate {
            config,
            root,
            output_dir,
        } => {
            let generator = build_generator(config, root, output_dir)?;
            let report = generator.generate()?;
            println!("{}", report.to_json()?);
        }

        Commands::Summary { config, root } => {
            let generator = build_generator(config, root, None)?;
            let (input, table) = generator.load_table()?;
            println!("Input: {}", input.display());
            print_dataset_summary(&table);

            for kind in MetricKind::ALL {
                let outcome = compute_metric(&table, kind);
                match &outcome {
                    MetricOutcome::Ready(MetricResult::RawNumeric(values)) => {
                        let bins = generator.config().chart.histogram_bins;
                        print_weight_histogram(&WeightDistribution::from_values(values, bins));
                    }
                    _ => print_metric_table(kind, &outcome),
                }
            }
        }
    }

    Ok(())
}
