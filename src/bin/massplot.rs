use std::path::Path;
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, error};

use massplot::export::SvgPageWriter;
use massplot::script::{self, PlotScript};

#[derive(Parser)]
#[command(name = "massplot")]
#[command(
    about = "Batch multi-page plotting from JSON plot scripts",
    long_about = "Renders a plot script into numbered SVG pages, one page per script page, with shared feature colors, a managed legend and an optional location minimap."
)]
struct Cli {
    /// Log verbosity level
    #[arg(long, global = true, default_value = "info")]
    log_level: LogLevel,
    /// Write log output to a file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<String>,
    /// Append to log file instead of truncating
    #[arg(long, global = true)]
    append_log: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render a plot script to SVG pages
    Render {
        /// Plot script JSON file. Shape paths inside it are relative to its directory.
        #[arg(long, required = true)]
        script: String,
        /// Directory for the pages. Created if missing.
        #[arg(long, required = true)]
        out_dir: String,
        /// Page file prefix. Pages are named `<prefix>-001.svg`, `<prefix>-002.svg`, ...
        #[arg(long, default_value = "page")]
        prefix: String,
        /// Force overwrite of existing page files.
        #[arg(short, long)]
        force: bool,
    },
    /// Check a plot script against the schema without rendering
    Validate {
        /// Plot script JSON file.
        #[arg(long, required = true)]
        script: String,
    },
    /// Print JSON Schema for the plot script format
    Schema {
        /// Write schema to file instead of stdout
        #[arg(long)]
        output: Option<String>,
    },
}

fn render(script_path: &str, out_dir: &str, prefix: &str, force: bool) -> anyhow::Result<usize> {
    let plot_script = PlotScript::load(script_path)
        .map_err(|e| anyhow::anyhow!("Error loading plot script {}: {}", script_path, e))?;
    let base_dir = Path::new(script_path)
        .parent()
        .unwrap_or_else(|| Path::new("."));

    let mut writer = SvgPageWriter::new(out_dir, prefix)?.force(force);
    plot_script.run(base_dir, &mut writer)?;
    Ok(writer.paths().len())
}

fn main() {
    let cli = Cli::parse();

    let mut log_builder = env_logger::Builder::from_default_env();
    log_builder
        .filter_level(cli.log_level.to_level_filter())
        .format_module_path(false);
    if let Some(ref path) = cli.log_file {
        let file = if cli.append_log {
            std::fs::File::options().create(true).append(true).open(path)
        } else {
            std::fs::File::create(path)
        };
        match file {
            Ok(f) => {
                log_builder.target(env_logger::Target::Pipe(Box::new(f)));
            }
            Err(e) => {
                eprintln!("Could not open log file '{}': {}", path, e);
                std::process::exit(1);
            }
        }
    }
    log_builder.init();

    match &cli.command {
        Commands::Render {
            script,
            out_dir,
            prefix,
            force,
        } => match render(script, out_dir, prefix, *force) {
            Ok(pages) => info!("Wrote {} pages to {}", pages, out_dir),
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        },
        Commands::Validate { script } => match PlotScript::load(script) {
            Ok(s) => info!(
                "{} is valid: {} features, {} pages",
                script,
                s.features.len(),
                s.pages.len()
            ),
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        },
        Commands::Schema { output } => {
            let schema = match script::schema_json_pretty() {
                Ok(s) => s,
                Err(e) => {
                    error!("Error generating schema: {}", e);
                    return;
                }
            };
            if let Some(path) = output {
                if let Err(e) = std::fs::write(path, &schema) {
                    error!("Error writing schema: {}", e);
                } else {
                    info!("Schema written to {}", path);
                }
            } else {
                println!("{}", schema);
            }
        }
    }
}
