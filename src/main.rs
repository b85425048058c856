use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

use obs_ascii_filter::{
    config::PluginConfig,
    filters::ascii::SOURCE_ID,
    host::headless::{HeadlessGraphics, HeadlessSource},
    HostContext, Settings, SourceRegistry,
};

#[derive(Parser)]
#[command(
    name = "ascii-filter",
    version,
    about = "Inspect and exercise the ASCII video filter",
    long_about = "Loads the ASCII filter module into an in-process host, prints its property panel and defaults, or runs render passes against a fixed-size upstream source."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the property panel description
    Properties,

    /// Print the default settings as TOML
    Defaults,

    /// Create the filter and run render passes
    Render {
        /// Upstream source width
        #[arg(long, default_value_t = 1920)]
        width: u32,

        /// Upstream source height
        #[arg(long, default_value_t = 1080)]
        height: u32,

        /// Number of tick + render cycles
        #[arg(short, long, default_value_t = 1)]
        frames: u32,

        /// Settings snapshot (TOML)
        #[arg(short, long)]
        settings: Option<PathBuf>,

        /// Plugin configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Render with no upstream target
        #[arg(long)]
        no_source: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(log_level.into())
                .from_env_lossy(),
        )
        .init();

    let mut registry = SourceRegistry::new();
    if !obs_ascii_filter::module_load(&mut registry) {
        anyhow::bail!("module failed to load");
    }

    match cli.command {
        Command::Properties => {
            for property in registry.properties_for(SOURCE_ID)?.iter() {
                println!("{}", property);
            }
        }
        Command::Defaults => {
            print!("{}", registry.defaults_for(SOURCE_ID)?.to_toml_string()?);
        }
        Command::Render {
            width,
            height,
            frames,
            settings,
            config,
            no_source,
        } => {
            let config = match config {
                Some(path) => {
                    info!("Loading configuration from {:?}", path);
                    PluginConfig::from_file(&path)?
                }
                None => {
                    info!("Using default configuration");
                    PluginConfig::default()
                }
            };

            let settings = match settings {
                Some(path) => {
                    let content = std::fs::read_to_string(&path)
                        .with_context(|| format!("reading settings {:?}", path))?;
                    Settings::from_toml_str(&content)?
                }
                None => Settings::new(),
            };

            run_render(&registry, &config, &settings, width, height, frames, no_source)?;
        }
    }

    Ok(())
}

fn run_render(
    registry: &SourceRegistry,
    config: &PluginConfig,
    settings: &Settings,
    width: u32,
    height: u32,
    frames: u32,
    no_source: bool,
) -> Result<()> {
    let graphics = HeadlessGraphics::new();
    let host = HostContext::new(&graphics, config);

    let mut filter = registry
        .create(SOURCE_ID, &host, settings)
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    let mut source = if no_source {
        HeadlessSource::detached()
    } else {
        HeadlessSource::with_target(width, height)
    };

    info!("Rendering {} frame(s) from a {}x{} source", frames, width, height);
    for _ in 0..frames {
        filter.video_tick(1.0 / 60.0);
        filter.video_render(&mut source);
    }

    println!("draws:  {} ({} skipped)", source.draws.len(), source.skipped);
    println!("output: {}x{}", filter.width(), filter.height());

    if let Some(effect) = graphics.last_effect() {
        for (name, value) in effect.borrow().values() {
            println!("  {:<28} {:?}", name, value);
        }
    }

    filter.destroy(&graphics);
    Ok(())
}
