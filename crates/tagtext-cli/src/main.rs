//! Command-line interface for tagtext.
//!
//! Usage:
//!   tagtext parse `[TEXT]` [--file `<path>`] [--format tree|json|markup|plain] [--safe]
//!   tagtext tags [--safe]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::PathBuf;
use tagtext_config::{Config, Preset};
use tagtext_engine::{TagRegistry, parse_with, plain_text, snapshot, to_markup};

#[derive(Debug, Parser)]
#[command(name = "tagtext", version, about = "Parse and inspect tagtext markup")]
struct Cli {
    /// Config file to use instead of ~/.config/tagtext/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse markup and print the result
    Parse {
        /// Markup to parse; read from --file or stdin when omitted
        text: Option<String>,

        #[arg(long, short, conflicts_with = "text")]
        file: Option<PathBuf>,

        #[arg(long, short = 'F', value_enum, default_value_t = Format::Tree)]
        format: Format,

        /// Only allow tags that are safe for untrusted authors
        #[arg(long)]
        safe: bool,
    },
    /// List the available tags
    Tags {
        #[arg(long)]
        safe: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Indented node tree
    Tree,
    /// Normalized tree as JSON
    Json,
    /// Tree serialized back to markup
    Markup,
    /// Display text only
    Plain,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    init_logging(&config);

    match cli.command {
        Command::Parse {
            text,
            file,
            format,
            safe,
        } => {
            let registry = build_registry(&config, safe);
            let input = read_input(text, file)?;
            log::debug!("parsing {} bytes", input.len());
            println!("{}", render(&input, &registry, format)?);
        }
        Command::Tags { safe } => {
            let registry = build_registry(&config, safe);
            print!("{}", list_tags(&registry));
        }
    }
    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    let loaded = match path {
        Some(path) => {
            let path = Config::expand_path(path).unwrap_or_else(|| path.to_path_buf());
            let config = Config::load_from_path(&path)?
                .with_context(|| format!("config file '{}' not found", path.display()))?;
            Some(config)
        }
        None => Config::load()?,
    };
    Ok(loaded.unwrap_or_default())
}

fn init_logging(config: &Config) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log::LevelFilter::Info);
    if let Some(level) = &config.log_level {
        builder.parse_filters(level);
    }
    builder.parse_default_env().init();
}

/// Starts from the configured preset and drops disabled tags.
fn build_registry(config: &Config, force_safe: bool) -> TagRegistry {
    let builtins = TagRegistry::with_builtins();
    let mut registry = if force_safe || config.preset == Preset::Safe {
        builtins.safe_only()
    } else {
        builtins
    };
    for tag in &config.disabled_tags {
        if !registry.remove(tag) {
            log::warn!("disabled tag '{tag}' is not registered");
        }
    }
    registry
}

fn read_input(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    let mut input = match file {
        Some(path) => {
            let path = Config::expand_path(&path).unwrap_or(path);
            std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read '{}'", path.display()))?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    Ok(input)
}

fn render(input: &str, registry: &TagRegistry, format: Format) -> Result<String> {
    let nodes = parse_with(input, registry);
    let out = match format {
        Format::Tree => snapshot::render_tree(&snapshot::normalize(&nodes))
            .trim_end()
            .to_owned(),
        Format::Json => serde_json::to_string_pretty(&snapshot::normalize(&nodes))?,
        Format::Markup => to_markup(&nodes),
        Format::Plain => plain_text(&nodes),
    };
    Ok(out)
}

fn list_tags(registry: &TagRegistry) -> String {
    let mut out = String::new();
    for name in registry.names() {
        out.push_str(name);
        let aliases = registry.aliases_of(name);
        if !aliases.is_empty() {
            out.push_str(&format!(" ({})", aliases.join(", ")));
        }
        if registry.is_safe(name) {
            out.push_str(" [safe]");
        }
        out.push('\n');
    }
    out
}
