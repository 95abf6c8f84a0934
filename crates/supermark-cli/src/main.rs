use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use supermark_config::Config;
use supermark_engine::{
    HtmlOptions, Markdown, MarkdownBuilder, SUPERSCRIPT, WikiLinks, parsing::snapshot,
};
use xi_rope::Rope;

#[derive(Debug, Parser)]
#[command(name = "supermark", author, version, about, long_about = None)]
struct Cli {
    /// Markdown file to convert. Reads stdin when omitted.
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Write output here instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    out: Option<PathBuf>,

    /// Config file to use instead of ~/.config/supermark/config.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Leave `^text^` as literal text.
    #[arg(long)]
    no_superscript: bool,

    /// Leave `[[target]]` as literal text.
    #[arg(long)]
    no_wikilinks: bool,

    /// Render soft line breaks as <br>.
    #[arg(long)]
    hard_wraps: bool,

    /// Self-close void elements.
    #[arg(long)]
    xhtml: bool,

    /// Print the parsed document as JSON instead of HTML.
    #[arg(long)]
    ast: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let markdown = pipeline(&cli, &config);

    let source = read_input(&cli)?;
    let output = if cli.ast {
        let rope = Rope::from(source.as_str());
        let doc = markdown.parse(&rope);
        let mut json = serde_json::to_string_pretty(&snapshot::normalize(&rope, &doc))?;
        json.push('\n');
        json
    } else {
        markdown
            .convert(&source)
            .context("problem rendering document")?
    };

    match &cli.out {
        Some(path) => fs::write(path, output)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => io::stdout().write_all(output.as_bytes())?,
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config_path = match &cli.config {
        Some(path) => Config::expand_path(path),
        None => Config::config_path(),
    };
    log::debug!("Config path: {}", config_path.display());

    match Config::load_from_path(&config_path)? {
        Some(config) => Ok(config),
        None if cli.config.is_some() => {
            anyhow::bail!("config file {} does not exist", config_path.display())
        }
        None => {
            log::debug!("No config file, using defaults");
            Ok(Config::default())
        }
    }
}

/// Flags only ever switch things on top of the config: `--no-*` disables,
/// `--hard-wraps`/`--xhtml` enable.
fn pipeline(cli: &Cli, config: &Config) -> Markdown {
    let options = HtmlOptions {
        hard_wraps: cli.hard_wraps || config.render.hard_wraps,
        xhtml: cli.xhtml || config.render.xhtml,
    };

    let mut builder = MarkdownBuilder::new().with_options(options);
    if config.extensions.superscript && !cli.no_superscript {
        builder = builder.with_extension(&*SUPERSCRIPT);
    }
    if config.extensions.wikilinks && !cli.no_wikilinks {
        builder = builder.with_extension(&WikiLinks);
    }
    builder.build()
}

fn read_input(cli: &Cli) -> Result<String> {
    match &cli.input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}
