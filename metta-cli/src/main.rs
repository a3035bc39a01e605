//! Command-line interface for metta-highlight
//! Highlights MeTTa sources into HTML, JSON or a plain token listing.
//!
//! Usage:
//!   metta-hl [`<path>`] [--language `<id>`] [--format `<format>`] [--config `<file>`]
//!   metta-hl --list-languages                 - List registered languages and aliases
//!   metta-hl --list-formats                   - List output formats
//!
//! Without a path (or with `-`) the source is read from stdin.

use anyhow::{bail, Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use metta_config::{HighlightConfig, Loader};
use std::io::Read;

fn main() {
    let matches = cli().get_matches();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if matches.get_flag("verbose") {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    if let Err(e) = run(&matches) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn cli() -> Command {
    Command::new("metta-hl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Syntax highlighting for MeTTa sources")
        .arg(
            Arg::new("path")
                .help("Source file to highlight ('-' or absent for stdin)")
                .index(1),
        )
        .arg(
            Arg::new("language")
                .long("language")
                .short('l')
                .help("Language id or alias (default from config: metta)"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: html, json, simple (default from config: html)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("list-languages")
                .long("list-languages")
                .help("List available languages")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue),
        )
}

fn load_config(matches: &ArgMatches) -> Result<HighlightConfig> {
    let mut loader = Loader::new().with_environment();
    if let Some(path) = matches.get_one::<String>("config") {
        log::debug!("layering config file {}", path);
        loader = loader.with_file(path);
    }
    loader.build().context("invalid configuration")
}

fn run(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;

    let format = matches
        .get_one::<String>("format")
        .cloned()
        .unwrap_or_else(|| config.highlight.format.clone());
    let highlighter = config.highlighter().with_format(format.as_str());

    if matches.get_flag("list-languages") {
        handle_list_languages_command(&highlighter);
        return Ok(());
    }
    if matches.get_flag("list-formats") {
        handle_list_formats_command(&highlighter);
        return Ok(());
    }

    let language = matches
        .get_one::<String>("language")
        .cloned()
        .unwrap_or_else(|| config.highlight.language.clone());
    if !highlighter.languages().has(&language) {
        bail!(
            "unknown language '{}' (available: {})",
            language,
            highlighter.languages().list_languages().join(", ")
        );
    }
    if !highlighter.formats().has(&format) {
        bail!(
            "unknown format '{}' (available: {})",
            format,
            highlighter.formats().list_formats().join(", ")
        );
    }

    let source = read_source(matches.get_one::<String>("path").map(String::as_str))?;
    log::debug!(
        "highlighting {} bytes as {} into {}",
        source.len(),
        language,
        format
    );
    let output = highlighter.highlight(&language, &source)?;
    print!("{}", output);
    Ok(())
}

fn read_source(path: Option<&str>) -> Result<String> {
    match path {
        None | Some("-") => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("cannot read stdin")?;
            Ok(source)
        }
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("cannot read {}", path))
        }
    }
}

/// Handle the list-languages command
fn handle_list_languages_command(highlighter: &metta_highlight::Highlighter) {
    let languages = highlighter.languages();
    println!("Available languages:\n");

    for id in languages.list_languages() {
        let aliases = languages.aliases_of(&id);
        if aliases.is_empty() {
            println!("  {}", id);
        } else {
            println!("  {} (aliases: {})", id, aliases.join(", "));
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command(highlighter: &metta_highlight::Highlighter) {
    let formats = highlighter.formats();
    println!("Available formats:\n");

    for name in formats.list_formats() {
        println!("  {}", name);
        if let Ok(format) = formats.get(&name) {
            println!("    {}", format.description());
        }
        println!();
    }
}
