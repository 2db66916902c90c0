//! `matswap`: convert recipe JSON files between material families

mod commands;
mod config;

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgMatches, Command};
use commands::ConvertRequest;
use config::MaterialTable;
use matswap_item::{Item, ItemError, ResourceLocation};
use matswap_template::TemplateRegistry;
use std::fs;
use std::path::PathBuf;

fn parse_location(value: &str) -> Result<ResourceLocation, ItemError> {
    value.parse()
}

fn parse_item(value: &str) -> Result<Item, ItemError> {
    Item::parse(value)
}

fn cli() -> Command {
    Command::new("matswap")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert recipes from one material family to another")
        .subcommand_required(true)
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .default_value("warn")
                .help("Log filter used when RUST_LOG is not set"),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a recipe JSON file and print the result")
                .arg(
                    Arg::new("materials")
                        .long("materials")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("TOML material table"),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .required(true)
                        .value_parser(parse_location)
                        .help("Source material id"),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .required(true)
                        .value_parser(parse_location)
                        .help("Destination material id"),
                )
                .arg(
                    Arg::new("unlock")
                        .long("unlock")
                        .value_parser(parse_item)
                        .help("Item that unlocks the converted recipe"),
                )
                .arg(
                    Arg::new("id")
                        .long("id")
                        .value_parser(parse_location)
                        .help("Identifier of the converted recipe"),
                )
                .arg(
                    Arg::new("recipe")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Recipe JSON file"),
                ),
        )
        .subcommand(Command::new("kinds").about("List registered recipe kinds"))
}

fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run_convert(args: &ArgMatches) -> Result<()> {
    let required = |name: &str| -> Result<ResourceLocation> {
        args.get_one::<ResourceLocation>(name)
            .cloned()
            .with_context(|| format!("missing --{name}"))
    };
    let materials = args
        .get_one::<PathBuf>("materials")
        .context("missing --materials")?;
    let recipe_path = args.get_one::<PathBuf>("recipe").context("missing recipe")?;

    let table = MaterialTable::load(materials)?;
    let text = fs::read_to_string(recipe_path)
        .with_context(|| format!("failed to read recipe {}", recipe_path.display()))?;
    let recipe = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse recipe {}", recipe_path.display()))?;

    let request = ConvertRequest {
        from: required("from")?,
        to: required("to")?,
        unlock: args.get_one::<Item>("unlock").cloned(),
        id: args.get_one::<ResourceLocation>("id").cloned(),
    };
    let converted = commands::convert(TemplateRegistry::global(), &table, &recipe, request)?;
    println!("{}", serde_json::to_string_pretty(&converted)?);
    Ok(())
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    let level = matches
        .subcommand()
        .and_then(|(_, args)| args.get_one::<String>("log-level"))
        .or_else(|| matches.get_one::<String>("log-level"))
        .map_or("warn", String::as_str);
    init_tracing(level);

    match matches.subcommand() {
        Some(("convert", args)) => run_convert(args),
        Some(("kinds", _)) => {
            println!("{}", commands::kinds(TemplateRegistry::global()));
            Ok(())
        }
        _ => Ok(()),
    }
}
