// Command-line interface for light
//
// Turns plain-text books into light markup, and reports how much descriptor interning saves.
//
// Usage:
//  light <input> [--output <file>] [--no-interning]          - Convert a text file (default)
//  light convert <input> [--output <file>] [--no-interning]  - Same as above (explicit)
//  light stats <input> [--json]                               - Compare interned vs fresh builds
//  light list <item>... [--class <name>]...                   - Render a navigation list
//
// Configuration is read from the embedded defaults, then ./light.toml if present, then --config.
// Logs go to stderr (RUST_LOG, or --verbose for debug) so stdout is always just the output.

mod summary;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use light_config::{LightConfig, Loader};
use light_dom::source::read_lines;
use light_dom::{
    build_list, build_tree, classify_lines, render_element, ClassifierRules, DescriptorParams,
    DescriptorRegistry, FreshDescriptors, InterningReport,
};
use std::fs;
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["convert", "stats", "list", "help"];
const GLOBAL_FLAGS: &[&str] = &["-v", "--verbose"];
const GLOBAL_OPTIONS: &[&str] = &["--config"];

fn build_cli() -> Command {
    Command::new("light")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render plain-text books into light markup")
        .long_about(
            "light reads a plain-text file, classifies each line as a heading, subheading,\n\
            quote or paragraph, and renders the result as markup.\n\n\
            Element descriptors (tag, display, closing behavior, classes) are interned and\n\
            shared between elements. Use `stats` to see the difference that makes.\n\n\
            Examples:\n  \
            light book.txt                       # Markup to stdout\n  \
            light book.txt -o book.html          # Markup to a file\n  \
            light stats book.txt --json          # Interning report as JSON\n  \
            light list Home About Contact        # <ul class=\"nav-list main-menu\">...",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a light.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a text file to markup (default command)")
                .arg(
                    Arg::new("input")
                        .help("Input text file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("no-interning")
                        .long("no-interning")
                        .help("Allocate a fresh descriptor for every element")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("subheading-max-len")
                        .long("subheading-max-len")
                        .value_name("N")
                        .help("Lines shorter than N characters become subheadings")
                        .value_parser(clap::value_parser!(u32)),
                ),
        )
        .subcommand(
            Command::new("stats")
                .about("Build the file with and without interning and compare")
                .arg(
                    Arg::new("input")
                        .help("Input text file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the report as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("Render items as a navigation list")
                .arg(
                    Arg::new("items")
                        .help("List item texts")
                        .required(true)
                        .num_args(1..)
                        .index(1),
                )
                .arg(
                    Arg::new("class")
                        .long("class")
                        .value_name("NAME")
                        .help("Class for the list container (repeatable, replaces the configured classes)")
                        .action(ArgAction::Append),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // `light book.txt` means `light convert book.txt`
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => match with_default_subcommand(&args) {
            Some(new_args) => match cli.try_get_matches_from(&new_args) {
                Ok(m) => m,
                Err(e2) => e2.exit(),
            },
            None => e.exit(),
        },
    };

    init_tracing(matches.get_flag("verbose"));

    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        matches.subcommand().map(|(_, sub)| sub),
    );

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, output, &config);
        }
        Some(("stats", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            handle_stats_command(input, sub_matches.get_flag("json"), &config);
        }
        Some(("list", sub_matches)) => {
            let items: Vec<String> = sub_matches
                .get_many::<String>("items")
                .map(|values| values.cloned().collect())
                .unwrap_or_default();
            let classes: Option<Vec<String>> = sub_matches
                .get_many::<String>("class")
                .map(|values| values.cloned().collect());
            handle_list_command(&items, classes, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Insert `convert` before the first positional argument, skipping leading global flags.
///
/// Returns `None` when there is no positional argument, when it already names a subcommand,
/// or when an unknown flag comes first.
fn with_default_subcommand(args: &[String]) -> Option<Vec<String>> {
    let mut index = 1;
    while let Some(arg) = args.get(index) {
        if GLOBAL_FLAGS.contains(&arg.as_str()) {
            index += 1;
        } else if GLOBAL_OPTIONS.contains(&arg.as_str()) {
            index += 2;
        } else if GLOBAL_OPTIONS
            .iter()
            .any(|option| arg.starts_with(&format!("{option}=")))
        {
            index += 1;
        } else {
            break;
        }
    }

    let first = args.get(index)?;
    if first.starts_with('-') || SUBCOMMANDS.contains(&first.as_str()) {
        return None;
    }

    let mut new_args = args[..index].to_vec();
    new_args.push("convert".to_string());
    new_args.extend_from_slice(&args[index..]);
    Some(new_args)
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the convert command
fn handle_convert_command(input: &str, output: Option<&str>, config: &LightConfig) {
    let lines = read_lines(input).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let rules = ClassifierRules::from(&config.classify);
    let root = DescriptorParams::from(&config.root);
    let classified = classify_lines(&lines, &rules);

    let html = if config.build.interning {
        let registry = DescriptorRegistry::new();
        let tree = build_tree(&registry, &root, &classified);
        tracing::info!(
            children = tree.child_count(),
            descriptors = registry.len(),
            "converted with interning"
        );
        render_element(&tree)
    } else {
        let fresh = FreshDescriptors::new();
        let tree = build_tree(&fresh, &root, &classified);
        tracing::info!(
            children = tree.child_count(),
            descriptors = fresh.allocated(),
            "converted without interning"
        );
        render_element(&tree)
    };

    match output {
        Some(path) => {
            fs::write(path, html).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{html}"),
    }
}

/// Handle the stats command
fn handle_stats_command(input: &str, json: bool, config: &LightConfig) {
    let lines = read_lines(input).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let classified = classify_lines(&lines, &ClassifierRules::from(&config.classify));
    let report = InterningReport::compare(&DescriptorParams::from(&config.root), &classified);

    if json {
        let text = serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
            eprintln!("JSON serialization failed: {e}");
            std::process::exit(1);
        });
        println!("{text}");
    } else {
        print!("{}", summary::format_report(&report));
    }
}

/// Handle the list command
fn handle_list_command(items: &[String], classes: Option<Vec<String>>, config: &LightConfig) {
    let mut list = config.list.list_params();
    if let Some(classes) = classes {
        list = list.with_classes(classes);
    }
    let item = config.list.item_params();

    let registry = DescriptorRegistry::new();
    let menu = build_list(&registry, &list, &item, items.iter().cloned());
    print!("{}", render_element(&menu));
}

fn load_cli_config(explicit_path: Option<&str>, sub_matches: Option<&ArgMatches>) -> LightConfig {
    let loader = Loader::new().with_optional_file("light.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    let loader = apply_cli_overrides(loader, sub_matches).unwrap_or_else(|err| {
        eprintln!("Invalid override: {err}");
        std::process::exit(1);
    });

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Flags win over every configuration file.
fn apply_cli_overrides(
    mut loader: Loader,
    sub_matches: Option<&ArgMatches>,
) -> Result<Loader, light_config::ConfigError> {
    let Some(sub_matches) = sub_matches else {
        return Ok(loader);
    };

    if has_flag(sub_matches, "no-interning") {
        loader = loader.set_override("build.interning", false)?;
    }
    if let Some(Some(len)) = sub_matches
        .try_get_one::<u32>("subheading-max-len")
        .ok()
        .map(|v| v.copied())
    {
        loader = loader.set_override("classify.subheading_max_len", i64::from(len))?;
    }
    Ok(loader)
}

fn has_flag(matches: &ArgMatches, id: &str) -> bool {
    matches
        .try_get_one::<bool>(id)
        .ok()
        .flatten()
        .copied()
        .unwrap_or(false)
}
