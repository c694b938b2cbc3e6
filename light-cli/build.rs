use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the command tree in src/main.rs
// Build scripts can't access src/ modules, so the shape is duplicated here.
fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let input = || {
        Arg::new("input")
            .help("Input text file")
            .required(true)
            .index(1)
            .value_hint(ValueHint::FilePath)
    };

    let mut cmd = Command::new("light")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render plain-text books into light markup")
        .arg(
            Arg::new("config")
                .long("config")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .arg(input())
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("no-interning")
                        .long("no-interning")
                        .action(ArgAction::SetTrue),
                )
                .arg(Arg::new("subheading-max-len").long("subheading-max-len")),
        )
        .subcommand(
            Command::new("stats").arg(input()).arg(
                Arg::new("json")
                    .long("json")
                    .action(ArgAction::SetTrue),
            ),
        )
        .subcommand(
            Command::new("list")
                .arg(Arg::new("items").num_args(1..).index(1))
                .arg(Arg::new("class").long("class").action(ArgAction::Append)),
        );

    generate_to(Bash, &mut cmd, "light", &outdir)?;
    generate_to(Zsh, &mut cmd, "light", &outdir)?;
    generate_to(Fish, &mut cmd, "light", &outdir)?;

    println!("cargo:rerun-if-changed=build.rs");

    Ok(())
}
