//! Build script for modelpath-cli.
//!
//! Generates the man page at build time using clap_mangen and places it in
//! OUT_DIR for inclusion in release builds.
//!
//! Build scripts cannot depend on the crate being built, so the command tree
//! is described here by hand.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep in sync with src/cli.rs.
fn build_cli() -> Command {
    let ext = || {
        Arg::new("ext")
            .long("ext")
            .value_name("EXT")
            .help("Allowed extension (repeatable)")
            .action(ArgAction::Append)
    };

    Command::new("modelpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve model file references against search roots")
        .long_about(
            "Resolve loosely specified building-model file references (absolute, relative, \
             ~-prefixed, or Windows drive paths) against an ordered list of search roots, \
             and suggest similar names when a file cannot be found",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Additional configuration file, layered above discovered ones")
                .value_name("PATH")
                .global(true)
                .env("MODELPATH_CONFIG"),
        )
        .arg(
            Arg::new("workspace-root")
                .long("workspace-root")
                .help("Override the workspace root")
                .value_name("PATH")
                .global(true)
                .env("MODELPATH_WORKSPACE_ROOT"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format")
                .value_parser(["human", "json"])
                .global(true),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Resolve an existing file")
                .arg(Arg::new("path").value_name("PATH").required(true))
                .arg(
                    Arg::new("kind")
                        .long("kind")
                        .value_parser(["model", "idf"])
                        .help("Kind of file expected; sets the allowed extension"),
                )
                .arg(ext())
                .arg(
                    Arg::new("no-fuzzy")
                        .long("no-fuzzy")
                        .help("Do not compute suggestions when the file is missing")
                        .action(ArgAction::SetTrue),
                ),
            Command::new("output")
                .about("Resolve a path to write to, creating its directory")
                .arg(Arg::new("path").value_name("PATH").required(true))
                .arg(
                    Arg::new("dir")
                        .long("dir")
                        .value_name("DIR")
                        .help("Directory for bare names; defaults to the output root"),
                )
                .arg(ext()),
            Command::new("suggest")
                .about("Suggest files with names similar to PATH")
                .arg(Arg::new("path").value_name("PATH").required(true))
                .arg(ext()),
            Command::new("find")
                .about("Find model files by partial name")
                .arg(Arg::new("name").value_name("NAME").required(true))
                .arg(ext()),
            Command::new("copy")
                .about("Copy a file between resolved locations")
                .arg(Arg::new("source").value_name("SOURCE").required(true))
                .arg(Arg::new("target").value_name("TARGET").required(true))
                .arg(
                    Arg::new("overwrite")
                        .long("overwrite")
                        .help("Replace an existing target")
                        .action(ArgAction::SetTrue),
                ),
            Command::new("roots").about("Show the search roots in priority order"),
            Command::new("show-config").about("Show the effective configuration"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(Arg::new("shell").value_name("SHELL").required(true)),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("modelpath.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
