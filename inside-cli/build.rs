//! Build script for inside-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("inside")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Check whether one path lies strictly inside another")
        .long_about(
            "Decide whether one filesystem path lies strictly inside another. \
             Paths may be absolute or relative; relative paths are resolved lexically \
             against a base directory without touching the filesystem.",
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
                .help("Load configuration from this file")
                .value_name("PATH")
                .global(true)
                .env("INSIDE_CONFIG"),
        )
        .arg(
            Arg::new("base-dir")
                .long("base-dir")
                .help("Resolve relative paths against this directory")
                .value_name("DIR")
                .global(true),
        )
        .arg(
            Arg::new("cache-capacity")
                .long("cache-capacity")
                .help("Maximum number of cached path resolutions")
                .value_name("N")
                .global(true),
        )
        .subcommands(vec![
            Command::new("check")
                .about("Check whether a path is strictly inside another")
                .long_about(
                    "Print true or false; exit 0 when CHILD is inside PARENT and 1 otherwise",
                ),
            Command::new("resolve")
                .about("Show the resolved form of paths")
                .long_about("Print the absolute, normalized form used by the containment check"),
            Command::new("relation")
                .about("Describe how two paths relate")
                .long_about("Classify two paths as ancestor, descendant, same, or unrelated"),
            Command::new("bench")
                .about("Benchmark containment checks")
                .long_about("Time containment checks across common scenarios and report cache statistics"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = std::env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR is not set"))?;
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("inside.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
