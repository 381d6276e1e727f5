// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

use oxiver::{
    buildnum,
    config::RewriteDefinition,
    genver::{self, VersionStamp},
    path::default_definition_path,
    pom::PomRewriter,
    scm,
    syscall::BinCall,
    version::PomVersion,
};

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use std::{fs::read_to_string, path::PathBuf, process::exit};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Clone, Parser)]
#[command(
    about,
    override_usage = "\n  oxiver [options] <oxiver-command>",
    subcommand_help_heading = "Commands",
    version
)]
struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    fn run(self) -> Result<()> {
        match self.command {
            Command::SetProps(opts) => run_set_props(opts),
            Command::GenVer(opts) => run_gen_ver(opts),
            Command::BuildNum => run_build_num(),
            Command::ScmInfo => run_scm_info(),
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Rewrite version properties inside the POM file of the current directory.
    #[command(override_usage = "oxiver set-props [options]")]
    SetProps(SetPropsOptions),

    /// Generate version information file for the current build.
    #[command(override_usage = "oxiver gen-ver [options] --pom-version <version> --output <path>")]
    GenVer(GenVerOptions),

    /// Print build number derived from the current date.
    #[command(override_usage = "oxiver build-num")]
    BuildNum,

    /// Print source control metadata of the current working copy.
    #[command(override_usage = "oxiver scm-info")]
    ScmInfo,
}

#[derive(Parser, Clone, Debug)]
#[command(author, about, long_about)]
struct SetPropsOptions {
    /// Path to rewrite definition file.
    #[arg(short, long, value_name = "path")]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Clone, Debug)]
#[command(author, about, long_about)]
struct GenVerOptions {
    /// POM version of the project being built.
    #[arg(short, long, value_name = "version")]
    pub pom_version: String,

    /// Build configuration, e.g. Debug or Release.
    #[arg(short, long, value_name = "name", default_value = "")]
    pub cfg: String,

    /// Description to embed into the version information file.
    #[arg(short, long, value_name = "summary", default_value = "")]
    pub descr: String,

    /// Output file path.
    #[arg(short, long, value_name = "path")]
    pub output: PathBuf,
}

fn main() {
    let layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_timer(false)
        .without_time();
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();
    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .init();

    if let Err(error) = run() {
        error!("{error:?}");
        exit(1);
    }

    exit(0)
}

fn run() -> Result<()> {
    Cli::parse().run()
}

fn run_set_props(opts: SetPropsOptions) -> Result<()> {
    let definition = load_definition(opts.config)?;
    let rewriter = PomRewriter::new(&definition.settings.file);
    let props = rewriter.apply(definition.extra_properties())?;
    info!(
        "updated {} properties in {:?}",
        props.len(),
        definition.settings.file.display()
    );

    Ok(())
}

fn run_gen_ver(opts: GenVerOptions) -> Result<()> {
    let version: PomVersion = opts.pom_version.parse()?;
    let stamp = VersionStamp {
        version,
        build_number: buildnum::current_build_number(),
        configuration: opts.cfg,
        description: opts.descr,
        scm_info: scm::scm_info_or_unknown(&BinCall),
        build_time: Local::now(),
        host: genver::build_host(),
    };

    genver::write_version_file(&opts.output, &stamp)?;

    Ok(())
}

fn run_build_num() -> Result<()> {
    println!("{}", buildnum::current_build_number());

    Ok(())
}

fn run_scm_info() -> Result<()> {
    println!("{}", scm::scm_info(&BinCall)?);

    Ok(())
}

/// Pick the rewrite definition for this run.
///
/// Lookup order: explicit --config path, then "oxiver.toml" in the current
/// working directory, then the XDG default. Without any of those the
/// built-in defaults apply, which rewrite "pom.xml" in the current working
/// directory.
fn load_definition(config: Option<PathBuf>) -> Result<RewriteDefinition> {
    let path = match config {
        Some(path) => Some(path),
        None => {
            let local = PathBuf::from("oxiver.toml");
            if local.exists() {
                Some(local)
            } else {
                let fallback = default_definition_path()?;
                fallback.exists().then_some(fallback)
            }
        }
    };

    match path {
        Some(path) => {
            info!("use rewrite definition at {:?}", path.display());
            Ok(read_to_string(path)?.parse()?)
        }
        None => Ok(RewriteDefinition::default()),
    }
}
