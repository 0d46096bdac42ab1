// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Command-line interface code. Each `tart-geometry` subcommand has its own
//! module.
//!
//! Only 3 things should be public in this module: `TartGeometry`,
//! `TartGeometry::run`, and `TartGeometryError`.

mod baseline;
mod common;
mod coords;
mod delay;
mod error;
mod uvw;

pub use error::TartGeometryError;

use clap::{AppSettings, Args, Parser, Subcommand};
use log::info;

// Add build-time information from the "built" crate.
include!(concat!(env!("OUT_DIR"), "/built.rs"));

#[derive(Debug, Parser)]
#[clap(
    version,
    author,
    about = "Geometry and visibility-rotation tools for the TART radio telescope"
)]
#[clap(global_setting(AppSettings::DeriveDisplayOrder))]
#[clap(disable_help_subcommand = true)]
#[clap(infer_subcommands = true)]
#[clap(propagate_version = true)]
#[clap(infer_long_args = true)]
pub struct TartGeometry {
    #[clap(flatten)]
    global_opts: GlobalArgs,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct GlobalArgs {
    /// The verbosity of the program. Increase by specifying multiple times
    /// (e.g. -vv). The default is to print only high-level information.
    #[clap(short, long, parse(from_occurrences))]
    #[clap(global = true)]
    verbosity: u8,
}

#[derive(Debug, Subcommand)]
#[clap(arg_required_else_help = true)]
enum Command {
    #[clap(about = "Print the UVW of every configured baseline toward an (RA, Dec).")]
    Uvw(uvw::UvwArgs),

    #[clap(about = "Convert a horizontal direction (elevation, azimuth) to (RA, Dec).")]
    Radec(coords::RadecArgs),

    #[clap(about = "Convert an (RA, Dec) to a horizontal direction (elevation, azimuth).")]
    Azel(coords::AzelArgs),

    #[clap(about = "Print the geometric delay of every antenna toward a horizontal direction.")]
    Delay(delay::DelayArgs),

    #[clap(about = "Encode or decode baseline identifiers.")]
    Baseline(baseline::BaselineArgs),
}

impl TartGeometry {
    pub fn run(self) -> Result<(), TartGeometryError> {
        // Set up logging.
        let GlobalArgs { verbosity } = self.global_opts;
        setup_logging(verbosity)?;

        // Print the version of tart-geometry and its build-time information.
        let sub_command = match &self.command {
            Command::Uvw(_) => "uvw",
            Command::Radec(_) => "radec",
            Command::Azel(_) => "azel",
            Command::Delay(_) => "delay",
            Command::Baseline(_) => "baseline",
        };
        info!("tart-geometry {} {}", sub_command, env!("CARGO_PKG_VERSION"));
        display_build_info();

        match self.command {
            Command::Uvw(args) => args.run()?,
            Command::Radec(args) => args.run()?,
            Command::Azel(args) => args.run()?,
            Command::Delay(args) => args.run()?,
            Command::Baseline(args) => args.run()?,
        }

        info!("tart-geometry {} complete.", sub_command);
        Ok(())
    }
}

/// Activate a logger. All log messages are put onto `stdout`. `env_logger`
/// automatically only uses colours and fancy symbols if we're on a tty (e.g. a
/// terminal); piped output will be formatted sensibly. Source code lines are
/// displayed in log messages when verbosity >= 3.
fn setup_logging(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.target(env_logger::Target::Stdout);
    builder.format_target(false);
    match verbosity {
        0 => builder.filter_level(log::LevelFilter::Info),
        1 => builder.filter_level(log::LevelFilter::Debug),
        2 => builder.filter_level(log::LevelFilter::Trace),
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
            builder.format(|buf, record| {
                use std::io::Write;

                let timestamp = buf.timestamp();
                let level = record.level();
                let target = record.target();
                let line = record.line().unwrap_or(0);
                let message = record.args();

                writeln!(buf, "[{timestamp} {level} {target}:{line}] {message}")
            })
        }
    };
    builder.try_init()
}

/// Write many info-level log lines of how this executable was compiled.
fn display_build_info() {
    let dirty = match GIT_DIRTY {
        Some(true) => " (dirty)",
        _ => "",
    };
    match GIT_COMMIT_HASH_SHORT {
        Some(hash) => {
            info!("Compiled on git commit hash: {hash}{dirty}");
        }
        None => info!("Compiled on git commit hash: <no git info>"),
    }
    if let Some(hr) = GIT_HEAD_REF {
        info!("            git head ref: {}", hr);
    }
    info!("            {}", BUILT_TIME_UTC);
    info!("         with compiler {}", RUSTC_VERSION);
    info!("");
}
