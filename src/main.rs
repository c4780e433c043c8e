//! `showreel` command-line entry point.
//!
//! Thin wrapper over the library for working without a browser:
//!
//! - `showreel replay --site site.toml --script script.json` runs a replay
//!   script against the headless host and prints the final scene as JSON
//! - `showreel overlay --site site.toml` prints each project's overlay markup
//!
//! Both accept `--config <file>` for a TOML [`Config`]. Diagnostics go to
//! stderr, filtered by `RUST_LOG` or the config's `trace_level`.

#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use serde::Serialize;
use showreel::observability::init_tracing;
use showreel::runtime::Scene;
use showreel::ui::{build_overlay, render_overlay_html};
use showreel::{initialize, Config, HeadlessHost, ReplayScript, Result, ShowreelError, SiteConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "showreel", version, about = "Portfolio pager and carousel, headless")]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a scripted event sequence and print the resulting scene.
    Replay {
        /// Site description (TOML, or JSON with a `.json` extension).
        #[arg(long)]
        site: PathBuf,
        /// Replay script (JSON).
        #[arg(long)]
        script: PathBuf,
    },
    /// Print the overlay markup of every project.
    Overlay {
        #[arg(long)]
        site: PathBuf,
    },
}

#[derive(Serialize)]
struct ReplayReport<'a> {
    now_ms: u64,
    section: usize,
    project: usize,
    scene: &'a Scene,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config.as_ref().map(Config::from_file).transpose()?.unwrap_or_default();
    init_tracing(&config);

    match cli.command {
        Command::Replay { site, script } => {
            let site = SiteConfig::from_file(&site)?;
            let script = ReplayScript::from_file(&script)?;

            let mut host = HeadlessHost::new(initialize(&config, site));
            script.run(&mut host)?;

            let report = ReplayReport {
                now_ms: host.now_ms(),
                section: host.state().pager.current_index(),
                project: host.state().carousel.index(),
                scene: host.scene(),
            };
            let json = serde_json::to_string_pretty(&report).map_err(|e| ShowreelError::Replay(e.to_string()))?;
            println!("{json}");
        }
        Command::Overlay { site } => {
            let site = SiteConfig::from_file(&site)?;
            for project in &site.projects {
                println!("<!-- {} -->", project.title);
                println!("{}", render_overlay_html(&build_overlay(project)));
            }
        }
    }

    Ok(())
}
