//! `cascade` binary: batch simulation and one-shot network statistics.

//-----------------------------------------------------------------------------
// Imports
//-----------------------------------------------------------------------------

use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cascade_io::{
    apply_events, load_network, log_file_name, read_lines, render_timestep_log, write_lines,
};
use cascade_network::{Network, SimulationConfig};

//-----------------------------------------------------------------------------
// CLI Definition
//-----------------------------------------------------------------------------

#[derive(Parser)]
#[command(name = "cascade", version, about = "Social network post propagation simulator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load a network and an event file, then run timesteps until every
    /// post has gone stale, appending statistics to a log file.
    Simulate {
        /// Network file: one `name` or `follower:followed` record per line.
        netfile: PathBuf,
        /// Event file: `A:name`, `F:follower:followed`,
        /// `P:author:content[:clickbait]` records.
        eventfile: PathBuf,
        /// JSON file holding a simulation configuration; explicit flags
        /// below override its values.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Base probability that an eligible user likes a post.
        #[arg(long)]
        like_chance: Option<f64>,
        /// Probability that a liking user follows the post's author.
        #[arg(long)]
        follow_chance: Option<f64>,
        /// Seed for a reproducible run; drawn from entropy when omitted.
        #[arg(long)]
        seed: Option<u64>,
        /// Stop after this many timesteps even if posts are still live.
        #[arg(long)]
        max_steps: Option<u64>,
    },
    /// Load a network file and print its structure and rankings.
    Stats {
        /// Network file to inspect.
        netfile: PathBuf,
    },
}

//-----------------------------------------------------------------------------
// Entry Point
//-----------------------------------------------------------------------------

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match Cli::parse().command {
        Command::Simulate {
            netfile,
            eventfile,
            config,
            like_chance,
            follow_chance,
            seed,
            max_steps,
        } => {
            let mut config = match config {
                Some(path) => {
                    let raw = std::fs::read_to_string(&path)
                        .with_context(|| format!("reading config file '{}'", path.display()))?;
                    serde_json::from_str(&raw)
                        .with_context(|| format!("parsing config file '{}'", path.display()))?
                }
                None => SimulationConfig::default(),
            };
            if let Some(chance) = like_chance {
                config.like_chance = chance;
            }
            if let Some(chance) = follow_chance {
                config.follow_chance = chance;
            }
            if seed.is_some() {
                config.seed = seed;
            }
            if max_steps.is_some() {
                config.max_steps = max_steps;
            }
            simulate(&netfile, &eventfile, config)
        }
        Command::Stats { netfile } => stats(&netfile),
    }
}

//-----------------------------------------------------------------------------
// Commands
//-----------------------------------------------------------------------------

fn load_from_file(network: &mut Network, netfile: &PathBuf) -> anyhow::Result<()> {
    let lines = read_lines(netfile)
        .with_context(|| format!("reading network file '{}'", netfile.display()))?;
    load_network(network, lines)
        .with_context(|| format!("parsing network file '{}'", netfile.display()))
}

fn simulate(netfile: &PathBuf, eventfile: &PathBuf, config: SimulationConfig) -> anyhow::Result<()> {
    let mut network = Network::from_config(&config).context("invalid simulation parameters")?;
    load_from_file(&mut network, netfile)?;

    let events = read_lines(eventfile)
        .with_context(|| format!("reading event file '{}'", eventfile.display()))?;
    let skipped = apply_events(&mut network, events);
    for event in &skipped {
        eprintln!(
            "skipped event (line {}): {} ({})",
            event.line, event.content, event.reason
        );
    }

    let logfile = log_file_name(netfile, eventfile, Local::now());
    info!(
        seed = network.seed(),
        users = network.user_count(),
        posts = network.post_count(),
        logfile = %logfile,
        "simulation starting"
    );
    write_lines(&logfile, &render_timestep_log(&network), false)
        .with_context(|| format!("writing log file '{logfile}'"))?;

    while !network.all_posts_stale() {
        if let Some(cap) = config.max_steps {
            if network.current_time() >= cap {
                eprintln!("step cap {cap} reached with live posts remaining");
                break;
            }
        }
        network.time_step().context("advancing simulation")?;
        write_lines(&logfile, &render_timestep_log(&network), true)
            .with_context(|| format!("writing log file '{logfile}'"))?;
    }

    println!(
        "simulation finished after {} timesteps (seed {}), log written to {}",
        network.current_time(),
        network.seed(),
        logfile
    );
    Ok(())
}

fn stats(netfile: &PathBuf) -> anyhow::Result<()> {
    let mut network = Network::new();
    load_from_file(&mut network, netfile)?;

    println!("adjacency list:");
    print!("{}", network.graph().format_adjacency_list()?);
    println!();
    println!("adjacency matrix:");
    print!("{}", network.graph().format_adjacency_matrix()?);
    println!();
    println!("users by followers:");
    for (name, info) in network.users_by_followers() {
        println!("  {name}: {info}");
    }
    Ok(())
}
