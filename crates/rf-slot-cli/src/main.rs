//! Slot - Terminal Slot Machine
//!
//! Usage:
//!   slot                        - Interactive play (default)
//!   slot simulate --spins N     - Batch simulation with RTP summary
//!   slot config [--yaml]        - Print the active machine configuration

mod play;
mod prompt;
mod render;
mod session;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rf_reels::{MachineConfig, Simulation, SimulationReport, SlotMachine, seeded_rng};

use crate::prompt::Prompter;

#[derive(Parser)]
#[command(name = "slot", about = "Reel-based slot machine")]
struct Cli {
    /// Machine configuration (.json, .yaml or .yml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed for reproducible spins
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively in the terminal
    Play,
    /// Run many rounds with a fixed wager
    Simulate {
        /// Number of rounds
        #[arg(long, default_value_t = 100_000)]
        spins: u64,
        /// Lines to bet on, space separated
        #[arg(long, default_value = "1 2 3")]
        lines: String,
        /// Bet per line
        #[arg(long, default_value = "100")]
        bet: String,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the machine configuration
    Config {
        /// YAML instead of JSON
        #[arg(long)]
        yaml: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = load_config(cli.config.as_ref())?;
    let machine = SlotMachine::new(config.clone()).context("Invalid machine configuration")?;
    log::info!(
        "Machine ready: {}x{} grid, {} symbols",
        machine.grid_spec().reels,
        machine.grid_spec().rows,
        machine.paytable().symbols().len()
    );

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(&machine, cli.seed),
        Commands::Simulate {
            spins,
            lines,
            bet,
            json,
        } => run_simulate(&machine, cli.seed, spins, &lines, &bet, json),
        Commands::Config { yaml } => print_config(&config, yaml),
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<MachineConfig> {
    match path {
        Some(path) => MachineConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(MachineConfig::classic()),
    }
}

fn run_play(machine: &SlotMachine, seed: Option<u64>) -> Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let mut rng = seeded_rng(seed);

    if let Some(session) = play::run(machine, &mut prompter, &mut rng)? {
        let stats = session.stats();
        log::info!(
            "Session over: {} rounds, wagered {}, won {}",
            stats.total_rounds,
            stats.total_wagered,
            stats.total_won
        );
    }
    Ok(())
}

fn run_simulate(
    machine: &SlotMachine,
    seed: Option<u64>,
    spins: u64,
    lines: &str,
    bet: &str,
    json: bool,
) -> Result<()> {
    let wager = play::fixed_wager(machine, lines, bet).context("Invalid simulation wager")?;
    let mut rng = seeded_rng(seed);

    let report = Simulation::new(machine, &wager).run(spins, &mut rng)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, machine);
    }
    Ok(())
}

fn print_report(report: &SimulationReport, machine: &SlotMachine) {
    let stats = &report.stats;
    println!("Spins:          {}", report.spins);
    println!("Total wagered:  {}", render::money(stats.total_wagered));
    println!("Total won:      {}", render::money(stats.total_won));
    println!("Net:            {}", render::money(stats.net()));
    println!("RTP:            {}%", stats.rtp());
    println!("Hit rate:       {:.2}%", stats.hit_rate());
    println!("Biggest win:    {}", render::money(stats.biggest_win));

    println!();
    println!("Line hits:");
    for (line, hits) in &stats.line_hits {
        println!("  {line}: {hits}");
    }

    println!();
    println!("Max per grid (weight):");
    let symbols = machine.paytable().symbols();
    for (symbol, count) in &report.max_symbol_counts {
        println!("  {symbol}: {count} ({})", symbols.weight(*symbol).unwrap_or(0));
    }
    if !report.respects_weights(machine) {
        log::warn!("A grid exceeded a symbol weight");
    }
}

fn print_config(config: &MachineConfig, yaml: bool) -> Result<()> {
    let text = if yaml {
        config.to_yaml()?
    } else {
        config.to_json()?
    };
    println!("{text}");
    Ok(())
}
