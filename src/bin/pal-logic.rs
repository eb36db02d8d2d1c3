//! PAL Logic - Command Line Interface
//!
//! Minimizes PAL equations and steps them through a simulation.

use clap::{Args, Parser, Subcommand};
use log::info;
use pal_logic::{BitFormatter, BoolExpr, Chip, PalConfig, PalError, Simulation};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "pal-logic")]
#[command(about = "Minimize and simulate programmable logic equations", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Minimize equations and print them in registered PAL form
    Minimize {
        #[command(flatten)]
        chip: ChipArgs,

        /// Output file (writes to stdout if not specified)
        #[arg(short = 'O', long = "out-file")]
        output_file: Option<PathBuf>,
    },
    /// Simulate the equations as one registered chip
    Simulate {
        #[command(flatten)]
        chip: ChipArgs,

        /// Drive an input before every tick, e.g. `--set CLR=1`
        #[arg(long = "set", value_name = "PIN=0|1", value_parser = parse_stimulus)]
        stimuli: Vec<(String, bool)>,

        /// Number of clock ticks to run
        #[arg(short = 't', long, default_value_t = 8)]
        ticks: usize,

        /// Start from a random state generated from this seed
        #[arg(long)]
        seed: Option<u64>,

        /// Template for printing the chip state, e.g. `[x0-3] [4,CLR]`
        #[arg(short = 'f', long)]
        format: Option<String>,
    },
}

#[derive(Args, Debug)]
struct ChipArgs {
    /// Chip name
    #[arg(short = 'n', long, default_value = "chip")]
    name: String,

    /// Input pins in bit order (default: every referenced name that is not an output)
    #[arg(short = 'i', long, value_delimiter = ',')]
    inputs: Option<Vec<String>>,

    /// Skip checking minimized equations against their truth tables
    #[arg(long)]
    no_verify: bool,

    /// Equations of the form `NAME = EXPR`
    #[arg(value_name = "EQUATION", required = true)]
    equations: Vec<String>,
}

fn parse_stimulus(text: &str) -> Result<(String, bool), String> {
    let (pin, level) = text
        .split_once('=')
        .ok_or_else(|| format!("expected PIN=0|1, got '{}'", text))?;
    let level = match level.trim() {
        "0" => false,
        "1" => true,
        other => return Err(format!("level must be 0 or 1, got '{}'", other)),
    };
    Ok((pin.trim().to_string(), level))
}

fn parse_equation(text: &str) -> Result<(String, BoolExpr), PalError> {
    let (name, expr) = match text.split_once('=') {
        Some((name, expr)) => (name.trim(), expr),
        None => {
            return Err(PalError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("expected NAME = EXPR, got '{}'", text),
            )))
        }
    };
    Ok((name.to_string(), BoolExpr::parse(expr)?))
}

fn build_chip(args: &ChipArgs) -> Result<Chip, PalError> {
    let equations = args
        .equations
        .iter()
        .map(|text| parse_equation(text))
        .collect::<Result<Vec<_>, _>>()?;

    let inputs: Vec<String> = match &args.inputs {
        Some(inputs) => inputs.clone(),
        None => {
            let mut seen: Vec<Arc<str>> = Vec::new();
            for (_, expr) in &equations {
                for name in expr.variables() {
                    let is_output = equations.iter().any(|(output, _)| **output == *name);
                    if !is_output && !seen.contains(&name) {
                        seen.push(name);
                    }
                }
            }
            seen.iter().map(|name| name.to_string()).collect()
        }
    };
    info!("Inputs: {}", inputs.join(", "));

    let config = PalConfig {
        verify: !args.no_verify,
        ..PalConfig::default()
    };
    Ok(Chip::from_equations_with_config(
        &args.name, &inputs, equations, &config,
    )?)
}

fn run(cli: Cli) -> Result<(), PalError> {
    match cli.command {
        Command::Minimize { chip, output_file } => {
            let chip = build_chip(&chip)?;
            match output_file {
                Some(path) => chip.write_expressions_file(&path)?,
                None => {
                    let stdout = io::stdout();
                    let mut out = stdout.lock();
                    chip.write_expressions(&mut out)?;
                    out.flush()?;
                }
            }
        }
        Command::Simulate {
            chip,
            stimuli,
            ticks,
            seed,
            format,
        } => {
            let mut chip = build_chip(&chip)?;
            if let Some(template) = format {
                chip = chip.with_formatter(BitFormatter::parse(&template)?);
            }
            let simulation = Simulation::new(vec![chip])?;
            let mut state = match seed {
                Some(seed) => simulation.random_state(&mut StdRng::seed_from_u64(seed)),
                None => simulation.zero_state(),
            };

            let stdout = io::stdout();
            let mut out = stdout.lock();
            write!(out, "{:>4} {}", 0, state)?;
            for tick in 1..=ticks {
                for (pin, level) in &stimuli {
                    state = state.with(pin, *level)?;
                }
                state = state.next();
                write!(out, "{:>4} {}", tick, state)?;
            }
            out.flush()?;
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
