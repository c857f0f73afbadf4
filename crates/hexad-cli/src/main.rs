//! Hexad CLI
//!
//! Walks a 6-adic prime chain from a starting value and prints the
//! per-step trace plus the verified chain. The defaults reproduce the
//! known length-8 chain from n0 = 1099687.

use anyhow::Context;
use clap::Parser;
use hexad_core::{ChainVerifier, MillerRabin, Termination, Verification};
use num_bigint::BigUint;

#[derive(Parser)]
#[command(name = "hexad")]
#[command(about = "Verify the primality structure of a 6-adic chain")]
#[command(version)]
struct Cli {
    /// Starting value n0 (decimal, arbitrary precision)
    #[arg(default_value = "1099687")]
    start: String,

    /// Maximum number of steps to walk
    #[arg(short, long, default_value_t = 8)]
    max_steps: usize,

    /// Only print the final chain and its length
    #[arg(short, long)]
    quiet: bool,
}

fn print_trace(v: &Verification) {
    for report in &v.steps {
        if !report.prime {
            println!("Step {}: {} -> COMPOSITE (chain broken)", report.index, report.value);
            continue;
        }
        println!("Step {}: {} -> PRIME", report.index, report.value);
        match &report.applied {
            Some((k, next)) => println!("    [ applied k = {k} -> next = {next} ]"),
            None => {
                if let Termination::InvalidResidue(rem) = &v.termination {
                    println!("    [ invalid step: n mod 12 = {rem} not in {{1,5,7,11}} ]");
                }
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let n0: BigUint = cli
        .start
        .parse()
        .with_context(|| format!("invalid starting value: {}", cli.start))?;

    if !cli.quiet {
        println!("=== Verifying 6-adic prime chain from n0 = {n0} ===");
    }

    let verification = ChainVerifier::new(MillerRabin)
        .verify(&n0, cli.max_steps)
        .context("verification rejected the input")?;

    if !cli.quiet {
        print_trace(&verification);
        println!();
    }

    println!("Verified chain of length {}", verification.chain.len());
    println!("Chain: {}", verification.chain);

    Ok(())
}
