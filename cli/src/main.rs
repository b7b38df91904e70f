//! Stuck-at fault analysis of the built-in reference netlist.

mod render;

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use indicatif::ProgressBar;
use saft_net::example_circuits::build_reconvergent_circuit;
use saft_sim::{FaultCampaign, TruthTable, classify, run_full_campaign, run_full_campaign_par};

#[derive(Parser)]
#[command(name = "saft")]
#[command(about = "Single stuck-at fault analyzer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the fault campaign and print the table and equivalence report
    Report {
        /// Evaluate faults on worker threads (same output, more cores)
        #[arg(short, long)]
        parallel: bool,
    },

    /// Emit the campaign truth table as PLA text for a two-level minimizer
    Pla {
        /// Output file (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Report { parallel } => report(parallel),
        Commands::Pla { output } => pla(output),
    }
}

fn report(parallel: bool) -> anyhow::Result<()> {
    let mut circuit = build_reconvergent_circuit();
    let records = if parallel {
        run_full_campaign_par(&circuit)
    } else {
        let campaign = FaultCampaign::new(&mut circuit);
        let bar = ProgressBar::new(campaign.len() as u64);
        let records: Vec<_> = campaign.inspect(|_| bar.inc(1)).collect();
        bar.finish_and_clear();
        records
    };

    let table = TruthTable::new(&circuit, &records);
    let classification = classify(&records);

    let mut stdout = io::stdout().lock();
    render::write_table(&mut stdout, &table)?;
    writeln!(stdout)?;
    render::write_classification(&mut stdout, &table, &classification)?;
    Ok(())
}

fn pla(output: Option<PathBuf>) -> anyhow::Result<()> {
    let mut circuit = build_reconvergent_circuit();
    let records = run_full_campaign(&mut circuit);
    let table = TruthTable::new(&circuit, &records);

    match output {
        Some(path) => {
            let mut file =
                File::create(&path).with_context(|| format!("creating {}", path.display()))?;
            table.write_pla(&mut file)?;
            eprintln!("wrote {} rows to {}", table.num_rows(), path.display());
        }
        None => table.write_pla(&mut io::stdout().lock())?,
    }
    Ok(())
}
