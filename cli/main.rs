// SPDX-FileCopyrightText: 2024 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

//! Command line front-end: packs JSON Micheline, encodes addresses and
//! classifies base58check identifiers, printing results as hex.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, Level};

use tezos_micheline_pack::serializer::constants::DEFAULT_MAX_DEPTH;
use tezos_micheline_pack::{check_decode, encode_address, EncodeConfig, HashType, Micheline, Prim};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log more, repeat for even more
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Maximum nesting of packed expressions. JSON input to `pack` is
    /// further limited to 128 levels by the JSON parser
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH, global = true)]
    max_depth: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Clone, Debug)]
enum Commands {
    /// Pack a Micheline expression given in JSON
    Pack {
        /// JSON expression; read from `--file` or stdin when absent
        expr: Option<String>,
        #[arg(short, long, conflicts_with = "expr")]
        file: Option<PathBuf>,
    },
    /// Encode an address, with optional `%entrypoint`
    Address { address: String },
    /// Decode a base58check identifier and find its kind
    Resolve {
        id: String,
        /// Candidate kinds, tried in order; all kinds when none is given
        #[arg(short, long)]
        kind: Vec<HashType>,
    },
    /// Pack `Pair (Pair <id> <target address>) <amount>`
    Demo {
        #[arg(default_value = "KT1Ni4pYV3UGWcDp7MgR5prgcD4NCK1MpXiR")]
        target: String,
        #[arg(long, default_value = "testId")]
        id: String,
        #[arg(long, default_value = "17170000")]
        amount: String,
    },
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn read_expr(expr: Option<String>, file: Option<PathBuf>) -> anyhow::Result<String> {
    match (expr, file) {
        (Some(expr), _) => Ok(expr),
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display())),
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn pack(m: &Micheline, config: &EncodeConfig) -> anyhow::Result<String> {
    let bytes = m.encode_for_pack_with(config).context("packing failed")?;
    Ok(hex::encode(bytes))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(log_level(cli.verbose))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = EncodeConfig {
        max_depth: cli.max_depth,
    };

    let output = match cli.command {
        Commands::Pack { expr, file } => {
            let text = read_expr(expr, file)?;
            let m = Micheline::from_json(&text).context("invalid Micheline JSON")?;
            pack(&m, &config)?
        }
        Commands::Address { address } => hex::encode(encode_address(&address)?),
        Commands::Resolve { id, kind } => {
            let kinds = if kind.is_empty() {
                HashType::ALL.to_vec()
            } else {
                kind
            };
            let (kind, payload) = check_decode(&id, &kinds)?;
            format!("{kind} {}", hex::encode(payload))
        }
        Commands::Demo { target, id, amount } => {
            let target = encode_address(&target)?;
            info!(target = %hex::encode(&target), "encoded target address");
            let m = Micheline::prim2(
                Prim::Pair,
                Micheline::prim2(Prim::Pair, id.into(), Micheline::bytes(target)),
                Micheline::Int(amount),
            );
            pack(&m, &config)?
        }
    };
    println!("{output}");
    Ok(())
}
