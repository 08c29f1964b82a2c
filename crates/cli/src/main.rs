// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hitcalc CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand, value_parser};
use log::{error, info};
use tokio::{signal, task};

use hitcalc_eval::{HandValue, guide::GUIDE};
use hitcalc_odds::{
    CancelToken, CommunityPolicy, EquityConfig, EquityError, KnownCards, compute_equity_with,
    parse_cards,
};

pub mod print;

#[derive(Debug, Parser)]
#[command(version, about = "Texas Hold'em hand odds calculator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Computes the probability of each hand category.
    Odds {
        /// The two hole cards, for example: As Ks.
        #[clap(long, num_args = 1.., required = true)]
        hole: Vec<String>,
        /// The community cards, for example: Ah Kd 7c.
        #[clap(long, short, num_args = 0..)]
        board: Vec<String>,
        /// Number of parallel tasks, 0 uses all the CPUs.
        #[clap(long, short, default_value_t = 0)]
        tasks: usize,
        /// Number of runouts that switches to parallel evaluation.
        #[clap(long, default_value_t = EquityConfig::PARALLEL_THRESHOLD)]
        parallel_threshold: u64,
        /// Minimum number of community cards.
        #[clap(long, default_value_t = 3, value_parser = value_parser!(u8).range(0..=5))]
        min_community: u8,
        /// Number of decimals in percentages.
        #[clap(long, default_value_t = 2, value_parser = value_parser!(u8).range(0..=8))]
        decimals: u8,
        /// Show royal flushes on their own row.
        #[clap(long)]
        split_royal: bool,
        /// Print the report as JSON.
        #[clap(long)]
        json: bool,
    },
    /// Evaluates the best five cards hand out of 5 to 7 cards.
    Eval {
        /// The cards, for example: As Ks Ah Kd 7c.
        #[clap(num_args = 5..=7, required = true)]
        cards: Vec<String>,
    },
    /// Prints the hands guide.
    Guide,
}

#[tokio::main]
async fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    match run(cli.command).await {
        Ok(()) => {}
        Err(e) if is_cancelled(&e) => {
            info!("Query cancelled");
            std::process::exit(130);
        }
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    }
}

fn is_cancelled(err: &anyhow::Error) -> bool {
    matches!(err.downcast_ref::<EquityError>(), Some(EquityError::Cancelled))
}

async fn run(command: Command) -> Result<()> {
    match command {
        Command::Odds {
            hole,
            board,
            tasks,
            parallel_threshold,
            min_community,
            decimals,
            split_royal,
            json,
        } => {
            let policy = CommunityPolicy::new(min_community as usize);
            let known = KnownCards::with_policy(
                &parse_cards(&hole.join(" "))?,
                &parse_cards(&board.join(" "))?,
                policy,
            )?;

            let mut config = EquityConfig {
                parallel_threshold,
                ..EquityConfig::default()
            };
            if tasks > 0 {
                config.tasks = tasks;
            }

            let cancel = CancelToken::new();
            let report = {
                let known = known.clone();
                let task_cancel = cancel.clone();
                let mut query = task::spawn_blocking(move || {
                    compute_equity_with(&known, &config, &task_cancel)
                });

                tokio::select! {
                    res = &mut query => res?,
                    _ = signal::ctrl_c() => {
                        info!("Received interrupt, cancelling query...");
                        cancel.cancel();
                        query.await?
                    }
                }
            };

            let report = report?;

            if json {
                let value = print::report_json(&known, &report, decimals as usize, split_royal);
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                print!(
                    "{}",
                    print::report_table(&known, &report, decimals as usize, split_royal)
                );
            }
        }
        Command::Eval { cards } => {
            let cards = parse_cards(&cards.join(" "))?;
            let (value, best) = HandValue::eval_with_best_hand(&cards)
                .map_err(|e| anyhow!("Cannot evaluate hand: {e}"))?;
            println!("{}", print::hand_value(&value, &best));
        }
        Command::Guide => {
            print!("{}", print::guide(&GUIDE));
        }
    }

    Ok(())
}
