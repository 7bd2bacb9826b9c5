//
// This file is part of tic_tac_toe.
//
// tic_tac_toe is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// tic_tac_toe is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with tic_tac_toe. If not, see <http://www.gnu.org/licenses/>.
//
// Copyright 2017 Chris Foster
//

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tic_tac_toe::command::HELP;
use tic_tac_toe::{Command, Game};

/// Play tic-tac-toe in the terminal.
#[derive(Parser, Debug)]
#[command(name = "tic_tac_toe", version, about)]
struct Config {
    /// List moves newest first
    #[arg(long)]
    descending: bool,

    /// Log filter, e.g. `debug` (defaults to RUST_LOG, then `warn`)
    #[arg(long)]
    log_level: Option<String>,
}

fn init_logging(config: &Config) {
    let filter = match config.log_level {
        Some(ref level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(&config);
    info!(?config, "starting");

    let mut game = Game::with_order(!config.descending);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("{}", HELP);

    loop {
        println!("--------------------");
        println!("{}\n", game.view());
        print!("> ");
        io::stdout().flush().context("flushing stdout")?;

        let line = match lines.next() {
            Some(line) => line.context("reading stdin")?,
            None => break,
        };

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{}", HELP),
            Ok(Command::Event(event)) => if let Err(error) = game.dispatch(event) {
                warn!(%error, "rejected input");
                println!("Error: {}", error);
            },
            Err(error) => println!("Error: {} (type `help` for commands)", error),
        }
    }

    Ok(())
}
