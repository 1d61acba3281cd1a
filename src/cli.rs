// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::PathBuf;

use clap::Parser;

use crate::cmd::check::check_deck;
use crate::cmd::drill::drill;
use crate::cmd::stats::StatsFormat;
use crate::error::Fallible;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
enum Command {
    /// Study a deck, one card at a time.
    Drill {
        /// Path to a deck file. Uses a built-in sample deck if omitted.
        file: Option<PathBuf>,
        /// Seed for the card order. Random if omitted.
        #[arg(long)]
        seed: Option<u64>,
        /// Format of the statistics printed at the end.
        #[arg(long, default_value_t = StatsFormat::Text)]
        format: StatsFormat,
    },
    /// Check that a deck file parses.
    Check {
        /// Path to the deck file.
        file: PathBuf,
    },
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    log::debug!("{cli:?}");
    match cli {
        Command::Drill { file, seed, format } => drill(file, seed, format),
        Command::Check { file } => check_deck(&file),
    }
}
