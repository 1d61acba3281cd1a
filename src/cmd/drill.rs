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

use std::io::BufRead;
use std::io::Write;
use std::io::stdin;
use std::io::stdout;
use std::path::PathBuf;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cmd::stats::StatsFormat;
use crate::cmd::stats::render_stats;
use crate::collection::load_deck;
use crate::error::Fallible;
use crate::session::SessionState;
use crate::session::StudySession;
use crate::types::clock::SystemClock;
use crate::types::deck::Deck;
use crate::types::statistics::StudyStatistics;

#[derive(Clone, Copy, PartialEq, Debug)]
enum Input {
    Flip,
    Correct,
    Incorrect,
    Next,
    Quit,
}

impl Input {
    fn parse(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "f" | "flip" => Some(Input::Flip),
            "c" | "correct" => Some(Input::Correct),
            "i" | "incorrect" => Some(Input::Incorrect),
            "n" | "next" => Some(Input::Next),
            "q" | "quit" => Some(Input::Quit),
            _ => None,
        }
    }
}

pub fn drill(path: Option<PathBuf>, seed: Option<u64>, format: StatsFormat) -> Fallible<()> {
    let clock = SystemClock;
    let mut deck = load_deck(path, &clock)?;
    let mut stats = StudyStatistics::with_clock(clock);
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut input = stdin().lock();
    let mut output = stdout().lock();
    run_session(&mut deck, &mut stats, &mut rng, format, &mut input, &mut output)
}

/// Runs one study session over `deck`, reading commands from `input` and
/// writing prompts to `output`. The session is closed against the deck only if
/// every card was gone through.
pub fn run_session<R: Rng + ?Sized>(
    deck: &mut Deck,
    stats: &mut StudyStatistics,
    rng: &mut R,
    format: StatsFormat,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Fallible<()> {
    let mut session = StudySession::new(deck, rng);
    writeln!(
        output,
        "Studying \"{}\" ({} cards).",
        deck.title(),
        deck.size()
    )?;
    if session.is_empty() {
        writeln!(output, "No cards in this deck!")?;
        return Ok(());
    }

    loop {
        let label = match session.state() {
            SessionState::ShowingFront => "Q",
            SessionState::ShowingBack => "A",
            SessionState::Completed => {
                writeln!(output, "Deck completed! Review your stats.")?;
                stats.close_session(deck);
                break;
            }
        };
        let text = session.visible_text().unwrap_or_default();
        writeln!(
            output,
            "[{}/{}] {label}: {text}",
            session.position() + 1,
            session.len()
        )?;
        writeln!(output, "[f]lip, [c]orrect, [i]ncorrect, [n]ext, [q]uit")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            log::debug!("Input closed, ending session.");
            break;
        }
        match Input::parse(&line) {
            Some(Input::Flip) => session.flip(),
            Some(Input::Correct) => {
                session.answer(true, stats);
                writeln!(output, "{}", stats.status_line())?;
            }
            Some(Input::Incorrect) => {
                session.answer(false, stats);
                writeln!(output, "{}", stats.status_line())?;
            }
            Some(Input::Next) => session.advance(),
            Some(Input::Quit) => break,
            None => writeln!(output, "Unknown command: {}", line.trim())?,
        }
    }

    writeln!(output, "{}", render_stats(stats, format)?)?;
    Ok(())
}
