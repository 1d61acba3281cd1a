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

use std::path::Path;

use crate::error::Fallible;
use crate::error::fail;
use crate::types::card::Card;
use crate::types::clock::Clock;
use crate::types::deck::Deck;

/// Parses a deck from the contents of a deck file.
///
/// Blocks are separated by blank lines. A block of the form `question /
/// answer` is a card. If the first block starts with `# `, its first line is
/// the deck title and the rest of the block is the description; otherwise the
/// title is `default_title`. Anything else is ignored.
pub fn parse_deck(content: &str, default_title: &str, clock: &dyn Clock) -> Deck {
    let mut blocks = split_blocks(content).peekable();

    let mut deck = match blocks.peek().and_then(|block| parse_header(block)) {
        Some((title, description)) => {
            blocks.next();
            Deck::new(title, description)
        }
        None => Deck::new(default_title, ""),
    };

    for block in blocks {
        match parse_card(block, clock) {
            Some(card) => deck.add_card(card),
            None => log::debug!("Skipping block that is not a card: {block:?}"),
        }
    }
    deck
}

/// Reads and parses a deck file. The file stem is the default title.
pub fn parse_deck_file(path: &Path, clock: &dyn Clock) -> Fallible<Deck> {
    if !path.is_file() {
        return fail("deck file does not exist.");
    }
    let content = std::fs::read_to_string(path)?;
    let default_title = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default();
    Ok(parse_deck(&content, &default_title, clock))
}

fn split_blocks(content: &str) -> impl Iterator<Item = &str> {
    content
        .split("\n\n")
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
}

fn parse_header(block: &str) -> Option<(String, String)> {
    let rest = block.strip_prefix("# ")?;
    let (title, description) = match rest.split_once('\n') {
        Some((title, description)) => (title, description),
        None => (rest, ""),
    };
    Some((title.trim().to_string(), description.trim().to_string()))
}

fn parse_card(block: &str, clock: &dyn Clock) -> Option<Card> {
    let (question, answer) = block.split_once(" / ")?;
    let question = question.trim();
    let answer = answer.trim();
    if question.is_empty() || answer.is_empty() {
        return None;
    }
    Some(Card::new(question, answer, clock))
}
