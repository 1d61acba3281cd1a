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
use std::time::Instant;

use crate::error::Fallible;
use crate::parser::parse_deck_file;
use crate::types::card::Card;
use crate::types::clock::Clock;
use crate::types::deck::Deck;

/// Loads the deck to study: the given deck file, or the built-in sample deck
/// if no file is given.
pub fn load_deck(path: Option<PathBuf>, clock: &dyn Clock) -> Fallible<Deck> {
    match path {
        Some(path) => {
            log::debug!("Loading deck from {path:?}...");
            let start = Instant::now();
            let deck = parse_deck_file(&path, clock)?;
            let duration = start.elapsed().as_millis();
            log::debug!("Deck loaded in {duration}ms ({} cards).", deck.size());
            Ok(deck)
        }
        None => {
            log::debug!("No deck file given, using the sample deck.");
            Ok(sample_deck(clock))
        }
    }
}

pub fn sample_deck(clock: &dyn Clock) -> Deck {
    let cards = [
        ("What is the capital of France?", "Paris"),
        ("What is 2 + 2?", "4"),
        ("Who painted the Mona Lisa?", "Leonardo da Vinci"),
        ("What is the largest planet in our solar system?", "Jupiter"),
        ("What is the chemical symbol for water?", "H2O"),
        ("What is the square root of 81?", "9"),
    ];
    let mut deck = Deck::new("General Knowledge", "A mix of various facts.");
    for (front, rear) in cards {
        deck.add_card(Card::new(front, rear, clock));
    }
    deck
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::create_tmp_deck_file;
    use crate::types::clock::SystemClock;

    #[test]
    fn test_sample_deck() {
        let deck = sample_deck(&SystemClock);
        assert_eq!(deck.title(), "General Knowledge");
        assert_eq!(deck.size(), 6);
        assert!(deck.last_used().is_none());
    }

    #[test]
    fn test_load_without_path() -> Fallible<()> {
        let deck = load_deck(None, &SystemClock)?;
        assert_eq!(deck.size(), 6);
        Ok(())
    }

    #[test]
    fn test_load_from_file() -> Fallible<()> {
        let (_dir, path) = create_tmp_deck_file("maths.txt", "# Maths\n\n1 + 1 / 2")?;
        let deck = load_deck(Some(path), &SystemClock)?;
        assert_eq!(deck.title(), "Maths");
        assert_eq!(deck.size(), 1);
        Ok(())
    }

    #[test]
    fn test_load_non_existent_file() {
        let result = load_deck(Some(PathBuf::from("./derpherp.txt")), &SystemClock);
        assert!(result.is_err());
    }
}
