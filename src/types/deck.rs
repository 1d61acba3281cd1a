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

use std::fmt::Display;
use std::fmt::Formatter;

use crate::types::card::Card;
use crate::types::timestamp::Timestamp;

/// An ordered collection of cards.
#[derive(Clone, Debug)]
pub struct Deck {
    title: String,
    description: String,
    cards: Vec<Card>,
    /// When a study session over this deck was last closed.
    last_used: Option<Timestamp>,
}

impl Deck {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            cards: Vec::new(),
            last_used: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Appends a card. Passing `None` does nothing.
    pub fn add_card(&mut self, card: impl Into<Option<Card>>) {
        if let Some(card) = card.into() {
            self.cards.push(card);
        }
    }

    /// Removes the first card with the same identity as `card`. Returns
    /// whether a card was removed.
    pub fn remove_card(&mut self, card: &Card) -> bool {
        match self.cards.iter().position(|c| c == card) {
            Some(index) => {
                self.cards.remove(index);
                true
            }
            None => false,
        }
    }

    /// A copy of the sequence, in insertion order. The cards themselves are
    /// shared with the deck.
    pub fn cards(&self) -> Vec<Card> {
        self.cards.clone()
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn last_used(&self) -> Option<Timestamp> {
        self.last_used
    }

    pub fn set_last_used(&mut self, ts: Timestamp) {
        self.last_used = Some(ts);
    }
}

impl Display for Deck {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let last_used = match self.last_used {
            Some(ts) => ts.to_string(),
            None => "Never".to_string(),
        };
        write!(
            f,
            "Deck [Title: \"{}\", Description: \"{}\", Cards: {}, Last Used: {}]",
            self.title,
            self.description,
            self.cards.len(),
            last_used
        )
    }
}
