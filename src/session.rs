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

use rand::Rng;
use rand::seq::SliceRandom;

use crate::types::card::Card;
use crate::types::deck::Deck;
use crate::types::statistics::StudyStatistics;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionState {
    ShowingFront,
    ShowingBack,
    /// Every card has been answered or skipped.
    Completed,
}

/// One pass over a deck in shuffled order. The order is fixed when the session
/// starts; the cards in it are shared with the deck.
pub struct StudySession {
    cards: Vec<Card>,
    position: usize,
    reveal: bool,
}

impl StudySession {
    pub fn new<R: Rng + ?Sized>(deck: &Deck, rng: &mut R) -> Self {
        let mut cards = deck.cards();
        cards.shuffle(rng);
        log::debug!(
            "Starting session on deck {:?} with {} cards.",
            deck.title(),
            cards.len()
        );
        Self {
            cards,
            position: 0,
            reveal: false,
        }
    }

    pub fn state(&self) -> SessionState {
        if self.position >= self.cards.len() {
            SessionState::Completed
        } else if self.reveal {
            SessionState::ShowingBack
        } else {
            SessionState::ShowingFront
        }
    }

    pub fn is_completed(&self) -> bool {
        self.state() == SessionState::Completed
    }

    /// The card at the current position, if the session is not completed.
    pub fn current(&self) -> Option<&Card> {
        self.cards.get(self.position)
    }

    /// The text on the face currently shown.
    pub fn visible_text(&self) -> Option<String> {
        let card = self.current()?;
        if self.reveal {
            Some(card.rear())
        } else {
            Some(card.front())
        }
    }

    /// Zero-based index of the current card.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The traversal order.
    pub fn order(&self) -> &[Card] {
        &self.cards
    }

    pub fn flip(&mut self) {
        if !self.is_completed() {
            self.reveal = !self.reveal;
        }
    }

    /// Moves to the next card, front side up, without recording anything.
    pub fn advance(&mut self) {
        if !self.is_completed() {
            self.position += 1;
            self.reveal = false;
        }
    }

    /// Records an answer to the current card and advances. Works from either
    /// face. Returns `false`, and records nothing, if the session is already
    /// completed.
    pub fn answer(&mut self, correct: bool, stats: &mut StudyStatistics) -> bool {
        let Some(card) = self.cards.get(self.position) else {
            return false;
        };
        card.mark_answer(correct);
        stats.record_card_outcome(card, correct);
        log::debug!(
            "Card {} of {} answered {}.",
            self.position + 1,
            self.cards.len(),
            if correct { "correctly" } else { "incorrectly" }
        );
        self.position += 1;
        self.reveal = false;
        true
    }
}
