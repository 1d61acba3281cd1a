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

use std::cell::RefCell;
use std::fmt::Display;
use std::fmt::Formatter;
use std::rc::Rc;

use crate::types::clock::Clock;
use crate::types::date::Date;

/// A handle to a flashcard. Cloning the handle does not copy the card: every
/// clone sees the same text and the same last answer. Handles compare by
/// identity, so two cards with the same question and answer are still
/// different cards.
#[derive(Clone, Debug)]
pub struct Card(Rc<RefCell<CardData>>);

#[derive(Debug)]
struct CardData {
    /// The question.
    front: String,
    /// The answer.
    rear: String,
    /// The local date the card was created on.
    created_on: Date,
    /// Whether the most recent answer to this card was correct. Cards that
    /// were never answered count as incorrect.
    last_marked_correct: bool,
}

impl Card {
    pub fn new(front: impl Into<String>, rear: impl Into<String>, clock: &dyn Clock) -> Self {
        Self(Rc::new(RefCell::new(CardData {
            front: front.into(),
            rear: rear.into(),
            created_on: clock.today(),
            last_marked_correct: false,
        })))
    }

    pub fn front(&self) -> String {
        self.0.borrow().front.clone()
    }

    pub fn rear(&self) -> String {
        self.0.borrow().rear.clone()
    }

    pub fn created_on(&self) -> Date {
        self.0.borrow().created_on
    }

    pub fn last_marked_correct(&self) -> bool {
        self.0.borrow().last_marked_correct
    }

    pub fn set_front(&self, text: impl Into<String>) {
        self.0.borrow_mut().front = text.into();
    }

    pub fn set_rear(&self, text: impl Into<String>) {
        self.0.borrow_mut().rear = text.into();
    }

    pub fn mark_answer(&self, correct: bool) {
        self.0.borrow_mut().last_marked_correct = correct;
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Card {}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let card = self.0.borrow();
        write!(
            f,
            "Flashcard [Front: \"{}\", Rear: \"{}\", Created On: {}, Last Correct: {}]",
            card.front, card.rear, card.created_on, card.last_marked_correct
        )
    }
}
