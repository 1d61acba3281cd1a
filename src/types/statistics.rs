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

use crate::types::card::Card;
use crate::types::clock::Clock;
use crate::types::clock::SystemClock;
use crate::types::deck::Deck;

/// Running totals over every answer recorded during this run. The totals only
/// ever grow.
pub struct StudyStatistics {
    decks_studied: usize,
    cards_reviewed: usize,
    correct: usize,
    incorrect: usize,
    /// Every card that was ever answered incorrectly, unique by identity, in
    /// the order they were first missed.
    most_missed: Vec<Card>,
    clock: Box<dyn Clock>,
}

impl StudyStatistics {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            decks_studied: 0,
            cards_reviewed: 0,
            correct: 0,
            incorrect: 0,
            most_missed: Vec::new(),
            clock: Box::new(clock),
        }
    }

    pub fn decks_studied(&self) -> usize {
        self.decks_studied
    }

    pub fn cards_reviewed(&self) -> usize {
        self.cards_reviewed
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    pub fn incorrect(&self) -> usize {
        self.incorrect
    }

    /// Records a batch of answers.
    ///
    /// If `deck` is given, it counts as one more deck studied and its last
    /// used time is set to now. Pass `None` to record answers without
    /// touching the deck count, e.g. one card at a time in the middle of a
    /// session.
    ///
    /// Cards answered correctly are never taken off the most-missed list.
    pub fn record_outcome(
        &mut self,
        deck: Option<&mut Deck>,
        correct: &[Card],
        incorrect: &[Card],
    ) {
        if let Some(deck) = deck {
            self.close_session(deck);
        }
        self.correct += correct.len();
        self.incorrect += incorrect.len();
        self.cards_reviewed += correct.len() + incorrect.len();
        for card in incorrect {
            self.remember_miss(card);
        }
        log::debug!(
            "Recorded {} correct, {} incorrect ({} reviewed).",
            correct.len(),
            incorrect.len(),
            self.cards_reviewed
        );
    }

    /// Records the answer to a single card.
    pub fn record_card_outcome(&mut self, card: &Card, correct: bool) {
        let card = std::slice::from_ref(card);
        if correct {
            self.record_outcome(None, card, &[]);
        } else {
            self.record_outcome(None, &[], card);
        }
    }

    /// Marks the end of a study session over `deck`. Call once per completed
    /// traversal.
    pub fn close_session(&mut self, deck: &mut Deck) {
        self.decks_studied += 1;
        deck.set_last_used(self.clock.now());
        log::debug!("Closed session on deck {:?}.", deck.title());
    }

    fn remember_miss(&mut self, card: &Card) {
        if !self.most_missed.contains(card) {
            self.most_missed.push(card.clone());
        }
    }

    /// The fraction of reviewed cards answered correctly, in `[0, 1]`. Zero
    /// if nothing has been reviewed.
    pub fn accuracy(&self) -> f64 {
        if self.cards_reviewed == 0 {
            return 0.0;
        }
        self.correct as f64 / self.cards_reviewed as f64
    }

    /// Accuracy as a percentage, rounded to two decimals with ties rounded
    /// away from zero.
    fn accuracy_percent(&self) -> f64 {
        (self.accuracy() * 10_000.0).round() / 100.0
    }

    /// A copy of the most-missed cards, in the order they were first missed.
    /// The cards are shared, so they show their latest answer.
    pub fn most_missed(&self) -> Vec<Card> {
        self.most_missed.clone()
    }

    /// A one-line running tally.
    pub fn status_line(&self) -> String {
        format!(
            "Stats: Decks: {}, Cards: {}, Correct: {}, Incorrect: {}, Accuracy: {:.2}%",
            self.decks_studied,
            self.cards_reviewed,
            self.correct,
            self.incorrect,
            self.accuracy_percent()
        )
    }

    /// A multi-line report of every counter and the most-missed cards.
    pub fn summary_text(&self) -> String {
        let mut lines = vec![
            "--- User Study Statistics ---".to_string(),
            format!("Total Decks Studied: {}", self.decks_studied),
            format!("Total Cards Reviewed: {}", self.cards_reviewed),
            format!("Total Correct: {}", self.correct),
            format!("Total Incorrect: {}", self.incorrect),
            format!("Accuracy: {:.2}%", self.accuracy_percent()),
            format!(
                "Most Missed Cards ({} unique cards):",
                self.most_missed.len()
            ),
        ];
        if self.most_missed.is_empty() {
            lines.push("  none yet!".to_string());
        } else {
            for card in &self.most_missed {
                lines.push(format!("  - {}", card.front()));
            }
        }
        lines.join("\n")
    }
}

impl Default for StudyStatistics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;

    use super::*;
    use crate::types::clock::FixedClock;
    use crate::types::timestamp::Timestamp;

    fn fixed_now() -> Timestamp {
        Timestamp::new(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap())
    }

    fn stats() -> StudyStatistics {
        StudyStatistics::with_clock(FixedClock::new(fixed_now()))
    }

    fn card(front: &str) -> Card {
        Card::new(front, "answer", &FixedClock::new(fixed_now()))
    }

    fn assert_invariant(stats: &StudyStatistics) {
        assert_eq!(stats.cards_reviewed(), stats.correct() + stats.incorrect());
    }

    #[test]
    fn test_fresh_statistics() {
        let stats = stats();
        assert_eq!(stats.decks_studied(), 0);
        assert_eq!(stats.cards_reviewed(), 0);
        assert_eq!(stats.correct(), 0);
        assert_eq!(stats.incorrect(), 0);
        assert_eq!(stats.accuracy(), 0.0);
        assert!(stats.most_missed().is_empty());
    }

    #[test]
    fn test_reviewed_is_sum_after_every_call() {
        let mut stats = stats();
        let (a, b, c) = (card("a"), card("b"), card("c"));
        stats.record_outcome(None, &[a.clone()], &[]);
        assert_invariant(&stats);
        stats.record_outcome(None, &[], &[b.clone(), c.clone()]);
        assert_invariant(&stats);
        stats.record_outcome(None, &[a, b], &[c]);
        assert_invariant(&stats);
        stats.record_outcome(None, &[], &[]);
        assert_invariant(&stats);
        assert_eq!(stats.cards_reviewed(), 6);
    }

    #[test]
    fn test_accuracy_seven_of_ten() {
        let mut stats = stats();
        let correct: Vec<Card> = (0..7).map(|i| card(&format!("c{i}"))).collect();
        let incorrect: Vec<Card> = (0..3).map(|i| card(&format!("i{i}"))).collect();
        stats.record_outcome(None, &correct[..4], &incorrect[..1]);
        stats.record_outcome(None, &correct[4..], &incorrect[1..]);
        assert_eq!(stats.correct(), 7);
        assert_eq!(stats.incorrect(), 3);
        assert!((stats.accuracy() - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_missed_twice_listed_once() {
        let mut stats = stats();
        let a = card("a");
        stats.record_outcome(None, &[], &[a.clone()]);
        stats.record_outcome(None, &[], &[a.clone()]);
        assert_eq!(stats.most_missed(), vec![a]);
        assert_eq!(stats.incorrect(), 2);
    }

    #[test]
    fn test_missed_then_correct_stays_listed() {
        let mut stats = stats();
        let a = card("a");
        stats.record_outcome(None, &[], &[a.clone()]);
        stats.record_outcome(None, &[a.clone()], &[]);
        assert_eq!(stats.most_missed(), vec![a]);
    }

    #[test]
    fn test_same_text_different_cards() {
        let mut stats = stats();
        let a = card("same");
        let b = card("same");
        stats.record_outcome(None, &[], &[a.clone(), b.clone()]);
        assert_eq!(stats.most_missed(), vec![a, b]);
    }

    #[test]
    fn test_most_missed_in_first_miss_order() {
        let mut stats = stats();
        let (a, b, c) = (card("a"), card("b"), card("c"));
        stats.record_outcome(None, &[], &[c.clone()]);
        stats.record_outcome(None, &[], &[a.clone(), c.clone()]);
        stats.record_outcome(None, &[], &[b.clone()]);
        assert_eq!(stats.most_missed(), vec![c, a, b]);
    }

    #[test]
    fn test_most_missed_is_a_copy() {
        let mut stats = stats();
        stats.record_outcome(None, &[], &[card("a")]);
        let mut missed = stats.most_missed();
        missed.clear();
        assert_eq!(stats.most_missed().len(), 1);
    }

    #[test]
    fn test_record_with_deck() {
        let mut stats = stats();
        let mut deck = Deck::new("D", "");
        let x = card("x");
        deck.add_card(x.clone());
        stats.record_outcome(Some(&mut deck), &[], &[x]);
        assert_eq!(stats.decks_studied(), 1);
        assert_eq!(deck.last_used(), Some(fixed_now()));
    }

    #[test]
    fn test_record_without_deck() {
        let mut stats = stats();
        stats.record_outcome(None, &[], &[card("x")]);
        assert_eq!(stats.decks_studied(), 0);
        assert_eq!(stats.incorrect(), 1);
    }

    #[test]
    fn test_record_card_outcome() {
        let mut stats = stats();
        let a = card("a");
        stats.record_card_outcome(&a, false);
        stats.record_card_outcome(&a, true);
        assert_eq!(stats.correct(), 1);
        assert_eq!(stats.incorrect(), 1);
        assert_eq!(stats.decks_studied(), 0);
        assert_eq!(stats.most_missed(), vec![a]);
    }

    #[test]
    fn test_close_session() {
        let mut stats = stats();
        let mut deck = Deck::new("D", "");
        stats.close_session(&mut deck);
        assert_eq!(stats.decks_studied(), 1);
        assert_eq!(stats.cards_reviewed(), 0);
        assert_eq!(deck.last_used(), Some(fixed_now()));
    }

    #[test]
    fn test_end_to_end() {
        let mut stats = stats();
        let mut deck = Deck::new("D", "");
        let (a, b, c) = (card("A"), card("B"), card("C"));
        deck.add_card(a.clone());
        deck.add_card(b.clone());
        deck.add_card(c.clone());
        stats.record_outcome(None, &[a], &[]);
        stats.record_outcome(None, &[], &[b.clone()]);
        stats.record_outcome(None, &[c], &[]);
        assert_eq!(stats.correct(), 2);
        assert_eq!(stats.incorrect(), 1);
        assert_eq!(stats.cards_reviewed(), 3);
        assert!((stats.accuracy() - 0.6667).abs() < 1e-4);
        assert_eq!(stats.most_missed(), vec![b]);
        assert_eq!(stats.decks_studied(), 0);
        assert!(deck.last_used().is_none());
    }

    #[test]
    fn test_accuracy_percent_rounds_ties_up() {
        let mut stats = stats();
        let cards: Vec<Card> = (0..32).map(|i| card(&format!("c{i}"))).collect();
        stats.record_outcome(None, &cards[..1], &cards[1..]);
        assert!(stats.summary_text().contains("Accuracy: 3.13%"));
        assert!(stats.status_line().ends_with("Accuracy: 3.13%"));
    }

    #[test]
    fn test_most_missed_sees_later_answers() {
        let mut stats = stats();
        let mut deck = Deck::new("D", "");
        let a = card("a");
        deck.add_card(a.clone());

        let first = deck.cards()[0].clone();
        first.mark_answer(false);
        stats.record_card_outcome(&first, false);
        stats.close_session(&mut deck);

        let second = deck.cards()[0].clone();
        second.mark_answer(true);
        stats.record_card_outcome(&second, true);
        stats.close_session(&mut deck);

        let missed = stats.most_missed();
        assert_eq!(missed, vec![a.clone()]);
        assert!(missed[0].last_marked_correct());
        assert!(a.last_marked_correct());
    }

    #[test]
    fn test_status_line() {
        let mut stats = stats();
        stats.record_outcome(None, &[card("a"), card("b")], &[card("c")]);
        assert_eq!(
            stats.status_line(),
            "Stats: Decks: 0, Cards: 3, Correct: 2, Incorrect: 1, Accuracy: 66.67%"
        );
    }

    #[test]
    fn test_summary_text_empty() {
        let stats = stats();
        assert_eq!(
            stats.summary_text(),
            "--- User Study Statistics ---\n\
             Total Decks Studied: 0\n\
             Total Cards Reviewed: 0\n\
             Total Correct: 0\n\
             Total Incorrect: 0\n\
             Accuracy: 0.00%\n\
             Most Missed Cards (0 unique cards):\n  none yet!"
        );
    }

    #[test]
    fn test_summary_text_with_misses() {
        let mut stats = stats();
        let mut deck = Deck::new("D", "");
        stats.record_outcome(
            Some(&mut deck),
            &[card("a")],
            &[card("What is 2 + 2?"), card("Who painted the Mona Lisa?")],
        );
        assert_eq!(
            stats.summary_text(),
            "--- User Study Statistics ---\n\
             Total Decks Studied: 1\n\
             Total Cards Reviewed: 3\n\
             Total Correct: 1\n\
             Total Incorrect: 2\n\
             Accuracy: 33.33%\n\
             Most Missed Cards (2 unique cards):\n  - What is 2 + 2?\n  - Who painted the Mona Lisa?"
        );
    }
}
