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

use clap::ValueEnum;
use serde::Serialize;

use crate::error::Fallible;
use crate::types::statistics::StudyStatistics;

#[derive(ValueEnum, Clone, Copy, PartialEq, Debug)]
pub enum StatsFormat {
    /// Plain text output.
    Text,
    /// JSON output.
    Json,
}

impl Display for StatsFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsFormat::Text => write!(f, "text"),
            StatsFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    decks_studied: usize,
    cards_reviewed: usize,
    correct: usize,
    incorrect: usize,
    accuracy: f64,
    /// The front text of every card ever missed.
    most_missed: Vec<String>,
}

impl From<&StudyStatistics> for Stats {
    fn from(stats: &StudyStatistics) -> Self {
        Self {
            decks_studied: stats.decks_studied(),
            cards_reviewed: stats.cards_reviewed(),
            correct: stats.correct(),
            incorrect: stats.incorrect(),
            accuracy: stats.accuracy(),
            most_missed: stats
                .most_missed()
                .iter()
                .map(|card| card.front().to_string())
                .collect(),
        }
    }
}

pub fn render_stats(stats: &StudyStatistics, format: StatsFormat) -> Fallible<String> {
    match format {
        StatsFormat::Text => Ok(stats.summary_text()),
        StatsFormat::Json => {
            let stats = Stats::from(stats);
            Ok(serde_json::to_string_pretty(&stats)?)
        }
    }
}
