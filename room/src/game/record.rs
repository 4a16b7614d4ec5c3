use std::collections::HashMap;

use protocol::{Line, RoundView};

use super::Player;

/// Hints and guesses of one round, keyed by player name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoundRecord {
    pub(crate) round: u8,
    pub(crate) hints: HashMap<String, String>,
    pub(crate) guesses: HashMap<String, String>,
}

impl RoundRecord {
    pub(crate) fn new(round: u8) -> Self {
        Self {
            round,
            ..Default::default()
        }
    }

    pub fn round(&self) -> u8 {self.round}

    pub fn hint(&self, player: &str) -> Option<&str> {
        self.hints.get(player).map(String::as_str)
    }

    pub fn guess(&self, player: &str) -> Option<&str> {
        self.guesses.get(player).map(String::as_str)
    }

    pub fn hint_count(&self) -> usize {self.hints.len()}
    pub fn guess_count(&self) -> usize {self.guesses.len()}

    /// Hints in `order`, leaving out `except`.
    pub fn hint_lines<'a>(&self, order: impl IntoIterator<Item = &'a Player>, except: Option<&str>) -> Vec<Line> {
        lines(&self.hints, order, except)
    }

    pub fn guess_lines<'a>(&self, order: impl IntoIterator<Item = &'a Player>) -> Vec<Line> {
        lines(&self.guesses, order, None)
    }

    pub(crate) fn view<'a>(&self, order: impl IntoIterator<Item = &'a Player> + Clone) -> RoundView {
        RoundView {
            round: self.round,
            hints: self.hint_lines(order.clone(), None),
            guesses: self.guess_lines(order),
        }
    }
}

fn lines<'a>(map: &HashMap<String, String>, order: impl IntoIterator<Item = &'a Player>, except: Option<&str>) -> Vec<Line> {
    order
        .into_iter()
        .filter(|p| Some(p.name()) != except)
        .filter_map(|p| {
            map.get(p.name()).map(|text| Line {
                speaker: p.name().to_string(),
                text: text.clone(),
            })
        })
        .collect()
}

/// Vote counts keyed by the raw ballot text, in first-seen order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VoteRecord {
    counts: Vec<(String, u32)>,
}

impl VoteRecord {
    /// Empty ballots are not counted.
    pub fn cast(&mut self, vote: &str) {
        if vote.is_empty() {
            return;
        }
        match self.counts.iter_mut().find(|(key, _)| key == vote) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((vote.to_string(), 1)),
        }
    }

    pub fn count(&self, key: &str) -> u32 {
        self.counts
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().map(|(_, c)| c).sum()
    }

    pub fn is_empty(&self) -> bool {self.counts.is_empty()}

    pub fn entries(&self) -> &[(String, u32)] {&self.counts}

    /// Most voted key. A tie goes to the key that was cast first.
    pub fn leader(&self) -> Option<&str> {
        let mut best: Option<&(String, u32)> = None;
        for entry in &self.counts {
            match best {
                Some((_, top)) if *top >= entry.1 => {}
                _ => best = Some(entry),
            }
        }
        best.map(|(key, _)| key.as_str())
    }
}
