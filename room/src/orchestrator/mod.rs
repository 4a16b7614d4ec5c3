//! Hint and guess rounds.
//!
//! [`play_round`] is re-entrant: it walks the speaking order from the top on
//! every call, skips whoever already answered this round, asks the model for AI
//! seats and stops at the first human with no text yet. Calling it again with
//! the same game and more input picks up exactly where it stopped.

pub(crate) mod prompt;

use std::collections::HashMap;

use log::debug;
use protocol::{Controller, Phase};

use crate::completion::Completion;
use crate::error::{ErrorKind, RoomResult};
use crate::game::{Game, Player};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputKey {
    pub player: String,
    pub round: u8,
    pub phase: Phase,
}

impl InputKey {
    pub fn new(player: impl ToString, round: u8, phase: Phase) -> Self {
        Self {
            player: player.to_string(),
            round,
            phase,
        }
    }
}

/// Where human answers come from.
pub trait InputSource {
    fn read(&self, key: &InputKey) -> Option<&str>;
}

/// Human text typed so far, as the presentation layer delivered it.
#[derive(Debug, Clone, Default)]
pub struct InputBook(HashMap<InputKey, String>);

impl InputBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit(&mut self, key: InputKey, text: impl ToString) {
        self.0.insert(key, text.to_string());
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl InputSource for InputBook {
    fn read(&self, key: &InputKey) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    /// Halted on a human who has not answered.
    Awaiting(InputKey),
    Complete,
}

/// Text counts once it has something besides whitespace.
pub(crate) fn human_text<I: InputSource + ?Sized>(inputs: &I, key: &InputKey) -> Option<String> {
    inputs
        .read(key)
        .filter(|text| !text.trim().is_empty())
        .map(str::to_string)
}

pub async fn play_round<I, C>(game: &mut Game, inputs: &I, completion: &C) -> RoomResult<Progress>
where
    I: InputSource + ?Sized,
    C: Completion + ?Sized,
{
    if !game.is_active() {
        return Err(ErrorKind::WrongStage("active"));
    }
    if game.round_complete() {
        return Ok(Progress::Complete);
    }
    if let Progress::Awaiting(key) = hint_phase(game, inputs, completion).await {
        return Ok(Progress::Awaiting(key));
    }
    if let Progress::Awaiting(key) = guess_phase(game, inputs, completion).await {
        return Ok(Progress::Awaiting(key));
    }
    game.commit_round();
    Ok(Progress::Complete)
}

async fn hint_phase<I, C>(game: &mut Game, inputs: &I, completion: &C) -> Progress
where
    I: InputSource + ?Sized,
    C: Completion + ?Sized,
{
    let round = game.round();
    let order: Vec<Player> = game.speaking_order().cloned().collect();
    for player in order {
        if game.current().hint(player.name()).is_some() {
            continue;
        }
        let hint = match player.controller() {
            Controller::Human => {
                let key = InputKey::new(player.name(), round, Phase::Hint);
                match human_text(inputs, &key) {
                    Some(text) => text,
                    None => return Progress::Awaiting(key),
                }
            }
            Controller::Ai => {
                debug!("asking {} for a round {} hint", player.name(), round);
                completion.complete(&prompt::hint(game, &player)).await
            }
        };
        game.record_hint(player.name(), hint);
    }
    Progress::Complete
}

async fn guess_phase<I, C>(game: &mut Game, inputs: &I, completion: &C) -> Progress
where
    I: InputSource + ?Sized,
    C: Completion + ?Sized,
{
    let round = game.round();
    let order: Vec<Player> = game.speaking_order().cloned().collect();
    for player in order {
        if game.current().guess(player.name()).is_some() {
            continue;
        }
        let guess = match player.controller() {
            Controller::Human => {
                let key = InputKey::new(player.name(), round, Phase::Guess);
                match human_text(inputs, &key) {
                    Some(text) => text,
                    None => return Progress::Awaiting(key),
                }
            }
            Controller::Ai => {
                debug!("asking {} for a round {} guess", player.name(), round);
                completion.complete(&prompt::guess(game, &player)).await
            }
        };
        game.record_guess(player.name(), guess);
    }
    Progress::Complete
}
