use serde::{Serialize, Deserialize};
use crate::{BinCodeMessage, Controller, Phase};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub name: String,
    pub idx: u8,
    pub controller: Controller,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Lobby,
    Active,
    Voting,
    Over,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub speaker: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoundView {
    pub round: u8,
    pub hints: Vec<Line>,
    pub guesses: Vec<Line>,
}

/// The human the session is blocked on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Awaiting {
    pub player: String,
    pub phase: Phase,
    pub round: u8,
    /// `None` when the player is the liar.
    pub keyword: Option<String>,
    /// Other players' hints, filled in for the guess phase only.
    pub hints: Vec<Line>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub accused: Option<String>,
    pub liar: String,
    pub keyword: String,
    pub liar_caught: bool,
    pub tally: Vec<(String, u32)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameView {
    pub stage: Stage,
    pub topic: String,
    pub round: u8,
    /// The current round has every hint and guess; "next round" may be offered.
    pub round_complete: bool,
    pub order: Vec<String>,
    pub players: Vec<PlayerState>,
    pub rounds: Vec<RoundView>,
    pub awaiting: Option<Awaiting>,
    pub verdict: Option<Verdict>,
}

impl GameView {
    pub fn lobby() -> Self {
        Self {
            stage: Stage::Lobby,
            topic: String::new(),
            round: 0,
            round_complete: false,
            order: vec![],
            players: vec![],
            rounds: vec![],
            awaiting: None,
            verdict: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConsoleResponse {
    View(GameView),
    Rejected {
        reason: String,
    },
}

impl BinCodeMessage<'_> for ConsoleResponse {}
