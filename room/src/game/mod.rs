mod player;
mod record;

use std::collections::HashMap;

use lexicon::Lexicon;
use log::info;
use protocol::Controller;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::consts::*;
use crate::error::{ConfigError, ErrorKind, RoomResult};
use crate::tally::Outcome;

pub use player::Player;
pub use record::{RoundRecord, VoteRecord};

#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    /// Rounds 1 to 3 are being played.
    Active,
    /// Round 3 is over, ballots are being collected.
    Voting,
    Over(Outcome),
}

/// One match. Everything a new game needs is rebuilt by [`Game::start`];
/// nothing survives from the previous one.
#[derive(Debug, Clone)]
pub struct Game {
    topic: String,
    keyword: String,
    players: Vec<Player>,
    liar: usize,
    order: Vec<usize>,
    round: u8,
    stage: Stage,
    current: RoundRecord,
    history: Vec<RoundRecord>,
    ballots: HashMap<String, String>,
}

impl Game {
    pub fn start<R: Rng + ?Sized>(rng: &mut R, lexicon: &Lexicon, total: usize, humans: usize) -> RoomResult<Self> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&total) {
            return Err(ConfigError::PlayerCount(total).into());
        }
        if humans > total {
            return Err(ConfigError::HumanCount { humans, total }.into());
        }

        let (topic, keyword) = lexicon.pick(rng)?;

        let mut controllers = vec![Controller::Human; humans];
        controllers.resize(total, Controller::Ai);
        controllers.shuffle(rng);
        let players: Vec<Player> = controllers
            .into_iter()
            .enumerate()
            .map(|(idx, controller)| Player::new(idx, controller))
            .collect();

        let liar = rng.gen_range(0..total);

        let mut order: Vec<usize> = (0..total).collect();
        order.shuffle(rng);

        info!("new game: {} players ({} human), topic {}", total, humans, topic);

        Ok(Self {
            topic,
            keyword,
            players,
            liar,
            order,
            round: 1,
            stage: Stage::Active,
            current: RoundRecord::new(1),
            history: Vec::with_capacity(ROUNDS as usize),
            ballots: HashMap::new(),
        })
    }

    /// Moves to the next round, or into voting after the last one.
    pub fn advance_round(&mut self) -> RoomResult<()> {
        if self.stage != Stage::Active {
            return Err(ErrorKind::WrongStage("active"));
        }
        if !self.round_complete() {
            return Err(ErrorKind::RoundUnfinished(self.round));
        }
        if self.round >= ROUNDS {
            self.stage = Stage::Voting;
            info!("round {} over, voting starts", self.round);
        } else {
            self.round += 1;
            self.current = RoundRecord::new(self.round);
        }
        Ok(())
    }

    pub fn is_liar(&self, player: &Player) -> bool {
        player.idx == self.liar
    }

    pub fn knows_keyword(&self, player: &Player) -> bool {
        !self.is_liar(player)
    }

    /// The keyword as `player` sees it.
    pub fn keyword_for(&self, player: &Player) -> Option<&str> {
        if self.knows_keyword(player) {
            Some(&self.keyword)
        } else {
            None
        }
    }

    pub fn topic(&self) -> &str {&self.topic}
    pub fn keyword(&self) -> &str {&self.keyword}
    pub fn round(&self) -> u8 {self.round}
    pub fn stage(&self) -> &Stage {&self.stage}
    pub fn is_active(&self) -> bool {self.stage == Stage::Active}
    pub fn players(&self) -> &[Player] {&self.players}
    pub fn liar(&self) -> &Player {&self.players[self.liar]}

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    /// Same order every round.
    pub fn speaking_order(&self) -> impl Iterator<Item = &Player> + Clone {
        self.order.iter().map(move |&idx| &self.players[idx])
    }

    /// The round being played. Once complete it equals the last history entry.
    pub fn current(&self) -> &RoundRecord {&self.current}

    pub fn history(&self) -> &[RoundRecord] {&self.history}

    pub fn round_complete(&self) -> bool {
        self.history.len() >= self.round as usize
    }

    pub fn ballot(&self, player: &str) -> Option<&str> {
        self.ballots.get(player).map(String::as_str)
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        match self.stage {
            Stage::Over(ref outcome) => Some(outcome),
            _ => None,
        }
    }

    pub(crate) fn record_hint(&mut self, player: &str, hint: String) {
        self.current.hints.insert(player.to_string(), hint);
    }

    pub(crate) fn record_guess(&mut self, player: &str, guess: String) {
        self.current.guesses.insert(player.to_string(), guess);
    }

    /// Files the current round into history, once.
    pub(crate) fn commit_round(&mut self) {
        if !self.round_complete() {
            self.history.push(self.current.clone());
            info!("round {} complete", self.round);
        }
    }

    pub(crate) fn record_ballot(&mut self, player: &str, vote: String) {
        self.ballots.insert(player.to_string(), vote);
    }

    pub(crate) fn finish(&mut self, outcome: Outcome) {
        self.stage = Stage::Over(outcome);
    }
}
