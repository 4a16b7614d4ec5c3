//! Final vote.
//!
//! Every seat casts one ballot, in seat order. AI ballots are the first
//! `Player N` found in the model's reply, or [`UNKNOWN`] if there is none;
//! human ballots are counted as typed. The most voted key is accused, ties
//! going to whichever key was cast first.

use log::info;
use once_cell::sync::Lazy;
use protocol::{Controller, Phase, Verdict};
use regex::Regex;

use crate::completion::Completion;
use crate::error::{ErrorKind, RoomResult};
use crate::game::{Game, Player, Stage, VoteRecord};
use crate::orchestrator::{human_text, prompt, InputKey, InputSource, Progress};

pub const UNKNOWN: &str = "Unknown";

static PLAYER_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"Player \d+").expect("player name pattern"));

#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub accused: Option<String>,
    pub liar: String,
    pub keyword: String,
    pub liar_caught: bool,
    pub votes: VoteRecord,
}

impl Outcome {
    pub fn verdict(&self) -> Verdict {
        Verdict {
            accused: self.accused.clone(),
            liar: self.liar.clone(),
            keyword: self.keyword.clone(),
            liar_caught: self.liar_caught,
            tally: self.votes.entries().to_vec(),
        }
    }
}

/// First `Player N` in `reply`.
pub fn extract_accused(reply: &str) -> String {
    PLAYER_NAME
        .find(reply)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

pub async fn cast_votes<I, C>(game: &mut Game, inputs: &I, completion: &C) -> RoomResult<Progress>
where
    I: InputSource + ?Sized,
    C: Completion + ?Sized,
{
    match game.stage() {
        Stage::Voting => {}
        Stage::Over(_) => return Ok(Progress::Complete),
        Stage::Active => return Err(ErrorKind::WrongStage("voting")),
    }

    let round = game.round();
    let ballot = prompt::vote(game);
    let players: Vec<Player> = game.players().to_vec();
    for player in players {
        if game.ballot(player.name()).is_some() {
            continue;
        }
        let vote = match player.controller() {
            Controller::Human => {
                let key = InputKey::new(player.name(), round, Phase::Vote);
                match human_text(inputs, &key) {
                    Some(text) => text,
                    None => return Ok(Progress::Awaiting(key)),
                }
            }
            Controller::Ai => extract_accused(&completion.complete(&ballot).await),
        };
        info!("{} votes for {}", player.name(), vote);
        game.record_ballot(player.name(), vote);
    }

    let outcome = tally(game);
    if outcome.liar_caught {
        info!("liar {} caught, keyword was {}", outcome.liar, outcome.keyword);
    } else {
        info!("liar {} got away, keyword was {}", outcome.liar, outcome.keyword);
    }
    game.finish(outcome);
    Ok(Progress::Complete)
}

/// Counts the ballots cast so far, in seat order.
pub fn tally(game: &Game) -> Outcome {
    let mut votes = VoteRecord::default();
    for player in game.players() {
        if let Some(vote) = game.ballot(player.name()) {
            votes.cast(vote);
        }
    }
    let accused = votes.leader().map(str::to_string);
    let liar = game.liar().name().to_string();
    Outcome {
        liar_caught: accused.as_deref() == Some(liar.as_str()),
        accused,
        liar,
        keyword: game.keyword().to_string(),
        votes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::canned::Canned;
    use crate::orchestrator::{play_round, InputBook};
    use lexicon::Lexicon;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    async fn voting_game(total: usize, humans: usize, seed: u64, inputs: &mut InputBook) -> Game {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::start(&mut rng, &Lexicon::builtin(), total, humans).unwrap();
        let filler = Canned::always("무난한 힌트예요.");
        for round in 1..=3u8 {
            for p in game.players().iter().filter(|p| p.is_human()) {
                inputs.submit(InputKey::new(p.name(), round, Phase::Hint), "사람 힌트");
                inputs.submit(InputKey::new(p.name(), round, Phase::Guess), "사람 추측");
            }
            assert_eq!(play_round(&mut game, &*inputs, &filler).await.unwrap(), Progress::Complete);
            game.advance_round().unwrap();
        }
        game
    }

    #[test]
    fn extracts_first_player_name() {
        assert_eq!(extract_accused("Player 3"), "Player 3");
        assert_eq!(extract_accused("제 생각엔 Player 2 아니면 Player 4요"), "Player 2");
        assert_eq!(extract_accused("Player 12입니다"), "Player 12");
        assert_eq!(extract_accused("player 3"), UNKNOWN);
        assert_eq!(extract_accused("Player3"), UNKNOWN);
        assert_eq!(extract_accused(""), UNKNOWN);
    }

    #[test]
    fn failure_sentinel_is_unknown() {
        assert_eq!(extract_accused("[ERROR] error sending request for url"), UNKNOWN);
    }

    #[tokio::test]
    async fn unanimous_ai_vote_decides() {
        let mut inputs = InputBook::new();
        let mut game = voting_game(4, 0, 10, &mut inputs).await;
        let liar = game.liar().name().to_string();
        let completion = Canned::always(&format!("{}입니다.", liar));

        let progress = cast_votes(&mut game, &inputs, &completion).await.unwrap();
        assert_eq!(progress, Progress::Complete);
        let outcome = game.outcome().unwrap();
        assert_eq!(outcome.accused.as_deref(), Some(liar.as_str()));
        assert!(outcome.liar_caught);
        assert_eq!(outcome.votes.count(&liar), 4);
        assert_eq!(outcome.keyword, game.keyword());
    }

    #[tokio::test]
    async fn unparsable_votes_still_take_a_slot() {
        let mut inputs = InputBook::new();
        let mut game = voting_game(3, 0, 11, &mut inputs).await;
        let completion = Canned::always("[ERROR] connection refused");

        cast_votes(&mut game, &inputs, &completion).await.unwrap();
        let outcome = game.outcome().unwrap();
        assert_eq!(outcome.votes.count(UNKNOWN), 3);
        assert_eq!(outcome.votes.total(), 3);
        assert_eq!(outcome.accused.as_deref(), Some(UNKNOWN));
        assert!(!outcome.liar_caught);
    }

    #[tokio::test]
    async fn waits_for_human_ballots_in_seat_order() {
        let mut inputs = InputBook::new();
        let mut game = voting_game(4, 2, 12, &mut inputs).await;
        let completion = Canned::always("Player 1");
        let humans: Vec<String> = game.players().iter()
            .filter(|p| p.is_human())
            .map(|p| p.name().to_string())
            .collect();

        for human in &humans {
            let progress = cast_votes(&mut game, &inputs, &completion).await.unwrap();
            assert_eq!(progress, Progress::Awaiting(InputKey::new(human, 3, Phase::Vote)));
            inputs.submit(InputKey::new(human, 3, Phase::Vote), "Player 9");
        }

        cast_votes(&mut game, &inputs, &completion).await.unwrap();
        assert_eq!(completion.calls(), 2);
        let outcome = game.outcome().unwrap();
        assert_eq!(outcome.votes.count("Player 9"), 2);
        assert_eq!(outcome.votes.count("Player 1"), 2);
        assert_eq!(outcome.votes.total(), 4);
    }

    #[tokio::test]
    async fn tie_goes_to_the_earliest_seat_ballot() {
        let mut inputs = InputBook::new();
        let mut game = voting_game(4, 4, 13, &mut inputs).await;
        for (seat, vote) in ["Player 3", "Player 1", "Player 1", "Player 3"].iter().enumerate() {
            inputs.submit(InputKey::new(format!("Player {}", seat + 1), 3, Phase::Vote), vote);
        }
        cast_votes(&mut game, &inputs, &Canned::always("unused")).await.unwrap();
        assert_eq!(game.outcome().unwrap().accused.as_deref(), Some("Player 3"));
    }

    #[tokio::test]
    async fn split_ai_vote_keeps_first_seen() {
        let mut inputs = InputBook::new();
        let mut game = voting_game(4, 0, 16, &mut inputs).await;
        let completion = Canned::cycle(&["Player 2인 것 같아요", "Player 4요"]);
        cast_votes(&mut game, &inputs, &completion).await.unwrap();

        let outcome = game.outcome().unwrap();
        assert_eq!(outcome.votes.count("Player 2"), 2);
        assert_eq!(outcome.votes.count("Player 4"), 2);
        assert_eq!(outcome.accused.as_deref(), Some("Player 2"));
    }

    #[tokio::test]
    async fn ballots_are_not_recast() {
        let mut inputs = InputBook::new();
        let mut game = voting_game(3, 0, 14, &mut inputs).await;
        let completion = Canned::always("Player 2");
        cast_votes(&mut game, &inputs, &completion).await.unwrap();
        cast_votes(&mut game, &inputs, &completion).await.unwrap();
        assert_eq!(completion.calls(), 3);
    }

    #[tokio::test]
    async fn vote_prompt_carries_the_whole_game() {
        let mut inputs = InputBook::new();
        let mut game = voting_game(3, 0, 15, &mut inputs).await;
        let completion = Canned::always("Player 1");
        cast_votes(&mut game, &inputs, &completion).await.unwrap();

        let prompt = completion.prompts.lock().unwrap()[0].clone();
        for round in 1..=3 {
            assert!(prompt.contains(&format!("[Round {} 힌트]", round)));
            assert!(prompt.contains(&format!("[Round {} 추측]", round)));
        }
        assert!(prompt.contains("'Player N'"));
    }

    #[tokio::test]
    async fn active_game_cannot_vote() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut game = Game::start(&mut rng, &Lexicon::builtin(), 3, 0).unwrap();
        assert!(matches!(
            cast_votes(&mut game, &InputBook::new(), &Canned::always("x")).await,
            Err(ErrorKind::WrongStage("voting"))
        ));
    }
}
