use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use lexicon::{Lexicon, Topic};
use protocol::Phase;
use rand::rngs::StdRng;
use rand::SeedableRng;

use room::completion::Completion;
use room::game::{Game, Stage};
use room::orchestrator::{play_round, InputBook, InputKey, Progress};
use room::tally::{cast_votes, UNKNOWN};

/// Same reply every time, counting calls.
struct Fixed {
    reply: String,
    calls: AtomicUsize,
}

impl Fixed {
    fn new(reply: &str) -> Self {
        Self { reply: reply.to_string(), calls: AtomicUsize::new(0) }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Completion for Fixed {
    async fn complete(&self, _prompt: &str) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }
}

fn animals() -> Lexicon {
    let builtin = Lexicon::builtin();
    let topic: Topic = builtin.topic("동물").cloned().unwrap();
    Lexicon::new("animals", vec![topic]).unwrap()
}

#[tokio::test]
async fn all_ai_game_runs_to_the_end_without_waiting() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut game = Game::start(&mut rng, &Lexicon::builtin(), 3, 0).unwrap();
    let completion = Fixed::new("Player 2 아닐까요?");
    let inputs = InputBook::new();

    for round in 1..=3u8 {
        assert_eq!(game.round(), round);
        let progress = play_round(&mut game, &inputs, &completion).await.unwrap();
        assert_eq!(progress, Progress::Complete);
        game.advance_round().unwrap();
    }
    assert_eq!(game.stage(), &Stage::Voting);
    assert_eq!(game.round(), 3);

    let progress = cast_votes(&mut game, &inputs, &completion).await.unwrap();
    assert_eq!(progress, Progress::Complete);

    // 3 rounds x (3 hints + 3 guesses) + 3 ballots
    assert_eq!(completion.calls(), 21);
    for record in game.history() {
        assert_eq!(record.hint_count(), 3);
        assert_eq!(record.guess_count(), 3);
    }
    let outcome = game.outcome().unwrap();
    assert_eq!(outcome.votes.total(), 3);
    assert_eq!(outcome.accused.as_deref(), Some("Player 2"));
    assert_eq!(outcome.liar_caught, game.liar().name() == "Player 2");
    assert_eq!(outcome.keyword, game.keyword());
}

#[tokio::test]
async fn four_humans_block_on_every_hint_then_every_guess() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut game = Game::start(&mut rng, &animals(), 4, 4).unwrap();
    assert_eq!(game.topic(), "동물");
    let completion = Fixed::new("never asked");
    let mut inputs = InputBook::new();
    let order: Vec<String> = game.speaking_order().map(|p| p.name().to_string()).collect();

    for name in &order {
        let progress = play_round(&mut game, &inputs, &completion).await.unwrap();
        assert_eq!(progress, Progress::Awaiting(InputKey::new(name, 1, Phase::Hint)));
        assert!(game.advance_round().is_err());
        inputs.submit(InputKey::new(name, 1, Phase::Hint), format!("{}의 힌트", name));
    }
    for name in &order {
        let progress = play_round(&mut game, &inputs, &completion).await.unwrap();
        assert_eq!(progress, Progress::Awaiting(InputKey::new(name, 1, Phase::Guess)));
        assert_eq!(game.current().hint_count(), 4);
        inputs.submit(InputKey::new(name, 1, Phase::Guess), format!("{}의 추측", name));
    }

    assert_eq!(play_round(&mut game, &inputs, &completion).await.unwrap(), Progress::Complete);
    assert_eq!(game.history().len(), 1);
    assert_eq!(completion.calls(), 0);
    game.advance_round().unwrap();
    assert_eq!(game.round(), 2);
}

#[tokio::test]
async fn dead_completion_service_still_finishes_the_game() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut game = Game::start(&mut rng, &Lexicon::builtin(), 4, 0).unwrap();
    let completion = Fixed::new("[ERROR] error sending request for url (http://localhost:11434/api/chat)");
    let inputs = InputBook::new();

    for _ in 1..=3 {
        play_round(&mut game, &inputs, &completion).await.unwrap();
        game.advance_round().unwrap();
    }
    cast_votes(&mut game, &inputs, &completion).await.unwrap();

    let outcome = game.outcome().unwrap();
    assert_eq!(outcome.votes.count(UNKNOWN), 4);
    assert_eq!(outcome.accused.as_deref(), Some(UNKNOWN));
    assert!(!outcome.liar_caught);
}
