use protocol::{Awaiting, GameView, Phase, RoundView, Stage as ViewStage};

use crate::game::{Game, Stage};
use crate::orchestrator::Progress;

/// What the presentation layer draws after each interaction.
pub(crate) fn render(game: Option<&Game>, progress: &Progress) -> GameView {
    let game = match game {
        Some(game) => game,
        None => return GameView::lobby(),
    };

    let stage = match game.stage() {
        Stage::Active => ViewStage::Active,
        Stage::Voting => ViewStage::Voting,
        Stage::Over(_) => ViewStage::Over,
    };

    let mut rounds: Vec<RoundView> = game
        .history()
        .iter()
        .map(|record| record.view(game.speaking_order()))
        .collect();
    if game.is_active() && !game.round_complete() {
        rounds.push(game.current().view(game.speaking_order()));
    }

    let awaiting = match progress {
        Progress::Awaiting(key) => game.player(&key.player).map(|player| Awaiting {
            player: key.player.clone(),
            phase: key.phase,
            round: key.round,
            keyword: game.keyword_for(player).map(str::to_string),
            hints: match key.phase {
                Phase::Guess => game.current().hint_lines(game.speaking_order(), Some(player.name())),
                _ => vec![],
            },
        }),
        Progress::Complete => None,
    };

    GameView {
        stage,
        topic: game.topic().to_string(),
        round: game.round(),
        round_complete: game.round_complete(),
        order: game.speaking_order().map(|p| p.name().to_string()).collect(),
        players: game.players().iter().map(|p| p.get_state()).collect(),
        rounds,
        awaiting,
        verdict: game.outcome().map(|outcome| outcome.verdict()),
    }
}
