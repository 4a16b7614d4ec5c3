use crate::game::{Game, Player};

pub(crate) fn hint(game: &Game, player: &Player) -> String {
    let role = match game.keyword_for(player) {
        None => "당신은 라이어입니다. 제시어는 모릅니다. 최대한 라이어인게 티가 나지 않도록".to_string(),
        Some(keyword) => format!(
            "제시어는 '{}'입니다. 당신은 일반 플레이어입니다. 제시어를 직접 언급하지 말고",
            keyword
        ),
    };
    format!(
        "힌트 라운드 입니다. 주제는 '{}'이며 {} 한 문장 힌트를 주세요.",
        game.topic(),
        role
    )
}

pub(crate) fn guess(game: &Game, player: &Player) -> String {
    let (role, keyword) = match game.keyword_for(player) {
        None => ("라이어", "제시어는 모릅니다.".to_string()),
        Some(keyword) => ("일반 플레이어", format!("제시어는 '{}'입니다.", keyword)),
    };
    let summary = game
        .current()
        .hint_lines(game.speaking_order(), Some(player.name()))
        .iter()
        .map(|line| format!("{}: {}", line.speaker, line.text))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "추측 라운드 입니다. 당신은 {}입니다. 주제는 '{}'이며 {}\n다음은 다른 플레이어의 힌트입니다:\n{}\n1문장으로 누가 라이어일지 자연스럽게 추측하세요.",
        role,
        game.topic(),
        keyword,
        summary
    )
}

/// Every finished round, hints then guesses, labelled by round number.
pub(crate) fn transcript(game: &Game) -> String {
    let hints = game
        .history()
        .iter()
        .map(|record| {
            let lines = record
                .hint_lines(game.speaking_order(), None)
                .iter()
                .map(|line| format!("{}: {}", line.speaker, line.text))
                .collect::<Vec<_>>()
                .join("\n");
            format!("[Round {} 힌트]\n{}", record.round(), lines)
        })
        .collect::<Vec<_>>()
        .join("\n");
    let guesses = game
        .history()
        .iter()
        .map(|record| {
            let lines = record
                .guess_lines(game.speaking_order())
                .iter()
                .map(|line| format!("{}: {}", line.speaker, line.text))
                .collect::<Vec<_>>()
                .join(", ");
            format!("[Round {} 추측] {}", record.round(), lines)
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("{}\n\n{}", hints, guesses)
}

pub(crate) fn vote(game: &Game) -> String {
    format!(
        "당신은 최종 투표를 하는 AI 플레이어입니다.\n\n\
         아래는 전체 게임 동안 모든 플레이어가 제시한 힌트와 추측입니다.\n\n\
         {}\n\n\
         이 내용을 바탕으로, 가장 수상한 라이어를 추리해 주세요.\n\
         정확히 'Player N' 형식으로 한 명만 출력하세요. (다른 말 없이 이름만!)",
        transcript(game)
    )
}
