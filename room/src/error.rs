#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("a game seats 3 to 8 players, not {0}")]
    PlayerCount(usize),
    #[error("{humans} humans do not fit in a {total}-player game")]
    HumanCount { humans: usize, total: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Lexicon(#[from] lexicon::ErrorKind),

    #[error("no game has been started")]
    NoGame,
    #[error("the game is not {0}")]
    WrongStage(&'static str),
    #[error("round {0} is still being played")]
    RoundUnfinished(u8),
    #[error("there is no {0} in this game")]
    UnknownPlayer(String),

    #[error("completion request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("completion reply is not json: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("completion service said: {0}")]
    Backend(String),
}

pub type RoomResult<T> = Result<T, ErrorKind>;
