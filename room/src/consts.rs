pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 8;
pub const ROUNDS: u8 = 3;

pub const HB_DURATION: tokio::time::Duration = tokio::time::Duration::from_secs(10);

pub const DEFAULT_PORT: u16 = 9000;
pub const DEFAULT_COMPLETION_URL: &str = "http://localhost:11434/api/chat";
pub const DEFAULT_MODEL: &str = "EEVE-Korean-10.8B";
