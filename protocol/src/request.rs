use serde::{Deserialize, Serialize};
use crate::{BinCodeMessage, Phase};

/// What the presentation layer can ask of the session.
#[derive(Deserialize, Serialize, PartialEq, Debug, Clone)]
pub enum ConsoleRequest {
    /// Discards whatever game exists and deals a new one.
    StartGame {
        total: u8,
        humans: u8,
    },
    /// Human text for the current round. Votes are filed under the last round.
    Submit {
        player: String,
        phase: Phase,
        text: String,
    },
    NextRound,
    Refresh,
}

impl BinCodeMessage<'_> for ConsoleRequest {}
