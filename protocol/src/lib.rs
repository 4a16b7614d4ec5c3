pub mod request;
pub mod response;

pub use response::*;
pub use request::*;

use serde::{Serialize, Deserialize};
use bincode::{serialize, deserialize, ErrorKind};
use tokio_tungstenite::tungstenite::Message;

pub trait BinCodeMessage<'a>: Serialize + Deserialize<'a>{
    fn deser(bin: &'a [u8]) -> Result<Self, Box<ErrorKind>> {
        deserialize::<Self>(bin)
    }

    fn ser(&self) -> Result<Message, Box<ErrorKind>> {
        let bin = serialize(&self)?;
        Ok(Message::Binary(bin))
    }
}

/// Which answer a human is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Hint,
    Guess,
    Vote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Controller {
    Human,
    Ai,
}
