mod request;
mod view;

use lexicon::Lexicon;
use log::{info, warn};
use rand::rngs::StdRng;
use tokio::sync::mpsc::{Sender, Receiver, channel};

use protocol::{ConsoleRequest, ConsoleResponse};

use crate::completion::Completion;
use crate::console::Console;
use crate::error::{ErrorKind, RoomResult};
use crate::game::{Game, Stage};
use crate::orchestrator::{play_round, InputBook, InputKey, Progress};
use crate::tally::cast_votes;
use crate::types::*;

pub use request::Request as SessionReq;

/// The one game this process hosts.
///
/// Every console request is applied, then the current phase is evaluated again
/// from the top and a fresh view goes back. AI turns are awaited one by one
/// inside that evaluation, so nothing else touches the game meanwhile.
pub struct Session<C> {
    lexicon: Lexicon,
    rng: StdRng,
    completion: C,

    game: Option<Game>,
    inputs: InputBook,

    console: Option<Console>,
    next_console: usize,

    rx: Receiver<SessionReq>,
    loopback: Sender<SessionReq>,
}

impl<C: Completion> Session<C> {
    pub fn new(lexicon: Lexicon, completion: C, rng: StdRng) -> Self {
        let (loopback, rx) = channel::<SessionReq>(32);
        Self {
            lexicon,
            rng,
            completion,

            game: None,
            inputs: InputBook::new(),

            console: None,
            next_console: 0,

            rx,
            loopback,
        }
    }

    pub fn get_tx(&self) -> Sender<SessionReq> {
        self.loopback.clone()
    }

    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    pub async fn run(&mut self) {
        while let Some(req) = self.rx.recv().await {
            match req {
                SessionReq::ConsoleLogin { ws_stream } => self.login(ws_stream).await,
                SessionReq::ConsoleReq(id, req) => {
                    if self.console.as_ref().map(|c| c.id) != Some(id) {
                        continue;
                    }
                    let resp = self.handle(req).await;
                    self.send(resp).await;
                }
                SessionReq::ConsoleLogout(id) => {
                    if self.console.as_ref().map(|c| c.id) == Some(id) {
                        info!("console {} logged out", id);
                        self.console.take();
                    }
                }
            }
        }
    }

    /// A new console replaces the old one and is shown where the game stands.
    async fn login(&mut self, ws_stream: WsStream) {
        let id = self.next_console;
        self.next_console += 1;
        if self.console.is_some() {
            warn!("console {} replaces the previous one", id);
        }
        self.console = Some(Console::new(id, ws_stream, self.get_tx()));
        let resp = self.handle(ConsoleRequest::Refresh).await;
        self.send(resp).await;
    }

    async fn send(&self, resp: ConsoleResponse) {
        if let Some(ref console) = self.console {
            console.send(resp).await;
        }
    }

    pub async fn handle(&mut self, req: ConsoleRequest) -> ConsoleResponse {
        if let Err(e) = self.apply(req) {
            return ConsoleResponse::Rejected { reason: e.to_string() };
        }
        match self.evaluate().await {
            Ok(progress) => ConsoleResponse::View(view::render(self.game.as_ref(), &progress)),
            Err(e) => ConsoleResponse::Rejected { reason: e.to_string() },
        }
    }

    fn apply(&mut self, req: ConsoleRequest) -> RoomResult<()> {
        match req {
            ConsoleRequest::StartGame { total, humans } => {
                let game = Game::start(&mut self.rng, &self.lexicon, total as usize, humans as usize)?;
                self.inputs.clear();
                self.game = Some(game);
            }
            ConsoleRequest::Submit { player, phase, text } => {
                let game = self.game.as_ref().ok_or(ErrorKind::NoGame)?;
                if game.player(&player).is_none() {
                    return Err(ErrorKind::UnknownPlayer(player));
                }
                let key = InputKey::new(player, game.round(), phase);
                self.inputs.submit(key, text);
            }
            ConsoleRequest::NextRound => {
                self.game.as_mut().ok_or(ErrorKind::NoGame)?.advance_round()?;
            }
            ConsoleRequest::Refresh => {}
        }
        Ok(())
    }

    async fn evaluate(&mut self) -> RoomResult<Progress> {
        let game = match self.game.as_mut() {
            Some(game) => game,
            None => return Ok(Progress::Complete),
        };
        match game.stage() {
            Stage::Active => play_round(game, &self.inputs, &self.completion).await,
            Stage::Voting => cast_votes(game, &self.inputs, &self.completion).await,
            Stage::Over(_) => Ok(Progress::Complete),
        }
    }
}
