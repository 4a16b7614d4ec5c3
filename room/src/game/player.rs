use protocol::{Controller, PlayerState};

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub(crate) idx: usize,
    pub(crate) name: String,
    pub(crate) controller: Controller,
}

impl Player {
    /// Seat `idx` is shown as `Player {idx + 1}`.
    pub(crate) fn new(idx: usize, controller: Controller) -> Self {
        Self {
            idx,
            name: format!("Player {}", idx + 1),
            controller,
        }
    }

    pub fn idx(&self) -> usize {self.idx}
    pub fn name(&self) -> &str {&self.name}
    pub fn controller(&self) -> Controller {self.controller}
    pub fn is_human(&self) -> bool {self.controller == Controller::Human}

    pub fn get_state(&self) -> PlayerState {
        PlayerState {
            name: self.name.clone(),
            idx: self.idx as u8,
            controller: self.controller,
        }
    }
}
