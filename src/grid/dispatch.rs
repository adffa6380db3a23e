use std::collections::VecDeque;

use super::{ButtonGrid, GridError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiEvent {
    Activate(usize),
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Default)]
pub struct Dispatcher {
    queue: VecDeque<UiEvent>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ev: UiEvent) {
        self.queue.push_back(ev);
    }

    #[cfg(test)]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    // Events queued behind a Quit are dropped.
    pub fn drain(&mut self, grid: &mut ButtonGrid) -> Result<Flow, GridError> {
        while let Some(ev) = self.queue.pop_front() {
            match ev {
                UiEvent::Activate(index) => grid.activate(index)?,
                UiEvent::Quit => {
                    self.queue.clear();
                    return Ok(Flow::Quit);
                }
            }
        }
        Ok(Flow::Continue)
    }
}
