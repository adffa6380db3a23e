pub mod button;
pub mod dispatch;

use thiserror::Error;

pub use button::{action_for, Action, Button};
pub use dispatch::{Dispatcher, Flow, UiEvent};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("no button at index {index} (grid has {len})")]
    NoSuchButton { index: usize, len: usize },
}

// One column of buttons, each with its own action.
pub struct ButtonGrid {
    buttons: Vec<Button>,
    actions: Vec<Action>,
}

impl ButtonGrid {
    pub fn new(count: usize) -> Self {
        let mut buttons = Vec::with_capacity(count);
        let mut actions = Vec::with_capacity(count);
        for i in 0..count {
            buttons.push(Button::new(i.to_string()));
            actions.push(action_for(i));
        }
        Self { buttons, actions }
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn activate(&mut self, index: usize) -> Result<(), GridError> {
        let action = self.actions.get(index).ok_or(GridError::NoSuchButton {
            index,
            len: self.buttons.len(),
        })?;
        action(self.buttons.as_mut_slice());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::button::{DEFAULT_BG, HIGHLIGHT};
    use super::*;

    #[test]
    fn buttons_are_labeled_by_index() {
        let grid = ButtonGrid::new(5);
        let labels: Vec<&str> = grid.buttons().iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["0", "1", "2", "3", "4"]);
        assert!(grid.buttons().iter().all(|b| b.bg == DEFAULT_BG));
    }

    #[test]
    fn activating_two_only_highlights_two() {
        let mut grid = ButtonGrid::new(5);
        grid.activate(2).unwrap();
        for (i, button) in grid.buttons().iter().enumerate() {
            let want = if i == 2 { HIGHLIGHT } else { DEFAULT_BG };
            assert_eq!(button.bg, want, "button {i}");
        }
    }

    #[test]
    fn every_action_touches_only_its_own_button() {
        for target in 0..5 {
            let mut grid = ButtonGrid::new(5);
            grid.activate(target).unwrap();
            let green: Vec<usize> = grid
                .buttons()
                .iter()
                .enumerate()
                .filter(|(_, b)| b.bg == HIGHLIGHT)
                .map(|(i, _)| i)
                .collect();
            assert_eq!(green, [target]);
        }
    }

    #[test]
    fn activation_is_idempotent() {
        let mut grid = ButtonGrid::new(3);
        grid.activate(1).unwrap();
        grid.activate(1).unwrap();
        assert_eq!(grid.buttons()[1].bg, HIGHLIGHT);
        assert_eq!(grid.buttons()[0].bg, DEFAULT_BG);
    }

    #[test]
    fn out_of_range_is_an_error() {
        let mut grid = ButtonGrid::new(5);
        assert_eq!(
            grid.activate(5),
            Err(GridError::NoSuchButton { index: 5, len: 5 })
        );
        assert!(grid.buttons().iter().all(|b| b.bg == DEFAULT_BG));
    }
}
