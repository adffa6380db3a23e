// Shared game constants and vocabulary.
use std::fmt;

use thiserror::Error;

pub const VERSION: &str = "0.0";
#[allow(dead_code)]
pub const BIG: f64 = 1e10;

pub const DEFAULT_BUTTON_COUNT: usize = 5;
pub const MAX_BUTTONS: usize = 10; // one digit key per button
pub const BUTTON_H: u16 = 3; // bordered button: top edge, label, bottom edge
pub const BUTTON_W: u16 = 12;
pub const INFO_W: u16 = 30;
pub const BUTTONS_ENV: &str = "SWEEPER_BUTTONS";

#[allow(dead_code)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonState {
    Unclicked,
    Mine,
    Flagged,
    Clicked,
}

impl ButtonState {
    // Board-array code. Negative so it never collides with a neighbour count.
    #[allow(dead_code)]
    pub const fn code(self) -> Option<i32> {
        match self {
            Self::Unclicked => Some(-101),
            Self::Mine => Some(-100),
            Self::Flagged | Self::Clicked => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unclicked => "unclicked",
            Self::Mine => "mine",
            Self::Flagged => "flagged",
            Self::Clicked => "clicked",
        }
    }
}

// What a drag-select sweep does to the cells it crosses.
#[allow(dead_code)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragFlag {
    Flag,
    Unflag,
}

impl DragFlag {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flag => "flag",
            Self::Unflag => "unflag",
        }
    }
}

#[allow(dead_code)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameState {
    Ready,
    Active,
    Won,
    Lost,
    Inactive,
    Create,
}

impl GameState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Active => "active",
            Self::Won => "won",
            Self::Lost => "lost",
            Self::Inactive => "inactive",
            Self::Create => "create",
        }
    }
}

#[allow(dead_code)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MinefieldOrigin {
    Official,
    Regular,
    Known,
}

impl MinefieldOrigin {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Official => "official",
            Self::Regular => "regular",
            Self::Known => "known",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(ButtonState, DragFlag, GameState, MinefieldOrigin);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("board dimensions must be positive, got {0}x{1}")]
    EmptyBoard(u16, u16),
    #[error("mine count must be positive")]
    NoMines,
    #[error("{mines} mines do not fit on a board of {cells} cells")]
    TooManyMines { mines: u32, cells: u32 },
    #[error("button size must be positive")]
    ZeroButtonSize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub dims: (u16, u16),
    pub mines: u32,
    pub drag_select: bool,
    pub btn_size: u16, // pixels
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dims: (8, 8),
            mines: 10,
            drag_select: false,
            btn_size: 16,
        }
    }
}

impl Settings {
    pub fn cell_count(&self) -> u32 {
        u32::from(self.dims.0) * u32::from(self.dims.1)
    }

    // At least one cell must stay free of mines.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let (rows, cols) = self.dims;
        if rows == 0 || cols == 0 {
            return Err(SettingsError::EmptyBoard(rows, cols));
        }
        if self.mines == 0 {
            return Err(SettingsError::NoMines);
        }
        let cells = self.cell_count();
        if self.mines >= cells {
            return Err(SettingsError::TooManyMines {
                mines: self.mines,
                cells,
            });
        }
        if self.btn_size == 0 {
            return Err(SettingsError::ZeroButtonSize);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_match_beginner_board() {
        let settings = Settings::default();
        assert_eq!(
            settings,
            Settings {
                dims: (8, 8),
                mines: 10,
                drag_select: false,
                btn_size: 16,
            }
        );
        assert!(settings.mines < settings.cell_count());
        assert_eq!(settings.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_unplayable_boards() {
        let base = Settings::default();
        let full = Settings { mines: 64, ..base };
        assert_eq!(
            full.validate(),
            Err(SettingsError::TooManyMines { mines: 64, cells: 64 })
        );
        let flat = Settings { dims: (0, 8), ..base };
        assert_eq!(flat.validate(), Err(SettingsError::EmptyBoard(0, 8)));
        assert_eq!(Settings { mines: 0, ..base }.validate(), Err(SettingsError::NoMines));
        assert_eq!(
            Settings { btn_size: 0, ..base }.validate(),
            Err(SettingsError::ZeroButtonSize)
        );
        assert!(Settings { mines: 63, ..base }.validate().is_ok());
    }

    #[test]
    fn board_codes_are_negative() {
        assert_eq!(ButtonState::Unclicked.code(), Some(-101));
        assert_eq!(ButtonState::Mine.code(), Some(-100));
        assert_eq!(ButtonState::Flagged.code(), None);
        assert_eq!(ButtonState::Clicked.to_string(), "clicked");
    }

    #[test]
    fn vocabulary_words() {
        assert_eq!(DragFlag::Unflag.to_string(), "unflag");
        assert_eq!(GameState::Create.as_str(), "create");
        assert_eq!(MinefieldOrigin::Known.to_string(), "known");
    }
}
