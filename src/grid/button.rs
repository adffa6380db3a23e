use ratatui::style::Color;

pub const DEFAULT_BG: Color = Color::Gray;
pub const HIGHLIGHT: Color = Color::Green;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub bg: Color,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            bg: DEFAULT_BG,
        }
    }

    pub fn config_bg(&mut self, bg: Color) {
        self.bg = bg;
    }
}

// Gets the whole button list so the grid can own both.
pub type Action = Box<dyn Fn(&mut [Button])>;

// `id` is moved in: each callback keeps pointing at the button it was made for.
pub fn action_for(id: usize) -> Action {
    Box::new(move |buttons: &mut [Button]| {
        if let Some(button) = buttons.get_mut(id) {
            button.config_bg(HIGHLIGHT);
        }
    })
}
