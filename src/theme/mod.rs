pub mod color;

use ratatui::style::{Modifier, Style};

pub use color::{ColorPalette, DatasetPanelColors, ThemeColors, UserListColors};

/// Dashboard colour theme
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

impl Theme {
    /// Dark theme, the default
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            colors: ThemeColors::dark(),
        }
    }

    /// Light theme for bright terminals
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            colors: ThemeColors::light(),
        }
    }

    /// Look a theme up by its config name
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }

    /// Border style for a block
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.colors.palette.border_focused)
        } else {
            Style::default().fg(self.colors.palette.border)
        }
    }

    /// Style for the selected user row
    pub fn selection_style(&self) -> Style {
        Style::default()
            .fg(self.colors.palette.selection_text)
            .bg(self.colors.palette.selection)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
