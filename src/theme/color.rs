use ratatui::style::Color;

/// Base palette shared by every dashboard component
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPalette {
    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,
    pub selection_text: Color,

    // Status colors
    pub success: Color,
    pub error: Color,
    pub info: Color,

    pub accent: Color,
}

/// Colors for the user list rows
#[derive(Debug, Clone, PartialEq)]
pub struct UserListColors {
    pub name: Color,
    pub meta: Color,
    pub avatar: Color,
}

/// Colors for the dataset status panel
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetPanelColors {
    pub name: Color,
    pub loading: Color,
    pub loaded: Color,
    pub failed: Color,
}

/// Complete theme color scheme
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColors {
    pub palette: ColorPalette,
    pub user_list: UserListColors,
    pub dataset_panel: DatasetPanelColors,
}

impl ThemeColors {
    fn from_palette(palette: ColorPalette) -> Self {
        Self {
            user_list: UserListColors {
                name: palette.text_primary,
                meta: palette.text_secondary,
                avatar: palette.text_muted,
            },
            dataset_panel: DatasetPanelColors {
                name: palette.accent,
                loading: palette.info,
                loaded: palette.success,
                failed: palette.error,
            },
            palette,
        }
    }

    /// Dark theme colors
    pub fn dark() -> Self {
        Self::from_palette(ColorPalette {
            text_primary: Color::Rgb(224, 224, 230),
            text_secondary: Color::Rgb(160, 160, 168),
            text_muted: Color::Rgb(112, 112, 120),

            border: Color::Rgb(64, 64, 72),
            border_focused: Color::Rgb(88, 166, 255),
            selection: Color::Rgb(88, 166, 255),
            selection_text: Color::Rgb(16, 16, 20),

            success: Color::Rgb(76, 175, 80),
            error: Color::Rgb(244, 67, 54),
            info: Color::Rgb(33, 150, 243),

            accent: Color::Rgb(88, 166, 255),
        })
    }

    /// Light theme colors
    pub fn light() -> Self {
        Self::from_palette(ColorPalette {
            text_primary: Color::Rgb(32, 32, 40),
            text_secondary: Color::Rgb(96, 96, 104),
            text_muted: Color::Rgb(144, 144, 152),

            border: Color::Rgb(208, 208, 216),
            border_focused: Color::Rgb(0, 122, 255),
            selection: Color::Rgb(0, 122, 255),
            selection_text: Color::Rgb(250, 250, 252),

            success: Color::Rgb(52, 199, 89),
            error: Color::Rgb(255, 59, 48),
            info: Color::Rgb(0, 122, 255),

            accent: Color::Rgb(0, 122, 255),
        })
    }
}
