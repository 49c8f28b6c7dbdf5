//! Material design inspired styling for the UI.
//!
//! This module centralises all colors, spacing and basic widget styles.
//! New components should be built on top of these helpers so the
//! application keeps a consistent look.

use iced::widget::{button, container};
use iced::{theme, Border, Color, Theme};

use crate::notice::NoticeKind;

/// Material color palette
pub struct Palette;

impl Palette {
    pub const PRIMARY: Color = Color { r: 0.25, g: 0.32, b: 0.71, a: 1.0 }; // Indigo 700
    pub const ON_PRIMARY: Color = Color::WHITE;
    pub const SURFACE: Color = Color { r: 0.98, g: 0.98, b: 0.98, a: 1.0 };
    pub const ON_SURFACE: Color = Color { r: 0.1, g: 0.1, b: 0.1, a: 1.0 };
    pub const ERROR: Color = Color { r: 0.80, g: 0.0, b: 0.0, a: 1.0 };
    pub const ERROR_SURFACE: Color = Color { r: 1.0, g: 0.9, b: 0.9, a: 1.0 };
    pub const INFO: Color = Color { r: 0.0, g: 0.45, b: 0.2, a: 1.0 };
    pub const INFO_SURFACE: Color = Color { r: 0.9, g: 1.0, b: 0.92, a: 1.0 };

    pub const SPACING: u16 = 16;
}

struct PrimaryButton;

impl button::StyleSheet for PrimaryButton {
    type Style = Theme;

    fn active(&self, _style: &Theme) -> button::Appearance {
        button::Appearance {
            background: Some(Palette::PRIMARY.into()),
            text_color: Palette::ON_PRIMARY,
            border: Border {
                color: Palette::PRIMARY,
                width: 1.0,
                radius: 4.0.into(),
            },
            ..button::Appearance::default()
        }
    }

    fn hovered(&self, style: &Theme) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            background: Some(
                Color {
                    a: 0.85,
                    ..Palette::PRIMARY
                }
                .into(),
            ),
            ..active
        }
    }
}

/// Style for primary action buttons.
pub fn button_primary() -> theme::Button {
    theme::Button::Custom(Box::new(PrimaryButton))
}

struct MenuItem;

impl button::StyleSheet for MenuItem {
    type Style = Theme;

    fn active(&self, _style: &Theme) -> button::Appearance {
        button::Appearance {
            background: Some(Palette::SURFACE.into()),
            text_color: Palette::ON_SURFACE,
            border: Border {
                radius: 2.0.into(),
                ..Border::default()
            },
            ..button::Appearance::default()
        }
    }

    fn hovered(&self, _style: &Theme) -> button::Appearance {
        button::Appearance {
            background: Some(
                Color {
                    a: 0.15,
                    ..Palette::PRIMARY
                }
                .into(),
            ),
            text_color: Palette::ON_SURFACE,
            border: Border {
                radius: 2.0.into(),
                ..Border::default()
            },
            ..button::Appearance::default()
        }
    }
}

/// Flat entries inside the manage dropdown.
pub fn menu_item() -> theme::Button {
    theme::Button::Custom(Box::new(MenuItem))
}

struct Card {
    selected: bool,
}

impl button::StyleSheet for Card {
    type Style = Theme;

    fn active(&self, _style: &Theme) -> button::Appearance {
        button::Appearance {
            background: Some(Palette::SURFACE.into()),
            text_color: Palette::ON_SURFACE,
            border: Border {
                color: if self.selected {
                    Palette::PRIMARY
                } else {
                    Palette::SURFACE
                },
                width: if self.selected { 3.0 } else { 1.0 },
                radius: 4.0.into(),
            },
            ..button::Appearance::default()
        }
    }
}

/// Grid cards; the selected photo carries a highlight border.
pub fn photo_card(selected: bool) -> theme::Button {
    theme::Button::Custom(Box::new(Card { selected }))
}

/// Album cards share the card shape and are never marked selected.
pub fn album_card() -> theme::Button {
    theme::Button::Custom(Box::new(Card { selected: false }))
}

/// The dropdown panel behind the manage menu.
pub fn menu_panel() -> theme::Container {
    theme::Container::Custom(Box::new(|_theme: &Theme| container::Appearance {
        background: Some(Palette::SURFACE.into()),
        text_color: Some(Palette::ON_SURFACE),
        border: Border {
            color: Palette::PRIMARY,
            width: 1.0,
            radius: 4.0.into(),
        },
        shadow: Default::default(),
    }))
}

/// Banner row for one notice.
pub fn banner(kind: NoticeKind) -> theme::Container {
    let (fg, bg) = match kind {
        NoticeKind::Error => (Palette::ERROR, Palette::ERROR_SURFACE),
        NoticeKind::Info => (Palette::INFO, Palette::INFO_SURFACE),
    };
    theme::Container::Custom(Box::new(move |_theme: &Theme| container::Appearance {
        text_color: Some(fg),
        background: Some(bg.into()),
        border: Border {
            color: fg,
            width: 1.0,
            radius: 2.0.into(),
        },
        shadow: Default::default(),
    }))
}
