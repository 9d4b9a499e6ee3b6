use crate::view::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Colors for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub in_cart: Color,
    pub star: Color,
    pub badge: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::White,
                surface: Color::Gray,
                border: Color::DarkGray,
                text: Color::Black,
                muted: Color::DarkGray,
                accent: Color::Blue,
                in_cart: Color::Green,
                star: Color::Yellow,
                badge: Color::Red,
            },
            Theme::Dark => Self {
                background: Color::Black,
                surface: Color::DarkGray,
                border: Color::Gray,
                text: Color::White,
                muted: Color::Gray,
                accent: Color::LightBlue,
                in_cart: Color::LightGreen,
                star: Color::Yellow,
                badge: Color::LightRed,
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn highlight(&self) -> Style {
        Style::default().bg(self.surface).add_modifier(Modifier::BOLD)
    }
}
