//! Centralized theme module for TUI color constants and styles

use ratatui::prelude::*;

use crate::config::ThemeMode;
use crate::scoring::Tone;

/// Complete color palette for the TUI
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Tier tones (traffic light pattern)
    pub tone_danger: Color,
    pub tone_caution: Color,
    pub tone_success: Color,

    // Score buttons
    pub button_selected: Style,
    pub button_idle: Style,

    // Category list
    pub row_selected: Style,
    pub index_color: Color,

    // Brand accents
    pub accent: Color,
    pub title_color: Color,
    pub muted: Color,

    // Tabs
    pub tab_active_style: Style,
    pub tab_inactive_style: Style,

    // Status bar colors
    pub status_bar_bg: Color,
    pub status_key_color: Color,
    pub flash_success: Color,
    pub flash_error: Color,

    // Progress bar
    pub bar_filled: Color,
    pub bar_empty: Color,

    // Popup overlay colors
    pub popup_border: Color,
    pub popup_title: Style,
}

impl ThemeColors {
    /// Dark theme palette
    pub fn dark() -> Self {
        Self {
            tone_danger: Color::Red,
            tone_caution: Color::Yellow,
            tone_success: Color::Green,
            button_selected: Style::new().fg(Color::Black).bg(Color::White).bold(),
            button_idle: Style::new().fg(Color::DarkGray),
            row_selected: Style::new().bg(Color::Indexed(236)).bold(),
            index_color: Color::DarkGray,
            accent: Color::Rgb(217, 119, 6),
            title_color: Color::White,
            muted: Color::Gray,
            tab_active_style: Style::new().fg(Color::Rgb(217, 119, 6)).bold(),
            tab_inactive_style: Style::new().fg(Color::DarkGray),
            status_bar_bg: Color::Indexed(236),
            status_key_color: Color::Rgb(217, 119, 6),
            flash_success: Color::Green,
            flash_error: Color::Red,
            bar_filled: Color::Rgb(217, 119, 6),
            bar_empty: Color::DarkGray,
            popup_border: Color::Rgb(217, 119, 6),
            popup_title: Style::new().fg(Color::Rgb(217, 119, 6)).bold(),
        }
    }

    /// Light theme palette for light terminal backgrounds
    pub fn light() -> Self {
        Self {
            tone_danger: Color::Rgb(185, 28, 28),
            tone_caution: Color::Rgb(180, 83, 9),
            tone_success: Color::Rgb(4, 120, 87),
            button_selected: Style::new().fg(Color::White).bg(Color::Rgb(15, 31, 46)).bold(),
            button_idle: Style::new().fg(Color::Gray),
            row_selected: Style::new().bg(Color::Indexed(254)).bold(),
            index_color: Color::Gray,
            accent: Color::Rgb(180, 83, 9),
            title_color: Color::Rgb(15, 31, 46),
            muted: Color::DarkGray,
            tab_active_style: Style::new().fg(Color::Rgb(180, 83, 9)).bold(),
            tab_inactive_style: Style::new().fg(Color::Gray),
            status_bar_bg: Color::Indexed(254),
            status_key_color: Color::Rgb(180, 83, 9),
            flash_success: Color::Rgb(4, 120, 87),
            flash_error: Color::Rgb(185, 28, 28),
            bar_filled: Color::Rgb(15, 31, 46),
            bar_empty: Color::Indexed(250),
            popup_border: Color::Rgb(15, 31, 46),
            popup_title: Style::new().fg(Color::Rgb(15, 31, 46)).bold(),
        }
    }

    /// Color used to render a tier label and description
    pub fn tone_color(&self, tone: Tone) -> Color {
        match tone {
            Tone::Danger => self.tone_danger,
            Tone::Caution => self.tone_caution,
            Tone::Success => self.tone_success,
        }
    }
}

/// Pick the palette for the configured mode, probing the terminal for `auto`.
pub fn resolve_theme(mode: ThemeMode) -> ThemeColors {
    match mode {
        ThemeMode::Dark => ThemeColors::dark(),
        ThemeMode::Light => ThemeColors::light(),
        ThemeMode::Auto => match terminal_light::luma() {
            Ok(luma) if luma > 0.6 => {
                crate::log_info!("Detected light terminal background (luma {:.2})", luma);
                ThemeColors::light()
            }
            Ok(_) => ThemeColors::dark(),
            Err(e) => {
                crate::log_info!("Could not detect terminal background: {}", e);
                ThemeColors::dark()
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_colors_differ() {
        let theme = ThemeColors::dark();
        assert_ne!(theme.tone_color(Tone::Danger), theme.tone_color(Tone::Success));
        assert_ne!(theme.tone_color(Tone::Caution), theme.tone_color(Tone::Success));
    }

    #[test]
    fn test_explicit_modes_skip_detection() {
        assert_eq!(resolve_theme(ThemeMode::Dark).title_color, Color::White);
        assert_eq!(
            resolve_theme(ThemeMode::Light).title_color,
            Color::Rgb(15, 31, 46)
        );
    }
}
