use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::{Priority, UiConfig};
use crate::ops::notify::NoticeLevel;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub panel: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub cyan: Color,
    pub selection_bg: Color,
    /// Per-tag colors
    pub tag_colors: HashMap<String, Color>,
}

impl Default for Theme {
    fn default() -> Self {
        let mut tag_colors = HashMap::new();
        tag_colors.insert("urgent".into(), Color::Rgb(0xE3, 0x1E, 0x35));
        tag_colors.insert("budget".into(), Color::Rgb(0x3A, 0xA8, 0x5C));
        tag_colors.insert("Q3".into(), Color::Rgb(0x4A, 0x90, 0xD9));

        Theme {
            background: Color::Rgb(0x12, 0x14, 0x1A),
            panel: Color::Rgb(0x1C, 0x1F, 0x27),
            text: Color::Rgb(0xC8, 0xCC, 0xD4),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xE3, 0x1E, 0x35),
            dim: Color::Rgb(0x7A, 0x80, 0x8C),
            red: Color::Rgb(0xFF, 0x55, 0x55),
            yellow: Color::Rgb(0xF2, 0xC1, 0x4E),
            green: Color::Rgb(0x3A, 0xC8, 0x6C),
            cyan: Color::Rgb(0x4A, 0xC8, 0xE0),
            selection_bg: Color::Rgb(0x3A, 0x16, 0x1E),
            tag_colors,
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "panel" => theme.panel = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "red" => theme.red = color,
                "yellow" => theme.yellow = color,
                "green" => theme.green = color,
                "cyan" => theme.cyan = color,
                "selection_bg" => theme.selection_bg = color,
                _ => {}
            }
        }

        for (tag, value) in &ui.tag_colors {
            if let Some(color) = parse_hex_color(value) {
                theme.tag_colors.insert(tag.clone(), color);
            }
        }

        theme
    }

    /// Get the color for a tag, falling back to the cyan accent
    pub fn tag_color(&self, tag: &str) -> Color {
        self.tag_colors.get(tag).copied().unwrap_or(self.cyan)
    }

    pub fn priority_color(&self, priority: Priority) -> Color {
        match priority {
            Priority::High => self.red,
            Priority::Medium => self.yellow,
            Priority::Low => self.dim,
        }
    }

    /// Color for a document workflow or delivery status
    pub fn status_color(&self, status: &str) -> Color {
        match status {
            "approved" | "delivered" | "sent" => self.green,
            "pending" | "processing" => self.yellow,
            "review" => self.cyan,
            "failed" => self.red,
            _ => self.text,
        }
    }

    pub fn notice_color(&self, level: NoticeLevel) -> Color {
        match level {
            NoticeLevel::Success => self.green,
            NoticeLevel::Info => self.cyan,
        }
    }
}
