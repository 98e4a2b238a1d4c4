//! Menu Theme Configuration
//!
//! JSON-driven styling for the menu system. The host loads a theme file at
//! startup; if the file is missing the built-in default theme is used, so a
//! fresh checkout runs without any assets on disk.

use crate::gui::ButtonStyle;
use sdl2::pixels::Color;
use serde::{Deserialize, Serialize};

/// Menu styling loaded from `assets/config/menu_theme.json`.
///
/// Colors are stored as `[r, g, b]` triples so the JSON stays hand-editable.
/// The defaults reproduce the classic palette: dark buttons with a white
/// outline that invert to white-on-black when hovered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuTheme {
    /// Font name resolved against the `FontRegistry`
    pub font: String,
    /// Canvas clear color while the menu is active
    pub background_color: [u8; 3],
    pub fill_color: [u8; 3],
    pub hover_fill_color: [u8; 3],
    pub text_color: [u8; 3],
    pub hover_text_color: [u8; 3],
    pub outline_color: [u8; 3],
    /// Outline thickness (draws a double rect if > 1)
    pub outline_thickness: u32,
}

impl Default for MenuTheme {
    fn default() -> Self {
        MenuTheme {
            font: crate::assets::DEFAULT_FONT.to_string(),
            background_color: [20, 20, 30],
            fill_color: [0, 0, 0],
            hover_fill_color: [255, 255, 255],
            text_color: [255, 255, 255],
            hover_text_color: [0, 0, 0],
            outline_color: [255, 255, 255],
            outline_thickness: 2,
        }
    }
}

impl MenuTheme {
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let theme: MenuTheme = serde_json::from_str(&content)?;
        Ok(theme)
    }

    /// Builds the button style this theme describes.
    pub fn button_style(&self) -> ButtonStyle {
        ButtonStyle {
            font: self.font.clone(),
            fill_color: rgb(self.fill_color),
            hover_fill_color: rgb(self.hover_fill_color),
            text_color: rgb(self.text_color),
            hover_text_color: rgb(self.hover_text_color),
            outline_color: rgb(self.outline_color),
            outline_thickness: self.outline_thickness,
        }
    }

    /// Canvas clear color as an SDL2 `Color`.
    pub fn background(&self) -> Color {
        rgb(self.background_color)
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::RGB(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_palette() {
        let theme = MenuTheme::default();
        assert_eq!(theme.font, "menu");
        assert_eq!(theme.fill_color, [0, 0, 0]);
        assert_eq!(theme.hover_fill_color, [255, 255, 255]);
        assert_eq!(theme.outline_thickness, 2);
    }

    #[test]
    fn test_theme_parses_from_json() {
        let json = r#"{
            "font": "menu_title",
            "background_color": [10, 10, 10],
            "fill_color": [30, 30, 40],
            "hover_fill_color": [200, 200, 220],
            "text_color": [220, 220, 240],
            "hover_text_color": [20, 20, 20],
            "outline_color": [100, 100, 120],
            "outline_thickness": 1
        }"#;

        let theme: MenuTheme = serde_json::from_str(json).unwrap();
        assert_eq!(theme.font, "menu_title");
        assert_eq!(theme.outline_thickness, 1);

        let style = theme.button_style();
        assert_eq!(style.fill_color, Color::RGB(30, 30, 40));
        assert_eq!(style.hover_text_color, Color::RGB(20, 20, 20));
    }

    #[test]
    fn test_theme_round_trips_through_json() {
        let theme = MenuTheme::default();
        let json = serde_json::to_string(&theme).unwrap();
        let back: MenuTheme = serde_json::from_str(&json).unwrap();
        assert_eq!(back.font, theme.font);
        assert_eq!(back.fill_color, theme.fill_color);
    }
}
