//! Font Asset Registry
//!
//! Central registry of named font resources. Widgets resolve their font by
//! name at construction time; a missing font is a configuration error that
//! aborts menu construction rather than something handled locally.

use crate::text::BitmapFont;
use std::collections::HashMap;

/// Name of the font every built-in menu widget uses by default.
pub const DEFAULT_FONT: &str = "menu";

/// Central registry of named fonts.
///
/// This is the single source of truth for which fonts exist. All widget
/// construction goes through [`FontRegistry::get_font`], so a typo'd font
/// name fails loudly at startup instead of silently rendering nothing.
pub struct FontRegistry {
    fonts: HashMap<String, BitmapFont>,
}

impl FontRegistry {
    /// Creates a new empty registry
    pub fn new() -> Self {
        FontRegistry {
            fonts: HashMap::new(),
        }
    }

    /// Creates a registry with the built-in menu fonts pre-registered
    ///
    /// Called once at startup to populate the registry.
    pub fn create_default() -> Self {
        let mut registry = Self::new();
        registry.register(DEFAULT_FONT, BitmapFont::new(2));
        registry.register("menu_small", BitmapFont::new(1));
        registry.register("menu_title", BitmapFont::new(3));
        registry
    }

    /// Registers a font under a name, replacing any previous entry.
    pub fn register(&mut self, name: &str, font: BitmapFont) {
        self.fonts.insert(name.to_string(), font);
    }

    /// Resolves a font by name.
    ///
    /// A miss is a fatal configuration error: the `Err` is expected to
    /// propagate all the way out of menu construction.
    pub fn get_font(&self, name: &str) -> Result<BitmapFont, String> {
        self.fonts
            .get(name)
            .copied()
            .ok_or_else(|| format!("Font '{}' not registered", name))
    }

    /// Returns true if a font with this name exists
    #[allow(dead_code)] // Reserved for config validation
    pub fn exists(&self, name: &str) -> bool {
        self.fonts.contains_key(name)
    }
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::create_default()
    }
}
