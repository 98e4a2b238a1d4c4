//! Button Widget
//!
//! The one concrete widget kind the menu ships with: an outlined rectangle
//! with a centered text label that inverts its palette while hovered and
//! carries an optional click command.

use super::widget::{ClickEvent, MenuCommand, Widget, WidgetId};
use crate::assets::FontRegistry;
use crate::collision::AABB;
use crate::text::BitmapFont;
use sdl2::pixels::Color;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

/// Configuration for button appearance
#[derive(Debug, Clone)]
pub struct ButtonStyle {
    /// Font name resolved against the `FontRegistry` at construction
    pub font: String,

    /// Fill color when not hovered
    pub fill_color: Color,

    /// Fill color while hovered
    pub hover_fill_color: Color,

    /// Label color when not hovered
    pub text_color: Color,

    /// Label color while hovered
    pub hover_text_color: Color,

    /// Outline color
    pub outline_color: Color,

    /// Outline thickness (draws a double rect if > 1)
    pub outline_thickness: u32,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        ButtonStyle {
            font: crate::assets::DEFAULT_FONT.to_string(),
            fill_color: Color::RGB(0, 0, 0),
            hover_fill_color: Color::RGB(255, 255, 255),
            text_color: Color::RGB(255, 255, 255),
            hover_text_color: Color::RGB(0, 0, 0),
            outline_color: Color::RGB(255, 255, 255),
            outline_thickness: 2,
        }
    }
}

/// A clickable labeled rectangle.
///
/// Construction resolves the style's font from the registry and precomputes
/// the label anchor (centered horizontally and vertically within bounds
/// using the measured label width). A missing font is a fatal configuration
/// error surfaced as `Err`; it is not handled locally.
///
/// # Example
///
/// ```rust
/// let play = Button::new(&fonts, AABB::new(200, 200, 180, 40), "PLAY")?
///     .on_click(MenuCommand::StartGame);
/// ```
pub struct Button {
    id: WidgetId,
    bounds: AABB,
    title: String,
    style: ButtonStyle,
    font: BitmapFont,

    /// Precomputed top-left anchor of the label
    label_x: i32,
    label_y: i32,

    active: bool,
    hovered: bool,

    /// Current palette, recomputed each update as a pure function of hover
    fill_color: Color,
    text_color: Color,

    on_click: Option<MenuCommand>,
}

impl Button {
    /// Creates a button with the default style.
    pub fn new(fonts: &FontRegistry, bounds: AABB, title: &str) -> Result<Self, String> {
        Self::with_style(fonts, bounds, title, ButtonStyle::default())
    }

    /// Creates a button with a custom style.
    pub fn with_style(
        fonts: &FontRegistry,
        bounds: AABB,
        title: &str,
        style: ButtonStyle,
    ) -> Result<Self, String> {
        let font = fonts.get_font(&style.font)?;

        // Center the label inside the bounds using its measured size
        let (center_x, center_y) = bounds.center();
        let label_x = center_x - font.text_width(title) as i32 / 2;
        let label_y = center_y - font.char_height() as i32 / 2;

        Ok(Button {
            id: WidgetId::next(),
            bounds,
            title: title.to_string(),
            fill_color: style.fill_color,
            text_color: style.text_color,
            style,
            font,
            label_x,
            label_y,
            active: false,
            hovered: false,
            on_click: None,
        })
    }

    /// Sets the command a click on this button produces (builder-style).
    pub fn on_click(mut self, command: MenuCommand) -> Self {
        self.on_click = Some(command);
        self
    }

    /// The button's display title.
    #[allow(dead_code)] // Reserved for runtime label inspection
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current fill color (depends on the last update's hover state).
    #[allow(dead_code)] // Reserved for style inspection
    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    /// Current label color (depends on the last update's hover state).
    #[allow(dead_code)] // Reserved for style inspection
    pub fn text_color(&self) -> Color {
        self.text_color
    }

    /// Marks the button active/inactive.
    #[allow(dead_code)] // Reserved for disabled-button styling
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    #[allow(dead_code)] // Reserved for disabled-button styling
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Widget for Button {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn bounds(&self) -> AABB {
        self.bounds
    }

    fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Recomputes hover from the mouse position and swaps the palette:
    /// hovered buttons invert to the hover colors, everything else shows
    /// the normal colors. No state persists beyond the hover flag, so
    /// leaving the bounds restores the exact pre-hover palette.
    fn update(&mut self, _dt: f32, mouse_x: i32, mouse_y: i32) {
        self.hovered = self.bounds.contains_point(mouse_x, mouse_y);

        if self.hovered {
            self.fill_color = self.style.hover_fill_color;
            self.text_color = self.style.hover_text_color;
        } else {
            self.fill_color = self.style.fill_color;
            self.text_color = self.style.text_color;
        }
    }

    /// Draws the filled rectangle, its outline, then the label, in that
    /// order, compositing over whatever is already on the canvas.
    fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        canvas.set_blend_mode(BlendMode::Blend);

        // Fill
        canvas.set_draw_color(self.fill_color);
        canvas.fill_rect(self.bounds.to_rect())?;

        // Outline (double rect for thickness > 1)
        canvas.set_draw_color(self.style.outline_color);
        canvas.draw_rect(self.bounds.to_rect())?;
        if self.style.outline_thickness > 1 && self.bounds.w > 4 && self.bounds.h > 4 {
            canvas.draw_rect(
                AABB::new(
                    self.bounds.x + 2,
                    self.bounds.y + 2,
                    self.bounds.w - 4,
                    self.bounds.h - 4,
                )
                .to_rect(),
            )?;
        }

        // Label (drawn last, on top of the fill)
        self.font
            .draw_text(canvas, &self.title, self.label_x, self.label_y, self.text_color)?;

        canvas.set_blend_mode(BlendMode::None);
        Ok(())
    }

    fn accepts_clicks(&self) -> bool {
        true
    }

    fn click(&mut self, _event: &ClickEvent) -> Option<MenuCommand> {
        self.on_click.clone()
    }
}
