//! Menu Screen
//!
//! An ordered collection of widgets presented and updated together.
//! Insertion order is load-bearing: it is the update order, the render
//! order (later widgets draw over earlier ones), and the click hit-test
//! priority.

use super::widget::{Widget, WidgetId};
use sdl2::render::Canvas;
use sdl2::video::Window;

/// An ordered collection of widgets.
///
/// A widget belongs to at most one screen at a time; that is a contract
/// with callers, not something the structure enforces.
pub struct Screen {
    widgets: Vec<Box<dyn Widget>>,
}

impl Screen {
    /// Creates an empty screen.
    pub fn new() -> Self {
        Screen {
            widgets: Vec::new(),
        }
    }

    /// Appends a batch of widgets, preserving their order.
    pub fn add(&mut self, widgets: Vec<Box<dyn Widget>>) {
        self.widgets.extend(widgets);
    }

    /// Removes the first widget with the given id. No-op if absent.
    #[allow(dead_code)] // Reserved for dynamic screen editing
    pub fn remove(&mut self, id: WidgetId) {
        if let Some(index) = self.widgets.iter().position(|w| w.id() == id) {
            self.widgets.remove(index);
        }
    }

    /// Updates every widget in insertion order.
    pub fn update(&mut self, dt: f32, mouse_x: i32, mouse_y: i32) {
        for widget in &mut self.widgets {
            widget.update(dt, mouse_x, mouse_y);
        }
    }

    /// Renders every widget in insertion order, so later widgets end up
    /// visually on top.
    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        for widget in &self.widgets {
            widget.render(canvas)?;
        }
        Ok(())
    }

    /// The widgets in insertion order.
    #[allow(dead_code)] // Reserved for host-side diagnostics
    pub fn widgets(&self) -> &[Box<dyn Widget>] {
        &self.widgets
    }

    /// Mutable access, used by the controller for click dispatch.
    pub fn widgets_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut self.widgets
    }

    #[allow(dead_code)] // Reserved for host-side diagnostics
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    #[allow(dead_code)] // Reserved for host-side diagnostics
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}
