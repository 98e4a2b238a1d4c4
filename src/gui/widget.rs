//! Widget Capability Trait
//!
//! The polymorphic contract every menu element implements, plus the small
//! value types that flow through it: widget identity, click events, and the
//! command values clicks produce.

use crate::collision::AABB;
use sdl2::mouse::MouseButton;
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Stable identity for a widget.
///
/// `Box<dyn Widget>` has no useful structural equality, so removal from a
/// screen goes through this id instead. Ids are unique per process and
/// assigned at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(usize);

impl WidgetId {
    /// Allocates the next unused id.
    pub fn next() -> Self {
        static NEXT: AtomicUsize = AtomicUsize::new(0);
        WidgetId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A single mouse click, in the same coordinate space as widget bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickEvent {
    pub x: i32,
    pub y: i32,
    pub button: MouseButton,
}

impl ClickEvent {
    pub fn new(x: i32, y: i32, button: MouseButton) -> Self {
        ClickEvent { x, y, button }
    }
}

/// What a click on a widget asks the application to do.
///
/// Widgets store a command value instead of a closure, so click dispatch is
/// testable without a host and widgets stay ignorant of host internals.
/// `GoTo` is consumed by the menu controller itself; the remaining variants
/// are returned to the host for interpretation.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuCommand {
    /// Leave the menu and start gameplay
    StartGame,
    /// Terminate the application
    Quit,
    /// Switch the menu to the named screen
    GoTo(String),
}

/// The capability every menu element provides.
///
/// `update` and `render` are each called once per frame by the owning
/// screen. `update` recomputes per-frame derived state (hover) from the
/// host-supplied mouse position and the widget's own bounds; it performs no
/// I/O. `render` draws the current visual state without mutating any logic
/// state.
pub trait Widget {
    /// Stable identity, assigned at construction.
    fn id(&self) -> WidgetId;

    /// The widget's bounding box, used for layout and hit-testing.
    fn bounds(&self) -> AABB;

    /// True while the mouse is inside the widget's bounds (recomputed by
    /// the most recent `update`).
    fn is_hovered(&self) -> bool;

    /// Per-frame state update. `mouse_x`/`mouse_y` are the host's current
    /// pointer position in the same coordinate space as `bounds`.
    fn update(&mut self, dt: f32, mouse_x: i32, mouse_y: i32);

    /// Draws the widget's current visual state.
    fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String>;

    /// Whether this widget participates in click hit-testing.
    ///
    /// Display-only widgets keep the default and are skipped by the
    /// controller's click dispatch.
    fn accepts_clicks(&self) -> bool {
        false
    }

    /// Delivers a click to this widget.
    ///
    /// Returns the widget's stored command, if any. A widget with no
    /// command swallows the click (a no-op, not an error).
    fn click(&mut self, _event: &ClickEvent) -> Option<MenuCommand> {
        None
    }
}
