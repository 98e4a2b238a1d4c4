//! Screen-Space Menu GUI System
//!
//! This module provides the in-game menu subsystem: a polymorphic widget
//! abstraction, screens that group widgets, and a controller that owns a
//! named-screen registry and routes per-frame update/render/click dispatch.
//!
//! # Architecture
//!
//! The host application loop owns timing, the render target, and the
//! app-level state machine. Once per frame, in order, it:
//!
//! 1. Forwards input events ([`MenuController::handle_click`], which may
//!    return a [`MenuCommand`] for the host to interpret)
//! 2. Calls [`MenuController::update_fixed`] with the current mouse position
//! 3. Calls [`MenuController::render`]
//!
//! Everything is single-threaded and synchronous; all state (hover flags,
//! palettes, the current-screen pointer) mutates on the host thread.
//!
//! # Available Components
//!
//! - [`Widget`] - the update/render/click capability trait
//! - [`Button`] - outlined rectangle with a centered label and hover styling
//! - [`Screen`] - ordered widget collection (order = draw order = hit priority)
//! - [`MenuController`] - named-screen registry and input routing
//!
//! # Example Usage
//!
//! ```rust
//! use crate::gui::{MenuController, MenuCommand};
//!
//! let mut menu = MenuController::new();
//! menu.on_enter(&fonts, &theme)?;
//!
//! // In the frame loop
//! if let Some(command) = menu.handle_click(&event) {
//!     match command {
//!         MenuCommand::StartGame => { /* enter gameplay */ }
//!         MenuCommand::Quit => { /* leave the main loop */ }
//!         MenuCommand::GoTo(_) => unreachable!("consumed by the controller"),
//!     }
//! }
//! menu.update_fixed(dt, mouse_x, mouse_y);
//! menu.render(&mut canvas, alpha)?;
//! ```

pub mod button;
pub mod controller;
pub mod screen;
pub mod widget;

pub use button::{Button, ButtonStyle};
pub use controller::{MenuController, HOME_SCREEN};
pub use screen::Screen;
pub use widget::{ClickEvent, MenuCommand, Widget, WidgetId};
