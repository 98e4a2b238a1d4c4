use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::EventPump;

/// High-level actions produced from raw input
///
/// This enum decouples SDL2 event handling from the application loop: the
/// input system translates events into these commands and the loop decides
/// what they mean in the current state.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    // === Pointer ===
    Click(i32, i32, MouseButton), // x, y, which button
    MouseMove(i32, i32),          // x, y - track mouse position

    // === Keyboard ===
    KeyPress(Keycode), // forwarded to the menu's key hook

    // === State transitions ===
    ReturnToMenu,

    // === System ===
    Quit,
}

/// Input context determines how events are translated
///
/// The menu and gameplay want different things from the keyboard, so the
/// input system filters by the current application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Menu is the active state - clicks and key presses go to the menu
    Menu,
    /// Gameplay placeholder - Escape returns to the menu
    Playing,
}

/// InputSystem processes SDL2 events and produces AppActions
///
/// # Architecture
///
/// Input processing happens in phases:
/// 1. The loop sets the current InputContext for its state
/// 2. Poll SDL2 events
/// 3. Translate events to AppActions, filtered by context
/// 4. Return actions to the loop for execution
pub struct InputSystem {
    /// Current input context
    pub context: InputContext,
}

impl InputSystem {
    /// Creates a new InputSystem starting in Menu context
    pub fn new() -> Self {
        InputSystem {
            context: InputContext::Menu,
        }
    }

    /// Update the input context to match the application state
    ///
    /// Call this before poll_events() whenever the state machine
    /// transitions.
    pub fn set_context(&mut self, context: InputContext) {
        self.context = context;
    }

    /// Process SDL2 events and return the list of actions to handle
    ///
    /// This is the main entry point for input processing each frame.
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<AppAction> {
        let mut actions = Vec::new();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => {
                    actions.push(AppAction::Quit);
                }
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    self.handle_keydown(key, &mut actions);
                }
                Event::MouseButtonDown {
                    mouse_btn, x, y, ..
                } => {
                    actions.push(AppAction::Click(x, y, mouse_btn));
                }
                Event::MouseMotion { x, y, .. } => {
                    actions.push(AppAction::MouseMove(x, y));
                }
                _ => {
                    // Ignore other event types (for now)
                }
            }
        }

        actions
    }

    /// Handle keyboard key press events, filtered by context
    fn handle_keydown(&self, key: Keycode, actions: &mut Vec<AppAction>) {
        match self.context {
            InputContext::Menu => {
                // The menu's keyboard hook exists but is intentionally
                // inert; forward anyway so the hook stays wired up.
                actions.push(AppAction::KeyPress(key));
            }
            InputContext::Playing => match key {
                Keycode::Escape => actions.push(AppAction::ReturnToMenu),
                _ => {
                    // Unhandled keys in Playing context
                }
            },
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}
