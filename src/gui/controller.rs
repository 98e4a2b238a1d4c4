//! Menu Controller
//!
//! The named-screen registry and the state-machine hook surface the host
//! drives once per frame. Owns every screen (and transitively every
//! widget), tracks which screen is current, and routes clicks to the first
//! widget that claims them.
//!
//! # Navigation model
//!
//! Screen names form an open set that grows via [`MenuController::connect`];
//! transitions are explicit [`MenuController::switch_to`] calls (buttons
//! trigger them through `MenuCommand::GoTo`). There is no built-in "back"
//! transition and no terminal state - leaving the menu entirely is the
//! host state machine's job.

use super::button::Button;
use super::screen::Screen;
use super::widget::{ClickEvent, MenuCommand, Widget};
use crate::assets::FontRegistry;
use crate::collision::AABB;
use crate::config::MenuTheme;
use sdl2::keyboard::Keycode;
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::collections::HashMap;

/// The screen `on_enter` switches to.
pub const HOME_SCREEN: &str = "home";

/// Named-screen registry with a single current screen.
///
/// The current screen is tracked as a key into the registry, so it can
/// never dangle: switching to an unregistered name keeps the previous
/// current screen.
pub struct MenuController {
    screens: HashMap<String, Screen>,
    current: Option<String>,
}

impl MenuController {
    /// Creates an empty controller with no current screen.
    pub fn new() -> Self {
        MenuController {
            screens: HashMap::new(),
            current: None,
        }
    }

    /// Registers widgets under a screen name, merge-or-create.
    ///
    /// If the screen already exists the widgets are appended to it;
    /// otherwise a new screen is created and registered. This lets a
    /// screen be composed incrementally across several calls.
    pub fn connect(&mut self, name: &str, widgets: Vec<Box<dyn Widget>>) {
        if let Some(screen) = self.screens.get_mut(name) {
            screen.add(widgets);
            return;
        }

        let mut screen = Screen::new();
        screen.add(widgets);
        self.screens.insert(name.to_string(), screen);
    }

    /// Makes the named screen current.
    ///
    /// Switching to an unknown name keeps the previous current screen.
    /// That lenient behavior is deliberate (a bad name degrades instead of
    /// crashing mid-frame), but it can mask a typo'd screen name, so the
    /// miss is logged.
    pub fn switch_to(&mut self, name: &str) {
        if self.screens.contains_key(name) {
            self.current = Some(name.to_string());
        } else {
            eprintln!("Warning: switch_to('{}') ignored, no such screen", name);
        }
    }

    /// State-machine hook: the menu just became the active application
    /// state. Builds the widget tree and switches to the home screen.
    ///
    /// Not idempotent: calling this twice without an `on_exit` in between
    /// double-registers every widget. Pairing the calls is the host's
    /// responsibility.
    pub fn on_enter(&mut self, fonts: &FontRegistry, theme: &MenuTheme) -> Result<(), String> {
        let style = theme.button_style();

        self.connect(
            HOME_SCREEN,
            vec![
                Box::new(
                    Button::with_style(fonts, AABB::new(200, 200, 180, 40), "PLAY", style.clone())?
                        .on_click(MenuCommand::StartGame),
                ),
                Box::new(
                    Button::with_style(fonts, AABB::new(200, 250, 180, 40), "OPTIONS", style.clone())?
                        .on_click(MenuCommand::GoTo("options".to_string())),
                ),
                Box::new(
                    Button::with_style(fonts, AABB::new(200, 300, 180, 40), "EXIT", style.clone())?
                        .on_click(MenuCommand::Quit),
                ),
            ],
        );

        self.connect(
            "options",
            vec![Box::new(
                Button::with_style(fonts, AABB::new(200, 300, 180, 40), "BACK", style)?
                    .on_click(MenuCommand::GoTo(HOME_SCREEN.to_string())),
            )],
        );

        self.switch_to(HOME_SCREEN);
        Ok(())
    }

    /// State-machine hook: the menu is no longer the active application
    /// state. Drops every screen and clears the current pointer, so the
    /// next `on_enter` rebuilds from scratch.
    pub fn on_exit(&mut self) {
        self.screens.clear();
        self.current = None;
    }

    /// Keyboard hook. Intentionally unimplemented: the menu is mouse-only
    /// and keyboard navigation is out of scope.
    pub fn handle_key_press(&mut self, _keycode: Keycode) {}

    /// Routes a click to the current screen.
    ///
    /// Hit-tests click-accepting widgets in registration order and
    /// dispatches to the first whose bounds contain the click position
    /// (widgets are not supposed to overlap; if they do, the earliest
    /// registered wins). At most one widget receives the click.
    ///
    /// Navigation commands are consumed here; anything else is returned
    /// for the host to interpret. With no current screen this is a no-op.
    pub fn handle_click(&mut self, event: &ClickEvent) -> Option<MenuCommand> {
        let name = self.current.as_ref()?;
        let screen = self.screens.get_mut(name)?;

        let mut command = None;
        for widget in screen.widgets_mut() {
            if widget.accepts_clicks() && widget.bounds().contains_point(event.x, event.y) {
                command = widget.click(event);
                break;
            }
        }

        match command {
            Some(MenuCommand::GoTo(target)) => {
                self.switch_to(&target);
                None
            }
            other => other,
        }
    }

    /// Fixed-step update: forwards to the current screen, which recomputes
    /// each widget's hover state against the host's mouse position. No-op
    /// without a current screen.
    pub fn update_fixed(&mut self, dt: f32, mouse_x: i32, mouse_y: i32) {
        if let Some(screen) = self.current_screen_mut() {
            screen.update(dt, mouse_x, mouse_y);
        }
    }

    /// Variable-step update cadence. Part of the host contract; this menu
    /// does all of its work on the fixed step.
    pub fn update_variable(&mut self, _dt: f32) {}

    /// Renders the current screen. The camera/view transform (the canvas
    /// logical-size scaling) is owned and applied by the host before this
    /// call. `_alpha` is the host's interpolation factor; menu widgets
    /// have no motion to interpolate.
    pub fn render(&self, canvas: &mut Canvas<Window>, _alpha: f32) -> Result<(), String> {
        if let Some(screen) = self.current_screen() {
            screen.render(canvas)?;
        }
        Ok(())
    }

    /// The screen currently receiving update/render/click dispatch.
    pub fn current_screen(&self) -> Option<&Screen> {
        self.current.as_ref().and_then(|name| self.screens.get(name))
    }

    fn current_screen_mut(&mut self) -> Option<&mut Screen> {
        let name = self.current.as_ref()?;
        self.screens.get_mut(name)
    }

    /// Name of the current screen, if one is set.
    #[allow(dead_code)] // Reserved for host-side diagnostics
    pub fn current_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Looks up a registered screen by name.
    #[allow(dead_code)] // Reserved for host-side diagnostics
    pub fn screen(&self, name: &str) -> Option<&Screen> {
        self.screens.get(name)
    }
}

impl Default for MenuController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::mouse::MouseButton;

    fn fonts() -> FontRegistry {
        FontRegistry::create_default()
    }

    fn button(fonts: &FontRegistry, bounds: AABB, title: &str) -> Box<dyn Widget> {
        Box::new(Button::new(fonts, bounds, title).unwrap())
    }

    fn command_button(
        fonts: &FontRegistry,
        bounds: AABB,
        title: &str,
        command: MenuCommand,
    ) -> Box<dyn Widget> {
        Box::new(Button::new(fonts, bounds, title).unwrap().on_click(command))
    }

    fn click(x: i32, y: i32) -> ClickEvent {
        ClickEvent::new(x, y, MouseButton::Left)
    }

    #[test]
    fn test_connect_merges_into_existing_screen() {
        let fonts = fonts();
        let a = button(&fonts, AABB::new(0, 0, 10, 10), "A");
        let b = button(&fonts, AABB::new(0, 20, 10, 10), "B");
        let ids = [a.id(), b.id()];

        let mut menu = MenuController::new();
        menu.connect("home", vec![a]);
        menu.connect("home", vec![b]);
        menu.switch_to("home");

        let got: Vec<_> = menu
            .current_screen()
            .unwrap()
            .widgets()
            .iter()
            .map(|w| w.id())
            .collect();
        assert_eq!(got, ids);
    }

    #[test]
    fn test_switch_to_unknown_keeps_current() {
        let mut menu = MenuController::new();
        menu.connect("home", Vec::new());
        menu.switch_to("home");
        menu.switch_to("otpions"); // typo'd name

        assert_eq!(menu.current_name(), Some("home"));
    }

    #[test]
    fn test_switch_to_unknown_with_no_current_stays_unset() {
        let mut menu = MenuController::new();
        menu.switch_to("home");
        assert_eq!(menu.current_name(), None);
    }

    #[test]
    fn test_click_dispatches_to_containing_widget() {
        let fonts = fonts();
        let mut menu = MenuController::new();
        menu.connect(
            "home",
            vec![
                command_button(&fonts, AABB::new(200, 200, 180, 40), "PLAY", MenuCommand::StartGame),
                command_button(&fonts, AABB::new(200, 300, 180, 40), "EXIT", MenuCommand::Quit),
            ],
        );
        menu.switch_to("home");

        assert_eq!(menu.handle_click(&click(210, 210)), Some(MenuCommand::StartGame));
        assert_eq!(menu.handle_click(&click(210, 310)), Some(MenuCommand::Quit));
        assert_eq!(menu.handle_click(&click(10, 10)), None);
    }

    #[test]
    fn test_click_without_current_screen_is_a_noop() {
        let fonts = fonts();
        let mut menu = MenuController::new();
        menu.connect(
            "home",
            vec![command_button(&fonts, AABB::new(0, 0, 100, 40), "PLAY", MenuCommand::StartGame)],
        );
        // No switch_to: nothing is current yet
        assert_eq!(menu.handle_click(&click(10, 10)), None);
    }

    #[test]
    fn test_overlapping_widgets_earliest_registered_wins() {
        let fonts = fonts();
        let bounds = AABB::new(0, 0, 100, 40);
        let mut menu = MenuController::new();
        menu.connect(
            "home",
            vec![
                command_button(&fonts, bounds, "FIRST", MenuCommand::StartGame),
                command_button(&fonts, bounds, "SECOND", MenuCommand::Quit),
            ],
        );
        menu.switch_to("home");

        assert_eq!(menu.handle_click(&click(10, 10)), Some(MenuCommand::StartGame));
    }

    #[test]
    fn test_goto_command_switches_screen_internally() {
        let fonts = fonts();
        let mut menu = MenuController::new();
        menu.connect(
            "home",
            vec![command_button(
                &fonts,
                AABB::new(0, 0, 100, 40),
                "OPTIONS",
                MenuCommand::GoTo("options".to_string()),
            )],
        );
        menu.connect("options", Vec::new());
        menu.switch_to("home");

        // Navigation is consumed by the controller, not surfaced
        assert_eq!(menu.handle_click(&click(10, 10)), None);
        assert_eq!(menu.current_name(), Some("options"));
    }

    #[test]
    fn test_goto_unknown_screen_stays_put() {
        let fonts = fonts();
        let mut menu = MenuController::new();
        menu.connect(
            "home",
            vec![command_button(
                &fonts,
                AABB::new(0, 0, 100, 40),
                "BROKEN",
                MenuCommand::GoTo("missing".to_string()),
            )],
        );
        menu.switch_to("home");

        assert_eq!(menu.handle_click(&click(10, 10)), None);
        assert_eq!(menu.current_name(), Some("home"));
    }

    #[test]
    fn test_on_enter_builds_home_and_options() {
        let mut menu = MenuController::new();
        menu.on_enter(&fonts(), &MenuTheme::default()).unwrap();

        assert_eq!(menu.current_name(), Some(HOME_SCREEN));
        assert_eq!(menu.screen(HOME_SCREEN).unwrap().len(), 3);
        assert_eq!(menu.screen("options").unwrap().len(), 1);
    }

    #[test]
    fn test_on_enter_scenario_play_and_dead_space() {
        let mut menu = MenuController::new();
        menu.on_enter(&fonts(), &MenuTheme::default()).unwrap();

        // Click inside PLAY
        assert_eq!(menu.handle_click(&click(210, 210)), Some(MenuCommand::StartGame));
        // Click on empty space invokes nothing
        assert_eq!(menu.handle_click(&click(10, 10)), None);
    }

    #[test]
    fn test_options_back_round_trip() {
        let mut menu = MenuController::new();
        menu.on_enter(&fonts(), &MenuTheme::default()).unwrap();

        // OPTIONS button on home
        assert_eq!(menu.handle_click(&click(210, 260)), None);
        assert_eq!(menu.current_name(), Some("options"));

        // BACK button on options
        assert_eq!(menu.handle_click(&click(210, 310)), None);
        assert_eq!(menu.current_name(), Some(HOME_SCREEN));
    }

    #[test]
    fn test_on_exit_releases_everything() {
        let mut menu = MenuController::new();
        menu.on_enter(&fonts(), &MenuTheme::default()).unwrap();
        menu.on_exit();

        assert_eq!(menu.current_name(), None);
        assert!(menu.screen(HOME_SCREEN).is_none());

        // Re-entering rebuilds without double-registration
        menu.on_enter(&fonts(), &MenuTheme::default()).unwrap();
        assert_eq!(menu.screen(HOME_SCREEN).unwrap().len(), 3);
    }

    #[test]
    fn test_update_fixed_recomputes_hover() {
        let mut menu = MenuController::new();
        menu.on_enter(&fonts(), &MenuTheme::default()).unwrap();

        menu.update_fixed(0.016, 210, 210);
        let widgets = menu.current_screen().unwrap().widgets();
        assert!(widgets[0].is_hovered()); // PLAY
        assert!(!widgets[1].is_hovered()); // OPTIONS
        assert!(!widgets[2].is_hovered()); // EXIT

        // Mouse leaves: hover clears
        menu.update_fixed(0.016, 0, 0);
        assert!(!menu.current_screen().unwrap().widgets()[0].is_hovered());
    }

    #[test]
    fn test_update_fixed_without_current_screen_is_a_noop() {
        let mut menu = MenuController::new();
        menu.update_fixed(0.016, 100, 100);
        assert!(menu.current_screen().is_none());
    }
}
