use sdl2::pixels::Color;
use sdl2::rect::Rect;

mod assets;
mod collision;
mod config;
mod gui;
mod input_system;
mod text;

use assets::FontRegistry;
use config::MenuTheme;
use gui::{ClickEvent, MenuCommand, MenuController};
use input_system::{AppAction, InputContext, InputSystem};

// Game resolution constants
const GAME_WIDTH: u32 = 640;
const GAME_HEIGHT: u32 = 360;

// Fixed simulation step (the loop runs at a locked 60 Hz)
const FIXED_DT: f32 = 1.0 / 60.0;

/// Application state for menu/gameplay tracking
#[derive(Debug, Clone, Copy, PartialEq)]
enum AppState {
    Menu,
    Playing,
}

/// Placeholder gameplay scene
///
/// Stands in for the real game so the menu's enter/exit round-trip has
/// something to hand control to: a square drifting across the screen until
/// Escape returns to the menu.
struct PlayingScene {
    x: f32,
    vx: f32,
}

impl PlayingScene {
    fn new() -> Self {
        PlayingScene { x: 100.0, vx: 120.0 }
    }

    fn update(&mut self, dt: f32) {
        self.x += self.vx * dt;
        let max_x = (GAME_WIDTH - 40) as f32;
        if self.x <= 0.0 || self.x >= max_x {
            self.vx = -self.vx;
            self.x = self.x.clamp(0.0, max_x);
        }
    }

    fn render(
        &self,
        canvas: &mut sdl2::render::Canvas<sdl2::video::Window>,
        font: &text::BitmapFont,
    ) -> Result<(), String> {
        canvas.set_draw_color(Color::RGB(220, 220, 240));
        canvas.fill_rect(Rect::new(self.x as i32, 160, 40, 40))?;
        font.draw_text(canvas, "ESC: BACK TO MENU", 10, 10, Color::RGB(160, 160, 170))
    }
}

/// Calculate the best window scale based on monitor size
fn calculate_window_scale(video_subsystem: &sdl2::VideoSubsystem) -> u32 {
    match video_subsystem.desktop_display_mode(0) {
        Ok(display_mode) => {
            // Leave 10% margin for taskbars/decorations
            let usable_w = (display_mode.w as f32 * 0.9) as i32;
            let usable_h = (display_mode.h as f32 * 0.9) as i32;

            let max_scale_w = usable_w / GAME_WIDTH as i32;
            let max_scale_h = usable_h / GAME_HEIGHT as i32;

            // Use smaller scale to ensure both dimensions fit
            let scale = max_scale_w.min(max_scale_h);

            // Clamp to reasonable range (2x minimum, 6x maximum)
            scale.clamp(2, 6) as u32
        }
        Err(_) => {
            // Fallback to 2x if monitor detection fails
            println!("Warning: Could not detect monitor size, using 2x scale");
            2
        }
    }
}

/// Load the menu theme, falling back to the built-in default
fn load_theme() -> MenuTheme {
    let path = "assets/config/menu_theme.json";
    match MenuTheme::load_from_file(path) {
        Ok(theme) => {
            println!("Loaded menu theme from {}", path);
            theme
        }
        Err(_) => {
            println!("No menu theme at {}, using default", path);
            MenuTheme::default()
        }
    }
}

fn main() -> Result<(), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    // Calculate window scale based on monitor size
    let window_scale = calculate_window_scale(&video_subsystem);
    let window_width = GAME_WIDTH * window_scale;
    let window_height = GAME_HEIGHT * window_scale;

    println!(
        "Monitor scale: {}x (window: {}x{})",
        window_scale, window_width, window_height
    );

    let window = video_subsystem
        .window("Menukit", window_width, window_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    // Logical size is the menu's camera/view: widgets lay out in a fixed
    // 640x360 space and SDL2 scales it to the physical window. Mouse events
    // arrive already converted into this space.
    canvas
        .set_logical_size(GAME_WIDTH, GAME_HEIGHT)
        .map_err(|e| e.to_string())?;

    let mut event_pump = sdl_context.event_pump()?;

    // Assets and configuration
    let fonts = FontRegistry::create_default();
    let theme = load_theme();
    let hud_font = fonts.get_font(assets::DEFAULT_FONT)?;

    // Menu subsystem and input translation
    let mut menu = MenuController::new();
    let mut input = InputSystem::new();

    // App-level state machine: the menu is the initial state
    let mut app_state = AppState::Menu;
    menu.on_enter(&fonts, &theme)?;

    let mut playing_scene = PlayingScene::new();

    // Host-tracked mouse position, queried by the menu every fixed step
    let mut mouse_x = 0;
    let mut mouse_y = 0;

    'running: loop {
        // 1. Input-event dispatch
        for action in input.poll_events(&mut event_pump) {
            match action {
                AppAction::Quit => break 'running,
                AppAction::MouseMove(x, y) => {
                    mouse_x = x;
                    mouse_y = y;
                }
                AppAction::Click(x, y, button) if app_state == AppState::Menu => {
                    let event = ClickEvent::new(x, y, button);
                    match menu.handle_click(&event) {
                        Some(MenuCommand::StartGame) => {
                            println!("Starting game");
                            menu.on_exit();
                            playing_scene = PlayingScene::new();
                            app_state = AppState::Playing;
                            input.set_context(InputContext::Playing);
                        }
                        Some(MenuCommand::Quit) => break 'running,
                        Some(MenuCommand::GoTo(_)) | None => {
                            // Navigation is handled inside the controller
                        }
                    }
                }
                AppAction::KeyPress(key) if app_state == AppState::Menu => {
                    menu.handle_key_press(key);
                }
                AppAction::ReturnToMenu if app_state == AppState::Playing => {
                    app_state = AppState::Menu;
                    input.set_context(InputContext::Menu);
                    menu.on_enter(&fonts, &theme)?;
                }
                _ => {
                    // Actions that don't apply to the current state
                }
            }
        }

        // 2. Fixed-step update
        match app_state {
            AppState::Menu => {
                menu.update_fixed(FIXED_DT, mouse_x, mouse_y);
                menu.update_variable(FIXED_DT);
            }
            AppState::Playing => playing_scene.update(FIXED_DT),
        }

        // 3. Render
        match app_state {
            AppState::Menu => {
                canvas.set_draw_color(theme.background());
                canvas.clear();
                menu.render(&mut canvas, 1.0)?;
            }
            AppState::Playing => {
                canvas.set_draw_color(Color::RGB(10, 14, 10));
                canvas.clear();
                playing_scene.render(&mut canvas, &hud_font)?;
            }
        }
        canvas.present();

        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }

    Ok(())
}
