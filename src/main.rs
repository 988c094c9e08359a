use log::{error, info};
use std::time::{Duration, Instant};

mod assets;
mod audio;
mod block;
mod collision;
mod enemy;
mod entity;
mod game;
mod gui;
mod input_system;
mod kinematics;
mod player;
mod render;
mod scoring;
mod settings;
mod text;

use assets::verify_assets;
use audio::AudioManager;
use game::constants::{SCREEN_HEIGHT, SCREEN_WIDTH, TICKS_PER_SECOND};
use game::{GameSession, GameState};
use gui::{GameOverScreen, StartScreen};
use input_system::{held_movement, InputSystem};
use render::{render_hud, render_world, Textures};
use settings::Settings;

const GAME_WIDTH: u32 = SCREEN_WIDTH as u32;
const GAME_HEIGHT: u32 = SCREEN_HEIGHT as u32;

/// Pick the largest integer window scale that fits the desktop
fn calculate_window_scale(video_subsystem: &sdl2::VideoSubsystem, settings: &Settings) -> u32 {
    if let Some(scale) = settings.window_scale {
        return scale;
    }

    match video_subsystem.desktop_display_mode(0) {
        Ok(display_mode) => {
            // Leave 10% margin for taskbars/decorations
            let usable_w = (display_mode.w as f32 * 0.9) as i32;
            let usable_h = (display_mode.h as f32 * 0.9) as i32;

            let max_scale_w = usable_w / GAME_WIDTH as i32;
            let max_scale_h = usable_h / GAME_HEIGHT as i32;

            max_scale_w.min(max_scale_h).clamp(1, 3) as u32
        }
        Err(e) => {
            log::warn!("Could not detect monitor size ({}), using 1x scale", e);
            1
        }
    }
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load_or_default();

    // Fail before opening a window if anything is missing
    let asset_paths = verify_assets(&settings.asset_dir).map_err(|e| {
        error!("{}", e);
        e.to_string()
    })?;
    info!("Assets verified in {}", asset_paths.root().display());

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window_scale = calculate_window_scale(&video_subsystem, &settings);
    let window_width = GAME_WIDTH * window_scale;
    let window_height = GAME_HEIGHT * window_scale;
    info!("Window scale: {}x (window: {}x{})", window_scale, window_width, window_height);

    let window = video_subsystem
        .window("Super Mario Game", window_width, window_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    // Set logical size for automatic scaling; mouse events arrive in logical coordinates
    canvas.set_logical_size(GAME_WIDTH, GAME_HEIGHT).map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    let textures = Textures::load(&texture_creator, &asset_paths).map_err(|e| e.to_string())?;

    let audio = AudioManager::new(&sdl_context, &asset_paths, &settings);
    if audio.is_enabled() {
        audio.start_music();
    }

    let mut session = GameSession::new();
    let mut input_system = InputSystem::new();
    let start_screen = StartScreen::new();
    let game_over_screen = GameOverScreen::new();

    let frame_duration = Duration::from_secs(1) / TICKS_PER_SECOND;

    'running: loop {
        let frame_start = Instant::now();

        input_system.update_context(session.state());
        for action in input_system.poll_events(&mut event_pump) {
            session.handle_action(&action);
        }
        if !session.is_running() {
            break 'running;
        }

        let held = held_movement(&event_pump.keyboard_state());
        let events = session.tick(held.left, held.right);
        audio.handle_events(&events);

        match session.state() {
            GameState::Start => {
                start_screen.render(&mut canvas, &textures.logo, &session.start_button())?;
            }
            GameState::Playing => {
                render_world(&mut canvas, &textures, &session.world)?;
                render_hud(&mut canvas, &session.world)?;
            }
            GameState::GameOver => {
                game_over_screen.render(&mut canvas, session.world.score(), session.world.high_score())?;
            }
        }

        canvas.present();

        // Cap framerate to 60 FPS
        let elapsed = frame_start.elapsed();
        if elapsed < frame_duration {
            std::thread::sleep(frame_duration - elapsed);
        }
    }

    info!("Final high score: {}", session.world.high_score());
    Ok(())
}
