use anyhow::Result;
use image::RgbaImage;
use log::{debug, info, warn};
use sprite_reel::engine::game_loop::FrameTicker;
use sprite_reel::engine::input::{Action, InputManager};
use sprite_reel::game::walker::{SpritePlayer, Walker, WalkerConfig};
use sprite_reel::{placeholder_sheet, AnimationKind, AssetLoader, SpriteConfig, SpriteFactory};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

/// Cell size used when a sheet is missing and a placeholder stands in
const PLACEHOLDER_CELL: u32 = 32;

fn load_sheet_or_placeholder(loader: &AssetLoader, name: &str, rows: u32, cols: u32) -> RgbaImage {
    match loader.load_sheet(name) {
        Ok(sheet) => sheet,
        Err(e) => {
            warn!("{:#}; using a placeholder for {}", e, name);
            placeholder_sheet(rows, cols, PLACEHOLDER_CELL, PLACEHOLDER_CELL)
        }
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting sprite-reel demo...");

    let asset_dir = std::env::args().nth(1).unwrap_or_else(|| "assets".to_string());
    let loader = AssetLoader::new(&asset_dir);
    info!("Loading sheets from {}", loader.base_path().display());

    let mut factory = SpriteFactory::new(SpriteConfig::default());

    let mut man = factory.create();
    man.set_animation_from_sheet(
        AnimationKind::Idle1,
        &load_sheet_or_placeholder(&loader, "walksequence_idle.png", 1, 1),
        1,
        1,
        1,
    );
    man.set_animation_from_sheet(
        AnimationKind::MoveLeft,
        &load_sheet_or_placeholder(&loader, "walksequence_left.png", 5, 6),
        5,
        6,
        30,
    );
    man.set_animation_from_sheet(
        AnimationKind::MoveRight,
        &load_sheet_or_placeholder(&loader, "walksequence_right.png", 5, 6),
        5,
        6,
        30,
    );

    let mut ball = factory.create();
    ball.set_animation_from_sheet(
        AnimationKind::Idle1,
        &load_sheet_or_placeholder(&loader, "spinning_ball.gif", 2, 2),
        2,
        2,
        4,
    );

    info!("{} sprites ready", factory.count());

    let mut walker = Walker::new(man, WalkerConfig::default());
    let mut ball = SpritePlayer::new(ball);
    let mut input = InputManager::default();
    let mut clock = FrameTicker::new();

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("sprite-reel")
        .with_inner_size(winit::dpi::LogicalSize::new(400, 400))
        .with_resizable(false)
        .build(&event_loop)?;

    info!("Window created successfully");

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                input.reset();
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                let elapsed = clock.tick();

                if input.just_pressed(Action::Quit) {
                    info!("Quit requested, shutting down...");
                    elwt.exit();
                    return;
                }
                if input.just_pressed(Action::Pause) {
                    walker.player_mut().ticker_mut().toggle_pause();
                    ball.ticker_mut().toggle_pause();
                }

                // Drawing is up to the host renderer; the demo reports what it would draw
                let man_frame = walker
                    .update(input.movement(), elapsed)
                    .map(|frame| frame.dimensions());
                if let Some((width, height)) = man_frame {
                    debug!(
                        "Man: {} frame {}x{} at {:?}",
                        walker.kind(),
                        width,
                        height,
                        walker.position()
                    );
                }

                if let Some(frame) = ball.play(AnimationKind::Idle1, elapsed) {
                    debug!("Ball: frame {}x{}", frame.width(), frame.height());
                }

                input.update();
            }
            Event::AboutToWait => {
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
