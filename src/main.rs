// src/main.rs
use nannou::event::{TouchEvent, TouchPhase};
use nannou::prelude::*;

use ellipseoverline::{config::Config, models::ChainStep, views::Scene};

struct Model {
    scene: Scene,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().unwrap_or_else(|err| {
        log::warn!("Using default config: {}", err);
        Config::default()
    });

    // Create the window, chrome hidden when full screen
    let mut builder = app
        .new_window()
        .title(&config.window.title)
        .size(config.window.width, config.window.height)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .touch(touch)
        .key_pressed(key_pressed);
    if config.window.fullscreen {
        builder = builder.decorations(false).fullscreen();
    }
    builder.build().expect("Failed to build window");

    // Only redraw on events until a tap starts the driver
    app.set_loop_mode(LoopMode::Wait);

    log::info!(
        "{} nodes, tick every {} ms",
        config.animation.nodes,
        config.animation.tick_interval_ms
    );

    Model {
        scene: Scene::new(&config),
    }
}

fn tap(app: &App, model: &mut Model) {
    if model.scene.on_tap() {
        app.set_loop_mode(LoopMode::RefreshSync);
    }
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        tap(app, model);
    }
}

fn touch(app: &App, model: &mut Model, touch: TouchEvent) {
    if touch.phase == TouchPhase::Started {
        tap(app, model);
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Space => tap(app, model),
        Key::P => match serde_json::to_string(&model.scene.chain().snapshot()) {
            Ok(json) => log::info!("{}", json),
            Err(err) => log::error!("Failed to serialize chain: {}", err),
        },
        Key::Q => app.quit(),
        _ => (),
    }
}

fn update(app: &App, model: &mut Model, update: Update) {
    let dt = update.since_last.as_secs_f32();
    if let Some(ChainStep::Completed { index, scale }) = model.scene.update(dt) {
        log::debug!("Step finished on node {} at {}", index, scale);
    }
    if !model.scene.is_running() {
        app.set_loop_mode(LoopMode::Wait);
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    model.scene.draw(&draw, app.window_rect());
    if let Err(err) = draw.to_frame(app, &frame) {
        log::error!("Failed to render frame: {:?}", err);
    }
}
