use anyhow::Context;
use macroquad::prelude::*;
use tilewalk::backend::macroquad_backend::{
    load_textures, texture_sizes, MacroquadInput, MacroquadRenderer,
};
use tilewalk::backend::open_music;
use tilewalk::config::config_path;
use tilewalk::{run_tick, AssetPlan, FramePacer, GameConfig, TileMap};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn window_conf() -> Conf {
    init_tracing();
    // Window settings are needed before main runs. This read stays quiet;
    // run() loads the same file again and reports on it.
    let window = GameConfig::read(&config_path())
        .ok()
        .flatten()
        .map(|c| c.window)
        .unwrap_or_default();
    Conf {
        window_title: window.title,
        window_width: window.width as i32,
        window_height: window.height as i32,
        ..Default::default()
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}

#[macroquad::main(window_conf)]
async fn main() {
    info!("=== tilewalk startup ===");
    if let Err(e) = run().await {
        error!("{e:#}");
        std::process::exit(1);
    }
    info!("shutdown");
}

async fn run() -> anyhow::Result<()> {
    let cfg = GameConfig::load(&config_path())?;

    let map = TileMap::load(&cfg.map.path)
        .with_context(|| format!("Loading map {}", cfg.map.path.display()))?;
    info!(
        path = %cfg.map.path.display(),
        width = map.width(),
        height = map.height(),
        "map loaded"
    );

    let assets = AssetPlan::from_config(&cfg);
    let textures = load_textures(&assets.catalog).await?;
    let sizes = texture_sizes(&textures);
    let mut state = assets.build_state(&cfg, map, &sizes);

    let input = MacroquadInput::install();
    let mut renderer = MacroquadRenderer::new(textures, cfg.window.screen_size());
    let mut music = open_music(cfg.music.path.as_deref());
    let mut pacer = FramePacer::new(cfg.window.ticks_per_second);

    while state.running {
        run_tick(&mut state, &input, music.as_mut(), &mut renderer);
        next_frame().await;
        pacer.wait();
    }
    Ok(())
}
