//! prism_viewer: renders the demo scene with the Prism ray tracer.
//!
//! Drives the frame loop the renderer leaves out: frame
//! pacing, the stop condition, optional light animation between frames and
//! writing the final frame to disk.

mod frame_clock;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use prism_core::{Light, Scene, ViewportConfig};
use prism_math::Vec3;
use prism_renderer::{render_into, render_parallel, Camera, ImageBuffer, RenderConfig};

use frame_clock::FrameClock;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "prism")]
#[command(version)]
#[command(about = "Render spheres with a recursive ray tracer")]
struct Cli {
    /// Image width in pixels
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 640)]
    height: u32,

    /// Maximum number of mirror bounces
    #[arg(short, long, default_value_t = 3)]
    depth: u32,

    /// Number of frames to render before stopping
    #[arg(short, long, default_value_t = 1)]
    frames: u32,

    /// Target frame rate
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Render each frame in parallel buckets
    #[arg(long)]
    parallel: bool,

    /// Bob the point light up and down between frames
    #[arg(long)]
    animate_light: bool,

    /// Where to write the last frame (PNG)
    #[arg(short, long, default_value = "prism.png")]
    output: PathBuf,

    /// Set logging level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<LogLevel>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    logger.filter_level(log::LevelFilter::Info);
    if let Some(level) = cli.log_level {
        logger.filter_level(level.into());
    }
    logger.init();

    log::info!("Starting Prism viewer");

    let viewport = ViewportConfig::default().with_resolution(cli.width, cli.height);
    viewport.validate().context("Invalid viewport")?;
    let camera = Camera::new(viewport);

    let mut scene = Scene::demo();
    scene.validate().context("Demo scene failed validation")?;
    log::info!(
        "Scene '{}': {} spheres, {} lights",
        scene.name,
        scene.sphere_count(),
        scene.light_count()
    );

    let config = RenderConfig {
        max_depth: cli.depth,
        ..Default::default()
    };

    let animated_light = if cli.animate_light {
        let index = scene
            .lights
            .iter()
            .position(|light| matches!(light, Light::Point { .. }));
        if index.is_none() {
            log::warn!("No point light to animate");
        }
        index
    } else {
        None
    };

    let mut image = ImageBuffer::new(camera.image_width(), camera.image_height());
    let mut clock = FrameClock::new(cli.fps);

    for frame in 0..cli.frames {
        // Scene changes only between frames
        if let Some(index) = animated_light.filter(|_| frame > 0) {
            let offset = Vec3::new(0.0, clock.elapsed().as_secs_f32().sin(), 0.0);
            scene
                .translate_light(index, offset)
                .context("Failed to move light")?;
        }

        if cli.parallel {
            image = render_parallel(&camera, &scene, &config);
        } else {
            render_into(&camera, &scene, &config, &mut image).context("Render failed")?;
        }

        let delta = clock.tick();
        log::info!(
            "Frame {}/{}: {:.1} FPS",
            frame + 1,
            cli.frames,
            frame_clock::fps(delta)
        );
    }

    image
        .save_png(&cli.output)
        .with_context(|| format!("Failed to save {}", cli.output.display()))?;

    Ok(())
}
