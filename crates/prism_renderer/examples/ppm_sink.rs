//! Streams a frame straight to a PPM file through a custom `PixelSink`.
//!
//! Pixels arrive in raster order, so the sink can write each one as it
//! comes without holding the image in memory.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use prism_renderer::{render_frame, Camera, Color, PixelSink, RenderConfig, Scene, ViewportConfig};

/// Writes ASCII PPM (P3) rows as pixels arrive.
struct PpmSink<W: Write> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: Write> PpmSink<W> {
    fn new(mut writer: W, width: u32, height: u32) -> io::Result<Self> {
        writeln!(writer, "P3")?;
        writeln!(writer, "{} {}", width, height)?;
        writeln!(writer, "255")?;
        Ok(Self { writer, error: None })
    }

    fn finish(mut self) -> io::Result<()> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()
    }
}

impl<W: Write> PixelSink for PpmSink<W> {
    fn put_pixel(&mut self, _x: u32, _y: u32, color: Color) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.writer, "{} {} {}", color.r, color.g, color.b) {
            self.error = Some(err);
        }
    }
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let camera = Camera::new(ViewportConfig::default().with_resolution(320, 320));
    let scene = Scene::demo();
    let config = RenderConfig::default();

    let filename = "output.ppm";
    let file = BufWriter::new(File::create(filename)?);
    let mut sink = PpmSink::new(file, camera.image_width(), camera.image_height())?;

    let start = std::time::Instant::now();
    render_frame(&camera, &scene, &config, &mut sink);
    sink.finish()?;

    log::info!("Rendered {} in {:?}", filename, start.elapsed());
    Ok(())
}
