use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Parser;

use ppm_canvas::{
    export,
    ppm::ChannelFlags,
    raster::{self, Gradient},
    Canvas, Color, Disk,
};

/// Draws a green disk over a diagonal red/blue gradient and saves the image.
#[derive(Parser, Debug)]
#[command(name = "ppm_canvas", version)]
struct Args {
    /// columns of pixels
    #[arg(long, env = "PPM_WIDTH", default_value_t = 100)]
    width: u32,

    /// rows of pixels
    #[arg(long, env = "PPM_HEIGHT", default_value_t = 100)]
    height: u32,

    #[arg(long, env = "PPM_CIRCLE_X", default_value_t = 20, allow_hyphen_values = true)]
    circle_x: i32,

    #[arg(long, env = "PPM_CIRCLE_Y", default_value_t = 80, allow_hyphen_values = true)]
    circle_y: i32,

    #[arg(long, env = "PPM_RADIUS", default_value_t = 5)]
    radius: u32,

    /// `.ppm` is written as P3 text, other extensions go through the image crate
    #[arg(short, long, env = "PPM_OUTPUT", default_value = "output.ppm")]
    output: PathBuf,

    /// clamp channel values into 0..=255
    #[arg(long)]
    clamp: bool,

    /// round channel values instead of truncating them
    #[arg(long)]
    round: bool,
}

impl Args {
    fn flags(&self) -> ChannelFlags {
        let mut flags = ChannelFlags::empty();
        flags.set(ChannelFlags::CLAMP, self.clamp);
        flags.set(ChannelFlags::ROUND, self.round);
        flags
    }
}

fn main() -> Result<()> {
    #[cfg(feature = "env")]
    dotenv::dotenv().ok();

    env_logger::init();

    let args = Args::parse();
    log::debug!("{:?}", args);

    let mut canvas = Canvas::new(args.width, args.height)
        .with_context(|| format!("failed to create {}x{} canvas", args.width, args.height))?;

    raster::fill_gradient(&mut canvas, &Gradient::red_blue());
    raster::fill_disk(
        &mut canvas,
        &Disk::new(args.circle_x, args.circle_y, args.radius, Color::GREEN),
    );

    export::save(&canvas, &args.output, args.flags())
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    println!("saved image to {}", args.output.display());
    Ok(())
}
