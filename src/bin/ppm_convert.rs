use std::{env, fs::File, io::BufReader, path::PathBuf};

use anyhow::{bail, Context as _, Result};

use ppm_canvas::{export, ppm};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let (src_path, dst_path) = match (args.next(), args.next()) {
        (Some(src), Some(dst)) => (PathBuf::from(src), PathBuf::from(dst)),
        _ => bail!("usage: ppm_convert <source.ppm> <destination>"),
    };

    let src = File::open(&src_path)
        .with_context(|| format!("failed to open {}", src_path.display()))?;
    let canvas = ppm::decode(BufReader::new(src))
        .with_context(|| format!("failed to decode {}", src_path.display()))?;

    log::info!(
        "read {}x{} image from {}",
        canvas.width(),
        canvas.height(),
        src_path.display()
    );

    // samples were decoded as value / max, so round to get them back
    export::save(&canvas, &dst_path, ppm::ChannelFlags::ROUND)
        .with_context(|| format!("failed to write {}", dst_path.display()))?;

    println!("converted {} to {}", src_path.display(), dst_path.display());
    Ok(())
}
