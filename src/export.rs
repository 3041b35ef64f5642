use std::path::Path;

use image::{Rgb, RgbImage};

use crate::{
    canvas::Canvas,
    error::Result,
    ppm::{self, ChannelFlags},
};

/// `canvas` を 8 ビットの `RgbImage` に変換する. `u8` に収めるため `CLAMP` は常に有効になる.
pub fn to_rgb_image(canvas: &Canvas, flags: ChannelFlags) -> RgbImage {
    let flags = flags | ChannelFlags::CLAMP;

    let mut img = RgbImage::new(canvas.width(), canvas.height());

    for (pos, color) in canvas.pixels() {
        let [r, g, b] = color.channels();
        img.put_pixel(
            pos.x(),
            pos.y(),
            Rgb([
                ppm::quantize(r, flags) as u8,
                ppm::quantize(g, flags) as u8,
                ppm::quantize(b, flags) as u8,
            ]),
        );
    }

    img
}

/// `canvas` を `path` に保存する.
///
/// 拡張子が `ppm` なら `P3` テキストとして `flags` に従って書き出し, それ以外は `image` に形式の判定を任せる.
pub fn save(canvas: &Canvas, path: impl AsRef<Path>, flags: ChannelFlags) -> Result<()> {
    let path = path.as_ref();
    let is_ppm = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("ppm"));

    if is_ppm {
        return ppm::write_ppm_file(canvas, path, flags);
    }

    log::debug!("exporting {} through image", path.display());
    to_rgb_image(canvas, flags).save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basis::Color;

    #[test]
    fn rgb_image_is_clamped() {
        let mut canvas = Canvas::new(2, 1).unwrap();
        canvas.set_color(0, 0, Color::new(0.5, 2.0, -1.0));
        canvas.set_color(1, 0, Color::new(0.999, 1.0, 0.0));

        let img = to_rgb_image(&canvas, ChannelFlags::empty());
        assert_eq!(img.dimensions(), (2, 1));
        assert_eq!(img.get_pixel(0, 0), &Rgb([127, 255, 0]));
        assert_eq!(img.get_pixel(1, 0), &Rgb([254, 255, 0]));

        let img = to_rgb_image(&canvas, ChannelFlags::ROUND);
        assert_eq!(img.get_pixel(1, 0), &Rgb([255, 255, 0]));
    }

    #[test]
    fn rgb_image_covers_every_pixel() {
        let mut canvas = Canvas::new(3, 2).unwrap();
        canvas.set_color(2, 1, Color::WHITE);
        canvas.set_color(0, 1, Color::BLUE);

        let img = to_rgb_image(&canvas, ChannelFlags::empty());
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(0, 0), &Rgb([0, 0, 0]));
        assert_eq!(img.get_pixel(0, 1), &Rgb([0, 0, 255]));
        assert_eq!(img.get_pixel(2, 1), &Rgb([255, 255, 255]));
    }

    #[test]
    fn save_dispatches_on_extension() -> anyhow::Result<()> {
        let mut canvas = Canvas::new(3, 2)?;
        canvas.clear(Color::GREEN);

        let dir = std::env::temp_dir();
        let ppm_path = dir.join(format!("ppm_canvas_export_{}.PPM", std::process::id()));
        let png_path = dir.join(format!("ppm_canvas_export_{}.png", std::process::id()));

        save(&canvas, &ppm_path, ChannelFlags::empty())?;
        let text = std::fs::read_to_string(&ppm_path)?;
        assert!(text.starts_with("P3\n3 2\n255\n0 255 0 "));

        save(&canvas, &png_path, ChannelFlags::empty())?;
        let img = image::open(&png_path)?.to_rgb8();
        assert_eq!(img.dimensions(), (3, 2));
        assert!(img.pixels().all(|p| *p == Rgb([0, 255, 0])));

        std::fs::remove_file(&ppm_path)?;
        std::fs::remove_file(&png_path)?;
        Ok(())
    }
}
