use std::{
    fs::File,
    io::{BufWriter, Read, Write},
    path::Path,
};

use crate::{
    basis::Color,
    canvas::Canvas,
    error::{Error, Result},
};


// http://netpbm.sourceforge.net/doc/ppm.html
pub const MAGIC: &str = "P3";

/// 書き出すときのチャネルの最大値.
pub const MAX_VALUE: u32 = 255;

/// 読み込みで受け付ける最大値の上限.
const MAX_VALUE_LIMIT: u32 = 65535;

bitflags::bitflags! {
    /// `ChannelFlags` はチャネルを整数に変換するときの挙動を選ぶ.
    ///
    /// 空のときは `channel * 255` を 0 方向に切り捨て, 範囲外の値もそのまま出力する.
    #[derive(Default)]
    pub struct ChannelFlags: u8 {
        /// 変換後の値を [0, 255] に収める.
        const CLAMP = 0b01;
        /// 切り捨ての代わりに最も近い整数に丸める.
        const ROUND = 0b10;
    }
}

/// チャネル値 `channel` を [0, `MAX_VALUE`] の整数に変換する.
///
/// `CLAMP` がなければ [0.0, 1.0] の外の値は範囲外の整数になる. NaN は 0 になる.
pub fn quantize(channel: f64, flags: ChannelFlags) -> i64 {
    let scaled = channel * f64::from(MAX_VALUE);
    let value = if flags.contains(ChannelFlags::ROUND) {
        scaled.round() as i64
    } else {
        scaled as i64
    };

    if flags.contains(ChannelFlags::CLAMP) {
        value.clamp(0, i64::from(MAX_VALUE))
    } else {
        value
    }
}

fn write_header(out: &mut impl Write, width: u32, height: u32) -> std::io::Result<()> {
    writeln!(out, "{}", MAGIC)?;
    writeln!(out, "{} {}", width, height)?;
    writeln!(out, "{}", MAX_VALUE)
}

/// `canvas` を既定の変換で `P3` 形式のテキストとして `out` に書き出す.
pub fn encode<W: Write>(canvas: &Canvas, out: W) -> Result<()> {
    encode_with(canvas, out, ChannelFlags::empty())
}

/// `canvas` を `P3` 形式のテキストとして `out` に書き出す.
///
/// ヘッダの後, 一行につき `width` 個の `r g b ` を上の行から順に出力する.
/// バッファリングや `flush` は呼び出し側の責任.
pub fn encode_with<W: Write>(canvas: &Canvas, mut out: W, flags: ChannelFlags) -> Result<()> {
    log::debug!(
        "encoding {}x{} canvas as {} ({:?})",
        canvas.width(),
        canvas.height(),
        MAGIC,
        flags
    );

    write_header(&mut out, canvas.width(), canvas.height())?;

    for row in canvas.rows() {
        for color in row {
            for channel in color.channels().iter() {
                write!(out, "{} ", quantize(*channel, flags))?;
            }
        }
        writeln!(out)?;
    }

    Ok(())
}

/// `canvas` を `path` に `P3` 形式で保存する. 既存のファイルは上書きされる.
pub fn write_ppm_file(canvas: &Canvas, path: impl AsRef<Path>, flags: ChannelFlags) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);

    encode_with(canvas, &mut writer, flags)?;
    writer.flush()?;

    log::debug!("wrote {}", path.display());
    Ok(())
}

fn malformed(reason: String) -> Error {
    Error::Malformed(reason)
}

fn parse_field(token: Option<&[u8]>, name: &str) -> Result<u32> {
    let token = match token {
        Some(t) => t,
        None => return Err(malformed(format!("expected {}, but found none", name))),
    };
    String::from_utf8_lossy(token)
        .parse()
        .map_err(|e| malformed(format!("failed to parse {}: {:?}", name, e)))
}

/// 空白区切りのトークンを返す. `#` から行末まではコメントとして読み飛ばす.
fn tokens(data: &[u8]) -> impl Iterator<Item = &[u8]> {
    data.split(|&b| b == b'\n').flat_map(|line| {
        let line = line.split(|&b| b == b'#').next().unwrap_or(&[]);
        line.split(u8::is_ascii_whitespace).filter(|t| !t.is_empty())
    })
}

/// `P3` 形式のテキストを読み込んで `Canvas` にする. 各チャネルは `値 / 最大値` になる.
///
/// 入力はバイト列として扱うので, テキストでないもの (例えば `P6`) も `Error::Malformed` になる.
/// サンプル数がヘッダの大きさと合うことを確かめてからキャンバスを確保する.
pub fn decode(mut data: impl Read) -> Result<Canvas> {
    let mut bytes = Vec::new();
    data.read_to_end(&mut bytes)?;

    let mut tokens = tokens(&bytes);

    // check magic number
    match tokens.next() {
        Some(m) if m == MAGIC.as_bytes() => {}
        t => {
            return Err(malformed(format!(
                "expected magic number {:?}, but found {:?}",
                MAGIC,
                t.map(String::from_utf8_lossy)
            )))
        }
    }

    let width = parse_field(tokens.next(), "width")?;
    let height = parse_field(tokens.next(), "height")?;
    let max_value = parse_field(tokens.next(), "maximum value of color")?;

    if max_value == 0 || MAX_VALUE_LIMIT < max_value {
        return Err(malformed(format!(
            "maximum value of color must be in 1..={}, but found {}",
            MAX_VALUE_LIMIT, max_value
        )));
    }

    let samples = tokens.collect::<Vec<_>>();
    let expected = 3 * u128::from(width) * u128::from(height);
    if samples.len() as u128 != expected {
        return Err(malformed(format!(
            "expected {} samples for {}x{}, but found {}",
            expected,
            width,
            height,
            samples.len()
        )));
    }

    let mut canvas = Canvas::new(width, height)?;
    let scale = f64::from(max_value);

    for (pos, triplet) in canvas.grid().all_pos().zip(samples.chunks(3)) {
        let mut channel = [0.0; 3];
        for ((c, name), token) in channel
            .iter_mut()
            .zip(&["red", "green", "blue"])
            .zip(triplet)
        {
            let value = parse_field(Some(*token), name)?;
            if max_value < value {
                return Err(malformed(format!(
                    "{} sample {} at {:?} exceeds maximum value {}",
                    name, value, pos, max_value
                )));
            }
            *c = f64::from(value) / scale;
        }
        let [r, g, b] = channel;
        canvas.set_color(
            i64::from(pos.x()),
            i64::from(pos.y()),
            Color::new(r, g, b),
        );
    }

    log::debug!(
        "decoded {}x{} canvas (max value {})",
        canvas.width(),
        canvas.height(),
        max_value
    );
    Ok(canvas)
}
