use thiserror::Error;

/// このクレートの操作が返す `Result`.
pub type Result<T> = std::result::Result<T, Error>;

/// `Error` はキャンバスの作成, 読み出し, 入出力で起こるエラーを表す.
///
/// 範囲外への書き込みはエラーにならない. `Canvas::set_color` を参照.
#[derive(Error, Debug)]
pub enum Error {
    /// 幅か高さが 0, もしくは画素数がアドレス空間に収まらない.
    #[error("invalid canvas dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// キャンバスの外側の座標を読もうとした.
    #[error("({x}, {y}) is out of the {width}x{height} canvas")]
    OutOfRange {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// 読み込んだ PPM が `P3` として解釈できない.
    #[error("malformed ppm: {0}")]
    Malformed(String),

    #[error("image export failed: {0}")]
    Image(#[from] image::ImageError),
}
