use crate::{
    basis::Color,
    error::{Error, Result},
    grid::{Grid, Pos, VecOnGrid},
};

/// `Canvas` は書き出す前の画像を保持する, 大きさ固定の `Color` のバッファを表す.
///
/// 作成時に全ての画素は黒 (0, 0, 0) で初期化され, 幅と高さは以後変わらない.
///
/// 範囲外の座標への書き込みは黙って無視される. 中心がキャンバスの外にある円を描くときなどは
/// この切り取りを前提にしている. 範囲外の読み出しは `Error::OutOfRange` になる.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pixels: VecOnGrid<Color>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let grid = Grid::new(width, height)?;
        let pixels =
            VecOnGrid::with_default(grid).ok_or(Error::InvalidDimensions { width, height })?;
        Ok(Self { pixels })
    }

    pub fn width(&self) -> u32 {
        self.pixels.grid().width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.grid().height()
    }

    pub fn grid(&self) -> Grid {
        self.pixels.grid()
    }

    /// (`x`, `y`) が範囲内なら `color` を書き込み, そうでなければ何もしない.
    pub fn set_color(&mut self, x: i64, y: i64, color: Color) {
        if let Some(pos) = self.grid().pos(x, y) {
            self.pixels[pos] = color;
        }
    }

    pub fn get_color(&self, x: i64, y: i64) -> Result<Color> {
        self.grid()
            .pos(x, y)
            .map(|pos| self.pixels[pos])
            .ok_or(Error::OutOfRange {
                x,
                y,
                width: self.width(),
                height: self.height(),
            })
    }

    /// 全ての画素を `color` で塗り潰す.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// 一行ずつの画素を上から順に返す.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.rows()
    }

    pub fn pixels(&self) -> impl Iterator<Item = (Pos, &Color)> {
        self.pixels.iter_with_pos()
    }
}
