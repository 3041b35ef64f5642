//! 手続き的に生成した画像を `P3` 形式の PPM として書き出すための小さなラスタライズライブラリ.
//!
//! `canvas::Canvas` に色を書き込み, `raster` で図形を塗り, `ppm::encode` でテキストに変換する.

pub mod basis;
pub mod canvas;
pub mod error;
pub mod export;
pub mod grid;
pub mod ppm;
pub mod raster;

pub use crate::{
    basis::{Color, Disk},
    canvas::Canvas,
    error::{Error, Result},
};
