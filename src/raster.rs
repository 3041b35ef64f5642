use crate::{
    basis::{Color, Disk},
    canvas::Canvas,
};


/// `disk` を `canvas` に塗る.
///
/// 円の外接矩形ではなくキャンバス全体を走査し, 内側または円周上にある座標を `Canvas::set_color` で上書きする.
/// 色は混ぜずに後から塗ったものが残る.
pub fn fill_disk(canvas: &mut Canvas, disk: &Disk) {
    let grid = canvas.grid();
    let mut filled = 0usize;

    for pos in grid.all_pos() {
        let (x, y) = (i64::from(pos.x()), i64::from(pos.y()));
        if disk.contains(x, y) {
            canvas.set_color(x, y, disk.color);
            filled += 1;
        }
    }

    log::trace!(
        "fill_disk center=({}, {}) radius={} filled {} cells",
        disk.center_x,
        disk.center_y,
        disk.radius,
        filled
    );
}

/// `Gradient` は x 方向と y 方向にそれぞれ線形に増える色の和を表す.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    /// 右端で到達する色
    pub along_x: Color,
    /// 下端で到達する色
    pub along_y: Color,
}

impl Gradient {
    /// 上から下に赤, 左から右に青が増える対角グラデーション.
    pub fn red_blue() -> Self {
        Self {
            along_x: Color::BLUE,
            along_y: Color::RED,
        }
    }

    /// 大きさ `width` x `height` のキャンバス上の (`x`, `y`) における色.
    ///
    /// 幅か高さが 1 の軸では比率を 0 とする.
    pub fn color_at(&self, x: u32, y: u32, width: u32, height: u32) -> Color {
        self.along_x * ratio(x, width) + self.along_y * ratio(y, height)
    }
}

fn ratio(at: u32, len: u32) -> f64 {
    if len <= 1 {
        0.0
    } else {
        f64::from(at) / f64::from(len - 1)
    }
}

/// `canvas` の全ての画素を `gradient` で塗る.
pub fn fill_gradient(canvas: &mut Canvas, gradient: &Gradient) {
    let (width, height) = (canvas.width(), canvas.height());

    for pos in canvas.grid().all_pos() {
        let color = gradient.color_at(pos.x(), pos.y(), width, height);
        canvas.set_color(i64::from(pos.x()), i64::from(pos.y()), color);
    }

    log::trace!("fill_gradient {:?} over {}x{}", gradient, width, height);
}
