use std::convert::TryFrom;

use crate::error::{Error, Result};

mod vec_on_grid;

pub use vec_on_grid::VecOnGrid;

/// `Pos` は `Grid` に存在する座標を表す.
///
/// `x` が列 (左から右), `y` が行 (上から下) で, それぞれは必ず `Grid` の `width` と `height` 未満になる.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pos {
    x: u32,
    y: u32,
}

impl std::fmt::Debug for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Pos {
    fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }
}

/// `RangePos` は `Grid` 上の全ての座標を `Iterator` で行優先に走査する.
pub struct RangePos {
    width: u64,
    height: u64,
    x: u64,
    y: u64,
}

impl Iterator for RangePos {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.height <= self.y {
            return None;
        }
        let ret = Pos::new(self.x as u32, self.y as u32);
        self.x += 1;
        if self.width <= self.x {
            self.y += 1;
            self.x = 0;
        }
        Some(ret)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.height <= self.y {
            return (0, Some(0));
        }
        let rest = (self.height - self.y) * self.width - self.x;
        (rest as usize, Some(rest as usize))
    }
}

impl ExactSizeIterator for RangePos {}

/// `Grid` はキャンバスの大きさを表す. `Pos` はこれを介してのみ作成できる.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    width: u32,
    height: u32,
}

impl Grid {
    /// 幅と高さはどちらも 1 以上で, 画素数が `usize` に収まらなければならない.
    ///
    /// 要素の大きさはここでは分からないので, 実際に確保できるかは `VecOnGrid::with_default` が判断する.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let fits = (width as usize)
            .checked_mul(height as usize)
            .map_or(false, |len| len != 0);
        if !fits {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// 格子点の総数.
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// 座標 (`x`, `y`) が範囲内なら `Pos` を返す. 負の座標も受け付けて `None` にする.
    pub fn pos(&self, x: i64, y: i64) -> Option<Pos> {
        let x = u32::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = u32::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(Pos::new(x, y))
    }

    /// 全ての座標を左上から行優先で走査する.
    pub fn all_pos(&self) -> RangePos {
        RangePos {
            width: u64::from(self.width),
            height: u64::from(self.height),
            x: 0,
            y: 0,
        }
    }

    fn pos_as_index(&self, pos: Pos) -> usize {
        pos.y as usize * self.width as usize + pos.x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_grid() {
        assert!(matches!(
            Grid::new(0, 3),
            Err(Error::InvalidDimensions {
                width: 0,
                height: 3
            })
        ));
        assert!(Grid::new(3, 0).is_err());
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn pos_is_bounds_checked() {
        let grid = Grid::new(3, 2).unwrap();
        assert_eq!(grid.pos(2, 1).map(|p| (p.x(), p.y())), Some((2, 1)));
        assert!(grid.pos(3, 0).is_none());
        assert!(grid.pos(0, 2).is_none());
        assert!(grid.pos(-1, 0).is_none());
        assert!(grid.pos(0, i64::MAX).is_none());
    }

    #[test]
    fn all_pos_is_row_major() {
        let grid = Grid::new(3, 2).unwrap();
        let all = grid.all_pos();
        assert_eq!(all.len(), 6);
        let coords = all.map(|p| (p.x(), p.y())).collect::<Vec<_>>();
        assert_eq!(
            coords,
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
        );
        for (i, pos) in grid.all_pos().enumerate() {
            assert_eq!(grid.pos_as_index(pos), i);
        }
    }

    #[test]
    fn all_pos_len_shrinks() {
        let grid = Grid::new(4, 3).unwrap();
        let mut all = grid.all_pos();
        assert_eq!(all.len(), 12);
        all.next();
        all.next();
        assert_eq!(all.len(), 10);
        assert_eq!(all.last(), grid.pos(3, 2));
    }
}
