use std::ops;

use super::{Grid, Pos};

/// `VecOnGrid` は `Grid` 上の `Pos` に対応付けた値を行優先で連続に格納し `Pos` でアクセスできるコンテナを提供する.
#[derive(Clone, PartialEq)]
pub struct VecOnGrid<T> {
    vec: Vec<T>,
    grid: Grid,
}

impl<T> VecOnGrid<T> {
    /// 全ての要素を `T::default()` で埋める. バッファを確保できなければ `None` を返す.
    pub fn with_default(grid: Grid) -> Option<Self>
    where
        T: Default,
    {
        let mut vec = Vec::new();
        vec.try_reserve_exact(grid.len()).ok()?;
        vec.extend(std::iter::repeat_with(T::default).take(grid.len()));

        Some(Self { vec, grid })
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// 座標付きの借用のイテレータを作る.
    pub fn iter_with_pos(&self) -> impl Iterator<Item = (Pos, &T)> {
        self.grid.all_pos().zip(self.vec.iter())
    }

    /// 一行ずつのスライスを上から順に返す.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.vec.chunks(self.grid.width as usize)
    }

    /// 全ての要素を `value` で上書きする.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        for cell in &mut self.vec {
            *cell = value.clone();
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for VecOnGrid<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.vec.fmt(f)
    }
}

impl<T> ops::Index<Pos> for VecOnGrid<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        &self.vec[self.grid.pos_as_index(index)]
    }
}

impl<T> ops::IndexMut<Pos> for VecOnGrid<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        let index = self.grid.pos_as_index(index);
        &mut self.vec[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_row_major() {
        let grid = Grid::new(3, 2).unwrap();
        let mut field = VecOnGrid::with_default(grid).unwrap();
        for (i, pos) in grid.all_pos().enumerate() {
            field[pos] = i;
        }
        assert_eq!(field[grid.pos(2, 0).unwrap()], 2);
        assert_eq!(field[grid.pos(0, 1).unwrap()], 3);

        let rows = field.rows().collect::<Vec<_>>();
        assert_eq!(rows, vec![&[0, 1, 2][..], &[3, 4, 5][..]]);
    }

    #[test]
    fn fill_overwrites_everything() {
        let grid = Grid::new(2, 3).unwrap();
        let mut field = VecOnGrid::with_default(grid).unwrap();
        field.fill(9u8);
        assert_eq!(field.iter_with_pos().count(), 6);
        assert!(field.iter_with_pos().all(|(_, &v)| v == 9));
    }

    #[test]
    fn oversized_buffer_is_refused() {
        // 4 バイトの要素を u32::MAX * u32::MAX 個は isize::MAX バイトを超える
        let grid = Grid::new(u32::MAX, u32::MAX).unwrap();
        assert!(VecOnGrid::<u32>::with_default(grid).is_none());
    }
}
