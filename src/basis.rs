use std::ops;

/// `Color` は線形 RGB カラーを表す. 各チャネルは名目上 [0.0, 1.0] だが, 範囲外の値もそのまま保持する.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// チャネルを r, g, b の順に返す.
    pub fn channels(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

impl ops::Add for Color {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl ops::Mul<f64> for Color {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

/// `Disk` は中心 (`center_x`, `center_y`) と半径 `radius` で決まる境界を含む塗り潰し円を表す.
///
/// 中心はキャンバスの外側にあってもよい.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disk {
    pub center_x: i32,
    pub center_y: i32,
    pub radius: u32,
    pub color: Color,
}

impl Disk {
    pub fn new(center_x: i32, center_y: i32, radius: u32, color: Color) -> Self {
        Self {
            center_x,
            center_y,
            radius,
            color,
        }
    }

    /// 座標 (`x`, `y`) が円の内側または円周上にあるか.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        // i128 なので u32 の座標と i32 の中心でも溢れない
        let dx = i128::from(x) - i128::from(self.center_x);
        let dy = i128::from(y) - i128::from(self.center_y);
        let r = i128::from(self.radius);
        dx * dx + dy * dy <= r * r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disk_boundary_is_closed() {
        let disk = Disk::new(5, 5, 2, Color::GREEN);
        assert!(disk.contains(5, 5));
        assert!(disk.contains(7, 5));
        assert!(disk.contains(5, 3));
        assert!(!disk.contains(7, 6));
        assert!(!disk.contains(8, 5));
    }

    #[test]
    fn disk_far_away_does_not_overflow() {
        let disk = Disk::new(i32::MIN, i32::MIN, u32::MAX, Color::RED);
        assert!(!disk.contains(i64::from(u32::MAX), i64::from(u32::MAX)));
        assert!(disk.contains(i64::from(i32::MIN), 0));
    }

    #[test]
    fn color_arithmetic() {
        let c = Color::RED * 0.5 + Color::BLUE;
        assert_eq!(c, Color::new(0.5, 0.0, 1.0));
        assert_eq!(Color::default(), Color::BLACK);
    }
}
