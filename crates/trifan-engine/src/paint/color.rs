/// Straight-alpha RGBA color with `f32` channels.
///
/// Invariant:
/// - r, g, b are expected in `[0, 1]`; [`Color::is_rgb_normalized`] checks it.
///
/// Uniform colors are always uploaded with `a = 1.0`, where straight and
/// premultiplied alpha coincide.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);

    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color with alpha forced to `1.0`.
    #[inline]
    pub const fn opaque(self) -> Self {
        Self { a: 1.0, ..self }
    }

    #[inline]
    pub const fn to_rgb(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// True when r, g and b lie within `[0, 1]`. Alpha is not looked at.
    ///
    /// NaN channels fail the check.
    #[inline]
    pub fn is_rgb_normalized(self) -> bool {
        self.to_rgb().iter().all(|c| (0.0..=1.0).contains(c))
    }
}

impl From<Color> for wgpu::Color {
    fn from(c: Color) -> Self {
        wgpu::Color {
            r: c.r as f64,
            g: c.g as f64,
            b: c.b as f64,
            a: c.a as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_is_opaque() {
        assert_eq!(Color::rgb(0.2, 0.4, 0.6).a, 1.0);
        assert_eq!(Color::rgba(0.2, 0.4, 0.6, 0.5).opaque().a, 1.0);
    }

    #[test]
    fn rgb_range_rejects_out_of_range_and_nan() {
        assert!(Color::YELLOW.is_rgb_normalized());
        assert!(!Color::rgb(1.5, 0.0, 0.0).is_rgb_normalized());
        assert!(!Color::rgb(0.0, -0.1, 0.0).is_rgb_normalized());
        assert!(!Color::rgb(0.0, 0.0, f32::NAN).is_rgb_normalized());
    }

    #[test]
    fn rgb_range_ignores_alpha() {
        assert!(Color::rgba(0.5, 0.5, 0.5, 7.0).is_rgb_normalized());
        assert!(Color::rgba(0.5, 0.5, 0.5, f32::NAN).is_rgb_normalized());
    }

    #[test]
    fn converts_to_wgpu_color() {
        let c: wgpu::Color = Color::rgba(0.0, 0.1, 0.2, 0.0).into();
        assert_eq!(c.r, 0.0);
        assert!((c.g - 0.1).abs() < 1e-6);
        assert!((c.b - 0.2).abs() < 1e-6);
        assert_eq!(c.a, 0.0);
    }
}
