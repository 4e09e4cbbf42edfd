/// Viewport size in physical pixels.
///
/// Renderers read this as the implicit environment for the current frame:
/// the projection aspect ratio is derived from it.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Width-over-height aspect ratio; degenerate sizes map to 1.0.
    #[inline]
    pub fn aspect_ratio(self) -> f32 {
        if !self.is_valid() {
            return 1.0;
        }
        self.width as f32 / self.height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_of_valid_viewport() {
        assert_eq!(Viewport::new(1280, 800).aspect_ratio(), 1.6);
    }

    #[test]
    fn aspect_ratio_of_degenerate_viewport_is_one() {
        assert_eq!(Viewport::new(0, 800).aspect_ratio(), 1.0);
        assert_eq!(Viewport::new(1280, 0).aspect_ratio(), 1.0);
    }
}
