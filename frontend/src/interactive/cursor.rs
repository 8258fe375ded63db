//! Custom cursor ring that follows the pointer.

/// Viewports narrower than this are treated as touch devices and get no
/// custom cursor.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorVariant {
    #[default]
    Default,
    Hover,
}

impl CursorVariant {
    pub fn diameter(&self) -> f64 {
        match self {
            CursorVariant::Default => 32.0,
            CursorVariant::Hover => 48.0,
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            CursorVariant::Default => "rgba(0, 238, 255, 0)",
            CursorVariant::Hover => "rgba(0, 255, 102, 0.2)",
        }
    }

    pub fn border(&self) -> &'static str {
        match self {
            CursorVariant::Default => "2px solid rgba(0, 238, 255, 0.5)",
            CursorVariant::Hover => "2px solid rgba(0, 255, 102, 0.5)",
        }
    }

    pub fn blend_mode(&self) -> &'static str {
        match self {
            CursorVariant::Default => "difference",
            CursorVariant::Hover => "normal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorState {
    pub x: f64,
    pub y: f64,
    pub variant: CursorVariant,
}

impl CursorState {
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Top-left corner of the ring, centred on the pointer.
    pub fn origin(&self) -> (f64, f64) {
        let half = self.variant.diameter() / 2.0;
        (self.x - half, self.y - half)
    }

    pub fn style(&self) -> String {
        let (left, top) = self.origin();
        let size = self.variant.diameter();
        format!(
            "transform: translate({}px, {}px); width: {}px; height: {}px; background-color: {}; border: {}; mix-blend-mode: {};",
            left,
            top,
            size,
            size,
            self.variant.background(),
            self.variant.border(),
            self.variant.blend_mode(),
        )
    }
}

pub fn is_mobile_width(width: f64) -> bool {
    width < MOBILE_BREAKPOINT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_is_centred_on_pointer() {
        let mut cursor = CursorState::default();
        cursor.move_to(100.0, 50.0);
        assert_eq!(cursor.origin(), (84.0, 34.0));

        cursor.variant = CursorVariant::Hover;
        assert_eq!(cursor.origin(), (76.0, 26.0));
    }

    #[test]
    fn style_reflects_variant() {
        let cursor = CursorState {
            x: 10.0,
            y: 10.0,
            variant: CursorVariant::Hover,
        };
        let style = cursor.style();
        assert!(style.contains("width: 48px"));
        assert!(style.contains("mix-blend-mode: normal"));
    }

    #[test]
    fn breakpoint() {
        assert!(is_mobile_width(767.0));
        assert!(!is_mobile_width(768.0));
    }
}
