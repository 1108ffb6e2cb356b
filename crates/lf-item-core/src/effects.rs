//! Geometry for the button ripple and the staggered entrance animations.

pub const RIPPLE_DURATION_MS: u32 = 600;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    /// A circle as large as the button's longer side, centred on the click.
    /// `rect` is `(left, top, width, height)` of the button in client space.
    pub fn new(rect: (f64, f64, f64, f64), client_x: f64, client_y: f64) -> Self {
        let (rect_left, rect_top, width, height) = rect;
        let size = width.max(height);
        Self {
            size,
            left: client_x - rect_left - size / 2.0,
            top: client_y - rect_top - size / 2.0,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "position: absolute; width: {size}px; height: {size}px; left: {left}px; top: {top}px; \
             border-radius: 50%; background: rgba(255, 255, 255, 0.6); transform: scale(0); \
             animation: ripple-animation {duration}s ease-out; pointer-events: none;",
            size = self.size,
            left = self.left,
            top = self.top,
            duration = f64::from(RIPPLE_DURATION_MS) / 1000.0,
        )
    }
}

/// `animation-delay` for the n-th animated element.
pub fn stagger_delay(index: usize) -> String {
    format!("{:.1}s", index as f64 * 0.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_is_centred_on_click() {
        let r = RippleGeometry::new((10.0, 20.0, 120.0, 40.0), 70.0, 40.0);
        assert_eq!(r.size, 120.0);
        assert_eq!(r.left, 0.0);
        assert_eq!(r.top, -40.0);
        assert!(r.css().contains("width: 120px"));
        assert!(r.css().contains("ripple-animation 0.6s"));
    }

    #[test]
    fn stagger_steps_by_a_tenth() {
        assert_eq!(stagger_delay(0), "0.0s");
        assert_eq!(stagger_delay(3), "0.3s");
    }
}
