use serde::{Deserialize, Serialize};

/// Below this fraction of the budget consumed the clock shows the safe color.
pub const SAFE_PROGRESS: f64 = 1.0 / 3.0;
/// At and above this fraction the clock shows the critical color.
pub const DANGER_PROGRESS: f64 = 0.9;
/// Where the warning color is reached exactly.
pub const WARNING_PROGRESS: f64 = (SAFE_PROGRESS + DANGER_PROGRESS) / 2.0;

/// An 8-bit RGB color. Serialized as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Darken toward black by `alpha` (0.0 = black, 1.0 = unchanged).
    /// Stands in for alpha blending on an opaque black background.
    pub fn scaled(self, alpha: f64) -> Rgb {
        let a = alpha.clamp(0.0, 1.0);
        let ch = |c: u8| (c as f64 * a).round() as u8;
        Rgb(ch(self.0), ch(self.1), ch(self.2))
    }
}

/// Linear per-channel interpolation between `c0` (at `v0`) and `c1` (at `v1`).
fn interpolate(c0: Rgb, v0: f64, c1: Rgb, v1: f64, value: f64) -> Rgb {
    let w1 = (value - v0) / (v1 - v0);
    let w0 = 1.0 - w1;
    let ch = |a: u8, b: u8| (w0 * a as f64 + w1 * b as f64).round().clamp(0.0, 255.0) as u8;
    Rgb(ch(c0.0, c1.0), ch(c0.1, c1.1), ch(c0.2, c1.2))
}

/// Three-stop urgency gradient: flat safe color, a blend through the warning
/// color, then flat critical color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrgencyPalette {
    pub safe: Rgb,
    pub warning: Rgb,
    pub critical: Rgb,
}

impl Default for UrgencyPalette {
    fn default() -> Self {
        Self {
            safe: Rgb(0, 255, 192),
            warning: Rgb(255, 192, 0),
            critical: Rgb(192, 0, 0),
        }
    }
}

impl UrgencyPalette {
    /// Color for a clock that has consumed `progress` of the shared budget.
    pub fn color_for(&self, progress: f64) -> Rgb {
        if progress.is_nan() || progress <= SAFE_PROGRESS {
            self.safe
        } else if progress < WARNING_PROGRESS {
            interpolate(self.safe, SAFE_PROGRESS, self.warning, WARNING_PROGRESS, progress)
        } else if progress < DANGER_PROGRESS {
            interpolate(self.warning, WARNING_PROGRESS, self.critical, DANGER_PROGRESS, progress)
        } else {
            self.critical
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Rgb, b: Rgb) -> bool {
        let d = |x: u8, y: u8| (x as i16 - y as i16).abs();
        d(a.0, b.0) <= 1 && d(a.1, b.1) <= 1 && d(a.2, b.2) <= 1
    }

    #[test]
    fn warning_breakpoint_value() {
        assert!((WARNING_PROGRESS - 0.616_666_666).abs() < 1e-6);
    }

    #[test]
    fn flat_ends() {
        let p = UrgencyPalette::default();
        assert_eq!(p.color_for(0.0), p.safe);
        assert_eq!(p.color_for(0.2), p.safe);
        assert_eq!(p.color_for(SAFE_PROGRESS), p.safe);
        assert_eq!(p.color_for(0.9), p.critical);
        assert_eq!(p.color_for(1.0), p.critical);
        assert_eq!(p.color_for(1.5), p.critical);
    }

    #[test]
    fn exact_warning_color_at_midpoint() {
        let p = UrgencyPalette::default();
        assert_eq!(p.color_for(WARNING_PROGRESS), p.warning);
    }

    #[test]
    fn halfway_through_first_segment() {
        let p = UrgencyPalette::default();
        let mid = (SAFE_PROGRESS + WARNING_PROGRESS) / 2.0;
        // (0,255,192) and (255,192,0) averaged
        assert!(close(p.color_for(mid), Rgb(128, 224, 96)));
    }

    #[test]
    fn continuous_at_breakpoints() {
        let p = UrgencyPalette::default();
        let eps = 1e-9;
        for &bp in &[SAFE_PROGRESS, WARNING_PROGRESS, DANGER_PROGRESS] {
            let below = p.color_for(bp - eps);
            let at = p.color_for(bp);
            let above = p.color_for(bp + eps);
            assert!(close(below, at), "jump below {bp}: {below:?} vs {at:?}");
            assert!(close(at, above), "jump above {bp}: {at:?} vs {above:?}");
        }
    }

    #[test]
    fn no_large_steps_across_range() {
        let p = UrgencyPalette::default();
        let mut prev = p.color_for(0.0);
        for i in 1..=1000 {
            let c = p.color_for(i as f64 / 1000.0);
            let d = |x: u8, y: u8| (x as i16 - y as i16).abs();
            assert!(d(prev.0, c.0) <= 3 && d(prev.1, c.1) <= 3 && d(prev.2, c.2) <= 3);
            prev = c;
        }
    }

    #[test]
    fn nan_progress_is_safe() {
        let p = UrgencyPalette::default();
        assert_eq!(p.color_for(f64::NAN), p.safe);
    }

    #[test]
    fn scaled_toward_black() {
        assert_eq!(Rgb(200, 100, 0).scaled(0.5), Rgb(100, 50, 0));
        assert_eq!(Rgb(200, 100, 0).scaled(1.0), Rgb(200, 100, 0));
        assert_eq!(Rgb(200, 100, 0).scaled(0.0), Rgb(0, 0, 0));
    }
}
