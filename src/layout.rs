use crate::clock::Side;

/// Margin around and between the clock faces, as a fraction of content height.
const SPACING_RATIO: f64 = 0.05;
/// Gap between the faces when the button column sits there.
const BUTTON_GAP_RATIO: f64 = 0.2;
/// Arc thickness relative to the face radius.
const ARC_THICKNESS_RATIO: f64 = 0.15;
/// Time text size relative to the face radius.
const TEXT_SIZE_RATIO: f64 = 0.35;
/// Button radius relative to the gap.
const BUTTON_RADIUS_RATIO: f64 = 0.4;
/// Space between stacked buttons relative to the gap.
const BUTTON_SPACING_RATIO: f64 = 0.15;

/// Control buttons, listed in hit-test priority order (and top-to-bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Pause,
    Fullscreen,
    Reset,
}

impl ButtonKind {
    pub const ALL: [ButtonKind; 3] = [ButtonKind::Pause, ButtonKind::Fullscreen, ButtonKind::Reset];

    /// Glyph drawn in the middle of the button.
    pub fn icon(self) -> &'static str {
        match self {
            ButtonKind::Pause => "⏸",
            ButtonKind::Fullscreen => "⛶",
            ButtonKind::Reset => "↺",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    pub kind: ButtonKind,
    pub center: Point,
    pub radius: f64,
}

/// Screen-space positions of everything drawn, in viewport units with the
/// origin at the top-left and y growing downward.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub width: f64,
    pub height: f64,
    /// Top-left corner of the aspect-constrained content block.
    pub origin: Point,
    pub content_width: f64,
    pub content_height: f64,
    /// Center of the viewport; the left/right split runs through `center.x`.
    pub center: Point,
    pub spacing: f64,
    pub face_radius: f64,
    pub arc_thickness: f64,
    pub text_size: f64,
    faces: [Point; 2],
    pub buttons: Vec<Button>,
}

impl Geometry {
    /// Lay out the two faces (and optionally the button column) inside a
    /// `width` x `height` viewport. Deterministic in its inputs.
    pub fn compute(width: f64, height: f64, with_buttons: bool) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);

        let gap_ratio = if with_buttons { BUTTON_GAP_RATIO } else { SPACING_RATIO };
        let main_ratio = 2.0 - 2.0 * SPACING_RATIO + gap_ratio;

        let screen_is_wider = height > 0.0 && width / height > main_ratio;
        let (content_width, content_height) = if screen_is_wider {
            (height * main_ratio, height)
        } else {
            (width, width / main_ratio)
        };

        let spacing = SPACING_RATIO * content_height;
        let gap = gap_ratio * content_height;
        let face_radius = (content_height * 0.5 - spacing).max(0.0);
        let center = Point::new(width * 0.5, height * 0.5);
        let face_offset = gap * 0.5 + face_radius;

        let buttons = if with_buttons {
            let radius = gap * BUTTON_RADIUS_RATIO;
            let pitch = radius * 2.0 + gap * BUTTON_SPACING_RATIO;
            let first = center.y - pitch * (ButtonKind::ALL.len() - 1) as f64 * 0.5;
            ButtonKind::ALL
                .iter()
                .enumerate()
                .map(|(i, &kind)| Button {
                    kind,
                    center: Point::new(center.x, first + pitch * i as f64),
                    radius,
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            width,
            height,
            origin: Point::new((width - content_width) * 0.5, (height - content_height) * 0.5),
            content_width,
            content_height,
            center,
            spacing,
            face_radius,
            arc_thickness: face_radius * ARC_THICKNESS_RATIO,
            text_size: face_radius * TEXT_SIZE_RATIO,
            faces: [
                Point::new(center.x - face_offset, center.y),
                Point::new(center.x + face_offset, center.y),
            ],
            buttons,
        }
    }

    /// Center of the clock face for `side`.
    pub fn face_center(&self, side: Side) -> Point {
        self.faces[side.index()]
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x < self.width && p.y < self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn wide_viewport_is_height_bound() {
        let g = Geometry::compute(1000.0, 200.0, false);
        assert!(approx(g.content_height, 200.0));
        assert!(approx(g.content_width, 200.0 * 1.95));
        assert!(approx(g.origin.y, 0.0));
        assert!(approx(g.origin.x, (1000.0 - 390.0) / 2.0));
    }

    #[test]
    fn tall_viewport_is_width_bound() {
        let g = Geometry::compute(390.0, 1000.0, false);
        assert!(approx(g.content_width, 390.0));
        assert!(approx(g.content_height, 200.0));
        assert!(approx(g.origin.x, 0.0));
        assert!(approx(g.origin.y, 400.0));
    }

    #[test]
    fn face_dimensions_without_buttons() {
        let g = Geometry::compute(390.0, 200.0, false);
        // spacing 10, radius 100 - 10
        assert!(approx(g.spacing, 10.0));
        assert!(approx(g.face_radius, 90.0));
        assert!(approx(g.arc_thickness, 13.5));
        assert!(approx(g.text_size, 31.5));
        // First face sits one spacing in from the content edge
        let left = g.face_center(Side::Left);
        assert!(approx(left.x - g.face_radius, g.origin.x + g.spacing));
        let right = g.face_center(Side::Right);
        assert!(approx(right.x + g.face_radius, g.origin.x + g.content_width - g.spacing));
        assert!(g.buttons.is_empty());
    }

    #[test]
    fn faces_are_symmetric() {
        for &(w, h) in &[(800.0, 600.0), (1920.0, 1080.0), (300.0, 900.0)] {
            for &buttons in &[false, true] {
                let g = Geometry::compute(w, h, buttons);
                let l = g.face_center(Side::Left);
                let r = g.face_center(Side::Right);
                assert!(approx(g.center.x - l.x, r.x - g.center.x));
                assert!(approx(l.y, g.center.y));
                assert!(approx(r.y, g.center.y));
            }
        }
    }

    #[test]
    fn faces_stay_inside_viewport() {
        for &(w, h) in &[(800.0, 600.0), (160.0, 48.0), (80.0, 400.0)] {
            let g = Geometry::compute(w, h, true);
            for side in Side::BOTH {
                let c = g.face_center(side);
                assert!(c.x - g.face_radius >= -1e-9);
                assert!(c.x + g.face_radius <= w + 1e-9);
                assert!(c.y - g.face_radius >= -1e-9);
                assert!(c.y + g.face_radius <= h + 1e-9);
            }
        }
    }

    #[test]
    fn buttons_stack_on_centerline_between_faces() {
        let g = Geometry::compute(1000.0, 400.0, true);
        assert_eq!(g.buttons.len(), 3);
        let kinds: Vec<_> = g.buttons.iter().map(|b| b.kind).collect();
        assert_eq!(kinds, ButtonKind::ALL);

        for pair in g.buttons.windows(2) {
            assert!(pair[0].center.y < pair[1].center.y);
            // No overlap
            assert!(pair[1].center.y - pair[0].center.y > pair[0].radius * 2.0);
        }
        for b in &g.buttons {
            assert!(approx(b.center.x, g.center.x));
            // Button fits in the gap without touching either face
            let left = g.face_center(Side::Left);
            assert!(b.center.distance(left) > g.face_radius + b.radius);
        }
        // Column is centered vertically
        let mid = &g.buttons[1];
        assert!(approx(mid.center.y, g.center.y));
    }

    #[test]
    fn deterministic() {
        assert_eq!(
            Geometry::compute(640.0, 480.0, true),
            Geometry::compute(640.0, 480.0, true)
        );
    }

    #[test]
    fn degenerate_viewport() {
        let g = Geometry::compute(0.0, 0.0, true);
        assert_eq!(g.face_radius, 0.0);
        assert!(!g.contains(Point::new(0.0, 0.0)));
    }
}
