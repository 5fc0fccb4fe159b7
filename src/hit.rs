use crate::clock::Side;
use crate::layout::{ButtonKind, Geometry, Point};

/// What a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Button(ButtonKind),
    Player(Side),
}

/// Resolve a pointer position against the current layout.
///
/// Buttons win over the player halves and are checked in their fixed
/// priority order. Anything else inside the viewport belongs to the left or
/// right player; points outside the viewport hit nothing.
pub fn hit_test(geometry: &Geometry, x: f64, y: f64) -> Option<Target> {
    let p = Point::new(x, y);
    if !geometry.contains(p) {
        return None;
    }

    if let Some(button) = geometry
        .buttons
        .iter()
        .find(|b| p.distance(b.center) <= b.radius)
    {
        return Some(Target::Button(button.kind));
    }

    if x >= geometry.center.x {
        Some(Target::Player(Side::Right))
    } else {
        Some(Target::Player(Side::Left))
    }
}
