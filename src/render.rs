use std::f64::consts::TAU;

use crate::clock::{format_time, Game, Rgb, Side, UrgencyPalette};
use crate::layout::{Button, Geometry, Point};

/// Opacity of the part of the ring already used up.
const CONSUMED_ALPHA: f64 = 0.25;
const BUTTON_COLOR: Rgb = Rgb(64, 64, 64);
const ICON_COLOR: Rgb = Rgb(220, 220, 220);

/// How an arc is stroked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    pub thickness: f64,
    /// 0.0 transparent, 1.0 opaque.
    pub alpha: f64,
}

/// Anything the clock can be painted on.
///
/// Coordinates use the layout's space (origin top-left, y down). Angles are
/// radians measured clockwise from 12 o'clock.
pub trait Surface {
    fn clear(&mut self);
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb);
    fn stroke_arc(&mut self, center: Point, radius: f64, start: f64, end: f64, stroke: Stroke);
    fn centered_text(&mut self, text: &str, center: Point, size: f64, color: Rgb);
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    FillCircle {
        center: Point,
        radius: f64,
        color: Rgb,
    },
    StrokeArc {
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
        stroke: Stroke,
    },
    Text {
        text: String,
        center: Point,
        size: f64,
        color: Rgb,
    },
}

/// A surface that just remembers what was drawn. Backends replay it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    pub commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for DisplayList {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb) {
        self.commands.push(DrawCommand::FillCircle { center, radius, color });
    }

    fn stroke_arc(&mut self, center: Point, radius: f64, start: f64, end: f64, stroke: Stroke) {
        self.commands.push(DrawCommand::StrokeArc {
            center,
            radius,
            start,
            end,
            stroke,
        });
    }

    fn centered_text(&mut self, text: &str, center: Point, size: f64, color: Rgb) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            center,
            size,
            color,
        });
    }
}

/// Paint one frame. Reads the game, never changes it.
pub fn draw_frame(
    surface: &mut impl Surface,
    game: &Game,
    geometry: &Geometry,
    palette: &UrgencyPalette,
) {
    surface.clear();
    for side in Side::BOTH {
        draw_player(surface, game, geometry, palette, side);
    }
    for button in &geometry.buttons {
        draw_button(surface, button);
    }
}

fn draw_player(
    surface: &mut impl Surface,
    game: &Game,
    geometry: &Geometry,
    palette: &UrgencyPalette,
    side: Side,
) {
    let player = game.player(side);
    let center = geometry.face_center(side);
    let progress = game.progress(side);
    let color = palette.color_for(progress);
    let thickness = geometry.arc_thickness;
    // Stroke is centered on the path, so pull it in to keep the outer edge
    // on the face radius.
    let radius = geometry.face_radius - thickness * 0.5;
    let sweep = progress * TAU;

    if progress > 0.0 {
        surface.stroke_arc(
            center,
            radius,
            0.0,
            sweep,
            Stroke {
                color,
                thickness,
                alpha: CONSUMED_ALPHA,
            },
        );
    }
    if progress < 1.0 {
        surface.stroke_arc(
            center,
            radius,
            sweep,
            TAU,
            Stroke {
                color,
                thickness,
                alpha: 1.0,
            },
        );
    }

    surface.centered_text(&format_time(player.remaining()), center, geometry.text_size, color);

    if player.is_running() {
        let marker = Point::new(center.x, center.y + geometry.face_radius * 0.45);
        surface.fill_circle(marker, thickness * 0.4, color);
    }
}

fn draw_button(surface: &mut impl Surface, button: &Button) {
    surface.fill_circle(button.center, button.radius, BUTTON_COLOR);
    surface.centered_text(button.kind.icon(), button.center, button.radius, ICON_COLOR);
}
