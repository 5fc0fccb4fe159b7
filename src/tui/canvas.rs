use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::canvas::{Canvas, Context, Points};
use ratatui::widgets::Widget;

use crate::clock::Rgb;
use crate::layout::Point;
use crate::render::{DisplayList, DrawCommand, Stroke};

/// Braille dots per terminal cell. Dots come out roughly square, so the
/// layout can treat one dot as one unit in both directions.
const DOTS_X: f64 = 2.0;
const DOTS_Y: f64 = 4.0;
/// Sampling step along shapes, in dots.
const STEP: f64 = 0.5;

/// Viewport size in layout units for a canvas drawn into `area`.
pub fn viewport_size(area: Rect) -> (f64, f64) {
    (area.width as f64 * DOTS_X, area.height as f64 * DOTS_Y)
}

/// Map a terminal cell to the layout point at its center.
/// Cells outside `area` map to a point outside the viewport.
pub fn cell_to_viewport(area: Rect, column: u16, row: u16) -> (f64, f64) {
    let x = (column as f64 - area.x as f64 + 0.5) * DOTS_X;
    let y = (row as f64 - area.y as f64 + 0.5) * DOTS_Y;
    (x, y)
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Replays a display list on a braille canvas.
pub struct ClockCanvas<'a> {
    list: &'a DisplayList,
}

impl<'a> ClockCanvas<'a> {
    pub fn new(list: &'a DisplayList) -> Self {
        Self { list }
    }
}

impl Widget for ClockCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (width, height) = viewport_size(area);
        Canvas::default()
            .background_color(Color::Black)
            .marker(Marker::Braille)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                for cmd in &self.list.commands {
                    paint(ctx, cmd, height);
                }
            })
            .render(area, buf);
    }
}

fn paint(ctx: &mut Context, cmd: &DrawCommand, height: f64) {
    // Layout space has y growing down; the canvas has it growing up.
    let flip = |p: Point| (p.x, height - p.y);

    match cmd {
        DrawCommand::Clear => {}
        DrawCommand::FillCircle { center, radius, color: c } => {
            let coords = disc_points(flip(*center), *radius);
            ctx.draw(&Points {
                coords: &coords,
                color: color(*c),
            });
        }
        DrawCommand::StrokeArc { center, radius, start, end, stroke } => {
            let coords = arc_points(flip(*center), *radius, *start, *end, stroke);
            ctx.draw(&Points {
                coords: &coords,
                color: color(stroke.color.scaled(stroke.alpha)),
            });
            ctx.layer();
        }
        DrawCommand::Text { text, center, color: c, .. } => {
            let (x, y) = flip(*center);
            // Each character covers one cell, DOTS_X units wide.
            let half_width = text.chars().count() as f64 * DOTS_X * 0.5;
            ctx.print(
                x - half_width,
                y,
                Line::styled(
                    text.clone(),
                    Style::default().fg(color(*c)).add_modifier(Modifier::BOLD),
                ),
            );
        }
    }
}

fn disc_points((cx, cy): (f64, f64), radius: f64) -> Vec<(f64, f64)> {
    let mut coords = Vec::new();
    let mut dy = -radius;
    while dy <= radius {
        let half = (radius * radius - dy * dy).max(0.0).sqrt();
        let mut dx = -half;
        while dx <= half {
            coords.push((cx + dx, cy + dy));
            dx += STEP;
        }
        dy += STEP;
    }
    coords
}

/// Sample a thick arc. Angles run clockwise from 12 o'clock, which in the
/// flipped (y-up) canvas is `(sin θ, cos θ)`.
fn arc_points((cx, cy): (f64, f64), radius: f64, start: f64, end: f64, stroke: &Stroke) -> Vec<(f64, f64)> {
    let mut coords = Vec::new();
    let inner = (radius - stroke.thickness * 0.5).max(0.0);
    let outer = radius + stroke.thickness * 0.5;

    let mut r = inner;
    while r <= outer {
        let step = STEP / r.max(STEP);
        let mut theta = start;
        while theta <= end {
            coords.push((cx + r * theta.sin(), cy + r * theta.cos()));
            theta += step;
        }
        r += STEP;
    }
    coords
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Game, UrgencyPalette};
    use crate::layout::Geometry;
    use crate::render::draw_frame;
    use std::f64::consts::{FRAC_PI_2, TAU};

    #[test]
    fn viewport_is_in_dots() {
        assert_eq!(viewport_size(Rect::new(3, 2, 80, 24)), (160.0, 96.0));
    }

    #[test]
    fn cell_centers_map_into_viewport() {
        let area = Rect::new(1, 1, 10, 5);
        assert_eq!(cell_to_viewport(area, 1, 1), (1.0, 2.0));
        assert_eq!(cell_to_viewport(area, 10, 5), (19.0, 18.0));
        let (x, _) = cell_to_viewport(area, 0, 3);
        assert!(x < 0.0);
    }

    #[test]
    fn quarter_arc_starts_at_top_and_heads_right() {
        let stroke = Stroke {
            color: Rgb(255, 255, 255),
            thickness: 0.0,
            alpha: 1.0,
        };
        let points = arc_points((0.0, 0.0), 10.0, 0.0, FRAC_PI_2, &stroke);
        let first = points[0];
        assert!((first.0 - 0.0).abs() < 1e-9 && (first.1 - 10.0).abs() < 1e-9);
        assert!(points.iter().all(|&(x, y)| x >= -1e-9 && y >= -1e-9));
        let last = *points.last().unwrap();
        assert!(last.0 > 9.9 && last.1.abs() < 0.5);
    }

    #[test]
    fn disc_stays_within_radius() {
        let points = disc_points((5.0, 5.0), 3.0);
        assert!(!points.is_empty());
        for (x, y) in points {
            assert!(((x - 5.0).powi(2) + (y - 5.0).powi(2)).sqrt() <= 3.0 + 1e-9);
        }
    }

    #[test]
    fn empty_arc_has_no_points() {
        let stroke = Stroke {
            color: Rgb(0, 0, 0),
            thickness: 2.0,
            alpha: 1.0,
        };
        assert!(arc_points((0.0, 0.0), 5.0, TAU, 0.0, &stroke).is_empty());
    }

    #[test]
    fn renders_times_and_rings() {
        let area = Rect::new(0, 0, 60, 16);
        let (w, h) = viewport_size(area);
        let geometry = Geometry::compute(w, h, false);
        let game = Game::new(300.0, 61.0);
        let mut list = DisplayList::new();
        draw_frame(&mut list, &game, &geometry, &UrgencyPalette::default());

        let mut buf = Buffer::empty(area);
        ClockCanvas::new(&list).render(area, &mut buf);

        let screen: String = buf.content.iter().map(|c| c.symbol()).collect();
        assert!(screen.contains("5:00"), "{screen}");
        assert!(screen.contains("1:01"), "{screen}");
        assert!(screen
            .chars()
            .any(|c| ('\u{2801}'..='\u{28FF}').contains(&c)));
    }
}
