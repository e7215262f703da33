//! Triangle-list tessellation for 2D primitives
//!
//! Coordinates are logical screen pixels, y pointing down.

use std::f32::consts::PI;

use super::font::Font;
use super::vertex::Vertex;

/// Circle segments for aliased and anti-aliased circles
pub const CIRCLE_SEGMENTS: u32 = 24;
pub const CIRCLE_SEGMENTS_SMOOTH: u32 = 64;

/// Push an axis-aligned rectangle as two triangles
pub fn rect(out: &mut Vec<Vertex>, x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) {
    if w <= 0.0 || h <= 0.0 {
        return;
    }
    let (x1, y1) = (x + w, y + h);

    out.push(Vertex::new(x, y, color));
    out.push(Vertex::new(x1, y, color));
    out.push(Vertex::new(x, y1, color));

    out.push(Vertex::new(x, y1, color));
    out.push(Vertex::new(x1, y, color));
    out.push(Vertex::new(x1, y1, color));
}

/// Push a filled circle as a triangle fan
pub fn circle(out: &mut Vec<Vertex>, cx: f32, cy: f32, radius: f32, color: [f32; 4], segments: u32) {
    if radius <= 0.0 || segments < 3 {
        return;
    }
    out.reserve((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        out.push(Vertex::new(cx, cy, color));
        out.push(Vertex::new(
            cx + radius * theta1.cos(),
            cy + radius * theta1.sin(),
            color,
        ));
        out.push(Vertex::new(
            cx + radius * theta2.cos(),
            cy + radius * theta2.sin(),
            color,
        ));
    }
}

/// Push bitmap text with its baseline at `y`
pub fn text(out: &mut Vec<Vertex>, text: &str, font: &Font, x: f32, y: f32, color: [f32; 4]) {
    for span in font.spans(text, x, y) {
        rect(out, span.x, span.y, span.width, span.height, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_rect_corners() {
        let mut out = Vec::new();
        rect(&mut out, 10.0, 20.0, 5.0, 100.0, WHITE);
        assert_eq!(out.len(), 6);

        let xs: Vec<f32> = out.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = out.iter().map(|v| v.position[1]).collect();
        assert!(xs.iter().all(|&x| x == 10.0 || x == 15.0));
        assert!(ys.iter().all(|&y| y == 20.0 || y == 120.0));
    }

    #[test]
    fn test_degenerate_shapes_emit_nothing() {
        let mut out = Vec::new();
        rect(&mut out, 0.0, 0.0, 0.0, 10.0, WHITE);
        circle(&mut out, 0.0, 0.0, 0.0, WHITE, CIRCLE_SEGMENTS);
        circle(&mut out, 0.0, 0.0, 5.0, WHITE, 2);
        assert!(out.is_empty());
    }

    #[test]
    fn test_circle_stays_within_radius() {
        let mut out = Vec::new();
        circle(&mut out, 100.0, 50.0, 10.0, WHITE, CIRCLE_SEGMENTS);
        assert_eq!(out.len(), (CIRCLE_SEGMENTS * 3) as usize);
        for v in &out {
            let dx = v.position[0] - 100.0;
            let dy = v.position[1] - 50.0;
            assert!((dx * dx + dy * dy).sqrt() <= 10.0 + 1e-3);
        }
    }

    #[test]
    fn test_text_is_one_quad_per_span() {
        let font = Font::BASIC;
        let mut out = Vec::new();
        text(&mut out, "Player 1: 0", &font, 20.0, 20.0, WHITE);
        assert_eq!(out.len(), font.spans("Player 1: 0", 20.0, 20.0).len() * 6);
    }
}
