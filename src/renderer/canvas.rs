//! Canvas backend that collects a triangle list for one frame

use super::font::Font;
use super::shapes::{self, CIRCLE_SEGMENTS, CIRCLE_SEGMENTS_SMOOTH};
use super::vertex::Vertex;
use super::Canvas;
use crate::config::Color;

/// Records draw calls as vertices in logical screen coordinates
#[derive(Debug, Default)]
pub struct VertexCanvas {
    pub vertices: Vec<Vertex>,
    pub clear_color: [f32; 4],
}

impl VertexCanvas {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Canvas for VertexCanvas {
    /// Starts a new frame: geometry from the previous one is dropped
    fn clear(&mut self, color: Color) {
        self.vertices.clear();
        self.clear_color = color.to_f32();
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color, _anti_alias: bool) {
        // axis-aligned quads have no edges to smooth
        shapes::rect(&mut self.vertices, x, y, w, h, color.to_f32());
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color, anti_alias: bool) {
        let segments = if anti_alias {
            CIRCLE_SEGMENTS_SMOOTH
        } else {
            CIRCLE_SEGMENTS
        };
        shapes::circle(&mut self.vertices, cx, cy, radius, color.to_f32(), segments);
    }

    fn draw_text(&mut self, text: &str, font: &Font, x: f32, y: f32, color: Color) {
        shapes::text(&mut self.vertices, text, font, x, y, color.to_f32());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::renderer::draw_frame;
    use crate::sim::{GameState, Metrics};

    #[test]
    fn test_clear_discards_previous_geometry() {
        let mut canvas = VertexCanvas::new();
        canvas.fill_rect(0.0, 0.0, 10.0, 10.0, Color::WHITE, false);
        canvas.clear(Color::rgb(0, 0, 255));
        assert!(canvas.vertices.is_empty());
        assert_eq!(canvas.clear_color, [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_anti_aliased_circle_uses_more_segments() {
        let mut rough = VertexCanvas::new();
        rough.fill_circle(0.0, 0.0, 5.0, Color::WHITE, false);
        let mut smooth = VertexCanvas::new();
        smooth.fill_circle(0.0, 0.0, 5.0, Color::WHITE, true);
        assert!(smooth.vertices.len() > rough.vertices.len());
    }

    #[test]
    fn test_full_frame_tessellates() {
        let config = GameConfig::default();
        let metrics = Metrics::new(&config, 640.0, 480.0);
        let state = GameState::new(&config, &metrics);
        let mut canvas = VertexCanvas::new();

        draw_frame(&state, &config, &metrics, &mut canvas);

        // 4 borders + 2 paddles, a smooth ball, and two labels
        let quads = 6 * 6;
        let ball = (CIRCLE_SEGMENTS_SMOOTH * 3) as usize;
        assert!(canvas.vertices.len() > quads + ball);
        assert_eq!(canvas.vertices.len() % 3, 0);
    }
}
