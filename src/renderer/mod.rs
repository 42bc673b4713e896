//! Rendering module
//!
//! The simulation draws through the [`DrawSurface`] trait, a small subset of
//! the canvas 2D path API. Implementations:
//! - `RecordingSurface`: records commands (tests, native dumps)
//! - `TessellatingSurface`: turns stroked paths into triangle vertices
//! - `CanvasRenderingContext2d` (wasm only, see `platform::canvas`)

pub mod shapes;
pub mod vertex;

pub use shapes::TessellatingSurface;
pub use vertex::Vertex;

use serde::{Deserialize, Serialize};

/// RGBA colour, components in 0-1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn as_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// CSS colour string (`#rrggbb`, or `rgba(...)` when translucent)
    pub fn to_css(&self) -> String {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        if self.a >= 1.0 {
            format!(
                "#{:02x}{:02x}{:02x}",
                channel(self.r),
                channel(self.g),
                channel(self.b)
            )
        } else {
            format!(
                "rgba({}, {}, {}, {})",
                channel(self.r),
                channel(self.g),
                channel(self.b),
                self.a.clamp(0.0, 1.0)
            )
        }
    }
}

/// Path drawing operations the ring needs from a render target
///
/// Mirrors the canvas 2D context: `arc` sweeps clockwise (increasing angle)
/// from `start_angle` to `end_angle`. Errors come from the target (e.g. a
/// lost context) and are passed straight back to the caller.
pub trait DrawSurface {
    type Error;

    fn begin_path(&mut self) -> Result<(), Self::Error>;

    fn arc(
        &mut self,
        cx: f32,
        cy: f32,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
    ) -> Result<(), Self::Error>;

    fn set_stroke_color(&mut self, color: Color) -> Result<(), Self::Error>;

    fn stroke(&mut self) -> Result<(), Self::Error>;

    fn close_path(&mut self) -> Result<(), Self::Error>;
}

/// A single recorded draw call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    BeginPath,
    Arc {
        cx: f32,
        cy: f32,
        radius: f32,
        start: f32,
        end: f32,
    },
    SetStrokeColor(Color),
    Stroke,
    ClosePath,
}

/// An arc that was actually stroked, with the colour it was stroked in
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrokedArc {
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
    pub start: f32,
    pub end: f32,
    pub color: Color,
}

/// Surface that records every call, for tests and headless runs
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop recorded commands (start of a new frame)
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Stroke))
            .count()
    }

    /// Replay the recording and list every arc that ended up stroked
    pub fn stroked_arcs(&self) -> Vec<StrokedArc> {
        let mut stroked = Vec::new();
        let mut path: Vec<(f32, f32, f32, f32, f32)> = Vec::new();
        let mut color = Color::BLACK;

        for command in &self.commands {
            match *command {
                DrawCommand::BeginPath => path.clear(),
                DrawCommand::Arc {
                    cx,
                    cy,
                    radius,
                    start,
                    end,
                } => path.push((cx, cy, radius, start, end)),
                DrawCommand::SetStrokeColor(c) => color = c,
                DrawCommand::Stroke => {
                    stroked.extend(path.iter().map(|&(cx, cy, radius, start, end)| StrokedArc {
                        cx,
                        cy,
                        radius,
                        start,
                        end,
                        color,
                    }));
                }
                DrawCommand::ClosePath => {}
            }
        }

        stroked
    }
}

impl DrawSurface for RecordingSurface {
    type Error = std::convert::Infallible;

    fn begin_path(&mut self) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::BeginPath);
        Ok(())
    }

    fn arc(
        &mut self,
        cx: f32,
        cy: f32,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
    ) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Arc {
            cx,
            cy,
            radius,
            start: start_angle,
            end: end_angle,
        });
        Ok(())
    }

    fn set_stroke_color(&mut self, color: Color) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::SetStrokeColor(color));
        Ok(())
    }

    fn stroke(&mut self) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Stroke);
        Ok(())
    }

    fn close_path(&mut self) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::ClosePath);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_css() {
        assert_eq!(Color::WHITE.to_css(), "#ffffff");
        assert_eq!(Color::BLACK.to_css(), "#000000");
        let translucent = Color {
            a: 0.5,
            ..Color::WHITE
        };
        assert_eq!(translucent.to_css(), "rgba(255, 255, 255, 0.5)");
    }

    #[test]
    fn test_stroked_arcs_follow_color_changes() {
        let mut surface = RecordingSurface::new();
        surface.begin_path().unwrap();
        surface.arc(0.0, 0.0, 10.0, 0.0, 1.0).unwrap();
        surface.set_stroke_color(Color::WHITE).unwrap();
        surface.stroke().unwrap();
        surface.close_path().unwrap();

        // Path that is never stroked
        surface.begin_path().unwrap();
        surface.arc(5.0, 5.0, 2.0, 0.0, 1.0).unwrap();
        surface.close_path().unwrap();

        let strokes = surface.stroked_arcs();
        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].color, Color::WHITE);
        assert_eq!(strokes[0].radius, 10.0);
    }

    #[test]
    fn test_commands_serialize_tagged() {
        let json = serde_json::to_string(&DrawCommand::Stroke).unwrap();
        assert_eq!(json, r#"{"op":"stroke"}"#);
    }
}
