//! Draw command vocabulary and the `Canvas` seam.

use serde::{Deserialize, Serialize};

use galaxy_core::types::{Position, Rect, Rgb};

/// Color with straight alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub rgb: Rgb,
    pub alpha: f32,
}

impl Color {
    pub const fn opaque(rgb: Rgb) -> Self {
        Self { rgb, alpha: 1.0 }
    }

    pub fn with_alpha(rgb: Rgb, alpha: f32) -> Self {
        Self {
            rgb,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Build from hue (degrees), saturation and lightness in `[0, 1]`.
    pub fn from_hsla(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = lightness - c / 2.0;
        let channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::with_alpha(Rgb(channel(r), channel(g), channel(b)), alpha)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
}

/// One immediate-mode 2D draw operation in playfield pixels.
///
/// `glow` is a blur radius for a neon halo; 0 draws a hard edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op")]
pub enum DrawCommand {
    /// Top-to-bottom gradient filling `rect`. Stops are `(offset, color)`.
    VerticalGradient { rect: Rect, stops: Vec<(f32, Rgb)> },
    FillRect { rect: Rect, color: Color, glow: f32 },
    FillCircle {
        center: Position,
        radius: f32,
        color: Color,
        glow: f32,
    },
    StrokeCircle {
        center: Position,
        radius: f32,
        color: Color,
        width: f32,
        glow: f32,
    },
    FillEllipse {
        center: Position,
        radius_x: f32,
        radius_y: f32,
        color: Color,
        glow: f32,
    },
    StrokeEllipse {
        center: Position,
        radius_x: f32,
        radius_y: f32,
        /// Radians.
        rotation: f32,
        color: Color,
        width: f32,
    },
    /// Closed polygon, filled then outlined.
    Polygon {
        points: Vec<Position>,
        fill: Color,
        stroke: Color,
        width: f32,
        glow: f32,
    },
    Line {
        from: Position,
        to: Position,
        color: Color,
        width: f32,
    },
    /// Monospace text anchored at `at` (baseline middle).
    Text {
        text: String,
        at: Position,
        size: f32,
        bold: bool,
        color: Color,
        align: TextAlign,
    },
}

/// A surface the projector can draw onto.
pub trait Canvas {
    fn draw(&mut self, command: DrawCommand);
}

/// Recorded draw commands for one frame, in paint order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayList {
    pub commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Every text string in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for DisplayList {
    fn draw(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}
