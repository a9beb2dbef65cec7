//! Draw requests: canvas-agnostic shape records produced from entity state.
//!
//! The simulation never renders. It maps state to a sequence of [`Shape`]s
//! and hands them to whatever [`DrawSink`] the caller supplies.
//!
//! ```ignore
//! let body = Shape::rectangle(DVec2::new(x, y), 10.0, 5.0).color(Color::COW_HIDE);
//! sink.submit(body);
//! ```

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// RGBA colour, each channel 0.0..=1.0.
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
    pub const GRASS: Color = Color::rgb(0.0, 0.2, 0.0);
    pub const NIGHT_SKY: Color = Color::rgb(0.2, 0.0, 0.3);
    pub const COW_HIDE: Color = Color::rgb(1.0, 250.0 / 255.0, 240.0 / 255.0);
    pub const WINDOW: Color = Color::rgb(175.0 / 255.0, 238.0 / 255.0, 238.0 / 255.0);
    pub const HULL_DARK: Color = Color::rgb(50.0 / 255.0, 50.0 / 255.0, 50.0 / 255.0);
    pub const HULL_LIGHT: Color = Color::rgb(150.0 / 255.0, 150.0 / 255.0, 150.0 / 255.0);
    pub const BEAM: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 100.0 / 255.0,
        a: 100.0 / 255.0,
    };

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// The kind and dimensions of a shape, in world coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ShapeKind {
    /// Axis-aligned rectangle anchored at its lower-left corner.
    Rectangle { origin: DVec2, width: f64, height: f64 },
    Circle { center: DVec2, radius: f64 },
    /// Circular sector between two angles in degrees, counter-clockwise.
    Wedge {
        center: DVec2,
        radius: f64,
        start_deg: f64,
        end_deg: f64,
    },
    /// Closed polygon.
    Polygon { points: Vec<DVec2> },
    /// Closed path: one cubic Bézier from `start` to `end`, then a straight edge back.
    CubicHull {
        start: DVec2,
        ctrl1: DVec2,
        ctrl2: DVec2,
        end: DVec2,
    },
}

/// A filled shape with a colour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub kind: ShapeKind,
    pub color: Color,
}

impl Shape {
    pub fn rectangle(origin: DVec2, width: f64, height: f64) -> Self {
        Self::from_kind(ShapeKind::Rectangle {
            origin,
            width,
            height,
        })
    }

    pub fn circle(center: DVec2, radius: f64) -> Self {
        Self::from_kind(ShapeKind::Circle { center, radius })
    }

    pub fn wedge(center: DVec2, radius: f64, start_deg: f64, end_deg: f64) -> Self {
        Self::from_kind(ShapeKind::Wedge {
            center,
            radius,
            start_deg,
            end_deg,
        })
    }

    pub fn polygon(points: Vec<DVec2>) -> Self {
        Self::from_kind(ShapeKind::Polygon { points })
    }

    pub fn cubic_hull(start: DVec2, ctrl1: DVec2, ctrl2: DVec2, end: DVec2) -> Self {
        Self::from_kind(ShapeKind::CubicHull {
            start,
            ctrl1,
            ctrl2,
            end,
        })
    }

    /// Set the shape colour.
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    fn from_kind(kind: ShapeKind) -> Self {
        Self {
            kind,
            color: Color::WHITE,
        }
    }
}

/// Receives draw requests. Implemented by whatever renders the scene.
pub trait DrawSink {
    fn submit(&mut self, shape: Shape);
}

impl DrawSink for Vec<Shape> {
    fn submit(&mut self, shape: Shape) {
        self.push(shape);
    }
}
