use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A point or offset in canvas pixel space. May be negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn delta_from(&self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

impl std::ops::Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    pub fn fits_minimum(&self, min: f64) -> bool {
        self.width >= min && self.height >= min
    }
}

/// Where a clip sits on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub position: Point,
    pub size: Size,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Leading,
    Trailing,
}

/// One of the eight resize handles around a clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeDirection {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeDirection {
    pub const ALL: [ResizeDirection; 8] = [
        ResizeDirection::TopLeft,
        ResizeDirection::Top,
        ResizeDirection::TopRight,
        ResizeDirection::Right,
        ResizeDirection::BottomRight,
        ResizeDirection::Bottom,
        ResizeDirection::BottomLeft,
        ResizeDirection::Left,
    ];

    fn horizontal(self) -> Option<Edge> {
        match self {
            Self::Left | Self::TopLeft | Self::BottomLeft => Some(Edge::Leading),
            Self::Right | Self::TopRight | Self::BottomRight => Some(Edge::Trailing),
            Self::Top | Self::Bottom => None,
        }
    }

    fn vertical(self) -> Option<Edge> {
        match self {
            Self::Top | Self::TopLeft | Self::TopRight => Some(Edge::Leading),
            Self::Bottom | Self::BottomLeft | Self::BottomRight => Some(Edge::Trailing),
            Self::Left | Self::Right => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for ResizeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResizeDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| format!("unknown resize direction: {s}"))
    }
}

/// Move a clip by `delta` from where the gesture started. Size is untouched.
pub fn drag(start: Placement, delta: Point) -> Placement {
    Placement {
        position: start.position + delta,
        size: start.size,
    }
}

/// Resize from a handle, always relative to the gesture-start placement.
///
/// The edge opposite the handle stays fixed. Each axis is clamped to `min`
/// independently, and for leading edges the origin moves by however much the
/// clamped size actually changed.
pub fn resize(start: Placement, delta: Point, direction: ResizeDirection, min: f64) -> Placement {
    let (x, width) = resize_axis(
        start.position.x,
        start.size.width,
        delta.x,
        direction.horizontal(),
        min,
    );
    let (y, height) = resize_axis(
        start.position.y,
        start.size.height,
        delta.y,
        direction.vertical(),
        min,
    );
    Placement {
        position: Point::new(x, y),
        size: Size::new(width, height),
    }
}

fn resize_axis(origin: f64, length: f64, delta: f64, edge: Option<Edge>, min: f64) -> (f64, f64) {
    match edge {
        None => (origin, length),
        Some(Edge::Trailing) => (origin, (length + delta).max(min)),
        Some(Edge::Leading) => {
            let new_length = (length - delta).max(min);
            (origin + (length - new_length), new_length)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeField {
    Width,
    Height,
}

/// Inclusive range accepted by numeric size entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeBounds {
    pub min: f64,
    pub max: f64,
}

impl SizeBounds {
    fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// Apply a typed width or height.
///
/// With `locked_aspect` set, the other dimension follows as
/// `round(value / aspect)` (or `round(value * aspect)` for height). Both
/// dimensions end up inside `bounds`.
pub fn apply_size_field(
    current: Size,
    field: SizeField,
    value: f64,
    locked_aspect: Option<f64>,
    bounds: SizeBounds,
) -> Size {
    let value = bounds.clamp(value);
    let aspect = locked_aspect.filter(|a| a.is_finite() && *a > 0.0);
    match (field, aspect) {
        (SizeField::Width, Some(aspect)) => {
            Size::new(value, bounds.clamp((value / aspect).round()))
        }
        (SizeField::Height, Some(aspect)) => {
            Size::new(bounds.clamp((value * aspect).round()), value)
        }
        (SizeField::Width, None) => Size::new(value, current.height),
        (SizeField::Height, None) => Size::new(current.width, value),
    }
}
