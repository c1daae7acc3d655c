//! Stroke definitions for outlined shapes.
//!
//! # SVG Attribute Mapping
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `color` | `stroke` | `"black"`, `"#ff0000"` |
//! | `width` | `stroke-width` | `1` |
//! | `opacity` | `stroke-opacity` | `0.5` (omitted when fully opaque) |

use crate::color::Color;

/// A stroke definition for rendering shape borders.
///
/// # Examples
///
/// ```
/// use stagevis_core::color::Color;
/// use stagevis_core::draw::StrokeDefinition;
///
/// // Default stroke (black, 1px, opaque)
/// let stroke = StrokeDefinition::default();
/// assert_eq!(stroke.width(), 1.0);
///
/// // Half transparent red border
/// let stroke = StrokeDefinition::new(Color::new("red").unwrap(), 1.0).with_opacity(0.5);
/// assert_eq!(stroke.opacity(), 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f64,
    opacity: f64,
}

impl StrokeDefinition {
    /// Creates a new opaque stroke with the given color and width.
    pub fn new(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            opacity: 1.0,
        }
    }

    /// Returns a copy of this stroke with the given opacity, clamped to `0.0..=1.0`.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the stroke opacity.
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Returns true if the stroke is drawn without transparency.
    pub fn is_opaque(&self) -> bool {
        self.opacity >= 1.0
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::new(Color::default(), 1.0)
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// Sets `stroke` and `stroke-width`, plus `stroke-opacity` when the stroke is
/// not fully opaque.
///
/// # Examples
///
/// ```
/// use stagevis_core::color::Color;
/// use stagevis_core::draw::StrokeDefinition;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::new(Color::new("black").unwrap(), 2.0);
/// let rect = svg_element::Rectangle::new()
///     .set("x", 0)
///     .set("y", 0)
///     .set("width", 100)
///     .set("height", 50);
///
/// let rect = stagevis_core::apply_stroke!(rect, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let stroke = $stroke;
        let mut elem = $element
            .set("stroke", stroke.color().to_string())
            .set("stroke-width", stroke.width());

        if !stroke.is_opaque() {
            elem = elem.set("stroke-opacity", stroke.opacity());
        }

        elem
    }};
}
