//! Drawing primitives for stagevis scenes.
//!
//! A scene is an append-only [`Canvas`] of [`Shape`]s. Every shape is a plain
//! value with fixed styling; the canvas turns the whole list into an SVG
//! document in append order.

mod canvas;
mod shape;
mod stroke;
mod text;

pub use canvas::Canvas;
pub use shape::{Circle, Label, Rectangle, Shape};
pub use stroke::StrokeDefinition;
pub use text::TextDefinition;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;
