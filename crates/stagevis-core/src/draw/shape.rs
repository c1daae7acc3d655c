//! Shape primitives and their SVG rendering.
//!
//! [`Shape`] is a tagged union over the three primitives a scene is made of:
//! [`Rectangle`], [`Circle`] and [`Label`]. Styles are shared through [`Rc`]
//! so that hundreds of identical markers do not each carry their own copy.

use std::rc::Rc;

use log::trace;
use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{StrokeDefinition, SvgNode, TextDefinition},
    geometry::{Point, Size},
};

/// An axis-aligned rectangle anchored at its minimum corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    origin: Point,
    size: Size,
    fill: Option<Color>,
    stroke: Option<Rc<StrokeDefinition>>,
}

impl Rectangle {
    /// Creates an unfilled rectangle with no stroke.
    pub fn new(origin: Point, size: Size) -> Self {
        Self {
            origin,
            size,
            fill: None,
            stroke: None,
        }
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_stroke(mut self, stroke: Rc<StrokeDefinition>) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    pub fn stroke(&self) -> Option<&StrokeDefinition> {
        self.stroke.as_deref()
    }

    fn render_to_svg(&self) -> SvgNode {
        let mut rect = svg_element::Rectangle::new()
            .set("x", self.origin.x())
            .set("y", self.origin.y())
            .set("width", self.size.width())
            .set("height", self.size.height())
            .set("fill", fill_value(self.fill));

        if let Some(stroke) = self.stroke() {
            rect = crate::apply_stroke!(rect, stroke);
        }

        Box::new(rect)
    }
}

/// A circle given by its center and radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
    fill: Option<Color>,
    stroke: Option<Rc<StrokeDefinition>>,
}

impl Circle {
    /// Creates an unfilled circle with no stroke.
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius,
            fill: None,
            stroke: None,
        }
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_stroke(mut self, stroke: Rc<StrokeDefinition>) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    pub fn stroke(&self) -> Option<&StrokeDefinition> {
        self.stroke.as_deref()
    }

    fn render_to_svg(&self) -> SvgNode {
        let mut circle = svg_element::Circle::new()
            .set("cx", self.center.x())
            .set("cy", self.center.y())
            .set("r", self.radius)
            .set("fill", fill_value(self.fill));

        if let Some(stroke) = self.stroke() {
            circle = crate::apply_stroke!(circle, stroke);
        }

        Box::new(circle)
    }
}

/// A text label centered on a point.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    position: Point,
    content: String,
    definition: Rc<TextDefinition>,
}

impl Label {
    pub fn new(position: Point, content: impl Into<String>, definition: Rc<TextDefinition>) -> Self {
        Self {
            position,
            content: content.into(),
            definition,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn definition(&self) -> &TextDefinition {
        &self.definition
    }

    fn render_to_svg(&self) -> SvgNode {
        let mut text = svg_element::Text::new(self.content.as_str())
            .set("x", self.position.x())
            .set("y", self.position.y())
            .set("font-size", self.definition.font_size())
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle");

        if let Some(family) = self.definition.font_family() {
            text = text.set("font-family", family);
        }
        if let Some(color) = self.definition.color() {
            text = text.set("fill", &color);
        }

        Box::new(text)
    }
}

/// One drawing primitive of a scene.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
    Text(Label),
}

impl Shape {
    /// Renders this shape to a standalone SVG element.
    pub fn render_to_svg(&self) -> SvgNode {
        trace!(shape:? = self; "Rendering shape");
        match self {
            Self::Rectangle(rect) => rect.render_to_svg(),
            Self::Circle(circle) => circle.render_to_svg(),
            Self::Text(label) => label.render_to_svg(),
        }
    }

    pub fn as_rectangle(&self) -> Option<&Rectangle> {
        match self {
            Self::Rectangle(rect) => Some(rect),
            _ => None,
        }
    }

    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Self::Circle(circle) => Some(circle),
            _ => None,
        }
    }

    pub fn as_label(&self) -> Option<&Label> {
        match self {
            Self::Text(label) => Some(label),
            _ => None,
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Self::Rectangle(rect)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<Label> for Shape {
    fn from(label: Label) -> Self {
        Self::Text(label)
    }
}

fn fill_value(fill: Option<Color>) -> String {
    fill.map_or_else(|| "none".to_string(), |color| color.to_string())
}
