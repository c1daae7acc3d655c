//! The append-only drawing surface.

use log::debug;
use svg::Document;

use crate::{
    color::Color,
    draw::{Rectangle, Shape},
    geometry::{Point, Size},
};

/// An ordered, append-only list of shapes on a surface of fixed size.
///
/// The size is set at construction and never changes. Shapes are painted in
/// the order they were pushed, so later shapes are drawn on top.
///
/// # Examples
///
/// ```
/// # use stagevis_core::draw::{Canvas, Circle};
/// # use stagevis_core::geometry::{Point, Size};
/// let mut canvas = Canvas::new(Size::new(100.0, 100.0));
/// canvas.push(Circle::new(Point::new(50.0, 50.0), 1.0));
///
/// assert_eq!(canvas.len(), 1);
/// let svg = canvas.to_document().to_string();
/// assert!(svg.contains(r#"viewBox="0 0 100 100""#));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    size: Size,
    background: Option<Color>,
    shapes: Vec<Shape>,
}

impl Canvas {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            background: None,
            shapes: Vec::new(),
        }
    }

    /// Sets a background fill painted below every shape.
    ///
    /// The background is not a shape and is not counted by [`Canvas::len`].
    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    /// Appends a shape on top of everything pushed so far.
    pub fn push(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn background(&self) -> Option<Color> {
        self.background
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Builds the SVG document for this canvas.
    ///
    /// The document is `width × height` user units with a matching `viewBox`
    /// anchored at the origin.
    pub fn to_document(&self) -> Document {
        let width = self.size.width();
        let height = self.size.height();
        debug!(
            width = width,
            height = height,
            shapes = self.shapes.len();
            "Building SVG document"
        );

        let mut doc = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0.0, 0.0, width, height));

        if let Some(background) = self.background {
            let bg = Rectangle::new(Point::default(), self.size).with_fill(background);
            doc = doc.add(Shape::from(bg).render_to_svg());
        }

        for shape in &self.shapes {
            doc = doc.add(shape.render_to_svg());
        }

        doc
    }
}
