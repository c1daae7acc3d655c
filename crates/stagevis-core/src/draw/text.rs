//! Text style definitions for scene labels.
//!
//! Labels are always centered on their anchor point, both horizontally
//! (`text-anchor="middle"`) and vertically (`dominant-baseline="middle"`).
//! [`TextDefinition`] only carries what varies between scenes: font size,
//! optional font family, and optional fill color.

use crate::color::Color;

/// Defines the visual style for text labels.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font size | `12` |
/// | Font family | `None` (renderer default) |
/// | Text color | `None` (SVG default, typically black) |
///
/// # Examples
///
/// ```
/// # use stagevis_core::draw::TextDefinition;
/// let mut style = TextDefinition::new();
/// style.set_font_size(14);
/// style.set_font_family(Some("monospace"));
/// assert_eq!(style.font_size(), 14);
/// assert_eq!(style.font_family(), Some("monospace"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_size: u16,
    font_family: Option<String>,
    color: Option<Color>,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in user units.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the font family. `None` leaves the choice to the SVG viewer.
    pub fn set_font_family(&mut self, family: Option<&str>) {
        self.font_family = family.map(str::to_string);
    }

    /// Sets the text color. `None` uses the SVG default fill.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_size: 12,
            font_family: None,
            color: None,
        }
    }
}
