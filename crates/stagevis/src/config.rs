//! Configuration types for stagevis rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from an
//! external TOML file. Every setting has a default; a file only needs the
//! keys it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`StyleConfig`] - Colors, marker radii, and label font.
//!
//! # Example
//!
//! ```
//! # use stagevis::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.style().halo_radius(), 10.0);
//! assert!(config.style().halo_stroke().is_ok());
//! ```

use serde::Deserialize;

use stagevis_core::color::Color;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Visual styling of the rendered scene.
///
/// Colors are stored as strings and parsed on access, so an invalid color is
/// reported with the name of the setting it came from.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    room_stroke: String,
    room_stroke_opacity: f64,
    stage_stroke: String,
    pillar_fill: String,
    attendee_fill: String,
    attendee_radius: f64,
    halo_stroke: String,
    halo_radius: f64,
    dot_fill: String,
    dot_radius: f64,
    font_size: u16,
    font_family: Option<String>,
    label_fill: Option<String>,
    background_color: Option<String>,
}

impl StyleConfig {
    /// Stroke color of the room outline.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid color.
    pub fn room_stroke(&self) -> Result<Color, String> {
        parse_color("room_stroke", &self.room_stroke)
    }

    /// Opacity of the room outline, which keeps it distinct from the stage.
    pub fn room_stroke_opacity(&self) -> f64 {
        self.room_stroke_opacity
    }

    /// Stroke color of the stage outline.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid color.
    pub fn stage_stroke(&self) -> Result<Color, String> {
        parse_color("stage_stroke", &self.stage_stroke)
    }

    /// Fill color of pillars.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid color.
    pub fn pillar_fill(&self) -> Result<Color, String> {
        parse_color("pillar_fill", &self.pillar_fill)
    }

    /// Fill color of attendee markers.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid color.
    pub fn attendee_fill(&self) -> Result<Color, String> {
        parse_color("attendee_fill", &self.attendee_fill)
    }

    pub fn attendee_radius(&self) -> f64 {
        self.attendee_radius
    }

    /// Stroke color of the halo drawn around each musician.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid color.
    pub fn halo_stroke(&self) -> Result<Color, String> {
        parse_color("halo_stroke", &self.halo_stroke)
    }

    pub fn halo_radius(&self) -> f64 {
        self.halo_radius
    }

    /// Fill color of the dot marking each musician's exact position.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid color.
    pub fn dot_fill(&self) -> Result<Color, String> {
        parse_color("dot_fill", &self.dot_fill)
    }

    pub fn dot_radius(&self) -> f64 {
        self.dot_radius
    }

    /// Font size of attendee and musician labels.
    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Font family of labels, or `None` to leave it to the viewer.
    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }

    /// Fill color of labels, or `None` for the SVG default.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid color.
    pub fn label_fill(&self) -> Result<Option<Color>, String> {
        self.label_fill
            .as_deref()
            .map(|color| parse_color("label_fill", color))
            .transpose()
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_deref()
            .map(|color| parse_color("background_color", color))
            .transpose()
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            room_stroke: "black".to_string(),
            room_stroke_opacity: 0.5,
            stage_stroke: "red".to_string(),
            pillar_fill: "blue".to_string(),
            attendee_fill: "blue".to_string(),
            attendee_radius: 1.0,
            halo_stroke: "green".to_string(),
            halo_radius: 10.0,
            dot_fill: "red".to_string(),
            dot_radius: 5.0,
            font_size: 12,
            font_family: None,
            label_fill: None,
            background_color: None,
        }
    }
}

fn parse_color(key: &str, value: &str) -> Result<Color, String> {
    Color::new(value).map_err(|err| format!("Invalid {key} in config: {err}"))
}
