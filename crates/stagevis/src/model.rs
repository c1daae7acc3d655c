//! Input documents: the problem description and an optional solution.
//!
//! Both documents are JSON. Only the fields used for drawing are modelled;
//! anything else in the input (per-attendee tastes, for instance) is ignored.
//! Required fields are enforced by deserialization, so a document that parses
//! is complete enough to draw.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use stagevis_core::geometry::{Point, Size};

/// A room with a stage, pillars, attendees, and the musicians to place.
///
/// # Examples
///
/// ```
/// # use stagevis::model::Problem;
/// let problem = Problem::from_json(r#"{
///     "room_width": 100, "room_height": 80,
///     "stage_bottom_left": [10, 10], "stage_width": 20, "stage_height": 20,
///     "pillars": [], "attendees": [{"x": 50, "y": 50}], "musicians": [3]
/// }"#).unwrap();
///
/// assert_eq!(problem.room_size().width(), 100.0);
/// assert_eq!(problem.attendees().len(), 1);
/// assert_eq!(problem.instrument(0).unwrap().to_string(), "3");
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Problem {
    room_width: f64,
    room_height: f64,
    stage_bottom_left: [f64; 2],
    stage_width: f64,
    stage_height: f64,
    pillars: Vec<Pillar>,
    attendees: Vec<Attendee>,
    #[serde(default)]
    musicians: Vec<InstrumentId>,
}

impl Problem {
    /// Parses a problem document.
    ///
    /// # Errors
    ///
    /// Fails if the text is not JSON, if a required field is missing, or if a
    /// coordinate pair does not have exactly two numbers.
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    /// Size of the room, which is also the size of the drawing.
    pub fn room_size(&self) -> Size {
        Size::new(self.room_width, self.room_height)
    }

    /// Corner of the stage with the smallest coordinates.
    pub fn stage_origin(&self) -> Point {
        Point::from(self.stage_bottom_left)
    }

    pub fn stage_size(&self) -> Size {
        Size::new(self.stage_width, self.stage_height)
    }

    pub fn pillars(&self) -> &[Pillar] {
        &self.pillars
    }

    pub fn attendees(&self) -> &[Attendee] {
        &self.attendees
    }

    pub fn musicians(&self) -> &[InstrumentId] {
        &self.musicians
    }

    /// Instrument of the musician at `index`, if there is one.
    pub fn instrument(&self, index: usize) -> Option<&InstrumentId> {
        self.musicians.get(index)
    }
}

/// A circular obstacle.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Pillar {
    center: [f64; 2],
    radius: f64,
}

impl Pillar {
    pub fn center(&self) -> Point {
        Point::from(self.center)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

/// A listener position.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Attendee {
    x: f64,
    y: f64,
}

impl Attendee {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Musician positions, in the same order as [`Problem::musicians`].
#[derive(Debug, Clone, Deserialize)]
pub struct Solution {
    placements: Vec<Placement>,
}

impl Solution {
    /// Parses a solution document.
    ///
    /// # Errors
    ///
    /// Fails if the text is not JSON or has no `placements` list.
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }
}

/// Position of one musician.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Placement {
    x: f64,
    y: f64,
}

impl Placement {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Instrument identifier of a musician.
///
/// Any JSON value is accepted. Numbers and strings display as their bare
/// value (`3`, `violin`); anything else displays as compact JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct InstrumentId(Value);

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(name) => f.write_str(name),
            other => write!(f, "{other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn scenario_problem() -> Value {
        json!({
            "room_width": 100, "room_height": 100,
            "stage_bottom_left": [0, 0], "stage_width": 20, "stage_height": 20,
            "pillars": [], "attendees": [{"x": 50, "y": 50}], "musicians": [3]
        })
    }

    #[test]
    fn test_parse_problem() {
        let problem = Problem::from_json(&scenario_problem().to_string()).unwrap();

        assert_eq!(problem.room_size(), Size::new(100.0, 100.0));
        assert_eq!(problem.stage_origin(), Point::new(0.0, 0.0));
        assert_eq!(problem.stage_size(), Size::new(20.0, 20.0));
        assert!(problem.pillars().is_empty());
        assert_eq!(problem.attendees()[0].position(), Point::new(50.0, 50.0));
        assert_eq!(problem.musicians().len(), 1);
        assert!(problem.instrument(1).is_none());
    }

    #[test]
    fn test_parse_pillars() {
        let mut doc = scenario_problem();
        doc["pillars"] = json!([{"center": [30.5, 40], "radius": 7}]);

        let problem = Problem::from_json(&doc.to_string()).unwrap();
        let pillar = problem.pillars()[0];

        assert_eq!(pillar.center(), Point::new(30.5, 40.0));
        assert_eq!(pillar.radius(), 7.0);
    }

    #[test]
    fn test_required_fields() {
        for field in [
            "room_width",
            "room_height",
            "stage_bottom_left",
            "stage_width",
            "stage_height",
            "pillars",
            "attendees",
        ] {
            let mut doc = scenario_problem();
            doc.as_object_mut().unwrap().remove(field);

            let err = Problem::from_json(&doc.to_string()).unwrap_err();
            assert!(
                err.to_string().contains(field),
                "error for missing `{field}` was: {err}"
            );
        }
    }

    #[test]
    fn test_musicians_default_to_empty() {
        let mut doc = scenario_problem();
        doc.as_object_mut().unwrap().remove("musicians");

        let problem = Problem::from_json(&doc.to_string()).unwrap();
        assert!(problem.musicians().is_empty());
    }

    #[test]
    fn test_coordinate_must_have_two_numbers() {
        let mut doc = scenario_problem();
        doc["stage_bottom_left"] = json!([1, 2, 3]);
        assert!(Problem::from_json(&doc.to_string()).is_err());

        doc["stage_bottom_left"] = json!([1]);
        assert!(Problem::from_json(&doc.to_string()).is_err());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let mut doc = scenario_problem();
        doc["attendees"] = json!([{"x": 1, "y": 2, "tastes": [1.0, -2.0]}]);

        let problem = Problem::from_json(&doc.to_string()).unwrap();
        assert_eq!(problem.attendees()[0].position(), Point::new(1.0, 2.0));
    }

    #[test]
    fn test_not_json() {
        assert!(Problem::from_json("room_width = 3").is_err());
        assert!(Solution::from_json("").is_err());
    }

    #[test]
    fn test_parse_solution() {
        let solution =
            Solution::from_json(r#"{"placements": [{"x": 1.5, "y": 2}, {"x": 3, "y": 4}]}"#)
                .unwrap();

        assert_eq!(solution.placements().len(), 2);
        assert_eq!(solution.placements()[0].position(), Point::new(1.5, 2.0));
        assert!(Solution::from_json(r#"{"volumes": []}"#).is_err());
    }

    #[test]
    fn test_instrument_display() {
        let ids: Vec<InstrumentId> =
            serde_json::from_value(json!([3, 2.5, "violin", [1, 2], null])).unwrap();
        let shown: Vec<String> = ids.iter().map(ToString::to_string).collect();

        assert_eq!(shown, ["3", "2.5", "violin", "[1,2]", "null"]);
    }
}
