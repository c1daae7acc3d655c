//! Turns a problem, and optionally a solution, into a [`Canvas`].
//!
//! Shapes are appended in a fixed order:
//!
//! 1. room outline
//! 2. stage outline
//! 3. pillars
//! 4. attendee markers, each followed by its index label
//! 5. for each placement: halo, center dot, and `"{index}-{instrument}"` label
//!
//! Positions are drawn exactly as given. Nothing here checks that attendees
//! are inside the room or that musicians avoid pillars.

use std::rc::Rc;

use log::{debug, trace};

use stagevis_core::{
    color::Color,
    draw::{Canvas, Circle, Label, Rectangle, StrokeDefinition, TextDefinition},
    geometry::Point,
};

use crate::{
    StagevisError,
    config::StyleConfig,
    model::{Problem, Solution},
};

/// Resolved styling, with every color parsed up front.
#[derive(Debug, Clone)]
struct Theme {
    background: Option<Color>,
    room_stroke: Rc<StrokeDefinition>,
    stage_stroke: Rc<StrokeDefinition>,
    pillar_fill: Color,
    attendee_fill: Color,
    attendee_radius: f64,
    halo_stroke: Rc<StrokeDefinition>,
    halo_radius: f64,
    dot_fill: Color,
    dot_radius: f64,
    text: Rc<TextDefinition>,
}

impl Theme {
    fn from_style(style: &StyleConfig) -> Result<Self, StagevisError> {
        let mut text = TextDefinition::new();
        text.set_font_size(style.font_size());
        text.set_font_family(style.font_family());
        text.set_color(style.label_fill().map_err(StagevisError::Config)?);

        Ok(Self {
            background: style.background_color().map_err(StagevisError::Config)?,
            room_stroke: Rc::new(
                StrokeDefinition::new(style.room_stroke().map_err(StagevisError::Config)?, 1.0)
                    .with_opacity(style.room_stroke_opacity()),
            ),
            stage_stroke: Rc::new(StrokeDefinition::new(
                style.stage_stroke().map_err(StagevisError::Config)?,
                1.0,
            )),
            pillar_fill: style.pillar_fill().map_err(StagevisError::Config)?,
            attendee_fill: style.attendee_fill().map_err(StagevisError::Config)?,
            attendee_radius: style.attendee_radius(),
            halo_stroke: Rc::new(StrokeDefinition::new(
                style.halo_stroke().map_err(StagevisError::Config)?,
                1.0,
            )),
            halo_radius: style.halo_radius(),
            dot_fill: style.dot_fill().map_err(StagevisError::Config)?,
            dot_radius: style.dot_radius(),
            text: Rc::new(text),
        })
    }
}

/// Builds scene canvases with a fixed style.
///
/// # Examples
///
/// ```
/// # use stagevis::{config::StyleConfig, model::Problem, scene::SceneBuilder};
/// let problem = Problem::from_json(r#"{
///     "room_width": 100, "room_height": 100,
///     "stage_bottom_left": [0, 0], "stage_width": 20, "stage_height": 20,
///     "pillars": [], "attendees": [], "musicians": []
/// }"#).unwrap();
///
/// let builder = SceneBuilder::new(&StyleConfig::default()).unwrap();
/// let canvas = builder.draw_problem(&problem);
///
/// // Room and stage outlines only
/// assert_eq!(canvas.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct SceneBuilder {
    theme: Theme,
}

impl SceneBuilder {
    /// Creates a builder for the given style.
    ///
    /// # Errors
    ///
    /// Returns [`StagevisError::Config`] if any configured color is invalid.
    pub fn new(style: &StyleConfig) -> Result<Self, StagevisError> {
        Ok(Self {
            theme: Theme::from_style(style)?,
        })
    }

    /// Draws the problem on a new canvas sized to the room.
    pub fn draw_problem(&self, problem: &Problem) -> Canvas {
        let theme = &self.theme;
        let room_size = problem.room_size();
        let mut canvas = Canvas::new(room_size).with_background(theme.background);

        canvas.push(
            Rectangle::new(Point::default(), room_size).with_stroke(Rc::clone(&theme.room_stroke)),
        );
        canvas.push(
            Rectangle::new(problem.stage_origin(), problem.stage_size())
                .with_stroke(Rc::clone(&theme.stage_stroke)),
        );

        for pillar in problem.pillars() {
            trace!(center:? = pillar.center(), radius = pillar.radius(); "Drawing pillar");
            canvas.push(Circle::new(pillar.center(), pillar.radius()).with_fill(theme.pillar_fill));
        }

        for (index, attendee) in problem.attendees().iter().enumerate() {
            let position = attendee.position();
            canvas.push(Circle::new(position, theme.attendee_radius).with_fill(theme.attendee_fill));
            canvas.push(Label::new(
                position,
                index.to_string(),
                Rc::clone(&theme.text),
            ));
        }

        debug!(
            pillars = problem.pillars().len(),
            attendees = problem.attendees().len(),
            shapes = canvas.len();
            "Problem drawn"
        );

        canvas
    }

    /// Draws the musicians of a solution on top of an existing canvas.
    ///
    /// Placement `i` is labelled with its index and the instrument at
    /// position `i` of the problem's `musicians` list.
    ///
    /// # Errors
    ///
    /// Returns [`StagevisError::MissingInstrument`] if the solution has more
    /// placements than the problem has musicians. The canvas is left
    /// untouched in that case.
    pub fn draw_solution(
        &self,
        canvas: &mut Canvas,
        problem: &Problem,
        solution: &Solution,
    ) -> Result<(), StagevisError> {
        let musicians = problem.musicians().len();
        if solution.placements().len() > musicians {
            return Err(StagevisError::MissingInstrument {
                index: musicians,
                musicians,
            });
        }

        let theme = &self.theme;
        for ((index, placement), instrument) in solution
            .placements()
            .iter()
            .enumerate()
            .zip(problem.musicians())
        {
            let position = placement.position();
            canvas.push(
                Circle::new(position, theme.halo_radius).with_stroke(Rc::clone(&theme.halo_stroke)),
            );
            canvas.push(Circle::new(position, theme.dot_radius).with_fill(theme.dot_fill));
            canvas.push(Label::new(
                position,
                format!("{index}-{instrument}"),
                Rc::clone(&theme.text),
            ));
        }

        debug!(placements = solution.placements().len(), shapes = canvas.len(); "Solution drawn");

        Ok(())
    }

    /// Draws the problem and, if given, the solution on a new canvas.
    ///
    /// # Errors
    ///
    /// See [`SceneBuilder::draw_solution`].
    pub fn build(
        &self,
        problem: &Problem,
        solution: Option<&Solution>,
    ) -> Result<Canvas, StagevisError> {
        let mut canvas = self.draw_problem(problem);
        if let Some(solution) = solution {
            self.draw_solution(&mut canvas, problem, solution)?;
        }
        Ok(canvas)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;
    use serde_json::json;

    use stagevis_core::{draw::Shape, geometry::Size};

    use super::*;

    fn problem(attendees: usize, musicians: usize) -> Problem {
        let attendees: Vec<_> = (0..attendees)
            .map(|i| json!({"x": i as f64 * 3.0, "y": 50}))
            .collect();
        let musicians: Vec<_> = (0..musicians).map(|i| json!(i * 2)).collect();
        let doc = json!({
            "room_width": 100, "room_height": 100,
            "stage_bottom_left": [0, 0], "stage_width": 20, "stage_height": 20,
            "pillars": [], "attendees": attendees, "musicians": musicians
        });
        serde_json::from_value(doc).unwrap()
    }

    fn solution(placements: usize) -> Solution {
        let placements: Vec<_> = (0..placements)
            .map(|i| json!({"x": 10 + i, "y": 10}))
            .collect();
        serde_json::from_value(json!({ "placements": placements })).unwrap()
    }

    fn builder() -> SceneBuilder {
        SceneBuilder::new(&StyleConfig::default()).unwrap()
    }

    fn labels(canvas: &Canvas) -> Vec<&str> {
        canvas
            .shapes()
            .iter()
            .filter_map(Shape::as_label)
            .map(Label::content)
            .collect()
    }

    #[test]
    fn test_empty_problem_has_room_and_stage_only() {
        let canvas = builder().draw_problem(&problem(0, 0));

        assert_eq!(canvas.len(), 2);
        assert!(canvas.shapes().iter().all(|s| s.as_rectangle().is_some()));
    }

    #[test]
    fn test_room_and_stage_outlines() {
        let problem: Problem = serde_json::from_value(json!({
            "room_width": 300, "room_height": 200,
            "stage_bottom_left": [40, 60], "stage_width": 50, "stage_height": 25,
            "pillars": [], "attendees": []
        }))
        .unwrap();
        let canvas = builder().draw_problem(&problem);
        assert_eq!(canvas.size(), Size::new(300.0, 200.0));

        let room = canvas.shapes()[0].as_rectangle().unwrap();
        assert_eq!(room.origin(), Point::new(0.0, 0.0));
        assert_eq!(room.size(), Size::new(300.0, 200.0));
        assert!(room.fill().is_none());
        let room_stroke = room.stroke().unwrap();
        assert_eq!(room_stroke.color(), Color::new("black").unwrap());
        assert!(approx_eq!(f64, room_stroke.opacity(), 0.5));

        let stage = canvas.shapes()[1].as_rectangle().unwrap();
        assert_eq!(stage.origin(), Point::new(40.0, 60.0));
        assert_eq!(stage.size(), Size::new(50.0, 25.0));
        assert!(stage.fill().is_none());
        let stage_stroke = stage.stroke().unwrap();
        assert_eq!(stage_stroke.color(), Color::new("red").unwrap());
        assert!(stage_stroke.is_opaque());
    }

    #[test]
    fn test_pillars_are_filled_circles() {
        let problem: Problem = serde_json::from_value(json!({
            "room_width": 100, "room_height": 100,
            "stage_bottom_left": [0, 0], "stage_width": 20, "stage_height": 20,
            "pillars": [{"center": [30, 40], "radius": 5}, {"center": [60, 70], "radius": 2.5}],
            "attendees": []
        }))
        .unwrap();
        let canvas = builder().draw_problem(&problem);
        assert_eq!(canvas.len(), 4);

        let first = canvas.shapes()[2].as_circle().unwrap();
        assert_eq!(first.center(), Point::new(30.0, 40.0));
        assert!(approx_eq!(f64, first.radius(), 5.0));
        assert_eq!(first.fill(), Some(Color::new("blue").unwrap()));

        let second = canvas.shapes()[3].as_circle().unwrap();
        assert!(approx_eq!(f64, second.radius(), 2.5));
    }

    #[test]
    fn test_attendee_marker_and_label() {
        let canvas = builder().draw_problem(&problem(1, 1));
        assert_eq!(canvas.len(), 4);

        let marker = canvas.shapes()[2].as_circle().unwrap();
        assert_eq!(marker.center(), Point::new(0.0, 50.0));
        assert!(approx_eq!(f64, marker.radius(), 1.0));
        assert_eq!(marker.fill(), Some(Color::new("blue").unwrap()));

        let label = canvas.shapes()[3].as_label().unwrap();
        assert_eq!(label.content(), "0");
        assert_eq!(label.position(), marker.center());
        assert_eq!(label.definition().font_size(), 12);
    }

    #[test]
    fn test_musician_halo_dot_and_label() {
        let problem: Problem = serde_json::from_value(json!({
            "room_width": 100, "room_height": 100,
            "stage_bottom_left": [0, 0], "stage_width": 20, "stage_height": 20,
            "pillars": [], "attendees": [{"x": 50, "y": 50}], "musicians": [3]
        }))
        .unwrap();
        let solution: Solution =
            serde_json::from_value(json!({"placements": [{"x": 50, "y": 50}]})).unwrap();

        let canvas = builder().build(&problem, Some(&solution)).unwrap();
        assert_eq!(canvas.len(), 7);

        let halo = canvas.shapes()[4].as_circle().unwrap();
        assert_eq!(halo.center(), Point::new(50.0, 50.0));
        assert!(approx_eq!(f64, halo.radius(), 10.0));
        assert!(halo.fill().is_none());
        assert_eq!(
            halo.stroke().unwrap().color(),
            Color::new("green").unwrap()
        );

        let dot = canvas.shapes()[5].as_circle().unwrap();
        assert!(approx_eq!(f64, dot.radius(), 5.0));
        assert_eq!(dot.fill(), Some(Color::new("red").unwrap()));
        assert!(dot.stroke().is_none());

        assert_eq!(labels(&canvas), ["0", "0-3"]);
    }

    #[test]
    fn test_string_instruments_are_unquoted() {
        let problem: Problem = serde_json::from_value(json!({
            "room_width": 100, "room_height": 100,
            "stage_bottom_left": [0, 0], "stage_width": 20, "stage_height": 20,
            "pillars": [], "attendees": [], "musicians": ["cello", "oboe"]
        }))
        .unwrap();

        let canvas = builder().build(&problem, Some(&solution(2))).unwrap();

        assert_eq!(labels(&canvas), ["0-cello", "1-oboe"]);
    }

    #[test]
    fn test_too_many_placements_is_an_error() {
        let problem = problem(0, 2);
        let mut canvas = builder().draw_problem(&problem);

        let err = builder()
            .draw_solution(&mut canvas, &problem, &solution(3))
            .unwrap_err();

        assert!(matches!(
            err,
            StagevisError::MissingInstrument {
                index: 2,
                musicians: 2
            }
        ));
        assert_eq!(canvas.len(), 2);
    }

    #[test]
    fn test_invalid_style_color() {
        let style: StyleConfig = serde_json::from_str(r##"{"dot_fill": "#12"}"##).unwrap();

        let err = SceneBuilder::new(&style).unwrap_err();
        assert!(matches!(err, StagevisError::Config(_)));
    }

    #[test]
    fn test_label_fill_comes_from_style() {
        let style: StyleConfig = serde_json::from_str(r#"{"label_fill": "gray"}"#).unwrap();
        let canvas = SceneBuilder::new(&style).unwrap().draw_problem(&problem(1, 0));

        let label = canvas.shapes()[3].as_label().unwrap();
        assert_eq!(label.definition().color(), Some(Color::new("gray").unwrap()));

        let default_canvas = builder().draw_problem(&problem(1, 0));
        let label = default_canvas.shapes()[3].as_label().unwrap();
        assert!(label.definition().color().is_none());
    }

    #[test]
    fn test_coordinates_keep_full_precision() {
        let problem: Problem = serde_json::from_value(json!({
            "room_width": 20000, "room_height": 20000,
            "stage_bottom_left": [0, 0], "stage_width": 20, "stage_height": 20,
            "pillars": [], "attendees": [{"x": 1234.5678901234, "y": 16777217}]
        }))
        .unwrap();
        let canvas = builder().draw_problem(&problem);

        let marker = canvas.shapes()[2].as_circle().unwrap();
        assert_eq!(marker.center(), Point::new(1234.5678901234, 16777217.0));
    }

    #[test]
    fn test_background_comes_from_style() {
        let style: StyleConfig =
            serde_json::from_str(r#"{"background_color": "white"}"#).unwrap();
        let canvas = SceneBuilder::new(&style).unwrap().draw_problem(&problem(0, 0));

        assert_eq!(canvas.background(), Some(Color::new("white").unwrap()));
        assert_eq!(canvas.len(), 2);
    }

    proptest! {
        #[test]
        fn attendee_labels_are_indices(attendees in 0usize..40) {
            let canvas = builder().draw_problem(&problem(attendees, 0));

            prop_assert_eq!(canvas.len(), 2 + 2 * attendees);
            let expected: Vec<String> = (0..attendees).map(|i| i.to_string()).collect();
            prop_assert_eq!(labels(&canvas), expected);
        }

        #[test]
        fn one_triple_per_placement(musicians in 0usize..20, extra in 0usize..5) {
            let placements = musicians.saturating_sub(extra);
            let problem = problem(0, musicians);

            let canvas = builder().build(&problem, Some(&solution(placements))).unwrap();

            prop_assert_eq!(canvas.len(), 2 + 3 * placements);
            let expected: Vec<String> = (0..placements).map(|i| format!("{i}-{}", i * 2)).collect();
            prop_assert_eq!(labels(&canvas), expected);
        }
    }
}
