//! Stagevis - renders a stage placement problem, and optionally a solution,
//! to an SVG image for visual inspection.
//!
//! A problem describes a room, a stage inside it, circular pillars, and
//! attendee positions. A solution places the problem's musicians. The
//! rendering shows all of them with index labels so that a placement can be
//! checked by eye.

pub mod config;
pub mod model;
pub mod scene;

mod error;

pub use stagevis_core::{color, draw, geometry};

pub use error::StagevisError;

use std::{fs, io::Write, path::Path};

use log::{debug, error, info};
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;

use config::AppConfig;
use model::{Problem, Solution};
use scene::SceneBuilder;

/// Renders problems and solutions to SVG.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
///
/// use stagevis::{Renderer, config::AppConfig};
///
/// let renderer = Renderer::new(&AppConfig::default())
///     .expect("Default style is valid");
///
/// renderer
///     .render_to_file(
///         Path::new("out.svg"),
///         Path::new("problem.json"),
///         Some(Path::new("solution.json")),
///     )
///     .expect("Failed to render");
/// ```
#[derive(Debug, Clone)]
pub struct Renderer {
    scene: SceneBuilder,
}

impl Renderer {
    /// Create a new renderer with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StagevisError::Config`] if the style configuration contains
    /// an invalid color.
    pub fn new(config: &AppConfig) -> Result<Self, StagevisError> {
        Ok(Self {
            scene: SceneBuilder::new(config.style())?,
        })
    }

    /// Render a problem and optional solution to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`StagevisError::MissingInstrument`] if the solution has more
    /// placements than the problem has musicians.
    pub fn render_svg(
        &self,
        problem: &Problem,
        solution: Option<&Solution>,
    ) -> Result<String, StagevisError> {
        let canvas = self.scene.build(problem, solution)?;
        Ok(canvas.to_document().to_string())
    }

    /// Read the input documents, draw them, and write the SVG to `output`.
    ///
    /// The solution file is only read if `solution_path` is given. The output
    /// file is created only after the whole scene has been drawn, and any
    /// existing file at `output` is overwritten.
    ///
    /// # Errors
    ///
    /// Returns `StagevisError` for:
    /// - Unreadable input or unwritable output
    /// - Input that is not valid JSON or lacks required fields
    /// - A placement without a matching instrument
    pub fn render_to_file(
        &self,
        output: &Path,
        problem_path: &Path,
        solution_path: Option<&Path>,
    ) -> Result<(), StagevisError> {
        let problem = load_problem(problem_path)?;
        info!(
            musicians = problem.musicians().len(),
            attendees = problem.attendees().len(),
            pillars = problem.pillars().len();
            "Problem loaded"
        );

        let mut canvas = self.scene.draw_problem(&problem);

        if let Some(solution_path) = solution_path {
            let solution = load_solution(solution_path)?;
            info!(placements = solution.placements().len(); "Solution loaded");
            self.scene.draw_solution(&mut canvas, &problem, &solution)?;
        }

        let svg = canvas.to_document().to_string();
        debug!(bytes = svg.len(); "SVG document rendered");

        write_output(output, &svg)
    }
}

/// Read and parse a problem document.
///
/// # Errors
///
/// Returns [`StagevisError::Io`] if the file cannot be read and
/// [`StagevisError::Parse`] if it is not a valid problem.
pub fn load_problem(path: &Path) -> Result<Problem, StagevisError> {
    read_json(path)
}

/// Read and parse a solution document.
///
/// # Errors
///
/// Returns [`StagevisError::Io`] if the file cannot be read and
/// [`StagevisError::Parse`] if it is not a valid solution.
pub fn load_solution(path: &Path) -> Result<Solution, StagevisError> {
    read_json(path)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StagevisError> {
    info!(path = path.display().to_string(); "Reading input");
    let source = fs::read_to_string(path).map_err(|err| StagevisError::io(path, err))?;
    serde_json::from_str(&source).map_err(|err| StagevisError::parse(path, err))
}

/// Writes `svg` next to `path` and renames it into place, so `path` never
/// holds a partial document.
fn write_output(path: &Path, svg: &str) -> Result<(), StagevisError> {
    info!(path = path.display().to_string(); "Writing SVG file");
    persist_output(path, svg).map_err(|err| {
        error!(path = path.display().to_string(), err:err; "Failed to write SVG file");
        StagevisError::io(path, err)
    })
}

fn persist_output(path: &Path, svg: &str) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(svg.as_bytes())?;
    file.persist(path).map_err(|err| err.error)?;
    Ok(())
}
