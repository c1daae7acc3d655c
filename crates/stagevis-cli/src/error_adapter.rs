//! Error adapter for converting StagevisError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use stagevis::StagevisError;

/// Adapter giving a [`StagevisError`] a diagnostic code and help text.
pub struct ErrorAdapter<'a>(pub &'a StagevisError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            StagevisError::Io { .. } => "stagevis::io",
            StagevisError::Parse { .. } => "stagevis::parse",
            StagevisError::MissingInstrument { .. } => "stagevis::index",
            StagevisError::Config(_) => "stagevis::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            StagevisError::MissingInstrument { .. } => {
                "every placement needs an entry at the same index in the problem's `musicians` list"
            }
            StagevisError::Parse { .. } => {
                "a problem needs room_width, room_height, stage_bottom_left, stage_width, \
                 stage_height, pillars and attendees; a solution needs placements"
            }
            StagevisError::Io { .. } | StagevisError::Config(_) => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
