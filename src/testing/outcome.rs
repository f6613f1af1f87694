//! Step outcomes and the console report

use std::fmt;

use colored::Colorize;
use reqwest::{Method, StatusCode};

use crate::api::{ApiResponse, ShootId};
use crate::common::{Error, Result};

/// The seven steps, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    ListShoots,
    CreateShoot,
    ReadShoot,
    UpdateShoot,
    AttachPhoto,
    ListShootPhotos,
    DeleteShoot,
}

impl StepKind {
    pub const ALL: [StepKind; 7] = [
        StepKind::ListShoots,
        StepKind::CreateShoot,
        StepKind::ReadShoot,
        StepKind::UpdateShoot,
        StepKind::AttachPhoto,
        StepKind::ListShootPhotos,
        StepKind::DeleteShoot,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StepKind::ListShoots => "ListShoots",
            StepKind::CreateShoot => "CreateShoot",
            StepKind::ReadShoot => "ReadShoot",
            StepKind::UpdateShoot => "UpdateShoot",
            StepKind::AttachPhoto => "AttachPhoto",
            StepKind::ListShootPhotos => "ListShootPhotos",
            StepKind::DeleteShoot => "DeleteShoot",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The call completed with a 2xx status
    Success,
    /// The call completed with any other status
    Failed { status: StatusCode },
    /// The call, or decoding its result, raised an error
    Exception { message: String },
}

impl Outcome {
    pub fn tag(&self) -> &'static str {
        match self {
            Outcome::Success => "SUCCESS",
            Outcome::Failed { .. } => "FAILED",
            Outcome::Exception { .. } => "EXCEPTION",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    pub fn exception(error: &Error) -> Self {
        Outcome::Exception {
            message: error.to_string(),
        }
    }
}

/// Classify a completed or failed call by status code alone
pub fn classify(result: &Result<ApiResponse>) -> Outcome {
    match result {
        Ok(response) if response.is_success() => Outcome::Success,
        Ok(response) => Outcome::Failed {
            status: response.status,
        },
        Err(e) => Outcome::exception(e),
    }
}

/// Everything one step observed
#[derive(Debug, Clone)]
pub struct StepReport {
    pub step: StepKind,
    pub method: Method,
    pub path: String,
    /// None when the call raised before a status arrived
    pub status: Option<StatusCode>,
    pub body: Option<String>,
    /// Set by the create step when the response carried an identifier
    pub extracted_id: Option<ShootId>,
    pub outcome: Outcome,
}

impl StepReport {
    /// Plain-text report lines, in print order
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!("{} {}:", self.method, self.path)];
        if let Some(status) = self.status {
            lines.push(format!("Status Code: {status}"));
        }
        if let Some(body) = self.body.as_deref().filter(|b| !b.is_empty()) {
            lines.push(format!("Response: {body}"));
        }
        if let Some(id) = self.extracted_id {
            lines.push(format!("Extracted shoot id: {id}"));
        }
        lines.push(self.outcome_line());
        lines
    }

    pub fn outcome_line(&self) -> String {
        self.format_outcome(self.outcome.tag())
    }

    /// Print the report to stdout with a colored outcome tag
    pub fn print(&self) {
        let lines = self.lines();
        for line in &lines[..lines.len() - 1] {
            println!("{line}");
        }

        let tag = match &self.outcome {
            Outcome::Success => self.outcome.tag().green().bold(),
            Outcome::Failed { .. } => self.outcome.tag().red().bold(),
            Outcome::Exception { .. } => self.outcome.tag().yellow().bold(),
        };
        println!("{}", self.format_outcome(tag));
    }

    fn format_outcome(&self, tag: impl fmt::Display) -> String {
        match &self.outcome {
            Outcome::Exception { message } => format!("{}: {} - {}", self.step, tag, message),
            _ => format!("{}: {}", self.step, tag),
        }
    }
}

/// Reports of a full run plus the identifier threaded through it
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Identifier used by steps 3-7
    pub shoot_id: ShootId,
    pub reports: Vec<StepReport>,
}

impl RunSummary {
    pub fn report(&self, step: StepKind) -> Option<&StepReport> {
        self.reports.iter().find(|r| r.step == step)
    }

    pub fn passed(&self) -> usize {
        self.reports.iter().filter(|r| r.outcome.is_success()).count()
    }

    pub fn outcome_lines(&self) -> Vec<String> {
        self.reports.iter().map(StepReport::outcome_line).collect()
    }
}
