//! Outcomes and the courses they recommend.
//!
//! Content comes in two shapes: an outcome either embeds its course or
//! names a program in a separate document. Both collapse into
//! [`OutcomeCourse`] and are resolved by the graph behind one accessor.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OutcomeId, ProgramId};

/// A recommended course of study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub campus: String,
    pub url: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Course {
    /// Returns notes only when they contain something besides whitespace.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }
}

/// An entry in the programs document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub id: ProgramId,
    #[serde(flatten)]
    pub course: Course,
}

/// Where an outcome's course comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeCourse {
    Embedded(Course),
    Referenced(ProgramId),
}

/// An outcome as authored in the questions document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeRecord {
    pub id: OutcomeId,
    pub title: String,
    pub blurb: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub course: Option<Course>,
    #[serde(default)]
    pub program_id: Option<ProgramId>,
}

/// Terminal node of the question graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    id: OutcomeId,
    title: String,
    blurb: String,
    description: Option<String>,
    course: Option<OutcomeCourse>,
}

impl Outcome {
    /// Converts an authored record. An embedded course wins over a program id.
    pub fn from_record(record: OutcomeRecord) -> Self {
        let course = match (record.course, record.program_id) {
            (Some(course), _) => Some(OutcomeCourse::Embedded(course)),
            (None, Some(program_id)) => Some(OutcomeCourse::Referenced(program_id)),
            (None, None) => None,
        };

        Self {
            id: record.id,
            title: record.title,
            blurb: record.blurb,
            description: record.description.filter(|d| !d.trim().is_empty()),
            course,
        }
    }

    pub fn id(&self) -> &OutcomeId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn blurb(&self) -> &str {
        &self.blurb
    }

    /// Long-form markdown description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn course(&self) -> Option<&OutcomeCourse> {
        self.course.as_ref()
    }
}

/// An outcome joined with the course it recommends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedOutcome<'g> {
    pub outcome: &'g Outcome,
    pub course: &'g Course,
}
