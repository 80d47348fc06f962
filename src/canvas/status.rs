// SPDX-License-Identifier: MPL-2.0
//! Derives a display status for a submission against its assignment.

use crate::canvas::models::{Assignment, Submission};
use chrono::{DateTime, Utc};

/// Where a submission stands relative to the assignment's due date and
/// grading state. Precedence: excused, then graded, then missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    NotSubmitted,
    Missing,
    Submitted,
    Late,
    Graded,
    /// Graded without the student ever submitting, past the due date.
    GradedMissing,
    Excused,
}

impl SubmissionStatus {
    pub fn is_missing(self) -> bool {
        matches!(self, Self::Missing | Self::GradedMissing)
    }
}

/// Computes a submission's status at the given instant.
///
/// `now` is passed in rather than read from the clock so the result is a
/// pure function of its inputs.
pub fn submission_status(
    assignment: &Assignment,
    submission: Option<&Submission>,
    now: DateTime<Utc>,
) -> SubmissionStatus {
    let Some(submission) = submission else {
        return if past_due(assignment, now) {
            SubmissionStatus::Missing
        } else {
            SubmissionStatus::NotSubmitted
        };
    };

    if submission.excused {
        return SubmissionStatus::Excused;
    }

    let never_submitted = submission.attempt == 0 && submission.submitted_at.is_none();
    let missing = submission.missing || (never_submitted && past_due(assignment, now));

    if submission.is_graded() {
        return if missing {
            SubmissionStatus::GradedMissing
        } else {
            SubmissionStatus::Graded
        };
    }
    if missing {
        return SubmissionStatus::Missing;
    }
    if never_submitted {
        return SubmissionStatus::NotSubmitted;
    }
    if submission.late {
        return SubmissionStatus::Late;
    }
    SubmissionStatus::Submitted
}

fn past_due(assignment: &Assignment, now: DateTime<Utc>) -> bool {
    assignment.due_at.is_some_and(|due| due < now)
}
