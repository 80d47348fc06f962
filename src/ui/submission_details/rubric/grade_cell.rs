// SPDX-License-Identifier: MPL-2.0
//! Grade summary shown at the top of the rubric when the assignment is
//! graded by rubric.

use crate::canvas::models::{Assignment, Submission};
use crate::i18n::fluent::I18n;
use crate::util::{format_points, month_day_at_time};
use chrono::Local;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradeCellState {
    Empty,
    Submitted { title: String, details: String },
    Graded(GradeData),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeData {
    pub score: String,
    pub out_of: String,
    pub grade: Option<String>,
    pub late_penalty: Option<String>,
    pub final_grade: Option<String>,
}

/// Derives the grade summary from a submission. Excused submissions show the
/// excused label in place of a score. When a late penalty was applied, the
/// score and grade shown are the pre-penalty values and the penalized result
/// moves to the final grade line.
pub fn grade_cell_state(
    assignment: &Assignment,
    submission: &Submission,
    i18n: &I18n,
) -> GradeCellState {
    let possible = format_points(assignment.points_possible);
    let out_of = i18n.tr_with_args("grade-cell-out-of", &[("possible", &possible)]);

    if submission.excused {
        return GradeCellState::Graded(GradeData {
            score: i18n.tr("grade-cell-excused"),
            out_of,
            grade: None,
            late_penalty: None,
            final_grade: None,
        });
    }

    if submission.is_graded() {
        let penalty = submission.points_deducted.filter(|points| *points > 0.0);
        let score = format_points(
            submission
                .entered_score
                .or(submission.score)
                .unwrap_or_default(),
        );
        let grade = if penalty.is_some() {
            submission.entered_grade.clone()
        } else {
            submission.grade.clone()
        };
        let grade = grade.filter(|g| !g.trim().is_empty());

        let (late_penalty, final_grade) = match penalty {
            Some(points) => {
                let deducted = format_points(points);
                let result = submission
                    .grade
                    .clone()
                    .filter(|g| !g.trim().is_empty())
                    .unwrap_or_else(|| format_points(submission.score.unwrap_or_default()));
                (
                    Some(i18n.tr_with_args("grade-cell-late-penalty", &[("points", &deducted)])),
                    Some(i18n.tr_with_args("grade-cell-final-grade", &[("grade", &result)])),
                )
            }
            None => (None, None),
        };

        return GradeCellState::Graded(GradeData {
            score,
            out_of,
            grade,
            late_penalty,
            final_grade,
        });
    }

    if let Some(submitted_at) = submission.submitted_at {
        let at_word = i18n.tr("date-at");
        let date = month_day_at_time(&submitted_at.with_timezone(&Local), &at_word);
        return GradeCellState::Submitted {
            title: i18n.tr("grade-cell-submitted"),
            details: format!("{date}. {}", i18n.tr("grade-cell-submitted-details")),
        };
    }

    GradeCellState::Empty
}
