use serde::{Deserialize, Serialize};

use crate::models::{CurriculumSeries, WeekContent};

pub const EXPECTED_TEACHING_POINTS: usize = 3;
pub const EXPECTED_DISCUSSION_QUESTIONS: usize = 5;

/// A deviation from the requested shape that still renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesGap {
    /// 1-based page position of the week, or `None` for series-level gaps.
    pub week_index: Option<usize>,
    pub field: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesValidationResult {
    /// False when the reply cannot be rendered as a document at all.
    pub passed: bool,
    pub rejection: Option<String>,
    pub gaps: Vec<SeriesGap>,
}

/// Validates a parsed reply before it reaches the renderer.
///
/// REJECT conditions:
/// - No weeks
/// - Blank series title
///
/// GAP conditions (logged, rendered as-is):
/// - Week count differs from the requested duration
/// - Teaching points != 3, discussion questions != 5
/// - Any blank text field
pub fn validate_series(series: &CurriculumSeries, requested_weeks: u8) -> SeriesValidationResult {
    if series.weeks.is_empty() {
        return rejected("series has no weeks");
    }
    if series.title.trim().is_empty() {
        return rejected("series title is blank");
    }

    let mut gaps = Vec::new();

    if series.weeks.len() != requested_weeks as usize {
        gaps.push(SeriesGap {
            week_index: None,
            field: "weeks".to_string(),
            reason: format!(
                "requested {requested_weeks} weeks, received {}",
                series.weeks.len()
            ),
        });
    }

    for (field, value) in [
        ("description", &series.description),
        ("target_audience", &series.target_audience),
    ] {
        if value.trim().is_empty() {
            gaps.push(blank(None, field));
        }
    }

    for (i, week) in series.weeks.iter().enumerate() {
        gaps.extend(week_gaps(i + 1, week));
    }

    SeriesValidationResult {
        passed: true,
        rejection: None,
        gaps,
    }
}

fn week_gaps(index: usize, week: &WeekContent) -> Vec<SeriesGap> {
    let mut gaps = Vec::new();

    for (field, value) in [
        ("title", &week.title),
        ("scripture_reference", &week.scripture_reference),
        ("key_verse", &week.key_verse),
        ("main_idea", &week.main_idea),
        ("learning_objective", &week.learning_objective),
        ("hook", &week.hook),
        ("application_challenge", &week.application_challenge),
        ("activity_idea", &week.activity_idea),
    ] {
        if value.trim().is_empty() {
            gaps.push(blank(Some(index), field));
        }
    }

    if week.teaching_points.len() != EXPECTED_TEACHING_POINTS {
        gaps.push(SeriesGap {
            week_index: Some(index),
            field: "teaching_points".to_string(),
            reason: format!(
                "expected {EXPECTED_TEACHING_POINTS}, received {}",
                week.teaching_points.len()
            ),
        });
    }
    if week
        .teaching_points
        .iter()
        .any(|tp| tp.point.trim().is_empty() || tp.description.trim().is_empty())
    {
        gaps.push(blank(Some(index), "teaching_points"));
    }

    if week.discussion_questions.len() != EXPECTED_DISCUSSION_QUESTIONS {
        gaps.push(SeriesGap {
            week_index: Some(index),
            field: "discussion_questions".to_string(),
            reason: format!(
                "expected {EXPECTED_DISCUSSION_QUESTIONS}, received {}",
                week.discussion_questions.len()
            ),
        });
    }
    if week.discussion_questions.iter().any(|q| q.trim().is_empty()) {
        gaps.push(blank(Some(index), "discussion_questions"));
    }

    gaps
}

fn blank(week_index: Option<usize>, field: &str) -> SeriesGap {
    SeriesGap {
        week_index,
        field: field.to_string(),
        reason: "blank".to_string(),
    }
}

fn rejected(reason: &str) -> SeriesValidationResult {
    SeriesValidationResult {
        passed: false,
        rejection: Some(reason.to_string()),
        gaps: vec![],
    }
}
