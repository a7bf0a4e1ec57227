//! Page Fill Estimate: how many printed sheets a week page is likely to take.
//!
//! The two columns are measured independently; the taller column plus the
//! header decides the total. The renderer uses the verdict as a page-break
//! hint only.

use serde::{Deserialize, Serialize};

use crate::layout::font_metrics::{get_metrics, PageConfig};
use crate::models::WeekContent;

/// Fixed lines for the week header (label, title, rule).
const HEADER_LINES: u16 = 5;
/// Section label plus spacing above each block.
const SECTION_OVERHEAD_LINES: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageFillVerdict {
    FitsOneSheet,
    Overflows,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageFillAnalysis {
    pub sidebar_lines: u16,
    pub body_lines: u16,
    pub total_lines_used: u16,
    pub total_lines_available: u16,
    pub estimated_sheets: u16,
    pub verdict: PageFillVerdict,
}

/// Estimates the printed height of one week page.
pub fn analyze_week_page(week: &WeekContent, config: &PageConfig) -> PageFillAnalysis {
    let body = get_metrics(config.body_font);
    let heading = get_metrics(config.heading_font);
    let sidebar_w = config.sidebar_width_em();
    let body_w = config.body_width_em();

    let sidebar_lines: u16 = [
        heading.wrapped_lines(&week.key_verse, sidebar_w),
        body.wrapped_lines(&week.main_idea, sidebar_w),
        body.wrapped_lines(&week.learning_objective, sidebar_w),
        body.wrapped_lines(&week.activity_idea, sidebar_w),
        body.wrapped_lines(&week.application_challenge, sidebar_w),
    ]
    .iter()
    .map(|l| l.saturating_add(SECTION_OVERHEAD_LINES))
    .fold(0u16, u16::saturating_add);

    let points: u16 = week
        .teaching_points
        .iter()
        .map(|tp| {
            heading
                .wrapped_lines(&tp.point, body_w)
                .saturating_add(body.wrapped_lines(&tp.description, body_w))
                .saturating_add(1)
        })
        .fold(0u16, u16::saturating_add);
    let questions: u16 = week
        .discussion_questions
        .iter()
        .map(|q| body.wrapped_lines(q, body_w))
        .fold(0u16, u16::saturating_add);
    let body_lines = heading
        .wrapped_lines(&week.hook, body_w)
        .saturating_add(points)
        .saturating_add(questions)
        .saturating_add(3 * SECTION_OVERHEAD_LINES);

    let total_lines_used = HEADER_LINES.saturating_add(sidebar_lines.max(body_lines));
    let available = config.usable_height_lines.max(1);
    let estimated_sheets = total_lines_used.div_ceil(available).max(1);

    let verdict = if total_lines_used <= available {
        PageFillVerdict::FitsOneSheet
    } else {
        PageFillVerdict::Overflows
    };

    PageFillAnalysis {
        sidebar_lines,
        body_lines,
        total_lines_used,
        total_lines_available: available,
        estimated_sheets,
        verdict,
    }
}
