//! Document renderer: turns a `CurriculumSeries` into a cover page followed
//! by one page per week, in array order.
//!
//! Rendering is a pure function of the series, the generation date and the
//! page config. The renderer never validates content: blank fields render
//! as empty text.

pub mod html;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::layout::{analyze_week_page, PageConfig, PageFillVerdict};
use crate::models::{CurriculumSeries, TeachingPoint, WeekContent};

#[derive(Debug, Clone, Serialize)]
pub struct CoverPage {
    pub title: String,
    pub description: String,
    /// Rendered as "{target_audience} Series".
    pub audience_badge: String,
    pub week_count: usize,
    pub generated_on: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeekHeader {
    /// "Week N", N = 1-based array position.
    pub label: String,
    pub title: String,
    pub scripture_reference: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeekSidebar {
    pub key_verse: String,
    pub main_idea: String,
    pub learning_objective: String,
    pub activity_idea: String,
    pub application_challenge: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeekBody {
    pub hook: String,
    pub teaching_points: Vec<TeachingPoint>,
    pub discussion_questions: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeekPage {
    pub header: WeekHeader,
    pub sidebar: WeekSidebar,
    pub body: WeekBody,
    /// 1-based position in the whole document; the cover is page 1.
    pub page_number: usize,
    /// False when the page is likely to spill past one printed sheet.
    pub keep_together: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Page {
    Cover(CoverPage),
    Week(WeekPage),
}

/// Lays out the series as `weeks.len() + 1` pages.
pub fn render_series(
    series: &CurriculumSeries,
    generated_on: NaiveDate,
    config: &PageConfig,
) -> Vec<Page> {
    let mut pages = Vec::with_capacity(series.weeks.len() + 1);

    pages.push(Page::Cover(CoverPage {
        title: series.title.clone(),
        description: series.description.clone(),
        audience_badge: format!("{} Series", series.target_audience),
        week_count: series.weeks.len(),
        generated_on,
    }));

    for (index, week) in series.weeks.iter().enumerate() {
        pages.push(Page::Week(render_week(index, week, config)));
    }

    pages
}

fn render_week(index: usize, week: &WeekContent, config: &PageConfig) -> WeekPage {
    let fill = analyze_week_page(week, config);
    if fill.verdict == PageFillVerdict::Overflows {
        info!(
            "Week {} estimated at {} lines (~{} sheets); allowing breaks inside",
            index + 1,
            fill.total_lines_used,
            fill.estimated_sheets
        );
    }

    WeekPage {
        header: WeekHeader {
            label: format!("Week {}", index + 1),
            title: week.title.clone(),
            scripture_reference: week.scripture_reference.clone(),
        },
        sidebar: WeekSidebar {
            key_verse: week.key_verse.clone(),
            main_idea: week.main_idea.clone(),
            learning_objective: week.learning_objective.clone(),
            activity_idea: week.activity_idea.clone(),
            application_challenge: week.application_challenge.clone(),
        },
        body: WeekBody {
            hook: week.hook.clone(),
            teaching_points: week.teaching_points.clone(),
            discussion_questions: week.discussion_questions.clone(),
        },
        page_number: index + 2,
        keep_together: fill.verdict == PageFillVerdict::FitsOneSheet,
    }
}
