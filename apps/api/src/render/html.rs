//! Print-ready HTML for a rendered page sequence.
//!
//! One `<article>` per page with `break-after: page` between them. The action
//! bar is screen-only and hands printing to the browser's own dialog.

use std::fmt::Write;

use crate::layout::PageConfig;
use crate::render::{CoverPage, Page, WeekPage};

const FOOTER_LABEL: &str = "PARABLE CURRICULUM";

/// Escapes model-supplied text for element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn stylesheet(config: &PageConfig) -> String {
    format!(
        r#"@page {{ size: letter; margin: {margin}in; }}
body {{ margin: 0; font-family: {body}; font-size: {size}pt; line-height: 1.4; color: #1f1f1f; background: #fff; }}
h1, h2, h4, blockquote, .serif {{ font-family: {heading}; }}
.page {{ max-width: 64rem; margin: 0 auto; padding: 3rem 2rem; break-after: page; page-break-after: always; }}
.page:last-of-type {{ break-after: auto; page-break-after: auto; }}
.keep {{ break-inside: avoid; }}
.flow {{ break-inside: auto; }}
.cover {{ min-height: 90vh; display: flex; flex-direction: column; justify-content: center; text-align: center; }}
.badge {{ display: inline-block; border: 1px solid #000; border-radius: 999px; padding: 0.2rem 0.8rem; font-size: 0.7rem; font-weight: 700; letter-spacing: 0.2em; text-transform: uppercase; }}
.label {{ display: block; font-size: 0.7rem; font-weight: 700; letter-spacing: 0.2em; text-transform: uppercase; color: #6b6b6b; }}
.week-header {{ display: flex; justify-content: space-between; align-items: flex-end; border-bottom: 4px solid #000; padding-bottom: 1.5rem; margin-bottom: 3rem; }}
.grid {{ display: grid; grid-template-columns: {sidebar}fr {bodyfr}fr; gap: 3rem; }}
.key-verse {{ background: #f7f4ee; border-left: 4px solid #1f1f1f; padding: 1.5rem; font-style: italic; }}
.engagement {{ border: 1px solid #000; padding: 1.5rem; }}
.point {{ border-left: 2px solid #ddd; padding-left: 2rem; margin-bottom: 2.5rem; }}
.footer {{ display: flex; justify-content: space-between; margin-top: 3rem; padding-top: 1.5rem; border-top: 1px solid #eee; font-family: monospace; font-size: 0.7rem; color: #999; }}
.actions {{ position: fixed; bottom: 2rem; left: 50%; transform: translateX(-50%); display: flex; gap: 0.5rem; }}
@media print {{ .actions {{ display: none; }} .page {{ padding: 0; max-width: none; }} }}"#,
        margin = config.margin_in,
        body = config.body_font.css_stack(),
        heading = config.heading_font.css_stack(),
        size = config.font_size_pt,
        sidebar = config.sidebar_fraction,
        bodyfr = config.body_fraction,
    )
}

/// Renders the full page sequence as one standalone HTML document.
pub fn render_document(pages: &[Page], config: &PageConfig) -> String {
    let title = pages
        .iter()
        .find_map(|p| match p {
            Page::Cover(cover) => Some(cover.title.as_str()),
            Page::Week(_) => None,
        })
        .unwrap_or("Curriculum");

    let mut out = String::new();
    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>\n{}\n</style>\n</head>\n<body>\n",
        escape_html(title),
        stylesheet(config)
    );

    out.push_str(
        "<nav class=\"actions\">\
         <button type=\"button\" onclick=\"resetSeries()\">New</button>\
         <button type=\"button\" onclick=\"window.print()\">Print PDF</button>\
         </nav>\n",
    );
    out.push_str(RESET_SCRIPT);

    for page in pages {
        match page {
            Page::Cover(cover) => write_cover(&mut out, cover),
            Page::Week(week) => write_week(&mut out, week),
        }
    }

    out.push_str("</body>\n</html>\n");
    out
}

/// Clears the session in place; the page stays put and shows a notice.
const RESET_SCRIPT: &str = "<script>\n\
function resetSeries() {\n\
  fetch('/api/v1/series/reset', { method: 'POST' }).then(function (r) {\n\
    if (!r.ok) { return; }\n\
    document.body.innerHTML = '<p class=\"notice\">Series cleared. Start a new one from the generator.</p>';\n\
  });\n\
}\n\
</script>\n";

fn write_cover(out: &mut String, cover: &CoverPage) {
    let _ = write!(
        out,
        "<article class=\"page cover keep\">\n\
         <div><span class=\"badge\">{badge}</span></div>\n\
         <h1>{title}</h1>\n\
         <p class=\"serif\"><em>{description}</em></p>\n\
         <dl>\n\
         <dt class=\"label\">Duration</dt><dd class=\"serif\">{weeks} Weeks</dd>\n\
         <dt class=\"label\">Date Generated</dt><dd class=\"serif\">{date}</dd>\n\
         </dl>\n\
         <p class=\"label\">Generated with Parable</p>\n\
         </article>\n",
        badge = escape_html(&cover.audience_badge),
        title = escape_html(&cover.title),
        description = escape_html(&cover.description),
        weeks = cover.week_count,
        date = cover.generated_on.format("%-m/%-d/%Y"),
    );
}

fn write_week(out: &mut String, week: &WeekPage) {
    let class = if week.keep_together { "keep" } else { "flow" };

    let _ = write!(
        out,
        "<article class=\"page {class}\">\n\
         <header class=\"week-header\">\n\
         <div><span class=\"label\">{label}</span><h2>{title}</h2></div>\n\
         <div><span class=\"label\">Scripture</span><div class=\"serif\"><em>{scripture}</em></div></div>\n\
         </header>\n\
         <div class=\"grid\">\n",
        label = escape_html(&week.header.label),
        title = escape_html(&week.header.title),
        scripture = escape_html(&week.header.scripture_reference),
    );

    let s = &week.sidebar;
    let _ = write!(
        out,
        "<aside>\n\
         <section class=\"key-verse\"><h3 class=\"label\">Key Verse</h3><blockquote>&ldquo;{verse}&rdquo;</blockquote></section>\n\
         <section><h3 class=\"label\">The Big Idea</h3><p>{main_idea}</p></section>\n\
         <section><h3 class=\"label\">Learning Objective</h3><p>{objective}</p></section>\n\
         <section class=\"engagement\"><h3 class=\"label\">Engagement</h3>\n\
         <h4>Activity Idea</h4><p>{activity}</p>\n\
         <h4>Weekly Challenge</h4><p>{challenge}</p>\n\
         </section>\n\
         </aside>\n",
        verse = escape_html(&s.key_verse),
        main_idea = escape_html(&s.main_idea),
        objective = escape_html(&s.learning_objective),
        activity = escape_html(&s.activity_idea),
        challenge = escape_html(&s.application_challenge),
    );

    let b = &week.body;
    let _ = write!(
        out,
        "<main>\n<section><h3 class=\"label\">The Hook</h3><div class=\"serif\">{}</div></section>\n\
         <section><h3 class=\"label\">Teaching Guide</h3>\n",
        escape_html(&b.hook)
    );
    for tp in &b.teaching_points {
        let _ = writeln!(
            out,
            "<div class=\"point\"><h4>{}</h4><p>{}</p></div>",
            escape_html(&tp.point),
            escape_html(&tp.description)
        );
    }
    out.push_str("</section>\n<section><h3 class=\"label\">Discussion</h3>\n<ol>\n");
    for q in &b.discussion_questions {
        let _ = writeln!(out, "<li>{}</li>", escape_html(q));
    }
    out.push_str("</ol>\n</section>\n</main>\n</div>\n");

    let _ = write!(
        out,
        "<footer class=\"footer\"><span>{FOOTER_LABEL}</span><span>PAGE {}</span></footer>\n</article>\n",
        week.page_number
    );
}
