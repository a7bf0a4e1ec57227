// Print layout estimate: static font metrics and per-week page fill.
// Used by the renderer for page-break hints; never reflows content.

pub mod font_metrics;
pub mod page_fill;

pub use font_metrics::{default_page_config, PageConfig};
pub use page_fill::{analyze_week_page, PageFillVerdict};
