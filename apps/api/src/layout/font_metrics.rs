//! Static font-metric tables for the two print typefaces.
//!
//! Character widths are in em units (relative to font size). Browsers lay out
//! with real glyph metrics; these tables only need to be close enough to tell
//! a week that fits one sheet from one that clearly spills onto a second.
//! All tables cover ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32.

use serde::{Deserialize, Serialize};

/// Typefaces used by the print stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFamily {
    /// Body and sidebar text.
    Inter,
    /// Headings, key verse and hook.
    EbGaramond,
}

impl FontFamily {
    pub fn css_stack(&self) -> &'static str {
        match self {
            FontFamily::Inter => "'Inter', 'Helvetica Neue', Arial, sans-serif",
            FontFamily::EbGaramond => "'EB Garamond', Georgia, 'Times New Roman', serif",
        }
    }
}

/// Printed page geometry for a week page.
///
/// Example: US letter, 0.75" margins, 10pt → 7.0" × (72.27pt/in ÷ 10pt) ≈ 50.6em.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub body_font: FontFamily,
    pub heading_font: FontFamily,
    pub font_size_pt: u8,
    /// Full usable text width in em units.
    pub text_width_em: f32,
    pub margin_in: f32,
    /// Share of the text width given to the sidebar column.
    pub sidebar_fraction: f32,
    /// Share of the text width given to the body column.
    pub body_fraction: f32,
    /// Line slots on one sheet at the body line height.
    pub usable_height_lines: u16,
}

/// Letter paper, 0.75" margins, 10pt, 1.4 line height.
pub fn default_page_config() -> PageConfig {
    PageConfig {
        body_font: FontFamily::Inter,
        heading_font: FontFamily::EbGaramond,
        font_size_pt: 10,
        text_width_em: 50.6,
        margin_in: 0.75,
        sidebar_fraction: 0.32,
        body_fraction: 0.62,
        usable_height_lines: 49,
    }
}

impl PageConfig {
    pub fn sidebar_width_em(&self) -> f32 {
        self.text_width_em * self.sidebar_fraction
    }

    pub fn body_width_em(&self) -> f32 {
        self.text_width_em * self.body_fraction
    }
}

/// Static character-width table for a font family.
///
/// `widths[i]` = width of ASCII character `(i + 32)`.
pub struct FontMetricTable {
    widths: [f32; 95],
    /// Fallback width for non-ASCII characters (codepoints > 0x7E).
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Greedy word-wrap line count for `s` in a column `width_em` wide.
    pub fn wrapped_lines(&self, s: &str, width_em: f32) -> u16 {
        let mut words = s.split_whitespace();
        let Some(first) = words.next() else {
            return 0;
        };

        let mut lines = 1u16;
        let mut current = self.measure_str(first);
        for word in words {
            let w = self.measure_str(word);
            if current + self.space_width + w > width_em {
                lines = lines.saturating_add(1);
                current = w;
            } else {
                current += self.space_width + w;
            }
        }
        lines
    }
}

static INTER_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.25, 0.30, 0.38, 0.56, 0.56, 0.89, 0.67, 0.22, 0.33, 0.33, 0.39, 0.59, 0.28, 0.33, 0.28, 0.31,
        // 0-9
        0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56,
        // :     ;     <     =     >     ?     @
        0.28, 0.28, 0.59, 0.59, 0.59, 0.50, 1.02,
        // A-M
        0.67, 0.61, 0.61, 0.67, 0.56, 0.50, 0.67, 0.67, 0.25, 0.39, 0.61, 0.53, 0.78,
        // N-Z
        0.67, 0.72, 0.56, 0.72, 0.61, 0.50, 0.56, 0.67, 0.67, 0.89, 0.61, 0.61, 0.56,
        // [     \     ]     ^     _     `
        0.28, 0.31, 0.28, 0.47, 0.56, 0.34,
        // a-m
        0.56, 0.56, 0.50, 0.56, 0.56, 0.31, 0.56, 0.56, 0.22, 0.22, 0.53, 0.22, 0.83,
        // n-z
        0.56, 0.56, 0.56, 0.56, 0.33, 0.44, 0.39, 0.56, 0.50, 0.72, 0.50, 0.50, 0.44,
        // {     |     }     ~
        0.33, 0.26, 0.33, 0.59,
    ],
    average_char_width: 0.52,
    space_width: 0.25,
};

static EB_GARAMOND_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.21, 0.26, 0.32, 0.48, 0.48, 0.76, 0.57, 0.19, 0.28, 0.28, 0.33, 0.50, 0.24, 0.28, 0.24, 0.26,
        // 0-9
        0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48,
        // :     ;     <     =     >     ?     @
        0.24, 0.24, 0.50, 0.50, 0.50, 0.43, 0.87,
        // A-M
        0.57, 0.52, 0.52, 0.57, 0.48, 0.43, 0.57, 0.57, 0.21, 0.33, 0.52, 0.45, 0.66,
        // N-Z
        0.57, 0.61, 0.48, 0.61, 0.52, 0.43, 0.48, 0.57, 0.57, 0.76, 0.52, 0.52, 0.48,
        // [     \     ]     ^     _     `
        0.24, 0.26, 0.24, 0.40, 0.48, 0.29,
        // a-m
        0.48, 0.48, 0.43, 0.48, 0.48, 0.26, 0.48, 0.48, 0.19, 0.19, 0.45, 0.19, 0.71,
        // n-z
        0.48, 0.48, 0.48, 0.48, 0.28, 0.37, 0.33, 0.48, 0.43, 0.61, 0.43, 0.43, 0.37,
        // {     |     }     ~
        0.28, 0.22, 0.28, 0.50,
    ],
    average_char_width: 0.44,
    space_width: 0.21,
};

pub fn get_metrics(font: FontFamily) -> &'static FontMetricTable {
    match font {
        FontFamily::Inter => &INTER_TABLE,
        FontFamily::EbGaramond => &EB_GARAMOND_TABLE,
    }
}
