//src/palette.rs

use lazy_static::lazy_static;

use crate::types::ColorTable;

/// Fallback key for any grouping label without its own palette entry.
pub const OTHER: &str = "Other";

/// Neutral hex color for plot elements that carry no group identity.
pub const NEUTRAL: &str = "#587fac";

lazy_static! {
    /// Fixed hex color per grouping label. One hue family per phylum so
    /// stacked bars read as blocks:
    /// Bacteroidetes gray, Firmicutes purple, Proteobacteria orange,
    /// Fusobacteria green, everything else teal.
    pub static ref MAPPED_COLORS: ColorTable = {
        let mut m = ColorTable::new();
        // Bacteroidetes
        m.insert("f__Bacteroidaceae", "#616161");
        m.insert("f__Rikenellaceae", "#8B8B8B");
        m.insert("f__Porphyromonadaceae", "#B7B7B7");
        m.insert("f__Prevotellaceae", "#D6D6D6");
        m.insert("p__Bacteroidetes", "#F5F5F5");
        // Firmicutes
        m.insert("f__Lachnospiraceae", "#7D3560");
        m.insert("f__Ruminococcaceae", "#A1527F");
        m.insert("c__Clostridia", "#CC79A7");
        m.insert("c__Bacilli", "#E794C1");
        m.insert("p__Firmicutes", "#EFB6D6");
        // Proteobacteria
        m.insert("c__Gammaproteobacteria", "#9D654C");
        m.insert("f__Campylobacteraceae", "#C17754");
        m.insert("p__Proteobacteria", "#F09163");
        // Fusobacteria
        m.insert("f__Fusobacteriaceae", "#97CE2F");
        // Other
        m.insert("f__Bifidobacteriaceae", "#148F77");
        m.insert("f__Verrucomicrobiaceae", "#009E73");
        m.insert("f__Synergistaceae", "#43BA8F");
        m.insert(OTHER, "#A3E4D7");
        m
    };

    /// Binary outcome coloring (keys "0" and "1"), unrelated to taxonomy.
    pub static ref SURVIVAL_COLORS: ColorTable = {
        let mut m = ColorTable::new();
        m.insert("0", "#4292c6");
        m.insert("1", "#08306b");
        m
    };
}

/// Looks up the display color for a grouping label, falling back to the
/// `"Other"` entry for labels without their own color.
pub fn color_for(label: &str) -> &'static str {
    match MAPPED_COLORS.get(label) {
        Some(&color) => color,
        None => MAPPED_COLORS[OTHER],
    }
}

/// Checks that a color string is a `#RRGGBB` hex code.
pub fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(hex) => hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}
