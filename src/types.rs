//src/types.rs

use ahash::AHashMap;

pub type RemapTable = AHashMap<&'static str, &'static str>;
pub type ColorTable = AHashMap<&'static str, &'static str>;

/// The resolved display style for one raw taxon label.
/// `canonical` is the grouping label after normalization (the raw label
/// unchanged when no remapping exists) and `color` is the palette hex color,
/// falling back to the `"Other"` entry for anything unmapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonStyle {
    pub label: String,
    pub canonical: String,
    pub color: &'static str,
    pub mapped: bool,
}
