// src/lib.rs
pub mod audit;
pub mod ordering;
pub mod palette;
pub mod remap;
pub mod types;

pub use crate::audit::{audit_tables, AuditError};
pub use crate::ordering::{stacking_order, COLOR_ORDER};
pub use crate::palette::{color_for, is_hex_color, MAPPED_COLORS, NEUTRAL, OTHER, SURVIVAL_COLORS};
pub use crate::remap::{canonical, REMAPPINGS};
pub use crate::types::{ColorTable, RemapTable, TaxonStyle};

/// Resolves display styles for a batch of raw taxon labels: each label is
/// collapsed to its canonical grouping (left unchanged when unmapped) and
/// assigned its palette color, with the `"Other"` color as fallback.
pub fn style_taxa<I, S>(labels: I) -> Vec<TaxonStyle>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    labels
        .into_iter()
        .map(|label| {
            let label = label.as_ref();
            let target = remap::canonical(label);
            let canonical = match target {
                Some(target) => target.to_string(),
                None => {
                    log::debug!("no remapping for {label}, passing through");
                    label.to_string()
                }
            };
            TaxonStyle {
                label: label.to_string(),
                color: palette::color_for(&canonical),
                mapped: target.is_some(),
                canonical,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_taxa_api() {
        let styles = style_taxa([
            "f__Enterobacteriaceae", // remapped family
            "f__Lachnospiraceae",    // already canonical
            "f__Totally_Novel",      // unmapped
        ]);

        assert_eq!(styles.len(), 3);

        assert_eq!(styles[0].canonical, "c__Gammaproteobacteria");
        assert_eq!(styles[0].color, "#9D654C");
        assert!(styles[0].mapped);

        assert_eq!(styles[1].canonical, "f__Lachnospiraceae");
        assert_eq!(styles[1].color, MAPPED_COLORS["f__Lachnospiraceae"]);
        assert!(styles[1].mapped);

        // Unmapped labels pass through and render with the fallback color.
        assert_eq!(styles[2].canonical, "f__Totally_Novel");
        assert_eq!(styles[2].color, MAPPED_COLORS[OTHER]);
        assert!(!styles[2].mapped);
    }

    #[test]
    fn repeated_access_is_stable() {
        // The tables are built once and never touched again; two passes
        // over the same input must agree exactly.
        let labels = ["o__Lactobacillales", "f__Veillonellaceae", "x__unknown"];
        assert_eq!(style_taxa(labels), style_taxa(labels));
        for label in stacking_order() {
            assert_eq!(color_for(label), color_for(label));
        }
    }

    #[test]
    fn every_remap_target_resolves_to_a_real_color() {
        // No canonical grouping in the shipped data should fall back to
        // "Other"; the fallback exists for labels outside the tables.
        for &target in REMAPPINGS.values() {
            assert!(
                MAPPED_COLORS.contains_key(target),
                "{target} would render with the fallback color"
            );
        }
    }
}
