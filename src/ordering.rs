//src/ordering.rs

/// Legend and stacked-bar segment order, one group per phylum/major group.
/// Declaration order is the display order; `None` pads groups so that the
/// columns line up visually across groups of different sizes.
pub static COLOR_ORDER: [&[Option<&str>]; 4] = [
    // Firmicutes
    &[
        Some("f__Lachnospiraceae"),
        Some("f__Ruminococcaceae"),
        Some("c__Clostridia"),
        Some("c__Bacilli"),
        Some("p__Firmicutes"),
    ],
    // Bacteroidetes
    &[
        Some("f__Bacteroidaceae"),
        Some("f__Rikenellaceae"),
        Some("f__Porphyromonadaceae"),
        Some("f__Prevotellaceae"),
        Some("p__Bacteroidetes"),
    ],
    // Proteobacteria (with a spacer after Fusobacteriaceae)
    &[
        Some("f__Fusobacteriaceae"),
        None,
        Some("c__Gammaproteobacteria"),
        Some("f__Campylobacteraceae"),
        Some("p__Proteobacteria"),
    ],
    // Everything else
    &[
        Some("f__Verrucomicrobiaceae"),
        Some("f__Bifidobacteriaceae"),
        Some("f__Synergistaceae"),
        Some("Other"),
    ],
];

/// Flattens `COLOR_ORDER` into one linear sequence, skipping placeholders.
pub fn stacking_order() -> Vec<&'static str> {
    COLOR_ORDER
        .iter()
        .flat_map(|group| group.iter().filter_map(|entry| *entry))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::MAPPED_COLORS;

    #[test]
    fn every_entry_has_a_palette_color() {
        for group in COLOR_ORDER.iter() {
            for label in group.iter().flatten() {
                assert!(
                    MAPPED_COLORS.contains_key(label),
                    "{label} appears in COLOR_ORDER but has no color"
                );
            }
        }
    }

    #[test]
    fn groups_match_declared_layout() {
        assert_eq!(COLOR_ORDER.len(), 4);
        let lens: Vec<usize> = COLOR_ORDER.iter().map(|g| g.len()).collect();
        assert_eq!(lens, vec![5, 5, 5, 4]);
        // The single placeholder sits after Fusobacteriaceae.
        assert_eq!(COLOR_ORDER[2][0], Some("f__Fusobacteriaceae"));
        assert_eq!(COLOR_ORDER[2][1], None);
    }

    #[test]
    fn stacking_order_skips_placeholders() {
        let order = stacking_order();
        assert_eq!(order.len(), 18);
        assert_eq!(order.first(), Some(&"f__Lachnospiraceae"));
        assert_eq!(order.last(), Some(&"Other"));
        assert!(!order.contains(&""));
    }
}
