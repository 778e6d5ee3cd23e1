//src/audit.rs

use thiserror::Error;

use crate::ordering::COLOR_ORDER;
use crate::palette::{is_hex_color, MAPPED_COLORS, NEUTRAL, OTHER, SURVIVAL_COLORS};
use crate::remap::REMAPPINGS;

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("color for {label} is not a #RRGGBB hex code: {value}")]
    MalformedColor { label: String, value: String },

    #[error("palette is missing its \"Other\" fallback entry")]
    MissingFallback,

    #[error("COLOR_ORDER entry {label} has no palette color")]
    UnknownOrderEntry { label: String },

    #[error("remapping target {target} (from {source_label}) does not map to itself")]
    UnstableTarget { source_label: String, target: String },
}

/// One-shot consistency check over the static tables. Cheap enough to run
/// at every process start; the CLI runs it before emitting anything.
///
/// Remapping targets without their own palette entry are legal (they render
/// with the `"Other"` color) but get a warning, as do the four Family_XI
/// rows whose group assignment contradicts their name hint.
pub fn audit_tables() -> Result<(), AuditError> {
    if !MAPPED_COLORS.contains_key(OTHER) {
        return Err(AuditError::MissingFallback);
    }

    for (&label, &value) in MAPPED_COLORS.iter() {
        if !is_hex_color(value) {
            return Err(AuditError::MalformedColor {
                label: label.to_string(),
                value: value.to_string(),
            });
        }
    }
    for (&key, &value) in SURVIVAL_COLORS.iter() {
        if !is_hex_color(value) {
            return Err(AuditError::MalformedColor {
                label: key.to_string(),
                value: value.to_string(),
            });
        }
    }
    if !is_hex_color(NEUTRAL) {
        return Err(AuditError::MalformedColor {
            label: "neutral".to_string(),
            value: NEUTRAL.to_string(),
        });
    }

    for group in COLOR_ORDER.iter() {
        for label in group.iter().flatten() {
            if !MAPPED_COLORS.contains_key(label) {
                return Err(AuditError::UnknownOrderEntry {
                    label: label.to_string(),
                });
            }
        }
    }

    for (&source, &target) in REMAPPINGS.iter() {
        if let Some(&onward) = REMAPPINGS.get(target) {
            if onward != target {
                return Err(AuditError::UnstableTarget {
                    source_label: source.to_string(),
                    target: target.to_string(),
                });
            }
        }
        if !MAPPED_COLORS.contains_key(target) {
            log::warn!("remapping target {target} has no palette entry, will render as {OTHER}");
        }
        if mislabeled_family_xi(source, target) {
            log::warn!(
                "curated anomaly: {source} is assigned to {target}; confirm against the taxonomic source before relying on it"
            );
        }
    }

    Ok(())
}

// The Family_XI rows whose target group contradicts the class named in the
// label itself. Kept as data, surfaced as warnings.
fn mislabeled_family_xi(source: &str, target: &str) -> bool {
    matches!(
        (source, target),
        ("f__Family_XI (c__Bacilli)", "c__Clostridia")
            | ("f__Clostridia_Family_XI", "c__Bacilli")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_tables_pass_audit() {
        audit_tables().expect("static tables failed their own audit");
    }

    #[test]
    fn anomaly_detector_flags_only_the_known_rows() {
        assert!(mislabeled_family_xi("f__Family_XI (c__Bacilli)", "c__Clostridia"));
        assert!(mislabeled_family_xi("f__Clostridia_Family_XI", "c__Bacilli"));
        assert!(!mislabeled_family_xi("f__Family_XI (c__Clostridia)", "c__Clostridia"));
        assert!(!mislabeled_family_xi("f__Bacilli_Family_XI", "c__Bacilli"));
        assert!(!mislabeled_family_xi("f__Lachnospiraceae", "f__Lachnospiraceae"));
    }
}
