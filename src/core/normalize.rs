/// Maps a free-text identifier onto a canonical taxonomy key.
///
/// Lower-cases, then turns every space and hyphen into an underscore.
/// Nothing else is trimmed or collapsed, so `"a  b"` becomes `"a__b"`.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_collapse_to_one_key() {
        assert_eq!(normalize("General-Aviation Singles"), "general_aviation_singles");
        assert_eq!(normalize("GENERAL AVIATION SINGLES"), "general_aviation_singles");
        assert_eq!(normalize("general_aviation_singles"), "general_aviation_singles");
    }

    #[test]
    fn test_idempotent() {
        for raw in ["Attitude Indicator", "glass-cockpit", "", "  ", "HUD_Integration", "Ünïcode Gauge"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_no_trimming() {
        assert_eq!(normalize(" dme "), "_dme_");
        assert_eq!(normalize("a  b"), "a__b");
    }
}
