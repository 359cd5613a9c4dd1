//! Prompt assembly: free text followed by the chosen fragments.

use crate::selection::SelectionSnapshot;

/// Separator placed between prompt fragments.
pub const SEPARATOR: &str = ", ";

/// Combine `free_text` with the non-empty selections, comma-joined in catalog
/// order.
///
/// The free text is used verbatim (no trimming). A separator follows it only
/// when at least one selection is present, so the result never ends with a
/// dangling comma. With no free text and no selections the result is empty.
pub fn assemble(free_text: &str, selections: &SelectionSnapshot) -> String {
    let fragments: Vec<&str> = selections.non_empty().collect();
    let joined = fragments.join(SEPARATOR);

    match (free_text.is_empty(), joined.is_empty()) {
        (true, _) => joined,
        (false, true) => free_text.to_string(),
        (false, false) => format!("{free_text}{SEPARATOR}{joined}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::selection::Selection;
    use pretty_assertions::assert_eq;

    fn selection_with(pairs: &[(&str, &str)]) -> SelectionSnapshot {
        let mut selection = Selection::new(&Catalog::builtin());
        for (key, value) in pairs {
            selection.select(key, value).unwrap();
        }
        selection.get_all()
    }

    #[test]
    fn empty_inputs_give_empty_prompt() {
        assert_eq!(assemble("", &selection_with(&[])), "");
    }

    #[test]
    fn free_text_alone_has_no_trailing_separator() {
        assert_eq!(assemble("cat photo", &selection_with(&[])), "cat photo");
    }

    #[test]
    fn selections_follow_catalog_order() {
        // Chosen mood first, visual type second; output is still catalog order.
        let snapshot =
            selection_with(&[("mood", "serene and peaceful"), ("visualType", "RAW photo")]);
        assert_eq!(assemble("", &snapshot), "RAW photo, serene and peaceful");
    }

    #[test]
    fn free_text_is_prepended() {
        let snapshot = selection_with(&[("visualType", "RAW photo")]);
        assert_eq!(assemble("cat photo", &snapshot), "cat photo, RAW photo");
    }

    #[test]
    fn free_text_is_not_trimmed() {
        let snapshot = selection_with(&[("genre", "high fantasy")]);
        assert_eq!(assemble("  a castle ", &snapshot), "  a castle , high fantasy");
    }

    #[test]
    fn reset_selections_are_skipped() {
        let mut selection = Selection::new(&Catalog::builtin());
        selection.select("cameraStyle", "Leica M10 35mm").unwrap();
        selection.select("texture", "carbon fiber fabric").unwrap();
        selection.clear("cameraStyle").unwrap();
        assert_eq!(assemble("", &selection.get_all()), "carbon fiber fabric");
    }

    #[test]
    fn is_deterministic() {
        let snapshot = selection_with(&[
            ("composition", "rule of thirds"),
            ("background", "desert at sunset"),
        ]);
        assert_eq!(assemble("dog", &snapshot), assemble("dog", &snapshot));
    }

    /// Every subset of categories (each picking its first value) combined with
    /// empty and non-empty free text: no leading, trailing or doubled separator.
    #[test]
    fn no_stray_separators_for_any_subset() {
        let catalog = Catalog::builtin();
        let categories = catalog.list_categories();
        let subsets = 1u32 << categories.len();

        for mask in 0..subsets {
            let mut selection = Selection::new(&catalog);
            for (i, category) in categories.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    selection.select(category.key, category.values[0]).unwrap();
                }
            }
            let snapshot = selection.get_all();

            for free_text in ["", "portrait of a fox"] {
                let prompt = assemble(free_text, &snapshot);
                assert!(!prompt.starts_with(SEPARATOR), "mask {mask:#b}: {prompt:?}");
                assert!(!prompt.ends_with(SEPARATOR), "mask {mask:#b}: {prompt:?}");
                assert!(!prompt.contains(", , "), "mask {mask:#b}: {prompt:?}");

                let expected_parts =
                    mask.count_ones() as usize + usize::from(!free_text.is_empty());
                let parts = if prompt.is_empty() {
                    0
                } else {
                    prompt.split(SEPARATOR).count()
                };
                assert_eq!(parts, expected_parts, "mask {mask:#b}: {prompt:?}");
            }
        }
    }
}
