//! Sorting and value-based filtering of extracted concepts.

use std::collections::HashSet;

use super::result::{ConceptSets, ExtractionResult};

/// Turn accumulated sets into a sorted result, keeping only `targets` if given.
///
/// `targets` is an allow-list of *values*, applied to every category alike;
/// it does not select categories. `None` and an empty list both mean "keep
/// everything". Categories left without values stay in the result, empty.
pub fn filter_concepts(concepts: &ConceptSets, targets: Option<&[String]>) -> ExtractionResult {
    let allowed: Option<HashSet<&str>> = targets
        .filter(|t| !t.is_empty())
        .map(|t| t.iter().map(String::as_str).collect());

    ExtractionResult::from_categories(concepts.iter().map(|(category, values)| {
        // BTreeSet iteration is already ascending.
        let kept = values
            .iter()
            .filter(|v| allowed.as_ref().map_or(true, |a| a.contains(v.as_str())))
            .cloned()
            .collect();
        (category, kept)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concepts::result::ConceptCategory;

    fn sample() -> ConceptSets {
        let mut sets = ConceptSets::new();
        sets.insert(ConceptCategory::Identifiers, "x");
        sets.insert(ConceptCategory::Identifiers, "f");
        sets.insert(ConceptCategory::FunctionCalls, "f");
        sets.insert(ConceptCategory::Literals, "0");
        sets
    }

    #[test]
    fn test_no_targets_sorts() {
        let result = filter_concepts(&sample(), None);
        assert_eq!(result.get(ConceptCategory::Identifiers), ["f", "x"]);
        assert_eq!(result.get(ConceptCategory::Literals), ["0"]);
        assert!(result.get(ConceptCategory::Keywords).is_empty());
    }

    #[test]
    fn test_empty_targets_keep_everything() {
        let targets: Vec<String> = Vec::new();
        assert_eq!(
            filter_concepts(&sample(), Some(targets.as_slice())),
            filter_concepts(&sample(), None)
        );
    }

    #[test]
    fn test_targets_filter_by_value_across_categories() {
        let targets = vec!["f".to_string()];
        let result = filter_concepts(&sample(), Some(targets.as_slice()));

        assert_eq!(result.get(ConceptCategory::FunctionCalls), ["f"]);
        assert_eq!(result.get(ConceptCategory::Identifiers), ["f"]);
        assert!(result.get(ConceptCategory::Literals).is_empty());
        assert_eq!(result.iter().count(), 6);
    }

    #[test]
    fn test_category_names_are_not_selectors() {
        let targets = vec!["identifiers".to_string()];
        let result = filter_concepts(&sample(), Some(targets.as_slice()));
        assert!(result.is_empty());
    }
}
