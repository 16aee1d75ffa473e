//! Row-level find-and-replace.

use csv::StringRecord;

/// A find-and-replace rule bound to one column of a resolved header.
///
/// The rule holds a column index rather than a column name: the caller
/// resolves the name against the header once, before any row is touched,
/// so per-row work is a plain positional lookup.
#[derive(Debug, Clone)]
pub struct Replacement {
    column_index: usize,
    old_value: String,
    new_value: String,
}

impl Replacement {
    /// Creates a rule that replaces `old_value` with `new_value` in the
    /// column at `column_index`.
    pub fn new(column_index: usize, old_value: &str, new_value: &str) -> Self {
        Self {
            column_index,
            old_value: old_value.to_string(),
            new_value: new_value.to_string(),
        }
    }

    /// Returns true if the row's target field equals the old value.
    ///
    /// Comparison is literal: case-sensitive, untrimmed, whole-field. A rule
    /// whose old and new values are identical still matches.
    pub fn matches(&self, row: &StringRecord) -> bool {
        row.get(self.column_index)
            .is_some_and(|field| field == self.old_value)
    }

    /// Returns a copy of `row` with the target field replaced on an exact
    /// match. Every other field, and the field order, carry over untouched.
    pub fn apply(&self, row: &StringRecord) -> StringRecord {
        row.iter()
            .enumerate()
            .map(|(index, field)| {
                if index == self.column_index && field == self.old_value {
                    self.new_value.as_str()
                } else {
                    field
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_replaces_exact_match() {
        let rule = Replacement::new(1, "apple", "lime");
        let updated = rule.apply(&row(&["1", "apple", "orange"]));
        assert_eq!(updated, row(&["1", "lime", "orange"]));
    }

    #[test]
    fn test_non_matching_row_is_unchanged() {
        let rule = Replacement::new(1, "apple", "lime");
        let original = row(&["2", "pear", "orange"]);
        assert_eq!(rule.apply(&original), original);
        assert!(!rule.matches(&original));
    }

    #[test]
    fn test_substring_is_not_a_match() {
        let rule = Replacement::new(0, "apple", "lime");
        let original = row(&["apples"]);
        assert_eq!(rule.apply(&original), original);
        assert!(!rule.matches(&original));
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let rule = Replacement::new(0, "apple", "lime");
        let original = row(&["Apple"]);
        assert_eq!(rule.apply(&original), original);
    }

    #[test]
    fn test_comparison_is_untrimmed() {
        let rule = Replacement::new(0, "apple", "lime");
        let original = row(&[" apple"]);
        assert_eq!(rule.apply(&original), original);
    }

    #[test]
    fn test_only_the_bound_column_is_touched() {
        let rule = Replacement::new(1, "apple", "lime");
        let updated = rule.apply(&row(&["apple", "apple", "apple"]));
        assert_eq!(updated, row(&["apple", "lime", "apple"]));
    }

    #[test]
    fn test_identity_rule_matches_and_preserves() {
        let rule = Replacement::new(0, "apple", "apple");
        let original = row(&["apple"]);
        assert!(rule.matches(&original));
        assert_eq!(rule.apply(&original), original);
    }

    #[test]
    fn test_empty_old_value_matches_empty_field() {
        let rule = Replacement::new(1, "", "n/a");
        let updated = rule.apply(&row(&["1", "", "x"]));
        assert_eq!(updated, row(&["1", "n/a", "x"]));
    }

    #[test]
    fn test_empty_new_value_clears_field() {
        let rule = Replacement::new(1, "apple", "");
        let updated = rule.apply(&row(&["1", "apple", "x"]));
        assert_eq!(updated, row(&["1", "", "x"]));
    }
}
