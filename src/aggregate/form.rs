//! Boundary decoding of flat form-style ingredient fields.
//!
//! Legacy clients submit ingredient rows as a flat key/value mapping where
//! keys follow `nameIngredient_<i>` / `valueIngredient_<i>` and `<i>`
//! correlates the name/value pair of one row:
//!
//! ```text
//! nameIngredient_1=Flour   valueIngredient_1=200
//! nameIngredient_2=Sugar   valueIngredient_2=50
//! ```
//!
//! This module turns that wire shape into the structured
//! [`IngredientEntry`] list the core consumes, keeping string-key parsing
//! out of the aggregation logic. The contract:
//!
//! - within one index group, name and value keys may arrive in either order
//! - an entry is emitted when its group completes, in completion order
//! - incomplete groups and non-numeric values are skipped, never errors
//! - keys that don't match the pattern are ignored

use std::collections::HashMap;

use tracing::warn;

use super::IngredientEntry;

const NAME_PREFIX: &str = "nameIngredient";
const VALUE_PREFIX: &str = "valueIngredient";

#[derive(Default)]
struct PartialEntry {
    title: Option<String>,
    quantity: Option<u32>,
}

/// Decode ordered form fields into structured ingredient entries.
///
/// Accepts any ordered sequence of `(key, value)` pairs (form bodies keep
/// their field order). A later field for the same slot overwrites an
/// earlier one within an incomplete group.
pub fn decode_ingredient_fields<I, K, V>(fields: I) -> Vec<IngredientEntry>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut groups: HashMap<String, PartialEntry> = HashMap::new();
    let mut entries = Vec::new();

    for (key, value) in fields {
        let Some((kind, index)) = key.as_ref().split_once('_') else {
            continue;
        };

        let group = match kind {
            NAME_PREFIX => {
                let group = groups.entry(index.to_string()).or_default();
                group.title = Some(value.as_ref().to_string());
                group
            }
            VALUE_PREFIX => {
                let Ok(quantity) = value.as_ref().trim().parse::<u32>() else {
                    warn!(
                        index,
                        value = value.as_ref(),
                        "skipping ingredient field with non-numeric quantity"
                    );
                    continue;
                };
                let group = groups.entry(index.to_string()).or_default();
                group.quantity = Some(quantity);
                group
            }
            _ => continue,
        };

        if let (Some(title), Some(quantity)) = (&group.title, group.quantity) {
            entries.push(IngredientEntry {
                title: title.clone(),
                quantity,
            });
            groups.remove(index);
        }
    }

    if !groups.is_empty() {
        warn!(
            incomplete = groups.len(),
            "skipping incomplete ingredient field groups"
        );
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, quantity: u32) -> IngredientEntry {
        IngredientEntry {
            title: title.to_string(),
            quantity,
        }
    }

    #[test]
    fn test_decode_name_then_value() {
        let fields = [
            ("nameIngredient_1", "Flour"),
            ("valueIngredient_1", "200"),
            ("nameIngredient_2", "Sugar"),
            ("valueIngredient_2", "50"),
        ];

        assert_eq!(
            decode_ingredient_fields(fields),
            vec![entry("Flour", 200), entry("Sugar", 50)]
        );
    }

    #[test]
    fn test_decode_value_before_name() {
        let fields = [("valueIngredient_1", "200"), ("nameIngredient_1", "Flour")];

        assert_eq!(decode_ingredient_fields(fields), vec![entry("Flour", 200)]);
    }

    #[test]
    fn test_interleaved_groups_emit_in_completion_order() {
        let fields = [
            ("nameIngredient_1", "Flour"),
            ("nameIngredient_2", "Sugar"),
            ("valueIngredient_2", "50"),
            ("valueIngredient_1", "200"),
        ];

        // Group 2 completes first
        assert_eq!(
            decode_ingredient_fields(fields),
            vec![entry("Sugar", 50), entry("Flour", 200)]
        );
    }

    #[test]
    fn test_incomplete_groups_are_skipped() {
        let fields = [
            ("nameIngredient_1", "Flour"),
            ("valueIngredient_2", "50"),
            ("nameIngredient_3", "Eggs"),
            ("valueIngredient_3", "2"),
        ];

        assert_eq!(decode_ingredient_fields(fields), vec![entry("Eggs", 2)]);
    }

    #[test]
    fn test_non_numeric_value_is_skipped() {
        let fields = [
            ("nameIngredient_1", "Flour"),
            ("valueIngredient_1", "lots"),
            ("nameIngredient_2", "Sugar"),
            ("valueIngredient_2", "50"),
        ];

        assert_eq!(decode_ingredient_fields(fields), vec![entry("Sugar", 50)]);
    }

    #[test]
    fn test_unrelated_keys_are_ignored() {
        let fields = [
            ("csrfmiddlewaretoken", "abc123"),
            ("name", "Pancakes"),
            ("nameIngredient_1", "Flour"),
            ("valueIngredient_1", "200"),
            ("cooking_time", "30"),
        ];

        assert_eq!(decode_ingredient_fields(fields), vec![entry("Flour", 200)]);
    }

    #[test]
    fn test_empty_input() {
        let fields: [(&str, &str); 0] = [];
        assert!(decode_ingredient_fields(fields).is_empty());
    }
}
