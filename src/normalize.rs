//! Filtering, ordering and defaulting applied to decoded records.

use crate::model::{IngredientLine, MealSummary};

/// Number of numbered ingredient/measure fields on a detail record
pub const NUMBERED_FIELDS: usize = 20;

pub const DEFAULT_MEAL_NAME: &str = "Default Meal Name";
pub const DEFAULT_INSTRUCTIONS: &str = "Default Instructions";
pub const DEFAULT_THUMBNAIL: &str = "Default Meal Thumbnail";

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Drop entries without a name or thumbnail, then sort by name.
///
/// Ordering is plain byte-wise string comparison; the sort is stable so
/// entries with equal names keep their input order.
pub fn filter_and_sort_summaries(summaries: Vec<MealSummary>) -> Vec<MealSummary> {
    let mut kept: Vec<MealSummary> = summaries
        .into_iter()
        .filter(|meal| non_blank(&meal.name).is_some() && non_blank(&meal.thumbnail_url).is_some())
        .collect();

    kept.sort_by(|a, b| non_blank(&a.name).cmp(&non_blank(&b.name)));
    kept
}

/// Trimmed value, or `default` when absent or blank
pub fn or_default(value: Option<String>, default: &str) -> String {
    non_blank(&value).unwrap_or(default).to_string()
}

/// Collapse the numbered fields into two sequences.
///
/// Each side is filtered on its own: a blank ingredient does not remove the
/// measure at the same position, and the other way round.
pub fn build_ingredient_lists(
    ingredients: &[Option<String>; NUMBERED_FIELDS],
    measures: &[Option<String>; NUMBERED_FIELDS],
) -> (Vec<String>, Vec<String>) {
    let collect = |fields: &[Option<String>; NUMBERED_FIELDS]| -> Vec<String> {
        fields
            .iter()
            .filter_map(|field| non_blank(field).map(str::to_string))
            .collect()
    };

    (collect(ingredients), collect(measures))
}

/// One row per non-blank ingredient, carrying the measure from the same position
pub fn build_ingredient_lines(
    ingredients: &[Option<String>; NUMBERED_FIELDS],
    measures: &[Option<String>; NUMBERED_FIELDS],
) -> Vec<IngredientLine> {
    ingredients
        .iter()
        .zip(measures.iter())
        .filter_map(|(ingredient, measure)| {
            non_blank(ingredient).map(|ingredient| IngredientLine {
                ingredient: ingredient.to_string(),
                measure: non_blank(measure).unwrap_or_default().to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, name: Option<&str>, thumb: Option<&str>) -> MealSummary {
        MealSummary {
            id: id.to_string(),
            name: name.map(String::from),
            thumbnail_url: thumb.map(String::from),
        }
    }

    fn fields(values: &[(usize, &str)]) -> [Option<String>; NUMBERED_FIELDS] {
        let mut out: [Option<String>; NUMBERED_FIELDS] = Default::default();
        for (index, value) in values {
            out[*index] = Some(value.to_string());
        }
        out
    }

    #[test]
    fn test_filter_and_sort_example() {
        let input = vec![
            summary("1", Some("Banana Split"), Some("x.png")),
            summary("2", Some(""), Some("y.png")),
            summary("3", Some("Apple Pie"), Some("z.png")),
        ];

        let output = filter_and_sort_summaries(input);
        let names: Vec<&str> = output.iter().map(|m| m.display_name()).collect();
        assert_eq!(names, vec!["Apple Pie", "Banana Split"]);
    }

    #[test]
    fn test_filter_drops_missing_fields() {
        let input = vec![
            summary("1", None, Some("a.png")),
            summary("2", Some("Tart"), None),
            summary("3", Some("Tart"), Some("   ")),
            summary("4", Some("  "), Some("b.png")),
            summary("5", Some("Flan"), Some("c.png")),
        ];

        let output = filter_and_sort_summaries(input);
        assert_eq!(output.len(), 1);
        assert_eq!(output[0].id, "5");
    }

    #[test]
    fn test_sort_is_case_sensitive() {
        let input = vec![
            summary("1", Some("apple crumble"), Some("a.png")),
            summary("2", Some("Bakewell tart"), Some("b.png")),
            summary("3", Some("Apple Frangipan Tart"), Some("c.png")),
        ];

        let ids: Vec<String> = filter_and_sort_summaries(input)
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec!["3", "2", "1"]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let input = vec![
            summary("b", Some("Pancakes"), Some("1.png")),
            summary("x", Some("Eton Mess"), Some("2.png")),
            summary("a", Some("Pancakes"), Some("3.png")),
            summary("c", Some("Pancakes"), Some("4.png")),
        ];

        let ids: Vec<String> = filter_and_sort_summaries(input)
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec!["x", "b", "a", "c"]);
    }

    #[test]
    fn test_sort_ignores_surrounding_whitespace() {
        let input = vec![
            summary("1", Some(" Zed"), Some("z.png")),
            summary("2", Some("Apple"), Some("a.png")),
        ];

        let ids: Vec<String> = filter_and_sort_summaries(input)
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_filter_and_sort_empty() {
        assert!(filter_and_sort_summaries(Vec::new()).is_empty());
    }

    #[test]
    fn test_or_default() {
        assert_eq!(or_default(None, DEFAULT_MEAL_NAME), "Default Meal Name");
        assert_eq!(or_default(Some(" \t".to_string()), DEFAULT_INSTRUCTIONS), "Default Instructions");
        assert_eq!(or_default(Some("  Pavlova ".to_string()), DEFAULT_MEAL_NAME), "Pavlova");
    }

    #[test]
    fn test_lists_are_filtered_independently() {
        let ingredients = fields(&[(0, "Flour"), (1, "  "), (2, "Sugar")]);
        let measures = fields(&[(0, "200g"), (1, "1 pinch"), (3, "2 tbs")]);

        let (ingredients_out, measures_out) = build_ingredient_lists(&ingredients, &measures);
        assert_eq!(ingredients_out, vec!["Flour", "Sugar"]);
        assert_eq!(measures_out, vec!["200g", "1 pinch", "2 tbs"]);
    }

    #[test]
    fn test_lists_never_contain_blank_entries() {
        let ingredients = fields(&[(0, ""), (5, " "), (7, "\n"), (19, " Butter ")]);
        let measures = fields(&[(2, "\t"), (19, " 25g")]);

        let (ingredients_out, measures_out) = build_ingredient_lists(&ingredients, &measures);
        assert!(ingredients_out.iter().all(|s| !s.trim().is_empty()));
        assert!(measures_out.iter().all(|s| !s.trim().is_empty()));
        assert_eq!(ingredients_out, vec!["Butter"]);
        assert_eq!(measures_out, vec!["25g"]);
    }

    #[test]
    fn test_lines_stay_aligned() {
        let ingredients = fields(&[(0, "Flour"), (1, ""), (2, "Sugar")]);
        let measures = fields(&[(0, "200g"), (1, "1 pinch")]);

        let lines = build_ingredient_lines(&ingredients, &measures);
        assert_eq!(
            lines,
            vec![
                IngredientLine {
                    ingredient: "Flour".to_string(),
                    measure: "200g".to_string(),
                },
                IngredientLine {
                    ingredient: "Sugar".to_string(),
                    measure: String::new(),
                },
            ]
        );
    }
}
