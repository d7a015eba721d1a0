use crate::classify::{DurationBucket, Mood};
use crate::model::EnrichedRecipe;
use crate::query::normalize_selection;

/// Client-side narrowing of a result set. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    pub mood: Option<Mood>,
    pub duration: Option<DurationBucket>,
    pub category: Option<String>,
}

impl RecipeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mood(mut self, mood: Mood) -> Self {
        self.mood = Some(mood);
        self
    }

    pub fn duration(mut self, duration: DurationBucket) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Restrict to one category; blank or `All` clears the restriction
    pub fn category(mut self, category: &str) -> Self {
        self.category = normalize_selection(Some(category));
        self
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.mood.is_none() && self.duration.is_none() && self.category.is_none()
    }

    pub fn matches(&self, recipe: &EnrichedRecipe) -> bool {
        if let Some(mood) = self.mood {
            if !recipe.has_mood(mood) {
                return false;
            }
        }
        if let Some(duration) = self.duration {
            if recipe.duration != duration {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if !recipe.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        true
    }

    /// Matching recipes, in their original order
    pub fn apply<'a>(&self, recipes: &'a [EnrichedRecipe]) -> Vec<&'a EnrichedRecipe> {
        recipes.iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DetailRecord, RawListing};

    fn recipe(id: &str, title: &str, category: &str, words: usize) -> EnrichedRecipe {
        EnrichedRecipe::from_detail(
            RawListing {
                id: id.to_string(),
                name: title.to_string(),
                thumbnail: None,
                category: None,
            },
            DetailRecord {
                instructions: Some(vec!["chop"; words].join(" ")),
                category: Some(category.to_string()),
                ..Default::default()
            },
        )
    }

    fn sample() -> Vec<EnrichedRecipe> {
        vec![
            recipe("1", "Beef Stew", "Beef", 150),
            recipe("2", "Massaman Curry", "Beef", 40),
            recipe("3", "Greek Salad", "Vegetarian", 20),
            recipe("4", "Pancakes", "Breakfast", 0),
        ]
    }

    fn ids(recipes: Vec<&EnrichedRecipe>) -> Vec<&str> {
        recipes.into_iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let recipes = sample();
        let filter = RecipeFilter::new();
        assert!(filter.is_empty());
        assert_eq!(ids(filter.apply(&recipes)), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_filter_by_mood() {
        let recipes = sample();
        assert_eq!(ids(RecipeFilter::new().mood(Mood::Comfort).apply(&recipes)), vec!["1", "2"]);
        assert_eq!(ids(RecipeFilter::new().mood(Mood::General).apply(&recipes)), vec!["4"]);
    }

    #[test]
    fn test_filter_by_duration_and_category() {
        let recipes = sample();
        let filter = RecipeFilter::new()
            .duration(DurationBucket::Quick)
            .category("beef");
        assert_eq!(ids(filter.apply(&recipes)), vec!["2"]);

        let filter = RecipeFilter::new().duration(DurationBucket::Unknown);
        assert_eq!(ids(filter.apply(&recipes)), vec!["4"]);
    }

    #[test]
    fn test_all_category_and_reset() {
        let recipes = sample();
        let mut filter = RecipeFilter::new().category("All").mood(Mood::Light);
        assert!(filter.category.is_none());
        assert_eq!(ids(filter.apply(&recipes)), vec!["3"]);

        filter.reset();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&recipes).len(), 4);
    }
}
