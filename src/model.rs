use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

use crate::classify::{classify_duration, classify_mood, DurationBucket, Mood};

/// Public page for a meal, used when a record carries no source or video link
pub const MEAL_PAGE_BASE: &str = "https://www.themealdb.com/meal";

/// Category shown when neither the detail nor the listing carries one
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Area shown when the detail record is missing or has none
pub const UNKNOWN_AREA: &str = "Unknown";

/// Every TheMealDB response wraps its records in `{ "meals": [...] | null }`
#[derive(Debug, Deserialize)]
pub struct MealsEnvelope<T> {
    pub meals: Option<Vec<T>>,
}

impl<T> MealsEnvelope<T> {
    pub fn into_vec(self) -> Vec<T> {
        self.meals.unwrap_or_default()
    }
}

/// Summary record returned by `filter.php` and `search.php`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawListing {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default, deserialize_with = "non_empty")]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategory", default, deserialize_with = "non_empty")]
    pub category: Option<String>,
}

/// Full record returned by `lookup.php`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DetailRecord {
    #[serde(rename = "strInstructions", default, deserialize_with = "non_empty")]
    pub instructions: Option<String>,
    #[serde(rename = "strCategory", default, deserialize_with = "non_empty")]
    pub category: Option<String>,
    #[serde(rename = "strArea", default, deserialize_with = "non_empty")]
    pub area: Option<String>,
    #[serde(rename = "strTags", default, deserialize_with = "non_empty")]
    pub tags: Option<String>,
    #[serde(rename = "strSource", default, deserialize_with = "non_empty")]
    pub source: Option<String>,
    #[serde(rename = "strYoutube", default, deserialize_with = "non_empty")]
    pub youtube: Option<String>,
}

/// Entry of `list.php?c=list`
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryEntry {
    #[serde(rename = "strCategory")]
    pub name: String,
}

/// The API uses `null`, `""` and whitespace interchangeably for missing values
fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// A search result ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedRecipe {
    pub id: String,
    pub title: String,
    pub thumbnail: Option<String>,
    pub category: String,
    pub area: String,
    pub instructions: String,
    pub tags: Vec<String>,
    pub duration: DurationBucket,
    pub moods: BTreeSet<Mood>,
    pub source_url: String,
}

impl EnrichedRecipe {
    /// Merge a listing with its detail record and classify the result.
    pub fn from_detail(listing: RawListing, detail: DetailRecord) -> Self {
        let category = detail
            .category
            .or(listing.category)
            .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string());
        let tags = parse_tags(detail.tags.as_deref());
        let duration = classify_duration(detail.instructions.as_deref());
        let moods = classify_mood(&category, tags.as_slice(), &listing.name);
        let source_url = detail
            .source
            .or(detail.youtube)
            .unwrap_or_else(|| fallback_source_url(&listing.id));

        EnrichedRecipe {
            id: listing.id,
            title: listing.name,
            thumbnail: listing.thumbnail,
            category,
            area: detail.area.unwrap_or_else(|| UNKNOWN_AREA.to_string()),
            instructions: detail.instructions.unwrap_or_default(),
            tags,
            duration,
            moods,
            source_url,
        }
    }

    /// Build a minimal record from the listing alone, used when the
    /// detail lookup failed.
    pub fn degraded(listing: RawListing) -> Self {
        let source_url = fallback_source_url(&listing.id);

        EnrichedRecipe {
            id: listing.id,
            title: listing.name,
            thumbnail: listing.thumbnail,
            category: listing
                .category
                .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string()),
            area: UNKNOWN_AREA.to_string(),
            instructions: String::new(),
            tags: Vec::new(),
            duration: DurationBucket::Unknown,
            moods: BTreeSet::from([Mood::General]),
            source_url,
        }
    }

    pub fn has_mood(&self, mood: Mood) -> bool {
        self.moods.contains(&mood)
    }

    /// Mood labels joined for display, e.g. "Comfort, Spicy"
    pub fn mood_labels(&self) -> String {
        self.moods
            .iter()
            .map(Mood::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Split the API's comma separated tag string, dropping blanks.
pub fn parse_tags(raw: Option<&str>) -> Vec<String> {
    raw.map(|tags| {
        tags.split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}

pub fn fallback_source_url(id: &str) -> String {
    format!("{}/{}", MEAL_PAGE_BASE, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: &str, name: &str, category: Option<&str>) -> RawListing {
        RawListing {
            id: id.to_string(),
            name: name.to_string(),
            thumbnail: Some(format!("https://img.example/{id}.jpg")),
            category: category.map(String::from),
        }
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(
            parse_tags(Some("Meat, Casserole,,  ,Curry ")),
            vec!["Meat", "Casserole", "Curry"]
        );
        assert!(parse_tags(None).is_empty());
        assert!(parse_tags(Some(" , ")).is_empty());
    }

    #[test]
    fn test_from_detail_merges_and_classifies() {
        let detail = DetailRecord {
            instructions: Some("Brown the beef. Simmer for two hours.".to_string()),
            category: Some("Beef".to_string()),
            area: Some("British".to_string()),
            tags: Some("Stew,Winter".to_string()),
            source: Some("https://example.com/stew".to_string()),
            youtube: Some("https://youtube.com/watch?v=1".to_string()),
        };

        let recipe = EnrichedRecipe::from_detail(listing("1", "Beef Stew", None), detail);

        assert_eq!(recipe.category, "Beef");
        assert_eq!(recipe.area, "British");
        assert_eq!(recipe.tags, vec!["Stew", "Winter"]);
        assert_eq!(recipe.duration, DurationBucket::Quick);
        assert_eq!(recipe.moods, BTreeSet::from([Mood::Comfort]));
        assert_eq!(recipe.source_url, "https://example.com/stew");
    }

    #[test]
    fn test_from_detail_fallbacks() {
        let recipe = EnrichedRecipe::from_detail(
            listing("52772", "Teriyaki Chicken Casserole", Some("Chicken")),
            DetailRecord {
                youtube: Some("https://youtube.com/watch?v=4aZr5hZXP_s".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(recipe.category, "Chicken");
        assert_eq!(recipe.area, UNKNOWN_AREA);
        assert_eq!(recipe.duration, DurationBucket::Unknown);
        assert_eq!(recipe.source_url, "https://youtube.com/watch?v=4aZr5hZXP_s");

        let recipe =
            EnrichedRecipe::from_detail(listing("7", "Plain Rice", None), DetailRecord::default());
        assert_eq!(recipe.category, UNKNOWN_CATEGORY);
        assert_eq!(recipe.source_url, "https://www.themealdb.com/meal/7");
        assert_eq!(recipe.moods, BTreeSet::from([Mood::General]));
    }

    #[test]
    fn test_degraded_uses_listing_fields_only() {
        let recipe = EnrichedRecipe::degraded(listing("9", "Spicy Thai Curry", Some("Chicken")));

        assert_eq!(recipe.title, "Spicy Thai Curry");
        assert_eq!(recipe.category, "Chicken");
        assert_eq!(recipe.duration, DurationBucket::Unknown);
        assert_eq!(recipe.moods, BTreeSet::from([Mood::General]));
        assert!(recipe.tags.is_empty());
        assert!(recipe.instructions.is_empty());
        assert_eq!(recipe.source_url, fallback_source_url("9"));
    }

    #[test]
    fn test_detail_deserializes_blank_strings_as_missing() {
        let json = r#"{
            "meals": [{
                "idMeal": "52874",
                "strMeal": "Beef and Mustard Pie",
                "strCategory": "Beef",
                "strArea": "British",
                "strInstructions": "Preheat the oven.",
                "strTags": null,
                "strSource": "",
                "strYoutube": "https://www.youtube.com/watch?v=nMyBC9staMU"
            }]
        }"#;

        let envelope: MealsEnvelope<DetailRecord> = serde_json::from_str(json).unwrap();
        let detail = envelope.into_vec().remove(0);
        assert!(detail.tags.is_none());
        assert!(detail.source.is_none());
        assert_eq!(
            detail.youtube.as_deref(),
            Some("https://www.youtube.com/watch?v=nMyBC9staMU")
        );
    }

    #[test]
    fn test_null_meals_is_empty() {
        let envelope: MealsEnvelope<RawListing> = serde_json::from_str(r#"{"meals": null}"#).unwrap();
        assert!(envelope.into_vec().is_empty());

        let envelope: MealsEnvelope<RawListing> = serde_json::from_str("{}").unwrap();
        assert!(envelope.into_vec().is_empty());
    }

    #[test]
    fn test_listing_without_category() {
        let json = r#"{"meals":[{"strMeal":"Brown Stew Chicken","strMealThumb":"https://x/y.jpg","idMeal":"52940"}]}"#;
        let envelope: MealsEnvelope<RawListing> = serde_json::from_str(json).unwrap();
        let listings = envelope.into_vec();
        assert_eq!(listings[0].id, "52940");
        assert!(listings[0].category.is_none());
    }
}
