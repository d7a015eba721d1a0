use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Occasion/taste label attached to a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Mood {
    Comfort,
    Party,
    Healthy,
    Light,
    Spicy,
    General,
}

/// Keyword table driving [`classify_mood`]. `General` is never matched
/// directly; it is the fallback when nothing else is.
pub const MOOD_KEYWORDS: &[(Mood, &[&str])] = &[
    (Mood::Comfort, &["Beef", "Pasta", "Stew", "Chicken"]),
    (Mood::Party, &["Dessert", "Snack", "Side"]),
    (Mood::Healthy, &["Vegetarian", "Seafood", "Vegan"]),
    (Mood::Light, &["Salad", "Vegetarian", "Seafood"]),
    (Mood::Spicy, &["Curry", "Mexican", "Indian", "Thai"]),
];

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Comfort => "Comfort",
            Mood::Party => "Party",
            Mood::Healthy => "Healthy",
            Mood::Light => "Light",
            Mood::Spicy => "Spicy",
            Mood::General => "General",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "comfort" => Ok(Mood::Comfort),
            "party" => Ok(Mood::Party),
            "healthy" => Ok(Mood::Healthy),
            "light" => Ok(Mood::Light),
            "spicy" => Ok(Mood::Spicy),
            "general" => Ok(Mood::General),
            other => Err(format!("unknown mood '{}'", other)),
        }
    }
}

/// Tag a recipe with moods based on its category, tags and title.
///
/// Keywords are matched as plain substrings of the lowercased text, so
/// "Thailand" counts as "Thai" and "Inside" counts as "Side". The result is
/// never empty: `{General}` is returned when no keyword matches.
pub fn classify_mood<S: AsRef<str>>(category: &str, tags: &[S], title: &str) -> BTreeSet<Mood> {
    let mut blob = category.to_lowercase();
    for tag in tags {
        blob.push(' ');
        blob.push_str(&tag.as_ref().to_lowercase());
    }
    blob.push(' ');
    blob.push_str(&title.to_lowercase());

    let mut moods: BTreeSet<Mood> = MOOD_KEYWORDS
        .iter()
        .filter(|(_, keywords)| {
            keywords
                .iter()
                .any(|keyword| blob.contains(&keyword.to_lowercase()))
        })
        .map(|(mood, _)| *mood)
        .collect();

    if moods.is_empty() {
        moods.insert(Mood::General);
    }
    moods
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_TAGS: &[&str] = &[];

    fn set(moods: &[Mood]) -> BTreeSet<Mood> {
        moods.iter().copied().collect()
    }

    #[test]
    fn test_category_keyword_matches() {
        assert_eq!(classify_mood("Beef", NO_TAGS, "Beef Wellington"), set(&[Mood::Comfort]));
        assert_eq!(classify_mood("Dessert", NO_TAGS, "Apple Frangipan Tart"), set(&[Mood::Party]));
    }

    #[test]
    fn test_keyword_shared_by_two_moods() {
        assert_eq!(
            classify_mood("Seafood", NO_TAGS, "Baked salmon with fennel"),
            set(&[Mood::Healthy, Mood::Light])
        );
    }

    #[test]
    fn test_tags_and_title_contribute() {
        let moods = classify_mood("Miscellaneous", &["Curry", "Spicy"], "Chicken Handi");
        assert_eq!(moods, set(&[Mood::Comfort, Mood::Spicy]));
    }

    #[test]
    fn test_no_match_falls_back_to_general() {
        assert_eq!(classify_mood("Breakfast", NO_TAGS, "Full English"), set(&[Mood::General]));
        assert_eq!(classify_mood("", NO_TAGS, ""), set(&[Mood::General]));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            classify_mood("", NO_TAGS, "BEEF STEW"),
            classify_mood("", NO_TAGS, "beef stew")
        );
        assert_eq!(classify_mood("", NO_TAGS, "BEEF STEW"), set(&[Mood::Comfort]));
    }

    #[test]
    fn test_partial_word_matches_are_kept() {
        assert_eq!(classify_mood("", NO_TAGS, "Thailand noodles"), set(&[Mood::Spicy]));
        assert_eq!(classify_mood("", NO_TAGS, "Inside-out burger"), set(&[Mood::Party]));
    }

    #[test]
    fn test_general_only_when_nothing_else_matches() {
        for (mood, keywords) in MOOD_KEYWORDS {
            for keyword in keywords.iter() {
                let moods = classify_mood(keyword, NO_TAGS, "");
                assert!(moods.contains(mood));
                assert!(!moods.contains(&Mood::General));
            }
        }
    }

    #[test]
    fn test_parse_mood_names() {
        assert_eq!("spicy".parse::<Mood>(), Ok(Mood::Spicy));
        assert_eq!("Comfort".parse::<Mood>(), Ok(Mood::Comfort));
        assert!("grumpy".parse::<Mood>().is_err());
    }
}
