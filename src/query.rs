use crate::api::ListingRequest;

/// Selector value meaning "no restriction"
pub const ALL: &str = "All";

/// Immutable description of one search, built from user input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    ingredient: Option<String>,
    category: Option<String>,
}

impl SearchQuery {
    /// Build a query from raw user input. Blank values and `All` are
    /// treated as unset.
    pub fn new(ingredient: Option<&str>, category: Option<&str>) -> Self {
        SearchQuery {
            ingredient: normalize_selection(ingredient),
            category: normalize_selection(category),
        }
    }

    pub fn ingredient(&self) -> Option<&str> {
        self.ingredient.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Pick the listing endpoint. The ingredient wins when both fields are
    /// set; the category then only narrows results client side.
    pub fn listing_request(&self) -> ListingRequest {
        match (&self.ingredient, &self.category) {
            (Some(ingredient), _) => ListingRequest::ByIngredient(ingredient.clone()),
            (None, Some(category)) => ListingRequest::ByCategory(category.clone()),
            (None, None) => ListingRequest::Everything,
        }
    }

    /// Category that still has to be applied after enrichment
    pub fn residual_category(&self) -> Option<&str> {
        match self.ingredient {
            Some(_) => self.category(),
            None => None,
        }
    }
}

/// Trim a selector/input value, mapping blanks and `All` to `None`
pub fn normalize_selection(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(ALL))
        .map(String::from)
}
