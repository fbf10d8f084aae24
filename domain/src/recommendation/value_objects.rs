//! Recommendation output values

use crate::catalog::Category;
use serde::{Deserialize, Serialize};

/// Products and tips for one routine step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecommendation {
    pub category: Category,
    /// Never empty
    pub products: Vec<String>,
    pub tips: Vec<String>,
}

impl CategoryRecommendation {
    /// First product of the short-list
    pub fn top_pick(&self) -> Option<&str> {
        self.products.first().map(String::as_str)
    }
}

/// Ordered recommendations: Cleanser, Moisturizer, (Treatment), Sunscreen
///
/// Only the engine builds these, so the order always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecommendationSet(Vec<CategoryRecommendation>);

impl RecommendationSet {
    pub(crate) fn from_ordered(items: Vec<CategoryRecommendation>) -> Self {
        debug_assert!(items.windows(2).all(|w| w[0].category < w[1].category));
        Self(items)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CategoryRecommendation> {
        self.0.iter()
    }

    pub fn get(&self, category: Category) -> Option<&CategoryRecommendation> {
        self.0.iter().find(|item| item.category == category)
    }

    pub fn categories(&self) -> Vec<Category> {
        self.0.iter().map(|item| item.category).collect()
    }

    pub fn includes(&self, category: Category) -> bool {
        self.get(category).is_some()
    }

    pub fn as_slice(&self) -> &[CategoryRecommendation] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<CategoryRecommendation> {
        self.0
    }
}

impl<'a> IntoIterator for &'a RecommendationSet {
    type Item = &'a CategoryRecommendation;
    type IntoIter = std::slice::Iter<'a, CategoryRecommendation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(category: Category, product: &str) -> CategoryRecommendation {
        CategoryRecommendation {
            category,
            products: vec![product.to_string()],
            tips: vec![],
        }
    }

    #[test]
    fn test_lookup_by_category() {
        let set = RecommendationSet::from_ordered(vec![
            item(Category::Cleanser, "C"),
            item(Category::Sunscreen, "S"),
        ]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(Category::Sunscreen).unwrap().top_pick(), Some("S"));
        assert!(!set.includes(Category::Treatment));
        assert_eq!(
            set.categories(),
            vec![Category::Cleanser, Category::Sunscreen]
        );
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let set = RecommendationSet::from_ordered(vec![item(Category::Cleanser, "C")]);
        let json = serde_json::to_value(&set).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["category"], "cleanser");
        assert_eq!(json[0]["products"][0], "C");
    }
}
