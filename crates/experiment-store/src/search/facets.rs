//! Facet chip lists for the filter bar.

use crate::catalog::Catalog;
use crate::search::{FacetFilter, FilterSelection, ALL_LABEL};
use serde::{Deserialize, Serialize};

/// A single facet chip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FacetChip {
    /// Chip label.
    pub label: String,
    /// Whether this chip is the current selection.
    pub selected: bool,
}

/// Chip lists for both facets.
///
/// Each list starts with `"All"` followed by the distinct values seen in the
/// catalog, in first-seen order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FacetChips {
    pub artists: Vec<FacetChip>,
    pub categories: Vec<FacetChip>,
}

impl FacetChips {
    /// Build chip lists from the catalog and mark the current selection.
    pub fn new(catalog: &Catalog, selection: &FilterSelection) -> Self {
        Self {
            artists: chips(catalog.distinct_artists(), &selection.artist),
            categories: chips(catalog.distinct_categories(), &selection.category),
        }
    }

    /// Artist chip labels.
    pub fn artist_labels(&self) -> Vec<&str> {
        self.artists.iter().map(|c| c.label.as_str()).collect()
    }

    /// Category chip labels.
    pub fn category_labels(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.label.as_str()).collect()
    }
}

fn chips(values: Vec<&str>, current: &FacetFilter) -> Vec<FacetChip> {
    std::iter::once(ALL_LABEL)
        .chain(values)
        .map(|label| FacetChip {
            label: label.to_string(),
            selected: label == current.label(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::money::Money;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![],
            vec![
                Product::new(1, "A", "Y", "Posters", Money::new(1000)),
                Product::new(2, "B", "X", "Albums", Money::new(500)),
                Product::new(3, "C", "Y", "Albums", Money::new(700)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_all_first_then_first_seen() {
        let chips = FacetChips::new(&catalog(), &FilterSelection::new());
        assert_eq!(chips.artist_labels(), vec!["All", "Y", "X"]);
        assert_eq!(chips.category_labels(), vec!["All", "Posters", "Albums"]);
    }

    #[test]
    fn test_selected_chip_marked() {
        let selection = FilterSelection::new().with_artist(FacetFilter::from_label("X"));
        let chips = FacetChips::new(&catalog(), &selection);

        let selected: Vec<&str> = chips
            .artists
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.label.as_str())
            .collect();
        assert_eq!(selected, vec!["X"]);
        assert!(chips.categories[0].selected);
    }

    #[test]
    fn test_unknown_selection_marks_nothing() {
        let selection = FilterSelection::new().with_artist(FacetFilter::from_label("Nobody"));
        let chips = FacetChips::new(&catalog(), &selection);
        assert!(chips.artists.iter().all(|c| !c.selected));
    }

    #[test]
    fn test_empty_catalog_has_only_all() {
        let empty = Catalog::new(vec![], vec![]).unwrap();
        let chips = FacetChips::new(&empty, &FilterSelection::new());
        assert_eq!(chips.artist_labels(), vec!["All"]);
        assert_eq!(chips.category_labels(), vec!["All"]);
    }
}
