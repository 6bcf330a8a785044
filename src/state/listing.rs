//! Equipment listing filters and sort order

use super::marketplace::EquipmentSummary;
use super::wizard::Money;

/// Wildcard filter value
pub const ALL: &str = "All";

pub const CATEGORY_OPTIONS: &[&str] = &[
    ALL,
    "Wireline Tools",
    "Fishing Tools",
    "Wellhead Equipment",
    "Pumps",
    "Compressors",
];

pub const LOCATION_OPTIONS: &[&str] = &[ALL, "Nigeria", "Angola", "Ghana", "South Africa", "Egypt"];

/// Daily price bands offered in the price dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceBand {
    #[default]
    All,
    UpTo500,
    From500To1000,
    From1000To2000,
    Over2000,
}

impl PriceBand {
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::UpTo500,
            Self::UpTo500 => Self::From500To1000,
            Self::From500To1000 => Self::From1000To2000,
            Self::From1000To2000 => Self::Over2000,
            Self::Over2000 => Self::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::UpTo500 => "$0-$500",
            Self::From500To1000 => "$500-$1000",
            Self::From1000To2000 => "$1000-$2000",
            Self::Over2000 => "$2000+",
        }
    }

    /// Half-open `[low, high)` bounds
    fn bounds(self) -> (Money, Option<Money>) {
        match self {
            Self::All => (Money::MIN, None),
            Self::UpTo500 => (0, Some(500)),
            Self::From500To1000 => (500, Some(1000)),
            Self::From1000To2000 => (1000, Some(2000)),
            Self::Over2000 => (2000, None),
        }
    }

    pub fn contains(self, price: Money) -> bool {
        let (low, high) = self.bounds();
        price >= low && high.map_or(true, |high| price < high)
    }
}

/// Sort order for listing results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingSort {
    /// Catalog order
    #[default]
    Relevance,
    PriceAsc,
    PriceDesc,
    Rating,
}

impl ListingSort {
    pub fn next(self) -> Self {
        match self {
            Self::Relevance => Self::PriceAsc,
            Self::PriceAsc => Self::PriceDesc,
            Self::PriceDesc => Self::Rating,
            Self::Rating => Self::Relevance,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Relevance => "Relevance",
            Self::PriceAsc => "Price: Low to High",
            Self::PriceDesc => "Price: High to Low",
            Self::Rating => "Rating: High to Low",
        }
    }
}

fn cycle_option(options: &[&str], current: &str) -> String {
    let index = options.iter().position(|o| *o == current).unwrap_or(0);
    options[(index + 1) % options.len()].to_string()
}

/// Listing view filter state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingFilters {
    pub category: String,
    pub location: String,
    pub price_band: PriceBand,
    pub search: String,
    pub sort: ListingSort,
}

impl Default for ListingFilters {
    fn default() -> Self {
        Self {
            category: ALL.to_string(),
            location: ALL.to_string(),
            price_band: PriceBand::default(),
            search: String::new(),
            sort: ListingSort::default(),
        }
    }
}

impl ListingFilters {
    /// Filters preset to one category, used when opening a landing page category
    pub fn for_category(category: &str) -> Self {
        Self {
            category: category.to_string(),
            ..Default::default()
        }
    }

    pub fn cycle_category(&mut self) {
        self.category = cycle_option(CATEGORY_OPTIONS, &self.category);
    }

    pub fn cycle_location(&mut self) {
        self.location = cycle_option(LOCATION_OPTIONS, &self.location);
    }

    pub fn cycle_price_band(&mut self) {
        self.price_band = self.price_band.next();
    }

    pub fn cycle_sort(&mut self) {
        self.sort = self.sort.next();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_filtered(&self) -> bool {
        self.category != ALL
            || self.location != ALL
            || self.price_band != PriceBand::All
            || !self.search.trim().is_empty()
    }

    pub fn matches(&self, item: &EquipmentSummary) -> bool {
        if self.category != ALL && item.category != self.category {
            return false;
        }
        if self.location != ALL && item.location != self.location {
            return false;
        }
        if !self.price_band.contains(item.price_per_day) {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty() {
            let haystacks = [&item.name, &item.vendor, &item.category];
            if !haystacks
                .iter()
                .any(|h| h.to_lowercase().contains(&needle))
            {
                return false;
            }
        }
        true
    }

    /// Filter and sort a catalog listing
    pub fn apply<'a>(&self, items: &'a [EquipmentSummary]) -> Vec<&'a EquipmentSummary> {
        let mut results: Vec<_> = items.iter().filter(|i| self.matches(i)).collect();
        match self.sort {
            ListingSort::Relevance => {}
            ListingSort::PriceAsc => results.sort_by_key(|i| i.price_per_day),
            ListingSort::PriceDesc => results.sort_by(|a, b| b.price_per_day.cmp(&a.price_per_day)),
            ListingSort::Rating => results.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::marketplace::Availability;
    use pretty_assertions::assert_eq;

    fn item(id: &str, category: &str, location: &str, price: Money, rating: f32) -> EquipmentSummary {
        EquipmentSummary {
            id: id.to_string(),
            name: format!("{category} unit"),
            category: category.to_string(),
            vendor: "Weatherford".to_string(),
            rating,
            reviews: 10,
            price_per_day: price,
            location: location.to_string(),
            availability: Availability::Available,
            show_price: true,
            image_url: String::new(),
        }
    }

    fn catalog() -> Vec<EquipmentSummary> {
        vec![
            item("EQ-001", "Wireline Tools", "Nigeria", 1250, 4.8),
            item("EQ-002", "Pumps", "Angola", 890, 4.9),
            item("EQ-003", "Wellhead Equipment", "Nigeria", 2100, 4.7),
            item("EQ-004", "Fishing Tools", "Ghana", 750, 4.6),
            item("EQ-006", "Pumps", "Egypt", 500, 4.9),
        ]
    }

    fn ids(items: &[&EquipmentSummary]) -> Vec<String> {
        items.iter().map(|i| i.id.clone()).collect()
    }

    mod filters {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_shows_everything_in_order() {
            let filters = ListingFilters::default();
            let items = catalog();
            assert_eq!(filters.apply(&items).len(), items.len());
            assert!(!filters.is_filtered());
        }

        #[test]
        fn test_category_and_location_are_exact_matches() {
            let items = catalog();
            let mut filters = ListingFilters::for_category("Pumps");
            assert_eq!(ids(&filters.apply(&items)), vec!["EQ-002", "EQ-006"]);

            filters.location = "Egypt".to_string();
            assert_eq!(ids(&filters.apply(&items)), vec!["EQ-006"]);

            filters.category = "pumps".to_string();
            assert!(filters.apply(&items).is_empty());
        }

        #[test]
        fn test_price_band_is_half_open() {
            let items = catalog();
            let mut filters = ListingFilters {
                price_band: PriceBand::UpTo500,
                ..Default::default()
            };
            assert!(filters.apply(&items).is_empty());

            filters.price_band = PriceBand::From500To1000;
            assert_eq!(ids(&filters.apply(&items)), vec!["EQ-002", "EQ-004", "EQ-006"]);

            filters.price_band = PriceBand::Over2000;
            assert_eq!(ids(&filters.apply(&items)), vec!["EQ-003"]);
        }

        #[test]
        fn test_search_is_case_insensitive_over_name_vendor_category() {
            let items = catalog();
            let mut filters = ListingFilters {
                search: "WIRELINE".to_string(),
                ..Default::default()
            };
            assert_eq!(ids(&filters.apply(&items)), vec!["EQ-001"]);

            filters.search = "weather".to_string();
            assert_eq!(filters.apply(&items).len(), items.len());

            filters.search = "   ".to_string();
            assert!(!filters.is_filtered());
        }

        #[test]
        fn test_reset_clears_everything() {
            let mut filters = ListingFilters::for_category("Pumps");
            filters.cycle_price_band();
            filters.cycle_sort();
            filters.reset();
            assert_eq!(filters, ListingFilters::default());
        }
    }

    mod cycling {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_category_cycle_wraps_to_all() {
            let mut filters = ListingFilters::default();
            for _ in 0..CATEGORY_OPTIONS.len() - 1 {
                filters.cycle_category();
            }
            assert_eq!(filters.category, "Compressors");
            filters.cycle_category();
            assert_eq!(filters.category, ALL);
        }

        #[test]
        fn test_unknown_location_restarts_cycle() {
            let mut filters = ListingFilters {
                location: "Mars".to_string(),
                ..Default::default()
            };
            filters.cycle_location();
            assert_eq!(filters.location, "Nigeria");
        }

        #[test]
        fn test_price_band_cycle_returns_to_all() {
            let mut band = PriceBand::All;
            for _ in 0..5 {
                band = band.next();
            }
            assert_eq!(band, PriceBand::All);
        }
    }

    #[test]
    fn test_sort_orders() {
        let items = catalog();
        let mut filters = ListingFilters::default();

        filters.sort = ListingSort::PriceAsc;
        assert_eq!(
            ids(&filters.apply(&items)),
            vec!["EQ-006", "EQ-004", "EQ-002", "EQ-001", "EQ-003"]
        );

        filters.sort = ListingSort::PriceDesc;
        assert_eq!(ids(&filters.apply(&items))[0], "EQ-003");

        filters.sort = ListingSort::Rating;
        // Stable sort keeps catalog order for equal ratings
        assert_eq!(
            ids(&filters.apply(&items)),
            vec!["EQ-002", "EQ-006", "EQ-001", "EQ-003", "EQ-004"]
        );
    }
}
