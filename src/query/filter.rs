use std::str::FromStr;

use serde::Deserialize;

use crate::types::{GenderPreference, InvalidEnumValue, Property, PropertyType, RoomType};

/// Empty criteria pass everything through unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PropertyFilter {
    /// Case-insensitive free text over title, area, city and description.
    pub search: Option<String>,
    pub city: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    /// Any-of semantics; empty means no restriction.
    pub room_types: Vec<RoomType>,
    pub property_type: Option<PropertyType>,
    /// Listings marked `any` satisfy every preference.
    pub gender_preference: Option<GenderPreference>,
    /// All-of semantics, matched case-insensitively.
    pub amenities: Vec<String>,
    pub sort_by: Option<SortBy>,
}

impl PropertyFilter {
    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.city.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.room_types.is_empty()
            && self.property_type.is_none()
            && self.gender_preference.is_none()
            && self.amenities.is_empty()
            && self.sort_by.is_none()
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_owned());
        self
    }

    pub fn with_city(mut self, city: &str) -> Self {
        self.city = Some(city.to_owned());
        self
    }

    pub fn with_price_range(mut self, min: Option<i64>, max: Option<i64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn with_gender_preference(mut self, wanted: GenderPreference) -> Self {
        self.gender_preference = Some(wanted);
        self
    }

    pub fn with_sort(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    pub fn apply(&self, mut properties: Vec<Property>) -> Vec<Property> {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            properties.retain(|p| {
                p.title.to_lowercase().contains(&needle)
                    || p.area.to_lowercase().contains(&needle)
                    || p.city.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            });
        }
        if let Some(city) = &self.city {
            properties.retain(|p| p.city.eq_ignore_ascii_case(city));
        }
        if let Some(min) = self.min_price {
            properties.retain(|p| p.price >= min);
        }
        if let Some(max) = self.max_price {
            properties.retain(|p| p.price <= max);
        }
        if !self.room_types.is_empty() {
            properties.retain(|p| self.room_types.contains(&p.room_type));
        }
        if let Some(property_type) = self.property_type {
            properties.retain(|p| p.property_type == property_type);
        }
        if let Some(wanted) = self.gender_preference {
            properties.retain(|p| p.gender_preference.accepts(wanted));
        }
        if !self.amenities.is_empty() {
            properties.retain(|p| {
                self.amenities.iter().all(|wanted| {
                    p.amenities.iter().any(|have| have.eq_ignore_ascii_case(wanted))
                })
            });
        }

        match self.sort_by {
            Some(SortBy::PriceLow) => properties.sort_by_key(|p| p.price),
            Some(SortBy::PriceHigh) => properties.sort_by_key(|p| std::cmp::Reverse(p.price)),
            Some(SortBy::Rating) => properties.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            None => {}
        }

        properties
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    PriceLow,
    PriceHigh,
    Rating,
}

impl FromStr for SortBy {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price-low" => Ok(SortBy::PriceLow),
            "price-high" => Ok(SortBy::PriceHigh),
            "rating" => Ok(SortBy::Rating),
            other => Err(InvalidEnumValue {
                kind: "sort_by",
                value: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PropertyDraft;

    fn fixture() -> Vec<Property> {
        let drafts = [
            ("Sunrise PG Powai", "Mumbai", "Powai", 15000, GenderPreference::Any, 4.8, &["WiFi", "Meals", "AC"][..]),
            ("Lakeview Girls Hostel", "Delhi", "North Campus", 12000, GenderPreference::Female, 4.9, &["WiFi", "Meals", "Study Room"][..]),
            ("Koramangala Flatshare", "Bangalore", "Koramangala", 35000, GenderPreference::Any, 4.7, &["WiFi", "Parking"][..]),
            ("Budget Boys PG", "Pune", "Shivajinagar", 8000, GenderPreference::Male, 4.5, &["WiFi", "Meals"][..]),
        ];

        drafts
            .into_iter()
            .map(|(title, city, area, price, gender_preference, rating, amenities)| {
                Property::new(PropertyDraft {
                    title: title.to_owned(),
                    city: city.to_owned(),
                    area: area.to_owned(),
                    price,
                    gender_preference,
                    rating,
                    amenities: amenities.iter().map(|a| (*a).to_owned()).collect(),
                    ..PropertyDraft::default()
                })
            })
            .collect()
    }

    #[test]
    fn empty_filter_passes_everything() {
        let filter = PropertyFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(fixture()).len(), 4);
    }

    #[test]
    fn free_text_matches_area_case_insensitively() {
        let found = PropertyFilter::default().with_search("koramangala").apply(fixture());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Koramangala Flatshare");
    }

    #[test]
    fn price_range_is_inclusive() {
        let found = PropertyFilter::default()
            .with_price_range(Some(8000), Some(15000))
            .apply(fixture());
        assert_eq!(found.len(), 3);
    }

    #[test]
    fn gender_neutral_listings_pass_any_preference() {
        let found = PropertyFilter::default()
            .with_gender_preference(GenderPreference::Female)
            .apply(fixture());
        let titles: Vec<_> = found.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            ["Sunrise PG Powai", "Lakeview Girls Hostel", "Koramangala Flatshare"]
        );
    }

    #[test]
    fn amenities_require_all_of_them() {
        let filter = PropertyFilter {
            amenities: vec!["wifi".to_owned(), "meals".to_owned()],
            ..PropertyFilter::default()
        };
        assert_eq!(filter.apply(fixture()).len(), 3);
    }

    #[test]
    fn sorts_by_price_and_rating() {
        let cheapest_first = PropertyFilter::default().with_sort(SortBy::PriceLow).apply(fixture());
        assert_eq!(cheapest_first[0].price, 8000);

        let priciest_first = PropertyFilter::default().with_sort(SortBy::PriceHigh).apply(fixture());
        assert_eq!(priciest_first[0].price, 35000);

        let best_first = PropertyFilter::default().with_sort(SortBy::Rating).apply(fixture());
        assert_eq!(best_first[0].title, "Lakeview Girls Hostel");
    }

    #[test]
    fn sort_keys_parse_from_query_strings() {
        assert_eq!("price-low".parse::<SortBy>().unwrap(), SortBy::PriceLow);
        assert!("newest".parse::<SortBy>().is_err());
    }
}
