//! Listing filters: a conjunction of independent, optional predicates.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::models::event::{EventCategory, EventType};
use crate::models::view::EnrichedView;

/// Which views to keep. Every field defaults to "no restriction" except
/// hidden views, which are excluded unless `show_hidden` is set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    #[builder(default)]
    pub show_hidden: bool,
    #[builder(default)]
    pub bookmarked_only: bool,
    /// Keep views whose type set intersects this one. Empty means any.
    #[builder(default)]
    pub event_types: Vec<EventType>,
    /// Keep views in any of these categories. Empty means any.
    #[builder(default)]
    pub event_categories: Vec<EventCategory>,
    /// Keep views on any of these continents. Empty means any; a view
    /// without a recorded continent never matches a non-empty filter.
    #[builder(default)]
    pub continents: Vec<String>,
}

impl FilterCriteria {
    /// Whether a single view passes every predicate.
    pub fn matches(&self, view: &EnrichedView) -> bool {
        if view.hidden && !self.show_hidden {
            return false;
        }
        if self.bookmarked_only && !view.bookmarked {
            return false;
        }
        if !self.event_types.is_empty()
            && !view.event_types.iter().any(|t| self.event_types.contains(t))
        {
            return false;
        }
        if !self.event_categories.is_empty() && !self.event_categories.contains(&view.category) {
            return false;
        }
        if !self.continents.is_empty() {
            // Unknown location fails closed.
            match view.location.continent.as_deref() {
                Some(continent) => {
                    if !self.continents.iter().any(|c| c == continent) {
                        return false;
                    }
                }
                None => return false,
            }
        }
        true
    }
}

/// Apply the criteria to a batch of views.
pub fn filter(views: Vec<EnrichedView>, criteria: &FilterCriteria) -> Vec<EnrichedView> {
    views.into_iter().filter(|v| criteria.matches(v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::EventId;
    use crate::dates::DateValue;
    use crate::models::event::{EventDates, EventFormat, Location};

    fn view(slug: &str) -> EnrichedView {
        EnrichedView {
            event_id: EventId::new(),
            name: slug.to_uppercase(),
            slug: slug.into(),
            category: EventCategory::Event,
            event_types: vec![],
            location: Location::default(),
            dates: EventDates::builder()
                .event_format(EventFormat::SetDates)
                .build(),
            event_start: DateValue::Missing,
            open_call: None,
            oc_start: DateValue::Missing,
            oc_end: DateValue::Missing,
            open_call_status: None,
            has_active_open_call: false,
            bookmarked: false,
            hidden: false,
            application_status: None,
        }
    }

    #[test]
    fn hidden_views_are_excluded_by_default() {
        let mut hidden = view("hidden");
        hidden.hidden = true;
        let kept = filter(vec![view("shown"), hidden], &FilterCriteria::default());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].slug, "shown");
    }

    #[test]
    fn show_hidden_keeps_hidden_views() {
        let mut hidden = view("hidden");
        hidden.hidden = true;
        let criteria = FilterCriteria::builder().show_hidden(true).build();
        assert_eq!(filter(vec![hidden], &criteria).len(), 1);
    }

    #[test]
    fn bookmarked_only_drops_unbookmarked() {
        let mut marked = view("marked");
        marked.bookmarked = true;
        let criteria = FilterCriteria::builder().bookmarked_only(true).build();
        let kept = filter(vec![view("plain"), marked], &criteria);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].slug, "marked");
    }

    #[test]
    fn type_filter_matches_on_intersection() {
        let mut jam = view("jam");
        jam.event_types = vec![EventType::GraffitiJam, EventType::Other];
        let criteria = FilterCriteria::builder()
            .event_types(vec![EventType::GraffitiJam])
            .build();
        let kept = filter(vec![view("untyped"), jam], &criteria);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].slug, "jam");
    }

    #[test]
    fn category_filter_keeps_listed_categories() {
        let mut residency = view("res");
        residency.category = EventCategory::Residency;
        let criteria = FilterCriteria::builder()
            .event_categories(vec![EventCategory::Residency])
            .build();
        let kept = filter(vec![view("event"), residency], &criteria);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].slug, "res");
    }

    #[test]
    fn missing_continent_fails_closed() {
        let mut europe = view("eu");
        europe.location = Location {
            country: Some("Germany".into()),
            continent: Some("Europe".into()),
        };
        let nowhere = view("nowhere");
        let criteria = FilterCriteria::builder()
            .continents(vec!["Europe".into()])
            .build();
        let kept = filter(vec![europe, nowhere], &criteria);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].slug, "eu");
    }

    #[test]
    fn filtering_is_idempotent() {
        let mut marked = view("marked");
        marked.bookmarked = true;
        let mut hidden = view("hidden");
        hidden.hidden = true;
        let views = vec![view("plain"), marked, hidden];
        let criteria = FilterCriteria::builder().bookmarked_only(true).build();

        let once = filter(views, &criteria);
        let slugs: Vec<_> = once.iter().map(|v| v.slug.clone()).collect();
        let twice = filter(once, &criteria);
        assert_eq!(slugs, twice.iter().map(|v| v.slug.clone()).collect::<Vec<_>>());
    }
}
