//! Static showcase data: navigation entries, page pre-selection and the
//! example payloads passed through to widgets.

mod payloads;

pub use payloads::{ChartPayload, PayloadCatalog};

use serde::Serialize;

use crate::core::ChartKind;

/// Query parameter carrying the pre-selected chart on the get-started page.
pub const CHART_QUERY_PARAM: &str = "chart";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationItem {
    pub kind: ChartKind,
    pub label: &'static str,
}

/// Side navigation of the get-started page: the intro first, then one
/// entry per renderable chart.
#[must_use]
pub fn navigation_items() -> Vec<NavigationItem> {
    ChartKind::ALL
        .into_iter()
        .map(|kind| NavigationItem {
            kind,
            label: kind.title(),
        })
        .collect()
}

/// Resolves the pre-selected chart from a page location.
///
/// A `chart` query parameter wins over the fragment, even when its value is
/// not a known identifier. Both inputs may carry their leading `?`/`#`.
#[must_use]
pub fn selection_from_location(query: Option<&str>, fragment: Option<&str>) -> Option<ChartKind> {
    let from_query = query.and_then(|query| query_param(query, CHART_QUERY_PARAM));
    let candidate = from_query.or_else(|| {
        fragment
            .map(|fragment| fragment.strip_prefix('#').unwrap_or(fragment))
            .filter(|fragment| !fragment.is_empty())
    })?;
    candidate.parse().ok()
}

/// Like [`selection_from_location`], defaulting to the intro page.
#[must_use]
pub fn initial_selection(query: Option<&str>, fragment: Option<&str>) -> ChartKind {
    selection_from_location(query, fragment).unwrap_or(ChartKind::GetStarted)
}

fn query_param<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    query
        .strip_prefix('?')
        .unwrap_or(query)
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find_map(|(key, value)| (key == name).then_some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_starts_with_intro() {
        let items = navigation_items();
        assert_eq!(items.first().map(|item| item.kind), Some(ChartKind::GetStarted));
        assert_eq!(items.len(), ChartKind::ALL.len());
    }

    #[test]
    fn query_param_wins_over_fragment() {
        assert_eq!(
            selection_from_location(Some("?lang=en&chart=radar"), Some("#bar")),
            Some(ChartKind::Radar)
        );
    }

    #[test]
    fn fragment_is_used_without_query_param() {
        assert_eq!(
            selection_from_location(Some("?lang=en"), Some("#world")),
            Some(ChartKind::World)
        );
        assert_eq!(selection_from_location(None, Some("#")), None);
    }

    #[test]
    fn unknown_query_value_does_not_fall_through_to_fragment() {
        assert_eq!(selection_from_location(Some("chart=scatter"), Some("#pie")), None);
        assert_eq!(
            initial_selection(Some("chart=scatter"), Some("#pie")),
            ChartKind::GetStarted
        );
    }
}
