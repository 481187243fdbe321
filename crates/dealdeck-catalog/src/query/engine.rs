//! The deal store and view derivation.

use crate::catalog::{Category, Deal, Source};
use crate::error::CatalogError;
use crate::ids::DealId;
use crate::query::{QueryState, SortOption};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Owns the canonical deal collection and the current query state, and
/// derives the filtered-and-ordered view on demand.
///
/// The collection is static after construction. The derived view is a pure
/// function of (collection, state), memoized as an index list and
/// invalidated whenever any state field actually changes.
#[derive(Debug)]
pub struct DealStore {
    deals: Vec<Deal>,
    by_id: HashMap<DealId, usize>,
    state: QueryState,
    cache: Option<Vec<usize>>,
}

impl DealStore {
    /// Ingest the full collection. Rejects invalid records and duplicate ids.
    pub fn new(deals: Vec<Deal>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(deals.len());
        for (idx, deal) in deals.iter().enumerate() {
            deal.validate()?;
            if by_id.insert(deal.id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateDeal(deal.id.to_string()));
            }
        }
        debug!(count = deals.len(), "deal store ingested");
        Ok(Self {
            deals,
            by_id,
            state: QueryState::new(),
            cache: None,
        })
    }

    /// Number of deals in the full collection.
    pub fn len(&self) -> usize {
        self.deals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deals.is_empty()
    }

    /// The full collection, in ingest order.
    pub fn deals(&self) -> &[Deal] {
        &self.deals
    }

    /// The current query state.
    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// Replace the source filter. `None` clears it.
    pub fn set_source_filter(&mut self, source: Option<Source>) {
        if self.state.source == source {
            trace!(?source, "source filter unchanged");
            return;
        }
        debug!(?source, "source filter set");
        self.state.source = source;
        self.cache = None;
    }

    /// Replace the category filter. `None` clears it.
    pub fn set_category_filter(&mut self, category: Option<Category>) {
        if self.state.category == category {
            trace!(?category, "category filter unchanged");
            return;
        }
        debug!(?category, "category filter set");
        self.state.category = category;
        self.cache = None;
    }

    /// Replace the search term verbatim. Empty matches all.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if self.state.search_term == term {
            trace!(%term, "search term unchanged");
            return;
        }
        debug!(%term, "search term set");
        self.state.search_term = term;
        self.cache = None;
    }

    /// Replace the active sort.
    pub fn set_sort_option(&mut self, sort: SortOption) {
        if self.state.sort == sort {
            trace!(%sort, "sort option unchanged");
            return;
        }
        debug!(%sort, "sort option set");
        self.state.sort = sort;
        self.cache = None;
    }

    /// The filtered-and-ordered view under the current state.
    ///
    /// Recomputed lazily; repeated reads without a state change reuse the
    /// memoized ordering.
    pub fn derived_view(&mut self) -> Vec<&Deal> {
        let deals = &self.deals;
        let state = &self.state;
        let indices = self.cache.get_or_insert_with(|| {
            let indices = derive(deals, state);
            debug!(matched = indices.len(), total = deals.len(), "view derived");
            indices
        });
        indices.iter().map(|&i| &self.deals[i]).collect()
    }

    /// Look up a deal by id over the full collection, ignoring active
    /// filters. A detail page may be opened for a deal the current filters
    /// would hide.
    pub fn find_by_id(&self, id: &DealId) -> Option<&Deal> {
        self.by_id.get(id).map(|&i| &self.deals[i])
    }

    /// Deals from the current view sharing the given deal's category,
    /// excluding the deal itself, capped at `limit`.
    pub fn related_deals(&mut self, id: &DealId, limit: usize) -> Vec<&Deal> {
        let Some(deal) = self.find_by_id(id) else {
            return Vec::new();
        };
        let category = deal.category;
        let id = id.clone();
        self.derived_view()
            .into_iter()
            .filter(|d| d.category == category && d.id != id)
            .take(limit)
            .collect()
    }
}

/// Pure derivation: filter by source, then category, then title substring,
/// then one stable sort. Returns indices into `deals`.
fn derive(deals: &[Deal], state: &QueryState) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..deals.len()).collect();

    if let Some(source) = state.source {
        indices.retain(|&i| deals[i].source == source);
    }
    if let Some(category) = state.category {
        indices.retain(|&i| deals[i].category == category);
    }
    if !state.search_term.is_empty() {
        indices.retain(|&i| deals[i].title_matches(&state.search_term));
    }

    // Stable sort, no secondary key: ties keep ingest order.
    match state.sort {
        SortOption::Latest => {
            indices.sort_by(|&a, &b| deals[b].posted_at.cmp(&deals[a].posted_at));
        }
        SortOption::Discount => {
            indices.sort_by(|&a, &b| {
                deals[b].discount_percentage.cmp(&deals[a].discount_percentage)
            });
        }
        SortOption::PriceLowToHigh => {
            indices.sort_by(|&a, &b| deals[a].discounted_price.cmp(&deals[b].discounted_price));
        }
        SortOption::PriceHighToLow => {
            indices.sort_by(|&a, &b| deals[b].discounted_price.cmp(&deals[a].discounted_price));
        }
        SortOption::Trending => {
            indices.sort_by(|&a, &b| deals[b].popularity.cmp(&deals[a].popularity));
        }
    }

    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Price;
    use chrono::{TimeZone, Utc};

    fn deal(
        id: &str,
        title: &str,
        source: Source,
        category: Category,
        original: f64,
        discounted: f64,
        discount: u8,
        posted_hour: u32,
        popularity: u32,
    ) -> Deal {
        Deal {
            id: DealId::new(id),
            title: title.to_string(),
            image: format!("https://picsum.photos/seed/{id}/400/300"),
            original_price: Price::from_rupees(original),
            discounted_price: Price::from_rupees(discounted),
            discount_percentage: discount,
            source,
            category,
            posted_at: Utc.with_ymd_and_hms(2024, 3, 1, posted_hour, 0, 0).unwrap(),
            popularity,
            affiliate_link: format!("https://example.com/deal/{id}"),
        }
    }

    fn fixture() -> Vec<Deal> {
        vec![
            deal("a", "Budget Phone Case", Source::Amazon, Category::Mobiles, 499.0, 299.0, 40, 1, 800),
            deal("b", "Smart TV 43 inch", Source::Flipkart, Category::Electronics, 32999.0, 24999.0, 24, 4, 2500),
            deal("c", "Phone Stand", Source::Amazon, Category::Electronics, 899.0, 299.0, 67, 2, 150),
            deal("d", "Cotton Kurta", Source::Flipkart, Category::Fashion, 1499.0, 749.0, 50, 3, 4200),
            deal("e", "Mixer Grinder", Source::Amazon, Category::Appliances, 4999.0, 3499.0, 30, 5, 90),
        ]
    }

    fn ids(view: &[&Deal]) -> Vec<String> {
        view.iter().map(|d| d.id.to_string()).collect()
    }

    fn store() -> DealStore {
        DealStore::new(fixture()).unwrap()
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut deals = fixture();
        let mut dup = deals[0].clone();
        dup.title = "Different Title".to_string();
        deals.push(dup);
        assert!(matches!(
            DealStore::new(deals),
            Err(CatalogError::DuplicateDeal(_))
        ));
    }

    #[test]
    fn test_default_view_is_latest() {
        let mut store = store();
        // Most recent posted_at first.
        assert_eq!(ids(&store.derived_view()), ["e", "b", "d", "c", "a"]);
    }

    #[test]
    fn test_completeness_without_filters() {
        let mut store = store();
        let store_len = store.len();
        let view = store.derived_view();
        assert_eq!(view.len(), store_len);
        let mut seen: Vec<_> = ids(&view);
        seen.sort();
        assert_eq!(seen, ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_source_filter() {
        let mut store = store();
        store.set_source_filter(Some(Source::Amazon));
        let view = store.derived_view();
        assert!(!view.is_empty());
        assert!(view.iter().all(|d| d.source == Source::Amazon));
    }

    #[test]
    fn test_category_filter() {
        let mut store = store();
        store.set_category_filter(Some(Category::Electronics));
        assert_eq!(ids(&store.derived_view()), ["b", "c"]);
    }

    #[test]
    fn test_filters_compose() {
        let mut store = store();
        store.set_source_filter(Some(Source::Amazon));
        store.set_category_filter(Some(Category::Electronics));
        assert_eq!(ids(&store.derived_view()), ["c"]);
    }

    #[test]
    fn test_search_case_insensitive_substring() {
        let mut store = store();
        store.set_search_term("PHONE");
        let view = store.derived_view();
        assert_eq!(view.len(), 2);
        assert!(view.iter().all(|d| d.title.to_lowercase().contains("phone")));
    }

    #[test]
    fn test_search_no_matches_is_empty_not_error() {
        let mut store = store();
        store.set_search_term("XYZ");
        assert!(store.derived_view().is_empty());
        // Lookup still works over the full collection.
        assert!(store.find_by_id(&DealId::new("a")).is_some());
    }

    #[test]
    fn test_sort_price_low_to_high() {
        let mut store = store();
        store.set_sort_option(SortOption::PriceLowToHigh);
        let view = store.derived_view();
        for pair in view.windows(2) {
            assert!(pair[0].discounted_price <= pair[1].discounted_price);
        }
    }

    #[test]
    fn test_sort_price_high_to_low() {
        let mut store = store();
        store.set_sort_option(SortOption::PriceHighToLow);
        let view = store.derived_view();
        for pair in view.windows(2) {
            assert!(pair[0].discounted_price >= pair[1].discounted_price);
        }
    }

    #[test]
    fn test_sort_discount() {
        let mut store = store();
        store.set_sort_option(SortOption::Discount);
        assert_eq!(ids(&store.derived_view()), ["c", "d", "a", "e", "b"]);
    }

    #[test]
    fn test_sort_trending() {
        let mut store = store();
        store.set_sort_option(SortOption::Trending);
        assert_eq!(ids(&store.derived_view()), ["d", "b", "a", "c", "e"]);
    }

    #[test]
    fn test_price_tie_is_stable() {
        // "a" and "c" share a discounted price; ingest order breaks the tie.
        let mut store = store();
        store.set_sort_option(SortOption::PriceLowToHigh);
        let view = store.derived_view();
        let a = view.iter().position(|d| d.id.as_str() == "a").unwrap();
        let c = view.iter().position(|d| d.id.as_str() == "c").unwrap();
        assert!(a < c);
    }

    #[test]
    fn test_setters_idempotent() {
        let mut store = store();
        store.set_source_filter(Some(Source::Flipkart));
        store.set_sort_option(SortOption::Trending);
        let once = ids(&store.derived_view());
        store.set_source_filter(Some(Source::Flipkart));
        store.set_sort_option(SortOption::Trending);
        store.set_search_term("");
        assert_eq!(ids(&store.derived_view()), once);
    }

    #[test]
    fn test_setter_order_does_not_matter() {
        let mut first = store();
        first.set_search_term("phone");
        first.set_source_filter(Some(Source::Amazon));
        first.set_sort_option(SortOption::PriceLowToHigh);

        let mut second = store();
        second.set_sort_option(SortOption::PriceLowToHigh);
        second.set_source_filter(Some(Source::Amazon));
        second.set_search_term("phone");

        assert_eq!(ids(&first.derived_view()), ids(&second.derived_view()));
    }

    #[test]
    fn test_clearing_filter_restores_items() {
        let mut store = store();
        store.set_source_filter(Some(Source::Amazon));
        assert_eq!(store.derived_view().len(), 3);
        store.set_source_filter(None);
        assert_eq!(store.derived_view().len(), 5);
    }

    #[test]
    fn test_lookup_ignores_filters() {
        let mut store = store();
        store.set_source_filter(Some(Source::Amazon));
        // "b" is Flipkart, excluded from the view but still addressable.
        let deal = store.find_by_id(&DealId::new("b")).unwrap();
        assert_eq!(deal.source, Source::Flipkart);
        assert!(!ids(&store.derived_view()).contains(&"b".to_string()));
    }

    #[test]
    fn test_lookup_unknown_id_is_none() {
        let store = store();
        assert!(store.find_by_id(&DealId::new("missing")).is_none());
    }

    #[test]
    fn test_related_deals() {
        let mut store = store();
        let related = store.related_deals(&DealId::new("b"), 5);
        assert_eq!(ids(&related), ["c"]);
    }

    #[test]
    fn test_related_deals_excludes_self_and_caps() {
        let mut store = store();
        let related = store.related_deals(&DealId::new("c"), 0);
        assert!(related.is_empty());
        let related = store.related_deals(&DealId::new("missing"), 5);
        assert!(related.is_empty());
    }

    // Scenario from the product brief: two deals, filter then re-sort.
    #[test]
    fn test_filter_then_trending_scenario() {
        let deals = vec![
            deal("a", "Deal A", Source::Amazon, Category::Electronics, 100.0, 80.0, 20, 1, 10),
            deal("b", "Deal B", Source::Flipkart, Category::Electronics, 200.0, 150.0, 25, 2, 50),
        ];
        let mut store = DealStore::new(deals).unwrap();

        store.set_source_filter(Some(Source::Amazon));
        assert_eq!(ids(&store.derived_view()), ["a"]);

        store.set_source_filter(None);
        store.set_sort_option(SortOption::Trending);
        assert_eq!(ids(&store.derived_view()), ["b", "a"]);
    }
}
