//! Search and category filtering
//!
//! A record passes when it matches the search term (company, description or
//! one-liner) AND its category matches at least one selected category. Both
//! tests are case-insensitive substring matches; an empty term or an empty
//! selection matches everything. Output keeps input order.

use hashlink::LinkedHashSet;

use crate::constants::DEFAULT_PAGE_SIZE;
use crate::domain::company::CompanyRecord;
use crate::helpers::contains_lowercase;

/// User-controlled view state over the dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    search_term: String,
    /// Lowercased, insertion-ordered, no duplicates
    selected_categories: LinkedHashSet<String>,
    /// 1-based
    current_page: usize,
    page_size: usize,
}

impl FilterState {
    pub fn new(page_size: usize) -> Self {
        Self {
            search_term: String::new(),
            selected_categories: LinkedHashSet::new(),
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    // ==================== Getters ====================

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Selected categories in the order they were added
    pub fn selected_categories(&self) -> impl Iterator<Item = &str> {
        self.selected_categories.iter().map(String::as_str)
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.selected_categories.contains(&category.to_lowercase())
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty() && self.selected_categories.is_empty()
    }

    // ==================== Mutations ====================
    // Every filter change returns the view to the first page.

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    /// Add a category; returns `false` for empty or already-selected values
    pub fn add_category(&mut self, category: &str) -> bool {
        let category = category.to_lowercase();
        if category.is_empty() || self.selected_categories.contains(&category) {
            return false;
        }
        self.selected_categories.insert(category);
        self.current_page = 1;
        true
    }

    pub fn remove_category(&mut self, category: &str) -> bool {
        let removed = self.selected_categories.remove(&category.to_lowercase());
        if removed {
            self.current_page = 1;
        }
        removed
    }

    /// Drop the search term and all category filters
    pub fn clear(&mut self) {
        self.search_term.clear();
        self.selected_categories.clear();
        self.current_page = 1;
    }

    /// Move to `page`, clamped to `[1, max(1, total_pages)]`
    pub fn set_page(&mut self, page: usize, total_pages: usize) {
        self.current_page = page.clamp(1, total_pages.max(1));
    }

    /// Whether `record` passes the search and category predicates
    pub fn matches(&self, record: &CompanyRecord) -> bool {
        let term = self.search_term.to_lowercase();
        self.matches_lowered(record, &term)
    }

    fn matches_lowered(&self, record: &CompanyRecord, term: &str) -> bool {
        let matches_search = term.is_empty()
            || contains_lowercase(&record.company, term)
            || contains_lowercase(&record.description, term)
            || contains_lowercase(&record.one_liner, term);

        let matches_category = self.selected_categories.is_empty()
            || self
                .selected_categories
                .iter()
                .any(|category| contains_lowercase(&record.category, category));

        matches_search && matches_category
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Stable filter over any sequence of record references
pub fn filter<'a, I>(records: I, state: &FilterState) -> Vec<&'a CompanyRecord>
where
    I: IntoIterator<Item = &'a CompanyRecord>,
{
    let term = state.search_term.to_lowercase();
    records
        .into_iter()
        .filter(|record| state.matches_lowered(record, &term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(name: &str, category: &str, description: &str, one_liner: &str) -> CompanyRecord {
        CompanyRecord {
            company: name.into(),
            category: category.into(),
            description: description.into(),
            one_liner: one_liner.into(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<CompanyRecord> {
        vec![
            company("Acme", "AI", "Agents for accounting", "Books that close themselves"),
            company("Ledgerly", "Fintech", "Payments infra", "Stripe for ledgers"),
            company("Medly", "Healthcare", "Clinic software", "AI scribe for doctors"),
            company("Acme", "B2B SaaS", "Second Acme", "Duplicate names are fine"),
            company("Orbit", "Industrials", "Satellite buses", "Space made simple"),
        ]
    }

    fn names(rows: &[&CompanyRecord]) -> Vec<String> {
        rows.iter().map(|r| r.company.clone()).collect()
    }

    #[test]
    fn test_empty_state_passes_everything() {
        let records = sample();
        let state = FilterState::default();
        assert_eq!(filter(&records, &state).len(), records.len());
    }

    #[test]
    fn test_search_spans_fields_case_insensitive() {
        let records = sample();
        let mut state = FilterState::default();

        state.set_search_term("ACME");
        assert_eq!(names(&filter(&records, &state)), vec!["Acme", "Acme"]);

        state.set_search_term("payments");
        assert_eq!(names(&filter(&records, &state)), vec!["Ledgerly"]);

        state.set_search_term("ai scribe");
        assert_eq!(names(&filter(&records, &state)), vec!["Medly"]);
    }

    #[test]
    fn test_categories_or_semantics() {
        let records = sample();
        let mut state = FilterState::default();
        assert!(state.add_category("Fintech"));
        assert!(state.add_category("industrials"));

        assert_eq!(names(&filter(&records, &state)), vec!["Ledgerly", "Orbit"]);
    }

    #[test]
    fn test_category_is_substring_match() {
        let records = sample();
        let mut state = FilterState::default();
        state.add_category("saas");
        assert_eq!(names(&filter(&records, &state)), vec!["Acme"]);
        assert_eq!(filter(&records, &state)[0].category, "B2B SaaS");
    }

    #[test]
    fn test_search_and_category_combine() {
        let records = sample();
        let mut state = FilterState::default();
        state.set_search_term("ai");
        state.add_category("healthcare");
        assert_eq!(names(&filter(&records, &state)), vec!["Medly"]);
    }

    #[test]
    fn test_filter_idempotent() {
        let records = sample();
        let mut state = FilterState::default();
        state.set_search_term("a");
        state.add_category("a");

        let once = filter(&records, &state);
        let twice = filter(once.iter().copied(), &state);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_selected_categories_ordered_and_unique() {
        let mut state = FilterState::default();
        assert!(state.add_category("Fintech"));
        assert!(state.add_category("AI"));
        assert!(!state.add_category("fintech"));
        assert!(!state.add_category(""));

        assert_eq!(
            state.selected_categories().collect::<Vec<_>>(),
            vec!["fintech", "ai"]
        );
        assert!(state.has_category("FINTECH"));

        assert!(state.remove_category("Fintech"));
        assert!(!state.remove_category("fintech"));
        assert_eq!(state.selected_categories().collect::<Vec<_>>(), vec!["ai"]);
    }

    #[test]
    fn test_mutations_reset_page() {
        let mut state = FilterState::new(10);
        state.set_page(3, 5);
        assert_eq!(state.current_page(), 3);

        state.set_search_term("x");
        assert_eq!(state.current_page(), 1);

        state.set_page(4, 5);
        state.add_category("ai");
        assert_eq!(state.current_page(), 1);

        state.set_page(2, 5);
        state.clear();
        assert_eq!(state.current_page(), 1);
        assert!(state.is_empty());
    }

    #[test]
    fn test_set_page_clamps() {
        let mut state = FilterState::new(10);
        state.set_page(0, 5);
        assert_eq!(state.current_page(), 1);
        state.set_page(9, 5);
        assert_eq!(state.current_page(), 5);
        state.set_page(3, 0);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_zero_page_size_is_raised() {
        assert_eq!(FilterState::new(0).page_size(), 1);
    }
}
