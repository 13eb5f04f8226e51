//! Query State Transitions
//!
//! Pure reducer from (current query, shopper action) to the next query.

use crate::models::{Category, Query, SortKey};

/// Shopper actions that change the catalog query
#[derive(Debug, Clone, PartialEq)]
pub enum QueryAction {
    SelectCategory(Category),
    SelectSort(SortKey),
    /// Commit the search draft (Enter key or search button)
    SubmitSearch(String),
    /// Search draft was emptied
    ClearSearch,
    SetPage(u32),
}

/// Compute the next query. Every action except a page change or a search
/// clear starts over from page 1.
pub fn reduce(query: &Query, action: QueryAction) -> Query {
    let mut next = query.clone();
    match action {
        QueryAction::SelectCategory(category) => {
            next.category = category;
            next.page = 1;
        }
        QueryAction::SelectSort(sort) => {
            next.sort = sort;
            next.page = 1;
        }
        QueryAction::SubmitSearch(text) if text.is_empty() => {
            next.search.clear();
        }
        QueryAction::SubmitSearch(text) => {
            next.search = text;
            next.page = 1;
        }
        QueryAction::ClearSearch => {
            next.search.clear();
        }
        QueryAction::SetPage(page) => {
            next.page = page.max(1);
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_page(page: u32) -> Query {
        Query {
            page,
            limit: 8,
            sort: SortKey::Price,
            category: Category::Juice,
            search: "berry".to_string(),
        }
    }

    #[test]
    fn test_resetting_actions_return_to_first_page() {
        let actions = vec![
            QueryAction::SelectCategory(Category::Tea),
            QueryAction::SelectCategory(Category::Juice),
            QueryAction::SelectSort(SortKey::Views),
            QueryAction::SelectSort(SortKey::Price),
            QueryAction::SubmitSearch("latte".to_string()),
        ];
        for action in actions {
            let next = reduce(&on_page(5), action.clone());
            assert_eq!(next.page, 1, "{:?}", action);
        }
    }

    #[test]
    fn test_set_page() {
        let next = reduce(&on_page(1), QueryAction::SetPage(3));
        assert_eq!(next, on_page(3));
    }

    #[test]
    fn test_set_page_zero_clamps_to_one() {
        let next = reduce(&on_page(4), QueryAction::SetPage(0));
        assert_eq!(next.page, 1);
    }

    #[test]
    fn test_clear_search_keeps_other_parameters() {
        let next = reduce(&on_page(2), QueryAction::ClearSearch);
        assert_eq!(next.search, "");
        assert_eq!(next.page, 2);
        assert_eq!(next.sort, SortKey::Price);
        assert_eq!(next.category, Category::Juice);
        assert_eq!(next.limit, 8);
    }

    #[test]
    fn test_submit_empty_search_acts_as_clear() {
        let next = reduce(&on_page(2), QueryAction::SubmitSearch(String::new()));
        assert_eq!(next, reduce(&on_page(2), QueryAction::ClearSearch));
    }

    #[test]
    fn test_select_category_leaves_sort_and_search() {
        let next = reduce(&on_page(1), QueryAction::SelectCategory(Category::Ade));
        assert_eq!(next.category, Category::Ade);
        assert_eq!(next.sort, SortKey::Price);
        assert_eq!(next.search, "berry");
    }

    #[test]
    fn test_reduce_does_not_touch_input() {
        let before = on_page(3);
        let _ = reduce(&before, QueryAction::SelectSort(SortKey::Recency));
        assert_eq!(before, on_page(3));
    }
}
