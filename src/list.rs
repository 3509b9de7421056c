//! List Filtering and Pagination
//!
//! Client-side free-text filter plus fixed-size page slicing, shared by
//! the blog and workouts pages.

use crate::models::{BlogPost, Product, WorkoutPlan};

/// Page size used by both list pages
pub const PAGE_SIZE: usize = 4;

/// Anything searchable by the free-text filter
pub trait Searchable {
    /// Lowercased concatenation of the fields the filter looks at
    fn search_text(&self) -> String;
}

impl Searchable for BlogPost {
    fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title,
            self.excerpt,
            self.category,
            self.tags.join(" ")
        )
        .to_lowercase()
    }
}

impl Searchable for WorkoutPlan {
    fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title,
            self.description,
            self.level,
            self.features.join(" ")
        )
        .to_lowercase()
    }
}

impl Searchable for Product {
    fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.description, self.category).to_lowercase()
    }
}

/// Case-insensitive substring filter, preserving source order.
/// An empty (or all-whitespace) query keeps everything.
pub fn filter_items<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.search_text().contains(&q))
        .cloned()
        .collect()
}

/// Number of pages for `matching` items at `page_size` per page
pub fn page_count(matching: usize, page_size: usize) -> usize {
    matching.div_ceil(page_size)
}

/// Slice out page `page` (1-indexed). Out-of-range pages yield an
/// empty page, never an error.
pub fn page_slice<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    if page == 0 {
        return Vec::new();
    }
    let start = (page - 1) * page_size;
    if start >= items.len() {
        return Vec::new();
    }
    let end = (start + page_size).min(items.len());
    items[start..end].to_vec()
}

/// Query + current page for a filterable, paginated list
#[derive(Clone, Debug, PartialEq)]
pub struct PagedQuery {
    query: String,
    page: usize,
}

impl PagedQuery {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            page: 1,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Changing the query always snaps back to page 1
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    /// Jump to `page`; a no-op outside `[1, total_pages]`
    pub fn goto(&mut self, page: usize, total_pages: usize) {
        if page >= 1 && page <= total_pages {
            self.page = page;
        }
    }

    pub fn next(&mut self, total_pages: usize) {
        self.goto(self.page + 1, total_pages);
    }

    pub fn prev(&mut self, total_pages: usize) {
        if self.page > 1 {
            self.goto(self.page - 1, total_pages);
        }
    }
}

impl Default for PagedQuery {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    fn posts() -> Vec<BlogPost> {
        data::blog_posts().to_vec()
    }

    #[test]
    fn test_filter_matches_count() {
        let items = posts();
        for query in ["training", "PROTEIN", "zzz-no-such-word"] {
            let expected = items
                .iter()
                .filter(|p| p.search_text().contains(&query.to_lowercase()))
                .count();
            assert_eq!(filter_items(&items, query).len(), expected);
        }
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let items = posts();
        assert_eq!(filter_items(&items, "").len(), items.len());
        assert_eq!(filter_items(&items, "   ").len(), items.len());
    }

    #[test]
    fn test_filter_preserves_order() {
        let items = posts();
        let filtered = filter_items(&items, "");
        let ids: Vec<u32> = filtered.iter().map(|p| p.id).collect();
        let source_ids: Vec<u32> = items.iter().map(|p| p.id).collect();
        assert_eq!(ids, source_ids);
    }

    #[test]
    fn test_six_posts_make_two_pages() {
        let items = posts();
        assert_eq!(items.len(), 6);
        assert_eq!(page_count(items.len(), PAGE_SIZE), 2);
        assert_eq!(page_slice(&items, 1, PAGE_SIZE).len(), 4);
        assert_eq!(page_slice(&items, 2, PAGE_SIZE).len(), 2);
    }

    #[test]
    fn test_page_is_bounded_and_empty_past_end() {
        let items = posts();
        let pages = page_count(items.len(), PAGE_SIZE);
        for page in 1..=pages {
            assert!(page_slice(&items, page, PAGE_SIZE).len() <= PAGE_SIZE);
        }
        assert!(page_slice(&items, pages + 1, PAGE_SIZE).is_empty());
        assert!(page_slice(&items, 0, PAGE_SIZE).is_empty());
    }

    #[test]
    fn test_set_query_resets_page() {
        let mut paged = PagedQuery::new();
        paged.goto(2, 2);
        assert_eq!(paged.page(), 2);
        paged.set_query("core");
        assert_eq!(paged.page(), 1);
        assert_eq!(paged.query(), "core");
    }

    #[test]
    fn test_navigation_clamps() {
        let mut paged = PagedQuery::new();
        paged.prev(2);
        assert_eq!(paged.page(), 1);
        paged.goto(5, 2);
        assert_eq!(paged.page(), 1);
        paged.next(2);
        assert_eq!(paged.page(), 2);
        paged.next(2);
        assert_eq!(paged.page(), 2);
    }
}
