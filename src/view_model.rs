//! View Helpers
//!
//! Pure functions that turn query and result state into what the
//! components render.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::models::{Item, Query};

/// Characters escaped in image paths; `/` is kept so nested upload
/// folders survive
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'(')
    .add(b')')
    .add(b'\'');

/// What the product area shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridContent {
    Empty,
    Cards(usize),
}

pub fn grid_content(items: &[Item]) -> GridContent {
    if items.is_empty() {
        GridContent::Empty
    } else {
        GridContent::Cards(items.len())
    }
}

/// Page count shown by the pagination control. The catalog never reports a
/// total, so a non-empty page advertises exactly one more.
pub fn page_count(query: &Query, items: &[Item]) -> u32 {
    if items.is_empty() {
        query.page
    } else {
        query.page + 1
    }
}

/// One slot of the pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Previous { target: u32, disabled: bool },
    Page { number: u32, selected: bool },
    Ellipsis,
    Next { target: u32, disabled: bool },
}

/// Layout of the pagination control: first and last page always shown,
/// one sibling on each side of the current page, gaps collapsed to an
/// ellipsis.
pub fn page_slots(count: u32, current: u32) -> Vec<PageSlot> {
    let count = count.max(1);
    let current = current.clamp(1, count);

    let mut slots = vec![PageSlot::Previous {
        target: current.saturating_sub(1).max(1),
        disabled: current == 1,
    }];

    let mut last_shown = 0;
    for number in 1..=count {
        let visible = number == 1 || number == count || number.abs_diff(current) <= 1;
        if !visible {
            continue;
        }
        if number > last_shown + 2 {
            slots.push(PageSlot::Ellipsis);
        } else if number == last_shown + 2 {
            // a single hidden page is cheaper to show than an ellipsis
            slots.push(PageSlot::Page {
                number: last_shown + 1,
                selected: false,
            });
        }
        slots.push(PageSlot::Page {
            number,
            selected: number == current,
        });
        last_shown = number;
    }

    slots.push(PageSlot::Next {
        target: (current + 1).min(count),
        disabled: current == count,
    });
    slots
}

/// CSS class for the view-count icon
pub fn view_badge_class(view_count: u64) -> &'static str {
    if view_count == 0 {
        "view-icon muted"
    } else {
        "view-icon active"
    }
}

/// Absolute URL of an uploaded image
pub fn image_url(base_url: &str, file: &str) -> String {
    let file = file.trim_start_matches('/');
    format!("{}/{}", base_url, utf8_percent_encode(file, PATH_SEGMENT))
}

/// Inline background style for a product card
pub fn card_background(base_url: &str, item: &Item) -> String {
    match item.primary_image() {
        Some(file) => format!("background-image: url(\"{}\");", image_url(base_url, file)),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{make_item, Category};

    fn page(number: u32, selected: bool) -> PageSlot {
        PageSlot::Page { number, selected }
    }

    #[test]
    fn test_empty_results_render_empty_state() {
        assert_eq!(grid_content(&[]), GridContent::Empty);
        let items = vec![make_item("1", Category::Coffee, 0)];
        assert_eq!(grid_content(&items), GridContent::Cards(1));
    }

    #[test]
    fn test_full_first_page_shows_two_pages() {
        let query = Query::default();
        let items: Vec<Item> = (0..8)
            .map(|i| make_item(&i.to_string(), Category::Coffee, i))
            .collect();
        let count = page_count(&query, &items);
        assert_eq!(count, 2);
        assert_eq!(
            page_slots(count, query.page),
            vec![
                PageSlot::Previous { target: 1, disabled: true },
                page(1, true),
                page(2, false),
                PageSlot::Next { target: 2, disabled: false },
            ]
        );
    }

    #[test]
    fn test_empty_page_count_stays_on_current() {
        let query = Query { page: 3, ..Query::default() };
        assert_eq!(page_count(&query, &[]), 3);
    }

    #[test]
    fn test_page_slots_collapse_gaps() {
        let slots = page_slots(10, 6);
        assert_eq!(
            slots,
            vec![
                PageSlot::Previous { target: 5, disabled: false },
                page(1, false),
                PageSlot::Ellipsis,
                page(5, false),
                page(6, true),
                page(7, false),
                PageSlot::Ellipsis,
                page(10, false),
                PageSlot::Next { target: 7, disabled: false },
            ]
        );
    }

    #[test]
    fn test_page_slots_fill_single_gap() {
        let slots = page_slots(5, 4);
        let numbers: Vec<u32> = slots
            .iter()
            .filter_map(|slot| match slot {
                PageSlot::Page { number, .. } => Some(*number),
                _ => None,
            })
            .collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
        assert_eq!(slots.last(), Some(&PageSlot::Next { target: 5, disabled: false }));
    }

    #[test]
    fn test_view_badge_state() {
        assert_eq!(view_badge_class(0), "view-icon muted");
        assert_eq!(view_badge_class(12), "view-icon active");
    }

    #[test]
    fn test_image_url() {
        assert_eq!(
            image_url("http://localhost:3003", "uploads/products/iced latte.png"),
            "http://localhost:3003/uploads/products/iced%20latte.png"
        );
    }

    #[test]
    fn test_card_background_without_image() {
        let mut item = make_item("1", Category::Ade, 0);
        item.images.clear();
        assert_eq!(card_background("http://x", &item), "");
    }
}
