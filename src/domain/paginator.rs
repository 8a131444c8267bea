use std::num::NonZeroUsize;

use super::entity::{Emphasis, Page, ReleaseItem, RenderElement};

pub const DEFAULT_PAGE_CAPACITY: NonZeroUsize = NonZeroUsize::new(6).unwrap();

const EMPHASIZED_CATEGORIES: [&str; 2] = ["bold", "italic"];

pub fn emphasis(category: &str) -> Emphasis {
    if EMPHASIZED_CATEGORIES.contains(&category) {
        Emphasis::Emphasized
    } else {
        Emphasis::Plain
    }
}

fn render(item: &ReleaseItem) -> RenderElement {
    if item.text.is_empty() {
        RenderElement::Spacer
    } else {
        RenderElement::Text {
            content: item.text.clone(),
            emphasis: emphasis(&item.category),
        }
    }
}

/// Groups items into pages of `capacity` elements.
///
/// A full page is only flushed when another item shows up, so an input of
/// exactly `capacity` items gives a single page and no input gives no page.
pub fn paginate(items: &[ReleaseItem], capacity: NonZeroUsize) -> Vec<Page> {
    let capacity = capacity.get();
    let mut pages = Vec::with_capacity(items.len().div_ceil(capacity));
    let mut building: Page = Vec::with_capacity(capacity);
    for item in items {
        if building.len() >= capacity {
            pages.push(std::mem::replace(&mut building, Vec::with_capacity(capacity)));
        }
        building.push(render(item));
    }
    if !building.is_empty() {
        pages.push(building);
    }
    pages
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use crate::domain::entity::{Emphasis, ReleaseItem, RenderElement};

    fn capacity(value: usize) -> NonZeroUsize {
        NonZeroUsize::new(value).unwrap()
    }

    fn text_items(count: usize) -> Vec<ReleaseItem> {
        (0..count)
            .map(|index| ReleaseItem::new("note", format!("item {index}")))
            .collect()
    }

    #[test]
    fn should_emphasize_bold_and_italic_only() {
        assert_eq!(super::emphasis("bold"), Emphasis::Emphasized);
        assert_eq!(super::emphasis("italic"), Emphasis::Emphasized);
        assert_eq!(super::emphasis("note"), Emphasis::Plain);
        assert_eq!(super::emphasis(""), Emphasis::Plain);
    }

    #[test]
    fn should_return_no_page_without_items() {
        assert!(super::paginate(&[], capacity(6)).is_empty());
    }

    #[test]
    fn should_return_single_page_for_single_item() {
        let pages = super::paginate(&text_items(1), capacity(6));
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].len(), 1);
    }

    #[test]
    fn should_keep_full_page_when_no_item_follows() {
        let pages = super::paginate(&text_items(6), capacity(6));
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].len(), 6);
    }

    #[test]
    fn should_start_new_page_with_overflowing_item() {
        let pages = super::paginate(&text_items(7), capacity(6));
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].len(), 6);
        assert_eq!(
            pages[1],
            vec![RenderElement::Text {
                content: "item 6".into(),
                emphasis: Emphasis::Plain,
            }]
        );
    }

    #[test]
    fn should_render_blank_items_as_spacers() {
        let items = vec![
            ReleaseItem::new("bold", "Features"),
            ReleaseItem::new("", ""),
            ReleaseItem::new("note", "faster"),
        ];
        let pages = super::paginate(&items, capacity(10));
        assert_eq!(
            pages,
            vec![vec![
                RenderElement::Text {
                    content: "Features".into(),
                    emphasis: Emphasis::Emphasized,
                },
                RenderElement::Spacer,
                RenderElement::Text {
                    content: "faster".into(),
                    emphasis: Emphasis::Plain,
                },
            ]]
        );
    }
}

#[cfg(test)]
mod property_tests {
    use std::num::NonZeroUsize;

    use proptest::prelude::*;

    use crate::domain::entity::ReleaseItem;
    use crate::domain::filter::filter;

    fn item_strategy() -> impl Strategy<Value = ReleaseItem> {
        (
            prop_oneof![Just(""), Just("bold"), Just("italic"), Just("note")],
            prop_oneof![Just(String::new()), "[a-z ]{1,12}"],
        )
            .prop_map(|(category, text)| ReleaseItem::new(category, text))
    }

    proptest! {
        /// Property: every kept item ends up in exactly one page slot.
        #[test]
        fn keeps_every_item(
            items in proptest::collection::vec(item_strategy(), 0..40),
            capacity in 1usize..12,
        ) {
            let kept = filter(&items);
            let pages = super::paginate(kept, NonZeroUsize::new(capacity).unwrap());
            let total: usize = pages.iter().map(Vec::len).sum();
            prop_assert_eq!(total, kept.len());
        }

        /// Property: only the last page may be partial, and no page is empty.
        #[test]
        fn fills_pages_up_to_capacity(
            items in proptest::collection::vec(item_strategy(), 0..40),
            capacity in 1usize..12,
        ) {
            let pages = super::paginate(&items, NonZeroUsize::new(capacity).unwrap());
            if let Some((last, full)) = pages.split_last() {
                for page in full {
                    prop_assert_eq!(page.len(), capacity);
                }
                prop_assert!(!last.is_empty() && last.len() <= capacity);
            } else {
                prop_assert!(items.is_empty());
            }
        }
    }
}
