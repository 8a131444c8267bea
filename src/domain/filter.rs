use super::entity::ReleaseItem;

/// Drops the blank placeholder the upstream source puts in front of the items.
pub fn filter(items: &[ReleaseItem]) -> &[ReleaseItem] {
    match items.split_first() {
        Some((first, rest)) if first.text.is_empty() => rest,
        _ => items,
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::entity::ReleaseItem;

    #[test]
    fn should_drop_leading_blank_item() {
        let items = vec![ReleaseItem::new("", ""), ReleaseItem::new("note", "a")];
        assert_eq!(super::filter(&items), &items[1..]);
    }

    #[test]
    fn should_only_drop_first_blank_item() {
        let items = vec![
            ReleaseItem::new("", ""),
            ReleaseItem::new("", ""),
            ReleaseItem::new("note", "a"),
        ];
        assert_eq!(super::filter(&items).len(), 2);
    }

    #[test]
    fn should_keep_items_starting_with_text() {
        let items = vec![ReleaseItem::new("note", "a"), ReleaseItem::new("", "")];
        assert_eq!(super::filter(&items), items.as_slice());
    }

    #[test]
    fn should_accept_empty_list() {
        assert!(super::filter(&[]).is_empty());
    }
}
