use super::entity::{Control, NavEvent};

/// What to do with a page index that doesn't fit the current page count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClampPolicy {
    /// Move to the closest valid page.
    #[default]
    Nearest,
    /// Go back to the first page.
    Reset,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown clamp policy {0:?}, expected \"nearest\" or \"reset\"")]
pub struct UnknownClampPolicy(String);

impl std::str::FromStr for ClampPolicy {
    type Err = UnknownClampPolicy;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "nearest" => Ok(Self::Nearest),
            "reset" => Ok(Self::Reset),
            other => Err(UnknownClampPolicy(other.to_string())),
        }
    }
}

/// Raw transition, bounds are checked later by [`clamp`].
pub fn apply(previous: i64, event: Option<NavEvent>) -> i64 {
    match event {
        Some(NavEvent::Next) => previous.saturating_add(1),
        Some(NavEvent::Prev) => previous.saturating_sub(1),
        None => previous,
    }
}

pub fn clamp(raw: i64, page_count: usize, policy: ClampPolicy) -> usize {
    let last = page_count.saturating_sub(1);
    match usize::try_from(raw) {
        Ok(page) if page <= last => page,
        Ok(_) if policy == ClampPolicy::Nearest => last,
        _ => 0,
    }
}

/// Controls offered for `page`, the redirect always comes last.
pub fn controls(page: usize, page_count: usize, url: &str) -> Vec<Control> {
    let mut result = Vec::with_capacity(3);
    if page > 0 {
        result.push(Control::Previous);
    }
    if page + 1 < page_count {
        result.push(Control::Next);
    }
    result.push(Control::Redirect {
        url: url.to_string(),
    });
    result
}
