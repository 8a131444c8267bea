use std::borrow::Cow;

/// Tag used when the interaction doesn't ask for a specific release.
pub const LATEST_TAG: &str = "latest";

const DEFAULT_AUTHOR_NAME: &str = "someone";
const DEFAULT_AUTHOR_IMAGE: &str =
    "https://github.githubassets.com/assets/GitHub-Mark-ea2971cee799.png";

/// One changelog entry, or a blank line when `text` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseItem {
    pub category: String,
    pub text: String,
}

impl ReleaseItem {
    pub fn new(category: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub image: String,
}

/// Release metadata as returned by the data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseData {
    pub title: String,
    pub latest: bool,
    pub author: Option<Author>,
    pub tag: String,
    pub notes: Option<String>,
    pub items: Vec<ReleaseItem>,
    /// link to the full release page
    pub url: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
    Plain,
    Emphasized,
}

/// Render-ready element of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderElement {
    Text { content: String, emphasis: Emphasis },
    Spacer,
}

pub type Page = Vec<RenderElement>;

/// Navigation state carried by the client between interactions.
///
/// The page is signed so it can't hold an arbitrary value, but it may still
/// be stale, so it's never trusted to be within bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NavState {
    pub page: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    Next,
    Prev,
}

impl NavEvent {
    /// Maps the value of the pressed button, unknown values are ignored.
    pub fn from_button(value: Option<&str>) -> Option<Self> {
        match value? {
            "next" => Some(Self::Next),
            "prev" => Some(Self::Prev),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Prev => "prev",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    Previous,
    Next,
    Redirect { url: String },
}

/// Repository and release targeted by a frame instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub owner: String,
    pub repo: String,
    pub tag: String,
}

impl Route {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, tag: Option<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            tag: tag
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| LATEST_TAG.to_string()),
        }
    }

    /// Whether the route still holds template placeholders like `:owner`.
    pub fn is_unbound(&self) -> bool {
        self.owner.starts_with(':') || self.repo.starts_with(':')
    }

    pub fn is_latest(&self) -> bool {
        self.tag == LATEST_TAG
    }
}

/// Header of every release frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overview {
    pub title: String,
    pub author_name: Cow<'static, str>,
    pub author_image: Cow<'static, str>,
}

impl From<&ReleaseData> for Overview {
    fn from(value: &ReleaseData) -> Self {
        Self {
            title: value.title.clone(),
            author_name: value
                .author
                .as_ref()
                .map(|author| Cow::Owned(author.name.clone()))
                .unwrap_or(Cow::Borrowed(DEFAULT_AUTHOR_NAME)),
            author_image: value
                .author
                .as_ref()
                .map(|author| Cow::Owned(author.image.clone()))
                .unwrap_or(Cow::Borrowed(DEFAULT_AUTHOR_IMAGE)),
        }
    }
}

/// Everything the renderer needs to draw one page of a release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameView {
    pub route: Route,
    pub overview: Overview,
    pub elements: Page,
    pub page_index: usize,
    pub page_count: usize,
    pub controls: Vec<Control>,
    /// sealed navigation state for the next interaction
    pub state: String,
}

impl FrameView {
    pub fn title(&self) -> String {
        format!("Released: {}", self.overview.title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameOutcome {
    NotFound(Route),
    Release(Box<FrameView>),
}

/// One interaction with a frame instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRequest {
    pub route: Route,
    pub event: Option<NavEvent>,
    /// sealed state from the previous response, if any
    pub state: Option<String>,
}
