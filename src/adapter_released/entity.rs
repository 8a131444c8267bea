use crate::domain::entity as domain;

#[derive(Debug, serde::Deserialize)]
pub struct Author {
    pub name: String,
    pub image: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct Item {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct Release {
    pub title: String,
    #[serde(default)]
    pub latest: bool,
    pub author: Option<Author>,
    pub tag: String,
    pub notes: Option<String>,
    #[serde(default)]
    pub items: Vec<Item>,
    pub url: String,
}

impl From<Release> for domain::ReleaseData {
    fn from(value: Release) -> Self {
        Self {
            title: value.title,
            latest: value.latest,
            author: value.author.map(|author| domain::Author {
                name: author.name,
                image: author.image,
            }),
            tag: value.tag,
            notes: value.notes,
            items: value
                .items
                .into_iter()
                .map(|item| domain::ReleaseItem::new(item.category, item.text))
                .collect(),
            url: value.url,
        }
    }
}
