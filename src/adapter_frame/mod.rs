use std::borrow::Cow;
use std::fmt::Write;

use anyhow::Context;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Url;

use crate::domain::entity::{Control, FrameOutcome, Route};

mod image;

const FRAME_VERSION: &str = "vNext";
const ASPECT_RATIO: &str = "1:1";
const NOT_FOUND_TITLE: &str = "Released: not found";

pub struct Config {
    origin: Cow<'static, str>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            origin: crate::with_env_or("FRAME_ORIGIN", "https://released.fyi"),
        })
    }

    pub fn build(self) -> anyhow::Result<HtmlRenderer> {
        let origin = Url::parse(&self.origin).context("unable to parse frame origin")?;
        if origin.cannot_be_a_base() {
            anyhow::bail!("frame origin {origin} can't hold a path");
        }
        Ok(HtmlRenderer { origin })
    }
}

/// Renders outcomes as an HTML page holding the frame meta tags.
#[derive(Clone, Debug)]
pub struct HtmlRenderer {
    origin: Url,
}

/// Frame endpoint of `route` under `origin`, every part percent-encoded.
pub(crate) fn post_url(origin: &Url, route: &Route) -> anyhow::Result<Url> {
    let mut url = origin.clone();
    url.path_segments_mut()
        .map_err(|_| anyhow::anyhow!("frame origin {origin} can't hold a path"))?
        .pop_if_empty()
        .extend(["gh", route.owner.as_str(), route.repo.as_str()]);
    if !route.is_latest() {
        url.query_pairs_mut().append_pair("tag", &route.tag);
    }
    Ok(url)
}

/// Escapes text for HTML and XML attribute or content positions.
pub(crate) struct Escaped<'a>(pub &'a str);

impl std::fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                other => f.write_char(other)?,
            }
        }
        Ok(())
    }
}

fn write_meta(f: &mut String, property: &str, content: &str) -> std::fmt::Result {
    writeln!(
        f,
        r#"<meta property="{property}" content="{}">"#,
        Escaped(content)
    )
}

fn write_button(f: &mut String, index: usize, control: &Control) -> std::fmt::Result {
    let property = format!("fc:frame:button:{index}");
    match control {
        Control::Previous => {
            write_meta(f, &property, "⇦")?;
            write_meta(f, &format!("{property}:action"), "post")
        }
        Control::Next => {
            write_meta(f, &property, "⇨")?;
            write_meta(f, &format!("{property}:action"), "post")
        }
        Control::Redirect { url } => {
            write_meta(f, &property, "Read in browser")?;
            write_meta(f, &format!("{property}:action"), "link")?;
            write_meta(f, &format!("{property}:target"), url)
        }
    }
}

impl HtmlRenderer {
    fn document(&self, outcome: &FrameOutcome) -> anyhow::Result<String> {
        let (title, route, svg) = match outcome {
            FrameOutcome::NotFound(route) => {
                (NOT_FOUND_TITLE.to_string(), route, image::not_found(route)?)
            }
            FrameOutcome::Release(view) => (view.title(), &view.route, image::release(view)?),
        };
        let image = format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg));
        let post_url = post_url(&self.origin, route)?;

        let mut f = String::new();
        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html>")?;
        writeln!(f, "<head>")?;
        writeln!(f, r#"<meta charset="utf-8">"#)?;
        writeln!(f, "<title>{}</title>", Escaped(&title))?;
        write_meta(&mut f, "og:title", &title)?;
        write_meta(&mut f, "og:image", &image)?;
        write_meta(&mut f, "fc:frame", FRAME_VERSION)?;
        write_meta(&mut f, "fc:frame:image", &image)?;
        write_meta(&mut f, "fc:frame:image:aspect_ratio", ASPECT_RATIO)?;
        write_meta(&mut f, "fc:frame:post_url", post_url.as_str())?;
        if let FrameOutcome::Release(view) = outcome {
            write_meta(&mut f, "fc:frame:state", &view.state)?;
            for (index, control) in view.controls.iter().enumerate() {
                write_button(&mut f, index + 1, control)?;
            }
        }
        writeln!(f, "</head>")?;
        writeln!(f, "<body></body>")?;
        writeln!(f, "</html>")?;
        Ok(f)
    }
}

impl crate::domain::prelude::FrameRenderer for HtmlRenderer {
    fn render(&self, outcome: &FrameOutcome) -> anyhow::Result<String> {
        self.document(outcome)
    }
}
