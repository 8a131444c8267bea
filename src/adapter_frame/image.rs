use std::fmt::Write;

use super::Escaped;
use crate::domain::entity::{Emphasis, FrameView, RenderElement, Route};

const SIZE: u32 = 512;
const PADDING: u32 = 48;
const AVATAR: u32 = 32;
const SPACER: u32 = 8;
const GAP: u32 = 8;

const BACKGROUND: &str = "#1c1c1c";
const FOREGROUND: &str = "#f5f5f5";
const MUTED: &str = "#8a8a8a";

struct Canvas {
    buffer: String,
    cursor: u32,
}

impl Canvas {
    fn new(background: &str) -> Result<Self, std::fmt::Error> {
        let mut buffer = String::new();
        write!(
            buffer,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{SIZE}" height="{SIZE}" viewBox="0 0 {SIZE} {SIZE}">"#
        )?;
        write!(
            buffer,
            r#"<rect width="100%" height="100%" fill="{background}"/>"#
        )?;
        Ok(Self {
            buffer,
            cursor: PADDING,
        })
    }

    fn text(&mut self, content: &str, size: u32, weight: u32, italic: bool) -> std::fmt::Result {
        self.cursor += size;
        let style = if italic { "italic" } else { "normal" };
        write!(
            self.buffer,
            r#"<text x="{PADDING}" y="{}" font-family="sans-serif" font-size="{size}" font-weight="{weight}" font-style="{style}" fill="{FOREGROUND}">{}</text>"#,
            self.cursor,
            Escaped(content)
        )?;
        self.cursor += GAP / 2;
        Ok(())
    }

    fn avatar(&mut self, href: &str) -> std::fmt::Result {
        self.cursor += GAP / 2;
        let radius = AVATAR / 2;
        write!(
            self.buffer,
            r#"<clipPath id="avatar"><circle cx="{}" cy="{}" r="{radius}"/></clipPath>"#,
            PADDING + radius,
            self.cursor + radius,
        )?;
        write!(
            self.buffer,
            r#"<image href="{}" x="{PADDING}" y="{}" width="{AVATAR}" height="{AVATAR}" clip-path="url(#avatar)"/>"#,
            Escaped(href),
            self.cursor,
        )?;
        self.cursor += AVATAR + GAP;
        Ok(())
    }

    fn divider(&mut self) -> std::fmt::Result {
        self.cursor += GAP / 2;
        write!(
            self.buffer,
            r#"<line x1="{PADDING}" y1="{0}" x2="{1}" y2="{0}" stroke="{MUTED}" stroke-width="1"/>"#,
            self.cursor,
            SIZE - PADDING,
        )?;
        self.cursor += GAP;
        Ok(())
    }

    fn footer(&mut self, content: &str) -> std::fmt::Result {
        write!(
            self.buffer,
            r#"<text x="{}" y="{}" text-anchor="middle" font-family="sans-serif" font-size="16" fill="{MUTED}">{}</text>"#,
            SIZE / 2,
            SIZE - PADDING / 2,
            Escaped(content)
        )
    }

    fn finish(mut self) -> Result<String, std::fmt::Error> {
        self.buffer.write_str("</svg>")?;
        Ok(self.buffer)
    }
}

pub(super) fn release(view: &FrameView) -> Result<String, std::fmt::Error> {
    let mut canvas = Canvas::new(BACKGROUND)?;
    canvas.text(&view.overview.title, 28, 700, false)?;
    canvas.text(
        &format!("released by {}", view.overview.author_name),
        16,
        400,
        false,
    )?;
    canvas.avatar(&view.overview.author_image)?;
    canvas.divider()?;
    for element in view.elements.iter() {
        match element {
            RenderElement::Text { content, emphasis } => match emphasis {
                Emphasis::Emphasized => canvas.text(content, 18, 900, true)?,
                Emphasis::Plain => canvas.text(content, 16, 100, true)?,
            },
            RenderElement::Spacer => canvas.cursor += SPACER,
        }
    }
    canvas.footer(&format!(
        "Page: {}/{}",
        view.page_index + 1,
        view.page_count
    ))?;
    canvas.finish()
}

pub(super) fn not_found(route: &Route) -> Result<String, std::fmt::Error> {
    let mut canvas = Canvas::new(BACKGROUND)?;
    canvas.cursor = SIZE / 3;
    canvas.text("😢", 28, 700, false)?;
    canvas.text(
        "Couldn't find the specified release on this repository",
        18,
        700,
        false,
    )?;
    canvas.text(
        &format!("404: {} - {} @ {}", route.owner, route.repo, route.tag),
        16,
        400,
        false,
    )?;
    canvas.finish()
}
