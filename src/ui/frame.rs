//! Boxed frames around text blocks.

use colored::{Color, Colorize};

use super::visible_width;

/// Border characters of a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BorderStyle {
    /// `┌─┐` square corners.
    #[default]
    Single,
    /// `╔═╗` double lines.
    Double,
    /// `╭─╮` rounded corners.
    Round,
}

struct Glyphs {
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    horizontal: char,
    vertical: char,
}

impl BorderStyle {
    fn glyphs(self) -> Glyphs {
        match self {
            BorderStyle::Single => Glyphs {
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                horizontal: '─',
                vertical: '│',
            },
            BorderStyle::Double => Glyphs {
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                horizontal: '═',
                vertical: '║',
            },
            BorderStyle::Round => Glyphs {
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                horizontal: '─',
                vertical: '│',
            },
        }
    }
}

/// Frame options.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// Border characters.
    pub style: BorderStyle,
    /// Border color.
    pub color: Option<Color>,
    /// Title centered in the top border.
    pub title: Option<String>,
    /// Blank lines above and below the text; three times as many columns
    /// left and right.
    pub padding: usize,
}

/// Draw a frame around `text`.
pub fn boxed(text: &str, frame: &Frame) -> String {
    let glyphs = frame.style.glyphs();
    let lines: Vec<&str> = text.lines().collect();
    let side = frame.padding * 3;

    let title_width = frame.title.as_deref().map_or(0, |t| visible_width(t) + 2);
    let content_width = lines.iter().map(|l| visible_width(l)).max().unwrap_or(0);
    let inner = (content_width + side * 2).max(title_width);

    let paint = |s: String| match frame.color {
        Some(color) => s.color(color).to_string(),
        None => s,
    };
    let horizontal = |n: usize| glyphs.horizontal.to_string().repeat(n);

    let mut out = Vec::with_capacity(lines.len() + frame.padding * 2 + 2);

    let top = match frame.title.as_deref() {
        Some(title) => {
            let left = (inner - title_width) / 2;
            let right = inner - title_width - left;
            format!(
                "{} {title} {}",
                paint(format!("{}{}", glyphs.top_left, horizontal(left))),
                paint(format!("{}{}", horizontal(right), glyphs.top_right)),
            )
        }
        None => paint(format!(
            "{}{}{}",
            glyphs.top_left,
            horizontal(inner),
            glyphs.top_right
        )),
    };
    out.push(top);

    let vertical = paint(glyphs.vertical.to_string());
    let blank = format!("{vertical}{}{vertical}", " ".repeat(inner));
    for _ in 0..frame.padding {
        out.push(blank.clone());
    }
    for line in &lines {
        let fill = inner - side - visible_width(line);
        out.push(format!(
            "{vertical}{}{line}{}{vertical}",
            " ".repeat(side),
            " ".repeat(fill)
        ));
    }
    for _ in 0..frame.padding {
        out.push(blank.clone());
    }

    out.push(paint(format!(
        "{}{}{}",
        glyphs.bottom_left,
        horizontal(inner),
        glyphs.bottom_right
    )));

    out.join("\n")
}
