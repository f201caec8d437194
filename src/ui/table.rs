//! Bordered tables with fixed column widths and word wrapping.

use colored::{Color, Colorize};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A table with fixed column widths.
///
/// Cells are plain text; each column can carry a color applied after
/// wrapping so widths stay exact.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    widths: Vec<usize>,
    colors: Vec<Option<Color>>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table. `widths` are outer column widths including one space
    /// of padding on each side.
    pub fn new(headers: &[&str], widths: &[usize]) -> Self {
        assert_eq!(headers.len(), widths.len(), "one width per column");
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            widths: widths.iter().map(|w| (*w).max(4)).collect(),
            colors: vec![None; headers.len()],
            rows: Vec::new(),
        }
    }

    /// Color the cells of `column`.
    pub fn column_color(mut self, column: usize, color: Color) -> Self {
        if let Some(slot) = self.colors.get_mut(column) {
            *slot = Some(color);
        }
        self
    }

    /// Append a row. Missing cells render empty, extra cells are dropped.
    pub fn push_row<S: AsRef<str>>(&mut self, cells: &[S]) {
        let mut row: Vec<String> = cells
            .iter()
            .take(self.widths.len())
            .map(|c| c.as_ref().to_string())
            .collect();
        row.resize(self.widths.len(), String::new());
        self.rows.push(row);
    }

    /// Render the table.
    pub fn render(&self) -> String {
        let mut out = vec![self.border('┌', '┬', '┐')];
        out.extend(self.render_row(&self.headers, true));
        out.push(self.border('├', '┼', '┤'));
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                out.push(self.border('├', '┼', '┤'));
            }
            out.extend(self.render_row(row, false));
        }
        out.push(self.border('└', '┴', '┘'));
        out.join("\n")
    }

    fn border(&self, left: char, mid: char, right: char) -> String {
        let segments: Vec<String> = self.widths.iter().map(|w| "─".repeat(*w)).collect();
        format!("{left}{}{right}", segments.join(&mid.to_string()))
    }

    fn render_row(&self, cells: &[String], header: bool) -> Vec<String> {
        let wrapped: Vec<Vec<String>> = cells
            .iter()
            .zip(&self.widths)
            .map(|(cell, width)| wrap(cell, width - 2))
            .collect();
        let height = wrapped.iter().map(Vec::len).max().unwrap_or(1).max(1);

        (0..height)
            .map(|line| {
                let parts: Vec<String> = wrapped
                    .iter()
                    .enumerate()
                    .map(|(col, lines)| {
                        let text = lines.get(line).map(String::as_str).unwrap_or("");
                        let fill = (self.widths[col] - 2).saturating_sub(text.width());
                        let padded = format!("{text}{}", " ".repeat(fill));
                        let styled = match (header, self.colors[col]) {
                            (true, _) => padded.bold().to_string(),
                            (false, Some(color)) => padded.color(color).to_string(),
                            (false, None) => padded,
                        };
                        format!(" {styled} ")
                    })
                    .collect();
                format!("│{}│", parts.join("│"))
            })
            .collect()
    }
}

/// Greedy word wrap by display width; words wider than `width` are split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(2);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let mut word = word.to_string();
        while word.width() > width {
            if current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            let (head, rest) = split_at_width(&word, width);
            lines.push(head.to_string());
            word = rest.to_string();
        }

        let word_width = word.width();
        let needed = if current_width == 0 { word_width } else { current_width + 1 + word_width };
        if needed > width && current_width > 0 {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(&word);
        current_width += word_width;
    }

    if current_width > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Split `word` so the head fits in `width` cells.
fn split_at_width(word: &str, width: usize) -> (&str, &str) {
    let mut used = 0;
    for (i, c) in word.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            return word.split_at(i);
        }
        used += w;
    }
    (word, "")
}
