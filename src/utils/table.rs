//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    separator: char,
}

impl Table {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>, separator: char) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            separator,
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Column widths in terminal cells, so `—` and emoji line up.
    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.width());
            }
        }
        widths
    }

    fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
        let line: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, w)| {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                let pad = w.saturating_sub(cell.width());
                format!("{cell}{}", " ".repeat(pad))
            })
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let total = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);

        let mut out = String::new();
        Self::push_line(&mut out, &self.headers, &widths);
        out.push_str(&self.separator.to_string().repeat(total));
        out.push('\n');
        for row in &self.rows {
            Self::push_line(&mut out, row, &widths);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligns_on_display_width() {
        let mut t = Table::new(["Date", "Out"], '-');
        t.add_row(vec!["2024-01-01".into(), "— (running)".into()]);
        t.add_row(vec!["2024-01-02".into(), "10:00:00".into()]);

        let rendered = t.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Date        Out");
        assert_eq!(lines[1], "-".repeat(10 + 2 + 11));
        assert_eq!(lines[2], "2024-01-01  — (running)");
        assert_eq!(lines[3], "2024-01-02  10:00:00");
    }
}
