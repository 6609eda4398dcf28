//! Box-drawn text tables for the profile catalog.

/// Columns are sized to their widest cell, counted in characters so the
/// en dash and other non-ASCII cells still line up.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    widths: Vec<usize>,
}

impl Table {
    pub fn new(headers: Vec<&str>) -> Self {
        let widths = headers.iter().map(|h| h.chars().count()).collect();
        Self {
            headers: headers.into_iter().map(String::from).collect(),
            rows: Vec::new(),
            widths,
        }
    }

    /// Missing trailing cells render blank; extra cells are dropped.
    pub fn add_row(&mut self, row: Vec<&str>) {
        let row: Vec<String> = row
            .into_iter()
            .take(self.widths.len())
            .map(String::from)
            .collect();
        for (width, cell) in self.widths.iter_mut().zip(&row) {
            *width = (*width).max(cell.chars().count());
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut lines = vec![
            self.rule('┌', '┬', '┐'),
            self.cells(&self.headers),
            self.rule('├', '┼', '┤'),
        ];
        lines.extend(self.rows.iter().map(|row| self.cells(row)));
        lines.push(self.rule('└', '┴', '┘'));
        lines.join("\n")
    }

    fn rule(&self, left: char, joint: char, right: char) -> String {
        let segments: Vec<String> = self.widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(&joint.to_string()), right)
    }

    fn cells(&self, row: &[String]) -> String {
        let padded: Vec<String> = self
            .widths
            .iter()
            .enumerate()
            .map(|(i, width)| {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                let pad = width.saturating_sub(cell.chars().count());
                format!(" {}{} ", cell, " ".repeat(pad))
            })
            .collect();
        format!("│{}│", padded.join("│"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_rows_and_borders() {
        let mut table = Table::new(vec!["#", "Id", "Scan"]);
        table.add_row(vec!["1", "ping", "Ping Scan"]);
        table.add_row(vec!["2", "smb-vuln", "SMB Vulnerability Scan"]);

        let output = table.render();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with('┌') && lines[0].contains('┬'));
        assert!(lines[1].contains(" Id "));
        assert!(lines[3].contains("Ping Scan"));
        assert!(lines[5].ends_with('┘'));
    }

    #[test]
    fn every_line_has_the_same_width() {
        let mut table = Table::new(vec!["Ports", "Notes"]);
        table.add_row(vec!["–"]);
        table.add_row(vec!["T:-,U:1-4000", "root, default ports T:-,U:1-4000", "extra"]);

        let output = table.render();
        let widths: Vec<usize> = output.lines().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]), "{output}");
        assert!(!output.contains("extra"));
    }
}
