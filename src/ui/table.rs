//! Boxed tables for `dryg list`.
//!
//! Cells may carry ANSI styling, so widths are measured as displayed text.

use console::measure_text_width;

/// Which horizontal rule to draw.
#[derive(Debug, Clone, Copy)]
enum Rule {
    Top,
    Separator,
    Bottom,
}

impl Rule {
    fn corners(self) -> (char, char, char) {
        match self {
            Rule::Top => ('┌', '┬', '┐'),
            Rule::Separator => ('├', '┼', '┤'),
            Rule::Bottom => ('└', '┴', '┘'),
        }
    }
}

/// Rows of cells under a header line, padded to the widest cell per column.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table with the given column headers.
    pub fn new(headers: Vec<&str>) -> Self {
        Self {
            headers: headers.into_iter().map(String::from).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Cells beyond the header count are ignored and
    /// missing ones render blank.
    pub fn add_row(&mut self, row: Vec<&str>) {
        let mut cells: Vec<String> = row
            .into_iter()
            .take(self.headers.len())
            .map(String::from)
            .collect();
        cells.resize(self.headers.len(), String::new());
        self.rows.push(cells);
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table, one line per rule or row, without a trailing newline.
    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut lines = Vec::with_capacity(self.rows.len() + 4);

        lines.push(rule(&widths, Rule::Top));
        lines.push(line(&widths, &self.headers));
        lines.push(rule(&widths, Rule::Separator));
        lines.extend(self.rows.iter().map(|cells| line(&widths, cells)));
        lines.push(rule(&widths, Rule::Bottom));

        lines.join("\n")
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                self.rows
                    .iter()
                    .map(|cells| measure_text_width(&cells[col]))
                    .fold(measure_text_width(header), usize::max)
            })
            .collect()
    }
}

fn rule(widths: &[usize], kind: Rule) -> String {
    let (left, join, right) = kind.corners();
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{left}{}{right}", segments.join(&join.to_string()))
}

fn line(widths: &[usize], cells: &[String]) -> String {
    let padded: Vec<String> = widths
        .iter()
        .zip(cells)
        .map(|(width, cell)| {
            let fill = width.saturating_sub(measure_text_width(cell));
            format!(" {cell}{} ", " ".repeat(fill))
        })
        .collect();
    format!("│{}│", padded.join("│"))
}
