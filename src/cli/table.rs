use crate::cli::output;

/// Declarative description of a table column.
#[derive(Debug, Clone)]
pub struct TableColumn {
    pub header: String,
    pub width: usize,
}

impl TableColumn {
    pub fn new(header: impl Into<String>, width: usize) -> Self {
        Self {
            header: header.into(),
            width,
        }
    }
}

/// Simple table model used for rendering read-only overviews.
#[derive(Debug, Clone)]
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row<S: Into<String>>(&mut self, cells: Vec<S>) {
        self.rows
            .push(cells.into_iter().map(|value| value.into()).collect());
    }

    /// Renders the table as padded lines; the first line is the header.
    pub fn render_lines(&self) -> Vec<String> {
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, col)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(idx))
                    .map(|cell| cell.chars().count())
                    .chain([col.width, col.header.chars().count()])
                    .max()
                    .unwrap_or(col.width)
            })
            .collect();

        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        let header: Vec<&str> = self.columns.iter().map(|col| col.header.as_str()).collect();
        lines.push(pad_row(&header, &widths));
        for row in &self.rows {
            let cells: Vec<&str> = (0..widths.len())
                .map(|idx| row.get(idx).map(String::as_str).unwrap_or(""))
                .collect();
            lines.push(pad_row(&cells, &widths));
        }
        lines
    }

    pub fn print(&self) {
        let lines = self.render_lines();
        let mut iter = lines.iter();
        if let Some(header) = iter.next() {
            output::line(output::header_text(header));
            output::line("-".repeat(header.chars().count().max(1)));
        }
        for line in iter {
            output::line(line);
        }
    }
}

fn pad_row(cells: &[&str], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_expand_to_fit_widest_cell() {
        let mut table = Table::new(vec![TableColumn::new("Date", 4), TableColumn::new("Type", 4)]);
        table.add_row(vec!["2024-01-05", "income"]);
        table.add_row(vec!["2024-02-02", "investment"]);

        let lines = table.render_lines();

        assert_eq!(lines[0], "Date        Type");
        assert_eq!(lines[1], "2024-01-05  income");
        assert_eq!(lines[2], "2024-02-02  investment");
    }
}
