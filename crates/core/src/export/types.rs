//! Tabular data handed to the workbook writer.

use rust_decimal::Decimal;

/// One cell of an exported table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetCell {
    /// Plain text.
    Text(String),
    /// Number written with two decimal places.
    Number(Decimal),
}

impl SheetCell {
    /// Text as it will roughly appear in the sheet, used for column widths.
    #[must_use]
    pub fn display_width(&self) -> usize {
        match self {
            Self::Text(text) => text.chars().count(),
            Self::Number(number) => format!("{:.2}", number.round_dp(2)).len(),
        }
    }
}

impl From<&str> for SheetCell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Decimal> for SheetCell {
    fn from(value: Decimal) -> Self {
        Self::Number(value)
    }
}

/// A named table rendered as one worksheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetTable {
    /// Worksheet name.
    pub name: &'static str,
    /// Header row, written in bold.
    pub headers: Vec<&'static str>,
    /// Data rows.
    pub rows: Vec<Vec<SheetCell>>,
}

impl SheetTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new(name: &'static str, headers: Vec<&'static str>) -> Self {
        Self {
            name,
            headers,
            rows: Vec::new(),
        }
    }

    /// Appends a row.
    pub fn push_row(&mut self, row: Vec<SheetCell>) {
        self.rows.push(row);
    }

    /// Width in characters of the widest cell in each column.
    #[must_use]
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.display_width());
            }
        }
        widths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_column_widths() {
        let mut table = SheetTable::new("Aba", vec!["Nome", "Valor"]);
        table.push_row(vec!["Aluguel do apartamento".into(), dec!(1500).into()]);
        table.push_row(vec!["Luz".into(), dec!(12345678.5).into()]);

        assert_eq!(table.column_widths(), vec![22, 11]);
    }

    #[test]
    fn test_display_width_counts_chars() {
        assert_eq!(SheetCell::from("Educação").display_width(), 8);
        assert_eq!(SheetCell::from(dec!(0.15)).display_width(), 4);
    }
}
