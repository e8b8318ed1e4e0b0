//! Spreadsheet (`.xlsx` / `.xls`) reader. Only the first sheet is read.

use calamine::{Data, Reader, open_workbook_auto_from_rs};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use std::io::Cursor;

use super::columns::{RawCell, build_outcome, canonical_header};
use super::types::{ImportOutcome, ImportWarning};

/// Reads the first worksheet; its first row is the header.
pub fn read(bytes: &[u8]) -> ImportOutcome {
    let mut workbook = match open_workbook_auto_from_rs(Cursor::new(bytes)) {
        Ok(workbook) => workbook,
        Err(e) => return unreadable(e.to_string()),
    };

    let range = match workbook.worksheet_range_at(0) {
        Some(Ok(range)) => range,
        Some(Err(e)) => return unreadable(e.to_string()),
        None => return unreadable("a planilha não possui abas".to_string()),
    };

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .map(|header| {
            header
                .iter()
                .map(|cell| canonical_header(&cell.to_string()))
                .collect()
        })
        .unwrap_or_default();

    build_outcome(&headers, rows.map(|row| row.iter().map(raw_cell).collect()))
}

fn raw_cell(cell: &Data) -> RawCell {
    match cell {
        Data::Empty => RawCell::Empty,
        Data::Int(value) => RawCell::Number(Decimal::from(*value)),
        Data::Float(value) => {
            Decimal::from_f64(*value).map_or(RawCell::Invalid, |d| RawCell::Number(d.normalize()))
        }
        Data::Error(_) => RawCell::Invalid,
        other => RawCell::text(&other.to_string()),
    }
}

fn unreadable(reason: String) -> ImportOutcome {
    tracing::warn!(%reason, "Spreadsheet could not be read");
    ImportOutcome::with_warning(ImportWarning::Unreadable { reason })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::ExpenseCategory;
    use rust_decimal_macros::dec;
    use rust_xlsxwriter::Workbook;

    fn workbook_bytes(header: &[&str], rows: &[(&str, Option<f64>, &str)]) -> Vec<u8> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        for (col, title) in (0u16..).zip(header) {
            sheet.write_string(0, col, *title).unwrap();
        }
        for (row, (name, amount, category)) in (1u32..).zip(rows) {
            sheet.write_string(row, 0, *name).unwrap();
            match amount {
                Some(amount) => sheet.write_number(row, 1, *amount).unwrap(),
                None => sheet.write_string(row, 1, "n/d").unwrap(),
            };
            sheet.write_string(row, 2, *category).unwrap();
        }
        workbook.save_to_buffer().unwrap()
    }

    #[test]
    fn test_read_first_sheet() {
        let bytes = workbook_bytes(
            &["Descrição", "Valor", "Tipo"],
            &[
                ("Aluguel", Some(1500.0), "Moradia"),
                ("Feira", None, "Alimentação"),
                ("Cinema", Some(45.9), "Lazer"),
            ],
        );
        let outcome = read(&bytes);

        assert_eq!(outcome.entries.len(), 2);
        assert_eq!(outcome.dropped_rows, 1);
        assert_eq!(outcome.entries[0].amount(), dec!(1500));
        assert_eq!(outcome.entries[0].category(), ExpenseCategory::Housing);
        assert_eq!(outcome.entries[1].name(), "Cinema");
        assert_eq!(outcome.entries[1].amount(), dec!(45.9));
        assert_eq!(outcome.entries[1].category(), ExpenseCategory::Leisure);
    }

    #[test]
    fn test_read_missing_columns() {
        let bytes = workbook_bytes(&["Data", "Total", "Tipo"], &[("x", Some(1.0), "Lazer")]);
        let outcome = read(&bytes);
        assert!(outcome.entries.is_empty());
        assert!(matches!(
            outcome.warnings.as_slice(),
            [ImportWarning::MissingColumns { .. }]
        ));
    }

    #[test]
    fn test_read_garbage() {
        let outcome = read(b"definitely not a workbook");
        assert!(outcome.entries.is_empty());
        assert!(matches!(
            outcome.warnings.as_slice(),
            [ImportWarning::Unreadable { .. }]
        ));
    }

    #[test]
    fn test_raw_cell_conversion() {
        assert_eq!(raw_cell(&Data::Int(7)), RawCell::Number(dec!(7)));
        assert_eq!(raw_cell(&Data::Float(2.5)), RawCell::Number(dec!(2.5)));
        assert_eq!(raw_cell(&Data::Float(f64::NAN)), RawCell::Invalid);
        assert_eq!(
            raw_cell(&Data::String(" Luz ".to_string())),
            RawCell::Text("Luz".to_string())
        );
        assert_eq!(raw_cell(&Data::Empty), RawCell::Empty);
    }
}
