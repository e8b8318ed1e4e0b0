//! Renders [`SheetTable`]s into an `.xlsx` buffer.

use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, Workbook, Worksheet};

use super::error::ExportError;
use super::types::{SheetCell, SheetTable};

const NUMBER_FORMAT: &str = "0.00";
const MIN_COLUMN_WIDTH: u16 = 8;
const MAX_COLUMN_WIDTH: u16 = 60;

/// Writes one worksheet per table and returns the workbook bytes.
///
/// Nothing is returned on failure, so callers never see a partial buffer.
pub fn write_workbook(tables: &[SheetTable]) -> Result<Vec<u8>, ExportError> {
    let header_format = Format::new().set_bold();
    let number_format = Format::new().set_num_format(NUMBER_FORMAT);

    let mut workbook = Workbook::new();
    for table in tables {
        if table.headers.is_empty() {
            return Err(ExportError::EmptyTable(table.name.to_string()));
        }
        let sheet = workbook.add_worksheet();
        sheet.set_name(table.name)?;
        write_table(sheet, table, &header_format, &number_format)?;
    }

    let buffer = workbook.save_to_buffer()?;
    tracing::debug!(sheets = tables.len(), bytes = buffer.len(), "Rendered workbook");
    Ok(buffer)
}

fn write_table(
    sheet: &mut Worksheet,
    table: &SheetTable,
    header_format: &Format,
    number_format: &Format,
) -> Result<(), ExportError> {
    for (col, header) in (0u16..).zip(&table.headers) {
        sheet.write_string_with_format(0, col, *header, header_format)?;
    }

    for (row, cells) in (1u32..).zip(&table.rows) {
        for (col, cell) in (0u16..).zip(cells) {
            match cell {
                SheetCell::Text(text) => {
                    sheet.write_string(row, col, text)?;
                }
                SheetCell::Number(number) => {
                    let value = number
                        .to_f64()
                        .ok_or(ExportError::NumberOutOfRange(*number))?;
                    sheet.write_number_with_format(row, col, value, number_format)?;
                }
            }
        }
    }

    for (col, width) in (0u16..).zip(table.column_widths()) {
        let width = u16::try_from(width + 2)
            .unwrap_or(MAX_COLUMN_WIDTH)
            .clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH);
        sheet.set_column_width(col, width)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{Data, Reader, open_workbook_auto_from_rs};
    use rust_decimal_macros::dec;
    use std::io::Cursor;

    #[test]
    fn test_write_and_read_back() {
        let mut table = SheetTable::new("Lançamentos", vec!["Nome", "Valor"]);
        table.push_row(vec!["Aluguel".into(), dec!(1500.00).into()]);
        table.push_row(vec!["Luz".into(), dec!(180.35).into()]);

        let bytes = write_workbook(&[table]).unwrap();
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.as_slice())).unwrap();
        assert_eq!(workbook.sheet_names(), vec!["Lançamentos".to_string()]);

        let range = workbook.worksheet_range("Lançamentos").unwrap();
        assert_eq!(range.get_size(), (3, 2));
        assert_eq!(
            range.get_value((0, 0)),
            Some(&Data::String("Nome".to_string()))
        );
        assert_eq!(
            range.get_value((2, 0)),
            Some(&Data::String("Luz".to_string()))
        );
        assert!(matches!(range.get_value((1, 1)), Some(Data::Float(_))));
    }

    #[test]
    fn test_multiple_sheets_keep_order() {
        let tables = [
            SheetTable::new("Primeira", vec!["A"]),
            SheetTable::new("Segunda", vec!["B"]),
        ];
        let bytes = write_workbook(&tables).unwrap();
        let workbook = open_workbook_auto_from_rs(Cursor::new(bytes.as_slice())).unwrap();
        assert_eq!(
            workbook.sheet_names(),
            vec!["Primeira".to_string(), "Segunda".to_string()]
        );
    }

    #[test]
    fn test_invalid_sheet_name_fails() {
        let table = SheetTable::new("Nome/Inválido", vec!["A"]);
        assert!(matches!(
            write_workbook(&[table]),
            Err(ExportError::Workbook(_))
        ));
    }

    #[test]
    fn test_table_without_columns_fails() {
        let table = SheetTable::new("Vazia", Vec::new());
        assert!(matches!(
            write_workbook(&[table]),
            Err(ExportError::EmptyTable(name)) if name == "Vazia"
        ));
    }
}
