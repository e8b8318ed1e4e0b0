//! Workbook layouts for the two dashboards.

use super::error::ExportError;
use super::types::{SheetCell, SheetTable};
use super::writer::write_workbook;
use crate::effort::EffortEstimate;
use crate::ledger::{ExpenseCategory, Ledger};
use crate::summary::Aggregator;

/// MIME type of the exported workbooks.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Download name of the effort workbook.
pub const EFFORT_FILENAME: &str = "calculadora_de_software.xlsx";
/// Download name of the ledger workbook.
pub const LEDGER_FILENAME: &str = "lancamentos.xlsx";

/// Effort breakdown sheet.
pub const EFFORT_DETAIL_SHEET: &str = "Despesas Detalhadas";
/// Effort totals sheet.
pub const EFFORT_SUMMARY_SHEET: &str = "Resumo do Cálculo";
/// Ledger sheet.
pub const LEDGER_SHEET: &str = "Lançamentos";

/// Builds the dashboard workbooks.
pub struct ExportService;

impl ExportService {
    /// Breakdown and totals of an effort estimate, one sheet each.
    pub fn effort_workbook(estimate: &EffortEstimate) -> Result<Vec<u8>, ExportError> {
        write_workbook(&Self::effort_tables(estimate))
    }

    /// Every ledger entry with its Portuguese category label.
    pub fn ledger_workbook(ledger: &Ledger<ExpenseCategory>) -> Result<Vec<u8>, ExportError> {
        write_workbook(&[Self::ledger_table(ledger)])
    }

    /// Tables backing [`Self::effort_workbook`].
    #[must_use]
    pub fn effort_tables(estimate: &EffortEstimate) -> [SheetTable; 2] {
        let mut detail = SheetTable::new(
            EFFORT_DETAIL_SHEET,
            vec![
                "Atividade",
                "Percentual de Horas",
                "Horas Estimadas",
                "Custo por Hora (R$)",
                "Custo Total (R$)",
            ],
        );
        for line in &estimate.lines {
            detail.push_row(vec![
                line.activity.into(),
                line.share.into(),
                line.hours.into(),
                line.hourly_rate.into(),
                line.cost.into(),
            ]);
        }

        let summary = Aggregator::summarize_effort(estimate);
        let mut totals = SheetTable::new(EFFORT_SUMMARY_SHEET, vec!["Métrica", "Valor"]);
        totals.push_row(vec!["Total de Horas".into(), summary.total_hours.into()]);
        totals.push_row(vec![
            "Custo Total Estimado (R$)".into(),
            summary.total_cost.into(),
        ]);
        totals.push_row(vec!["Prazo Estimado (Semanas)".into(), summary.weeks.into()]);

        [detail, totals]
    }

    /// Table backing [`Self::ledger_workbook`].
    #[must_use]
    pub fn ledger_table(ledger: &Ledger<ExpenseCategory>) -> SheetTable {
        let mut table = SheetTable::new(LEDGER_SHEET, vec!["Nome", "Valor", "Categoria"]);
        for entry in ledger {
            table.push_row(vec![
                SheetCell::Text(entry.name().to_string()),
                entry.amount().into(),
                entry.category().portuguese_label().into(),
            ]);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effort::EffortEngine;
    use crate::import::ImportService;
    use calamine::{Data, Reader, open_workbook_auto_from_rs};
    use rust_decimal::Decimal;
    use rust_decimal::prelude::FromPrimitive;
    use rust_decimal_macros::dec;
    use std::io::Cursor;

    fn number(data: Option<&Data>) -> Decimal {
        match data {
            Some(Data::Float(value)) => Decimal::from_f64(*value).unwrap().round_dp(2),
            Some(Data::Int(value)) => Decimal::from(*value),
            other => panic!("expected a number, got {other:?}"),
        }
    }

    fn text(data: Option<&Data>) -> String {
        match data {
            Some(Data::String(value)) => value.clone(),
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_effort_workbook_round_trip() {
        let estimate = EffortEngine::calculate(240).unwrap();
        let bytes = ExportService::effort_workbook(&estimate).unwrap();

        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.as_slice())).unwrap();
        assert_eq!(
            workbook.sheet_names(),
            vec![
                EFFORT_DETAIL_SHEET.to_string(),
                EFFORT_SUMMARY_SHEET.to_string()
            ]
        );

        let detail = workbook.worksheet_range(EFFORT_DETAIL_SHEET).unwrap();
        assert_eq!(detail.get_size(), (5, 5));
        assert_eq!(text(detail.get_value((0, 4))), "Custo Total (R$)");
        assert_eq!(text(detail.get_value((1, 0))), "Análise de Requisitos");
        assert_eq!(number(detail.get_value((1, 1))), dec!(0.15));
        assert_eq!(number(detail.get_value((2, 2))), dec!(96));
        assert_eq!(number(detail.get_value((4, 3))), dec!(120));
        assert_eq!(number(detail.get_value((4, 4))), dec!(4320));

        let totals = workbook.worksheet_range(EFFORT_SUMMARY_SHEET).unwrap();
        assert_eq!(totals.get_size(), (4, 2));
        assert_eq!(text(totals.get_value((1, 0))), "Total de Horas");
        assert_eq!(number(totals.get_value((1, 1))), dec!(240));
        assert_eq!(number(totals.get_value((2, 1))), dec!(34920));
        assert_eq!(text(totals.get_value((3, 0))), "Prazo Estimado (Semanas)");
        assert_eq!(number(totals.get_value((3, 1))), dec!(6));
    }

    #[test]
    fn test_ledger_workbook_round_trips_through_import() {
        let mut ledger = Ledger::new();
        ledger
            .record("Aluguel", dec!(1500.00), ExpenseCategory::Housing)
            .unwrap();
        ledger
            .record("Mercado", dec!(642.37), ExpenseCategory::Food)
            .unwrap();
        ledger
            .record("Curso", dec!(99.90), ExpenseCategory::Education)
            .unwrap();

        let bytes = ExportService::ledger_workbook(&ledger).unwrap();
        let outcome = ImportService::import_file(LEDGER_FILENAME, &bytes);

        assert_eq!(outcome.dropped_rows, 0);
        assert_eq!(outcome.entries.len(), ledger.len());
        for (imported, original) in outcome.entries.iter().zip(&ledger) {
            assert_eq!(imported.name(), original.name());
            assert_eq!(imported.amount().round_dp(2), original.amount());
            assert_eq!(imported.category(), original.category());
        }
    }

    #[test]
    fn test_empty_ledger_exports_header_only() {
        let bytes = ExportService::ledger_workbook(&Ledger::new()).unwrap();
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.as_slice())).unwrap();
        let range = workbook.worksheet_range(LEDGER_SHEET).unwrap();
        assert_eq!(range.get_size(), (1, 3));
        assert_eq!(text(range.get_value((0, 2))), "Categoria");
    }
}
