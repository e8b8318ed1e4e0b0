//! Prompt templates.

use rust_decimal::Decimal;
use std::fmt::Write as _;
use tallyboard_shared::types::Money;

use crate::effort::EffortEstimate;
use crate::summary::{Aggregator, FinanceSummary};

/// Renders a pipe table with a header separator row.
#[must_use]
pub fn markdown_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut table = format!("| {} |\n", headers.join(" | "));
    let separators: Vec<&str> = headers.iter().map(|_| "---").collect();
    let _ = writeln!(table, "|{}|", separators.join("|"));
    for row in rows {
        let _ = writeln!(table, "| {} |", row.join(" | "));
    }
    table
}

fn number(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Prompt asking for commentary on an effort breakdown.
#[must_use]
pub fn effort_prompt(estimate: &EffortEstimate) -> String {
    let summary = Aggregator::summarize_effort(estimate);
    let summary_table = markdown_table(
        &["Métrica", "Valor"],
        &[
            vec!["Total de Horas".to_string(), number(summary.total_hours)],
            vec![
                "Custo Total Estimado (R$)".to_string(),
                number(summary.total_cost),
            ],
            vec![
                "Prazo Estimado (Semanas)".to_string(),
                number(summary.weeks),
            ],
        ],
    );

    let detail_rows: Vec<Vec<String>> = estimate
        .lines
        .iter()
        .map(|line| {
            vec![
                line.activity.to_string(),
                number(line.share),
                number(line.hours),
                number(line.hourly_rate),
                number(line.cost),
            ]
        })
        .collect();
    let detail_table = markdown_table(
        &[
            "Atividade",
            "Percentual de Horas",
            "Horas Estimadas",
            "Custo por Hora (R$)",
            "Custo Total (R$)",
        ],
        &detail_rows,
    );

    format!(
        "Você é um analista de projetos de software experiente. Analise o resumo do cálculo e a distribuição de despesas a seguir.

### Resumo do Projeto:
{summary_table}
### Distribuição Detalhada de Despesas:
{detail_table}
Gere uma análise concisa focando em:
1. **Foco do Esforço:** Quais atividades consomem a maior parte do custo/tempo (e.g., Backend, Frontend)?
2. **Risco:** Baseado na distribuição percentual (e.g., se Testes é menor que 10%), identifique um potencial risco na estimativa.
3. **Recomendação:** Dê uma única sugestão de otimização de custo ou tempo.

Use Markdown para formatar o resultado.
"
    )
}

/// Prompt asking for commentary on monthly spending.
#[must_use]
pub fn finance_prompt(summary: &FinanceSummary) -> String {
    let rows: Vec<Vec<String>> = summary
        .by_category
        .iter()
        .map(|total| {
            vec![
                total.category.portuguese_label().to_string(),
                Money::brl(total.amount).to_string(),
                format!("{}%", total.share_percent.normalize()),
            ]
        })
        .collect();
    let table = markdown_table(&["Categoria", "Valor", "Participação"], &rows);

    format!(
        "Você é um consultor de finanças pessoais. Analise o orçamento mensal a seguir.

### Resumo do Mês:
- Renda mensal: {income}
- Total de despesas: {expenses}
- Saldo: {balance}

### Despesas por Categoria:
{table}
Gere uma análise concisa focando em:
1. **Foco dos Gastos:** Quais categorias concentram a maior parte das despesas?
2. **Risco:** Identifique um risco para o orçamento (e.g., saldo negativo ou uma categoria desproporcional).
3. **Recomendação:** Dê uma única sugestão prática para melhorar o saldo.

Use Markdown para formatar o resultado.
",
        income = Money::brl(summary.income),
        expenses = Money::brl(summary.total_expenses),
        balance = Money::brl(summary.balance),
    )
}
