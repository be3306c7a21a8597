//! Budget display formatting
//!
//! Formats the budgets sheet, per-category totals and the outcome of budget
//! changes for terminal output.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Budget;
use crate::services::{BudgetUpsert, CategoryTotal, Correction};

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Budget")]
    budget_amount: String,
    #[tabled(rename = "Spent")]
    current_expenses: String,
    #[tabled(rename = "Remaining")]
    remaining_budget: String,
    #[tabled(rename = "")]
    status: &'static str,
}

#[derive(Tabled)]
struct TotalRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
}

fn status(budget: &Budget) -> &'static str {
    if budget.is_overspent() {
        "⚠ over"
    } else {
        ""
    }
}

/// Format the budgets sheet as a table
pub fn format_budget_table(budgets: &[Budget], symbol: &str) -> String {
    if budgets.is_empty() {
        return "No budgets set.\n\nRun 'expense budget set <category> <amount>' to create one."
            .to_string();
    }

    let rows = budgets.iter().map(|b| BudgetRow {
        category: b.category.clone(),
        budget_amount: b.budget_amount.format_with_symbol(symbol),
        current_expenses: b.current_expenses.format_with_symbol(symbol),
        remaining_budget: b.remaining_budget.format_with_symbol(symbol),
        status: status(b),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Format spending per category, with budget figures where a budget exists
pub fn format_category_totals(totals: &[CategoryTotal], symbol: &str) -> String {
    let rows = totals.iter().map(|t| TotalRow {
        category: t.category.clone(),
        spent: t.spent.format_with_symbol(symbol),
        budget: t
            .budget
            .as_ref()
            .map(|b| b.budget_amount.format_with_symbol(symbol))
            .unwrap_or_else(|| "-".to_string()),
        remaining: t
            .budget
            .as_ref()
            .map(|b| b.remaining_budget.format_with_symbol(symbol))
            .unwrap_or_else(|| "-".to_string()),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Describe the outcome of setting a budget
pub fn format_budget_upsert(outcome: &BudgetUpsert, symbol: &str) -> String {
    let budget = outcome.budget();
    match outcome {
        BudgetUpsert::Created(_) => format!(
            "Created {} budget of {} ({} already spent, {} remaining).",
            budget.category,
            budget.budget_amount.format_with_symbol(symbol),
            budget.current_expenses.format_with_symbol(symbol),
            budget.remaining_budget.format_with_symbol(symbol)
        ),
        BudgetUpsert::Updated { previous, .. } => format!(
            "Updated {} budget: {} -> {} ({} spent, {} remaining).",
            budget.category,
            previous.budget_amount.format_with_symbol(symbol),
            budget.budget_amount.format_with_symbol(symbol),
            budget.current_expenses.format_with_symbol(symbol),
            budget.remaining_budget.format_with_symbol(symbol)
        ),
        BudgetUpsert::Declined(_) => format!(
            "No change: {} budget stays at {}.",
            budget.category,
            budget.budget_amount.format_with_symbol(symbol)
        ),
    }
}

/// Describe the corrections made by a full reconciliation
pub fn format_corrections(corrections: &[Correction], symbol: &str) -> String {
    if corrections.is_empty() {
        return "All budgets already match the recorded expenses.".to_string();
    }

    let mut output = format!("Corrected {} budget(s):\n", corrections.len());
    for c in corrections {
        output.push_str(&format!(
            "  {} ({}): spent {} -> {}, remaining {} -> {}\n",
            c.after.category,
            c.position,
            c.before.current_expenses.format_with_symbol(symbol),
            c.after.current_expenses.format_with_symbol(symbol),
            c.before.remaining_budget.format_with_symbol(symbol),
            c.after.remaining_budget.format_with_symbol(symbol)
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::RowPosition;

    fn utilities(spent: i64) -> Budget {
        Budget::new("Utilities", Money::from_cents(20000), Money::from_cents(spent))
    }

    #[test]
    fn test_empty_budget_table() {
        assert!(format_budget_table(&[], "£").starts_with("No budgets set."));
    }

    #[test]
    fn test_budget_table_marks_overspent() {
        let output = format_budget_table(&[utilities(4550), utilities(25000)], "£");
        assert!(output.contains("£154.50"));
        assert!(output.contains("-£50.00"));
        assert!(output.contains("⚠ over"));
    }

    #[test]
    fn test_upsert_messages() {
        let created = format_budget_upsert(&BudgetUpsert::Created(utilities(0)), "£");
        assert!(created.starts_with("Created Utilities budget of £200.00"));

        let declined = format_budget_upsert(&BudgetUpsert::Declined(utilities(0)), "£");
        assert!(declined.starts_with("No change"));
    }

    #[test]
    fn test_corrections() {
        assert!(format_corrections(&[], "£").starts_with("All budgets"));

        let output = format_corrections(
            &[Correction {
                position: RowPosition::new(0),
                before: utilities(0),
                after: utilities(4550),
            }],
            "£",
        );
        assert!(output.contains("Utilities (row 2)"));
        assert!(output.contains("£0.00 -> £45.50"));
    }
}
