//! Expense display formatting
//!
//! Formats a group's expense history as a table.

use rust_decimal::Decimal;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{format_decimal, Expense};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Paid by")]
    payer: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Split between")]
    split: String,
}

/// Format the expense history of a group
pub fn format_expense_list(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows = expenses.iter().enumerate().map(|(i, expense)| ExpenseRow {
        index: i + 1,
        description: expense.description.clone(),
        payer: expense.payer.to_string(),
        amount: expense.amount.format_with_symbol(symbol),
        split: format_split(expense),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());

    let total: Decimal = expenses.iter().map(|e| e.amount.to_decimal()).sum();
    format!(
        "{}\n\nTotal: {} across {} expense(s)\n",
        table,
        format_decimal(total, symbol),
        expenses.len()
    )
}

/// Format a single expense after it was added
pub fn format_expense_details(expense: &Expense, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense: {}\n", expense.description));
    output.push_str(&format!("  ID:       {}\n", expense.id));
    output.push_str(&format!("  Paid by:  {}\n", expense.payer));
    output.push_str(&format!(
        "  Amount:   {}\n",
        expense.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!("  Split:    {}\n", format_split(expense)));
    output.push_str(&format!(
        "  Added:    {}\n",
        expense.created_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}

fn format_split(expense: &Expense) -> String {
    if expense.split.is_empty() {
        return "(nobody)".to_string();
    }

    expense
        .split
        .iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Member, Money};

    fn expense(description: &str, payer: &str, cents: i64, split: &[&str]) -> Expense {
        Expense::new(
            Member::new(payer),
            Money::from_cents(cents),
            description,
            split.iter().map(|n| Member::new(n)),
        )
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(format_expense_list(&[], "$"), "No expenses recorded.\n");
    }

    #[test]
    fn test_history_table() {
        let expenses = vec![
            expense("Groceries", "Ana", 4250, &["Ana", "Ben"]),
            expense("Cinema", "Ben", 1800, &["Ana", "Ben", "Cy"]),
        ];

        let output = format_expense_list(&expenses, "$");

        assert!(output.contains("Paid by"));
        assert!(output.contains("Groceries"));
        assert!(output.contains("$42.50"));
        assert!(output.contains("Ana, Ben, Cy"));
        assert!(output.contains("Total: $60.50 across 2 expense(s)"));
        assert!(output.find("Groceries").unwrap() < output.find("Cinema").unwrap());
    }

    #[test]
    fn test_history_total_of_largest_amounts() {
        let max = i64::MAX;
        let expenses = vec![
            expense("Yacht", "Ana", max, &["Ana"]),
            expense("Jet", "Ben", max, &["Ben"]),
        ];

        let output = format_expense_list(&expenses, "$");
        assert!(output.contains("Total: $184467440737095516.14 across 2 expense(s)"));
    }

    #[test]
    fn test_details() {
        let output = format_expense_details(&expense("Taxi", "Cy", 999, &["Cy", "Ana"]), "€");
        assert!(output.contains("Expense: Taxi"));
        assert!(output.contains("Paid by:  Cy"));
        assert!(output.contains("Amount:   €9.99"));
        assert!(output.contains("Split:    Cy, Ana"));
    }
}
