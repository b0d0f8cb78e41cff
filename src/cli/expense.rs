//! Expense and balance CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_list};
use crate::error::{SplitError, SplitResult};
use crate::models::Money;
use crate::services::{ExpenseService, NewExpense};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Group name
        group: String,
        /// Member who paid
        #[arg(short, long)]
        payer: String,
        /// Amount paid (e.g., "42" or "42.50")
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,
        /// What the money was spent on
        #[arg(short, long)]
        description: String,
        /// Member sharing the cost (repeat for each; omit to split between everyone)
        #[arg(short, long = "split", value_name = "MEMBER")]
        split: Vec<String>,
    },

    /// Show the expense history of a group
    List {
        /// Group name
        group: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> SplitResult<()> {
    let service = ExpenseService::new(storage);
    let symbol = &settings.currency_symbol;

    match cmd {
        ExpenseCommands::Add {
            group,
            payer,
            amount,
            description,
            split,
        } => {
            let amount = Money::parse(&amount)
                .map_err(|e| SplitError::Validation(format!("Invalid amount: {}", e)))?;

            let expense = service.add(
                &group,
                NewExpense {
                    payer,
                    amount,
                    description,
                    split,
                },
            )?;

            print!("{}", format_expense_details(&expense, symbol));
        }

        ExpenseCommands::List { group } => {
            let expenses = service.list(&group)?;
            print!("{}", format_expense_list(&expenses, symbol));
        }
    }

    Ok(())
}

/// Print who owes whom in a group
pub fn handle_balances_command(
    storage: &Storage,
    settings: &Settings,
    group: &str,
) -> SplitResult<()> {
    let report = ExpenseService::new(storage).report(group)?;
    print!("{}", report.format_terminal(&settings.currency_symbol));
    Ok(())
}
