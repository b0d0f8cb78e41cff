//! Balance computation
//!
//! Turns a member list and an expense history into a [`BalanceMatrix`].
//! Everything here is pure: inputs are borrowed, a fresh matrix is returned,
//! and the only side effect is `tracing` output for input that had to be
//! skipped.

use rust_decimal::Decimal;
use std::collections::HashSet;
use tracing::{debug, warn};

use super::matrix::BalanceMatrix;
use crate::models::{Expense, Member};

/// Compute the simplified balance matrix for a group
///
/// Each expense is divided equally among its split; every participant other
/// than the payer then owes the payer one share. Reciprocal debts between two
/// members are netted so that at most one direction per pair is non-zero.
pub fn compute_balances(members: &[Member], expenses: &[Expense]) -> BalanceMatrix {
    let mut matrix = accumulate(members, expenses);
    matrix.simplify();

    debug!(
        members = matrix.len(),
        expenses = expenses.len(),
        outstanding = %matrix.total_outstanding(),
        "computed balances"
    );

    matrix
}

/// Accumulate shares without simplifying
///
/// The result is antisymmetric: `get(a, b) == -get(b, a)` for every pair.
pub fn accumulate(members: &[Member], expenses: &[Expense]) -> BalanceMatrix {
    let mut matrix = BalanceMatrix::new(members);
    for expense in expenses {
        apply_expense(&mut matrix, expense);
    }
    matrix
}

fn apply_expense(matrix: &mut BalanceMatrix, expense: &Expense) {
    if expense.amount.is_negative() {
        warn!(expense = %expense.id, amount = %expense.amount, "skipping expense with negative amount");
        return;
    }

    let Some(payer) = matrix.position(expense.payer.as_str()) else {
        warn!(expense = %expense.id, payer = %expense.payer, "skipping expense paid by unknown member");
        return;
    };

    let mut seen = HashSet::new();
    let participants: Vec<&Member> = expense.split.iter().filter(|m| seen.insert(*m)).collect();

    if participants.is_empty() {
        debug!(expense = %expense.id, "expense has an empty split, nothing to share");
        return;
    }

    let share = expense.amount.to_decimal() / Decimal::from(participants.len());

    for participant in participants {
        match matrix.position(participant.as_str()) {
            Some(debtor) if debtor == payer => {}
            Some(debtor) => matrix.record_share(debtor, payer, share),
            None => {
                warn!(expense = %expense.id, member = %participant, "skipping share of unknown member");
            }
        }
    }
}
