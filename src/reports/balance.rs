//! Balance Report
//!
//! Per-member view of a group's simplified balance matrix: who each member
//! owes, and who owes them. Every debt appears twice in the report (once on
//! each side) but comes from a single matrix cell.

use rust_decimal::Decimal;

use crate::balances::{compute_balances, BalanceMatrix};
use crate::models::{format_decimal, Group, Member};

/// One side of a debt, seen from a member's point of view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counterparty {
    pub member: Member,
    pub amount: Decimal,
}

/// Everything one member owes or is owed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberBalance {
    pub member: Member,
    /// Members this member owes money to
    pub owes: Vec<Counterparty>,
    /// Members who owe this member money
    pub owed_by: Vec<Counterparty>,
}

impl MemberBalance {
    pub fn is_settled(&self) -> bool {
        self.owes.is_empty() && self.owed_by.is_empty()
    }

    /// Amount owed to this member minus amount this member owes
    pub fn net(&self) -> Decimal {
        let owed: Decimal = self.owed_by.iter().map(|c| c.amount).sum();
        let owing: Decimal = self.owes.iter().map(|c| c.amount).sum();
        owed - owing
    }

    /// Display lines in the form "owes X: amount" / "is owed by X: amount"
    pub fn lines(&self, symbol: &str) -> Vec<String> {
        let owes = self.owes.iter().map(|c| {
            format!("owes {}: {}", c.member, format_decimal(c.amount, symbol))
        });
        let owed_by = self.owed_by.iter().map(|c| {
            format!("is owed by {}: {}", c.member, format_decimal(c.amount, symbol))
        });
        owes.chain(owed_by).collect()
    }
}

/// Balance report for one group
#[derive(Debug, Clone)]
pub struct BalanceReport {
    pub group_name: String,
    /// One entry per member, in member order
    pub members: Vec<MemberBalance>,
    /// Sum of all outstanding debts
    pub total_outstanding: Decimal,
}

impl BalanceReport {
    /// Compute balances for a group and build the report
    pub fn generate(group: &Group) -> Self {
        let matrix = compute_balances(&group.members, &group.expenses);
        Self::from_matrix(&group.name, &matrix)
    }

    /// Build the report from an already simplified matrix
    pub fn from_matrix(group_name: &str, matrix: &BalanceMatrix) -> Self {
        let to_counterparties = |entries: Vec<(&Member, Decimal)>| {
            entries
                .into_iter()
                .map(|(member, amount)| Counterparty {
                    member: member.clone(),
                    amount,
                })
                .collect::<Vec<_>>()
        };

        let members = matrix
            .members()
            .iter()
            .map(|member| MemberBalance {
                member: member.clone(),
                owes: to_counterparties(matrix.owes(member.as_str())),
                owed_by: to_counterparties(matrix.owed_by(member.as_str())),
            })
            .collect();

        Self {
            group_name: group_name.to_string(),
            members,
            total_outstanding: matrix.total_outstanding(),
        }
    }

    pub fn is_settled(&self) -> bool {
        self.members.iter().all(MemberBalance::is_settled)
    }

    /// Find the entry for a member
    pub fn member(&self, name: &str) -> Option<&MemberBalance> {
        self.members.iter().find(|m| m.member.as_str() == name)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Balances: {}\n", self.group_name));
        output.push_str(&"=".repeat(40));
        output.push('\n');

        if self.members.is_empty() {
            output.push_str("No members yet.\n");
            return output;
        }

        if self.is_settled() {
            output.push_str("Everyone is settled up.\n");
            return output;
        }

        for balance in &self.members {
            output.push_str(&format!("{}:", balance.member));
            if balance.is_settled() {
                output.push_str(" settled up\n");
                continue;
            }
            output.push('\n');
            for line in balance.lines(symbol) {
                output.push_str(&format!("  {}\n", line));
            }
        }

        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "Outstanding: {}\n",
            format_decimal(self.total_outstanding, symbol)
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Money};
    use rust_decimal_macros::dec;

    fn trip() -> Group {
        let mut group = Group::new("Trip");
        for name in ["A", "B", "C"] {
            group.add_member(Member::new(name)).unwrap();
        }
        group
    }

    fn add(group: &mut Group, payer: &str, cents: i64, split: &[&str]) {
        group
            .add_expense(Expense::new(
                Member::new(payer),
                Money::from_cents(cents),
                "Test",
                split.iter().map(|n| Member::new(n)),
            ))
            .unwrap();
    }

    #[test]
    fn test_each_debt_shown_from_both_sides() {
        let mut group = trip();
        add(&mut group, "A", 9000, &[]);

        let report = BalanceReport::generate(&group);

        let a = report.member("A").unwrap();
        assert!(a.owes.is_empty());
        assert_eq!(a.owed_by.len(), 2);
        assert_eq!(a.net(), dec!(60));
        assert_eq!(
            a.lines("$"),
            vec!["is owed by B: $30.00", "is owed by C: $30.00"]
        );

        let b = report.member("B").unwrap();
        assert_eq!(b.lines("$"), vec!["owes A: $30.00"]);
        assert_eq!(b.net(), dec!(-30));

        assert_eq!(report.total_outstanding, dec!(60));
    }

    #[test]
    fn test_empty_group_is_settled() {
        let report = BalanceReport::generate(&trip());
        assert!(report.is_settled());
        assert!(report.format_terminal("$").contains("Everyone is settled up."));
    }

    #[test]
    fn test_no_members() {
        let report = BalanceReport::generate(&Group::new("Empty"));
        assert!(report.format_terminal("$").contains("No members yet."));
    }

    #[test]
    fn test_format_terminal() {
        let mut group = trip();
        add(&mut group, "A", 10000, &["A", "B"]);
        add(&mut group, "B", 3000, &["A", "B"]);

        let output = BalanceReport::generate(&group).format_terminal("€");

        assert!(output.contains("Balances: Trip"));
        assert!(output.contains("A:\n  is owed by B: €35.00"));
        assert!(output.contains("B:\n  owes A: €35.00"));
        assert!(output.contains("C: settled up"));
        assert!(output.contains("Outstanding: €35.00"));
    }

    #[test]
    fn test_uneven_amounts_rounded_for_display_only() {
        let mut group = trip();
        add(&mut group, "A", 1000, &[]);

        let report = BalanceReport::generate(&group);
        let b = report.member("B").unwrap();
        assert_eq!(b.lines("$"), vec!["owes A: $3.33"]);
        assert!(b.owes[0].amount > dec!(3.33));
    }
}
