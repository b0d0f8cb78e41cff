//! Expense service
//!
//! Records expenses against a group and computes the group's balances.

use tracing::info;

use super::group::GroupService;
use super::group_error;
use crate::balances::{compute_balances, BalanceMatrix};
use crate::error::{SplitError, SplitResult};
use crate::models::{Expense, Member, Money};
use crate::reports::BalanceReport;
use crate::storage::Storage;

/// An expense as submitted, before it is checked against the group
#[derive(Debug, Clone, Default)]
pub struct NewExpense {
    pub payer: String,
    pub amount: Money,
    pub description: String,
    /// Members sharing the cost; empty means everyone currently in the group
    pub split: Vec<String>,
}

/// Service for expenses and balances
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    fn groups(&self) -> GroupService<'a> {
        GroupService::new(self.storage)
    }

    /// Add an expense to a group
    ///
    /// Payer, amount and description are required. The payer and every split
    /// entry must already be members of the group.
    pub fn add(&self, group_name: &str, new: NewExpense) -> SplitResult<Expense> {
        let mut group = self.groups().get(group_name)?;

        if new.payer.trim().is_empty() {
            return Err(SplitError::Validation("Expense must have a payer".into()));
        }

        let expense = Expense::new(
            Member::new(&new.payer),
            new.amount,
            new.description,
            new.split.iter().map(Member::new),
        );

        let added = group
            .add_expense(expense)
            .map_err(|e| group_error(group_name.trim(), e))?
            .clone();

        self.storage.groups.update(group.clone())?;

        info!(
            group = %group.name,
            expense = %added.id,
            payer = %added.payer,
            amount = %added.amount,
            participants = added.split.len(),
            "added expense"
        );
        Ok(added)
    }

    /// Expense history of a group, oldest first
    pub fn list(&self, group_name: &str) -> SplitResult<Vec<Expense>> {
        Ok(self.groups().get(group_name)?.expenses)
    }

    /// Simplified balance matrix for a group
    pub fn balances(&self, group_name: &str) -> SplitResult<BalanceMatrix> {
        let group = self.groups().get(group_name)?;
        Ok(compute_balances(&group.members, &group.expenses))
    }

    /// Per-member balance report for a group
    pub fn report(&self, group_name: &str) -> SplitResult<BalanceReport> {
        let group = self.groups().get(group_name)?;
        Ok(BalanceReport::generate(&group))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Group;
    use crate::storage::GroupStore;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn create_test_storage() -> Storage {
        let storage = Storage::in_memory();
        storage.load_all().unwrap();

        let groups = GroupService::new(&storage);
        groups.create("Trip").unwrap();
        for name in ["A", "B", "C"] {
            groups.add_member("Trip", name).unwrap();
        }
        storage
    }

    fn new_expense(payer: &str, cents: i64, split: &[&str]) -> NewExpense {
        NewExpense {
            payer: payer.into(),
            amount: Money::from_cents(cents),
            description: "Dinner".into(),
            split: split.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_add_expense_with_default_split() {
        let storage = create_test_storage();
        let service = ExpenseService::new(&storage);

        let expense = service.add("Trip", new_expense("A", 9000, &[])).unwrap();
        let split: Vec<_> = expense.split.iter().map(|m| m.as_str()).collect();
        assert_eq!(split, vec!["A", "B", "C"]);

        let matrix = service.balances("Trip").unwrap();
        assert_eq!(matrix.get("B", "A"), dec!(30));
        assert_eq!(matrix.get("C", "A"), dec!(30));
        assert_eq!(matrix.get("A", "B"), Decimal::ZERO);
    }

    #[test]
    fn test_default_split_is_a_snapshot() {
        let storage = create_test_storage();
        let service = ExpenseService::new(&storage);

        service.add("Trip", new_expense("A", 9000, &[])).unwrap();
        GroupService::new(&storage).add_member("Trip", "D").unwrap();

        let history = service.list("Trip").unwrap();
        assert!(!history[0].includes("D"));

        let matrix = service.balances("Trip").unwrap();
        assert_eq!(matrix.get("D", "A"), Decimal::ZERO);
        assert_eq!(matrix.get("B", "A"), dec!(30));
    }

    #[test]
    fn test_netting_across_expenses() {
        let storage = create_test_storage();
        let service = ExpenseService::new(&storage);

        service.add("Trip", new_expense("A", 10000, &["A", "B"])).unwrap();
        service.add("Trip", new_expense("B", 3000, &["A", "B"])).unwrap();

        let report = service.report("Trip").unwrap();
        let b = report.member("B").unwrap();
        assert_eq!(b.owes.len(), 1);
        assert_eq!(b.owes[0].amount, dec!(35));
        assert!(report.member("A").unwrap().owes.is_empty());
    }

    #[test]
    fn test_incomplete_expense_rejected() {
        let storage = create_test_storage();
        let service = ExpenseService::new(&storage);

        assert!(service.add("Trip", new_expense("", 100, &[])).unwrap_err().is_validation());
        assert!(service.add("Trip", new_expense("A", 0, &[])).unwrap_err().is_validation());

        let mut no_description = new_expense("A", 100, &[]);
        no_description.description = "  ".into();
        assert!(service.add("Trip", no_description).unwrap_err().is_validation());

        assert!(service.list("Trip").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_members_rejected() {
        let storage = create_test_storage();
        let service = ExpenseService::new(&storage);

        let err = service.add("Trip", new_expense("Zed", 100, &[])).unwrap_err();
        assert!(matches!(err, SplitError::UnknownMember { ref member, .. } if member == "Zed"));

        let err = service
            .add("Trip", new_expense("A", 100, &["B", "Zed"]))
            .unwrap_err();
        assert!(matches!(err, SplitError::UnknownMember { .. }));

        assert!(service.list("Trip").unwrap().is_empty());
    }

    #[test]
    fn test_missing_group() {
        let storage = create_test_storage();
        let service = ExpenseService::new(&storage);

        assert!(service.add("Nope", new_expense("A", 100, &[])).unwrap_err().is_not_found());
        assert!(service.balances("Nope").unwrap_err().is_not_found());
    }

    #[test]
    fn test_history_keeps_entry_order() {
        let storage = create_test_storage();
        let service = ExpenseService::new(&storage);

        for (payer, cents) in [("C", 100), ("A", 200), ("B", 300)] {
            service.add("Trip", new_expense(payer, cents, &[])).unwrap();
        }

        let payers: Vec<_> = service
            .list("Trip")
            .unwrap()
            .into_iter()
            .map(|e| e.payer.to_string())
            .collect();
        assert_eq!(payers, vec!["C", "A", "B"]);
    }

    /// Serves one group and refuses every write
    struct ReadOnlyStore;

    impl GroupStore for ReadOnlyStore {
        fn load(&self) -> SplitResult<Option<Vec<Group>>> {
            let mut trip = Group::new("Trip");
            for name in ["A", "B"] {
                trip.add_member(Member::new(name)).unwrap();
            }
            Ok(Some(vec![trip]))
        }

        fn save(&self, _groups: &[Group]) -> SplitResult<()> {
            Err(SplitError::Storage("disk full".into()))
        }
    }

    #[test]
    fn test_failed_save_keeps_group_unchanged() {
        let storage = Storage::with_store(Box::new(ReadOnlyStore));
        storage.load_all().unwrap();
        let service = ExpenseService::new(&storage);

        let err = service.add("Trip", new_expense("A", 1000, &[])).unwrap_err();
        assert!(matches!(err, SplitError::Storage(_)));

        assert!(service.list("Trip").unwrap().is_empty());
        assert!(service.balances("Trip").unwrap().is_settled());
    }
}
