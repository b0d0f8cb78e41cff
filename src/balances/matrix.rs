//! Pairwise balance matrix
//!
//! Cells are indexed by (debtor, creditor) in member order. The diagonal is
//! never read or written; lookups on it, or on names outside the matrix,
//! return zero.

use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::models::Member;

/// A single directed debt: `debtor` owes `creditor` `amount`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Debt<'a> {
    pub debtor: &'a Member,
    pub creditor: &'a Member,
    pub amount: Decimal,
}

/// Amount each member owes each other member
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceMatrix {
    members: Vec<Member>,
    index: HashMap<Member, usize>,
    /// Row-major `n * n` grid, row = debtor, column = creditor
    cells: Vec<Decimal>,
}

impl BalanceMatrix {
    /// Create an all-zero matrix over `members`; repeated names are kept once
    pub fn new(members: &[Member]) -> Self {
        let mut unique = Vec::with_capacity(members.len());
        let mut index = HashMap::with_capacity(members.len());

        for member in members {
            if !index.contains_key(member) {
                index.insert(member.clone(), unique.len());
                unique.push(member.clone());
            }
        }

        let n = unique.len();
        Self {
            members: unique,
            index,
            cells: vec![Decimal::ZERO; n * n],
        }
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub(crate) fn position(&self, member: &str) -> Option<usize> {
        self.index.get(member).copied()
    }

    fn offset(&self, debtor: usize, creditor: usize) -> usize {
        debtor * self.members.len() + creditor
    }

    /// Amount `debtor` owes `creditor` (zero when unknown or identical)
    pub fn get(&self, debtor: &str, creditor: &str) -> Decimal {
        match (self.position(debtor), self.position(creditor)) {
            (Some(d), Some(c)) if d != c => self.cells[self.offset(d, c)],
            _ => Decimal::ZERO,
        }
    }

    /// Overwrite a single cell; returns `false` for unknown names or the diagonal
    pub fn set(&mut self, debtor: &str, creditor: &str, amount: Decimal) -> bool {
        match (self.position(debtor), self.position(creditor)) {
            (Some(d), Some(c)) if d != c => {
                let offset = self.offset(d, c);
                self.cells[offset] = amount;
                true
            }
            _ => false,
        }
    }

    /// Record that `debtor` owes `creditor` one more `share`
    ///
    /// The creditor's row receives the mirror entry so that every row keeps
    /// the signed position of that member against each other member.
    pub(crate) fn record_share(&mut self, debtor: usize, creditor: usize, share: Decimal) {
        debug_assert_ne!(debtor, creditor);
        let owed = self.offset(debtor, creditor);
        let mirror = self.offset(creditor, debtor);
        self.cells[owed] += share;
        self.cells[mirror] -= share;
    }

    /// Collapse every pair of members to a single non-negative direction
    ///
    /// When both directions hold a positive amount they are netted against
    /// each other. Negative cells are mirrors of a debt already held as a
    /// positive amount in the opposite cell and are cleared. Applying this
    /// twice is the same as applying it once.
    pub fn simplify(&mut self) {
        let n = self.members.len();
        for a in 0..n {
            for b in (a + 1)..n {
                let ab = self.offset(a, b);
                let ba = self.offset(b, a);
                let (forward, backward) = (self.cells[ab], self.cells[ba]);

                let (forward, backward) =
                    if forward > Decimal::ZERO && backward > Decimal::ZERO {
                        let diff = forward - backward;
                        if diff > Decimal::ZERO {
                            (diff, Decimal::ZERO)
                        } else {
                            (Decimal::ZERO, -diff)
                        }
                    } else {
                        (forward.max(Decimal::ZERO), backward.max(Decimal::ZERO))
                    };

                self.cells[ab] = forward;
                self.cells[ba] = backward;
            }
        }
    }

    /// Every ordered pair of distinct members with its cell, in member order
    pub fn entries(&self) -> impl Iterator<Item = Debt<'_>> + '_ {
        let n = self.members.len();
        (0..n).flat_map(move |d| {
            (0..n).filter(move |&c| c != d).map(move |c| Debt {
                debtor: &self.members[d],
                creditor: &self.members[c],
                amount: self.cells[d * n + c],
            })
        })
    }

    /// Strictly positive cells, in member order
    pub fn debts(&self) -> impl Iterator<Item = Debt<'_>> + '_ {
        self.entries().filter(|debt| debt.amount > Decimal::ZERO)
    }

    /// Members `member` owes money to, with amounts
    pub fn owes(&self, member: &str) -> Vec<(&Member, Decimal)> {
        self.debts()
            .filter(|debt| debt.debtor.as_str() == member)
            .map(|debt| (debt.creditor, debt.amount))
            .collect()
    }

    /// Members who owe `member` money, with amounts
    pub fn owed_by(&self, member: &str) -> Vec<(&Member, Decimal)> {
        self.debts()
            .filter(|debt| debt.creditor.as_str() == member)
            .map(|debt| (debt.debtor, debt.amount))
            .collect()
    }

    /// Sum of all positive cells
    pub fn total_outstanding(&self) -> Decimal {
        self.debts().map(|debt| debt.amount).sum()
    }

    /// True when nobody owes anybody anything
    pub fn is_settled(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_zero())
    }
}
