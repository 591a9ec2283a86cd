//! Ledger store
//!
//! Owns the in-memory transaction sequence and keeps durable storage in
//! step with it. Every mutation updates memory and then saves the whole
//! sequence before returning.
//!
//! Order is newest first: an added transaction always goes to index 0 and
//! nothing else ever reorders the sequence.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{NewTransaction, Transaction, TransactionId, TransactionKind};
use crate::reports::{CategoryBreakdown, Totals};
use crate::storage::{KeyValueStore, TransactionRepository, QUARANTINE_KEY};

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Filter by kind
    pub kind: Option<TransactionKind>,
    /// Filter by category (case-insensitive)
    pub category: Option<String>,
    /// Earliest date, inclusive
    pub start_date: Option<NaiveDate>,
    /// Latest date, inclusive
    pub end_date: Option<NaiveDate>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn since(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    pub fn until(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, txn: &Transaction) -> bool {
        self.kind.map_or(true, |kind| txn.kind == kind)
            && self
                .category
                .as_deref()
                .map_or(true, |c| txn.category.eq_ignore_ascii_case(c.trim()))
            && self.start_date.map_or(true, |start| txn.date >= start)
            && self.end_date.map_or(true, |end| txn.date <= end)
    }
}

/// The transaction ledger
pub struct Ledger<S> {
    repository: TransactionRepository<S>,
    transactions: Vec<Transaction>,
    persistence_warning: Option<FinanceError>,
}

impl<S: KeyValueStore> Ledger<S> {
    /// Load the ledger from `store`, recovering from a corrupt blob
    ///
    /// A missing blob gives an empty ledger. A blob that can't be decoded is
    /// copied to the quarantine key and the ledger starts empty; the next
    /// mutation then overwrites it.
    ///
    /// # Errors
    ///
    /// Only if the store itself can't be read.
    pub fn initialize(store: S) -> FinanceResult<Self> {
        let mut repository = TransactionRepository::new(store);

        let transactions = match repository.load() {
            Ok(transactions) => transactions,
            Err(err) if err.is_corrupt_state() => {
                warn!(error = %err, "stored ledger is unreadable, starting empty");
                match repository.quarantine() {
                    Ok(true) => warn!(key = QUARANTINE_KEY, "unreadable ledger copied aside"),
                    Ok(false) => {}
                    Err(e) => warn!(error = %e, "could not copy unreadable ledger aside"),
                }
                Vec::new()
            }
            Err(err) => return Err(err),
        };

        info!(count = transactions.len(), "ledger initialized");

        Ok(Self {
            repository,
            transactions,
            persistence_warning: None,
        })
    }

    /// Load the ledger from `store`, failing on a corrupt blob
    pub fn initialize_strict(store: S) -> FinanceResult<Self> {
        let repository = TransactionRepository::new(store);
        let transactions = repository.load()?;

        Ok(Self {
            repository,
            transactions,
            persistence_warning: None,
        })
    }

    /// Record a new transaction at the head of the ledger
    pub fn add_transaction(&mut self, input: NewTransaction, kind: TransactionKind) -> &Transaction {
        let txn = Transaction::new(input, kind);
        info!(id = %txn.id, kind = kind.as_str(), amount = %txn.amount, "adding transaction");

        self.transactions.insert(0, txn);
        self.persist();

        &self.transactions[0]
    }

    /// Record income
    pub fn add_income(&mut self, input: NewTransaction) -> &Transaction {
        self.add_transaction(input, TransactionKind::Income)
    }

    /// Record an expense
    pub fn add_expense(&mut self, input: NewTransaction) -> &Transaction {
        self.add_transaction(input, TransactionKind::Expense)
    }

    /// Remove the transaction with `id`
    ///
    /// Deleting an id that isn't in the ledger changes nothing and is not an
    /// error. The sequence is saved either way.
    pub fn delete_transaction(&mut self, id: TransactionId) -> Option<Transaction> {
        let index = self.transactions.iter().position(|t| t.id == id);
        let removed = index.map(|index| self.transactions.remove(index));

        match &removed {
            Some(txn) => info!(id = %txn.id, "deleted transaction"),
            None => debug!(id = %id, "no transaction to delete"),
        }

        self.persist();
        removed
    }

    /// All transactions, newest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Transactions matching a filter, in ledger order
    pub fn list(&self, filter: &TransactionFilter) -> Vec<&Transaction> {
        let matching = self.transactions.iter().filter(|t| filter.matches(t));
        match filter.limit {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        }
    }

    /// Income, expenses and balance over the whole ledger
    pub fn totals(&self) -> Totals {
        Totals::compute(&self.transactions)
    }

    /// Per-category totals for one kind
    pub fn breakdown(&self, kind: TransactionKind) -> CategoryBreakdown {
        CategoryBreakdown::generate(&self.transactions, kind)
    }

    /// Turn user input into a transaction id
    ///
    /// A full UUID (optionally `txn-` prefixed) is returned as-is, whether or
    /// not it is in the ledger. Anything else is treated as a prefix that must
    /// match exactly one transaction.
    pub fn resolve_id(&self, identifier: &str) -> FinanceResult<TransactionId> {
        if let Ok(id) = TransactionId::parse(identifier) {
            return Ok(id);
        }

        let matches: Vec<TransactionId> = self
            .transactions
            .iter()
            .filter(|t| t.id.matches_prefix(identifier))
            .map(|t| t.id)
            .collect();

        match matches.as_slice() {
            [] => Err(FinanceError::transaction_not_found(identifier.trim())),
            [id] => Ok(*id),
            _ => Err(FinanceError::AmbiguousId {
                identifier: identifier.trim().to_string(),
                matches: matches.len(),
            }),
        }
    }

    /// The error from the most recent failed save, if the last save failed
    pub fn persistence_warning(&self) -> Option<&FinanceError> {
        self.persistence_warning.as_ref()
    }

    /// Take the pending persistence warning, clearing it
    pub fn take_persistence_warning(&mut self) -> Option<FinanceError> {
        self.persistence_warning.take()
    }

    /// Get the underlying store
    pub fn store(&self) -> &S {
        self.repository.store()
    }

    fn persist(&mut self) {
        match self.repository.save(&self.transactions) {
            Ok(()) => self.persistence_warning = None,
            Err(err) => {
                warn!(error = %err, "failed to save ledger, in-memory state kept");
                self.persistence_warning = Some(err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::{MemoryStore, TRANSACTIONS_KEY};
    use std::collections::HashSet;

    /// Store whose reads or writes can be made to fail
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryStore,
        fail_reads: bool,
        fail_writes: bool,
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, key: &str) -> FinanceResult<Option<String>> {
            if self.fail_reads {
                return Err(FinanceError::Storage("read refused".into()));
            }
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> FinanceResult<()> {
            if self.fail_writes {
                return Err(FinanceError::Storage("quota exceeded".into()));
            }
            self.inner.set(key, value)
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn input(cents: i64, category: &str, on: NaiveDate, description: &str) -> NewTransaction {
        NewTransaction::new(Money::from_cents(cents), category, on, description)
    }

    fn empty_ledger() -> Ledger<MemoryStore> {
        Ledger::initialize(MemoryStore::new()).unwrap()
    }

    fn reload(ledger: &Ledger<MemoryStore>) -> Ledger<MemoryStore> {
        Ledger::initialize_strict(ledger.store().clone()).unwrap()
    }

    #[test]
    fn test_initialize_empty() {
        let ledger = empty_ledger();
        assert!(ledger.is_empty());
        assert_eq!(ledger.totals(), Totals::default());
        assert!(ledger.store().is_empty());
    }

    #[test]
    fn test_scenarios() {
        let mut ledger = empty_ledger();

        // A: one expense
        let lunch = ledger
            .add_expense(input(2550, "Food", date(2024, 1, 10), "Lunch"))
            .id;
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.totals().expenses, Money::from_cents(2550));
        assert_eq!(ledger.totals().balance, Money::from_cents(-2550));

        // B: income goes to the head
        let salary = ledger
            .add_income(input(100000, "Salary", date(2024, 1, 1), ""))
            .id;
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.transactions()[0].id, salary);
        assert_eq!(ledger.totals().income, Money::from_cents(100000));
        assert_eq!(ledger.totals().balance, Money::from_cents(97450));

        // C: delete the expense
        let removed = ledger.delete_transaction(lunch).unwrap();
        assert_eq!(removed.category, "Food");
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.totals().expenses, Money::zero());
        assert_eq!(ledger.totals().balance, Money::from_cents(100000));

        // D: deleting an unknown id changes nothing
        let before = ledger.totals();
        assert!(ledger.delete_transaction(TransactionId::new()).is_none());
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.totals(), before);
    }

    #[test]
    fn test_newest_first_regardless_of_kind() {
        let mut ledger = empty_ledger();
        let mut added = Vec::new();

        for i in 0..20 {
            let kind = if i % 3 == 0 {
                TransactionKind::Income
            } else {
                TransactionKind::Expense
            };
            // Dates go backwards so date order and insertion order disagree
            let on = date(2024, 12, 28 - i as u32);
            let id = ledger.add_transaction(input(100 + i, "Other", on, ""), kind).id;
            added.push(id);
            assert_eq!(ledger.transactions()[0].id, id);
        }

        let listed: Vec<_> = ledger.transactions().iter().map(|t| t.id).collect();
        added.reverse();
        assert_eq!(listed, added);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ledger = empty_ledger();
        for i in 0..200 {
            ledger.add_expense(input(i, "Food", date(2024, 5, 1), ""));
        }

        let ids: HashSet<_> = ledger.transactions().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn test_totals_match_partitions() {
        let mut ledger = empty_ledger();
        for i in 0..50i64 {
            ledger.add_income(input(i * 37 + 1, "Salary", date(2024, 6, 1), ""));
            ledger.add_expense(input(i * 13 + 7, "Food", date(2024, 6, 2), ""));
        }

        let totals = ledger.totals();
        let sum_of = |kind: TransactionKind| -> Money {
            ledger
                .transactions()
                .iter()
                .filter(|t| t.kind == kind)
                .map(|t| t.amount)
                .sum()
        };

        assert_eq!(totals.income, sum_of(TransactionKind::Income));
        assert_eq!(totals.expenses, sum_of(TransactionKind::Expense));
        assert_eq!(totals.income - totals.expenses, totals.balance);
    }

    #[test]
    fn test_largest_amounts_total_exactly() {
        use crate::models::MAX_AMOUNT_CENTS;
        use crate::services::TransactionForm;

        let largest = TransactionForm::new("10000000000", "Salary", "2024-01-01", "")
            .validate()
            .unwrap();
        let mut ledger = empty_ledger();
        for _ in 0..100 {
            ledger.add_income(largest.clone());
        }
        ledger.add_expense(largest.clone());

        let totals = ledger.totals();
        assert_eq!(totals.income.cents(), MAX_AMOUNT_CENTS * 100);
        assert_eq!(totals.expenses.cents(), MAX_AMOUNT_CENTS);
        assert_eq!(totals.balance.cents(), MAX_AMOUNT_CENTS * 99);

        let err = TransactionForm::new("90000000000000000", "Salary", "2024-01-01", "")
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            FinanceError::InvalidAmount(crate::models::MoneyParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let mut ledger = empty_ledger();

        let id = ledger
            .add_expense(input(2550, "Food", date(2024, 1, 10), "Lunch"))
            .id;
        assert_eq!(reload(&ledger).transactions(), ledger.transactions());

        ledger.add_income(input(100000, "Salary", date(2024, 1, 1), ""));
        assert_eq!(reload(&ledger).transactions(), ledger.transactions());

        ledger.delete_transaction(id);
        let reloaded = reload(&ledger);
        assert_eq!(reloaded.transactions(), ledger.transactions());
        assert_eq!(reloaded.totals(), ledger.totals());
    }

    #[test]
    fn test_missing_delete_leaves_store_unchanged() {
        let mut ledger = empty_ledger();
        ledger.add_expense(input(500, "Food", date(2024, 1, 10), ""));
        let before = ledger.store().get(TRANSACTIONS_KEY).unwrap();

        ledger.delete_transaction(TransactionId::new());

        assert_eq!(ledger.store().get(TRANSACTIONS_KEY).unwrap(), before);
    }

    #[test]
    fn test_corrupt_blob_resets_and_quarantines() {
        let mut store = MemoryStore::new();
        store.set(TRANSACTIONS_KEY, "{not json").unwrap();

        let ledger = Ledger::initialize(store).unwrap();

        assert!(ledger.is_empty());
        assert_eq!(
            ledger.store().get(QUARANTINE_KEY).unwrap().as_deref(),
            Some("{not json")
        );
    }

    #[test]
    fn test_sub_cent_amount_is_rounded_on_load() {
        let mut store = MemoryStore::new();
        store
            .set(
                TRANSACTIONS_KEY,
                r#"[{"id":"6f1c2a3b-4d5e-4f60-8a7b-9c0d1e2f3a4b","amount":10.999,
                    "category":"Food","date":"2024-01-10","description":"","type":"expense"}]"#,
            )
            .unwrap();

        let ledger = Ledger::initialize(store).unwrap();

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.totals().expenses.cents(), 1100);
        assert_eq!(ledger.store().get(QUARANTINE_KEY).unwrap(), None);
    }

    #[test]
    fn test_strict_initialize_reports_corruption() {
        let mut store = MemoryStore::new();
        store.set(TRANSACTIONS_KEY, "{not json").unwrap();

        let err = Ledger::initialize_strict(store).err().unwrap();
        assert!(err.is_corrupt_state());
    }

    #[test]
    fn test_unreadable_store_is_an_error() {
        let store = FlakyStore {
            fail_reads: true,
            ..FlakyStore::default()
        };
        let err = Ledger::initialize(store).err().unwrap();
        assert!(matches!(err, FinanceError::Storage(_)));
    }

    #[test]
    fn test_write_failure_keeps_memory_authoritative() {
        let mut ledger = Ledger::initialize(FlakyStore::default()).unwrap();
        ledger.add_expense(input(100, "Food", date(2024, 1, 1), ""));
        assert!(ledger.persistence_warning().is_none());

        ledger.repository_store_mut().fail_writes = true;
        ledger.add_expense(input(200, "Food", date(2024, 1, 2), ""));

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.totals().expenses, Money::from_cents(300));
        assert!(matches!(
            ledger.persistence_warning(),
            Some(FinanceError::Storage(_))
        ));

        // Recovers on the next successful save
        ledger.repository_store_mut().fail_writes = false;
        ledger.add_income(input(1000, "Gift", date(2024, 1, 3), ""));
        assert!(ledger.take_persistence_warning().is_none());

        let reloaded = Ledger::initialize_strict(MemoryStore::clone(&ledger.store().inner)).unwrap();
        assert_eq!(reloaded.len(), 3);
    }

    #[test]
    fn test_list_with_filter() {
        let mut ledger = empty_ledger();
        ledger.add_income(input(100000, "Salary", date(2024, 1, 1), ""));
        ledger.add_expense(input(2550, "Food", date(2024, 1, 10), ""));
        ledger.add_expense(input(1200, "Transport", date(2024, 2, 3), ""));
        ledger.add_expense(input(800, "food", date(2024, 2, 5), ""));

        let food = ledger.list(&TransactionFilter::new().category("Food"));
        assert_eq!(food.len(), 2);

        let expenses = ledger.list(&TransactionFilter::new().kind(TransactionKind::Expense));
        assert_eq!(expenses.len(), 3);
        assert_eq!(expenses[0].amount.cents(), 800);

        let february = ledger.list(
            &TransactionFilter::new()
                .since(date(2024, 2, 1))
                .until(date(2024, 2, 28)),
        );
        assert_eq!(february.len(), 2);

        let limited = ledger.list(&TransactionFilter::new().limit(1));
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].category, "food");
    }

    #[test]
    fn test_resolve_id() {
        let mut ledger = empty_ledger();
        let id = ledger.add_expense(input(100, "Food", date(2024, 1, 1), "")).id;

        assert_eq!(ledger.resolve_id(&id.as_uuid().to_string()).unwrap(), id);
        assert_eq!(ledger.resolve_id(&id.to_string()).unwrap(), id);

        let unknown = TransactionId::new();
        assert_eq!(
            ledger.resolve_id(&unknown.as_uuid().to_string()).unwrap(),
            unknown
        );

        assert!(ledger.resolve_id("zzzz").unwrap_err().is_not_found());
    }

    #[test]
    fn test_resolve_ambiguous_prefix() {
        let mut ledger = empty_ledger();
        for _ in 0..40 {
            ledger.add_expense(input(100, "Food", date(2024, 1, 1), ""));
        }

        // With 40 random ids, some single hex digit is shared by at least 3
        let first_digits: Vec<char> = ledger
            .transactions()
            .iter()
            .map(|t| t.id.as_uuid().simple().to_string().chars().next().unwrap())
            .collect();
        let shared = first_digits
            .iter()
            .find(|c| first_digits.iter().filter(|d| d == c).count() > 1)
            .unwrap();

        let err = ledger.resolve_id(&shared.to_string()).unwrap_err();
        assert!(matches!(err, FinanceError::AmbiguousId { .. }));
    }

    #[test]
    fn test_breakdown() {
        let mut ledger = empty_ledger();
        ledger.add_expense(input(2550, "Food", date(2024, 1, 10), ""));
        ledger.add_expense(input(1000, "Food", date(2024, 1, 11), ""));

        let breakdown = ledger.breakdown(TransactionKind::Expense);
        assert_eq!(breakdown.categories.len(), 1);
        assert_eq!(breakdown.total.cents(), 3550);
    }

    impl Ledger<FlakyStore> {
        fn repository_store_mut(&mut self) -> &mut FlakyStore {
            self.repository.store_mut()
        }
    }
}
