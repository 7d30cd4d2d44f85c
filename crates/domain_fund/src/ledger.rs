//! The transaction ledger store
//!
//! Transactions are priced against the fund catalog at write time. The fund
//! is looked up and priced in one call while the caller holds the catalog,
//! so the figures always match a single snapshot of the fund.

use std::cmp::Ordering;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::info;

use core_kernel::{BlobStore, TransactionId};

use crate::error::FundError;
use crate::fund_book::FundBook;
use crate::search::TransactionCriteria;
use crate::seed::seed_transactions;
use crate::store::{CollectionStore, Entity, LoadOutcome, PersistOutcome};
use crate::transaction::{Transaction, TransactionRequest};
use crate::valuation::{price_request, Valuation};

/// Storage slot holding the ledger
pub const TRANSACTIONS_SLOT: &str = "mfms_transactions";

impl Entity for Transaction {
    type Key = TransactionId;

    fn key(&self) -> &TransactionId {
        &self.id
    }

    /// Most recent first
    fn listing_order(a: &Self, b: &Self) -> Ordering {
        b.timestamp.cmp(&a.timestamp)
    }
}

/// Ledger of buy and sell transactions keyed by id
#[derive(Debug)]
pub struct Ledger {
    store: CollectionStore<Transaction>,
}

impl Ledger {
    /// Opens the ledger, starting empty when storage has nothing usable
    pub fn open(storage: Arc<dyn BlobStore>) -> Self {
        Self {
            store: CollectionStore::open(storage, TRANSACTIONS_SLOT, seed_transactions()),
        }
    }

    pub fn load_outcome(&self) -> &LoadOutcome {
        self.store.load_outcome()
    }

    /// All transactions, most recent first
    pub fn list(&self) -> Vec<Transaction> {
        self.store.list()
    }

    /// Transactions matching the criteria, most recent first
    pub fn search(&self, criteria: &TransactionCriteria) -> Vec<Transaction> {
        criteria.apply(self.store.list())
    }

    pub fn find(&self, id: &TransactionId) -> Option<&Transaction> {
        self.store.find(id)
    }

    /// Resolves the fund and prices the request, refusing non-positive
    /// quantities
    fn value(funds: &FundBook, request: &TransactionRequest) -> Result<Valuation, FundError> {
        let fund = funds.resolve(&request.fund_code)?;
        let valuation = price_request(fund, request)?;
        if valuation.driving_quantity(request.transaction_type) <= Decimal::ZERO {
            return Err(FundError::NonPositiveQuantity(request.transaction_type));
        }
        Ok(valuation)
    }

    /// Records a new transaction stamped with the current time
    ///
    /// # Errors
    ///
    /// - `FundError::FundNotFound` if the fund code is not in the catalog
    /// - `FundError::MissingQuantity` if the driving quantity is absent
    /// - `FundError::NonPositiveQuantity` if it is zero or negative
    ///
    /// The ledger is unchanged on error.
    pub fn add_transaction(
        &mut self,
        funds: &FundBook,
        request: &TransactionRequest,
    ) -> Result<Transaction, FundError> {
        self.add_transaction_at(funds, request, Utc::now())
    }

    /// Records a new transaction with an explicit timestamp
    pub fn add_transaction_at(
        &mut self,
        funds: &FundBook,
        request: &TransactionRequest,
        timestamp: DateTime<Utc>,
    ) -> Result<Transaction, FundError> {
        let valuation = Self::value(funds, request)?;
        let transaction = Transaction::new(
            request.fund_code.clone(),
            request.transaction_type,
            valuation,
            timestamp,
        );

        info!(
            id = %transaction.id,
            fund_code = %transaction.fund_code,
            transaction_type = %transaction.transaction_type,
            net = %transaction.net,
            "Recorded transaction"
        );

        self.store.upsert(transaction.clone());
        Ok(transaction)
    }

    /// Re-prices an existing transaction against the current catalog
    ///
    /// The id and timestamp are kept; fund, direction and figures are
    /// replaced.
    ///
    /// # Errors
    ///
    /// Returns `FundError::TransactionNotFound` for an unknown id, plus the
    /// errors of [`Ledger::add_transaction`]
    pub fn update(
        &mut self,
        funds: &FundBook,
        id: &TransactionId,
        request: &TransactionRequest,
    ) -> Result<Transaction, FundError> {
        let mut transaction = self
            .store
            .find(id)
            .cloned()
            .ok_or_else(|| FundError::TransactionNotFound(id.clone()))?;

        let valuation = Self::value(funds, request)?;
        transaction.reprice(request.fund_code.clone(), request.transaction_type, valuation);

        info!(id = %transaction.id, net = %transaction.net, "Updated transaction");

        self.store.upsert(transaction.clone());
        Ok(transaction)
    }

    /// Removes a transaction; unknown ids are ignored
    pub fn remove(&mut self, id: &TransactionId) -> PersistOutcome {
        info!(id = %id, "Removing transaction");
        self.store.delete(id)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
