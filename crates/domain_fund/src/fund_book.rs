//! The fund catalog store

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::info;

use core_kernel::BlobStore;

use crate::error::FundError;
use crate::fund::Fund;
use crate::search::FundCriteria;
use crate::seed::seed_funds;
use crate::store::{CollectionStore, Entity, LoadOutcome, PersistOutcome};

/// Storage slot holding the fund catalog
pub const FUNDS_SLOT: &str = "mfms_funds";

impl Entity for Fund {
    type Key = String;

    fn key(&self) -> &String {
        &self.fund_code
    }

    /// Newest inception date first
    fn listing_order(a: &Self, b: &Self) -> Ordering {
        b.ipo_date.cmp(&a.ipo_date)
    }
}

/// Catalog of funds keyed by fund code
#[derive(Debug)]
pub struct FundBook {
    store: CollectionStore<Fund>,
}

impl FundBook {
    /// Opens the catalog, seeding it when storage has nothing usable
    pub fn open(storage: Arc<dyn BlobStore>) -> Self {
        Self::open_with_seed(storage, seed_funds())
    }

    /// Opens the catalog with a custom seed
    pub fn open_with_seed(storage: Arc<dyn BlobStore>, seed: Vec<Fund>) -> Self {
        Self {
            store: CollectionStore::open(storage, FUNDS_SLOT, seed),
        }
    }

    pub fn load_outcome(&self) -> &LoadOutcome {
        self.store.load_outcome()
    }

    /// All funds, newest inception date first
    pub fn list(&self) -> Vec<Fund> {
        self.store.list()
    }

    /// Funds matching the criteria, newest inception date first
    pub fn search(&self, criteria: &FundCriteria) -> Vec<Fund> {
        criteria.apply(self.store.list())
    }

    /// Finds a fund by code
    pub fn find(&self, fund_code: &str) -> Option<&Fund> {
        self.store.find(fund_code)
    }

    /// Resolves a fund by code
    ///
    /// # Errors
    ///
    /// Returns `FundError::FundNotFound` if no fund has that code
    pub fn resolve(&self, fund_code: &str) -> Result<&Fund, FundError> {
        self.find(fund_code)
            .ok_or_else(|| FundError::FundNotFound(fund_code.to_string()))
    }

    /// Validates, then inserts or replaces a fund
    ///
    /// # Errors
    ///
    /// Returns `FundError::InvalidFund` and leaves the catalog untouched if
    /// the fund breaks an invariant
    pub fn save(&mut self, fund: Fund) -> Result<PersistOutcome, FundError> {
        fund.validate()?;
        info!(fund_code = %fund.fund_code, nav = %fund.nav, "Saving fund");
        Ok(self.store.upsert(fund))
    }

    /// Removes a fund by code; unknown codes are ignored
    ///
    /// Transactions that reference the fund are left as they are.
    pub fn delete(&mut self, fund_code: &str) -> PersistOutcome {
        info!(fund_code = %fund_code, "Deleting fund");
        self.store.delete(fund_code)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
