//! Comprehensive tests for domain_fund

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{BlobStore, TransactionId};
use domain_fund::{
    price, FallbackReason, Fund, FundBook, FundCriteria, FundError, Ledger, LoadOutcome,
    PersistOutcome, Transaction, TransactionCriteria, TransactionRequest, TransactionType,
    FUNDS_SLOT, TRANSACTIONS_SLOT,
};
use infra_store::{MemoryBlobStore, UnavailableBlobStore};
use test_utils::{
    assert_fee_and_net, assert_funds_newest_first, assert_max_scale,
    assert_transactions_newest_first, FailingBlobStore, FundFixtures, RecordingBlobStore,
    TemporalFixtures, TestFundBuilder, TransactionRequestBuilder,
};

fn memory() -> Arc<dyn BlobStore> {
    Arc::new(MemoryBlobStore::new())
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    TemporalFixtures::date(y, m, d)
}

fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

// ============================================================================
// Valuation Scenarios
// ============================================================================

mod valuation_scenarios {
    use super::*;

    #[test]
    fn test_buy_k_cash() {
        let funds = FundBook::open(memory());
        let mut ledger = Ledger::open(memory());

        let tx = ledger
            .add_transaction(&funds, &TransactionRequest::buy("K-CASH", dec!(1000)))
            .unwrap();

        assert_eq!(tx.fee, dec!(0.00));
        assert_eq!(tx.net, dec!(1000.00));
        assert_eq!(tx.units, dec!(66.1227));
        assert_eq!(tx.nav, dec!(15.1234));
        assert_eq!(tx.amount, dec!(1000));
        assert_max_scale(tx.units, 4);
    }

    #[test]
    fn test_buy_scb_banking() {
        let funds = FundBook::open(memory());
        let mut ledger = Ledger::open(memory());

        let tx = ledger
            .add_transaction(&funds, &TransactionRequest::buy("SCBBANKING", dec!(5000)))
            .unwrap();

        assert_eq!(tx.fee, dec!(50.00));
        assert_eq!(tx.net, dec!(4950.00));
        assert_eq!(tx.units, dec!(482.9268));
    }

    #[test]
    fn test_fixture_fund_pricing() {
        let sell = price(&FundFixtures::scb_banking(), TransactionType::Sell, dec!(100)).unwrap();
        assert_fee_and_net(&sell, dec!(5.13), dec!(1019.88));

        let buy = price(&FundFixtures::k_cash(), TransactionType::Buy, dec!(1000)).unwrap();
        assert_fee_and_net(&buy, dec!(0), dec!(1000));
    }

    #[test]
    fn test_fees_round_independently() {
        let fund = TestFundBuilder::new()
            .with_nav(dec!(3))
            .with_fees(dec!(1.5), dec!(0))
            .build();

        let v = price(&fund, TransactionType::Buy, dec!(0.3)).unwrap();

        assert_fee_and_net(&v, dec!(0.00), dec!(0.30));
        assert_eq!(v.units, dec!(0.0985));
    }

    #[test]
    fn test_sell_scb_banking() {
        let funds = FundBook::open(memory());
        let mut ledger = Ledger::open(memory());

        let request = TransactionRequestBuilder::sell("SCBBANKING")
            .units(dec!(100))
            .build();
        let tx = ledger.add_transaction(&funds, &request).unwrap();

        assert_eq!(tx.amount, dec!(1025.00));
        assert_eq!(tx.fee, dec!(5.13));
        assert_eq!(tx.net, dec!(1019.88));
        assert_eq!(tx.units, dec!(100));
    }

    #[test]
    fn test_nav_is_snapshot_at_write_time() {
        let mut funds = FundBook::open(memory());
        let mut ledger = Ledger::open(memory());

        let tx = ledger
            .add_transaction(&funds, &TransactionRequest::buy("SCBBANKING", dec!(1000)))
            .unwrap();

        let repriced = funds.find("SCBBANKING").unwrap().clone().with_nav(dec!(20));
        funds.save(repriced).unwrap();

        assert_eq!(ledger.find(&tx.id).unwrap().nav, dec!(10.25));
    }
}

// ============================================================================
// Ledger Error Tests
// ============================================================================

mod ledger_error_tests {
    use super::*;

    #[test]
    fn test_unknown_fund_leaves_ledger_unchanged() {
        let funds = FundBook::open(memory());
        let mut ledger = Ledger::open(memory());

        let result = ledger.add_transaction(&funds, &TransactionRequest::buy("NOPE", dec!(10)));

        assert_eq!(result, Err(FundError::FundNotFound("NOPE".to_string())));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_missing_quantity() {
        let funds = FundBook::open(memory());
        let mut ledger = Ledger::open(memory());
        let request = TransactionRequest {
            fund_code: "K-CASH".into(),
            transaction_type: TransactionType::Sell,
            amount: Some(dec!(100)),
            units: None,
        };

        let result = ledger.add_transaction(&funds, &request);

        assert_eq!(result, Err(FundError::MissingQuantity(TransactionType::Sell)));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_non_positive_quantity_refused() {
        let funds = FundBook::open(memory());
        let mut ledger = Ledger::open(memory());

        let zero_buy = ledger.add_transaction(&funds, &TransactionRequest::buy("K-CASH", Decimal::ZERO));
        let negative_sell =
            ledger.add_transaction(&funds, &TransactionRequest::sell("K-CASH", dec!(-1)));

        assert_eq!(zero_buy, Err(FundError::NonPositiveQuantity(TransactionType::Buy)));
        assert_eq!(
            negative_sell,
            Err(FundError::NonPositiveQuantity(TransactionType::Sell))
        );
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_oversized_quantity_refused() {
        let funds = FundBook::open(memory());
        let mut ledger = Ledger::open(memory());
        let units = Decimal::from_str_exact("10000000000000000000000000000").unwrap();

        let result = ledger.add_transaction(&funds, &TransactionRequest::sell("SCBBANKING", units));

        assert_eq!(result, Err(FundError::QuantityTooLarge(TransactionType::Sell)));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_update_unknown_id() {
        let funds = FundBook::open(memory());
        let mut ledger = Ledger::open(memory());
        let id = TransactionId::new();

        let result = ledger.update(&funds, &id, &TransactionRequest::buy("K-CASH", dec!(1)));

        assert_eq!(result, Err(FundError::TransactionNotFound(id)));
    }
}

// ============================================================================
// Ledger Lifecycle Tests
// ============================================================================

mod ledger_lifecycle_tests {
    use super::*;

    #[test]
    fn test_update_keeps_id_and_timestamp() {
        let funds = FundBook::open(memory());
        let mut ledger = Ledger::open(memory());
        let created = at(2024, 6, 1, 9);

        let tx = ledger
            .add_transaction_at(&funds, &TransactionRequest::buy("K-CASH", dec!(1000)), created)
            .unwrap();
        let updated = ledger
            .update(&funds, &tx.id, &TransactionRequest::sell("SCBBANKING", dec!(100)))
            .unwrap();

        assert_eq!(updated.id, tx.id);
        assert_eq!(updated.timestamp, created);
        assert_eq!(updated.fund_code, "SCBBANKING");
        assert_eq!(updated.transaction_type, TransactionType::Sell);
        assert_eq!(updated.net, dec!(1019.88));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_update_reprices_at_current_nav() {
        let mut funds = FundBook::open(memory());
        let mut ledger = Ledger::open(memory());
        let request = TransactionRequestBuilder::buy("SCBBANKING")
            .amount(dec!(5000))
            .build();
        let tx = ledger.add_transaction(&funds, &request).unwrap();
        assert_eq!(tx.nav, dec!(10.25));

        funds
            .save(FundFixtures::scb_banking().with_nav(dec!(11)))
            .unwrap();
        let updated = ledger.update(&funds, &tx.id, &request).unwrap();

        assert_eq!(updated.id, tx.id);
        assert_eq!(updated.timestamp, tx.timestamp);
        assert_eq!(updated.nav, dec!(11));
        assert_eq!(updated.fee, dec!(50.00));
        assert_eq!(updated.units, dec!(450.0000));
        assert_eq!(ledger.find(&tx.id), Some(&updated));
    }

    #[test]
    fn test_update_failure_keeps_previous_figures() {
        let funds = FundBook::open(memory());
        let mut ledger = Ledger::open(memory());
        let tx = ledger
            .add_transaction(&funds, &TransactionRequest::buy("K-CASH", dec!(1000)))
            .unwrap();

        let result = ledger.update(&funds, &tx.id, &TransactionRequest::buy("GONE", dec!(5)));

        assert!(result.is_err());
        assert_eq!(ledger.find(&tx.id), Some(&tx));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let funds = FundBook::open(memory());
        let mut ledger = Ledger::open(memory());
        let tx = ledger
            .add_transaction(&funds, &TransactionRequest::buy("K-CASH", dec!(1000)))
            .unwrap();

        ledger.remove(&tx.id);
        let before: Vec<Transaction> = ledger.list();
        ledger.remove(&tx.id);

        assert!(ledger.is_empty());
        assert_eq!(ledger.list(), before);
    }

    #[test]
    fn test_list_is_most_recent_first() {
        let funds = FundBook::open(memory());
        let mut ledger = Ledger::open(memory());

        for (day, amount) in [(3, dec!(300)), (1, dec!(100)), (2, dec!(200))] {
            ledger
                .add_transaction_at(
                    &funds,
                    &TransactionRequest::buy("K-CASH", amount),
                    at(2024, 7, day, 12),
                )
                .unwrap();
        }

        let listed = ledger.list();
        assert_transactions_newest_first(&listed);
        let amounts: Vec<Decimal> = listed.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![dec!(300), dec!(200), dec!(100)]);
    }

    #[test]
    fn test_transaction_survives_fund_deletion() {
        let mut funds = FundBook::open(memory());
        let mut ledger = Ledger::open(memory());
        let tx = ledger
            .add_transaction(&funds, &TransactionRequest::buy("K-CASH", dec!(1000)))
            .unwrap();

        funds.delete("K-CASH");

        assert_eq!(ledger.find(&tx.id).unwrap().fund_code, "K-CASH");
    }
}

// ============================================================================
// Fund Book Tests
// ============================================================================

mod fund_book_tests {
    use super::*;

    #[test]
    fn test_seeded_on_empty_storage() {
        let funds = FundBook::open(memory());

        assert_eq!(
            funds.load_outcome(),
            &LoadOutcome::Fallback(FallbackReason::EmptySlot)
        );
        assert_eq!(funds.list(), FundFixtures::catalog());
    }

    #[test]
    fn test_upsert_replaces_rather_than_duplicates() {
        let mut funds = FundBook::open(memory());
        let edited = funds.find("K-CASH").unwrap().clone().with_nav(dec!(16));

        funds.save(edited.clone()).unwrap();

        let matching: Vec<Fund> = funds
            .list()
            .into_iter()
            .filter(|f| f.fund_code == "K-CASH")
            .collect();
        assert_eq!(matching, vec![edited]);
        assert_eq!(funds.len(), 2);
    }

    #[test]
    fn test_save_rejects_invalid_fund() {
        let mut funds = FundBook::open(memory());
        let bad = TestFundBuilder::new().with_code("BAD").with_nav(dec!(0)).build();

        let result = funds.save(bad);

        assert!(matches!(result, Err(FundError::InvalidFund(_))));
        assert!(funds.find("BAD").is_none());
    }

    #[test]
    fn test_sorted_by_inception_after_mutations() {
        let mut funds = FundBook::open(memory());
        funds
            .save(
                TestFundBuilder::new()
                    .with_code("NEW")
                    .with_ipo_date(date(2025, 2, 1))
                    .build(),
            )
            .unwrap();
        funds
            .save(
                TestFundBuilder::new()
                    .with_code("OLD")
                    .with_category("Fixed Income")
                    .with_ipo_date(date(2010, 3, 1))
                    .build(),
            )
            .unwrap();
        funds.delete("K-CASH");

        let listed = funds.list();
        assert_funds_newest_first(&listed);
        assert_eq!(listed.len(), 3);
    }

    #[test]
    fn test_delete_missing_code_is_noop() {
        let storage = Arc::new(RecordingBlobStore::new());
        let mut funds = FundBook::open(storage.clone());
        let before = funds.list();

        funds.delete("MISSING");

        assert_eq!(funds.list(), before);
        assert_eq!(storage.writes(FUNDS_SLOT), 1);
    }

    #[test]
    fn test_search() {
        let funds = FundBook::open(memory());
        let criteria = FundCriteria {
            aimc_category: Some("money".into()),
            ..Default::default()
        };

        let found = funds.search(&criteria);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].fund_code, "K-CASH");
    }
}

// ============================================================================
// Persistence Tests
// ============================================================================

mod persistence_tests {
    use super::*;

    #[test]
    fn test_collections_survive_reopen() {
        let storage = memory();
        let mut funds = FundBook::open(storage.clone());
        let mut ledger = Ledger::open(storage.clone());

        funds
            .save(
                TestFundBuilder::new()
                    .with_code("NEW")
                    .with_nav(dec!(12.3456))
                    .with_ipo_date(date(2023, 3, 3))
                    .with_fees(dec!(1.5), dec!(0.25))
                    .build(),
            )
            .unwrap();
        ledger
            .add_transaction(&funds, &TransactionRequest::buy("NEW", dec!(2500)))
            .unwrap();
        ledger
            .add_transaction(&funds, &TransactionRequest::sell("SCBBANKING", dec!(12.5)))
            .unwrap();

        let reopened_funds = FundBook::open(storage.clone());
        let reopened_ledger = Ledger::open(storage);

        assert_eq!(reopened_funds.load_outcome(), &LoadOutcome::Loaded { count: 3 });
        assert_eq!(reopened_funds.list(), funds.list());
        assert_eq!(reopened_ledger.list(), ledger.list());
    }

    #[test]
    fn test_high_precision_figures_survive_reopen() {
        let storage = Arc::new(RecordingBlobStore::new());
        let funds = FundBook::open(storage.clone());
        let mut ledger = Ledger::open(storage.clone());

        let tx = ledger
            .add_transaction(
                &funds,
                &TransactionRequest::sell("SCBBANKING", dec!(1.23456789012345)),
            )
            .unwrap();
        assert_eq!(tx.amount, dec!(12.6543208737653625));

        let raw = storage.contents(TRANSACTIONS_SLOT).unwrap();
        assert!(raw.contains("\"amount\":12.6543208737653625"));

        let reopened = Ledger::open(storage);
        assert_eq!(reopened.find(&tx.id), Some(&tx));
    }

    #[test]
    fn test_legacy_ids_load_and_stay_addressable() {
        let storage = Arc::new(RecordingBlobStore::with_slots([(
            TRANSACTIONS_SLOT,
            r#"[
                {"id":"tx_1717234200000_k3j9x","fundCode":"K-CASH","type":"Buy","amount":1000,"units":66.1227,"nav":15.1234,"fee":0,"net":1000,"timestamp":"2024-06-01T09:30:00.000Z"},
                {"id":"550e8400-e29b-41d4-a716-446655440001","fundCode":"K-CASH","type":"Sell","amount":151.234,"units":10,"nav":15.1234,"fee":0,"net":151.23,"timestamp":"2024-06-02T09:30:00.000Z"}
            ]"#,
        )]));
        let funds = FundBook::open(storage.clone());
        let mut ledger = Ledger::open(storage.clone());
        let legacy: TransactionId = "tx_1717234200000_k3j9x".parse().unwrap();

        assert_eq!(ledger.load_outcome(), &LoadOutcome::Loaded { count: 2 });
        assert_eq!(ledger.find(&legacy).unwrap().units, dec!(66.1227));

        ledger
            .add_transaction(&funds, &TransactionRequest::buy("K-CASH", dec!(10)))
            .unwrap();
        let updated = ledger
            .update(&funds, &legacy, &TransactionRequest::buy("K-CASH", dec!(2000)))
            .unwrap();
        assert_eq!(updated.id, legacy);

        let reopened = Ledger::open(storage.clone());
        assert_eq!(reopened.len(), 3);
        assert_eq!(reopened.find(&legacy).unwrap().amount, dec!(2000));
        assert!(storage
            .contents(TRANSACTIONS_SLOT)
            .unwrap()
            .contains("\"id\":\"tx_1717234200000_k3j9x\""));
    }

    #[test]
    fn test_failed_write_keeps_change_in_memory() {
        let storage: Arc<dyn BlobStore> = Arc::new(FailingBlobStore::with_slots([(
            FUNDS_SLOT,
            FundFixtures::catalog_json(),
        )]));
        let mut funds = FundBook::open(storage);
        assert_eq!(funds.load_outcome(), &LoadOutcome::Loaded { count: 2 });

        let outcome = funds.delete("K-CASH");

        assert!(!outcome.is_saved());
        assert!(funds.find("K-CASH").is_none());
    }

    #[test]
    fn test_deleting_every_fund_persists_empty_catalog() {
        let storage = memory();
        let mut funds = FundBook::open(storage.clone());
        funds.delete("K-CASH");
        funds.delete("SCBBANKING");

        let reopened = FundBook::open(storage);

        assert_eq!(reopened.load_outcome(), &LoadOutcome::Loaded { count: 0 });
        assert!(reopened.is_empty());
    }

    #[test]
    fn test_reads_browser_written_slots() {
        let storage: Arc<dyn BlobStore> = Arc::new(MemoryBlobStore::with_slots([
            (
                FUNDS_SLOT,
                r#"[{"fundCode":"K-CASH","nav":15.1234,"aimcCategory":"Money Market","ipoDate":"2024-05-20","frontEndFee":0,"backEndFee":0}]"#,
            ),
            (
                TRANSACTIONS_SLOT,
                r#"[{"id":"550e8400-e29b-41d4-a716-446655440001","fundCode":"K-CASH","type":"Buy","amount":1000,"units":66.1227,"nav":15.1234,"fee":0,"net":1000,"timestamp":"2024-06-01T09:30:00.000Z"}]"#,
            ),
        ]));

        let funds = FundBook::open(storage.clone());
        let ledger = Ledger::open(storage);

        assert_eq!(funds.len(), 1);
        let tx = &ledger.list()[0];
        assert_eq!(tx.units, dec!(66.1227));
        assert_eq!(tx.timestamp, Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap());
    }

    #[test]
    fn test_corrupt_slot_falls_back_to_seed() {
        let storage: Arc<dyn BlobStore> =
            Arc::new(MemoryBlobStore::with_slots([(FUNDS_SLOT, "{\"oops\": true}")]));

        let funds = FundBook::open(storage);

        assert!(matches!(
            funds.load_outcome(),
            LoadOutcome::Fallback(FallbackReason::Corrupt(_))
        ));
        assert_eq!(funds.len(), 2);
    }

    #[test]
    fn test_unavailable_storage_keeps_working_in_memory() {
        let storage: Arc<dyn BlobStore> = Arc::new(UnavailableBlobStore);
        let funds = FundBook::open(storage.clone());
        let mut ledger = Ledger::open(storage);

        assert_eq!(
            ledger.load_outcome(),
            &LoadOutcome::Fallback(FallbackReason::Unavailable)
        );
        let tx = ledger
            .add_transaction(&funds, &TransactionRequest::buy("K-CASH", dec!(10)))
            .unwrap();

        assert_eq!(ledger.find(&tx.id), Some(&tx));
        assert!(matches!(ledger.remove(&tx.id), PersistOutcome::Failed(_)));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_search_transactions_by_type_and_day() {
        let funds = FundBook::open(memory());
        let mut ledger = Ledger::open(memory());
        ledger
            .add_transaction_at(&funds, &TransactionRequest::buy("K-CASH", dec!(10)), at(2024, 7, 1, 23))
            .unwrap();
        ledger
            .add_transaction_at(&funds, &TransactionRequest::sell("K-CASH", dec!(1)), at(2024, 7, 1, 8))
            .unwrap();
        ledger
            .add_transaction_at(&funds, &TransactionRequest::buy("SCBBANKING", dec!(10)), at(2024, 7, 2, 8))
            .unwrap();

        let criteria = TransactionCriteria {
            transaction_type: Some(TransactionType::Buy),
            end_date: Some(date(2024, 7, 1)),
            ..Default::default()
        };
        let found = ledger.search(&criteria);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].fund_code, "K-CASH");
        assert_eq!(found[0].timestamp, at(2024, 7, 1, 23));
    }

    #[test]
    fn test_search_transactions_from_start_date() {
        let funds = FundBook::open(memory());
        let mut ledger = Ledger::open(memory());
        for timestamp in [
            at(2024, 6, 30, 23),
            at(2024, 7, 1, 0),
            at(2024, 7, 2, 8),
        ] {
            ledger
                .add_transaction_at(&funds, &TransactionRequest::buy("K-CASH", dec!(10)), timestamp)
                .unwrap();
        }

        let criteria = TransactionCriteria {
            start_date: Some(date(2024, 7, 1)),
            ..Default::default()
        };
        let found: Vec<DateTime<Utc>> =
            ledger.search(&criteria).iter().map(|t| t.timestamp).collect();

        assert_eq!(found, vec![at(2024, 7, 2, 8), at(2024, 7, 1, 0)]);
    }

    #[test]
    fn test_search_within_trade_day() {
        let funds = FundBook::open(memory());
        let mut ledger = Ledger::open(memory());
        for timestamp in [
            TemporalFixtures::trade_time(),
            TemporalFixtures::end_of_trade_day(),
            TemporalFixtures::next_day(),
        ] {
            ledger
                .add_transaction_at(&funds, &TransactionRequest::buy("K-CASH", dec!(10)), timestamp)
                .unwrap();
        }
        let day = TemporalFixtures::trade_time().date_naive();

        let criteria = TransactionCriteria {
            start_date: Some(day),
            end_date: Some(day),
            ..Default::default()
        };
        let found = ledger.search(&criteria);

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].timestamp, TemporalFixtures::end_of_trade_day());
    }
}
