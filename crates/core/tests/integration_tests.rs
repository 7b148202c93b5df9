// ═══════════════════════════════════════════════════════════════════
// Integration Tests: PortfolioTracker facade end to end
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;
use portfolio_tracker_core::errors::CoreError;
use portfolio_tracker_core::ingest::SAMPLE_CSV;
use portfolio_tracker_core::models::portfolio::Portfolio;
use portfolio_tracker_core::services::analytics_service::holding_cagr_at;
use portfolio_tracker_core::services::portfolio_service::NewHolding;
use portfolio_tracker_core::PortfolioTracker;

fn entry(id: &str, qty: f64, price: f64) -> NewHolding {
    NewHolding {
        asset_type: "equity".into(),
        asset_id: id.into(),
        asset_name: format!("{id} Ltd"),
        quantity: qty,
        purchase_price: price,
        purchase_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
    }
}

// ═══════════════════════════════════════════════════════════════════
// Lifecycle
// ═══════════════════════════════════════════════════════════════════

mod lifecycle {
    use super::*;

    #[test]
    fn create_new_is_clean_and_empty() {
        let tracker = PortfolioTracker::create_new();
        assert_eq!(tracker.name(), "My Portfolio");
        assert!(tracker.holdings().is_empty());
        assert!(!tracker.has_unsaved_changes());
    }

    #[test]
    fn mutations_set_dirty_and_save_clears_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.json");

        let mut tracker = PortfolioTracker::create_new();
        tracker.add_holding(entry("TCS", 5.0, 3200.0)).unwrap();
        assert!(tracker.has_unsaved_changes());

        tracker.save_to_file(&path).unwrap();
        assert!(!tracker.has_unsaved_changes());

        let reloaded = PortfolioTracker::load_from_file(&path).unwrap();
        assert!(!reloaded.has_unsaved_changes());
        assert_eq!(reloaded.portfolio(), tracker.portfolio());
    }

    #[test]
    fn missing_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let tracker = PortfolioTracker::load_from_file(path).unwrap();
        assert_eq!(tracker.portfolio(), &Portfolio::default());
    }

    #[test]
    fn failed_mutation_stays_clean() {
        let mut tracker = PortfolioTracker::create_new();
        assert!(tracker.rename("  ").is_err());
        assert!(tracker.remove_holding(0).is_err());
        assert!(!tracker.has_unsaved_changes());
    }

    #[test]
    fn to_json_matches_saved_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.json");
        let mut tracker = PortfolioTracker::create_new();
        tracker.import_csv_str(SAMPLE_CSV).unwrap();
        tracker.save_to_file(&path).unwrap();
        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, tracker.to_json().unwrap());
    }

    #[test]
    fn debug_shows_counts_not_contents() {
        let mut tracker = PortfolioTracker::create_new();
        tracker.import_csv_str(SAMPLE_CSV).unwrap();
        let dbg = format!("{tracker:?}");
        assert!(dbg.contains("holdings: 3"));
        assert!(!dbg.contains("RELIANCE"));
    }
}

// ═══════════════════════════════════════════════════════════════════
// CSV upload
// ═══════════════════════════════════════════════════════════════════

mod csv_upload {
    use super::*;

    #[test]
    fn validate_does_not_touch_portfolio() {
        let tracker = PortfolioTracker::create_new();
        let outcome = tracker.validate_csv_str(SAMPLE_CSV).unwrap();
        assert!(outcome.accepted);
        assert!(tracker.holdings().is_empty());
    }

    #[test]
    fn import_replaces_holdings() {
        let mut tracker = PortfolioTracker::create_new();
        tracker.add_holding(entry("TCS", 5.0, 3200.0)).unwrap();
        assert_eq!(tracker.import_csv_str(SAMPLE_CSV).unwrap(), 3);
        let ids: Vec<&str> = tracker
            .holdings()
            .iter()
            .map(|h| h.asset_id.as_str())
            .collect();
        assert_eq!(ids, ["HDFC123", "RELIANCE", "LIC001"]);
    }

    #[test]
    fn rejected_import_is_all_or_nothing() {
        let mut tracker = PortfolioTracker::create_new();
        tracker.import_csv_str(SAMPLE_CSV).unwrap();
        let before = tracker.portfolio().clone();

        let bad = "asset_type,asset_id,asset_name,quantity,purchase_price,purchase_date\n\
                   equity,A,A,1,10,2023-01-01\n\
                   equity,B,B,1,10,yesterday";
        let err = tracker.import_csv_str(bad).unwrap_err();
        match err {
            CoreError::ValidationError(msg) => {
                assert_eq!(msg, "Invalid date format in purchase_date. Use YYYY-MM-DD");
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
        assert_eq!(tracker.portfolio(), &before);
    }

    #[test]
    fn blank_date_cell_degrades_cagr_after_import() {
        let mut tracker = PortfolioTracker::create_new();
        let blank = "asset_type,asset_id,asset_name,quantity,purchase_price,purchase_date\n\
                     equity,TCS,TCS,5,100,";
        tracker.import_csv_str(blank).unwrap();
        tracker.reprice(0, 200.0).unwrap();

        let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        assert_eq!(tracker.holdings()[0].purchase_date.as_deref(), Some(""));
        assert_eq!(holding_cagr_at(&tracker.holdings()[0], today), 0.0);
    }

    #[test]
    fn missing_date_column_anchors_cagr_after_import() {
        let mut tracker = PortfolioTracker::create_new();
        let undated = "asset_type,asset_id,asset_name,quantity,purchase_price\n\
                       equity,TCS,TCS,5,100";
        tracker.import_csv_str(undated).unwrap();
        tracker.reprice(0, 200.0).unwrap();

        let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        assert_eq!(tracker.holdings()[0].purchase_date, None);
        assert!(holding_cagr_at(&tracker.holdings()[0], today) > 0.0);
    }

    #[test]
    fn validation_message_surfaces_without_error() {
        let tracker = PortfolioTracker::create_new();
        let outcome = tracker
            .validate_csv_str("asset_type,asset_id\nequity,X")
            .unwrap();
        assert!(!outcome.accepted);
        assert_eq!(
            outcome.message,
            "Missing required columns: asset_name, quantity, purchase_price"
        );
    }
}

// ═══════════════════════════════════════════════════════════════════
// Edits and analytics through the facade
// ═══════════════════════════════════════════════════════════════════

mod analytics_flow {
    use super::*;

    fn tracked() -> PortfolioTracker {
        let mut tracker = PortfolioTracker::create_new();
        tracker.import_csv_str(SAMPLE_CSV).unwrap();
        tracker.reprice(1, 3000.0).unwrap();
        tracker.reprice(0, 120.0).unwrap();
        tracker
    }

    #[test]
    fn summary_reflects_repricing() {
        let s = tracked().summary();
        // 100×120 + 10×3000 + 1×50000
        assert_eq!(s.total_value, 92_000.0);
        assert_eq!(s.total_investment, 90_000.0);
        assert_eq!(s.total_gain_loss, 2_000.0);
        assert_eq!(s.best_performer.unwrap().holding.asset_id, "RELIANCE");
    }

    #[test]
    fn ranking_and_top_performers() {
        let tracker = tracked();
        let ranking = tracker.cagr_ranking();
        assert_eq!(ranking[0].holding.asset_id, "RELIANCE");
        assert_eq!(ranking[2].holding.asset_id, "HDFC123");
        assert!(ranking[0].cagr > 0.0);
        assert_eq!(ranking[1].cagr, 0.0);
        assert!(ranking[2].cagr < 0.0);

        let top = tracker.top_performers(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0], ranking[0]);
    }

    #[test]
    fn allocation_and_type_performance() {
        let tracker = tracked();
        let allocation = tracker.allocation();
        let types: Vec<&str> = allocation.iter().map(|a| a.asset_type.as_str()).collect();
        assert_eq!(types, ["equity", "insurance", "mutual_fund"]);

        let perf = tracker.asset_type_performance();
        assert_eq!(perf[0].total_gain_loss, 5_000.0);
        assert_eq!(perf[1].total_gain_loss, 0.0);
        assert_eq!(perf[2].total_gain_loss, -3_000.0);
    }

    #[test]
    fn remove_then_rename() {
        let mut tracker = tracked();
        let removed = tracker.remove_holding(2).unwrap();
        assert_eq!(removed.asset_id, "LIC001");
        tracker.rename("Long Term").unwrap();
        assert_eq!(tracker.name(), "Long Term");
        assert_eq!(tracker.holdings().len(), 2);
    }

    #[test]
    fn reprice_unknown_index() {
        let mut tracker = tracked();
        assert!(matches!(
            tracker.reprice(9, 1.0),
            Err(CoreError::HoldingNotFound { index: 9, len: 3 })
        ));
    }

    #[test]
    fn exports() {
        let tracker = tracked();
        let csv = tracker.export_csv().unwrap();
        let row = "equity,RELIANCE,Reliance Industries Ltd,10,2500,3000,2023-02-20";
        assert!(csv.contains(row));
        assert!(tracker.export_pdf().starts_with(b"%PDF-1.4"));
        assert_eq!(PortfolioTracker::create_new().export_csv().unwrap(), "");
    }
}
