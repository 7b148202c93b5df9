// ═══════════════════════════════════════════════════════════════════
// Storage Tests: StorageManager JSON documents on disk
// ═══════════════════════════════════════════════════════════════════

use portfolio_tracker_core::errors::CoreError;
use portfolio_tracker_core::ingest::sample_batch;
use portfolio_tracker_core::models::portfolio::Portfolio;
use portfolio_tracker_core::storage::manager::StorageManager;

fn sample() -> Portfolio {
    let mut p = Portfolio::new("Test Portfolio");
    p.holdings = sample_batch().into_holdings().unwrap();
    p.holdings[1].current_price = 2750.5;
    p
}

// ═══════════════════════════════════════════════════════════════════
// In-memory documents
// ═══════════════════════════════════════════════════════════════════

mod strings {
    use super::*;

    #[test]
    fn pretty_printed_with_two_space_indent() {
        let json = StorageManager::save_to_string(&sample()).unwrap();
        assert!(json.starts_with("{\n  \"name\": \"Test Portfolio\""));
        assert!(json.contains("\n  \"holdings\": ["));
    }

    #[test]
    fn string_round_trip() {
        let p = sample();
        let json = StorageManager::save_to_string(&p).unwrap();
        assert_eq!(StorageManager::load_from_str(&json).unwrap(), p);
    }

    #[test]
    fn hand_written_document_loads() {
        let json = r#"{
  "name": "Hand Written",
  "holdings": [
    {"asset_type": "equity", "asset_id": "INFY", "asset_name": "Infosys",
     "quantity": 4, "purchase_price": 1500.0, "current_price": 1650.0}
  ]
}"#;
        let p = StorageManager::load_from_str(json).unwrap();
        assert_eq!(p.name, "Hand Written");
        assert_eq!(p.holdings[0].current_price, 1650.0);
        assert_eq!(p.holdings[0].purchase_date, None);
    }

    #[test]
    fn malformed_document_is_deserialization_error() {
        let err = StorageManager::load_from_str("{\"name\": ").unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn missing_field_is_deserialization_error() {
        let err = StorageManager::load_from_str(r#"{"name": "x"}"#).unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
        assert!(err.to_string().contains("holdings"));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Files
// ═══════════════════════════════════════════════════════════════════

mod files {
    use super::*;

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.json");
        let p = sample();

        StorageManager::save_to_file(&p, &path).unwrap();
        assert!(path.exists());
        assert_eq!(StorageManager::load_from_file(&path).unwrap(), p);
    }

    #[test]
    fn missing_file_gives_default_portfolio() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        let p = StorageManager::load_from_file(path).unwrap();
        assert_eq!(p, Portfolio::default());
    }

    #[test]
    fn save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.json");
        StorageManager::save_to_file(&sample(), &path).unwrap();
        StorageManager::save_to_file(&Portfolio::new("Second"), &path).unwrap();
        let p = StorageManager::load_from_file(&path).unwrap();
        assert_eq!(p.name, "Second");
        assert!(p.is_empty());
    }

    #[test]
    fn unwritable_location_is_file_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("portfolio.json");
        let err = StorageManager::save_to_file(&sample(), &path).unwrap_err();
        assert!(matches!(err, CoreError::FileIO(_)));
        assert!(err.to_string().contains("Error saving portfolio"));
    }

    #[test]
    fn corrupt_file_is_deserialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.json");
        std::fs::write(&path, "not json at all").unwrap();
        assert!(matches!(
            StorageManager::load_from_file(&path),
            Err(CoreError::Deserialization(_))
        ));
    }

    #[test]
    fn unicode_names_survive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.json");
        let mut p = sample();
        p.name = "Épargne ₹ 家族".into();
        StorageManager::save_to_file(&p, &path).unwrap();
        let loaded = StorageManager::load_from_file(&path).unwrap();
        assert_eq!(loaded.name, "Épargne ₹ 家族");
    }
}
