//! Tests for the row cleaner module
//!
//! Unit tests for each cleaning stage plus end-to-end passes over small
//! hand-written datasets.

pub mod deduplication_tests;

// Test helper functions and fixtures
use crate::app::models::{CleanRecord, RawRecord};

/// Raw row with the columns most tests care about
pub fn create_raw_record(app: &str, category: &str, rating: &str, installs: &str) -> RawRecord {
    RawRecord::default()
        .with("App", app)
        .with("Category", category)
        .with("Rating", rating)
        .with("Installs", installs)
        .with("Type", "Free")
}

/// Fully populated raw row, as found in the real dataset
pub fn create_full_raw_record(app: &str, category: &str) -> RawRecord {
    RawRecord::default()
        .with("App", app)
        .with("Category", category)
        .with("Rating", "4.1")
        .with("Reviews", "159")
        .with("Size", "19M")
        .with("Installs", "10,000+")
        .with("Type", "Paid")
        .with("Price", "$2.99")
        .with("Content Rating", "Everyone")
        .with("Genres", "Art & Design")
        .with("Last Updated", "January 7, 2018")
        .with("Current Ver", "1.0.0")
        .with("Android Ver", "4.0.3 and up")
}

/// Candidate record that passes every validity rule
pub fn create_candidate(name: &str, category: &str) -> CleanRecord {
    CleanRecord {
        name: name.to_string(),
        category: category.to_string(),
        rating: Some(4.0),
        review_count: 100,
        size_mb: Some(10.0),
        installs: 5_000,
        app_type: "Free".to_string(),
        price: 0.0,
        content_rating: "Everyone".to_string(),
        genres: "Tools".to_string(),
        last_updated: None,
        update_year: None,
        android_version_min: Some(5.0),
        current_version: "2.1".to_string(),
    }
}

/// Candidate with the given rating
pub fn create_rated_candidate(name: &str, rating: Option<f64>) -> CleanRecord {
    CleanRecord {
        rating,
        ..create_candidate(name, "TOOLS")
    }
}
