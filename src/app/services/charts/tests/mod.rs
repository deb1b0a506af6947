//! Tests for the chart builders and the render driver

pub mod builder_tests;
pub mod render_tests;

use crate::app::models::CleanRecord;

/// Free app with the fields the chart builders read
pub fn create_app(name: &str, category: &str, installs: u64, reviews: u64) -> CleanRecord {
    CleanRecord {
        name: name.to_string(),
        category: category.to_string(),
        rating: Some(4.0),
        review_count: reviews,
        size_mb: Some(15.0),
        installs,
        app_type: "Free".to_string(),
        price: 0.0,
        content_rating: "Everyone".to_string(),
        genres: String::new(),
        last_updated: None,
        update_year: Some(2018),
        android_version_min: Some(4.1),
        current_version: String::new(),
    }
}

pub fn create_paid_app(name: &str, category: &str, price: f64, installs: u64) -> CleanRecord {
    CleanRecord {
        app_type: "Paid".to_string(),
        price,
        ..create_app(name, category, installs, 10)
    }
}

/// Small mixed dataset touching every chart
pub fn create_dataset() -> Vec<CleanRecord> {
    let mut teen = create_app("Shooter", "GAME", 50_000, 4_000);
    teen.content_rating = "Teen".to_string();
    teen.update_year = Some(2017);
    teen.android_version_min = Some(5.0);

    let mut unrated = create_app("Notes", "PRODUCTIVITY", 1_000, 0);
    unrated.content_rating = String::new();
    unrated.update_year = None;
    unrated.android_version_min = None;

    vec![
        create_app("Chess", "GAME", 10_000, 500),
        teen,
        create_app("Maps", "TRAVEL", 100_000, 9_000),
        unrated,
        create_paid_app("Pro Tuner", "MUSIC", 2.99, 5_000),
        create_paid_app("Studio", "MUSIC", 7.0, 1_000),
        create_paid_app("Tax Helper", "FINANCE", 14.99, 500),
    ]
}
