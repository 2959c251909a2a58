use std::collections::HashMap;

use tour_reviews::{
    config::{Config, StoreKind},
    errors::AppError,
};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn test_defaults() {
    let config = Config::from_lookup(lookup(&[
        ("DATABASE_URL", "postgres://localhost/tours"),
        ("JWT_SECRET", "secret"),
    ]))
    .expect("config");

    assert_eq!(config.store, StoreKind::Postgres);
    assert_eq!(config.port, 3001);
    assert_eq!(config.database_max_connections, 5);
    assert_eq!(config.allowed_origins, vec!["http://localhost:3000"]);
}

#[test]
fn test_memory_store_needs_no_database() {
    let config = Config::from_lookup(lookup(&[
        ("STORE", "memory"),
        ("JWT_SECRET", "secret"),
        ("PORT", "8080"),
        ("ALLOWED_ORIGINS", "https://a.example, https://b.example"),
    ]))
    .expect("config");

    assert_eq!(config.store, StoreKind::Memory);
    assert_eq!(config.database_url, None);
    assert_eq!(config.port, 8080);
    assert_eq!(
        config.allowed_origins,
        vec!["https://a.example", "https://b.example"]
    );
}

#[test]
fn test_missing_or_malformed_values() {
    let no_secret = Config::from_lookup(lookup(&[("STORE", "memory")]));
    assert!(matches!(no_secret, Err(AppError::EnvError(_))));

    let no_database = Config::from_lookup(lookup(&[("JWT_SECRET", "secret")]));
    assert!(matches!(no_database, Err(AppError::EnvError(_))));

    let bad_port = Config::from_lookup(lookup(&[
        ("STORE", "memory"),
        ("JWT_SECRET", "secret"),
        ("PORT", "eighty"),
    ]));
    assert!(matches!(bad_port, Err(AppError::EnvError(_))));

    let bad_store = Config::from_lookup(lookup(&[("STORE", "mongo"), ("JWT_SECRET", "secret")]));
    assert!(matches!(bad_store, Err(AppError::EnvError(_))));
}
