//! Integration tests over the shipped profile files and the external
//! JSON contract.

use std::path::Path;

use coffeeshop_env::env::{Profile, load_from};

fn config_file(profile: Profile) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("config")
        .join(profile.file_name())
}

#[test]
fn shipped_development_profile_matches_registered_values() {
    let env = load_from(&config_file(Profile::Development), None, None, None).unwrap();
    assert!(!env.production);
    assert_eq!(env.api_server_url, "http://127.0.0.1:5000");
    assert_eq!(env.auth0.url, "dev-jnnv8d0c.us");
    assert_eq!(env.auth0.audience, "drinks_api");
    assert_eq!(env.auth0.client_id, "cVQ6zma5tNzgGxZPMRsAh2MF9hlzrnCx");
    assert_eq!(env.auth0.callback_url, "http://127.0.0.1:8100");
    env.validate().unwrap();
}

#[test]
fn shipped_production_profile_overlays_development() {
    let env = load_from(&config_file(Profile::Production), None, None, None).unwrap();
    assert!(env.production);
    // Substituted per-environment values.
    assert_eq!(env.api_server_url, "https://api.coffeeshop.example.com");
    assert_eq!(env.auth0.callback_url, "https://coffeeshop.example.com");
    assert_eq!(env.log_level, "warn");
    // Inherited from the development base.
    assert_eq!(env.auth0.url, "dev-jnnv8d0c.us");
    assert_eq!(env.auth0.audience, "drinks_api");
    assert_eq!(env.auth0.client_id, "cVQ6zma5tNzgGxZPMRsAh2MF9hlzrnCx");
    env.validate().unwrap();
}

#[test]
fn production_flag_is_the_only_profile_difference_in_shape() {
    let dev = load_from(&config_file(Profile::Development), None, None, None).unwrap();
    let prod = load_from(&config_file(Profile::Production), None, None, None).unwrap();
    let dev_json = serde_json::to_value(&dev).unwrap();
    let prod_json = serde_json::to_value(&prod).unwrap();

    // Same field set in both profiles — no field's presence depends on the flag.
    let keys = |v: &serde_json::Value| -> Vec<String> {
        v.as_object().unwrap().keys().cloned().collect()
    };
    assert_eq!(keys(&dev_json), keys(&prod_json));
    assert_eq!(keys(&dev_json["auth0"]), keys(&prod_json["auth0"]));
    assert_eq!(dev_json["production"], serde_json::json!(false));
    assert_eq!(prod_json["production"], serde_json::json!(true));
}

#[test]
fn json_output_uses_frontend_field_spelling() {
    let env = load_from(&config_file(Profile::Development), None, None, None).unwrap();
    let json = serde_json::to_string(&env).unwrap();
    assert!(json.contains("\"apiServerUrl\""));
    assert!(json.contains("\"clientId\""));
    assert!(json.contains("\"callbackURL\""));
    assert!(!json.contains("api_server_url"));
}

#[test]
fn overrides_substitute_without_touching_other_fields() {
    let env = load_from(
        &config_file(Profile::Production),
        Some("https://api.eu.coffeeshop.example.com"),
        Some("https://eu.coffeeshop.example.com"),
        Some("info"),
    )
    .unwrap();
    assert_eq!(env.api_server_url, "https://api.eu.coffeeshop.example.com");
    assert_eq!(env.auth0.callback_url, "https://eu.coffeeshop.example.com");
    assert_eq!(env.log_level, "info");
    assert_eq!(env.auth0.client_id, "cVQ6zma5tNzgGxZPMRsAh2MF9hlzrnCx");
    assert!(env.production);
}
