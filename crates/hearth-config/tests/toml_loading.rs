//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use hearth_config::{BackendKind, HearthConfig};
use hearth_core::SortKey;

#[test]
fn loads_http_backend_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[backend]
kind = "http"
base_url = "https://data.example.com/api"
table = "listings"
api_key = "secret-key"
timeout_secs = 3
"#,
        )?;

        let config: HearthConfig = Figment::from(Serialized::defaults(HearthConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.backend.kind, BackendKind::Http);
        assert_eq!(config.backend.base_url, "https://data.example.com/api");
        assert_eq!(config.backend.table, "listings");
        assert!(config.backend.has_api_key());
        assert_eq!(config.backend.timeout_secs, 3);
        assert!(config.backend.is_configured());
        Ok(())
    });
}

#[test]
fn loads_filter_section_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[filters]
price_floor = 50000
price_ceiling = 750000
property_types = ["Cabin", "Loft"]
default_sort = "price-low"
"#,
        )?;

        let config: HearthConfig = Figment::from(Serialized::defaults(HearthConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.filters.price_floor, 50_000);
        assert_eq!(config.filters.price_ceiling, 750_000);
        assert_eq!(config.filters.property_types, vec!["Cabin", "Loft"]);
        assert_eq!(config.filters.default_sort, SortKey::PriceLow);
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[backend]
latency_ms = 250
"#,
        )?;

        let config: HearthConfig = Figment::from(Serialized::defaults(HearthConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.backend.kind, BackendKind::Fixture);
        assert_eq!(config.backend.latency_ms, 250);
        assert_eq!(config.backend.table, "properties");
        assert_eq!(config.filters.price_ceiling, 2_000_000);
        Ok(())
    });
}

#[test]
fn project_local_config_is_discovered() {
    Jail::expect_with(|jail| {
        jail.create_dir(".hearth")?;
        jail.create_file(
            ".hearth/config.toml",
            r#"
[general]
default_limit = 5
"#,
        )?;

        let config = HearthConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 5);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[backend]
kind = "http"
base_url = "https://from-toml.example.com"
"#,
        )?;
        jail.set_env("HEARTH_BACKEND__BASE_URL", "https://from-env.example.com");
        jail.set_env("HEARTH_GENERAL__DEFAULT_LIMIT", "7");

        let config: HearthConfig = Figment::from(Serialized::defaults(HearthConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("HEARTH_").split("__"))
            .extract()?;

        assert_eq!(config.backend.base_url, "https://from-env.example.com");
        assert_eq!(config.general.default_limit, 7);
        Ok(())
    });
}

#[test]
fn unknown_backend_kind_fails_extraction() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[backend]
kind = "carrier-pigeon"
"#,
        )?;

        let result: Result<HearthConfig, _> =
            Figment::from(Serialized::defaults(HearthConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract();
        assert!(result.is_err());
        Ok(())
    });
}

#[test]
fn misspelled_default_sort_fails_extraction() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[filters]
default_sort = "cheapest"
"#,
        )?;

        let result: Result<HearthConfig, _> =
            Figment::from(Serialized::defaults(HearthConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract();
        let err = result.expect_err("unknown sort should be rejected");
        assert!(err.to_string().contains("cheapest"));
        Ok(())
    });
}

#[test]
fn default_sort_accepts_every_known_name() {
    for (name, expected) in [
        ("newest", SortKey::Newest),
        ("price-low", SortKey::PriceLow),
        ("price-high", SortKey::PriceHigh),
        ("bedrooms", SortKey::Bedrooms),
        ("none", SortKey::Unsorted),
    ] {
        Jail::expect_with(|jail| {
            jail.set_env("HEARTH_FILTERS__DEFAULT_SORT", name);
            let config = HearthConfig::load().expect("config loads");
            assert_eq!(config.filters.default_sort, expected);
            Ok(())
        });
    }
}

#[test]
fn validate_flags_http_without_url() {
    Jail::expect_with(|jail| {
        jail.set_env("HEARTH_BACKEND__KIND", "http");
        let config = HearthConfig::load().expect("config loads");
        assert!(config.validate().is_err());
        Ok(())
    });
}
