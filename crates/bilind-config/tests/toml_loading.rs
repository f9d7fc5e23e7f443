//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use bilind_config::{BilindConfig, ConfigError};
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[general]
default_wall_height = 2.8

[tolerance]
epsilon = 1e-7
discrepancy = 0.05

[reconcile]
upper_ratio = 1.2
lower_ratio = 0.8
",
        )?;

        let config: BilindConfig = Figment::from(Serialized::defaults(BilindConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_wall_height, 2.8);
        assert_eq!(config.tolerance.epsilon, 1e-7);
        assert_eq!(config.tolerance.discrepancy, 0.05);
        assert_eq!(config.reconcile.upper_ratio, 1.2);
        assert_eq!(config.reconcile.lower_ratio, 0.8);
        assert_eq!(config.reconcile.placeholder_gross, 1.1);
        assert!(config.validate().is_ok());
        Ok(())
    });
}

#[test]
fn missing_sections_use_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[general]\ndefault_wall_height = 3.2\n")?;

        let config: BilindConfig = Figment::from(Serialized::defaults(BilindConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_wall_height, 3.2);
        assert_eq!(config.tolerance.discrepancy, 0.01);
        assert_eq!(config.reconcile.lower_ratio, 0.85);
        Ok(())
    });
}

#[test]
fn project_local_file_is_discovered() {
    Jail::expect_with(|jail| {
        jail.create_dir(".bilind")?;
        jail.create_file(
            ".bilind/config.toml",
            "[tolerance]\ndiscrepancy = 0.02\n",
        )?;

        let config = BilindConfig::load().expect("config loads");
        assert_eq!(config.tolerance.discrepancy, 0.02);
        Ok(())
    });
}

#[test]
fn explicit_file_overrides_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".bilind")?;
        jail.create_file(
            ".bilind/config.toml",
            "[general]\ndefault_wall_height = 2.7\n",
        )?;
        jail.create_file("override.toml", "[general]\ndefault_wall_height = 3.4\n")?;

        let config = BilindConfig::load_from(Some(std::path::Path::new("override.toml")))
            .expect("config loads");
        assert_eq!(config.general.default_wall_height, 3.4);
        Ok(())
    });
}

#[test]
fn inverted_trust_band_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_dir(".bilind")?;
        jail.create_file(
            ".bilind/config.toml",
            "[reconcile]\nupper_ratio = 0.9\nlower_ratio = 0.95\n",
        )?;

        let err = BilindConfig::load().expect_err("band must be rejected");
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("broken.toml", "[general\ndefault_wall_height = ")?;

        let err = BilindConfig::load_from(Some(std::path::Path::new("broken.toml")))
            .expect_err("parse must fail");
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
