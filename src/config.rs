//! Store configuration loaded from a TOML file.
//!
//! Every section is optional: a file that names only `[pricing]` keeps the
//! built-in text for everything else. The file lives at
//! `<config_dir>/techstore/store.toml`:
//!   Linux    ~/.config/techstore/store.toml
//!   macOS    ~/Library/Application Support/techstore/store.toml
//!   Windows  %APPDATA%\techstore\store.toml

use std::path::{Path, PathBuf};

use crate::formatter::{PriceFormatter, RUBLE_SUFFIX, RU_GROUP_SEPARATOR};

/// Internal error type for configuration failures.
/// The IPC layer maps these to `AppError::Config` at the boundary.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {message}")]
    Read { path: String, message: String },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Full store configuration.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct StoreConfig {
    pub store: StoreSection,
    pub pricing: PricingConfig,
    pub contacts: ContactsConfig,
    /// Delivery terms, one line each.
    pub delivery: Vec<String>,
    /// Accepted payment methods, one line each.
    pub payment: Vec<String>,
    /// Feature blurbs shown in the about section.
    pub features: Vec<FeatureBlurb>,
}

/// `[store]` — identity and page text.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct StoreSection {
    pub name: String,
    pub tagline: String,
    pub about: String,
    pub copyright: String,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            name: "TECH STORE".to_string(),
            tagline: "Ваш надёжный партнёр в мире технологий".to_string(),
            about: "Мы - команда энтузиастов, которые верят в силу инновационных технологий. \
                    Наша миссия - делать передовые технологии доступными каждому."
                .to_string(),
            copyright: "© 2024 TECH STORE. Все права защищены.".to_string(),
        }
    }
}

/// `[pricing]` — price display options.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct PricingConfig {
    /// Thousands separator; empty disables grouping.
    pub group_separator: String,
    pub currency_suffix: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            group_separator: RU_GROUP_SEPARATOR.to_string(),
            currency_suffix: RUBLE_SUFFIX.to_string(),
        }
    }
}

impl PricingConfig {
    pub fn formatter(&self) -> PriceFormatter {
        PriceFormatter::new(self.group_separator.clone(), self.currency_suffix.clone())
    }
}

/// `[contacts]` — footer contact lines.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ContactsConfig {
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self {
            phone: "+7 (495) 123-45-67".to_string(),
            email: "info@techstore.ru".to_string(),
            address: "Москва, ул. Тверская, 1".to_string(),
        }
    }
}

/// `[[features]]` — one about-section blurb.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FeatureBlurb {
    pub title: String,
    pub text: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StoreConfig {
    /// The configuration used when no file is present.
    pub fn builtin() -> Self {
        Self {
            store: StoreSection::default(),
            pricing: PricingConfig::default(),
            contacts: ContactsConfig::default(),
            delivery: vec![
                "По Москве: 1 день".to_string(),
                "По России: 2-5 дней".to_string(),
                "Самовывоз: бесплатно".to_string(),
            ],
            payment: vec![
                "Банковские карты".to_string(),
                "Электронные кошельки".to_string(),
                "Наличные при получении".to_string(),
            ],
            features: vec![
                FeatureBlurb {
                    title: "Быстрая доставка".to_string(),
                    text: "Доставка по всей России за 1-3 дня".to_string(),
                },
                FeatureBlurb {
                    title: "Гарантия качества".to_string(),
                    text: "Только оригинальные товары с гарантией".to_string(),
                },
                FeatureBlurb {
                    title: "Поддержка 24/7".to_string(),
                    text: "Всегда готовы помочь вам".to_string(),
                },
            ],
        }
    }
}

/// Parse a TOML string into a [`StoreConfig`], running validation.
///
/// Sections absent from `toml_str` take their built-in values; list keys
/// (`delivery`, `payment`, `features`) replace the built-in list when present.
pub fn parse(toml_str: &str) -> Result<StoreConfig, ConfigError> {
    let cfg: StoreConfig =
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate(&cfg)?;
    Ok(cfg)
}

fn validate(cfg: &StoreConfig) -> Result<(), ConfigError> {
    if cfg.store.name.trim().is_empty() {
        return Err(ConfigError::Invalid("store.name must not be empty".to_string()));
    }

    if cfg.pricing.currency_suffix.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "pricing.currency_suffix must not be empty".to_string(),
        ));
    }

    if cfg.pricing.group_separator.chars().count() > 1 {
        return Err(ConfigError::Invalid(
            "pricing.group_separator must be a single character or empty".to_string(),
        ));
    }

    Ok(())
}

/// Default location of the store config file, if the OS exposes a config dir.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("techstore").join("store.toml"))
}

/// Load the config at `path`. A missing file yields [`StoreConfig::builtin`].
pub fn load_from(path: &Path) -> Result<StoreConfig, ConfigError> {
    if !path.exists() {
        return Ok(StoreConfig::builtin());
    }
    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse(&text)
}

/// Load the config from [`default_path`].
pub fn load() -> Result<StoreConfig, ConfigError> {
    match default_path() {
        Some(path) => load_from(&path),
        None => Ok(StoreConfig::builtin()),
    }
}
