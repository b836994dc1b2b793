use crate::domain::digits::DigitSequence;
use crate::domain::luhn::DEFAULT_TARGET_LENGTH;
use crate::error::{LuhnError, Result};
use serde::Deserialize;
use std::path::Path;

/// Output encoding for synthesized batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

/// The issuer prefixes a batch can be synthesized from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum IssuerPreset {
    #[default]
    SignaturePro,
    InfiniteTier,
    BusinessGold,
    Standard,
}

impl IssuerPreset {
    pub const ALL: [IssuerPreset; 4] = [
        IssuerPreset::SignaturePro,
        IssuerPreset::InfiniteTier,
        IssuerPreset::BusinessGold,
        IssuerPreset::Standard,
    ];

    /// The six-digit issuer identification number.
    pub fn iin(&self) -> &'static str {
        match self {
            IssuerPreset::SignaturePro => "471608",
            IssuerPreset::InfiniteTier => "448544",
            IssuerPreset::BusinessGold => "414720",
            IssuerPreset::Standard => "400011",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IssuerPreset::SignaturePro => "Signature Pro",
            IssuerPreset::InfiniteTier => "Infinite Tier",
            IssuerPreset::BusinessGold => "Business Gold",
            IssuerPreset::Standard => "Standard",
        }
    }
}

/// Generator defaults, loaded from an optional TOML file.
///
/// Any field missing from the file keeps its built-in default. A literal `prefix`
/// takes precedence over `preset`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub preset: IssuerPreset,
    pub prefix: Option<String>,
    pub length: usize,
    pub count: usize,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preset: IssuerPreset::default(),
            prefix: None,
            length: DEFAULT_TARGET_LENGTH,
            count: 1,
            format: OutputFormat::Csv,
        }
    }
}

impl Settings {
    /// Reads settings from `path`, or returns the defaults when no path is given.
    ///
    /// The result is not validated; callers merge their overrides first and then call
    /// [`Settings::validate`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_toml(&std::fs::read_to_string(path)?),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| LuhnError::Config(e.to_string()))
    }

    /// The prefix generation starts from: the literal prefix if set, else the preset's IIN.
    pub fn effective_prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or_else(|| self.preset.iin())
    }

    pub fn validate(&self) -> Result<()> {
        DigitSequence::parse(self.effective_prefix())?;
        if self.length < 2 {
            return Err(LuhnError::Config(format!(
                "length must be at least 2, got {}",
                self.length
            )));
        }
        if self.count == 0 {
            return Err(LuhnError::Config("count must be at least 1".to_string()));
        }
        Ok(())
    }
}
