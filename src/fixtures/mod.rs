//! Fixtures
//!
//! YAML descriptions of upstream discount payloads and buyer payment legs,
//! used by tests and the demo binary.

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use slotmap::{SlotMap, new_key_type};
use thiserror::Error;

use crate::{
    discounts::Discount,
    fixtures::{contexts::ContextsFixture, discounts::DiscountsFixture},
    payments::{PurchaseContext, PurchaseContextError},
};

pub mod contexts;
pub mod discounts;

new_key_type! {
    /// Discount Key
    pub struct DiscountKey;
}

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid amount format
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Discount not found
    #[error("Discount not found: {0}")]
    DiscountNotFound(String),

    /// Purchase context not found
    #[error("Purchase context not found: {0}")]
    ContextNotFound(String),

    /// Purchase context could not be built
    #[error("Invalid purchase context {name}: {source}")]
    InvalidContext {
        /// Fixture key of the context
        name: String,

        /// Underlying construction error
        source: PurchaseContextError,
    },
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Loaded discounts, keyed by generated keys
    discounts: SlotMap<DiscountKey, Discount>,

    /// String key -> `SlotMap` key mappings for lookups
    discount_keys: FxHashMap<String, DiscountKey>,

    /// Loaded purchase contexts by string key
    contexts: FxHashMap<String, PurchaseContext>,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            discounts: SlotMap::with_key(),
            discount_keys: FxHashMap::default(),
            contexts: FxHashMap::default(),
        }
    }

    /// Load discounts from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if an amount is invalid.
    pub fn load_discounts(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("discounts").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: DiscountsFixture = serde_norway::from_str(&contents)?;

        let parsed = fixture
            .discounts
            .into_iter()
            .map(|(key, discount_fixture)| {
                Discount::try_from(discount_fixture).map(|discount| (key, discount))
            })
            .collect::<Result<Vec<_>, FixtureError>>()?;

        for (key, discount) in parsed {
            let discount_key = self.discounts.insert(discount);

            if let Some(replaced) = self.discount_keys.insert(key, discount_key) {
                self.discounts.remove(replaced);
            }
        }

        Ok(self)
    }

    /// Load purchase contexts from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a context has no payments.
    pub fn load_contexts(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("contexts").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: ContextsFixture = serde_norway::from_str(&contents)?;

        let parsed = fixture
            .contexts
            .into_iter()
            .map(|(key, payments)| match contexts::try_into_context(payments) {
                Ok(context) => Ok((key, context)),
                Err(source) => Err(FixtureError::InvalidContext { name: key, source }),
            })
            .collect::<Result<Vec<_>, FixtureError>>()?;

        self.contexts.extend(parsed);

        Ok(self)
    }

    /// Load a complete fixture set (discounts and contexts with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_discounts(name)?.load_contexts(name)?;

        Ok(fixture)
    }

    /// Get a discount by its string key
    ///
    /// # Errors
    ///
    /// Returns an error if the discount is not found.
    pub fn discount(&self, key: &str) -> Result<&Discount, FixtureError> {
        let discount_key = self
            .discount_keys
            .get(key)
            .ok_or_else(|| FixtureError::DiscountNotFound(key.to_string()))?;

        self.discounts
            .get(*discount_key)
            .ok_or_else(|| FixtureError::DiscountNotFound(key.to_string()))
    }

    /// All loaded discounts with their string keys, sorted by key
    pub fn discounts(&self) -> Vec<(&str, &Discount)> {
        let mut discounts: Vec<(&str, &Discount)> = self
            .discount_keys
            .iter()
            .filter_map(|(name, key)| {
                self.discounts
                    .get(*key)
                    .map(|discount| (name.as_str(), discount))
            })
            .collect();

        discounts.sort_unstable_by_key(|(name, _)| *name);

        discounts
    }

    /// Get a purchase context by its string key
    ///
    /// # Errors
    ///
    /// Returns an error if the context is not found.
    pub fn context(&self, key: &str) -> Result<&PurchaseContext, FixtureError> {
        self.contexts
            .get(key)
            .ok_or_else(|| FixtureError::ContextNotFound(key.to_string()))
    }

    /// String keys of all loaded purchase contexts
    pub fn context_names(&self) -> Vec<String> {
        self.contexts.keys().cloned().collect()
    }

    /// Number of loaded discounts
    pub fn discount_count(&self) -> usize {
        self.discounts.len()
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
