//! @acp:module "Niche Catalog"
//! @acp:summary "Keyed niche dictionary loaded from niches.json or the built-in set"
//! @acp:domain curriculum
//! @acp:layer io

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::NicheDefinition;
use crate::error::{CourseError, Result};

/// Niches shipped with the binary, used when no niches.json is present
const BUILTIN_NICHES: &str = include_str!("../../data/niches.default.json");

/// @acp:summary "Mapping of niche key to niche definition"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NicheCatalog {
    niches: BTreeMap<String, NicheDefinition>,
}

impl NicheCatalog {
    /// @acp:summary "Load a catalog from a niches.json file"
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            CourseError::Configuration(format!(
                "cannot read niche file {}: {}",
                path.display(),
                e
            ))
        })?;
        let catalog = serde_json::from_reader(BufReader::new(file))?;
        Ok(catalog)
    }

    /// @acp:summary "The niche set compiled into the binary"
    pub fn builtin() -> Self {
        // The embedded file is covered by test_builtin_catalog_parses
        serde_json::from_str(BUILTIN_NICHES).unwrap_or_default()
    }

    /// @acp:summary "Load from path, falling back to the built-in set if the file is absent"
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_builtin<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_json(path)
        } else {
            tracing::warn!(
                "Niche file {} not found, using built-in niches",
                path.display()
            );
            Ok(Self::builtin())
        }
    }

    /// @acp:summary "Write the catalog as pretty JSON"
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @acp:summary "Look up a niche by key - O(log n)"
    pub fn get(&self, key: &str) -> Result<&NicheDefinition> {
        self.niches.get(key).ok_or_else(|| {
            let available = if self.niches.is_empty() {
                "none".to_string()
            } else {
                self.keys().collect::<Vec<_>>().join(", ")
            };
            CourseError::Configuration(format!(
                "niche '{}' not found (available: {})",
                key, available
            ))
        })
    }

    pub fn insert(&mut self, key: impl Into<String>, niche: NicheDefinition) {
        self.niches.insert(key.into(), niche);
    }

    /// Niche keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.niches.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &NicheDefinition)> {
        self.niches.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.niches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.niches.is_empty()
    }

    /// @acp:summary "Validate every niche and check slug uniqueness"
    ///
    /// Returns one entry per failing niche key; an empty vec means the whole
    /// catalog is usable.
    pub fn validate(&self) -> Vec<(String, CourseError)> {
        let mut failures = Vec::new();
        let mut seen: HashMap<&str, &str> = HashMap::new();

        for (key, niche) in &self.niches {
            if let Err(e) = niche.validate() {
                failures.push((key.clone(), e));
                continue;
            }
            if let Some(first) = seen.insert(niche.slug.as_str(), key.as_str()) {
                failures.push((
                    key.clone(),
                    CourseError::validation(
                        &niche.slug,
                        format!("slug already used by niche '{}'", first),
                    ),
                ));
            }
        }

        failures
    }
}
