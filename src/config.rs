use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Local subdirectories mirrored for every product, in processing order.
pub const DEFAULT_SUBDIRS: [&str; 4] = ["apis", "docs", "pdfs", "repo"];

/// Built-in product table, in declaration order.
pub const DEFAULT_PRODUCTS: [(&str, &str); 5] = [
    ("bigquery", "bia-bigquery"),
    ("dbt", "bia-dbt"),
    ("looker", "bia-looker"),
    ("looker-studio", "bia-looker-studio"),
    ("omni", "bia-omni"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductBucket {
    pub name: String,
    pub bucket: String,
}

/// Everything the driver needs to know about what goes where.
///
/// Products are kept as a list so the run follows declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorConfig {
    #[serde(default)]
    pub source_root: PathBuf,
    #[serde(default = "default_subdirs")]
    pub subdirs: Vec<String>,
    pub products: Vec<ProductBucket>,
    /// Product names to process, when narrower than `products`
    #[serde(skip)]
    pub selected: Option<Vec<String>>,
}

fn default_subdirs() -> Vec<String> {
    DEFAULT_SUBDIRS.iter().map(|s| (*s).to_string()).collect()
}

impl MirrorConfig {
    pub fn default_for(source_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            subdirs: default_subdirs(),
            products: DEFAULT_PRODUCTS
                .iter()
                .map(|(name, bucket)| ProductBucket {
                    name: (*name).to_string(),
                    bucket: (*bucket).to_string(),
                })
                .collect(),
            selected: None,
        }
    }

    /// Load a config from YAML. A missing `source_root` falls back to `default_root`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation.
    pub fn from_yaml_file(path: &Path, default_root: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self =
            serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        if config.source_root.as_os_str().is_empty() {
            config.source_root = default_root.to_path_buf();
        }
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns the first problem found in the product table or subdirectory list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.products.is_empty() {
            return Err(ConfigError::NoProducts);
        }
        let mut seen = HashSet::new();
        for product in &self.products {
            if product.name.trim().is_empty() {
                return Err(ConfigError::EmptyProductName);
            }
            if product.bucket.trim().is_empty() {
                return Err(ConfigError::EmptyBucket(product.name.clone()));
            }
            if !seen.insert(product.name.as_str()) {
                return Err(ConfigError::DuplicateProduct(product.name.clone()));
            }
        }
        for subdir in &self.subdirs {
            if subdir.is_empty() || subdir.contains('/') || subdir.contains('\\') || subdir == ".."
            {
                return Err(ConfigError::InvalidSubdir(subdir.clone()));
            }
        }
        Ok(())
    }

    pub fn bucket_for(&self, product: &str) -> Option<&str> {
        self.products
            .iter()
            .find(|p| p.name == product)
            .map(|p| p.bucket.as_str())
    }

    /// Restrict the run to `names`. Unknown names are kept so the driver reports them.
    #[must_use]
    pub fn select(mut self, names: &[String]) -> Self {
        if !names.is_empty() {
            self.selected = Some(names.to_vec());
        }
        self
    }

    /// Product names to process, in order
    pub fn run_order(&self) -> Vec<String> {
        match &self.selected {
            Some(names) => names.clone(),
            None => self.products.iter().map(|p| p.name.clone()).collect(),
        }
    }

    pub fn product_dir(&self, product: &str) -> PathBuf {
        self.source_root.join(product)
    }
}
