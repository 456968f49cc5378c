use crate::domain::model::{Item, OptimalCondition};
use crate::utils::error::{Result, StoreError};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything a simulated storefront session needs: the store, the visiting
/// customer, the shelf, and (optionally) the storage conditions to report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionProfile {
    pub store: StoreSection,
    pub customer: CustomerSection,
    pub items: Vec<Item>,
    pub optimal_conditions: Option<OptimalCondition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSection {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerSection {
    pub name: String,
    pub balance: f64,
}

impl SessionProfile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(StoreError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Built-in session used when no profile file is given.
    pub fn demo() -> Self {
        Self {
            store: StoreSection {
                name: "Corner Goods".to_string(),
            },
            customer: CustomerSection {
                name: "Alex Doe".to_string(),
                balance: 60.0,
            },
            items: vec![
                Item::new(1, "Ceramic Mug".to_string(), 14.5),
                Item::new(2, "Walnut Shelf".to_string(), 89.0),
            ],
            optimal_conditions: Some(OptimalCondition::new(19.5, 101.3, 45.0, 0.1, 30)),
        }
    }
}

impl Validate for SessionProfile {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("store.name", &self.store.name)?;
        validate_non_empty_string("customer.name", &self.customer.name)?;

        if self.items.is_empty() {
            return Err(StoreError::MissingConfigError {
                field: "items".to_string(),
            });
        }

        for item in &self.items {
            validate_non_empty_string("items.name", &item.name)?;
        }

        Ok(())
    }
}
