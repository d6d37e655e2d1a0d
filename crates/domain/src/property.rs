use serde::{Deserialize, Serialize};

use crate::DomainError;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PropertyId(i64);

impl PropertyId {
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value <= 0 {
            return Err(DomainError::InvalidPropertyId(value));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

/// One listing as shown to the user. Never mutated after the store is seeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub title: String,
    pub price: String,
    pub beds: u32,
    pub baths: u32,
    pub sqft: u32,
    pub address: String,
    pub image_names: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl Property {
    /// Checks the record invariants. Deserialization bypasses constructors,
    /// so the seed store calls this on every record before accepting it.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.get() <= 0 {
            return Err(DomainError::InvalidPropertyId(self.id.get()));
        }
        if self.title.trim().is_empty() {
            return Err(DomainError::EmptyField("title"));
        }
        if self.price.trim().is_empty() {
            return Err(DomainError::EmptyField("price"));
        }
        if self.address.trim().is_empty() {
            return Err(DomainError::EmptyField("address"));
        }
        if !self.latitude.is_finite() || self.latitude.abs() > 90.0 {
            return Err(DomainError::InvalidCoordinate {
                field: "latitude",
                value: self.latitude,
            });
        }
        if !self.longitude.is_finite() || self.longitude.abs() > 180.0 {
            return Err(DomainError::InvalidCoordinate {
                field: "longitude",
                value: self.longitude,
            });
        }
        Ok(())
    }

    /// First image reference, if any. An empty list is legal and renders as
    /// a placeholder downstream.
    pub fn primary_image(&self) -> Option<&str> {
        self.image_names.first().map(String::as_str)
    }
}
