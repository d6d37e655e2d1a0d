use std::collections::HashSet;

use rentscout_application::{ApplicationError, ListingStore};
use rentscout_domain::{Property, PropertyId};

const SEED_DOCUMENT: &str = include_str!("listings.json");

/// The fixed in-memory listing sequence. Parsed and validated once at
/// construction; read-only for the rest of the process lifetime.
#[derive(Debug, Clone)]
pub struct SeedListingStore {
    properties: Vec<Property>,
}

impl SeedListingStore {
    pub fn from_embedded() -> Result<Self, ApplicationError> {
        Self::from_json(SEED_DOCUMENT)
    }

    pub fn from_json(document: &str) -> Result<Self, ApplicationError> {
        let properties: Vec<Property> = serde_json::from_str(document)
            .map_err(|error| ApplicationError::Seed(error.to_string()))?;

        let mut seen = HashSet::new();
        for property in &properties {
            property.validate()?;
            if !seen.insert(property.id) {
                return Err(ApplicationError::Seed(format!(
                    "duplicate property id {}",
                    property.id.get()
                )));
            }
        }

        Ok(Self { properties })
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl ListingStore for SeedListingStore {
    fn list_properties(&self) -> Result<Vec<Property>, ApplicationError> {
        Ok(self.properties.clone())
    }

    fn find_property(&self, id: PropertyId) -> Result<Option<Property>, ApplicationError> {
        Ok(self
            .properties
            .iter()
            .find(|property| property.id == id)
            .cloned())
    }
}
