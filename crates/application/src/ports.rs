use rentscout_domain::{Property, PropertyId};

use crate::ApplicationError;

/// Read-only source of the fixed listing sequence. Seeded once at startup;
/// there is no create/update/delete lifecycle behind this port.
pub trait ListingStore {
    fn list_properties(&self) -> Result<Vec<Property>, ApplicationError>;

    fn find_property(&self, id: PropertyId) -> Result<Option<Property>, ApplicationError>;
}

/// Decoded RGB pixels, row-major, one `0xRRGGBB` word per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u32>,
}

impl AssetImage {
    pub fn solid(width: u32, height: u32, color: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; (width * height) as usize],
        }
    }
}

/// Resolves a property's image reference to displayable pixels. A name that
/// cannot be resolved or decoded yields a placeholder image, not an error.
pub trait AssetSource {
    fn load(&self, name: &str) -> Result<AssetImage, ApplicationError>;
}
