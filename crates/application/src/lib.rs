mod error;
mod ports;
mod service;
mod use_cases;

pub use error::ApplicationError;
pub use ports::{AssetImage, AssetSource, ListingStore};
pub use service::ApplicationService;
pub use use_cases::{
    ListListingsCommand, LoadAssetCommand, RecentlyViewedQuery, ShowPropertyCommand,
};
