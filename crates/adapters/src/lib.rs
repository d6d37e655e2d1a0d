pub mod assets;
pub mod presenters;
pub mod seed;

pub use assets::{placeholder_image, FsAssetSource};
pub use presenters::{
    present_card_lines, present_compact_lines, present_property_detail, present_property_row,
};
pub use seed::SeedListingStore;
