use rentscout_domain::Property;

use crate::{
    ApplicationError, AssetImage, AssetSource, ListListingsCommand, ListingStore,
    LoadAssetCommand, RecentlyViewedQuery, ShowPropertyCommand,
};

pub struct ApplicationService {
    store: Box<dyn ListingStore>,
    assets: Box<dyn AssetSource>,
}

impl ApplicationService {
    pub fn new(store: Box<dyn ListingStore>, assets: Box<dyn AssetSource>) -> Self {
        Self { store, assets }
    }

    pub fn list_listings(
        &self,
        _command: ListListingsCommand,
    ) -> Result<Vec<Property>, ApplicationError> {
        self.store.list_properties()
    }

    /// No recency tracking exists; the strip mirrors the full listing.
    pub fn recently_viewed(
        &self,
        _query: RecentlyViewedQuery,
    ) -> Result<Vec<Property>, ApplicationError> {
        self.store.list_properties()
    }

    pub fn show_property(
        &self,
        command: ShowPropertyCommand,
    ) -> Result<Property, ApplicationError> {
        self.store
            .find_property(command.property_id)?
            .ok_or_else(|| {
                ApplicationError::NotFound(format!(
                    "property not found for id={}",
                    command.property_id.get()
                ))
            })
    }

    pub fn load_asset(&self, command: LoadAssetCommand) -> Result<AssetImage, ApplicationError> {
        if command.name.trim().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "asset name must not be empty".to_string(),
            ));
        }
        self.assets.load(&command.name)
    }
}

#[cfg(test)]
mod tests {
    use rentscout_domain::{Property, PropertyId};

    use super::*;

    struct FakeStore {
        properties: Vec<Property>,
    }

    impl ListingStore for FakeStore {
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

    #[derive(Default)]
    struct FakeAssets;

    impl AssetSource for FakeAssets {
        fn load(&self, _name: &str) -> Result<AssetImage, ApplicationError> {
            Ok(AssetImage::solid(2, 2, 0x336699))
        }
    }

    fn property(id: i64, title: &str) -> Property {
        Property {
            id: PropertyId::new(id).expect("positive id"),
            title: title.to_string(),
            price: "$1,850/mo".to_string(),
            beds: 2,
            baths: 2,
            sqft: 1200,
            address: "35 E University Dr, Tempe, AZ 85281".to_string(),
            image_names: vec!["Modern".to_string()],
            latitude: 33.41473,
            longitude: -111.91332,
        }
    }

    fn service_with(properties: Vec<Property>) -> ApplicationService {
        ApplicationService::new(
            Box::new(FakeStore { properties }),
            Box::<FakeAssets>::default(),
        )
    }

    #[test]
    fn list_listings_returns_store_order() {
        let service = service_with(vec![
            property(1, "Modern Downtown Apartment"),
            property(2, "Luxury High-Rise Studio"),
        ]);

        let listings = service
            .list_listings(ListListingsCommand)
            .expect("list should work");
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].id.get(), 1);
        assert_eq!(listings[1].id.get(), 2);
    }

    #[test]
    fn recently_viewed_mirrors_the_full_listing() {
        let service = service_with(vec![
            property(1, "Modern Downtown Apartment"),
            property(2, "Luxury High-Rise Studio"),
            property(3, "Spacious 3BR with View"),
        ]);

        let listings = service
            .list_listings(ListListingsCommand)
            .expect("list should work");
        let recent = service
            .recently_viewed(RecentlyViewedQuery)
            .expect("recently viewed should work");
        assert_eq!(recent, listings);
    }

    #[test]
    fn show_property_finds_by_id() {
        let service = service_with(vec![property(1, "Modern Downtown Apartment")]);

        let found = service
            .show_property(ShowPropertyCommand {
                property_id: PropertyId::new(1).expect("id"),
            })
            .expect("show should work");
        assert_eq!(found.title, "Modern Downtown Apartment");
    }

    #[test]
    fn show_missing_property_returns_not_found() {
        let service = service_with(vec![property(1, "Modern Downtown Apartment")]);

        let result = service.show_property(ShowPropertyCommand {
            property_id: PropertyId::new(99).expect("id"),
        });
        assert!(matches!(result, Err(ApplicationError::NotFound(_))));
    }

    #[test]
    fn load_asset_delegates_to_the_source() {
        let service = service_with(vec![]);

        let image = service
            .load_asset(LoadAssetCommand {
                name: "Modern".to_string(),
            })
            .expect("load should work");
        assert_eq!((image.width, image.height), (2, 2));
    }

    #[test]
    fn load_asset_rejects_blank_names() {
        let service = service_with(vec![]);

        let result = service.load_asset(LoadAssetCommand {
            name: "  ".to_string(),
        });
        assert!(matches!(result, Err(ApplicationError::InvalidInput(_))));
    }
}
