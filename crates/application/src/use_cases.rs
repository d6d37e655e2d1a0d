use rentscout_domain::PropertyId;

#[derive(Debug, Clone, Default)]
pub struct ListListingsCommand;

#[derive(Debug, Clone, Default)]
pub struct RecentlyViewedQuery;

#[derive(Debug, Clone, Copy)]
pub struct ShowPropertyCommand {
    pub property_id: PropertyId,
}

#[derive(Debug, Clone)]
pub struct LoadAssetCommand {
    pub name: String,
}
