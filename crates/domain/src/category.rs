/// Feed-screen listing categories. Exactly one is active at a time; the
/// selection is presentational and does not filter the listing store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    Apartments,
    Houses,
    Condos,
    AllProperties,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Apartments,
        Category::Houses,
        Category::Condos,
        Category::AllProperties,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Apartments => "Apartments",
            Self::Houses => "Houses",
            Self::Condos => "Condos",
            Self::AllProperties => "All Properties",
        }
    }
}
