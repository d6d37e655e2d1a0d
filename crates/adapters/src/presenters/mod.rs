use rentscout_domain::Property;

const COMPACT_ADDRESS_MAX_CHARS: usize = 24;

/// One tab-separated line per listing, for the `list` command.
pub fn present_property_row(property: &Property) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        property.id.get(),
        property.price,
        property.title,
        property.address
    )
}

/// Text block of the full card: price, title, stats, address. Pure in the
/// Property; the UI draws these lines under the photo.
pub fn present_card_lines(property: &Property) -> Vec<String> {
    vec![
        property.price.clone(),
        property.title.clone(),
        format!(
            "{} beds • {} baths • {} sq ft",
            property.beds, property.baths, property.sqft
        ),
        property.address.clone(),
    ]
}

/// Text block of the compact card: price, abbreviated stats, and the
/// address cut to a single line. Square footage is omitted.
pub fn present_compact_lines(property: &Property) -> Vec<String> {
    vec![
        property.price.clone(),
        format!("{} bd • {} ba", property.beds, property.baths),
        truncate_single_line(&property.address, COMPACT_ADDRESS_MAX_CHARS),
    ]
}

/// Multi-line projection for the `show` command.
pub fn present_property_detail(property: &Property) -> String {
    format!(
        "{}\n{}\n{}\n{} beds • {} baths • {} sq ft\nimages: {}\nlocation: {}, {}",
        property.title,
        property.price,
        property.address,
        property.beds,
        property.baths,
        property.sqft,
        property.image_names.join(", "),
        property.latitude,
        property.longitude
    )
}

fn truncate_single_line(text: &str, max_chars: usize) -> String {
    let flattened: String = text
        .chars()
        .map(|ch| if ch == '\n' || ch == '\r' { ' ' } else { ch })
        .collect();
    if flattened.chars().count() <= max_chars {
        return flattened;
    }
    let mut truncated: String = flattened.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use rentscout_domain::PropertyId;

    use super::*;

    fn sample() -> Property {
        Property {
            id: PropertyId::new(1).expect("id"),
            title: "Modern Downtown Apartment".to_string(),
            price: "$1,850/mo".to_string(),
            beds: 2,
            baths: 2,
            sqft: 1200,
            address: "35 E University Dr, Tempe, AZ 85281".to_string(),
            image_names: vec!["Modern".to_string(), "Balcony".to_string()],
            latitude: 33.41473,
            longitude: -111.91332,
        }
    }

    #[test]
    fn card_projection_is_deterministic() {
        let property = sample();
        assert_eq!(present_card_lines(&property), present_card_lines(&property));
        assert_eq!(
            present_compact_lines(&property),
            present_compact_lines(&property)
        );
    }

    #[test]
    fn full_card_lists_price_title_stats_address() {
        let lines = present_card_lines(&sample());
        assert_eq!(
            lines,
            vec![
                "$1,850/mo".to_string(),
                "Modern Downtown Apartment".to_string(),
                "2 beds • 2 baths • 1200 sq ft".to_string(),
                "35 E University Dr, Tempe, AZ 85281".to_string(),
            ]
        );
    }

    #[test]
    fn compact_card_omits_square_footage_and_truncates_the_address() {
        let lines = present_compact_lines(&sample());
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "2 bd • 2 ba");
        assert!(!lines.iter().any(|line| line.contains("sq ft")));
        assert_eq!(lines[2], "35 E University Dr, Temp...");
    }

    #[test]
    fn short_addresses_pass_through_unchanged() {
        let mut property = sample();
        property.address = "105 S Mill Ave".to_string();
        let lines = present_compact_lines(&property);
        assert_eq!(lines[2], "105 S Mill Ave");
    }

    #[test]
    fn row_is_tab_separated() {
        assert_eq!(
            present_property_row(&sample()),
            "1\t$1,850/mo\tModern Downtown Apartment\t35 E University Dr, Tempe, AZ 85281"
        );
    }

    #[test]
    fn detail_block_carries_images_and_location() {
        let block = present_property_detail(&sample());
        assert!(block.contains("images: Modern, Balcony"));
        assert!(block.contains("location: 33.41473, -111.91332"));
    }
}
