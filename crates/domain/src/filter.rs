use crate::DomainError;

pub const PRICE_RANGE_MIN: f32 = 500.0;
pub const PRICE_RANGE_MAX: f32 = 5000.0;
pub const ROOM_MINIMUM_MAX: u32 = 4;

/// Filter-sheet state. Screen-scoped and transient: created when the sheet
/// opens, discarded when it closes. The selection is never joined against
/// the listing store. Lower and upper price are clamped independently; no
/// ordering between them is enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterSelection {
    pub lower_price: f32,
    pub upper_price: f32,
    pub min_beds: u32,
    pub min_baths: u32,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            lower_price: PRICE_RANGE_MIN,
            upper_price: PRICE_RANGE_MAX,
            min_beds: 0,
            min_baths: 0,
        }
    }
}

impl FilterSelection {
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.lower_price.is_finite() {
            return Err(DomainError::PriceBoundNotFinite("lower_price"));
        }
        if !self.upper_price.is_finite() {
            return Err(DomainError::PriceBoundNotFinite("upper_price"));
        }
        if !(PRICE_RANGE_MIN..=PRICE_RANGE_MAX).contains(&self.lower_price) {
            return Err(DomainError::PriceBoundOutOfRange {
                field: "lower_price",
                value: self.lower_price,
            });
        }
        if !(PRICE_RANGE_MIN..=PRICE_RANGE_MAX).contains(&self.upper_price) {
            return Err(DomainError::PriceBoundOutOfRange {
                field: "upper_price",
                value: self.upper_price,
            });
        }
        if self.min_beds > ROOM_MINIMUM_MAX {
            return Err(DomainError::RoomMinimumOutOfRange {
                field: "beds",
                value: self.min_beds,
            });
        }
        if self.min_baths > ROOM_MINIMUM_MAX {
            return Err(DomainError::RoomMinimumOutOfRange {
                field: "baths",
                value: self.min_baths,
            });
        }
        Ok(())
    }

    /// Caption for a room-minimum picker segment: 0 reads "Any", others "N+".
    pub fn room_minimum_label(value: u32) -> String {
        if value == 0 {
            "Any".to_string()
        } else {
            format!("{value}+")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_span_the_whole_price_range_with_no_minimums() {
        let selection = FilterSelection::default();
        assert_eq!(selection.lower_price, PRICE_RANGE_MIN);
        assert_eq!(selection.upper_price, PRICE_RANGE_MAX);
        assert_eq!(selection.min_beds, 0);
        assert_eq!(selection.min_baths, 0);
        assert!(selection.validate().is_ok());
    }

    #[test]
    fn validate_rejects_non_finite_and_out_of_range_bounds() {
        let selection = FilterSelection {
            lower_price: f32::NAN,
            ..FilterSelection::default()
        };
        assert!(matches!(
            selection.validate(),
            Err(DomainError::PriceBoundNotFinite("lower_price"))
        ));

        let selection = FilterSelection {
            upper_price: 9000.0,
            ..FilterSelection::default()
        };
        assert!(matches!(
            selection.validate(),
            Err(DomainError::PriceBoundOutOfRange {
                field: "upper_price",
                ..
            })
        ));
    }

    #[test]
    fn lower_bound_above_upper_bound_is_accepted() {
        // The sheet imposes no ordering between the two sliders.
        let selection = FilterSelection {
            lower_price: 4000.0,
            upper_price: 1000.0,
            ..FilterSelection::default()
        };
        assert!(selection.validate().is_ok());
    }

    #[test]
    fn validate_rejects_room_minimums_past_the_picker_range() {
        let selection = FilterSelection {
            min_beds: ROOM_MINIMUM_MAX + 1,
            ..FilterSelection::default()
        };
        assert!(matches!(
            selection.validate(),
            Err(DomainError::RoomMinimumOutOfRange { field: "beds", .. })
        ));
    }

    #[test]
    fn room_minimum_labels_read_any_then_n_plus() {
        assert_eq!(FilterSelection::room_minimum_label(0), "Any");
        assert_eq!(FilterSelection::room_minimum_label(3), "3+");
    }
}
