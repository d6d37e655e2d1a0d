use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    InvalidPropertyId(i64),
    EmptyField(&'static str),
    InvalidCoordinate { field: &'static str, value: f64 },
    PriceBoundNotFinite(&'static str),
    PriceBoundOutOfRange { field: &'static str, value: f32 },
    RoomMinimumOutOfRange { field: &'static str, value: u32 },
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPropertyId(value) => {
                write!(f, "property id must be positive, got {value}")
            }
            Self::EmptyField(name) => write!(f, "property {name} must not be empty"),
            Self::InvalidCoordinate { field, value } => {
                write!(f, "{field} {value} is not a valid geographic coordinate")
            }
            Self::PriceBoundNotFinite(name) => write!(f, "price bound {name} must be finite"),
            Self::PriceBoundOutOfRange { field, value } => {
                write!(f, "price bound {field} {value} is outside the allowed range")
            }
            Self::RoomMinimumOutOfRange { field, value } => {
                write!(f, "{field} minimum {value} is outside the allowed range")
            }
        }
    }
}

impl std::error::Error for DomainError {}
