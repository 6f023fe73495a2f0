use std::str::FromStr;

use strum_macros::{Display, EnumIter, EnumString};

use crate::error::field::InvalidFieldError;

/// The eight attributes of a generated profile. The string form of each
/// variant is the camelCase name the presentation layer uses for lock
/// toggles and export labels.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Display, EnumIter, EnumString)]
pub enum Field {
    #[strum(serialize = "firstName")]
    FirstName,
    #[strum(serialize = "lastName")]
    LastName,
    #[strum(serialize = "gender")]
    Gender,
    #[strum(serialize = "state")]
    State,
    #[strum(serialize = "city")]
    City,
    #[strum(serialize = "streetAddress")]
    StreetAddress,
    #[strum(serialize = "zipCode")]
    ZipCode,
    #[strum(serialize = "birthdate")]
    Birthdate,
}

impl Field {
    pub const COUNT: usize = 8;

    /// Fields in the order they are displayed, and therefore exported.
    pub const EXPORT_ORDER: [Field; Field::COUNT] = [
        Field::FirstName,
        Field::LastName,
        Field::Gender,
        Field::StreetAddress,
        Field::City,
        Field::State,
        Field::ZipCode,
        Field::Birthdate,
    ];

    pub fn parse(s: &str) -> Result<Field, InvalidFieldError> {
        Field::from_str(s).map_err(|_| InvalidFieldError(s.to_string()))
    }
}
