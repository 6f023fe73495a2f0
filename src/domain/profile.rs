use serde::{Deserialize, Serialize};

use crate::domain::field::Field;

/// One fully populated fictitious person. Every field is a formatted string;
/// birthdate and zipCode are kept as the strings the generator rendered.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub state: String,
    pub city: String,
    pub street_address: String,
    pub zip_code: String,
    pub birthdate: String,
}

impl Profile {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Gender => &self.gender,
            Field::State => &self.state,
            Field::City => &self.city,
            Field::StreetAddress => &self.street_address,
            Field::ZipCode => &self.zip_code,
            Field::Birthdate => &self.birthdate,
        }
    }

    pub(crate) fn set_value(&mut self, field: Field, value: String) {
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Gender => self.gender = value,
            Field::State => self.state = value,
            Field::City => self.city = value,
            Field::StreetAddress => self.street_address = value,
            Field::ZipCode => self.zip_code = value,
            Field::Birthdate => self.birthdate = value,
        }
    }
}

/// Export format: one `name: value` line per field, in display order.
impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut fields = Field::EXPORT_ORDER.iter().peekable();
        while let Some(field) = fields.next() {
            write!(f, "{}: {}", field, self.value(*field))?;
            if fields.peek().is_some() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
