use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::domain::field::Field;

/// Per-field lock flags. A locked field survives the next regeneration
/// untouched. The struct has one named flag per [`Field`], so the mask can
/// never gain or lose a key.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LockMask {
    pub first_name: bool,
    pub last_name: bool,
    pub gender: bool,
    pub state: bool,
    pub city: bool,
    pub street_address: bool,
    pub zip_code: bool,
    pub birthdate: bool,
}

impl LockMask {
    pub fn is_locked(&self, field: Field) -> bool {
        match field {
            Field::FirstName => self.first_name,
            Field::LastName => self.last_name,
            Field::Gender => self.gender,
            Field::State => self.state,
            Field::City => self.city,
            Field::StreetAddress => self.street_address,
            Field::ZipCode => self.zip_code,
            Field::Birthdate => self.birthdate,
        }
    }

    /// Flips one flag and returns its new state.
    pub fn toggle(&mut self, field: Field) -> bool {
        let flag = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Gender => &mut self.gender,
            Field::State => &mut self.state,
            Field::City => &mut self.city,
            Field::StreetAddress => &mut self.street_address,
            Field::ZipCode => &mut self.zip_code,
            Field::Birthdate => &mut self.birthdate,
        };
        *flag = !*flag;
        *flag
    }

    pub fn locked_count(&self) -> usize {
        Field::iter().filter(|f| self.is_locked(*f)).count()
    }
}
