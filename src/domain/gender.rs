use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Gender category a profile is drawn for. First-name generation is
/// conditioned on this value.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize, Display, EnumString)]
pub enum Gender {
    #[strum(serialize = "male")]
    #[serde(rename = "male")]
    Male,
    #[strum(serialize = "female")]
    #[serde(rename = "female")]
    Female,
}

impl Gender {
    pub fn parse(s: &str) -> Result<Gender, String> {
        use std::str::FromStr;
        Gender::from_str(s).map_err(|_| format!("{} is not a valid gender.", s))
    }
}

#[cfg(test)]
mod tests {
    use claims::{assert_err, assert_ok_eq};

    use super::Gender;

    #[test]
    fn lowercase_categories_are_parsed() {
        assert_ok_eq!(Gender::parse("male"), Gender::Male);
        assert_ok_eq!(Gender::parse("female"), Gender::Female);
    }

    #[test]
    fn anything_else_is_rejected() {
        assert_err!(Gender::parse("Male"));
        assert_err!(Gender::parse(""));
        assert_err!(Gender::parse("nonbinary"));
    }

    #[test]
    fn display_matches_the_stored_string_form() {
        assert_eq!(Gender::Male.to_string(), "male");
        assert_eq!(Gender::Female.to_string(), "female");
    }
}
