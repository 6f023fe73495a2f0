pub mod us_data;

use chrono::{Days, Local, Months, NaiveDate};
use fake::Fake;
use fake::faker::address::en::{BuildingNumber, CityName, StreetName, StreetSuffix};
use fake::faker::name::en::LastName;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::GeneratorSettings;
use crate::domain::gender::Gender;
use crate::domain::profile::Profile;

/// Produces complete profiles. Gender is picked before the first name and
/// state before the zip code, so the dependent fields are always drawn
/// consistently. Generation never fails and always fills every field.
pub trait ProfileGenerator {
    fn generate(&mut self) -> Profile;

    /// Same draw, with the gender imposed by the caller instead of random.
    fn generate_with_gender(&mut self, gender: Gender) -> Profile;
}

pub struct FakeProfileGenerator {
    rng: StdRng,
    min_age: u32,
    max_age: u32,
}

impl FakeProfileGenerator {
    pub fn new(settings: &GeneratorSettings) -> Self {
        Self::with_rng(settings, StdRng::from_os_rng())
    }

    pub fn with_rng(settings: &GeneratorSettings, rng: StdRng) -> Self {
        Self {
            rng,
            min_age: settings.min_age,
            max_age: settings.max_age,
        }
    }

    fn draw(&mut self, gender: Gender) -> Profile {
        let first_name = us_data::first_name(gender, &mut self.rng).to_string();
        let last_name: String = LastName().fake_with_rng(&mut self.rng);

        let state = us_data::random_state(&mut self.rng);
        let city: String = CityName().fake_with_rng(&mut self.rng);
        let building: String = BuildingNumber().fake_with_rng(&mut self.rng);
        let street: String = StreetName().fake_with_rng(&mut self.rng);
        let suffix: String = StreetSuffix().fake_with_rng(&mut self.rng);
        let zip_code = state.random_zip(&mut self.rng);

        let today = Local::now().date_naive();
        let birthdate = birthdate_between(today, self.min_age, self.max_age, &mut self.rng);

        Profile {
            first_name,
            last_name,
            gender: gender.to_string(),
            state: state.name.to_string(),
            city,
            street_address: format!("{} {} {}", building, street, suffix),
            zip_code,
            birthdate: birthdate.format("%m/%d/%Y").to_string(),
        }
    }
}

impl ProfileGenerator for FakeProfileGenerator {
    fn generate(&mut self) -> Profile {
        let gender = if self.rng.random_bool(0.5) {
            Gender::Female
        } else {
            Gender::Male
        };
        self.draw(gender)
    }

    fn generate_with_gender(&mut self, gender: Gender) -> Profile {
        self.draw(gender)
    }
}

/// Uniform date in the window where the age on `today` lies in
/// `[min_age, max_age]`: oldest allowed is one day short of `max_age + 1`
/// years, youngest turned `min_age` today.
fn birthdate_between(today: NaiveDate, min_age: u32, max_age: u32, rng: &mut impl Rng) -> NaiveDate {
    let latest = today - Months::new(12 * min_age);
    let earliest = today - Months::new(12 * (max_age + 1)) + Days::new(1);
    let span = (latest - earliest).num_days().max(0) as u64;
    earliest + Days::new(rng.random_range(0..=span))
}
