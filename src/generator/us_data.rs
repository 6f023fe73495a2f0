//! Bundled US data the generator conditions on: the state list with each
//! state's zip-code range, and gender-split first-name pools.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::domain::gender::Gender;

pub struct UsState {
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub zip_min: u32,
    pub zip_max: u32,
}

impl UsState {
    /// Draws a zip code from this state's range, zero-padded to five digits.
    pub fn random_zip(&self, rng: &mut impl Rng) -> String {
        format!("{:05}", rng.random_range(self.zip_min..=self.zip_max))
    }

    pub fn zip_in_range(&self, zip: &str) -> bool {
        zip.len() == 5
            && zip
                .parse::<u32>()
                .map(|z| (self.zip_min..=self.zip_max).contains(&z))
                .unwrap_or(false)
    }
}

pub fn random_state(rng: &mut impl Rng) -> &'static UsState {
    &STATES[rng.random_range(0..STATES.len())]
}

pub fn find_state(name: &str) -> Option<&'static UsState> {
    STATES.iter().find(|s| s.name == name)
}

pub fn first_name(gender: Gender, rng: &mut impl Rng) -> &'static str {
    let pool = match gender {
        Gender::Male => MALE_FIRST_NAMES,
        Gender::Female => FEMALE_FIRST_NAMES,
    };
    // Pools are non-empty constants.
    pool.choose(rng).copied().unwrap_or(pool[0])
}

macro_rules! us_state {
    ($name:literal, $abbr:literal, $min:literal..=$max:literal) => {
        UsState {
            name: $name,
            abbreviation: $abbr,
            zip_min: $min,
            zip_max: $max,
        }
    };
}

pub const STATES: [UsState; 50] = [
    us_state!("Alabama", "AL", 35004..=36925),
    us_state!("Alaska", "AK", 99501..=99950),
    us_state!("Arizona", "AZ", 85001..=86556),
    us_state!("Arkansas", "AR", 71601..=72959),
    us_state!("California", "CA", 90001..=96162),
    us_state!("Colorado", "CO", 80001..=81658),
    us_state!("Connecticut", "CT", 6001..=6928),
    us_state!("Delaware", "DE", 19701..=19980),
    us_state!("Florida", "FL", 32004..=34997),
    us_state!("Georgia", "GA", 30001..=31999),
    us_state!("Hawaii", "HI", 96701..=96898),
    us_state!("Idaho", "ID", 83201..=83876),
    us_state!("Illinois", "IL", 60001..=62999),
    us_state!("Indiana", "IN", 46001..=47997),
    us_state!("Iowa", "IA", 50001..=52809),
    us_state!("Kansas", "KS", 66002..=67954),
    us_state!("Kentucky", "KY", 40003..=42788),
    us_state!("Louisiana", "LA", 70001..=71497),
    us_state!("Maine", "ME", 3901..=4992),
    us_state!("Maryland", "MD", 20601..=21930),
    us_state!("Massachusetts", "MA", 1001..=2791),
    us_state!("Michigan", "MI", 48001..=49971),
    us_state!("Minnesota", "MN", 55001..=56763),
    us_state!("Mississippi", "MS", 38601..=39776),
    us_state!("Missouri", "MO", 63001..=65899),
    us_state!("Montana", "MT", 59001..=59937),
    us_state!("Nebraska", "NE", 68001..=69367),
    us_state!("Nevada", "NV", 88901..=89883),
    us_state!("New Hampshire", "NH", 3031..=3897),
    us_state!("New Jersey", "NJ", 7001..=8989),
    us_state!("New Mexico", "NM", 87001..=88441),
    us_state!("New York", "NY", 10001..=14975),
    us_state!("North Carolina", "NC", 27006..=28909),
    us_state!("North Dakota", "ND", 58001..=58856),
    us_state!("Ohio", "OH", 43001..=45999),
    us_state!("Oklahoma", "OK", 73001..=74966),
    us_state!("Oregon", "OR", 97001..=97920),
    us_state!("Pennsylvania", "PA", 15001..=19640),
    us_state!("Rhode Island", "RI", 2801..=2940),
    us_state!("South Carolina", "SC", 29001..=29948),
    us_state!("South Dakota", "SD", 57001..=57799),
    us_state!("Tennessee", "TN", 37010..=38589),
    us_state!("Texas", "TX", 75001..=79999),
    us_state!("Utah", "UT", 84001..=84784),
    us_state!("Vermont", "VT", 5001..=5907),
    us_state!("Virginia", "VA", 22001..=24658),
    us_state!("Washington", "WA", 98001..=99403),
    us_state!("West Virginia", "WV", 24701..=26886),
    us_state!("Wisconsin", "WI", 53001..=54990),
    us_state!("Wyoming", "WY", 82001..=83128),
];

pub const MALE_FIRST_NAMES: &[&str] = &[
    "James", "Michael", "Robert", "John", "David", "William", "Richard", "Joseph", "Thomas",
    "Christopher", "Charles", "Daniel", "Matthew", "Anthony", "Mark", "Donald", "Steven", "Andrew",
    "Paul", "Joshua", "Kenneth", "Kevin", "Brian", "Timothy", "Ronald", "Jason", "George",
    "Edward", "Jeffrey", "Ryan", "Jacob", "Nicholas", "Gary", "Eric", "Jonathan", "Stephen",
    "Larry", "Justin", "Scott", "Brandon",
];

pub const FEMALE_FIRST_NAMES: &[&str] = &[
    "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan", "Jessica", "Karen",
    "Sarah", "Lisa", "Nancy", "Sandra", "Betty", "Ashley", "Emily", "Kimberly", "Margaret",
    "Donna", "Michelle", "Carol", "Amanda", "Melissa", "Deborah", "Stephanie", "Rebecca", "Sharon",
    "Laura", "Cynthia", "Dorothy", "Amy", "Kathleen", "Angela", "Shirley", "Brenda", "Emma",
    "Anna", "Pamela", "Nicole", "Samantha",
];
