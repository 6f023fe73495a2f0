//! src/configuration.rs
use envconfig::Envconfig;
use serde::Deserialize;

#[derive(Deserialize, Envconfig)]
pub struct GeneratorSettings {
    /// Youngest age a generated birthdate may represent, inclusive.
    #[envconfig(from = "MIN_AGE", default = "18")]
    pub min_age: u32,
    /// Oldest age a generated birthdate may represent, inclusive.
    #[envconfig(from = "MAX_AGE", default = "80")]
    pub max_age: u32,
}

#[derive(Deserialize, Envconfig)]
pub struct Settings {
    #[envconfig(nested)]
    pub generator: GeneratorSettings,
}

pub fn get_configuration() -> Result<Settings, envconfig::Error> {
    Settings::init_from_env()
}

#[cfg(test)]
mod tests {
    use claims::assert_ok;

    use super::get_configuration;

    #[test]
    fn default_age_window_is_18_to_80() {
        let settings = assert_ok!(get_configuration());
        assert_eq!(settings.generator.min_age, 18);
        assert_eq!(settings.generator.max_age, 80);
    }
}
