mod common;

mod tests {
    use claims::{assert_err, assert_ok};
    use personagen::domain::field::Field;
    use personagen::generator::us_data;
    use strum::IntoEnumIterator;

    use super::common::spawn_store;

    #[test]
    fn initialization_yields_a_full_profile_with_no_locks() {
        // Arrange
        let store = spawn_store();

        // Act
        let snapshot = store.snapshot();

        // Assert
        for field in Field::iter() {
            assert!(
                !snapshot.profile.value(field).is_empty(),
                "field {} is empty",
                field
            );
            assert!(!snapshot.locks.is_locked(field));
        }
    }

    #[test]
    fn locked_fields_are_identical_across_three_regenerations() {
        // Arrange
        let mut store = spawn_store();
        assert_ok!(store.toggle_lock_by_name("firstName"));
        assert_ok!(store.toggle_lock_by_name("city"));
        let initial = store.snapshot().profile;

        // Act
        let first = store.regenerate();
        let second = store.regenerate();
        let third = store.regenerate();

        // Assert
        for regenerated in [&first, &second, &third] {
            assert_eq!(regenerated.first_name, initial.first_name);
            assert_eq!(regenerated.city, initial.city);
        }
        let locks = store.snapshot().locks;
        assert!(locks.is_locked(Field::FirstName));
        assert!(locks.is_locked(Field::City));
        assert_eq!(locks.locked_count(), 2);
    }

    #[test]
    fn invalid_field_name_is_rejected_and_nothing_changes() {
        // Arrange
        let mut store = spawn_store();
        assert_ok!(store.toggle_lock_by_name("zipCode"));
        let before = store.snapshot();

        // Act
        let outcome = store.toggle_lock_by_name("postalCode");

        // Assert
        assert_err!(outcome);
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn locking_and_unlocking_restores_the_prior_mask() {
        // Arrange
        let mut store = spawn_store();
        let before = store.snapshot();

        // Act
        assert_ok!(store.toggle_lock_by_name("birthdate"));
        assert_ok!(store.toggle_lock_by_name("birthdate"));

        // Assert
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn locked_gender_keeps_regenerated_first_names_consistent() {
        // Arrange
        let mut store = spawn_store();
        assert_ok!(store.toggle_lock_by_name("gender"));
        let gender = store.snapshot().profile.gender;
        let pool = match gender.as_str() {
            "male" => us_data::MALE_FIRST_NAMES,
            "female" => us_data::FEMALE_FIRST_NAMES,
            other => panic!("unexpected gender {}", other),
        };

        // Act & Assert
        for _ in 0..10 {
            let regenerated = store.regenerate();
            assert_eq!(regenerated.gender, gender);
            assert!(
                pool.contains(&regenerated.first_name.as_str()),
                "{} does not match locked gender {}",
                regenerated.first_name,
                gender
            );
        }
    }

    #[test]
    fn regenerated_zip_codes_still_match_their_state() {
        // Arrange
        let mut store = spawn_store();

        // Act & Assert
        for _ in 0..20 {
            let profile = store.regenerate();
            let state = us_data::find_state(&profile.state)
                .unwrap_or_else(|| panic!("unknown state {}", profile.state));
            assert!(state.zip_in_range(&profile.zip_code));
        }
    }

    #[test]
    fn export_lists_all_eight_fields_in_display_order() {
        // Arrange
        let store = spawn_store();
        let snapshot = store.snapshot();

        // Act
        let exported = snapshot.profile.to_string();

        // Assert
        let labels: Vec<String> = exported
            .lines()
            .map(|line| {
                line.split_once(": ")
                    .unwrap_or_else(|| panic!("malformed line {:?}", line))
                    .0
                    .to_string()
            })
            .collect();
        let expected: Vec<String> = Field::EXPORT_ORDER.iter().map(|f| f.to_string()).collect();
        assert_eq!(labels, expected);
    }
}
