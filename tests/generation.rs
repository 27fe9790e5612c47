use std::collections::HashSet;

use passgen::{generate_many, generate_password, CharacterClass, GeneratorError, PasswordPolicy};

fn every_policy() -> Vec<PasswordPolicy> {
    (1u8..16)
        .map(|mask| PasswordPolicy {
            length: 12,
            include_lowercase: mask & 1 != 0,
            include_uppercase: mask & 2 != 0,
            include_digits: mask & 4 != 0,
            include_symbols: mask & 8 != 0,
        })
        .collect()
}

#[test]
fn every_class_combination_is_covered() {
    for policy in every_policy() {
        let selected = policy.selected_classes();
        for length in [selected.len(), selected.len() + 1, 12, 64] {
            let policy = PasswordPolicy { length, ..policy.clone() };
            let password = generate_password(&policy).unwrap();

            assert_eq!(password.chars().count(), length);
            for class in CharacterClass::ALL {
                let present = password.chars().any(|c| class.contains(c));
                assert_eq!(present, policy.includes(class), "{:?} -> {}", policy, password);
            }
        }
    }
}

#[test]
fn short_passwords_stay_in_selected_classes() {
    for policy in every_policy() {
        let selected = policy.selected_classes();
        for length in 1..selected.len() {
            let policy = PasswordPolicy { length, ..policy.clone() };
            let password = generate_password(&policy).unwrap();

            assert_eq!(password.len(), length);
            assert!(password
                .chars()
                .all(|c| CharacterClass::of(c).map_or(false, |class| policy.includes(class))));
        }
    }
}

#[test]
fn two_characters_with_four_classes() {
    let policy = PasswordPolicy::with_length(2);
    let password = generate_password(&policy).unwrap();

    assert_eq!(password.len(), 2);
    let classes: HashSet<CharacterClass> = password.chars().filter_map(CharacterClass::of).collect();
    assert!(!classes.is_empty() && classes.len() <= 2);
}

#[test]
fn invalid_policies_fail() {
    let none = PasswordPolicy {
        include_uppercase: false,
        include_lowercase: false,
        include_digits: false,
        include_symbols: false,
        ..PasswordPolicy::default()
    };

    assert!(matches!(generate_password(&none), Err(GeneratorError::InvalidPolicy(_))));
    assert!(matches!(
        generate_password(&PasswordPolicy::with_length(0)),
        Err(GeneratorError::InvalidPolicy(_))
    ));
    assert!(matches!(generate_many(3, &none), Err(GeneratorError::InvalidPolicy(_))));
}

#[test]
fn batch_is_independent() {
    let policy = PasswordPolicy::with_length(24);
    let passwords = generate_many(50, &policy).unwrap();

    assert_eq!(passwords.len(), 50);
    for password in &passwords {
        assert_eq!(password.len(), 24);
        for class in policy.selected_classes() {
            assert!(password.chars().any(|c| class.contains(c)));
        }
    }
    let unique: HashSet<&String> = passwords.iter().collect();
    assert_eq!(unique.len(), passwords.len());
}
