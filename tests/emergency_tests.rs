// tests for the critical symptom check

use medassist_backend::services::emergency::{EmergencyRule, detect_emergency, is_emergency};

#[test]
fn test_temperature_with_critical_reading() {
    for t in 40..=45 {
        let msg = format!("У меня температура {t} с утра");
        assert!(is_emergency(&msg), "expected emergency for {msg}");
    }
    assert_eq!(
        detect_emergency("Температура 42"),
        Some(EmergencyRule::HighTemperature)
    );
}

#[test]
fn test_temperature_without_critical_reading() {
    assert!(!is_emergency("температура высокая"));
    assert!(!is_emergency("температура 39"));
    assert!(!is_emergency("температура 38.5, болит горло"));
}

#[test]
fn test_number_without_temperature_word() {
    assert!(!is_emergency("мне 41 год"));
}

#[test]
fn test_reading_is_plain_substring() {
    // digits anywhere in the text count, even inside larger numbers
    assert!(is_emergency("температура 37, давление 140"));
}

#[test]
fn test_breathing_phrases_any_case() {
    for msg in [
        "сильная ОДЫШКА",
        "Затрудненное Дыхание ночью",
        "мне ТЯЖЕЛО ДЫШАТЬ",
    ] {
        assert_eq!(
            detect_emergency(msg),
            Some(EmergencyRule::BreathingDistress),
            "{msg}"
        );
    }
}

#[test]
fn test_pain_phrases() {
    for msg in ["Сильная боль в животе", "боль в груди", "острая боль в боку"] {
        assert_eq!(detect_emergency(msg), Some(EmergencyRule::SeverePain), "{msg}");
    }
}

#[test]
fn test_negation_is_not_understood() {
    assert!(is_emergency("нет, боль в груди не беспокоит"));
}

#[test]
fn test_combined_example() {
    assert!(is_emergency("температура 41 и сильная боль"));
}

#[test]
fn test_no_match() {
    assert!(!is_emergency("легкая усталость"));
    assert!(!is_emergency(""));
    assert!(!is_emergency("Здравствуйте"));
    assert!(!is_emergency("боль в колене"));
}
