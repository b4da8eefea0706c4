// src/services/emergency.rs

const TEMPERATURE_WORD: &str = "температура";

// 40 degrees and above
const CRITICAL_TEMPERATURES: [&str; 6] = ["40", "41", "42", "43", "44", "45"];

const BREATHING_PHRASES: [&str; 3] = ["одышка", "затрудненное дыхание", "тяжело дышать"];

const PAIN_PHRASES: [&str; 3] = ["сильная боль", "боль в груди", "острая боль"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmergencyRule {
    HighTemperature,
    BreathingDistress,
    SeverePain,
}

impl EmergencyRule {
    pub const ALL: [EmergencyRule; 3] = [
        EmergencyRule::HighTemperature,
        EmergencyRule::BreathingDistress,
        EmergencyRule::SeverePain,
    ];

    /// `msg` must already be lower-cased.
    fn matches(self, msg: &str) -> bool {
        match self {
            EmergencyRule::HighTemperature => {
                msg.contains(TEMPERATURE_WORD)
                    && CRITICAL_TEMPERATURES.iter().any(|t| msg.contains(t))
            }
            EmergencyRule::BreathingDistress => BREATHING_PHRASES.iter().any(|p| msg.contains(p)),
            EmergencyRule::SeverePain => PAIN_PHRASES.iter().any(|p| msg.contains(p)),
        }
    }
}

/// First rule that fires for `msg`, if any.
///
/// Plain substring containment: "нет боли в груди" still counts as chest pain,
/// and "температура 400" still counts as a fever.
pub fn detect_emergency(msg: &str) -> Option<EmergencyRule> {
    let msg_lower = msg.to_lowercase();

    EmergencyRule::ALL
        .into_iter()
        .find(|rule| rule.matches(&msg_lower))
}

pub fn is_emergency(msg: &str) -> bool {
    detect_emergency(msg).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_is_not_an_emergency() {
        assert!(!is_emergency(""));
    }

    #[test]
    fn rules_are_checked_in_order() {
        assert_eq!(
            detect_emergency("температура 41 и сильная боль"),
            Some(EmergencyRule::HighTemperature)
        );
        assert_eq!(
            detect_emergency("температура 37, сильная боль"),
            Some(EmergencyRule::SeverePain)
        );
    }

    #[test]
    fn uppercase_input_is_folded() {
        assert_eq!(
            detect_emergency("ОДЫШКА с утра"),
            Some(EmergencyRule::BreathingDistress)
        );
    }
}
