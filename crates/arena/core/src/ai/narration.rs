//! Human-readable battle narration derived from AI decisions.

use super::policy::{CombatAction, Decision, StyleAdjustment, StyleReason};

/// Adverb describing how well a move was executed.
pub fn execution_adverb(effectiveness: f64) -> &'static str {
    if effectiveness > 0.8 {
        "masterfully"
    } else if effectiveness > 0.6 {
        "skillfully"
    } else if effectiveness > 0.4 {
        "adequately"
    } else {
        "poorly"
    }
}

fn action_phrase(action: CombatAction) -> &'static str {
    match action {
        CombatAction::Attack => "a standard attack",
        CombatAction::Special => "a special attack",
        CombatAction::Counter => "a counter attack",
        CombatAction::Evade => "an evasive maneuver",
    }
}

fn reason_phrase(reason: StyleReason) -> &'static str {
    match reason {
        StyleReason::ProtectHealth => "to protect what health remains",
        StyleReason::ExploitOpening => "to punish the opening",
        StyleReason::SustainCombo => "to keep the combo going",
    }
}

pub fn style_line(name: &str, adjustment: &StyleAdjustment) -> String {
    format!(
        "{name} switches to {} style {}!",
        adjustment.style,
        reason_phrase(adjustment.reason)
    )
}

pub fn action_line(name: &str, action: CombatAction, effectiveness: f64) -> String {
    format!(
        "{name} {} performs {}!",
        execution_adverb(effectiveness),
        action_phrase(action)
    )
}

impl Decision {
    /// One line per decision step: the style change (if any), then the action.
    pub fn narrate(&self, name: &str) -> Vec<String> {
        let mut lines = Vec::with_capacity(2);
        if let Some(adjustment) = &self.style_adjustment {
            lines.push(style_line(name, adjustment));
        }
        lines.push(action_line(name, self.action, self.effectiveness));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::CombatStyle;

    #[test]
    fn adverb_bands() {
        assert_eq!(execution_adverb(0.95), "masterfully");
        assert_eq!(execution_adverb(0.8), "skillfully");
        assert_eq!(execution_adverb(0.5), "adequately");
        assert_eq!(execution_adverb(0.4), "poorly");
    }

    #[test]
    fn narration_lists_style_then_action() {
        let decision = Decision {
            action: CombatAction::Counter,
            style_adjustment: Some(StyleAdjustment {
                style: CombatStyle::Aggressive,
                reason: StyleReason::ExploitOpening,
            }),
            effectiveness: 0.7,
        };
        let lines = decision.narrate("ACE");
        assert_eq!(
            lines,
            vec![
                "ACE switches to aggressive style to punish the opening!".to_string(),
                "ACE skillfully performs a counter attack!".to_string(),
            ]
        );
    }
}
