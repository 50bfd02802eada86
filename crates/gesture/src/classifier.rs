//! Ordered rule matching.

use crate::features::FingerState;
use crate::rule::GestureRule;

/// Returns the first rule whose condition holds for `features`.
///
/// Order is the only tie-break. `None` means no gesture this frame.
pub fn classify<'r>(features: &FingerState, rules: &'r [GestureRule]) -> Option<&'r GestureRule> {
    rules.iter().find(|rule| rule.condition.matches(features))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{FeatureConfig, extract};
    use crate::pose::HandPose;
    use crate::rule::{Condition, GestureCode, RuleTable};
    use duel_core::Element;
    use strum::IntoEnumIterator;

    fn code_of(pose: HandPose, table: &RuleTable) -> Option<GestureCode> {
        let features = extract(&pose.landmarks(), &FeatureConfig::default());
        classify(&features, table.rules()).and_then(GestureRule::code)
    }

    #[test]
    fn canonical_poses_are_recognised() {
        let table = RuleTable::canonical();

        for code in GestureCode::iter() {
            assert_eq!(code_of(HandPose::for_code(code), &table), Some(code));
        }
    }

    #[test]
    fn hand_angle_limits_apply_per_rule() {
        let table = RuleTable::canonical();

        // Tilted past 20 degrees the action gestures stop matching.
        assert_eq!(code_of(HandPose::for_code(GestureCode::Attack).leaning(30.0), &table), None);
        assert_eq!(code_of(HandPose::for_code(GestureCode::Grass).leaning(30.0), &table), None);
        // Fire tolerates up to 45 degrees, water is unchecked.
        assert_eq!(
            code_of(HandPose::for_code(GestureCode::Fire).leaning(30.0), &table),
            Some(GestureCode::Fire)
        );
        assert_eq!(
            code_of(HandPose::for_code(GestureCode::Water).leaning(-40.0), &table),
            Some(GestureCode::Water)
        );
    }

    #[test]
    fn wide_thumb_breaks_grass() {
        let table = RuleTable::canonical();
        assert_eq!(code_of(HandPose::relaxed(), &table), None);
    }

    #[test]
    fn first_matching_rule_wins() {
        let catch_all = GestureRule::element("anything", Condition::default(), Element::Water);
        let grass = GestureRule::element(
            "grass",
            Condition::default().hand_angle_at_most(90.0),
            Element::Grass,
        );
        let rules = [catch_all, grass];

        let features = extract(&HandPose::open().landmarks(), &FeatureConfig::default());
        assert_eq!(classify(&features, &rules).map(|r| r.name.as_str()), Some("anything"));
    }

    #[test]
    fn classification_is_idempotent() {
        let table = RuleTable::canonical();
        let features = extract(
            &HandPose::for_code(GestureCode::Defend).leaning(-10.0).landmarks(),
            &FeatureConfig::default(),
        );

        let first = table.classify(&features).map(|r| r.name.clone());
        let second = table.classify(&features).map(|r| r.name.clone());
        assert_eq!(first, second);
        assert_eq!(first.as_deref(), Some("defend"));
    }

    #[test]
    fn default_features_match_only_water() {
        let table = RuleTable::canonical();
        let rule = table.classify(&Default::default());
        assert_eq!(rule.and_then(GestureRule::code), Some(GestureCode::Water));
    }
}
