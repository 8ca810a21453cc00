// Violation and risk detection over normalized text
use shared_types::Finding;
use tracing::debug;

use crate::extractors::extract_quantity;
use crate::patterns::contains_any;
use crate::rules::{RuleCheck, RuleSet, ViolationRule};

/// Evaluate every violation rule in declaration order.
///
/// Rules are independent; overlapping text can fire several of them.
pub fn check_violations(rules: &RuleSet, normalized_text: &str) -> Vec<Finding> {
    rules
        .violation_rules
        .iter()
        .filter_map(|rule| {
            let finding = evaluate(rule, normalized_text);
            if finding.is_some() {
                debug!(rule = %rule.id, contract_type = %rules.contract_type, "Rule fired");
            }
            finding
        })
        .collect()
}

fn evaluate(rule: &ViolationRule, text: &str) -> Option<Finding> {
    match &rule.check {
        RuleCheck::Matches(re) => re.is_match(text).then(|| rule.violation(rule.description.clone())),

        RuleCheck::Absent(re) => (!re.is_match(text)).then(|| rule.violation(rule.description.clone())),

        RuleCheck::Exceeds { topic, limits } => {
            let found = extract_quantity(text, *topic)?;
            let limit = limits.iter().find(|limit| limit.unit == found.unit)?;

            (found.value > f64::from(limit.max))
                .then(|| rule.violation(format!("{} (found: {})", rule.description, found)))
        }

        RuleCheck::Incomplete { trigger, required } => {
            let incomplete = trigger.is_match(text) && !required.is_match(text);
            incomplete.then(|| rule.risk(rule.description.clone()))
        }

        RuleCheck::Itemized { trigger, items } => {
            if !trigger.is_match(text) {
                return None;
            }
            let missing: Vec<&str> = items
                .iter()
                .filter(|item| !contains_any(text, &item.keywords))
                .map(|item| item.label.as_str())
                .collect();

            (!missing.is_empty())
                .then(|| rule.risk(format!("{}: {}", rule.description, missing.join(", "))))
        }
    }
}
