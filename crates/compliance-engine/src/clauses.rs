// Clause presence checks
use shared_types::{CompliantClause, Finding, Importance};

use crate::rules::RuleSet;

/// One `MissingClause` per required clause with no keyword hit, in
/// declaration order
pub fn check_missing_clauses(rules: &RuleSet, normalized_text: &str) -> Vec<Finding> {
    rules
        .required_clauses
        .iter()
        .filter(|clause| !clause.is_present(normalized_text))
        .map(|clause| Finding::MissingClause {
            clause_id: clause.id.clone(),
            description: clause.description.clone(),
            risk_level: clause.importance.risk_level(),
        })
        .collect()
}

/// Essential clauses that are present, in declaration order
pub fn compliant_clauses(rules: &RuleSet, normalized_text: &str) -> Vec<CompliantClause> {
    rules
        .required_clauses
        .iter()
        .filter(|clause| clause.importance == Importance::Essential)
        .filter(|clause| clause.is_present(normalized_text))
        .map(|clause| CompliantClause {
            clause_id: clause.id.clone(),
            description: clause.description.clone(),
            reference: clause.reference.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{clause, RuleSet};
    use pretty_assertions::assert_eq;
    use shared_types::{ContractType, Severity};

    fn rules() -> RuleSet {
        let mut rules = RuleSet::empty(ContractType::Employment);
        rules.required_clauses = vec![
            clause("salary", &["salary", "راتب"], "Salary", Importance::Essential, "Art 61"),
            clause("training", &["training"], "Training", Importance::Recommended, "Art 42"),
            clause("leave", &["annual leave", "إجازة"], "Leave", Importance::Essential, "Art 109"),
        ];
        rules
    }

    #[test]
    fn test_missing_clauses_follow_declaration_order() {
        let findings = check_missing_clauses(&rules(), "nothing here");
        let ids: Vec<&str> = findings.iter().map(|f| f.id()).collect();
        assert_eq!(ids, vec!["salary", "training", "leave"]);
        assert_eq!(findings[0].severity(), Severity::High);
        assert_eq!(findings[1].severity(), Severity::Medium);
    }

    #[test]
    fn test_any_variant_marks_clause_present() {
        let findings = check_missing_clauses(&rules(), "الراتب الشهري 5000 و إجازة سنوية");
        let ids: Vec<&str> = findings.iter().map(|f| f.id()).collect();
        assert_eq!(ids, vec!["training"]);
    }

    #[test]
    fn test_compliant_clauses_are_present_essentials_only() {
        let compliant = compliant_clauses(&rules(), "salary and training");
        assert_eq!(
            compliant,
            vec![CompliantClause {
                clause_id: "salary".to_string(),
                description: "Salary".to_string(),
                reference: "Art 61".to_string(),
            }]
        );
    }

    #[test]
    fn test_empty_rule_set_has_no_missing_clauses() {
        let rules = RuleSet::empty(ContractType::Rental);
        assert!(check_missing_clauses(&rules, "").is_empty());
    }
}
