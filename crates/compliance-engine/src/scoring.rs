// Compliance scoring
use shared_types::{Finding, Severity};

pub const MAX_SCORE: u8 = 100;

/// Points deducted for one finding
pub fn penalty(finding: &Finding) -> u32 {
    match finding {
        Finding::MissingClause { risk_level, .. } => match risk_level {
            Severity::High => 10,
            Severity::Medium => 5,
        },
        Finding::Violation { severity, .. } => match severity {
            Severity::High => 15,
            Severity::Medium => 5,
        },
        Finding::Risk { .. } => 3,
    }
}

/// Flat per-finding deduction from 100, clamped to `0..=100`.
///
/// The score depends only on the findings, not on how many rules the
/// contract type has, so findings from several checkers can be merged
/// before scoring.
pub fn compliance_score(findings: &[Finding]) -> u8 {
    let deducted: u64 = findings.iter().map(|f| u64::from(penalty(f))).sum();
    let score = u64::from(MAX_SCORE).saturating_sub(deducted);
    // saturating_sub keeps this within 0..=100
    score as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(risk_level: Severity) -> Finding {
        Finding::MissingClause {
            clause_id: "salary".to_string(),
            description: "Salary".to_string(),
            risk_level,
        }
    }

    fn violation(severity: Severity) -> Finding {
        Finding::Violation {
            rule_id: "working_hours".to_string(),
            description: "Too many hours".to_string(),
            severity,
            reference: "Labor Law Article 98".to_string(),
            recommendation: "Reduce hours".to_string(),
        }
    }

    fn risk() -> Finding {
        Finding::Risk {
            rule_id: "auto_renewal_notice".to_string(),
            description: "No notice period".to_string(),
            severity: Severity::Medium,
            reference: "Ejar Regulations".to_string(),
            recommendation: "Add notice".to_string(),
        }
    }

    #[test]
    fn test_no_findings_is_full_score() {
        assert_eq!(compliance_score(&[]), 100);
    }

    #[test]
    fn test_penalty_schedule() {
        assert_eq!(compliance_score(&[missing(Severity::High)]), 90);
        assert_eq!(compliance_score(&[missing(Severity::Medium)]), 95);
        assert_eq!(compliance_score(&[violation(Severity::High)]), 85);
        assert_eq!(compliance_score(&[violation(Severity::Medium)]), 95);
        assert_eq!(compliance_score(&[risk()]), 97);
        assert_eq!(
            compliance_score(&[missing(Severity::High), violation(Severity::High), risk()]),
            72
        );
    }

    #[test]
    fn test_score_clamps_at_zero() {
        let findings = vec![violation(Severity::High); 20];
        assert_eq!(compliance_score(&findings), 0);
    }
}
