use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::finding::Finding;
use crate::types::{ContractType, Language, Severity};

/// Qualitative band for a compliance score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceLevel {
    Excellent,
    VeryGood,
    Good,
    Average,
    Poor,
}

impl ComplianceLevel {
    pub const ALL: [ComplianceLevel; 5] = [
        ComplianceLevel::Excellent,
        ComplianceLevel::VeryGood,
        ComplianceLevel::Good,
        ComplianceLevel::Average,
        ComplianceLevel::Poor,
    ];

    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => ComplianceLevel::Excellent,
            80..=89 => ComplianceLevel::VeryGood,
            70..=79 => ComplianceLevel::Good,
            60..=69 => ComplianceLevel::Average,
            _ => ComplianceLevel::Poor,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            ComplianceLevel::Excellent => "excellent",
            ComplianceLevel::VeryGood => "very_good",
            ComplianceLevel::Good => "good",
            ComplianceLevel::Average => "average",
            ComplianceLevel::Poor => "poor",
        }
    }

    pub fn score_range(&self) -> &'static str {
        match self {
            ComplianceLevel::Excellent => "90-100",
            ComplianceLevel::VeryGood => "80-89",
            ComplianceLevel::Good => "70-79",
            ComplianceLevel::Average => "60-69",
            ComplianceLevel::Poor => "0-59",
        }
    }

    pub fn name_en(&self) -> &'static str {
        match self {
            ComplianceLevel::Excellent => "Excellent",
            ComplianceLevel::VeryGood => "Very Good",
            ComplianceLevel::Good => "Good",
            ComplianceLevel::Average => "Average",
            ComplianceLevel::Poor => "Poor",
        }
    }

    pub fn name_ar(&self) -> &'static str {
        match self {
            ComplianceLevel::Excellent => "ممتاز",
            ComplianceLevel::VeryGood => "جيد جداً",
            ComplianceLevel::Good => "جيد",
            ComplianceLevel::Average => "متوسط",
            ComplianceLevel::Poor => "ضعيف",
        }
    }
}

/// An essential clause that was found in the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, serde::Deserialize)]
pub struct CompliantClause {
    pub clause_id: String,
    pub description: String,
    pub reference: String,
}

/// Result of one analysis call. Fields are read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplianceVerdict {
    contract_type: ContractType,
    language: Language,
    analysis_timestamp: DateTime<Utc>,
    findings: Vec<Finding>,
    compliance_score: u8,
    recommendations: Vec<String>,
    compliant_clauses: Vec<CompliantClause>,
}

impl ComplianceVerdict {
    /// Assemble a verdict. Recommendations are derived from `findings` in
    /// order and the score is capped at 100.
    pub fn new(
        contract_type: ContractType,
        language: Language,
        analysis_timestamp: DateTime<Utc>,
        findings: Vec<Finding>,
        compliance_score: u8,
        compliant_clauses: Vec<CompliantClause>,
    ) -> Self {
        let recommendations = findings.iter().map(Finding::recommendation).collect();
        Self {
            contract_type,
            language,
            analysis_timestamp,
            findings,
            compliance_score: compliance_score.min(100),
            recommendations,
            compliant_clauses,
        }
    }

    pub fn contract_type(&self) -> ContractType {
        self.contract_type
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn analysis_timestamp(&self) -> DateTime<Utc> {
        self.analysis_timestamp
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn compliance_score(&self) -> u8 {
        self.compliance_score
    }

    pub fn compliance_level(&self) -> ComplianceLevel {
        ComplianceLevel::from_score(self.compliance_score)
    }

    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    pub fn compliant_clauses(&self) -> &[CompliantClause] {
        &self.compliant_clauses
    }

    pub fn missing_clauses(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_missing_clause())
    }

    pub fn violations(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_violation())
    }

    pub fn risks(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_risk())
    }
}

#[derive(Serialize)]
struct MissingClauseJson<'a> {
    clause: &'a str,
    description: &'a str,
    risk_level: Severity,
}

#[derive(Serialize)]
struct IssueJson<'a> {
    rule: &'a str,
    description: &'a str,
    severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference: Option<&'a str>,
}

#[derive(Serialize)]
struct VerdictJson<'a> {
    contract_type: ContractType,
    language: Language,
    analysis_date: String,
    compliance_score: u8,
    compliance_level: ComplianceLevel,
    violations: Vec<IssueJson<'a>>,
    missing_clauses: Vec<MissingClauseJson<'a>>,
    risks: Vec<IssueJson<'a>>,
    recommendations: &'a [String],
    compliant_clauses: &'a [CompliantClause],
}

fn issue_json(finding: &Finding) -> IssueJson<'_> {
    IssueJson {
        rule: finding.id(),
        description: finding.description(),
        severity: finding.severity(),
        reference: finding.reference(),
    }
}

impl Serialize for ComplianceVerdict {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        VerdictJson {
            contract_type: self.contract_type,
            language: self.language,
            analysis_date: self.analysis_timestamp.to_rfc3339(),
            compliance_score: self.compliance_score,
            compliance_level: self.compliance_level(),
            violations: self.violations().map(issue_json).collect(),
            missing_clauses: self
                .missing_clauses()
                .map(|f| MissingClauseJson {
                    clause: f.id(),
                    description: f.description(),
                    risk_level: f.severity(),
                })
                .collect(),
            risks: self.risks().map(issue_json).collect(),
            recommendations: &self.recommendations,
            compliant_clauses: &self.compliant_clauses,
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use chrono::TimeZone;

    fn sample_verdict() -> ComplianceVerdict {
        let findings = vec![
            Finding::MissingClause {
                clause_id: "salary".to_string(),
                description: "Salary and allowances".to_string(),
                risk_level: Severity::High,
            },
            Finding::Violation {
                rule_id: "working_hours".to_string(),
                description: "Working hours exceed 8 hours per day".to_string(),
                severity: Severity::High,
                reference: "Labor Law Article 98".to_string(),
                recommendation: "Limit daily working hours to 8".to_string(),
            },
            Finding::Risk {
                rule_id: "non_compete_scope".to_string(),
                description: "Non-compete has no geographic scope".to_string(),
                severity: Severity::Medium,
                reference: "Labor Law Article 83".to_string(),
                recommendation: "Limit the non-compete to a defined area".to_string(),
            },
        ];
        ComplianceVerdict::new(
            ContractType::Employment,
            Language::En,
            Utc.with_ymd_and_hms(2025, 4, 28, 4, 0, 0).unwrap(),
            findings,
            72,
            Vec::new(),
        )
    }

    #[test]
    fn test_recommendations_follow_findings_in_order() {
        let verdict = sample_verdict();
        assert_eq!(
            verdict.recommendations(),
            &[
                "Add a clause covering Salary and allowances to the contract".to_string(),
                "Limit daily working hours to 8".to_string(),
                "Limit the non-compete to a defined area".to_string(),
            ]
        );
    }

    #[test]
    fn test_score_is_capped() {
        let verdict = ComplianceVerdict::new(
            ContractType::Sales,
            Language::Ar,
            Utc::now(),
            Vec::new(),
            250,
            Vec::new(),
        );
        assert_eq!(verdict.compliance_score(), 100);
    }

    #[test]
    fn test_verdict_json_shape() {
        let json = serde_json::to_value(sample_verdict()).unwrap();
        assert_eq!(json["contract_type"], "employment");
        assert_eq!(json["compliance_score"], 72);
        assert_eq!(json["compliance_level"], "good");
        assert_eq!(json["analysis_date"], "2025-04-28T04:00:00+00:00");
        assert_eq!(json["missing_clauses"][0]["clause"], "salary");
        assert_eq!(json["missing_clauses"][0]["risk_level"], "high");
        assert_eq!(json["violations"][0]["reference"], "Labor Law Article 98");
        assert_eq!(json["risks"][0]["severity"], "medium");
        assert_eq!(json["recommendations"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_compliance_level_bands() {
        assert_eq!(ComplianceLevel::from_score(100), ComplianceLevel::Excellent);
        assert_eq!(ComplianceLevel::from_score(90), ComplianceLevel::Excellent);
        assert_eq!(ComplianceLevel::from_score(89), ComplianceLevel::VeryGood);
        assert_eq!(ComplianceLevel::from_score(70), ComplianceLevel::Good);
        assert_eq!(ComplianceLevel::from_score(60), ComplianceLevel::Average);
        assert_eq!(ComplianceLevel::from_score(59), ComplianceLevel::Poor);
        assert_eq!(ComplianceLevel::from_score(0), ComplianceLevel::Poor);
    }
}
