// Employment contracts, Saudi Labor Law
use shared_types::{ContractType, Importance, Severity};

use super::{clause, pattern, rule, words, ClassifierKeywords, ContractRules, Limit, RuleCheck, RuleSet};
use crate::extractors::{Topic, Unit};
use crate::patterns::{keyword_alternation, NOTICE_KEYWORDS};

pub struct EmploymentRules {
    rules: RuleSet,
}

impl EmploymentRules {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }
}

impl Default for EmploymentRules {
    fn default() -> Self {
        Self::new(rule_set())
    }
}

impl ContractRules for EmploymentRules {
    fn rule_set(&self) -> &RuleSet {
        &self.rules
    }
}

pub fn rule_set() -> RuleSet {
    use Importance::{Essential, Recommended};

    let required_clauses = vec![
        clause(
            "parties",
            &["employer", "employee", "first party", "second party", "صاحب العمل", "الموظف", "الطرف الأول", "الطرف الثاني"],
            "Identification of the employer and the employee",
            Essential,
            "Labor Law Article 37",
        ),
        clause(
            "salary",
            &["salary", "wage", "compensation", "allowance", "راتب", "أجر", "بدل", "مكافأة"],
            "Salary and allowances",
            Essential,
            "Labor Law Article 61",
        ),
        clause(
            "contract_duration",
            &["contract duration", "duration of this contract", "fixed-term", "fixed term", "indefinite term", "مدة العقد", "فترة العقد", "عقد محدد المدة", "عقد غير محدد المدة"],
            "Contract duration",
            Essential,
            "Labor Law Article 55",
        ),
        clause(
            "job_title",
            &["job title", "position", "job description", "duties", "responsibilities", "المسمى الوظيفي", "الوصف الوظيفي", "المهام", "المسؤوليات"],
            "Job title and nature of the work",
            Essential,
            "Labor Law Article 51",
        ),
        clause(
            "work_location",
            &["work location", "workplace", "place of work", "مقر العمل", "موقع العمل", "مكان العمل"],
            "Place of work",
            Essential,
            "Labor Law Article 58",
        ),
        clause(
            "working_hours",
            &["working hours", "work hours", "hours of work", "ساعات العمل", "الدوام", "وقت العمل"],
            "Working hours",
            Essential,
            "Labor Law Article 98",
        ),
        clause(
            "probation",
            &["probation", "trial period", "فترة التجربة", "فترة الاختبار"],
            "Probation period",
            Essential,
            "Labor Law Article 53",
        ),
        clause(
            "leave",
            &["annual leave", "sick leave", "vacation", "إجازة سنوية", "إجازة مرضية", "إجازة"],
            "Annual and sick leave",
            Essential,
            "Labor Law Article 109",
        ),
        clause(
            "confidentiality",
            &["confidential", "non-compete", "non-disclosure", "سرية", "عدم المنافسة", "عدم الإفشاء"],
            "Confidentiality and non-compete",
            Recommended,
            "Labor Law Article 83",
        ),
        clause(
            "training",
            &["training", "development", "qualification", "تدريب", "تطوير", "تأهيل"],
            "Training and development",
            Recommended,
            "Labor Law Article 42",
        ),
        clause(
            "medical_insurance",
            &["medical insurance", "health insurance", "healthcare", "تأمين طبي", "تأمين صحي", "رعاية صحية"],
            "Medical insurance",
            Recommended,
            "Labor Law Article 144",
        ),
        clause(
            "end_of_service",
            &["end of service", "end-of-service", "gratuity", "مكافأة نهاية الخدمة", "تعويض نهاية الخدمة"],
            "End-of-service award",
            Recommended,
            "Labor Law Article 84",
        ),
    ];

    let violation_rules = vec![
        rule(
            "working_hours",
            RuleCheck::Exceeds {
                topic: Topic::WorkingHours,
                limits: vec![Limit { unit: Unit::Hour, max: 8 }],
            },
            Severity::High,
            "Labor Law Article 98",
            "Working hours exceed the legal limit of 8 hours per day",
            "Limit working hours to 8 hours per day or 48 hours per week",
        ),
        rule(
            "probation_period",
            RuleCheck::Exceeds {
                topic: Topic::Probation,
                limits: vec![
                    Limit { unit: Unit::Month, max: 3 },
                    Limit { unit: Unit::Day, max: 90 },
                ],
            },
            Severity::High,
            "Labor Law Article 53",
            "Probation period exceeds the legal limit of 90 days (3 months)",
            "Reduce the probation period to at most 90 days",
        ),
        rule(
            "termination_notice",
            RuleCheck::Matches(pattern(&format!(
                r"(?:{}).{{0,30}}?(?:less than\s*|أقل من\s*)?\b(?:15|20|25|30)\s*(?:days|day|أيام|يوماً|يوما|يوم)",
                keyword_alternation(NOTICE_KEYWORDS)
            ))),
            Severity::High,
            "Labor Law Article 75",
            "Termination notice period is shorter than the statutory minimum",
            "Set the termination notice period to at least 60 days for indefinite contracts",
        ),
        rule(
            "non_compete_duration",
            RuleCheck::Exceeds {
                topic: Topic::NonCompete,
                limits: vec![
                    Limit { unit: Unit::Year, max: 2 },
                    Limit { unit: Unit::Month, max: 24 },
                ],
            },
            Severity::Medium,
            "Labor Law Article 83",
            "Non-compete duration exceeds the legal limit of 2 years",
            "Limit the non-compete restriction to 2 years after the contract ends",
        ),
        rule(
            "non_compete_scope",
            RuleCheck::Incomplete {
                trigger: pattern(&keyword_alternation(Topic::NonCompete.keywords())),
                required: pattern(r"area|region|geographic|city|territory|منطقة|مدينة|نطاق|مكان"),
            },
            Severity::Medium,
            "Labor Law Article 83",
            "Non-compete clause does not define a geographic scope",
            "Restrict the non-compete clause to a defined place and type of work",
        ),
    ];

    RuleSet {
        contract_type: ContractType::Employment,
        required_clauses,
        violation_rules,
        classifier_keywords: ClassifierKeywords {
            ar: words(&[
                "عقد عمل", "الموظف", "صاحب العمل", "الراتب", "الأجر", "مدة العقد", "فترة التجربة",
                "ساعات العمل", "الإجازة السنوية", "التأمين الطبي", "مكافأة نهاية الخدمة", "إنهاء العقد",
                "الإشعار المسبق",
            ]),
            en: words(&[
                "employment contract", "employee", "employer", "salary", "wage", "contract duration",
                "probation period", "working hours", "annual leave", "medical insurance",
                "end of service benefits", "termination", "notice period",
            ]),
        },
        provisions: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::violations::check_violations;
    use shared_types::Finding;

    fn fired(text: &str) -> Vec<String> {
        check_violations(&rule_set(), text)
            .iter()
            .map(|f| f.id().to_string())
            .collect()
    }

    #[test]
    fn test_excessive_working_hours() {
        assert!(fired("working hours: 10 hours per day").contains(&"working_hours".to_string()));
        assert!(!fired("working hours: 6 hours per day").contains(&"working_hours".to_string()));
        assert!(!fired("working hours: 8 hours per day").contains(&"working_hours".to_string()));
    }

    #[test]
    fn test_probation_months_and_days_compared_separately() {
        assert!(fired("probation period: 4 months").contains(&"probation_period".to_string()));
        assert!(!fired("probation period: 60 days").contains(&"probation_period".to_string()));
        assert!(!fired("probation period: 3 months").contains(&"probation_period".to_string()));
        assert!(fired("probation period: 120 days").contains(&"probation_period".to_string()));
    }

    #[test]
    fn test_arabic_probation() {
        assert!(fired("فترة التجربة 6 أشهر").contains(&"probation_period".to_string()));
    }

    #[test]
    fn test_short_termination_notice() {
        assert!(fired("either party may terminate with notice of 30 days")
            .contains(&"termination_notice".to_string()));
        assert!(!fired("either party may terminate with notice of 60 days")
            .contains(&"termination_notice".to_string()));
    }

    #[test]
    fn test_non_compete_without_scope_is_a_risk() {
        let findings = check_violations(&rule_set(), "non-compete for 1 year after termination");
        let risk = findings
            .iter()
            .find(|f| f.id() == "non_compete_scope")
            .unwrap();
        assert!(matches!(risk, Finding::Risk { .. }));

        let scoped = fired("non-compete for 1 year within the riyadh region");
        assert!(!scoped.contains(&"non_compete_scope".to_string()));
        assert!(!scoped.contains(&"non_compete_duration".to_string()));
    }

    #[test]
    fn test_long_non_compete() {
        assert!(fired("non-compete period of 3 years in the city of jeddah")
            .contains(&"non_compete_duration".to_string()));
    }
}
