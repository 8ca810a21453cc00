// Partnership contracts, Companies Law and Anti-Concealment Law
use shared_types::{ContractType, Importance, Severity};

use super::{clause, pattern, rule, words, ClassifierKeywords, ContractRules, RuleCheck, RuleSet};

pub struct PartnershipRules {
    rules: RuleSet,
}

impl PartnershipRules {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }
}

impl Default for PartnershipRules {
    fn default() -> Self {
        Self::new(rule_set())
    }
}

impl ContractRules for PartnershipRules {
    fn rule_set(&self) -> &RuleSet {
        &self.rules
    }
}

pub fn rule_set() -> RuleSet {
    use Importance::{Essential, Recommended};

    let required_clauses = vec![
        clause(
            "partners",
            &["partners", "first party", "second party", "الشركاء", "الطرف الأول", "الطرف الثاني"],
            "Identification of the partners",
            Essential,
            "Companies Law Article 6",
        ),
        clause(
            "company_name",
            &["company name", "trade name", "legal form", "اسم الشركة", "نوع الشركة", "الكيان القانوني"],
            "Company name and legal form",
            Essential,
            "Companies Law Article 7",
        ),
        clause(
            "capital",
            &["capital", "رأس المال", "رأسمال الشركة"],
            "Capital",
            Essential,
            "Companies Law Article 8",
        ),
        clause(
            "shares",
            &["shares", "ownership percentage", "الحصص", "توزيع الحصص", "نسب الملكية"],
            "Partner shares",
            Essential,
            "Companies Law Article 8",
        ),
        clause(
            "business_activity",
            &["business activity", "purpose of the company", "company objectives", "نشاط الشركة", "غرض الشركة", "أغراض الشركة"],
            "Business activity",
            Essential,
            "Companies Law Article 7",
        ),
        clause(
            "company_duration",
            &["company duration", "term of the company", "partnership duration", "مدة الشركة", "أجل الشركة", "مدة الشراكة"],
            "Duration of the company",
            Essential,
            "Companies Law Article 7",
        ),
        clause(
            "profit_and_loss",
            &["profit distribution", "profits and losses", "distribution of profits", "توزيع الأرباح", "توزيع الخسائر", "الأرباح والخسائر"],
            "Distribution of profits and losses",
            Essential,
            "Companies Law Article 12",
        ),
        clause(
            "management",
            &["management", "board of directors", "general manager", "إدارة الشركة", "مجلس الإدارة", "المدير العام"],
            "Management of the company",
            Recommended,
            "Companies Law Article 27",
        ),
        clause(
            "partner_authorities",
            &["partner authorities", "powers of the partners", "صلاحيات الشركاء", "سلطات الشركاء"],
            "Authorities of the partners",
            Recommended,
            "Companies Law Article 27",
        ),
        clause(
            "partner_withdrawal",
            &["withdrawal", "exit of a partner", "transfer of shares", "انسحاب شريك", "خروج شريك", "تنازل عن الحصص"],
            "Withdrawal of a partner",
            Recommended,
            "Companies Law Article 14",
        ),
        clause(
            "partner_death",
            &["death of a partner", "death of any partner", "وفاة شريك", "وفاة أحد الشركاء"],
            "Death of a partner",
            Recommended,
            "Companies Law Article 14",
        ),
        clause(
            "liquidation",
            &["liquidation", "dissolution", "تصفية الشركة", "حل الشركة", "انقضاء الشركة"],
            "Liquidation of the company",
            Recommended,
            "Companies Law Article 16",
        ),
        clause(
            "dispute_resolution",
            &["dispute", "arbitration", "حل النزاعات", "فض المنازعات", "تسوية الخلافات"],
            "Dispute resolution",
            Recommended,
            "Enforcement Law Article 2",
        ),
    ];

    let violation_rules = vec![
        rule(
            "single_partner_bears_losses",
            RuleCheck::Matches(pattern(
                r"(?:(?:partner|party).{0,50}(?:bear|bears|borne|liable for).{0,50}(?:all|entire|full).{0,50}loss)|(?:يتحمل.{0,50}(?:شريك|طرف).{0,50}(?:جميع|كل|كامل).{0,50}الخسائر)",
            )),
            Severity::High,
            "Companies Law Article 12",
            "One partner may not bear all losses or be exempted from them",
            "Distribute losses between partners in proportion to their capital shares",
        ),
        rule(
            "unilateral_liquidation",
            RuleCheck::Matches(pattern(
                r"(?:(?:partner|party).{0,50}(?:alone|unilaterally|sole discretion).{0,50}(?:liquidate|dissolve|terminate).{0,50}(?:company|partnership))|(?:(?:يحق|يجوز).{0,50}(?:شريك|طرف).{0,50}(?:منفرد|وحده).{0,50}(?:تصفية|حل|إنهاء).{0,50}الشركة)",
            )),
            Severity::High,
            "Companies Law Article 16",
            "A single partner may not liquidate the company without the other partners' consent",
            "Require the consent of all partners, or a defined majority, to liquidate the company",
        ),
        rule(
            "foreign_partner_license",
            RuleCheck::Incomplete {
                trigger: pattern(r"foreign partner|non-saudi partner|شريك أجنبي|غير سعودي"),
                required: pattern(r"investment license|misa|ترخيص استثمار|وزارة الاستثمار"),
            },
            Severity::Medium,
            "Anti-Concealment Law Article 3",
            "Foreign partner participation without a reference to an investment license",
            "Reference the foreign investment license held by the company",
        ),
    ];

    RuleSet {
        contract_type: ContractType::Partnership,
        required_clauses,
        violation_rules,
        classifier_keywords: ClassifierKeywords {
            ar: words(&[
                "عقد شراكة", "الشركاء", "رأس المال", "الحصص", "توزيع الأرباح", "الخسائر", "مدة الشراكة",
                "إدارة الشركة", "صلاحيات الشركاء", "انسحاب شريك", "تصفية الشركة", "حل النزاعات",
            ]),
            en: words(&[
                "partnership agreement", "partners", "capital", "shares", "profit distribution", "losses",
                "partnership duration", "company management", "partner authorities",
                "partner withdrawal", "company liquidation", "dispute resolution",
            ]),
        },
        provisions: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::violations::check_violations;

    fn fired(text: &str) -> Vec<String> {
        check_violations(&rule_set(), text)
            .iter()
            .map(|f| f.id().to_string())
            .collect()
    }

    #[test]
    fn test_single_partner_bears_losses() {
        assert!(fired("يتحمل الشريك الأول جميع الخسائر").contains(&"single_partner_bears_losses".to_string()));
        assert!(fired("the second partner shall bear all losses of the company")
            .contains(&"single_partner_bears_losses".to_string()));
        assert!(fired("losses are shared in proportion to capital").is_empty());
    }

    #[test]
    fn test_unilateral_liquidation() {
        assert!(fired("يحق للشريك منفردا تصفية الشركة").contains(&"unilateral_liquidation".to_string()));
        assert!(fired("the managing partner may alone dissolve the company")
            .contains(&"unilateral_liquidation".to_string()));
    }

    #[test]
    fn test_foreign_partner_without_license() {
        assert!(fired("the foreign partner contributes 40% of the capital")
            .contains(&"foreign_partner_license".to_string()));
        assert!(!fired("the foreign partner holds investment license no. 123")
            .contains(&"foreign_partner_license".to_string()));
    }
}
