// Residential and commercial leases, Ejar regulations
use shared_types::{ContractType, Importance, Severity};

use super::{clause, pattern, rule, words, ClassifierKeywords, ContractRules, Limit, RuleCheck, RuleSet};
use crate::extractors::{Topic, Unit};
use crate::patterns::{keyword_alternation, NOTICE_KEYWORDS, TERMINATION_KEYWORDS};

pub struct RentalRules {
    rules: RuleSet,
}

impl RentalRules {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }
}

impl Default for RentalRules {
    fn default() -> Self {
        Self::new(rule_set())
    }
}

impl ContractRules for RentalRules {
    fn rule_set(&self) -> &RuleSet {
        &self.rules
    }
}

pub fn rule_set() -> RuleSet {
    use Importance::{Essential, Recommended};

    let notice = keyword_alternation(NOTICE_KEYWORDS);

    let required_clauses = vec![
        clause(
            "landlord_details",
            &["landlord", "lessor", "المؤجر", "صاحب العقار"],
            "Landlord details",
            Essential,
            "Ejar Regulations Article 2",
        ),
        clause(
            "tenant_details",
            &["tenant", "lessee", "المستأجر", "المستفيد"],
            "Tenant details",
            Essential,
            "Ejar Regulations Article 2",
        ),
        clause(
            "property_description",
            &["property description", "premises", "leased property", "العين المؤجرة", "المأجور", "وصف العقار", "العقار"],
            "Description of the leased property",
            Essential,
            "Ejar Regulations Article 3",
        ),
        clause(
            "rental_period",
            &["rental period", "lease term", "term of the lease", "commencement date", "مدة الإيجار", "فترة الإيجار", "تاريخ بداية العقد", "تاريخ نهاية العقد"],
            "Rental period",
            Essential,
            "Ejar Regulations Article 3",
        ),
        clause(
            "rent_amount",
            &["rent amount", "rental value", "annual rent", "monthly rent", "قيمة الإيجار", "مبلغ الإيجار", "الأجرة", "بدل الإيجار"],
            "Rent amount",
            Essential,
            "Ejar Regulations Article 4",
        ),
        clause(
            "payment_terms",
            &["payment terms", "payment method", "installments", "شروط الدفع", "طريقة السداد", "دفعات", "أقساط"],
            "Payment terms",
            Essential,
            "Ejar Regulations Article 4",
        ),
        clause(
            "landlord_obligations",
            &["landlord obligations", "landlord shall", "obligations of the landlord", "التزامات المؤجر", "واجبات المؤجر"],
            "Landlord obligations",
            Essential,
            "Ejar Regulations Article 5",
        ),
        clause(
            "tenant_obligations",
            &["tenant obligations", "tenant shall", "obligations of the tenant", "التزامات المستأجر", "واجبات المستأجر"],
            "Tenant obligations",
            Essential,
            "Ejar Regulations Article 6",
        ),
        clause(
            "maintenance",
            &["maintenance", "repair", "صيانة", "إصلاح", "ترميم"],
            "Maintenance",
            Recommended,
            "Ejar Regulations Article 5",
        ),
        clause(
            "insurance",
            &["insurance", "security deposit", "تأمين", "ضمان"],
            "Insurance and security deposit",
            Recommended,
            "Ejar Regulations Article 6",
        ),
        clause(
            "termination",
            &["termination", "terminate", "إنهاء العقد", "فسخ العقد", "إلغاء العقد"],
            "Termination of the lease",
            Recommended,
            "Ejar Regulations Article 7",
        ),
        clause(
            "renewal",
            &["renewal", "renew", "extension", "تجديد العقد", "تمديد العقد"],
            "Renewal of the lease",
            Recommended,
            "Ejar Regulations Article 7",
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
            "ejar_registration",
            RuleCheck::Absent(pattern(r"ejar|إيجار")),
            Severity::High,
            "Ejar Regulations",
            "No mention of Ejar registration, which is mandatory for all rental contracts",
            "Register the contract on the Ejar platform and reference the registration",
        ),
        rule(
            "security_deposit",
            RuleCheck::Exceeds {
                topic: Topic::SecurityDeposit,
                limits: vec![Limit { unit: Unit::Percent, max: 10 }],
            },
            Severity::Medium,
            "Ejar Regulations",
            "Security deposit exceeds the limit of 10% of annual rent",
            "Reduce the security deposit to at most 10% of the annual rent",
        ),
        rule(
            "rent_increase_without_notice",
            RuleCheck::Matches(pattern(&format!(
                r"(?:landlord.{{0,50}}(?:increase|raise).{{0,50}}rent.{{0,50}}without.{{0,50}}(?:{n}))|(?:(?:يحق|يجوز).{{0,50}}مؤجر.{{0,50}}(?:زيادة|رفع).{{0,50}}(?:الإيجار|الأجرة).{{0,50}}(?:دون|بدون).{{0,50}}(?:{n}))",
                n = notice
            ))),
            Severity::High,
            "Ejar Regulations Article 4",
            "The landlord may not raise the rent during the term without prior agreement",
            "Require prior written agreement for any rent increase",
        ),
        rule(
            "eviction_without_notice",
            RuleCheck::Matches(pattern(&format!(
                r"(?:landlord.{{0,50}}(?:{t}).{{0,50}}tenant.{{0,50}}without.{{0,50}}(?:{n}))|(?:(?:يحق|يجوز).{{0,50}}مؤجر.{{0,50}}(?:إخلاء|إخراج|طرد).{{0,50}}مستأجر.{{0,50}}(?:دون|بدون).{{0,50}}(?:{n}))",
                t = keyword_alternation(TERMINATION_KEYWORDS),
                n = notice
            ))),
            Severity::High,
            "Ejar Regulations Article 7",
            "The landlord may not evict the tenant without prior notice and a lawful reason",
            "Require prior notice and a lawful reason before eviction",
        ),
        rule(
            "auto_renewal_notice",
            RuleCheck::Incomplete {
                trigger: pattern(r"automatic(?:ally)? renew|auto-renew|تجديد تلقائي|يتجدد تلقائيا"),
                required: pattern(&notice),
            },
            Severity::Medium,
            "Ejar Regulations",
            "Automatic renewal clause does not specify a notice period for non-renewal",
            "Specify the notice period either party must give to prevent renewal",
        ),
    ];

    RuleSet {
        contract_type: ContractType::Rental,
        required_clauses,
        violation_rules,
        classifier_keywords: ClassifierKeywords {
            ar: words(&[
                "عقد إيجار", "المؤجر", "المستأجر", "العين المؤجرة", "مدة الإيجار", "قيمة الإيجار",
                "طريقة السداد", "التزامات المؤجر", "التزامات المستأجر", "الصيانة", "التأمين",
                "إنهاء العقد", "تجديد العقد",
            ]),
            en: words(&[
                "lease agreement", "rental contract", "landlord", "tenant", "leased property",
                "rental period", "rent value", "payment method", "landlord obligations",
                "tenant obligations", "maintenance", "insurance", "termination", "renewal",
            ]),
        },
        provisions: Vec::new(),
    }
}
