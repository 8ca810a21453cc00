// Sales contracts, VAT and E-Commerce regulations
use shared_types::{ContractType, Importance, Severity};

use super::{clause, item, pattern, rule, words, ClassifierKeywords, ContractRules, RuleCheck, RuleSet};
use crate::patterns::{keyword_alternation, WAIVER_KEYWORDS};

pub struct SalesRules {
    rules: RuleSet,
}

impl SalesRules {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }
}

impl Default for SalesRules {
    fn default() -> Self {
        Self::new(rule_set())
    }
}

impl ContractRules for SalesRules {
    fn rule_set(&self) -> &RuleSet {
        &self.rules
    }
}

pub fn rule_set() -> RuleSet {
    use Importance::{Essential, Recommended};

    let required_clauses = vec![
        clause(
            "seller_details",
            &["seller", "vendor", "البائع", "المورد"],
            "Seller details",
            Essential,
            "E-Commerce Law Article 6",
        ),
        clause(
            "buyer_details",
            &["buyer", "purchaser", "المشتري", "المستهلك"],
            "Buyer details",
            Essential,
            "E-Commerce Law Article 6",
        ),
        clause(
            "goods_description",
            &["goods description", "product description", "description of the goods", "item for sale", "المبيع", "السلعة", "المنتج", "البضاعة", "وصف البضاعة", "وصف المنتج"],
            "Description of the goods or services",
            Essential,
            "E-Commerce Law Article 8",
        ),
        clause(
            "price",
            &["price", "cost", "ثمن البيع", "السعر", "سعر", "تكلفة"],
            "Sale price",
            Essential,
            "E-Commerce Law Article 9",
        ),
        clause(
            "payment_terms",
            &["payment terms", "payment method", "installments", "شروط الدفع", "طريقة السداد", "دفعات", "أقساط"],
            "Payment terms",
            Essential,
            "E-Commerce Law Article 9",
        ),
        clause(
            "delivery",
            &["delivery", "shipping", "التسليم", "الاستلام", "تسليم", "شحن"],
            "Delivery terms",
            Essential,
            "E-Commerce Law Article 10",
        ),
        clause(
            "warranty",
            &["warranty", "guarantee", "ضمان", "كفالة"],
            "Warranty",
            Recommended,
            "E-Commerce Law Article 12",
        ),
        clause(
            "condition_of_goods",
            &["condition of goods", "quality", "حالة المبيع", "جودة المبيع"],
            "Condition of the goods",
            Recommended,
            "E-Commerce Law Article 8",
        ),
        clause(
            "inspection",
            &["inspection", "inspect", "فحص", "معاينة", "اختبار"],
            "Inspection",
            Recommended,
            "E-Commerce Law Article 10",
        ),
        clause(
            "cancellation",
            &["cancellation", "cancel", "إلغاء العقد", "فسخ العقد", "إنهاء العقد"],
            "Cancellation",
            Recommended,
            "E-Commerce Law Article 14",
        ),
        clause(
            "returns",
            &["return", "refund", "exchange", "استرجاع", "إرجاع", "استبدال"],
            "Returns and exchanges",
            Recommended,
            "E-Commerce Law Article 14",
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
            "vat_disclosure",
            RuleCheck::Absent(pattern(r"\bvat\b|value added tax|ضريبة")),
            Severity::High,
            "VAT Regulations Article 53",
            "No mention of VAT, which is mandatory for sales contracts",
            "State whether the price includes value added tax and at what rate",
        ),
        rule(
            "vat_registration_number",
            RuleCheck::Absent(pattern(
                r"(?:vat registration|tax registration|الرقم الضريبي|تسجيل ضريبي)\s*(?:number|no\.?|رقم)?\s*:?\s*[0-9]{15}\b",
            )),
            Severity::Medium,
            "VAT Regulations Article 53",
            "No VAT registration number provided",
            "Include the seller's 15-digit VAT registration number",
        ),
        rule(
            "hidden_defects_waiver",
            RuleCheck::Matches(pattern(&format!(
                r"(?:seller.{{0,50}}(?:not (?:be )?(?:liable|responsible)|no (?:liability|responsibility)|{w}).{{0,50}}(?:defect|damage))|(?:(?:لا|عدم).{{0,50}}(?:ضمان|مسؤولية|مسئولية).{{0,50}}البائع.{{0,50}}(?:عيوب|أضرار))",
                w = keyword_alternation(WAIVER_KEYWORDS)
            ))),
            Severity::High,
            "E-Commerce Law Article 12",
            "The seller may not be exempted from liability for hidden defects",
            "Keep the seller liable for hidden defects as required by law",
        ),
        rule(
            "cancellation_denied",
            RuleCheck::Matches(pattern(
                r"(?:buyer.{0,50}(?:may not|cannot|shall not|has no right to).{0,50}(?:cancel|terminate|rescind))|(?:(?:لا|عدم).{0,50}(?:يحق|يجوز).{0,50}المشتري.{0,50}(?:إلغاء|فسخ|إنهاء).{0,50}(?:العقد|الشراء))",
            )),
            Severity::High,
            "E-Commerce Law Article 14",
            "The buyer may not be denied the statutory right to cancel the purchase",
            "Allow the buyer to cancel the purchase within 7 days of receipt",
        ),
        rule(
            "invoice_requirements",
            RuleCheck::Itemized {
                trigger: pattern(r"invoice|فاتورة"),
                items: vec![
                    item("date", &["date", "تاريخ"]),
                    item("number", &["number", "رقم"]),
                    item("description", &["description", "وصف"]),
                    item("price", &["price", "سعر"]),
                    item("vat amount", &["vat amount", "مبلغ الضريبة"]),
                    item("total", &["total", "الإجمالي"]),
                ],
            },
            Severity::Medium,
            "VAT Regulations Article 53",
            "Invoice clause does not specify required elements",
            "List every element a tax invoice must carry in the invoice clause",
        ),
    ];

    RuleSet {
        contract_type: ContractType::Sales,
        required_clauses,
        violation_rules,
        classifier_keywords: ClassifierKeywords {
            ar: words(&[
                "عقد بيع", "البائع", "المشتري", "المبيع", "ثمن البيع", "طريقة السداد", "التسليم",
                "الضمان", "حالة المبيع", "الفحص", "إلغاء العقد", "ضريبة القيمة المضافة",
                "الشروط والأحكام",
            ]),
            en: words(&[
                "sales contract", "purchase agreement", "seller", "buyer", "item for sale", "sale price",
                "payment method", "delivery", "warranty", "condition of goods", "inspection",
                "cancellation", "vat", "terms and conditions",
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
    fn test_vat_disclosure_is_word_bounded() {
        assert!(fired("the price includes vat at 15%").iter().all(|id| id != "vat_disclosure"));
        assert!(fired("cultivated land is sold").contains(&"vat_disclosure".to_string()));
        assert!(fired("السعر شامل ضريبة القيمة المضافة").iter().all(|id| id != "vat_disclosure"));
    }

    #[test]
    fn test_vat_registration_number() {
        assert!(fired("vat registration number: 300012345600003")
            .iter()
            .all(|id| id != "vat_registration_number"));
        assert!(fired("vat registration number: 12345").contains(&"vat_registration_number".to_string()));
    }

    #[test]
    fn test_invoice_names_missing_elements() {
        let findings = check_violations(&rule_set(), "the seller issues an invoice with the date and total");
        let risk = findings
            .iter()
            .find(|f| f.id() == "invoice_requirements")
            .unwrap();
        assert!(risk.is_risk());
        assert_eq!(
            risk.description(),
            "Invoice clause does not specify required elements: number, description, price, vat amount"
        );
    }

    #[test]
    fn test_no_invoice_no_invoice_risk() {
        assert!(fired("payment on delivery").iter().all(|id| id != "invoice_requirements"));
    }

    #[test]
    fn test_hidden_defects_waiver() {
        assert!(fired("the seller shall not be liable for any hidden defects")
            .contains(&"hidden_defects_waiver".to_string()));
        assert!(fired("لا ضمان على البائع في حال وجود عيوب")
            .contains(&"hidden_defects_waiver".to_string()));
    }

    #[test]
    fn test_cancellation_denied() {
        assert!(fired("the buyer may not cancel the order once paid")
            .contains(&"cancellation_denied".to_string()));
    }
}
