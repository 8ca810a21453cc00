//! Per-contract-type rule tables and the lookup that dispatches to them.
//!
//! Each table is plain data: required clauses, violation rules and the
//! classifier keywords. The checkers in [`crate::clauses`] and
//! [`crate::violations`] interpret it.

pub mod employment;
pub mod partnership;
pub mod rental;
pub mod sales;

use std::path::Path;

use regex::Regex;
use shared_types::{ContractType, ExtractedText, Finding, Importance, Language, Severity};
use tracing::{info, warn};

use crate::extractors::{Topic, Unit};
use crate::legal_content::{self, LegalProvision};
use crate::{clauses, violations};

pub use employment::EmploymentRules;
pub use partnership::PartnershipRules;
pub use rental::RentalRules;
pub use sales::SalesRules;

/// A clause whose presence is detected by keyword hits
#[derive(Debug, Clone)]
pub struct RequiredClause {
    pub id: String,
    /// Lowercase keyword variants; any one of them marks the clause present
    pub keywords: Vec<String>,
    pub description: String,
    pub importance: Importance,
    pub reference: String,
}

impl RequiredClause {
    pub fn is_present(&self, normalized_text: &str) -> bool {
        crate::patterns::contains_any(normalized_text, &self.keywords)
    }
}

/// Upper bound for a quantity in one unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit {
    pub unit: Unit,
    pub max: u32,
}

/// A named element that must appear, with its keyword variants
#[derive(Debug, Clone)]
pub struct Item {
    pub label: String,
    pub keywords: Vec<String>,
}

/// How a violation rule decides whether it fires
#[derive(Debug, Clone)]
pub enum RuleCheck {
    /// Violation when the pattern matches
    Matches(Regex),
    /// Violation when the pattern is nowhere in the text
    Absent(Regex),
    /// Violation when the topic's quantity is above the limit for its unit.
    /// Units are never converted; a quantity with no same-unit limit passes.
    Exceeds { topic: Topic, limits: Vec<Limit> },
    /// Risk when `trigger` matches and `required` does not
    Incomplete { trigger: Regex, required: Regex },
    /// Risk when `trigger` matches and one or more items are absent
    Itemized { trigger: Regex, items: Vec<Item> },
}

#[derive(Debug, Clone)]
pub struct ViolationRule {
    pub id: String,
    pub check: RuleCheck,
    pub description: String,
    pub recommendation: String,
    pub reference: String,
    pub severity: Severity,
}

impl ViolationRule {
    pub fn violation(&self, description: String) -> Finding {
        Finding::Violation {
            rule_id: self.id.clone(),
            description,
            severity: self.severity,
            reference: self.reference.clone(),
            recommendation: self.recommendation.clone(),
        }
    }

    pub fn risk(&self, description: String) -> Finding {
        Finding::Risk {
            rule_id: self.id.clone(),
            description,
            severity: self.severity,
            reference: self.reference.clone(),
            recommendation: self.recommendation.clone(),
        }
    }
}

/// Keywords used only for contract-type detection
#[derive(Debug, Clone, Default)]
pub struct ClassifierKeywords {
    pub ar: Vec<String>,
    pub en: Vec<String>,
}

impl ClassifierKeywords {
    pub fn for_language(&self, language: Language) -> &[String] {
        match language {
            Language::Ar => &self.ar,
            Language::En => &self.en,
        }
    }
}

/// Immutable rule table for one contract type
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub contract_type: ContractType,
    pub required_clauses: Vec<RequiredClause>,
    pub violation_rules: Vec<ViolationRule>,
    pub classifier_keywords: ClassifierKeywords,
    /// Reference provisions read from the legal-content directory
    pub provisions: Vec<LegalProvision>,
}

impl RuleSet {
    /// A table with no rules; every document is trivially compliant with it
    pub fn empty(contract_type: ContractType) -> Self {
        Self {
            contract_type,
            required_clauses: Vec::new(),
            violation_rules: Vec::new(),
            classifier_keywords: ClassifierKeywords::default(),
            provisions: Vec::new(),
        }
    }

    /// Built-in table for `contract_type`
    pub fn builtin(contract_type: ContractType) -> Self {
        match contract_type {
            ContractType::Employment => employment::rule_set(),
            ContractType::Rental => rental::rule_set(),
            ContractType::Sales => sales::rule_set(),
            ContractType::Partnership => partnership::rule_set(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.required_clauses.is_empty() && self.violation_rules.is_empty()
    }

    pub fn essential_clause_count(&self) -> usize {
        self.required_clauses
            .iter()
            .filter(|c| c.importance == Importance::Essential)
            .count()
    }
}

/// Per-type checks over one document
pub trait ContractRules: Send + Sync {
    fn rule_set(&self) -> &RuleSet;

    fn contract_type(&self) -> ContractType {
        self.rule_set().contract_type
    }

    /// `MissingClause` findings in clause declaration order
    fn check_clauses(&self, text: &ExtractedText) -> Vec<Finding> {
        clauses::check_missing_clauses(self.rule_set(), &text.normalized_text)
    }

    /// `Violation` and `Risk` findings in rule declaration order
    fn check_violations(&self, text: &ExtractedText) -> Vec<Finding> {
        violations::check_violations(self.rule_set(), &text.normalized_text)
    }
}

/// Lookup table from contract type to its rules.
///
/// Built once at startup and shared read-only between analyses.
pub struct RuleBook {
    tables: [Box<dyn ContractRules>; 4],
}

impl RuleBook {
    /// Built-in tables with no legal-content provisions
    pub fn builtin() -> Self {
        Self {
            tables: ContractType::ALL.map(|ct| boxed(RuleSet::builtin(ct))),
        }
    }

    /// Built-in tables plus the provisions under `dir`.
    ///
    /// A type whose legal content fails to load gets an empty table; the
    /// failure is logged and the rest of the book is unaffected.
    pub fn load(dir: &Path) -> Self {
        let tables = ContractType::ALL.map(|ct| match legal_content::load_provisions(dir, ct) {
            Ok(provisions) => {
                info!(
                    contract_type = %ct,
                    provisions = provisions.len(),
                    "Loaded legal content"
                );
                let mut rules = RuleSet::builtin(ct);
                rules.provisions = provisions;
                boxed(rules)
            }
            Err(e) => {
                warn!(contract_type = %ct, error = %e, "Rule source failed to load, using an empty rule set");
                boxed(RuleSet::empty(ct))
            }
        });
        Self { tables }
    }

    /// Replace the table for `rules.contract_type`
    pub fn with_rule_set(mut self, rules: RuleSet) -> Self {
        let slot = slot(rules.contract_type);
        self.tables[slot] = boxed(rules);
        self
    }

    pub fn rules_for(&self, contract_type: ContractType) -> &dyn ContractRules {
        self.tables[slot(contract_type)].as_ref()
    }

    pub fn rule_set(&self, contract_type: ContractType) -> &RuleSet {
        self.rules_for(contract_type).rule_set()
    }
}

impl Default for RuleBook {
    fn default() -> Self {
        Self::builtin()
    }
}

fn slot(contract_type: ContractType) -> usize {
    match contract_type {
        ContractType::Employment => 0,
        ContractType::Rental => 1,
        ContractType::Sales => 2,
        ContractType::Partnership => 3,
    }
}

fn boxed(rules: RuleSet) -> Box<dyn ContractRules> {
    match rules.contract_type {
        ContractType::Employment => Box::new(EmploymentRules::new(rules)),
        ContractType::Rental => Box::new(RentalRules::new(rules)),
        ContractType::Sales => Box::new(SalesRules::new(rules)),
        ContractType::Partnership => Box::new(PartnershipRules::new(rules)),
    }
}

// Builders for the static tables below

/// Compile a built-in pattern, case-insensitive.
/// Panics on an invalid pattern; only used with literals from the rule tables.
pub(crate) fn pattern(re: &str) -> Regex {
    Regex::new(&format!("(?i){}", re)).unwrap()
}

pub(crate) fn words(keywords: &[&str]) -> Vec<String> {
    keywords.iter().map(|k| k.to_lowercase()).collect()
}

pub(crate) fn clause(
    id: &str,
    keywords: &[&str],
    description: &str,
    importance: Importance,
    reference: &str,
) -> RequiredClause {
    RequiredClause {
        id: id.to_string(),
        keywords: words(keywords),
        description: description.to_string(),
        importance,
        reference: reference.to_string(),
    }
}

pub(crate) fn rule(
    id: &str,
    check: RuleCheck,
    severity: Severity,
    reference: &str,
    description: &str,
    recommendation: &str,
) -> ViolationRule {
    ViolationRule {
        id: id.to_string(),
        check,
        description: description.to_string(),
        recommendation: recommendation.to_string(),
        reference: reference.to_string(),
        severity,
    }
}

pub(crate) fn item(label: &str, keywords: &[&str]) -> Item {
    Item {
        label: label.to_string(),
        keywords: words(keywords),
    }
}
