pub mod classifier;
pub mod clauses;
pub mod error;
pub mod extractors;
pub mod legal_content;
pub mod patterns;
pub mod rules;
pub mod scoring;
pub mod violations;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use shared_types::{ComplianceVerdict, ContractType, ExtractedText, Language};
use tracing::info;

pub use classifier::Classification;
pub use error::EngineError;
pub use legal_content::{LegalProvision, RuleSourceError};
pub use rules::{ContractRules, RuleBook, RuleSet};

/// Engine input as received from callers
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisRequest {
    pub text: String,
    /// Detected from the text when absent
    #[serde(default)]
    pub language: Option<Language>,
    /// Classified from the text when absent
    #[serde(default)]
    pub contract_type: Option<String>,
}

/// ComplianceEngine entry point.
///
/// Holds the rule book behind an `Arc`; clones share it and analyses never
/// mutate it, so one engine can serve concurrent requests.
#[derive(Clone)]
pub struct ComplianceEngine {
    rules: Arc<RuleBook>,
}

impl ComplianceEngine {
    /// Engine over the built-in rule tables
    pub fn new() -> Self {
        Self::with_rule_book(RuleBook::builtin())
    }

    pub fn with_rule_book(rules: RuleBook) -> Self {
        Self {
            rules: Arc::new(rules),
        }
    }

    pub fn rule_book(&self) -> &RuleBook {
        &self.rules
    }

    /// Validate a request and analyze it, stamped with the current time.
    ///
    /// Blank text is still scored: every required clause comes back missing.
    pub fn analyze(&self, request: &AnalysisRequest) -> Result<ComplianceVerdict, EngineError> {
        let contract_type = request
            .contract_type
            .as_deref()
            .filter(|ct| !ct.trim().is_empty())
            .map(str::parse::<ContractType>)
            .transpose()?;

        let text = match request.language {
            Some(language) => ExtractedText::new(request.text.as_str(), language),
            None => ExtractedText::detect(request.text.as_str()),
        };

        Ok(self.evaluate(&text, contract_type, Utc::now()))
    }

    /// Analyze raw text, detecting language and, if not given, contract type
    pub fn analyze_text(&self, text: &str, contract_type: Option<ContractType>) -> ComplianceVerdict {
        self.evaluate(&ExtractedText::detect(text), contract_type, Utc::now())
    }

    /// Run every checker over `text` and score the result.
    ///
    /// Pure apart from logging: the same text, type and timestamp always
    /// produce the same verdict.
    pub fn evaluate(
        &self,
        text: &ExtractedText,
        contract_type: Option<ContractType>,
        analyzed_at: DateTime<Utc>,
    ) -> ComplianceVerdict {
        let contract_type = contract_type.unwrap_or_else(|| self.classify(text).contract_type);
        let rules = self.rules.rules_for(contract_type);

        let mut findings = rules.check_clauses(text);
        findings.extend(rules.check_violations(text));

        let score = scoring::compliance_score(&findings);
        let compliant = clauses::compliant_clauses(rules.rule_set(), &text.normalized_text);

        let verdict = ComplianceVerdict::new(
            contract_type,
            text.language,
            analyzed_at,
            findings,
            score,
            compliant,
        );

        info!(
            contract_type = %contract_type,
            language = %text.language,
            score = verdict.compliance_score(),
            missing_clauses = verdict.missing_clauses().count(),
            violations = verdict.violations().count(),
            risks = verdict.risks().count(),
            "Analysis complete"
        );

        verdict
    }

    pub fn classify(&self, text: &ExtractedText) -> Classification {
        classifier::classify(&self.rules, text)
    }
}

impl Default for ComplianceEngine {
    fn default() -> Self {
        Self::new()
    }
}
