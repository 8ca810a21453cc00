use crate::types::Severity;

/// One compliance observation produced by the rule engine
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    /// A required or recommended clause has no keyword hit in the text
    MissingClause {
        clause_id: String,
        description: String,
        risk_level: Severity,
    },
    /// A provision breaches a legal rule or threshold
    Violation {
        rule_id: String,
        description: String,
        severity: Severity,
        reference: String,
        recommendation: String,
    },
    /// A provision is incomplete or ambiguous but not illegal
    Risk {
        rule_id: String,
        description: String,
        severity: Severity,
        reference: String,
        recommendation: String,
    },
}

impl Finding {
    /// Identifier of the clause or rule this finding came from
    pub fn id(&self) -> &str {
        match self {
            Finding::MissingClause { clause_id, .. } => clause_id,
            Finding::Violation { rule_id, .. } | Finding::Risk { rule_id, .. } => rule_id,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Finding::MissingClause { description, .. }
            | Finding::Violation { description, .. }
            | Finding::Risk { description, .. } => description,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Finding::MissingClause { risk_level, .. } => *risk_level,
            Finding::Violation { severity, .. } | Finding::Risk { severity, .. } => *severity,
        }
    }

    pub fn reference(&self) -> Option<&str> {
        match self {
            Finding::MissingClause { .. } => None,
            Finding::Violation { reference, .. } | Finding::Risk { reference, .. } => {
                Some(reference)
            }
        }
    }

    /// Recommendation text for this finding; same content gives same text
    pub fn recommendation(&self) -> String {
        match self {
            Finding::MissingClause { description, .. } => {
                format!("Add a clause covering {} to the contract", description)
            }
            Finding::Violation { recommendation, .. } | Finding::Risk { recommendation, .. } => {
                recommendation.clone()
            }
        }
    }

    pub fn is_missing_clause(&self) -> bool {
        matches!(self, Finding::MissingClause { .. })
    }

    pub fn is_violation(&self) -> bool {
        matches!(self, Finding::Violation { .. })
    }

    pub fn is_risk(&self) -> bool {
        matches!(self, Finding::Risk { .. })
    }
}
