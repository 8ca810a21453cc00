// Bag-of-keywords contract type detection
use serde::Serialize;
use shared_types::{ContractType, ExtractedText};
use tracing::warn;

use crate::patterns::count_hits;
use crate::rules::RuleBook;

/// Type used when no type has a unique highest hit count
pub const DEFAULT_CONTRACT_TYPE: ContractType = ContractType::Employment;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub contract_type: ContractType,
    /// Distinct keyword hits per type, in `ContractType::ALL` order
    pub scores: Vec<(ContractType, usize)>,
    /// The default was applied because the maximum was zero or tied
    pub ambiguous: bool,
}

/// Count distinct classifier keywords of the document's language for each
/// type and pick the unique maximum
pub fn classify(book: &RuleBook, text: &ExtractedText) -> Classification {
    let scores: Vec<(ContractType, usize)> = ContractType::ALL
        .iter()
        .map(|&ct| {
            let keywords = book
                .rule_set(ct)
                .classifier_keywords
                .for_language(text.language);
            (ct, count_hits(&text.normalized_text, keywords))
        })
        .collect();

    let best = scores.iter().map(|(_, hits)| *hits).max().unwrap_or(0);
    let leaders: Vec<ContractType> = scores
        .iter()
        .filter(|(_, hits)| *hits == best)
        .map(|(ct, _)| *ct)
        .collect();

    match leaders.as_slice() {
        [only] if best > 0 => Classification {
            contract_type: *only,
            scores,
            ambiguous: false,
        },
        _ => {
            warn!(
                best,
                tied = leaders.len(),
                fallback = %DEFAULT_CONTRACT_TYPE,
                "Contract type is ambiguous, using default"
            );
            Classification {
                contract_type: DEFAULT_CONTRACT_TYPE,
                scores,
                ambiguous: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::Language;

    fn classify_en(text: &str) -> Classification {
        classify(&RuleBook::builtin(), &ExtractedText::new(text, Language::En))
    }

    #[test]
    fn test_employment_majority_wins() {
        // five employment keywords, one rental keyword
        let result = classify_en(
            "The employer pays the employee a monthly salary. Working hours and annual leave \
             are set out below. The landlord of the office is not a party.",
        );
        assert_eq!(result.contract_type, ContractType::Employment);
        assert!(!result.ambiguous);
        assert_eq!(result.scores[0], (ContractType::Employment, 5));
        assert_eq!(result.scores[1], (ContractType::Rental, 1));
    }

    #[test]
    fn test_rental_detected() {
        let result = classify_en("Lease agreement between the landlord and the tenant for the leased property");
        assert_eq!(result.contract_type, ContractType::Rental);
    }

    #[test]
    fn test_arabic_partnership_detected() {
        let text = ExtractedText::new("عقد شراكة بين الشركاء في رأس المال وتوزيع الأرباح", Language::Ar);
        let result = classify(&RuleBook::builtin(), &text);
        assert_eq!(result.contract_type, ContractType::Partnership);
    }

    #[test]
    fn test_no_hits_falls_back_to_default() {
        let result = classify_en("lorem ipsum dolor sit amet");
        assert_eq!(result.contract_type, ContractType::Employment);
        assert!(result.ambiguous);
    }

    #[test]
    fn test_tie_falls_back_to_default() {
        // one sales keyword, one partnership keyword
        let result = classify_en("the seller and the partners");
        assert_eq!(result.contract_type, DEFAULT_CONTRACT_TYPE);
        assert!(result.ambiguous);
    }
}
