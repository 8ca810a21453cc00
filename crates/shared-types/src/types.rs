use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Contract categories the rule tables are written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    Employment,
    Rental,
    Sales,
    Partnership,
}

impl ContractType {
    /// All types, in the order the classifier and listings report them
    pub const ALL: [ContractType; 4] = [
        ContractType::Employment,
        ContractType::Rental,
        ContractType::Sales,
        ContractType::Partnership,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContractType::Employment => "employment",
            ContractType::Rental => "rental",
            ContractType::Sales => "sales",
            ContractType::Partnership => "partnership",
        }
    }

    pub fn name_en(&self) -> &'static str {
        match self {
            ContractType::Employment => "Employment Contract",
            ContractType::Rental => "Rental Contract",
            ContractType::Sales => "Sales Contract",
            ContractType::Partnership => "Partnership Contract",
        }
    }

    pub fn name_ar(&self) -> &'static str {
        match self {
            ContractType::Employment => "عقد عمل",
            ContractType::Rental => "عقد إيجار",
            ContractType::Sales => "عقد بيع",
            ContractType::Partnership => "عقد شراكة",
        }
    }

    /// Display name in the given language
    pub fn display_name(&self, language: Language) -> &'static str {
        match language {
            Language::Ar => self.name_ar(),
            Language::En => self.name_en(),
        }
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown contract type '{0}'. Supported: employment, rental, sales, partnership")]
pub struct ParseContractTypeError(pub String);

impl FromStr for ContractType {
    type Err = ParseContractTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "employment" => Ok(ContractType::Employment),
            "rental" => Ok(ContractType::Rental),
            "sales" => Ok(ContractType::Sales),
            "partnership" => Ok(ContractType::Partnership),
            _ => Err(ParseContractTypeError(s.to_string())),
        }
    }
}

/// Document language as reported by language detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Arabic is the fallback when detection has nothing to go on
    #[default]
    Ar,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    /// Script-ratio language detection.
    ///
    /// Counts alphabetic characters in the Arabic blocks against all
    /// alphabetic characters. Text with no letters at all falls back to the
    /// default language instead of failing.
    pub fn detect(text: &str) -> Language {
        let mut letters = 0usize;
        let mut arabic = 0usize;

        for c in text.chars().filter(|c| c.is_alphabetic()) {
            letters += 1;
            if is_arabic_char(c) {
                arabic += 1;
            }
        }

        if letters == 0 {
            return Language::default();
        }

        if arabic * 10 >= letters * 3 {
            Language::Ar
        } else {
            Language::En
        }
    }
}

fn is_arabic_char(c: char) -> bool {
    matches!(c as u32, 0x0600..=0x06FF | 0x0750..=0x077F | 0x08A0..=0x08FF | 0xFB50..=0xFDFF | 0xFE70..=0xFEFF)
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown language '{0}'. Supported: ar, en")]
pub struct ParseLanguageError(pub String);

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ar" | "arabic" | "العربية" => Ok(Language::Ar),
            "en" | "english" | "الإنجليزية" => Ok(Language::En),
            _ => Err(ParseLanguageError(s.to_string())),
        }
    }
}

/// Severity of a violation, or risk level of a missing clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
        }
    }
}

/// How much a required clause matters when it is absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Essential,
    Recommended,
}

impl Importance {
    /// Risk level assigned to the clause when it is missing
    pub fn risk_level(&self) -> Severity {
        match self {
            Importance::Essential => Severity::High,
            Importance::Recommended => Severity::Medium,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_type_parses_case_insensitively() {
        assert_eq!("Rental".parse::<ContractType>(), Ok(ContractType::Rental));
        assert_eq!(
            " partnership ".parse::<ContractType>(),
            Ok(ContractType::Partnership)
        );
    }

    #[test]
    fn test_contract_type_rejects_unknown() {
        let err = "lease".parse::<ContractType>().unwrap_err();
        assert_eq!(err, ParseContractTypeError("lease".to_string()));
        assert!(err.to_string().contains("lease"));
    }

    #[test]
    fn test_contract_type_serializes_snake_case() {
        let json = serde_json::to_string(&ContractType::Sales).unwrap();
        assert_eq!(json, "\"sales\"");
    }

    #[test]
    fn test_detects_arabic() {
        assert_eq!(Language::detect("عقد عمل بين الطرفين"), Language::Ar);
    }

    #[test]
    fn test_detects_english() {
        assert_eq!(
            Language::detect("This employment contract is made between"),
            Language::En
        );
    }

    #[test]
    fn test_detection_falls_back_on_empty_text() {
        assert_eq!(Language::detect(""), Language::Ar);
        assert_eq!(Language::detect("12345 %%"), Language::Ar);
    }

    #[test]
    fn test_importance_maps_to_risk_level() {
        assert_eq!(Importance::Essential.risk_level(), Severity::High);
        assert_eq!(Importance::Recommended.risk_level(), Severity::Medium);
    }
}
