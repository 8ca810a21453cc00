use crate::types::Language;

/// Document text handed to the rule engine.
///
/// `normalized_text` is what every checker matches against: lowercased, with
/// Arabic-Indic digits folded to ASCII so numeric captures stay `[0-9]`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExtractedText {
    pub raw_text: String,
    pub normalized_text: String,
    pub language: Language,
}

impl ExtractedText {
    pub fn new(raw_text: impl Into<String>, language: Language) -> Self {
        let raw_text = raw_text.into();
        let normalized_text = normalize(&raw_text);
        Self {
            raw_text,
            normalized_text,
            language,
        }
    }

    /// Build from raw text, detecting the language from its script
    pub fn detect(raw_text: impl Into<String>) -> Self {
        let raw_text = raw_text.into();
        let language = Language::detect(&raw_text);
        Self::new(raw_text, language)
    }

    pub fn is_empty(&self) -> bool {
        self.normalized_text.trim().is_empty()
    }
}

/// Lowercase and fold Arabic-Indic / Extended Arabic-Indic digits
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{0660}'..='\u{0669}' => out.push(ascii_digit(c as u32 - 0x0660)),
            '\u{06F0}'..='\u{06F9}' => out.push(ascii_digit(c as u32 - 0x06F0)),
            other => out.extend(other.to_lowercase()),
        }
    }
    out
}

fn ascii_digit(value: u32) -> char {
    char::from(b'0' + value as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize("Working HOURS"), "working hours");
    }

    #[test]
    fn test_normalize_folds_arabic_indic_digits() {
        assert_eq!(normalize("فترة التجربة ٩٠ يوما"), "فترة التجربة 90 يوما");
        assert_eq!(normalize("۱۲ ساعة"), "12 ساعة");
    }

    #[test]
    fn test_raw_text_is_preserved() {
        let text = ExtractedText::new("Salary: 5000 SAR", Language::En);
        assert_eq!(text.raw_text, "Salary: 5000 SAR");
        assert_eq!(text.normalized_text, "salary: 5000 sar");
    }

    #[test]
    fn test_detect_sets_language() {
        assert_eq!(ExtractedText::detect("The tenant shall pay").language, Language::En);
    }
}
