//! Keyword helpers shared by the clause checker, classifier and rule tables.
//!
//! All matching is plain substring matching on normalized text. Keywords
//! must therefore already be lowercase.

/// Notice-related keywords, both languages
pub const NOTICE_KEYWORDS: &[&str] = &[
    "notice",
    "notification",
    "notify",
    "إشعار",
    "إخطار",
    "إنذار",
];

/// Termination keywords, both languages
pub const TERMINATION_KEYWORDS: &[&str] = &[
    "termination",
    "terminate",
    "eviction",
    "evict",
    "إنهاء",
    "فسخ",
    "إخلاء",
];

/// Waiver keywords, both languages
pub const WAIVER_KEYWORDS: &[&str] = &[
    "waive",
    "waives",
    "waiver",
    "relinquish",
    "يتنازل",
    "تنازل",
    "التنازل",
];

/// True if any keyword occurs in `text`
pub fn contains_any<S: AsRef<str>>(text: &str, keywords: &[S]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword.as_ref()))
}

/// Number of distinct keywords from `keywords` present in `text`.
///
/// Duplicated keyword entries count once.
pub fn count_hits<S: AsRef<str>>(text: &str, keywords: &[S]) -> usize {
    let mut seen: Vec<&str> = Vec::with_capacity(keywords.len());
    for keyword in keywords.iter().map(AsRef::as_ref) {
        if !seen.contains(&keyword) && text.contains(keyword) {
            seen.push(keyword);
        }
    }
    seen.len()
}

/// Build a regex alternation of escaped literal keywords
pub fn keyword_alternation<S: AsRef<str>>(keywords: &[S]) -> String {
    keywords
        .iter()
        .map(|k| regex::escape(k.as_ref()))
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_any() {
        assert!(contains_any("the tenant shall give notice", NOTICE_KEYWORDS));
        assert!(contains_any("يجب الإشعار قبل إشعار الإخلاء", NOTICE_KEYWORDS));
        assert!(!contains_any("salary is paid monthly", NOTICE_KEYWORDS));
    }

    #[test]
    fn test_count_hits_counts_distinct_keywords() {
        let keywords = ["salary", "employee", "salary"];
        assert_eq!(count_hits("salary salary salary employee", &keywords), 2);
        assert_eq!(count_hits("nothing relevant", &keywords), 0);
    }

    #[test]
    fn test_keyword_alternation_escapes() {
        assert_eq!(keyword_alternation(&["a.b", "%"]), r"a\.b|%");
    }
}
