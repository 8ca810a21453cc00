//! Legal reference content loaded from markdown.
//!
//! Layout is `<dir>/<contract_type>/<source>.md`. Each `## ` heading opens a
//! section and each `- ` bullet under it is one provision.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use shared_types::ContractType;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum RuleSourceError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No provisions found in {}", .0.display())]
    Empty(PathBuf),
}

/// One bullet from a legal reference file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegalProvision {
    /// File stem the provision came from, e.g. `labor_law_key_articles`
    pub source: String,
    pub section: String,
    pub text: String,
}

/// Files that make up the legal content for a contract type
pub fn source_files(contract_type: ContractType) -> &'static [&'static str] {
    match contract_type {
        ContractType::Employment => &[
            "labor_law_key_articles",
            "unified_work_document_key_regulations",
        ],
        ContractType::Rental => &[
            "ejar_key_regulations",
            "enforcement_system_key_regulations",
        ],
        ContractType::Sales => &["vat_key_regulations", "enforcement_system_key_regulations"],
        ContractType::Partnership => &[
            "companies_law_key_regulations",
            "anti_concealment_key_regulations",
        ],
    }
}

/// Load every provision for `contract_type` under `dir`.
///
/// Fails on the first file that is unreadable or has no provisions.
pub fn load_provisions(
    dir: &Path,
    contract_type: ContractType,
) -> Result<Vec<LegalProvision>, RuleSourceError> {
    let mut provisions = Vec::new();

    for name in source_files(contract_type) {
        let path = dir.join(contract_type.as_str()).join(format!("{}.md", name));
        let content = fs::read_to_string(&path).map_err(|source| RuleSourceError::Io {
            path: path.clone(),
            source,
        })?;

        let parsed = parse_provisions(name, &content);
        if parsed.is_empty() {
            return Err(RuleSourceError::Empty(path));
        }
        debug!(path = %path.display(), provisions = parsed.len(), "Parsed legal content");
        provisions.extend(parsed);
    }

    Ok(provisions)
}

/// Split markdown into provisions. Bullets before the first `## ` heading
/// belong to an unnamed section.
pub fn parse_provisions(source: &str, content: &str) -> Vec<LegalProvision> {
    let mut section = String::new();
    let mut provisions = Vec::new();

    for line in content.lines().map(str::trim) {
        if let Some(heading) = line.strip_prefix("## ") {
            section = heading.trim().to_string();
        } else if let Some(bullet) = line.strip_prefix("- ") {
            let text = bullet.trim();
            if text.is_empty() {
                continue;
            }
            provisions.push(LegalProvision {
                source: source.to_string(),
                section: section.clone(),
                text: text.to_string(),
            });
        }
    }

    provisions
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LABOR: &str = "# Labor Law\n\n## Article 98\n- Working hours shall not exceed eight hours per day\n- Ramadan hours are reduced\n\n## Article 53\n- The probation period shall not exceed 90 days\n";

    #[test]
    fn test_parse_sections_and_bullets() {
        let provisions = parse_provisions("labor_law_key_articles", LABOR);
        assert_eq!(provisions.len(), 3);
        assert_eq!(provisions[0].section, "Article 98");
        assert_eq!(provisions[2].section, "Article 53");
        assert_eq!(provisions[2].text, "The probation period shall not exceed 90 days");
        assert_eq!(provisions[0].source, "labor_law_key_articles");
    }

    #[test]
    fn test_load_reads_every_source_file() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("employment");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("labor_law_key_articles.md"), LABOR).unwrap();
        fs::write(
            root.join("unified_work_document_key_regulations.md"),
            "## Unified contract\n- Contracts are documented on Qiwa\n",
        )
        .unwrap();

        let provisions = load_provisions(dir.path(), ContractType::Employment).unwrap();
        assert_eq!(provisions.len(), 4);
        assert_eq!(provisions[3].source, "unified_work_document_key_regulations");
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_provisions(dir.path(), ContractType::Sales).unwrap_err();
        assert!(matches!(err, RuleSourceError::Io { .. }));
    }

    #[test]
    fn test_file_without_bullets_is_empty_error() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("rental");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("ejar_key_regulations.md"), "# Ejar\nNo bullets here\n").unwrap();

        let err = load_provisions(dir.path(), ContractType::Rental).unwrap_err();
        assert!(matches!(err, RuleSourceError::Empty(_)));
    }
}
