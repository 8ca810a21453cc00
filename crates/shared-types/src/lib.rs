pub mod finding;
pub mod text;
pub mod types;
pub mod verdict;

pub use finding::Finding;
pub use text::ExtractedText;
pub use types::{
    ContractType, Importance, Language, ParseContractTypeError, ParseLanguageError, Severity,
};
pub use verdict::{ComplianceLevel, ComplianceVerdict, CompliantClause};
