//! API handlers for the contract analysis server
//!
//! Provides REST endpoints for:
//! - Text and file analysis
//! - Report rendering
//! - Contract type and compliance level listing

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use compliance_engine::AnalysisRequest;
use serde::{Deserialize, Serialize};
use shared_types::{ComplianceLevel, ComplianceVerdict, ContractType, Language};
use tracing::info;

use crate::error::ServerError;
use crate::extract::{self, ExtractedFile};
use crate::report::{self, ReportFormat};
use crate::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "contract-api",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Contract type list response
#[derive(Serialize)]
pub struct ContractTypesResponse {
    pub success: bool,
    pub contract_types: Vec<ContractTypeInfo>,
    pub count: usize,
}

/// Contract type metadata
#[derive(Serialize)]
pub struct ContractTypeInfo {
    pub id: &'static str,
    pub name_en: &'static str,
    pub name_ar: &'static str,
    pub required_clauses: usize,
    pub violation_rules: usize,
    pub provisions: usize,
}

/// Handler: GET /api/contract-types
pub async fn handle_list_contract_types(State(state): State<AppState>) -> Json<ContractTypesResponse> {
    let book = state.engine.rule_book();
    let contract_types: Vec<ContractTypeInfo> = ContractType::ALL
        .iter()
        .map(|ct| {
            let rules = book.rule_set(*ct);
            ContractTypeInfo {
                id: ct.as_str(),
                name_en: ct.name_en(),
                name_ar: ct.name_ar(),
                required_clauses: rules.required_clauses.len(),
                violation_rules: rules.violation_rules.len(),
                provisions: rules.provisions.len(),
            }
        })
        .collect();

    let count = contract_types.len();

    Json(ContractTypesResponse {
        success: true,
        contract_types,
        count,
    })
}

/// Compliance level list response
#[derive(Serialize)]
pub struct ComplianceLevelsResponse {
    pub success: bool,
    pub levels: Vec<ComplianceLevelInfo>,
}

#[derive(Serialize)]
pub struct ComplianceLevelInfo {
    pub id: &'static str,
    pub score_range: &'static str,
    pub name_en: &'static str,
    pub name_ar: &'static str,
}

/// Handler: GET /api/compliance-levels
pub async fn handle_list_compliance_levels() -> Json<ComplianceLevelsResponse> {
    let levels = ComplianceLevel::ALL
        .iter()
        .map(|level| ComplianceLevelInfo {
            id: level.id(),
            score_range: level.score_range(),
            name_en: level.name_en(),
            name_ar: level.name_ar(),
        })
        .collect();

    Json(ComplianceLevelsResponse {
        success: true,
        levels,
    })
}

/// Analysis response: the verdict JSON plus a success flag
#[derive(Serialize)]
pub struct AnalysisResponse {
    pub success: bool,
    #[serde(flatten)]
    pub verdict: ComplianceVerdict,
}

/// Handler: POST /api/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResponse>, ServerError> {
    info!(
        "Analyze request: chars={}, contract_type={:?}",
        req.text.chars().count(),
        req.contract_type
    );

    let verdict = state.engine.analyze(&req)?;

    Ok(Json(AnalysisResponse {
        success: true,
        verdict,
    }))
}

/// File analysis request body
#[derive(Deserialize)]
pub struct FileAnalysisRequest {
    /// Original file name; its extension selects the extractor
    pub filename: String,

    /// Base64-encoded file content
    pub content_base64: String,

    #[serde(default)]
    pub contract_type: Option<String>,
}

/// Handler: POST /api/analyze/file
pub async fn handle_analyze_file(
    State(state): State<AppState>,
    Json(req): Json<FileAnalysisRequest>,
) -> Result<Json<AnalysisResponse>, ServerError> {
    info!("File analysis request: filename={}", req.filename);

    let bytes = STANDARD
        .decode(req.content_base64.trim())
        .map_err(|e| ServerError::InvalidRequest(format!("Invalid base64 content: {}", e)))?;

    let filename = req.filename.clone();
    let ExtractedFile { text, .. } =
        tokio::task::spawn_blocking(move || extract::extract_bytes(&filename, &bytes))
            .await
            .map_err(|e| ServerError::Internal(format!("Extraction task failed: {}", e)))??;

    let verdict = state.engine.analyze(&AnalysisRequest {
        text,
        language: None,
        contract_type: req.contract_type,
    })?;

    Ok(Json(AnalysisResponse {
        success: true,
        verdict,
    }))
}

/// Report request body
#[derive(Deserialize)]
pub struct ReportRequest {
    pub text: String,

    #[serde(default)]
    pub language: Option<Language>,

    #[serde(default)]
    pub contract_type: Option<String>,

    /// "html", "pdf" or "txt"
    #[serde(default = "default_format")]
    pub format: String,

    /// Shown in the report header
    #[serde(default)]
    pub file_name: Option<String>,
}

fn default_format() -> String {
    "html".to_string()
}

/// Handler: POST /api/report
pub async fn handle_report(
    State(state): State<AppState>,
    Json(req): Json<ReportRequest>,
) -> Result<Response, ServerError> {
    let format: ReportFormat = req.format.parse()?;
    info!("Report request: format={}", format.as_str());

    let verdict = state.engine.analyze(&AnalysisRequest {
        text: req.text,
        language: req.language,
        contract_type: req.contract_type,
    })?;

    let body = report::render(&verdict, format, req.file_name.as_deref());

    Ok(([(header::CONTENT_TYPE, format.content_type())], body).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use compliance_engine::ComplianceEngine;

    fn state() -> AppState {
        AppState {
            engine: ComplianceEngine::new(),
        }
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = handle_health().await;
        assert_eq!(response.status, "healthy");
        assert_eq!(response.service, "contract-api");
    }

    #[tokio::test]
    async fn test_list_contract_types() {
        let response = handle_list_contract_types(State(state())).await;
        assert!(response.success);
        assert_eq!(response.count, 4);

        let rental = response
            .contract_types
            .iter()
            .find(|t| t.id == "rental")
            .unwrap();
        assert_eq!(rental.name_ar, "عقد إيجار");
        assert!(rental.required_clauses > 0);
        assert!(rental.violation_rules > 0);
        assert_eq!(rental.provisions, 0);
    }

    #[tokio::test]
    async fn test_list_compliance_levels() {
        let response = handle_list_compliance_levels().await;
        assert_eq!(response.levels.len(), 5);
        assert_eq!(response.levels[0].id, "excellent");
        assert_eq!(response.levels[4].score_range, "0-59");
    }

    #[tokio::test]
    async fn test_analyze_rejects_unknown_contract_type() {
        let req = AnalysisRequest {
            text: "working hours: 10 hours".to_string(),
            language: None,
            contract_type: Some("lease".to_string()),
        };
        let result = handle_analyze(State(state()), Json(req)).await;
        assert!(matches!(result, Err(ServerError::Engine(_))));
    }

    #[tokio::test]
    async fn test_analyze_file_rejects_bad_base64() {
        let req = FileAnalysisRequest {
            filename: "contract.txt".to_string(),
            content_base64: "***".to_string(),
            contract_type: None,
        };
        let result = handle_analyze_file(State(state()), Json(req)).await;
        assert!(matches!(result, Err(ServerError::InvalidRequest(_))));
    }
}
