use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use riskreturn_core::service::{AnalysisService, CompanyAnalysis, ComparisonEntry};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

const SUCCESS: &str = "success";

#[derive(Debug, Clone)]
pub struct AppState {
    pub service: AnalysisService,
}

#[derive(Debug, Serialize)]
pub struct CompaniesResponse {
    status: &'static str,
    companies: Vec<String>,
    total: usize,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    status: &'static str,
    #[serde(flatten)]
    analysis: CompanyAnalysis,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    #[serde(default)]
    companies: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    status: &'static str,
    comparison: Vec<ComparisonEntry>,
    total: usize,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    message: &'static str,
}

pub async fn list_companies(State(state): State<AppState>) -> Json<CompaniesResponse> {
    let companies = state.service.get_all().to_vec();
    Json(CompaniesResponse {
        status: SUCCESS,
        total: companies.len(),
        companies,
    })
}

pub async fn analyze_company(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let analysis = state.service.analyze(&name)?;
    Ok(Json(AnalyzeResponse {
        status: SUCCESS,
        analysis,
    }))
}

pub async fn compare_companies(
    State(state): State<AppState>,
    payload: Result<Json<CompareRequest>, JsonRejection>,
) -> Result<Json<CompareResponse>, ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected compare body");
        ApiError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    let names = req.companies.unwrap_or_default();
    let comparison = state.service.compare(names.as_slice())?;
    Ok(Json(CompareResponse {
        status: SUCCESS,
        total: comparison.len(),
        comparison,
    }))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: SUCCESS,
        message: "Risk and Return Analysis API is running",
    })
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound("Not found".to_string())
}
