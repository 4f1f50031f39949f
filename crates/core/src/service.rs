//! Lookup -> metrics -> recommendation orchestration shared by the API and the CLI.

use crate::analysis;
use crate::dataset::CompanyIndex;
use crate::domain::metrics::DerivedMetrics;
use crate::domain::recommendation::Recommendation;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    #[error("Company \"{name}\" not found. Available companies: {}", .available.join(", "))]
    NotFound { name: String, available: Vec<String> },

    #[error("No companies provided for comparison")]
    EmptyRequest,

    #[error("None of the provided companies were found")]
    AllNotFound,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyAnalysis {
    pub company: String,
    pub metrics: DerivedMetrics,
    pub recommendation: Recommendation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonEntry {
    pub company: String,
    pub metrics: DerivedMetrics,
}

/// Read-only over a shared index; cheap to clone into request handlers.
#[derive(Debug, Clone)]
pub struct AnalysisService {
    index: Arc<CompanyIndex>,
}

impl AnalysisService {
    pub fn new(index: Arc<CompanyIndex>) -> Self {
        Self { index }
    }

    pub fn get_all(&self) -> &[String] {
        self.index.list_names()
    }

    pub fn analyze(&self, name: &str) -> Result<CompanyAnalysis, QueryError> {
        let Some(record) = self.index.lookup(name) else {
            tracing::debug!(name, "company not found");
            return Err(QueryError::NotFound {
                name: name.to_string(),
                available: self.index.list_names().to_vec(),
            });
        };

        let metrics = analysis::compute(record);
        let recommendation = analysis::recommend(&metrics);
        Ok(CompanyAnalysis {
            company: record.company_name.clone(),
            metrics,
            recommendation,
        })
    }

    /// Unknown names are skipped; results follow the order of `names`.
    pub fn compare<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<ComparisonEntry>, QueryError> {
        if names.is_empty() {
            return Err(QueryError::EmptyRequest);
        }

        let out: Vec<ComparisonEntry> = names
            .iter()
            .filter_map(|name| self.index.lookup(name.as_ref()))
            .map(|record| ComparisonEntry {
                company: record.company_name.clone(),
                metrics: analysis::compute(record),
            })
            .collect();

        tracing::debug!(requested = names.len(), matched = out.len(), "compare");

        if out.is_empty() {
            return Err(QueryError::AllNotFound);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::company::{sample, CompanyRecord};
    use crate::domain::recommendation::RecommendationLabel;

    fn service() -> AnalysisService {
        let weak = CompanyRecord {
            company_name: "Weakling".to_string(),
            annual_return: 5.0,
            volatility: 40.0,
            beta: 1.3,
            pe_ratio: 60.0,
            dividend_yield: 0.0,
            current_price: 12.0,
        };
        let index = CompanyIndex::from_records(vec![sample("Acme"), weak, sample("Known")]).unwrap();
        AnalysisService::new(Arc::new(index))
    }

    #[test]
    fn get_all_returns_load_order() {
        assert_eq!(service().get_all(), ["Acme", "Weakling", "Known"]);
    }

    #[test]
    fn analyze_reference_company_end_to_end() {
        let a = service().analyze("Acme").unwrap();
        assert_eq!(a.company, "Acme");
        assert!((a.metrics.sharpe_ratio - 1.7).abs() < 1e-9);
        assert!((a.metrics.coefficient_of_variation - 0.5).abs() < 1e-9);
        assert_eq!(a.recommendation.score, 10);
        assert_eq!(a.recommendation.recommendation, RecommendationLabel::StrongBuy);
        assert_eq!(a.recommendation.reasons.len(), 5);
    }

    #[test]
    fn analyze_weak_company_end_to_end() {
        // Sharpe is (0.05 - 0.045) / 0.40 = 0.0125, so the moderate band applies.
        let a = service().analyze("weakling").unwrap();
        assert!((a.metrics.sharpe_ratio - 0.0125).abs() < 1e-9);
        assert_eq!(a.recommendation.score, -2);
        assert_eq!(a.recommendation.recommendation, RecommendationLabel::SellAvoid);
        assert_eq!(a.recommendation.reasons.len(), 4);
    }

    #[test]
    fn analyze_is_case_insensitive() {
        let svc = service();
        assert_eq!(svc.analyze("acme").unwrap(), svc.analyze("ACME").unwrap());
    }

    #[test]
    fn analyze_miss_lists_available_companies() {
        let err = service().analyze("Nope").unwrap_err();
        assert_eq!(
            err,
            QueryError::NotFound {
                name: "Nope".to_string(),
                available: vec!["Acme".into(), "Weakling".into(), "Known".into()],
            }
        );
        assert_eq!(
            err.to_string(),
            "Company \"Nope\" not found. Available companies: Acme, Weakling, Known"
        );
    }

    #[test]
    fn compare_rejects_empty_request() {
        let empty: [&str; 0] = [];
        assert_eq!(service().compare(&empty), Err(QueryError::EmptyRequest));
    }

    #[test]
    fn compare_rejects_when_nothing_matches() {
        assert_eq!(
            service().compare(&["nonexistent"]),
            Err(QueryError::AllNotFound)
        );
    }

    #[test]
    fn compare_skips_unknown_names() {
        let out = service().compare(&["Known", "nonexistent"]).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].company, "Known");
    }

    #[test]
    fn compare_follows_request_order() {
        let out = service().compare(&["known", "WEAKLING", "acme"]).unwrap();
        let names: Vec<_> = out.iter().map(|e| e.company.as_str()).collect();
        assert_eq!(names, ["Known", "Weakling", "Acme"]);
    }
}
