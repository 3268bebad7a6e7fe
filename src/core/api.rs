//! Pricing API endpoints
//!
//! Provides read-only JSON endpoints next to the rendered page:
//! - GET /api/pricing/quote - Estimate a monthly price from usage metrics
//! - GET /api/pricing/plans - Recommended plan tiers with their features
//! - GET /api/sections - Ordered in-page section anchors
//! - GET /health - Liveness probe

use axum::{
    Json, Router,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::core::content::PAGE_SECTIONS;
use crate::core::pricing::{
    AnalyticsDepth, AutomationLevel, PriceQuote, RecommendedPlan, SliderBounds, UsageMetrics,
    estimate, plan_features,
};

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}

/// Pricing API error types
#[derive(Debug, thiserror::Error)]
pub enum PricingApiError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
}

impl IntoResponse for PricingApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            PricingApiError::OutOfRange { .. } => (StatusCode::BAD_REQUEST, "OUT_OF_RANGE"),
        };

        tracing::debug!(error = %self, "rejected pricing request");

        let body = ApiError::new(self.to_string(), code);

        (status, Json(body)).into_response()
    }
}

// ============================================================================
// Request/Response DTOs
// ============================================================================

/// Query for a quote; omitted fields fall back to the calculator defaults
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteQuery {
    pub contacts: Option<u32>,
    pub emails_per_month: Option<u32>,
    pub campaigns_per_month: Option<u32>,
    pub analytics_depth: Option<AnalyticsDepth>,
    pub automation_level: Option<AutomationLevel>,
}

impl QuoteQuery {
    /// Fill in defaults and check every slider value against its bounds.
    pub fn into_metrics(self) -> Result<UsageMetrics, PricingApiError> {
        let defaults = UsageMetrics::default();

        Ok(UsageMetrics {
            contacts: within(
                "contacts",
                self.contacts.unwrap_or(defaults.contacts),
                SliderBounds::CONTACTS,
            )?,
            emails_per_month: within(
                "emailsPerMonth",
                self.emails_per_month.unwrap_or(defaults.emails_per_month),
                SliderBounds::EMAILS_PER_MONTH,
            )?,
            campaigns_per_month: within(
                "campaignsPerMonth",
                self.campaigns_per_month.unwrap_or(defaults.campaigns_per_month),
                SliderBounds::CAMPAIGNS_PER_MONTH,
            )?,
            analytics_depth: self.analytics_depth.unwrap_or(defaults.analytics_depth),
            automation_level: self.automation_level.unwrap_or(defaults.automation_level),
        })
    }
}

fn within(field: &'static str, value: u32, bounds: SliderBounds) -> Result<u32, PricingApiError> {
    if bounds.contains(value) {
        Ok(value)
    } else {
        Err(PricingApiError::OutOfRange {
            field,
            value,
            min: bounds.min,
            max: bounds.max,
        })
    }
}

/// One recommended plan tier
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub name: RecommendedPlan,
    pub features: &'static [&'static str],
}

/// One in-page section anchor
#[derive(Debug, Serialize)]
pub struct SectionResponse {
    pub id: &'static str,
    pub label: &'static str,
    pub href: String,
}

// ============================================================================
// Router
// ============================================================================

/// Create the pricing API router
pub fn pricing_router() -> Router {
    Router::new()
        .route("/api/pricing/quote", get(get_quote))
        .route("/api/pricing/plans", get(list_plans))
        .route("/api/sections", get(list_sections))
        .route("/health", get(health))
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/pricing/quote
async fn get_quote(Query(query): Query<QuoteQuery>) -> Result<Json<PriceQuote>, PricingApiError> {
    let metrics = query.into_metrics()?;
    let quote = estimate(&metrics);

    tracing::debug!(
        contacts = metrics.contacts,
        price = quote.monthly_price,
        plan = %quote.recommended_plan,
        "quote computed"
    );

    Ok(Json(quote))
}

/// GET /api/pricing/plans
async fn list_plans() -> Json<Vec<PlanResponse>> {
    Json(
        RecommendedPlan::ALL
            .into_iter()
            .map(|name| PlanResponse {
                name,
                features: plan_features(name),
            })
            .collect(),
    )
}

/// GET /api/sections
async fn list_sections() -> Json<Vec<SectionResponse>> {
    Json(
        PAGE_SECTIONS
            .iter()
            .map(|section| SectionResponse {
                id: section.id,
                label: section.label,
                href: section.href(),
            })
            .collect(),
    )
}

/// GET /health
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = pricing_router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_quote_uses_defaults() {
        let (status, body) = get_json("/api/pricing/quote").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["monthlyPrice"], 29);
        assert_eq!(body["recommendedPlan"], "Starter");
        assert_eq!(body["features"][0], "Up to 1,000 contacts");
    }

    #[tokio::test]
    async fn test_quote_matches_estimator() {
        let (status, body) = get_json(
            "/api/pricing/quote?contacts=1000&emailsPerMonth=50000&campaignsPerMonth=5&analyticsDepth=basic&automationLevel=basic",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["monthlyPrice"], 69);
        assert_eq!(body["recommendedPlan"], "Professional");
        assert_eq!(body["features"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_quote_partial_query() {
        let (status, body) =
            get_json("/api/pricing/quote?analyticsDepth=advanced").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["monthlyPrice"], 38);
    }

    #[tokio::test]
    async fn test_quote_rejects_out_of_range() {
        let (status, body) = get_json("/api/pricing/quote?contacts=50").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "OUT_OF_RANGE");
        assert_eq!(body["error"], "contacts must be between 100 and 50000, got 50");
    }

    #[tokio::test]
    async fn test_quote_rejects_unknown_option() {
        let (status, _) = get_json("/api/pricing/quote?automationLevel=extreme").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_plans() {
        let (status, body) = get_json("/api/pricing/plans").await;

        assert_eq!(status, StatusCode::OK);
        let plans = body.as_array().unwrap();
        assert_eq!(plans.len(), 3);
        assert_eq!(plans[0]["name"], "Starter");
        assert_eq!(plans[2]["features"][4], "API access");
    }

    #[tokio::test]
    async fn test_list_sections() {
        let (status, body) = get_json("/api/sections").await;

        assert_eq!(status, StatusCode::OK);
        let sections = body.as_array().unwrap();
        assert_eq!(sections[0]["id"], "hero");
        assert_eq!(sections[0]["href"], "#hero");
        assert_eq!(sections.len(), PAGE_SECTIONS.len());
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[test]
    fn test_into_metrics_checks_each_field() {
        let query = QuoteQuery {
            campaigns_per_month: Some(51),
            ..QuoteQuery::default()
        };

        match query.into_metrics() {
            Err(PricingApiError::OutOfRange { field, value, .. }) => {
                assert_eq!(field, "campaignsPerMonth");
                assert_eq!(value, 51);
            }
            other => panic!("expected out of range, got {:?}", other),
        }
    }
}
