use crate::infra::{
    deserialize_lenient_skills, deserialize_lenient_text, deserialize_lenient_years, AppState,
};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use ninebox::talent::{ClassificationService, EmployeeRecord, TalentAssessment};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

/// Wire shape for `POST /api/classify`. Only the four classification
/// fields are consumed; name, position, and achievements are the caller's
/// own passthrough data and are simply ignored here.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct ClassifyRequest {
    #[serde(deserialize_with = "deserialize_lenient_text")]
    pub(crate) education: Option<String>,
    #[serde(deserialize_with = "deserialize_lenient_years")]
    pub(crate) work_experience: Option<i64>,
    #[serde(deserialize_with = "deserialize_lenient_text")]
    pub(crate) grade: Option<String>,
    #[serde(deserialize_with = "deserialize_lenient_skills")]
    pub(crate) skills: Option<Vec<String>>,
}

impl ClassifyRequest {
    fn into_record(self) -> EmployeeRecord {
        EmployeeRecord {
            education: self.education,
            work_experience: self.work_experience,
            grade: self.grade,
            skills: self.skills,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ClassifyResponse {
    pub(crate) success: bool,
    pub(crate) data: TalentAssessment,
}

pub(crate) fn classification_routes(classifier: Arc<ClassificationService>) -> Router {
    Router::new()
        .route("/api/classify", post(classify_endpoint))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .layer(Extension(classifier))
}

pub(crate) async fn classify_endpoint(
    Extension(classifier): Extension<Arc<ClassificationService>>,
    Json(payload): Json<ClassifyRequest>,
) -> Json<ClassifyResponse> {
    let record = payload.into_record();
    let data = classifier.classify(&record);
    Json(ClassifyResponse {
        success: true,
        data,
    })
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn analyst_payload() -> serde_json::Value {
        json!({
            "name": "Test Employee",
            "position": "Analyst",
            "education": "S1",
            "workExperience": 5,
            "grade": "III/c",
            "skills": ["Python", "Data Analysis", "SQL", "Machine Learning"],
            "achievements": ["Best Employee 2023"]
        })
    }

    async fn post_classify(payload: serde_json::Value) -> serde_json::Value {
        let app = classification_routes(Arc::new(ClassificationService::new()));
        let request = Request::builder()
            .method("POST")
            .uri("/api/classify")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request builds");

        let response = app.oneshot(request).await.expect("handler responds");
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn classify_endpoint_returns_success_envelope() {
        let body = post_classify(analyst_payload()).await;

        assert_eq!(body["success"], true);
        assert!(body["data"]["talentBox"].is_string());
        let number = body["data"]["boxNumber"].as_u64().expect("box number");
        assert!((1..=9).contains(&number));
        assert!(body["data"]["performance"]["justification"].is_string());
        assert!(body["data"]["potential"]["justification"].is_string());
    }

    #[tokio::test]
    async fn classify_endpoint_absorbs_malformed_fields() {
        let body = post_classify(json!({
            "education": 42,
            "workExperience": "a while",
            "grade": ["III", "c"],
            "skills": "many"
        }))
        .await;

        // Every malformed field degrades to its default; the envelope is
        // still a complete assessment.
        assert_eq!(body["success"], true);
        let number = body["data"]["boxNumber"].as_u64().expect("box number");
        assert!((1..=9).contains(&number));
    }

    #[tokio::test]
    async fn classify_endpoint_accepts_an_empty_object() {
        let body = post_classify(json!({})).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["source"], "model");
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }
}
