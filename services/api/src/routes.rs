use crate::infra::{deserialize_optional_date, AppState, ScoringState};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{Local, NaiveDate};
use ods_assessment::assessment::{
    AnswerSet, AssessmentReport, CatalogDefinition, CompanyProfile, ScoringEngine, SessionError,
    SimulatedBenchmark,
};
use ods_assessment::error::AppError;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    pub(crate) answers: AnswerSet,
    #[serde(default)]
    pub(crate) company: Option<CompanyProfile>,
    #[serde(default)]
    pub(crate) benchmark_seed: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) generated_on: Option<NaiveDate>,
}

pub(crate) fn assessment_router(state: ScoringState) -> Router {
    Router::new()
        .route("/api/v1/catalog", get(catalog_endpoint))
        .route("/api/v1/assessment/score", post(score_endpoint))
        .with_state(state)
}

pub(crate) fn with_service_routes(state: ScoringState) -> Router {
    assessment_router(state)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
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

pub(crate) async fn catalog_endpoint(State(state): State<ScoringState>) -> Json<CatalogDefinition> {
    Json(state.catalog.definition())
}

pub(crate) async fn score_endpoint(
    State(state): State<ScoringState>,
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<AssessmentReport>, AppError> {
    let ScoreRequest {
        answers,
        company,
        benchmark_seed,
        generated_on,
    } = payload;

    if let Some(profile) = &company {
        let missing = profile.missing_fields();
        if !missing.is_empty() {
            return Err(SessionError::IncompleteCompanyProfile(missing).into());
        }
    }

    answers.warn_unknown_questions(&state.catalog);
    let engine = ScoringEngine::new(&state.catalog, state.scoring);
    let result = match benchmark_seed.or(state.benchmark_seed) {
        Some(seed) => {
            engine.assess_with_benchmark(&answers, &mut SimulatedBenchmark::seeded(seed))?
        }
        None => engine.assess(&answers)?,
    };

    let generated_on = generated_on.unwrap_or_else(|| Local::now().date_naive());
    let report = AssessmentReport::build(&result, company, generated_on);
    info!(
        global_score = report.global_score,
        answered = report.answered,
        "scored assessment"
    );

    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use ods_assessment::assessment::{AssessmentCatalog, DimensionId, MaturityTier};
    use serde_json::Value;
    use tower::ServiceExt;

    fn report_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid date")
    }

    fn all_answered(value: f64) -> AnswerSet {
        AssessmentCatalog::standard()
            .questions()
            .iter()
            .map(|question| (question.id.clone(), value))
            .collect()
    }

    fn request(answers: AnswerSet) -> ScoreRequest {
        ScoreRequest {
            answers,
            company: None,
            benchmark_seed: None,
            generated_on: Some(report_date()),
        }
    }

    async fn read_json_body(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 1 << 20)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    #[tokio::test]
    async fn score_endpoint_returns_report() {
        let Json(report) = score_endpoint(
            State(ScoringState::standard()),
            Json(request(all_answered(2.0))),
        )
        .await
        .expect("report builds");

        assert_eq!(report.global_score, 67);
        assert_eq!(report.global_maturity, MaturityTier::Avanzado);
        assert_eq!(report.dimensions.len(), 5);
        assert_eq!(report.priority_areas.len(), 3);
        assert!(report.dimensions.iter().all(|entry| entry.benchmark.is_none()));
        assert_eq!(report.generated_on, report_date());
    }

    #[tokio::test]
    async fn score_endpoint_uses_requested_benchmark_seed() {
        let mut payload = request(all_answered(1.0));
        payload.benchmark_seed = Some(42);
        let Json(first) = score_endpoint(State(ScoringState::standard()), Json(payload))
            .await
            .expect("report builds");

        let mut payload = request(all_answered(1.0));
        payload.benchmark_seed = Some(42);
        let Json(second) = score_endpoint(State(ScoringState::standard()), Json(payload))
            .await
            .expect("report builds");

        assert_eq!(
            serde_json::to_string(&first).expect("serializes"),
            serde_json::to_string(&second).expect("serializes")
        );
        let gestion = &first.dimensions[0];
        assert_eq!(gestion.dimension_id, DimensionId::Gestion);
        let benchmark = gestion.benchmark.expect("benchmark present");
        assert!((35..=75).contains(&benchmark));
    }

    #[tokio::test]
    async fn score_endpoint_rejects_incomplete_company() {
        let mut payload = request(AnswerSet::new());
        payload.company = Some(CompanyProfile {
            business_name: Some("Finca El Lomo".to_string()),
            ..CompanyProfile::default()
        });

        let err = score_endpoint(State(ScoringState::standard()), Json(payload))
            .await
            .expect_err("company rejected");
        assert_eq!(
            err.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[tokio::test]
    async fn score_route_accepts_json_payloads() {
        let router = assessment_router(ScoringState::standard());
        let body = json!({
            "answers": { "g1": 3, "g2": 3, "g3": 2, "g4": 1, "g5": 0, "p1": -1, "zz9": 2 },
            "generated_on": "2026-03-02"
        });

        let response = router
            .oneshot(
                Request::post("/api/v1/assessment/score")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["generated_on"], "2026-03-02");
        assert_eq!(payload["dimensions"][0]["dimension_id"], "gestion");
        assert_eq!(payload["dimensions"][1]["score"], 0);
    }

    #[tokio::test]
    async fn catalog_route_lists_questions() {
        let router = assessment_router(ScoringState::standard());
        let response = router
            .oneshot(
                Request::get("/api/v1/catalog")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["dimensions"].as_array().map(Vec::len), Some(5));
        assert_eq!(payload["questions"].as_array().map(Vec::len), Some(82));
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }
}
