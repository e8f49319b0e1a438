use crate::infra::{course_parser, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use golf_scorecard::course::{Golfer, HoleCountPolicy, ParseOptions};
use golf_scorecard::error::AppError;
use golf_scorecard::scorecard::{CourseView, ScorecardReport, ScorecardSummary};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize)]
pub(crate) struct CourseRequest {
    pub(crate) course_file: String,
    #[serde(default)]
    pub(crate) hole_count_policy: Option<HoleCountPolicy>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GolferInput {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) scores: Option<Vec<u32>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScorecardRequest {
    pub(crate) course_file: String,
    pub(crate) golfer: GolferInput,
    #[serde(default)]
    pub(crate) hole_count_policy: Option<HoleCountPolicy>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScorecardResponse {
    pub(crate) course: CourseView,
    pub(crate) score_source: ScoreSource,
    pub(crate) scorecard: ScorecardSummary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ScoreSource {
    Entered,
    DefaultPar,
}

pub(crate) fn router(options: ParseOptions) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/course", post(course_endpoint))
        .route("/api/v1/scorecard", post(scorecard_endpoint))
        .layer(Extension(options))
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

pub(crate) async fn course_endpoint(
    Extension(options): Extension<ParseOptions>,
    Json(payload): Json<CourseRequest>,
) -> Result<Json<CourseView>, AppError> {
    let CourseRequest {
        course_file,
        hole_count_policy,
    } = payload;

    let course = course_parser(options, hole_count_policy).parse(&course_file)?;
    Ok(Json(CourseView::from(&course)))
}

pub(crate) async fn scorecard_endpoint(
    Extension(options): Extension<ParseOptions>,
    Json(payload): Json<ScorecardRequest>,
) -> Result<Json<ScorecardResponse>, AppError> {
    let ScorecardRequest {
        course_file,
        golfer,
        hole_count_policy,
    } = payload;

    let course = course_parser(options, hole_count_policy).parse(&course_file)?;
    let (golfer, score_source) = match golfer.scores {
        Some(scores) => (Golfer::new(golfer.name, scores)?, ScoreSource::Entered),
        None => (Golfer::at_par(golfer.name, &course), ScoreSource::DefaultPar),
    };
    golfer.check_alignment(&course)?;

    let scorecard = ScorecardReport::build(&course, &golfer)?.summary();

    Ok(Json(ScorecardResponse {
        course: CourseView::from(&course),
        score_source,
        scorecard,
    }))
}
