use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::jwt::AuthUser,
    cvs::{
        dto::{
            CreateCvRequest, CvListResponse, DeleteResponse, Pagination, RenderQuery,
            UpdateCvRequest,
        },
        repo::{Cv, CvDraft},
    },
    error::AppError,
    render,
    state::AppState,
};

pub fn cv_routes() -> Router<AppState> {
    Router::new()
        .route("/cvs", get(list_cvs).post(create_cv))
        .route("/cvs/:id", get(get_cv).put(update_cv).delete(delete_cv))
        .route("/cvs/:id/render", get(render_cv))
}

/// Malformed ids are reported as NotFound, never as a parse error, so they
/// are indistinguishable from ids that belong to someone else.
fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound)
}

#[instrument(skip(state))]
pub async fn list_cvs(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(p): Query<Pagination>,
) -> Result<Json<CvListResponse>, AppError> {
    let (page, limit) = p.clamped();
    let data = Cv::list_by_owner(&state.db, user_id, limit, p.offset()).await?;
    Ok(Json(CvListResponse { data, page, limit }))
}

#[instrument(skip(state, payload))]
pub async fn create_cv(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateCvRequest>,
) -> Result<(StatusCode, Json<Cv>), AppError> {
    let title = payload.title.as_deref().unwrap_or("").trim().to_string();
    if title.is_empty() {
        warn!("create cv without title");
        return Err(AppError::Validation("Title is required".into()));
    }

    let draft = CvDraft {
        title,
        layout: payload
            .layout
            .unwrap_or_else(|| render::DEFAULT_LAYOUT.to_string()),
        data: payload.data.unwrap_or_default(),
        thumbnail: payload.thumbnail,
    };

    // Owner is always the caller; nothing in the payload can override it.
    let cv = Cv::create(&state.db, user_id, draft).await?;
    info!(cv_id = %cv.id, %user_id, "cv created");
    Ok((StatusCode::CREATED, Json(cv)))
}

#[instrument(skip(state))]
pub async fn get_cv(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Cv>, AppError> {
    let id = parse_id(&id)?;
    let cv = Cv::get_owned(&state.db, user_id, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(cv))
}

#[instrument(skip(state, payload))]
pub async fn update_cv(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateCvRequest>,
) -> Result<Json<Cv>, AppError> {
    let id = parse_id(&id)?;
    let cv = Cv::update_owned(&state.db, user_id, id, payload.into())
        .await?
        .ok_or(AppError::NotFound)?;
    info!(cv_id = %cv.id, %user_id, "cv updated");
    Ok(Json(cv))
}

#[instrument(skip(state))]
pub async fn delete_cv(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let id = parse_id(&id)?;
    let deleted = Cv::delete_owned(&state.db, user_id, id).await?;
    if !deleted {
        return Err(AppError::NotFound);
    }
    info!(cv_id = %id, %user_id, "cv deleted");
    Ok(Json(DeleteResponse {
        message: "Deleted".into(),
    }))
}

/// Server-side preview of the stored document through a layout variant.
#[instrument(skip(state))]
pub async fn render_cv(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
    Query(q): Query<RenderQuery>,
) -> Result<Html<String>, AppError> {
    let id = parse_id(&id)?;
    let cv = Cv::get_owned(&state.db, user_id, id)
        .await?
        .ok_or(AppError::NotFound)?;
    let layout = q.layout.as_deref().unwrap_or(&cv.layout);
    Ok(Html(render::render(layout, &cv.data)))
}
