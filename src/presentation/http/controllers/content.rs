// src/presentation/http/controllers/content.rs
use crate::application::{
    dto::{EntryCardDto, EntryListDto},
    queries::content::{GetEntryBySlugQuery, ListEntriesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EntryListParams {
    /// Maximum number of entries to return; omit for all.
    #[serde(default)]
    pub limit: Option<u32>,
}

#[utoipa::path(
    get,
    path = "/api/v1/entries",
    params(EntryListParams),
    responses(
        (status = 200, description = "Visible entries, newest first.", body = EntryListDto),
        (status = 500, description = "An entry has an unreadable publication date.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Content"
)]
pub async fn list_entries(
    Extension(state): Extension<HttpState>,
    Query(params): Query<EntryListParams>,
) -> HttpResult<Json<EntryListDto>> {
    state
        .services
        .content_queries
        .list_entries(ListEntriesQuery {
            limit: params.limit,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/entries/{slug}",
    params(("slug" = String, Path, description = "Entry slug")),
    responses(
        (status = 200, description = "The entry.", body = EntryCardDto),
        (status = 404, description = "Unknown or hidden entry.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Content"
)]
pub async fn get_entry_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<EntryCardDto>> {
    state
        .services
        .content_queries
        .get_entry_by_slug(GetEntryBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}
