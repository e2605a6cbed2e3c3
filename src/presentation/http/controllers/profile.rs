// src/presentation/http/controllers/profile.rs
use crate::application::dto::{HomePageDto, SiteProfileDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/v1/profile",
    responses(
        (status = 200, description = "Bio, social links and skills.", body = SiteProfileDto)
    ),
    tag = "Profile"
)]
pub async fn get_profile(Extension(state): Extension<HttpState>) -> Json<SiteProfileDto> {
    Json(state.services.profile_queries.site_profile())
}

#[utoipa::path(
    get,
    path = "/api/v1/home",
    responses(
        (status = 200, description = "Profile plus the most recent entries.", body = HomePageDto),
        (status = 500, description = "An entry has an unreadable publication date.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Profile"
)]
pub async fn get_home(Extension(state): Extension<HttpState>) -> HttpResult<Json<HomePageDto>> {
    state.services.home_page().await.into_http().map(Json)
}
