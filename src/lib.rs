pub mod catalog;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod query;
pub mod routes;
pub mod service;
pub mod templates;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{config::Config, service::ScheduleService};

pub struct AppState {
    pub config: Arc<Config>,
    pub schedules: ScheduleService,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::schedule_index))
        .route("/movies", get(routes::movie_catalog))
        .route(
            "/schedules/new",
            get(routes::schedule_create_form).post(routes::schedule_create),
        )
        .route("/schedules/{id}", get(routes::schedule_details))
        .route(
            "/schedules/{id}/edit",
            get(routes::schedule_edit_form).post(routes::schedule_edit),
        )
        .route(
            "/schedules/{id}/delete",
            get(routes::schedule_delete_form).post(routes::schedule_delete),
        )
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
