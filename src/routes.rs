use std::sync::Arc;

use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{
    AppState, catalog,
    error::AppResult,
    models::{ListParams, ScheduleForm},
    query::ScheduleQuery,
    service::ScheduleService,
    templates,
};

pub async fn schedule_index(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> AppResult<Html<String>> {
    let query = ScheduleQuery::from_params(&params);
    let (listings, toggles) = state.schedules.list(&query).await?;
    Ok(Html(templates::schedule_index(&listings, &query, toggles)))
}

pub async fn schedule_details(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Html<String>> {
    let detail = state.schedules.get(id).await?;
    Ok(Html(templates::schedule_details(&detail)))
}

pub async fn schedule_create_form(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let movies = state.schedules.movie_titles().await?;
    let tickets = state.schedules.ticket_types().await?;
    Ok(Html(templates::schedule_form(
        "New schedule",
        "/schedules/new",
        &ScheduleForm::default(),
        &movies,
        &tickets,
        None,
        &[],
    )))
}

pub async fn schedule_create(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ScheduleForm>,
) -> AppResult<Response> {
    match form.validate() {
        Ok(valid) => {
            state.schedules.create(&valid).await?;
            Ok(Redirect::to("/").into_response())
        }
        Err(errors) => {
            // Invalid input is never persisted; re-render with it intact.
            let movies = state.schedules.movie_titles().await?;
            let tickets = state.schedules.ticket_types().await?;
            let body = templates::schedule_form(
                "New schedule",
                "/schedules/new",
                &form,
                &movies,
                &tickets,
                None,
                &errors,
            );
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(body)).into_response())
        }
    }
}

pub async fn schedule_edit_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Html<String>> {
    let detail = state.schedules.get(id).await?;
    let movies = state.schedules.movie_titles().await?;
    let tickets = state.schedules.ticket_types().await?;
    Ok(Html(templates::schedule_form(
        "Edit schedule",
        &format!("/schedules/{id}/edit"),
        &detail.to_form(),
        &movies,
        &tickets,
        Some(&ScheduleService::status_options()),
        &[],
    )))
}

pub async fn schedule_edit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Form(form): Form<ScheduleForm>,
) -> AppResult<Response> {
    match form.validate() {
        Ok(valid) => {
            state.schedules.update(id, &valid).await?;
            Ok(Redirect::to("/").into_response())
        }
        Err(errors) => {
            let movies = state.schedules.movie_titles().await?;
            let tickets = state.schedules.ticket_types().await?;
            let body = templates::schedule_form(
                "Edit schedule",
                &format!("/schedules/{id}/edit"),
                &form,
                &movies,
                &tickets,
                Some(&ScheduleService::status_options()),
                &errors,
            );
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(body)).into_response())
        }
    }
}

pub async fn schedule_delete_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Html<String>> {
    let detail = state.schedules.get(id).await?;
    Ok(Html(templates::delete_confirm(&detail)))
}

pub async fn schedule_delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Response> {
    state.schedules.delete(id).await?;
    Ok(Redirect::to("/").into_response())
}

pub async fn movie_catalog() -> Html<String> {
    Html(templates::movie_catalog(catalog::movies()))
}
