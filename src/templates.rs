use axum::http::StatusCode;
use maud::{DOCTYPE, Markup, html};

use crate::{
    catalog::CatalogEntry,
    entities::schedule::Status,
    models::{ScheduleDetail, ScheduleForm, ScheduleListing},
    query::{ScheduleQuery, SortToggles},
};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

pub fn schedule_index(
    listings: &[ScheduleListing],
    query: &ScheduleQuery,
    toggles: SortToggles,
) -> String {
    page(
        "Schedules",
        html! {
            div class="max-w-5xl mx-auto px-6 py-10" {
                div class="flex items-start justify-between gap-6" {
                    h1 class="text-3xl font-bold text-gray-900" { "Schedules" }
                    div class="flex gap-4" {
                        a class="text-sm text-blue-600 hover:text-blue-800" href="/movies" { "Explore movies" }
                        a class="rounded-md bg-blue-600 px-4 py-2 text-sm font-semibold text-white hover:bg-blue-700" href="/schedules/new" { "New schedule" }
                    }
                }

                form class="mt-6 bg-white shadow rounded-lg p-4 flex flex-wrap items-end gap-4" method="get" action="/" {
                    input type="hidden" name="sort_order" value=(query.sort.as_deref().unwrap_or(""));
                    div {
                        label class="block text-sm font-medium text-gray-700" for="search_title" { "Movie title" }
                        input class="mt-1 rounded-md border border-gray-300 px-3 py-1.5" name="search_title" id="search_title" value=(query.title.as_deref().unwrap_or(""));
                    }
                    div {
                        label class="block text-sm font-medium text-gray-700" for="search_genre" { "Genre" }
                        input class="mt-1 rounded-md border border-gray-300 px-3 py-1.5" name="search_genre" id="search_genre" value=(query.genre.as_deref().unwrap_or(""));
                    }
                    div {
                        label class="block text-sm font-medium text-gray-700" for="search_date" { "On or after" }
                        input class="mt-1 rounded-md border border-gray-300 px-3 py-1.5" type="date" name="search_date" id="search_date" value=(query.date.map(|d| d.to_string()).unwrap_or_default());
                    }
                    button class="rounded-md bg-gray-800 px-4 py-2 text-sm font-semibold text-white hover:bg-gray-900" type="submit" { "Filter" }
                    a class="text-sm text-gray-500 hover:text-gray-700" href="/" { "Clear" }
                }

                @if listings.is_empty() {
                    div class="mt-8 bg-white shadow rounded-lg p-8" {
                        p class="text-gray-600" { "No schedules match." }
                    }
                } @else {
                    div class="mt-8 bg-white shadow rounded-lg overflow-hidden" {
                        table class="min-w-full divide-y divide-gray-200" {
                            thead class="bg-gray-50" {
                                tr {
                                    th class="px-4 py-3 text-left text-sm font-semibold text-gray-700" {
                                        a class="hover:text-blue-600" href=(sort_link(toggles.title, query)) { "Movie" }
                                    }
                                    th class="px-4 py-3 text-left text-sm font-semibold text-gray-700" { "Genre" }
                                    th class="px-4 py-3 text-left text-sm font-semibold text-gray-700" {
                                        a class="hover:text-blue-600" href=(sort_link(toggles.start_time, query)) { "Start time" }
                                    }
                                    th class="px-4 py-3 text-left text-sm font-semibold text-gray-700" { "Ticket" }
                                    th class="px-4 py-3 text-left text-sm font-semibold text-gray-700" { "Status" }
                                    th class="px-4 py-3" {}
                                }
                            }
                            tbody class="divide-y divide-gray-200" {
                                @for listing in listings {
                                    (schedule_row(listing))
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

fn schedule_row(listing: &ScheduleListing) -> Markup {
    let id = listing.schedule.id;
    html! {
        tr {
            td class="px-4 py-3 text-sm text-gray-900" { (listing.movie_title()) }
            td class="px-4 py-3 text-sm text-gray-600" { (listing.genre_title()) }
            td class="px-4 py-3 text-sm text-gray-600" { (listing.start_time_display()) }
            td class="px-4 py-3 text-sm text-gray-600" {
                @if let Some(price) = &listing.price {
                    (price.ticket_type) " · $" (format!("{:.2}", price.amount))
                } @else {
                    "—"
                }
            }
            td class="px-4 py-3 text-sm text-gray-600" { (listing.schedule.status) }
            td class="px-4 py-3 text-sm text-right space-x-3" {
                a class="text-blue-600 hover:text-blue-800" href=(format!("/schedules/{id}")) { "Details" }
                a class="text-blue-600 hover:text-blue-800" href=(format!("/schedules/{id}/edit")) { "Edit" }
                a class="text-red-600 hover:text-red-800" href=(format!("/schedules/{id}/delete")) { "Delete" }
            }
        }
    }
}

fn sort_link(token: &str, query: &ScheduleQuery) -> String {
    let mut params = vec![format!("sort_order={}", urlencoding::encode(token))];
    if let Some(title) = &query.title {
        params.push(format!("search_title={}", urlencoding::encode(title)));
    }
    if let Some(genre) = &query.genre {
        params.push(format!("search_genre={}", urlencoding::encode(genre)));
    }
    if let Some(date) = query.date {
        params.push(format!("search_date={date}"));
    }
    format!("/?{}", params.join("&"))
}

pub fn schedule_details(detail: &ScheduleDetail) -> String {
    let id = detail.schedule.id;
    page(
        "Schedule details",
        html! {
            div class="max-w-2xl mx-auto px-6 py-10" {
                div class="bg-white shadow rounded-lg p-8" {
                    h1 class="text-2xl font-bold text-gray-900" { "Schedule #" (id) }
                    dl class="mt-6 space-y-3" {
                        (field("Movie", detail.movie_title()))
                        (field("Genre", detail.genre_title()))
                        (field("Start time", &detail.start_time_display()))
                        (field("Ticket type", detail.ticket_type()))
                        (field("Status", detail.schedule.status.as_str()))
                    }

                    h2 class="mt-8 text-lg font-semibold text-gray-900" { "Sales" }
                    @if detail.transactions.is_empty() {
                        p class="mt-2 text-sm text-gray-500" { "No sales recorded." }
                    } @else {
                        ul class="mt-2 space-y-1" {
                            @for tx in &detail.transactions {
                                li class="text-sm text-gray-700" {
                                    (tx.quantity) " × $" (format!("{:.2}", tx.amount))
                                }
                            }
                        }
                    }

                    div class="mt-8 flex gap-4" {
                        a class="text-blue-600 hover:text-blue-800" href=(format!("/schedules/{id}/edit")) { "Edit" }
                        a class="text-gray-500 hover:text-gray-700" href="/" { "Back to list" }
                    }
                }
            }
        },
    )
}

fn field(label: &str, value: &str) -> Markup {
    html! {
        div class="flex gap-4" {
            dt class="w-32 text-sm font-medium text-gray-500" { (label) }
            dd class="text-sm text-gray-900" { (value) }
        }
    }
}

/// Shared create/edit form. `statuses` is only offered on edit; a new
/// schedule always starts out Scheduled.
pub fn schedule_form(
    heading: &str,
    action: &str,
    form: &ScheduleForm,
    movie_titles: &[String],
    ticket_types: &[String],
    statuses: Option<&[Status]>,
    errors: &[String],
) -> String {
    page(
        heading,
        html! {
            div class="max-w-xl mx-auto px-6 py-10" {
                div class="bg-white shadow rounded-lg p-8" {
                    h1 class="text-2xl font-bold text-gray-900" { (heading) }

                    @if !errors.is_empty() {
                        div class="mt-4 rounded-md bg-red-50 border border-red-200 p-4" {
                            ul class="space-y-1" {
                                @for error in errors {
                                    li class="text-sm text-red-700" { (error) }
                                }
                            }
                        }
                    }

                    form class="mt-6 space-y-5" method="post" action=(action) {
                        @if let Some(id) = form.id {
                            input type="hidden" name="id" value=(id);
                        }

                        div {
                            label class="block text-sm font-medium text-gray-700" for="movie_title" { "Movie" }
                            select class="mt-1 w-full rounded-md border border-gray-300 px-3 py-2" name="movie_title" id="movie_title" {
                                @for title in movie_titles {
                                    option value=(title) selected[*title == form.movie_title] { (title) }
                                }
                            }
                        }

                        div {
                            label class="block text-sm font-medium text-gray-700" for="ticket_type" { "Ticket type" }
                            select class="mt-1 w-full rounded-md border border-gray-300 px-3 py-2" name="ticket_type" id="ticket_type" {
                                @for ticket in ticket_types {
                                    option value=(ticket) selected[*ticket == form.ticket_type] { (ticket) }
                                }
                            }
                        }

                        div {
                            label class="block text-sm font-medium text-gray-700" for="start_time" { "Start time" }
                            input class="mt-1 w-full rounded-md border border-gray-300 px-3 py-2" type="datetime-local" name="start_time" id="start_time" value=(form.start_time) required;
                        }

                        @if let Some(statuses) = statuses {
                            div {
                                label class="block text-sm font-medium text-gray-700" for="status" { "Status" }
                                select class="mt-1 w-full rounded-md border border-gray-300 px-3 py-2" name="status" id="status" {
                                    @for status in statuses {
                                        option value=(status.as_str()) selected[form.status.as_deref() == Some(status.as_str())] { (status.as_str()) }
                                    }
                                }
                            }
                        }

                        div class="flex items-center gap-4" {
                            button class="rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Save" }
                            a class="text-sm text-gray-500 hover:text-gray-700" href="/" { "Cancel" }
                        }
                    }
                }
            }
        },
    )
}

pub fn delete_confirm(detail: &ScheduleDetail) -> String {
    let id = detail.schedule.id;
    page(
        "Delete schedule",
        html! {
            div class="max-w-xl mx-auto px-6 py-10" {
                div class="bg-white shadow rounded-lg p-8" {
                    h1 class="text-2xl font-bold text-gray-900" { "Delete schedule #" (id) "?" }
                    p class="mt-4 text-gray-700" {
                        (detail.movie_title()) " · " (detail.start_time_display())
                    }
                    form class="mt-6 flex items-center gap-4" method="post" action=(format!("/schedules/{id}/delete")) {
                        button class="rounded-md bg-red-600 px-4 py-2 font-semibold text-white hover:bg-red-700" type="submit" { "Delete" }
                        a class="text-sm text-gray-500 hover:text-gray-700" href="/" { "Cancel" }
                    }
                }
            }
        },
    )
}

pub fn movie_catalog(movies: &[CatalogEntry]) -> String {
    page(
        "Movies",
        html! {
            div class="max-w-3xl mx-auto px-6 py-10" {
                div class="flex items-start justify-between gap-6" {
                    h1 class="text-3xl font-bold text-gray-900" { "Movies" }
                    a class="text-sm text-blue-600 hover:text-blue-800" href="/" { "Schedules" }
                }
                div class="mt-8 grid gap-4 sm:grid-cols-2" {
                    @for movie in movies {
                        div class="bg-white shadow rounded-lg p-5" {
                            h2 class="font-semibold text-gray-900" { (movie.title) }
                            p class="mt-1 text-sm text-gray-500" { (movie.genre) }
                        }
                    }
                }
            }
        },
    )
}

pub fn error_page(status: StatusCode, message: String) -> String {
    page(
        "Error",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { (status.as_u16()) }
                        p class="mt-4 text-gray-700" { (message) }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body class="bg-gray-50" { (body) }
        }
    }
    .into_string()
}
