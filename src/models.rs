use jiff::civil::DateTime;
use serde::Deserialize;

use crate::entities::{
    genre, movie, price,
    schedule::{self, Status},
    transaction_detail,
};

/// Query parameters accepted by the schedule list view. All optional; empty
/// strings are treated the same as absent.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ListParams {
    pub sort_order: Option<String>,
    pub search_title: Option<String>,
    pub search_genre: Option<String>,
    pub search_date: Option<String>,
}

/// Raw schedule form payload as submitted by the create/edit views. The
/// movie and ticket type arrive as human-readable labels, resolved to
/// records server-side.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ScheduleForm {
    pub id: Option<i32>,
    pub movie_title: String,
    pub ticket_type: String,
    pub start_time: String,
    pub status: Option<String>,
}

/// A schedule form that passed field validation. Start time is a parsed
/// civil datetime and the status is a known variant.
#[derive(Clone, Debug)]
pub struct ValidatedSchedule {
    pub id: Option<i32>,
    pub movie_title: String,
    pub ticket_type: String,
    pub start_time: DateTime,
    pub status: Status,
}

impl ScheduleForm {
    /// Field-level checks only; reference resolution happens in the service.
    /// Errors keep the original input untouched for re-display.
    pub fn validate(&self) -> Result<ValidatedSchedule, Vec<String>> {
        let mut errors = Vec::new();

        let start_time = if self.start_time.trim().is_empty() {
            errors.push("start time is required".to_string());
            None
        } else {
            match self.start_time.trim().parse::<DateTime>() {
                Ok(dt) => Some(dt),
                Err(_) => {
                    errors.push(format!("start time \"{}\" is not a valid datetime", self.start_time));
                    None
                }
            }
        };

        // Absent status means the create form, which always starts Scheduled.
        let status = match self.status.as_deref() {
            None | Some("") => Some(Status::Scheduled),
            Some(raw) => {
                let parsed = Status::parse(raw);
                if parsed.is_none() {
                    errors.push(format!("\"{raw}\" is not a valid status"));
                }
                parsed
            }
        };

        match (start_time, status) {
            (Some(start_time), Some(status)) if errors.is_empty() => Ok(ValidatedSchedule {
                id: self.id,
                movie_title: self.movie_title.trim().to_string(),
                ticket_type: self.ticket_type.trim().to_string(),
                start_time,
                status,
            }),
            _ => Err(errors),
        }
    }
}

/// One row of the schedule list, deep-fetched: the caller never needs a
/// second query to display it.
#[derive(Clone, Debug)]
pub struct ScheduleListing {
    pub schedule: schedule::Model,
    pub movie: Option<movie::Model>,
    pub genre: Option<genre::Model>,
    pub price: Option<price::Model>,
}

impl ScheduleListing {
    pub fn movie_title(&self) -> &str {
        self.movie.as_ref().map(|m| m.title.as_str()).unwrap_or("—")
    }

    pub fn genre_title(&self) -> &str {
        self.genre.as_ref().map(|g| g.title.as_str()).unwrap_or("—")
    }

    pub fn start_time_display(&self) -> String {
        format_start_time(&self.schedule.start_time, "%Y-%m-%d %H:%M")
    }
}

/// A single schedule with every reference resolved, for the detail, edit
/// and delete-confirmation views.
#[derive(Clone, Debug)]
pub struct ScheduleDetail {
    pub schedule: schedule::Model,
    pub movie: Option<movie::Model>,
    pub genre: Option<genre::Model>,
    pub price: Option<price::Model>,
    pub transactions: Vec<transaction_detail::Model>,
}

impl ScheduleDetail {
    pub fn movie_title(&self) -> &str {
        self.movie.as_ref().map(|m| m.title.as_str()).unwrap_or("—")
    }

    pub fn genre_title(&self) -> &str {
        self.genre.as_ref().map(|g| g.title.as_str()).unwrap_or("—")
    }

    pub fn ticket_type(&self) -> &str {
        self.price.as_ref().map(|p| p.ticket_type.as_str()).unwrap_or("—")
    }

    pub fn start_time_display(&self) -> String {
        format_start_time(&self.schedule.start_time, "%Y-%m-%d %H:%M")
    }

    /// Prefill for the edit form, in `datetime-local` input format.
    pub fn to_form(&self) -> ScheduleForm {
        ScheduleForm {
            id: Some(self.schedule.id),
            movie_title: self.movie.as_ref().map(|m| m.title.clone()).unwrap_or_default(),
            ticket_type: self.price.as_ref().map(|p| p.ticket_type.clone()).unwrap_or_default(),
            start_time: format_start_time(&self.schedule.start_time, "%Y-%m-%dT%H:%M"),
            status: Some(self.schedule.status.as_str().to_string()),
        }
    }
}

fn format_start_time(stored: &str, fmt: &str) -> String {
    match stored.parse::<DateTime>() {
        Ok(dt) => dt.strftime(fmt).to_string(),
        Err(_) => stored.to_string(),
    }
}
