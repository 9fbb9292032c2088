//! Schedule query builder: composes filter predicates and an ordering from
//! untrusted caller-supplied parameters and materializes the result with
//! every reference resolved.

use std::collections::HashMap;

use jiff::civil::Date;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, LoaderTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};

use crate::{
    entities::{genre, movie, price, schedule},
    error::AppResult,
    models::{ListParams, ScheduleListing},
};

/// Recognized sort tokens. Anything else falls back to the default.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SortOrder {
    #[default]
    TitleAsc,
    TitleDesc,
    StartTimeAsc,
    StartTimeDesc,
}

impl SortOrder {
    pub fn parse(token: Option<&str>) -> Self {
        match token {
            Some("title_desc") => SortOrder::TitleDesc,
            Some("StartTime") => SortOrder::StartTimeAsc,
            Some("start_time_desc") => SortOrder::StartTimeDesc,
            _ => SortOrder::TitleAsc,
        }
    }
}

/// The sort tokens the list view should emit as the *next* sort for each
/// sortable column header. Stateless: derived entirely from the current
/// token, exactly mirroring how it round-trips through the URL.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SortToggles {
    pub title: &'static str,
    pub start_time: &'static str,
}

#[derive(Clone, Debug, Default)]
pub struct ScheduleQuery {
    /// Raw sort token as received; kept raw so toggle derivation matches
    /// the original URL parameter byte for byte.
    pub sort: Option<String>,
    pub title: Option<String>,
    pub genre: Option<String>,
    pub date: Option<Date>,
}

impl ScheduleQuery {
    /// Normalizes raw list parameters: trims, drops empties, and silently
    /// ignores an unparseable date. No input is an error.
    pub fn from_params(params: &ListParams) -> Self {
        let clean = |v: &Option<String>| {
            v.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
        };
        Self {
            sort: clean(&params.sort_order),
            title: clean(&params.search_title),
            genre: clean(&params.search_genre),
            date: clean(&params.search_date).and_then(|s| s.parse().ok()),
        }
    }

    pub fn sort_order(&self) -> SortOrder {
        SortOrder::parse(self.sort.as_deref())
    }

    pub fn toggles(&self) -> SortToggles {
        let raw = self.sort.as_deref().unwrap_or("");
        SortToggles {
            title: if raw.is_empty() { "title_desc" } else { "" },
            start_time: if raw == "StartTime" { "start_time_desc" } else { "StartTime" },
        }
    }
}

/// Runs the composed query and deep-fetches movie, genre and price for each
/// row. Substring filters are conjunctive and ASCII case-insensitive
/// (sqlite `LIKE`). Output order is the requested sort with schedule id as
/// the tie-breaker, so results are deterministic.
pub async fn run(db: &DatabaseConnection, query: &ScheduleQuery) -> AppResult<Vec<ScheduleListing>> {
    // The movie join also serves the default title ordering, so it is
    // unconditional; the genre join only exists for the genre filter.
    let mut find = schedule::Entity::find().join(JoinType::LeftJoin, schedule::Relation::Movie.def());

    if let Some(title) = &query.title {
        find = find.filter(movie::Column::Title.contains(title));
    }

    if let Some(genre_title) = &query.genre {
        find = find
            .join(JoinType::LeftJoin, movie::Relation::Genre.def())
            .filter(genre::Column::Title.contains(genre_title));
    }

    if let Some(date) = query.date {
        // Start times are ISO-8601 strings, so a civil date compares
        // lexicographically below every datetime of that same day:
        // "2024-05-02" <= "2024-05-02T00:00:00" and "2024-05-01T23:59:59"
        // sorts before it. This is the inclusive on-or-after-day bound.
        find = find.filter(schedule::Column::StartTime.gte(date.to_string()));
    }

    find = match query.sort_order() {
        SortOrder::TitleAsc => find.order_by_asc(movie::Column::Title),
        SortOrder::TitleDesc => find.order_by_desc(movie::Column::Title),
        SortOrder::StartTimeAsc => find.order_by_asc(schedule::Column::StartTime),
        SortOrder::StartTimeDesc => find.order_by_desc(schedule::Column::StartTime),
    };
    find = find.order_by_asc(schedule::Column::Id);

    let schedules = find.all(db).await?;
    let movies = schedules.load_one(movie::Entity, db).await?;
    let prices = schedules.load_one(price::Entity, db).await?;

    let genre_ids: Vec<i32> =
        movies.iter().flatten().filter_map(|m| m.genre_id).collect();
    let genres: HashMap<i32, genre::Model> = genre::Entity::find()
        .filter(genre::Column::Id.is_in(genre_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|g| (g.id, g))
        .collect();

    let listings = schedules
        .into_iter()
        .zip(movies)
        .zip(prices)
        .map(|((schedule, movie), price)| {
            let genre =
                movie.as_ref().and_then(|m| m.genre_id).and_then(|id| genres.get(&id)).cloned();
            ScheduleListing { schedule, movie, genre, price }
        })
        .collect();

    Ok(listings)
}
