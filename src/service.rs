//! Schedule admin service: validation, label-to-record resolution and
//! mutation dispatch against the schedule store. The store handle is
//! injected at construction so tests can point it at an in-memory database.

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::{
    entities::{
        genre, movie, price,
        schedule::{self, Status},
        transaction_detail,
    },
    error::{AppError, AppResult},
    models::{ScheduleDetail, ScheduleListing, ValidatedSchedule},
    query::{ScheduleQuery, SortToggles},
};

/// What to do when a submitted label matches no stored record.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ReferencePolicy {
    /// Store an absent reference and log a warning.
    #[default]
    Permissive,
    /// Fail the mutation; nothing is persisted.
    Strict,
}

/// Outcome of a label lookup, surfaced as a value so the caller decides
/// what an unmatched label means.
#[derive(Clone, Debug)]
pub enum Resolution<T> {
    Found(T),
    NotFound(String),
}

#[derive(Clone)]
pub struct ScheduleService {
    db: DatabaseConnection,
    policy: ReferencePolicy,
}

impl ScheduleService {
    pub fn new(db: DatabaseConnection, policy: ReferencePolicy) -> Self {
        Self { db, policy }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Resolves a movie title to a record. Ties on duplicate titles break
    /// toward the lowest id.
    pub async fn resolve_movie(&self, title: &str) -> AppResult<Resolution<movie::Model>> {
        let found = movie::Entity::find()
            .filter(movie::Column::Title.eq(title))
            .order_by_asc(movie::Column::Id)
            .one(&self.db)
            .await?;
        Ok(match found {
            Some(movie) => Resolution::Found(movie),
            None => Resolution::NotFound(title.to_string()),
        })
    }

    /// Resolves a ticket-type label to a price record, lowest id first.
    pub async fn resolve_price(&self, ticket_type: &str) -> AppResult<Resolution<price::Model>> {
        let found = price::Entity::find()
            .filter(price::Column::TicketType.eq(ticket_type))
            .order_by_asc(price::Column::Id)
            .one(&self.db)
            .await?;
        Ok(match found {
            Some(price) => Resolution::Found(price),
            None => Resolution::NotFound(ticket_type.to_string()),
        })
    }

    fn apply_policy<T>(
        &self,
        kind: &'static str,
        resolution: Resolution<T>,
    ) -> AppResult<Option<T>> {
        match resolution {
            Resolution::Found(record) => Ok(Some(record)),
            Resolution::NotFound(label) => match self.policy {
                ReferencePolicy::Permissive => {
                    tracing::warn!(kind, label = %label, "reference left unresolved");
                    Ok(None)
                }
                ReferencePolicy::Strict => Err(AppError::UnresolvedReference { kind, label }),
            },
        }
    }

    pub async fn get(&self, id: i32) -> AppResult<ScheduleDetail> {
        let schedule =
            schedule::Entity::find_by_id(id).one(&self.db).await?.ok_or(AppError::NotFound)?;

        let movie = schedule.find_related(movie::Entity).one(&self.db).await?;
        let genre = match &movie {
            Some(movie) => movie.find_related(genre::Entity).one(&self.db).await?,
            None => None,
        };
        let price = schedule.find_related(price::Entity).one(&self.db).await?;
        let transactions =
            schedule.find_related(transaction_detail::Entity).all(&self.db).await?;

        Ok(ScheduleDetail { schedule, movie, genre, price, transactions })
    }

    pub async fn create(&self, form: &ValidatedSchedule) -> AppResult<i32> {
        let movie = self.apply_policy("movie", self.resolve_movie(&form.movie_title).await?)?;
        let price =
            self.apply_policy("ticket type", self.resolve_price(&form.ticket_type).await?)?;

        let model = schedule::ActiveModel {
            id: Default::default(),
            movie_id: Set(movie.map(|m| m.id)),
            price_id: Set(price.map(|p| p.id)),
            start_time: Set(form.start_time.to_string()),
            status: Set(form.status),
        };

        let inserted = schedule::Entity::insert(model).exec(&self.db).await?;
        tracing::debug!(id = inserted.last_insert_id, "schedule created");
        Ok(inserted.last_insert_id)
    }

    /// Full replacement of the editable fields. The path id must match the
    /// payload id before anything touches the store.
    pub async fn update(&self, id: i32, form: &ValidatedSchedule) -> AppResult<()> {
        if form.id != Some(id) {
            return Err(AppError::IdentityMismatch);
        }

        let movie = self.apply_policy("movie", self.resolve_movie(&form.movie_title).await?)?;
        let price =
            self.apply_policy("ticket type", self.resolve_price(&form.ticket_type).await?)?;

        let model = schedule::ActiveModel {
            id: Set(id),
            movie_id: Set(movie.map(|m| m.id)),
            price_id: Set(price.map(|p| p.id)),
            start_time: Set(form.start_time.to_string()),
            status: Set(form.status),
        };

        match schedule::Entity::update(model).exec(&self.db).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => {
                // The row was not where we left it: deleted concurrently
                // means NotFound, still present means a genuine conflict.
                if self.exists(id).await? {
                    Err(AppError::Conflict)
                } else {
                    Err(AppError::NotFound)
                }
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Idempotent: deleting an absent schedule succeeds and writes nothing.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if let Some(schedule) = schedule::Entity::find_by_id(id).one(&self.db).await? {
            schedule.delete(&self.db).await?;
            tracing::debug!(id, "schedule deleted");
        }
        Ok(())
    }

    pub async fn list(
        &self,
        query: &ScheduleQuery,
    ) -> AppResult<(Vec<ScheduleListing>, SortToggles)> {
        let listings = crate::query::run(&self.db, query).await?;
        Ok((listings, query.toggles()))
    }

    /// Distinct movie titles for the selection dropdowns.
    pub async fn movie_titles(&self) -> AppResult<Vec<String>> {
        Ok(movie::Entity::find()
            .select_only()
            .column(movie::Column::Title)
            .distinct()
            .order_by_asc(movie::Column::Title)
            .into_tuple()
            .all(&self.db)
            .await?)
    }

    /// Distinct ticket-type labels for the selection dropdowns.
    pub async fn ticket_types(&self) -> AppResult<Vec<String>> {
        Ok(price::Entity::find()
            .select_only()
            .column(price::Column::TicketType)
            .distinct()
            .order_by_asc(price::Column::TicketType)
            .into_tuple()
            .all(&self.db)
            .await?)
    }

    /// Every status is offered; no transition is rejected.
    pub fn status_options() -> Vec<Status> {
        use sea_orm::Iterable;
        Status::iter().collect()
    }

    async fn exists(&self, id: i32) -> AppResult<bool> {
        Ok(schedule::Entity::find_by_id(id).one(&self.db).await?.is_some())
    }
}
