use std::collections::HashMap;

use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, EntityTrait, PaginatorTrait, Set, Statement,
};

use crate::{
    catalog,
    entities::{genre, movie, price},
    error::AppResult,
};

pub async fn connect_and_migrate(database_url: &str) -> AppResult<DatabaseConnection> {
    let db = Database::connect(database_url).await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "PRAGMA journal_mode=WAL".to_string(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "PRAGMA synchronous=NORMAL".to_string(),
    ))
    .await?;

    Migrator::up(&db, None).await?;
    Ok(db)
}

/// Seeds genres, movies and prices from the static catalog. Runs once: a
/// non-empty movie table means a previous run already seeded.
pub async fn seed(db: &DatabaseConnection) -> AppResult<()> {
    if movie::Entity::find().count(db).await? > 0 {
        return Ok(());
    }

    let mut genre_ids: HashMap<&str, i32> = HashMap::new();
    for entry in catalog::movies() {
        if !genre_ids.contains_key(entry.genre) {
            let inserted = genre::Entity::insert(genre::ActiveModel {
                id: Default::default(),
                title: Set(entry.genre.to_string()),
            })
            .exec(db)
            .await?;
            genre_ids.insert(entry.genre, inserted.last_insert_id);
        }

        movie::Entity::insert(movie::ActiveModel {
            id: Default::default(),
            title: Set(entry.title.to_string()),
            genre_id: Set(genre_ids.get(entry.genre).copied()),
        })
        .exec(db)
        .await?;
    }

    for (ticket_type, amount) in catalog::TICKET_TYPES {
        price::Entity::insert(price::ActiveModel {
            id: Default::default(),
            ticket_type: Set(ticket_type.to_string()),
            amount: Set(*amount),
        })
        .exec(db)
        .await?;
    }

    tracing::info!(movies = catalog::movies().len(), "seeded catalog");
    Ok(())
}
