#![allow(dead_code)]

use marquee::entities::{
    genre, movie, price,
    schedule::{self, Status},
};
use marquee::service::{ReferencePolicy, ScheduleService};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, EntityTrait, Set};

/// Fresh in-memory database with the real schema applied. A single pooled
/// connection, otherwise each checkout would see its own empty database.
pub async fn memory_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);
    let db = Database::connect(opts).await.expect("connect in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    db
}

pub fn service(db: &DatabaseConnection) -> ScheduleService {
    ScheduleService::new(db.clone(), ReferencePolicy::Permissive)
}

pub async fn insert_genre(db: &DatabaseConnection, title: &str) -> i32 {
    genre::Entity::insert(genre::ActiveModel {
        id: Default::default(),
        title: Set(title.to_string()),
    })
    .exec(db)
    .await
    .expect("insert genre")
    .last_insert_id
}

pub async fn insert_movie(db: &DatabaseConnection, title: &str, genre_id: Option<i32>) -> i32 {
    movie::Entity::insert(movie::ActiveModel {
        id: Default::default(),
        title: Set(title.to_string()),
        genre_id: Set(genre_id),
    })
    .exec(db)
    .await
    .expect("insert movie")
    .last_insert_id
}

pub async fn insert_price(db: &DatabaseConnection, ticket_type: &str, amount: f64) -> i32 {
    price::Entity::insert(price::ActiveModel {
        id: Default::default(),
        ticket_type: Set(ticket_type.to_string()),
        amount: Set(amount),
    })
    .exec(db)
    .await
    .expect("insert price")
    .last_insert_id
}

pub async fn insert_schedule(
    db: &DatabaseConnection,
    movie_id: Option<i32>,
    price_id: Option<i32>,
    start_time: &str,
    status: Status,
) -> i32 {
    schedule::Entity::insert(schedule::ActiveModel {
        id: Default::default(),
        movie_id: Set(movie_id),
        price_id: Set(price_id),
        start_time: Set(start_time.to_string()),
        status: Set(status),
    })
    .exec(db)
    .await
    .expect("insert schedule")
    .last_insert_id
}

/// The two-movie scenario used across the list tests: Dune (Sci-Fi,
/// 2024-05-01) and Annie (Musical, 2024-05-03). Returns their schedule ids
/// in insertion order.
pub async fn seed_dune_annie(db: &DatabaseConnection) -> (i32, i32) {
    let sci_fi = insert_genre(db, "Sci-Fi").await;
    let musical = insert_genre(db, "Musical").await;
    let dune = insert_movie(db, "Dune", Some(sci_fi)).await;
    let annie = insert_movie(db, "Annie", Some(musical)).await;
    let adult = insert_price(db, "Adult", 14.0).await;

    let dune_schedule =
        insert_schedule(db, Some(dune), Some(adult), "2024-05-01T18:00:00", Status::Scheduled)
            .await;
    let annie_schedule =
        insert_schedule(db, Some(annie), Some(adult), "2024-05-03T20:30:00", Status::Scheduled)
            .await;
    (dune_schedule, annie_schedule)
}
