mod common;

use marquee::entities::schedule::Status;
use marquee::models::ListParams;
use marquee::query::{self, ScheduleQuery, SortOrder};

fn query(sort: Option<&str>) -> ScheduleQuery {
    ScheduleQuery { sort: sort.map(str::to_string), ..Default::default() }
}

fn titles(listings: &[marquee::models::ScheduleListing]) -> Vec<String> {
    listings.iter().map(|l| l.movie_title().to_string()).collect()
}

#[tokio::test]
async fn default_sort_is_title_ascending() {
    let db = common::memory_db().await;
    let (dune, annie) = common::seed_dune_annie(&db).await;

    let listings = query::run(&db, &query(None)).await.unwrap();
    assert_eq!(titles(&listings), ["Annie", "Dune"]);
    assert_eq!(listings[0].schedule.id, annie);
    assert_eq!(listings[1].schedule.id, dune);
}

#[tokio::test]
async fn title_desc_reverses_the_default() {
    let db = common::memory_db().await;
    common::seed_dune_annie(&db).await;

    let listings = query::run(&db, &query(Some("title_desc"))).await.unwrap();
    assert_eq!(titles(&listings), ["Dune", "Annie"]);
}

#[tokio::test]
async fn start_time_tokens_sort_chronologically() {
    let db = common::memory_db().await;
    let (dune, annie) = common::seed_dune_annie(&db).await;

    let asc = query::run(&db, &query(Some("StartTime"))).await.unwrap();
    assert_eq!(asc.iter().map(|l| l.schedule.id).collect::<Vec<_>>(), [dune, annie]);

    let desc = query::run(&db, &query(Some("start_time_desc"))).await.unwrap();
    assert_eq!(desc.iter().map(|l| l.schedule.id).collect::<Vec<_>>(), [annie, dune]);
}

#[tokio::test]
async fn unrecognized_token_falls_back_to_default() {
    let db = common::memory_db().await;
    common::seed_dune_annie(&db).await;

    let listings = query::run(&db, &query(Some("garbage"))).await.unwrap();
    assert_eq!(titles(&listings), ["Annie", "Dune"]);
    assert_eq!(SortOrder::parse(Some("garbage")), SortOrder::TitleAsc);
    assert_eq!(SortOrder::parse(None), SortOrder::TitleAsc);
}

#[tokio::test]
async fn title_filter_returns_only_matches() {
    let db = common::memory_db().await;
    common::seed_dune_annie(&db).await;

    let q = ScheduleQuery { title: Some("Annie".to_string()), ..Default::default() };
    let listings = query::run(&db, &q).await.unwrap();
    assert_eq!(titles(&listings), ["Annie"]);
}

#[tokio::test]
async fn title_filter_is_case_insensitive_both_ways() {
    let db = common::memory_db().await;
    common::seed_dune_annie(&db).await;

    for needle in ["dune", "DUNE", "Dune", "uNe"] {
        let q = ScheduleQuery { title: Some(needle.to_string()), ..Default::default() };
        let listings = query::run(&db, &q).await.unwrap();
        assert_eq!(titles(&listings), ["Dune"], "needle {needle:?}");
    }
}

#[tokio::test]
async fn genre_filter_matches_through_the_movie() {
    let db = common::memory_db().await;
    let (dune, _) = common::seed_dune_annie(&db).await;

    let q = ScheduleQuery { genre: Some("Sci-Fi".to_string()), ..Default::default() };
    let listings = query::run(&db, &q).await.unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].schedule.id, dune);
    assert_eq!(listings[0].genre_title(), "Sci-Fi");
}

#[tokio::test]
async fn conjunctive_filters_must_all_hold() {
    let db = common::memory_db().await;
    common::seed_dune_annie(&db).await;

    let q = ScheduleQuery {
        title: Some("Dune".to_string()),
        genre: Some("Musical".to_string()),
        ..Default::default()
    };
    let listings = query::run(&db, &q).await.unwrap();
    assert!(listings.is_empty());
}

#[tokio::test]
async fn date_filter_is_inclusive_lower_bound() {
    let db = common::memory_db().await;
    let (_, annie) = common::seed_dune_annie(&db).await;

    let q = ScheduleQuery { date: Some("2024-05-02".parse().unwrap()), ..Default::default() };
    let listings = query::run(&db, &q).await.unwrap();
    assert_eq!(listings.iter().map(|l| l.schedule.id).collect::<Vec<_>>(), [annie]);
}

#[tokio::test]
async fn schedule_at_midnight_of_the_filter_date_is_included() {
    let db = common::memory_db().await;
    let midnight =
        common::insert_schedule(&db, None, None, "2024-05-02T00:00:00", Status::Scheduled).await;
    let day_before =
        common::insert_schedule(&db, None, None, "2024-05-01T23:59:59", Status::Scheduled).await;

    let q = ScheduleQuery { date: Some("2024-05-02".parse().unwrap()), ..Default::default() };
    let listings = query::run(&db, &q).await.unwrap();
    let ids: Vec<i32> = listings.iter().map(|l| l.schedule.id).collect();
    assert!(ids.contains(&midnight));
    assert!(!ids.contains(&day_before));
}

#[tokio::test]
async fn listings_are_deep_fetched() {
    let db = common::memory_db().await;
    common::seed_dune_annie(&db).await;

    let listings = query::run(&db, &query(None)).await.unwrap();
    for listing in &listings {
        assert!(listing.movie.is_some());
        assert!(listing.genre.is_some());
        assert!(listing.price.is_some());
    }
}

#[test]
fn params_are_normalized() {
    let params = ListParams {
        sort_order: Some("  ".to_string()),
        search_title: Some("".to_string()),
        search_genre: Some("  Sci-Fi ".to_string()),
        search_date: Some("not-a-date".to_string()),
    };
    let q = ScheduleQuery::from_params(&params);
    assert_eq!(q.sort, None);
    assert_eq!(q.title, None);
    assert_eq!(q.genre.as_deref(), Some("Sci-Fi"));
    assert_eq!(q.date, None);
}

#[test]
fn toggle_tokens_follow_the_current_sort() {
    let cases = [
        (None, "title_desc", "StartTime"),
        (Some("title_desc"), "", "StartTime"),
        (Some("StartTime"), "", "start_time_desc"),
        (Some("start_time_desc"), "", "StartTime"),
        (Some("garbage"), "", "StartTime"),
    ];
    for (raw, title, start_time) in cases {
        let toggles = query(raw).toggles();
        assert_eq!(toggles.title, title, "current sort {raw:?}");
        assert_eq!(toggles.start_time, start_time, "current sort {raw:?}");
    }
}
