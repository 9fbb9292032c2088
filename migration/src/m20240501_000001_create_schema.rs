use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Genre::Table)
                    .if_not_exists()
                    .col(pk_auto(Genre::Id))
                    .col(string(Genre::Title))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Movie::Table)
                    .if_not_exists()
                    .col(pk_auto(Movie::Id))
                    .col(string(Movie::Title))
                    .col(integer_null(Movie::GenreId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_genre")
                            .from(Movie::Table, Movie::GenreId)
                            .to(Genre::Table, Genre::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Price::Table)
                    .if_not_exists()
                    .col(pk_auto(Price::Id))
                    .col(string(Price::TicketType))
                    .col(double(Price::Amount))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Schedule::Table)
                    .if_not_exists()
                    .col(pk_auto(Schedule::Id))
                    .col(integer_null(Schedule::MovieId))
                    .col(integer_null(Schedule::PriceId))
                    .col(string(Schedule::StartTime))
                    .col(string(Schedule::Status))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_movie")
                            .from(Schedule::Table, Schedule::MovieId)
                            .to(Movie::Table, Movie::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_price")
                            .from(Schedule::Table, Schedule::PriceId)
                            .to(Price::Table, Price::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_schedule_start_time")
                    .table(Schedule::Table)
                    .col(Schedule::StartTime)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TransactionDetail::Table)
                    .if_not_exists()
                    .col(pk_auto(TransactionDetail::Id))
                    .col(integer(TransactionDetail::ScheduleId))
                    .col(integer(TransactionDetail::Quantity))
                    .col(double(TransactionDetail::Amount))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transaction_detail_schedule")
                            .from(TransactionDetail::Table, TransactionDetail::ScheduleId)
                            .to(Schedule::Table, Schedule::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(TransactionDetail::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Schedule::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Price::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Movie::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Genre::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Genre {
    Table,
    Id,
    Title,
}

#[derive(DeriveIden)]
enum Movie {
    Table,
    Id,
    Title,
    GenreId,
}

#[derive(DeriveIden)]
enum Price {
    Table,
    Id,
    TicketType,
    Amount,
}

#[derive(DeriveIden)]
enum Schedule {
    Table,
    Id,
    MovieId,
    PriceId,
    StartTime,
    Status,
}

#[derive(DeriveIden)]
enum TransactionDetail {
    Table,
    Id,
    ScheduleId,
    Quantity,
    Amount,
}
