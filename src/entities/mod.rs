pub mod genre;
pub mod movie;
pub mod price;
pub mod schedule;
pub mod transaction_detail;
