pub mod database;
pub mod ids;
pub mod messaging;
pub mod repositories;
pub mod time;
