pub mod audit;
pub mod candidate;
pub mod db_init;
pub mod settings;
