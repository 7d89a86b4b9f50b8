pub mod config;
pub mod dispatch;
pub mod favorite;
pub mod filters;
pub mod search;
pub mod shared;
pub mod show;
