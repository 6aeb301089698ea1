//! Application services

pub mod library;
pub mod recommend;
pub mod users;
