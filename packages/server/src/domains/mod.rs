// Business domains
pub mod analytics;
pub mod auth;
pub mod chat;
pub mod member;
pub mod rooms;
