//! Data transfer objects shared by the web client and the server.

pub mod action_log;
pub mod advanced;
pub mod api;
pub mod dashboard;
pub mod developer;
pub mod game;
pub mod misc;
pub mod review;
pub mod steam;
pub mod user;
