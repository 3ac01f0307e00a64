#[cfg(feature = "web")]
pub mod admin;

#[cfg(feature = "web")]
pub mod advanced;

#[cfg(feature = "web")]
pub mod auth;

#[cfg(feature = "web")]
pub mod dashboard;

#[cfg(feature = "web")]
pub mod developer;

#[cfg(feature = "web")]
pub mod game;

#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod misc;

#[cfg(feature = "web")]
pub mod review;

#[cfg(feature = "web")]
pub mod steam;
