use crate::server::{error::AppError, util::pagination::PageParams};
use test_utils::{builder::TestBuilder, factory};

mod advanced;
mod auth;
mod catalog;
mod developer;
mod game;
mod misc;
mod review;
