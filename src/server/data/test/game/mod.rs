use crate::server::{
    data::game::{GameRepository, ListOrder},
    error::AppError,
    model::game::{CreateGameParams, GameFilter, GameSortColumn, MiscFields, UpdateGameParams},
    util::pagination::PageParams,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_appid;
mod get_filter_candidates;
mod get_paginated;
mod misc;
mod stats;
mod top_by;
mod update;

fn create_params(appid: i64, name: &str) -> CreateGameParams {
    CreateGameParams {
        appid,
        name: name.to_string(),
        release_date: "Oct 10, 2007".to_string(),
        price: 7.19,
        short_description: None,
        developers: vec!["Valve".to_string()],
        publishers: vec!["Valve".to_string()],
        genres: vec!["Puzzle".to_string()],
        tags: Vec::new(),
        supported_languages: vec!["English".to_string()],
        peak_ccu: 0,
        created_by: "admin".to_string(),
    }
}
