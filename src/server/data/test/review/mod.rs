use crate::server::{
    data::review::ReviewRepository,
    model::review::{CreateReviewParams, UpdateReviewParams},
    util::pagination::PageParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_appid;
mod get_recent;
mod search_paginated;
mod update;
