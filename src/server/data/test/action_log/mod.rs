use crate::server::{
    data::action_log::ActionLogRepository,
    model::action_log::{LogAction, LogStatus, NewActionLog},
    util::pagination::PageParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
