mod action_log;
mod game;
mod review;
mod user;
