//! The catalog backend: REST API, persistence and the Steam proxy.
//!
//! Requests travel `router` -> `controller` -> `service` -> `data` -> `entity`.
//! Controllers decide who may call an endpoint and translate DTOs into the
//! parameter types in `model`; services own the catalog rules (scoring, review
//! ownership, audit logging); the `data` repositories are the only code that
//! touches sea-orm and hand back domain models rather than entity rows.
//!
//! Around that chain:
//!
//! - `config` reads the environment once at startup
//! - `startup` connects SQLite, runs migrations, seeds the catalog and builds clients
//! - `state` is the `AppState` every handler receives
//! - `middleware` resolves bearer tokens and identity-provider sessions
//! - `scheduler` purges the Steam cache and optionally re-syncs prices
//! - `router` assembles routes, rate limits, CORS and the OpenAPI document
//!
//! Only compiled with the `server` feature.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
