//! Kepswell - HR performance appraisal service
//!
//! Monthly appraisals scored against division-specific criteria, ranked with
//! SMART (Simple Multi-Attribute Rating Technique).
//!
//! # Layout
//! - `config`: layered configuration
//! - `entity`: SeaORM entities
//! - `errors`: unified error type
//! - `middlewares`: JWT authentication and role gates
//! - `models`: request/response and domain models
//! - `routes`: HTTP routes
//! - `runtime`: startup and shutdown
//! - `services`: business logic, including the ranking engine
//! - `storage`: storage layer (SeaORM)
//! - `utils`: JWT, validation and extractor helpers

pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
