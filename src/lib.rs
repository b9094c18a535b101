//! FinPersona Scoring API Library
//!
//! This library provides the core functionality for the FinPersona API:
//! the questionnaire wizard sessions, the pure bucketing functions that map
//! raw answers to categorical enumerations, the scoring service client, and
//! the HTTP handlers.
//!
//! # Modules
//!
//! - `bucketing`: Pure answer-to-bracket mapping functions.
//! - `config`: Configuration management.
//! - `dashboard`: Score descriptors and dashboard card assembly.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `models`: Wire and API data models.
//! - `scoring_client`: Remote scoring service client.
//! - `wizard`: Wizard session state machine.

pub mod bucketing;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod scoring_client;
pub mod wizard;
