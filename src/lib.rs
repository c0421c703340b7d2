#![deny(unused_must_use)]
#![warn(clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::enum_glob_use
)]

// Public modules for integration tests
pub mod api_response;
pub mod controller;
pub mod dto;
pub mod error;
pub mod model;
pub mod repository;
pub mod service;
pub mod state;
pub mod utils;
