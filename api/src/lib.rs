//! # StaffDesk API
//!
//! HTTP layer over the core account services: route handlers, multipart
//! extraction, JWT auth middleware, CORS and the error-to-response mapping.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
