//! PrepFlow — turns a job description into an interview-preparation plan.
//!
//! Server side: [`routes::build_router`] exposes the plan endpoint.
//! Client side: [`session::Session`] drives a [`requestor::PlanRequestor`]
//! and [`render`] turns the result into Markdown.

pub mod config;
pub mod errors;
pub mod llm_client;
pub mod plan;
pub mod render;
pub mod requestor;
pub mod routes;
pub mod session;
pub mod state;
