//! Service layer for business logic orchestration
//!
//! This module contains the service layer that sits between storage and the
//! HTTP/CLI surfaces, keeping validation and fallbacks out of main.rs.

pub mod landing;

pub use landing::{ContactForm, LandingService, PageVisit, SubmissionError};
