//! # Folio Server Library
//!
//! Headless core of the Folio terminal portfolio. Everything in here is free of
//! terminal concerns so it can be exercised directly from tests.
//!
//! ## Modules
//!
//! - [`contact`] - Contact form draft, schema validation, transport and submission flow
//! - [`content`] - Portfolio content model (profile, skills, projects, experience)
//! - [`taskpool`] - Task pool for running the outbound requests off the event loop
//! - [`validation`] - The [`validation::Validator`] trait shared by both crates

pub mod contact;
pub mod content;
pub mod taskpool;
pub mod validation;
