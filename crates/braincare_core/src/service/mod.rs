//! Use-case services.
//!
//! # Responsibility
//! - Compose stores, session gate and projection into use-case APIs.
//! - Keep front ends decoupled from storage details.

pub mod catalog_service;
