//! Back-office library for a painting services shop.
//!
//! The heart of the crate is the estimating workflow: it turns room and
//! surface measurements plus shop-configured rates into a priced quote
//! (labor hours, paint gallons, material cost, and the final total). The
//! surrounding modules carry configuration, telemetry, and the top-level
//! error surface shared with the HTTP service.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
