//! TalentLink front-end core.
//!
//! Hydration-safe rendering primitives for server-rendered pages, the domain
//! contracts shared between page components and API clients, and the
//! configuration plus audit run behind the `hydration-audit` tool.

pub mod audit;
pub mod config;
pub mod domain;
pub mod hydration;
