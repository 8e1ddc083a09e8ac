//! Agent integration
//!
//! Tools implementing Rig's `Tool` trait, usable from a Rig agent or served
//! to an MCP host through [`crate::server`].

pub mod tools;
