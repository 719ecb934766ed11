//! # FaithConnect Shared
//! This crate defines shared data structures and types used across the FaithConnect core.
//! It includes common definitions for users and roles, content targets, engagement marks,
//! messages, and notifications.
pub mod types;
