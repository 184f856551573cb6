//! # Platform Organization Roles
//!
//! This crate provides the built-in organization roles of the Relay platform.
//!
//! ## Overview
//!
//! Every principal holds exactly one coarse role inside an organization.
//! Fine-grained RBAC (see `platform-rbac`) sits on top of these: fixed roles
//! are *granted* to an organization role, and every member holding that role
//! receives the fixed role's permissions without an explicit assignment.
//!
//! ```text
//! Viewer < Editor < Admin
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use platform_org::OrganizationRole;
//!
//! let role = OrganizationRole::parse("editor").unwrap();
//! assert!(role.includes(OrganizationRole::Viewer));
//! assert!(!role.includes(OrganizationRole::Admin));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support (enabled by default)

pub mod roles;

// Re-export main types for convenience
pub use roles::OrganizationRole;
