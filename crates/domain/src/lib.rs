//! # ahkb-domain
//!
//! Pure domain model for the AHK script builder.
//!
//! ## Responsibilities
//! - Define **Actions** (click, sleep, run, key press, window wait) and their defaults
//! - Define the **Project** (application name, hotkey, ordered actions) and its editing operations
//! - Encode/decode the `;ACTION:` **metadata comment** line of one action
//! - Map a project to and from the persisted **JSON document**
//! - Error conventions shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod action;
pub mod document;
pub mod metadata;
pub mod project;
