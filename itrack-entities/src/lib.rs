#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # itrack-entities
//!
//! Reusable, agnostic domain entities for the itrack web client.
//!
//! The entities only contain generic functionality that does not reveal any
//! wire-format or transport details.

pub mod activity;
pub mod id;
pub mod time;
