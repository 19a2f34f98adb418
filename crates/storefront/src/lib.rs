//! Neon Merch Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing the router and stores to be tested in-process.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod store;
