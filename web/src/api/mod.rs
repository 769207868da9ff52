//! Central module for organizing the gateway's main endpoints.
//!
//! This module acts as a top-level container for the page-data and
//! passthrough domains (pages, course catalog, groups), excluding core
//! authentication routes which are handled separately.

pub mod courses;
pub mod groups;
pub mod pages;
