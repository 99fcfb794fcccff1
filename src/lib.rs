//! Pathway Finder - Branching quiz that recommends a teaching pathway
//!
//! A participant answers a data-defined graph of questions; each answer picks
//! the next question until an outcome recommends a course of study.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
