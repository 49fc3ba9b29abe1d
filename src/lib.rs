#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod cli;
pub mod config;
pub mod controller;
pub mod model;
pub mod storage;
pub mod tui;
