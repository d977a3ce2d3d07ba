//! Shared helpers for qviz-core integration tests

#![allow(dead_code)]

pub mod fixtures;
