//! Integration tests for Merkle DAG construction

mod config_integration;
mod store_integration;
mod test_utils;
mod walker_integration;
