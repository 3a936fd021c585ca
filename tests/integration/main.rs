//! Integration tests

mod common;
mod config_test;
mod http_test;
