// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod repos;
pub mod time;

pub use repos::{CountingContentRepo, FailingContentRepo};
pub use time::{fixed_clock, fixed_now};
