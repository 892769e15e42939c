#![allow(dead_code)]

pub mod source;

pub use source::InMemorySource;
