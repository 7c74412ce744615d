//! Adapters - implementations of the ports against concrete technology.

pub mod ai;
pub mod document;
pub mod http;
