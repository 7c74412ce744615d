//! Handbook Advisor - AI-assisted exercise suggestions
//!
//! Serves a single-page form that forwards a free-text problem description,
//! together with the handbook 'Öffentliches Gestalten' as a PDF attachment,
//! to the Gemini API and renders the returned suggestions.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
