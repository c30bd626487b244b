//! Data models for pdftext.

pub mod config;
pub mod result;
