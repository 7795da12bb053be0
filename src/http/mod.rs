//! HTTP client layer — `ContentHttp`.

pub mod client;

pub use client::ContentHttp;
