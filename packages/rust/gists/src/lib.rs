//! Gist fetching and HTML rendering.
//!
//! This crate provides:
//! - [`GistClient`] — fetches a user's public Gist listing from the GitHub API
//! - [`render_gists`] / [`render_feed`] — pure HTML renderers for the listing

pub mod client;
pub mod render;

pub use client::GistClient;
pub use render::{render_feed, render_gists};
