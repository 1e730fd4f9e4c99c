//! Rendering for CI surfaces (Markdown job summary, GitHub annotations).
//!
//! Renderers are pure: they format already-classified data and never touch the filesystem or
//! environment.

#![forbid(unsafe_code)]

mod gha;
mod markdown;
mod model;

pub use gha::render_github_annotations;
pub use markdown::{render_centralized, render_decentralized, render_markdown};
pub use model::RenderOptions;
