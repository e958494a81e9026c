#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Scoped option access for windows and buffers.
//!
//! Options live in three kinds of slots: one global slot per option, and a
//! local slot per window or per buffer for options with that locality. The
//! low-level accessors on [`Editor`] only ever address the local slots of the
//! *current* window and buffer. This crate's [`api`] resolves a request
//! naming an explicit window, buffer, or filetype to the one slot it means,
//! and runs the access with the current context temporarily redirected.
//!
//! # Main Types
//!
//! - [`Editor`] - option registry, workspace and the current context
//! - [`ContextGuard`] - scoped context switch, restored on drop
//! - [`api::OptionRequest`] - request parameters (`scope`, `win`, `buf`, `filetype`)
//! - [`api::Object`] - wire values
//!
//! # Request flow
//!
//! ```text
//! request ─► validate ─► (probe buffer) ─► ContextGuard::acquire
//!                                             │
//!                         response ◄─ release ◄┴─ get/set in context
//! ```

/// Scope-aware option API.
pub mod api;
/// TOML configuration loading.
pub mod config;
mod context;
mod editor;
/// Filetype hook chain.
pub mod hooks;
/// Presentation-facing notifications.
pub mod presentation;
mod probe;
/// Windows, buffers and handles.
pub mod workspace;

pub use context::{Context, ContextGuard, ScopeKind, ScopeTarget, SwitchError};
pub use editor::Editor;
pub use vellum_registry as registry;
