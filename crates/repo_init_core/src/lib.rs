//! Core orchestration for repo-init.
//!
//! This crate holds the pieces the interactive front end drives: the
//! [`session::Session`] context object, the on-disk [`secret::SecretStore`],
//! the batch repository operations in [`operations`], and the local
//! [`clone::CloneRunner`] used to materialize repositories on disk.
//!
//! All GitHub traffic goes through the `RepositoryClient` trait from the
//! `github_client` crate, so every operation here can be tested against a
//! fake client.

pub mod clone;
pub mod errors;
pub mod operations;
pub mod secret;
pub mod session;

pub use errors::Error;
