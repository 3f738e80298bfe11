//! User-facing front-ends built on the registry API

pub mod cli;
