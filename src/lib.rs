//! aidesk Library
//!
//! Task dispatch, name resolution and the service collaborators behind the
//! aidesk assistant.

pub mod assistant;
pub mod browser;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod generative;
pub mod http;
pub mod input;
pub mod openai;
pub mod resolver;
pub mod session;
pub mod speech;
pub mod tables;
pub mod task;
pub mod translation;
