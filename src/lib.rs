//! Client library for the college-discovery app: a query gateway to the
//! hosted table store, the screen view-models that consume it, the client
//! side search filter, and the session context that gates the admin surface.

pub mod error;
pub mod models;
pub mod screens;
pub mod search;
pub mod session;
pub mod store;
pub mod view;

pub use error::AppError;
pub use session::Session;
