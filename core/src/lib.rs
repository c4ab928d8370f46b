//! Domain layer for courseshare: the data model shared with the hosted
//! backend, local credential checks, and the in-memory search filter used by
//! the browse screen. Everything here is plain logic so it tests natively.

pub mod auth;
pub mod filtering;
pub mod models;

pub use models::{
    Assignment, AuthSession, AuthUser, NewAssignment, Profile, Semester, UploadStats,
    PLACEHOLDER_FILE_PATH,
};
