//! Paths and payloads of the remote records service.
//!
//! - `GET    /users`       → `Vec<Student>`
//! - `POST   /users`       body [`StudentDraft`] → `Student`
//! - `PUT    /users/{id}`  body [`StudentDraft`] → `Student`
//! - `DELETE /users/{id}`  → no content
//! - `GET    /calls`       → [`CertificateList`]

pub use crate::model::certificate::CertificateList;
pub use crate::model::student::StudentDraft;

pub const USERS_PATH: &str = "/users";
pub const CALLS_PATH: &str = "/calls";
