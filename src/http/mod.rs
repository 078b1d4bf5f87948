//! HTTP layer for the contributions service.
//!
//! ```text
//! GET /contributions?name=..&dayCount=..
//!        │
//!        ▼
//!  handlers (query validation, error mapping)
//!        │
//!        ▼
//!  core::engine (fetch → extract → interval → aggregate)
//! ```
//!
//! Every response, success or failure, goes through [`dto::ApiResponse`]
//! so the JSON envelope always carries a `resultCode`.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
