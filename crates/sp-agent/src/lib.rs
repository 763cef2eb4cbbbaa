//! `sp-agent` — Structure-of-Arrays agent storage for the `spacepack` toolkit.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`store`]   | `AgentStore` (SoA arrays + CSR adjacency), `AgentRngs`   |
//! | [`builder`] | `AgentStoreBuilder` (fluent, validating construction)     |
//! | [`error`]   | `AgentError`, `AgentResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Propagates serde derives to the embedded sp-core types.    |

pub mod builder;
pub mod error;
pub mod store;


pub use builder::AgentStoreBuilder;
pub use error::{AgentError, AgentResult};
pub use store::{AgentRngs, AgentStore};
