//! `sp-program` — room programme model and CSV loading.
//!
//! A *programme* is the architect's list of rooms to place: name, shape
//! (circle radius or rectangle area), optional floor, optional start
//! position, and the rooms each one should end up adjacent to.  The store
//! builder in `sp-agent` turns a programme into agents.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`spec`]   | `RoomSpec`, `RoomShape`, `ProgramSpec`                    |
//! | [`loader`] | `load_program_csv`, `load_program_reader`                 |
//! | [`error`]  | `ProgramError`, `ProgramResult<T>`                        |

pub mod error;
pub mod loader;
pub mod spec;

#[cfg(test)]
mod tests;

pub use error::{ProgramError, ProgramResult};
pub use loader::{load_program_csv, load_program_reader};
pub use spec::{ProgramSpec, RoomShape, RoomSpec};
