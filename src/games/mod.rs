//! Game implementations.

pub mod jeopardy;
