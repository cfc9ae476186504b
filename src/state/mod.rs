//! Client-side state modules.
//!
//! State structs are plain fields with no signals of their own; pages
//! wrap them in `RwSignal` and apply every mutation through it.

pub mod forms;
