//! Instruction document lookup
//!
//! Finds the instruction document a run should compile and reads it.

mod loader;

pub use loader::{InstructionLoadError, InstructionLoader, InstructionSource, LoadedInstructions};
