//! Disassembler for the two-byte register-to-register form of the 8086 `mov`.
//!
//! Raw bytes are split into [`Instruction`] records by [`decode`], named by
//! [`resolve`] and rendered one per line. [`disassemble`] runs the whole
//! pipeline.

// Decoding
pub mod bits;
mod decode;
pub use decode::{decode, Instruction, INSTRUCTION_LEN};

// Naming and rendering
mod resolve;
pub use resolve::{disassemble, resolve, resolve_all, OperandOrder, Resolved};
pub mod symbol;

mod error;
pub use error::{DecodeError, Result};

pub mod env;
