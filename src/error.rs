use std::{error::Error, fmt};

use miette::{miette, Report, Severity};

use crate::symbol::{Mode, OpCode};

/// Error decoding or resolving an instruction stream.
///
/// `index` is the position of the offending instruction, counting from 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// Stream cannot be split into whole instructions.
    MalformedLength { len: usize },
    UnknownOpcode { index: usize, op_code: OpCode },
    /// Only reachable if the register table is missing an entry.
    UnknownRegister { index: usize, key: u8 },
    UnsupportedMode { index: usize, mode: Mode },
}

impl Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedLength { len } => write!(
                f,
                "Stream of {} bytes is not a whole number of 2-byte instructions",
                len
            ),
            Self::UnknownOpcode { index, op_code } => write!(
                f,
                "Unknown opcode 0b{:06b} in instruction {}",
                op_code.value(),
                index
            ),
            Self::UnknownRegister { index, key } => write!(
                f,
                "No register for key 0b{:04b} in instruction {}",
                key, index
            ),
            Self::UnsupportedMode { index, mode } => write!(
                f,
                "Addressing mode 0b{:02b} in instruction {} is not register to register",
                *mode as u8, index
            ),
        }
    }
}

impl DecodeError {
    /// Byte offset of the instruction the error refers to.
    pub fn offset(&self) -> usize {
        match self {
            Self::MalformedLength { len } => len - len % 2,
            Self::UnknownOpcode { index, .. }
            | Self::UnknownRegister { index, .. }
            | Self::UnsupportedMode { index, .. } => index * 2,
        }
    }

    /// Convert into a diagnostic for display to the user.
    pub fn into_report(self) -> Report {
        match self {
            Self::MalformedLength { .. } => miette!(
                severity = Severity::Error,
                code = "decode::malformed_length",
                help = "the file may be truncated, or not contain raw machine code",
                "{}",
                self,
            ),
            Self::UnknownOpcode { .. } => miette!(
                severity = Severity::Error,
                code = "decode::unknown_opcode",
                help = "only register-to-register `mov` (0b100010) is supported",
                "{} (at byte offset 0x{:04x})",
                self,
                self.offset(),
            ),
            Self::UnknownRegister { .. } => miette!(
                severity = Severity::Error,
                code = "decode::unknown_register",
                help = "this is a bug in the register table, please report it",
                "{}",
                self,
            ),
            Self::UnsupportedMode { .. } => miette!(
                severity = Severity::Error,
                code = "decode::unsupported_mode",
                help = "memory operands are not supported, `mod` must be 0b11",
                "{} (at byte offset 0x{:04x})",
                self,
                self.offset(),
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, DecodeError>;
