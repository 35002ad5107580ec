use std::fmt;

use crate::decode::{decode, Instruction};
use crate::error::{DecodeError, Result};
use crate::symbol::{self, Direction, Mode, Register};

/// Decides which register operand is written first.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum OperandOrder {
    /// Destination first, as selected by the `d` bit.
    #[default]
    Direction,
    /// Always `r/m` first, `reg` second, regardless of `d`.
    Fixed,
}

/// An instruction with its mnemonic and operands named.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Resolved {
    mnemonic: &'static str,
    dest: Register,
    src: Register,
}

impl Resolved {
    pub fn mnemonic(&self) -> &'static str {
        self.mnemonic
    }

    pub fn operands(&self) -> (Register, Register) {
        (self.dest, self.src)
    }
}

impl fmt::Display for Resolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = format!("{} {}, {}", self.mnemonic, self.dest, self.src);
        write!(f, "{}", line.to_lowercase())
    }
}

/// Resolve the instruction at position `index` of its stream.
pub fn resolve(instr: &Instruction, index: usize, order: OperandOrder) -> Result<Resolved> {
    let mnemonic = symbol::mnemonic(instr.op_code).ok_or(DecodeError::UnknownOpcode {
        index,
        op_code: instr.op_code,
    })?;
    if instr.mode != Mode::Register {
        return Err(DecodeError::UnsupportedMode {
            index,
            mode: instr.mode,
        });
    }

    let lookup = |key: u8| symbol::register(key).ok_or(DecodeError::UnknownRegister { index, key });
    let r_m = lookup(symbol::register_key(instr.r_m, instr.w))?;
    let reg = lookup(symbol::register_key(instr.reg, instr.w))?;

    let (dest, src) = match (order, instr.d) {
        (OperandOrder::Direction, Direction::RegIsDest) => (reg, r_m),
        (OperandOrder::Direction, Direction::RegIsSource) | (OperandOrder::Fixed, _) => (r_m, reg),
    };
    Ok(Resolved {
        mnemonic,
        dest,
        src,
    })
}

/// Resolve a whole decoded stream. Stops at the first failing instruction.
pub fn resolve_all(instrs: &[Instruction], order: OperandOrder) -> Result<Vec<Resolved>> {
    instrs
        .iter()
        .enumerate()
        .map(|(index, instr)| resolve(instr, index, order))
        .collect()
}

/// Decode, resolve and render `bytes` as a listing, one instruction per line.
pub fn disassemble(bytes: &[u8], order: OperandOrder) -> Result<String> {
    let instrs = decode(bytes)?;
    let lines: Vec<String> = resolve_all(&instrs, order)?
        .iter()
        .map(Resolved::to_string)
        .collect();
    Ok(lines.join("\n"))
}
