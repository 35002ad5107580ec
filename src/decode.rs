use crate::bits::take;
use crate::error::{DecodeError, Result};
use crate::symbol::{Direction, Mode, OpCode, RegSel, Width};

/// Every supported instruction is exactly this many bytes.
pub const INSTRUCTION_LEN: usize = 2;

/// Fields of a single two-byte instruction.
///
/// ```text
///  byte 0: [op_code:6][d:1][w:1]
///  byte 1: [mod:2][reg:3][r_m:3]
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Instruction {
    pub op_code: OpCode,
    pub d: Direction,
    pub w: Width,
    pub mode: Mode,
    pub reg: RegSel,
    pub r_m: RegSel,
}

impl Instruction {
    pub fn from_bytes(bytes: [u8; INSTRUCTION_LEN]) -> Self {
        let [op, modrm] = bytes;
        Instruction {
            op_code: OpCode::new(take(op, 8, 2)),
            d: Direction::from(take(op, 2, 1)),
            w: Width::from(take(op, 1, 0)),
            mode: Mode::from(take(modrm, 8, 6)),
            reg: RegSel::new(take(modrm, 6, 3)),
            r_m: RegSel::new(take(modrm, 3, 0)),
        }
    }

    /// Pack fields back into the bytes they were decoded from.
    pub fn to_bytes(&self) -> [u8; INSTRUCTION_LEN] {
        let op = self.op_code.value() << 2 | (self.d as u8) << 1 | self.w as u8;
        let modrm = (self.mode as u8) << 6 | self.reg.value() << 3 | self.r_m.value();
        [op, modrm]
    }
}

/// Split `bytes` into instructions, in stream order.
///
/// Streams which are not a whole number of instructions are rejected before
/// anything is decoded.
pub fn decode(bytes: &[u8]) -> Result<Vec<Instruction>> {
    if bytes.len() % INSTRUCTION_LEN != 0 {
        return Err(DecodeError::MalformedLength { len: bytes.len() });
    }
    Ok(bytes
        .chunks_exact(INSTRUCTION_LEN)
        .map(|chunk| Instruction::from_bytes([chunk[0], chunk[1]]))
        .collect())
}
