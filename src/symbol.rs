use std::fmt;

/// Opcode table of 6-bit opcode -> mnemonic.
pub const OPCODES: &[(u8, &str)] = &[(0b100010, "MOV")];

/// Register table, indexed by `selector | width << 3`.
pub const REGISTERS: [Register; 16] = [
    Register::Al,
    Register::Cl,
    Register::Dl,
    Register::Bl,
    Register::Ah,
    Register::Ch,
    Register::Dh,
    Register::Bh,
    Register::Ax,
    Register::Cx,
    Register::Dx,
    Register::Bx,
    Register::Sp,
    Register::Bp,
    Register::Si,
    Register::Di,
];

/// Look up the mnemonic registered for `op_code`.
pub fn mnemonic(op_code: OpCode) -> Option<&'static str> {
    OPCODES
        .iter()
        .find(|(code, _)| *code == op_code.value())
        .map(|(_, name)| *name)
}

/// Look up the register for a composite table key.
pub fn register(key: u8) -> Option<Register> {
    REGISTERS.get(key as usize).copied()
}

/// Composite register table key for a selector at the given width.
pub fn register_key(sel: RegSel, w: Width) -> u8 {
    sel.value() + w as u8 * 8
}

/// Represents the general purpose registers, both halves and full words.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Register {
    Al,
    Cl,
    Dl,
    Bl,
    Ah,
    Ch,
    Dh,
    Bh,
    Ax,
    Cx,
    Dx,
    Bx,
    /// Stack pointer.
    Sp,
    /// Base pointer.
    Bp,
    Si,
    Di,
}

impl Register {
    /// Table name, as written in Intel manuals.
    pub fn name(self) -> &'static str {
        match self {
            Register::Al => "AL",
            Register::Cl => "CL",
            Register::Dl => "DL",
            Register::Bl => "BL",
            Register::Ah => "AH",
            Register::Ch => "CH",
            Register::Dh => "DH",
            Register::Bh => "BH",
            Register::Ax => "AX",
            Register::Cx => "CX",
            Register::Dx => "DX",
            Register::Bx => "BX",
            Register::Sp => "SP",
            Register::Bp => "BP",
            Register::Si => "SI",
            Register::Di => "DI",
        }
    }

    pub fn width(self) -> Width {
        if (self as u8) < 8 {
            Width::Byte
        } else {
            Width::Word
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 6-bit opcode field.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct OpCode(u8);

impl OpCode {
    pub const MOV: OpCode = OpCode(0b100010);

    /// Bits above the low six are discarded.
    pub fn new(value: u8) -> Self {
        OpCode(value & 0b11_1111)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

/// 3-bit register selector, used for both `reg` and `r/m`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RegSel(u8);

impl RegSel {
    /// Bits above the low three are discarded.
    pub fn new(value: u8) -> Self {
        RegSel(value & 0b111)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

/// `d` bit: whether `reg` names the source or the destination.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    RegIsSource = 0,
    RegIsDest = 1,
}

impl From<u8> for Direction {
    /// Only the lowest bit is considered.
    fn from(value: u8) -> Self {
        match value & 1 {
            0 => Direction::RegIsSource,
            _ => Direction::RegIsDest,
        }
    }
}

/// `w` bit: operand width.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Width {
    /// 8-bit register halves.
    Byte = 0,
    /// 16-bit registers.
    Word = 1,
}

impl From<u8> for Width {
    /// Only the lowest bit is considered.
    fn from(value: u8) -> Self {
        match value & 1 {
            0 => Width::Byte,
            _ => Width::Word,
        }
    }
}

/// `mod` field: addressing mode.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Mode {
    /// Memory, no displacement (except direct address).
    Memory = 0b00,
    /// Memory, 8-bit displacement.
    Memory8 = 0b01,
    /// Memory, 16-bit displacement.
    Memory16 = 0b10,
    /// Register to register.
    Register = 0b11,
}

impl From<u8> for Mode {
    /// Only the lowest two bits are considered.
    fn from(value: u8) -> Self {
        match value & 0b11 {
            0b00 => Mode::Memory,
            0b01 => Mode::Memory8,
            0b10 => Mode::Memory16,
            _ => Mode::Register,
        }
    }
}
