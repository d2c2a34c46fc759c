//! The documented 6502/6510 opcode table.
//!
//! One statically initialized array of 256 entries drives both the
//! executor and the disassembler, so the two can never disagree on
//! instruction length or cycle cost. Unassigned opcodes carry the
//! `"???"` placeholder and execute as 2-cycle NOPs.

/// Addressing modes of the documented instruction set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddrMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndexedIndirectX,
    IndirectIndexedY,
    Relative,
}

impl AddrMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_len(self) -> u8 {
        match self {
            AddrMode::Implied | AddrMode::Accumulator => 0,
            AddrMode::Immediate
            | AddrMode::ZeroPage
            | AddrMode::ZeroPageX
            | AddrMode::ZeroPageY
            | AddrMode::IndexedIndirectX
            | AddrMode::IndirectIndexedY
            | AddrMode::Relative => 1,
            AddrMode::Absolute
            | AddrMode::AbsoluteX
            | AddrMode::AbsoluteY
            | AddrMode::Indirect => 2,
        }
    }
}

/// Coarse functional grouping, mostly of interest to tracing tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Branch,
    LoadStore,
    Control,
    Math,
    Logic,
    Compare,
    Shift,
    Stack,
    Transfer,
}

/// Executor identifier: which operation the step dispatch runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs,
    Clc, Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx,
    Iny, Jmp, Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp,
    Rol, Ror, Rti, Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay,
    Tsx, Txa, Txs, Tya, Illegal,
}

// ── Operand metadata ──────────────────────────────────────────

/// Bitset naming which machine resource an operand touches.
pub mod operand_id {
    pub const NONE: u8 = 0x00;
    pub const A: u8 = 0x01;
    pub const X: u8 = 0x02;
    pub const Y: u8 = 0x04;
    pub const SP: u8 = 0x08;
    pub const MEMORY: u8 = 0x10;
    pub const CONSTANT: u8 = 0x20;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandType {
    None,
    Register,
    Memory,
    Immediate,
}

/// Size of the raw operand encoding in the instruction stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandSize {
    None,
    Byte,
    Word,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    None,
    Read,
    Write,
    ReadWrite,
}

/// Static description of one operand slot of an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperandSpec {
    pub id: u8,
    pub kind: OperandType,
    pub size: OperandSize,
    pub access: Access,
}

pub const NO_OPERAND: OperandSpec = OperandSpec {
    id: operand_id::NONE,
    kind: OperandType::None,
    size: OperandSize::None,
    access: Access::None,
};

const fn reg(id: u8, access: Access) -> OperandSpec {
    OperandSpec {
        id,
        kind: OperandType::Register,
        size: OperandSize::Byte,
        access,
    }
}

/// Memory-side operand spec for a given addressing mode.
const fn mem(mode: AddrMode, access: Access) -> OperandSpec {
    match mode {
        AddrMode::Immediate | AddrMode::Relative => OperandSpec {
            id: operand_id::CONSTANT,
            kind: OperandType::Immediate,
            size: OperandSize::Byte,
            access: Access::Read,
        },
        AddrMode::Absolute | AddrMode::AbsoluteX | AddrMode::AbsoluteY | AddrMode::Indirect => {
            OperandSpec {
                id: operand_id::MEMORY,
                kind: OperandType::Memory,
                size: OperandSize::Word,
                access,
            }
        }
        _ => OperandSpec {
            id: operand_id::MEMORY,
            kind: OperandType::Memory,
            size: OperandSize::Byte,
            access,
        },
    }
}

/// Jump targets are address constants, except through an indirect pointer.
const fn jump_target(mode: AddrMode) -> OperandSpec {
    match mode {
        AddrMode::Indirect => mem(mode, Access::Read),
        _ => OperandSpec {
            id: operand_id::CONSTANT,
            kind: OperandType::Immediate,
            size: OperandSize::Word,
            access: Access::Read,
        },
    }
}

/// Derive the (destination, source) operand pair from op and mode.
const fn operand_specs(op: Op, mode: AddrMode) -> (OperandSpec, OperandSpec) {
    use operand_id::*;
    match op {
        Op::Lda => (reg(A, Access::Write), mem(mode, Access::Read)),
        Op::Ldx => (reg(X, Access::Write), mem(mode, Access::Read)),
        Op::Ldy => (reg(Y, Access::Write), mem(mode, Access::Read)),
        Op::Sta => (mem(mode, Access::Write), reg(A, Access::Read)),
        Op::Stx => (mem(mode, Access::Write), reg(X, Access::Read)),
        Op::Sty => (mem(mode, Access::Write), reg(Y, Access::Read)),
        Op::Adc | Op::Sbc | Op::And | Op::Ora | Op::Eor => {
            (reg(A, Access::ReadWrite), mem(mode, Access::Read))
        }
        Op::Cmp | Op::Bit => (reg(A, Access::Read), mem(mode, Access::Read)),
        Op::Cpx => (reg(X, Access::Read), mem(mode, Access::Read)),
        Op::Cpy => (reg(Y, Access::Read), mem(mode, Access::Read)),
        Op::Inc | Op::Dec => (mem(mode, Access::ReadWrite), NO_OPERAND),
        Op::Inx | Op::Dex => (reg(X, Access::ReadWrite), NO_OPERAND),
        Op::Iny | Op::Dey => (reg(Y, Access::ReadWrite), NO_OPERAND),
        Op::Asl | Op::Lsr | Op::Rol | Op::Ror => match mode {
            AddrMode::Accumulator => (reg(A, Access::ReadWrite), NO_OPERAND),
            _ => (mem(mode, Access::ReadWrite), NO_OPERAND),
        },
        Op::Bcc | Op::Bcs | Op::Beq | Op::Bmi | Op::Bne | Op::Bpl | Op::Bvc | Op::Bvs => {
            (mem(mode, Access::Read), NO_OPERAND)
        }
        Op::Jmp => (jump_target(mode), NO_OPERAND),
        Op::Jsr => (jump_target(mode), reg(SP, Access::ReadWrite)),
        Op::Pha => (reg(A, Access::Read), reg(SP, Access::ReadWrite)),
        Op::Pla => (reg(A, Access::Write), reg(SP, Access::ReadWrite)),
        Op::Php | Op::Plp => (reg(SP, Access::ReadWrite), NO_OPERAND),
        Op::Tax => (reg(X, Access::Write), reg(A, Access::Read)),
        Op::Tay => (reg(Y, Access::Write), reg(A, Access::Read)),
        Op::Txa => (reg(A, Access::Write), reg(X, Access::Read)),
        Op::Tya => (reg(A, Access::Write), reg(Y, Access::Read)),
        Op::Txs => (reg(SP, Access::Write), reg(X, Access::Read)),
        Op::Tsx => (reg(X, Access::Write), reg(SP, Access::Read)),
        _ => (NO_OPERAND, NO_OPERAND),
    }
}

// ── Table entry ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct Opcode {
    pub code: u8,
    pub mnemonic: &'static str,
    pub mode: AddrMode,
    pub group: Group,
    /// Base cycle cost before page-cross / branch / badline penalties.
    pub cycles: u8,
    /// True for read instructions that pay +1 when the indexed
    /// effective address crosses a page boundary.
    pub page_penalty: bool,
    pub op: Op,
    pub operand1: OperandSpec,
    pub operand2: OperandSpec,
}

impl Opcode {
    pub const fn size(&self) -> u8 {
        1 + self.mode.operand_len()
    }
}

const ILLEGAL: Opcode = Opcode {
    code: 0,
    mnemonic: "???",
    mode: AddrMode::Implied,
    group: Group::Control,
    cycles: 2,
    page_penalty: false,
    op: Op::Illegal,
    operand1: NO_OPERAND,
    operand2: NO_OPERAND,
};

const fn e(
    code: u8,
    mnemonic: &'static str,
    mode: AddrMode,
    group: Group,
    cycles: u8,
    page_penalty: bool,
    op: Op,
) -> Opcode {
    let (operand1, operand2) = operand_specs(op, mode);
    Opcode {
        code,
        mnemonic,
        mode,
        group,
        cycles,
        page_penalty,
        op,
        operand1,
        operand2,
    }
}

#[rustfmt::skip]
const fn build_table() -> [Opcode; 256] {
    use AddrMode::*;
    use Group::*;
    let mut t = [ILLEGAL; 256];
    let mut i = 0;
    while i < 256 {
        t[i].code = i as u8;
        i += 1;
    }

    // Loads
    t[0xA9] = e(0xA9, "LDA", Immediate,        LoadStore, 2, false, Op::Lda);
    t[0xA5] = e(0xA5, "LDA", ZeroPage,         LoadStore, 3, false, Op::Lda);
    t[0xB5] = e(0xB5, "LDA", ZeroPageX,        LoadStore, 4, false, Op::Lda);
    t[0xAD] = e(0xAD, "LDA", Absolute,         LoadStore, 4, false, Op::Lda);
    t[0xBD] = e(0xBD, "LDA", AbsoluteX,        LoadStore, 4, true,  Op::Lda);
    t[0xB9] = e(0xB9, "LDA", AbsoluteY,        LoadStore, 4, true,  Op::Lda);
    t[0xA1] = e(0xA1, "LDA", IndexedIndirectX, LoadStore, 6, false, Op::Lda);
    t[0xB1] = e(0xB1, "LDA", IndirectIndexedY, LoadStore, 5, true,  Op::Lda);

    t[0xA2] = e(0xA2, "LDX", Immediate,        LoadStore, 2, false, Op::Ldx);
    t[0xA6] = e(0xA6, "LDX", ZeroPage,         LoadStore, 3, false, Op::Ldx);
    t[0xB6] = e(0xB6, "LDX", ZeroPageY,        LoadStore, 4, false, Op::Ldx);
    t[0xAE] = e(0xAE, "LDX", Absolute,         LoadStore, 4, false, Op::Ldx);
    t[0xBE] = e(0xBE, "LDX", AbsoluteY,        LoadStore, 4, true,  Op::Ldx);

    t[0xA0] = e(0xA0, "LDY", Immediate,        LoadStore, 2, false, Op::Ldy);
    t[0xA4] = e(0xA4, "LDY", ZeroPage,         LoadStore, 3, false, Op::Ldy);
    t[0xB4] = e(0xB4, "LDY", ZeroPageX,        LoadStore, 4, false, Op::Ldy);
    t[0xAC] = e(0xAC, "LDY", Absolute,         LoadStore, 4, false, Op::Ldy);
    t[0xBC] = e(0xBC, "LDY", AbsoluteX,        LoadStore, 4, true,  Op::Ldy);

    // Stores
    t[0x85] = e(0x85, "STA", ZeroPage,         LoadStore, 3, false, Op::Sta);
    t[0x95] = e(0x95, "STA", ZeroPageX,        LoadStore, 4, false, Op::Sta);
    t[0x8D] = e(0x8D, "STA", Absolute,         LoadStore, 4, false, Op::Sta);
    t[0x9D] = e(0x9D, "STA", AbsoluteX,        LoadStore, 5, false, Op::Sta);
    t[0x99] = e(0x99, "STA", AbsoluteY,        LoadStore, 5, false, Op::Sta);
    t[0x81] = e(0x81, "STA", IndexedIndirectX, LoadStore, 6, false, Op::Sta);
    t[0x91] = e(0x91, "STA", IndirectIndexedY, LoadStore, 6, false, Op::Sta);

    t[0x86] = e(0x86, "STX", ZeroPage,         LoadStore, 3, false, Op::Stx);
    t[0x96] = e(0x96, "STX", ZeroPageY,        LoadStore, 4, false, Op::Stx);
    t[0x8E] = e(0x8E, "STX", Absolute,         LoadStore, 4, false, Op::Stx);

    t[0x84] = e(0x84, "STY", ZeroPage,         LoadStore, 3, false, Op::Sty);
    t[0x94] = e(0x94, "STY", ZeroPageX,        LoadStore, 4, false, Op::Sty);
    t[0x8C] = e(0x8C, "STY", Absolute,         LoadStore, 4, false, Op::Sty);

    // Arithmetic
    t[0x69] = e(0x69, "ADC", Immediate,        Math, 2, false, Op::Adc);
    t[0x65] = e(0x65, "ADC", ZeroPage,         Math, 3, false, Op::Adc);
    t[0x75] = e(0x75, "ADC", ZeroPageX,        Math, 4, false, Op::Adc);
    t[0x6D] = e(0x6D, "ADC", Absolute,         Math, 4, false, Op::Adc);
    t[0x7D] = e(0x7D, "ADC", AbsoluteX,        Math, 4, true,  Op::Adc);
    t[0x79] = e(0x79, "ADC", AbsoluteY,        Math, 4, true,  Op::Adc);
    t[0x61] = e(0x61, "ADC", IndexedIndirectX, Math, 6, false, Op::Adc);
    t[0x71] = e(0x71, "ADC", IndirectIndexedY, Math, 5, true,  Op::Adc);

    t[0xE9] = e(0xE9, "SBC", Immediate,        Math, 2, false, Op::Sbc);
    t[0xE5] = e(0xE5, "SBC", ZeroPage,         Math, 3, false, Op::Sbc);
    t[0xF5] = e(0xF5, "SBC", ZeroPageX,        Math, 4, false, Op::Sbc);
    t[0xED] = e(0xED, "SBC", Absolute,         Math, 4, false, Op::Sbc);
    t[0xFD] = e(0xFD, "SBC", AbsoluteX,        Math, 4, true,  Op::Sbc);
    t[0xF9] = e(0xF9, "SBC", AbsoluteY,        Math, 4, true,  Op::Sbc);
    t[0xE1] = e(0xE1, "SBC", IndexedIndirectX, Math, 6, false, Op::Sbc);
    t[0xF1] = e(0xF1, "SBC", IndirectIndexedY, Math, 5, true,  Op::Sbc);

    // Logic
    t[0x29] = e(0x29, "AND", Immediate,        Logic, 2, false, Op::And);
    t[0x25] = e(0x25, "AND", ZeroPage,         Logic, 3, false, Op::And);
    t[0x35] = e(0x35, "AND", ZeroPageX,        Logic, 4, false, Op::And);
    t[0x2D] = e(0x2D, "AND", Absolute,         Logic, 4, false, Op::And);
    t[0x3D] = e(0x3D, "AND", AbsoluteX,        Logic, 4, true,  Op::And);
    t[0x39] = e(0x39, "AND", AbsoluteY,        Logic, 4, true,  Op::And);
    t[0x21] = e(0x21, "AND", IndexedIndirectX, Logic, 6, false, Op::And);
    t[0x31] = e(0x31, "AND", IndirectIndexedY, Logic, 5, true,  Op::And);

    t[0x09] = e(0x09, "ORA", Immediate,        Logic, 2, false, Op::Ora);
    t[0x05] = e(0x05, "ORA", ZeroPage,         Logic, 3, false, Op::Ora);
    t[0x15] = e(0x15, "ORA", ZeroPageX,        Logic, 4, false, Op::Ora);
    t[0x0D] = e(0x0D, "ORA", Absolute,         Logic, 4, false, Op::Ora);
    t[0x1D] = e(0x1D, "ORA", AbsoluteX,        Logic, 4, true,  Op::Ora);
    t[0x19] = e(0x19, "ORA", AbsoluteY,        Logic, 4, true,  Op::Ora);
    t[0x01] = e(0x01, "ORA", IndexedIndirectX, Logic, 6, false, Op::Ora);
    t[0x11] = e(0x11, "ORA", IndirectIndexedY, Logic, 5, true,  Op::Ora);

    t[0x49] = e(0x49, "EOR", Immediate,        Logic, 2, false, Op::Eor);
    t[0x45] = e(0x45, "EOR", ZeroPage,         Logic, 3, false, Op::Eor);
    t[0x55] = e(0x55, "EOR", ZeroPageX,        Logic, 4, false, Op::Eor);
    t[0x4D] = e(0x4D, "EOR", Absolute,         Logic, 4, false, Op::Eor);
    t[0x5D] = e(0x5D, "EOR", AbsoluteX,        Logic, 4, true,  Op::Eor);
    t[0x59] = e(0x59, "EOR", AbsoluteY,        Logic, 4, true,  Op::Eor);
    t[0x41] = e(0x41, "EOR", IndexedIndirectX, Logic, 6, false, Op::Eor);
    t[0x51] = e(0x51, "EOR", IndirectIndexedY, Logic, 5, true,  Op::Eor);

    t[0x24] = e(0x24, "BIT", ZeroPage,         Logic, 3, false, Op::Bit);
    t[0x2C] = e(0x2C, "BIT", Absolute,         Logic, 4, false, Op::Bit);

    // Compares
    t[0xC9] = e(0xC9, "CMP", Immediate,        Compare, 2, false, Op::Cmp);
    t[0xC5] = e(0xC5, "CMP", ZeroPage,         Compare, 3, false, Op::Cmp);
    t[0xD5] = e(0xD5, "CMP", ZeroPageX,        Compare, 4, false, Op::Cmp);
    t[0xCD] = e(0xCD, "CMP", Absolute,         Compare, 4, false, Op::Cmp);
    t[0xDD] = e(0xDD, "CMP", AbsoluteX,        Compare, 4, true,  Op::Cmp);
    t[0xD9] = e(0xD9, "CMP", AbsoluteY,        Compare, 4, true,  Op::Cmp);
    t[0xC1] = e(0xC1, "CMP", IndexedIndirectX, Compare, 6, false, Op::Cmp);
    t[0xD1] = e(0xD1, "CMP", IndirectIndexedY, Compare, 5, true,  Op::Cmp);

    t[0xE0] = e(0xE0, "CPX", Immediate,        Compare, 2, false, Op::Cpx);
    t[0xE4] = e(0xE4, "CPX", ZeroPage,         Compare, 3, false, Op::Cpx);
    t[0xEC] = e(0xEC, "CPX", Absolute,         Compare, 4, false, Op::Cpx);

    t[0xC0] = e(0xC0, "CPY", Immediate,        Compare, 2, false, Op::Cpy);
    t[0xC4] = e(0xC4, "CPY", ZeroPage,         Compare, 3, false, Op::Cpy);
    t[0xCC] = e(0xCC, "CPY", Absolute,         Compare, 4, false, Op::Cpy);

    // Shifts / rotates
    t[0x0A] = e(0x0A, "ASL", Accumulator,      Shift, 2, false, Op::Asl);
    t[0x06] = e(0x06, "ASL", ZeroPage,         Shift, 5, false, Op::Asl);
    t[0x16] = e(0x16, "ASL", ZeroPageX,        Shift, 6, false, Op::Asl);
    t[0x0E] = e(0x0E, "ASL", Absolute,         Shift, 6, false, Op::Asl);
    t[0x1E] = e(0x1E, "ASL", AbsoluteX,        Shift, 7, false, Op::Asl);

    t[0x4A] = e(0x4A, "LSR", Accumulator,      Shift, 2, false, Op::Lsr);
    t[0x46] = e(0x46, "LSR", ZeroPage,         Shift, 5, false, Op::Lsr);
    t[0x56] = e(0x56, "LSR", ZeroPageX,        Shift, 6, false, Op::Lsr);
    t[0x4E] = e(0x4E, "LSR", Absolute,         Shift, 6, false, Op::Lsr);
    t[0x5E] = e(0x5E, "LSR", AbsoluteX,        Shift, 7, false, Op::Lsr);

    t[0x2A] = e(0x2A, "ROL", Accumulator,      Shift, 2, false, Op::Rol);
    t[0x26] = e(0x26, "ROL", ZeroPage,         Shift, 5, false, Op::Rol);
    t[0x36] = e(0x36, "ROL", ZeroPageX,        Shift, 6, false, Op::Rol);
    t[0x2E] = e(0x2E, "ROL", Absolute,         Shift, 6, false, Op::Rol);
    t[0x3E] = e(0x3E, "ROL", AbsoluteX,        Shift, 7, false, Op::Rol);

    t[0x6A] = e(0x6A, "ROR", Accumulator,      Shift, 2, false, Op::Ror);
    t[0x66] = e(0x66, "ROR", ZeroPage,         Shift, 5, false, Op::Ror);
    t[0x76] = e(0x76, "ROR", ZeroPageX,        Shift, 6, false, Op::Ror);
    t[0x6E] = e(0x6E, "ROR", Absolute,         Shift, 6, false, Op::Ror);
    t[0x7E] = e(0x7E, "ROR", AbsoluteX,        Shift, 7, false, Op::Ror);

    // Increments / decrements
    t[0xE6] = e(0xE6, "INC", ZeroPage,         Math, 5, false, Op::Inc);
    t[0xF6] = e(0xF6, "INC", ZeroPageX,        Math, 6, false, Op::Inc);
    t[0xEE] = e(0xEE, "INC", Absolute,         Math, 6, false, Op::Inc);
    t[0xFE] = e(0xFE, "INC", AbsoluteX,        Math, 7, false, Op::Inc);

    t[0xC6] = e(0xC6, "DEC", ZeroPage,         Math, 5, false, Op::Dec);
    t[0xD6] = e(0xD6, "DEC", ZeroPageX,        Math, 6, false, Op::Dec);
    t[0xCE] = e(0xCE, "DEC", Absolute,         Math, 6, false, Op::Dec);
    t[0xDE] = e(0xDE, "DEC", AbsoluteX,        Math, 7, false, Op::Dec);

    t[0xE8] = e(0xE8, "INX", Implied,          Math, 2, false, Op::Inx);
    t[0xC8] = e(0xC8, "INY", Implied,          Math, 2, false, Op::Iny);
    t[0xCA] = e(0xCA, "DEX", Implied,          Math, 2, false, Op::Dex);
    t[0x88] = e(0x88, "DEY", Implied,          Math, 2, false, Op::Dey);

    // Branches
    t[0x90] = e(0x90, "BCC", Relative,         Branch, 2, false, Op::Bcc);
    t[0xB0] = e(0xB0, "BCS", Relative,         Branch, 2, false, Op::Bcs);
    t[0xF0] = e(0xF0, "BEQ", Relative,         Branch, 2, false, Op::Beq);
    t[0x30] = e(0x30, "BMI", Relative,         Branch, 2, false, Op::Bmi);
    t[0xD0] = e(0xD0, "BNE", Relative,         Branch, 2, false, Op::Bne);
    t[0x10] = e(0x10, "BPL", Relative,         Branch, 2, false, Op::Bpl);
    t[0x50] = e(0x50, "BVC", Relative,         Branch, 2, false, Op::Bvc);
    t[0x70] = e(0x70, "BVS", Relative,         Branch, 2, false, Op::Bvs);

    // Jumps / subroutines
    t[0x4C] = e(0x4C, "JMP", Absolute,         Control, 3, false, Op::Jmp);
    t[0x6C] = e(0x6C, "JMP", Indirect,         Control, 5, false, Op::Jmp);
    t[0x20] = e(0x20, "JSR", Absolute,         Control, 6, false, Op::Jsr);
    t[0x60] = e(0x60, "RTS", Implied,          Control, 6, false, Op::Rts);
    t[0x40] = e(0x40, "RTI", Implied,          Control, 6, false, Op::Rti);
    t[0x00] = e(0x00, "BRK", Implied,          Control, 7, false, Op::Brk);

    // Stack
    t[0x48] = e(0x48, "PHA", Implied,          Stack, 3, false, Op::Pha);
    t[0x08] = e(0x08, "PHP", Implied,          Stack, 3, false, Op::Php);
    t[0x68] = e(0x68, "PLA", Implied,          Stack, 4, false, Op::Pla);
    t[0x28] = e(0x28, "PLP", Implied,          Stack, 4, false, Op::Plp);

    // Transfers
    t[0xAA] = e(0xAA, "TAX", Implied,          Transfer, 2, false, Op::Tax);
    t[0xA8] = e(0xA8, "TAY", Implied,          Transfer, 2, false, Op::Tay);
    t[0xBA] = e(0xBA, "TSX", Implied,          Transfer, 2, false, Op::Tsx);
    t[0x8A] = e(0x8A, "TXA", Implied,          Transfer, 2, false, Op::Txa);
    t[0x9A] = e(0x9A, "TXS", Implied,          Transfer, 2, false, Op::Txs);
    t[0x98] = e(0x98, "TYA", Implied,          Transfer, 2, false, Op::Tya);

    // Flags
    t[0x18] = e(0x18, "CLC", Implied,          Control, 2, false, Op::Clc);
    t[0xD8] = e(0xD8, "CLD", Implied,          Control, 2, false, Op::Cld);
    t[0x58] = e(0x58, "CLI", Implied,          Control, 2, false, Op::Cli);
    t[0xB8] = e(0xB8, "CLV", Implied,          Control, 2, false, Op::Clv);
    t[0x38] = e(0x38, "SEC", Implied,          Control, 2, false, Op::Sec);
    t[0xF8] = e(0xF8, "SED", Implied,          Control, 2, false, Op::Sed);
    t[0x78] = e(0x78, "SEI", Implied,          Control, 2, false, Op::Sei);

    t[0xEA] = e(0xEA, "NOP", Implied,          Control, 2, false, Op::Nop);

    t
}

pub static OPCODE_TABLE: [Opcode; 256] = build_table();
