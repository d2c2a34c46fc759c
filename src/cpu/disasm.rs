//! Disassembler over the shared opcode table.
//!
//! Decodes raw bytes into `Instruction` records and formats them in
//! fixed columns:
//!
//! ```text
//! C00C:  A9 10     LDA #$10
//! ```
//!
//! address, two spaces, an 8-character byte column, two spaces,
//! mnemonic, operand. Formatting goes through `fmt::Write` so callers
//! with bounded buffers see `fmt::Error` instead of a truncated line.

use std::fmt::{self, Write};

use super::opcodes::{
    Access, AddrMode, Group, Opcode, OperandSize, OperandSpec, OperandType, OPCODE_TABLE,
};
use crate::memory::Memory;

/// One decoded operand: the static spec plus its raw encoding bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand {
    pub id: u8,
    pub kind: OperandType,
    pub size: OperandSize,
    pub access: Access,
    pub bytes: [u8; 2],
    pub len: u8,
}

impl Operand {
    fn from_spec(spec: OperandSpec, bytes: [u8; 2], len: u8) -> Self {
        Self {
            id: spec.id,
            kind: spec.kind,
            size: spec.size,
            access: spec.access,
            bytes,
            len,
        }
    }
}

/// A decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: u8,
    pub mnemonic: &'static str,
    pub mode: AddrMode,
    pub group: Group,
    pub operand1: Operand,
    pub operand2: Operand,
}

impl Instruction {
    /// The static table entry this instruction was decoded from.
    pub fn entry(&self) -> &'static Opcode {
        &OPCODE_TABLE[self.opcode as usize]
    }

    /// Raw operand bytes as encoded after the opcode.
    pub fn operand_bytes(&self) -> &[u8] {
        if self.operand1.len > 0 {
            &self.operand1.bytes[..self.operand1.len as usize]
        } else {
            &self.operand2.bytes[..self.operand2.len as usize]
        }
    }
}

/// Decode one instruction from a byte slice. The slice must hold at
/// least the opcode; missing operand bytes read as zero.
pub fn decode_instruction(bytes: &[u8]) -> Instruction {
    let entry = &OPCODE_TABLE[bytes[0] as usize];
    let len = entry.mode.operand_len();
    let raw = [
        bytes.get(1).copied().unwrap_or(0),
        bytes.get(2).copied().unwrap_or(0),
    ];

    // The raw bytes belong to the operand slot that encodes in the
    // instruction stream (memory or constant); registers encode nothing.
    let enc1 = matches!(entry.operand1.kind, OperandType::Memory | OperandType::Immediate);
    let (b1, l1, b2, l2) = if enc1 {
        (raw, len, [0, 0], 0)
    } else {
        ([0, 0], 0, raw, len)
    };

    Instruction {
        opcode: entry.code,
        mnemonic: entry.mnemonic,
        mode: entry.mode,
        group: entry.group,
        operand1: Operand::from_spec(entry.operand1, b1, l1),
        operand2: Operand::from_spec(entry.operand2, b2, l2),
    }
}

/// Total encoded size in bytes (1–3), from the addressing mode.
pub fn instruction_size(insn: &Instruction) -> u8 {
    1 + insn.mode.operand_len()
}

/// Write `MNEMONIC OPERAND` for an instruction fetched at `pc`.
pub fn disassemble_insn<W: Write>(w: &mut W, pc: u16, insn: &Instruction) -> fmt::Result {
    let raw = insn.operand_bytes();
    let b0 = raw.first().copied().unwrap_or(0);
    let word = || (raw.get(1).copied().unwrap_or(0) as u16) << 8 | b0 as u16;

    write!(w, "{}", insn.mnemonic)?;
    match insn.mode {
        AddrMode::Implied => Ok(()),
        AddrMode::Accumulator => write!(w, " A"),
        AddrMode::Immediate => write!(w, " #${:02X}", b0),
        AddrMode::ZeroPage => write!(w, " ${:02X}", b0),
        AddrMode::ZeroPageX => write!(w, " ${:02X},X", b0),
        AddrMode::ZeroPageY => write!(w, " ${:02X},Y", b0),
        AddrMode::Absolute => write!(w, " ${:04X}", word()),
        AddrMode::AbsoluteX => write!(w, " ${:04X},X", word()),
        AddrMode::AbsoluteY => write!(w, " ${:04X},Y", word()),
        AddrMode::Indirect => write!(w, " (${:04X})", word()),
        AddrMode::IndexedIndirectX => write!(w, " (${:02X},X)", b0),
        AddrMode::IndirectIndexedY => write!(w, " (${:02X}),Y", b0),
        AddrMode::Relative => {
            let target = pc.wrapping_add(2).wrapping_add(b0 as i8 as u16);
            write!(w, " ${:04X}", target)
        }
    }
}

/// Write one full code line: address, raw bytes, disassembly.
pub fn disassemble_code_line<W: Write>(w: &mut W, pc: u16, insn: &Instruction) -> fmt::Result {
    let mut bytes = String::with_capacity(8);
    write!(bytes, "{:02X}", insn.opcode)?;
    for b in insn.operand_bytes() {
        write!(bytes, " {:02X}", b)?;
    }
    write!(w, "{:04X}:  {:<8}  ", pc, bytes)?;
    disassemble_insn(w, pc, insn)
}

/// Print `count` code lines starting at `pc_start`, advancing by each
/// instruction's size. Returns the address following the last line.
pub fn disassemble_forward(mem: &Memory, pc_start: u16, count: usize) -> u16 {
    let mut pc = pc_start;
    for _ in 0..count {
        let bytes = [
            mem.read(pc),
            mem.read(pc.wrapping_add(1)),
            mem.read(pc.wrapping_add(2)),
        ];
        let insn = decode_instruction(&bytes);
        let mut line = String::with_capacity(32);
        // Writing into a String cannot fail.
        let _ = disassemble_code_line(&mut line, pc, &insn);
        println!("{line}");
        pc = pc.wrapping_add(instruction_size(&insn) as u16);
    }
    pc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::opcodes::Op;

    fn line(pc: u16, bytes: &[u8]) -> String {
        let insn = decode_instruction(bytes);
        let mut s = String::new();
        disassemble_code_line(&mut s, pc, &insn).unwrap();
        s
    }

    #[test]
    fn test_decode_preserves_opcode_byte() {
        for b in 0u8..=255 {
            let insn = decode_instruction(&[b, 0, 0]);
            assert_eq!(insn.opcode, b);
        }
    }

    #[test]
    fn test_size_matches_operand_bytes() {
        for b in 0u8..=255 {
            let insn = decode_instruction(&[b, 0x34, 0x12]);
            assert_eq!(
                instruction_size(&insn) as usize,
                1 + insn.operand_bytes().len()
            );
        }
    }

    #[test]
    fn test_fixed_column_format() {
        assert_eq!(line(0xC00C, &[0xA9, 0x10]), "C00C:  A9 10     LDA #$10");
        assert_eq!(line(0xC000, &[0xEA]), "C000:  EA        NOP");
        assert_eq!(
            line(0x0800, &[0x8D, 0x20, 0xD0]),
            "0800:  8D 20 D0  STA $D020"
        );
    }

    #[test]
    fn test_operand_syntax_per_mode() {
        assert_eq!(line(0, &[0x0A]), "0000:  0A        ASL A");
        assert_eq!(line(0, &[0xB5, 0x40]), "0000:  B5 40     LDA $40,X");
        assert_eq!(line(0, &[0xB6, 0x40]), "0000:  B6 40     LDX $40,Y");
        assert_eq!(line(0, &[0x6C, 0xFF, 0x10]), "0000:  6C FF 10  JMP ($10FF)");
        assert_eq!(line(0, &[0xA1, 0x02]), "0000:  A1 02     LDA ($02,X)");
        assert_eq!(line(0, &[0xB1, 0x02]), "0000:  B1 02     LDA ($02),Y");
    }

    #[test]
    fn test_relative_target_resolution() {
        // BNE -10 at $080B lands on $0803.
        assert_eq!(line(0x080B, &[0xD0, 0xF6]), "080B:  D0 F6     BNE $0803");
        // Forward branch.
        assert_eq!(line(0xC000, &[0xF0, 0x04]), "C000:  F0 04     BEQ $C006");
    }

    #[test]
    fn test_unknown_opcode_decodes_as_placeholder() {
        let insn = decode_instruction(&[0x02, 0xAA, 0xBB]);
        assert_eq!(insn.mnemonic, "???");
        assert_eq!(instruction_size(&insn), 1);
        assert_eq!(insn.operand_bytes().len(), 0);
        assert_eq!(line(0x1000, &[0x02]), "1000:  02        ???");
    }

    #[test]
    fn test_executor_and_decoder_share_the_table() {
        for b in 0u8..=255 {
            let insn = decode_instruction(&[b, 0x34, 0x12]);
            let entry = &OPCODE_TABLE[b as usize];
            assert_eq!(instruction_size(&insn), entry.size());
            assert_eq!(insn.mnemonic, entry.mnemonic);
            assert_eq!(insn.mode, entry.mode);
            assert_eq!(insn.group, entry.group);
            if entry.op == Op::Illegal {
                assert_eq!(instruction_size(&insn), 1);
            }
        }
    }

    #[test]
    fn test_forward_advances_by_instruction_size() {
        let mut mem = Memory::new();
        mem.load(0xC000, &[0xA9, 0x42, 0x8D, 0x20, 0xD0, 0x60]);
        let end = disassemble_forward(&mem, 0xC000, 3);
        assert_eq!(end, 0xC006);
    }
}
