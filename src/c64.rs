//! Top-level C64 machine.
//!
//! Owns the only instances of CPU, memory, VIC, and SID, and runs the
//! instruction step loop that ties them together: fetch and execute
//! through the shared opcode table, charge cycles, advance the raster
//! beam, and observe SID register writes on the memory write path.

use std::io;
use std::path::Path;

use log::debug;

use crate::cpu::disasm;
use crate::cpu::opcodes::{AddrMode, Op, OPCODE_TABLE};
use crate::cpu::{Mos6510, FLAG_B, FLAG_C, FLAG_D, FLAG_I, FLAG_N, FLAG_U, FLAG_V, FLAG_Z};
use crate::memory::Memory;
use crate::sid::{Sid, SID_BASE_DEFAULT, SID_REG_COUNT};
use crate::vic::{Vic, VicModel};

/// BRK jumps through the IRQ vector.
const IRQ_VECTOR: u16 = 0xFFFE;

/// `run`/`call` push $0000 as the return address; RTS popping it sets
/// `pc` to $0001, which the run loop recognizes as termination.
const SENTINEL_PC: u16 = 0x0001;

// ── Configuration ─────────────────────────────────────────────

/// Machine construction parameters and debug toggles.
#[derive(Debug, Clone, Copy)]
pub struct C64Config {
    pub model: VicModel,
    pub sid_base: u16,
    pub dbg_cpu: bool,
    pub dbg_vic: bool,
    pub dbg_sid: bool,
}

impl Default for C64Config {
    fn default() -> Self {
        Self {
            model: VicModel::Pal,
            sid_base: SID_BASE_DEFAULT,
            dbg_cpu: false,
            dbg_vic: false,
            dbg_sid: false,
        }
    }
}

// ── Machine ───────────────────────────────────────────────────

pub struct C64 {
    pub cpu: Mos6510,
    pub mem: Memory,
    pub vic: Vic,
    pub sid: Sid,
}

/// Result of addressing-mode evaluation for one instruction.
enum Resolved {
    None,
    Acc,
    Imm(u8),
    Addr(u16),
}

impl C64 {
    pub fn new(model: VicModel) -> Self {
        Self::with_config(C64Config {
            model,
            ..C64Config::default()
        })
    }

    pub fn with_config(config: C64Config) -> Self {
        let mut cpu = Mos6510::new();
        cpu.dbg_enabled = config.dbg_cpu;
        let mut vic = Vic::new(config.model);
        vic.dbg_enabled = config.dbg_vic;
        let mut sid = Sid::new(config.sid_base);
        sid.dbg_enabled = config.dbg_sid;
        Self {
            cpu,
            mem: Memory::new(),
            vic,
            sid,
        }
    }

    /// Reset registers, beam state, and SID records. Memory survives.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.vic.reset();
        self.sid.reset();
    }

    /// Reset plus a full memory clear.
    pub fn hard_reset(&mut self) {
        self.reset();
        self.mem.clear();
    }

    /// Load a `.prg` file into memory; see `loader`.
    pub fn load_prg<P: AsRef<Path>>(&mut self, path: P, set_pc: bool) -> io::Result<u16> {
        crate::loader::load_prg(path, self, set_pc)
    }

    // ── Memory accessors ──────────────────────────────────────

    #[inline]
    pub fn read_byte(&self, addr: u16) -> u8 {
        self.mem.read(addr)
    }

    #[inline]
    pub fn read_word(&self, addr: u16) -> u16 {
        self.mem.read_word(addr)
    }

    #[inline]
    pub fn read_word_zp(&self, addr: u8) -> u16 {
        self.mem.read_word_zp(addr)
    }

    /// Write one byte. Writes always land in RAM; a write into the SID
    /// window additionally feeds the observer and raises the CPU's
    /// per-step and sticky observation flags.
    pub fn write_byte(&mut self, addr: u16, val: u8) {
        self.mem.write(addr, val);

        let offset = addr.wrapping_sub(self.sid.base_address);
        if offset < SID_REG_COUNT as u16 {
            let changed =
                self.sid
                    .write_register_cycle(offset as u8, val, self.cpu.cycles_executed);
            self.cpu.sid_reg_written = true;
            self.cpu.ext_sid_reg_written = true;
            if changed {
                self.cpu.sid_reg_changed = true;
                self.cpu.ext_sid_reg_changed = true;
            }
        }
    }

    pub fn write_word(&mut self, addr: u16, val: u16) {
        self.write_byte(addr, (val & 0xFF) as u8);
        self.write_byte(addr.wrapping_add(1), (val >> 8) as u8);
    }

    // ── Stack (fixed page 1) ──────────────────────────────────

    fn push(&mut self, val: u8) {
        self.write_byte(0x0100 | self.cpu.sp as u16, val);
        self.cpu.sp = self.cpu.sp.wrapping_sub(1);
    }

    fn pull(&mut self) -> u8 {
        self.cpu.sp = self.cpu.sp.wrapping_add(1);
        self.read_byte(0x0100 | self.cpu.sp as u16)
    }

    fn push_word(&mut self, val: u16) {
        self.push((val >> 8) as u8);
        self.push((val & 0xFF) as u8);
    }

    fn pull_word(&mut self) -> u16 {
        let lo = self.pull() as u16;
        let hi = self.pull() as u16;
        (hi << 8) | lo
    }

    // ── Step loop ─────────────────────────────────────────────

    /// Execute one instruction. Returns the cycles charged, badline
    /// penalty included.
    pub fn run_step(&mut self) -> u32 {
        self.cpu.sid_reg_written = false;
        self.cpu.sid_reg_changed = false;

        let pc = self.cpu.pc;
        let opcode = self.read_byte(pc);
        let entry = &OPCODE_TABLE[opcode as usize];
        self.cpu.opcode_last = opcode;

        if self.cpu.dbg_enabled {
            self.trace_insn(pc);
        }

        self.cpu.pc = pc.wrapping_add(entry.size() as u16);

        let (resolved, crossed) = self.resolve(entry.mode, pc.wrapping_add(1));

        let mut cycles = entry.cycles as u32;
        if entry.page_penalty && crossed {
            cycles += 1;
        }
        cycles += self.execute(entry.op, resolved, crossed);

        let frames_before = self.vic.frame_ctr;
        cycles += self.vic.emulate_d012(cycles, &mut self.mem);

        self.cpu.cycles_last_step = cycles;
        self.cpu.cycles_executed += cycles as u64;
        if self.vic.frame_ctr != frames_before {
            self.cpu.cycles_since_vsync = 0;
        } else {
            self.cpu.cycles_since_vsync += cycles;
        }
        self.cpu.cycles_since_hsync = self.vic.line_cycles;

        cycles
    }

    /// Run until an RTS returns through the sentinel pushed at entry.
    pub fn run(&mut self) {
        let sentinel_sp = self.cpu.sp;
        self.push_word(0x0000);
        loop {
            self.run_step();
            if self.cpu.opcode_last == 0x60
                && self.cpu.pc == SENTINEL_PC
                && self.cpu.sp == sentinel_sp
            {
                if self.cpu.dbg_enabled {
                    debug!("[cpu] RTS EXIT at cycle {}", self.cpu.cycles_executed);
                }
                break;
            }
        }
    }

    /// Jump to `addr` and run until the routine returns.
    pub fn call(&mut self, addr: u16) {
        self.cpu.pc = addr;
        self.run();
    }

    /// Run until `n` vertical syncs have passed. Returns the number of
    /// frames actually run.
    pub fn run_frames(&mut self, n: u32) -> u32 {
        let start = self.vic.frame_ctr;
        while self.vic.frame_ctr - start < n as u64 {
            self.run_step();
        }
        (self.vic.frame_ctr - start) as u32
    }

    fn trace_insn(&self, pc: u16) {
        let bytes = [
            self.read_byte(pc),
            self.read_byte(pc.wrapping_add(1)),
            self.read_byte(pc.wrapping_add(2)),
        ];
        let insn = disasm::decode_instruction(&bytes);
        let mut line = String::with_capacity(32);
        let _ = disasm::disassemble_code_line(&mut line, pc, &insn);
        debug!(
            "[cpu] {line}  A={:02X} X={:02X} Y={:02X} SP={:02X} P={:02X}",
            self.cpu.a, self.cpu.x, self.cpu.y, self.cpu.sp, self.cpu.status
        );
    }

    // ── Addressing modes ──────────────────────────────────────

    /// Evaluate an addressing mode. `operand_pc` points at the byte
    /// after the opcode. The bool reports an indexed page crossing
    /// (for relative mode: branch target in a different page than the
    /// instruction following the branch).
    fn resolve(&self, mode: AddrMode, operand_pc: u16) -> (Resolved, bool) {
        match mode {
            AddrMode::Implied => (Resolved::None, false),
            AddrMode::Accumulator => (Resolved::Acc, false),
            AddrMode::Immediate => (Resolved::Imm(self.read_byte(operand_pc)), false),
            AddrMode::ZeroPage => (Resolved::Addr(self.read_byte(operand_pc) as u16), false),
            AddrMode::ZeroPageX => {
                let zp = self.read_byte(operand_pc).wrapping_add(self.cpu.x);
                (Resolved::Addr(zp as u16), false)
            }
            AddrMode::ZeroPageY => {
                let zp = self.read_byte(operand_pc).wrapping_add(self.cpu.y);
                (Resolved::Addr(zp as u16), false)
            }
            AddrMode::Absolute => (Resolved::Addr(self.read_word(operand_pc)), false),
            AddrMode::AbsoluteX => {
                let base = self.read_word(operand_pc);
                let addr = base.wrapping_add(self.cpu.x as u16);
                (Resolved::Addr(addr), page_crossed(base, addr))
            }
            AddrMode::AbsoluteY => {
                let base = self.read_word(operand_pc);
                let addr = base.wrapping_add(self.cpu.y as u16);
                (Resolved::Addr(addr), page_crossed(base, addr))
            }
            AddrMode::Indirect => {
                // JMP ($xxFF) fetches the high pointer byte from $xx00.
                let ptr = self.read_word(operand_pc);
                (Resolved::Addr(self.mem.read_word_in_page(ptr)), false)
            }
            AddrMode::IndexedIndirectX => {
                let zp = self.read_byte(operand_pc).wrapping_add(self.cpu.x);
                (Resolved::Addr(self.read_word_zp(zp)), false)
            }
            AddrMode::IndirectIndexedY => {
                let zp = self.read_byte(operand_pc);
                let base = self.read_word_zp(zp);
                let addr = base.wrapping_add(self.cpu.y as u16);
                (Resolved::Addr(addr), page_crossed(base, addr))
            }
            AddrMode::Relative => {
                let offset = self.read_byte(operand_pc) as i8;
                let after = operand_pc.wrapping_add(1);
                let target = after.wrapping_add(offset as u16);
                (Resolved::Addr(target), page_crossed(after, target))
            }
        }
    }

    fn value(&self, src: &Resolved) -> u8 {
        match *src {
            Resolved::Imm(v) => v,
            Resolved::Addr(a) => self.read_byte(a),
            Resolved::Acc => self.cpu.a,
            Resolved::None => 0,
        }
    }

    /// Read side of a read-modify-write target.
    fn rmw_read(&self, src: &Resolved) -> u8 {
        match *src {
            Resolved::Acc => self.cpu.a,
            Resolved::Addr(a) => self.read_byte(a),
            _ => 0,
        }
    }

    /// Write side of a read-modify-write target.
    fn rmw_write(&mut self, src: &Resolved, val: u8) {
        match *src {
            Resolved::Acc => self.cpu.a = val,
            Resolved::Addr(a) => self.write_byte(a, val),
            _ => {}
        }
    }

    // ── Executor ──────────────────────────────────────────────

    /// Run one operation. Returns extra cycles beyond the table cost
    /// and page-cross penalty (taken branches only).
    fn execute(&mut self, op: Op, src: Resolved, crossed: bool) -> u32 {
        match op {
            // Loads / stores
            Op::Lda => {
                let v = self.value(&src);
                self.cpu.a = v;
                self.cpu.set_nz(v);
            }
            Op::Ldx => {
                let v = self.value(&src);
                self.cpu.x = v;
                self.cpu.set_nz(v);
            }
            Op::Ldy => {
                let v = self.value(&src);
                self.cpu.y = v;
                self.cpu.set_nz(v);
            }
            Op::Sta => {
                if let Resolved::Addr(a) = src {
                    self.write_byte(a, self.cpu.a);
                }
            }
            Op::Stx => {
                if let Resolved::Addr(a) = src {
                    self.write_byte(a, self.cpu.x);
                }
            }
            Op::Sty => {
                if let Resolved::Addr(a) = src {
                    self.write_byte(a, self.cpu.y);
                }
            }

            // Arithmetic. Binary mode only: with D set the result is
            // still the two's-complement sum, flags from that result.
            Op::Adc => {
                let v = self.value(&src);
                self.adc(v);
            }
            Op::Sbc => {
                let v = self.value(&src);
                self.adc(v ^ 0xFF);
            }

            // Logic
            Op::And => {
                let v = self.cpu.a & self.value(&src);
                self.cpu.a = v;
                self.cpu.set_nz(v);
            }
            Op::Ora => {
                let v = self.cpu.a | self.value(&src);
                self.cpu.a = v;
                self.cpu.set_nz(v);
            }
            Op::Eor => {
                let v = self.cpu.a ^ self.value(&src);
                self.cpu.a = v;
                self.cpu.set_nz(v);
            }
            Op::Bit => {
                let m = self.value(&src);
                self.cpu.set_flag(FLAG_Z, self.cpu.a & m == 0);
                self.cpu.set_flag(FLAG_N, m & 0x80 != 0);
                self.cpu.set_flag(FLAG_V, m & 0x40 != 0);
            }

            // Compares
            Op::Cmp => {
                let v = self.value(&src);
                self.compare(self.cpu.a, v);
            }
            Op::Cpx => {
                let v = self.value(&src);
                self.compare(self.cpu.x, v);
            }
            Op::Cpy => {
                let v = self.value(&src);
                self.compare(self.cpu.y, v);
            }

            // Shifts / rotates
            Op::Asl => {
                let v = self.rmw_read(&src);
                let r = v << 1;
                self.cpu.set_flag(FLAG_C, v & 0x80 != 0);
                self.rmw_write(&src, r);
                self.cpu.set_nz(r);
            }
            Op::Lsr => {
                let v = self.rmw_read(&src);
                let r = v >> 1;
                self.cpu.set_flag(FLAG_C, v & 0x01 != 0);
                self.rmw_write(&src, r);
                self.cpu.set_nz(r);
            }
            Op::Rol => {
                let v = self.rmw_read(&src);
                let r = (v << 1) | self.cpu.flag(FLAG_C) as u8;
                self.cpu.set_flag(FLAG_C, v & 0x80 != 0);
                self.rmw_write(&src, r);
                self.cpu.set_nz(r);
            }
            Op::Ror => {
                let v = self.rmw_read(&src);
                let r = (v >> 1) | ((self.cpu.flag(FLAG_C) as u8) << 7);
                self.cpu.set_flag(FLAG_C, v & 0x01 != 0);
                self.rmw_write(&src, r);
                self.cpu.set_nz(r);
            }

            // Increments / decrements
            Op::Inc => {
                let r = self.rmw_read(&src).wrapping_add(1);
                self.rmw_write(&src, r);
                self.cpu.set_nz(r);
            }
            Op::Dec => {
                let r = self.rmw_read(&src).wrapping_sub(1);
                self.rmw_write(&src, r);
                self.cpu.set_nz(r);
            }
            Op::Inx => {
                self.cpu.x = self.cpu.x.wrapping_add(1);
                self.cpu.set_nz(self.cpu.x);
            }
            Op::Iny => {
                self.cpu.y = self.cpu.y.wrapping_add(1);
                self.cpu.set_nz(self.cpu.y);
            }
            Op::Dex => {
                self.cpu.x = self.cpu.x.wrapping_sub(1);
                self.cpu.set_nz(self.cpu.x);
            }
            Op::Dey => {
                self.cpu.y = self.cpu.y.wrapping_sub(1);
                self.cpu.set_nz(self.cpu.y);
            }

            // Branches
            Op::Bcc => return self.branch(!self.cpu.flag(FLAG_C), src, crossed),
            Op::Bcs => return self.branch(self.cpu.flag(FLAG_C), src, crossed),
            Op::Beq => return self.branch(self.cpu.flag(FLAG_Z), src, crossed),
            Op::Bne => return self.branch(!self.cpu.flag(FLAG_Z), src, crossed),
            Op::Bmi => return self.branch(self.cpu.flag(FLAG_N), src, crossed),
            Op::Bpl => return self.branch(!self.cpu.flag(FLAG_N), src, crossed),
            Op::Bvs => return self.branch(self.cpu.flag(FLAG_V), src, crossed),
            Op::Bvc => return self.branch(!self.cpu.flag(FLAG_V), src, crossed),

            // Control flow
            Op::Jmp => {
                if let Resolved::Addr(a) = src {
                    self.cpu.pc = a;
                }
            }
            Op::Jsr => {
                if let Resolved::Addr(a) = src {
                    let ret = self.cpu.pc.wrapping_sub(1);
                    self.push_word(ret);
                    self.cpu.pc = a;
                }
            }
            Op::Rts => {
                self.cpu.pc = self.pull_word().wrapping_add(1);
            }
            Op::Rti => {
                let status = self.pull();
                self.cpu.set_status(status);
                self.cpu.pc = self.pull_word();
            }
            Op::Brk => {
                let ret = self.cpu.pc.wrapping_add(1);
                self.push_word(ret);
                self.push(self.cpu.status | FLAG_B | FLAG_U);
                self.cpu.set_flag(FLAG_I, true);
                self.cpu.pc = self.read_word(IRQ_VECTOR);
            }

            // Stack
            Op::Pha => {
                self.push(self.cpu.a);
            }
            Op::Php => {
                self.push(self.cpu.status | FLAG_B | FLAG_U);
            }
            Op::Pla => {
                let v = self.pull();
                self.cpu.a = v;
                self.cpu.set_nz(v);
            }
            Op::Plp => {
                // The pulled B bit is discarded; the live one stays.
                let pulled = self.pull();
                let b = self.cpu.status & FLAG_B;
                self.cpu.set_status((pulled & !FLAG_B) | b);
            }

            // Transfers
            Op::Tax => {
                self.cpu.x = self.cpu.a;
                self.cpu.set_nz(self.cpu.x);
            }
            Op::Tay => {
                self.cpu.y = self.cpu.a;
                self.cpu.set_nz(self.cpu.y);
            }
            Op::Txa => {
                self.cpu.a = self.cpu.x;
                self.cpu.set_nz(self.cpu.a);
            }
            Op::Tya => {
                self.cpu.a = self.cpu.y;
                self.cpu.set_nz(self.cpu.a);
            }
            Op::Tsx => {
                self.cpu.x = self.cpu.sp;
                self.cpu.set_nz(self.cpu.x);
            }
            Op::Txs => {
                self.cpu.sp = self.cpu.x;
            }

            // Flags
            Op::Clc => self.cpu.set_flag(FLAG_C, false),
            Op::Sec => self.cpu.set_flag(FLAG_C, true),
            Op::Cli => self.cpu.set_flag(FLAG_I, false),
            Op::Sei => self.cpu.set_flag(FLAG_I, true),
            Op::Cld => self.cpu.set_flag(FLAG_D, false),
            Op::Sed => self.cpu.set_flag(FLAG_D, true),
            Op::Clv => self.cpu.set_flag(FLAG_V, false),

            // Unassigned opcodes execute as NOPs.
            Op::Nop | Op::Illegal => {}
        }
        0
    }

    fn adc(&mut self, value: u8) {
        let a = self.cpu.a;
        let sum = a as u16 + value as u16 + self.cpu.flag(FLAG_C) as u16;
        let result = sum as u8;
        self.cpu.set_flag(FLAG_C, sum > 0xFF);
        self.cpu.set_flag(FLAG_V, (!(a ^ value) & (a ^ result) & 0x80) != 0);
        self.cpu.a = result;
        self.cpu.set_nz(result);
    }

    fn compare(&mut self, reg: u8, value: u8) {
        let result = reg.wrapping_sub(value);
        self.cpu.set_flag(FLAG_C, reg >= value);
        self.cpu.set_nz(result);
    }

    fn branch(&mut self, taken: bool, src: Resolved, crossed: bool) -> u32 {
        if !taken {
            return 0;
        }
        if let Resolved::Addr(target) = src {
            self.cpu.pc = target;
        }
        1 + crossed as u32
    }
}

#[inline]
fn page_crossed(a: u16, b: u16) -> bool {
    a & 0xFF00 != b & 0xFF00
}
