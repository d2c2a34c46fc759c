//! Cathode: a Commodore 64 execution core.
//!
//! Cycle-accurate MOS 6510 interpretation coupled with a VIC-II raster
//! timing model and a SID register observer over one flat 64 KiB
//! memory. Intended as an embeddable backbone for analysis, tracing,
//! and playback of C64 machine code (SID player routines in
//! particular), not as a full-system emulator: no pixel output, no
//! audio synthesis, no ROM banking.
//!
//! ```no_run
//! use cathode::{C64, VicModel};
//!
//! let mut c64 = C64::new(VicModel::Pal);
//! let entry = c64.load_prg("routine.prg", false).unwrap();
//! c64.call(entry);            // execute until the routine returns
//! let regs = c64.sid.get_registers();
//! # let _ = regs;
//! ```

pub mod c64;
pub mod cpu;
pub mod loader;
pub mod memory;
pub mod sid;
pub mod vic;

pub use c64::{C64, C64Config};
pub use cpu::disasm::{
    decode_instruction, disassemble_code_line, disassemble_forward, disassemble_insn,
    instruction_size, Instruction,
};
pub use cpu::Mos6510;
pub use loader::load_prg;
pub use memory::Memory;
pub use sid::Sid;
pub use vic::{Vic, VicModel};
