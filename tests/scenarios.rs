//! End-to-end scenarios against the public crate surface.

use cathode::{decode_instruction, disassemble_code_line, C64, VicModel};

/// LDA #$42; STA $D020; RTS: the smallest load-and-run program.
#[test]
fn trivial_program_runs_to_rts() {
    let mut c64 = C64::new(VicModel::Pal);
    c64.mem.load(0xC000, &[0xA9, 0x42, 0x8D, 0x20, 0xD0, 0x60]);
    c64.cpu.pc = 0xC000;
    c64.run();

    assert_eq!(c64.cpu.a, 0x42);
    assert_eq!(c64.mem.read(0xD020), 0x42);
    assert_eq!(c64.cpu.cycles_executed, 12);
    assert_eq!(c64.cpu.opcode_last, 0x60);
}

/// The README sweep: fill SID registers 10..24 with an ascending ramp.
///
/// $0800  LDA #$0A
///        TAX
/// loop:  ADC #$1E
///        STA $D400,X
///        INX
///        CPX #$19
///        BNE loop
///        RTS
#[test]
fn sid_register_sweep() {
    let mut c64 = C64::new(VicModel::Pal);
    c64.mem.load(
        0x0800,
        &[
            0xA9, 0x0A, 0xAA, 0x69, 0x1E, 0x9D, 0x00, 0xD4, 0xE8, 0xE0, 0x19, 0xD0, 0xF6, 0x60,
        ],
    );
    c64.call(0x0800);

    let regs = c64.sid.get_registers();
    let expected: [u8; 15] = [
        0x28, 0x46, 0x64, 0x82, 0xA0, 0xBE, 0xDC, 0xFA, 0x18, 0x36, 0x54, 0x72, 0x90, 0xAE, 0xCC,
    ];
    assert_eq!(&regs[10..25], &expected);
    for reg in &regs[0..10] {
        assert_eq!(*reg, 0);
    }
    assert!(c64.cpu.ext_sid_reg_written);
    assert!(c64.cpu.ext_sid_reg_changed);
    assert_eq!(c64.cpu.a, 0xCC);
}

/// Three PAL frames of a tight NOP/JMP loop.
#[test]
fn frame_counting() {
    let mut c64 = C64::new(VicModel::Pal);
    c64.mem.load(0xC000, &[0xEA, 0x4C, 0x00, 0xC0]);
    c64.cpu.pc = 0xC000;

    let frames = c64.run_frames(3);
    assert_eq!(frames, 3);
    assert_eq!(c64.vic.frame_ctr, 3);

    let expected = 3 * VicModel::Pal.cycles_per_frame() as u64;
    let diff = c64.cpu.cycles_executed.abs_diff(expected);
    assert!(diff <= 5, "cycle count off by {diff}");
}

/// Exact column layout of a disassembled code line.
#[test]
fn disassembly_formatting() {
    let insn = decode_instruction(&[0xA9, 0x10]);
    let mut buf = String::new();
    disassemble_code_line(&mut buf, 0xC00C, &insn).unwrap();
    assert_eq!(buf, "C00C:  A9 10     LDA #$10");
}

/// JMP ($10FF) reads the vector high byte from $1000, not $1100.
#[test]
fn page_boundary_jmp_bug() {
    let mut c64 = C64::new(VicModel::Pal);
    c64.mem.write(0x10FF, 0x34);
    c64.mem.write(0x1000, 0x12);
    c64.mem.write(0x1100, 0xAB);
    c64.mem.load(0xC000, &[0x6C, 0xFF, 0x10]);
    c64.cpu.pc = 0xC000;
    c64.run_step();
    assert_eq!(c64.cpu.pc, 0x1234);
}

/// Write/change detection through the CPU write path.
#[test]
fn sid_change_detection() {
    let mut c64 = C64::new(VicModel::Pal);
    c64.mem.load(0xC000, &[0xA9, 0x55, 0x8D, 0x00, 0xD4]);
    c64.cpu.pc = 0xC000;
    c64.run_step(); // LDA
    c64.run_step(); // STA $D400
    assert!(c64.cpu.sid_reg_written);
    assert!(c64.cpu.sid_reg_changed);
    assert_eq!(c64.sid.reg_changed_from, 0x00);
    assert_eq!(c64.sid.reg_changed_to, 0x55);

    // Same store again: a write, but no change.
    c64.mem.load(0xC000, &[0x8D, 0x00, 0xD4]);
    c64.cpu.pc = 0xC000;
    c64.run_step();
    assert!(c64.cpu.sid_reg_written);
    assert!(!c64.cpu.sid_reg_changed);
}
