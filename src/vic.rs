//! VIC-II raster timing model.
//!
//! No pixel output: the chip here is a beam-position state machine that
//! keeps `$D011`/`$D012` coherent with the raster line, flags badlines
//! (the VIC steals 40 cycles from the CPU to fetch character data), and
//! reports frame boundaries. Accurate enough for SID playback timing.

use log::debug;

use crate::memory::Memory;

// Badlines: DEN=1, raster in the display area ($30..$F7), and
// (raster & 7) == YSCROLL.
const FIRST_DMA_LINE: u16 = 0x30;
const LAST_DMA_LINE: u16 = 0xF7;
const BADLINE_STEAL_CYCLES: u32 = 40;

pub const REG_D011: u16 = 0xD011;
pub const REG_D012: u16 = 0xD012;

/// Video timing standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VicModel {
    Pal,
    Ntsc,
}

impl VicModel {
    pub const fn cycles_per_line(self) -> u32 {
        match self {
            VicModel::Pal => 63,
            VicModel::Ntsc => 65,
        }
    }

    pub const fn lines_per_frame(self) -> u16 {
        match self {
            VicModel::Pal => 312,
            VicModel::Ntsc => 262,
        }
    }

    pub const fn cycles_per_frame(self) -> u32 {
        self.cycles_per_line() * self.lines_per_frame() as u32
    }
}

/// Raster beam state.
///
/// `emulate_d012` is the per-step tick: it consumes the cycles the CPU
/// just charged and returns any badline cycles stolen on top. The event
/// latches are set here and cleared by the host, never by the core.
pub struct Vic {
    pub model: VicModel,
    /// Current raster line, 0-based.
    pub rasterline: u16,
    /// Frames completed since reset.
    pub frame_ctr: u64,
    /// Cycles into the current raster line.
    pub line_cycles: u32,
    /// Badline cycles stolen during the most recent tick.
    pub stolen_cycles: u32,

    // Host-read event latches.
    pub vsync_happened: bool,
    pub hsync_happened: bool,
    pub badline_happened: bool,
    pub rasterline_changed: bool,

    pub dbg_enabled: bool,
}

impl Vic {
    pub fn new(model: VicModel) -> Self {
        Self {
            model,
            rasterline: 0,
            frame_ctr: 0,
            line_cycles: 0,
            stolen_cycles: 0,
            vsync_happened: false,
            hsync_happened: false,
            badline_happened: false,
            rasterline_changed: false,
            dbg_enabled: false,
        }
    }

    pub fn reset(&mut self) {
        self.rasterline = 0;
        self.frame_ctr = 0;
        self.line_cycles = 0;
        self.stolen_cycles = 0;
        self.vsync_happened = false;
        self.hsync_happened = false;
        self.badline_happened = false;
        self.rasterline_changed = false;
    }

    /// Advance the beam by `cycles` CPU cycles. Mirrors the new raster
    /// position into `$D012` / bit 7 of `$D011` on every line change
    /// and returns the badline cycles stolen from the CPU.
    pub fn emulate_d012(&mut self, cycles: u32, mem: &mut Memory) -> u32 {
        self.stolen_cycles = 0;
        self.line_cycles += cycles;

        let cycles_per_line = self.model.cycles_per_line();
        while self.line_cycles >= cycles_per_line {
            self.line_cycles -= cycles_per_line;
            self.rasterline += 1;
            self.hsync_happened = true;
            self.rasterline_changed = true;

            if self.rasterline >= self.model.lines_per_frame() {
                self.rasterline = 0;
                self.frame_ctr += 1;
                self.vsync_happened = true;
            }

            self.sync_raster_regs(mem);

            if self.is_badline(mem) {
                self.badline_happened = true;
                self.stolen_cycles += BADLINE_STEAL_CYCLES;
            }

            if self.dbg_enabled {
                debug!(
                    "[vic] line {:3} frame {} badline={}",
                    self.rasterline,
                    self.frame_ctr,
                    self.stolen_cycles != 0
                );
            }
        }

        self.stolen_cycles
    }

    /// One debug line with the current beam position and latches.
    pub fn print_status(&self) {
        if self.dbg_enabled {
            debug!(
                "[vic] {:?} line {} frame {} vsync={} hsync={} badline={}",
                self.model,
                self.rasterline,
                self.frame_ctr,
                self.vsync_happened,
                self.hsync_happened,
                self.badline_happened
            );
        }
    }

    fn sync_raster_regs(&self, mem: &mut Memory) {
        mem.write(REG_D012, (self.rasterline & 0xFF) as u8);
        let d011 = mem.read(REG_D011);
        let hi = if self.rasterline > 0xFF { 0x80 } else { 0x00 };
        mem.write(REG_D011, (d011 & 0x7F) | hi);
    }

    fn is_badline(&self, mem: &Memory) -> bool {
        let d011 = mem.read(REG_D011);
        let den = d011 & 0x10 != 0;
        let yscroll = (d011 & 0x07) as u16;
        den && self.rasterline >= FIRST_DMA_LINE
            && self.rasterline <= LAST_DMA_LINE
            && (self.rasterline & 7) == yscroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_constants() {
        assert_eq!(VicModel::Pal.cycles_per_frame(), 19_656);
        assert_eq!(VicModel::Ntsc.cycles_per_frame(), 17_030);
    }

    #[test]
    fn test_line_advance_and_register_mirror() {
        let mut vic = Vic::new(VicModel::Pal);
        let mut mem = Memory::new();

        // 62 cycles: still on line 0.
        vic.emulate_d012(62, &mut mem);
        assert_eq!(vic.rasterline, 0);
        assert!(!vic.rasterline_changed);

        // One more completes the line.
        vic.emulate_d012(1, &mut mem);
        assert_eq!(vic.rasterline, 1);
        assert!(vic.hsync_happened);
        assert!(vic.rasterline_changed);
        assert_eq!(mem.read(REG_D012), 1);
        assert_eq!(mem.read(REG_D011) & 0x80, 0);
    }

    #[test]
    fn test_raster_high_bit_in_d011() {
        let mut vic = Vic::new(VicModel::Pal);
        let mut mem = Memory::new();
        vic.emulate_d012(63 * 300, &mut mem);
        assert_eq!(vic.rasterline, 300);
        assert_eq!(mem.read(REG_D012), (300u16 & 0xFF) as u8);
        assert_eq!(mem.read(REG_D011) & 0x80, 0x80);
    }

    #[test]
    fn test_frame_wrap_raises_vsync() {
        let mut vic = Vic::new(VicModel::Pal);
        let mut mem = Memory::new();
        vic.emulate_d012(VicModel::Pal.cycles_per_frame(), &mut mem);
        assert_eq!(vic.rasterline, 0);
        assert_eq!(vic.frame_ctr, 1);
        assert!(vic.vsync_happened);
    }

    #[test]
    fn test_latches_stay_up_until_host_clears() {
        let mut vic = Vic::new(VicModel::Pal);
        let mut mem = Memory::new();
        vic.emulate_d012(63, &mut mem);
        assert!(vic.hsync_happened);
        vic.emulate_d012(1, &mut mem);
        // No new line completed, latch still up.
        assert!(vic.hsync_happened);
        vic.hsync_happened = false;
        vic.emulate_d012(62, &mut mem);
        assert!(vic.hsync_happened);
    }

    #[test]
    fn test_badline_steals_forty_cycles() {
        let mut vic = Vic::new(VicModel::Pal);
        let mut mem = Memory::new();
        // Display enabled, YSCROLL = 0: line $30 is a badline.
        mem.write(REG_D011, 0x10);
        let stolen = vic.emulate_d012(63 * 0x30, &mut mem);
        assert_eq!(vic.rasterline, 0x30);
        assert_eq!(stolen, BADLINE_STEAL_CYCLES);
        assert!(vic.badline_happened);
    }

    #[test]
    fn test_no_badline_when_display_disabled() {
        let mut vic = Vic::new(VicModel::Pal);
        let mut mem = Memory::new();
        let stolen = vic.emulate_d012(63 * 0x30, &mut mem);
        assert_eq!(stolen, 0);
        assert!(!vic.badline_happened);
    }

    #[test]
    fn test_badline_matches_yscroll() {
        let mut vic = Vic::new(VicModel::Pal);
        let mut mem = Memory::new();
        mem.write(REG_D011, 0x13);
        // Line $30 has raster & 7 == 0, YSCROLL is 3: not a badline.
        assert_eq!(vic.emulate_d012(63 * 0x30, &mut mem), 0);
        // Line $33 matches.
        assert_eq!(vic.emulate_d012(63 * 3, &mut mem), BADLINE_STEAL_CYCLES);
        assert_eq!(vic.rasterline, 0x33);
    }
}
