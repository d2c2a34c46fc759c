//! `.prg` file loading.
//!
//! A `.prg` is a two-byte little-endian load address followed by raw
//! bytes. Payload reaching past $FFFF is truncated at the top of
//! memory, the same policy as `Memory::load`. On error the CPU state
//! is untouched; memory may be partially written.

use std::fs;
use std::io;
use std::path::Path;

use log::info;

use crate::c64::C64;
use crate::memory::Memory;

/// Load a `.prg` into memory. With `set_pc` the CPU's program counter
/// is pointed at the load address. Returns the load address.
pub fn load_prg<P: AsRef<Path>>(path: P, c64: &mut C64, set_pc: bool) -> io::Result<u16> {
    let path = path.as_ref();
    let data = fs::read(path)
        .map_err(|e| io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))?;

    let load_address = parse_prg(&data, &mut c64.mem).map_err(|e| {
        io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("{}: {}", path.display(), e),
        )
    })?;

    if set_pc {
        c64.cpu.pc = load_address;
    }

    info!(
        "[loader] {} -> ${:04X} ({} bytes)",
        path.display(),
        load_address,
        data.len().saturating_sub(2)
    );
    Ok(load_address)
}

/// Header + payload handling over raw bytes.
fn parse_prg(data: &[u8], mem: &mut Memory) -> Result<u16, String> {
    if data.len() < 2 {
        return Err(format!(
            "short read: .prg needs a 2-byte load address, got {} bytes",
            data.len()
        ));
    }
    let load_address = u16::from_le_bytes([data[0], data[1]]);
    mem.load(load_address, &data[2..]);
    Ok(load_address)
}
