//! Command-line host for the Cathode core.
//!
//! Loads a `.prg`, runs it to its top-level RTS, and reports cycle and
//! SID state. Not part of the core contract; a thin shell over the
//! library surface.

use std::process::ExitCode;

use cathode::{disassemble_forward, C64, C64Config, VicModel};

struct Args {
    prg: String,
    model: VicModel,
    frames: u32,
    disasm: usize,
    trace_cpu: bool,
    trace_vic: bool,
    trace_sid: bool,
}

fn usage() {
    eprintln!(
        "usage: cathode --prg <path> [--ntsc] [--frames <n>] [--disasm <n>]\n\
         \x20                        [--trace-cpu] [--trace-vic] [--trace-sid]\n\
         \n\
         Runs the program to its top-level RTS, or for --frames <n> video\n\
         frames. --disasm prints <n> code lines instead of running.\n\
         Set RUST_LOG=debug to see trace output."
    );
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        prg: String::new(),
        model: VicModel::Pal,
        frames: 0,
        disasm: 0,
        trace_cpu: false,
        trace_vic: false,
        trace_sid: false,
    };

    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--prg" => {
                args.prg = it.next().ok_or("--prg needs a path")?;
            }
            "--ntsc" => args.model = VicModel::Ntsc,
            "--frames" => {
                let n = it.next().ok_or("--frames needs a number")?;
                args.frames = n.parse().map_err(|_| format!("bad frame count: {n}"))?;
            }
            "--disasm" => {
                let n = it.next().ok_or("--disasm needs a number")?;
                args.disasm = n.parse().map_err(|_| format!("bad line count: {n}"))?;
            }
            "--trace-cpu" => args.trace_cpu = true,
            "--trace-vic" => args.trace_vic = true,
            "--trace-sid" => args.trace_sid = true,
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    if args.prg.is_empty() {
        return Err("--prg is required".into());
    }
    Ok(args)
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("cathode: {e}");
            usage();
            return ExitCode::from(2);
        }
    };

    let mut c64 = C64::with_config(C64Config {
        model: args.model,
        dbg_cpu: args.trace_cpu,
        dbg_vic: args.trace_vic,
        dbg_sid: args.trace_sid,
        ..C64Config::default()
    });

    let load_address = match c64.load_prg(&args.prg, true) {
        Ok(addr) => addr,
        Err(e) => {
            eprintln!("cathode: {e}");
            return ExitCode::FAILURE;
        }
    };
    println!("loaded {} at ${:04X}", args.prg, load_address);

    if args.disasm > 0 {
        disassemble_forward(&c64.mem, load_address, args.disasm);
        return ExitCode::SUCCESS;
    }

    if args.frames > 0 {
        // Frame-bounded run for programs that never return.
        let ran = c64.run_frames(args.frames);
        println!("ran {ran} frames, {} cycles", c64.cpu.cycles_executed);
    } else {
        c64.run();
        println!(
            "RTS after {} cycles ({} frames, raster line {})",
            c64.cpu.cycles_executed, c64.vic.frame_ctr, c64.vic.rasterline
        );
    }

    if c64.cpu.ext_sid_reg_written {
        let regs: Vec<String> = c64
            .sid
            .get_registers()
            .iter()
            .map(|r| format!("{r:02X}"))
            .collect();
        println!("SID ${:04X}: {}", c64.sid.base_address, regs.join(" "));
    }

    ExitCode::SUCCESS
}
