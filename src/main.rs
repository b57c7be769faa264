// famicore - NES emulator entry point
//
// Takes one optional positional argument naming a ROM file; without it the
// bundled test ROM is used. Exit code 0 on normal termination, 1 when the
// cartridge cannot be loaded.

use famicore::display::{run_window, WindowConfig};
use famicore::emulator::Emulator;
use std::env;
use std::process;
use std::time::Instant;

const DEFAULT_ROM: &str = "tests/nestest.nes";

fn main() {
    let rom_path = env::args().nth(1).unwrap_or_else(|| DEFAULT_ROM.to_string());
    println!("Loading {}", rom_path);

    let mut emulator = Emulator::new();
    if let Err(err) = emulator.load_rom(&rom_path) {
        eprintln!("{}", err);
        process::exit(1);
    }

    let video = emulator.config().video.clone();
    let window_config = WindowConfig::new()
        .with_scale(video.scale)
        .with_fps(video.fps)
        .with_vsync(video.vsync);

    let start = Instant::now();
    match run_window(emulator, window_config) {
        Ok(frames) => {
            let seconds = start.elapsed().as_secs_f64();
            println!(
                "Rendered {} frames in {:.3} seconds ({:.2} fps).",
                frames,
                seconds,
                frames as f64 / seconds
            );
        }
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}
