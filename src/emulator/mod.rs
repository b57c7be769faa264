// Emulator module - the owning context and scheduler
//
// Owns the CPU and the bus (which in turn owns work RAM, save RAM, the
// mapper, and the PPU), wires cartridge loading to reset, and runs the
// lockstep loop: one CPU instruction, then three PPU ticks per cycle
// charged, then host interaction.

mod config;

pub use config::{EmulatorConfig, VideoConfig};

use crate::bus::Bus;
use crate::cartridge::{Cartridge, INesError, Mapper0};
use crate::cpu::{Cpu, CpuError};
use crate::display::FrameBuffer;
use std::path::{Path, PathBuf};

/// Host collaborator contract
///
/// The core drives the host: it hands over each completed frame and polls
/// for a quit request between instructions. The interactive window is one
/// implementation; tests use headless ones.
pub trait Host {
    /// Poll the host; returns true when the host requests termination
    fn tick_host(&mut self) -> bool;

    /// Present a completed frame
    fn present(&mut self, frame: &FrameBuffer);
}

/// Main emulator structure
pub struct Emulator {
    /// CPU (6502 processor)
    cpu: Cpu,

    /// Bus, owning memory, the mapper, and the PPU
    bus: Bus,

    /// Configuration
    config: EmulatorConfig,

    /// Currently loaded ROM path
    rom_path: Option<PathBuf>,
}

impl Emulator {
    /// Create a new emulator instance with no cartridge
    pub fn new() -> Self {
        Emulator {
            cpu: Cpu::new(),
            bus: Bus::new(),
            config: EmulatorConfig::load_or_default(),
            rom_path: None,
        }
    }

    /// Load an iNES ROM from disk and reset into it
    ///
    /// # Errors
    /// Propagates the loader's `INesError` (I/O failure, bad magic, or an
    /// unsupported mapper).
    pub fn load_rom<P: AsRef<Path>>(&mut self, path: P) -> Result<(), INesError> {
        let cartridge = Cartridge::from_ines_file(path.as_ref())?;
        self.rom_path = Some(path.as_ref().to_path_buf());
        self.insert_cartridge(cartridge);
        Ok(())
    }

    /// Attach an already-loaded cartridge and reset into it
    pub fn insert_cartridge(&mut self, cartridge: Cartridge) {
        self.bus.attach_mapper(Mapper0::new(cartridge));
        self.reset();
    }

    /// Reset the whole machine
    ///
    /// Work RAM is zeroed, save RAM filled with 0xFF, the PPU counters
    /// cleared, and the CPU loads PC through the RESET vector.
    pub fn reset(&mut self) {
        self.bus.reset();
        self.cpu.reset(&mut self.bus);
    }

    /// Execute one CPU instruction and advance the PPU in lockstep
    ///
    /// Three PPU ticks elapse per CPU cycle charged, including interrupt
    /// entry cycles.
    pub fn step(&mut self) -> Result<u8, CpuError> {
        let cycles = self.cpu.step(&mut self.bus)?;

        for _ in 0..cycles as u32 * 3 {
            self.bus.ppu_mut().tick();
        }

        Ok(cycles)
    }

    /// Run until the host requests termination
    ///
    /// Each iteration executes one instruction, hands any completed frame
    /// to the host, and polls it for quit.
    pub fn run<H: Host>(&mut self, host: &mut H) -> Result<(), CpuError> {
        loop {
            self.step()?;

            if self.bus.ppu_mut().take_frame() {
                host.present(self.bus.ppu().frame_buffer());
            }

            if host.tick_host() {
                return Ok(());
            }
        }
    }

    /// One conformance-trace line for the instruction about to execute
    pub fn trace(&self) -> String {
        self.cpu.trace(&self.bus)
    }

    /// Get reference to the CPU
    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// Get mutable reference to the CPU
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    /// Get reference to the bus
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Get mutable reference to the bus
    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    /// Get reference to the configuration
    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    /// Get the currently loaded ROM path
    pub fn rom_path(&self) -> Option<&Path> {
        self.rom_path.as_deref()
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}
