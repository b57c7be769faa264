// NES Emulator Core Library
// 6502 CPU, minimal PPU timing core, iNES mapper-0 loader, and host display

// Public modules
pub mod bus;
pub mod cartridge;
pub mod cpu;
pub mod display;
pub mod emulator;
pub mod ppu;

// Re-export main types for convenience
pub use bus::Bus;
pub use cartridge::{Cartridge, INesError, Mirroring};
pub use cpu::{Cpu, CpuError};
pub use display::{FrameBuffer, WindowConfig};
pub use emulator::{Emulator, EmulatorConfig, Host};
pub use ppu::Ppu;
