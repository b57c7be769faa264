// Mapper 0 (NROM) - the trivial mapper with no bank switching
//
// Memory Layout:
// - CPU $8000-$BFFF: First 16KB of PRG-ROM
// - CPU $C000-$FFFF: Last 16KB of PRG-ROM (mirror of the first 16KB for
//   16KB cartridges)
//
// A 16KB cartridge is expanded into a full 32KB image at construction time,
// with the bank copied into both halves, so every read is a plain index.

use crate::cartridge::{Cartridge, PRG_BANK_SIZE};

/// Size of the PRG window the CPU sees ($8000-$FFFF)
pub const PRG_WINDOW_SIZE: usize = 2 * PRG_BANK_SIZE;

/// Mapper 0 implementation (NROM)
pub struct Mapper0 {
    /// PRG-ROM presented as a full 32KB image
    prg_rom: Vec<u8>,

    /// CHR-ROM pattern data (8KB), not exercised by the CPU core
    chr_rom: Vec<u8>,
}

impl Mapper0 {
    /// Create a new Mapper0 instance from a loaded cartridge
    ///
    /// # Panics
    /// Panics if the PRG-ROM is not 16KB or 32KB (the loader only produces
    /// whole 16KB banks, so anything else is a programming error).
    pub fn new(cartridge: Cartridge) -> Self {
        let prg_rom_size = cartridge.prg_rom.len();
        assert!(
            prg_rom_size == PRG_BANK_SIZE || prg_rom_size == PRG_WINDOW_SIZE,
            "Mapper 0 requires 16KB or 32KB PRG-ROM, got {} bytes",
            prg_rom_size
        );

        // A single 16KB bank appears in both halves of the window
        let prg_rom = if prg_rom_size == PRG_BANK_SIZE {
            let mut image = Vec::with_capacity(PRG_WINDOW_SIZE);
            image.extend_from_slice(&cartridge.prg_rom);
            image.extend_from_slice(&cartridge.prg_rom);
            image
        } else {
            cartridge.prg_rom
        };

        Mapper0 {
            prg_rom,
            chr_rom: cartridge.chr_rom,
        }
    }

    /// Read a byte from the PRG window
    ///
    /// `offset` is relative to $8000 (i.e. `cpu_addr - 0x8000`).
    #[inline]
    pub fn prg_read(&self, offset: u16) -> u8 {
        self.prg_rom[offset as usize]
    }

    /// Write a byte to the PRG window
    ///
    /// NROM has no mapper registers; writes are silently discarded.
    pub fn prg_write(&mut self, _offset: u16, _value: u8) {}

    /// Read a byte from the CHR pattern data
    ///
    /// Cartridges with zero CHR banks read as 0.
    #[inline]
    pub fn chr_read(&self, addr: u16) -> u8 {
        if self.chr_rom.is_empty() {
            return 0;
        }
        self.chr_rom[addr as usize % self.chr_rom.len()]
    }
}
