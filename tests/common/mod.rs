// Common test utilities for ROM-based integration tests
//
// Helpers to craft minimal mapper-0 cartridges with a program placed at a
// chosen entry point and all three vectors wired up.

#![allow(dead_code)]

use famicore::cartridge::{Cartridge, Mirroring, PRG_BANK_SIZE};

/// Build a 16KB cartridge with `program` at `entry` and every vector
/// pointing at `entry`. The rest of the bank is NOP filler.
pub fn cartridge_with_program(program: &[u8], entry: u16) -> Cartridge {
    cartridge_with_vectors(program, entry, entry, entry)
}

/// Build a 16KB cartridge with distinct reset/NMI/IRQ vectors
pub fn cartridge_with_vectors(program: &[u8], reset: u16, nmi: u16, irq: u16) -> Cartridge {
    let mut prg = vec![0xEA; PRG_BANK_SIZE]; // NOP filler

    let offset = (reset as usize - 0x8000) & (PRG_BANK_SIZE - 1);
    prg[offset..offset + program.len()].copy_from_slice(program);

    prg[0x3FFA] = (nmi & 0xFF) as u8;
    prg[0x3FFB] = (nmi >> 8) as u8;
    prg[0x3FFC] = (reset & 0xFF) as u8;
    prg[0x3FFD] = (reset >> 8) as u8;
    prg[0x3FFE] = (irq & 0xFF) as u8;
    prg[0x3FFF] = (irq >> 8) as u8;

    cartridge_from_prg(prg)
}

/// Wrap a raw PRG bank in a mapper-0 cartridge
pub fn cartridge_from_prg(prg_rom: Vec<u8>) -> Cartridge {
    let prg_banks = (prg_rom.len() / PRG_BANK_SIZE) as u8;
    Cartridge {
        prg_rom,
        chr_rom: vec![0; 0x2000],
        prg_banks,
        chr_banks: 1,
        prg_ram_banks: 0,
        mapper: 0,
        mirroring: Mirroring::Horizontal,
        has_battery: false,
        has_trainer: false,
        vs_system: false,
        is_pal: false,
    }
}
