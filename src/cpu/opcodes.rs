// Opcode table for the 6502 CPU
//
// The table is the authoritative reference for the dispatcher: one entry
// per byte carrying the mnemonic, addressing mode, base cycle cost, and
// whether the instruction pays the +1 page-cross penalty on indexed reads.
// Entries marked "???" are outside the canonical table (the jam opcodes and
// the unstable undocumented forms); decoding one is a fatal error.
//
// Base cycle costs follow the canonical timing: taken branches and indexed
// reads that cross a page add their extra cycles on top at execution time.

use crate::cpu::addressing::AddressingMode;

/// One row of the opcode table
pub struct OpcodeInfo {
    /// Three-letter mnemonic ("???" for bytes outside the table)
    pub mnemonic: &'static str,

    /// Addressing mode the operand bytes are decoded with
    pub mode: AddressingMode,

    /// Base cycle cost charged at dispatch
    pub cycles: u8,

    /// Charge +1 cycle when the addressing mode reports a page cross
    /// (indexed reads only; stores and read-modify-writes never do)
    pub page_cycle: bool,
}

const fn op(mnemonic: &'static str, mode: AddressingMode, cycles: u8) -> OpcodeInfo {
    OpcodeInfo {
        mnemonic,
        mode,
        cycles,
        page_cycle: false,
    }
}

/// Entry for an indexed read that pays the page-cross penalty
const fn opp(mnemonic: &'static str, mode: AddressingMode, cycles: u8) -> OpcodeInfo {
    OpcodeInfo {
        mnemonic,
        mode,
        cycles,
        page_cycle: true,
    }
}

/// Entry for a byte outside the canonical table
const fn bad() -> OpcodeInfo {
    op("???", AddressingMode::Implied, 0)
}

use crate::cpu::addressing::AddressingMode::*;

/// The full 256-entry opcode table, indexed by opcode byte
pub static OPCODE_TABLE: [OpcodeInfo; 256] = [
    // 0x00 - 0x0F
    op("BRK", Implied, 7),
    op("ORA", IndirectX, 6),
    bad(),
    op("SLO", IndirectX, 8),
    op("NOP", ZeroPage, 3),
    op("ORA", ZeroPage, 3),
    op("ASL", ZeroPage, 5),
    op("SLO", ZeroPage, 5),
    op("PHP", Implied, 3),
    op("ORA", Immediate, 2),
    op("ASL", Accumulator, 2),
    bad(),
    op("NOP", Absolute, 4),
    op("ORA", Absolute, 4),
    op("ASL", Absolute, 6),
    op("SLO", Absolute, 6),
    // 0x10 - 0x1F
    op("BPL", Relative, 2),
    opp("ORA", IndirectY, 5),
    bad(),
    op("SLO", IndirectY, 8),
    op("NOP", ZeroPageX, 4),
    op("ORA", ZeroPageX, 4),
    op("ASL", ZeroPageX, 6),
    op("SLO", ZeroPageX, 6),
    op("CLC", Implied, 2),
    opp("ORA", AbsoluteY, 4),
    op("NOP", Implied, 2),
    op("SLO", AbsoluteY, 7),
    opp("NOP", AbsoluteX, 4),
    opp("ORA", AbsoluteX, 4),
    op("ASL", AbsoluteX, 7),
    op("SLO", AbsoluteX, 7),
    // 0x20 - 0x2F
    op("JSR", Absolute, 6),
    op("AND", IndirectX, 6),
    bad(),
    op("RLA", IndirectX, 8),
    op("BIT", ZeroPage, 3),
    op("AND", ZeroPage, 3),
    op("ROL", ZeroPage, 5),
    op("RLA", ZeroPage, 5),
    op("PLP", Implied, 4),
    op("AND", Immediate, 2),
    op("ROL", Accumulator, 2),
    bad(),
    op("BIT", Absolute, 4),
    op("AND", Absolute, 4),
    op("ROL", Absolute, 6),
    op("RLA", Absolute, 6),
    // 0x30 - 0x3F
    op("BMI", Relative, 2),
    opp("AND", IndirectY, 5),
    bad(),
    op("RLA", IndirectY, 8),
    op("NOP", ZeroPageX, 4),
    op("AND", ZeroPageX, 4),
    op("ROL", ZeroPageX, 6),
    op("RLA", ZeroPageX, 6),
    op("SEC", Implied, 2),
    opp("AND", AbsoluteY, 4),
    op("NOP", Implied, 2),
    op("RLA", AbsoluteY, 7),
    opp("NOP", AbsoluteX, 4),
    opp("AND", AbsoluteX, 4),
    op("ROL", AbsoluteX, 7),
    op("RLA", AbsoluteX, 7),
    // 0x40 - 0x4F
    op("RTI", Implied, 6),
    op("EOR", IndirectX, 6),
    bad(),
    op("SRE", IndirectX, 8),
    op("NOP", ZeroPage, 3),
    op("EOR", ZeroPage, 3),
    op("LSR", ZeroPage, 5),
    op("SRE", ZeroPage, 5),
    op("PHA", Implied, 3),
    op("EOR", Immediate, 2),
    op("LSR", Accumulator, 2),
    bad(),
    op("JMP", Absolute, 3),
    op("EOR", Absolute, 4),
    op("LSR", Absolute, 6),
    op("SRE", Absolute, 6),
    // 0x50 - 0x5F
    op("BVC", Relative, 2),
    opp("EOR", IndirectY, 5),
    bad(),
    op("SRE", IndirectY, 8),
    op("NOP", ZeroPageX, 4),
    op("EOR", ZeroPageX, 4),
    op("LSR", ZeroPageX, 6),
    op("SRE", ZeroPageX, 6),
    op("CLI", Implied, 2),
    opp("EOR", AbsoluteY, 4),
    op("NOP", Implied, 2),
    op("SRE", AbsoluteY, 7),
    opp("NOP", AbsoluteX, 4),
    opp("EOR", AbsoluteX, 4),
    op("LSR", AbsoluteX, 7),
    op("SRE", AbsoluteX, 7),
    // 0x60 - 0x6F
    op("RTS", Implied, 6),
    op("ADC", IndirectX, 6),
    bad(),
    op("RRA", IndirectX, 8),
    op("NOP", ZeroPage, 3),
    op("ADC", ZeroPage, 3),
    op("ROR", ZeroPage, 5),
    op("RRA", ZeroPage, 5),
    op("PLA", Implied, 4),
    op("ADC", Immediate, 2),
    op("ROR", Accumulator, 2),
    bad(),
    op("JMP", Indirect, 5),
    op("ADC", Absolute, 4),
    op("ROR", Absolute, 6),
    op("RRA", Absolute, 6),
    // 0x70 - 0x7F
    op("BVS", Relative, 2),
    opp("ADC", IndirectY, 5),
    bad(),
    op("RRA", IndirectY, 8),
    op("NOP", ZeroPageX, 4),
    op("ADC", ZeroPageX, 4),
    op("ROR", ZeroPageX, 6),
    op("RRA", ZeroPageX, 6),
    op("SEI", Implied, 2),
    opp("ADC", AbsoluteY, 4),
    op("NOP", Implied, 2),
    op("RRA", AbsoluteY, 7),
    opp("NOP", AbsoluteX, 4),
    opp("ADC", AbsoluteX, 4),
    op("ROR", AbsoluteX, 7),
    op("RRA", AbsoluteX, 7),
    // 0x80 - 0x8F
    op("NOP", Immediate, 2),
    op("STA", IndirectX, 6),
    bad(),
    op("SAX", IndirectX, 6),
    op("STY", ZeroPage, 3),
    op("STA", ZeroPage, 3),
    op("STX", ZeroPage, 3),
    op("SAX", ZeroPage, 3),
    op("DEY", Implied, 2),
    op("NOP", Immediate, 2),
    op("TXA", Implied, 2),
    bad(),
    op("STY", Absolute, 4),
    op("STA", Absolute, 4),
    op("STX", Absolute, 4),
    op("SAX", Absolute, 4),
    // 0x90 - 0x9F
    op("BCC", Relative, 2),
    op("STA", IndirectY, 6),
    bad(),
    bad(),
    op("STY", ZeroPageX, 4),
    op("STA", ZeroPageX, 4),
    op("STX", ZeroPageY, 4),
    op("SAX", ZeroPageY, 4),
    op("TYA", Implied, 2),
    op("STA", AbsoluteY, 5),
    op("TXS", Implied, 2),
    bad(),
    bad(),
    op("STA", AbsoluteX, 5),
    bad(),
    bad(),
    // 0xA0 - 0xAF
    op("LDY", Immediate, 2),
    op("LDA", IndirectX, 6),
    op("LDX", Immediate, 2),
    op("LAX", IndirectX, 6),
    op("LDY", ZeroPage, 3),
    op("LDA", ZeroPage, 3),
    op("LDX", ZeroPage, 3),
    op("LAX", ZeroPage, 3),
    op("TAY", Implied, 2),
    op("LDA", Immediate, 2),
    op("TAX", Implied, 2),
    bad(),
    op("LDY", Absolute, 4),
    op("LDA", Absolute, 4),
    op("LDX", Absolute, 4),
    op("LAX", Absolute, 4),
    // 0xB0 - 0xBF
    op("BCS", Relative, 2),
    opp("LDA", IndirectY, 5),
    bad(),
    opp("LAX", IndirectY, 5),
    op("LDY", ZeroPageX, 4),
    op("LDA", ZeroPageX, 4),
    op("LDX", ZeroPageY, 4),
    op("LAX", ZeroPageY, 4),
    op("CLV", Implied, 2),
    opp("LDA", AbsoluteY, 4),
    op("TSX", Implied, 2),
    bad(),
    opp("LDY", AbsoluteX, 4),
    opp("LDA", AbsoluteX, 4),
    opp("LDX", AbsoluteY, 4),
    opp("LAX", AbsoluteY, 4),
    // 0xC0 - 0xCF
    op("CPY", Immediate, 2),
    op("CMP", IndirectX, 6),
    bad(),
    op("DCP", IndirectX, 8),
    op("CPY", ZeroPage, 3),
    op("CMP", ZeroPage, 3),
    op("DEC", ZeroPage, 5),
    op("DCP", ZeroPage, 5),
    op("INY", Implied, 2),
    op("CMP", Immediate, 2),
    op("DEX", Implied, 2),
    bad(),
    op("CPY", Absolute, 4),
    op("CMP", Absolute, 4),
    op("DEC", Absolute, 6),
    op("DCP", Absolute, 6),
    // 0xD0 - 0xDF
    op("BNE", Relative, 2),
    opp("CMP", IndirectY, 5),
    bad(),
    op("DCP", IndirectY, 8),
    op("NOP", ZeroPageX, 4),
    op("CMP", ZeroPageX, 4),
    op("DEC", ZeroPageX, 6),
    op("DCP", ZeroPageX, 6),
    op("CLD", Implied, 2),
    opp("CMP", AbsoluteY, 4),
    op("NOP", Implied, 2),
    op("DCP", AbsoluteY, 7),
    opp("NOP", AbsoluteX, 4),
    opp("CMP", AbsoluteX, 4),
    op("DEC", AbsoluteX, 7),
    op("DCP", AbsoluteX, 7),
    // 0xE0 - 0xEF
    op("CPX", Immediate, 2),
    op("SBC", IndirectX, 6),
    bad(),
    op("ISB", IndirectX, 8),
    op("CPX", ZeroPage, 3),
    op("SBC", ZeroPage, 3),
    op("INC", ZeroPage, 5),
    op("ISB", ZeroPage, 5),
    op("INX", Implied, 2),
    op("SBC", Immediate, 2),
    op("NOP", Implied, 2),
    op("SBC", Immediate, 2),
    op("CPX", Absolute, 4),
    op("SBC", Absolute, 4),
    op("INC", Absolute, 6),
    op("ISB", Absolute, 6),
    // 0xF0 - 0xFF
    op("BEQ", Relative, 2),
    opp("SBC", IndirectY, 5),
    bad(),
    op("ISB", IndirectY, 8),
    op("NOP", ZeroPageX, 4),
    op("SBC", ZeroPageX, 4),
    op("INC", ZeroPageX, 6),
    op("ISB", ZeroPageX, 6),
    op("SED", Implied, 2),
    opp("SBC", AbsoluteY, 4),
    op("NOP", Implied, 2),
    op("ISB", AbsoluteY, 7),
    opp("NOP", AbsoluteX, 4),
    opp("SBC", AbsoluteX, 4),
    op("INC", AbsoluteX, 7),
    op("ISB", AbsoluteX, 7),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_256_entries() {
        assert_eq!(OPCODE_TABLE.len(), 256);
    }

    #[test]
    fn test_documented_entries() {
        assert_eq!(OPCODE_TABLE[0xA9].mnemonic, "LDA");
        assert_eq!(OPCODE_TABLE[0xA9].mode, AddressingMode::Immediate);
        assert_eq!(OPCODE_TABLE[0xA9].cycles, 2);

        assert_eq!(OPCODE_TABLE[0x6C].mnemonic, "JMP");
        assert_eq!(OPCODE_TABLE[0x6C].mode, AddressingMode::Indirect);
        assert_eq!(OPCODE_TABLE[0x6C].cycles, 5);

        assert_eq!(OPCODE_TABLE[0x00].mnemonic, "BRK");
        assert_eq!(OPCODE_TABLE[0x00].cycles, 7);
    }

    #[test]
    fn test_stores_never_take_page_penalty() {
        // Indexed stores pay their higher fixed cost instead
        for &opcode in &[0x9Dusize, 0x99, 0x91] {
            assert_eq!(OPCODE_TABLE[opcode].mnemonic, "STA");
            assert!(!OPCODE_TABLE[opcode].page_cycle);
            assert!(OPCODE_TABLE[opcode].cycles >= 5);
        }
    }

    #[test]
    fn test_indexed_reads_take_page_penalty() {
        for &opcode in &[0xBDusize, 0xB9, 0xB1, 0xBE, 0xBC, 0x7D, 0xF9, 0xBF] {
            assert!(
                OPCODE_TABLE[opcode].page_cycle,
                "opcode {:#04x} should pay the page-cross penalty",
                opcode
            );
        }
    }

    #[test]
    fn test_unofficial_combos_present() {
        assert_eq!(OPCODE_TABLE[0xA7].mnemonic, "LAX");
        assert_eq!(OPCODE_TABLE[0x87].mnemonic, "SAX");
        assert_eq!(OPCODE_TABLE[0xC7].mnemonic, "DCP");
        assert_eq!(OPCODE_TABLE[0xE7].mnemonic, "ISB");
        assert_eq!(OPCODE_TABLE[0x27].mnemonic, "RLA");
        assert_eq!(OPCODE_TABLE[0x67].mnemonic, "RRA");
        assert_eq!(OPCODE_TABLE[0x07].mnemonic, "SLO");
        assert_eq!(OPCODE_TABLE[0x47].mnemonic, "SRE");

        // The alternate SBC
        assert_eq!(OPCODE_TABLE[0xEB].mnemonic, "SBC");
        assert_eq!(OPCODE_TABLE[0xEB].mode, AddressingMode::Immediate);
    }

    #[test]
    fn test_unofficial_nops_consume_operands() {
        assert_eq!(OPCODE_TABLE[0x04].mode, AddressingMode::ZeroPage);
        assert_eq!(OPCODE_TABLE[0x14].mode, AddressingMode::ZeroPageX);
        assert_eq!(OPCODE_TABLE[0x80].mode, AddressingMode::Immediate);
        assert_eq!(OPCODE_TABLE[0x0C].mode, AddressingMode::Absolute);
        assert_eq!(OPCODE_TABLE[0x1C].mode, AddressingMode::AbsoluteX);
        assert!(OPCODE_TABLE[0x1C].page_cycle);
    }

    #[test]
    fn test_bytes_outside_the_table_are_marked() {
        for &opcode in &[
            0x02usize, 0x12, 0x22, 0x32, 0x42, 0x52, 0x62, 0x72, 0x92, 0xB2, 0xD2, 0xF2, 0x0B,
            0x2B, 0x4B, 0x6B, 0x8B, 0xAB, 0xCB, 0xBB, 0x82, 0xC2, 0xE2, 0x93, 0x9B, 0x9C, 0x9E,
            0x9F,
        ] {
            assert_eq!(
                OPCODE_TABLE[opcode].mnemonic, "???",
                "opcode {:#04x} should be outside the table",
                opcode
            );
        }
    }
}
