// Undocumented combo opcodes
//
// Each combo is built from the same shared primitives as its documented
// decomposition, so the register file and flags come out identical to
// executing the two documented opcodes back to back (only the cycle cost
// differs, and that lives in the opcode table).

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::Cpu;

impl Cpu {
    /// LAX - Load Accumulator and X
    ///
    /// M into both A and X; Z and N from the value. The indexed forms pay
    /// the page-cross read penalty like LDA.
    pub fn lax(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.a = value;
        self.x = value;
        self.update_zero_and_negative_flags(value);
    }

    /// SAX - Store A AND X
    ///
    /// Flags affected: none
    pub fn sax(&self, bus: &mut Bus, addr_result: &AddressingResult) {
        bus.write(addr_result.address, self.a & self.x);
    }

    /// DCP - Decrement memory, then compare with A
    pub fn dcp(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = bus.read(addr_result.address).wrapping_sub(1);
        bus.write(addr_result.address, value);

        self.compare(self.a, value);
    }

    /// ISB - Increment memory, then subtract it from A
    pub fn isb(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = bus.read(addr_result.address).wrapping_add(1);
        bus.write(addr_result.address, value);

        self.subtract_from_accumulator(value);
    }

    /// RLA - Rotate memory left, then AND with A
    pub fn rla(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.rotate_left(bus.read(addr_result.address));
        bus.write(addr_result.address, value);

        self.a &= value;
        self.update_zero_and_negative_flags(self.a);
    }

    /// RRA - Rotate memory right, then add it to A
    pub fn rra(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.rotate_right(bus.read(addr_result.address));
        bus.write(addr_result.address, value);

        self.add_to_accumulator(value);
    }

    /// SLO - Shift memory left, then OR with A
    pub fn slo(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.shift_left(bus.read(addr_result.address));
        bus.write(addr_result.address, value);

        self.a |= value;
        self.update_zero_and_negative_flags(self.a);
    }

    /// SRE - Shift memory right, then XOR with A
    pub fn sre(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.shift_right(bus.read(addr_result.address));
        bus.write(addr_result.address, value);

        self.a ^= value;
        self.update_zero_and_negative_flags(self.a);
    }
}

#[cfg(test)]
mod tests {
    use crate::bus::Bus;
    use crate::cpu::addressing::AddressingResult;
    use crate::cpu::Cpu;

    const ADDR: u16 = 0x0010;

    /// Sample operand values that exercise sign, zero, and carry edges
    const SAMPLES: [u8; 6] = [0x00, 0x01, 0x40, 0x7F, 0x80, 0xFF];

    fn setup(a: u8, memory: u8, carry: bool) -> (Cpu, Bus) {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        cpu.a = a;
        cpu.set_carry(carry);
        bus.write(ADDR, memory);
        (cpu, bus)
    }

    fn state(cpu: &Cpu, bus: &Bus) -> (u8, u8, u8, u8) {
        (cpu.a, cpu.x, cpu.status, bus.peek(ADDR))
    }

    #[test]
    fn test_lax_loads_both_registers() {
        let (mut cpu, mut bus) = setup(0x00, 0x80, false);

        cpu.lax(&mut bus, &AddressingResult::new(ADDR));

        assert_eq!(cpu.a, 0x80);
        assert_eq!(cpu.x, 0x80);
        assert!(cpu.get_negative());
    }

    #[test]
    fn test_sax_stores_a_and_x_without_flags() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        cpu.a = 0b1100_1100;
        cpu.x = 0b1010_1010;
        let status_before = cpu.status;

        cpu.sax(&mut bus, &AddressingResult::new(ADDR));

        assert_eq!(bus.read(ADDR), 0b1000_1000);
        assert_eq!(cpu.status, status_before);
    }

    #[test]
    fn test_dcp_matches_dec_then_cmp() {
        for &a in &SAMPLES {
            for &m in &SAMPLES {
                let (mut cpu, mut bus) = setup(a, m, false);
                cpu.dcp(&mut bus, &AddressingResult::new(ADDR));
                let combo = state(&cpu, &bus);

                let (mut cpu, mut bus) = setup(a, m, false);
                cpu.dec(&mut bus, &AddressingResult::new(ADDR));
                cpu.cmp(&mut bus, &AddressingResult::new(ADDR));
                let decomposed = state(&cpu, &bus);

                assert_eq!(combo, decomposed, "DCP != DEC+CMP for A={:#04x} M={:#04x}", a, m);
            }
        }
    }

    #[test]
    fn test_isb_matches_inc_then_sbc() {
        for &a in &SAMPLES {
            for &m in &SAMPLES {
                for &carry in &[false, true] {
                    let (mut cpu, mut bus) = setup(a, m, carry);
                    cpu.isb(&mut bus, &AddressingResult::new(ADDR));
                    let combo = state(&cpu, &bus);

                    let (mut cpu, mut bus) = setup(a, m, carry);
                    cpu.inc(&mut bus, &AddressingResult::new(ADDR));
                    cpu.sbc(&mut bus, &AddressingResult::new(ADDR));
                    let decomposed = state(&cpu, &bus);

                    assert_eq!(
                        combo, decomposed,
                        "ISB != INC+SBC for A={:#04x} M={:#04x} C={}",
                        a, m, carry
                    );
                }
            }
        }
    }

    #[test]
    fn test_rla_matches_rol_then_and() {
        for &a in &SAMPLES {
            for &m in &SAMPLES {
                for &carry in &[false, true] {
                    let (mut cpu, mut bus) = setup(a, m, carry);
                    cpu.rla(&mut bus, &AddressingResult::new(ADDR));
                    let combo = state(&cpu, &bus);

                    let (mut cpu, mut bus) = setup(a, m, carry);
                    cpu.rol(&mut bus, &AddressingResult::new(ADDR), false);
                    cpu.and(&mut bus, &AddressingResult::new(ADDR));
                    let decomposed = state(&cpu, &bus);

                    assert_eq!(
                        combo, decomposed,
                        "RLA != ROL+AND for A={:#04x} M={:#04x} C={}",
                        a, m, carry
                    );
                }
            }
        }
    }

    #[test]
    fn test_rra_matches_ror_then_adc() {
        for &a in &SAMPLES {
            for &m in &SAMPLES {
                for &carry in &[false, true] {
                    let (mut cpu, mut bus) = setup(a, m, carry);
                    cpu.rra(&mut bus, &AddressingResult::new(ADDR));
                    let combo = state(&cpu, &bus);

                    let (mut cpu, mut bus) = setup(a, m, carry);
                    cpu.ror(&mut bus, &AddressingResult::new(ADDR), false);
                    cpu.adc(&mut bus, &AddressingResult::new(ADDR));
                    let decomposed = state(&cpu, &bus);

                    assert_eq!(
                        combo, decomposed,
                        "RRA != ROR+ADC for A={:#04x} M={:#04x} C={}",
                        a, m, carry
                    );
                }
            }
        }
    }

    #[test]
    fn test_slo_matches_asl_then_ora() {
        for &a in &SAMPLES {
            for &m in &SAMPLES {
                let (mut cpu, mut bus) = setup(a, m, false);
                cpu.slo(&mut bus, &AddressingResult::new(ADDR));
                let combo = state(&cpu, &bus);

                let (mut cpu, mut bus) = setup(a, m, false);
                cpu.asl(&mut bus, &AddressingResult::new(ADDR), false);
                cpu.ora(&mut bus, &AddressingResult::new(ADDR));
                let decomposed = state(&cpu, &bus);

                assert_eq!(combo, decomposed, "SLO != ASL+ORA for A={:#04x} M={:#04x}", a, m);
            }
        }
    }

    #[test]
    fn test_sre_matches_lsr_then_eor() {
        for &a in &SAMPLES {
            for &m in &SAMPLES {
                let (mut cpu, mut bus) = setup(a, m, false);
                cpu.sre(&mut bus, &AddressingResult::new(ADDR));
                let combo = state(&cpu, &bus);

                let (mut cpu, mut bus) = setup(a, m, false);
                cpu.lsr(&mut bus, &AddressingResult::new(ADDR), false);
                cpu.eor(&mut bus, &AddressingResult::new(ADDR));
                let decomposed = state(&cpu, &bus);

                assert_eq!(combo, decomposed, "SRE != LSR+EOR for A={:#04x} M={:#04x}", a, m);
            }
        }
    }
}
