// Load and store instructions
// Loads set Zero and Negative from the value moved; stores touch no flags.

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::Cpu;

impl Cpu {
    /// LDA - Load Accumulator
    ///
    /// Flags affected: Z, N
    pub fn lda(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.a = value;
        self.update_zero_and_negative_flags(value);
    }

    /// LDX - Load X Register
    ///
    /// Flags affected: Z, N
    pub fn ldx(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.x = value;
        self.update_zero_and_negative_flags(value);
    }

    /// LDY - Load Y Register
    ///
    /// Flags affected: Z, N
    pub fn ldy(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.y = value;
        self.update_zero_and_negative_flags(value);
    }

    /// STA - Store Accumulator
    ///
    /// Flags affected: none
    pub fn sta(&self, bus: &mut Bus, addr_result: &AddressingResult) {
        bus.write(addr_result.address, self.a);
    }

    /// STX - Store X Register
    ///
    /// Flags affected: none
    pub fn stx(&self, bus: &mut Bus, addr_result: &AddressingResult) {
        bus.write(addr_result.address, self.x);
    }

    /// STY - Store Y Register
    ///
    /// Flags affected: none
    pub fn sty(&self, bus: &mut Bus, addr_result: &AddressingResult) {
        bus.write(addr_result.address, self.y);
    }
}

#[cfg(test)]
mod tests {
    use crate::bus::Bus;
    use crate::cpu::addressing::AddressingResult;
    use crate::cpu::Cpu;

    #[test]
    fn test_lda_immediate() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();

        cpu.lda(&mut bus, &AddressingResult::immediate(0x42));
        assert_eq!(cpu.a, 0x42);
        assert!(!cpu.get_zero());
        assert!(!cpu.get_negative());
    }

    #[test]
    fn test_lda_sets_zero_flag() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        cpu.a = 0x55;

        cpu.lda(&mut bus, &AddressingResult::immediate(0x00));
        assert_eq!(cpu.a, 0x00);
        assert!(cpu.get_zero());
    }

    #[test]
    fn test_lda_sets_negative_flag() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();

        cpu.lda(&mut bus, &AddressingResult::immediate(0x80));
        assert!(cpu.get_negative());
    }

    #[test]
    fn test_lda_from_memory() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        bus.write(0x0042, 0x99);

        cpu.lda(&mut bus, &AddressingResult::new(0x0042));
        assert_eq!(cpu.a, 0x99);
        assert!(cpu.get_negative());
    }

    #[test]
    fn test_ldx_and_ldy() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();

        cpu.ldx(&mut bus, &AddressingResult::immediate(0x10));
        assert_eq!(cpu.x, 0x10);

        cpu.ldy(&mut bus, &AddressingResult::immediate(0x00));
        assert_eq!(cpu.y, 0x00);
        assert!(cpu.get_zero());
    }

    #[test]
    fn test_sta_writes_without_flags() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        cpu.a = 0x00; // a zero store must not set the Zero flag
        let status_before = cpu.status;

        cpu.sta(&mut bus, &AddressingResult::new(0x0123));
        assert_eq!(bus.read(0x0123), 0x00);
        assert_eq!(cpu.status, status_before, "stores leave flags untouched");
    }

    #[test]
    fn test_stx_and_sty() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        cpu.x = 0x11;
        cpu.y = 0x22;

        cpu.stx(&mut bus, &AddressingResult::new(0x0010));
        cpu.sty(&mut bus, &AddressingResult::new(0x0011));

        assert_eq!(bus.read(0x0010), 0x11);
        assert_eq!(bus.read(0x0011), 0x22);
    }
}
