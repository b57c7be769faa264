// Shift and rotate instructions
//
// The four primitives are single routines shared with the undocumented
// SLO, SRE, RLA, and RRA combos. Carry takes the bit shifted out; rotates
// feed the old carry into the vacated side.

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::Cpu;

impl Cpu {
    /// Shift left primitive: carry from bit 7, Zero/Negative from result
    pub(crate) fn shift_left(&mut self, value: u8) -> u8 {
        let carry = value & 0x80 != 0;
        let result = value << 1;

        self.set_carry(carry);
        self.update_zero_and_negative_flags(result);
        result
    }

    /// Shift right primitive: carry from bit 0, Zero/Negative from result
    pub(crate) fn shift_right(&mut self, value: u8) -> u8 {
        let carry = value & 0x01 != 0;
        let result = value >> 1;

        self.set_carry(carry);
        self.update_zero_and_negative_flags(result);
        result
    }

    /// Rotate left primitive: old carry enters bit 0, bit 7 becomes carry
    pub(crate) fn rotate_left(&mut self, value: u8) -> u8 {
        let carry = value & 0x80 != 0;
        let mut result = value << 1;
        if self.get_carry() {
            result |= 0x01;
        }

        self.set_carry(carry);
        self.update_zero_and_negative_flags(result);
        result
    }

    /// Rotate right primitive: old carry enters bit 7, bit 0 becomes carry
    pub(crate) fn rotate_right(&mut self, value: u8) -> u8 {
        let carry = value & 0x01 != 0;
        let mut result = value >> 1;
        if self.get_carry() {
            result |= 0x80;
        }

        self.set_carry(carry);
        self.update_zero_and_negative_flags(result);
        result
    }

    /// Apply a shift/rotate primitive to the accumulator or to memory
    fn read_modify_write<F>(
        &mut self,
        bus: &mut Bus,
        addr_result: &AddressingResult,
        accumulator: bool,
        operation: F,
    ) where
        F: Fn(&mut Self, u8) -> u8,
    {
        if accumulator {
            let value = self.a;
            self.a = operation(self, value);
        } else {
            let value = bus.read(addr_result.address);
            let result = operation(self, value);
            bus.write(addr_result.address, result);
        }
    }

    /// ASL - Arithmetic Shift Left
    ///
    /// Flags affected: C, Z, N
    pub fn asl(&mut self, bus: &mut Bus, addr_result: &AddressingResult, accumulator: bool) {
        self.read_modify_write(bus, addr_result, accumulator, Self::shift_left);
    }

    /// LSR - Logical Shift Right
    ///
    /// Flags affected: C, Z, N
    pub fn lsr(&mut self, bus: &mut Bus, addr_result: &AddressingResult, accumulator: bool) {
        self.read_modify_write(bus, addr_result, accumulator, Self::shift_right);
    }

    /// ROL - Rotate Left through carry
    ///
    /// Flags affected: C, Z, N
    pub fn rol(&mut self, bus: &mut Bus, addr_result: &AddressingResult, accumulator: bool) {
        self.read_modify_write(bus, addr_result, accumulator, Self::rotate_left);
    }

    /// ROR - Rotate Right through carry
    ///
    /// Flags affected: C, Z, N
    pub fn ror(&mut self, bus: &mut Bus, addr_result: &AddressingResult, accumulator: bool) {
        self.read_modify_write(bus, addr_result, accumulator, Self::rotate_right);
    }
}
