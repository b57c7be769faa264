// Flag set and clear instructions
// Each manipulates exactly the named flag.

use crate::cpu::flags;
use crate::cpu::Cpu;

impl Cpu {
    /// CLC - Clear Carry Flag
    pub fn clc(&mut self) {
        self.clear_flag(flags::CARRY);
    }

    /// CLD - Clear Decimal Flag
    pub fn cld(&mut self) {
        self.clear_flag(flags::DECIMAL);
    }

    /// CLI - Clear Interrupt Disable
    pub fn cli(&mut self) {
        self.clear_flag(flags::INTERRUPT_DISABLE);
    }

    /// CLV - Clear Overflow Flag
    pub fn clv(&mut self) {
        self.clear_flag(flags::OVERFLOW);
    }

    /// SEC - Set Carry Flag
    pub fn sec(&mut self) {
        self.set_flag(flags::CARRY);
    }

    /// SED - Set Decimal Flag
    pub fn sed(&mut self) {
        self.set_flag(flags::DECIMAL);
    }

    /// SEI - Set Interrupt Disable
    pub fn sei(&mut self) {
        self.set_flag(flags::INTERRUPT_DISABLE);
    }
}
