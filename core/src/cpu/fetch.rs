//! Fetch routines: resolve `sa`/`da`/`sd` from the instruction header and
//! any trailing operand bytes, ahead of the matching `execute_*` routine.

use tm32_opcodes::ViewSize;

use super::Cpu;
use crate::{Fault, FaultResult};

const HIGH_PAGE_16: u32 = 0xFFFF_0000;
const HIGH_PAGE_8: u32 = 0xFFFF_FF00;

impl<'bus> Cpu<'bus> {
    /// Read `addr`, sized and cycle-charged to the destination's view width.
    fn load_sized_to_dest(&mut self, addr: u32) -> u32 {
        match self.dest_selector().view {
            ViewSize::Full => {
                let value = self.bus.read_dword(addr);
                self.bus.cycle(4);
                value
            }
            ViewSize::LowWord => {
                let value = self.bus.read_word(addr) as u32;
                self.bus.cycle(2);
                value
            }
            ViewSize::HighByte | ViewSize::LowByte => {
                let value = self.bus.read(addr) as u32;
                self.bus.cycle(1);
                value
            }
        }
    }

    pub(super) fn fetch_reg_imm(&mut self) -> FaultResult<()> {
        match self.dest_selector().view {
            ViewSize::Full => {
                self.sd = self.bus.read_dword(self.pc);
                self.advance(4);
            }
            ViewSize::LowWord => {
                self.sd = self.bus.read_word(self.pc) as u32;
                self.advance(2);
            }
            ViewSize::HighByte | ViewSize::LowByte => {
                self.sd = self.bus.read(self.pc) as u32;
                self.advance(1);
            }
        }
        Ok(())
    }

    pub(super) fn fetch_reg_addr32(&mut self) -> FaultResult<()> {
        self.sa = self.bus.read_dword(self.pc);
        self.advance(4);
        self.sd = self.load_sized_to_dest(self.sa);
        Ok(())
    }

    pub(super) fn fetch_reg_regptr32(&mut self) -> FaultResult<()> {
        if self.src_selector().view != ViewSize::Full {
            return Err(Fault::InvalidArgument);
        }
        self.sa = self.read_register(self.src_selector());
        self.sd = self.load_sized_to_dest(self.sa);
        Ok(())
    }

    pub(super) fn fetch_reg_addr16(&mut self) -> FaultResult<()> {
        self.sa = HIGH_PAGE_16.wrapping_add(self.bus.read_word(self.pc) as u32);
        self.advance(2);
        self.sd = self.load_sized_to_dest(self.sa);
        Ok(())
    }

    pub(super) fn fetch_reg_regptr16(&mut self) -> FaultResult<()> {
        if self.src_selector().view != ViewSize::LowWord {
            return Err(Fault::InvalidArgument);
        }
        self.sa = HIGH_PAGE_16.wrapping_add(self.read_register(self.src_selector()));
        self.sd = self.load_sized_to_dest(self.sa);
        Ok(())
    }

    pub(super) fn fetch_reg8_addr8(&mut self) -> FaultResult<()> {
        if matches!(
            self.dest_selector().view,
            ViewSize::Full | ViewSize::LowWord
        ) {
            return Err(Fault::InvalidArgument);
        }
        self.sa = HIGH_PAGE_8.wrapping_add(self.bus.read(self.pc) as u32);
        self.advance(1);
        self.sd = self.load_sized_to_dest(self.sa);
        Ok(())
    }

    pub(super) fn fetch_reg8_regptr8(&mut self) -> FaultResult<()> {
        let dest_is_byte = !matches!(
            self.dest_selector().view,
            ViewSize::Full | ViewSize::LowWord
        );
        let src_is_byte = !matches!(self.src_selector().view, ViewSize::Full | ViewSize::LowWord);
        if !dest_is_byte || !src_is_byte {
            return Err(Fault::InvalidArgument);
        }
        self.sa = HIGH_PAGE_8.wrapping_add(self.read_register(self.src_selector()));
        self.sd = self.load_sized_to_dest(self.sa);
        Ok(())
    }

    pub(super) fn fetch_addr32_reg(&mut self) -> FaultResult<()> {
        self.da = self.bus.read_dword(self.pc);
        self.check_writable(self.da)?;
        self.advance(4);
        self.sd = self.read_register(self.src_selector());
        Ok(())
    }

    pub(super) fn fetch_regptr32_reg(&mut self) -> FaultResult<()> {
        if self.dest_selector().view != ViewSize::Full {
            return Err(Fault::InvalidArgument);
        }
        self.da = self.read_register(self.dest_selector());
        self.check_writable(self.da)?;
        self.sd = self.read_register(self.src_selector());
        Ok(())
    }

    pub(super) fn fetch_addr16_reg(&mut self) -> FaultResult<()> {
        self.da = HIGH_PAGE_16.wrapping_add(self.bus.read_word(self.pc) as u32);
        self.advance(2);
        self.sd = self.read_register(self.src_selector());
        Ok(())
    }

    pub(super) fn fetch_regptr16_reg(&mut self) -> FaultResult<()> {
        if self.dest_selector().view != ViewSize::LowWord {
            return Err(Fault::InvalidArgument);
        }
        self.da = HIGH_PAGE_16.wrapping_add(self.read_register(self.dest_selector()));
        self.sd = self.read_register(self.src_selector());
        Ok(())
    }

    pub(super) fn fetch_addr8_reg8(&mut self) -> FaultResult<()> {
        if matches!(self.src_selector().view, ViewSize::Full | ViewSize::LowWord) {
            return Err(Fault::InvalidArgument);
        }
        self.da = HIGH_PAGE_8.wrapping_add(self.bus.read(self.pc) as u32);
        self.advance(1);
        self.sd = self.read_register(self.src_selector());
        Ok(())
    }

    pub(super) fn fetch_regptr8_reg8(&mut self) -> FaultResult<()> {
        let dest_is_byte = !matches!(
            self.dest_selector().view,
            ViewSize::Full | ViewSize::LowWord
        );
        let src_is_byte = !matches!(self.src_selector().view, ViewSize::Full | ViewSize::LowWord);
        if !dest_is_byte || !src_is_byte {
            return Err(Fault::InvalidArgument);
        }
        self.da = HIGH_PAGE_8.wrapping_add(self.read_register(self.dest_selector()));
        self.sd = self.read_register(self.src_selector());
        Ok(())
    }

    pub(super) fn fetch_reg_reg(&mut self) -> FaultResult<()> {
        self.sd = self.read_register(self.src_selector());
        Ok(())
    }

    pub(super) fn fetch_null_imm32(&mut self) -> FaultResult<()> {
        self.sd = self.bus.read_dword(self.pc);
        self.advance(4);
        Ok(())
    }

    pub(super) fn fetch_null_reg32(&mut self) -> FaultResult<()> {
        if self.src_selector().view != ViewSize::Full {
            return Err(Fault::InvalidArgument);
        }
        self.sd = self.read_register(self.src_selector());
        Ok(())
    }

    pub(super) fn fetch_null_simm16(&mut self) -> FaultResult<()> {
        self.sd = self.bus.read_word(self.pc) as u32;
        self.advance(2);
        Ok(())
    }

    pub(super) fn fetch_reg_null(&mut self) -> FaultResult<()> {
        self.sd = self.read_register(self.dest_selector());
        Ok(())
    }

    pub(super) fn fetch_regptr32_null(&mut self) -> FaultResult<()> {
        if self.src_selector().view != ViewSize::Full {
            return Err(Fault::InvalidArgument);
        }
        self.da = self.read_register(self.src_selector());
        self.check_writable(self.da)?;
        self.sd = self.bus.read(self.da) as u32;
        self.bus.cycle(1);
        Ok(())
    }

    pub(super) fn fetch_imm8_reg(&mut self) -> FaultResult<()> {
        self.sd = self.read_register(self.dest_selector());
        Ok(())
    }

    pub(super) fn fetch_imm8_regptr32(&mut self) -> FaultResult<()> {
        if self.dest_selector().view != ViewSize::Full {
            return Err(Fault::InvalidArgument);
        }
        self.da = self.read_register(self.dest_selector());
        self.check_writable(self.da)?;
        self.sd = self.bus.read(self.da) as u32;
        self.bus.cycle(1);
        Ok(())
    }
}
