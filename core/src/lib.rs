mod bus;
mod cpu;
mod fault;
mod registers;

pub use bus::Bus;
pub use cpu::Cpu;
pub use fault::{Fault, FaultResult};
pub use registers::{Flags, GeneralRegister, RegisterFile};
