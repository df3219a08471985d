use std::fmt;

/// An architectural fault. Raising one unwinds the current [`step`](crate::Cpu::step),
/// latches `EC` (and `EA` where an address is implicated), sets `STOP`, and
/// makes `step` return `false`. There is no in-CPU recovery (spec.md §7).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Fault {
    /// The opcode byte is not in the map.
    InvalidOpcode,
    /// A size-mismatched addressing mode, an out-of-range bit index, an
    /// `INT` index above 31, or an arithmetic destination outside the A
    /// class.
    InvalidArgument,
    /// Reserved for future memory-protection extensions; unused by the
    /// current model (spec.md §7).
    InvalidRead,
    /// A store targeted an address below the writable range.
    InvalidWrite { address: u32 },
    /// A fetch targeted an address outside the executable range.
    InvalidExecute { address: u32 },
    /// A bus-originated failure, surfaced by a host `Bus` impl.
    HardwareError,
}

impl Fault {
    /// The `EC` byte this fault latches, matching the original `error_code`
    /// enum's numeric encoding (`ec_ok` = 0 is never produced by a fault;
    /// it's the CPU's reset/no-error value).
    pub fn code(self) -> u8 {
        match self {
            Self::InvalidOpcode => 1,
            Self::InvalidArgument => 2,
            Self::InvalidRead => 3,
            Self::InvalidWrite { .. } => 4,
            Self::InvalidExecute { .. } => 5,
            Self::HardwareError => 6,
        }
    }

    /// The address to latch into `EA`, if this fault implicates one.
    pub fn address(self) -> Option<u32> {
        match self {
            Self::InvalidWrite { address } | Self::InvalidExecute { address } => Some(address),
            _ => None,
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOpcode => write!(f, "invalid opcode"),
            Self::InvalidArgument => write!(f, "invalid argument"),
            Self::InvalidRead => write!(f, "invalid read"),
            Self::InvalidWrite { address } => write!(f, "invalid write at {address:#010X}"),
            Self::InvalidExecute { address } => write!(f, "invalid execute at {address:#010X}"),
            Self::HardwareError => write!(f, "hardware error"),
        }
    }
}

pub type FaultResult<T> = Result<T, Fault>;
