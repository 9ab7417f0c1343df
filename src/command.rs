use crate::error::FilterError;

/// A ground command accepted by the [`FilterApp`](crate::FilterApp).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Command {
    /// Does nothing but count the command.
    Noop = 0,
    /// Resets the filter and the housekeeping counters.
    Reset = 1,
}

impl Command {
    /// Returns the command code.
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }
}

impl TryFrom<u16> for Command {
    type Error = FilterError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Noop),
            1 => Ok(Self::Reset),
            other => Err(FilterError::InvalidCommand(other)),
        }
    }
}

/// Command counters reported in housekeeping telemetry.
///
/// Both counters are eight bits wide and wrap around on overflow.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Housekeeping {
    /// The number of accepted commands.
    pub command_count: u8,
    /// The number of rejected commands.
    pub command_error_count: u8,
}

impl Housekeeping {
    /// Counts an accepted command.
    pub fn count_command(&mut self) {
        self.command_count = self.command_count.wrapping_add(1);
    }

    /// Counts a rejected command.
    pub fn count_error(&mut self) {
        self.command_error_count = self.command_error_count.wrapping_add(1);
    }

    /// Zeroes both counters.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
