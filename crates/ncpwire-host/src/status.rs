use std::fmt;

/// The 16-bit result code leading every response.
///
/// Zero is success. Nonzero values are controller-defined and carried
/// through opaquely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Status(pub u16);

impl Status {
    pub const SUCCESS: Status = Status(0);

    pub fn is_success(self) -> bool {
        self.0 == 0
    }

    pub fn code(self) -> u16 {
        self.0
    }
}

impl From<u16> for Status {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_and_display() {
        assert!(Status::SUCCESS.is_success());
        assert!(!Status(0x0181).is_success());
        assert_eq!(Status(0x0181).to_string(), "0x0181");
    }
}
