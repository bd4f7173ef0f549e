//! Filter merit
//!
//! Merit decides the order in which the Filter Graph Manager tries filters
//! during intelligent connect. Higher values are tried first; anything at or
//! below `DO_NOT_USE` is never picked automatically.
//! <https://docs.microsoft.com/en-us/windows/desktop/directshow/merit>

use std::fmt;

use serde::{Deserialize, Serialize};

#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Merit(pub u32);

impl Merit {
    pub const NONE: Merit = Merit(0x0);
    pub const PREFERRED: Merit = Merit(0x80_0000);
    pub const NORMAL: Merit = Merit(0x60_0000);
    pub const UNLIKELY: Merit = Merit(0x40_0000);
    pub const DO_NOT_USE: Merit = Merit(0x20_0000);
    pub const SW_COMPRESSOR: Merit = Merit(0x10_0000);
    pub const HW_COMPRESSOR: Merit = Merit(0x10_0050);

    /// A level just above or below a named one, e.g. `Merit::NORMAL.offset(1)`.
    pub const fn offset(self, delta: i32) -> Option<Merit> {
        match self.0.checked_add_signed(delta) {
            Some(value) => Some(Merit(value)),
            None => None,
        }
    }

    pub const fn saturating_offset(self, delta: i32) -> Merit {
        Merit(self.0.saturating_add_signed(delta))
    }

    /// Whether intelligent connect will consider a filter with this merit.
    pub const fn is_auto_selectable(self) -> bool {
        self.0 > Self::DO_NOT_USE.0
    }

    /// Name of the exact level, if it is one of the named ones.
    pub fn name(self) -> Option<&'static str> {
        MERITS.iter().find(|(_, m)| *m == self).map(|(name, _)| *name)
    }
}

impl fmt::Debug for Merit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "Merit(0x{:06X})", self.0),
        }
    }
}

impl fmt::Display for Merit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:06X}", self.0)
    }
}

/// Named merit levels, highest first.
pub const MERITS: &[(&str, Merit)] = &[
    ("MERIT_PREFERRED", Merit::PREFERRED),
    ("MERIT_NORMAL", Merit::NORMAL),
    ("MERIT_UNLIKELY", Merit::UNLIKELY),
    ("MERIT_DO_NOT_USE", Merit::DO_NOT_USE),
    ("MERIT_HW_COMPRESSOR", Merit::HW_COMPRESSOR),
    ("MERIT_SW_COMPRESSOR", Merit::SW_COMPRESSOR),
    ("MERIT_NONE", Merit::NONE),
];

/// Look up a merit level by SDK name (`MERIT_NORMAL`, ...).
pub fn lookup(name: &str) -> Option<Merit> {
    MERITS.iter().find(|(n, _)| *n == name).map(|(_, m)| *m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered() {
        let values: Vec<Merit> = MERITS.iter().map(|(_, m)| *m).collect();
        let mut sorted = values.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(values, sorted);
    }

    #[test]
    fn test_lookup_and_name() {
        assert_eq!(lookup("MERIT_NORMAL"), Some(Merit(0x600000)));
        assert_eq!(lookup("MERIT_HW_COMPRESSOR"), Some(Merit(0x100050)));
        assert_eq!(lookup("MERIT_BEST"), None);
        assert_eq!(Merit::PREFERRED.name(), Some("MERIT_PREFERRED"));
        assert_eq!(Merit(0x600001).name(), None);
    }

    #[test]
    fn test_offsets() {
        assert_eq!(Merit::NORMAL.offset(1), Some(Merit(0x600001)));
        assert_eq!(Merit::NORMAL.offset(-1), Some(Merit(0x5fffff)));
        assert_eq!(Merit::NONE.offset(-1), None);
        assert_eq!(Merit::NONE.saturating_offset(-5), Merit::NONE);
    }

    #[test]
    fn test_auto_selection_threshold() {
        assert!(Merit::UNLIKELY.is_auto_selectable());
        assert!(!Merit::DO_NOT_USE.is_auto_selectable());
        assert!(!Merit::HW_COMPRESSOR.is_auto_selectable());
        assert!(Merit::DO_NOT_USE.saturating_offset(1).is_auto_selectable());
    }

    #[test]
    fn test_debug_uses_names() {
        assert_eq!(format!("{:?}", Merit::NORMAL), "MERIT_NORMAL");
        assert_eq!(format!("{:?}", Merit(0x600001)), "Merit(0x600001)");
        assert_eq!(Merit::NORMAL.to_string(), "0x600000");
    }
}
