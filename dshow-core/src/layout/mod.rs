//! Native structure layouts
//!
//! Every `#[repr(C)]` type here must match its SDK counterpart field for
//! field; the tests pin sizes and offsets for 32- and 64-bit targets.

mod format;
mod media_type;
mod pin_info;

pub use format::*;
pub use media_type::*;
pub use pin_info::*;

use bytemuck::{Pod, Zeroable};

/// Win32 `BOOL`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct Bool(pub i32);

impl Bool {
    pub const FALSE: Bool = Bool(0);
    pub const TRUE: Bool = Bool(1);

    /// Any non-zero value is true.
    pub const fn as_bool(self) -> bool {
        self.0 != 0
    }
}

impl From<bool> for Bool {
    fn from(value: bool) -> Self {
        Bool(value as i32)
    }
}

impl From<Bool> for bool {
    fn from(value: Bool) -> Self {
        value.as_bool()
    }
}

/// Stream time in 100-nanosecond units (`REFERENCE_TIME`).
pub type ReferenceTime = i64;

/// Reference time units per second.
pub const UNITS: ReferenceTime = 10_000_000;

/// Convert milliseconds to reference time (100ns units)
pub fn ms_to_reference_time(ms: i64) -> ReferenceTime {
    ms * 10_000
}

/// Convert reference time to milliseconds
pub fn reference_time_to_ms(rt: ReferenceTime) -> i64 {
    rt / 10_000
}
