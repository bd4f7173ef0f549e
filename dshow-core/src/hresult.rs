//! COM status codes
//!
//! Every forwarded call returns the callee's `HRESULT` unchanged. Interpreting
//! it is up to the caller; the names here only help with diagnostics.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A native `HRESULT`. Negative values are failures.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct HResult(pub i32);

const fn code(value: u32) -> HResult {
    HResult(value as i32)
}

impl HResult {
    pub const S_OK: HResult = code(0x0000_0000);
    pub const S_FALSE: HResult = code(0x0000_0001);

    pub const E_NOTIMPL: HResult = code(0x8000_4001);
    pub const E_NOINTERFACE: HResult = code(0x8000_4002);
    pub const E_POINTER: HResult = code(0x8000_4003);
    pub const E_ABORT: HResult = code(0x8000_4004);
    pub const E_FAIL: HResult = code(0x8000_4005);
    pub const E_UNEXPECTED: HResult = code(0x8000_FFFF);
    pub const E_OUTOFMEMORY: HResult = code(0x8007_000E);
    pub const E_INVALIDARG: HResult = code(0x8007_0057);

    // vfwmsgs.h
    pub const VFW_E_INVALIDMEDIATYPE: HResult = code(0x8004_0200);
    pub const VFW_E_INVALIDSUBTYPE: HResult = code(0x8004_0201);
    pub const VFW_E_NEED_OWNER: HResult = code(0x8004_0202);
    pub const VFW_E_ENUM_OUT_OF_SYNC: HResult = code(0x8004_0203);
    pub const VFW_E_ALREADY_CONNECTED: HResult = code(0x8004_0204);
    pub const VFW_E_FILTER_ACTIVE: HResult = code(0x8004_0205);
    pub const VFW_E_NO_TYPES: HResult = code(0x8004_0206);
    pub const VFW_E_NO_ACCEPTABLE_TYPES: HResult = code(0x8004_0207);
    pub const VFW_E_INVALID_DIRECTION: HResult = code(0x8004_0208);
    pub const VFW_E_NOT_CONNECTED: HResult = code(0x8004_0209);
    pub const VFW_E_NO_ALLOCATOR: HResult = code(0x8004_020A);
    pub const VFW_E_RUNTIME_ERROR: HResult = code(0x8004_020B);
    pub const VFW_E_CANNOT_CONNECT: HResult = code(0x8004_0217);
    pub const VFW_E_CANNOT_RENDER: HResult = code(0x8004_0218);
    pub const VFW_E_NOT_STOPPED: HResult = code(0x8004_0224);
    pub const VFW_E_NOT_PAUSED: HResult = code(0x8004_0225);
    pub const VFW_E_NOT_RUNNING: HResult = code(0x8004_0226);
    pub const VFW_E_WRONG_STATE: HResult = code(0x8004_0227);
    pub const VFW_E_TYPE_NOT_ACCEPTED: HResult = code(0x8004_022A);
    pub const VFW_E_NOT_IN_GRAPH: HResult = code(0x8004_025F);
    pub const VFW_E_NO_TRANSPORT: HResult = code(0x8004_0266);

    pub const fn is_success(self) -> bool {
        self.0 >= 0
    }

    pub const fn is_failure(self) -> bool {
        self.0 < 0
    }

    /// The raw value as an unsigned 32-bit code, as the SDK headers spell it.
    pub const fn as_u32(self) -> u32 {
        self.0 as u32
    }

    /// Symbolic name of a known code.
    pub fn name(self) -> Option<&'static str> {
        KNOWN_CODES
            .iter()
            .find(|(hr, _)| *hr == self)
            .map(|(_, name)| *name)
    }
}

const KNOWN_CODES: &[(HResult, &str)] = &[
    (HResult::S_OK, "S_OK"),
    (HResult::S_FALSE, "S_FALSE"),
    (HResult::E_NOTIMPL, "E_NOTIMPL"),
    (HResult::E_NOINTERFACE, "E_NOINTERFACE"),
    (HResult::E_POINTER, "E_POINTER"),
    (HResult::E_ABORT, "E_ABORT"),
    (HResult::E_FAIL, "E_FAIL"),
    (HResult::E_UNEXPECTED, "E_UNEXPECTED"),
    (HResult::E_OUTOFMEMORY, "E_OUTOFMEMORY"),
    (HResult::E_INVALIDARG, "E_INVALIDARG"),
    (HResult::VFW_E_INVALIDMEDIATYPE, "VFW_E_INVALIDMEDIATYPE"),
    (HResult::VFW_E_INVALIDSUBTYPE, "VFW_E_INVALIDSUBTYPE"),
    (HResult::VFW_E_NEED_OWNER, "VFW_E_NEED_OWNER"),
    (HResult::VFW_E_ENUM_OUT_OF_SYNC, "VFW_E_ENUM_OUT_OF_SYNC"),
    (HResult::VFW_E_ALREADY_CONNECTED, "VFW_E_ALREADY_CONNECTED"),
    (HResult::VFW_E_FILTER_ACTIVE, "VFW_E_FILTER_ACTIVE"),
    (HResult::VFW_E_NO_TYPES, "VFW_E_NO_TYPES"),
    (HResult::VFW_E_NO_ACCEPTABLE_TYPES, "VFW_E_NO_ACCEPTABLE_TYPES"),
    (HResult::VFW_E_INVALID_DIRECTION, "VFW_E_INVALID_DIRECTION"),
    (HResult::VFW_E_NOT_CONNECTED, "VFW_E_NOT_CONNECTED"),
    (HResult::VFW_E_NO_ALLOCATOR, "VFW_E_NO_ALLOCATOR"),
    (HResult::VFW_E_RUNTIME_ERROR, "VFW_E_RUNTIME_ERROR"),
    (HResult::VFW_E_CANNOT_CONNECT, "VFW_E_CANNOT_CONNECT"),
    (HResult::VFW_E_CANNOT_RENDER, "VFW_E_CANNOT_RENDER"),
    (HResult::VFW_E_NOT_STOPPED, "VFW_E_NOT_STOPPED"),
    (HResult::VFW_E_NOT_PAUSED, "VFW_E_NOT_PAUSED"),
    (HResult::VFW_E_NOT_RUNNING, "VFW_E_NOT_RUNNING"),
    (HResult::VFW_E_WRONG_STATE, "VFW_E_WRONG_STATE"),
    (HResult::VFW_E_TYPE_NOT_ACCEPTED, "VFW_E_TYPE_NOT_ACCEPTED"),
    (HResult::VFW_E_NOT_IN_GRAPH, "VFW_E_NOT_IN_GRAPH"),
    (HResult::VFW_E_NO_TRANSPORT, "VFW_E_NO_TRANSPORT"),
];

impl fmt::Display for HResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} (0x{:08X})", name, self.as_u32()),
            None => write!(f, "0x{:08X}", self.as_u32()),
        }
    }
}

impl fmt::Debug for HResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HResult({})", self)
    }
}

/// Log a failed forwarded call when `log_native_failures` is on.
pub(crate) fn observe(interface: &'static str, method: &'static str, hr: HResult) -> HResult {
    observe_with(interface, method, hr, crate::config::config().log_native_failures)
}

fn observe_with(interface: &'static str, method: &'static str, hr: HResult, log_failures: bool) -> HResult {
    tracing::trace!(interface, method, %hr, "native call returned");
    if hr.is_failure() && log_failures {
        tracing::debug!(interface, method, %hr, "native call failed");
    }
    hr
}
