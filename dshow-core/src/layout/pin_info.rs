//! `PIN_INFO` and `PIN_DIRECTION`

use std::ffi::c_void;
use std::fmt;
use std::ptr;

use crate::interface::{release_raw, ComPtr, IBaseFilter};

/// Length of `PIN_INFO::achName` in UTF-16 units, terminator included.
pub const MAX_PIN_NAME: usize = 128;

/// `PIN_DIRECTION`
///
/// A newtype rather than an enum: the value comes from native code and any
/// `i32` must be representable.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PinDirection(pub i32);

impl PinDirection {
    pub const INPUT: PinDirection = PinDirection(0);
    pub const OUTPUT: PinDirection = PinDirection(1);

    pub fn is_input(self) -> bool {
        self == Self::INPUT
    }

    pub fn is_output(self) -> bool {
        self == Self::OUTPUT
    }
}

impl fmt::Debug for PinDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::INPUT => f.write_str("PINDIR_INPUT"),
            Self::OUTPUT => f.write_str("PINDIR_OUTPUT"),
            PinDirection(other) => write!(f, "PinDirection({})", other),
        }
    }
}

/// `PIN_INFO`
#[repr(C)]
#[derive(Clone, Copy)]
pub struct PinInfo {
    /// Owning filter, AddRef'd by the callee.
    pub filter: *mut c_void,
    pub dir: PinDirection,
    pub name: [u16; MAX_PIN_NAME],
}

impl Default for PinInfo {
    fn default() -> Self {
        Self {
            filter: ptr::null_mut(),
            dir: PinDirection::INPUT,
            name: [0; MAX_PIN_NAME],
        }
    }
}

impl PinInfo {
    /// The name up to its terminator. An unterminated buffer is read whole.
    pub fn name(&self) -> String {
        let len = self.name.iter().position(|&c| c == 0).unwrap_or(MAX_PIN_NAME);
        String::from_utf16_lossy(&self.name[..len])
    }

    /// Store `name`, truncated to leave room for the terminator.
    pub fn set_name(&mut self, name: &str) {
        self.name = [0; MAX_PIN_NAME];
        for (slot, unit) in self.name[..MAX_PIN_NAME - 1].iter_mut().zip(name.encode_utf16()) {
            *slot = unit;
        }
    }
}

impl fmt::Debug for PinInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PinInfo")
            .field("filter", &self.filter)
            .field("dir", &self.dir)
            .field("name", &self.name())
            .finish()
    }
}

/// A `PIN_INFO` returned by `IPin::QueryPinInfo`. Releases the filter
/// reference on drop.
pub struct OwnedPinInfo {
    raw: PinInfo,
}

impl OwnedPinInfo {
    /// # Safety
    /// `raw.filter` must be null or a reference the caller owns.
    pub unsafe fn from_raw(raw: PinInfo) -> Self {
        Self { raw }
    }

    pub fn direction(&self) -> PinDirection {
        self.raw.dir
    }

    pub fn name(&self) -> String {
        self.raw.name()
    }

    pub fn raw(&self) -> &PinInfo {
        &self.raw
    }

    /// A new reference to the owning filter.
    pub fn filter(&self) -> Option<ComPtr<IBaseFilter>> {
        unsafe { ComPtr::from_raw_borrowed(self.raw.filter) }
    }

    /// Move the filter reference out.
    pub fn into_filter(mut self) -> Option<ComPtr<IBaseFilter>> {
        let filter = std::mem::replace(&mut self.raw.filter, ptr::null_mut());
        unsafe { ComPtr::from_raw(filter) }
    }
}

impl fmt::Debug for OwnedPinInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.raw.fmt(f)
    }
}

impl Drop for OwnedPinInfo {
    fn drop(&mut self) {
        if !self.raw.filter.is_null() {
            unsafe { release_raw(self.raw.filter) };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::testing::MockObject;
    use crate::interface::Interface;
    use std::mem::{offset_of, size_of};

    #[test]
    fn test_pin_info_layout() {
        let ptr = size_of::<*mut c_void>();
        assert_eq!(offset_of!(PinInfo, dir), ptr);
        assert_eq!(offset_of!(PinInfo, name), ptr + 4);
        #[cfg(target_pointer_width = "64")]
        assert_eq!(size_of::<PinInfo>(), 272);
        #[cfg(target_pointer_width = "32")]
        assert_eq!(size_of::<PinInfo>(), 264);
        assert_eq!(size_of::<PinDirection>(), 4);
    }

    #[test]
    fn test_name_truncates_and_terminates() {
        let mut info = PinInfo::default();
        info.set_name("Capture");
        assert_eq!(info.name(), "Capture");

        info.set_name(&"x".repeat(300));
        assert_eq!(info.name().len(), MAX_PIN_NAME - 1);
        assert_eq!(info.name[MAX_PIN_NAME - 1], 0);
    }

    #[test]
    fn test_unterminated_name_is_read_whole() {
        let info = PinInfo {
            name: [u16::from(b'a'); MAX_PIN_NAME],
            ..Default::default()
        };
        assert_eq!(info.name().len(), MAX_PIN_NAME);
    }

    #[test]
    fn test_unknown_direction_is_kept() {
        let dir = PinDirection(7);
        assert!(!dir.is_input() && !dir.is_output());
        assert_eq!(format!("{:?}", dir), "PinDirection(7)");
        assert_eq!(format!("{:?}", PinDirection::OUTPUT), "PINDIR_OUTPUT");
    }

    #[test]
    fn test_owned_info_releases_filter() {
        let (filter, tracker) = MockObject::create();
        let info = PinInfo {
            filter: filter.into_raw(),
            dir: PinDirection::OUTPUT,
            ..Default::default()
        };
        let owned = unsafe { OwnedPinInfo::from_raw(info) };

        let handle = owned.filter().unwrap();
        assert_eq!(handle.iid(), IBaseFilter::IID);
        assert_eq!(tracker.refs(), 2);
        drop(handle);

        drop(owned);
        assert!(tracker.destroyed());
    }

    #[test]
    fn test_into_filter_moves_reference() {
        let (filter, tracker) = MockObject::create();
        let info = PinInfo {
            filter: filter.into_raw(),
            ..Default::default()
        };
        let filter = unsafe { OwnedPinInfo::from_raw(info) }.into_filter().unwrap();
        assert_eq!(tracker.refs(), 1);
        drop(filter);
        assert!(tracker.destroyed());
    }
}
