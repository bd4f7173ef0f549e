//! `IEnumMediaTypes`

use std::ffi::c_void;
use std::ptr;

use super::{ComPtr, IUnknownVtbl, Interface};
use crate::catalog::interface_id::IID_IENUM_MEDIA_TYPES;
use crate::guid::Guid;
use crate::hresult::{observe, HResult};
use crate::layout::{AmMediaType, NativeMediaTypePtr};

pub enum IEnumMediaTypes {}

unsafe impl Interface for IEnumMediaTypes {
    const IID: Guid = IID_IENUM_MEDIA_TYPES;
    const NAME: &'static str = "IEnumMediaTypes";
    type Vtable = IEnumMediaTypesVtbl;
}

#[repr(C)]
pub struct IEnumMediaTypesVtbl {
    pub base: IUnknownVtbl,
    pub next: unsafe extern "system" fn(
        this: *mut c_void,
        count: u32,
        types: *mut *mut AmMediaType,
        fetched: *mut u32,
    ) -> HResult,
    pub skip: unsafe extern "system" fn(this: *mut c_void, count: u32) -> HResult,
    pub reset: unsafe extern "system" fn(this: *mut c_void) -> HResult,
    pub clone: unsafe extern "system" fn(this: *mut c_void, enumerator: *mut *mut c_void) -> HResult,
}

impl ComPtr<IEnumMediaTypes> {
    /// Fetch up to `count` types. `S_FALSE` means fewer were left; the
    /// returned vector holds what was fetched either way.
    pub fn next(&self, count: u32) -> (HResult, Vec<NativeMediaTypePtr>) {
        let mut slots: Vec<*mut AmMediaType> = vec![ptr::null_mut(); count as usize];
        let mut fetched = 0u32;
        let hr = unsafe { (self.vtable().next)(self.as_raw(), count, slots.as_mut_ptr(), &mut fetched) };
        let hr = observe(IEnumMediaTypes::NAME, "Next", hr);
        if hr.is_failure() {
            return (hr, Vec::new());
        }
        let fetched = (fetched as usize).min(slots.len());
        let types = slots[..fetched]
            .iter()
            .filter_map(|&mt| unsafe { NativeMediaTypePtr::from_raw(mt) })
            .collect();
        (hr, types)
    }

    pub fn skip(&self, count: u32) -> HResult {
        let hr = unsafe { (self.vtable().skip)(self.as_raw(), count) };
        observe(IEnumMediaTypes::NAME, "Skip", hr)
    }

    pub fn reset(&self) -> HResult {
        let hr = unsafe { (self.vtable().reset)(self.as_raw()) };
        observe(IEnumMediaTypes::NAME, "Reset", hr)
    }

    /// A second enumerator at the same position (`IEnumMediaTypes::Clone`).
    /// Not to be confused with [`Clone::clone`], which adds a reference.
    pub fn clone_enumerator(&self) -> Result<ComPtr<IEnumMediaTypes>, HResult> {
        let mut enumerator = ptr::null_mut();
        let hr = unsafe { (self.vtable().clone)(self.as_raw(), &mut enumerator) };
        unsafe { ComPtr::from_out(observe(IEnumMediaTypes::NAME, "Clone", hr), enumerator) }
    }

    /// Iterate the remaining types one `Next` call at a time.
    pub fn iter(&self) -> MediaTypes<'_> {
        MediaTypes {
            enumerator: self,
            done: false,
            error: None,
        }
    }
}

/// Iterator over an enumerator, see [`ComPtr::<IEnumMediaTypes>::iter`].
///
/// Stops at the first `S_FALSE` or failure. A failure such as
/// `VFW_E_ENUM_OUT_OF_SYNC` is kept in [`MediaTypes::error`]; the caller
/// decides whether to `reset` and start over.
pub struct MediaTypes<'a> {
    enumerator: &'a ComPtr<IEnumMediaTypes>,
    done: bool,
    error: Option<HResult>,
}

impl MediaTypes<'_> {
    pub fn error(&self) -> Option<HResult> {
        self.error
    }
}

impl Iterator for MediaTypes<'_> {
    type Item = NativeMediaTypePtr;

    fn next(&mut self) -> Option<NativeMediaTypePtr> {
        if self.done {
            return None;
        }
        let (hr, mut types) = self.enumerator.next(1);
        if hr.is_failure() {
            self.error = Some(hr);
        }
        if hr != HResult::S_OK || types.is_empty() {
            self.done = true;
        }
        types.pop()
    }
}
