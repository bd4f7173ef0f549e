use std::ffi::c_void;
use std::fmt;
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

use super::{unknown_vtbl, IUnknownVtbl, Interface};
use crate::guid::Guid;
use crate::hresult::{observe, HResult};

/// An owned reference to a COM object exposing `I`.
///
/// `Clone` adds a reference and `Drop` releases one. Handles are neither
/// `Send` nor `Sync`: a pointer obtained in one apartment may only be used
/// there unless it is marshaled.
pub struct ComPtr<I: Interface> {
    raw: NonNull<c_void>,
    _marker: PhantomData<(*const (), I)>,
}

impl<I: Interface> ComPtr<I> {
    /// Adopt a reference the caller already owns. `None` for null.
    ///
    /// # Safety
    /// `raw` must be null or a live object implementing `I`, and the
    /// reference is transferred to the handle.
    pub unsafe fn from_raw(raw: *mut c_void) -> Option<Self> {
        NonNull::new(raw).map(|raw| Self::from_non_null(raw))
    }

    pub(crate) unsafe fn from_non_null(raw: NonNull<c_void>) -> Self {
        Self {
            raw,
            _marker: PhantomData,
        }
    }

    /// Take a new reference to a borrowed pointer. `None` for null.
    ///
    /// # Safety
    /// `raw` must be null or a live object implementing `I`.
    pub unsafe fn from_raw_borrowed(raw: *mut c_void) -> Option<Self> {
        let handle = Self::from_raw(raw)?;
        (handle.unknown().add_ref)(raw);
        Some(handle)
    }

    pub fn as_raw(&self) -> *mut c_void {
        self.raw.as_ptr()
    }

    /// Give up the reference without releasing it.
    pub fn into_raw(self) -> *mut c_void {
        let raw = self.raw.as_ptr();
        std::mem::forget(self);
        raw
    }

    pub fn iid(&self) -> Guid {
        I::IID
    }

    pub fn vtable(&self) -> &I::Vtable {
        unsafe { &**(self.raw.as_ptr() as *const *const I::Vtable) }
    }

    fn unknown(&self) -> &IUnknownVtbl {
        unsafe { unknown_vtbl(self.raw.as_ptr()) }
    }

    /// `QueryInterface` for `J`.
    pub fn query<J: Interface>(&self) -> Result<ComPtr<J>, HResult> {
        let mut object = ptr::null_mut();
        let hr = unsafe { (self.unknown().query_interface)(self.as_raw(), &J::IID, &mut object) };
        observe(I::NAME, "QueryInterface", hr);
        if hr.is_failure() {
            return Err(hr);
        }
        // A success with no object breaks the contract; report it as such.
        unsafe { ComPtr::from_raw(object) }.ok_or(HResult::E_POINTER)
    }

    /// Adopt an out-parameter object when `hr` succeeded.
    pub(crate) unsafe fn from_out(hr: HResult, object: *mut c_void) -> Result<Self, HResult> {
        if hr.is_failure() {
            return Err(hr);
        }
        Self::from_raw(object).ok_or(HResult::E_POINTER)
    }
}

impl<I: Interface> Clone for ComPtr<I> {
    fn clone(&self) -> Self {
        unsafe { (self.unknown().add_ref)(self.as_raw()) };
        Self {
            raw: self.raw,
            _marker: PhantomData,
        }
    }
}

impl<I: Interface> Drop for ComPtr<I> {
    fn drop(&mut self) {
        unsafe { (self.unknown().release)(self.as_raw()) };
    }
}

/// Pointer identity of this interface. COM identity proper requires
/// comparing the `IUnknown` of both sides.
impl<I: Interface> PartialEq for ComPtr<I> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<I: Interface> Eq for ComPtr<I> {}

impl<I: Interface> fmt::Debug for ComPtr<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComPtr<{}>({:p})", I::NAME, self.raw)
    }
}
