//! COM interface contracts
//!
//! Each interface is an uninhabited marker type implementing [`Interface`],
//! paired with a `#[repr(C)]` vtable whose slot order matches the SDK
//! header. Handles are [`ComPtr<I>`]; forwarding methods live in `impl
//! ComPtr<IFoo>` blocks next to the vtable.
//!
//! Status codes come back untouched. Methods that only report status return
//! [`HResult`]; methods with an out parameter return `Result<T, HResult>`
//! whose error is the callee's code as is.

mod callback;
mod com_ptr;
mod enum_media_types;
mod pin;
#[cfg(test)]
pub(crate) mod testing;

pub use callback::{callback_object, FilterGraphCallback, IAMFilterGraphCallback, IAMFilterGraphCallbackVtbl};
pub use com_ptr::ComPtr;
pub use enum_media_types::{IEnumMediaTypes, IEnumMediaTypesVtbl, MediaTypes};
pub use pin::{IPin, IPinVtbl, InternalConnections};

use std::ffi::c_void;

use crate::catalog::interface_id::{IID_IBASE_FILTER, IID_IUNKNOWN};
use crate::guid::Guid;
use crate::hresult::HResult;

/// A COM interface.
///
/// # Safety
/// `Vtable` must be the exact `#[repr(C)]` layout of the interface's vtable
/// starting with [`IUnknownVtbl`], and `IID` its interface identifier.
pub unsafe trait Interface: 'static {
    const IID: Guid;
    const NAME: &'static str;
    type Vtable: 'static;
}

/// First three slots of every COM vtable.
#[repr(C)]
pub struct IUnknownVtbl {
    pub query_interface:
        unsafe extern "system" fn(this: *mut c_void, riid: *const Guid, object: *mut *mut c_void) -> HResult,
    pub add_ref: unsafe extern "system" fn(this: *mut c_void) -> u32,
    pub release: unsafe extern "system" fn(this: *mut c_void) -> u32,
}

pub enum IUnknown {}

unsafe impl Interface for IUnknown {
    const IID: Guid = IID_IUNKNOWN;
    const NAME: &'static str = "IUnknown";
    type Vtable = IUnknownVtbl;
}

/// Held only as an opaque reference, e.g. the owner in `PIN_INFO`.
pub enum IBaseFilter {}

unsafe impl Interface for IBaseFilter {
    const IID: Guid = IID_IBASE_FILTER;
    const NAME: &'static str = "IBaseFilter";
    // Only the IUnknown slots are ever called.
    type Vtable = IUnknownVtbl;
}

/// # Safety
/// `this` must be a live COM object.
pub(crate) unsafe fn unknown_vtbl<'a>(this: *mut c_void) -> &'a IUnknownVtbl {
    &**(this as *const *const IUnknownVtbl)
}

/// Drop one reference to a raw COM object.
///
/// # Safety
/// `this` must be a live COM object and the caller must own the reference.
pub unsafe fn release_raw(this: *mut c_void) -> u32 {
    (unknown_vtbl(this).release)(this)
}
