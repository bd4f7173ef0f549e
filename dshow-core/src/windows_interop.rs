//! Windows runtime glue
//!
//! Conversions to and from the `windows` crate's types, COM apartment
//! setup, and object activation.

use std::marker::PhantomData;

use windows::core::{Interface as _, GUID, HRESULT};
use windows::Win32::System::Com::{
    CoCreateInstance, CoInitializeEx, CoUninitialize, CLSCTX_INPROC_SERVER, COINIT_APARTMENTTHREADED,
    COINIT_DISABLE_OLE1DDE,
};

use crate::guid::Guid;
use crate::hresult::HResult;
use crate::interface::{ComPtr, IUnknown, Interface};

impl From<Guid> for GUID {
    fn from(guid: Guid) -> Self {
        GUID::from_values(guid.data1, guid.data2, guid.data3, guid.data4)
    }
}

impl From<GUID> for Guid {
    fn from(guid: GUID) -> Self {
        Guid::from_fields(guid.data1, guid.data2, guid.data3, guid.data4)
    }
}

impl From<HRESULT> for HResult {
    fn from(hr: HRESULT) -> Self {
        HResult(hr.0)
    }
}

impl From<HResult> for HRESULT {
    fn from(hr: HResult) -> Self {
        HRESULT(hr.0)
    }
}

impl<I: Interface> ComPtr<I> {
    /// Take over a `windows` crate interface and query it for `I`.
    pub fn from_windows<T: windows::core::Interface>(object: T) -> Result<Self, HResult> {
        let unknown = unsafe { ComPtr::<IUnknown>::from_raw(object.into_raw()) }.ok_or(HResult::E_POINTER)?;
        unknown.query::<I>()
    }
}

/// A single-threaded COM apartment on the current thread, left on drop.
///
/// Handles created while the guard lives belong to this apartment and must
/// be dropped before it.
pub struct ApartmentGuard {
    _not_send: PhantomData<*const ()>,
}

impl ApartmentGuard {
    /// `CoInitializeEx(COINIT_APARTMENTTHREADED)`. Fails with
    /// `RPC_E_CHANGED_MODE` if the thread already joined the MTA.
    pub fn sta() -> Result<Self, HResult> {
        let hr = HResult::from(unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED | COINIT_DISABLE_OLE1DDE) });
        if hr.is_failure() {
            tracing::warn!(%hr, "CoInitializeEx failed");
            return Err(hr);
        }
        tracing::debug!(already_initialized = hr == HResult::S_FALSE, "entered STA");
        Ok(Self {
            _not_send: PhantomData,
        })
    }
}

impl Drop for ApartmentGuard {
    fn drop(&mut self) {
        unsafe { CoUninitialize() };
        tracing::debug!("left STA");
    }
}

/// Create the in-process object `clsid` and query it for `I`.
pub fn activate<I: Interface>(clsid: &Guid) -> Result<ComPtr<I>, HResult> {
    let native: GUID = (*clsid).into();
    let unknown: windows::core::IUnknown = unsafe { CoCreateInstance(&native, None, CLSCTX_INPROC_SERVER) }
        .map_err(|e| {
            let hr = HResult::from(e.code());
            tracing::debug!(%clsid, %hr, "CoCreateInstance failed");
            hr
        })?;
    ComPtr::from_windows(unknown)
}
