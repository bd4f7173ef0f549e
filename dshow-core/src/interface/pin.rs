//! `IPin`
//!
//! Connect, ReceiveConnection, Disconnect, BeginFlush and EndFlush change pin
//! state and are meant to be called by the Filter Graph Manager only.
//! Applications connect pins through `IGraphBuilder`/`IFilterGraph`. The
//! methods are still exposed for graph implementations and tests.

use std::ffi::c_void;
use std::ptr;

use super::{ComPtr, IEnumMediaTypes, IUnknownVtbl, Interface};
use crate::alloc::TaskString;
use crate::catalog::interface_id::IID_IPIN;
use crate::guid::Guid;
use crate::hresult::{observe, HResult};
use crate::layout::{AmMediaType, NativeMediaType, OwnedPinInfo, PinDirection, PinInfo, ReferenceTime};

pub enum IPin {}

unsafe impl Interface for IPin {
    const IID: Guid = IID_IPIN;
    const NAME: &'static str = "IPin";
    type Vtable = IPinVtbl;
}

/// Slot order follows `strmif.h`.
#[repr(C)]
pub struct IPinVtbl {
    pub base: IUnknownVtbl,
    pub connect:
        unsafe extern "system" fn(this: *mut c_void, receive_pin: *mut c_void, mt: *const AmMediaType) -> HResult,
    pub receive_connection:
        unsafe extern "system" fn(this: *mut c_void, connector: *mut c_void, mt: *const AmMediaType) -> HResult,
    pub disconnect: unsafe extern "system" fn(this: *mut c_void) -> HResult,
    pub connected_to: unsafe extern "system" fn(this: *mut c_void, pin: *mut *mut c_void) -> HResult,
    pub connection_media_type: unsafe extern "system" fn(this: *mut c_void, mt: *mut AmMediaType) -> HResult,
    pub query_pin_info: unsafe extern "system" fn(this: *mut c_void, info: *mut PinInfo) -> HResult,
    pub query_direction: unsafe extern "system" fn(this: *mut c_void, dir: *mut PinDirection) -> HResult,
    pub query_id: unsafe extern "system" fn(this: *mut c_void, id: *mut *mut u16) -> HResult,
    pub query_accept: unsafe extern "system" fn(this: *mut c_void, mt: *const AmMediaType) -> HResult,
    pub enum_media_types: unsafe extern "system" fn(this: *mut c_void, enumerator: *mut *mut c_void) -> HResult,
    pub query_internal_connections:
        unsafe extern "system" fn(this: *mut c_void, pins: *mut *mut c_void, count: *mut u32) -> HResult,
    pub end_of_stream: unsafe extern "system" fn(this: *mut c_void) -> HResult,
    pub begin_flush: unsafe extern "system" fn(this: *mut c_void) -> HResult,
    pub end_flush: unsafe extern "system" fn(this: *mut c_void) -> HResult,
    pub new_segment: unsafe extern "system" fn(
        this: *mut c_void,
        start: ReferenceTime,
        stop: ReferenceTime,
        rate: f64,
    ) -> HResult,
}

/// Result of `QueryInternalConnections`.
#[derive(Debug, Default)]
pub struct InternalConnections {
    /// Pins the callee wrote, at most the capacity passed in.
    pub pins: Vec<ComPtr<IPin>>,
    /// Count reported back. With `S_FALSE` this is the number of slots the
    /// callee needed, which can exceed `pins.len()`.
    pub count: u32,
}

fn media_type_ptr(mt: Option<&AmMediaType>) -> *const AmMediaType {
    mt.map_or(ptr::null(), |mt| mt as *const AmMediaType)
}

impl ComPtr<IPin> {
    fn call(&self, method: &'static str, hr: HResult) -> HResult {
        observe(IPin::NAME, method, hr)
    }

    /// Connect this output pin to `receive_pin`, optionally with a partial
    /// or complete media type.
    pub fn connect(&self, receive_pin: &ComPtr<IPin>, mt: Option<&AmMediaType>) -> HResult {
        let hr = unsafe { (self.vtable().connect)(self.as_raw(), receive_pin.as_raw(), media_type_ptr(mt)) };
        self.call("Connect", hr)
    }

    /// Accept a connection from `connector` with a complete media type.
    pub fn receive_connection(&self, connector: &ComPtr<IPin>, mt: &AmMediaType) -> HResult {
        let hr = unsafe { (self.vtable().receive_connection)(self.as_raw(), connector.as_raw(), mt) };
        self.call("ReceiveConnection", hr)
    }

    /// `S_FALSE` if the pin was not connected.
    pub fn disconnect(&self) -> HResult {
        let hr = unsafe { (self.vtable().disconnect)(self.as_raw()) };
        self.call("Disconnect", hr)
    }

    /// The peer pin, `Err(VFW_E_NOT_CONNECTED)` when unconnected.
    pub fn connected_to(&self) -> Result<ComPtr<IPin>, HResult> {
        let mut pin = ptr::null_mut();
        let hr = unsafe { (self.vtable().connected_to)(self.as_raw(), &mut pin) };
        unsafe { ComPtr::from_out(self.call("ConnectedTo", hr), pin) }
    }

    pub fn connection_media_type(&self) -> Result<NativeMediaType, HResult> {
        let mut mt = NativeMediaType::zeroed();
        let hr = unsafe { (self.vtable().connection_media_type)(self.as_raw(), mt.as_mut_ptr()) };
        if self.call("ConnectionMediaType", hr).is_failure() {
            return Err(hr);
        }
        Ok(mt)
    }

    pub fn query_pin_info(&self) -> Result<OwnedPinInfo, HResult> {
        let mut info = PinInfo::default();
        let hr = unsafe { (self.vtable().query_pin_info)(self.as_raw(), &mut info) };
        // Adopt before checking, so a filter reference is released either way.
        let info = unsafe { OwnedPinInfo::from_raw(info) };
        if self.call("QueryPinInfo", hr).is_failure() {
            return Err(hr);
        }
        Ok(info)
    }

    pub fn query_direction(&self) -> Result<PinDirection, HResult> {
        let mut dir = PinDirection::default();
        let hr = unsafe { (self.vtable().query_direction)(self.as_raw(), &mut dir) };
        if self.call("QueryDirection", hr).is_failure() {
            return Err(hr);
        }
        Ok(dir)
    }

    /// The pin identifier used by `IBaseFilter::FindPin`.
    pub fn query_id(&self) -> Result<String, HResult> {
        let mut id = ptr::null_mut();
        let hr = unsafe { (self.vtable().query_id)(self.as_raw(), &mut id) };
        let id = unsafe { TaskString::from_raw(id) };
        if self.call("QueryId", hr).is_failure() {
            return Err(hr);
        }
        Ok(id.to_string_lossy())
    }

    /// `S_OK` if the pin would accept `mt`, `S_FALSE` otherwise.
    pub fn query_accept(&self, mt: &AmMediaType) -> HResult {
        let hr = unsafe { (self.vtable().query_accept)(self.as_raw(), mt) };
        self.call("QueryAccept", hr)
    }

    pub fn enum_media_types(&self) -> Result<ComPtr<IEnumMediaTypes>, HResult> {
        let mut enumerator = ptr::null_mut();
        let hr = unsafe { (self.vtable().enum_media_types)(self.as_raw(), &mut enumerator) };
        unsafe { ComPtr::from_out(self.call("EnumMediaTypes", hr), enumerator) }
    }

    /// Pins this pin routes data to inside its filter.
    ///
    /// `capacity` slots are offered; the count goes in and comes back. Most
    /// filters return `E_NOTIMPL`, meaning every pin of the opposite
    /// direction is connected internally.
    pub fn query_internal_connections(&self, capacity: u32) -> (HResult, InternalConnections) {
        let mut slots: Vec<*mut c_void> = vec![ptr::null_mut(); capacity as usize];
        let mut count = capacity;
        let hr = unsafe {
            (self.vtable().query_internal_connections)(
                self.as_raw(),
                if capacity == 0 { ptr::null_mut() } else { slots.as_mut_ptr() },
                &mut count,
            )
        };
        let hr = self.call("QueryInternalConnections", hr);
        if hr.is_failure() {
            return (hr, InternalConnections::default());
        }
        let filled = (count as usize).min(slots.len());
        let pins = slots[..filled]
            .iter()
            .filter_map(|&pin| unsafe { ComPtr::from_raw(pin) })
            .collect();
        (hr, InternalConnections { pins, count })
    }

    pub fn end_of_stream(&self) -> HResult {
        let hr = unsafe { (self.vtable().end_of_stream)(self.as_raw()) };
        self.call("EndOfStream", hr)
    }

    pub fn begin_flush(&self) -> HResult {
        let hr = unsafe { (self.vtable().begin_flush)(self.as_raw()) };
        self.call("BeginFlush", hr)
    }

    pub fn end_flush(&self) -> HResult {
        let hr = unsafe { (self.vtable().end_flush)(self.as_raw()) };
        self.call("EndFlush", hr)
    }

    /// Announce a segment: samples that follow are relative to `start`.
    pub fn new_segment(&self, start: ReferenceTime, stop: ReferenceTime, rate: f64) -> HResult {
        let hr = unsafe { (self.vtable().new_segment)(self.as_raw(), start, stop, rate) };
        self.call("NewSegment", hr)
    }
}
