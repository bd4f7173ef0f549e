//! `IAMFilterGraphCallback`
//!
//! The graph builder calls `UnableToRender` when intelligent connect gives
//! up on a pin. An application registers a callback by handing the graph an
//! object built with [`callback_object`]; the graph may call it from its
//! own worker threads.

use std::ffi::c_void;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr::{self, NonNull};
use std::sync::atomic::{fence, AtomicU32, Ordering};

use super::{ComPtr, IPin, IUnknownVtbl, Interface};
use crate::catalog::interface_id::{IID_IAM_FILTER_GRAPH_CALLBACK, IID_IUNKNOWN};
use crate::guid::Guid;
use crate::hresult::{observe, HResult};

pub enum IAMFilterGraphCallback {}

unsafe impl Interface for IAMFilterGraphCallback {
    const IID: Guid = IID_IAM_FILTER_GRAPH_CALLBACK;
    const NAME: &'static str = "IAMFilterGraphCallback";
    type Vtable = IAMFilterGraphCallbackVtbl;
}

#[repr(C)]
pub struct IAMFilterGraphCallbackVtbl {
    pub base: IUnknownVtbl,
    pub unable_to_render: unsafe extern "system" fn(this: *mut c_void, pin: *mut c_void) -> HResult,
}

impl ComPtr<IAMFilterGraphCallback> {
    /// Report that `pin` could not be rendered. A success code tells the
    /// graph to retry the pin, a failure to give up on it.
    pub fn unable_to_render(&self, pin: &ComPtr<IPin>) -> HResult {
        let hr = unsafe { (self.vtable().unable_to_render)(self.as_raw(), pin.as_raw()) };
        observe(IAMFilterGraphCallback::NAME, "UnableToRender", hr)
    }
}

/// Rust side of `IAMFilterGraphCallback`.
pub trait FilterGraphCallback: Send + Sync + 'static {
    /// `pin` failed to render. Return a success code after fixing things up
    /// to have the graph try again.
    fn unable_to_render(&self, pin: &ComPtr<IPin>) -> HResult;
}

#[repr(C)]
struct CallbackObject {
    vtbl: &'static IAMFilterGraphCallbackVtbl,
    refs: AtomicU32,
    handler: Box<dyn FilterGraphCallback>,
}

static CALLBACK_VTBL: IAMFilterGraphCallbackVtbl = IAMFilterGraphCallbackVtbl {
    base: IUnknownVtbl {
        query_interface: callback_query_interface,
        add_ref: callback_add_ref,
        release: callback_release,
    },
    unable_to_render: callback_unable_to_render,
};

/// Wrap `handler` in a COM object with one reference, owned by the result.
pub fn callback_object<H: FilterGraphCallback>(handler: H) -> ComPtr<IAMFilterGraphCallback> {
    let object = Box::new(CallbackObject {
        vtbl: &CALLBACK_VTBL,
        refs: AtomicU32::new(1),
        handler: Box::new(handler),
    });
    let raw = NonNull::from(Box::leak(object)).cast::<c_void>();
    tracing::debug!(object = ?raw, "created filter graph callback");
    // SAFETY: a fresh object with its one reference.
    unsafe { ComPtr::from_non_null(raw) }
}

unsafe extern "system" fn callback_query_interface(
    this: *mut c_void,
    riid: *const Guid,
    object: *mut *mut c_void,
) -> HResult {
    if object.is_null() {
        return HResult::E_POINTER;
    }
    *object = ptr::null_mut();
    if riid.is_null() {
        return HResult::E_POINTER;
    }
    let iid = *riid;
    if iid == IID_IUNKNOWN || iid == IID_IAM_FILTER_GRAPH_CALLBACK {
        callback_add_ref(this);
        *object = this;
        HResult::S_OK
    } else {
        HResult::E_NOINTERFACE
    }
}

unsafe extern "system" fn callback_add_ref(this: *mut c_void) -> u32 {
    let object = &*(this as *const CallbackObject);
    object.refs.fetch_add(1, Ordering::Relaxed) + 1
}

unsafe extern "system" fn callback_release(this: *mut c_void) -> u32 {
    let remaining = {
        let object = &*(this as *const CallbackObject);
        object.refs.fetch_sub(1, Ordering::Release) - 1
    };
    if remaining == 0 {
        fence(Ordering::Acquire);
        drop(Box::from_raw(this as *mut CallbackObject));
        tracing::debug!(object = ?this, "destroyed filter graph callback");
    }
    remaining
}

unsafe extern "system" fn callback_unable_to_render(this: *mut c_void, pin: *mut c_void) -> HResult {
    let object = &*(this as *const CallbackObject);
    let Some(pin) = ComPtr::<IPin>::from_raw_borrowed(pin) else {
        return HResult::E_POINTER;
    };
    match catch_unwind(AssertUnwindSafe(|| object.handler.unable_to_render(&pin))) {
        Ok(hr) => hr,
        Err(_) => {
            tracing::error!("filter graph callback panicked in UnableToRender");
            HResult::E_UNEXPECTED
        }
    }
}
