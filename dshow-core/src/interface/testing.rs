//! In-process COM test doubles
//!
//! Each double is a `#[repr(C)]` object whose first field is a vtable
//! pointer, like a native implementation. A shared [`Tracker`] records
//! reference counts and calls so tests can check ownership after the
//! object is gone.

use std::cell::{Cell, RefCell};
use std::ffi::c_void;
use std::ptr::{self, NonNull};
use std::rc::Rc;

use super::{ComPtr, IEnumMediaTypes, IEnumMediaTypesVtbl, IPin, IPinVtbl, IUnknown, IUnknownVtbl, Interface};
use crate::alloc::{task_free, TaskString};
use crate::catalog::interface_id::{IID_IBASE_FILTER, IID_IENUM_MEDIA_TYPES, IID_IPIN, IID_IUNKNOWN};
use crate::guid::Guid;
use crate::hresult::HResult;
use crate::layout::{create_media_type, AmMediaType, MediaType, PinDirection, PinInfo, ReferenceTime};

#[derive(Default)]
pub(crate) struct Tracker {
    refs: Cell<u32>,
    live: Cell<u32>,
    calls: RefCell<Vec<&'static str>>,
    last_peer: Cell<Option<*mut c_void>>,
    last_media_type: Cell<Option<Guid>>,
    dirty_out: Cell<bool>,
    count_seen: Cell<Option<u32>>,
    last_segment: Cell<Option<(ReferenceTime, ReferenceTime, f64)>>,
    out_of_sync: Cell<bool>,
}

impl Tracker {
    /// Outstanding references over every object sharing this tracker.
    pub fn refs(&self) -> u32 {
        self.refs.get()
    }

    pub fn destroyed(&self) -> bool {
        self.live.get() == 0
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    pub fn last_peer(&self) -> Option<*mut c_void> {
        self.last_peer.get()
    }

    pub fn last_media_type(&self) -> Option<Guid> {
        self.last_media_type.get()
    }

    /// Whether every out parameter arrived empty.
    pub fn out_slots_were_clean(&self) -> bool {
        !self.dirty_out.get()
    }

    pub fn count_seen(&self) -> Option<u32> {
        self.count_seen.get()
    }

    pub fn last_segment(&self) -> Option<(ReferenceTime, ReferenceTime, f64)> {
        self.last_segment.get()
    }

    /// Make enumerators fail with `VFW_E_ENUM_OUT_OF_SYNC` until reset.
    pub fn invalidate(&self) {
        self.out_of_sync.set(true);
    }
}

struct Header {
    refs: Cell<u32>,
    tracker: Rc<Tracker>,
}

trait Mock: Sized + 'static {
    const IIDS: &'static [Guid];

    fn header(&self) -> &Header;
}

fn into_com<T: Mock, I: Interface>(object: T) -> ComPtr<I> {
    let header = object.header();
    header.refs.set(1);
    header.tracker.refs.set(header.tracker.refs.get() + 1);
    header.tracker.live.set(header.tracker.live.get() + 1);
    let raw = NonNull::from(Box::leak(Box::new(object))).cast::<c_void>();
    unsafe { ComPtr::from_non_null(raw) }
}

unsafe fn object_ref<'a, T>(object: *mut c_void) -> &'a T {
    &*(object as *const T)
}

unsafe extern "system" fn add_ref<T: Mock>(object: *mut c_void) -> u32 {
    let header = object_ref::<T>(object).header();
    header.refs.set(header.refs.get() + 1);
    header.tracker.refs.set(header.tracker.refs.get() + 1);
    header.refs.get()
}

unsafe extern "system" fn release<T: Mock>(object: *mut c_void) -> u32 {
    let header = object_ref::<T>(object).header();
    let remaining = header.refs.get() - 1;
    header.refs.set(remaining);
    header.tracker.refs.set(header.tracker.refs.get() - 1);
    if remaining == 0 {
        header.tracker.live.set(header.tracker.live.get() - 1);
        drop(Box::from_raw(object as *mut T));
    }
    remaining
}

unsafe extern "system" fn query_interface<T: Mock>(
    object: *mut c_void,
    riid: *const Guid,
    out: *mut *mut c_void,
) -> HResult {
    *out = ptr::null_mut();
    if T::IIDS.contains(&*riid) {
        add_ref::<T>(object);
        *out = object;
        HResult::S_OK
    } else {
        HResult::E_NOINTERFACE
    }
}

/// Bare `IUnknown`, also answering for `IBaseFilter`.
#[repr(C)]
pub(crate) struct MockObject {
    vtbl: &'static IUnknownVtbl,
    header: Header,
}

impl Mock for MockObject {
    const IIDS: &'static [Guid] = &[IID_IUNKNOWN, IID_IBASE_FILTER];

    fn header(&self) -> &Header {
        &self.header
    }
}

static OBJECT_VTBL: IUnknownVtbl = IUnknownVtbl {
    query_interface: query_interface::<MockObject>,
    add_ref: add_ref::<MockObject>,
    release: release::<MockObject>,
};

impl MockObject {
    pub fn create() -> (ComPtr<IUnknown>, Rc<Tracker>) {
        let tracker = Rc::new(Tracker::default());
        let object = MockObject {
            vtbl: &OBJECT_VTBL,
            header: Header {
                refs: Cell::new(0),
                tracker: tracker.clone(),
            },
        };
        (into_com(object), tracker)
    }
}

#[repr(C)]
pub(crate) struct MockPin {
    vtbl: &'static IPinVtbl,
    header: Header,
    name: String,
    direction: PinDirection,
    peer: RefCell<Option<ComPtr<IPin>>>,
    filter: Option<ComPtr<IUnknown>>,
    connection_type: Option<MediaType>,
    accepts: Vec<Guid>,
    offers: Vec<MediaType>,
    routes: Vec<ComPtr<IPin>>,
    failures: Vec<(&'static str, HResult)>,
}

impl Mock for MockPin {
    const IIDS: &'static [Guid] = &[IID_IUNKNOWN, IID_IPIN];

    fn header(&self) -> &Header {
        &self.header
    }
}

pub(crate) struct MockPinBuilder {
    pin: MockPin,
}

impl MockPin {
    pub fn builder(name: &str) -> MockPinBuilder {
        MockPinBuilder {
            pin: MockPin {
                vtbl: &PIN_VTBL,
                header: Header {
                    refs: Cell::new(0),
                    tracker: Rc::new(Tracker::default()),
                },
                name: name.to_string(),
                direction: PinDirection::INPUT,
                peer: RefCell::new(None),
                filter: None,
                connection_type: None,
                accepts: Vec::new(),
                offers: Vec::new(),
                routes: Vec::new(),
                failures: Vec::new(),
            },
        }
    }

    /// Record the call and return the configured failure, if any.
    fn enter(&self, method: &'static str) -> Option<HResult> {
        self.header.tracker.calls.borrow_mut().push(method);
        self.failures.iter().find(|(m, _)| *m == method).map(|(_, hr)| *hr)
    }

    fn tracker(&self) -> &Tracker {
        &self.header.tracker
    }
}

impl MockPinBuilder {
    pub fn output(mut self) -> Self {
        self.pin.direction = PinDirection::OUTPUT;
        self
    }

    pub fn connected(self, peer: &ComPtr<IPin>) -> Self {
        *self.pin.peer.borrow_mut() = Some(peer.clone());
        self
    }

    pub fn filter(mut self, filter: &ComPtr<IUnknown>) -> Self {
        self.pin.filter = Some(filter.clone());
        self
    }

    pub fn connection_type(mut self, mt: MediaType) -> Self {
        self.pin.connection_type = Some(mt);
        self
    }

    pub fn accepts(mut self, sub_type: Guid) -> Self {
        self.pin.accepts.push(sub_type);
        self
    }

    pub fn offers(mut self, mt: MediaType) -> Self {
        self.pin.offers.push(mt);
        self
    }

    pub fn routes_to(mut self, pin: &ComPtr<IPin>) -> Self {
        self.pin.routes.push(pin.clone());
        self
    }

    pub fn fail(mut self, method: &'static str, hr: HResult) -> Self {
        self.pin.failures.push((method, hr));
        self
    }

    pub fn create(self) -> (ComPtr<IPin>, Rc<Tracker>) {
        let tracker = self.pin.header.tracker.clone();
        (into_com(self.pin), tracker)
    }
}

static PIN_VTBL: IPinVtbl = IPinVtbl {
    base: IUnknownVtbl {
        query_interface: query_interface::<MockPin>,
        add_ref: add_ref::<MockPin>,
        release: release::<MockPin>,
    },
    connect: pin_connect,
    receive_connection: pin_receive_connection,
    disconnect: pin_disconnect,
    connected_to: pin_connected_to,
    connection_media_type: pin_connection_media_type,
    query_pin_info: pin_query_pin_info,
    query_direction: pin_query_direction,
    query_id: pin_query_id,
    query_accept: pin_query_accept,
    enum_media_types: pin_enum_media_types,
    query_internal_connections: pin_query_internal_connections,
    end_of_stream: pin_end_of_stream,
    begin_flush: pin_begin_flush,
    end_flush: pin_end_flush,
    new_segment: pin_new_segment,
};

unsafe fn record_connection(pin: &MockPin, peer: *mut c_void, mt: *const AmMediaType) {
    pin.tracker().last_peer.set(Some(peer));
    pin.tracker().last_media_type.set(mt.as_ref().map(|mt| mt.sub_type));
}

unsafe extern "system" fn pin_connect(object: *mut c_void, receive_pin: *mut c_void, mt: *const AmMediaType) -> HResult {
    let pin = object_ref::<MockPin>(object);
    if let Some(hr) = pin.enter("Connect") {
        return hr;
    }
    record_connection(pin, receive_pin, mt);
    HResult::S_OK
}

unsafe extern "system" fn pin_receive_connection(
    object: *mut c_void,
    connector: *mut c_void,
    mt: *const AmMediaType,
) -> HResult {
    let pin = object_ref::<MockPin>(object);
    if let Some(hr) = pin.enter("ReceiveConnection") {
        return hr;
    }
    record_connection(pin, connector, mt);
    HResult::S_OK
}

unsafe extern "system" fn pin_disconnect(object: *mut c_void) -> HResult {
    let pin = object_ref::<MockPin>(object);
    if let Some(hr) = pin.enter("Disconnect") {
        return hr;
    }
    match pin.peer.borrow_mut().take() {
        Some(_) => HResult::S_OK,
        None => HResult::S_FALSE,
    }
}

unsafe extern "system" fn pin_connected_to(object: *mut c_void, out: *mut *mut c_void) -> HResult {
    let pin = object_ref::<MockPin>(object);
    if !(*out).is_null() {
        pin.tracker().dirty_out.set(true);
    }
    *out = ptr::null_mut();
    if let Some(hr) = pin.enter("ConnectedTo") {
        return hr;
    }
    match pin.peer.borrow().as_ref() {
        Some(peer) => {
            *out = peer.clone().into_raw();
            HResult::S_OK
        }
        None => HResult::VFW_E_NOT_CONNECTED,
    }
}

unsafe extern "system" fn pin_connection_media_type(object: *mut c_void, out: *mut AmMediaType) -> HResult {
    let pin = object_ref::<MockPin>(object);
    if !(*out).major_type.is_null() || !(*out).pb_format.is_null() {
        pin.tracker().dirty_out.set(true);
    }
    if let Some(hr) = pin.enter("ConnectionMediaType") {
        return hr;
    }
    let Some(mt) = pin.connection_type.as_ref() else {
        return HResult::VFW_E_NOT_CONNECTED;
    };
    let copy = create_media_type(mt);
    if copy.is_null() {
        return HResult::E_OUTOFMEMORY;
    }
    *out = *copy;
    task_free(copy as *mut c_void);
    HResult::S_OK
}

unsafe extern "system" fn pin_query_pin_info(object: *mut c_void, out: *mut PinInfo) -> HResult {
    let pin = object_ref::<MockPin>(object);
    if !(*out).filter.is_null() {
        pin.tracker().dirty_out.set(true);
    }
    if let Some(hr) = pin.enter("QueryPinInfo") {
        return hr;
    }
    let mut info = PinInfo {
        filter: pin.filter.clone().map_or(ptr::null_mut(), |f| f.into_raw()),
        dir: pin.direction,
        ..Default::default()
    };
    info.set_name(&pin.name);
    *out = info;
    HResult::S_OK
}

unsafe extern "system" fn pin_query_direction(object: *mut c_void, out: *mut PinDirection) -> HResult {
    let pin = object_ref::<MockPin>(object);
    if let Some(hr) = pin.enter("QueryDirection") {
        return hr;
    }
    *out = pin.direction;
    HResult::S_OK
}

unsafe extern "system" fn pin_query_id(object: *mut c_void, out: *mut *mut u16) -> HResult {
    let pin = object_ref::<MockPin>(object);
    if !(*out).is_null() {
        pin.tracker().dirty_out.set(true);
    }
    *out = ptr::null_mut();
    if let Some(hr) = pin.enter("QueryId") {
        return hr;
    }
    match TaskString::new(&pin.name) {
        Some(id) => {
            *out = id.into_raw();
            HResult::S_OK
        }
        None => HResult::E_OUTOFMEMORY,
    }
}

unsafe extern "system" fn pin_query_accept(object: *mut c_void, mt: *const AmMediaType) -> HResult {
    let pin = object_ref::<MockPin>(object);
    if let Some(hr) = pin.enter("QueryAccept") {
        return hr;
    }
    if pin.accepts.contains(&(*mt).sub_type) {
        HResult::S_OK
    } else {
        HResult::S_FALSE
    }
}

unsafe extern "system" fn pin_enum_media_types(object: *mut c_void, out: *mut *mut c_void) -> HResult {
    let pin = object_ref::<MockPin>(object);
    if !(*out).is_null() {
        pin.tracker().dirty_out.set(true);
    }
    *out = ptr::null_mut();
    if let Some(hr) = pin.enter("EnumMediaTypes") {
        return hr;
    }
    let (enumerator, _) = MockEnum::create(pin.offers.clone());
    *out = enumerator.into_raw();
    HResult::S_OK
}

unsafe extern "system" fn pin_query_internal_connections(
    object: *mut c_void,
    pins: *mut *mut c_void,
    count: *mut u32,
) -> HResult {
    let pin = object_ref::<MockPin>(object);
    if let Some(hr) = pin.enter("QueryInternalConnections") {
        return hr;
    }
    if pin.routes.is_empty() {
        return HResult::E_NOTIMPL;
    }
    let capacity = *count;
    pin.tracker().count_seen.set(Some(capacity));
    if !pins.is_null() {
        for (i, route) in pin.routes.iter().take(capacity as usize).enumerate() {
            *pins.add(i) = route.clone().into_raw();
        }
    }
    *count = pin.routes.len() as u32;
    if pin.routes.len() > capacity as usize {
        HResult::S_FALSE
    } else {
        HResult::S_OK
    }
}

unsafe extern "system" fn pin_end_of_stream(object: *mut c_void) -> HResult {
    object_ref::<MockPin>(object).enter("EndOfStream").unwrap_or(HResult::S_OK)
}

unsafe extern "system" fn pin_begin_flush(object: *mut c_void) -> HResult {
    object_ref::<MockPin>(object).enter("BeginFlush").unwrap_or(HResult::S_OK)
}

unsafe extern "system" fn pin_end_flush(object: *mut c_void) -> HResult {
    object_ref::<MockPin>(object).enter("EndFlush").unwrap_or(HResult::S_OK)
}

unsafe extern "system" fn pin_new_segment(
    object: *mut c_void,
    start: ReferenceTime,
    stop: ReferenceTime,
    rate: f64,
) -> HResult {
    let pin = object_ref::<MockPin>(object);
    if let Some(hr) = pin.enter("NewSegment") {
        return hr;
    }
    pin.tracker().last_segment.set(Some((start, stop, rate)));
    HResult::S_OK
}

/// Enumerator over a fixed list. Clones share the tracker.
#[repr(C)]
pub(crate) struct MockEnum {
    vtbl: &'static IEnumMediaTypesVtbl,
    header: Header,
    types: Vec<MediaType>,
    position: Cell<usize>,
}

impl Mock for MockEnum {
    const IIDS: &'static [Guid] = &[IID_IUNKNOWN, IID_IENUM_MEDIA_TYPES];

    fn header(&self) -> &Header {
        &self.header
    }
}

static ENUM_VTBL: IEnumMediaTypesVtbl = IEnumMediaTypesVtbl {
    base: IUnknownVtbl {
        query_interface: query_interface::<MockEnum>,
        add_ref: add_ref::<MockEnum>,
        release: release::<MockEnum>,
    },
    next: enum_next,
    skip: enum_skip,
    reset: enum_reset,
    clone: enum_clone,
};

impl MockEnum {
    pub fn create(types: Vec<MediaType>) -> (ComPtr<IEnumMediaTypes>, Rc<Tracker>) {
        let tracker = Rc::new(Tracker::default());
        (Self::with_tracker(types, 0, tracker.clone()), tracker)
    }

    fn with_tracker(types: Vec<MediaType>, position: usize, tracker: Rc<Tracker>) -> ComPtr<IEnumMediaTypes> {
        into_com(MockEnum {
            vtbl: &ENUM_VTBL,
            header: Header {
                refs: Cell::new(0),
                tracker,
            },
            types,
            position: Cell::new(position),
        })
    }
}

unsafe extern "system" fn enum_next(
    object: *mut c_void,
    count: u32,
    out: *mut *mut AmMediaType,
    fetched: *mut u32,
) -> HResult {
    let this = object_ref::<MockEnum>(object);
    if this.header.tracker.out_of_sync.get() {
        return HResult::VFW_E_ENUM_OUT_OF_SYNC;
    }
    let start = this.position.get();
    let end = (start + count as usize).min(this.types.len());
    for (i, mt) in this.types[start..end].iter().enumerate() {
        *out.add(i) = create_media_type(mt);
    }
    this.position.set(end);
    let n = (end - start) as u32;
    if !fetched.is_null() {
        *fetched = n;
    }
    if n == count {
        HResult::S_OK
    } else {
        HResult::S_FALSE
    }
}

unsafe extern "system" fn enum_skip(object: *mut c_void, count: u32) -> HResult {
    let this = object_ref::<MockEnum>(object);
    let target = this.position.get() + count as usize;
    this.position.set(target.min(this.types.len()));
    if target > this.types.len() {
        HResult::S_FALSE
    } else {
        HResult::S_OK
    }
}

unsafe extern "system" fn enum_reset(object: *mut c_void) -> HResult {
    let this = object_ref::<MockEnum>(object);
    this.position.set(0);
    this.header.tracker.out_of_sync.set(false);
    HResult::S_OK
}

unsafe extern "system" fn enum_clone(object: *mut c_void, out: *mut *mut c_void) -> HResult {
    let this = object_ref::<MockEnum>(object);
    let copy = MockEnum::with_tracker(this.types.clone(), this.position.get(), this.header.tracker.clone());
    *out = copy.into_raw();
    HResult::S_OK
}
