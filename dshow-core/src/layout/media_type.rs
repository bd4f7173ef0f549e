//! `AM_MEDIA_TYPE` and its ownership wrappers
//!
//! The raw header is shared by three owners with different release rules:
//!
//! - [`MediaType`] is built on the Rust side and keeps its format block in a
//!   Rust allocation. It is only ever lent to native code as `const*`.
//! - [`NativeMediaType`] is a caller-allocated header a callee filled in
//!   (e.g. `IPin::ConnectionMediaType`). Its format block and `pUnk` are
//!   released on drop, the header itself is not (`FreeMediaType`).
//! - [`NativeMediaTypePtr`] is a header the callee allocated as well
//!   (e.g. `IEnumMediaTypes::Next`). Drop releases everything
//!   (`DeleteMediaType`).

use std::ffi::c_void;
use std::fmt;
use std::ops::Deref;
use std::ptr::{self, NonNull};

use bytemuck::Pod;

use super::{Bool, VideoInfoHeader, VideoInfoHeader2, WaveFormatEx};
use crate::alloc::{task_copy, task_free};
use crate::catalog::format_type::{FORMAT_VIDEO_INFO, FORMAT_VIDEO_INFO2, FORMAT_WAVE_FORMAT_EX};
use crate::error::{Error, Result};
use crate::guid::Guid;
use crate::interface::{release_raw, ComPtr, IUnknown};

/// `AM_MEDIA_TYPE`
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct AmMediaType {
    pub major_type: Guid,
    pub sub_type: Guid,
    pub fixed_size_samples: Bool,
    pub temporal_compression: Bool,
    pub sample_size: u32,
    pub format_type: Guid,
    /// Unused by DirectShow; released with the type if set.
    pub punk: *mut c_void,
    pub cb_format: u32,
    pub pb_format: *mut u8,
}

impl Default for AmMediaType {
    fn default() -> Self {
        Self {
            major_type: Guid::NULL,
            sub_type: Guid::NULL,
            fixed_size_samples: Bool::FALSE,
            temporal_compression: Bool::FALSE,
            sample_size: 0,
            format_type: Guid::NULL,
            punk: ptr::null_mut(),
            cb_format: 0,
            pb_format: ptr::null_mut(),
        }
    }
}

impl AmMediaType {
    /// The format block as bytes.
    ///
    /// # Safety
    /// `pb_format` must be null or valid for `cb_format` bytes.
    pub unsafe fn format_bytes(&self) -> &[u8] {
        if self.pb_format.is_null() || self.cb_format == 0 {
            &[]
        } else {
            std::slice::from_raw_parts(self.pb_format, self.cb_format as usize)
        }
    }
}

/// Release the format block and `pUnk` of a type, leaving the header
/// zeroed but allocated. Equivalent of `FreeMediaType`.
///
/// # Safety
/// The format block must come from the task allocator and `punk` must be
/// null or a live COM reference owned by `mt`.
pub unsafe fn free_media_type(mt: &mut AmMediaType) {
    if mt.cb_format != 0 || !mt.pb_format.is_null() {
        task_free(mt.pb_format as *mut c_void);
        mt.cb_format = 0;
        mt.pb_format = ptr::null_mut();
    }
    if !mt.punk.is_null() {
        release_raw(mt.punk);
        mt.punk = ptr::null_mut();
    }
}

/// Release a callee-allocated type: contents first, then the header.
/// Equivalent of `DeleteMediaType`. Null is ignored.
///
/// # Safety
/// `mt` must be null or a header from the task allocator that nothing else
/// will release.
pub unsafe fn delete_media_type(mt: *mut AmMediaType) {
    if mt.is_null() {
        return;
    }
    free_media_type(&mut *mt);
    task_free(mt as *mut c_void);
}

/// Typed access to a media type's format block.
pub trait FormatAccess {
    fn header(&self) -> &AmMediaType;

    fn format(&self) -> &[u8];

    /// Read the start of the format block as `T`, if it is long enough.
    fn format_as<T: Pod>(&self) -> Option<T> {
        let bytes = self.format().get(..std::mem::size_of::<T>())?;
        bytemuck::try_pod_read_unaligned(bytes).ok()
    }

    fn video_info(&self) -> Option<VideoInfoHeader> {
        (self.header().format_type == FORMAT_VIDEO_INFO)
            .then(|| self.format_as())
            .flatten()
    }

    fn video_info2(&self) -> Option<VideoInfoHeader2> {
        (self.header().format_type == FORMAT_VIDEO_INFO2)
            .then(|| self.format_as())
            .flatten()
    }

    fn wave_format(&self) -> Option<WaveFormatEx> {
        (self.header().format_type == FORMAT_WAVE_FORMAT_EX)
            .then(|| self.format_as())
            .flatten()
    }
}

/// Rust-owned media type, built with [`MediaTypeBuilder`].
///
/// The header's `pb_format`/`cb_format` always describe the owned format
/// block, so the header can be handed to native code as is.
pub struct MediaType {
    header: AmMediaType,
    format: Box<[u8]>,
    unknown: Option<ComPtr<IUnknown>>,
}

impl MediaType {
    pub fn builder(major_type: Guid) -> MediaTypeBuilder {
        MediaTypeBuilder::new(major_type)
    }

    /// Deep copy of a native type (`CopyMediaType`). The format block is
    /// duplicated and `pUnk` gets its own reference.
    ///
    /// # Safety
    /// `mt.pb_format` must be valid for `cb_format` bytes and `mt.punk` must
    /// be null or a live COM object.
    pub unsafe fn copy_from(mt: &AmMediaType) -> Result<Self> {
        MediaTypeBuilder {
            major_type: mt.major_type,
            sub_type: mt.sub_type,
            fixed_size_samples: mt.fixed_size_samples.as_bool(),
            temporal_compression: mt.temporal_compression.as_bool(),
            sample_size: mt.sample_size,
            format_type: mt.format_type,
            format: mt.format_bytes().to_vec(),
            unknown: ComPtr::from_raw_borrowed(mt.punk),
        }
        .build()
    }

    pub fn as_ptr(&self) -> *const AmMediaType {
        &self.header
    }

    pub fn unknown(&self) -> Option<&ComPtr<IUnknown>> {
        self.unknown.as_ref()
    }
}

impl Deref for MediaType {
    type Target = AmMediaType;

    fn deref(&self) -> &AmMediaType {
        &self.header
    }
}

impl FormatAccess for MediaType {
    fn header(&self) -> &AmMediaType {
        &self.header
    }

    fn format(&self) -> &[u8] {
        &self.format
    }
}

impl Clone for MediaType {
    fn clone(&self) -> Self {
        MediaType::assemble(self.header, self.format.clone(), self.unknown.clone())
    }
}

impl PartialEq for MediaType {
    fn eq(&self, other: &Self) -> bool {
        self.major_type == other.major_type
            && self.sub_type == other.sub_type
            && self.format_type == other.format_type
            && self.fixed_size_samples.as_bool() == other.fixed_size_samples.as_bool()
            && self.temporal_compression.as_bool() == other.temporal_compression.as_bool()
            && self.sample_size == other.sample_size
            && self.format == other.format
    }
}

impl fmt::Debug for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaType")
            .field("major_type", &self.major_type)
            .field("sub_type", &self.sub_type)
            .field("format_type", &self.format_type)
            .field("sample_size", &self.sample_size)
            .field("format_len", &self.format.len())
            .finish()
    }
}

impl MediaType {
    fn assemble(mut header: AmMediaType, format: Box<[u8]>, unknown: Option<ComPtr<IUnknown>>) -> Self {
        header.cb_format = format.len() as u32;
        header.pb_format = if format.is_empty() {
            ptr::null_mut()
        } else {
            format.as_ptr() as *mut u8
        };
        header.punk = unknown.as_ref().map_or(ptr::null_mut(), |u| u.as_raw());
        Self {
            header,
            format,
            unknown,
        }
    }
}

/// Builder for [`MediaType`].
#[derive(Clone)]
pub struct MediaTypeBuilder {
    major_type: Guid,
    sub_type: Guid,
    fixed_size_samples: bool,
    temporal_compression: bool,
    sample_size: u32,
    format_type: Guid,
    format: Vec<u8>,
    unknown: Option<ComPtr<IUnknown>>,
}

impl MediaTypeBuilder {
    pub fn new(major_type: Guid) -> Self {
        Self {
            major_type,
            sub_type: Guid::NULL,
            fixed_size_samples: false,
            temporal_compression: false,
            sample_size: 0,
            format_type: Guid::NULL,
            format: Vec::new(),
            unknown: None,
        }
    }

    pub fn sub_type(mut self, sub_type: Guid) -> Self {
        self.sub_type = sub_type;
        self
    }

    /// Every sample has `sample_size` bytes.
    pub fn fixed_size(mut self, sample_size: u32) -> Self {
        self.fixed_size_samples = true;
        self.sample_size = sample_size;
        self
    }

    pub fn temporal_compression(mut self, enabled: bool) -> Self {
        self.temporal_compression = enabled;
        self
    }

    /// Raw format block tagged with `format_type`.
    pub fn format(mut self, format_type: Guid, block: impl Into<Vec<u8>>) -> Self {
        self.format_type = format_type;
        self.format = block.into();
        self
    }

    /// Format block copied from a plain structure.
    pub fn format_struct<T: Pod>(self, format_type: Guid, block: &T) -> Self {
        self.format(format_type, bytemuck::bytes_of(block))
    }

    pub fn unknown(mut self, unknown: ComPtr<IUnknown>) -> Self {
        self.unknown = Some(unknown);
        self
    }

    pub fn build(self) -> Result<MediaType> {
        if u32::try_from(self.format.len()).is_err() {
            return Err(Error::FormatTooLarge(self.format.len()));
        }
        let header = AmMediaType {
            major_type: self.major_type,
            sub_type: self.sub_type,
            fixed_size_samples: self.fixed_size_samples.into(),
            temporal_compression: self.temporal_compression.into(),
            sample_size: self.sample_size,
            format_type: self.format_type,
            ..Default::default()
        };
        Ok(MediaType::assemble(
            header,
            self.format.into_boxed_slice(),
            self.unknown,
        ))
    }
}

/// A caller-allocated header whose contents a callee filled in.
pub struct NativeMediaType {
    raw: AmMediaType,
}

impl NativeMediaType {
    /// Zeroed header to pass as an out parameter.
    pub fn zeroed() -> Self {
        Self {
            raw: AmMediaType::default(),
        }
    }

    /// Adopt a filled-in header.
    ///
    /// # Safety
    /// The contents must follow task-allocator ownership rules; they are
    /// released on drop.
    pub unsafe fn from_raw(raw: AmMediaType) -> Self {
        Self { raw }
    }

    pub fn as_mut_ptr(&mut self) -> *mut AmMediaType {
        &mut self.raw
    }

    /// Copy into a Rust-owned type.
    pub fn to_media_type(&self) -> Result<MediaType> {
        unsafe { MediaType::copy_from(&self.raw) }
    }
}

impl Deref for NativeMediaType {
    type Target = AmMediaType;

    fn deref(&self) -> &AmMediaType {
        &self.raw
    }
}

impl FormatAccess for NativeMediaType {
    fn header(&self) -> &AmMediaType {
        &self.raw
    }

    fn format(&self) -> &[u8] {
        unsafe { self.raw.format_bytes() }
    }
}

impl fmt::Debug for NativeMediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NativeMediaType").field(&self.raw).finish()
    }
}

impl Drop for NativeMediaType {
    fn drop(&mut self) {
        unsafe { free_media_type(&mut self.raw) }
    }
}

/// A callee-allocated header, released whole on drop.
pub struct NativeMediaTypePtr {
    ptr: NonNull<AmMediaType>,
}

impl NativeMediaTypePtr {
    /// # Safety
    /// `ptr` must be null or a header from the task allocator that the
    /// caller owns.
    pub unsafe fn from_raw(ptr: *mut AmMediaType) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| Self { ptr })
    }

    /// Give up ownership; release with [`delete_media_type`].
    pub fn into_raw(self) -> *mut AmMediaType {
        let ptr = self.ptr.as_ptr();
        std::mem::forget(self);
        ptr
    }

    pub fn to_media_type(&self) -> Result<MediaType> {
        unsafe { MediaType::copy_from(self.ptr.as_ref()) }
    }
}

impl Deref for NativeMediaTypePtr {
    type Target = AmMediaType;

    fn deref(&self) -> &AmMediaType {
        unsafe { self.ptr.as_ref() }
    }
}

impl FormatAccess for NativeMediaTypePtr {
    fn header(&self) -> &AmMediaType {
        self
    }

    fn format(&self) -> &[u8] {
        unsafe { self.ptr.as_ref().format_bytes() }
    }
}

impl fmt::Debug for NativeMediaTypePtr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NativeMediaTypePtr").field(self.header()).finish()
    }
}

impl Drop for NativeMediaTypePtr {
    fn drop(&mut self) {
        unsafe { delete_media_type(self.ptr.as_ptr()) }
    }
}

/// Allocate a complete type in task memory, the way a callee returns one
/// from `IEnumMediaTypes::Next` (`CreateMediaType`). Null on allocation
/// failure.
///
/// # Safety
/// The result must be released with [`delete_media_type`].
pub unsafe fn create_media_type(source: &MediaType) -> *mut AmMediaType {
    let mt = crate::alloc::task_alloc(std::mem::size_of::<AmMediaType>()) as *mut AmMediaType;
    if mt.is_null() {
        return mt;
    }
    let mut header = source.header;
    header.pb_format = ptr::null_mut();
    header.cb_format = 0;
    header.punk = ptr::null_mut();
    if !source.format.is_empty() {
        header.pb_format = task_copy(&source.format);
        if header.pb_format.is_null() {
            task_free(mt as *mut c_void);
            return ptr::null_mut();
        }
        header.cb_format = source.format.len() as u32;
    }
    if let Some(unknown) = source.unknown.clone() {
        header.punk = unknown.into_raw();
    }
    mt.write(header);
    mt
}
