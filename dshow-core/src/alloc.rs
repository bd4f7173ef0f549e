//! COM task memory
//!
//! Callees hand out format blocks, enumerated media types and pin IDs in
//! memory from the COM task allocator; the caller frees it. On Windows these
//! are `CoTaskMemAlloc`/`CoTaskMemFree`. Other hosts have no COM runtime, so
//! the C heap stands in, which is what in-process test doubles allocate from.

use std::ffi::c_void;
use std::ptr;

/// Allocate `size` bytes of task memory. Returns null on failure.
///
/// # Safety
/// The result must be released with [`task_free`].
pub unsafe fn task_alloc(size: usize) -> *mut c_void {
    #[cfg(windows)]
    {
        windows::Win32::System::Com::CoTaskMemAlloc(size)
    }
    #[cfg(not(windows))]
    {
        libc::malloc(size.max(1))
    }
}

/// Free task memory. Null is ignored.
///
/// # Safety
/// `ptr` must be null or come from [`task_alloc`] (or the native task
/// allocator) and must not be used afterwards.
pub unsafe fn task_free(ptr: *mut c_void) {
    if ptr.is_null() {
        return;
    }
    #[cfg(windows)]
    {
        windows::Win32::System::Com::CoTaskMemFree(Some(ptr as *const c_void));
    }
    #[cfg(not(windows))]
    {
        libc::free(ptr);
    }
}

/// Copy `bytes` into fresh task memory.
///
/// # Safety
/// The result must be released with [`task_free`].
pub unsafe fn task_copy(bytes: &[u8]) -> *mut u8 {
    let dst = task_alloc(bytes.len()) as *mut u8;
    if !dst.is_null() {
        ptr::copy_nonoverlapping(bytes.as_ptr(), dst, bytes.len());
    }
    dst
}

/// A NUL-terminated UTF-16 string in task memory, freed on drop.
pub struct TaskString {
    ptr: *mut u16,
}

impl TaskString {
    /// Take ownership of a callee-allocated `LPWSTR`.
    ///
    /// # Safety
    /// `ptr` must be null or a NUL-terminated string from the task allocator.
    pub unsafe fn from_raw(ptr: *mut u16) -> Self {
        Self { ptr }
    }

    /// Allocate a copy of `text`.
    pub fn new(text: &str) -> Option<Self> {
        let wide: Vec<u16> = text.encode_utf16().chain(std::iter::once(0)).collect();
        let bytes = wide.len() * std::mem::size_of::<u16>();
        unsafe {
            let ptr = task_alloc(bytes) as *mut u16;
            if ptr.is_null() {
                return None;
            }
            ptr::copy_nonoverlapping(wide.as_ptr(), ptr, wide.len());
            Some(Self { ptr })
        }
    }

    pub fn is_null(&self) -> bool {
        self.ptr.is_null()
    }

    /// UTF-16 units without the terminator.
    pub fn as_wide(&self) -> &[u16] {
        if self.ptr.is_null() {
            return &[];
        }
        unsafe {
            let mut len = 0;
            while *self.ptr.add(len) != 0 {
                len += 1;
            }
            std::slice::from_raw_parts(self.ptr, len)
        }
    }

    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(self.as_wide())
    }

    /// Give up ownership without freeing.
    pub fn into_raw(self) -> *mut u16 {
        let ptr = self.ptr;
        std::mem::forget(self);
        ptr
    }
}

impl Drop for TaskString {
    fn drop(&mut self) {
        unsafe { task_free(self.ptr as *mut c_void) }
    }
}
