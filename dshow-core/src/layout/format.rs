//! Format blocks
//!
//! Structures that `AM_MEDIA_TYPE::pbFormat` points at, selected by
//! `formattype`.

use bytemuck::{Pod, Zeroable};

use super::ReferenceTime;

/// `RECT`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// `BITMAPINFOHEADER`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct BitmapInfoHeader {
    pub size: u32,
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bit_count: u16,
    pub compression: u32,
    pub size_image: u32,
    pub x_pels_per_meter: i32,
    pub y_pels_per_meter: i32,
    pub clr_used: u32,
    pub clr_important: u32,
}

/// `BI_RGB`
pub const BI_RGB: u32 = 0;

impl BitmapInfoHeader {
    /// Header for an uncompressed (`BI_RGB`) or FOURCC-compressed image.
    pub fn new(width: i32, height: i32, bit_count: u16, compression: u32) -> Self {
        let mut header = Self {
            size: std::mem::size_of::<Self>() as u32,
            width,
            height,
            planes: 1,
            bit_count,
            compression,
            ..Default::default()
        };
        if compression == BI_RGB {
            // Zero is valid for BI_RGB when the image size does not fit.
            header.size_image = header
                .row_bytes()
                .checked_mul(u64::from(height.unsigned_abs()))
                .and_then(|size| u32::try_from(size).ok())
                .unwrap_or(0);
        }
        header
    }

    /// RGB rows are stored bottom-up unless the height is negative.
    pub fn is_bottom_up(&self) -> bool {
        self.compression == BI_RGB && self.height > 0
    }

    /// Bytes per row for RGB data, padded to a DWORD boundary.
    /// Saturates at `u32::MAX` for widths no real surface has.
    pub fn stride(&self) -> u32 {
        u32::try_from(self.row_bytes()).unwrap_or(u32::MAX)
    }

    fn row_bytes(&self) -> u64 {
        (u64::from(self.width.unsigned_abs()) * u64::from(self.bit_count)).div_ceil(32) * 4
    }
}

/// `VIDEOINFOHEADER`, format type `FORMAT_VideoInfo`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct VideoInfoHeader {
    pub source: Rect,
    pub target: Rect,
    pub bit_rate: u32,
    pub bit_error_rate: u32,
    pub avg_time_per_frame: ReferenceTime,
    pub bmi_header: BitmapInfoHeader,
}

impl VideoInfoHeader {
    pub fn new(bmi_header: BitmapInfoHeader, avg_time_per_frame: ReferenceTime) -> Self {
        Self {
            avg_time_per_frame,
            bmi_header,
            ..Default::default()
        }
    }

    /// Frames per second, if a frame duration is set.
    pub fn frame_rate(&self) -> Option<f64> {
        (self.avg_time_per_frame > 0).then(|| super::UNITS as f64 / self.avg_time_per_frame as f64)
    }
}

/// `VIDEOINFOHEADER2`, format type `FORMAT_VideoInfo2`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct VideoInfoHeader2 {
    pub source: Rect,
    pub target: Rect,
    pub bit_rate: u32,
    pub bit_error_rate: u32,
    pub avg_time_per_frame: ReferenceTime,
    pub interlace_flags: u32,
    pub copy_protect_flags: u32,
    pub pict_aspect_ratio_x: u32,
    pub pict_aspect_ratio_y: u32,
    /// Union with `dwReserved1`.
    pub control_flags: u32,
    pub reserved2: u32,
    pub bmi_header: BitmapInfoHeader,
}

/// `WAVEFORMATEX`, format type `FORMAT_WaveFormatEx`. Byte-packed in the SDK.
#[repr(C, packed)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WaveFormatEx {
    pub format_tag: u16,
    pub channels: u16,
    pub samples_per_sec: u32,
    pub avg_bytes_per_sec: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
    /// Bytes of extra format data following the structure.
    pub cb_size: u16,
}

// SAFETY: packed, so there is no padding, and every field is plain data.
unsafe impl Zeroable for WaveFormatEx {}
unsafe impl Pod for WaveFormatEx {}

/// `WAVE_FORMAT_PCM`
pub const WAVE_FORMAT_PCM: u16 = 0x0001;
/// `WAVE_FORMAT_IEEE_FLOAT`
pub const WAVE_FORMAT_IEEE_FLOAT: u16 = 0x0003;

impl WaveFormatEx {
    /// Integer PCM.
    pub fn pcm(channels: u16, samples_per_sec: u32, bits_per_sample: u16) -> Self {
        Self::interleaved(WAVE_FORMAT_PCM, channels, samples_per_sec, bits_per_sample)
    }

    /// 32-bit float.
    pub fn ieee_float(channels: u16, samples_per_sec: u32) -> Self {
        Self::interleaved(WAVE_FORMAT_IEEE_FLOAT, channels, samples_per_sec, 32)
    }

    fn interleaved(tag: u16, channels: u16, samples_per_sec: u32, bits_per_sample: u16) -> Self {
        let frame_bytes = u32::from(channels) * u32::from(bits_per_sample) / 8;
        let avg_bytes_per_sec = u64::from(samples_per_sec) * u64::from(frame_bytes);
        Self {
            format_tag: tag,
            channels,
            samples_per_sec,
            avg_bytes_per_sec: u32::try_from(avg_bytes_per_sec).unwrap_or(u32::MAX),
            block_align: u16::try_from(frame_bytes).unwrap_or(u16::MAX),
            bits_per_sample,
            cb_size: 0,
        }
    }
}
