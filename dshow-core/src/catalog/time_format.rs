//! Time formats (`TIME_FORMAT_*`)
//!
//! Units used by `IMediaSeeking` positions. From `uuids.h`.

use super::Category;

identifier_table! {
    TIME_FORMATS: Category::TimeFormat;

    /// No format (`GUID_NULL`).
    TIME_FORMAT_NONE => "TIME_FORMAT_NONE" = 0x00000000_0000_0000_0000_000000000000;

    /// Video frames.
    TIME_FORMAT_FRAME => "TIME_FORMAT_FRAME" = 0x7b785570_8c82_11cf_bc0c_00aa00ac74f6;

    /// Byte offset within the stream.
    TIME_FORMAT_BYTE => "TIME_FORMAT_BYTE" = 0x7b785571_8c82_11cf_bc0c_00aa00ac74f6;

    /// Samples in the stream.
    TIME_FORMAT_SAMPLE => "TIME_FORMAT_SAMPLE" = 0x7b785572_8c82_11cf_bc0c_00aa00ac74f6;

    /// Interlaced video fields.
    TIME_FORMAT_FIELD => "TIME_FORMAT_FIELD" = 0x7b785573_8c82_11cf_bc0c_00aa00ac74f6;

    /// Reference time, 100-nanosecond units.
    TIME_FORMAT_MEDIA_TIME => "TIME_FORMAT_MEDIA_TIME" = 0x7b785574_8c82_11cf_bc0c_00aa00ac74f6;
}
