//! Event tracing GUIDs
//!
//! From `perfstruct.h`.

use super::Category;

identifier_table! {
    TRACE_EVENTS: Category::TraceEvent;

    /// Audio break event. Event data is a `PERFINFO_DSHOW_AUDIOBREAK`.
    GUID_AUDIOBREAK => "GUID_AUDIOBREAK" = 0x56d29065_efbe_42dc_8c29_e325dc9c27d5;

    /// DirectShow event provider.
    GUID_DSHOW_CTL => "GUID_DSHOW_CTL" = 0x28cf047a_2437_4b24_b653_b9446a419a69;

    /// General streaming event. Event data is a `PERFINFO_DSHOW_STREAMTRACE`.
    GUID_STREAMTRACE => "GUID_STREAMTRACE" = 0x3d7e7d93_2fc8_4a07_a719_e0922ff2899e;

    /// Video rendering event. Event data is a `PERFINFO_DSHOW_AVREND`.
    GUID_VIDEOREND => "GUID_VIDEOREND" = 0xd0da7ad6_ae80_4de5_aafc_c126711e7593;
}
