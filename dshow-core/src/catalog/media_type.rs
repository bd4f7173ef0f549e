//! Major media types (`MEDIATYPE_*`)
//!
//! From `uuids.h` and `ksuuids.h`.
//! <https://docs.microsoft.com/en-us/windows/desktop/directshow/media-types>

use super::Category;

identifier_table! {
    /// All major types, in SDK documentation order.
    MAJOR_TYPES: Category::MajorType;

    /// Analog audio.
    MEDIATYPE_ANALOG_AUDIO => "MEDIATYPE_AnalogAudio" = 0x0482dee1_7817_11cf_8a03_00aa006ecb65;

    /// Analog video.
    MEDIATYPE_ANALOG_VIDEO => "MEDIATYPE_AnalogVideo" = 0x0482dde1_7817_11cf_8a03_00aa006ecb65;

    /// Audio.
    MEDIATYPE_AUDIO => "MEDIATYPE_Audio" = 0x73647561_0000_0010_8000_00aa00389b71;

    /// Line 21 data, used by closed captions.
    MEDIATYPE_AUX_LINE21_DATA => "MEDIATYPE_AUXLine21Data" = 0x670aea80_3a82_11d0_b79b_00aa003767a7;

    /// File.
    #[deprecated = "MEDIATYPE_File is obsolete"]
    MEDIATYPE_FILE => "MEDIATYPE_File" = 0x656c6966_0000_0010_8000_00aa00389b71;

    /// Interleaved audio and video, used for Digital Video (DV).
    MEDIATYPE_INTERLEAVED => "MEDIATYPE_Interleaved" = 0x73766169_0000_0010_8000_00aa00389b71;

    /// Obsolete. Do not use.
    #[deprecated = "MEDIATYPE_LMRT is obsolete and must not be used"]
    #[forbidden]
    MEDIATYPE_LMRT => "MEDIATYPE_LMRT" = 0x74726c6d_0000_0010_8000_00aa00389b71;

    /// MIDI format.
    MEDIATYPE_MIDI => "MEDIATYPE_Midi" = 0x7364696d_0000_0010_8000_00aa00389b71;

    /// MPEG-2 PES packets.
    MEDIATYPE_MPEG2_PES => "MEDIATYPE_MPEG2_PES" = 0xe06d8020_db46_11cf_b4d1_00805f6cbbea;

    /// MPEG-2 section data.
    MEDIATYPE_MPEG2_SECTIONS => "MEDIATYPE_MPEG2_SECTIONS" = 0x455f176c_4b06_47ce_9aef_8caef73df7b5;

    /// MPEG-1 system stream.
    MEDIATYPE_MPEG1_SYSTEM_STREAM => "MEDIATYPE_MPEG1SystemStream" = 0xe436eb82_524f_11ce_9f53_0020af0ba770;

    /// Encrypted DVD pack.
    MEDIATYPE_DVD_ENCRYPTED_PACK => "MEDIATYPE_DVD_ENCRYPTED_PACK" = 0xed0b916a_044d_11d1_aa78_00c04fc31d60;

    /// Script command, used by closed captions.
    MEDIATYPE_SCRIPT_COMMAND => "MEDIATYPE_ScriptCommand" = 0x73636d64_0000_0010_8000_00aa00389b71;

    /// Byte stream with no time stamps.
    MEDIATYPE_STREAM => "MEDIATYPE_Stream" = 0xe436eb83_524f_11ce_9f53_0020af0ba770;

    /// Text.
    MEDIATYPE_TEXT => "MEDIATYPE_Text" = 0x73747874_0000_0010_8000_00aa00389b71;

    /// Timecode data. No stock DirectShow filter handles it.
    MEDIATYPE_TIMECODE => "MEDIATYPE_Timecode" = 0x0482dee3_7817_11cf_8a03_00aa006ecb65;

    /// Obsolete. Do not use.
    #[deprecated = "MEDIATYPE_URL_STREAM is obsolete and must not be used"]
    #[forbidden]
    MEDIATYPE_URL_STREAM => "MEDIATYPE_URL_STREAM" = 0x736c7275_0000_0010_8000_00aa00389b71;

    /// Vertical blanking interval data, same as `KSDATAFORMAT_TYPE_VBI`.
    MEDIATYPE_VBI => "MEDIATYPE_VBI" = 0xf72a76e1_eb0a_11d0_ace4_0000c0cc16ba;

    /// Video.
    MEDIATYPE_VIDEO => "MEDIATYPE_Video" = 0x73646976_0000_0010_8000_00aa00389b71;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guid::{fourcc, Guid};

    #[test]
    fn test_fourcc_major_types() {
        assert_eq!(MEDIATYPE_VIDEO, Guid::from_fourcc(fourcc(b"vids")));
        assert_eq!(MEDIATYPE_AUDIO, Guid::from_fourcc(fourcc(b"auds")));
        assert_eq!(MEDIATYPE_TEXT, Guid::from_fourcc(fourcc(b"txts")));
        assert_eq!(MEDIATYPE_INTERLEAVED, Guid::from_fourcc(fourcc(b"iavs")));
        assert_eq!(MEDIATYPE_MIDI, Guid::from_fourcc(fourcc(b"mids")));
    }

    #[test]
    fn test_table_order_and_size() {
        assert_eq!(MAJOR_TYPES.len(), 19);
        assert_eq!(MAJOR_TYPES[0].name, "MEDIATYPE_AnalogAudio");
        assert_eq!(MAJOR_TYPES[18].value, MEDIATYPE_VIDEO);
        assert_eq!(MAJOR_TYPES.iter().filter(|e| e.is_deprecated()).count(), 3);
    }
}
