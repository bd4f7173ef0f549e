//! Media subtypes (`MEDIASUBTYPE_*`)
//!
//! From `uuids.h`, `ksuuids.h` and `wmcodecdsp.h`.
//! <https://docs.microsoft.com/en-us/windows/desktop/directshow/audio-subtypes>
//! <https://docs.microsoft.com/en-us/windows/desktop/directshow/dvd-media-types>
//! <https://docs.microsoft.com/en-us/windows/desktop/directshow/mpeg-1-media-types>
//!
//! Subtypes whose `data1` is a FOURCC or a `WAVE_FORMAT_*` tag sit on the
//! `XXXXXXXX-0000-0010-8000-00AA00389B71` base; see [`Guid::from_fourcc`].
//!
//! [`Guid::from_fourcc`]: crate::guid::Guid::from_fourcc

use super::Category;

identifier_table! {
    /// All subtypes, grouped as in the SDK documentation.
    SUBTYPES: Category::Subtype;

    /// No subtype (`GUID_NULL`).
    MEDIASUBTYPE_NONE => "MEDIASUBTYPE_None" = 0x00000000_0000_0000_0000_000000000000;

    // Uncompressed audio

    /// IEEE floating-point audio.
    MEDIASUBTYPE_IEEE_FLOAT => "MEDIASUBTYPE_IEEE_FLOAT" = 0x00000003_0000_0010_8000_00aa00389b71;

    /// PCM audio.
    MEDIASUBTYPE_PCM => "MEDIASUBTYPE_PCM" = 0x00000001_0000_0010_8000_00aa00389b71;

    // MPEG-4 and AAC audio

    /// AAC in ADTS format. The format block is a `WAVEFORMATEX` with
    /// `wFormatTag == WAVE_FORMAT_MPEG_ADTS_AAC` giving the core AAC-LC rate
    /// and channel count, before SBR or PS.
    MEDIASUBTYPE_MPEG_ADTS_AAC => "MEDIASUBTYPE_MPEG_ADTS_AAC" = 0x00001600_0000_0010_8000_00aa00389b71;

    /// HE-AAC stream. The format block is an `HEAACWAVEFORMAT`.
    MEDIASUBTYPE_MPEG_HEAAC => "MEDIASUBTYPE_MPEG_HEAAC" = 0x00001610_0000_0010_8000_00aa00389b71;

    /// MPEG-4 audio with LOAS sync and LATM multiplex layers. The format
    /// block is a `WAVEFORMATEX` with `wFormatTag == WAVE_FORMAT_MPEG_LOAS`.
    MEDIASUBTYPE_MPEG_LOAS => "MEDIASUBTYPE_MPEG_LOAS" = 0x00001602_0000_0010_8000_00aa00389b71;

    /// Raw AAC. The `WAVEFORMATEX` is followed by the AudioSpecificConfig()
    /// bytes from ISO/IEC 14496-3: 2 bytes for AAC-LC or implicitly signalled
    /// HE-AAC, more for explicit SBR/PS signalling.
    MEDIASUBTYPE_RAW_AAC1 => "MEDIASUBTYPE_RAW_AAC1" = 0x000000ff_0000_0010_8000_00aa00389b71;

    // Dolby audio

    /// Dolby Digital Plus audio.
    MEDIASUBTYPE_DOLBY_DDPLUS => "MEDIASUBTYPE_DOLBY_DDPLUS" = 0xa7fb87af_2d02_42fb_a4d4_05cd93843bdd;

    /// Dolby Digital (AC-3) audio.
    MEDIASUBTYPE_DOLBY_AC3 => "MEDIASUBTYPE_DOLBY_AC3" = 0xe06d802c_db46_11cf_b4d1_00805f6cbbea;

    /// Dolby AC-3 over S/PDIF.
    MEDIASUBTYPE_DOLBY_AC3_SPDIF => "MEDIASUBTYPE_DOLBY_AC3_SPDIF" = 0x00000092_0000_0010_8000_00aa00389b71;

    /// DVM AC-3 codec, used for AVI files with Dolby Digital audio.
    MEDIASUBTYPE_DVM => "MEDIASUBTYPE_DVM" = 0x00002000_0000_0010_8000_00aa00389b71;

    /// Padded AC-3, tag 0x240. Prefer `MEDIASUBTYPE_DOLBY_AC3_SPDIF`.
    MEDIASUBTYPE_RAW_SPORT => "MEDIASUBTYPE_RAW_SPORT" = 0x00000240_0000_0010_8000_00aa00389b71;

    /// Padded AC-3, tag 0x241. Prefer `MEDIASUBTYPE_DOLBY_AC3_SPDIF`.
    MEDIASUBTYPE_SPDIF_TAG_241H => "MEDIASUBTYPE_SPDIF_TAG_241h" = 0x00000241_0000_0010_8000_00aa00389b71;

    // Miscellaneous audio

    /// Audio with DRM protection.
    MEDIASUBTYPE_DRM_AUDIO => "MEDIASUBTYPE_DRM_Audio" = 0x00000009_0000_0010_8000_00aa00389b71;

    /// DTS audio, `WAVE_FORMAT_UNKNOWN` format tag.
    MEDIASUBTYPE_DTS => "MEDIASUBTYPE_DTS" = 0xe06d8033_db46_11cf_b4d1_00805f6cbbea;

    /// DTS audio, `WAVE_FORMAT_DTS2` format tag.
    MEDIASUBTYPE_DTS2 => "MEDIASUBTYPE_DTS2" = 0x00002001_0000_0010_8000_00aa00389b71;

    /// DVD LPCM audio.
    MEDIASUBTYPE_DVD_LPCM_AUDIO => "MEDIASUBTYPE_DVD_LPCM_AUDIO" = 0xe06d8032_db46_11cf_b4d1_00805f6cbbea;

    /// MPEG-1 audio payload.
    MEDIASUBTYPE_MPEG1_AUDIO_PAYLOAD => "MEDIASUBTYPE_MPEG1AudioPayload" = 0x00000050_0000_0010_8000_00aa00389b71;

    /// MPEG-1 audio packet.
    MEDIASUBTYPE_MPEG1_PACKET => "MEDIASUBTYPE_MPEG1Packet" = 0xe436eb80_524f_11ce_9f53_0020af0ba770;

    /// MPEG-1 audio payload.
    MEDIASUBTYPE_MPEG1_PAYLOAD => "MEDIASUBTYPE_MPEG1Payload" = 0xe436eb81_524f_11ce_9f53_0020af0ba770;

    /// MPEG-2 audio.
    MEDIASUBTYPE_MPEG2_AUDIO => "MEDIASUBTYPE_MPEG2_AUDIO" = 0xe06d802b_db46_11cf_b4d1_00805f6cbbea;

    // DVD

    /// DVD subpicture.
    MEDIASUBTYPE_DVD_SUBPICTURE => "MEDIASUBTYPE_DVD_SUBPICTURE" = 0xe06d802d_db46_11cf_b4d1_00805f6cbbea;

    /// MPEG-2 video.
    MEDIASUBTYPE_MPEG2_VIDEO => "MEDIASUBTYPE_MPEG2_VIDEO" = 0xe06d8026_db46_11cf_b4d1_00805f6cbbea;

    /// Sony Dynamic Digital Sound audio.
    MEDIASUBTYPE_SDDS => "MEDIASUBTYPE_SDDS" = 0xe06d8034_db46_11cf_b4d1_00805f6cbbea;

    // Line 21

    /// Line 21 data as byte pairs.
    MEDIASUBTYPE_LINE21_BYTE_PAIR => "MEDIASUBTYPE_Line21_BytePair" = 0x6e8d4a22_310c_11d0_b79a_00aa003767a7;

    /// Line 21 data in a DVD GOP packet.
    MEDIASUBTYPE_LINE21_GOP_PACKET => "MEDIASUBTYPE_Line21_GOPPacket" = 0x6e8d4a23_310c_11d0_b79a_00aa003767a7;

    /// Line 21 data in raw VBI format.
    MEDIASUBTYPE_LINE21_VBI_RAW_DATA => "MEDIASUBTYPE_Line21_VBIRawData" = 0x6e8d4a24_310c_11d0_b79a_00aa003767a7;

    // MPEG-1

    /// MPEG-1 system stream.
    MEDIASUBTYPE_MPEG1_SYSTEM => "MEDIASUBTYPE_MPEG1System" = 0xe436eb84_524f_11ce_9f53_0020af0ba770;

    /// MPEG-1 Video CD stream.
    MEDIASUBTYPE_MPEG1_VIDEO_CD => "MEDIASUBTYPE_MPEG1VideoCD" = 0xe436eb85_524f_11ce_9f53_0020af0ba770;

    /// MPEG-1 video elementary stream.
    MEDIASUBTYPE_MPEG1_VIDEO => "MEDIASUBTYPE_MPEG1Video" = 0xe436eb86_524f_11ce_9f53_0020af0ba770;

    /// MPEG-1 audio elementary stream.
    MEDIASUBTYPE_MPEG1_AUDIO => "MEDIASUBTYPE_MPEG1Audio" = 0xe436eb87_524f_11ce_9f53_0020af0ba770;

    // Uncompressed RGB

    /// 8-bit palettized RGB.
    MEDIASUBTYPE_RGB8 => "MEDIASUBTYPE_RGB8" = 0xe436eb7a_524f_11ce_9f53_0020af0ba770;

    /// 16-bit RGB, 5-6-5.
    MEDIASUBTYPE_RGB565 => "MEDIASUBTYPE_RGB565" = 0xe436eb7b_524f_11ce_9f53_0020af0ba770;

    /// 16-bit RGB, 5-5-5.
    MEDIASUBTYPE_RGB555 => "MEDIASUBTYPE_RGB555" = 0xe436eb7c_524f_11ce_9f53_0020af0ba770;

    /// 24-bit RGB.
    MEDIASUBTYPE_RGB24 => "MEDIASUBTYPE_RGB24" = 0xe436eb7d_524f_11ce_9f53_0020af0ba770;

    /// 32-bit RGB, unused alpha.
    MEDIASUBTYPE_RGB32 => "MEDIASUBTYPE_RGB32" = 0xe436eb7e_524f_11ce_9f53_0020af0ba770;

    /// 32-bit RGB with alpha.
    MEDIASUBTYPE_ARGB32 => "MEDIASUBTYPE_ARGB32" = 0x773c9ac0_3274_11d0_b724_00aa006c1a01;

    // YUV

    /// 4:2:0, Y plane followed by interleaved UV.
    MEDIASUBTYPE_NV12 => "MEDIASUBTYPE_NV12" = 0x3231564e_0000_0010_8000_00aa00389b71;

    /// 4:2:0 planar, Y then V then U.
    MEDIASUBTYPE_YV12 => "MEDIASUBTYPE_YV12" = 0x32315659_0000_0010_8000_00aa00389b71;

    /// 4:2:2 packed, Y0 U Y1 V.
    MEDIASUBTYPE_YUY2 => "MEDIASUBTYPE_YUY2" = 0x32595559_0000_0010_8000_00aa00389b71;

    /// 4:2:2 packed, U Y0 V Y1.
    MEDIASUBTYPE_UYVY => "MEDIASUBTYPE_UYVY" = 0x59565955_0000_0010_8000_00aa00389b71;

    /// 4:2:0 planar, Y then U then V.
    MEDIASUBTYPE_I420 => "MEDIASUBTYPE_I420" = 0x30323449_0000_0010_8000_00aa00389b71;

    /// Same layout as I420.
    MEDIASUBTYPE_IYUV => "MEDIASUBTYPE_IYUV" = 0x56555949_0000_0010_8000_00aa00389b71;

    // Compressed video

    /// H.264 Annex B byte stream.
    MEDIASUBTYPE_H264 => "MEDIASUBTYPE_H264" = 0x34363248_0000_0010_8000_00aa00389b71;

    /// H.264 with length-prefixed NAL units.
    MEDIASUBTYPE_AVC1 => "MEDIASUBTYPE_AVC1" = 0x31435641_0000_0010_8000_00aa00389b71;

    /// Motion JPEG.
    MEDIASUBTYPE_MJPG => "MEDIASUBTYPE_MJPG" = 0x47504a4d_0000_0010_8000_00aa00389b71;
}
