//! Format block types (`FORMAT_*`)
//!
//! The `formattype` field of a media type names the structure `pbFormat`
//! points at.

use super::Category;

identifier_table! {
    FORMAT_TYPES: Category::FormatType;

    /// No format block.
    FORMAT_NONE => "FORMAT_None" = 0x0f6417d6_c318_11d0_a43f_00a0c9223196;

    /// `VIDEOINFOHEADER`.
    FORMAT_VIDEO_INFO => "FORMAT_VideoInfo" = 0x05589f80_c356_11ce_bf01_00aa0055595a;

    /// `VIDEOINFOHEADER2`.
    FORMAT_VIDEO_INFO2 => "FORMAT_VideoInfo2" = 0xf72a76a0_eb0a_11d0_ace4_0000c0cc16ba;

    /// `WAVEFORMATEX`.
    FORMAT_WAVE_FORMAT_EX => "FORMAT_WaveFormatEx" = 0x05589f81_c356_11ce_bf01_00aa0055595a;

    /// `MPEG1VIDEOINFO`.
    FORMAT_MPEG_VIDEO => "FORMAT_MPEGVideo" = 0x05589f82_c356_11ce_bf01_00aa0055595a;

    /// MPEG-1 system stream format block.
    FORMAT_MPEG_STREAMS => "FORMAT_MPEGStreams" = 0x05589f83_c356_11ce_bf01_00aa0055595a;

    /// `DVINFO`.
    FORMAT_DV_INFO => "FORMAT_DvInfo" = 0x05589f84_c356_11ce_bf01_00aa0055595a;

    /// `MPEG2VIDEOINFO`.
    FORMAT_MPEG2_VIDEO => "FORMAT_MPEG2Video" = 0xe06d80e3_db46_11cf_b4d1_00805f6cbbea;
}
