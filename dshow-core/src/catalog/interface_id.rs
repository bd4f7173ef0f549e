//! Interface and class identifiers
//!
//! IIDs of the interfaces declared in [`crate::interface`] plus the graph
//! interfaces callers usually reach them through, and the CLSIDs of the
//! stock objects used to build a graph.

use super::Category;

identifier_table! {
    /// Interface identifiers (`strmif.h`, `unknwn.h`).
    INTERFACE_IDS: Category::InterfaceId;

    /// `IUnknown`.
    IID_IUNKNOWN => "IID_IUnknown" = 0x00000000_0000_0000_c000_000000000046;

    /// `IPin`, exposed by every input and output pin.
    IID_IPIN => "IID_IPin" = 0x56a86891_0ad4_11ce_b03a_0020af0ba770;

    /// `IEnumPins`.
    IID_IENUM_PINS => "IID_IEnumPins" = 0x56a86892_0ad4_11ce_b03a_0020af0ba770;

    /// `IEnumMediaTypes`, returned by `IPin::EnumMediaTypes`.
    IID_IENUM_MEDIA_TYPES => "IID_IEnumMediaTypes" = 0x89c31040_846b_11ce_97d3_00aa0055595a;

    /// `IBaseFilter`.
    IID_IBASE_FILTER => "IID_IBaseFilter" = 0x56a86895_0ad4_11ce_b03a_0020af0ba770;

    /// `IMediaFilter`.
    IID_IMEDIA_FILTER => "IID_IMediaFilter" = 0x56a86899_0ad4_11ce_b03a_0020af0ba770;

    /// `IReferenceClock`.
    IID_IREFERENCE_CLOCK => "IID_IReferenceClock" = 0x56a86897_0ad4_11ce_b03a_0020af0ba770;

    /// `IFilterGraph`.
    IID_IFILTER_GRAPH => "IID_IFilterGraph" = 0x56a8689f_0ad4_11ce_b03a_0020af0ba770;

    /// `IGraphBuilder`. Applications connect pins through this interface.
    IID_IGRAPH_BUILDER => "IID_IGraphBuilder" = 0x56a868a9_0ad4_11ce_b03a_0020af0ba770;

    /// `IMediaControl`.
    IID_IMEDIA_CONTROL => "IID_IMediaControl" = 0x56a868b1_0ad4_11ce_b03a_0020af0ba770;

    /// `IMediaEvent`.
    IID_IMEDIA_EVENT => "IID_IMediaEvent" = 0x56a868b6_0ad4_11ce_b03a_0020af0ba770;

    /// `IMediaSeeking`.
    IID_IMEDIA_SEEKING => "IID_IMediaSeeking" = 0x36b73880_c2c8_11cf_8b46_00805f6cef60;

    /// `IAMFilterGraphCallback`. The SDK spells the fourth group `b0a3`,
    /// unlike its neighbours.
    IID_IAM_FILTER_GRAPH_CALLBACK => "IID_IAMFilterGraphCallback" = 0x56a868fd_0ad4_11ce_b0a3_0020af0ba770;
}

identifier_table! {
    /// Class identifiers (`uuids.h`, `qedit.h`).
    CLASS_IDS: Category::ClassId;

    /// Filter Graph Manager.
    CLSID_FILTER_GRAPH => "CLSID_FilterGraph" = 0xe436ebb3_524f_11ce_9f53_0020af0ba770;

    /// Filter Graph Manager without a worker thread.
    CLSID_FILTER_GRAPH_NO_THREAD => "CLSID_FilterGraphNoThread" = 0xe436ebb8_524f_11ce_9f53_0020af0ba770;

    /// Sample Grabber filter (`qedit.dll`).
    CLSID_SAMPLE_GRABBER => "CLSID_SampleGrabber" = 0xc1f400a0_3f08_11d3_9f0b_006008039e37;

    /// Null Renderer filter (`qedit.dll`).
    CLSID_NULL_RENDERER => "CLSID_NullRenderer" = 0xc1f400a4_3f08_11d3_9f0b_006008039e37;
}
