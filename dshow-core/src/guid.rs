//! 128-bit identifiers
//!
//! `Guid` has the exact in-memory layout of the Win32 `GUID` structure so it
//! can be embedded in `#[repr(C)]` layouts and passed by pointer across the
//! COM boundary.

use std::fmt;
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// A globally unique identifier (`GUID` / `IID` / `CLSID`).
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Pod, Zeroable)]
pub struct Guid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

/// Base of every FOURCC / WAVE_FORMAT derived subtype:
/// `XXXXXXXX-0000-0010-8000-00AA00389B71`.
const FOURCC_BASE: u128 = 0x00000000_0000_0010_8000_00aa00389b71;

impl Guid {
    /// `GUID_NULL`.
    pub const NULL: Guid = Guid::from_u128(0);

    /// Build from the canonical hex spelling, e.g.
    /// `Guid::from_u128(0x56a86891_0ad4_11ce_b03a_0020af0ba770)`.
    pub const fn from_u128(value: u128) -> Self {
        Self {
            data1: (value >> 96) as u32,
            data2: (value >> 80 & 0xffff) as u16,
            data3: (value >> 64 & 0xffff) as u16,
            data4: (value as u64).to_be_bytes(),
        }
    }

    pub const fn from_fields(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        Self {
            data1,
            data2,
            data3,
            data4,
        }
    }

    /// Subtype GUID for a FOURCC code or a `WAVE_FORMAT_*` tag.
    pub const fn from_fourcc(code: u32) -> Self {
        Self::from_u128(FOURCC_BASE | (code as u128) << 96)
    }

    pub const fn to_u128(&self) -> u128 {
        (self.data1 as u128) << 96
            | (self.data2 as u128) << 80
            | (self.data3 as u128) << 64
            | u64::from_be_bytes(self.data4) as u128
    }

    pub const fn is_null(&self) -> bool {
        self.to_u128() == 0
    }

    /// The FOURCC code if this GUID sits on the FOURCC base.
    pub const fn fourcc(&self) -> Option<u32> {
        if self.to_u128() & !(0xffff_ffff_u128 << 96) == FOURCC_BASE {
            Some(self.data1)
        } else {
            None
        }
    }

    /// Native byte layout (first three fields little-endian).
    pub fn to_bytes(&self) -> [u8; 16] {
        let mut out = [0u8; 16];
        out[0..4].copy_from_slice(&self.data1.to_le_bytes());
        out[4..6].copy_from_slice(&self.data2.to_le_bytes());
        out[6..8].copy_from_slice(&self.data3.to_le_bytes());
        out[8..16].copy_from_slice(&self.data4);
        out
    }

    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        let mut data4 = [0u8; 8];
        data4.copy_from_slice(&bytes[8..16]);
        Self {
            data1: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            data2: u16::from_le_bytes([bytes[4], bytes[5]]),
            data3: u16::from_le_bytes([bytes[6], bytes[7]]),
            data4,
        }
    }
}

/// Build a FOURCC code from its four ASCII characters.
pub const fn fourcc(code: &[u8; 4]) -> u32 {
    u32::from_le_bytes(*code)
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{:08X}-{:04X}-{:04X}-{:02X}{:02X}-{:02X}{:02X}{:02X}{:02X}{:02X}{:02X}}}",
            self.data1,
            self.data2,
            self.data3,
            self.data4[0],
            self.data4[1],
            self.data4[2],
            self.data4[3],
            self.data4[4],
            self.data4[5],
            self.data4[6],
            self.data4[7],
        )
    }
}

impl fmt::Debug for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Guid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidGuid(s.to_string());

        let trimmed = s.trim();
        let body = match trimmed.strip_prefix('{') {
            Some(rest) => rest.strip_suffix('}').ok_or_else(invalid)?,
            None if trimmed.ends_with('}') => return Err(invalid()),
            None => trimmed,
        };

        let groups: Vec<&str> = body.split('-').collect();
        let lengths = [8, 4, 4, 4, 12];
        if groups.len() != lengths.len()
            || groups
                .iter()
                .zip(lengths)
                .any(|(g, len)| g.len() != len || !g.bytes().all(|b| b.is_ascii_hexdigit()))
        {
            return Err(invalid());
        }

        let hex: String = groups.concat();
        let value = u128::from_str_radix(&hex, 16).map_err(|_| invalid())?;
        Ok(Guid::from_u128(value))
    }
}

impl Serialize for Guid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Guid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
