//! Identifier catalog
//!
//! Well-known DirectShow GUIDs, transcribed from the Windows 10 SDK headers
//! (`uuids.h`, `ksuuids.h`, `wmcodecdsp.h`, `perfstruct.h`, `strmif.h`).
//! Each table module exposes the values as `pub const` items for compile-time
//! use, and as a static slice of [`IdentifierEntry`] for lookup by name.
//!
//! Deprecated identifiers stay in the tables forever. Their constants carry
//! `#[deprecated]` so the compiler flags every use, and [`Catalog::resolve`]
//! logs a warning.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::config::{self, DeprecationPolicy};
use crate::error::{Error, Result};
use crate::guid::Guid;

/// Declares a table of identifiers.
///
/// Each entry becomes a `pub const` and a row of the static table. An entry
/// may carry `#[deprecated = "note"]`, optionally followed by `#[forbidden]`
/// for identifiers the SDK says must not be used at all.
macro_rules! identifier_table {
    (@deprecation) => { None };
    (@deprecation $note:literal) => {
        Some($crate::catalog::Deprecation {
            severity: $crate::catalog::Severity::Obsolete,
            note: $note,
        })
    };
    (@deprecation $note:literal $forbid:ident) => {
        Some($crate::catalog::Deprecation {
            severity: $crate::catalog::Severity::Forbidden,
            note: $note,
        })
    };

    (
        $(#[$table_meta:meta])*
        $table:ident: $category:expr;
        $(
            $(#[doc = $doc:literal])*
            $(#[deprecated = $note:literal] $(#[$forbid:ident])?)?
            $konst:ident => $name:literal = $value:literal;
        )*
    ) => {
        $(
            $(#[doc = $doc])*
            $(#[deprecated(note = $note)])?
            pub const $konst: $crate::guid::Guid = $crate::guid::Guid::from_u128($value);
        )*

        $(#[$table_meta])*
        #[allow(deprecated)]
        pub static $table: &[$crate::catalog::IdentifierEntry] = &[
            $(
                $crate::catalog::IdentifierEntry {
                    name: $name,
                    value: $konst,
                    category: $category,
                    summary: concat!($($doc, )*),
                    deprecation: identifier_table!(@deprecation $($note $($forbid)?)?),
                },
            )*
        ];
    };
}

pub mod format_type;
pub mod interface_id;
pub mod media_subtype;
pub mod media_type;
pub mod time_format;
pub mod trace_event;

/// Version of the SDK headers the tables were transcribed from.
pub const CATALOG_VERSION: &str = "10.0.17763";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    MajorType,
    Subtype,
    FormatType,
    TimeFormat,
    TraceEvent,
    InterfaceId,
    ClassId,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::MajorType,
        Category::Subtype,
        Category::FormatType,
        Category::TimeFormat,
        Category::TraceEvent,
        Category::InterfaceId,
        Category::ClassId,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MajorType => "major_type",
            Self::Subtype => "subtype",
            Self::FormatType => "format_type",
            Self::TimeFormat => "time_format",
            Self::TraceEvent => "trace_event",
            Self::InterfaceId => "interface_id",
            Self::ClassId => "class_id",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Superseded, still accepted by the platform.
    Obsolete,
    /// The SDK says "do not use". Still resolvable.
    Forbidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Deprecation {
    pub severity: Severity,
    pub note: &'static str,
}

/// One row of an identifier table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IdentifierEntry {
    /// SDK spelling, e.g. `MEDIATYPE_Video`.
    pub name: &'static str,
    pub value: Guid,
    pub category: Category,
    #[serde(serialize_with = "serialize_summary")]
    pub summary: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation: Option<Deprecation>,
}

fn serialize_summary<S: serde::Serializer>(
    summary: &&'static str,
    s: S,
) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_str(summary.trim())
}

impl IdentifierEntry {
    pub fn is_deprecated(&self) -> bool {
        self.deprecation.is_some()
    }

    pub fn summary(&self) -> &'static str {
        self.summary.trim()
    }
}

/// Every built-in table, in catalog order.
pub fn builtin_tables() -> [&'static [IdentifierEntry]; 7] {
    [
        media_type::MAJOR_TYPES,
        media_subtype::SUBTYPES,
        format_type::FORMAT_TYPES,
        time_format::TIME_FORMATS,
        trace_event::TRACE_EVENTS,
        interface_id::INTERFACE_IDS,
        interface_id::CLASS_IDS,
    ]
}

/// Serializable snapshot of the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogExport {
    pub version: &'static str,
    pub entries: Vec<IdentifierEntry>,
}

/// Merged, indexed view over identifier tables.
pub struct Catalog {
    entries: Vec<&'static IdentifierEntry>,
    by_name: HashMap<&'static str, usize>,
    by_value: HashMap<(Category, Guid), usize>,
    warned: Mutex<HashSet<&'static str>>,
}

impl Catalog {
    /// Merge tables into one catalog.
    ///
    /// A name declared more than once must carry the same value every time;
    /// repeats are folded into the first declaration.
    pub fn from_tables(tables: &[&'static [IdentifierEntry]]) -> Result<Self> {
        let (catalog, conflicts) = Self::merge(tables);
        match conflicts.into_iter().next() {
            Some(conflict) => Err(conflict),
            None => Ok(catalog),
        }
    }

    /// Catalog of the built-in tables.
    pub fn builtin() -> Self {
        let (catalog, conflicts) = Self::merge(&builtin_tables());
        for conflict in conflicts {
            tracing::error!("{}; keeping the first declaration", conflict);
        }
        catalog
    }

    fn merge(tables: &[&'static [IdentifierEntry]]) -> (Self, Vec<Error>) {
        let mut catalog = Self {
            entries: Vec::new(),
            by_name: HashMap::new(),
            by_value: HashMap::new(),
            warned: Mutex::new(HashSet::new()),
        };
        let mut conflicts = Vec::new();

        for entry in tables.iter().flat_map(|table| table.iter()) {
            if let Some(&index) = catalog.by_name.get(entry.name) {
                let first = catalog.entries[index];
                if first.value != entry.value || first.category != entry.category {
                    conflicts.push(Error::ConflictingIdentifier {
                        category: entry.category,
                        name: entry.name,
                        first: first.value,
                        second: entry.value,
                    });
                } else {
                    tracing::debug!(name = entry.name, "folding duplicate identifier");
                }
                continue;
            }

            let index = catalog.entries.len();
            catalog.entries.push(entry);
            catalog.by_name.insert(entry.name, index);
            catalog.by_value.entry((entry.category, entry.value)).or_insert(index);
        }

        (catalog, conflicts)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up by SDK name across all categories.
    pub fn find(&self, name: &str) -> Option<&'static IdentifierEntry> {
        self.by_name.get(name).map(|&i| self.entries[i])
    }

    pub fn lookup(&self, category: Category, name: &str) -> Option<&'static IdentifierEntry> {
        self.find(name).filter(|e| e.category == category)
    }

    pub fn by_value(&self, category: Category, value: &Guid) -> Option<&'static IdentifierEntry> {
        self.by_value.get(&(category, *value)).map(|&i| self.entries[i])
    }

    /// Entries of one category in declaration order.
    pub fn entries(&self, category: Category) -> impl Iterator<Item = &'static IdentifierEntry> + '_ {
        self.entries.iter().copied().filter(move |e| e.category == category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static IdentifierEntry> + '_ {
        self.entries.iter().copied()
    }

    /// Look up by name, reporting deprecated entries per the configured policy.
    pub fn resolve(&self, name: &str) -> Option<Guid> {
        self.resolve_with(name, config::config().deprecation)
    }

    pub fn resolve_with(&self, name: &str, policy: DeprecationPolicy) -> Option<Guid> {
        let entry = self.find(name)?;

        if let Some(deprecation) = entry.deprecation {
            let warn = match policy {
                DeprecationPolicy::Warn => true,
                DeprecationPolicy::WarnOnce => self.warned.lock().insert(entry.name),
                DeprecationPolicy::Silent => false,
            };
            if warn {
                tracing::warn!(
                    name = entry.name,
                    severity = ?deprecation.severity,
                    "deprecated identifier resolved: {}",
                    deprecation.note
                );
            }
        }

        Some(entry.value)
    }

    pub fn export(&self) -> CatalogExport {
        CatalogExport {
            version: CATALOG_VERSION,
            entries: self.entries.iter().map(|&e| *e).collect(),
        }
    }
}

static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::builtin);

/// The process-wide catalog of built-in identifiers.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace_capture::capture;
    use tracing::Level;

    #[test]
    fn test_builtin_tables_merge_cleanly() {
        let catalog = Catalog::from_tables(&builtin_tables()).unwrap();
        let total: usize = builtin_tables().iter().map(|t| t.len()).sum();
        assert_eq!(catalog.len(), total);
    }

    #[test]
    fn test_identical_duplicate_is_folded() {
        // The same table twice behaves like two namespaces declaring the same constants.
        let catalog = Catalog::from_tables(&[media_subtype::SUBTYPES, media_subtype::SUBTYPES]).unwrap();
        assert_eq!(catalog.len(), media_subtype::SUBTYPES.len());
    }

    #[test]
    fn test_conflicting_duplicate_is_rejected() {
        static BAD: &[IdentifierEntry] = &[IdentifierEntry {
            name: "MEDIASUBTYPE_PCM",
            value: Guid::from_u128(0x00000002_0000_0010_8000_00aa00389b71),
            category: Category::Subtype,
            summary: "",
            deprecation: None,
        }];

        let err = Catalog::from_tables(&[media_subtype::SUBTYPES, BAD]).err().unwrap();
        match err {
            Error::ConflictingIdentifier { name, first, second, .. } => {
                assert_eq!(name, "MEDIASUBTYPE_PCM");
                assert_eq!(first, media_subtype::MEDIASUBTYPE_PCM);
                assert_eq!(second, BAD[0].value);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_none_subtype_is_null() {
        let entry = catalog().lookup(Category::Subtype, "MEDIASUBTYPE_None").unwrap();
        assert!(entry.value.is_null());
        assert_eq!(entry.value, Guid::NULL);
    }

    #[test]
    #[allow(deprecated)]
    fn test_deprecated_entries_still_resolve() {
        let catalog = catalog();
        for (name, value) in [
            ("MEDIATYPE_File", media_type::MEDIATYPE_FILE),
            ("MEDIATYPE_LMRT", media_type::MEDIATYPE_LMRT),
            ("MEDIATYPE_URL_STREAM", media_type::MEDIATYPE_URL_STREAM),
        ] {
            let entry = catalog.find(name).unwrap();
            assert!(entry.is_deprecated(), "{name} lost its marker");
            assert_eq!(catalog.resolve_with(name, DeprecationPolicy::Silent), Some(value));
            assert_eq!(catalog.resolve_with(name, DeprecationPolicy::WarnOnce), Some(value));
            assert_eq!(catalog.resolve_with(name, DeprecationPolicy::WarnOnce), Some(value));
        }

        assert_eq!(
            catalog.find("MEDIATYPE_LMRT").unwrap().deprecation.unwrap().severity,
            Severity::Forbidden
        );
        assert_eq!(
            catalog.find("MEDIATYPE_File").unwrap().deprecation.unwrap().severity,
            Severity::Obsolete
        );
    }

    #[test]
    fn test_warn_once_tracks_names() {
        let catalog = Catalog::builtin();
        catalog.resolve_with("MEDIATYPE_File", DeprecationPolicy::WarnOnce);
        catalog.resolve_with("MEDIATYPE_File", DeprecationPolicy::WarnOnce);
        catalog.resolve_with("MEDIATYPE_Video", DeprecationPolicy::WarnOnce);
        assert_eq!(catalog.warned.lock().len(), 1);
    }

    #[test]
    fn test_deprecated_resolution_warns_per_policy() {
        let catalog = Catalog::builtin();
        let text = capture(Level::WARN, || {
            catalog.resolve_with("MEDIATYPE_File", DeprecationPolicy::Warn);
            catalog.resolve_with("MEDIATYPE_File", DeprecationPolicy::Warn);
        });
        assert_eq!(text.matches("deprecated identifier resolved").count(), 2);
        assert!(text.contains("WARN"));
        assert!(text.contains("name=\"MEDIATYPE_File\""));
        assert!(text.contains("severity=Obsolete"));

        let text = capture(Level::WARN, || {
            catalog.resolve_with("MEDIATYPE_LMRT", DeprecationPolicy::WarnOnce);
            catalog.resolve_with("MEDIATYPE_LMRT", DeprecationPolicy::WarnOnce);
            catalog.resolve_with("MEDIATYPE_File", DeprecationPolicy::Silent);
            catalog.resolve_with("MEDIATYPE_Video", DeprecationPolicy::Warn);
        });
        assert_eq!(text.matches("deprecated identifier resolved").count(), 1);
        assert!(text.contains("MEDIATYPE_LMRT"));
    }

    #[test]
    fn test_lookup_respects_category() {
        let catalog = catalog();
        assert!(catalog.lookup(Category::MajorType, "MEDIATYPE_Video").is_some());
        assert!(catalog.lookup(Category::Subtype, "MEDIATYPE_Video").is_none());
        assert!(catalog.find("MEDIATYPE_Nonexistent").is_none());
    }

    #[test]
    fn test_by_value_reverse_lookup() {
        let catalog = catalog();
        let entry = catalog
            .by_value(Category::InterfaceId, &interface_id::IID_IPIN)
            .unwrap();
        assert_eq!(entry.name, "IID_IPin");

        // GUID_NULL is both MEDIASUBTYPE_None and TIME_FORMAT_NONE.
        assert_eq!(catalog.by_value(Category::Subtype, &Guid::NULL).unwrap().name, "MEDIASUBTYPE_None");
        assert_eq!(
            catalog.by_value(Category::TimeFormat, &Guid::NULL).unwrap().name,
            "TIME_FORMAT_NONE"
        );
    }

    #[test]
    fn test_every_entry_round_trips() {
        for entry in catalog().iter() {
            let text = entry.value.to_string();
            assert_eq!(text.parse::<Guid>().unwrap(), entry.value, "{}", entry.name);

            let json = serde_json::to_string(&entry.value).unwrap();
            assert_eq!(serde_json::from_str::<Guid>(&json).unwrap(), entry.value, "{}", entry.name);

            assert_eq!(Guid::from_bytes(entry.value.to_bytes()), entry.value, "{}", entry.name);
        }
    }

    #[test]
    fn test_names_carry_category_prefix() {
        for entry in catalog().iter() {
            let prefix = match entry.category {
                Category::MajorType => "MEDIATYPE_",
                Category::Subtype => "MEDIASUBTYPE_",
                Category::FormatType => "FORMAT_",
                Category::TimeFormat => "TIME_FORMAT_",
                Category::TraceEvent => "GUID_",
                Category::InterfaceId => "IID_",
                Category::ClassId => "CLSID_",
            };
            assert!(entry.name.starts_with(prefix), "{} in {}", entry.name, entry.category);
        }
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("subtype".parse::<Category>().unwrap(), Category::Subtype);
        assert_eq!("MAJOR_TYPE".parse::<Category>().unwrap(), Category::MajorType);
        assert!("codec".parse::<Category>().is_err());
    }

    #[test]
    fn test_export_serializes() {
        let export = catalog().export();
        assert_eq!(export.entries.len(), catalog().len());

        let json = serde_json::to_value(&export).unwrap();
        assert_eq!(json["version"], CATALOG_VERSION);
        let video = json["entries"]
            .as_array()
            .unwrap()
            .iter()
            .find(|e| e["name"] == "MEDIATYPE_Video")
            .unwrap();
        assert_eq!(video["value"], "{73646976-0000-0010-8000-00AA00389B71}");
        assert_eq!(video["category"], "major_type");
        assert!(video.get("deprecation").is_none());
    }
}
