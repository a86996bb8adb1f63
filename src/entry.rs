#[cfg(feature = "poem")]
use poem_openapi::Object;
#[cfg(feature = "json_schema")]
use schemars::JsonSchema;
use serde::Deserialize;
use serde::Serialize;

/// Display name given to the entry that links one level up.
pub const PARENT_NAME: &str = "../";

/// One child of a listed directory, or the link to its parent.
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[cfg_attr(feature = "poem", derive(Object))]
#[cfg_attr(feature = "poem", oai(rename_all = "camelCase"))]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Hash, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Display name. Directories end with `/`.
    pub name: String,
    /// Url at which the entry is reachable. Directories end with `/`.
    pub url: String,
    /// The size of the underlying object in bytes at listing time.
    pub size: u64,
    /// Last modification time in milliseconds since the Unix epoch.
    pub last_modified: i64,
}

/// The contents of one directory level.
///
/// `directories` and `files` are each sorted by name and together hold
/// every immediate child of the directory exactly once.
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[cfg_attr(feature = "poem", derive(Object))]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Hash, Eq)]
pub struct Listing {
    /// Link one level up, if it was requested.
    pub parent: Option<Entry>,
    /// Subdirectories, sorted by name.
    pub directories: Vec<Entry>,
    /// Everything that is not a directory, sorted by name.
    pub files: Vec<Entry>,
}

pub(crate) fn sort_by_name(entries: &mut [Entry]) {
    entries.sort_by(|a, b| a.name.cmp(&b.name));
}
