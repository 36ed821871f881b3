// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Generates a deserializer for WS2 list wrappers such as
/// `<alias-list><alias/>...</alias-list>`, yielding the items directly.
macro_rules! xml_list {
    ($name:ident, $item_tag:literal, $item:ty) => {
        fn $name<'de, D>(deserializer: D) -> std::result::Result<Vec<$item>, D::Error>
        where
            D: Deserializer<'de>,
        {
            #[derive(Deserialize)]
            struct List {
                #[serde(rename = $item_tag, default)]
                items: Vec<$item>,
            }

            List::deserialize(deserializer).map(|list| list.items)
        }
    };
}

xml_list!(alias_list, "alias", Alias);
xml_list!(tag_list, "tag", TagRef);
xml_list!(name_credits, "name-credit", NameCredit);
xml_list!(release_event_list, "release-event", ReleaseEvent);
xml_list!(label_info_list, "label-info", LabelInfo);
xml_list!(secondary_type_list, "secondary-type", String);
xml_list!(release_ref_list, "release", ReleaseRef);

/// Artist information from MusicBrainz.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artist {
    /// MusicBrainz artist ID (MBID).
    #[serde(rename = "@id")]
    pub id: Uuid,
    /// Artist type (e.g., "Person", "Group").
    #[serde(rename = "@type")]
    pub artist_type: Option<String>,
    /// Search score (0-100).
    #[serde(rename = "@score")]
    pub score: Option<u32>,
    /// Artist name.
    pub name: String,
    /// Artist sort name (for sorting).
    #[serde(rename = "sort-name", default)]
    pub sort_name: String,
    pub gender: Option<String>,
    /// Country code (ISO 3166-1 alpha-2).
    pub country: Option<String>,
    pub area: Option<Area>,
    #[serde(rename = "begin-area")]
    pub begin_area: Option<Area>,
    /// Disambiguation comment (e.g., "US hip hop artist").
    pub disambiguation: Option<String>,
    #[serde(rename = "life-span")]
    pub life_span: Option<LifeSpan>,
    #[serde(rename = "alias-list", default, deserialize_with = "alias_list")]
    pub aliases: Vec<Alias>,
    #[serde(rename = "tag-list", default, deserialize_with = "tag_list")]
    pub tags: Vec<TagRef>,
}

/// Release information from MusicBrainz.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Release {
    /// MusicBrainz release ID (MBID).
    #[serde(rename = "@id")]
    pub id: Uuid,
    #[serde(rename = "@score")]
    pub score: Option<u32>,
    pub title: String,
    /// Release status (e.g., "Official", "Bootleg").
    pub status: Option<String>,
    pub packaging: Option<String>,
    #[serde(rename = "text-representation")]
    pub text_representation: Option<TextRepresentation>,
    #[serde(rename = "artist-credit", default, deserialize_with = "name_credits")]
    pub artist_credit: Vec<NameCredit>,
    #[serde(rename = "release-group")]
    pub release_group: Option<ReleaseGroupRef>,
    /// Release date (YYYY, YYYY-MM, or YYYY-MM-DD).
    pub date: Option<String>,
    pub country: Option<String>,
    #[serde(
        rename = "release-event-list",
        default,
        deserialize_with = "release_event_list"
    )]
    pub release_events: Vec<ReleaseEvent>,
    pub barcode: Option<String>,
    pub asin: Option<String>,
    #[serde(rename = "label-info-list", default, deserialize_with = "label_info_list")]
    pub label_info: Vec<LabelInfo>,
    #[serde(rename = "medium-list")]
    pub media: Option<MediumList>,
}

/// Release group ("album") information from MusicBrainz.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReleaseGroup {
    /// MusicBrainz release group ID (MBID).
    #[serde(rename = "@id")]
    pub id: Uuid,
    /// Legacy combined type (e.g., "Album", "Compilation").
    #[serde(rename = "@type")]
    pub group_type: Option<String>,
    #[serde(rename = "@score")]
    pub score: Option<u32>,
    pub title: String,
    /// Primary type (e.g., "Album", "EP", "Single").
    #[serde(rename = "primary-type")]
    pub primary_type: Option<String>,
    /// Secondary types (e.g., ["Compilation", "Live"]).
    #[serde(
        rename = "secondary-type-list",
        default,
        deserialize_with = "secondary_type_list"
    )]
    pub secondary_types: Vec<String>,
    #[serde(rename = "artist-credit", default, deserialize_with = "name_credits")]
    pub artist_credit: Vec<NameCredit>,
    #[serde(rename = "release-list", default, deserialize_with = "release_ref_list")]
    pub releases: Vec<ReleaseRef>,
    #[serde(rename = "tag-list", default, deserialize_with = "tag_list")]
    pub tags: Vec<TagRef>,
}

/// Tag returned by the tag search index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tag {
    #[serde(rename = "@score")]
    pub score: Option<u32>,
    pub name: String,
}

/// Tag attached to another entity, with its vote count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TagRef {
    #[serde(rename = "@count")]
    pub count: Option<u32>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Area {
    #[serde(rename = "@id")]
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(rename = "sort-name")]
    pub sort_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LifeSpan {
    pub begin: Option<String>,
    pub end: Option<String>,
    pub ended: Option<bool>,
}

/// Alternative name of an artist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alias {
    #[serde(rename = "@sort-name")]
    pub sort_name: Option<String>,
    #[serde(rename = "@type")]
    pub alias_type: Option<String>,
    #[serde(rename = "@locale")]
    pub locale: Option<String>,
    #[serde(rename = "$text")]
    pub name: String,
}

/// Artist credit entry (artist contribution to a release).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NameCredit {
    /// Join phrase (e.g., " & ", " feat. ").
    #[serde(rename = "@joinphrase")]
    pub joinphrase: Option<String>,
    /// Name as credited, when it differs from the artist name.
    pub name: Option<String>,
    pub artist: ArtistRef,
}

/// Reference to an artist (minimal info).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtistRef {
    #[serde(rename = "@id")]
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "sort-name")]
    pub sort_name: Option<String>,
    pub disambiguation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReleaseGroupRef {
    #[serde(rename = "@id")]
    pub id: Uuid,
    #[serde(rename = "@type")]
    pub group_type: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "primary-type")]
    pub primary_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReleaseRef {
    #[serde(rename = "@id")]
    pub id: Uuid,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextRepresentation {
    /// ISO 639-3 language code.
    pub language: Option<String>,
    /// ISO 15924 script code.
    pub script: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReleaseEvent {
    pub date: Option<String>,
    pub area: Option<Area>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabelInfo {
    #[serde(rename = "catalog-number")]
    pub catalog_number: Option<String>,
    pub label: Option<LabelRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabelRef {
    #[serde(rename = "@id")]
    pub id: Option<Uuid>,
    pub name: String,
}

/// Media summary of a release as returned by the search index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediumList {
    #[serde(rename = "@count")]
    pub count: Option<u32>,
    /// Total number of tracks across all media.
    #[serde(rename = "track-count")]
    pub track_count: Option<u32>,
    #[serde(rename = "medium", default)]
    pub media: Vec<Medium>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medium {
    /// Medium format (e.g., "CD", "12\" Vinyl").
    pub format: Option<String>,
    #[serde(rename = "disc-list")]
    pub discs: Option<ListCount>,
    #[serde(rename = "track-list")]
    pub tracks: Option<ListCount>,
}

/// A WS2 list element that only carries its size.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListCount {
    #[serde(rename = "@count", default)]
    pub count: u32,
}

/// Search query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Lucene search query string, forwarded verbatim.
    pub query: String,
    /// Maximum number of results (server default 25, max 100).
    pub limit: Option<u32>,
    /// Offset for pagination (server default 0).
    pub offset: Option<u32>,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: None,
            offset: None,
        }
    }

    /// Build a query from integer limit/offset where `-1` selects the server
    /// default. Any other negative value is treated the same way.
    pub fn from_sentinels(query: impl Into<String>, limit: i32, offset: i32) -> Self {
        Self {
            query: query.into(),
            limit: u32::try_from(limit).ok(),
            offset: u32::try_from(offset).ok(),
        }
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Query-string pairs in request order. Unset values are sent empty so the
    /// server applies its own default.
    pub fn query_pairs(&self) -> [(&'static str, String); 3] {
        let number = |value: Option<u32>| value.map(|v| v.to_string()).unwrap_or_default();
        [
            ("query", self.query.clone()),
            ("limit", number(self.limit)),
            ("offset", number(self.offset)),
        ]
    }
}

/// Generic search response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse<T> {
    /// Creation timestamp of the result set.
    pub created: Option<String>,
    /// Total number of matches on the server.
    pub count: u32,
    /// Offset used for this page.
    pub offset: u32,
    /// Results for this page, in server order.
    pub results: Vec<T>,
}
