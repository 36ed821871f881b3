// SPDX-License-Identifier: GPL-3.0-or-later

//! Searchable entity kinds and the WS2 XML envelopes they arrive in.
//!
//! Every search answer has the same shape:
//! `<metadata created=".."><{kind}-list count=".." offset=".."><{kind}/>...</{kind}-list></metadata>`.
//! Only the element names differ, so each kind gets its own envelope type
//! generated by `search_envelope!` and converted into [`SearchResponse`].

use std::fmt;

use serde::Deserialize;

use crate::models::{Artist, Release, ReleaseGroup, SearchResponse, Tag};

/// The closed set of entity kinds the search server indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
    Artist,
    Release,
    ReleaseGroup,
    Tag,
}

impl SearchKind {
    pub const ALL: [SearchKind; 4] = [
        SearchKind::Artist,
        SearchKind::Release,
        SearchKind::ReleaseGroup,
        SearchKind::Tag,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Artist => "artist",
            Self::Release => "release",
            Self::ReleaseGroup => "release-group",
            Self::Tag => "tag",
        }
    }

    /// Path relative to the service root.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Artist => "/artist",
            Self::Release => "/release",
            Self::ReleaseGroup => "/release-group",
            Self::Tag => "/tag",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

mod sealed {
    pub trait Sealed {}
}

/// An entity that can be searched for. Implemented for [`Artist`],
/// [`Release`], [`ReleaseGroup`] and [`Tag`] only.
pub trait SearchEntity: sealed::Sealed + Sized {
    const KIND: SearchKind;

    /// Decode a complete WS2 search document for this kind.
    fn decode_search(xml: &str) -> Result<SearchResponse<Self>, quick_xml::DeError>;
}

macro_rules! search_envelope {
    ($entity:ty, $kind:expr, $envelope:ident, $list:ident, $list_tag:literal, $item_tag:literal) => {
        #[derive(Debug, Deserialize)]
        struct $envelope {
            #[serde(rename = "@created")]
            created: Option<String>,
            #[serde(rename = $list_tag)]
            list: $list,
        }

        #[derive(Debug, Deserialize)]
        struct $list {
            #[serde(rename = "@count", default)]
            count: u32,
            #[serde(rename = "@offset", default)]
            offset: u32,
            #[serde(rename = $item_tag, default)]
            items: Vec<$entity>,
        }

        impl $envelope {
            fn into_response(self) -> SearchResponse<$entity> {
                SearchResponse {
                    created: self.created,
                    count: self.list.count,
                    offset: self.list.offset,
                    results: self.list.items,
                }
            }
        }

        impl sealed::Sealed for $entity {}

        impl SearchEntity for $entity {
            const KIND: SearchKind = $kind;

            fn decode_search(xml: &str) -> Result<SearchResponse<Self>, quick_xml::DeError> {
                quick_xml::de::from_str::<$envelope>(xml).map($envelope::into_response)
            }
        }
    };
}

search_envelope!(Artist, SearchKind::Artist, ArtistMetadata, ArtistList, "artist-list", "artist");
search_envelope!(Release, SearchKind::Release, ReleaseMetadata, ReleaseList, "release-list", "release");
search_envelope!(
    ReleaseGroup,
    SearchKind::ReleaseGroup,
    ReleaseGroupMetadata,
    ReleaseGroupList,
    "release-group-list",
    "release-group"
);
search_envelope!(Tag, SearchKind::Tag, TagMetadata, TagList, "tag-list", "tag");

#[cfg(test)]
mod tests {
    use super::*;

    const TAG_SEARCH: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
        <metadata created="2014-06-22T09:14:07.046Z" xmlns="http://musicbrainz.org/ns/mmd-2.0#" xmlns:ext="http://musicbrainz.org/ns/ext#-2.0">
            <tag-list count="2" offset="0">
                <tag ext:score="100"><name>shoegaze</name></tag>
                <tag ext:score="62"><name>nu gaze</name></tag>
            </tag-list>
        </metadata>"#;

    #[test]
    fn endpoints_match_kind_names() {
        for kind in SearchKind::ALL {
            assert_eq!(kind.endpoint(), format!("/{}", kind));
        }
    }

    #[test]
    fn entity_kinds_are_wired_to_their_endpoints() {
        assert_eq!(Artist::KIND.endpoint(), "/artist");
        assert_eq!(Release::KIND.endpoint(), "/release");
        assert_eq!(ReleaseGroup::KIND.endpoint(), "/release-group");
        assert_eq!(Tag::KIND.endpoint(), "/tag");
    }

    #[test]
    fn decodes_tag_search_document() {
        let response = Tag::decode_search(TAG_SEARCH).unwrap();

        assert_eq!(response.created.as_deref(), Some("2014-06-22T09:14:07.046Z"));
        assert_eq!(response.count, 2);
        assert_eq!(response.offset, 0);
        assert_eq!(
            response.results,
            vec![
                Tag {
                    score: Some(100),
                    name: "shoegaze".to_string()
                },
                Tag {
                    score: Some(62),
                    name: "nu gaze".to_string()
                },
            ]
        );
    }

    #[test]
    fn empty_list_decodes_to_no_results() {
        let xml = r#"<metadata><release-list count="0" offset="25"/></metadata>"#;

        let response = Release::decode_search(xml).unwrap();

        assert_eq!(response.count, 0);
        assert_eq!(response.offset, 25);
        assert!(response.results.is_empty());
    }

    #[test]
    fn document_for_another_kind_is_rejected() {
        assert!(Artist::decode_search(TAG_SEARCH).is_err());
    }

    #[test]
    fn malformed_documents_are_rejected() {
        for body in ["", "not xml at all", "<metadata><artist-list count=\"x\">"] {
            assert!(Artist::decode_search(body).is_err(), "accepted {body:?}");
        }
    }
}
