// SPDX-License-Identifier: GPL-3.0-or-later

//! MusicBrainz WS2 search client.
//!
//! This crate queries the MusicBrainz search server for artists, releases,
//! release groups and tags, decoding the XML answers into typed results.
//! Every call is a single GET; there is no caching, retrying or rate limiting.

pub mod client;
pub mod error;
pub mod models;
pub mod search;

pub use client::{format_user_agent, MusicBrainzClient, MusicBrainzClientBuilder};
pub use error::{MusicBrainzError, Result};
pub use models::{
    Alias, Area, Artist, ArtistRef, LabelInfo, LabelRef, LifeSpan, ListCount, Medium,
    MediumList, NameCredit, Release, ReleaseEvent, ReleaseGroup, ReleaseGroupRef, ReleaseRef,
    SearchQuery, SearchResponse, Tag, TagRef, TextRepresentation,
};
pub use search::{SearchEntity, SearchKind};
