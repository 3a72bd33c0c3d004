//! Post domain entity
//!
//! A post (tweet) from a user's timeline, plus the references it makes to
//! other posts. Filtering by reference kind lives here too.

use serde::{Deserialize, Deserializer, Serialize};

/// Helper to deserialize null as default (empty vec, etc.)
pub(crate) fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// A single post from a user's timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub text: String,
    #[serde(
        rename = "referenced_tweets",
        default,
        deserialize_with = "deserialize_null_default"
    )]
    pub references: Vec<PostReference>,
}

/// A relationship from one post to another
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostReference {
    #[serde(rename = "type")]
    pub kind: ReferenceKind,
    pub id: String,
}

/// Kind of relationship a post has to the post it references
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    RepliedTo,
    Retweeted,
    Quoted,
    #[serde(untagged)]
    Other(String),
}

/// Which kinds of related posts a feed should keep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InclusionOptions {
    pub include_replies: bool,
    pub include_retweets: bool,
    pub include_quote_tweets: bool,
}

impl InclusionOptions {
    /// Whether a single reference is allowed under these options.
    /// Kinds without a matching flag are always allowed.
    pub fn allows(&self, kind: &ReferenceKind) -> bool {
        match kind {
            ReferenceKind::RepliedTo => self.include_replies,
            ReferenceKind::Retweeted => self.include_retweets,
            ReferenceKind::Quoted => self.include_quote_tweets,
            ReferenceKind::Other(_) => true,
        }
    }

    /// A post is kept when every one of its references is allowed.
    /// Posts with no references are always kept.
    pub fn keeps(&self, post: &Post) -> bool {
        post.references.iter().all(|r| self.allows(&r.kind))
    }
}
