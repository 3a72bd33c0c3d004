//! Feed renderer
//!
//! Renders a user's posts as an RSS 2.0 document.

use super::escape::xml_escape;
use crate::domain::entities::Post;

/// The parts of a post that end up in the feed
#[derive(Debug, Clone, PartialEq)]
pub struct FeedEntry {
    pub id: String,
    pub text: String,
}

impl From<&Post> for FeedEntry {
    fn from(post: &Post) -> Self {
        FeedEntry {
            id: post.id.clone(),
            text: post.text.clone(),
        }
    }
}

/// An RSS channel. All fields hold XML-escaped text.
#[derive(Debug, Clone, PartialEq)]
pub struct Feed {
    pub title: String,
    pub link: String,
    pub description: String,
    pub items: Vec<FeedItem>,
}

/// An RSS item. All fields hold XML-escaped text.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedItem {
    pub guid: String,
    pub link: String,
    pub description: String,
}

impl Feed {
    pub fn new(username: &str, entries: &[FeedEntry]) -> Self {
        let username = xml_escape(username);

        Feed {
            title: format!("@{}'s tweets", username),
            link: format!("https://twitter.com/{}", username),
            description: format!("Posts from @{} on Twitter", username),
            items: entries.iter().map(FeedItem::from).collect(),
        }
    }

    /// Serialize the channel as an RSS 2.0 document
    pub fn to_rss(&self) -> String {
        let mut buf = String::new();

        buf.push_str("<?xml version=\"1.0\"?>\n");
        buf.push_str("<rss version=\"2.0\">\n");
        buf.push_str("  <channel>\n");
        buf.push_str(&format!("    <title>{}</title>\n", self.title));
        buf.push_str(&format!("    <link>{}</link>\n", self.link));
        buf.push_str(&format!(
            "    <description>{}</description>\n",
            self.description
        ));

        for item in &self.items {
            buf.push_str(&render_item(item));
        }

        buf.push_str("  </channel>\n");
        buf.push_str("</rss>\n");

        buf
    }
}

impl From<&FeedEntry> for FeedItem {
    fn from(entry: &FeedEntry) -> Self {
        let id = xml_escape(&entry.id);

        FeedItem {
            link: format!("https://twitter.com/i/status/{}", id),
            guid: id,
            description: xml_escape(&entry.text),
        }
    }
}

fn render_item(item: &FeedItem) -> String {
    format!(
        "    <item>\n      <guid>{}</guid>\n      <link>{}</link>\n      <description>{}</description>\n    </item>\n",
        item.guid, item.link, item.description
    )
}

/// Render posts as an RSS document for the given username
pub fn render_feed(username: &str, entries: &[FeedEntry]) -> String {
    Feed::new(username, entries).to_rss()
}
