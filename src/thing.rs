//! A "thing" in the Reddit sense.
//!
//! Historically in the Reddit API and its old source code, a "Thing" was
//! any element of the Reddit system: users, posts, subreddits, etc. This
//! module encapsulates that idea and provides an easy way to more or less
//! work with JSON data from the Reddit API.
//!
//! Reddit wraps everything in an envelope: a response is an object with a
//! `data` member, and listings nest each post inside another envelope of
//! its own. The types here mirror that nesting so that serde can do the
//! heavy lifting. Fields we care about are defaulted when absent -- Reddit
//! omits fields surprisingly often -- so a _missing_ field is never a parse
//! error; only a body that is not the expected JSON shape at all is.

use serde::Deserialize;
use thiserror::Error;

/// A parse error.
#[derive(Debug, Error)]
pub enum Error {
    /// The response body could not be decoded as JSON of the expected shape.
    #[error("could not parse Reddit response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Subreddit metadata, as returned by `/r/<subreddit>/about.json`.
#[derive(Debug, Deserialize)]
pub struct About {
    #[serde(default)]
    data: AboutData,
}

#[derive(Debug, Default, Deserialize)]
struct AboutData {
    #[serde(default)]
    subscribers: u64,
}

impl About {
    /// Parses a text response from the Reddit API into subreddit metadata.
    ///
    /// `body` is the raw result of a call to `/r/<subreddit>/about.json`.
    pub fn parse(body: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(body)?)
    }

    /// The number of subscribers to the subreddit.
    ///
    /// Defaults to 0 if Reddit did not include a subscriber count in
    /// its response.
    pub fn subscribers(&self) -> u64 {
        self.data.subscribers
    }
}

/// One page of a paginated listing, as returned by `/r/<subreddit>/hot.json`.
///
/// A listing holds an ordered sequence of posts and a cursor pointing at
/// the next page. A `None` cursor means this is the last page.
#[derive(Debug, Deserialize)]
pub struct Listing {
    #[serde(default)]
    data: ListingData,
}

#[derive(Debug, Default, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<Post>,
    #[serde(default)]
    after: Option<String>,
}

/// A post in a subreddit's listing.
#[derive(Debug, Default, Deserialize)]
pub struct Post {
    #[serde(default)]
    data: PostData,
}

#[derive(Debug, Default, Deserialize)]
struct PostData {
    #[serde(default)]
    title: String,
}

impl Listing {
    /// Parses a text response from the Reddit API into a page of posts.
    ///
    /// `body` is the raw result of a call to `/r/<subreddit>/hot.json`.
    pub fn parse(body: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(body)?)
    }

    /// The posts on this page, in Reddit's ranking order.
    pub fn posts(&self) -> &[Post] {
        &self.data.children
    }

    /// The pagination cursor for the page after this one, if there is one.
    pub fn after(&self) -> Option<&str> {
        self.data.after.as_deref()
    }
}

impl Post {
    /// The post's title.
    ///
    /// Empty if Reddit did not include a title in its response.
    pub fn title(&self) -> &str {
        &self.data.title
    }
}
