// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! HTTPS connector for the Reddit API.
//!
//! Service structures in this module provide a low-level way to interact
//! with the Reddit API over HTTPS, essentially a specialized HTTPS client
//! specifically for Reddit.

use crate::http::{HTTPError, HTTPResult, HTTPService};
use log::debug;
use reqwest::blocking::Client;

/// A service for retrieving information about subreddits.
///
/// Using this trait, clients can implement different ways of connecting
/// to the Reddit API, such as an actual connector for production code,
/// and a mocked connector for testing purposes.
pub trait Service {
    /// Performs a GET request to the `resource` associated with the given
    /// `subreddit` and returns the raw response body.
    ///
    /// `after` is the pagination cursor for paginated resources; pass
    /// `None` to retrieve the first page. Non-paginated resources ignore
    /// it.
    fn get_resource(
        &self,
        subreddit: &str,
        resource: &str,
        after: Option<&str>,
    ) -> HTTPResult<String>;
}

/// A service that contacts the Reddit API directly to retrieve information.
pub struct RedditService {
    client: Client,
}

impl HTTPService for RedditService {}

impl Default for RedditService {
    /// Creates a new Reddit service.
    fn default() -> Self {
        let client = Self::client();
        Self { client }
    }
}

impl RedditService {
    fn query_string(&self, resource: &str, after: Option<&str>) -> String {
        match resource {
            "hot" => match after {
                Some(after) => format!("?limit=100&after={after}"),
                None => String::from("?limit=100"),
            },
            _ => String::new(),
        }
    }

    fn uri(&self, subreddit: &str, resource: &str, after: Option<&str>) -> String {
        let qs = self.query_string(resource, after);
        format!("https://www.reddit.com/r/{subreddit}/{resource}.json{qs}")
    }

    /// Sends a GET request to a Reddit API endpoint and returns the raw body.
    fn get(&self, uri: &str) -> HTTPResult<String> {
        debug!("GET {uri}");
        let resp = self.client.get(uri).send().map_err(HTTPError::Request)?;

        if !resp.status().is_success() {
            debug!("GET {uri} returned {}", resp.status());
            Err(HTTPError::Http(resp.status()))
        } else {
            resp.text().map_err(HTTPError::Body)
        }
    }
}

impl Service for RedditService {
    fn get_resource(
        &self,
        subreddit: &str,
        resource: &str,
        after: Option<&str>,
    ) -> HTTPResult<String> {
        let uri = self.uri(subreddit, resource, after);
        self.get(&uri)
    }
}
