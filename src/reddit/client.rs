// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Clients for reading data from the Reddit API.
//!
//! Everything here is best-effort: the public operations never return an
//! error, because callers have never been able to tell a dead subreddit
//! from an empty one and we are keeping it that way. Failures are logged
//! and collapsed into the operation's "nothing" value (`0` or `None`).

use crate::count::KeywordCounter;
use crate::reddit::service::{RedditService, Service};
use crate::thing::{About, Listing, Post};
use log::warn;

/// A client for reading data about a single subreddit.
///
/// The client is generic over its [`Service`] so that tests can substitute
/// a deterministic connector for the real one.
#[derive(Debug)]
pub struct Subreddit<S> {
    name: String,
    service: S,
}

impl Subreddit<RedditService> {
    /// Creates a new client for the given subreddit, talking to the real
    /// Reddit API.
    ///
    /// `name` should be the subreddit's name, without the `r/` prefix.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_service(name, RedditService::default())
    }
}

impl<S: Service> Subreddit<S> {
    /// Creates a new client for the given subreddit using the given
    /// service implementation to retrieve data.
    pub fn with_service(name: impl Into<String>, service: S) -> Self {
        let name = name.into();
        Self { name, service }
    }

    /// The subreddit's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    // An empty name is the one malformed identifier a &str API can be
    // handed. It short-circuits before any request is made.
    fn is_valid_name(&self) -> bool {
        !self.name.is_empty()
    }

    /// The number of subscribers to the subreddit.
    ///
    /// Returns 0 if the subreddit does not exist, is private, cannot be
    /// reached, or sends back something unreadable. A subreddit that
    /// nobody has subscribed to also returns 0; callers cannot tell the
    /// two apart, and scripts have come to rely on that.
    pub fn subscribers(&self) -> u64 {
        if !self.is_valid_name() {
            return 0;
        }

        let body = match self.service.get_resource(&self.name, "about", None) {
            Ok(body) => body,
            Err(err) => {
                warn!("request for r/{} metadata failed: {err}", self.name);
                return 0;
            }
        };

        match About::parse(&body) {
            Ok(about) => about.subscribers(),
            Err(err) => {
                warn!("r/{} returned unreadable metadata: {err}", self.name);
                0
            }
        }
    }

    /// The titles of every post on the subreddit's hot listing, in
    /// Reddit's ranking order, gathered by walking the listing's pages
    /// until the pagination cursor runs out.
    ///
    /// Returns `None` if the subreddit name is empty, if the listing
    /// cannot be fetched at all, or if the first page is empty. If a
    /// later page cannot be fetched, the titles gathered so far are
    /// returned rather than thrown away. Posts without a title are
    /// skipped.
    pub fn hot_titles(&self) -> Option<Vec<String>> {
        if !self.is_valid_name() {
            return None;
        }

        let mut titles = Vec::new();
        let mut after: Option<String> = None;

        loop {
            let Some(listing) = self.hot_page(after.as_deref()) else {
                return if titles.is_empty() { None } else { Some(titles) };
            };

            if listing.posts().is_empty() {
                return if titles.is_empty() { None } else { Some(titles) };
            }

            titles.extend(
                listing
                    .posts()
                    .iter()
                    .map(Post::title)
                    .filter(|title| !title.is_empty())
                    .map(String::from),
            );

            match listing.after() {
                Some(cursor) => after = Some(cursor.to_string()),
                None => return Some(titles),
            }
        }
    }

    /// Tallies how often each of `keywords` occurs in the titles of the
    /// subreddit's hot posts, across every page of the listing.
    ///
    /// Matching is case-insensitive and token-exact: titles are split on
    /// whitespace and each token is compared to each keyword verbatim,
    /// so `cats!` does not match the keyword `cats`. Keywords that never
    /// match do not appear in the returned counter at all.
    ///
    /// Returns `None` -- no tally, not an empty one -- if the subreddit
    /// name is empty, if any page of the listing cannot be fetched or
    /// read, or if the first page is empty. The tally has always been
    /// all-or-nothing: a partially counted report would be quietly
    /// wrong, so an interrupted traversal reports nothing.
    pub fn tally(&self, keywords: &[String]) -> Option<KeywordCounter> {
        if !self.is_valid_name() {
            return None;
        }

        let mut counter = KeywordCounter::new(keywords);
        let mut after: Option<String> = None;

        loop {
            let first_page = after.is_none();
            let listing = self.hot_page(after.as_deref())?;

            if listing.posts().is_empty() && first_page {
                return None;
            }

            for post in listing.posts() {
                let title = post.title();
                if !title.is_empty() {
                    counter.observe(title);
                }
            }

            match listing.after() {
                Some(cursor) => after = Some(cursor.to_string()),
                None => return Some(counter),
            }
        }
    }

    /// Fetches and parses one page of the hot listing.
    ///
    /// This is the single primitive both traversals are built on: one
    /// request, one parsed page, and any failure -- transport, status,
    /// or an undecodable body -- collapsed into `None` so the caller
    /// stops walking.
    fn hot_page(&self, after: Option<&str>) -> Option<Listing> {
        let body = match self.service.get_resource(&self.name, "hot", after) {
            Ok(body) => body,
            Err(err) => {
                warn!("request for r/{} hot posts failed: {err}", self.name);
                return None;
            }
        };

        match Listing::parse(&body) {
            Ok(listing) => Some(listing),
            Err(err) => {
                warn!("r/{} returned an unreadable hot listing: {err}", self.name);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    mod subscribers {
        use crate::reddit::Subreddit;

        #[test]
        fn it_returns_the_subscriber_count() {
            let actual = Subreddit::test().subscribers();
            assert_eq!(actual, 3400945);
        }

        #[test]
        fn it_is_idempotent_for_a_fixed_service() {
            let subreddit = Subreddit::test();
            assert_eq!(subreddit.subscribers(), subreddit.subscribers());
        }

        #[test]
        fn it_returns_zero_when_the_count_is_missing() {
            let actual = Subreddit::test_empty().subscribers();
            assert_eq!(actual, 0);
        }

        #[test]
        fn it_returns_zero_for_an_unknown_subreddit() {
            let actual = Subreddit::test_unknown().subscribers();
            assert_eq!(actual, 0);
        }

        #[test]
        fn it_returns_zero_for_an_unreadable_response() {
            let actual = Subreddit::test_malformed().subscribers();
            assert_eq!(actual, 0);
        }

        #[test]
        fn it_returns_zero_for_an_empty_name_without_touching_the_network() {
            // The invalid-name service panics if it is ever called.
            let actual = Subreddit::test_invalid().subscribers();
            assert_eq!(actual, 0);
        }
    }

    mod hot_titles {
        use crate::reddit::Subreddit;

        #[test]
        fn it_preserves_order_across_pages() {
            let titles = Subreddit::test().hot_titles().unwrap();
            let expected = vec![
                "Announcing Rust 1.88.0",
                "Why is my borrow checker crying?",
                "Zero-cost abstractions &amp; you",
                "rust rust rust",
                "The state of async rust",
                "Shipping a CLI in rust",
            ];
            assert_eq!(titles, expected);
        }

        #[test]
        fn it_skips_posts_without_a_title() {
            // The first fixture page holds five posts, one untitled.
            let titles = Subreddit::test().hot_titles().unwrap();
            assert_eq!(titles.len(), 6);
        }

        #[test]
        fn it_starts_from_a_fresh_accumulator_on_every_call() {
            let subreddit = Subreddit::test();
            let first = subreddit.hot_titles().unwrap();
            let second = subreddit.hot_titles().unwrap();
            assert_eq!(first, second);
        }

        #[test]
        fn it_keeps_earlier_pages_when_a_later_fetch_fails() {
            let titles = Subreddit::test_partial().hot_titles().unwrap();
            let expected = vec!["Still here", "Going dark at midnight"];
            assert_eq!(titles, expected);
        }

        #[test]
        fn it_returns_none_for_an_empty_first_page() {
            assert!(Subreddit::test_empty().hot_titles().is_none());
        }

        #[test]
        fn it_returns_none_for_an_unknown_subreddit() {
            assert!(Subreddit::test_unknown().hot_titles().is_none());
        }

        #[test]
        fn it_returns_none_for_an_unreadable_response() {
            assert!(Subreddit::test_malformed().hot_titles().is_none());
        }

        #[test]
        fn it_returns_none_for_an_empty_name_without_touching_the_network() {
            assert!(Subreddit::test_invalid().hot_titles().is_none());
        }
    }

    mod tally {
        use crate::count::KeywordCount;
        use crate::reddit::Subreddit;

        fn keywords(words: &[&str]) -> Vec<String> {
            words.iter().map(|w| w.to_string()).collect()
        }

        #[test]
        fn it_counts_keywords_across_every_page() {
            let tally = Subreddit::test()
                .tally(&keywords(&["rust", "cli", "python"]))
                .unwrap();
            let actual: Vec<KeywordCount> = tally.sorted().collect();
            let expected = vec![
                (String::from("rust"), 6),
                (String::from("cli"), 1),
            ];
            assert_eq!(actual, expected);
        }

        #[test]
        fn it_returns_an_empty_tally_when_nothing_matches() {
            let tally = Subreddit::test()
                .tally(&keywords(&["basic", "cobol"]))
                .unwrap();
            assert!(tally.is_empty());
        }

        #[test]
        fn it_reports_nothing_when_a_later_fetch_fails() {
            // Unlike hot_titles, a tally is all-or-nothing: a partial
            // count would silently misreport, so it is discarded.
            let tally = Subreddit::test_partial().tally(&keywords(&["still"]));
            assert!(tally.is_none());
        }

        #[test]
        fn it_returns_none_for_an_empty_first_page() {
            assert!(Subreddit::test_empty().tally(&keywords(&["rust"])).is_none());
        }

        #[test]
        fn it_returns_none_for_an_unknown_subreddit() {
            assert!(Subreddit::test_unknown().tally(&keywords(&["rust"])).is_none());
        }

        #[test]
        fn it_returns_none_for_an_unreadable_response() {
            assert!(Subreddit::test_malformed().tally(&keywords(&["rust"])).is_none());
        }

        #[test]
        fn it_returns_none_for_an_empty_name_without_touching_the_network() {
            assert!(Subreddit::test_invalid().tally(&keywords(&["rust"])).is_none());
        }
    }
}
