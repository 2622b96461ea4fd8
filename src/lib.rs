// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! whatshot is a command-line tool for poking at a subreddit from the
//! terminal. It can report how many subscribers a subreddit has, list the
//! titles of every post currently on the subreddit's "hot" listing (walking
//! Reddit's pagination until it runs out of pages), and tally how often a
//! set of keywords appears in those titles.
//!
//! # Examples
//!
//! (In all examples, replace `rust` with the name of an actual subreddit.)
//!
//! Show the number of subscribers to a subreddit:
//!
//! ```bash
//! whatshot subscribers rust
//! ```
//!
//! List the titles of every hot post in a subreddit:
//!
//! ```bash
//! whatshot hot rust
//! ```
//!
//! List only the first ten hot post titles:
//!
//! ```bash
//! whatshot hot -n 10 rust
//! ```
//!
//! Count how often some keywords appear in a subreddit's hot post titles:
//!
//! ```bash
//! whatshot tally rust compiler borrow async
//! ```
//!
//! Get usage and help for the tool:
//!
//! ```bash
//! whatshot --help
//! ```
//!
//! Keyword matching is case-insensitive but deliberately naive: titles are
//! split on whitespace and tokens are compared exactly, so the keyword
//! `cats` matches the title word `cats` but not `cats!`. If that surprises
//! you, it surprised us too, but it is how the tool has always behaved and
//! scripts depend on it.
//!
//! whatshot talks to Reddit's public JSON API anonymously. It sends a
//! descriptive user agent (Reddit rejects the default one), never follows
//! redirects (Reddit redirects requests for subreddits that do not exist),
//! and gives up on any request that takes longer than ten seconds. There is
//! no authentication, no caching, and no retry; if Reddit is having a bad
//! day, so is whatshot.
//!
//! # License
//!
//! whatshot is licensed under the terms of the [Apache License 2.0]. Please
//! visit the previous link for more information on licensing.
//!
//! [Apache License 2.0]: https://www.apache.org/licenses/LICENSE-2.0

pub mod cli;
pub mod conf;
pub mod count;
pub mod http;
pub mod reddit;
pub mod text;
pub mod thing;
pub mod view;

#[cfg(test)]
mod test_utils;
