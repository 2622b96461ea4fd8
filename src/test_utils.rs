use crate::http::{HTTPError, HTTPResult};
use crate::reddit::Subreddit;
use crate::reddit::service::Service;
use reqwest::StatusCode;
use std::fs;

/// A deterministic [`Service`] backed by fixture files on disk.
///
/// Fixtures live in `tests/data/` and are addressed as
/// `<resource>_<suffix>.json` for a first page and
/// `<resource>_<suffix>_<cursor>.json` for continuation pages, so one
/// suffix describes a whole paginated conversation. A missing fixture
/// file stands in for a failed request and comes back as HTTP 404,
/// which makes failure scenarios as easy to stage as happy paths.
pub struct TestService<'a> {
    suffix: &'a str,
}

impl<'a> TestService<'a> {
    pub fn new(suffix: &'a str) -> Self {
        Self { suffix }
    }
}

impl<'a> Service for TestService<'a> {
    fn get_resource(
        &self,
        _subreddit: &str,
        resource: &str,
        after: Option<&str>,
    ) -> HTTPResult<String> {
        let filename = match after {
            Some(after) => format!("tests/data/{resource}_{}_{after}.json", self.suffix),
            None => format!("tests/data/{resource}_{}.json", self.suffix),
        };
        fs::read_to_string(&filename).map_err(|_| HTTPError::Http(StatusCode::NOT_FOUND))
    }
}

/// A service that fails the test if it is ever asked for anything.
///
/// Useful for proving that invalid input short-circuits before any
/// request is made.
pub struct UnreachableService;

impl Service for UnreachableService {
    fn get_resource(
        &self,
        subreddit: &str,
        resource: &str,
        _after: Option<&str>,
    ) -> HTTPResult<String> {
        panic!("unexpected request for r/{subreddit} {resource}");
    }
}

impl Subreddit<TestService<'static>> {
    /// A subreddit with a two-page hot listing and a subscriber count.
    pub fn test() -> Self {
        Subreddit::with_service("rust", TestService::new("rust"))
    }

    /// A subreddit whose hot listing has no posts and whose metadata
    /// carries no subscriber count.
    pub fn test_empty() -> Self {
        Subreddit::with_service("emptysub", TestService::new("empty"))
    }

    /// A subreddit for which every request fails.
    pub fn test_unknown() -> Self {
        Subreddit::with_service("doesnotexist", TestService::new("404"))
    }

    /// A subreddit whose first hot page succeeds and whose second
    /// page cannot be fetched.
    pub fn test_partial() -> Self {
        Subreddit::with_service("partial", TestService::new("partial"))
    }

    /// A subreddit that answers every request with a body that is
    /// not JSON.
    pub fn test_malformed() -> Self {
        Subreddit::with_service("malformed", TestService::new("malformed"))
    }
}

impl Subreddit<UnreachableService> {
    /// A client with an empty (invalid) subreddit name and a service
    /// that panics on use.
    pub fn test_invalid() -> Self {
        Subreddit::with_service("", UnreachableService)
    }
}
