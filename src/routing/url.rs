//! Request URL normalization
//!
//! Reduces a raw request target to the text routes are matched against.
//!
//! | raw target         | effective path |
//! |--------------------|----------------|
//! | `/`                | ``             |
//! | `/?page=1`         | ``             |
//! | `/posts?page=1`    | `posts`        |
//! | `/posts/index`     | `posts/index`  |
//! | `posts&page=1`     | `posts`        |
//! | `?page`            | `?page`        |
//! | `/post%2Dauthors`  | `post-authors` |

use percent_encoding::percent_decode_str;
use std::borrow::Cow;

/// Remove one trailing `/`
pub fn trim_trailing_slash(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}

/// Remove one leading `/`
pub fn trim_leading_slash(url: &str) -> &str {
    url.strip_prefix('/').unwrap_or(url)
}

/// Strip query-string variables from a route URL
///
/// The URL is split once on the first `&`. A first segment without `=` is
/// the route. Otherwise the route is whatever precedes a `?` that comes
/// before the first `=`, or empty. A lone `?key` with no value therefore
/// stays part of the route.
pub fn remove_query_string_variables(url: &str) -> &str {
    let head = url.split_once('&').map_or(url, |(head, _)| head);

    match head.find('=') {
        None => head,
        Some(eq) => head[..eq].find('?').map_or("", |q| &head[..q]),
    }
}

/// Percent-decode a route path; invalid UTF-8 is replaced, not rejected
pub fn decode_path(path: &str) -> Cow<'_, str> {
    percent_decode_str(path).decode_utf8_lossy()
}

/// Full normalization applied by `Router::dispatch`
///
/// The query is stripped from the raw target before decoding, so an
/// encoded `%26` or `%3F` stays part of the path.
pub fn effective_path(raw: &str) -> Cow<'_, str> {
    decode_path(remove_query_string_variables(trim_leading_slash(
        trim_trailing_slash(raw),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_query_string_variables() {
        assert_eq!(remove_query_string_variables(""), "");
        assert_eq!(remove_query_string_variables("posts?page=1"), "posts");
        assert_eq!(remove_query_string_variables("?page=1"), "");
        assert_eq!(remove_query_string_variables("?page"), "?page");
        assert_eq!(remove_query_string_variables("page=1"), "");
        assert_eq!(remove_query_string_variables("posts&page=1"), "posts");
        assert_eq!(remove_query_string_variables("posts/index&page=1"), "posts/index");
        assert_eq!(remove_query_string_variables("posts/index"), "posts/index");
    }

    #[test]
    fn test_only_first_ampersand_splits() {
        assert_eq!(remove_query_string_variables("posts&a=1&b=2"), "posts");
        assert_eq!(remove_query_string_variables("posts?a=1&b=2"), "posts");
    }

    #[test]
    fn test_trim_single_slash() {
        assert_eq!(trim_trailing_slash("posts//"), "posts/");
        assert_eq!(trim_leading_slash("//posts"), "/posts");
        assert_eq!(trim_trailing_slash("/"), "");
    }

    #[test]
    fn test_effective_path() {
        assert_eq!(effective_path("/"), "");
        assert_eq!(effective_path(""), "");
        assert_eq!(effective_path("/?page=1"), "");
        assert_eq!(effective_path("/posts?page=1"), "posts");
        assert_eq!(effective_path("/posts/index/"), "posts/index");
        assert_eq!(effective_path("/?page"), "?page");
    }

    #[test]
    fn test_effective_path_is_decoded() {
        assert_eq!(effective_path("/post%2Dauthors/index"), "post-authors/index");
        assert_eq!(effective_path("/posts%2Fnew?page=1"), "posts/new");
        assert_eq!(effective_path("/a%26b"), "a&b");
        assert!(matches!(effective_path("/posts/index"), Cow::Borrowed(_)));
    }
}
