use std::fmt::{self, Display, Write};

/// Default capacity of the backing string.
const DEFAULT_CAPACITY: usize = 128;

/// Mutable URL/query-string assembler over a single backing `String`.
///
/// The builder keeps the URL in one buffer the whole time: the path
/// part grows by insertion at a tracked boundary, the query part grows
/// by appending `key=value&` pairs after it, and rendering simply drops
/// the one trailing separator. No per-parameter allocation, no escaping
/// — callers pass already-encoded components.
///
/// ```text
///   ┌── path (insertions) ──┐?┌── query (appends) ──────────┐
///   https://host/a/b        ? q=term & limit=25 &
///                                     trailing '&' (or the '?'
///                                     itself) dropped on render
/// ```
///
/// # Example
///
/// ```rust
/// use tinware_util::UrlBuilder;
///
/// let mut url = UrlBuilder::from_base("https://example.com");
/// url.append_path_segment("items")
///     .add_parameter("page", 2)
///     .add_parameter("sort", "asc");
/// assert_eq!(url.to_string(), "https://example.com/items?page=2&sort=asc");
/// ```
pub struct UrlBuilder {
    buf: String,
    /// Byte length of the path part; the `?` sits right after it.
    path_len: usize,
}

impl UrlBuilder {
    /// Empty builder (no base path) with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Empty builder with an explicit initial capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut buf = String::with_capacity(capacity);
        buf.push('?');
        Self { buf, path_len: 0 }
    }

    /// Builder seeded with a base URL.
    #[must_use]
    pub fn from_base(base: &str) -> Self {
        Self::from_base_with_capacity(base, DEFAULT_CAPACITY)
    }

    /// Builder seeded with a base URL and an explicit capacity.
    #[must_use]
    pub fn from_base_with_capacity(base: &str, capacity: usize) -> Self {
        let mut buf = String::with_capacity(capacity.max(base.len() + 1));
        buf.push_str(base);
        buf.push('?');
        Self {
            buf,
            path_len: base.len(),
        }
    }

    /// Append a `key=value` query parameter.
    ///
    /// Accepts any `Display` value.
    pub fn add_parameter<V: Display>(&mut self, key: &str, value: V) -> &mut Self {
        let _ = write!(self.buf, "{key}={value}&");
        self
    }

    /// Append a multi-valued query parameter, values comma-joined.
    pub fn add_parameter_list<V: Display>(&mut self, key: &str, values: &[V]) -> &mut Self {
        let _ = write!(self.buf, "{key}=");
        for value in values {
            let _ = write!(self.buf, "{value},");
        }

        // The last comma becomes the pair separator.
        self.buf.pop();
        self.buf.push('&');
        self
    }

    /// Append a raw string to the path part (no separator added).
    pub fn append_path(&mut self, value: &str) -> &mut Self {
        self.buf.insert_str(self.path_len, value);
        self.path_len += value.len();
        self
    }

    /// Append a `/`-prefixed segment to the path part.
    pub fn append_path_segment(&mut self, value: &str) -> &mut Self {
        self.buf.insert(self.path_len, '/');
        self.path_len += 1;
        self.buf.insert_str(self.path_len, value);
        self.path_len += value.len();
        self
    }
}

impl Default for UrlBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for UrlBuilder {
    /// Render the URL, dropping the trailing separator — the `&` after
    /// the last parameter, or the `?` itself when no parameter was
    /// ever added.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf[..self.buf.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_only_renders_without_query_marker() {
        let url = UrlBuilder::from_base("https://example.com");
        assert_eq!(url.to_string(), "https://example.com");
    }

    #[test]
    fn single_parameter() {
        let mut url = UrlBuilder::from_base("https://example.com");
        url.add_parameter("q", "rust");
        assert_eq!(url.to_string(), "https://example.com?q=rust");
    }

    #[test]
    fn parameters_chain_with_ampersands() {
        let mut url = UrlBuilder::from_base("https://example.com");
        url.add_parameter("a", 1).add_parameter("b", 2.5).add_parameter("c", "x");
        assert_eq!(url.to_string(), "https://example.com?a=1&b=2.5&c=x");
    }

    #[test]
    fn list_parameter_joins_with_commas() {
        let mut url = UrlBuilder::from_base("https://example.com");
        url.add_parameter_list("ids", &[3, 5, 8]);
        assert_eq!(url.to_string(), "https://example.com?ids=3,5,8");
    }

    #[test]
    fn path_segments_land_before_the_query() {
        let mut url = UrlBuilder::from_base("https://example.com");
        url.add_parameter("q", "late");
        url.append_path_segment("api").append_path_segment("v1");
        assert_eq!(url.to_string(), "https://example.com/api/v1?q=late");
    }

    #[test]
    fn append_path_is_raw() {
        let mut url = UrlBuilder::from_base("https://example.com");
        url.append_path("/a").append_path("b");
        assert_eq!(url.to_string(), "https://example.com/ab");
    }

    #[test]
    fn empty_builder_renders_empty() {
        assert_eq!(UrlBuilder::new().to_string(), "");
    }

    #[test]
    fn empty_builder_takes_parameters() {
        let mut url = UrlBuilder::new();
        url.add_parameter("k", "v");
        assert_eq!(url.to_string(), "?k=v");
    }
}
