// src/query.rs
//! Request building: author → parameters → URL.

use crate::config::consts::AUTHOR_PARAM;

/// Ordered key/value pairs sent as the query string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestParams {
    pairs: Vec<(String, String)>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Turns an author into request parameters.
pub trait RequestBuilder {
    fn build_request(&self, author: &str) -> RequestParams;
}

impl<F> RequestBuilder for F
where
    F: Fn(&str) -> RequestParams,
{
    fn build_request(&self, author: &str) -> RequestParams {
        self(author)
    }
}

/// Combines a base endpoint with request parameters.
pub trait UrlBuilder {
    fn build_url(&self, base: &str, params: &RequestParams) -> String;
}

impl<F> UrlBuilder for F
where
    F: Fn(&str, &RequestParams) -> String,
{
    fn build_url(&self, base: &str, params: &RequestParams) -> String {
        self(base, params)
    }
}

/// One pair: `<key>=<author>`, key defaulting to `autor`.
#[derive(Clone, Debug)]
pub struct AuthorQuery {
    key: String,
}

impl AuthorQuery {
    pub fn with_key(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Default for AuthorQuery {
    fn default() -> Self {
        Self { key: AUTHOR_PARAM.to_string() }
    }
}

impl RequestBuilder for AuthorQuery {
    fn build_request(&self, author: &str) -> RequestParams {
        RequestParams::new().with(self.key.as_str(), author)
    }
}

/// `base?k=v&k2=v2`, percent-encoded.
#[derive(Clone, Copy, Debug, Default)]
pub struct QueryStringUrl;

impl UrlBuilder for QueryStringUrl {
    fn build_url(&self, base: &str, params: &RequestParams) -> String {
        if params.is_empty() {
            return base.to_string();
        }

        let query = params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{base}{}{query}", separator(base))
    }
}

/// What goes between the base and the first new pair.
fn separator(base: &str) -> &'static str {
    if base.ends_with('?') || base.ends_with('&') {
        ""
    } else if base.contains('?') {
        "&"
    } else {
        "?"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_query_uses_autor_key() {
        let params = AuthorQuery::default().build_request("Agatha Christie");
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("autor"), Some("Agatha Christie"));
    }

    #[test]
    fn author_query_custom_key() {
        let params = AuthorQuery::with_key("author").build_request("Le Guin");
        assert_eq!(params.get("author"), Some("Le Guin"));
        assert_eq!(params.get("autor"), None);
    }

    #[test]
    fn url_encodes_spaces_and_reserved() {
        let params = RequestParams::new().with("autor", "Agatha Christie & Co");
        assert_eq!(
            QueryStringUrl.build_url("http://buscador", &params),
            "http://buscador?autor=Agatha%20Christie%20%26%20Co"
        );
    }

    #[test]
    fn url_keeps_pair_order() {
        let params = RequestParams::new().with("b", "2").with("a", "1");
        assert_eq!(QueryStringUrl.build_url("http://h/s", &params), "http://h/s?b=2&a=1");
    }

    #[test]
    fn url_separator_rules() {
        let params = RequestParams::new().with("autor", "x");
        assert_eq!(QueryStringUrl.build_url("http://h/s?lang=pt", &params), "http://h/s?lang=pt&autor=x");
        assert_eq!(QueryStringUrl.build_url("http://h/s?", &params), "http://h/s?autor=x");
        assert_eq!(QueryStringUrl.build_url("http://h/s?a=1&", &params), "http://h/s?a=1&autor=x");
    }

    #[test]
    fn empty_params_leave_base_alone() {
        assert_eq!(QueryStringUrl.build_url("http://buscador", &RequestParams::new()), "http://buscador");
    }

    #[test]
    fn non_ascii_is_percent_encoded() {
        let params = RequestParams::new().with("autor", "José Saramago");
        assert_eq!(
            QueryStringUrl.build_url("http://buscador", &params),
            "http://buscador?autor=Jos%C3%A9%20Saramago"
        );
    }
}
