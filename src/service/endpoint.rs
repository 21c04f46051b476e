//! URL construction against the catalog base URL
//!
//! The base URL may carry a context path (`http://host/catalog/`), so paths
//! are joined relative to it rather than from the host root.

use reqwest::Url;

use crate::error::SearchError;

pub const SEARCH_PATH: &str = "products/api/search";

pub fn parse_base_url(raw: &str) -> Result<Url, SearchError> {
    let mut url = Url::parse(raw).map_err(|e| SearchError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(SearchError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: "expected an http or https URL".to_string(),
        });
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

/// Join a relative path onto the base URL
pub fn endpoint(base: &Url, relative: &str) -> Url {
    let mut url = base.clone();
    let path = format!("{}{}", base.path(), relative.trim_start_matches('/'));
    url.set_path(&path);
    url
}

/// `<base>/products/api/search?q=<query>`, with the query percent-encoded
/// the way a browser's `encodeURIComponent` does (spaces as `%20`)
pub fn search_url(base: &Url, query: &str) -> Url {
    let mut url = endpoint(base, SEARCH_PATH);
    url.set_query(Some(&format!("q={}", urlencoding::encode(query))));
    url
}
