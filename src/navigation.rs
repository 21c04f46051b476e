//! Navigation targets and sinks
//!
//! Selecting a suggestion or submitting the search form ends the widget's
//! life; the resulting target is resolved against the catalog base URL and
//! handed to a sink.

use std::io::{self, Write};

use reqwest::Url;

use crate::service::endpoint;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    /// The product's edit view
    Product(i64),
    /// The product list filtered by a search (native form submission)
    SearchPage(String),
}

impl NavigationTarget {
    pub fn resolve(&self, base: &Url) -> Url {
        match self {
            NavigationTarget::Product(id) => {
                endpoint::endpoint(base, &format!("products/edit/{}", id))
            }
            NavigationTarget::SearchPage(query) => {
                let mut url = endpoint::endpoint(base, "products");
                if !query.is_empty() {
                    url.query_pairs_mut().append_pair("search", query);
                }
                url
            }
        }
    }
}

/// Receives the redirect once a target is chosen
pub trait NavigationSink {
    fn redirect(&mut self, url: &Url) -> io::Result<()>;
}

/// Writes the target URL as a single line
pub struct PrintSink<W: Write> {
    out: W,
}

impl<W: Write> PrintSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> NavigationSink for PrintSink<W> {
    fn redirect(&mut self, url: &Url) -> io::Result<()> {
        log::debug!("Navigating to {}", url);
        writeln!(self.out, "{}", url)?;
        self.out.flush()
    }
}
