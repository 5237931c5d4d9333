use super::*;

/// Source of raw page bytes.
///
/// Retry, timeout and caching policy belong to the implementation.
pub trait Fetcher {
  fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

impl<F> Fetcher for F
where
  F: Fn(&str) -> Result<Vec<u8>>,
{
  fn fetch(&self, url: &str) -> Result<Vec<u8>> {
    self(url)
  }
}

/// Blocking HTTP fetcher.
pub struct HttpFetcher {
  client: reqwest::blocking::Client,
}

impl HttpFetcher {
  pub fn new() -> Result<Self> {
    let client = reqwest::blocking::Client::builder()
      .user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
      ))
      .build()
      .map_err(|error| Error::Fetch {
        url: String::new(),
        message: format!("failed to build http client: {error}"),
      })?;

    Ok(Self { client })
  }
}

impl Fetcher for HttpFetcher {
  fn fetch(&self, url: &str) -> Result<Vec<u8>> {
    let fail = |error: reqwest::Error| Error::Fetch {
      url: url.to_string(),
      message: error.to_string(),
    };

    let response = self
      .client
      .get(url)
      .send()
      .map_err(fail)?
      .error_for_status()
      .map_err(fail)?;

    let bytes = response.bytes().map_err(fail)?;

    debug!("fetched {} bytes from {url}", bytes.len());

    Ok(bytes.to_vec())
  }
}
