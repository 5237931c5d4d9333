use super::*;

/// Makes `href` absolute.
///
/// Absolute URLs are returned untouched, root-relative paths are prefixed with
/// the site origin and anything else is resolved against `base`.
pub(crate) fn absolutize(origin: &Url, base: &Url, href: &str) -> String {
  if Url::parse(href).is_ok() {
    return href.to_string();
  }

  if let Some(rest) = href.strip_prefix("//") {
    return format!("{}://{rest}", base.scheme());
  }

  if href.starts_with('/') {
    return format!("{}{href}", origin.origin().ascii_serialization());
  }

  base
    .join(href)
    .map_or_else(|_| href.to_string(), |url| url.to_string())
}

pub(crate) fn is_pdf(url: &str) -> bool {
  let path = url.split(['?', '#']).next().unwrap_or(url);
  path.to_ascii_lowercase().ends_with(".pdf")
}
