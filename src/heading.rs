use super::*;

const MAX_LEVEL: i16 = 6;

/// Level of a heading tag name, `None` when the tag is not a heading at all.
///
/// Two-character `h?` tags whose second character is not a level in `1..=6`
/// are reported as malformed headings.
pub(crate) fn heading_level(name: &str) -> Option<Result<u8>> {
  let captures = re::HEADING_TAG.captures(name)?;

  Some(
    captures["level"]
      .parse::<u8>()
      .ok()
      .filter(|level| (1..=6).contains(level))
      .ok_or_else(|| Error::Extraction {
        tag: name.to_string(),
      }),
  )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rebased {
  pub(crate) clamped: bool,
  pub(crate) level: u8,
}

/// Moves a heading found at `original` so that the shallowest source heading
/// (`source_max`) lands one level below `target`.
pub(crate) fn rebase(original: u8, source_max: u8, target: u8) -> Rebased {
  let computed =
    i16::from(target) + i16::from(original) - i16::from(source_max) + 1;

  let level = computed.clamp(1, MAX_LEVEL);

  Rebased {
    clamped: level != computed,
    level: u8::try_from(level).unwrap_or(6),
  }
}
