use super::*;

macro_rules! re {
  ($pat:expr) => {
    LazyLock::new(|| Regex::new(concat!("^", $pat, "$")).unwrap())
  };
}

pub(crate) static COURSE_CODE: LazyLock<Regex> =
  re!(r"\s*(?P<subject>[^\s-]+)-(?P<number>[^\s-]+)\s*");

// `hr` is a rule, not a heading.
pub(crate) static HEADING_TAG: LazyLock<Regex> = re!(r"h(?P<level>[^r])");
