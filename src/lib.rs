use {
  context::Context,
  document::Document,
  dom_query::NodeRef,
  pipeline::Pipeline,
  regex::Regex,
  serde::{Deserialize, Deserializer, Serialize},
  stage::{
    ApplyExclusionsStage, NormalizeFragmentStage, SelectContentRootStage,
    Stage,
  },
  std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    fmt::{self, Display, Formatter},
    str::FromStr,
    sync::LazyLock,
  },
  template::Placement,
  tracing::{debug, info, warn},
  url::Url,
};

pub use crate::{
  catalog::{Build, Catalog},
  category::{CourseMode, PageCategory},
  composer::{CatalogDocument, Composer},
  courses::{Course, CourseDataset, DEFAULT_COURSES_URL},
  diagnostics::{Diagnostic, Diagnostics, Severity},
  dump::{CatalogDump, PageRecord},
  error::Error,
  extractor::Extractor,
  fetch::{Fetcher, HttpFetcher},
  fragment::Fragment,
  index::{Indexer, PageIndex},
  listing::CourseListing,
  locator::{
    ElementMatcher, ExclusionRule, LocatorConfig, LocatorRule, RangeBound,
  },
  options::{CatalogOptions, CatalogOptionsBuilder},
  page::Page,
  template::{Slot, Template},
};

mod catalog;
mod category;
mod composer;
mod context;
mod courses;
mod diagnostics;
mod document;
mod dump;
mod error;
mod extractor;
mod fetch;
mod fragment;
mod heading;
mod index;
mod link;
mod listing;
mod locator;
mod options;
mod page;
mod pipeline;
mod re;
mod stage;
mod template;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
