use {
  anyhow::Context,
  arguments::Arguments,
  catalog::{
    Catalog, CatalogOptions, CourseDataset, CourseMode, DEFAULT_COURSES_URL,
    Fetcher, HttpFetcher, LocatorConfig,
  },
  clap::{Parser, ValueEnum},
  std::{fs, path::PathBuf, process},
  tracing_subscriber::EnvFilter,
};

mod arguments;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error:#}");
    process::exit(1);
  }
}
