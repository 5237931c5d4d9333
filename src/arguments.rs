use super::*;

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum Mode {
  /// Fill course sections from the course dataset
  #[default]
  Api,
  /// Fill course sections with their extracted pages
  Raw,
}

impl From<Mode> for CourseMode {
  fn from(mode: Mode) -> Self {
    match mode {
      Mode::Api => Self::Api,
      Mode::Raw => Self::Raw,
    }
  }
}

#[derive(Parser)]
#[command(name = "catalog")]
#[command(
  about = "Assemble a course catalog from a template and live site pages",
  long_about = None
)]
pub(crate) struct Arguments {
  #[arg(value_name = "TEMPLATE", help = "Path to the catalog template")]
  template: PathBuf,
  #[arg(long, value_name = "FILE", help = "Locator configuration JSON")]
  locators: PathBuf,
  #[arg(
    long,
    value_name = "FILE",
    help = "Course dataset JSON, read instead of fetching the course API"
  )]
  courses: Option<PathBuf>,
  #[arg(
    long,
    value_name = "URL",
    default_value = DEFAULT_COURSES_URL,
    help = "Course API endpoint"
  )]
  courses_url: String,
  #[arg(
    long,
    value_name = "FILE",
    default_value = "catalog.html",
    help = "Where to write the assembled catalog"
  )]
  output: PathBuf,
  #[arg(long, value_name = "FILE", help = "Also write indexed pages as JSON")]
  dump: Option<PathBuf>,
  #[arg(
    long,
    value_enum,
    default_value_t = Mode::Api,
    help = "How course sections are filled"
  )]
  mode: Mode,
  #[arg(long, value_name = "URL", help = "Site origin for root-relative links")]
  origin: Option<String>,
  #[arg(long, help = "Title of the assembled document")]
  title: Option<String>,
  #[arg(long, short, help = "Log every page as it is processed")]
  verbose: bool,
}

impl Arguments {
  fn init_tracing(&self) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
      EnvFilter::new(if self.verbose {
        "catalog=debug"
      } else {
        "catalog=info"
      })
    });

    tracing_subscriber::fmt()
      .with_env_filter(filter)
      .with_writer(std::io::stderr)
      .init();
  }

  fn courses(&self, fetcher: &dyn Fetcher) -> Result<Option<CourseDataset>> {
    if let Some(path) = &self.courses {
      let json = fs::read_to_string(path).with_context(|| {
        format!("failed to read course dataset from `{}`", path.display())
      })?;

      return Ok(Some(CourseDataset::from_json(&json)?));
    }

    match self.mode {
      Mode::Api => Ok(Some(
        CourseDataset::fetch(fetcher, &self.courses_url).with_context(|| {
          format!("failed to load courses from `{}`", self.courses_url)
        })?,
      )),
      Mode::Raw => Ok(None),
    }
  }

  fn options(&self) -> CatalogOptions {
    let mut builder = CatalogOptions::builder().course_mode(self.mode.into());

    if let Some(origin) = &self.origin {
      builder = builder.origin(origin);
    }

    if let Some(title) = &self.title {
      builder = builder.title(title);
    }

    builder.build()
  }

  pub(crate) fn run(self) -> Result {
    self.init_tracing();

    let template = fs::read_to_string(&self.template).with_context(|| {
      format!("failed to read template from `{}`", self.template.display())
    })?;

    let locators = fs::read_to_string(&self.locators).with_context(|| {
      format!("failed to read locators from `{}`", self.locators.display())
    })?;

    let catalog = Catalog::new(
      &template,
      LocatorConfig::from_json(&locators)?,
      self.options(),
    )
    .context("failed to load catalog template")?;

    let fetcher = HttpFetcher::new()?;

    let courses = self.courses(&fetcher)?;

    let build = catalog.build(
      &fetcher,
      courses.as_ref(),
      chrono::Local::now().date_naive(),
    )?;

    fs::write(&self.output, build.document.html()).with_context(|| {
      format!("failed to write catalog to `{}`", self.output.display())
    })?;

    if let Some(path) = &self.dump {
      fs::write(path, build.dump().to_json()?).with_context(|| {
        format!("failed to write dump to `{}`", path.display())
      })?;
    }

    let warnings = build.diagnostics.warnings().count();

    tracing::info!(
      pages = build.index.len(),
      warnings,
      output = %self.output.display(),
      "wrote catalog"
    );

    Ok(())
  }
}
