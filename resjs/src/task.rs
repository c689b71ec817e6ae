//! The per-run orchestrator driving discovery and per-culture serialization.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use unic_langid::LanguageIdentifier;

use crate::{
    bundle::ResourceBundle,
    discovery::{GroupFilter, KeyPolicy, discover},
    error::Error,
    serializer::{SerializeOptions, write_culture},
};

/// One serialization run: loads a bundle, discovers its groups once, then
/// writes one script file per configured culture.
///
/// All run state lives on this value; there are no process-wide singletons.
///
/// # Example
///
/// ```rust,no_run
/// use resjs::GlobalizationTask;
///
/// let summary = GlobalizationTask::new(
///     "Resources.bundle.json",
///     "wwwroot/scripts",
///     vec!["en".to_string(), "pt-BR".to_string()],
/// )
/// .with_ignore_groups(vec!["InternalTexts".to_string()])
/// .run()?;
/// println!("{} groups, {} files", summary.groups, summary.files.len());
/// # Ok::<(), resjs::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct GlobalizationTask {
    bundle_path: PathBuf,
    output_dir: PathBuf,
    cultures: Vec<String>,
    default_culture: String,
    ignore_groups: Vec<String>,
    filename: String,
    options: SerializeOptions,
}

/// What a completed run produced, for host-side reporting.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Identity of the loaded bundle.
    pub module: String,

    /// Number of groups that survived discovery filtering.
    pub groups: usize,

    /// Written files, in culture-configuration order.
    pub files: Vec<PathBuf>,
}

impl GlobalizationTask {
    /// Creates a task with the default configuration: default culture `en`,
    /// empty ignore list, `[TEXT NOT FOUND] ` sentinel, HTML encoding on,
    /// output base name `Globalizations`.
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(
        bundle_path: P,
        output_dir: Q,
        cultures: Vec<String>,
    ) -> Self {
        GlobalizationTask {
            bundle_path: bundle_path.as_ref().to_path_buf(),
            output_dir: output_dir.as_ref().to_path_buf(),
            cultures,
            default_culture: "en".to_string(),
            ignore_groups: Vec::new(),
            filename: "Globalizations".to_string(),
            options: SerializeOptions::default(),
        }
    }

    /// Sets the default culture code. It anchors resource-definition file
    /// naming (see [`crate::resx`]); it does not supply fallback text for
    /// missing values.
    pub fn with_default_culture(mut self, code: impl Into<String>) -> Self {
        self.default_culture = code.into();
        self
    }

    /// Sets group names to exclude from discovery (case-insensitive match).
    pub fn with_ignore_groups(mut self, names: Vec<String>) -> Self {
        self.ignore_groups = names;
        self
    }

    /// Sets the sentinel prefix emitted for missing values.
    pub fn with_not_found_markup(mut self, markup: impl Into<String>) -> Self {
        self.options.not_found_markup = markup.into();
        self
    }

    /// Enables or disables HTML entity encoding of values.
    pub fn with_html_encode(mut self, enabled: bool) -> Self {
        self.options.html_encode = enabled;
        self
    }

    /// Sets the output base filename (`<filename>.<culture>.js`).
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    /// Sets the namespace object the group literals are assigned onto.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.options.namespace = namespace.into();
        self
    }

    /// The configured default culture code.
    pub fn default_culture(&self) -> &str {
        &self.default_culture
    }

    /// Runs the task: validate, load once, discover once, then serialize each
    /// configured culture in order. Any failure aborts the whole run; files
    /// already written are left as-is.
    pub fn run(&self) -> Result<RunSummary, Error> {
        let cultures = self.validate()?;

        let bundle = ResourceBundle::load(&self.bundle_path)?;
        log::info!("Resources bundle: {}", bundle.module);

        let filter = GroupFilter::ignoring(self.ignore_groups.iter().cloned());
        let groups = discover(&bundle, &filter);
        let policy = KeyPolicy::default();

        let mut files = Vec::with_capacity(cultures.len());
        for culture in &cultures {
            let code = culture.to_string();
            log::info!("Creating JS file for culture '{}'", code);

            let path = self
                .output_dir
                .join(format!("{}.{}.js", self.filename, code));
            let file = File::create(&path)?;
            let mut writer = BufWriter::new(file);
            write_culture(&mut writer, &groups, &code, &policy, &self.options)?;
            writer.flush()?;

            files.push(path);
        }

        Ok(RunSummary {
            module: bundle.module.clone(),
            groups: groups.len(),
            files,
        })
    }

    /// Validates the configuration before any I/O. Culture codes are parsed
    /// and canonicalized (`pt-br` becomes `pt-BR`), matching how they name
    /// output files and key the bundle's per-culture values.
    fn validate(&self) -> Result<Vec<LanguageIdentifier>, Error> {
        if self.cultures.is_empty() {
            return Err(Error::invalid_argument("culture list must not be empty"));
        }
        if self.filename.is_empty() {
            return Err(Error::invalid_argument("output filename must not be empty"));
        }
        if self.options.namespace.is_empty() {
            return Err(Error::invalid_argument("namespace must not be empty"));
        }

        self.default_culture
            .parse::<LanguageIdentifier>()
            .map_err(|_| {
                Error::invalid_argument(format!(
                    "invalid default culture code `{}`",
                    self.default_culture
                ))
            })?;

        self.cultures
            .iter()
            .map(|code| {
                code.parse::<LanguageIdentifier>().map_err(|_| {
                    Error::invalid_argument(format!("invalid culture code `{}`", code))
                })
            })
            .collect()
    }
}
