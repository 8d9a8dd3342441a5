//! django2gorm — convert a Django models.py file into a starting point for a
//! set of golang GORM model definitions.
//!
//! Supports the common field types (CharField, IntegerField, BooleanField,
//! ...) and makes a best-effort attempt at relationships (ForeignKey,
//! ManyToManyField, OneToOneField). Everything it cannot resolve degrades to
//! a placeholder plus an entry in a sidecar `.errors` log; the run never
//! aborts on malformed model code, only on fatal file I/O.
//!
//! Not recommended for production use. This only simplifies the lifting work
//! when writing Go code against an existing Django app's database.
//!
//! The pipeline is three stages, each infallible past input loading:
//! [`parse`] produces ordered model descriptors, [`map`] translates them to
//! GORM struct descriptors while filling the report, [`emit`] renders
//! deterministic Go text. [`convert`] wires the stages to the filesystem.

pub mod emit;
pub mod map;
pub mod parse;

use django2gorm_schema::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

pub use map::MapOptions;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Conversion, ConvertOptions, Error, Input, Summary, convert, convert_text,
        map::MapOptions,
    };
    pub use django2gorm_schema::prelude::*;
}

/// Built-in demo model, used when the CLI is pointed at `DEMO`.
pub const DEMO: &str = r#"
class UserProfile(models.Model):
    user = models.OneToOneField(User, related_name="userprofile", on_delete=models.CASCADE)
    accountsuspended = models.BooleanField('Account suspended', default=False)
    district = models.ForeignKey(District, null=True, related_name='userprofile_company', on_delete=models.SET_NULL)
    lastpasswordchange = models.DateTimeField('Date and time of last password change')
    credits = models.IntegerField('Credit balance', null=True, blank=True)
    homepage = models.IntegerField(default=-1)
    last_login = models.DateTimeField(null=True)
    login_count = models.IntegerField(default=0)
    notes = models.TextField(null=True, default=None)
    language = models.CharField(max_length=20, default='en')
    categories_allowed = models.ManyToManyField(Category)

    def save(self, *args, **kwargs):
        if self.credits: self.credits = abs(self.credits)
        super(UserProfile, self).save(*args, **kwargs)

    class Meta:
        db_table = 'userprofile'

    def __unicode__(self):
        return '%s - %s' % (self.user, self.company)
"#;

/// Conventional output filename when none is given.
pub const DEFAULT_OUTPUT: &str = "gorm_models.go";

///
/// Input
///

#[derive(Clone, Debug)]
pub enum Input {
    /// Read this file; missing or unreadable is fatal.
    Path(PathBuf),

    /// Use the given text as-is.
    Text(String),

    /// Use the built-in [`DEMO`] model.
    Demo,
}

///
/// ConvertOptions
///

#[derive(Clone, Debug)]
pub struct ConvertOptions {
    /// Where the Django source comes from.
    pub input: Input,

    /// Full path to write the .go file to. Must not already exist.
    pub output: PathBuf,

    /// Include the import block and the example `func main()`.
    pub include_helpers: bool,

    /// Auto-generate a User model when none is defined in the input.
    pub add_user_model: bool,

    /// Auto-generate a Group model when none is defined in the input.
    pub add_group_model: bool,
}

impl ConvertOptions {
    #[must_use]
    pub fn new(input: Input) -> Self {
        Self {
            input,
            output: PathBuf::from(DEFAULT_OUTPUT),
            include_helpers: true,
            add_user_model: true,
            add_group_model: true,
        }
    }

    #[must_use]
    pub const fn map_options(&self) -> MapOptions {
        MapOptions {
            add_user_model: self.add_user_model,
            add_group_model: self.add_group_model,
        }
    }
}

///
/// Error
/// Fatal failures only; everything recoverable lands in the Report instead.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("input file {path} not found")]
    InputNotFound { path: PathBuf },

    #[error("output file {path} exists, move/rename it or specify a new output file")]
    OutputExists { path: PathBuf },

    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

///
/// Conversion
/// Outcome of the pure text pipeline.
///

#[derive(Clone, Debug)]
pub struct Conversion {
    pub code: String,
    pub report: Report,
    pub models: Vec<GoModel>,
}

///
/// Summary
///

#[derive(Clone, Debug)]
pub struct Summary {
    pub models: usize,
    pub records: usize,
    pub output: PathBuf,
    pub error_log: Option<PathBuf>,
}

/// Run the parse/map/emit pipeline over source text. Infallible: problems
/// degrade to placeholders plus report records.
#[must_use]
pub fn convert_text(source: &str, opts: &ConvertOptions) -> Conversion {
    let parsed = parse::parse(source);
    let (models, report) = map::map_models(&parsed, &opts.map_options());
    let code = emit::render(&models, opts.include_helpers);

    Conversion {
        code,
        report,
        models,
    }
}

/// Convert a Django models file and write the generated Go plus, when the
/// report is non-empty, a sidecar `<output>.errors` log.
///
/// Fatal errors (missing input, pre-existing output, write failures) abort
/// before or without partial output.
pub fn convert(opts: &ConvertOptions) -> Result<Summary, Error> {
    let source = load_input(&opts.input)?;

    if opts.output.exists() {
        return Err(Error::OutputExists {
            path: opts.output.clone(),
        });
    }

    let conversion = convert_text(&source, opts);

    fs::write(&opts.output, &conversion.code).map_err(|source| Error::Io {
        path: opts.output.clone(),
        source,
    })?;

    let error_log = if conversion.report.is_empty() {
        None
    } else {
        let path = error_log_path(&opts.output);
        fs::write(&path, conversion.report.render()).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        Some(path)
    };

    Ok(Summary {
        models: conversion.models.len(),
        records: conversion.report.len(),
        output: opts.output.clone(),
        error_log,
    })
}

fn load_input(input: &Input) -> Result<String, Error> {
    match input {
        Input::Path(path) => {
            if !path.exists() {
                return Err(Error::InputNotFound { path: path.clone() });
            }

            fs::read_to_string(path).map_err(|source| Error::Io {
                path: path.clone(),
                source,
            })
        }
        Input::Text(text) => Ok(text.clone()),
        Input::Demo => Ok(DEMO.to_string()),
    }
}

/// Sidecar log path: `<output>.errors`.
#[must_use]
pub fn error_log_path(output: &Path) -> PathBuf {
    let mut name = output.as_os_str().to_os_string();
    name.push(".errors");

    PathBuf::from(name)
}
