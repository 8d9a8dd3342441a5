use derive_more::Display;
use serde::Serialize;

///
/// ScalarKind
/// Static lookup from a Django field constructor token to a Go type.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum ScalarKind {
    Auto,
    BigAuto,
    BigInteger,
    Binary,
    Boolean,
    Char,
    Date,
    DateTime,
    Decimal,
    Duration,
    Email,
    File,
    FilePath,
    Float,
    GenericIpAddress,
    Image,
    Integer,
    Json,
    NullBoolean,
    PositiveBigInteger,
    PositiveInteger,
    PositiveSmallInteger,
    Slug,
    SmallInteger,
    Text,
    Time,
    Url,
    Uuid,
}

impl ScalarKind {
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let kind = match token {
            "AutoField" => Self::Auto,
            "BigAutoField" => Self::BigAuto,
            "BigIntegerField" => Self::BigInteger,
            "BinaryField" => Self::Binary,
            "BooleanField" => Self::Boolean,
            "CharField" => Self::Char,
            "DateField" => Self::Date,
            "DateTimeField" => Self::DateTime,
            "DecimalField" => Self::Decimal,
            "DurationField" => Self::Duration,
            "EmailField" => Self::Email,
            "FileField" => Self::File,
            "FilePathField" => Self::FilePath,
            "FloatField" => Self::Float,
            "GenericIPAddressField" => Self::GenericIpAddress,
            "ImageField" => Self::Image,
            "IntegerField" => Self::Integer,
            "JSONField" => Self::Json,
            "NullBooleanField" => Self::NullBoolean,
            "PositiveBigIntegerField" => Self::PositiveBigInteger,
            "PositiveIntegerField" => Self::PositiveInteger,
            "PositiveSmallIntegerField" => Self::PositiveSmallInteger,
            "SlugField" => Self::Slug,
            "SmallIntegerField" => Self::SmallInteger,
            "TextField" => Self::Text,
            "TimeField" => Self::Time,
            "URLField" => Self::Url,
            "UUIDField" => Self::Uuid,
            _ => return None,
        };

        Some(kind)
    }

    #[must_use]
    pub const fn go_type(self) -> &'static str {
        match self {
            Self::Auto | Self::BigAuto | Self::BigInteger => "int64",
            Self::Binary => "[]byte",
            Self::Boolean => "bool",
            Self::Char
            | Self::Email
            | Self::File
            | Self::FilePath
            | Self::GenericIpAddress
            | Self::Image
            | Self::Json
            | Self::Slug
            | Self::Text
            | Self::Url
            | Self::Uuid => "string",
            Self::Date | Self::DateTime | Self::Time => "time.Time",
            Self::Decimal | Self::Float => "float64",
            Self::Duration => "time.Duration",
            Self::Integer => "int",
            Self::NullBoolean => "sql.NullBool",
            Self::PositiveBigInteger => "uint64",
            Self::PositiveInteger => "uint",
            Self::PositiveSmallInteger => "uint16",
            Self::SmallInteger => "int16",
        }
    }
}

///
/// RelationKind
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq, Serialize)]
pub enum RelationKind {
    #[default]
    None,
    ForeignKey,
    ManyToMany,
    OneToOne,
}

impl RelationKind {
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "ForeignKey" => Self::ForeignKey,
            "ManyToManyField" => Self::ManyToMany,
            "OneToOneField" => Self::OneToOne,
            _ => Self::None,
        }
    }
}

///
/// RelationTarget
/// First-argument classification for relation fields. Each shape is an
/// explicit rule; only a missing/unreadable argument degrades to `Missing`.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum RelationTarget {
    /// `'self'`, `"self"` or bare `self` — resolves to the enclosing model.
    SelfRef,

    /// Quoted forward reference, quotes stripped.
    Quoted(String),

    /// Bare identifier; dotted paths keep their last segment.
    Symbol(String),

    /// No usable first argument.
    Missing,
}

impl RelationTarget {
    #[must_use]
    pub fn from_args(args: &str) -> Self {
        let first = args.split(',').next().unwrap_or_default().trim();
        if first.is_empty() {
            return Self::Missing;
        }

        let unquoted = first
            .strip_prefix("u'")
            .or_else(|| first.strip_prefix("u\""))
            .or_else(|| first.strip_prefix('\''))
            .or_else(|| first.strip_prefix('"'));

        if let Some(inner) = unquoted {
            let inner = inner.trim_end_matches(['\'', '"']);
            if inner.is_empty() {
                return Self::Missing;
            }
            if inner == "self" {
                return Self::SelfRef;
            }
            return Self::Quoted(inner.to_string());
        }

        if first == "self" {
            return Self::SelfRef;
        }

        let last = first.rsplit('.').next().unwrap_or(first);

        Self::Symbol(last.to_string())
    }

    /// Resolve to a model name; `enclosing` is the model declaring the field.
    #[must_use]
    pub fn resolve(&self, enclosing: &str) -> Option<String> {
        match self {
            Self::SelfRef => Some(enclosing.to_string()),
            Self::Quoted(name) | Self::Symbol(name) => Some(name.clone()),
            Self::Missing => None,
        }
    }
}
