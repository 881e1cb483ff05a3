//! Factory calling convention.
//!
//! Every registered factory takes a list of field-name tokens optionally
//! followed by one options map. The trailing map is split off; the remaining
//! positional tokens become the ordered field list.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Options passed as the trailing argument to a factory.
pub type Options = Map<String, Value>;

/// A single factory argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Arg {
    /// A field-name token.
    Field(String),
    /// A configuration map. Only valid in trailing position.
    Options(Options),
}

impl From<&str> for Arg {
    fn from(field: &str) -> Self {
        Self::Field(field.to_owned())
    }
}

impl From<String> for Arg {
    fn from(field: String) -> Self {
        Self::Field(field)
    }
}

impl From<Options> for Arg {
    fn from(options: Options) -> Self {
        Self::Options(options)
    }
}

/// Errors raised while splitting factory arguments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    /// An options map appeared before the last argument.
    #[error("options map at position {position} must be the trailing argument")]
    MisplacedOptions {
        /// Zero-based position of the offending map.
        position: usize,
    },
}

/// Parsed factory arguments: ordered fields plus optional trailing options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Args {
    fields: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    options: Option<Options>,
}

impl Args {
    /// Splits a raw argument list, extracting a trailing options map.
    ///
    /// ```rust
    /// use remarkable_matcher::args::{Arg, Args, Options};
    ///
    /// let mut options = Options::new();
    /// options.insert("message".into(), "nope".into());
    ///
    /// let args = Args::parse([Arg::from("password"), Arg::from("token"), Arg::from(options)]).unwrap();
    /// assert_eq!(args.fields(), ["password", "token"]);
    /// assert!(args.options().is_some());
    /// ```
    pub fn parse<I>(raw: I) -> Result<Self, ArgumentError>
    where
        I: IntoIterator<Item = Arg>,
    {
        let mut raw: Vec<Arg> = raw.into_iter().collect();
        let options = match raw.last() {
            Some(Arg::Options(_)) => match raw.pop() {
                Some(Arg::Options(options)) => Some(options),
                _ => None,
            },
            _ => None,
        };

        let mut fields = Vec::with_capacity(raw.len());
        for (position, arg) in raw.into_iter().enumerate() {
            match arg {
                Arg::Field(field) => fields.push(field),
                Arg::Options(_) => return Err(ArgumentError::MisplacedOptions { position }),
            }
        }

        Ok(Self { fields, options })
    }

    /// Builds arguments from field tokens alone.
    pub fn from_fields<I, T>(fields: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            options: None,
        }
    }

    /// Attaches a trailing options map.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// The ordered field list.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The trailing options map, if one was given.
    pub fn options(&self) -> Option<&Options> {
        self.options.as_ref()
    }

    /// Consumes the arguments, returning the field list.
    pub fn into_fields(self) -> Vec<String> {
        self.fields
    }

    /// Number of positional fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no positional fields were given.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<T: Into<String>> FromIterator<T> for Args {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_fields(iter)
    }
}
