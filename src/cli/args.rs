//! Command-line argument parsing

use crate::error::ParseError;

/// Arguments and options collected from the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// Name of the targeted secret
    pub secret_name: String,
    /// Key inside the secret whose value is printed
    pub key_name: String,
    /// Target namespace, `None` when no `-n`/`--namespace` was given.
    /// `Some("")` is treated the same as `None`.
    pub namespace: Option<String>,
    /// Forces the usage message when set
    pub help_requested: bool,
    /// First error hit while parsing, if any
    pub error: Option<ParseError>,
}

impl Request {
    /// The request as a `Result`, for callers that only care about validity
    pub fn validated(&self) -> Result<&Self, ParseError> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(self),
        }
    }

    fn fail(&mut self, err: ParseError) {
        // first error wins
        if self.error.is_none() {
            self.error = Some(err);
        }
    }
}

/// Parse the CLI tokens, program name excluded.
///
/// Parsing always runs to the end of the input so that `--help` is honoured
/// wherever it appears.
pub fn parse_args<I, S>(args: I) -> Request
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut request = Request::default();
    let mut tokens = args.into_iter().map(Into::into);

    while let Some(token) = tokens.next() {
        match token.as_str() {
            flag @ ("-n" | "--namespace") => match tokens.next() {
                // an empty namespace counts as unset
                Some(value) if request.namespace.as_deref().map_or(true, str::is_empty) => {
                    request.namespace = Some(value)
                }
                Some(_) => request.fail(ParseError::DuplicateOption),
                None => request.fail(ParseError::MissingValue(flag.to_string())),
            },
            "--help" => request.help_requested = true,
            flag if flag.starts_with('-') => {
                request.fail(ParseError::UnknownOption(flag.to_string()))
            }
            name if request.secret_name.is_empty() => request.secret_name = name.to_string(),
            name if request.key_name.is_empty() => request.key_name = name.to_string(),
            _ => request.fail(ParseError::WrongNumberOfParameters),
        }
    }

    if !request.help_requested && (request.secret_name.is_empty() || request.key_name.is_empty())
    {
        request.fail(ParseError::WrongNumberOfParameters);
    }

    request
}
