use serde::Serialize;

use crate::alias::AliasResolver;
use crate::directory::{Location, ParameterDirectory};
use crate::document::Document;
use crate::request::{NumberLike, UpdateMode, UpdateRequest};
use crate::style::{self, NumericStyle};

/// Why a request failed to parse. Always request-local; the rest of
/// the batch keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseFailure {
    /// The directory row points outside the document, or past the end
    /// of its line.
    MalformedLocation,
    /// The addressed token is not numeric even after exponent-marker
    /// normalization.
    UnparsableToken,
    /// The request carried no usable numeric value.
    BadValue,
}

/// Terminal status of one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateStatus {
    Applied,
    SkippedUnmapped,
    ErrorParse(ParseFailure),
}

impl UpdateStatus {
    pub fn is_applied(&self) -> bool {
        matches!(self, UpdateStatus::Applied)
    }
}

/// What happened to one request, in batch order.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateOutcome {
    pub request: UpdateRequest,
    /// Final resolution candidate; the canonical symbol when the name
    /// was recognized, otherwise the upper-cased second attempt.
    pub symbol: String,
    /// Token position, when the symbol had a directory row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    pub status: UpdateStatus,
    /// Token text before the edit, where the location was readable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_token: Option<String>,
    /// Token text written back, for applied outcomes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_token: Option<String>,
}

impl UpdateOutcome {
    fn applied(
        request: &UpdateRequest,
        symbol: String,
        location: Location,
        old_token: String,
        new_token: String,
    ) -> Self {
        Self {
            request: request.clone(),
            symbol,
            location: Some(location),
            status: UpdateStatus::Applied,
            old_token: Some(old_token),
            new_token: Some(new_token),
        }
    }

    fn skipped(request: &UpdateRequest, symbol: String) -> Self {
        Self {
            request: request.clone(),
            symbol,
            location: None,
            status: UpdateStatus::SkippedUnmapped,
            old_token: None,
            new_token: None,
        }
    }

    fn failed(
        request: &UpdateRequest,
        symbol: String,
        location: Location,
        failure: ParseFailure,
        old_token: Option<String>,
    ) -> Self {
        Self {
            request: request.clone(),
            symbol,
            location: Some(location),
            status: UpdateStatus::ErrorParse(failure),
            old_token,
            new_token: None,
        }
    }

    pub fn is_applied(&self) -> bool {
        self.status.is_applied()
    }
}

/// Applies structured update batches to a document.
///
/// Requests run strictly in order and each sees the document state the
/// previous one left behind, so `set` followed by `add` chains within a
/// single batch. Failures never escape a request: the worst a bad
/// request can do is leave its own token unchanged.
pub struct UpdateEngine {
    aliases: AliasResolver,
    directory: ParameterDirectory,
}

impl UpdateEngine {
    /// Engine over the standard WD alias and directory tables.
    pub fn new() -> Self {
        Self {
            aliases: AliasResolver::standard(),
            directory: ParameterDirectory::standard(),
        }
    }

    pub fn directory(&self) -> &ParameterDirectory {
        &self.directory
    }

    /// Resolve a raw name the same way `apply` does.
    pub fn resolve(&self, raw: &str) -> String {
        self.aliases.resolve(raw, &self.directory)
    }

    pub fn apply(&self, requests: &[UpdateRequest], document: &mut Document) -> Vec<UpdateOutcome> {
        requests
            .iter()
            .map(|request| self.apply_one(request, document))
            .collect()
    }

    fn apply_one(&self, request: &UpdateRequest, document: &mut Document) -> UpdateOutcome {
        let symbol = self.resolve(&request.parameter_name);
        let Some(location) = self.directory.lookup(&symbol) else {
            return UpdateOutcome::skipped(request, symbol);
        };

        let Some(old_token) = document.token(location.line, location.token).map(str::to_owned)
        else {
            return UpdateOutcome::failed(
                request,
                symbol,
                location,
                ParseFailure::MalformedLocation,
                None,
            );
        };
        let Some(old_value) = style::parse_numeric(&old_token) else {
            return UpdateOutcome::failed(
                request,
                symbol,
                location,
                ParseFailure::UnparsableToken,
                Some(old_token),
            );
        };
        let Some(supplied) = request.value.as_ref().and_then(|v| v.as_f64()) else {
            return UpdateOutcome::failed(
                request,
                symbol,
                location,
                ParseFailure::BadValue,
                Some(old_token),
            );
        };

        let new_value = match request.mode {
            UpdateMode::Set => supplied,
            UpdateMode::Add => old_value + supplied,
            UpdateMode::Subtract => old_value - supplied,
        };
        let new_token = NumericStyle::from_token(&old_token)
            .render(&NumberLike::Number(new_value))
            .into_token();
        document.replace_token(location.line, location.token, &new_token);

        UpdateOutcome::applied(request, symbol, location, old_token, new_token)
    }
}

impl Default for UpdateEngine {
    fn default() -> Self {
        Self::new()
    }
}
