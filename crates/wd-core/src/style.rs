use crate::constants::{DEFAULT_SCI_PRECISION, EXPONENT_DIGITS, EXPONENT_MARKERS};
use crate::request::NumberLike;

/// How a document token renders its number. Derived from the token
/// being replaced, never from the incoming value, so the fixed-format
/// consumer keeps seeing the column layout it expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericStyle {
    /// Plain decimal with a fixed count of fractional digits.
    Fixed { precision: usize },
    /// Mantissa-exponent form with a legacy marker letter.
    Scientific {
        precision: usize,
        marker: char,
        explicit_plus: bool,
    },
}

impl NumericStyle {
    /// Infer the rendering style of an existing token.
    ///
    /// Marker detection is by presence, scanning for `D`, `d`, `E`, `e`
    /// in that order, so a Fortran `D` wins even in pathological tokens
    /// containing both families. Precision counts the digits between
    /// the first decimal point and the marker (scientific) or after the
    /// first decimal point (fixed); a dotted-less scientific token gets
    /// the conventional 6.
    pub fn from_token(token: &str) -> Self {
        let marker = EXPONENT_MARKERS.iter().copied().find(|&m| token.contains(m));
        match marker {
            Some(marker) => {
                let precision = match token.split_once('.') {
                    Some((_, frac)) => frac.find(marker).unwrap_or(frac.len()),
                    None => DEFAULT_SCI_PRECISION,
                };
                let exponent_negative = token
                    .split_once(marker)
                    .is_some_and(|(_, rest)| rest.starts_with('-'));
                NumericStyle::Scientific {
                    precision,
                    marker,
                    explicit_plus: token.contains('+') && !exponent_negative,
                }
            }
            None => {
                let precision = token
                    .split_once('.')
                    .map(|(_, frac)| frac.len())
                    .unwrap_or(0);
                NumericStyle::Fixed { precision }
            }
        }
    }

    /// Render `value` in this style.
    ///
    /// Scientific output always carries at least two exponent digits;
    /// the sign slot holds `-` for negative exponents, `+` when the
    /// style decoded an explicit plus, and nothing otherwise. Non-finite
    /// values fall back to their plain textual form.
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        match *self {
            NumericStyle::Fixed { precision } => format!("{value:.precision$}"),
            NumericStyle::Scientific {
                precision,
                marker,
                explicit_plus,
            } => {
                let base = format!("{value:.precision$E}");
                let Some((mantissa, exponent)) = base.split_once('E') else {
                    return base;
                };
                let exponent: i32 = exponent.parse().unwrap_or(0);
                let magnitude = exponent.unsigned_abs();
                if exponent < 0 {
                    format!("{mantissa}{marker}-{magnitude:0width$}", width = EXPONENT_DIGITS)
                } else if explicit_plus {
                    format!("{mantissa}{marker}+{magnitude:0width$}", width = EXPONENT_DIGITS)
                } else {
                    format!("{mantissa}{marker}{magnitude:0width$}", width = EXPONENT_DIGITS)
                }
            }
        }
    }

    /// Best-effort rendering of a wire value. Finite numeric values come
    /// back styled; anything else passes through verbatim so one odd
    /// value cannot sink a whole batch.
    pub fn render(&self, value: &NumberLike) -> Rendered {
        match value.as_f64() {
            Some(v) if v.is_finite() => Rendered::Styled(self.format(v)),
            _ => Rendered::Verbatim(value.to_string()),
        }
    }
}

/// Outcome of rendering a value against a token's style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// Numeric value re-rendered in the token's original style.
    Styled(String),
    /// Non-numeric value passed through untouched.
    Verbatim(String),
}

impl Rendered {
    pub fn into_token(self) -> String {
        match self {
            Rendered::Styled(token) | Rendered::Verbatim(token) => token,
        }
    }
}

/// Rewrite legacy `D`/`d` exponent markers so the token parses as f64.
pub fn normalize_exponent(token: &str) -> String {
    token.replace('D', "E").replace('d', "e")
}

/// Numeric reading of a document token, honoring legacy markers.
pub fn parse_numeric(token: &str) -> Option<f64> {
    normalize_exponent(token).trim().parse().ok()
}
