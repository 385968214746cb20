// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! printf-style formatting into a [`Text`].
//!
//! The format string is scanned by a two-state machine. In `Literal` every
//! byte except `%` is copied through. `%` moves to `AfterPercent`, which
//! consumes exactly one byte to pick a conversion, renders the next argument,
//! and returns to `Literal`.
//!
//! | Conversion | Argument               | Rendering                   |
//! |------------|------------------------|-----------------------------|
//! | `%s`       | `FormatArg::Str`       | bytes as-is                 |
//! | `%i`       | `FormatArg::Int`       | decimal                     |
//! | `%l`       | `FormatArg::Long` (or `Int`) | decimal               |
//! | `%u`       | `FormatArg::Unsigned`  | decimal                     |
//! | `%f`       | `FormatArg::Float`     | C `%g`: 6 significant digits|
//!
//! Any other conversion byte appends `???` and consumes no argument. A `%` at
//! the very end of the format string just ends the scan.

use log::debug;

use super::Text;
use crate::error::TextError;

/// Placeholder written for an unrecognised conversion.
pub const UNKNOWN_CONVERSION: &str = "???";

/// Significant digits used by `%f`.
const SIGNIFICANT_DIGITS: usize = 6;

/// One argument for [`Text::format`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormatArg<'a> {
    Str(&'a [u8]),
    Int(i32),
    Long(i64),
    Unsigned(u64),
    Float(f64),
}

impl FormatArg<'_> {
    fn kind(&self) -> &'static str {
        match self {
            FormatArg::Str(_) => "string",
            FormatArg::Int(_) => "i32",
            FormatArg::Long(_) => "i64",
            FormatArg::Unsigned(_) => "u64",
            FormatArg::Float(_) => "f64",
        }
    }
}

impl<'a> From<&'a str> for FormatArg<'a> {
    fn from(value: &'a str) -> Self {
        FormatArg::Str(value.as_bytes())
    }
}

impl<'a> From<&'a String> for FormatArg<'a> {
    fn from(value: &'a String) -> Self {
        FormatArg::Str(value.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for FormatArg<'a> {
    fn from(value: &'a [u8]) -> Self {
        FormatArg::Str(value)
    }
}

impl<'a> From<&'a Text> for FormatArg<'a> {
    fn from(value: &'a Text) -> Self {
        FormatArg::Str(value.as_bytes())
    }
}

impl From<i32> for FormatArg<'_> {
    fn from(value: i32) -> Self {
        FormatArg::Int(value)
    }
}

impl From<i64> for FormatArg<'_> {
    fn from(value: i64) -> Self {
        FormatArg::Long(value)
    }
}

impl From<u32> for FormatArg<'_> {
    fn from(value: u32) -> Self {
        FormatArg::Unsigned(u64::from(value))
    }
}

impl From<u64> for FormatArg<'_> {
    fn from(value: u64) -> Self {
        FormatArg::Unsigned(value)
    }
}

impl From<usize> for FormatArg<'_> {
    fn from(value: usize) -> Self {
        FormatArg::Unsigned(value as u64)
    }
}

impl From<f32> for FormatArg<'_> {
    fn from(value: f32) -> Self {
        FormatArg::Float(f64::from(value))
    }
}

impl From<f64> for FormatArg<'_> {
    fn from(value: f64) -> Self {
        FormatArg::Float(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Literal,
    AfterPercent,
}

impl Text {
    /// Clear the text, then fill it from `fmt` and `args`.
    ///
    /// Arguments are taken left to right, one per recognised conversion.
    /// Running out is [`TextError::MissingArgument`]; a wrong kind is
    /// [`TextError::ArgumentMismatch`]. Leftover arguments are ignored.
    pub fn format(
        &mut self,
        fmt: impl AsRef<[u8]>,
        args: &[FormatArg<'_>],
    ) -> Result<&mut Self, TextError> {
        self.clear()?;

        let mut state = ScanState::Literal;
        let mut next_arg = 0;
        for &byte in fmt.as_ref() {
            state = match state {
                ScanState::Literal if byte == b'%' => ScanState::AfterPercent,
                ScanState::Literal => {
                    self.append([byte])?;
                    ScanState::Literal
                }
                ScanState::AfterPercent => {
                    self.convert(byte, args, &mut next_arg)?;
                    ScanState::Literal
                }
            };
        }

        Ok(self)
    }

    /// Render one conversion and append it.
    fn convert(
        &mut self,
        conversion: u8,
        args: &[FormatArg<'_>],
        next_arg: &mut usize,
    ) -> Result<(), TextError> {
        if !matches!(conversion, b's' | b'i' | b'l' | b'u' | b'f') {
            debug!("unknown conversion '%{}'", conversion.escape_ascii());
            self.append(UNKNOWN_CONVERSION)?;
            return Ok(());
        }

        let index = *next_arg;
        let arg = args.get(index).ok_or(TextError::MissingArgument {
            conversion: char::from(conversion),
            index,
        })?;
        *next_arg += 1;

        let rendered = match (conversion, arg) {
            (b's', FormatArg::Str(bytes)) => {
                self.append(bytes)?;
                return Ok(());
            }
            (b'i', FormatArg::Int(value)) => value.to_string(),
            (b'l', FormatArg::Int(value)) => value.to_string(),
            (b'l', FormatArg::Long(value)) => value.to_string(),
            (b'u', FormatArg::Unsigned(value)) => value.to_string(),
            (b'f', FormatArg::Float(value)) => format_general(*value),
            _ => {
                return Err(TextError::ArgumentMismatch {
                    conversion: char::from(conversion),
                    index,
                    found: arg.kind(),
                })
            }
        };

        self.append(rendered)?;
        Ok(())
    }
}

/// Render `value` the way C's `%g` does: six significant digits, trailing
/// zeros dropped, exponent form when the exponent is below -4 or at least 6.
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // rounding to the significant digits can bump the exponent (9.999995 -> 1e1),
    // so read it back from the rounded scientific form
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn strip_trailing_zeros(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

/// Format into a [`Text`] with variadic arguments.
///
/// Each argument goes through `FormatArg::from`, so plain Rust values work:
///
/// ```
/// use vest::{vest_format, Text};
///
/// let mut text = Text::empty().unwrap();
/// vest_format!(text, "%s -> %i", "answer", 42i32).unwrap();
/// assert_eq!(text, "answer -> 42");
/// ```
#[macro_export]
macro_rules! vest_format {
    ($text:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $text.format($fmt, &[$($crate::FormatArg::from($arg)),*])
    };
}
