//! Output modes of the textual representation

#[cfg(not(feature = "std"))]
use core as std;

use crate::{id::DIGITS, Uuid};
use fstr::FStr;
use std::{fmt, ops};

/// Selects the textual representation produced by [`Uuid::format()`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum FormatMode {
    /// The 8-4-4-4-12 lowercase hexadecimal form, e.g. `00112233-4455-6677-8899-aabbccddeeff`.
    ///
    /// This is what [`fmt::Display`] writes.
    #[default]
    Canonical,

    /// The representation used for inspection, which is identical to [`FormatMode::Canonical`].
    ///
    /// This is what [`fmt::Debug`] writes.
    Debug,

    /// The 128-bit integer view as 32 zero-padded lowercase hexadecimal digits without hyphens,
    /// e.g. `00112233445566778899aabbccddeeff`.
    ///
    /// This is what [`fmt::LowerHex`] writes.
    Hex,
}

impl Uuid {
    /// Returns the string representation selected by `mode`, stored in a stack-allocated
    /// structure that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid35::{FormatMode, Uuid};
    ///
    /// let x = Uuid::from(0x0011_2233_4455_6677_8899_aabb_ccdd_eeffu128);
    /// assert_eq!(&x.format(FormatMode::Canonical) as &str, "00112233-4455-6677-8899-aabbccddeeff");
    /// assert_eq!(&x.format(FormatMode::Hex) as &str, "00112233445566778899aabbccddeeff");
    /// assert_eq!(format!("{:x}", x), "00112233445566778899aabbccddeeff");
    /// ```
    pub fn format(&self, mode: FormatMode) -> Formatted {
        match mode {
            FormatMode::Canonical | FormatMode::Debug => Formatted(Repr::Dashed(self.encode())),
            FormatMode::Hex => Formatted(Repr::Plain(self.encode_hex())),
        }
    }

    /// Renders the integer view as 32 hexadecimal digits, most significant nibble first.
    fn encode_hex(&self) -> FStr<32> {
        let n = self.as_u128();
        let mut buffer = [0u8; 32];
        for (i, e) in buffer.iter_mut().enumerate() {
            *e = DIGITS[((n >> (124 - 4 * i)) & 15) as usize];
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: ok because buffer consists of ASCII code points
        unsafe { FStr::from_bytes_unchecked(buffer) }
    }
}

impl fmt::LowerHex for Uuid {
    /// Returns the 32-digit hexadecimal representation without hyphens.
    ///
    /// The `#` flag adds the `0x` prefix, and width, fill and zero-padding flags apply as they do
    /// for `u128`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.encode_hex())
    }
}

/// Concrete return type of [`Uuid::format()`] containing a stack-allocated string
/// representation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Formatted(Repr);

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
enum Repr {
    Dashed(FStr<36>),
    Plain(FStr<32>),
}

impl ops::Deref for Formatted {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        match &self.0 {
            Repr::Dashed(s) => s,
            Repr::Plain(s) => s,
        }
    }
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}
