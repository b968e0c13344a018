//! Module Template
//!
//! The generated file is a sibling of a bindgen `sys` module built from
//! `<pdh.h>` and `<pdhmsg.h>`. Every constant reads its value from
//! `sys::NAME`, so the numbers come from the headers when the generated
//! module itself is compiled; only names are baked in here.
//!
//! `<pdhmsg.h>` spells its codes as casts such as `((DWORD)0x800007D5L)`,
//! which bindgen skips by default. The `sys` module has to be generated
//! with `clang_macro_fallback()` enabled for those constants to exist.
//!
//! The error-code section is produced from the scanned names. The header
//! and the counter-format section are fixed text.

use pdhgen_core::{Error, RenderParams, Result};
use std::fmt::Write;

const HEADER: &str = "\
// cargo run -p pdhgen-cli
// MACHINE GENERATED BY THE ABOVE COMMAND; DO NOT EDIT
//
// `sys` must come from bindgen with `clang_macro_fallback()` enabled;
// the PDH status macros are casts that bindgen skips otherwise.

use std::collections::HashSet;
use std::ops::BitOr;
use std::sync::LazyLock;

use super::sys;

pub type PdhErrno = u32;
";

const COUNTER_FORMATS: &str = "
/// Format of a counter value returned by `PdhGetFormattedCounterValue`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PdhCounterFormat(pub u32);

// PDH Counter Formats
impl PdhCounterFormat {
    /// Return data as a double-precision floating point real.
    pub const DOUBLE: Self = Self(sys::PDH_FMT_DOUBLE as u32);
    /// Return data as a 64-bit integer.
    pub const LARGE: Self = Self(sys::PDH_FMT_LARGE as u32);
    /// Return data as a long integer.
    pub const LONG: Self = Self(sys::PDH_FMT_LONG as u32);

    // Combine the modifiers below with a data format using `|` to scale the value.

    /// Do not apply the counter's default scaling factor.
    pub const NO_SCALE: Self = Self(sys::PDH_FMT_NOSCALE as u32);
    /// Do not cap values at 100. Counters such as processor load on
    /// multiprocessor machines can legitimately exceed 100; by default
    /// such values are reset to 100.
    pub const NO_CAP_100: Self = Self(sys::PDH_FMT_NOCAP100 as u32);
    /// Multiply the actual value by 1,000.
    pub const MULTIPLY_1000: Self = Self(sys::PDH_FMT_1000 as u32);
}

impl BitOr for PdhCounterFormat {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}
";

/// Render the complete definitions module
pub fn render(params: &RenderParams) -> Result<String> {
    for name in &params.errors {
        check_identifier(name)?;
    }

    let mut out = String::with_capacity(
        HEADER.len() + COUNTER_FORMATS.len() + params.errors.len() * 96,
    );
    out.push_str(HEADER);
    render_error_codes(&mut out, &params.errors)?;
    out.push_str(COUNTER_FORMATS);
    Ok(out)
}

fn render_error_codes(out: &mut String, errors: &[String]) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "// PDH Error Codes")?;
    for name in errors {
        writeln!(out, "pub const {name}: PdhErrno = sys::{name} as PdhErrno;")?;
    }

    writeln!(out)?;
    writeln!(out, "/// Every PDH status code above.")?;
    writeln!(out, "pub static PDH_ERRORS: LazyLock<HashSet<PdhErrno>> = LazyLock::new(|| {{")?;
    writeln!(out, "    HashSet::from([")?;
    for name in errors {
        writeln!(out, "        {name},")?;
    }
    writeln!(out, "    ])")?;
    writeln!(out, "}});")?;

    writeln!(out)?;
    writeln!(out, "/// Whether `code` is one of the PDH status codes.")?;
    writeln!(out, "pub fn is_pdh_error(code: PdhErrno) -> bool {{")?;
    writeln!(out, "    PDH_ERRORS.contains(&code)")?;
    writeln!(out, "}}")?;
    Ok(())
}

fn check_identifier(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(Error::Template(format!("{:?} is not a valid identifier", name)))
    }
}
