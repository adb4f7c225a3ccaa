//! Rendering a `Number` to text (any output base) or to a raw digit
//! byte stream (the `dc` register-transfer protocol).

use crate::cancel::Cancel;
use crate::error::Status;

use super::{MAX_IBASE, MAX_OBASE, MIN_BASE, Number};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Formatting knobs for [`Number::print`].
#[derive(Clone, Copy, Debug)]
pub struct PrintOptions {
    /// Emit a trailing newline after the number.
    pub newline: bool,
    /// Column at which output wraps with a trailing `\` continuation,
    /// mirroring a terminal's line width. `0` disables wrapping.
    pub line_len: usize,
}

impl Default for PrintOptions {
    fn default() -> Self {
        PrintOptions {
            newline: false,
            line_len: 70,
        }
    }
}

impl Number {
    /// Renders this value in base `obase`, honoring `opts`.
    pub fn print(&self, obase: u32, opts: PrintOptions, cancel: &Cancel) -> Result<String, Status> {
        debug_assert!(obase >= MIN_BASE && obase <= MAX_OBASE);

        let mut out = String::new();
        let mut nchars = 0usize;
        print_newline(&mut out, &mut nchars, opts.line_len);

        if self.is_zero() {
            out.push('0');
            nchars += 1;
        } else if obase == 10 {
            print_decimal(self, &mut out, &mut nchars, opts.line_len);
        } else {
            print_in_base(self, obase, &mut out, &mut nchars, opts.line_len, cancel)?;
        }

        if opts.newline {
            out.push('\n');
        }

        Ok(out)
    }

    /// Emits this value's magnitude as a raw byte per digit of base
    /// `base`, most significant first. Used for `dc`'s register-transfer
    /// stream rather than for human-readable display: no sign, no digit
    /// separators, no line wrapping.
    pub fn stream(&self, base: u32, cancel: &Cancel) -> Result<Vec<u8>, Status> {
        let mut out = Vec::new();
        if self.is_zero() {
            out.push(0u8);
            return Ok(out);
        }

        let mut mag = self.clone();
        mag.neg = false;
        let base_num = Number::from_u64(base as u64);
        let (int_digits, frac_digits) = convert_digits(&mag, &base_num, cancel)?;
        out.extend(int_digits.into_iter().map(|d| d as u8));
        out.extend(frac_digits.into_iter().map(|d| d as u8));
        Ok(out)
    }

    /// This value rendered in base 10, with no line wrapping. Backs
    /// [`std::fmt::Display`].
    pub(crate) fn to_decimal_string(&self) -> Result<String, Status> {
        let cancel = Cancel::new();
        self.print(
            10,
            PrintOptions {
                newline: false,
                line_len: 0,
            },
            &cancel,
        )
    }
}

/// Wraps output with a trailing `\` continuation once `nchars` reaches
/// `line_len - 1`. A `line_len` of `0` disables wrapping.
fn print_newline(out: &mut String, nchars: &mut usize, line_len: usize) {
    if line_len > 0 && *nchars == line_len - 1 {
        out.push('\\');
        out.push('\n');
        *nchars = 0;
    }
}

fn print_decimal(n: &Number, out: &mut String, nchars: &mut usize, line_len: usize) {
    if n.is_negative() {
        out.push('-');
        *nchars += 1;
    }
    let dot_index = if n.rdx > 0 { Some(n.rdx - 1) } else { None };
    for i in (0..n.digits.len()).rev() {
        let radix = Some(i) == dot_index;
        print_hex_cell(n.digits[i] as usize, radix, out, nchars, line_len);
    }
}

fn print_in_base(
    n: &Number,
    obase: u32,
    out: &mut String,
    nchars: &mut usize,
    line_len: usize,
    cancel: &Cancel,
) -> Result<(), Status> {
    if n.is_negative() {
        out.push('-');
        *nchars += 1;
    }
    let mut mag = n.clone();
    mag.neg = false;

    let (width, hex) = if obase <= MAX_IBASE {
        (1usize, true)
    } else {
        let mut w = 0usize;
        let mut i = obase - 1;
        while i != 0 {
            i /= 10;
            w += 1;
        }
        (w, false)
    };

    let base_num = Number::from_u64(obase as u64);
    let (int_digits, frac_digits) = convert_digits(&mag, &base_num, cancel)?;

    for d in int_digits {
        print_digit_cell(d, width, false, hex, out, nchars, line_len);
    }
    for (i, d) in frac_digits.into_iter().enumerate() {
        print_digit_cell(d, width, i == 0, hex, out, nchars, line_len);
    }

    Ok(())
}

/// Splits `n` (already sign-stripped) into its digits in base
/// `base_num`, integer part most-significant first followed by the
/// fractional part in generation order.
fn convert_digits(n: &Number, base_num: &Number, cancel: &Cancel) -> Result<(Vec<u64>, Vec<u64>), Status> {
    let mut intp = n.clone();
    intp.truncate(intp.rdx);

    let mut int_digits = Vec::new();
    while !intp.is_zero() {
        let (q, r) = intp.divmod(base_num, 0, cancel)?;
        intp = q;
        int_digits.push(r.to_u64()?);
    }
    int_digits.reverse();

    let mut frac_digits = Vec::new();
    if n.rdx > 0 {
        let int_part = {
            let mut t = n.clone();
            t.truncate(t.rdx);
            t
        };
        let mut fracp = n.sub(&int_part, 0, cancel)?;
        let mut frac_len = Number::one();
        while frac_len.len() <= n.rdx {
            cancel.poll()?;
            fracp = fracp.mul(base_num, n.rdx, cancel)?;
            let dig = fracp.to_u64()?;
            fracp = fracp.sub(&Number::from_u64(dig), 0, cancel)?;
            frac_digits.push(dig);
            frac_len = frac_len.mul(base_num, 0, cancel)?;
        }
    }

    Ok((int_digits, frac_digits))
}

fn print_digit_cell(
    value: u64,
    width: usize,
    radix: bool,
    hex: bool,
    out: &mut String,
    nchars: &mut usize,
    line_len: usize,
) {
    if hex {
        print_hex_cell(value as usize, radix, out, nchars, line_len);
    } else {
        print_decimal_cell(value, width, radix, out, nchars, line_len);
    }
}

fn print_hex_cell(value: usize, radix: bool, out: &mut String, nchars: &mut usize, line_len: usize) {
    if radix {
        print_newline(out, nchars, line_len);
        out.push('.');
        *nchars += 1;
    }
    print_newline(out, nchars, line_len);
    out.push(HEX_DIGITS[value] as char);
    *nchars += 1;
}

fn print_decimal_cell(value: u64, width: usize, radix: bool, out: &mut String, nchars: &mut usize, line_len: usize) {
    print_newline(out, nchars, line_len);
    out.push(if radix { '.' } else { ' ' });
    *nchars += 1;

    let text = format!("{value:0width$}");
    for ch in text.chars() {
        print_newline(out, nchars, line_len);
        out.push(ch);
        *nchars += 1;
    }
}
