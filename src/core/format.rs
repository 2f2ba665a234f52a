//! printf-style substitution for catalog messages.
//!
//! Messages use the familiar verbs (`%s`, `%d`, `%.2f`, `%[2]s`, ...). Argument
//! problems never panic; they are rendered inline so a broken translation
//! stays visible without taking the caller down:
//!
//! | Problem | Output |
//! |---------|--------|
//! | Not enough arguments | `%!d(MISSING)` |
//! | Verb does not fit the argument | `%!d(string=abc)` |
//! | Explicit index out of range | `%!s(BADINDEX)` |
//! | Unused arguments | `%!(EXTRA string=x, int=5)` |
//! | Template ends with `%` | `%!(NOVERB)` |

use std::fmt::{self, Write};

/// Upper bound for width and precision values read from a template.
const MAX_WIDTH: usize = 1_000_000;

/// A single formatting argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Str(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Char(char),
}

impl Arg {
    fn type_name(&self) -> &'static str {
        match self {
            Arg::Str(_) => "string",
            Arg::Int(_) => "int",
            Arg::Uint(_) => "uint",
            Arg::Float(_) => "float64",
            Arg::Bool(_) => "bool",
            Arg::Char(_) => "int32",
        }
    }
}

/// Default (`%v`) rendering.
impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Str(s) => f.write_str(s),
            Arg::Int(n) => write!(f, "{}", n),
            Arg::Uint(n) => write!(f, "{}", n),
            Arg::Float(x) => f.write_str(&float_value(*x)),
            Arg::Bool(b) => write!(f, "{}", b),
            Arg::Char(c) => write!(f, "{}", c),
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Str(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Str(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Arg::Str(value.clone())
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

impl From<char> for Arg {
    fn from(value: char) -> Self {
        Arg::Char(value)
    }
}

impl From<f32> for Arg {
    fn from(value: f32) -> Self {
        Arg::Float(f64::from(value))
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Arg::Float(value)
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty: $($source:ty),*) => {
        $(
            impl From<$source> for Arg {
                fn from(value: $source) -> Self {
                    Arg::$variant(value as $target)
                }
            }
        )*
    };
}

impl_from_int!(Int, i64: i8, i16, i32, i64, isize);
impl_from_int!(Uint, u64: u8, u16, u32, u64, usize);

/// Flags, width and precision of a single directive.
#[derive(Debug, Default, Clone, Copy)]
struct Spec {
    minus: bool,
    plus: bool,
    space: bool,
    zero: bool,
    sharp: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

/// Substitute `args` into `template`.
///
/// # Examples
///
/// ```
/// use glossa::core::format::{Arg, format};
///
/// assert_eq!(format("Hello %s", &["World".into()]), "Hello World");
/// assert_eq!(format("%d items", &[Arg::Int(5)]), "5 items");
/// assert_eq!(format("%[2]s, %[1]s", &["a".into(), "b".into()]), "b, a");
/// ```
pub fn format(template: &str, args: &[Arg]) -> String {
    let bytes = template.as_bytes();
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut arg_num = 0;
    let mut reordered = false;
    let mut i = 0;

    while i < bytes.len() {
        let literal_start = i;
        while i < bytes.len() && bytes[i] != b'%' {
            i += 1;
        }
        out.push_str(&template[literal_start..i]);
        if i >= bytes.len() {
            break;
        }
        i += 1;

        let mut spec = Spec::default();
        while i < bytes.len() {
            match bytes[i] {
                b'-' => spec.minus = true,
                b'+' => spec.plus = true,
                b' ' => spec.space = true,
                b'0' => spec.zero = true,
                b'#' => spec.sharp = true,
                _ => break,
            }
            i += 1;
        }

        let mut good_index = true;
        let mut after_index = false;
        if let Some((index, next)) = parse_index(template, i) {
            reordered = true;
            after_index = true;
            i = next;
            match index {
                Some(n) if n >= 1 && n <= args.len() => arg_num = n - 1,
                _ => good_index = false,
            }
        }

        let (width, next) = parse_number(bytes, i);
        spec.width = width;
        i = next;

        if i < bytes.len() && bytes[i] == b'.' {
            let (precision, next) = parse_number(bytes, i + 1);
            spec.precision = Some(precision.unwrap_or(0));
            i = next;
        }

        if !after_index && let Some((index, next)) = parse_index(template, i) {
            reordered = true;
            i = next;
            match index {
                Some(n) if n >= 1 && n <= args.len() => arg_num = n - 1,
                _ => good_index = false,
            }
        }

        let Some(verb) = template[i..].chars().next() else {
            out.push_str("%!(NOVERB)");
            break;
        };
        i += verb.len_utf8();

        match verb {
            '%' => out.push('%'),
            _ if !good_index => {
                let _ = write!(out, "%!{}(BADINDEX)", verb);
            }
            _ if arg_num >= args.len() => {
                let _ = write!(out, "%!{}(MISSING)", verb);
            }
            _ => {
                let arg = &args[arg_num];
                match render(arg, verb, &spec) {
                    Some(text) => out.push_str(&text),
                    None => {
                        let _ = write!(out, "%!{}({}={})", verb, arg.type_name(), arg);
                    }
                }
                arg_num += 1;
            }
        }
    }

    if !reordered && arg_num < args.len() {
        out.push_str("%!(EXTRA ");
        let extra: Vec<String> = args[arg_num..]
            .iter()
            .map(|arg| format!("{}={}", arg.type_name(), arg))
            .collect();
        out.push_str(&extra.join(", "));
        out.push(')');
    }

    out
}

/// Parse an explicit argument index like `[2]` starting at byte `i`.
///
/// Returns `None` when there is no `[`; otherwise the 1-based index (or `None`
/// when malformed) and the position after the closing bracket.
fn parse_index(template: &str, i: usize) -> Option<(Option<usize>, usize)> {
    let rest = template.get(i..)?;
    if !rest.starts_with('[') {
        return None;
    }
    match rest.find(']') {
        Some(close) => {
            let index = rest[1..close].parse::<usize>().ok();
            Some((index, i + close + 1))
        }
        None => Some((None, i + 1)),
    }
}

fn parse_number(bytes: &[u8], mut i: usize) -> (Option<usize>, usize) {
    let start = i;
    let mut value: usize = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        value = value
            .saturating_mul(10)
            .saturating_add(usize::from(bytes[i] - b'0'))
            .min(MAX_WIDTH);
        i += 1;
    }
    if i == start { (None, i) } else { (Some(value), i) }
}

/// Render one argument, or `None` when the verb does not apply to it.
fn render(arg: &Arg, verb: char, spec: &Spec) -> Option<String> {
    match arg {
        Arg::Str(s) => match verb {
            's' | 'v' => Some(pad_text(truncate(s, spec.precision), spec)),
            'q' => Some(pad_text(&format!("{:?}", s), spec)),
            'x' => Some(pad_text(&hex_bytes(s, false), spec)),
            'X' => Some(pad_text(&hex_bytes(s, true), spec)),
            _ => None,
        },
        Arg::Int(n) => integer(*n < 0, n.unsigned_abs(), verb, spec),
        Arg::Uint(n) => integer(false, *n, verb, spec),
        Arg::Char(c) => match verb {
            's' | 'v' => Some(pad_text(&c.to_string(), spec)),
            _ => integer(false, u64::from(u32::from(*c)), verb, spec),
        },
        Arg::Float(x) => float(*x, verb, spec),
        Arg::Bool(b) => match verb {
            't' | 'v' => Some(pad_text(if *b { "true" } else { "false" }, spec)),
            _ => None,
        },
    }
}

fn integer(negative: bool, magnitude: u64, verb: char, spec: &Spec) -> Option<String> {
    let mut prefix = sign(negative, spec).to_string();
    let mut digits = match verb {
        'd' | 'v' => magnitude.to_string(),
        'x' => format!("{:x}", magnitude),
        'X' => format!("{:X}", magnitude),
        'o' => format!("{:o}", magnitude),
        'b' => format!("{:b}", magnitude),
        'c' => {
            let c = char_from(magnitude);
            return Some(pad_text(&c.to_string(), spec));
        }
        'q' => {
            let c = char_from(magnitude);
            return Some(pad_text(&format!("{:?}", c), spec));
        }
        'U' => {
            return Some(pad_text(&format!("U+{:04X}", magnitude), spec));
        }
        _ => return None,
    };

    if let Some(precision) = spec.precision {
        if precision == 0 && magnitude == 0 {
            digits.clear();
        } else if digits.len() < precision {
            digits.insert_str(0, &"0".repeat(precision - digits.len()));
        }
    }

    if spec.sharp {
        match verb {
            'x' => prefix.push_str("0x"),
            'X' => prefix.push_str("0X"),
            'b' => prefix.push_str("0b"),
            'o' if !digits.starts_with('0') => prefix.push('0'),
            _ => {}
        }
    }

    // Explicit precision disables zero padding.
    let zero = spec.zero && spec.precision.is_none();
    Some(pad_number(&prefix, &digits, spec, zero))
}

fn float(x: f64, verb: char, spec: &Spec) -> Option<String> {
    if !matches!(verb, 'v' | 'f' | 'F' | 'e' | 'E' | 'g' | 'G') {
        return None;
    }
    // Infinities and NaN are padded with spaces even under `0`.
    let special = Spec {
        zero: false,
        ..*spec
    };
    if x.is_nan() {
        return Some(pad_text("NaN", &special));
    }
    if x.is_infinite() {
        let text = if x.is_sign_negative() { "-Inf" } else { "+Inf" };
        return Some(pad_text(text, &special));
    }

    let negative = x.is_sign_negative();
    let abs = x.abs();
    let digits = match verb {
        'f' | 'F' => format!("{:.*}", spec.precision.unwrap_or(6), abs),
        'e' => scientific(abs, spec.precision.unwrap_or(6), false),
        'E' => scientific(abs, spec.precision.unwrap_or(6), true),
        'G' => general(abs, spec.precision, true),
        _ => general(abs, spec.precision, false),
    };
    Some(pad_number(sign(negative, spec), &digits, spec, spec.zero))
}

/// `%v` rendering of a float: shortest representation, switching to
/// exponent form for very large or very small magnitudes.
fn float_value(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x.is_sign_negative() { "-Inf" } else { "+Inf" }.to_string();
    }
    let body = general(x.abs(), None, false);
    if x.is_sign_negative() {
        format!("-{}", body)
    } else {
        body
    }
}

fn scientific(abs: f64, precision: usize, upper: bool) -> String {
    let raw = format!("{:.*e}", precision, abs);
    let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let mut out = mantissa.to_string();
    push_exponent(&mut out, exponent.parse().unwrap_or(0), upper);
    out
}

fn general(abs: f64, precision: Option<usize>, upper: bool) -> String {
    let (digits, point) = decimal_digits(abs, precision);
    let count = i32::try_from(digits.len()).unwrap_or(i32::MAX);
    let limit = match precision {
        None => 6,
        Some(p) => {
            let p = i32::try_from(p.max(1)).unwrap_or(i32::MAX);
            if p > count && count >= point { count } else { p }
        }
    };
    let exponent = point - 1;

    if exponent < -4 || exponent >= limit {
        let mut out = digits[..1].to_string();
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        push_exponent(&mut out, exponent, upper);
        return out;
    }

    if point <= 0 {
        let zeros = usize::try_from(-point).unwrap_or(0);
        format!("0.{}{}", "0".repeat(zeros), digits)
    } else {
        let point = usize::try_from(point).unwrap_or(0);
        if point >= digits.len() {
            format!("{}{}", digits, "0".repeat(point - digits.len()))
        } else {
            format!("{}.{}", &digits[..point], &digits[point..])
        }
    }
}

/// Significant decimal digits of `abs` (trailing zeros removed) and the
/// position of the decimal point relative to the first digit.
fn decimal_digits(abs: f64, precision: Option<usize>) -> (String, i32) {
    let raw = match precision {
        None => format!("{:e}", abs),
        Some(p) => format!("{:.*e}", p.max(1) - 1, abs),
    };
    let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let mut digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    while digits.len() > 1 && digits.ends_with('0') {
        digits.pop();
    }
    (digits, exponent + 1)
}

fn push_exponent(out: &mut String, exponent: i32, upper: bool) {
    out.push(if upper { 'E' } else { 'e' });
    out.push(if exponent < 0 { '-' } else { '+' });
    let _ = write!(out, "{:02}", exponent.unsigned_abs());
}

fn sign(negative: bool, spec: &Spec) -> &'static str {
    if negative {
        "-"
    } else if spec.plus {
        "+"
    } else if spec.space {
        " "
    } else {
        ""
    }
}

fn char_from(code: u64) -> char {
    u32::try_from(code)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

fn truncate(s: &str, precision: Option<usize>) -> &str {
    match precision.and_then(|p| s.char_indices().nth(p)) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

fn hex_bytes(s: &str, upper: bool) -> String {
    s.bytes()
        .map(|b| {
            if upper {
                format!("{:02X}", b)
            } else {
                format!("{:02x}", b)
            }
        })
        .collect()
}

fn pad_text(text: &str, spec: &Spec) -> String {
    let len = text.chars().count();
    match spec.width {
        Some(width) if width > len => {
            let count = width - len;
            if spec.minus {
                format!("{}{}", text, " ".repeat(count))
            } else if spec.zero {
                format!("{}{}", "0".repeat(count), text)
            } else {
                format!("{}{}", " ".repeat(count), text)
            }
        }
        _ => text.to_string(),
    }
}

fn pad_number(prefix: &str, digits: &str, spec: &Spec, zero: bool) -> String {
    let len = prefix.len() + digits.len();
    match spec.width {
        Some(width) if width > len => {
            let fill = width - len;
            if spec.minus {
                format!("{}{}{}", prefix, digits, " ".repeat(fill))
            } else if zero {
                format!("{}{}{}", prefix, "0".repeat(fill), digits)
            } else {
                format!("{}{}{}", " ".repeat(fill), prefix, digits)
            }
        }
        _ => format!("{}{}", prefix, digits),
    }
}
