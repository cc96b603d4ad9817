use crate::error::ColorFormatError;
use crate::Float;

/// The notation of a parsed color string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Notation {
    /// Gamma-corrected RGB plus alpha, each in `0..=1`.
    Rgb,
    /// Stored IPT channels plus alpha, each in `0..=1`.
    Ipt,
}

/// Parse a color in hashed hexadecimal format with three, four, six, or eight
/// digits. If successful, this function returns the four channels as unsigned
/// bytes, with alpha defaulting to 0xff.
fn parse_hashed(s: &str) -> Result<[u8; 4], ColorFormatError> {
    let digits = s.strip_prefix('#').ok_or(ColorFormatError::UnknownFormat)?;
    let (width, count) = match digits.len() {
        3 => (1, 3),
        4 => (1, 4),
        6 => (2, 3),
        8 => (2, 4),
        _ => return Err(ColorFormatError::UnexpectedCharacters),
    };

    let parse_channel = |index: usize| -> Result<u8, ColorFormatError> {
        let t = digits
            .get(width * index..width * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;
        Ok(if width == 1 { 16 * n + n } else { n })
    };

    let mut channels = [0xff_u8; 4];
    for (index, channel) in channels.iter_mut().take(count).enumerate() {
        *channel = parse_channel(index)?;
    }
    Ok(channels)
}

/// Parse a color in `ipt()` functional notation. The body has three
/// space-separated channels, optionally followed by a slash and alpha.
fn parse_functional(s: &str) -> Result<[Float; 4], ColorFormatError> {
    let rest = s
        .strip_prefix("ipt")
        .ok_or(ColorFormatError::UnknownFormat)?
        .trim_start()
        .strip_prefix('(')
        .ok_or(ColorFormatError::NoOpeningParenthesis)?
        .strip_suffix(')')
        .ok_or(ColorFormatError::NoClosingParenthesis)?;

    #[inline]
    fn parse_coordinate(s: Option<&str>) -> Result<Float, ColorFormatError> {
        s.ok_or(ColorFormatError::MissingCoordinate)
            .and_then(|t| t.parse().map_err(|_| ColorFormatError::MalformedFloat))
    }

    let mut parts = rest.split('/');
    let mut iter = parts.next().unwrap_or("").split_whitespace();
    let c1 = parse_coordinate(iter.next())?;
    let c2 = parse_coordinate(iter.next())?;
    let c3 = parse_coordinate(iter.next())?;
    if iter.next().is_some() {
        return Err(ColorFormatError::TooManyCoordinates);
    }

    let alpha = match parts.next() {
        None => 1.0,
        Some(t) => {
            let mut iter = t.split_whitespace();
            let alpha = parse_coordinate(iter.next())?;
            if iter.next().is_some() {
                return Err(ColorFormatError::TooManyCoordinates);
            }
            alpha
        }
    };

    if parts.next().is_some() {
        return Err(ColorFormatError::TooManyCoordinates);
    }

    Ok([c1, c2, c3, alpha])
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse the string into a color.
///
/// This function recognizes the hashed hexadecimal format with three, four,
/// six, or eight digits for gamma-corrected RGB and the `ipt()` function with
/// three space-separated channels and an optional alpha after a slash. Before
/// parsing, it trims leading and trailing white space and converts ASCII
/// letters to lowercase.
pub(crate) fn parse(s: &str) -> Result<(Notation, [Float; 4]), ColorFormatError> {
    let lowercase = s.trim().to_ascii_lowercase();
    let s = lowercase.as_str();

    if s.starts_with('#') {
        let [r, g, b, a] = parse_hashed(s)?;
        Ok((
            Notation::Rgb,
            [
                r as Float / 255.0,
                g as Float / 255.0,
                b as Float / 255.0,
                a as Float / 255.0,
            ],
        ))
    } else {
        Ok((Notation::Ipt, parse_functional(s)?))
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Write one coordinate without trailing zeros.
fn write_coordinate(
    coordinate: Float,
    factor: Float,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    if coordinate.is_nan() {
        return f.write_str("none");
    }

    // Formatting with a precision produces trailing zeros, rounding mostly
    // avoids them. An integral value needs an explicit precision of zero.
    let c = (coordinate * factor).round() / factor;
    if c == c.trunc() {
        f.write_fmt(format_args!("{:.0}", c))
    } else {
        f.write_fmt(format_args!("{}", c))
    }
}

/// Format the stored channels as an `ipt()` function.
///
/// This function respects the formatter's precision, defaulting to 5 digits
/// past the decimal. It omits alpha when the color is opaque.
pub(crate) fn format(channels: &[Float; 4], f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let factor = (10.0 as Float).powi(f.precision().unwrap_or(5) as i32);
    let [i, a, b, alpha] = *channels;

    f.write_str("ipt(")?;
    write_coordinate(i, factor, f)?;
    f.write_str(" ")?;
    write_coordinate(a, factor, f)?;
    f.write_str(" ")?;
    write_coordinate(b, factor, f)?;
    if alpha < 1.0 {
        f.write_str(" / ")?;
        write_coordinate(alpha, factor, f)?;
    }
    f.write_str(")")
}

// ====================================================================================================================
