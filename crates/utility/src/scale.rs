//! Fixed spacing and font-size scales, plus bracketed custom lengths.
//!
//! All values are in rem-equivalent units: spacing key `n` is `n * 0.25`,
//! `px` lengths are divided by 16 and `em` is treated as `rem`.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1},
    combinator::{all_consuming, map, map_res, opt, recognize},
    sequence::{delimited, pair, tuple},
};
use phf::phf_map;

static SPACING: phf::Map<&'static str, f32> = phf_map! {
    "0" => 0.0,
    "px" => 0.0625,
    "0.5" => 0.125,
    "1" => 0.25,
    "1.5" => 0.375,
    "2" => 0.5,
    "2.5" => 0.625,
    "3" => 0.75,
    "3.5" => 0.875,
    "4" => 1.0,
    "5" => 1.25,
    "6" => 1.5,
    "7" => 1.75,
    "8" => 2.0,
    "9" => 2.25,
    "10" => 2.5,
    "11" => 2.75,
    "12" => 3.0,
    "14" => 3.5,
    "16" => 4.0,
    "20" => 5.0,
    "24" => 6.0,
    "28" => 7.0,
    "32" => 8.0,
    "36" => 9.0,
    "40" => 10.0,
    "44" => 11.0,
    "48" => 12.0,
    "52" => 13.0,
    "56" => 14.0,
    "60" => 15.0,
    "64" => 16.0,
    "72" => 18.0,
    "80" => 20.0,
    "96" => 24.0,
};

static FONT_SIZE: phf::Map<&'static str, f32> = phf_map! {
    "xs" => 0.75,
    "sm" => 0.875,
    "base" => 1.0,
    "lg" => 1.125,
    "xl" => 1.25,
    "2xl" => 1.5,
    "3xl" => 1.875,
    "4xl" => 2.25,
    "5xl" => 3.0,
    "6xl" => 3.75,
    "7xl" => 4.5,
    "8xl" => 6.0,
    "9xl" => 8.0,
};

const PX_PER_REM: f32 = 16.0;

/// Looks up a spacing key (`4`, `0.5`, `px`) or a bracketed length.
pub fn spacing(key: &str) -> Option<f32> {
    SPACING.get(key).copied().or_else(|| bracketed_length(key))
}

/// Looks up a font-size scale name (`lg`, `2xl`).
pub fn font_size(name: &str) -> Option<f32> {
    FONT_SIZE.get(name).copied()
}

/// Returns true if `name` is on the font-size scale.
pub fn is_font_size(name: &str) -> bool {
    FONT_SIZE.contains_key(name)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum LengthUnit {
    Px,
    Rem,
    Em,
}

/// Parses `[12px]`, `[1.5rem]`, `[2em]` or `[3]` into rem-equivalent units.
pub fn bracketed_length(input: &str) -> Option<f32> {
    all_consuming(parse_bracketed)(input)
        .ok()
        .map(|(_, value)| value)
}

fn parse_bracketed(input: &str) -> IResult<&str, f32> {
    map(
        delimited(char('['), pair(parse_number, opt(parse_unit)), char(']')),
        |(value, unit)| match unit {
            Some(LengthUnit::Px) => value / PX_PER_REM,
            Some(LengthUnit::Rem) | Some(LengthUnit::Em) | None => value,
        },
    )(input)
}

fn parse_number(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize(tuple((digit1, opt(pair(char('.'), digit1))))),
        |s: &str| s.parse::<f32>(),
    )(input)
}

fn parse_unit(input: &str) -> IResult<&str, LengthUnit> {
    alt((
        map(tag("px"), |_| LengthUnit::Px),
        map(tag("rem"), |_| LengthUnit::Rem),
        map(tag("em"), |_| LengthUnit::Em),
    ))(input)
}
