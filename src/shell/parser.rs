//! Shell command parser
//!
//! Parses one line of shell input into a `Command`.
//!
//! # Supported Syntax
//!
//! ```text
//! tab|view plan|tracker|groceries
//! set name|calories|time|quantity [value | 'quoted value']
//! submit|add
//! show
//! export [meals|groceries|all] [table|json|csv]
//! help|?
//! quit|exit
//! ```
//!
//! Keywords are case-insensitive. Inside a quoted value a doubled quote
//! (`''` or `""`) is one literal quote.

use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_while1},
    character::complete::{alpha1, char, multispace1},
    combinator::{eof, map, map_res, opt, peek, rest, value},
    multi::fold_many0,
    sequence::{delimited, preceded, terminated},
    IResult,
};

use crate::planner::View;
use crate::shell::command::{Command, FormField};
use crate::shell::error::{ShellError, ShellResult};
use crate::view::{ExportTarget, OutputFormat};

/// Parse a line of input into a Command
pub fn parse_command(input: &str) -> ShellResult<Command> {
    let input = input.trim();

    match parse_full_command(input) {
        Ok((remaining, command)) => {
            if remaining.trim().is_empty() {
                Ok(command)
            } else {
                Err(ShellError::Parse(format!(
                    "unexpected input after command: '{}'",
                    remaining.trim()
                )))
            }
        }
        Err(_) => Err(ShellError::Parse(format!(
            "unrecognized command: '{}' (type 'help' for a list)",
            input
        ))),
    }
}

fn parse_full_command(input: &str) -> IResult<&str, Command> {
    alt((
        parse_tab,
        parse_set,
        value(Command::Submit, alt((keyword("submit"), keyword("add")))),
        value(Command::Show, keyword("show")),
        parse_export,
        value(Command::Help, alt((keyword("help"), tag("?")))),
        value(Command::Quit, alt((keyword("quit"), keyword("exit")))),
    ))(input)
}

/// Case-insensitive word that must end at whitespace or end of input
fn keyword<'a>(word: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    terminated(tag_no_case(word), peek(alt((multispace1, eof))))
}

/// Parse `tab <view>`
fn parse_tab(input: &str) -> IResult<&str, Command> {
    let (input, _) = alt((keyword("tab"), keyword("view")))(input)?;
    let (input, _) = multispace1(input)?;
    map(parse_view, Command::Tab)(input)
}

fn parse_view(input: &str) -> IResult<&str, View> {
    map_res(alpha1, str::parse::<View>)(input)
}

/// Parse `set <field> [value]`
fn parse_set(input: &str) -> IResult<&str, Command> {
    let (input, _) = keyword("set")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, field) = parse_field(input)?;
    let (input, value) = opt(preceded(multispace1, parse_field_value))(input)?;

    Ok((
        input,
        Command::Set {
            field,
            value: value.unwrap_or_default(),
        },
    ))
}

fn parse_field(input: &str) -> IResult<&str, FormField> {
    alt((
        value(FormField::Name, keyword("name")),
        value(FormField::Calories, alt((keyword("calories"), keyword("kcal")))),
        value(FormField::Time, keyword("time")),
        value(FormField::Quantity, alt((keyword("quantity"), keyword("qty")))),
    ))(input)
}

/// A quoted string, or everything up to the end of the line
fn parse_field_value(input: &str) -> IResult<&str, String> {
    alt((
        parse_quoted_string,
        map(rest, |s: &str| s.trim_end().to_string()),
    ))(input)
}

fn parse_quoted_string(input: &str) -> IResult<&str, String> {
    alt((quoted('\'', "''", "'"), quoted('"', "\"\"", "\"")))(input)
}

/// Text between `quote` characters; a doubled quote stands for one literal quote
fn quoted<'a>(
    quote: char,
    doubled: &'a str,
    single: &'a str,
) -> impl FnMut(&'a str) -> IResult<&'a str, String> {
    delimited(
        char(quote),
        fold_many0(
            alt((
                value(single, tag(doubled)),
                take_while1(move |c: char| c != quote),
            )),
            String::new,
            |mut acc: String, chunk: &'a str| {
                acc.push_str(chunk);
                acc
            },
        ),
        char(quote),
    )
}

/// Parse `export [target] [format]`
fn parse_export(input: &str) -> IResult<&str, Command> {
    let (input, _) = keyword("export")(input)?;
    let (input, target) = opt(preceded(multispace1, parse_export_target))(input)?;
    let (input, format) = opt(preceded(multispace1, parse_output_format))(input)?;

    Ok((
        input,
        Command::Export {
            target: target.unwrap_or(ExportTarget::All),
            format: format.unwrap_or_default(),
        },
    ))
}

fn parse_export_target(input: &str) -> IResult<&str, ExportTarget> {
    alt((
        value(ExportTarget::Meals, keyword("meals")),
        value(ExportTarget::Groceries, keyword("groceries")),
        value(ExportTarget::All, keyword("all")),
    ))(input)
}

fn parse_output_format(input: &str) -> IResult<&str, OutputFormat> {
    alt((
        value(OutputFormat::Table, keyword("table")),
        value(OutputFormat::Json, keyword("json")),
        value(OutputFormat::Csv, keyword("csv")),
    ))(input)
}
