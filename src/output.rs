//! Terminal formatting for search results and passages

use crate::bible::{BibleReference, Verse};
use crate::index::types::VerseResult;
use regex::Regex;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print search results to stdout, one verse per line
pub fn print_results(results: &[VerseResult], keywords: &[String], color: bool) -> io::Result<()> {
    write_results(&mut stdout(color), results, keywords)
}

/// Write search results as `Book C:V  text`, highlighting the keywords
pub fn write_results<W: WriteColor>(
    out: &mut W,
    results: &[VerseResult],
    keywords: &[String],
) -> io::Result<()> {
    let highlighter = keyword_regex(keywords);

    for r in results {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
        write!(out, "{} {}:{}", r.book, r.chapter, r.verse)?;
        out.reset()?;
        write!(out, "  ")?;
        write_highlighted(out, &r.text, highlighter.as_ref())?;
        writeln!(out)?;
    }

    Ok(())
}

/// Print a passage: a heading with the reference, then numbered verses
pub fn print_passage(reference: &BibleReference, verses: &[Verse], color: bool) -> io::Result<()> {
    write_passage(&mut stdout(color), reference, verses)
}

pub fn write_passage<W: WriteColor>(
    out: &mut W,
    reference: &BibleReference,
    verses: &[Verse],
) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    writeln!(out, "{}", reference)?;
    out.reset()?;

    for v in verses {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{:>3}", v.number)?;
        out.reset()?;
        writeln!(out, " {}", v.text)?;
    }

    Ok(())
}

/// Print results as a JSON array
pub fn print_json(results: &[VerseResult]) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, results)?;
    writeln!(stdout)
}

/// Case-insensitive whole-word matcher for any of the keywords
fn keyword_regex(keywords: &[String]) -> Option<Regex> {
    if keywords.is_empty() {
        return None;
    }
    let alternation: Vec<String> = keywords.iter().map(|k| regex::escape(k)).collect();
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation.join("|"))).ok()
}

fn write_highlighted<W: WriteColor>(out: &mut W, text: &str, re: Option<&Regex>) -> io::Result<()> {
    let Some(re) = re else {
        return write!(out, "{}", text);
    };

    let mut last = 0;
    for m in re.find_iter(text) {
        write!(out, "{}", &text[last..m.start()])?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(out, "{}", m.as_str())?;
        out.reset()?;
        last = m.end();
    }
    write!(out, "{}", &text[last..])
}
