//! HTML rendering of a [`Document`].
//!
//! Output is a single self-contained page: the stylesheet is embedded and
//! there are no scripts or external assets.

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::document::{Block, Document, Fact, Section, SectionStyle, TableStyle};

const STYLESHEET: &str = include_str!("report.css");

type HtmlWriter = Writer<Vec<u8>>;

fn start(writer: &mut HtmlWriter, name: &str, class: Option<&str>) -> Result<()> {
    let mut elem = BytesStart::new(name);
    if let Some(class) = class {
        elem.push_attribute(("class", class));
    }
    writer.write_event(Event::Start(elem))?;
    Ok(())
}

fn end(writer: &mut HtmlWriter, name: &str) -> Result<()> {
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn write_text_element(
    writer: &mut HtmlWriter,
    name: &str,
    class: Option<&str>,
    text: &str,
) -> Result<()> {
    start(writer, name, class)?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    end(writer, name)
}

fn write_row<S: AsRef<str>>(writer: &mut HtmlWriter, cell: &str, values: &[S]) -> Result<()> {
    start(writer, "tr", None)?;
    for value in values {
        write_text_element(writer, cell, None, value.as_ref())?;
    }
    end(writer, "tr")
}

fn write_facts(writer: &mut HtmlWriter, facts: &[Fact]) -> Result<()> {
    start(writer, "table", Some("data-table"))?;
    for fact in facts {
        start(writer, "tr", None)?;
        write_text_element(writer, "th", None, &fact.label)?;
        let class = fact.list.then_some("column-list");
        write_text_element(writer, "td", class, &fact.value)?;
        end(writer, "tr")?;
    }
    end(writer, "table")
}

fn write_block(writer: &mut HtmlWriter, block: &Block) -> Result<()> {
    match block {
        Block::Paragraph { text } => write_text_element(writer, "p", None, text),
        Block::Heading { text } => write_text_element(writer, "h4", None, text),
        Block::Score { text } => write_text_element(writer, "div", Some("overall-score"), text),
        Block::Facts { rows } => write_facts(writer, rows),
        Block::Table {
            style,
            headers,
            rows,
        } => {
            let class = match style {
                TableStyle::Data => "data-table",
                TableStyle::Score => "score-table",
            };
            start(writer, "table", Some(class))?;
            write_row(writer, "th", headers)?;
            for row in rows {
                write_row(writer, "td", row)?;
            }
            end(writer, "table")
        }
        Block::List { items } => {
            start(writer, "ul", Some("recommendations-list"))?;
            for item in items {
                write_text_element(writer, "li", None, item)?;
            }
            end(writer, "ul")
        }
        Block::Placeholder { text } => write_text_element(writer, "p", Some("no-data"), text),
    }
}

fn write_section(writer: &mut HtmlWriter, section: &Section) -> Result<()> {
    match section.style {
        SectionStyle::Header => {
            start(writer, "div", Some("header"))?;
            write_text_element(writer, "h2", None, &section.title)?;
        }
        SectionStyle::Analysis => {
            start(writer, "div", Some("analysis-section"))?;
            write_text_element(writer, "h3", Some("section-title"), &section.title)?;
        }
        SectionStyle::Check => {
            start(writer, "div", Some("check-section"))?;
            start(writer, "div", Some("section-header"))?;
            write_text_element(writer, "h3", None, &section.title)?;
            end(writer, "div")?;
        }
    }
    for block in &section.blocks {
        write_block(writer, block)?;
    }
    end(writer, "div")
}

/// Renders `document` as a complete HTML page.
///
/// The same document always renders to the same bytes.
pub fn render_html(document: &Document) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::DocType(BytesText::from_escaped("html")))?;
    let mut html = BytesStart::new("html");
    html.push_attribute(("lang", "en"));
    writer.write_event(Event::Start(html))?;

    start(&mut writer, "head", None)?;
    let mut meta = BytesStart::new("meta");
    meta.push_attribute(("charset", "utf-8"));
    writer.write_event(Event::Empty(meta))?;
    write_text_element(&mut writer, "title", None, &document.title)?;
    start(&mut writer, "style", None)?;
    writer.write_event(Event::Text(BytesText::from_escaped(STYLESHEET)))?;
    end(&mut writer, "style")?;
    end(&mut writer, "head")?;

    start(&mut writer, "body", None)?;
    for section in &document.sections {
        write_section(&mut writer, section)?;
    }
    end(&mut writer, "body")?;
    end(&mut writer, "html")?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    String::from_utf8(bytes).context("report html is not valid UTF-8")
}
