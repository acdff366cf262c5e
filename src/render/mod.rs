// src/render/mod.rs
//! Turns a block sequence into a PDF. Pagination, wrapping, page breaks and
//! font embedding all belong to genpdf; this module only maps blocks to
//! elements and hands them over in order.

pub mod fonts;

use crate::config::{Margins, RenderSettings};
use crate::error::Error;
use crate::layout::{Align, Block, TextRole};
use genpdf::elements::{Break, Paragraph, TableLayout, UnorderedList};
use genpdf::style::{Color, Style};
use genpdf::{Alignment, Element};
use std::path::Path;
use tracing::info;

const HEADER_COLOR: Color = Color::Rgb(0x2e, 0x40, 0x53);
const CONTACT_GREY: Color = Color::Greyscale(128);

fn role_style(role: TextRole) -> Style {
    match role {
        TextRole::Name => Style::new().bold().with_font_size(20),
        TextRole::Contact => Style::new()
            .italic()
            .with_font_size(9)
            .with_color(CONTACT_GREY),
        TextRole::HeaderName => Style::new()
            .bold()
            .with_font_size(12)
            .with_color(HEADER_COLOR),
        TextRole::Header => Style::new().with_font_size(12).with_color(HEADER_COLOR),
        TextRole::Body => Style::new().with_font_size(10),
        TextRole::LetterBody | TextRole::Closing => Style::new().with_font_size(11),
    }
}

fn alignment(align: Align) -> Alignment {
    match align {
        Align::Left => Alignment::Left,
        Align::Center => Alignment::Center,
        Align::Right => Alignment::Right,
    }
}

/// Render the block sequence to a PDF at `out`, creating parent directories
/// as needed.
pub fn render_pdf(
    blocks: &[Block],
    settings: &RenderSettings,
    margins: Margins,
    title: &str,
    out: &Path,
) -> Result<(), Error> {
    let family = fonts::load_family(&settings.font_dir, &settings.font_family)?;

    let mut doc = genpdf::Document::new(family);
    doc.set_title(title);
    doc.set_paper_size(genpdf::PaperSize::Letter);
    doc.set_font_size(10);

    let mut decorator = genpdf::SimplePageDecorator::new();
    decorator.set_margins(genpdf::Margins::trbl(
        margins.top,
        margins.right,
        margins.bottom,
        margins.left,
    ));
    doc.set_page_decorator(decorator);

    for block in blocks {
        push_block(&mut doc, block)?;
    }

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| {
                Error::io(
                    format!("failed to create output directory {}", parent.display()),
                    source,
                )
            })?;
        }
    }

    doc.render_to_file(out)?;
    info!("rendered {} blocks to {}", blocks.len(), out.display());
    Ok(())
}

fn push_block(doc: &mut genpdf::Document, block: &Block) -> Result<(), Error> {
    match block {
        Block::Text {
            content,
            role,
            align,
        } => {
            doc.push(
                Paragraph::new(content.as_str())
                    .aligned(alignment(*align))
                    .styled(role_style(*role)),
            );
        }
        Block::SectionHeading(title) => {
            doc.push(Paragraph::new(title.as_str()).styled(Style::new().bold().with_font_size(12)));
        }
        Block::RoleDateRow {
            left,
            right,
            primary,
        } => {
            let style = if *primary {
                Style::new().bold().with_font_size(10)
            } else {
                Style::new().italic().with_font_size(9)
            };
            let mut table = TableLayout::new(vec![2, 1]);
            table
                .row()
                .element(Paragraph::new(left.as_str()).styled(style.clone()))
                .element(
                    Paragraph::new(right.as_str())
                        .aligned(Alignment::Right)
                        .styled(style),
                )
                .push()?;
            doc.push(table);
        }
        Block::BulletList { items } => {
            let mut list = UnorderedList::with_bullet("•");
            for item in items {
                list.push(Paragraph::new(item.as_str()).styled(Style::new().with_font_size(10)));
            }
            doc.push(list);
        }
        Block::LabeledLine { label, values } => {
            doc.push(
                Paragraph::default()
                    .styled_string(format!("{}: ", label), Style::new().bold())
                    .string(values.join(", "))
                    .styled(Style::new().with_font_size(9)),
            );
        }
        Block::Gap(lines) => {
            doc.push(Break::new(*lines));
        }
    }
    Ok(())
}
