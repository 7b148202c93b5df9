use crate::models::portfolio::Portfolio;
use crate::services::analytics_service::value;

use super::format::{format_amount, truncate_chars};
use super::pdf::{Font, PageCanvas, PdfDocument, Rgb, BLACK, PAGE_HEIGHT};

/// Base-14 fonts carry no rupee glyph, so reports spell the currency out.
pub const REPORT_CURRENCY: &str = "Rs.";

/// Asset names longer than this are cut in the holdings table.
pub const NAME_WIDTH_CHARS: usize = 25;

const MARGIN: f64 = 54.0;
const HEADER_ROW_HEIGHT: f64 = 24.0;
const ROW_HEIGHT: f64 = 18.0;
const CELL_PADDING: f64 = 4.0;

const HEADER_FILL: Rgb = (0.5, 0.5, 0.5);
const HEADER_TEXT: Rgb = (0.96, 0.96, 0.96);
const ROW_FILL: Rgb = (0.96, 0.96, 0.86);

const COLUMNS: [(&str, f64); 5] = [
    ("Asset Name", 170.0),
    ("Type", 90.0),
    ("Quantity", 70.0),
    ("Price", 85.0),
    ("Value", 85.0),
];

/// Render the portfolio report as PDF bytes.
///
/// Page one carries the title, summary and the start of the holdings
/// table; rows that do not fit continue on further pages under a repeated
/// header row. An empty portfolio still yields a one-page report.
#[must_use]
pub fn to_document(portfolio: &Portfolio) -> Vec<u8> {
    let title = format!("Portfolio Report: {}", portfolio.name);
    let mut doc = PdfDocument::new(title.clone());
    let mut page = PageCanvas::new();
    let mut y = PAGE_HEIGHT - MARGIN - 18.0;

    page.text(Font::Bold, 18.0, MARGIN, y, &title, BLACK);
    y -= 30.0;

    let total_value: f64 = portfolio.holdings.iter().map(value).sum();
    page.text(
        Font::Regular,
        11.0,
        MARGIN,
        y,
        &format!(
            "Total Value: {REPORT_CURRENCY}{}",
            format_amount(total_value)
        ),
        BLACK,
    );
    y -= 16.0;
    page.text(
        Font::Regular,
        11.0,
        MARGIN,
        y,
        &format!("Number of Holdings: {}", portfolio.holdings.len()),
        BLACK,
    );
    y -= 28.0;

    page.text(Font::Bold, 14.0, MARGIN, y, "Holdings", BLACK);
    y -= 12.0;

    y = draw_header_row(&mut page, y);

    for holding in &portfolio.holdings {
        if y - ROW_HEIGHT < MARGIN {
            doc.push_page(std::mem::take(&mut page));
            y = draw_header_row(&mut page, PAGE_HEIGHT - MARGIN);
        }

        let cells = [
            truncate_chars(&holding.asset_name, NAME_WIDTH_CHARS),
            holding.asset_type.clone(),
            format!("{:.2}", holding.quantity),
            format!("{REPORT_CURRENCY}{}", format_amount(holding.current_price)),
            format!("{REPORT_CURRENCY}{}", format_amount(value(holding))),
        ];
        y = draw_row(
            &mut page,
            y,
            ROW_HEIGHT,
            &cells,
            Font::Regular,
            10.0,
            ROW_FILL,
            BLACK,
        );
    }

    doc.push_page(page);
    tracing::debug!(
        pages = doc.page_count(),
        holdings = portfolio.holdings.len(),
        "PDF report rendered"
    );
    doc.to_bytes()
}

/// Draw the grey header row with its top edge at `top`; returns the new top.
fn draw_header_row(page: &mut PageCanvas, top: f64) -> f64 {
    let labels = COLUMNS.map(|(label, _)| label.to_string());
    draw_row(
        page,
        top,
        HEADER_ROW_HEIGHT,
        &labels,
        Font::Bold,
        12.0,
        HEADER_FILL,
        HEADER_TEXT,
    )
}

#[allow(clippy::too_many_arguments)]
fn draw_row(
    page: &mut PageCanvas,
    top: f64,
    height: f64,
    cells: &[String; 5],
    font: Font,
    size: f64,
    fill: Rgb,
    text_color: Rgb,
) -> f64 {
    let bottom = top - height;
    let baseline = bottom + (height - size) / 2.0 + 2.0;
    let mut x = MARGIN;
    for ((_, width), cell) in COLUMNS.iter().zip(cells) {
        page.fill_rect(x, bottom, *width, height, fill);
        page.stroke_rect(x, bottom, *width, height);
        page.text(font, size, x + CELL_PADDING, baseline, cell, text_color);
        x += width;
    }
    bottom
}
