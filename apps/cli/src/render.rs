//! Text rendering for product rows.

use std::fmt::Write;

use catalog_core::display::{format_optional_price, truncate_for_table};
use catalog_core::{FieldErrors, Product};

const OUT_OF_STOCK: &str = "out of stock";

fn stock_text(product: &Product) -> String {
    match product.stock {
        Some(stock) if stock.is_finite() => format!("{stock}"),
        _ => "—".to_string(),
    }
}

/// Renders rows as an aligned table; zero-stock rows are flagged.
pub fn product_table(rows: &[&Product]) -> String {
    if rows.is_empty() {
        return "No products match the current filters.\n".to_string();
    }

    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|p| {
            [
                p.id.to_string(),
                truncate_for_table(&p.name),
                truncate_for_table(&p.description),
                format_optional_price(p.price),
                stock_text(p),
            ]
        })
        .collect();

    let headers = ["ID", "Name", "Description", "Price", "Stock"];
    let mut widths = headers.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let mut line = |cols: [&str; 5], flag: &str| {
        let mut text = String::new();
        for (col, width) in cols.iter().zip(widths) {
            let pad = width - col.chars().count();
            let _ = write!(text, "{col}{}  ", " ".repeat(pad));
        }
        text.push_str(flag);
        out.push_str(text.trim_end());
        out.push('\n');
    };

    line(headers, "");
    for (row, product) in cells.iter().zip(rows) {
        let flag = if product.is_out_of_stock() { OUT_OF_STOCK } else { "" };
        line(
            [&row[0], &row[1], &row[2], &row[3], &row[4]],
            flag,
        );
    }

    out
}

/// Renders one product as labelled lines.
pub fn product_details(product: &Product) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "ID:          {}", product.id);
    let _ = writeln!(out, "Name:        {}", product.name);
    let _ = writeln!(out, "Description: {}", product.description);
    let _ = writeln!(out, "Price:       {}", format_optional_price(product.price));
    let _ = writeln!(out, "Stock:       {}", stock_text(product));
    let _ = writeln!(out, "Image:       {}", product.featured_image);
    out
}

/// One `field: message` line per failing field.
pub fn field_errors(errors: &FieldErrors) -> String {
    let mut out = String::new();
    for (field, err) in errors.iter() {
        let _ = writeln!(out, "  {}: {}", field.key(), err);
    }
    out
}
