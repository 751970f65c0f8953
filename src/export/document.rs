use chrono::NaiveDate;

use crate::planner::ShoppingList;
use crate::planner::constants::SHOPPING_LIST_TITLE;

/// Character width pages are laid out for.
const PAGE_WIDTH: usize = 60;

/// Separates pages in the rendered output.
pub const PAGE_BREAK: char = '\x0c';

/// A shopping list split into printable pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedDocument {
    pages: Vec<String>,
}

impl PagedDocument {
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All pages joined by form feeds.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, page) in self.pages.iter().enumerate() {
            if i > 0 {
                out.push(PAGE_BREAK);
            }
            out.push_str(page);
        }
        out
    }
}

fn centered(text: &str) -> String {
    format!("{:^width$}", text, width = PAGE_WIDTH).trim_end().to_string()
}

/// Lay out the list with a title, generation date and one checkbox row per
/// ingredient, `rows_per_page` rows to a page.
pub fn shopping_list_document(
    list: &ShoppingList,
    generated: NaiveDate,
    rows_per_page: usize,
) -> PagedDocument {
    let rows: Vec<String> = list
        .items()
        .map(|item| format!("[ ]  {}", item.describe()))
        .collect();
    let rows_per_page = rows_per_page.max(1);

    let chunks: Vec<&[String]> = if rows.is_empty() {
        vec![rows.as_slice()]
    } else {
        rows.chunks(rows_per_page).collect()
    };
    let total = chunks.len();

    let pages = chunks
        .into_iter()
        .enumerate()
        .map(|(i, chunk)| {
            let mut page = String::new();
            page.push_str(&centered(SHOPPING_LIST_TITLE));
            page.push('\n');
            page.push_str(&centered(&format!(
                "Generated on: {}",
                generated.format("%d/%m/%Y")
            )));
            page.push_str("\n\n");

            if chunk.is_empty() {
                page.push_str("(nothing to buy)\n");
            }
            for row in chunk {
                page.push_str(row);
                page.push('\n');
            }

            page.push('\n');
            page.push_str(&format!(
                "{:>width$}\n",
                format!("Page {}/{}", i + 1, total),
                width = PAGE_WIDTH
            ));
            page
        })
        .collect();

    PagedDocument { pages }
}
