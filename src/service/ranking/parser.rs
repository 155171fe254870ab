//! Ranking page parsing.
//!
//! The ranking site is treated as opaque apart from one contract: characters are listed as
//! table rows whose cells hold, in order, the position, name, level and resets.

use scraper::{ElementRef, Html, Selector};

use crate::{error::scrape::ScrapeError, util::parse::parse_stat_or_zero};

const NAME_CELL: usize = 1;
const LEVEL_CELL: usize = 2;
const RESETS_CELL: usize = 3;

/// A character row read from a ranking table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingRow {
    pub name: String,
    pub level: u32,
    pub resets: u32,
}

/// Scans a ranking page for the row of `name`.
///
/// The name cell must equal `name` after trimming, ignoring letter case. Level and resets
/// default to 0 when their cells are missing or not numeric. Rows without a name cell
/// (headers, separators) are skipped.
///
/// # Arguments
/// - `html` - Raw page markup
/// - `name` - Character name to search for
///
/// # Returns
/// - `Ok(Some(RankingRow))` - First matching row in document order
/// - `Ok(None)` - No row matches
/// - `Err(ScrapeError::Selector)` - Row or cell selector could not be built
pub fn find_character_row(html: &str, name: &str) -> Result<Option<RankingRow>, ScrapeError> {
    let row_selector = selector("tr")?;
    let cell_selector = selector("td")?;

    let target = name.trim().to_lowercase();
    if target.is_empty() {
        return Ok(None);
    }

    let document = Html::parse_document(html);

    let row = document.select(&row_selector).find_map(|row| {
        let cells: Vec<String> = row.select(&cell_selector).map(cell_text).collect();

        let cell_name = cells.get(NAME_CELL)?;
        if cell_name.to_lowercase() != target {
            return None;
        }

        Some(RankingRow {
            name: cell_name.clone(),
            level: cells
                .get(LEVEL_CELL)
                .map(|c| parse_stat_or_zero(c))
                .unwrap_or(0),
            resets: cells
                .get(RESETS_CELL)
                .map(|c| parse_stat_or_zero(c))
                .unwrap_or(0),
        })
    });

    Ok(row)
}

fn selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector {
        selector: css.to_string(),
        reason: e.to_string(),
    })
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}
