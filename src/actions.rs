//! Row-level actions.
//!
//! Apply Now hands the college's application URL to the system browser.
//! Download Brochure and the compare actions only leave a trace in the log.

use anyhow::{Context, Result};

/// Row action offered for each college.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    ApplyNow,
    DownloadBrochure,
    AddToCompare,
    CompareFees,
    ComparePlacement,
}

impl RowAction {
    /// Link label shown in the table.
    pub fn label(self) -> &'static str {
        match self {
            RowAction::ApplyNow => "Apply Now",
            RowAction::DownloadBrochure => "Download Brochure",
            RowAction::AddToCompare => "Add To Compare",
            RowAction::CompareFees => "Compare Fees",
            RowAction::ComparePlacement => "Compare Placement",
        }
    }

    /// Key that triggers the action on the selected row.
    pub fn key(self) -> char {
        match self {
            RowAction::ApplyNow => 'a',
            RowAction::DownloadBrochure => 'd',
            RowAction::AddToCompare => 'c',
            RowAction::CompareFees => 'f',
            RowAction::ComparePlacement => 'p',
        }
    }

    /// Action bound to a key, if any.
    pub fn from_key(key: char) -> Option<Self> {
        [
            RowAction::ApplyNow,
            RowAction::DownloadBrochure,
            RowAction::AddToCompare,
            RowAction::CompareFees,
            RowAction::ComparePlacement,
        ]
        .into_iter()
        .find(|action| action.key() == key)
    }
}

/// Open a college's application page in the browser.
///
/// # Arguments
/// * `apply_url` - Application URL, passed through unvalidated
///
/// # Returns
/// * `Result<()>` - Success or error if no browser could be launched
pub fn open_apply_url(apply_url: &str) -> Result<()> {
    tracing::info!("Opening application page {}", apply_url);
    webbrowser::open(apply_url)
        .with_context(|| format!("Failed to open browser for {}", apply_url))?;
    Ok(())
}

/// Record a brochure download.
///
/// # Arguments
/// * `brochure_url` - Brochure source
///
/// # Details
/// No file is transferred; the source is written to the log.
pub fn download_brochure(brochure_url: &str) {
    tracing::info!("Downloading brochure from {}", brochure_url);
}
