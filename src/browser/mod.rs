use anyhow::{Context, Result};

use crate::content::CtaLink;

/// Open a URL in the user's default browser
///
/// # Errors
/// Returns error if browser cannot be opened (e.g., no browser available)
pub fn open_url(url: &str) -> Result<()> {
    webbrowser::open(url)
        .with_context(|| format!("Failed to open browser for URL: {}", url))?;
    Ok(())
}

/// Open one of the call-to-action links
pub fn open_link(link: CtaLink) -> Result<()> {
    crate::log_info!("Opening {} at {}", link.label(), link.url());
    open_url(link.url())
}
