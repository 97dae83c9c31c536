use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use regview_core::InMemoryCatalog;

use crate::presentation::renderers::{BrowseApp, TuiRenderer};

pub fn handle(catalog: InMemoryCatalog) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("browse needs an interactive terminal; use `regview list` for piped output");
    }

    TuiRenderer::run(BrowseApp::new(catalog))
}
