use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Materialized views mode, as requested on the command line or stored on a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum Mode {
    Enable,
    Disable,
    EnableAll,
    DisableAll,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Enable => "enable",
            Mode::Disable => "disable",
            Mode::EnableAll => "enable_all",
            Mode::DisableAll => "disable_all",
        }
    }

    /// Site-wide modes that apply to every workbook at once.
    pub fn is_site_wide(&self) -> bool {
        matches!(self, Mode::EnableAll | Mode::DisableAll)
    }

    pub fn enables(&self) -> bool {
        matches!(self, Mode::Enable | Mode::EnableAll)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level tenant holding every project and workbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub name: String,
    pub content_url: String,
    pub materialized_views_mode: Mode,
}

impl Site {
    /// Workbook-level settings only take effect when the site allows them.
    pub fn allows_materialized_views(&self) -> bool {
        self.materialized_views_mode != Mode::Disable
    }
}
