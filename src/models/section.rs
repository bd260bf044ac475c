//! Dashboard navigation sections.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The section currently shown below the header. Held per browser session.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    /// Club overview plus the starting XI.
    #[default]
    Dashboard,
    Players,
    Stats,
    /// Drag-and-drop formation editor.
    Teamsheet,
    StartingXi,
}

/// Header entry as sent to the page.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub active: bool,
}

impl Section {
    /// Header order.
    pub fn all() -> [Section; 5] {
        [
            Section::Dashboard,
            Section::Players,
            Section::Stats,
            Section::Teamsheet,
            Section::StartingXi,
        ]
    }

    pub fn id(self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Players => "players",
            Section::Stats => "stats",
            Section::Teamsheet => "teamsheet",
            Section::StartingXi => "starting-xi",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Players => "Players",
            Section::Stats => "Club Stats",
            Section::Teamsheet => "Teamsheet",
            Section::StartingXi => "Starting XI",
        }
    }

    /// Header items with `active` set for `self`.
    pub fn nav_items(self) -> Vec<NavItem> {
        Section::all()
            .into_iter()
            .map(|s| NavItem {
                id: s.id(),
                label: s.label(),
                active: s == self,
            })
            .collect()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::all()
            .into_iter()
            .find(|section| section.id() == s.trim())
            .ok_or_else(|| format!("Unknown section '{s}'"))
    }
}
