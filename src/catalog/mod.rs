//! Resource screens and their fixed datasets.
//!
//! Each screen is plain data: an optional header and an ordered table of
//! rows. A row carries the slot it occupies, the text it displays and the
//! label it is searched by. Display text and search label are stored
//! separately because the datasets assign them separately.

use crate::filter::{FilterableList, SearchScreen};
use crate::model::Item;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Display handle for one resource row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RowHandle {
    /// Slot identifier the row is bound to.
    pub slot: &'static str,
    /// Text shown for the row.
    pub text: &'static str,
}

/// Screen name not recognised by [`ScreenKind::from_str`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown screen '{0}' (expected one of: directory, extended)")]
pub struct UnknownScreen(pub String);

/// The resource screens available in the app.
///
/// Config files, `--screen` and `RESDIR_SCREEN` all parse through
/// [`FromStr`], so they accept the same spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum ScreenKind {
    /// Nine-row directory with an explanatory header.
    #[default]
    Directory,
    /// Twelve-row directory including additional shelters.
    Extended,
}

/// (slot, search label, displayed text)
type RowSpec = (&'static str, &'static str, &'static str);

const DIRECTORY_ROWS: &[RowSpec] = &[
    ("firefighterCell", "Firefighter Unit #1", "Firefighter Unit #1"),
    ("policeCell", "Firefighter Unit #2", "Firefighter Unit #2"),
    ("paramedicCell", "Firefighter Unit #3", "Firefighter Unit #3"),
    ("firefighterCell1", "Medical Supplies #1", "Medical Supplies #1"),
    ("policeCell1", "Medical Supplies #2", "Medical Supplies #2"),
    ("paramedicCell1", "Medical Supplies #3", "Medical Supplies #3"),
    ("firefighterCell2", "Emergency Shelter #1", "Emergency Shelter #1"),
    ("policeCell2", "Emergency Shelter #2", "Emergency Shelter #2"),
    ("paramedicCell2", "Emergency Shelter #3", "Emergency Shelter #3"),
];

// The last two display texts disagree with their search labels in the
// source data. Kept as-is until the intended titles are confirmed.
const EXTENDED_EXTRA_ROWS: &[RowSpec] = &[
    ("firefighterCell3", "Emergency Shelter #4", "Emergency Shelter #4"),
    ("policeCell3", "Emergency Shelter #5", "Medical Supplies #4"),
    ("paramedicCell3", "Emergency Shelter #6", "Emergency Shelter #5"),
];

const DIRECTORY_HEADER: &str = "Find resources in your area below.";

impl ScreenKind {
    /// All screens, in switching order.
    pub const ALL: [ScreenKind; 2] = [ScreenKind::Directory, ScreenKind::Extended];

    /// Stable name used on the command line and in config files.
    pub fn name(self) -> &'static str {
        match self {
            ScreenKind::Directory => "directory",
            ScreenKind::Extended => "extended",
        }
    }

    /// Header line shown above the search bar, if the screen has one.
    pub fn header(self) -> Option<&'static str> {
        match self {
            ScreenKind::Directory => Some(DIRECTORY_HEADER),
            ScreenKind::Extended => None,
        }
    }

    /// The screen after this one, wrapping around.
    pub fn next(self) -> Self {
        match self {
            ScreenKind::Directory => ScreenKind::Extended,
            ScreenKind::Extended => ScreenKind::Directory,
        }
    }

    /// Ordered rows of this screen.
    pub fn rows(self) -> Vec<Item<RowHandle>> {
        let extra: &[RowSpec] = match self {
            ScreenKind::Directory => &[],
            ScreenKind::Extended => EXTENDED_EXTRA_ROWS,
        };

        DIRECTORY_ROWS
            .iter()
            .chain(extra)
            .map(|&(slot, label, text)| Item::new(RowHandle { slot, text }, label))
            .collect()
    }

    /// A fresh search screen over this screen's rows, with an empty query.
    pub fn build(self) -> SearchScreen<RowHandle> {
        SearchScreen::new(FilterableList::new(self.rows()))
    }
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScreenKind {
    type Err = UnknownScreen;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScreenKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownScreen(s.to_string()))
    }
}

impl TryFrom<String> for ScreenKind {
    type Error = UnknownScreen;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}
