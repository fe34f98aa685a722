//! Library item types for the circulation engine
//!
//! This module defines the item kinds the library lends, the variant-specific
//! descriptor each kind carries, and the per-copy circulation state.

use super::patron::PatronId;
use std::fmt;

/// Library item identifier
pub type ItemId = u32;

/// Simulated calendar day (day 0 is the first day of the simulation)
pub type Day = u32;

/// Kind of library item
///
/// The kind is the only thing that distinguishes the variants at the
/// circulation level: it fixes how many days a copy may stay checked out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Book,
    Album,
    Movie,
}

impl ItemKind {
    /// Number of days a copy of this kind may be checked out before it is overdue
    pub const fn checkout_length(self) -> Day {
        match self {
            ItemKind::Book => 21,
            ItemKind::Album => 14,
            ItemKind::Movie => 7,
        }
    }

    /// Lowercase name used in command scripts and reports
    pub const fn as_str(self) -> &'static str {
        match self {
            ItemKind::Book => "book",
            ItemKind::Album => "album",
            ItemKind::Movie => "movie",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variant-specific descriptor of an item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemFormat {
    Book { author: String },
    Album { artist: String },
    Movie { director: String },
}

impl ItemFormat {
    pub fn book(author: impl Into<String>) -> Self {
        ItemFormat::Book {
            author: author.into(),
        }
    }

    pub fn album(artist: impl Into<String>) -> Self {
        ItemFormat::Album {
            artist: artist.into(),
        }
    }

    pub fn movie(director: impl Into<String>) -> Self {
        ItemFormat::Movie {
            director: director.into(),
        }
    }

    /// Build the descriptor for `kind` from its creator field
    pub fn from_kind(kind: ItemKind, creator: impl Into<String>) -> Self {
        match kind {
            ItemKind::Book => Self::book(creator),
            ItemKind::Album => Self::album(creator),
            ItemKind::Movie => Self::movie(creator),
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            ItemFormat::Book { .. } => ItemKind::Book,
            ItemFormat::Album { .. } => ItemKind::Album,
            ItemFormat::Movie { .. } => ItemKind::Movie,
        }
    }

    /// Author, artist or director, whichever this variant carries
    pub fn creator(&self) -> &str {
        match self {
            ItemFormat::Book { author } => author,
            ItemFormat::Album { artist } => artist,
            ItemFormat::Movie { director } => director,
        }
    }

    pub fn author(&self) -> Option<&str> {
        match self {
            ItemFormat::Book { author } => Some(author),
            _ => None,
        }
    }

    pub fn artist(&self) -> Option<&str> {
        match self {
            ItemFormat::Album { artist } => Some(artist),
            _ => None,
        }
    }

    pub fn director(&self) -> Option<&str> {
        match self {
            ItemFormat::Movie { director } => Some(director),
            _ => None,
        }
    }
}

/// Where a copy currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// Available to anyone
    OnShelf,
    /// Available, but reserved for the patron holding the request
    OnHoldShelf,
    /// Lent out to a patron
    CheckedOut,
}

impl Location {
    pub const fn as_str(self) -> &'static str {
        match self {
            Location::OnShelf => "ON_SHELF",
            Location::OnHoldShelf => "ON_HOLD_SHELF",
            Location::CheckedOut => "CHECKED_OUT",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single copy held by the library
///
/// Circulation fields are only changed by the catalog, which keeps them
/// consistent with the patron side:
/// - `holder` and `checkout_day` are set iff the location is `CheckedOut`
/// - `requester` names the one patron with an outstanding hold, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryItem {
    id: ItemId,
    title: String,
    format: ItemFormat,
    pub(crate) location: Location,
    pub(crate) holder: Option<PatronId>,
    pub(crate) requester: Option<PatronId>,
    pub(crate) checkout_day: Option<Day>,
}

impl LibraryItem {
    /// Create a new copy sitting on the shelf
    ///
    /// # Arguments
    ///
    /// * `id` - Unique item identifier
    /// * `title` - Title shown in reports
    /// * `format` - Kind of item with its author, artist or director
    ///
    /// # Returns
    ///
    /// An item on the shelf with no holder, requester or checkout day
    pub fn new(id: ItemId, title: impl Into<String>, format: ItemFormat) -> Self {
        LibraryItem {
            id,
            title: title.into(),
            format,
            location: Location::OnShelf,
            holder: None,
            requester: None,
            checkout_day: None,
        }
    }

    /// Create a book copy written by `author`
    pub fn book(id: ItemId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self::new(id, title, ItemFormat::book(author))
    }

    /// Create an album copy recorded by `artist`
    pub fn album(id: ItemId, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self::new(id, title, ItemFormat::album(artist))
    }

    /// Create a movie copy made by `director`
    pub fn movie(id: ItemId, title: impl Into<String>, director: impl Into<String>) -> Self {
        Self::new(id, title, ItemFormat::movie(director))
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn format(&self) -> &ItemFormat {
        &self.format
    }

    /// Variant tag of the copy
    pub fn kind(&self) -> ItemKind {
        self.format.kind()
    }

    /// Author, artist or director, whichever the kind carries
    pub fn creator(&self) -> &str {
        self.format.creator()
    }

    /// Where the copy currently is
    pub fn location(&self) -> Location {
        self.location
    }

    /// Patron currently holding the copy
    pub fn holder(&self) -> Option<PatronId> {
        self.holder
    }

    /// Patron with an outstanding hold on the copy
    pub fn requester(&self) -> Option<PatronId> {
        self.requester
    }

    /// Day the copy was checked out, if it is out
    pub fn checkout_day(&self) -> Option<Day> {
        self.checkout_day
    }

    /// Days this copy may stay out, fixed by its kind
    pub fn checkout_length(&self) -> Day {
        self.kind().checkout_length()
    }

    /// Whether the copy is past its checkout length on `today`
    pub fn is_overdue(&self, today: Day) -> bool {
        self.checkout_day
            .is_some_and(|day| today.saturating_sub(day) > self.checkout_length())
    }
}
