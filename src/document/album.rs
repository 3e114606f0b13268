//! The album record shipped with the server.

use serde::{Deserialize, Serialize};

use super::{Document, DocumentId};

// == Album ==
/// A music album.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DocumentId>,
    pub artist: String,
    #[serde(rename = "album")]
    pub title: String,
    pub year: i32,
}

impl Album {
    /// Creates an album that has not been stored yet.
    pub fn new(artist: impl Into<String>, title: impl Into<String>, year: i32) -> Self {
        Self {
            id: None,
            artist: artist.into(),
            title: title.into(),
            year,
        }
    }

    /// The sample catalogue the server seeds at startup.
    pub fn samples() -> Vec<Album> {
        vec![
            Album::new("Rammstein", "Zeit", 2022),
            Album::new("Queen", "A Day at the Races", 1976),
            Album::new("Beethoven", "9. Symphonie", 1824),
            Album::new("Rammstein", "Rammstein", 2019),
        ]
    }
}

impl Document for Album {
    fn id(&self) -> Option<DocumentId> {
        self.id
    }

    fn assign_id(&mut self, id: DocumentId) {
        self.id = Some(id);
    }
}
