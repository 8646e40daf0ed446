use serde::Serialize;
use serde_json::Value;

/// A song in the catalog. `title` holds whatever JSON value the client sent
/// and is left out of the JSON entirely when the client sent none.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Song {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    pub id: u64,
}

#[derive(Clone, Debug, Default)]
pub struct NewSong {
    pub title: Option<Value>,
}

impl NewSong {
    /// Takes `title` from an object body. Arrays carry no named fields and
    /// give an untitled song; bare scalars are not a song body at all.
    pub fn from_json(body: Value) -> Option<Self> {
        match body {
            Value::Object(mut fields) => Some(NewSong {
                title: fields.remove("title"),
            }),
            Value::Array(_) => Some(NewSong::default()),
            _ => None,
        }
    }
}

pub const SEED_TITLES: [&str; 3] = ["We Are the Champions", "Bohemian RhapCity", "Perfect Pillow"];

pub fn seed_songs() -> Vec<Song> {
    SEED_TITLES
        .iter()
        .zip(0u64..)
        .map(|(title, id)| Song {
            title: Some(Value::from(*title)),
            id,
        })
        .collect()
}
