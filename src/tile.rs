use serde::{Deserialize, Serialize};

/// What occupies a single level cell: terrain or one of the placed gameplay objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TileKind {
    #[default]
    Empty,
    Player,
    Enemy,
    Wall,
    Door,
    Key,
    Dagger,
    End,
}

impl TileKind {
    /// Index into a renderer's prefab table. `Empty` cells have no prefab.
    pub fn prefab_index(&self) -> Option<usize> {
        match self {
            TileKind::Empty => None,
            other => Some(*other as usize - 1),
        }
    }

    /// Character used by the ASCII dump
    pub fn glyph(&self) -> char {
        match self {
            TileKind::Empty => '.',
            TileKind::Player => '@',
            TileKind::Enemy => 'E',
            TileKind::Wall => '#',
            TileKind::Door => '+',
            TileKind::Key => 'k',
            TileKind::Dagger => '/',
            TileKind::End => '>',
        }
    }
}
