//! Stone colors and per-color data storage.
//!
//! ## Color
//!
//! The two sides of every game. Black always moves first.
//!
//! ## ColorMap
//!
//! Fixed two-slot storage indexed by `Color`, used for every per-side
//! counter the engine keeps (captures, supply, undo budget).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::{Index, IndexMut, Not};

/// One of the two sides.
///
/// Serialized as the single-letter tags `"B"` and `"W"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "B")]
    Black,
    #[serde(rename = "W")]
    White,
}

impl Color {
    /// Both colors, in move order.
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    /// The other side.
    ///
    /// ```
    /// use grid_games::core::Color;
    ///
    /// assert_eq!(Color::Black.opponent(), Color::White);
    /// assert_eq!(!Color::White, Color::Black);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Slot index (Black = 0, White = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }

    /// Single-letter tag used in records.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Color::Black => "B",
            Color::White => "W",
        }
    }

    /// Board glyph used by text rendering.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Color::Black => 'X',
            Color::White => 'O',
        }
    }
}

impl Not for Color {
    type Output = Color;

    fn not(self) -> Self::Output {
        self.opponent()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

/// Per-color data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use grid_games::core::{Color, ColorMap};
///
/// let mut captured: ColorMap<u32> = ColorMap::with_value(0);
/// captured[Color::White] += 2;
///
/// assert_eq!(captured[Color::Black], 0);
/// assert_eq!(captured[Color::White], 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColorMap<T> {
    data: [T; 2],
}

impl<T> ColorMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            data: [factory(Color::Black), factory(Color::White)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a color's data.
    #[must_use]
    pub fn get(&self, color: Color) -> &T {
        &self.data[color.index()]
    }

    /// Get a mutable reference to a color's data.
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        &mut self.data[color.index()]
    }

    /// Iterate over (Color, &T) pairs in move order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(self.data.iter())
    }

    /// Build an ordered map keyed by color (the record shape).
    pub fn to_map(&self) -> BTreeMap<Color, T>
    where
        T: Clone,
    {
        self.iter().map(|(color, value)| (color, value.clone())).collect()
    }

    /// Build from a record map; missing colors take `T::default()`.
    pub fn from_map(map: &BTreeMap<Color, T>) -> Self
    where
        T: Clone + Default,
    {
        Self::new(|color| map.get(&color).cloned().unwrap_or_default())
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        self.get_mut(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        for color in Color::ALL {
            assert_ne!(color.opponent(), color);
            assert_eq!(color.opponent().opponent(), color);
            assert_eq!(!color, color.opponent());
        }
    }

    #[test]
    fn test_color_tags() {
        assert_eq!(Color::Black.tag(), "B");
        assert_eq!(Color::White.tag(), "W");
        assert_eq!(format!("{}", Color::Black), "Black");
    }

    #[test]
    fn test_color_serialization() {
        let json = serde_json::to_string(&Color::White).unwrap();
        assert_eq!(json, "\"W\"");
        let color: Color = serde_json::from_str("\"B\"").unwrap();
        assert_eq!(color, Color::Black);
        assert!(serde_json::from_str::<Color>("\"X\"").is_err());
    }

    #[test]
    fn test_color_map_new() {
        let map = ColorMap::new(|c| c.index() * 10);
        assert_eq!(map[Color::Black], 0);
        assert_eq!(map[Color::White], 10);
    }

    #[test]
    fn test_color_map_mutation() {
        let mut map: ColorMap<u32> = ColorMap::with_value(3);
        map[Color::Black] -= 1;
        *map.get_mut(Color::White) += 4;

        assert_eq!(map[Color::Black], 2);
        assert_eq!(map[Color::White], 7);
    }

    #[test]
    fn test_color_map_record_round_trip() {
        let map = ColorMap::new(|c| c.index() as u32 + 5);
        let record = map.to_map();
        assert_eq!(record.get(&Color::Black), Some(&5));

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"B":5,"W":6}"#);

        let restored = ColorMap::from_map(&serde_json::from_str(&json).unwrap());
        assert_eq!(restored, map);
    }

    #[test]
    fn test_color_map_missing_entries_default() {
        let mut partial = BTreeMap::new();
        partial.insert(Color::White, 9u32);

        let map = ColorMap::from_map(&partial);
        assert_eq!(map[Color::Black], 0);
        assert_eq!(map[Color::White], 9);
    }
}
