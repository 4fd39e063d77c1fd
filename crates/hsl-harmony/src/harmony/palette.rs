//! Fixed five-slot palette.

use std::ops::Index;

use crate::color::Rgb;

/// Number of swatches every harmony rule produces.
pub const PALETTE_SIZE: usize = 5;

/// Five colors in display order.
///
/// Slot order is part of the rule's contract; palettes are not sorted or
/// compared by anything other than structural equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Palette([Rgb; PALETTE_SIZE]);

impl Palette {
    #[inline]
    pub const fn new(colors: [Rgb; PALETTE_SIZE]) -> Self {
        Self(colors)
    }

    #[inline]
    pub fn colors(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.0
    }

    /// Color in 1-based slot `n`, matching how slots are numbered on screen.
    pub fn slot(&self, n: usize) -> Option<Rgb> {
        n.checked_sub(1).and_then(|i| self.0.get(i)).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rgb> {
        self.0.iter()
    }

    pub fn to_vec(&self) -> Vec<Rgb> {
        self.0.to_vec()
    }
}

/// Hex codes joined with `", "`, e.g. `"FF0000, 00FFFF, ..."`.
///
/// Takes a slice so an empty list from an unknown rule name joins to `""`.
pub fn hex_list(colors: &[Rgb]) -> String {
    colors
        .iter()
        .map(|c| c.to_hex())
        .collect::<Vec<_>>()
        .join(", ")
}

impl Index<usize> for Palette {
    type Output = Rgb;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Palette {
    type Item = Rgb;
    type IntoIter = std::array::IntoIter<Rgb, PALETTE_SIZE>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Rgb;
    type IntoIter = std::slice::Iter<'a, Rgb>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Palette> for [Rgb; PALETTE_SIZE] {
    fn from(p: Palette) -> Self {
        p.0
    }
}
