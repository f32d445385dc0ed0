#![forbid(unsafe_code)]

//! The compiled slot table and display-index → plain-index translation.

use smallvec::SmallVec;

use crate::slot::{DEFAULT_PLACEHOLDER, HINT_SLOT, Slot, SlotClass};

/// Ordered list of compiled mask positions, one per template character.
///
/// Compilation never fails: characters that match no reserved marker become
/// literals, hint and placeholder strings shorter than the mask fall back to
/// inference and the default placeholder. The table is recompiled whole when
/// any of the three inputs change; it is never patched in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotTable {
    slots: SmallVec<[Slot; 16]>,
}

impl SlotTable {
    /// Compile `mask` with the optional `hints` and `placeholders` overlays.
    ///
    /// For index `i`: the hint character, when present, decides editability
    /// ([`HINT_SLOT`] means editable, anything else forces a literal even
    /// over a reserved marker); without a hint the position is editable iff
    /// its marker is reserved. The placeholder character, when present, is
    /// taken verbatim, else [`DEFAULT_PLACEHOLDER`].
    #[must_use]
    pub fn compile(mask: &str, hints: &str, placeholders: &str) -> Self {
        let hints: SmallVec<[char; 16]> = hints.chars().collect();
        let placeholders: SmallVec<[char; 16]> = placeholders.chars().collect();

        let slots = mask
            .chars()
            .enumerate()
            .map(|(i, m)| {
                let editable = match hints.get(i) {
                    Some(&h) => h == HINT_SLOT,
                    None => SlotClass::from_marker(m) != SlotClass::Literal,
                };
                let placeholder = placeholders.get(i).copied().unwrap_or(DEFAULT_PLACEHOLDER);
                Slot::new(m, editable, placeholder)
            })
            .collect();

        Self { slots }
    }

    /// Number of mask positions.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// `true` if the mask template was empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The slot at `index`, if in range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// Iterate slots in mask order.
    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    /// Total number of editable slots.
    #[must_use]
    pub fn editable_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_editable()).count()
    }

    /// Translate a display (mask) index into a plain-text index.
    ///
    /// Counts editable slots strictly before `mask_index`. Indices past the
    /// end of the table are treated as the table length, so the result is
    /// always bounded by [`Self::editable_count`]. Monotonic non-decreasing
    /// in `mask_index`; an index inside a literal run maps to the plain
    /// position after the preceding editable run.
    #[must_use]
    pub fn plain_index(&self, mask_index: usize) -> usize {
        let end = mask_index.min(self.slots.len());
        self.slots[..end].iter().filter(|s| s.is_editable()).count()
    }
}

impl<'a> IntoIterator for &'a SlotTable {
    type Item = &'a Slot;
    type IntoIter = std::slice::Iter<'a, Slot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}
