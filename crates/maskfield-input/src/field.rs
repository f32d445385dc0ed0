#![forbid(unsafe_code)]

//! The masked-input engine.
//!
//! [`MaskInput`] owns the plain text (only the characters the user actually
//! entered) and projects it through the compiled slot table into the
//! displayed string. The projection runs after every template change and
//! every edit; it filters characters that do not classify, trims overflow,
//! and decides where the caret lands. The engine never fails: malformed or
//! oversized input is normalized, not rejected.

use maskfield_core::SlotTable;

/// A single-field masked-input engine.
///
/// The plain text is the authoritative state; the displayed string and caret
/// are recomputed from it and the slot table, never stored as ground truth of
/// their own.
///
/// # Example
///
/// ```
/// use maskfield_input::MaskInput;
///
/// let mut field = MaskInput::new().with_mask("DDD-DDD");
/// assert_eq!(field.display(), "___-___");
///
/// // The user types "123456" at the start of the field.
/// field.replace_range(0, 0, "123456");
/// assert_eq!(field.display(), "123-456");
/// assert_eq!(field.plain_text(), "123456");
/// assert_eq!(field.caret(), 7);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaskInput {
    /// Mask template string.
    mask: String,
    /// Per-index editability hints (`#` = slot, anything else = literal).
    hints: String,
    /// Per-index placeholder characters for unfilled slots.
    placeholders: String,
    /// Table compiled from the three strings above.
    table: SlotTable,
    /// Authoritative user-entered text, mask-free.
    plain: String,
    /// Displayed string; a projection of `plain` through `table`.
    display: String,
    /// Caret position as a char index into `display`.
    caret: usize,
}

impl MaskInput {
    /// Create an empty field with an empty mask.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Builder methods ---

    /// Set the mask template (builder).
    #[must_use]
    pub fn with_mask(mut self, mask: impl Into<String>) -> Self {
        self.set_mask(mask);
        self
    }

    /// Set the editability hint string (builder).
    #[must_use]
    pub fn with_hints(mut self, hints: impl Into<String>) -> Self {
        self.set_hints(hints);
        self
    }

    /// Set the placeholder string (builder).
    #[must_use]
    pub fn with_placeholders(mut self, placeholders: impl Into<String>) -> Self {
        self.set_placeholders(placeholders);
        self
    }

    /// Set the plain text (builder).
    #[must_use]
    pub fn with_plain_text(mut self, text: impl Into<String>) -> Self {
        self.set_plain_text(text);
        self
    }

    // --- Template configuration ---

    /// Replace the mask template, recompile the slot table, and
    /// resynchronize.
    pub fn set_mask(&mut self, mask: impl Into<String>) {
        self.mask = mask.into();
        self.rebuild_table();
        self.resynchronize();
        #[cfg(feature = "tracing")]
        self.trace_update("set_mask");
    }

    /// Replace the editability hint string, recompile, and resynchronize.
    ///
    /// A hint character decides whether the mask character at the same index
    /// is an editable slot (`#`) or a forced literal (anything else),
    /// overriding marker inference. Indices past the end of the hint string
    /// fall back to inference.
    pub fn set_hints(&mut self, hints: impl Into<String>) {
        self.hints = hints.into();
        self.rebuild_table();
        self.resynchronize();
        #[cfg(feature = "tracing")]
        self.trace_update("set_hints");
    }

    /// Replace the placeholder string, recompile, and resynchronize.
    ///
    /// Indices past the end of the placeholder string use `_`.
    pub fn set_placeholders(&mut self, placeholders: impl Into<String>) {
        self.placeholders = placeholders.into();
        self.rebuild_table();
        self.resynchronize();
        #[cfg(feature = "tracing")]
        self.trace_update("set_placeholders");
    }

    /// Replace the plain text wholesale and resynchronize.
    ///
    /// Characters that do not classify against their slots are dropped and
    /// overflow past the last editable slot is trimmed, so the stored text
    /// may come out shorter than `text`.
    pub fn set_plain_text(&mut self, text: impl Into<String>) {
        self.plain = text.into();
        self.resynchronize();
        #[cfg(feature = "tracing")]
        self.trace_update("set_plain_text");
    }

    /// Remove all user-entered text.
    pub fn clear(&mut self) {
        self.plain.clear();
        self.resynchronize();
        #[cfg(feature = "tracing")]
        self.trace_update("clear");
    }

    // --- Edit application ---

    /// Apply a user edit: replace the displayed range `[start, end)` with
    /// `text`.
    ///
    /// `start` and `end` are char indices into the displayed string, as a
    /// host reports them for typing, deletion, or paste. They are
    /// order-normalized and clamped rather than rejected. The inserted text
    /// goes into the plain text unvalidated; the resynchronization that
    /// follows filters it and decides the caret.
    pub fn replace_range(&mut self, start: usize, end: usize, text: &str) {
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        let plain_start = self.table.plain_index(start);
        let plain_end = self.table.plain_index(end);

        let chars: Vec<char> = self.plain.chars().collect();
        let lo = plain_start.min(chars.len());
        let hi = plain_end.clamp(lo, chars.len());

        let mut next: String = chars[..lo].iter().collect();
        next.push_str(text);
        next.extend(chars[hi..].iter());

        self.plain = next;
        self.resynchronize();
        #[cfg(feature = "tracing")]
        self.trace_update("replace_range");
    }

    // --- Value access ---

    /// The displayed (masked) string the host should render.
    #[inline]
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The authoritative plain text: user-entered characters only, no
    /// literals, no placeholders.
    #[inline]
    #[must_use]
    pub fn plain_text(&self) -> &str {
        &self.plain
    }

    /// Caret position the host should apply, as a char index into
    /// [`Self::display`].
    #[inline]
    #[must_use]
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// The mask template string.
    #[inline]
    #[must_use]
    pub fn mask(&self) -> &str {
        &self.mask
    }

    /// The editability hint string.
    #[inline]
    #[must_use]
    pub fn hints(&self) -> &str {
        &self.hints
    }

    /// The placeholder string.
    #[inline]
    #[must_use]
    pub fn placeholders(&self) -> &str {
        &self.placeholders
    }

    /// The compiled slot table.
    #[inline]
    #[must_use]
    pub fn table(&self) -> &SlotTable {
        &self.table
    }

    /// `true` when every editable slot holds a character.
    ///
    /// Vacuously true for a mask without editable slots.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.plain.chars().count() == self.table.editable_count()
    }

    // --- Persistence ---

    /// Snapshot the field configuration and plain text.
    #[must_use]
    pub fn save_state(&self) -> MaskPersistState {
        MaskPersistState {
            mask: self.mask.clone(),
            hints: self.hints.clone(),
            placeholders: self.placeholders.clone(),
            plain: self.plain.clone(),
        }
    }

    /// Restore a snapshot taken with [`Self::save_state`].
    ///
    /// Recompiles the table and resynchronizes once, so a snapshot carrying
    /// text that no longer fits the mask is normalized on the way in.
    pub fn restore_state(&mut self, state: MaskPersistState) {
        self.mask = state.mask;
        self.hints = state.hints;
        self.placeholders = state.placeholders;
        self.plain = state.plain;
        self.rebuild_table();
        self.resynchronize();
        #[cfg(feature = "tracing")]
        self.trace_update("restore_state");
    }

    // --- Internals ---

    fn rebuild_table(&mut self) {
        self.table = SlotTable::compile(&self.mask, &self.hints, &self.placeholders);
    }

    /// Re-project the plain text through the slot table.
    ///
    /// When the pass filtered or trimmed the plain text, the reconciled text
    /// is adopted and the pass runs once more to settle display and caret.
    /// The pass is idempotent on its own output, so one repeat is always
    /// enough; there is no unbounded re-entry.
    fn resynchronize(&mut self) {
        let outcome = sync_pass(&self.table, &self.plain);
        if outcome.plain == self.plain {
            self.display = outcome.display;
            self.caret = outcome.caret;
            return;
        }

        self.plain = outcome.plain;
        let settled = sync_pass(&self.table, &self.plain);
        debug_assert_eq!(settled.plain, self.plain);
        self.display = settled.display;
        self.caret = settled.caret;
    }

    #[cfg(feature = "tracing")]
    fn trace_update(&self, operation: &'static str) {
        let _span = tracing::debug_span!(
            "maskfield.update",
            operation,
            caret = self.caret,
            plain_chars = self.plain.chars().count(),
            mask_chars = self.table.len()
        )
        .entered();
    }
}

/// Persistable state for a [`MaskInput`].
///
/// Contains the inputs the field was configured with; display and caret are
/// recomputed on restore.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct MaskPersistState {
    /// Mask template string.
    pub mask: String,
    /// Editability hint string.
    pub hints: String,
    /// Placeholder string.
    pub placeholders: String,
    /// User-entered plain text.
    pub plain: String,
}

struct SyncOutcome {
    display: String,
    plain: String,
    caret: usize,
}

/// One left-to-right projection of `plain` through `table`.
///
/// Editable slots consume the next plain character that classifies; plain
/// characters that do not classify at the current offset are dropped, not
/// kept. Literal slots emit their mask character and never touch the plain
/// text. The returned plain text is the filtered, trimmed reconciliation.
fn sync_pass(table: &SlotTable, plain: &str) -> SyncOutcome {
    let mut input = plain.chars().peekable();
    let mut kept = String::with_capacity(plain.len());
    let mut display = String::with_capacity(table.len());
    let mut last_filled = 0usize;
    let mut first_placeholder = None;

    for (i, slot) in table.iter().enumerate() {
        if !slot.is_editable() {
            display.push(slot.mask_char());
            continue;
        }

        // Drop rejected characters at the current offset until one
        // classifies or the input runs out here.
        while let Some(&c) = input.peek() {
            if slot.accepts(c) {
                break;
            }
            input.next();
        }

        match input.next() {
            Some(c) => {
                display.push(c);
                kept.push(c);
                last_filled = i;
            }
            None => {
                display.push(slot.placeholder());
                first_placeholder.get_or_insert(i);
            }
        }
    }

    // The caret decision looks at the filtered text before overflow past the
    // last slot is trimmed; a character the mask had no slot for still lands
    // the caret after the last filled position.
    let overflow = input.peek().is_some();
    let caret = if !kept.is_empty() || overflow {
        last_filled + 1
    } else {
        first_placeholder.unwrap_or(0)
    };

    SyncOutcome {
        display,
        plain: kept,
        caret,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_shows_placeholders_with_caret_at_first_slot() {
        let field = MaskInput::new().with_mask("DDD");
        assert_eq!(field.display(), "___");
        assert_eq!(field.plain_text(), "");
        assert_eq!(field.caret(), 0);
    }

    #[test]
    fn literal_free_mask_round_trips_padded() {
        let field = MaskInput::new().with_mask("DDDD").with_plain_text("12");
        assert_eq!(field.display(), "12__");
        assert_eq!(field.caret(), 2);
    }

    #[test]
    fn invalid_characters_are_dropped_from_plain_text() {
        let mut field = MaskInput::new().with_mask("DDD");
        field.set_plain_text("1a2b3");
        assert_eq!(field.plain_text(), "123");
        assert_eq!(field.display(), "123");
    }

    #[test]
    fn literals_are_injected_and_caret_lands_past_the_last_fill() {
        let field = MaskInput::new().with_mask("DDD-DDD").with_plain_text("123456");
        assert_eq!(field.display(), "123-456");
        assert_eq!(field.caret(), 7);
        assert!(field.is_complete());
    }

    #[test]
    fn overflow_is_truncated_to_the_slot_count() {
        let mut field = MaskInput::new().with_mask("DD");
        field.set_plain_text("1234");
        assert_eq!(field.plain_text(), "12");
        assert_eq!(field.display(), "12");
        assert_eq!(field.caret(), 2);
    }

    #[test]
    fn hint_forces_a_marker_to_literal() {
        let mut field = MaskInput::new().with_mask("D").with_hints("-");
        assert_eq!(field.display(), "D");
        field.set_plain_text("5");
        // No editable slot exists, so nothing is ever consumed.
        assert_eq!(field.plain_text(), "");
        assert_eq!(field.display(), "D");
        assert_eq!(field.caret(), 0);
    }

    #[test]
    fn hint_promotes_a_plain_character_to_an_unfillable_slot() {
        // 'x' is no reserved marker, but the hint makes it a slot. Its class
        // stays literal, so every candidate is filtered out and the slot
        // shows its placeholder forever.
        let mut field = MaskInput::new().with_mask("x").with_hints("#");
        assert_eq!(field.display(), "_");
        field.set_plain_text("x1a");
        assert_eq!(field.plain_text(), "");
        assert_eq!(field.display(), "_");
        assert_eq!(field.caret(), 0);
    }

    #[test]
    fn custom_placeholders_cover_their_indices() {
        let field = MaskInput::new().with_mask("DDD").with_placeholders("·•");
        assert_eq!(field.display(), "·•_");
    }

    #[test]
    fn typing_through_a_phone_mask_moves_the_caret_over_literals() {
        let mut field = MaskInput::new().with_mask("(DDD) DDD-DDDD");
        assert_eq!(field.display(), "(___) ___-____");
        // First unfilled slot sits after the opening paren.
        assert_eq!(field.caret(), 1);

        field.replace_range(1, 1, "5");
        assert_eq!(field.display(), "(5__) ___-____");
        assert_eq!(field.caret(), 2);

        field.replace_range(2, 2, "55");
        assert_eq!(field.display(), "(555) ___-____");
        // Caret lands after the filled slot, before the literal run.
        assert_eq!(field.caret(), 4);

        field.replace_range(4, 4, "0199");
        assert_eq!(field.display(), "(555) 019-9___");
        assert_eq!(field.caret(), 11);
    }

    #[test]
    fn deleting_a_displayed_range_removes_the_plain_characters() {
        let mut field = MaskInput::new().with_mask("DD-DD").with_plain_text("1234");
        assert_eq!(field.display(), "12-34");

        // Delete the displayed "2-3": plain range [1, 3).
        field.replace_range(1, 4, "");
        assert_eq!(field.plain_text(), "14");
        assert_eq!(field.display(), "14-__");
        assert_eq!(field.caret(), 2);
    }

    #[test]
    fn paste_across_literals_skips_the_caret_forward() {
        let mut field = MaskInput::new().with_mask("DD-DD");
        field.replace_range(0, 0, "1234");
        assert_eq!(field.display(), "12-34");
        assert_eq!(field.caret(), 5);
    }

    #[test]
    fn typed_invalid_character_is_discarded_in_place() {
        let mut field = MaskInput::new().with_mask("DDD").with_plain_text("12");
        field.replace_range(2, 2, "x");
        assert_eq!(field.plain_text(), "12");
        assert_eq!(field.display(), "12_");
        assert_eq!(field.caret(), 2);
    }

    #[test]
    fn out_of_range_edit_indices_are_clamped() {
        let mut field = MaskInput::new().with_mask("DD").with_plain_text("12");
        field.replace_range(50, 99, "3");
        // Both endpoints clamp to the end; the insert overflows and is
        // trimmed away again.
        assert_eq!(field.plain_text(), "12");

        field.replace_range(0, 99, "9");
        assert_eq!(field.plain_text(), "9");
        assert_eq!(field.display(), "9_");
    }

    #[test]
    fn reversed_edit_range_is_normalized() {
        let mut field = MaskInput::new().with_mask("DDD").with_plain_text("123");
        field.replace_range(2, 0, "");
        assert_eq!(field.plain_text(), "3");
    }

    #[test]
    fn empty_mask_discards_all_plain_text() {
        let mut field = MaskInput::new();
        field.set_plain_text("abc");
        assert_eq!(field.display(), "");
        assert_eq!(field.plain_text(), "");
        assert_eq!(field.caret(), 0);
    }

    #[test]
    fn purely_literal_mask_keeps_caret_at_zero() {
        let field = MaskInput::new().with_mask("--:--");
        assert_eq!(field.display(), "--:--");
        assert_eq!(field.caret(), 0);
    }

    #[test]
    fn resynchronization_is_idempotent() {
        let mut field = MaskInput::new()
            .with_mask("(DDD) AA-WW")
            .with_plain_text("12x3abz9");

        let display = field.display().to_string();
        let plain = field.plain_text().to_string();
        let caret = field.caret();

        field.set_plain_text(plain.clone());
        assert_eq!(field.display(), display);
        assert_eq!(field.plain_text(), plain);
        assert_eq!(field.caret(), caret);
    }

    #[test]
    fn mask_change_refilters_existing_plain_text() {
        let mut field = MaskInput::new().with_mask("WWWW").with_plain_text("a1b2");
        assert_eq!(field.display(), "a1b2");

        // Shrinking to digits-only drops the letters and the overflow.
        field.set_mask("DD");
        assert_eq!(field.plain_text(), "12");
        assert_eq!(field.display(), "12");
    }

    #[test]
    fn letter_slots_accept_non_ascii_letters() {
        let field = MaskInput::new().with_mask("AA").with_plain_text("éж");
        assert_eq!(field.display(), "éж");
        assert_eq!(field.caret(), 2);
        assert!(field.is_complete());
    }

    #[test]
    fn clear_resets_to_placeholders() {
        let mut field = MaskInput::new().with_mask("DD-DD").with_plain_text("1234");
        field.clear();
        assert_eq!(field.plain_text(), "");
        assert_eq!(field.display(), "__-__");
        assert_eq!(field.caret(), 0);
    }

    #[test]
    fn save_and_restore_round_trip() {
        let field = MaskInput::new()
            .with_mask("DD-DD")
            .with_placeholders("##")
            .with_plain_text("12");
        let state = field.save_state();

        let mut restored = MaskInput::new();
        restored.restore_state(state);
        assert_eq!(restored, field);
    }

    #[test]
    fn restore_normalizes_stale_plain_text() {
        let state = MaskPersistState {
            mask: "DD".to_string(),
            hints: String::new(),
            placeholders: String::new(),
            plain: "1x2345".to_string(),
        };
        let mut field = MaskInput::new();
        field.restore_state(state);
        assert_eq!(field.plain_text(), "12");
        assert_eq!(field.display(), "12");
    }

    #[cfg(feature = "state-persistence")]
    #[test]
    fn persist_state_serializes_with_serde() {
        let field = MaskInput::new().with_mask("DD-DD").with_plain_text("12");
        let state = field.save_state();

        let json = serde_json::to_string(&state).expect("serialize");
        let back: MaskPersistState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, state);
    }
}
