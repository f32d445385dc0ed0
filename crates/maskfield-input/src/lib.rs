#![forbid(unsafe_code)]

//! Stateful masked-input engine for maskfield.
//!
//! # Role in maskfield
//! `maskfield-input` owns the authoritative plain text of one input field and
//! keeps the displayed (masked) string and caret in sync with it. The host
//! widget forwards template changes and user edits here and renders whatever
//! [`MaskInput::display`] and [`MaskInput::caret`] report afterwards.
//!
//! # Primary responsibilities
//! - **MaskInput**: template setters, edit application, and the
//!   resynchronization pass that filters invalid input, fills slots, and
//!   places the caret.
//!
//! # How it fits in the system
//! The pure layer (`maskfield-core`) compiles templates and translates
//! indices; this crate drives it. Rendering, selection, and key decoding
//! stay in the host.

pub mod field;

pub use field::{MaskInput, MaskPersistState};
pub use maskfield_core::{Slot, SlotClass, SlotTable};
