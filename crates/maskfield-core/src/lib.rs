#![forbid(unsafe_code)]

//! Core: mask-template compilation, slot classification, and index translation.
//!
//! # Role in maskfield
//! `maskfield-core` is the pure layer. It compiles a mask template (plus the
//! optional hint and placeholder strings) into a [`SlotTable`], classifies
//! candidate characters against slots, and translates display indices into
//! plain-text indices. It holds no field state and performs no I/O.
//!
//! # Primary responsibilities
//! - **Slot**: one compiled mask position (class, editability, placeholder).
//! - **SlotTable**: the ordered slot list, rebuilt whole on every template
//!   change, plus display-index → plain-index translation.
//!
//! # How it fits in the system
//! The stateful layer (`maskfield-input`) owns the plain text and drives the
//! resynchronization pass; it consults this crate for everything that depends
//! only on the template. Hosts normally never touch this crate directly.

pub mod slot;
pub mod table;

pub use slot::{
    DEFAULT_PLACEHOLDER, HINT_SLOT, MASK_DIGIT, MASK_DIGIT_OR_LETTER, MASK_LETTER, Slot, SlotClass,
};
pub use table::SlotTable;
