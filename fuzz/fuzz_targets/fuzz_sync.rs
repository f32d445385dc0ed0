#![no_main]

use libfuzzer_sys::fuzz_target;
use maskfield_input::MaskInput;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Cap length to keep fuzzing fast.
    if text.len() > 1024 {
        return;
    }

    // Split the input into mask / hints / placeholders / plain text.
    let mut parts = text.splitn(4, '\n');
    let mask = parts.next().unwrap_or("");
    let hints = parts.next().unwrap_or("");
    let placeholders = parts.next().unwrap_or("");
    let plain = parts.next().unwrap_or("");

    // Configuration and resynchronization must never panic.
    let mut field = MaskInput::new()
        .with_mask(mask)
        .with_hints(hints)
        .with_placeholders(placeholders)
        .with_plain_text(plain);

    let mask_chars = mask.chars().count();
    assert_eq!(
        field.display().chars().count(),
        mask_chars,
        "display length must equal mask length"
    );
    assert!(
        field.plain_text().chars().count() <= field.table().editable_count(),
        "plain text exceeds editable slot count"
    );
    assert!(
        field.caret() <= mask_chars,
        "caret past the end of the display"
    );

    // A second pass over the settled state must be a no-op.
    let display = field.display().to_string();
    let settled = field.plain_text().to_string();
    let caret = field.caret();
    field.set_plain_text(settled.clone());
    assert_eq!(field.display(), display);
    assert_eq!(field.plain_text(), settled);
    assert_eq!(field.caret(), caret);
});
