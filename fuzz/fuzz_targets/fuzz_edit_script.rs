#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use maskfield_input::MaskInput;

#[derive(Debug, Arbitrary)]
enum Op {
    SetMask(String),
    SetHints(String),
    SetPlaceholders(String),
    SetPlainText(String),
    ReplaceRange { start: u8, end: u8, text: String },
    Clear,
}

#[derive(Debug, Arbitrary)]
struct Script {
    ops: Vec<Op>,
}

fuzz_target!(|script: Script| {
    if script.ops.len() > 64 {
        return;
    }

    let mut field = MaskInput::new();
    for op in script.ops {
        match op {
            Op::SetMask(s) => field.set_mask(s),
            Op::SetHints(s) => field.set_hints(s),
            Op::SetPlaceholders(s) => field.set_placeholders(s),
            Op::SetPlainText(s) => field.set_plain_text(s),
            Op::ReplaceRange { start, end, text } => {
                field.replace_range(start as usize, end as usize, &text);
            }
            Op::Clear => field.clear(),
        }

        // Invariants must survive every step.
        let mask_chars = field.mask().chars().count();
        assert_eq!(field.display().chars().count(), mask_chars);
        assert!(field.caret() <= mask_chars);
        assert!(field.plain_text().chars().count() <= field.table().editable_count());
    }
});
