#![no_main]
use libfuzzer_sys::fuzz_target;
use tagtree::AttributeSet;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut attrs = AttributeSet::new();
        let before = attrs.clone();
        if attrs.add(s).is_err() {
            assert_eq!(attrs, before);
        } else {
            let _ = AttributeSet::parse(attrs.render().as_str());
        }
    }
});
