#![no_main]
use libfuzzer_sys::fuzz_target;
use tfgen::Fixture;

// Arbitrary text through the payload parser. Anything that parses must
// render back to a payload that parses to the same fixture.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(fixture) = Fixture::parse(text) else {
        return;
    };
    let payload = fixture.to_payload().expect("render parsed fixture");
    let text = String::from_utf8(payload).expect("payload is UTF-8");
    assert_eq!(Fixture::parse(&text).expect("reparse"), fixture);
});
