#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Any byte sequence compresses, and its own container restores it.
    let container = zmh::compress(data).expect("compression is total");
    let restored = zmh::decompress(&container).expect("own container must parse");
    assert_eq!(data, restored.as_slice());

    // The raw input treated as a container may be rejected, never a panic.
    let _ = zmh::decompress(data);
});
