#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must never panic the typed response decoders
    let _ = serde_json::from_slice::<aethon::api::SiteDetailsResponse>(data);
    let _ = serde_json::from_slice::<aethon::api::SiteOverviewResponse>(data);
});
