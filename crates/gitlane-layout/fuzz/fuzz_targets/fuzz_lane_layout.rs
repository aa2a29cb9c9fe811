#![no_main]

use gitlane_git::Commit;
use gitlane_layout::compute_lane_layout;
use libfuzzer_sys::fuzz_target;

// Each byte pair is one commit: the first byte names it, the second packs up
// to three parent names. Ids repeat and parents may point anywhere, so the
// engine also sees duplicates, cycles and unknown tips.
fuzz_target!(|data: &[u8]| {
    let commits: Vec<Commit> = data
        .chunks(2)
        .map(|chunk| {
            let oid = format!("c{}", chunk[0] % 64);
            let packed = chunk.get(1).copied().unwrap_or(0);
            let parents: Vec<String> = (0..(packed >> 6))
                .map(|k| format!("c{}", (packed.wrapping_add(k * 17)) % 64))
                .collect();
            Commit::new(oid, parents)
        })
        .collect();

    let layout = compute_lane_layout(&commits);
    assert!(layout.len() <= commits.len());
});
