#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Construction must either reject the text or cover every suffix
    if let Ok(tree) = sfx::build_suffix_tree(data) {
        assert_eq!(tree.leaf_count(), data.chars().count());
        let _ = tree.longest_repeat();
        let _ = tree.estimate_size();
    }
});
