#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    text: &'a str,
    pattern: &'a str,
}

fuzz_target!(|input: Input| {
    // Tree and array searches must agree and never panic
    let Ok(tree) = sfx::build_suffix_tree(input.text) else {
        return;
    };

    let mut from_tree = tree.find_pattern(input.pattern);
    let mut from_array = tree.suffix_array().find_pattern(input.pattern);
    from_tree.sort_unstable();
    from_array.sort_unstable();
    assert_eq!(from_tree, from_array);
});
