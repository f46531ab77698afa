macro_rules! assert_at_most_one_feature {
    ($($feature:literal),+ $(,)?) => {
        assert!(
            (0 $(+ cfg!(feature = $feature) as usize)+ ) <= 1,
            "At most one of the following features may be enabled: {}",
            [$($feature),+].join(", ")
        );
    };
}

// (feature, expected target)
const CHIPS: &[(&str, bool, &str)] = &[
    ("esp32", cfg!(feature = "esp32"), "xtensa-esp32-none-elf"),
    ("esp32s3", cfg!(feature = "esp32s3"), "xtensa-esp32s3-none-elf"),
    ("esp32c6", cfg!(feature = "esp32c6"), "riscv32imac-unknown-none-elf"),
];

fn main() {
    // NOTE: update when adding new device support!
    // Chip features only pick the framebuffer DMA ordering, host builds enable none.
    assert_at_most_one_feature!("esp32", "esp32c6", "esp32s3");

    let target = std::env::var("TARGET").unwrap();
    for (feature, enabled, expected) in CHIPS {
        if *enabled {
            assert!(
                target == *expected,
                "feature {} does not match target {}",
                feature,
                target
            );
        }
    }
}
