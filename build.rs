// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use std::env;
use std::fs;
use std::path::Path;

/// True if `feature` is listed in comma-separated `CARGO_CFG_TARGET_FEATURE`
fn has_feature(list: &str, feature: &str) -> bool {
    list.split(',').any(|f| f == feature)
}

/// Lane counts for (f32, f64) given the target's widest float register.
fn lanes_for_target(arch: &str, feats: &str) -> (usize, usize) {
    match arch {
        "x86_64" | "x86" => {
            if has_feature(feats, "avx512f") {
                (16, 8) // 512-bit
            } else if has_feature(feats, "avx") {
                (8, 4) // 256-bit
            } else if has_feature(feats, "sse2") {
                (4, 2) // 128-bit
            } else {
                (2, 1)
            }
        }
        // NEON is 128-bit; it can only be absent if explicitly disabled.
        "aarch64" => {
            if has_feature(feats, "neon") {
                (4, 2)
            } else {
                (2, 1)
            }
        }
        "wasm32" => {
            if has_feature(feats, "simd128") {
                (4, 2)
            } else {
                (2, 1)
            }
        }
        _ => (2, 1),
    }
}

fn main() {
    let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let feats = env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default();

    // Format: SIMD_LANES_OVERRIDE="16,8" (f32 lanes, f64 lanes).
    // Each must be a power of two supported by `std::simd`.
    let (w32, w64) = match env::var("SIMD_LANES_OVERRIDE") {
        Ok(val) => {
            let parts: Vec<usize> = val
                .split(',')
                .filter_map(|s| s.trim().parse::<usize>().ok())
                .filter(|n| n.is_power_of_two() && *n <= 64)
                .collect();
            if parts.len() != 2 {
                panic!(
                    "Invalid SIMD_LANES_OVERRIDE {val:?}. Expected 2 comma-separated powers of two, e.g. \"16,8\""
                );
            }
            println!("cargo:warning=SIMD_LANES_OVERRIDE applied: {:?}", parts);
            (parts[0], parts[1])
        }
        Err(_) => lanes_for_target(&arch, &feats),
    };

    let out_dir = env::var("OUT_DIR").expect("cargo always sets OUT_DIR for build scripts");
    let out_path = Path::new(&out_dir).join("simd_lanes.rs");

    fs::write(
        &out_path,
        format!(
            "
/// Auto-generated SIMD lane widths from build.rs

/// SIMD lane count for 32-bit floats.
/// Determined at build time from the target features, or `SIMD_LANES_OVERRIDE`.
#[allow(dead_code)]
pub const W32: usize = {w32};

/// SIMD lane count for 64-bit floats.
/// Determined at build time from the target features, or `SIMD_LANES_OVERRIDE`.
#[allow(dead_code)]
pub const W64: usize = {w64};
"
        ),
    )
    .expect("failed to write simd_lanes.rs");

    println!("cargo:rerun-if-env-changed=CARGO_CFG_TARGET_ARCH");
    println!("cargo:rerun-if-env-changed=CARGO_CFG_TARGET_FEATURE");
    println!("cargo:rerun-if-env-changed=SIMD_LANES_OVERRIDE");
}
