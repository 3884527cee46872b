pub mod app_loop;
pub mod seed;
pub mod session_file;

pub const APP_NAME: &str = "LifeSim";

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}

/// Format a map fingerprint as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_fingerprint(hash: u64) -> String {
    format!("0x{hash:016x}")
}
