pub mod app_loop;
pub mod config_file;
pub mod journal_file;
pub mod launch_args;

pub const APP_NAME: &str = "Quick Fight";

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}
