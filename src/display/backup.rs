//! Backup listing display

use crate::backup::BackupInfo;

/// Format populated backup slots as a table
pub fn format_backup_list(backups: &[BackupInfo]) -> String {
    if backups.is_empty() {
        return "No backups available.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:<6}  {}\n", "Slot", "Created"));
    output.push_str(&format!("{:-<6}  {:-<23}\n", "", ""));

    for info in backups {
        let created = info
            .created_at()
            .map(|at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| format!("@{}", info.timestamp));
        output.push_str(&format!("{:<6}  {}\n", info.slot, created));
    }

    output
}
