use crate::domain::entity::media::MediaEntry;

/// True when the name ends in one of the allowed extensions, case-insensitively.
pub fn matches_extension(name: &str, allowed: &[&str]) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => allowed.iter().any(|a| ext.eq_ignore_ascii_case(a)),
        None => false,
    }
}

/// Keep names matching the allow-list and map them onto listing entries.
///
/// Input order is preserved; no sorting is applied.
pub fn build_entries(names: Vec<String>, allowed: &[&str], mount_prefix: &str) -> Vec<MediaEntry> {
    names
        .into_iter()
        .filter(|name| matches_extension(name, allowed))
        .map(|name| MediaEntry::from_file_name(name, mount_prefix))
        .collect()
}
