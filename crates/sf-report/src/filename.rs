//! Artifact file names: `<prefix>_<date>_<time>.<ext>`.

pub use sf_core::DEFAULT_FILE_PREFIX;
use sf_core::SessionMetadata;

/// Build the file name from the same captured date/time the header uses.
/// Path separators and other characters file systems reject become `-`.
#[must_use]
pub fn report_file_name(prefix: &str, metadata: &SessionMetadata, extension: &str) -> String {
    format!(
        "{prefix}_{}_{}.{extension}",
        path_safe(&metadata.date),
        path_safe(&metadata.time)
    )
}

fn path_safe(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect()
}
