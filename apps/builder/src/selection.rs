//! Profile document discovery and interactive disambiguation.

use std::io::{BufRead, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::BuildError;

const DATA_EXTENSIONS: &[&str] = &["yml", "yaml"];

/// Lists regular files in `dir` with a YAML extension, sorted by name.
pub fn discover_candidates(dir: &Path) -> Result<Vec<String>, BuildError> {
    let entries = std::fs::read_dir(dir).map_err(|source| match source.kind() {
        ErrorKind::NotFound => BuildError::InputDirMissing(dir.to_path_buf()),
        _ => BuildError::Read {
            path: dir.to_path_buf(),
            source,
        },
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| BuildError::Read {
            path: dir.to_path_buf(),
            source,
        })?;
        if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }
        let path = entry.path();
        let has_data_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| DATA_EXTENSIONS.contains(&ext));
        if let (true, Some(name)) = (has_data_extension, entry.file_name().to_str()) {
            files.push(name.to_string());
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(BuildError::NoCandidates(dir.to_path_buf()));
    }
    Ok(files)
}

/// Picks one candidate: the only one directly, otherwise by asking the operator.
///
/// Re-prompts on non-numeric or out-of-range input until a valid choice
/// arrives. End of input is the one way out without a choice.
pub fn select_candidate<R, W>(
    files: &[String],
    input: &mut R,
    output: &mut W,
) -> Result<String, BuildError>
where
    R: BufRead,
    W: Write,
{
    match files {
        [] => Err(BuildError::NoCandidates(PathBuf::new())),
        [only] => {
            info!("Found one resume file: {only}");
            Ok(only.clone())
        }
        _ => {
            writeln!(output, "Multiple resume files found. Please choose one:")?;
            for (i, file) in files.iter().enumerate() {
                writeln!(output, "  {}: {}", i + 1, file)?;
            }
            prompt_for_index(files.len(), input, output).map(|i| files[i].clone())
        }
    }
}

/// Returns the zero-based index of the operator's choice among `count` entries.
fn prompt_for_index<R, W>(count: usize, input: &mut R, output: &mut W) -> Result<usize, BuildError>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(output, "Enter number (1-{count}):")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(BuildError::InputClosed);
        }

        match line.trim().parse::<i64>() {
            Ok(choice) if choice >= 1 && choice as usize <= count => return Ok(choice as usize - 1),
            Ok(_) => writeln!(output, "Invalid choice. Please try again.")?,
            Err(_) => writeln!(output, "Invalid input. Please enter a number.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    // ── discover_candidates ─────────────────────────────────────────────────

    #[test]
    fn test_missing_directory() {
        let dir = tempdir().unwrap();
        let err = discover_candidates(&dir.path().join("resume-data")).unwrap_err();
        assert!(matches!(err, BuildError::InputDirMissing(_)));
    }

    #[test]
    fn test_no_yaml_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();
        let err = discover_candidates(dir.path()).unwrap_err();
        assert!(matches!(err, BuildError::NoCandidates(_)));
    }

    #[test]
    fn test_only_yaml_files_sorted() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("zed.yaml"), "a: 1").unwrap();
        fs::write(dir.path().join("amy.yml"), "a: 1").unwrap();
        fs::write(dir.path().join("readme.md"), "x").unwrap();
        fs::create_dir(dir.path().join("nested.yml")).unwrap();

        let files = discover_candidates(dir.path()).unwrap();
        assert_eq!(files, names(&["amy.yml", "zed.yaml"]));
    }

    // ── select_candidate ────────────────────────────────────────────────────

    #[test]
    fn test_single_file_selected_without_prompt() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let chosen = select_candidate(&names(&["jane.yml"]), &mut input, &mut output).unwrap();
        assert_eq!(chosen, "jane.yml");
        assert!(output.is_empty());
    }

    #[test]
    fn test_multiple_files_lists_and_selects() {
        let mut input = Cursor::new("2\n");
        let mut output = Vec::new();
        let chosen =
            select_candidate(&names(&["amy.yml", "jane.yml"]), &mut input, &mut output).unwrap();
        assert_eq!(chosen, "jane.yml");

        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("Multiple resume files found. Please choose one:"));
        assert!(shown.contains("  1: amy.yml\n  2: jane.yml\n"));
        assert!(shown.contains("Enter number (1-2):"));
    }

    #[test]
    fn test_invalid_input_reprompts_until_valid() {
        let mut input = Cursor::new("abc\n0\n-1\n3\n 1 \n");
        let mut output = Vec::new();
        let chosen =
            select_candidate(&names(&["amy.yml", "jane.yml"]), &mut input, &mut output).unwrap();
        assert_eq!(chosen, "amy.yml");

        let shown = String::from_utf8(output).unwrap();
        assert_eq!(shown.matches("Invalid input. Please enter a number.").count(), 1);
        assert_eq!(shown.matches("Invalid choice. Please try again.").count(), 3);
        assert_eq!(shown.matches("Enter number (1-2):").count(), 5);
    }

    #[test]
    fn test_end_of_input_aborts() {
        let mut input = Cursor::new("x\n");
        let mut output = Vec::new();
        let err =
            select_candidate(&names(&["amy.yml", "jane.yml"]), &mut input, &mut output).unwrap_err();
        assert!(matches!(err, BuildError::InputClosed));
    }
}
