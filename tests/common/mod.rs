// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;

/// Plan with two sections and a correct summary line (5 + 3 + 2 = 10).
pub const SYNCED_PLAN: &str = "\
## Section A
- [ ] Task one 5h
- [ ] Task two 3h

## Section B
- [ ] Task three 2h

Total planned hours from TODO items: 10h
";

/// Same plan, but the summary line is stale.
pub const STALE_PLAN: &str = "\
## Section A
- [ ] Task one 5h
- [ ] Task two 3h

## Section B
- [ ] Task three 2h

Total planned hours from TODO items: 42h
";

/// Helper to write a markdown fixture into a temporary directory.
pub fn fixture(content: &str) -> Result<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("README.md");
    fs::write(&path, content)?;
    Ok((temp_dir, path))
}
