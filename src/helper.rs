// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs::write;
use std::path::PathBuf;

use tempfile::TempDir;
use tempfile::tempdir;

use crate::error::Fallible;

/// Writes a deck file into a fresh temporary directory. The directory is
/// deleted when the returned handle is dropped.
pub fn create_tmp_deck_file(name: &str, content: &str) -> Fallible<(TempDir, PathBuf)> {
    let dir = tempdir()?;
    let path = dir.path().join(name);
    write(&path, content)?;
    Ok((dir, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tmp_deck_file() -> Fallible<()> {
        let (_dir, path) = create_tmp_deck_file("deck.txt", "Q / A")?;
        assert!(path.is_file());
        assert_eq!(std::fs::read_to_string(&path)?, "Q / A");
        Ok(())
    }
}
