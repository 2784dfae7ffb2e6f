//! Random block sampling and transcript discovery.

use rand::seq::SliceRandom;
use rand::Rng;
use std::path::{Path, PathBuf};

/// Shuffle the full 1-based block index range and keep at most `limit`
/// candidates. The limit caps candidates drawn, not blocks finally accepted;
/// any predicate filtering happens on the caller's side afterward.
pub fn sample_block_indices<R: Rng>(num_blocks: usize, limit: usize, rng: &mut R) -> Vec<usize> {
    let mut indices: Vec<usize> = (1..=num_blocks).collect();
    indices.shuffle(rng);
    indices.truncate(limit);
    indices
}

/// Recursively collect, for every directory under `root` that contains
/// exactly one `.cha` file, the path of that transcript.
pub fn find_transcripts(root: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    walk(root, &mut found);
    found
}

fn walk(dir: &Path, found: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("skipping {}: {}", dir.display(), e);
            return;
        }
    };

    let mut cha_files = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, found);
        } else if path.extension().map_or(false, |e| e == "cha") {
            cha_files.push(path);
        }
    }
    if cha_files.len() == 1 {
        found.extend(cha_files);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn sample_covers_the_inclusive_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut indices = sample_block_indices(10, 10, &mut rng);
        indices.sort_unstable();
        assert_eq!(indices, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn sample_caps_at_the_limit() {
        let mut rng = StdRng::seed_from_u64(7);
        let indices = sample_block_indices(100, 30, &mut rng);
        assert_eq!(indices.len(), 30);
        assert!(indices.iter().all(|&i| (1..=100).contains(&i)));
    }

    #[test]
    fn seeded_sampling_is_deterministic() {
        let a = sample_block_indices(50, 10, &mut StdRng::seed_from_u64(42));
        let b = sample_block_indices(50, 10, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn finds_directories_with_exactly_one_transcript() {
        let dir = tempfile::tempdir().unwrap();
        let one = dir.path().join("one");
        let two = dir.path().join("two");
        std::fs::create_dir_all(&one).unwrap();
        std::fs::create_dir_all(&two).unwrap();
        std::fs::write(one.join("a.cha"), "").unwrap();
        std::fs::write(two.join("b.cha"), "").unwrap();
        std::fs::write(two.join("c.cha"), "").unwrap();

        let found = find_transcripts(dir.path());
        assert_eq!(found, vec![one.join("a.cha")]);
    }
}
