//! Resolve continuation clips to their nearest non-continuation predecessor.

use crate::model::Block;

/// For every continuation clip, scan backward through the preceding clips,
/// skip other continuations, and copy the first non-continuation clip's raw
/// interval into `continuation_parent_timestamp`. A continuation with no such
/// predecessor is left unlinked.
///
/// Must run on a fully built block; the scan walks the materialized clip
/// vector by index.
pub fn link_block(block: &mut Block) {
    for i in 0..block.clips.len() {
        if !block.clips[i].is_continuation {
            continue;
        }
        let parent = block.clips[..i]
            .iter()
            .rev()
            .find(|clip| !clip.is_continuation)
            .map(|clip| clip.raw_interval.clone());
        block.clips[i].continuation_parent_timestamp = parent;
    }
}
