//! Frame-buffer texture accounting registry.
//!
//! The accounting face of the host's texture cache: textures allocated
//! through the render-target pool (including the palette texture, which is
//! repurposed from it) register here so the host can report and bound GPU
//! memory owned by frame-buffer-style textures. Lookup and eviction policy
//! live with the host.

use rustc_hash::FxHashMap;

/// Identifier of a registered frame-buffer texture record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CachedTextureId(u64);

/// Accounting record for one frame-buffer-style texture.
#[derive(Debug, Clone, Copy)]
struct CachedTextureInfo {
    /// Whether the texture is a one-sample (non-multisampled) allocation.
    one_sample: bool,
    bytes: u64,
}

/// Registry of frame-buffer texture records and their byte totals.
#[derive(Debug, Default)]
pub struct TextureCache {
    records: FxHashMap<CachedTextureId, CachedTextureInfo>,
    next_id: u64,
    fb_texture_bytes: u64,
}

impl TextureCache {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new frame-buffer texture record.
    ///
    /// `one_sample` marks single-sample allocations such as the palette
    /// texture; multisampled render targets pass `false`.
    pub fn add_frame_buffer_texture(
        &mut self,
        one_sample: bool,
    ) -> CachedTextureId {
        let id = CachedTextureId(self.next_id);
        self.next_id += 1;
        let _prev = self.records.insert(
            id,
            CachedTextureInfo {
                one_sample,
                bytes: 0,
            },
        );
        log::debug!("registered frame-buffer texture {id:?}");
        id
    }

    /// Account `bytes` of GPU memory to the record `id`.
    ///
    /// Unknown ids are ignored with a warning; accounting must not abort a
    /// running frame.
    pub fn add_frame_buffer_texture_size(
        &mut self,
        id: CachedTextureId,
        bytes: u64,
    ) {
        if let Some(info) = self.records.get_mut(&id) {
            info.bytes += bytes;
            self.fb_texture_bytes += bytes;
        } else {
            log::warn!("size accounted to unknown texture record {id:?}");
        }
    }

    /// Release the record `id` and its accounted bytes.
    ///
    /// Unknown ids are ignored with a warning.
    pub fn remove_frame_buffer_texture(&mut self, id: CachedTextureId) {
        if let Some(info) = self.records.remove(&id) {
            self.fb_texture_bytes -= info.bytes;
            log::debug!(
                "released frame-buffer texture {id:?} ({} bytes)",
                info.bytes
            );
        } else {
            log::warn!("release of unknown texture record {id:?}");
        }
    }

    /// Whether record `id` is registered as a one-sample texture.
    #[must_use]
    pub fn is_one_sample(&self, id: CachedTextureId) -> bool {
        self.records.get(&id).is_some_and(|info| info.one_sample)
    }

    /// Total bytes accounted to frame-buffer textures.
    #[must_use]
    pub fn frame_buffer_texture_bytes(&self) -> u64 {
        self.fb_texture_bytes
    }

    /// Number of registered records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let mut cache = TextureCache::new();
        let a = cache.add_frame_buffer_texture(true);
        let b = cache.add_frame_buffer_texture(false);
        assert_ne!(a, b);
        assert_eq!(cache.len(), 2);
        assert!(cache.is_one_sample(a));
        assert!(!cache.is_one_sample(b));
    }

    #[test]
    fn accounting_is_symmetric() {
        let mut cache = TextureCache::new();
        let a = cache.add_frame_buffer_texture(true);
        let b = cache.add_frame_buffer_texture(true);

        cache.add_frame_buffer_texture_size(a, 512);
        cache.add_frame_buffer_texture_size(b, 1024);
        assert_eq!(cache.frame_buffer_texture_bytes(), 1536);

        cache.remove_frame_buffer_texture(a);
        assert_eq!(cache.frame_buffer_texture_bytes(), 1024);

        cache.remove_frame_buffer_texture(b);
        assert_eq!(cache.frame_buffer_texture_bytes(), 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn unknown_ids_are_tolerated() {
        let mut cache = TextureCache::new();
        let a = cache.add_frame_buffer_texture(true);
        cache.add_frame_buffer_texture_size(a, 512);
        cache.remove_frame_buffer_texture(a);

        // Stale handle after release: no accounting change, no panic.
        cache.add_frame_buffer_texture_size(a, 512);
        cache.remove_frame_buffer_texture(a);
        assert_eq!(cache.frame_buffer_texture_bytes(), 0);
    }
}
