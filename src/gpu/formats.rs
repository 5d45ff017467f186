//! Lookup-table texture format selection.
//!
//! The original hardware path describes a texture by an (internal format,
//! pixel format, data type) triple; under wgpu these collapse into a single
//! [`wgpu::TextureFormat`]. The provider maps the construction-time entry
//! width to the format used for the 256×1 lookup-table texture.

use crate::options::EntryWidth;
use crate::tlut::PALETTE_SIZE;

/// Texel format of the lookup-table texture under an entry-width policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LutTextureFormat {
    format: wgpu::TextureFormat,
    entry_width: EntryWidth,
}

impl LutTextureFormat {
    /// Resolve the format for the given entry width.
    #[must_use]
    pub fn for_width(width: EntryWidth) -> Self {
        let format = match width {
            EntryWidth::Narrow => wgpu::TextureFormat::R16Uint,
            EntryWidth::Wide => wgpu::TextureFormat::R32Uint,
        };
        Self {
            format,
            entry_width: width,
        }
    }

    /// The wgpu texture format.
    #[must_use]
    pub fn format(self) -> wgpu::TextureFormat {
        self.format
    }

    /// The entry-width policy this format was resolved from.
    #[must_use]
    pub fn entry_width(self) -> EntryWidth {
        self.entry_width
    }

    /// Bytes per texel.
    #[must_use]
    pub fn bytes_per_texel(self) -> u32 {
        self.entry_width.bytes_per_texel()
    }

    /// Byte footprint of the full 256×1 lookup-table texture.
    #[must_use]
    pub fn texture_bytes(self) -> u64 {
        PALETTE_SIZE as u64 * u64::from(self.bytes_per_texel())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_maps_to_r16uint() {
        let fmt = LutTextureFormat::for_width(EntryWidth::Narrow);
        assert_eq!(fmt.format(), wgpu::TextureFormat::R16Uint);
        assert_eq!(fmt.bytes_per_texel(), 2);
    }

    #[test]
    fn wide_maps_to_r32uint() {
        let fmt = LutTextureFormat::for_width(EntryWidth::Wide);
        assert_eq!(fmt.format(), wgpu::TextureFormat::R32Uint);
        assert_eq!(fmt.bytes_per_texel(), 4);
    }

    #[test]
    fn texture_bytes_is_entry_count_times_texel_size() {
        assert_eq!(
            LutTextureFormat::for_width(EntryWidth::Narrow).texture_bytes(),
            256 * 2
        );
        assert_eq!(
            LutTextureFormat::for_width(EntryWidth::Wide).texture_bytes(),
            256 * 4
        );
    }
}
