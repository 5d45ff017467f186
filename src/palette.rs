//! GPU palette texture with change-detected uploads.
//!
//! Owns the 256×1 lookup-table texture sampled by indexed-color shaders and
//! keeps it in sync with emulated texture memory. Uploads happen at most
//! once per distinct palette state: the host supplies a fingerprint of the
//! TLUT contents each frame and unchanged fingerprints skip all GPU work.

use crate::fingerprint::Fingerprint;
use crate::gpu::formats::LutTextureFormat;
use crate::gpu::render_context::RenderContext;
use crate::gpu::staging::StagingBuffer;
use crate::gpu::texture_cache::{CachedTextureId, TextureCache};
use crate::options::{EntryWidth, PaletteOptions};
use crate::tlut::{decode_narrow, decode_wide, TlutView, PALETTE_SIZE};

/// Width of the lookup-table texture in texels.
const LUT_WIDTH: u32 = PALETTE_SIZE as u32;

/// Height of the lookup-table texture in texels.
const LUT_HEIGHT: u32 = 1;

/// The palette texture and its lazy update pipeline.
///
/// Modeled as an explicitly owned object: construction allocates every GPU
/// resource and [`PaletteTexture::destroy`] consumes the instance, so the
/// update path can never observe a half-built or released state. One
/// instance exists per emulated display list processor.
pub struct PaletteTexture {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    sampler: wgpu::Sampler,
    layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
    staging: StagingBuffer,
    format: LutTextureFormat,
    cache_id: CachedTextureId,
    fingerprint: Fingerprint,
    uploads: u64,
}

impl PaletteTexture {
    /// Build the palette texture and its staging buffer.
    ///
    /// Registers a one-sample frame-buffer record with `cache` and accounts
    /// the texture's byte footprint to it. The fingerprint starts at
    /// [`Fingerprint::ZERO`], so the first [`PaletteTexture::update`] always
    /// uploads.
    ///
    /// In debug builds the construction runs inside a validation error
    /// scope; a raised error is logged and trips a debug assertion.
    #[must_use]
    pub fn new(
        ctx: &RenderContext,
        cache: &mut TextureCache,
        options: &PaletteOptions,
    ) -> Self {
        #[cfg(debug_assertions)]
        ctx.device.push_error_scope(wgpu::ErrorFilter::Validation);

        let format = LutTextureFormat::for_width(options.entry_width);

        let cache_id = cache.add_frame_buffer_texture(true);
        cache.add_frame_buffer_texture_size(cache_id, format.texture_bytes());

        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some(&format!("{} Texture", options.label)),
            size: wgpu::Extent3d {
                width: LUT_WIDTH,
                height: LUT_HEIGHT,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: format.format(),
            usage: wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        // Index lookups must hit exact texels: nearest filtering, edge clamp.
        let sampler = ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(&format!("{} Sampler", options.label)),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let layout = ctx.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some(&format!("{} Bind Group Layout", options.label)),
                entries: &[
                    // Binding 0: the lookup-table texture (uint texels,
                    // fetched with textureLoad)
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            sample_type: wgpu::TextureSampleType::Uint,
                            view_dimension: wgpu::TextureViewDimension::D2,
                            multisampled: false,
                        },
                        count: None,
                    },
                    // Binding 1: nearest/clamp sampler
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(
                            wgpu::SamplerBindingType::NonFiltering,
                        ),
                        count: None,
                    },
                ],
            },
        );

        let bind_group =
            ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(&format!("{} Bind Group", options.label)),
                layout: &layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(&view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(&sampler),
                    },
                ],
            });

        let staging = StagingBuffer::new(
            &ctx.device,
            &format!("{} Staging", options.label),
            format.texture_bytes(),
        );

        #[cfg(debug_assertions)]
        if let Some(e) = pollster::block_on(ctx.device.pop_error_scope()) {
            log::error!("palette texture initialization failed validation: {e}");
            debug_assert!(
                false,
                "palette texture initialization failed validation"
            );
        }

        log::debug!(
            "palette texture created: {:?}, {} bytes",
            format.format(),
            format.texture_bytes()
        );

        Self {
            texture,
            view,
            sampler,
            layout,
            bind_group,
            staging,
            format,
            cache_id,
            fingerprint: Fingerprint::ZERO,
            uploads: 0,
        }
    }

    /// Propagate the current palette state to the GPU, if it changed.
    ///
    /// `fingerprint` is the host's digest of the TLUT contents this frame.
    /// When it equals the stored fingerprint this is a no-op; otherwise the
    /// 256 entries are decoded into the staging buffer and copied into the
    /// texture in one submission.
    pub fn update(
        &mut self,
        ctx: &RenderContext,
        fingerprint: Fingerprint,
        tlut: &TlutView<'_>,
    ) {
        if !self.fingerprint.replace_if_changed(fingerprint) {
            return;
        }

        {
            let mut writer = self.staging.writer();
            match self.format.entry_width() {
                EntryWidth::Narrow => {
                    writer.copy_texels(&decode_narrow(tlut));
                }
                EntryWidth::Wide => {
                    writer.copy_texels(&decode_wide(tlut));
                }
            }
        }
        self.staging.flush(&ctx.queue);

        let mut encoder = ctx.create_encoder();
        encoder.copy_buffer_to_texture(
            wgpu::TexelCopyBufferInfo {
                buffer: self.staging.gpu(),
                layout: wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(
                        LUT_WIDTH * self.format.bytes_per_texel(),
                    ),
                    rows_per_image: Some(LUT_HEIGHT),
                },
            },
            wgpu::TexelCopyTextureInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            wgpu::Extent3d {
                width: LUT_WIDTH,
                height: LUT_HEIGHT,
                depth_or_array_layers: 1,
            },
        );
        ctx.submit(encoder);

        self.uploads += 1;
        log::trace!(
            "palette upload #{}: fingerprint {}",
            self.uploads,
            self.fingerprint
        );
    }

    /// Release the texture, its cache record, and the staging buffer.
    ///
    /// Consumes the instance; a fresh [`PaletteTexture::new`] is required
    /// before palettes can be uploaded again.
    pub fn destroy(self, cache: &mut TextureCache) {
        cache.remove_frame_buffer_texture(self.cache_id);
        log::debug!(
            "palette texture destroyed after {} uploads",
            self.uploads
        );
        // Texture, bind group (the shader-facing binding), and staging
        // buffer drop here.
    }

    /// The bind group layout consumers reference at pipeline creation.
    #[must_use]
    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    /// The bind group consumers bind at draw time.
    #[must_use]
    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }

    /// The full-texture view.
    #[must_use]
    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    /// The nearest/clamp sampler.
    #[must_use]
    pub fn sampler(&self) -> &wgpu::Sampler {
        &self.sampler
    }

    /// The resolved lookup-table format.
    #[must_use]
    pub fn format(&self) -> LutTextureFormat {
        self.format
    }

    /// The cache record backing this texture's byte accounting.
    #[must_use]
    pub fn cache_id(&self) -> CachedTextureId {
        self.cache_id
    }

    /// The fingerprint of the last uploaded palette state.
    #[must_use]
    pub fn fingerprint(&self) -> Fingerprint {
        self.fingerprint
    }

    /// Number of uploads performed since construction.
    #[must_use]
    pub fn uploads(&self) -> u64 {
        self.uploads
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tlut::{ENTRY_STRIDE_SLOTS, TLUT_BYTE_OFFSET, TMEM_BYTES};

    fn tmem_with(f: impl Fn(usize) -> u16) -> Vec<u8> {
        let mut tmem = vec![0_u8; TMEM_BYTES];
        for i in 0..PALETTE_SIZE {
            let byte = TLUT_BYTE_OFFSET + i * ENTRY_STRIDE_SLOTS * 2;
            tmem[byte..byte + 2].copy_from_slice(&f(i).to_le_bytes());
        }
        tmem
    }

    #[test]
    fn staged_footprint_matches_format_bytes() {
        let tmem = tmem_with(|i| i as u16);
        let view = TlutView::from_tmem(&tmem).unwrap();

        let narrow = decode_narrow(&view);
        let narrow_bytes: &[u8] = bytemuck::cast_slice(&narrow);
        assert_eq!(
            narrow_bytes.len() as u64,
            LutTextureFormat::for_width(EntryWidth::Narrow).texture_bytes()
        );

        let wide = decode_wide(&view);
        let wide_bytes: &[u8] = bytemuck::cast_slice(&wide);
        assert_eq!(
            wide_bytes.len() as u64,
            LutTextureFormat::for_width(EntryWidth::Wide).texture_bytes()
        );
    }

    #[test]
    fn staged_texels_are_little_endian_swapped_words() {
        let tmem = tmem_with(|_| 0x00FF);
        let view = TlutView::from_tmem(&tmem).unwrap();

        // Each staged narrow texel holds 0xFF00: bytes [0x00, 0xFF].
        let narrow = decode_narrow(&view);
        let bytes: &[u8] = bytemuck::cast_slice(&narrow);
        for texel in bytes.chunks_exact(2) {
            assert_eq!(texel, &0xFF00_u16.to_le_bytes());
        }
    }
}
