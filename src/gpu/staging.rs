//! Fixed-size CPU-to-GPU transfer buffer with scoped write access.
//!
//! The buffer never grows: it is allocated once at the texture's byte
//! footprint and recreated only when the owning texture is rebuilt. Writes
//! go through a [`StagingWriter`] borrowed for the populate phase only, so
//! write access is released on every path, including early returns.

/// A transfer buffer pairing a GPU buffer with a CPU shadow of its
/// contents.
///
/// The shadow is populated through [`StagingBuffer::writer`], flushed to the
/// GPU buffer with [`StagingBuffer::flush`], and the GPU buffer then serves
/// as the source of a buffer-to-texture copy.
pub struct StagingBuffer {
    buffer: wgpu::Buffer,
    shadow: Vec<u8>,
}

impl StagingBuffer {
    /// Allocate a transfer buffer of `size` bytes.
    #[must_use]
    pub fn new(device: &wgpu::Device, label: &str, size: u64) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size,
            usage: wgpu::BufferUsages::COPY_SRC | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            buffer,
            shadow: vec![0; size as usize],
        }
    }

    /// Buffer size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shadow.len()
    }

    /// Whether the buffer has zero size.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shadow.is_empty()
    }

    /// Acquire scoped write access to the shadow.
    pub fn writer(&mut self) -> StagingWriter<'_> {
        StagingWriter {
            shadow: &mut self.shadow,
        }
    }

    /// Upload the shadow to the GPU buffer.
    pub fn flush(&self, queue: &wgpu::Queue) {
        queue.write_buffer(&self.buffer, 0, &self.shadow);
    }

    /// The GPU-side buffer, for use as a copy source.
    #[must_use]
    pub fn gpu(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// The current shadow contents.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.shadow
    }
}

/// Exclusive write access to a staging buffer's shadow for the duration of
/// one populate phase.
pub struct StagingWriter<'a> {
    shadow: &'a mut [u8],
}

impl StagingWriter<'_> {
    /// The writable shadow bytes.
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        self.shadow
    }

    /// Fill the shadow from a typed texel slice.
    ///
    /// # Panics
    ///
    /// Panics if the byte length of `texels` differs from the buffer size;
    /// the caller sizes both from the same format.
    pub fn copy_texels<T: bytemuck::Pod>(&mut self, texels: &[T]) {
        self.shadow.copy_from_slice(bytemuck::cast_slice(texels));
    }
}
