// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// GPU / graphics allowances — casts between texel widths are intentional
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::missing_const_for_fn)]

//! GPU palette (TLUT) texture bridge for emulated indexed-color rendering,
//! built on wgpu.
//!
//! Paltex owns a single 256×1 GPU texture holding an emulated console's
//! color-lookup table and keeps it in sync with the console's texture memory,
//! uploading at most once per distinct palette state. Shaders sample the
//! texture to resolve indexed-color texels.
//!
//! # Key entry points
//!
//! - [`palette::PaletteTexture`] - the palette texture and its lazy update
//!   pipeline
//! - [`tlut::TlutView`] - validated view of the TLUT bank of emulated
//!   texture memory
//! - [`fingerprint::Fingerprint`] - 256-bit change-detection key
//! - [`options::PaletteOptions`] - construction-time configuration (entry
//!   width, labels)
//!
//! # Architecture
//!
//! The host emulator owns the wgpu device and the emulated memory; this crate
//! is a leaf component driven once per frame. [`palette::PaletteTexture::update`]
//! compares the host-supplied fingerprint against the stored one and, only on
//! change, decodes the 256 entries into a staging buffer and records a
//! buffer-to-texture copy. Resource bytes are accounted through the
//! frame-buffer texture registry in [`gpu::texture_cache`].

pub mod error;
pub mod fingerprint;
pub mod gpu;
pub mod options;
pub mod palette;
pub mod tlut;
