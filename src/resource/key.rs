use crate::foundation::error::{AllocError, AllocResult};
use smallvec::SmallVec;
use xxhash_rust::xxh3::Xxh3;

const XXH3_SEED: u64 = 0x5c3a_91e2_7f04_d6b3;

/// Key domain used by [`SurfaceDesc::shape_key`].
pub const SURFACE_KEY_DOMAIN: u32 = 1;

/// Opaque scratch key describing what a resource can substitute for.
///
/// Two resources with equal keys are fungible. The key is a domain word followed by payload
/// words, with the hash computed once at build time so pool lookups never rehash the payload.
#[derive(Clone, Debug)]
pub struct ShapeKey {
    hash: u64,
    words: SmallVec<[u32; 6]>,
}

impl ShapeKey {
    /// Starts a key in `domain`; payload words follow through [`ShapeKeyBuilder::word`].
    pub fn builder(domain: u32) -> ShapeKeyBuilder {
        let mut words = SmallVec::new();
        words.push(domain);
        ShapeKeyBuilder { words }
    }

    /// Domain word the key was built in.
    pub fn domain(&self) -> u32 {
        self.words[0]
    }

    /// Cached xxh3 hash of the domain and payload words.
    pub fn hash_value(&self) -> u64 {
        self.hash
    }

    /// Payload words, without the domain word.
    pub fn words(&self) -> &[u32] {
        &self.words[1..]
    }
}

impl PartialEq for ShapeKey {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.words == other.words
    }
}

impl Eq for ShapeKey {}

impl std::hash::Hash for ShapeKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

/// Accumulates payload words for a [`ShapeKey`].
pub struct ShapeKeyBuilder {
    words: SmallVec<[u32; 6]>,
}

impl ShapeKeyBuilder {
    /// Appends one payload word.
    pub fn word(mut self, w: u32) -> Self {
        self.words.push(w);
        self
    }

    /// Hashes the words and seals the key.
    pub fn finish(self) -> ShapeKey {
        let mut h = Xxh3::with_seed(XXH3_SEED);
        h.update(&(self.words.len() as u32).to_le_bytes());
        for w in &self.words {
            h.update(&w.to_le_bytes());
        }
        ShapeKey {
            hash: h.digest(),
            words: self.words,
        }
    }
}

/// Pixel formats a surface can be created with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PixelFormat {
    /// 8-bit RGBA, normalized.
    Rgba8Unorm,
    /// 8-bit BGRA, normalized.
    Bgra8Unorm,
    /// 16-bit float RGBA.
    Rgba16Float,
    /// Single 8-bit coverage channel.
    Alpha8,
    /// Packed depth and stencil.
    Depth24Stencil8,
}

impl PixelFormat {
    /// Size of one sample in bytes.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Alpha8 => 1,
            Self::Rgba8Unorm | Self::Bgra8Unorm | Self::Depth24Stencil8 => 4,
            Self::Rgba16Float => 8,
        }
    }

    fn code(self) -> u32 {
        match self {
            Self::Rgba8Unorm => 0,
            Self::Bgra8Unorm => 1,
            Self::Rgba16Float => 2,
            Self::Alpha8 => 3,
            Self::Depth24Stencil8 => 4,
        }
    }
}

/// Surface declaration: dimensions, format and sample layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct SurfaceDesc {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel format.
    pub format: PixelFormat,
    /// MSAA sample count; 1 means single-sampled.
    pub sample_count: u8,
    /// Whether the surface carries a mip chain.
    pub mipmapped: bool,
}

impl SurfaceDesc {
    /// Single-sampled, non-mipmapped surface. Rejects zero dimensions.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> AllocResult<Self> {
        if width == 0 || height == 0 {
            return Err(AllocError::validation(format!(
                "surface dimensions must be non-zero (got {width}x{height})"
            )));
        }
        Ok(Self {
            width,
            height,
            format,
            sample_count: 1,
            mipmapped: false,
        })
    }

    /// Sets the sample count. Rejects 0.
    pub fn with_samples(mut self, sample_count: u8) -> AllocResult<Self> {
        if sample_count == 0 {
            return Err(AllocError::validation("sample_count must be >= 1"));
        }
        self.sample_count = sample_count;
        Ok(self)
    }

    /// Sets whether the surface carries a mip chain.
    pub fn with_mipmaps(mut self, mipmapped: bool) -> Self {
        self.mipmapped = mipmapped;
        self
    }

    /// Approximate backing size, ignoring mip chains.
    pub fn byte_len(self) -> usize {
        let px = (self.width as usize).saturating_mul(self.height as usize);
        px.saturating_mul(self.format.bytes_per_pixel())
            .saturating_mul(usize::from(self.sample_count))
    }

    /// Scratch key in [`SURFACE_KEY_DOMAIN`]; equal for descs that differ in nothing.
    pub fn shape_key(self) -> ShapeKey {
        ShapeKey::builder(SURFACE_KEY_DOMAIN)
            .word(self.width)
            .word(self.height)
            .word(self.format.code())
            .word(u32::from(self.sample_count) | (u32::from(self.mipmapped) << 8))
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/resource/key.rs"]
mod tests;
