pub mod sampler;
pub mod seven_segment;
pub mod tdm;

pub use sampler::DisplaySampler;
pub use seven_segment::GlyphDecoder;
pub use seven_segment::HexDecoder;
pub use tdm::Tdm4;
pub use tdm::TdmOutput;
