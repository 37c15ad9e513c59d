//! Chunk header and primitive field decoding.
//!
//! Every value is read as an explicit little-endian field. A header is two fields (`u16` tag then
//! `u32` length) and always consumes exactly [`ChunkHeader::SIZE`] bytes, which is not the
//! size of an equivalent `#[repr(C)]` struct.

use {
    crate::error::{DecodeError, DecodeResult},
    glam::Vec3,
    std::io::{Read, Seek},
};

/// The chunk types this crate knows how to walk.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ChunkId {
    /// `0x4D4D`: root chunk of every scene.
    Main,
    /// `0x3D3D`: editor data container.
    Editor3d,
    /// `0x4000`: named object, followed by its child chunks.
    ObjectBlock,
    /// `0x4100`: triangle mesh container.
    TriangularMesh,
    /// `0x4110`: vertex positions.
    VerticesList,
    /// `0x4120`: triangle indices and face flags.
    FacesList,
    /// Any other tag; skipped by length.
    Unknown(u16),
}

impl ChunkId {
    pub const MAIN: u16 = 0x4D4D;
    pub const EDITOR_3D: u16 = 0x3D3D;
    pub const OBJECT_BLOCK: u16 = 0x4000;
    pub const TRIANGULAR_MESH: u16 = 0x4100;
    pub const VERTICES_LIST: u16 = 0x4110;
    pub const FACES_LIST: u16 = 0x4120;

    pub fn tag(self) -> u16 {
        match self {
            Self::Main => Self::MAIN,
            Self::Editor3d => Self::EDITOR_3D,
            Self::ObjectBlock => Self::OBJECT_BLOCK,
            Self::TriangularMesh => Self::TRIANGULAR_MESH,
            Self::VerticesList => Self::VERTICES_LIST,
            Self::FacesList => Self::FACES_LIST,
            Self::Unknown(tag) => tag,
        }
    }
}

impl From<u16> for ChunkId {
    fn from(tag: u16) -> Self {
        match tag {
            Self::MAIN => Self::Main,
            Self::EDITOR_3D => Self::Editor3d,
            Self::OBJECT_BLOCK => Self::ObjectBlock,
            Self::TRIANGULAR_MESH => Self::TriangularMesh,
            Self::VERTICES_LIST => Self::VerticesList,
            Self::FACES_LIST => Self::FacesList,
            tag => Self::Unknown(tag),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChunkHeader {
    /// Chunk type identifier.
    pub tag: u16,

    /// Total chunk length in bytes, including this header.
    pub length: u32,
}

impl ChunkHeader {
    /// Size of a header on the wire.
    pub const SIZE: u32 = 6;

    pub fn id(&self) -> ChunkId {
        self.tag.into()
    }

    /// Reads one header from the current position of the stream.
    pub fn read(stream: &mut (impl Read + Seek + ?Sized)) -> DecodeResult<Self> {
        let tag = read_u16(stream)?;
        let length = read_u32(stream)?;

        Ok(Self { tag, length })
    }

    /// Returns the number of bytes following the header, or an error if the declared length
    /// cannot even hold the header. `offset` is only used for error reporting.
    pub fn payload_len(&self, offset: u64) -> DecodeResult<u32> {
        self.length
            .checked_sub(Self::SIZE)
            .ok_or(DecodeError::MalformedChunk {
                tag: self.tag,
                length: self.length,
                offset,
            })
    }
}

fn read_array<const N: usize>(stream: &mut (impl Read + Seek + ?Sized)) -> DecodeResult<[u8; N]> {
    // Short reads report where the field started, not where the stream gave up
    let offset = stream.stream_position()?;
    let mut buf = [0; N];
    stream
        .read_exact(&mut buf)
        .map_err(|err| DecodeError::from_io(err, offset))?;

    Ok(buf)
}

pub fn read_u16(stream: &mut (impl Read + Seek + ?Sized)) -> DecodeResult<u16> {
    read_array(stream).map(u16::from_le_bytes)
}

pub fn read_u32(stream: &mut (impl Read + Seek + ?Sized)) -> DecodeResult<u32> {
    read_array(stream).map(u32::from_le_bytes)
}

pub fn read_f32(stream: &mut (impl Read + Seek + ?Sized)) -> DecodeResult<f32> {
    read_array(stream).map(f32::from_le_bytes)
}

pub fn read_vec3(stream: &mut (impl Read + Seek + ?Sized)) -> DecodeResult<Vec3> {
    let x = read_f32(stream)?;
    let y = read_f32(stream)?;
    let z = read_f32(stream)?;

    Ok(Vec3::new(x, y, z))
}

/// Reads a null-terminated string. The terminator is consumed but not returned.
///
/// Names are ASCII in practice; any other bytes are replaced rather than failing the decode.
pub fn read_cstr(stream: &mut (impl Read + Seek + ?Sized)) -> DecodeResult<String> {
    let mut buf = vec![];
    loop {
        let [byte] = read_array(stream)?;
        if byte == 0 {
            break;
        }

        buf.push(byte);
    }

    Ok(String::from_utf8_lossy(&buf).into_owned())
}
