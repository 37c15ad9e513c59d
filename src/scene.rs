use {
    crate::{
        chunk::{read_cstr, read_u16, read_vec3, ChunkHeader, ChunkId},
        config::{DecodeOptions, ObjectBoundary},
        error::{DecodeError, DecodeResult},
        mesh::{FaceFlags, MeshObject},
        stream::{stream_len, SceneFile, Stream},
    },
    log::{debug, info, trace, warn},
    serde::{Deserialize, Serialize},
    std::{
        io::{Cursor, Read, Seek, SeekFrom},
        mem::take,
        path::Path,
    },
};

/// The meshes decoded from a single scene, in the order their face lists were completed.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Scene {
    byte_len: u64,
    objects: Vec<MeshObject>,
    total_vertices: usize,
}

impl Scene {
    pub fn into_objects(self) -> Vec<MeshObject> {
        self.objects
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MeshObject> {
        self.objects.iter()
    }

    /// Length of the decoded stream in bytes.
    pub fn byte_len(&self) -> u64 {
        self.byte_len
    }

    /// Gets the first object with the given name, if one exists.
    pub fn object(&self, name: impl AsRef<str>) -> Option<&MeshObject> {
        let name = name.as_ref();

        self.objects.iter().find(|object| object.name() == name)
    }

    pub fn objects(&self) -> &[MeshObject] {
        &self.objects
    }

    /// Opens the given path and decodes a `Scene`.
    pub fn open(path: impl AsRef<Path>) -> DecodeResult<Self> {
        Self::open_with(path, Default::default())
    }

    pub fn open_with(path: impl AsRef<Path>, options: DecodeOptions) -> DecodeResult<Self> {
        let file = SceneFile::open(path)?;

        Self::read_with(file, options)
    }

    pub fn read(stream: impl Stream) -> DecodeResult<Self> {
        Self::read_with(stream, Default::default())
    }

    /// Walks every chunk of the stream, from the start, collecting completed mesh objects.
    ///
    /// Umbrella chunks (main, editor, triangular mesh) are entered, not skipped, so their children
    /// are visited by the following iterations. Unknown chunks are skipped whole, children
    /// included.
    pub fn read_with(mut stream: impl Stream, options: DecodeOptions) -> DecodeResult<Self> {
        let len = stream_len(&mut stream)?;

        info!("Scene length is {len} bytes");

        let mut object = MeshObject::default();
        let mut objects = vec![];
        let mut total_vertices = 0;
        let mut offset = 0;

        while offset < len {
            let header = ChunkHeader::read(&mut stream)?;

            trace!(
                "Chunk 0x{:04X} ({} bytes) at {offset}",
                header.tag, header.length
            );

            match header.id() {
                ChunkId::Main => debug!("Found main chunk of {} bytes", header.length),
                ChunkId::Editor3d | ChunkId::TriangularMesh => (),
                ChunkId::ObjectBlock => {
                    let name = read_cstr(&mut stream)?;

                    info!("Reading object {name}");

                    if options.object_boundary == ObjectBoundary::Reset && !object.is_empty() {
                        warn!(
                            "Discarding unfinished object {} ({} vertices)",
                            object.name(),
                            object.vertex_count()
                        );

                        object = MeshObject::default();
                    }

                    object.set_name(name);
                }
                ChunkId::VerticesList => total_vertices += read_vertices(&mut stream, &mut object)?,
                ChunkId::FacesList => {
                    read_faces(&mut stream, &mut object)?;
                    objects.push(take(&mut object));
                }
                ChunkId::Unknown(_) => skip(&mut stream, header, offset)?,
            }

            offset = stream.stream_position()?;
        }

        if !object.is_empty() {
            warn!(
                "Object {} has {} vertices but no face list",
                object.name(),
                object.vertex_count()
            );
        }

        info!("Total no of vertices: {total_vertices}");

        Ok(Self {
            byte_len: len,
            objects,
            total_vertices,
        })
    }

    /// Sum of the vertex counts of every vertex list in the stream.
    pub fn total_vertices(&self) -> usize {
        self.total_vertices
    }
}

impl IntoIterator for Scene {
    type Item = MeshObject;
    type IntoIter = std::vec::IntoIter<MeshObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.into_iter()
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a MeshObject;
    type IntoIter = std::slice::Iter<'a, MeshObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}

impl TryFrom<&[u8]> for Scene {
    type Error = DecodeError;

    fn try_from(data: &[u8]) -> DecodeResult<Self> {
        Self::read(Cursor::new(data))
    }
}

/// Reads a face list payload: a `u16` count then `count` records of three indices and a flags
/// field. Returns the number of triangles read.
fn read_faces(
    stream: &mut (impl Read + Seek + ?Sized),
    object: &mut MeshObject,
) -> DecodeResult<usize> {
    let count = read_u16(stream)?;

    debug!("Adding {count} faces");

    for _ in 0..count {
        let a = read_u16(stream)?;
        let b = read_u16(stream)?;
        let c = read_u16(stream)?;
        let flags = FaceFlags::from_bits_retain(read_u16(stream)?);
        object.push_triangle([a, b, c], flags);
    }

    Ok(count as _)
}

/// Reads a vertex list payload: a `u16` count then `count` positions. Returns the number of
/// vertices read.
fn read_vertices(
    stream: &mut (impl Read + Seek + ?Sized),
    object: &mut MeshObject,
) -> DecodeResult<usize> {
    let count = read_u16(stream)?;

    debug!("Adding {count} vertices");

    for _ in 0..count {
        object.push_vertex(read_vec3(stream)?);
    }

    Ok(count as _)
}

/// Moves past the payload of a chunk whose header (starting at `offset`) was just read.
///
/// A payload which runs past the end of the stream is not an error: the position lands beyond
/// the end and the walk stops there.
fn skip(
    stream: &mut (impl Read + Seek + ?Sized),
    header: ChunkHeader,
    offset: u64,
) -> DecodeResult<()> {
    let payload_len = header.payload_len(offset)?;

    trace!("Skipping chunk 0x{:04X} ({payload_len} bytes)", header.tag);

    stream.seek(SeekFrom::Current(payload_len as _))?;

    Ok(())
}
