#![allow(dead_code)]

use mesh3ds::chunk::ChunkId;

/// Builds scene bytes with correct chunk lengths.
#[derive(Clone, Debug)]
pub enum Chunk {
    Main(Vec<Chunk>),
    Editor(Vec<Chunk>),
    Object(String, Vec<Chunk>),
    Mesh(Vec<Chunk>),
    Vertices(Vec<[f32; 3]>),
    Faces(Vec<[u16; 4]>),
    Opaque(u16, Vec<u8>),
}

impl Chunk {
    pub fn object(name: &str, children: Vec<Chunk>) -> Self {
        Self::Object(name.to_owned(), children)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let (tag, payload) = match self {
            Self::Main(children) => (ChunkId::MAIN, children_bytes(children)),
            Self::Editor(children) => (ChunkId::EDITOR_3D, children_bytes(children)),
            Self::Object(name, children) => {
                let mut payload = name.as_bytes().to_vec();
                payload.push(0);
                payload.extend(children_bytes(children));

                (ChunkId::OBJECT_BLOCK, payload)
            }
            Self::Mesh(children) => (ChunkId::TRIANGULAR_MESH, children_bytes(children)),
            Self::Vertices(vertices) => {
                let mut payload = (vertices.len() as u16).to_le_bytes().to_vec();
                for vertex in vertices {
                    for val in vertex {
                        payload.extend_from_slice(&val.to_le_bytes());
                    }
                }

                (ChunkId::VERTICES_LIST, payload)
            }
            Self::Faces(faces) => {
                let mut payload = (faces.len() as u16).to_le_bytes().to_vec();
                for face in faces {
                    for val in face {
                        payload.extend_from_slice(&val.to_le_bytes());
                    }
                }

                (ChunkId::FACES_LIST, payload)
            }
            Self::Opaque(tag, payload) => (*tag, payload.clone()),
        };

        let mut buf = tag.to_le_bytes().to_vec();
        buf.extend_from_slice(&(payload.len() as u32 + 6).to_le_bytes());
        buf.extend(payload);
        buf
    }
}

fn children_bytes(children: &[Chunk]) -> Vec<u8> {
    children.iter().flat_map(Chunk::to_bytes).collect()
}

pub fn cube_vertices() -> Vec<[f32; 3]> {
    let mut res = vec![];
    for idx in 0..8 {
        res.push([
            (idx & 1) as f32,
            ((idx >> 1) & 1) as f32,
            ((idx >> 2) & 1) as f32,
        ]);
    }

    res
}

pub fn cube_faces() -> Vec<[u16; 4]> {
    vec![
        [0, 1, 3, 7],
        [0, 3, 2, 7],
        [4, 6, 7, 7],
        [4, 7, 5, 7],
        [0, 4, 5, 7],
        [0, 5, 1, 7],
        [2, 3, 7, 7],
        [2, 7, 6, 7],
        [0, 2, 6, 7],
        [0, 6, 4, 7],
        [1, 5, 7, 7],
        [1, 7, 3, 7],
    ]
}

/// A mesh object as it is laid out by most exporters.
pub fn mesh_object(name: &str, vertices: Vec<[f32; 3]>, faces: Vec<[u16; 4]>) -> Chunk {
    Chunk::object(
        name,
        vec![Chunk::Mesh(vec![
            Chunk::Vertices(vertices),
            // Local coordinate system, skipped
            Chunk::Opaque(0x4160, vec![0; 48]),
            Chunk::Faces(faces),
        ])],
    )
}

pub fn scene(objects: Vec<Chunk>) -> Vec<u8> {
    Chunk::Main(vec![
        // Version
        Chunk::Opaque(0x0002, 3u32.to_le_bytes().to_vec()),
        Chunk::Editor(objects),
    ])
    .to_bytes()
}
