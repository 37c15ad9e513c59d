mod common;

use {
    common::{mesh_object, scene, Chunk},
    mesh3ds::Scene,
    proptest::prelude::*,
};

#[derive(Clone, Debug)]
struct ObjectData {
    name: String,
    vertices: Vec<[f32; 3]>,
    faces: Vec<[u16; 4]>,
    padding: Option<(u16, Vec<u8>)>,
}

fn object_data() -> impl Strategy<Value = ObjectData> {
    (
        "[A-Za-z][A-Za-z0-9_]{0,9}",
        prop::collection::vec(prop::array::uniform3(-1000.0f32..1000.0), 0..64),
        prop::collection::vec(prop::array::uniform4(any::<u16>()), 0..64),
        // Opaque chunks use tags from the material/keyframer ranges
        prop::option::of((0xA000u16..0xBFFF, prop::collection::vec(any::<u8>(), 0..32))),
    )
        .prop_map(|(name, vertices, faces, padding)| ObjectData {
            name,
            vertices,
            faces,
            padding,
        })
}

fn encode(objects: &[ObjectData]) -> Vec<u8> {
    let mut chunks = vec![];
    for object in objects {
        if let Some((tag, payload)) = &object.padding {
            chunks.push(Chunk::Opaque(*tag, payload.clone()));
        }

        chunks.push(mesh_object(
            &object.name,
            object.vertices.clone(),
            object.faces.clone(),
        ));
    }

    scene(chunks)
}

proptest! {
    #[test]
    fn one_object_per_face_list(objects in prop::collection::vec(object_data(), 0..6)) {
        let data = encode(&objects);
        let scene = Scene::try_from(data.as_slice()).unwrap();

        prop_assert_eq!(scene.objects().len(), objects.len());
        prop_assert_eq!(
            scene.total_vertices(),
            objects.iter().map(|object| object.vertices.len()).sum::<usize>()
        );

        for (actual, expected) in scene.iter().zip(&objects) {
            prop_assert_eq!(actual.name(), expected.name.as_str());
            prop_assert_eq!(actual.vertex_count(), expected.vertices.len());
            prop_assert_eq!(actual.triangle_count(), expected.faces.len());

            for (vertex, expected) in actual.vertices().iter().zip(&expected.vertices) {
                prop_assert_eq!(vertex.to_array(), *expected);
            }

            for ((triangle, flags), face) in actual
                .triangles()
                .iter()
                .zip(actual.face_flags())
                .zip(&expected.faces)
            {
                prop_assert_eq!(*triangle, [face[0], face[1], face[2]]);
                prop_assert_eq!(flags.bits(), face[3]);
            }
        }
    }

    #[test]
    fn decode_twice_is_equal(objects in prop::collection::vec(object_data(), 0..4)) {
        let data = encode(&objects);

        prop_assert_eq!(
            Scene::try_from(data.as_slice()).unwrap(),
            Scene::try_from(data.as_slice()).unwrap()
        );
    }

    #[test]
    fn truncation_drops_unfinished_objects(
        objects in prop::collection::vec(object_data(), 1..4),
        cut in any::<prop::sample::Index>(),
    ) {
        let data = encode(&objects);
        let whole = Scene::try_from(data.as_slice()).unwrap();
        let len = cut.index(data.len());

        // A cut between chunks ends the walk with the objects completed so far; a cut inside a
        // field fails. The last object's face list always ends the stream, so it is never kept
        match Scene::try_from(&data[..len]) {
            Ok(scene) => {
                prop_assert!(scene.objects().len() < objects.len());
                prop_assert_eq!(scene.objects(), &whole.objects()[..scene.objects().len()]);
            }
            Err(err) => prop_assert!(err.is_truncated(), "{}", err),
        }
    }
}
