//! Prints the objects found in a `.3ds` scene.
//!
//! Usage: `mesh3ds-info [scene.3ds | config.toml]`
//!
//! With no argument `Car.3DS` in the current directory is read. Set `RUST_LOG=debug` (or `trace`)
//! to follow the chunk walk.

use {
    anyhow::Context,
    log::debug,
    mesh3ds::{is_toml, Config, Scene, SceneConfig},
    std::{env::args_os, path::PathBuf, process::ExitCode},
};

fn config() -> anyhow::Result<SceneConfig> {
    let Some(arg) = args_os().nth(1).map(PathBuf::from) else {
        return Ok(Default::default());
    };

    if is_toml(&arg) {
        Ok(Config::read(&arg)?.scene)
    } else {
        Ok(SceneConfig {
            src: arg,
            ..Default::default()
        })
    }
}

fn run() -> anyhow::Result<()> {
    let config = config()?;

    debug!("{config:?}");

    let scene = Scene::open_with(&config.src, config.options()).with_context(|| {
        format!(
            "Error reading {}. Make sure it exists and has the right format",
            config.src.display()
        )
    })?;

    for object in &scene {
        println!(
            "Object {} - {} vertices {} faces",
            object.name(),
            object.vertex_count(),
            object.triangle_count()
        );
    }

    println!("Total no of vertices: {}", scene.total_vertices());

    Ok(())
}

fn main() -> ExitCode {
    pretty_env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");

            ExitCode::FAILURE
        }
    }
}
