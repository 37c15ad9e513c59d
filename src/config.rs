use {
    anyhow::Context,
    serde::{Deserialize, Serialize},
    std::{
        fs::read_to_string,
        path::{Path, PathBuf},
    },
};

/// What happens to an object which has not been completed by a face list when the next object
/// block begins.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectBoundary {
    /// Keep the vertices and triangles read so far; the new name replaces the old one. Only a
    /// completed face list starts a fresh object.
    #[default]
    Accumulate,

    /// Discard the unfinished object and start a fresh one.
    Reset,
}

/// Options which change how a scene is decoded.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DecodeOptions {
    pub object_boundary: ObjectBoundary,
}

impl From<&SceneConfig> for DecodeOptions {
    fn from(config: &SceneConfig) -> Self {
        Self {
            object_boundary: config.object_boundary,
        }
    }
}

/// Top-level `.toml` configuration file.
///
/// ```toml
/// [scene]
/// src = "Car.3DS"
/// object-boundary = "accumulate"
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scene: SceneConfig,
}

impl Config {
    /// Reads a configuration file from disk.
    ///
    /// A relative `src` is resolved against the directory holding the configuration file.
    pub fn read(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let str = read_to_string(path)
            .with_context(|| format!("Reading config file {}", path.display()))?;
        let mut res: Self = toml::from_str(&str).context("Parsing config toml")?;

        let dir = path
            .parent()
            .map(|path| path.to_owned())
            .unwrap_or_default();
        res.scene.canonicalize(dir);

        Ok(res)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct SceneConfig {
    /// The scene file to decode.
    #[serde(default = "SceneConfig::default_src")]
    pub src: PathBuf,

    #[serde(default)]
    pub object_boundary: ObjectBoundary,
}

impl SceneConfig {
    pub const DEFAULT_SRC: &'static str = "Car.3DS";

    fn canonicalize(&mut self, dir: impl AsRef<Path>) {
        if self.src.is_relative() {
            let src = dir.as_ref().join(&self.src);
            self.src = dunce::canonicalize(&src).unwrap_or(src);
        }
    }

    fn default_src() -> PathBuf {
        PathBuf::from(Self::DEFAULT_SRC)
    }

    pub fn options(&self) -> DecodeOptions {
        self.into()
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            src: Self::default_src(),
            object_boundary: Default::default(),
        }
    }
}

/// Returns `true` when a given path has the `.toml` file extension.
pub fn is_toml(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| ext.eq_ignore_ascii_case("toml"))
        .is_some()
}
