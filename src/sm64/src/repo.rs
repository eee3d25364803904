//! Source tree traversal.
//!
//! Expected layout of a decomp checkout:
//!
//! ```text
//! <repo>/levels/<level>/script.c
//! <repo>/levels/<level>/**/macro.inc.c
//! <repo>/include/model_ids.h
//! <repo>/include/macro_presets.h         (optional)
//! <repo>/include/macro_preset_names.h    (optional)
//! ```

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::ParseError;
use crate::macro_object::{parse_macro_objects, MacroObjectRecord};
use crate::macro_preset::{parse_macro_presets, MacroPresetRecord};
use crate::model::{parse_model_ids, ModelRecord};
use crate::object::{parse_objects, ObjectRecord};

pub const LEVELS_DIR: &str = "levels";
pub const LEVEL_SCRIPT: &str = "script.c";
pub const MACRO_INCLUDE: &str = "macro.inc.c";
pub const MODEL_IDS_HEADER: &str = "include/model_ids.h";
pub const MACRO_PRESETS_HEADER: &str = "include/macro_presets.h";
pub const MACRO_PRESET_NAMES_HEADER: &str = "include/macro_preset_names.h";

/// Errors raised while walking a source tree
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("{} does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

/// Result type for source tree operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Records found in one level directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LevelRecords {
    pub objects: Vec<ObjectRecord>,
    pub macro_objects: Vec<MacroObjectRecord>,
}

impl LevelRecords {
    fn extend(&mut self, other: LevelRecords) {
        self.objects.extend(other.objects);
        self.macro_objects.extend(other.macro_objects);
    }
}

/// Everything extracted from a source tree, in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extraction {
    pub objects: Vec<ObjectRecord>,
    pub macro_objects: Vec<MacroObjectRecord>,
    pub models: Vec<ModelRecord>,
    pub macro_presets: Vec<MacroPresetRecord>,
}

/// Record counts per kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionSummary {
    pub objects: usize,
    pub macro_objects: usize,
    pub models: usize,
    pub macro_presets: usize,
}

impl Extraction {
    pub fn summary(&self) -> ExtractionSummary {
        ExtractionSummary {
            objects: self.objects.len(),
            macro_objects: self.macro_objects.len(),
            models: self.models.len(),
            macro_presets: self.macro_presets.len(),
        }
    }
}

impl std::fmt::Display for ExtractionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} objects, {} macro objects, {} models, {} macro presets",
            self.objects, self.macro_objects, self.models, self.macro_presets
        )
    }
}

/// Check that `path` exists and is a directory
pub fn check_repo(path: &Path) -> RepoResult<PathBuf> {
    if !path.exists() {
        return Err(RepoError::NotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(RepoError::NotADirectory(path.to_path_buf()));
    }
    Ok(path.to_path_buf())
}

fn read_text(path: &Path) -> RepoResult<String> {
    std::fs::read_to_string(path).map_err(|source| RepoError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_error(path: &Path) -> impl FnOnce(ParseError) -> RepoError + '_ {
    move |source| RepoError::Parse {
        path: path.to_path_buf(),
        source,
    }
}

/// Immediate subdirectories of `<repo>/levels`, sorted by path
pub fn level_dirs(repo: &Path) -> RepoResult<Vec<PathBuf>> {
    let levels = repo.join(LEVELS_DIR);
    let io_error = |source| RepoError::Io {
        path: levels.clone(),
        source,
    };

    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(&levels).map_err(io_error)? {
        let subpath = entry.map_err(io_error)?.path();
        if subpath.is_dir() {
            dirs.push(subpath);
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Every `macro.inc.c` below a level directory, sorted by path
pub fn macro_include_files(level_dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(level_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && e.file_name() == MACRO_INCLUDE)
        .map(|e| e.into_path())
        .collect();
    files.sort();
    files
}

/// Parse a level's script and macro includes.
///
/// The level name is the directory name.
pub fn parse_level(level_dir: &Path) -> RepoResult<LevelRecords> {
    let level = level_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let script_path = level_dir.join(LEVEL_SCRIPT);
    let script = read_text(&script_path)?;
    let objects = parse_objects(&script, &level)
        .collect::<Result<Vec<_>, _>>()
        .map_err(parse_error(&script_path))?;

    let mut macro_objects = Vec::new();
    for path in macro_include_files(level_dir) {
        let text = read_text(&path)?;
        let parsed = parse_macro_objects(&text, &level)
            .collect::<Result<Vec<_>, _>>()
            .map_err(parse_error(&path))?;
        macro_objects.extend(parsed);
    }

    tracing::debug!(
        "{}: {} objects, {} macro objects",
        level,
        objects.len(),
        macro_objects.len()
    );

    Ok(LevelRecords {
        objects,
        macro_objects,
    })
}

/// Parse the model ID header
pub fn parse_models(repo: &Path) -> RepoResult<Vec<ModelRecord>> {
    let text = read_text(&repo.join(MODEL_IDS_HEADER))?;
    Ok(parse_model_ids(&text).collect())
}

/// Parse the macro preset headers, if the checkout has them
pub fn parse_presets(repo: &Path) -> RepoResult<Vec<MacroPresetRecord>> {
    let table_path = repo.join(MACRO_PRESETS_HEADER);
    let names_path = repo.join(MACRO_PRESET_NAMES_HEADER);
    if !table_path.is_file() || !names_path.is_file() {
        tracing::info!(
            "Macro preset headers not found, skipping presets ({}, {})",
            MACRO_PRESETS_HEADER,
            MACRO_PRESET_NAMES_HEADER
        );
        return Ok(Vec::new());
    }

    let table = read_text(&table_path)?;
    let names = read_text(&names_path)?;
    parse_macro_presets(&table, &names).map_err(parse_error(&table_path))
}

/// Parse a whole source tree
pub fn parse_repo(repo: &Path) -> RepoResult<Extraction> {
    let repo = check_repo(repo)?;

    let levels = level_dirs(&repo)?
        .iter()
        .map(|dir| parse_level(dir))
        .try_fold(LevelRecords::default(), |mut acc, level| {
            acc.extend(level?);
            Ok::<_, RepoError>(acc)
        })?;

    let extraction = Extraction {
        objects: levels.objects,
        macro_objects: levels.macro_objects,
        models: parse_models(&repo)?,
        macro_presets: parse_presets(&repo)?,
    };

    tracing::info!("Parsed {}: {}", repo.display(), extraction.summary());
    Ok(extraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    fn create_test_repo(dir: &TempDir) -> PathBuf {
        let root = dir.path().to_path_buf();
        write(
            &root,
            "levels/bob/script.c",
            "    OBJECT(MODEL_KOOPA, 100, 200, 300, 0, 90, 0, 0, bhvKoopa),\n    RETURN(),\n",
        );
        write(
            &root,
            "levels/bob/areas/1/macro.inc.c",
            "    MACRO_OBJECT(macro_goomba, 0, 1, 2, 3),\n    MACRO_OBJECT_END(),\n",
        );
        write(
            &root,
            "levels/wf/script.c",
            "    OBJECT_WITH_ACTS(MODEL_STAR, 1, 2, 3, 0, 0, 0, 0, bhvStar, ACT_2),\n",
        );
        write(&root, "levels/level_defines.h", "// not a level\n");
        write(
            &root,
            "include/model_ids.h",
            "#define MODEL_IDS_H\n#define MODEL_KOOPA 0x68\n#define MODEL_STAR 122\n",
        );
        root
    }

    #[test]
    fn test_check_repo_missing() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(check_repo(&missing), Err(RepoError::NotFound(_))));
    }

    #[test]
    fn test_check_repo_not_a_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("file.txt");
        std::fs::write(&file, "x").unwrap();
        assert!(matches!(check_repo(&file), Err(RepoError::NotADirectory(_))));
    }

    #[test]
    fn test_level_dirs_skips_files() {
        let dir = TempDir::new().unwrap();
        let root = create_test_repo(&dir);
        let names: Vec<_> = level_dirs(&root)
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["bob", "wf"]);
    }

    #[test]
    fn test_parse_level_reads_nested_macros() {
        let dir = TempDir::new().unwrap();
        let root = create_test_repo(&dir);
        let level = parse_level(&root.join("levels/bob")).unwrap();

        assert_eq!(level.objects.len(), 1);
        assert_eq!(level.objects[0].level, "bob");
        assert_eq!(level.macro_objects.len(), 1);
        assert_eq!(level.macro_objects[0].macro_name, "macro_goomba");
    }

    #[test]
    fn test_parse_repo() {
        let dir = TempDir::new().unwrap();
        let root = create_test_repo(&dir);
        let extraction = parse_repo(&root).unwrap();

        assert_eq!(
            extraction.summary(),
            ExtractionSummary {
                objects: 2,
                macro_objects: 1,
                models: 2,
                macro_presets: 0,
            }
        );
        assert_eq!(extraction.objects[0].level, "bob");
        assert_eq!(extraction.objects[1].level, "wf");
        assert!(extraction.objects[1].in_act_2);
        assert!(!extraction.objects[1].in_act_1);
        assert_eq!(extraction.models[0], ModelRecord::new("MODEL_KOOPA", 0x68));
    }

    #[test]
    fn test_parse_repo_with_presets() {
        let dir = TempDir::new().unwrap();
        let root = create_test_repo(&dir);
        write(&root, MACRO_PRESET_NAMES_HEADER, "enum MacroPresets {\n    macro_goomba,\n};\n");
        write(
            &root,
            MACRO_PRESETS_HEADER,
            "struct MacroPreset MacroObjectPresets[] = {\n    {bhvGoomba, MODEL_GOOMBA, 0},\n};\n",
        );

        let extraction = parse_repo(&root).unwrap();
        assert_eq!(extraction.macro_presets.len(), 1);
        assert_eq!(extraction.macro_presets[0].macro_name, "macro_goomba");
        assert_eq!(extraction.macro_presets[0].behavior, "bhvGoomba");
    }

    #[test]
    fn test_parse_error_names_file() {
        let dir = TempDir::new().unwrap();
        let root = create_test_repo(&dir);
        write(&root, "levels/ccm/script.c", "    OBJECT(MODEL_KOOPA, 1, 2),\n");

        let err = parse_repo(&root).unwrap_err();
        match err {
            RepoError::Parse { path, source } => {
                assert!(path.ends_with("levels/ccm/script.c"));
                assert!(matches!(source, ParseError::Arity { expected: 9, actual: 3, .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_script_is_io_error() {
        let dir = TempDir::new().unwrap();
        let root = create_test_repo(&dir);
        std::fs::create_dir_all(root.join("levels/empty")).unwrap();

        assert!(matches!(parse_repo(&root), Err(RepoError::Io { .. })));
    }

    #[test]
    fn test_missing_model_header_is_io_error() {
        let dir = TempDir::new().unwrap();
        let root = create_test_repo(&dir);
        std::fs::remove_file(root.join(MODEL_IDS_HEADER)).unwrap();

        assert!(matches!(parse_repo(&root), Err(RepoError::Io { .. })));
    }
}
