//! Recursive discovery of skill directories.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::{DEFAULT_MAX_DEPTH, LocateOptions, SKILL_FILE_NAME};
use crate::error::{Error, Result};
use crate::frontmatter::extract_frontmatter;
use crate::types::SkillRecord;

/// Finds every skill below `root`, walking [`DEFAULT_MAX_DEPTH`] levels.
///
/// See [`find_skills_to_depth`].
pub fn find_skills_in_dir(root: impl AsRef<Path>, source_type: &str) -> Vec<SkillRecord> {
    find_skills_to_depth(root, source_type, DEFAULT_MAX_DEPTH)
}

/// Finds every skill below `root`, tagging each record with `source_type`.
///
/// A subdirectory is a skill when it directly contains a `SKILL.md` file.
/// Its name and description come from the file's header, falling back to
/// the directory name and an empty string. The walk continues into every
/// subdirectory whether or not it was a skill, so nested skills are found
/// too.
///
/// The root is depth 0. Directories down to depth `max_depth` are listed,
/// so skills up to `max_depth + 1` levels below the root are found but
/// their children are not. Symlinked directories are not followed.
///
/// Records come back in filesystem enumeration order, which is
/// unspecified; sort them if order matters.
///
/// A missing or unlistable root yields an empty vector. A subdirectory
/// that cannot be listed is skipped without affecting its siblings.
///
/// # Examples
///
/// ```no_run
/// use skills_core::find_skills_to_depth;
///
/// let mut skills = find_skills_to_depth("/home/me/.config/agent/skills", "personal", 2);
/// skills.sort_by(|a, b| a.name.cmp(&b.name));
/// for skill in &skills {
///     println!("{}: {}", skill.name, skill.description);
/// }
/// ```
pub fn find_skills_to_depth(
    root: impl AsRef<Path>,
    source_type: &str,
    max_depth: usize,
) -> Vec<SkillRecord> {
    let root = root.as_ref();
    let mut skills = Vec::new();
    if !root.exists() {
        return skills;
    }

    walk(root, source_type, 0, max_depth, &mut skills);
    skills
}

fn walk(
    dir: &Path,
    source_type: &str,
    depth: usize,
    max_depth: usize,
    skills: &mut Vec<SkillRecord>,
) {
    if depth > max_depth {
        return;
    }

    let subdirs = match subdirectories(dir) {
        Ok(subdirs) => subdirs,
        Err(e) => {
            tracing::warn!(%e, "skipping directory");
            return;
        }
    };

    for (path, dir_name) in subdirs {
        let skill_file = path.join(SKILL_FILE_NAME);
        if skill_file.is_file() {
            let header = extract_frontmatter(&skill_file);
            let record =
                SkillRecord::from_header(path.clone(), skill_file, &dir_name, header, source_type);
            tracing::debug!(name = %record.name, path = ?record.path, "found skill");
            skills.push(record);
        }
        walk(&path, source_type, depth + 1, max_depth, skills);
    }
}

/// Immediate subdirectories of `dir` with their base names.
fn subdirectories(dir: &Path) -> Result<Vec<(PathBuf, String)>> {
    let entries = fs::read_dir(dir).map_err(|source| Error::ListDir {
        path: dir.to_path_buf(),
        source,
    })?;

    Ok(keep_dirs(
        dir,
        entries.map(|entry| entry.map(|e| (e.path(), e.file_type().map(|t| t.is_dir())))),
    ))
}

/// Keeps the directory entries of a listing.
///
/// Entries that fail to resolve are logged and left out; the rest of the
/// listing is still returned.
fn keep_dirs<I>(dir: &Path, entries: I) -> Vec<(PathBuf, String)>
where
    I: IntoIterator<Item = io::Result<(PathBuf, io::Result<bool>)>>,
{
    let mut subdirs = Vec::new();
    for entry in entries {
        let (path, is_dir) = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(?dir, %e, "skipping unreadable entry");
                continue;
            }
        };
        match is_dir {
            Ok(true) => {}
            Ok(false) => continue,
            Err(e) => {
                tracing::warn!(?path, %e, "skipping entry");
                continue;
            }
        }
        let Some(name) = path.file_name() else {
            continue;
        };
        let name = name.to_string_lossy().into_owned();
        subdirs.push((path, name));
    }
    subdirs
}

/// Scans several skills roots, each under its own source label.
///
/// Roots are scanned in the order they were added and their records are
/// concatenated. Roots that do not exist contribute nothing.
///
/// # Examples
///
/// ```no_run
/// use skills_core::{LocateOptions, SkillLocator};
///
/// let skills = SkillLocator::new()
///     .root(".agent/skills", "project")
///     .root("/home/me/.config/agent/skills", "personal")
///     .options(LocateOptions::with_max_depth(1))
///     .locate();
/// ```
#[derive(Debug, Clone, Default)]
pub struct SkillLocator {
    roots: Vec<(PathBuf, String)>,
    options: LocateOptions,
}

impl SkillLocator {
    /// Creates a locator with no roots and default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a root scanned under `source_type`.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>, source_type: impl Into<String>) -> Self {
        self.roots.push((path.into(), source_type.into()));
        self
    }

    /// Replaces the scan options.
    #[must_use]
    pub fn options(mut self, options: LocateOptions) -> Self {
        self.options = options;
        self
    }

    /// Configured roots in scan order.
    pub fn roots(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.roots
            .iter()
            .map(|(path, source)| (path.as_path(), source.as_str()))
    }

    /// Scans all roots.
    #[must_use]
    pub fn locate(&self) -> Vec<SkillRecord> {
        self.roots
            .iter()
            .flat_map(|(root, source_type)| {
                find_skills_to_depth(root, source_type, self.options.max_depth)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_skill(dir: &Path, content: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(SKILL_FILE_NAME), content).unwrap();
    }

    fn sorted_names(skills: &[SkillRecord]) -> Vec<&str> {
        let mut names: Vec<_> = skills.iter().map(|s| s.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    #[test]
    fn finds_sibling_skills() {
        let tmp = tempfile::tempdir().unwrap();
        add_skill(
            &tmp.path().join("skill-a"),
            "---\nname: skill-a\ndescription: First skill\n---\n",
        );
        add_skill(
            &tmp.path().join("skill-b"),
            "---\nname: skill-b\ndescription: Second skill\n---\n",
        );

        let skills = find_skills_in_dir(tmp.path(), "test");
        assert_eq!(skills.len(), 2);
        assert_eq!(sorted_names(&skills), vec!["skill-a", "skill-b"]);
        assert!(skills.iter().all(|s| s.source_type == "test"));

        let a = skills.iter().find(|s| s.name == "skill-a").unwrap();
        assert_eq!(a.description, "First skill");
        assert_eq!(a.path, tmp.path().join("skill-a"));
        assert_eq!(a.skill_file, tmp.path().join("skill-a").join(SKILL_FILE_NAME));
    }

    #[test]
    fn returns_empty_for_nonexistent_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let skills = find_skills_in_dir(tmp.path().join("does-not-exist"), "test");
        assert!(skills.is_empty());
    }

    #[test]
    fn returns_empty_when_root_is_a_file() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("not-a-dir");
        fs::write(&file, "hello").unwrap();
        assert!(find_skills_in_dir(&file, "test").is_empty());
    }

    #[test]
    fn uses_directory_name_without_frontmatter() {
        let tmp = tempfile::tempdir().unwrap();
        add_skill(&tmp.path().join("my-unnamed-skill"), "# Just content\n");

        let skills = find_skills_in_dir(tmp.path(), "test");
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].name, "my-unnamed-skill");
        assert_eq!(skills[0].description, "");
    }

    #[test]
    fn skips_dirs_without_skill_md() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("not-a-skill");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("README.md"), "hello").unwrap();
        fs::write(tmp.path().join(SKILL_FILE_NAME), "---\nname: root\n---\n").unwrap();

        assert!(find_skills_in_dir(tmp.path(), "test").is_empty());
    }

    #[test]
    fn ignores_skill_md_directory() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("odd").join(SKILL_FILE_NAME)).unwrap();
        assert!(find_skills_in_dir(tmp.path(), "test").is_empty());
    }

    #[test]
    fn skill_file_name_is_case_sensitive() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("lower");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("skill.md"), "---\nname: lower\n---\n").unwrap();
        assert!(find_skills_in_dir(tmp.path(), "test").is_empty());
    }

    #[test]
    fn finds_skills_nested_inside_skills() {
        let tmp = tempfile::tempdir().unwrap();
        let outer = tmp.path().join("outer");
        add_skill(&outer, "---\nname: outer\n---\n");
        add_skill(&outer.join("inner"), "---\nname: inner\n---\n");
        add_skill(&tmp.path().join("group").join("grouped"), "---\nname: grouped\n---\n");

        let skills = find_skills_in_dir(tmp.path(), "test");
        assert_eq!(sorted_names(&skills), vec!["grouped", "inner", "outer"]);
    }

    #[test]
    fn zero_depth_lists_only_root_children() {
        let tmp = tempfile::tempdir().unwrap();
        add_skill(&tmp.path().join("top"), "---\nname: top\n---\n");
        add_skill(&tmp.path().join("top").join("child"), "---\nname: child\n---\n");

        let skills = find_skills_to_depth(tmp.path(), "test", 0);
        assert_eq!(sorted_names(&skills), vec!["top"]);
    }

    #[test]
    fn default_depth_reaches_fourth_level_only() {
        let tmp = tempfile::tempdir().unwrap();
        let level4 = tmp.path().join("l1").join("l2").join("l3").join("l4");
        add_skill(&level4, "---\nname: level-4\n---\n");
        add_skill(&level4.join("l5"), "---\nname: level-5\n---\n");

        let skills = find_skills_in_dir(tmp.path(), "test");
        assert_eq!(sorted_names(&skills), vec!["level-4"]);
    }

    #[test]
    fn unreadable_skill_file_does_not_hide_siblings() {
        let tmp = tempfile::tempdir().unwrap();
        let broken = tmp.path().join("broken");
        fs::create_dir_all(&broken).unwrap();
        fs::write(broken.join(SKILL_FILE_NAME), [0xff, 0xfe, 0x00, 0x9f]).unwrap();
        add_skill(&tmp.path().join("healthy"), "---\nname: healthy\n---\n");

        let skills = find_skills_in_dir(tmp.path(), "test");
        assert_eq!(sorted_names(&skills), vec!["broken", "healthy"]);
    }

    #[test]
    fn failing_entries_do_not_drop_the_listing() {
        let dir = Path::new("/skills");
        let entries: Vec<io::Result<(PathBuf, io::Result<bool>)>> = vec![
            Ok((dir.join("a"), Ok(true))),
            Ok((dir.join("b"), Err(io::Error::new(io::ErrorKind::NotFound, "gone")))),
            Err(io::Error::other("entry read failed")),
            Ok((dir.join("notes.md"), Ok(false))),
            Ok((dir.join("c"), Ok(true))),
        ];

        let kept = keep_dirs(dir, entries);
        assert_eq!(
            kept,
            vec![
                (dir.join("a"), "a".to_string()),
                (dir.join("c"), "c".to_string()),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn unlistable_subdirectory_does_not_hide_siblings() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let locked = tmp.path().join("locked");
        add_skill(&locked.join("inside"), "---\nname: inside\n---\n");
        add_skill(&tmp.path().join("open"), "---\nname: open\n---\n");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users can list the directory anyway.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let skills = find_skills_in_dir(tmp.path(), "test");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        assert_eq!(sorted_names(&skills), vec!["open"]);
    }

    #[cfg(unix)]
    #[test]
    fn does_not_follow_symlinked_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let real = tmp.path().join("real");
        add_skill(&real.join("linked-skill"), "---\nname: linked\n---\n");
        let root = tmp.path().join("root");
        fs::create_dir_all(&root).unwrap();
        std::os::unix::fs::symlink(&real, root.join("alias")).unwrap();

        assert!(find_skills_in_dir(&root, "test").is_empty());
    }

    #[test]
    fn repeated_scans_are_equal_after_sorting() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["alpha", "beta", "gamma"] {
            add_skill(
                &tmp.path().join(name),
                &format!("---\nname: {name}\ndescription: {name} skill\n---\n"),
            );
        }

        let sort = |mut skills: Vec<SkillRecord>| {
            skills.sort_by(|a, b| a.skill_file.cmp(&b.skill_file));
            skills
        };
        let first = sort(find_skills_in_dir(tmp.path(), "test"));
        let second = sort(find_skills_in_dir(tmp.path(), "test"));
        assert_eq!(first, second);
    }

    #[test]
    fn locator_tags_records_per_root() {
        let tmp = tempfile::tempdir().unwrap();
        let project = tmp.path().join("project");
        let personal = tmp.path().join("personal");
        add_skill(&project.join("lint"), "---\nname: lint\n---\n");
        add_skill(&personal.join("notes"), "---\nname: notes\n---\n");

        let locator = SkillLocator::new()
            .root(&project, "project")
            .root(&personal, "personal")
            .root(tmp.path().join("missing"), "registry");
        let skills = locator.locate();

        assert_eq!(skills.len(), 2);
        assert_eq!(skills[0].name, "lint");
        assert_eq!(skills[0].source_type, "project");
        assert_eq!(skills[1].name, "notes");
        assert_eq!(skills[1].source_type, "personal");
        assert_eq!(locator.roots().count(), 3);
    }

    #[test]
    fn locator_applies_depth_option() {
        let tmp = tempfile::tempdir().unwrap();
        add_skill(&tmp.path().join("a").join("b"), "---\nname: deep\n---\n");

        let shallow = SkillLocator::new()
            .root(tmp.path(), "test")
            .options(LocateOptions::with_max_depth(0));
        assert!(shallow.locate().is_empty());

        let deep = SkillLocator::new().root(tmp.path(), "test");
        assert_eq!(deep.locate().len(), 1);
    }
}
