use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use pupm_constants::MANIFEST_FILENAME;
use pupm_error::{ModuleManagerError, Result};
use pupm_utils::absolute_path;

use crate::parse::{Line, classify};

/// Attribute name → value pairs of one module entry, in discovery order.
/// There is no fixed schema; whatever the manifest declares is retained.
pub type ModuleRecord = IndexMap<String, String>;

/// In-memory Puppetfile: module name → attribute record, bound to the
/// manifest path of one module repository.
///
/// Loading merges into the current content (repeated loads accumulate
/// modules and overwrite duplicate attribute keys); saving regenerates the
/// whole file with module names and attribute keys sorted.
#[derive(Debug, Clone)]
pub struct Puppetfile {
    path: PathBuf,
    modules: IndexMap<String, ModuleRecord>,
}

impl Puppetfile {
    /// Creates an empty store bound to `<abs(repo_dir)>/Puppetfile`.
    #[must_use]
    pub fn new(repo_dir: &Path) -> Self {
        Self {
            path: absolute_path(repo_dir).join(MANIFEST_FILENAME),
            modules: IndexMap::new(),
        }
    }

    /// The manifest path this store loads from and saves to by default.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, name: &str) -> Result<&ModuleRecord> {
        self.modules
            .get(name)
            .ok_or_else(|| ModuleManagerError::ModuleNotFound(name.to_string()))
    }

    pub fn set(&mut self, name: &str, record: ModuleRecord) {
        self.modules.insert(name.to_string(), record);
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    /// Module names in insertion order; each call yields a fresh iterator
    /// over the current state.
    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.modules.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &ModuleRecord> {
        self.modules.values()
    }

    pub fn items(&self) -> impl Iterator<Item = (&String, &ModuleRecord)> {
        self.modules.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Parses the bound manifest file into the store.
    pub fn load(&mut self) -> Result<()> {
        let path = self.path.clone();
        self.load_from(&path)
    }

    /// Parses an explicit manifest file into the store.
    pub fn load_from(&mut self, source: &Path) -> Result<()> {
        let content = fs::read_to_string(source).map_err(|err| {
            ModuleManagerError::ManifestRead(source.to_string_lossy().into_owned(), err.to_string())
        })?;
        self.parse_str(&content)
    }

    /// Merges manifest text into the store without clearing prior content.
    ///
    /// A single pass over the lines: headers switch the current module,
    /// attributes land in the current module's record (created lazily on
    /// the first attribute), everything else is skipped. An attribute seen
    /// before any header fails with the orphan-attribute error.
    pub fn parse_str(&mut self, content: &str) -> Result<()> {
        let mut current: Option<String> = None;
        for (idx, raw) in content.lines().enumerate() {
            match classify(raw) {
                Line::Header(name) => current = Some(name),
                Line::Attribute(key, value) => match &current {
                    Some(module) => {
                        let record = self.modules.entry(module.clone()).or_default();
                        record.insert(key, value);
                    }
                    None => {
                        return Err(ModuleManagerError::OrphanAttribute(idx + 1, key));
                    }
                },
                Line::Ignored => {}
            }
        }
        Ok(())
    }

    /// Writes the rendered manifest to the bound path, replacing the file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&self.path)
    }

    /// Writes the rendered manifest to an explicit path, replacing the file.
    pub fn save_to(&self, destination: &Path) -> Result<()> {
        fs::write(destination, self.render()).map_err(|err| {
            ModuleManagerError::ManifestWrite(
                destination.to_string_lossy().into_owned(),
                err.to_string(),
            )
        })
    }

    /// The serialized manifest text.
    ///
    /// Modules and attribute keys come out lexicographically sorted so the
    /// file is stable under re-save regardless of insertion order. Values
    /// are always single-quoted. The last attribute of a module carries no
    /// trailing comma and is followed by a blank separator line; a module
    /// without attributes is just its header line.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();

        let mut entries: Vec<(&String, &ModuleRecord)> = self.modules.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        for (name, record) in entries {
            out.push_str(&format!("mod '{name}',\n"));

            let mut attrs: Vec<(&String, &String)> = record.iter().collect();
            attrs.sort_by(|a, b| a.0.cmp(b.0));

            let count = attrs.len();
            for (pos, (key, value)) in attrs.into_iter().enumerate() {
                out.push_str(&format!("  :{key} => '{value}'"));
                out.push_str(if pos + 1 == count { "\n\n" } else { ",\n" });
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> ModuleRecord {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_new_store_is_empty_and_bound() {
        let store = Puppetfile::new(Path::new("deploy/modules"));
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.path().is_absolute());
        assert!(store.path().ends_with("deploy/modules/Puppetfile"));
    }

    #[test]
    fn test_round_trip_preserves_sorted_content() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Puppetfile::new(dir.path());
        store.set("alpha", record(&[("git", "https://host/alpha.git"), ("ref", "1.0.0")]));
        store.set("beta", record(&[("owner", "ops")]));
        store.save().unwrap();

        let mut reloaded = Puppetfile::new(dir.path());
        reloaded.load().unwrap();

        assert_eq!(reloaded.len(), 2);
        assert_eq!(
            reloaded.get("alpha").unwrap(),
            &record(&[("git", "https://host/alpha.git"), ("ref", "1.0.0")])
        );
        assert_eq!(reloaded.get("beta").unwrap(), &record(&[("owner", "ops")]));
    }

    #[test]
    fn test_render_sorts_modules_and_attribute_keys() {
        let mut store = Puppetfile::new(Path::new("."));
        store.set("zeta", record(&[("z", "1"), ("a", "2")]));
        store.set("alpha", record(&[("z", "1"), ("a", "2")]));

        let expected = "\
mod 'alpha',
  :a => '2',
  :z => '1'

mod 'zeta',
  :a => '2',
  :z => '1'

";
        assert_eq!(store.render(), expected);
    }

    #[test]
    fn test_zero_attribute_module_renders_header_only() {
        let mut store = Puppetfile::new(Path::new("."));
        store.set("bare", ModuleRecord::new());
        assert_eq!(store.render(), "mod 'bare',\n");
    }

    #[test]
    fn test_last_attribute_drops_comma_and_adds_separator() {
        let mut store = Puppetfile::new(Path::new("."));
        store.set("m", record(&[("a", "1"), ("b", "2")]));
        assert_eq!(store.render(), "mod 'm',\n  :a => '1',\n  :b => '2'\n\n");
    }

    #[test]
    fn test_ignored_lines_keep_module_context() {
        let mut store = Puppetfile::new(Path::new("."));
        store
            .parse_str("mod 'apache',\n# vendored\n\n  :ref => '2.1.0'\n")
            .unwrap();
        assert_eq!(store.get("apache").unwrap(), &record(&[("ref", "2.1.0")]));
    }

    #[test]
    fn test_missing_module_lookup_fails() {
        let store = Puppetfile::new(Path::new("."));
        assert!(!store.contains("ghost"));
        let err = store.get("ghost").unwrap_err();
        assert!(matches!(err, ModuleManagerError::ModuleNotFound(name) if name == "ghost"));
    }

    #[test]
    fn test_save_twice_produces_identical_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Puppetfile::new(dir.path());
        store.set("stdlib", record(&[("git", "https://host/stdlib.git")]));

        store.save().unwrap();
        let first = fs::read(store.path()).unwrap();
        store.save().unwrap();
        let second = fs::read(store.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_orphan_attribute_fails_with_line_number() {
        let mut store = Puppetfile::new(Path::new("."));
        let err = store
            .parse_str("# preamble\n  :git => 'https://host/x.git'\n")
            .unwrap_err();
        assert!(matches!(err, ModuleManagerError::OrphanAttribute(2, key) if key == "git"));
    }

    #[test]
    fn test_double_quoted_input_normalized_to_single_quotes() {
        let mut store = Puppetfile::new(Path::new("."));
        store
            .parse_str("mod \"nginx\",\n  :ref => \"1.2.3\"\n")
            .unwrap();
        assert_eq!(store.render(), "mod 'nginx',\n  :ref => '1.2.3'\n\n");
    }

    #[test]
    fn test_repeated_load_merges_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a");
        let second = dir.path().join("b");
        fs::write(&first, "mod 'alpha',\n  :ref => '1.0'\n").unwrap();
        fs::write(&second, "mod 'beta',\n  :ref => '9.9'\n\nmod 'alpha',\n  :ref => '2.0'\n").unwrap();

        let mut store = Puppetfile::new(dir.path());
        store.load_from(&first).unwrap();
        store.load_from(&second).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("alpha").unwrap(), &record(&[("ref", "2.0")]));
        assert_eq!(store.get("beta").unwrap(), &record(&[("ref", "9.9")]));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Puppetfile::new(dir.path());
        let err = store.load().unwrap_err();
        assert!(matches!(err, ModuleManagerError::ManifestRead(..)));
    }

    #[test]
    fn test_save_into_missing_directory_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Puppetfile::new(dir.path());
        store.set("stdlib", record(&[("ref", "1.0")]));

        let destination = dir.path().join("no_such_dir").join("Puppetfile");
        let err = store.save_to(&destination).unwrap_err();
        assert!(
            matches!(err, ModuleManagerError::ManifestWrite(path, _) if path.contains("no_such_dir"))
        );
    }

    #[test]
    fn test_header_alone_creates_no_entry() {
        let mut store = Puppetfile::new(Path::new("."));
        store.parse_str("mod 'declared_but_empty',\n").unwrap();
        assert!(store.is_empty());
        assert!(!store.contains("declared_but_empty"));
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut store = Puppetfile::new(Path::new("."));
        store.set("c", ModuleRecord::new());
        store.set("a", ModuleRecord::new());
        store.set("b", ModuleRecord::new());

        let names: Vec<&str> = store.modules().collect();
        assert_eq!(names, vec!["c", "a", "b"]);

        // Views reflect live state and stay in insertion order.
        let keys: Vec<&String> = store.keys().collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
        assert_eq!(store.values().count(), 3);
        assert_eq!(store.items().count(), 3);
    }

    #[test]
    fn test_set_replaces_whole_record() {
        let mut store = Puppetfile::new(Path::new("."));
        store.set("apache", record(&[("ref", "1.0"), ("owner", "ops")]));
        store.set("apache", record(&[("ref", "2.0")]));
        assert_eq!(store.get("apache").unwrap(), &record(&[("ref", "2.0")]));
    }
}
