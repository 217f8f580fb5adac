use crate::platform::OverrideKey;

/// Per-platform instruction attached to a manifest entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Override {
    /// No key for this platform: use the entry's default name
    #[default]
    Inherit,
    /// Explicit `null`: the package is unavailable on this platform
    Skip,
    /// A string: install under a different name
    Rename(String),
}

/// Overrides for every platform key the manifest knows about
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub macos: Override,
    pub linux: Override,
}

impl Overrides {
    pub fn get(&self, key: OverrideKey) -> &Override {
        match key {
            OverrideKey::Macos => &self.macos,
            OverrideKey::Linux => &self.linux,
        }
    }
}

/// One record of the package manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageEntry {
    pub name: String,
    pub description: String,
    /// GUI application (cask / flatpak) rather than a CLI package
    pub gui: bool,
    /// Work-only package, excluded unless the filter opts in
    pub work: bool,
    pub overrides: Overrides,
}

#[cfg(test)]
impl PackageEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            gui: false,
            work: false,
            overrides: Overrides::default(),
        }
    }

    pub fn gui(mut self, gui: bool) -> Self {
        self.gui = gui;
        self
    }

    pub fn work(mut self, work: bool) -> Self {
        self.work = work;
        self
    }

    pub fn with_override(mut self, key: OverrideKey, value: Override) -> Self {
        match key {
            OverrideKey::Macos => self.overrides.macos = value,
            OverrideKey::Linux => self.overrides.linux = value,
        }
        self
    }
}

/// Visibility filter applied before resolution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Filter {
    pub include_work: bool,
}

impl Filter {
    pub fn new(include_work: bool) -> Self {
        Self { include_work }
    }

    pub fn includes(&self, entry: &PackageEntry) -> bool {
        !entry.work || self.include_work
    }
}

/// Entries passing the filter, in manifest order
pub fn query<'a>(entries: &'a [PackageEntry], filter: Filter) -> Vec<&'a PackageEntry> {
    entries.iter().filter(|e| filter.includes(e)).collect()
}

/// All entries with the given name. Names are not unique.
pub fn find<'a>(entries: &'a [PackageEntry], name: &str) -> Vec<&'a PackageEntry> {
    entries.iter().filter(|e| e.name == name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<PackageEntry> {
        vec![
            PackageEntry::new("git"),
            PackageEntry::new("slack").gui(true).work(true),
            PackageEntry::new("awscli").work(true),
            PackageEntry::new("firefox").gui(true),
        ]
    }

    #[test]
    fn test_query_excludes_work_by_default() {
        let entries = sample();
        let names: Vec<_> = query(&entries, Filter::default())
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["git", "firefox"]);
    }

    #[test]
    fn test_query_includes_work_when_requested() {
        let entries = sample();
        let names: Vec<_> = query(&entries, Filter::new(true))
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["git", "slack", "awscli", "firefox"]);
    }

    #[test]
    fn test_filter_semantics_for_every_entry() {
        for entry in sample() {
            for include_work in [false, true] {
                let included = Filter::new(include_work).includes(&entry);
                if entry.work {
                    assert_eq!(included, include_work, "{}", entry.name);
                } else {
                    assert!(included, "{}", entry.name);
                }
            }
        }
    }

    #[test]
    fn test_find_returns_duplicates() {
        let entries = vec![
            PackageEntry::new("alacritty").gui(true),
            PackageEntry::new("git"),
            PackageEntry::new("alacritty")
                .gui(true)
                .with_override(OverrideKey::Linux, Override::Skip),
        ];
        let found = find(&entries, "alacritty");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].overrides.linux, Override::Inherit);
        assert_eq!(found[1].overrides.linux, Override::Skip);
        assert!(find(&entries, "missing").is_empty());
    }
}
