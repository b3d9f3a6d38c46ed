//!
//! The skip-policy registry.
//!

pub mod lists;
pub mod selection;

/// The fork whose rules the current fixture generation targets.
///
/// Fork-sensitive suites tag test names with the fork they exercise; tests
/// tagged for any other fork are excluded regardless of the skip lists.
pub const FORK_CONFIG: &str = "Byzantium";

///
/// The reason grouping under which a test-name prefix is skipped.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestCategory {
    /// Tests which should be fixed.
    Broken,
    /// Tests excluded by design.
    Permanent,
    /// Tests running slow.
    Slow,
    /// Tests excluded for the VM suite only.
    VmSpecific,
}

impl TestCategory {
    ///
    /// The keyword selecting this category on the command line.
    ///
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Broken => "broken",
            Self::Permanent => "permanent",
            Self::Slow => "slow",
            Self::VmSpecific => "vm",
        }
    }
}

///
/// The named skip lists, loaded once at startup and read-only afterwards.
///
#[derive(Debug, Clone)]
pub struct SkipRegistry {
    /// The `broken` category prefixes.
    broken: Vec<String>,
    /// The `permanent` category prefixes.
    permanent: Vec<String>,
    /// The `slow` category prefixes.
    slow: Vec<String>,
    /// The VM-suite-only prefixes.
    vm_specific: Vec<String>,
}

impl SkipRegistry {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        broken: Vec<String>,
        permanent: Vec<String>,
        slow: Vec<String>,
        vm_specific: Vec<String>,
    ) -> Self {
        Self {
            broken,
            permanent,
            slow,
            vm_specific,
        }
    }

    ///
    /// Returns the prefix list of the specified category.
    ///
    pub fn prefixes(&self, category: TestCategory) -> &[String] {
        match category {
            TestCategory::Broken => self.broken.as_slice(),
            TestCategory::Permanent => self.permanent.as_slice(),
            TestCategory::Slow => self.slow.as_slice(),
            TestCategory::VmSpecific => self.vm_specific.as_slice(),
        }
    }
}

impl Default for SkipRegistry {
    fn default() -> Self {
        let owned = |list: &[&str]| list.iter().map(|entry| (*entry).to_owned()).collect();

        Self::new(
            owned(lists::BROKEN),
            owned(lists::PERMANENT),
            owned(lists::SLOW),
            owned(lists::VM_SPECIFIC),
        )
    }
}
