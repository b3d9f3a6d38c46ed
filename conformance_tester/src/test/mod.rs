//!
//! The dispatched test case.
//!

///
/// The unit of dispatch: one named test extracted from a fixture file.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// The fixture file identifier: the file's base name, extension stripped.
    pub file: String,
    /// The test name: the entry's top-level key inside the fixture.
    pub name: String,
    /// The suite-specific test data, opaque to the harness.
    pub data: serde_json::Value,
}

impl TestCase {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(file: String, name: String, data: serde_json::Value) -> Self {
        Self { file, name, data }
    }

    ///
    /// The reporting identifier of the test case.
    ///
    pub fn full_name(&self) -> String {
        format!("{}::{}", self.file, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::TestCase;

    #[test]
    fn full_name_joins_file_and_test() {
        let test = TestCase::new(
            "add11".to_owned(),
            "add11_d0g0v0".to_owned(),
            serde_json::Value::Null,
        );

        assert_eq!(test.full_name(), "add11::add11_d0g0v0");
    }
}
