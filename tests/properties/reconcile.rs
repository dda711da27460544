//! Property tests for merging compiler output and pass-through files.

use std::fs;
use std::path::{Path, PathBuf};

use proptest::prelude::*;
use tempfile::TempDir;

use javacc_build::{
    CompileOptions, CompileUseCase, GrammarFamily, JavaInvocation, NoopEventSink, ProcessError,
    ProcessOutput, ProcessRunner,
};

/// Writes `<stem>.java` into the `-OUTPUT_DIRECTORY=` hint
struct StubCompiler;

impl ProcessRunner for StubCompiler {
    fn run(&self, invocation: &JavaInvocation) -> Result<ProcessOutput, ProcessError> {
        let out_dir = invocation
            .args
            .iter()
            .find_map(|a| a.strip_prefix("-OUTPUT_DIRECTORY="))
            .map(PathBuf::from)
            .ok_or(ProcessError::EmptyClasspath)?;
        let input = invocation.args.last().map(PathBuf::from).unwrap_or_default();
        let stem = input.file_stem().unwrap_or_default().to_string_lossy().to_string();
        fs::write(out_dir.join(format!("{}.java", stem)), format!("class {}", stem))?;
        Ok(ProcessOutput::success())
    }
}

fn relative_path(extension: &'static str) -> impl Strategy<Value = PathBuf> {
    (
        proptest::collection::vec(proptest::string::string_regex("[a-z]{1,6}").unwrap(), 0..3),
        proptest::string::string_regex("[A-Za-z][A-Za-z0-9]{0,8}").unwrap(),
    )
        .prop_map(move |(dirs, stem)| {
            let mut path: PathBuf = dirs.iter().collect();
            path.push(format!("{}{}", stem, extension));
            path
        })
}

fn write(root: &Path, relative: &Path, content: &[u8]) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Pass-through files land at the mirrored path byte for byte,
    /// every grammar yields its artifact and no grammar is copied.
    #[test]
    fn property_output_mirrors_input(
        others in proptest::collection::btree_map(
            relative_path(".txt"),
            proptest::collection::vec(any::<u8>(), 0..64),
            0..6,
        ),
        grammars in proptest::collection::btree_set(relative_path(".jj"), 0..4),
    ) {
        let project = TempDir::new().unwrap();
        let options = CompileOptions::for_family(GrammarFamily::JavaCC, project.path());

        for (relative, content) in &others {
            write(&options.input_dir, relative, content);
        }
        for relative in &grammars {
            write(&options.input_dir, relative, b"PARSER_BEGIN(X) PARSER_END(X)");
        }

        let outcome = CompileUseCase::new(StubCompiler, NoopEventSink)
            .execute(&options)
            .unwrap();

        prop_assert_eq!(outcome.compiled.len(), grammars.len());
        for (relative, content) in &others {
            prop_assert_eq!(&fs::read(options.output_dir.join(relative)).unwrap(), content);
        }
        for relative in &grammars {
            prop_assert!(!options.output_dir.join(relative).exists());
            prop_assert!(options.output_dir.join(relative.with_extension("java")).is_file());
        }
        prop_assert!(!options.temp_dir.exists());
    }
}
