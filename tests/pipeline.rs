use std::cell::RefCell;
use std::fs;
use std::path::Path;

use forge_gen::generate;
use forge_gen::model::{BytecodePair, Layout, RenderContext};
use forge_gen::toolchain::{ToolError, Toolchain};
use forge_gen::writer::Sink;
use forge_gen::writer::registry::render;

const SUAVE_SOL: &str = r#"
library Suave {
    address public constant ANYALLOWED = 0xC8df3686b4Afb2BB53e60EAe97EF043FE03Fb829;
    address public constant IS_CONFIDENTIAL_ADDR = 0x0000000000000000000000000000000042010000;
    address public constant CONFIDENTIAL_INPUTS = 0x0000000000000000000000000000000042010001;
    address public constant FETCH_DATA_RECORDS = 0x0000000000000000000000000000000042030001;
}
"#;

/// Stands in for forge: `build` drops the two artifacts, `fmt` tags stdin.
struct FakeForge {
    layout: Layout,
    calls: RefCell<Vec<String>>,
    fail_build: bool,
}

impl FakeForge {
    fn new(layout: &Layout) -> Self {
        Self {
            layout: layout.clone(),
            calls: RefCell::new(Vec::new()),
            fail_build: false,
        }
    }
}

impl Toolchain for FakeForge {
    fn run(&self, args: &[&str], stdin: Option<&str>) -> Result<String, ToolError> {
        self.calls.borrow_mut().push(args.join(" "));
        match args.first().copied() {
            Some("build") => {
                // the sources must have been mirrored before forge runs
                for (_, to) in self.layout.mirrored_sources() {
                    assert!(to.exists(), "{} not mirrored", to.display());
                }
                if self.fail_build {
                    return Err(ToolError::NotFound {
                        name: "forge".into(),
                    });
                }
                write(
                    &self.layout.connector_artifact(),
                    r#"{"deployedBytecode":{"object":"0xc0ffee"}}"#,
                );
                write(
                    &self.layout.confidential_artifact(),
                    r#"{"deployedBytecode":{"object":"0xdecaf0"}}"#,
                );
                Ok("Compiler run successful!".into())
            }
            Some("fmt") => Ok(format!("// formatted\n{}", stdin.unwrap_or_default())),
            other => panic!("unexpected forge subcommand {other:?}"),
        }
    }
}

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn checkout() -> (tempfile::TempDir, Layout) {
    let dir = tempfile::tempdir().unwrap();
    let layout = Layout::new(dir.path());
    for (from, _) in layout.mirrored_sources() {
        write(&from, "contract X {}");
    }
    write(&layout.suave_lib(), SUAVE_SOL);
    (dir, layout)
}

#[test]
fn apply_writes_formatted_registry() {
    let (_dir, layout) = checkout();
    let forge = FakeForge::new(&layout);
    let out = layout.registry_out();

    generate(&layout, &forge, true, &Sink::File(out.clone())).unwrap();

    let bytecodes = BytecodePair {
        connector: "c0ffee".into(),
        confidential: "decaf0".into(),
    };
    let names = vec![
        "IS_CONFIDENTIAL_ADDR".to_string(),
        "FETCH_DATA_RECORDS".to_string(),
    ];
    let rendered = render(&RenderContext::new(&bytecodes, &names)).unwrap();

    let registry = fs::read_to_string(&out).unwrap();
    assert_eq!(registry, format!("// formatted\n{rendered}"));
    assert!(registry.contains("hex\"c0ffee\""));
    assert!(registry.contains("hex\"decaf0\""));

    let first = registry.find("enableLib(Suave.IS_CONFIDENTIAL_ADDR);").unwrap();
    let second = registry.find("enableLib(Suave.FETCH_DATA_RECORDS);").unwrap();
    assert!(first < second);
    assert!(!registry.contains("Suave.ANYALLOWED"));
    assert!(!registry.contains("enableLib(Suave.CONFIDENTIAL_INPUTS)"));

    let calls = forge.calls.borrow();
    assert_eq!(calls.len(), 2);
    assert_eq!(
        calls[0],
        format!("build --config-path {}", layout.foundry_config().display())
    );
    assert_eq!(calls[1], "fmt --raw -");
}

#[test]
fn stdout_sink_leaves_destination_alone() {
    let (_dir, layout) = checkout();
    let forge = FakeForge::new(&layout);

    generate(&layout, &forge, true, &Sink::Stdout).unwrap();

    assert!(!layout.registry_out().exists());
}

#[test]
fn no_fmt_skips_formatter() {
    let (_dir, layout) = checkout();
    let forge = FakeForge::new(&layout);
    let out = layout.registry_out();

    generate(&layout, &forge, false, &Sink::File(out.clone())).unwrap();

    let registry = fs::read_to_string(&out).unwrap();
    assert!(registry.starts_with("// SPDX-License-Identifier: UNLICENSED"));
    assert_eq!(forge.calls.borrow().len(), 1);
}

#[test]
fn build_failure_aborts_before_reading_artifacts() {
    let (_dir, layout) = checkout();
    let mut forge = FakeForge::new(&layout);
    forge.fail_build = true;
    let out = layout.registry_out();

    let err = generate(&layout, &forge, true, &Sink::File(out.clone())).unwrap_err();

    let msg = format!("{err:#}");
    assert!(msg.contains("not found in PATH"), "{msg}");
    assert!(!layout.connector_artifact().exists());
    assert!(!out.exists());
    assert_eq!(forge.calls.borrow().len(), 1);
}

#[test]
fn missing_suave_lib_writes_nothing() {
    let (_dir, layout) = checkout();
    fs::remove_file(layout.suave_lib()).unwrap();
    let forge = FakeForge::new(&layout);
    let out = layout.registry_out();

    let err = generate(&layout, &forge, true, &Sink::File(out.clone())).unwrap_err();

    assert!(format!("{err:#}").contains("Suave.sol"));
    assert!(!out.exists());
}
