//! Plan file builders shared by unit tests.

use std::io::Write;
use std::path::{Path, PathBuf};

use prost::Message;

use super::proto::{Plan, ResourceInstanceChange};

/// Builds a version 3 plan from raw action values.
pub fn plan_with(changes: &[i32], drift: &[i32]) -> Plan {
    let to_changes = |actions: &[i32], prefix: &str| {
        actions
            .iter()
            .enumerate()
            .map(|(i, action)| ResourceInstanceChange::new(format!("{prefix}.r{i}"), *action))
            .collect::<Vec<_>>()
    };

    Plan {
        version: 3,
        resource_changes: to_changes(changes, "aws_instance"),
        terraform_version: String::from("1.9.5"),
        resource_drift: to_changes(drift, "aws_security_group"),
        errored: false,
        deferred_changes: vec![],
    }
}

/// Writes a zip archive with a single entry and returns its path.
pub fn write_zip(dir: &Path, file_name: &str, entry: &str, contents: &[u8]) -> PathBuf {
    std::fs::create_dir_all(dir).expect("Failed to create fixture dir");
    let path = dir.join(file_name);
    let file = std::fs::File::create(&path).expect("Failed to create zip");

    let mut zip = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();
    zip.start_file(entry, options).expect("Failed to start entry");
    zip.write_all(contents).expect("Failed to write entry");
    zip.finish().expect("Failed to finish zip");

    path
}

/// Writes a plan file the way the plan tool lays it out.
pub fn write_plan_file(dir: &Path, file_name: &str, plan: &Plan) -> PathBuf {
    write_zip(dir, file_name, super::PLAN_ENTRY_NAME, &plan.encode_to_vec())
}
