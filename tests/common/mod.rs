//! Shared helpers for plum integration tests

#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;
use zip::write::{FileOptions, ZipWriter};

/// Host tool version accepted by the precondition check
pub const HOST_VERSION: &str = "3.9.6";

/// A temporary project directory with manifest and local-repository helpers
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root, creating parent directories
    pub fn write_file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    /// Write the default `plum.yaml` manifest
    pub fn write_manifest(&self, contents: &str) -> PathBuf {
        self.write_file("plum.yaml", contents)
    }

    /// Local repository root inside the project directory
    pub fn local_repo(&self) -> PathBuf {
        self.dir.path().join("m2")
    }

    /// Place a jar for the coordinate into the local repository, each class
    /// entry declaring one of the given class-file major versions.
    pub fn write_cached_jar(&self, group: &str, artifact: &str, version: &str, majors: &[u16]) {
        let mut path = self.local_repo();
        for segment in group.split('.') {
            path.push(segment);
        }
        path.push(artifact);
        path.push(version);
        fs::create_dir_all(&path).unwrap();
        path.push(format!("{artifact}-{version}.jar"));

        let file = File::create(&path).unwrap();
        let mut jar = ZipWriter::new(file);
        for (index, major) in majors.iter().enumerate() {
            jar.start_file::<_, ()>(format!("Class{index}.class"), FileOptions::default())
                .unwrap();
            let mut bytes = vec![0xCA, 0xFE, 0xBA, 0xBE, 0x00, 0x00];
            bytes.extend_from_slice(&major.to_be_bytes());
            jar.write_all(&bytes).unwrap();
        }
        jar.finish().unwrap();
    }

    /// A fake host tool script that records its arguments, one invocation per
    /// line, into `log` inside the project directory. Unix only.
    #[cfg(unix)]
    pub fn write_fake_host_tool(&self, name: &str, log: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let log_path = self.dir.path().join(log);
        let script = self.write_file(
            name,
            &format!("#!/bin/sh\necho \"$@\" >> \"{}\"\n", log_path.display()),
        );
        let mut permissions = fs::metadata(&script).unwrap().permissions();
        permissions.set_mode(0o755);
        fs::set_permissions(&script, permissions).unwrap();
        script
    }
}

/// plum command with a hygienic environment
pub fn plum_cmd() -> Command {
    let mut cmd = Command::cargo_bin("plum").unwrap();
    // Ignore any developer overrides during tests
    cmd.env_remove("PLUM_MANIFEST");
    cmd.env_remove("PLUM_HOST_VERSION");
    cmd.env_remove("PLUM_HOST_TOOL");
    cmd.env_remove("PLUM_LOCAL_REPO");
    cmd
}
