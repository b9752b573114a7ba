//! Version resolution and the shrinking run.

use std::path::{Path, PathBuf};

use super::version::{VersionIdentifier, VersionProbe, parse_version_output};
use super::{BuiltLibrary, LibraryRequest, MAX_HEAP, R8_MAIN, SOURCE_FILE_TEMPLATE};
use crate::error::Result;
use crate::jdk::{Executable, JdkGeneration, JdkLocator};
use crate::process::{Invocation, OutputMode, ProcessRunner};
use crate::source::CommitSource;

/// Builds r8lib jars.
///
/// The JDK 11 `java` is resolved once at construction and used for both the
/// version probe and the shrinking run.
///
/// # Examples
///
/// ```no_run
/// use r8lib_builder::jdk::JdkLocator;
/// use r8lib_builder::process::SystemRunner;
/// use r8lib_builder::r8lib::{LibraryRequest, R8LibBuilder, DEFAULT_R8_WITH_DEPS};
/// use r8lib_builder::source::GitCheckout;
///
/// # async fn example() -> r8lib_builder::Result<()> {
/// let builder = R8LibBuilder::new(
///     &JdkLocator::new("third_party"),
///     DEFAULT_R8_WITH_DEPS,
///     SystemRunner,
///     GitCheckout::new("."),
/// );
/// let request = LibraryRequest::new("build/libs/r8.jar", "build/libs/r8lib.jar")
///     .pg_conf("src/main/keep.txt");
/// let built = builder.build(&request).await?;
/// println!("{} -> {}", built.version, built.jar.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct R8LibBuilder<R, C> {
    java: Executable,
    runtime_library: PathBuf,
    r8_with_deps: PathBuf,
    runner: R,
    commits: C,
}

impl<R: ProcessRunner, C: CommitSource> R8LibBuilder<R, C> {
    pub fn new(
        locator: &JdkLocator,
        r8_with_deps: impl Into<PathBuf>,
        runner: R,
        commits: C,
    ) -> Self {
        let home = locator.resolve_home(JdkGeneration::Jdk11).ok();
        let java = locator.java_executable(home.as_ref());
        log::debug!("Using java: {}", java);

        Self {
            java,
            runtime_library: locator.runtime_library(),
            r8_with_deps: r8_with_deps.into(),
            runner,
            commits,
        }
    }

    pub fn java(&self) -> &Executable {
        &self.java
    }

    /// `java -ea -cp <r8jar> com.android.tools.r8.R8 --version`
    pub fn version_probe(&self, r8jar: &Path) -> Invocation {
        Invocation::new(self.java.program())
            .args(["-ea", "-cp"])
            .path(r8jar)
            .arg(R8_MAIN)
            .arg("--version")
    }

    /// Build identity of `r8jar`.
    ///
    /// Engineering builds report no version, so the checkout's HEAD commit is
    /// used instead.
    pub async fn get_version(&self, r8jar: &Path) -> Result<VersionIdentifier> {
        let probe = self.version_probe(r8jar);
        let output = self
            .runner
            .execute(&probe, OutputMode::Capture)
            .await?
            .check(&probe)?;

        let version = match parse_version_output(&output.stdout)? {
            VersionProbe::Engineering => {
                let commit = self.commits.head_commit()?;
                log::info!("Engineering build of R8, using commit {}", commit.trim());
                VersionIdentifier::new(commit.trim())
            }
            VersionProbe::Release(version) => VersionIdentifier::new(version),
        };
        Ok(version)
    }

    /// The R8 command that turns `request.r8jar` into r8lib.
    ///
    /// The bundled rt.jar always comes first among the `--lib` flags; keep
    /// configurations and extra libraries follow in caller order.
    pub fn shrink_invocation(
        &self,
        request: &LibraryRequest,
        version: &VersionIdentifier,
    ) -> Invocation {
        // TODO: try lowering the heap below 8g once r8lib builds have been profiled.
        Invocation::new(self.java.program())
            .args([MAX_HEAP, "-ea"])
            .arg("-cp")
            .path(&self.r8_with_deps)
            .arg(R8_MAIN)
            .path(&request.r8jar)
            .arg("--classfile")
            .flag("--map-id-template", version.as_str())
            .flag("--source-file-template", SOURCE_FILE_TEMPLATE)
            .arg("--output")
            .path(&request.output)
            .arg("--pg-map-output")
            .path(&request.map_output())
            .arg("--lib")
            .path(&self.runtime_library)
            .repeated("--pg-conf", &request.pg_confs)
            .repeated("--lib", &request.libs)
    }

    /// Runs `invocation` with inherited output. Non-zero exit is an error.
    ///
    /// A failed run may leave a partial output jar behind; it is not removed.
    pub async fn execute(&self, invocation: &Invocation) -> Result<()> {
        self.runner
            .execute(invocation, OutputMode::Inherit)
            .await?
            .check(invocation)?;
        Ok(())
    }

    /// Resolves the version, then shrinks.
    pub async fn build(&self, request: &LibraryRequest) -> Result<BuiltLibrary> {
        let version = self.get_version(&request.r8jar).await?;
        log::info!("Building r8lib for R8 {}", version);

        let invocation = self.shrink_invocation(request, &version);
        println!("{}", invocation);
        self.execute(&invocation).await?;

        log::info!("Wrote {}", request.output.display());
        Ok(BuiltLibrary {
            version,
            jar: request.output.clone(),
            map: request.map_output(),
        })
    }
}
