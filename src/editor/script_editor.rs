//! Editor integration driven by the persisted command template.

use super::{EditorInstallation, ExternalCodeEditor};
use crate::context::ProjectContext;
use crate::error::Result;
use crate::launch::{Launched, ResolvedCommand, launch};
use crate::settings::Settings;

/// Display name of the installation.
pub const EDITOR_NAME: &str = "Language Server Script Editor";

/// Fixed identifier, used when the executable path is unavailable and
/// always accepted as a selected path.
pub const EDITOR_PATH: &str = "lsedit";

/// Opens files by resolving the project's command template and launching
/// the result.
#[derive(Debug, Clone)]
pub struct ScriptEditor {
    ctx: ProjectContext,
    installation_path: String,
}

impl ScriptEditor {
    pub fn new(ctx: ProjectContext) -> Self {
        Self::with_installation_path(ctx, default_installation_path())
    }

    pub fn with_installation_path(ctx: ProjectContext, installation_path: String) -> Self {
        Self {
            ctx,
            installation_path,
        }
    }

    pub fn context(&self) -> &ProjectContext {
        &self.ctx
    }

    pub fn installation_path(&self) -> &str {
        &self.installation_path
    }

    /// Whether the host's stored editor path refers to this editor.
    pub fn is_selected_path(&self, editor_path: &str) -> bool {
        !editor_path.is_empty()
            && (editor_path == self.installation_path || editor_path == EDITOR_PATH)
    }

    fn installation(&self) -> EditorInstallation {
        EditorInstallation {
            name: EDITOR_NAME.to_string(),
            path: self.installation_path.clone(),
        }
    }

    /// Load settings and return the effective template.
    pub fn command_template(&self) -> Result<String> {
        let settings = Settings::load(self.ctx.settings_path())?;
        Ok(settings.command_template().to_string())
    }

    /// Resolve a command for `path` at `line`:`column`.
    ///
    /// `template` overrides the stored template when given.
    pub fn resolve(
        &self,
        template: Option<&str>,
        path: &str,
        line: i64,
        column: i64,
    ) -> Result<ResolvedCommand> {
        let template = match template {
            Some(template) => template.to_string(),
            None => self.command_template()?,
        };

        let cmd = self
            .ctx
            .command_resolver()
            .resolve(&template, path, line, column)?;
        tracing::debug!(
            executable = %cmd.executable,
            arguments = ?cmd.arguments,
            "resolved editor command"
        );
        Ok(cmd)
    }

    /// Resolve and launch. Nothing is spawned unless resolution succeeds.
    ///
    /// Failures are logged before being returned: resolution failures at
    /// warn level, launch failures at error level.
    pub fn open(
        &self,
        template: Option<&str>,
        path: &str,
        line: i64,
        column: i64,
    ) -> Result<Launched> {
        let cmd = self
            .resolve(template, path, line, column)
            .inspect_err(|e| tracing::warn!("{}", e))?;
        let launched = launch(&cmd).inspect_err(|e| tracing::error!("{}", e))?;
        tracing::debug!(pid = launched.pid, "editor started");
        Ok(launched)
    }
}

impl ExternalCodeEditor for ScriptEditor {
    fn installations(&self) -> Vec<EditorInstallation> {
        vec![self.installation()]
    }

    fn try_get_installation_for_path(&self, editor_path: &str) -> Option<EditorInstallation> {
        self.is_selected_path(editor_path)
            .then(|| self.installation())
    }

    fn open_project(&self, path: &str, line: i64, column: i64) -> bool {
        self.open(None, path, line, column).is_ok()
    }
}

/// Absolute path of the running executable, or [`EDITOR_PATH`].
fn default_installation_path() -> String {
    std::env::current_exe()
        .map(|exe| exe.to_string_lossy().into_owned())
        .unwrap_or_else(|_| EDITOR_PATH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LsEditError;
    use crate::launch::ResolveError;
    use crate::test_support::{capture_logs, noop_template};
    use tempfile::TempDir;

    fn make_editor(temp_dir: &TempDir) -> ScriptEditor {
        let ctx = ProjectContext::resolve_from(temp_dir.path()).unwrap();
        ScriptEditor::with_installation_path(ctx, "/opt/lsedit/bin/lsedit".to_string())
    }

    fn store_template(editor: &ScriptEditor, template: &str) {
        let mut settings = Settings::default();
        settings
            .set_command_template(template, editor.context().settings_path())
            .unwrap();
    }

    #[test]
    fn test_installations() {
        let temp_dir = TempDir::new().unwrap();
        let editor = make_editor(&temp_dir);

        assert_eq!(
            editor.installations(),
            vec![EditorInstallation {
                name: "Language Server Script Editor".to_string(),
                path: "/opt/lsedit/bin/lsedit".to_string(),
            }]
        );
    }

    #[test]
    fn test_is_selected_path() {
        let temp_dir = TempDir::new().unwrap();
        let editor = make_editor(&temp_dir);

        assert!(editor.is_selected_path("/opt/lsedit/bin/lsedit"));
        assert!(editor.is_selected_path(EDITOR_PATH));
        assert!(!editor.is_selected_path(""));
        assert!(!editor.is_selected_path("/usr/bin/code"));
        assert!(!editor.is_selected_path("LSEDIT"));
    }

    #[test]
    fn test_try_get_installation_for_path() {
        let temp_dir = TempDir::new().unwrap();
        let editor = make_editor(&temp_dir);

        let installation = editor.try_get_installation_for_path(EDITOR_PATH).unwrap();
        assert_eq!(installation.path, "/opt/lsedit/bin/lsedit");
        assert!(editor.try_get_installation_for_path("vim").is_none());
    }

    #[test]
    fn test_default_installation_path_is_not_empty() {
        assert!(!default_installation_path().is_empty());
    }

    #[test]
    fn test_resolve_uses_default_template_without_settings() {
        let temp_dir = TempDir::new().unwrap();
        let editor = make_editor(&temp_dir);
        let file = editor.context().project_root.join("Player.cs");

        let cmd = editor
            .resolve(None, &file.to_string_lossy(), 12, 0)
            .unwrap();

        assert_eq!(cmd.executable, "code");
        assert_eq!(
            cmd.arguments,
            vec![
                file.to_string_lossy().into_owned(),
                "-g".to_string(),
                "12:1".to_string()
            ]
        );
    }

    #[test]
    fn test_resolve_reads_stored_template() {
        let temp_dir = TempDir::new().unwrap();
        let editor = make_editor(&temp_dir);
        store_template(&editor, "nvim +{line} {file}");

        let cmd = editor.resolve(None, "Assets/Game.cs", 3, 1).unwrap();

        assert_eq!(cmd.executable, "nvim");
        assert_eq!(cmd.arguments[0], "+3");
        assert!(cmd.arguments[1].ends_with("Game.cs"));
    }

    #[test]
    fn test_resolve_template_override() {
        let temp_dir = TempDir::new().unwrap();
        let editor = make_editor(&temp_dir);
        store_template(&editor, "nvim +{line} {file}");

        let cmd = editor
            .resolve(Some("subl {file}:{line}:{col}"), "a.cs", 4, 5)
            .unwrap();

        assert_eq!(cmd.executable, "subl");
        assert!(cmd.arguments[0].ends_with("a.cs:4:5"));
    }

    #[test]
    fn test_resolve_empty_override_fails() {
        let temp_dir = TempDir::new().unwrap();
        let editor = make_editor(&temp_dir);

        let err = editor.resolve(Some("  "), "a.cs", 1, 1).unwrap_err();
        assert!(matches!(
            err,
            LsEditError::Resolve(ResolveError::EmptyTemplate)
        ));
    }

    #[test]
    fn test_open_project_launches() {
        let temp_dir = TempDir::new().unwrap();
        let editor = make_editor(&temp_dir);
        store_template(&editor, noop_template());

        assert!(editor.open_project("Assets/Game.cs", 10, 2));
    }

    #[test]
    fn test_open_project_missing_executable_returns_false() {
        let temp_dir = TempDir::new().unwrap();
        let editor = make_editor(&temp_dir);
        store_template(&editor, "lsedit_nonexistent_editor_xyz_123 {file}");

        assert!(!editor.open_project("Assets/Game.cs", 1, 1));
    }

    #[test]
    fn test_open_project_unresolvable_returns_false() {
        let temp_dir = TempDir::new().unwrap();
        let editor = make_editor(&temp_dir);
        store_template(&editor, "'' \"\"");

        let (opened, logs) = capture_logs(|| editor.open_project("Assets/Game.cs", 1, 1));

        assert!(!opened);
        assert!(logs.contains("WARN"), "logs: {}", logs);
        assert!(logs.contains("command template did not produce a command"));
    }

    #[test]
    fn test_open_project_launch_failure_logged_as_error() {
        let temp_dir = TempDir::new().unwrap();
        let editor = make_editor(&temp_dir);
        store_template(&editor, "lsedit_nonexistent_editor_xyz_123 {file}");

        let (opened, logs) = capture_logs(|| editor.open_project("Assets/Game.cs", 1, 1));

        assert!(!opened);
        assert!(logs.contains("ERROR"), "logs: {}", logs);
        assert!(logs.contains("failed to start 'lsedit_nonexistent_editor_xyz_123'"));
    }

    #[test]
    fn test_open_project_with_corrupt_settings_returns_false() {
        let temp_dir = TempDir::new().unwrap();
        let editor = make_editor(&temp_dir);
        std::fs::create_dir_all(&editor.context().settings_dir).unwrap();
        std::fs::write(editor.context().settings_path(), "command_template: [").unwrap();

        assert!(!editor.open_project("Assets/Game.cs", 1, 1));
    }

    #[test]
    fn test_open_reports_launch_error() {
        let temp_dir = TempDir::new().unwrap();
        let editor = make_editor(&temp_dir);

        let err = editor
            .open(Some("lsedit_nonexistent_editor_xyz_123"), "a.cs", 1, 1)
            .unwrap_err();

        assert!(matches!(err, LsEditError::Launch(_)));
        assert!(err.to_string().contains("lsedit_nonexistent_editor_xyz_123"));
    }
}
