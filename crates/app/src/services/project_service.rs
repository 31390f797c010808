//! Project service — open, save, export, and action editing use-cases.

use std::path::Path;

use ahkb_domain::action::{Action, ActionKind};
use ahkb_domain::document::{self, RejectedRecord};
use ahkb_domain::error::BuilderError;
use ahkb_domain::metadata;
use ahkb_domain::project::Project;

use crate::importer::{self, SkippedLine};
use crate::ports::{PathProbe, TextStore};
use crate::script_generator::ScriptGenerator;

/// File formats [`ProjectService::open`] understands, by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// `.json` project document.
    Document,
    /// `.ahk` script exported by the builder.
    Script,
}

impl FileFormat {
    /// Detect the format from the file extension (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::UnsupportedFileType`] for any other extension.
    pub fn detect(path: &Path) -> Result<Self, BuilderError> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "json" => Ok(Self::Document),
            "ahk" => Ok(Self::Script),
            _ => Err(BuilderError::UnsupportedFileType(
                path.display().to_string(),
            )),
        }
    }
}

/// Result of opening a project document or script.
#[derive(Debug)]
pub struct Opened {
    pub format: FileFormat,
    pub project: Project,
    /// Document records dropped while loading a `.json` file.
    pub rejected: Vec<RejectedRecord>,
    /// Metadata lines dropped while importing an `.ahk` file.
    pub skipped: Vec<SkippedLine>,
}

impl Opened {
    /// Number of entries that could not be decoded.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.rejected.len() + self.skipped.len()
    }
}

/// Which way [`ProjectService::move_action`] shifts an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the start of the sequence.
    Up,
    /// Towards the end of the sequence.
    Down,
}

/// One row of the action overview: position, kind, name, summary, comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRow {
    /// One-based position.
    pub position: usize,
    pub kind: ActionKind,
    pub name: String,
    pub summary: String,
    pub comment: String,
}

/// Application service for project files.
pub struct ProjectService<S, P> {
    store: S,
    generator: ScriptGenerator<P>,
}

impl<S: TextStore, P: PathProbe> ProjectService<S, P> {
    /// Create a new service backed by the given store and path probe.
    pub fn new(store: S, probe: P) -> Self {
        Self {
            store,
            generator: ScriptGenerator::new(probe),
        }
    }

    /// Write the project as a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidProjectDocument`] if encoding fails, or
    /// a storage error from the store.
    #[tracing::instrument(skip(self, project), fields(application = %project.application_name))]
    pub fn save_project(&self, path: &Path, project: &Project) -> Result<(), BuilderError> {
        let json = document::to_json(project)?;
        self.store.write_text(path, &json)?;
        tracing::info!(path = %path.display(), actions = project.len(), "project saved");
        Ok(())
    }

    /// Open a `.json` project document or an `.ahk` script.
    ///
    /// # Errors
    ///
    /// - [`BuilderError::UnsupportedFileType`] for other extensions
    /// - [`BuilderError::InvalidProjectDocument`] for a structurally broken document
    /// - a storage error from the store
    #[tracing::instrument(skip(self))]
    pub fn open(&self, path: &Path) -> Result<Opened, BuilderError> {
        let format = FileFormat::detect(path)?;
        let text = self.store.read_text(path)?;
        let opened = match format {
            FileFormat::Document => {
                let load = document::from_json(&text)?;
                for record in &load.rejected {
                    tracing::warn!(
                        index = record.index,
                        error = %record.error,
                        "dropping undecodable action record"
                    );
                }
                Opened {
                    format,
                    project: load.project,
                    rejected: load.rejected,
                    skipped: Vec::new(),
                }
            }
            FileFormat::Script => {
                let import = importer::import_script(&text, Some(path));
                Opened {
                    format,
                    project: import.project,
                    rejected: Vec::new(),
                    skipped: import.skipped,
                }
            }
        };
        tracing::info!(
            actions = opened.project.len(),
            dropped = opened.dropped(),
            "project opened"
        );
        Ok(opened)
    }

    /// Render the project as an AHK script and write it.
    ///
    /// # Errors
    ///
    /// Returns a storage error from the store.
    #[tracing::instrument(skip(self, project), fields(application = %project.application_name))]
    pub fn export_script(&self, path: &Path, project: &Project) -> Result<(), BuilderError> {
        let script = self.generator.render(project);
        self.store.write_text(path, &script)?;
        tracing::info!(path = %path.display(), actions = project.len(), "script exported");
        Ok(())
    }

    /// Overview rows for every action, in order.
    #[must_use]
    pub fn preview(&self, project: &Project) -> Vec<ActionRow> {
        project
            .actions()
            .iter()
            .enumerate()
            .map(|(index, action)| ActionRow {
                position: index + 1,
                kind: action.kind,
                name: action.name.clone(),
                summary: action.to_string(),
                comment: metadata::encode(action),
            })
            .collect()
    }

    /// Add an action to the project stored at `path`.
    ///
    /// Appends when `at` is `None`, otherwise inserts at that zero-based
    /// position. Returns the action's position.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::IndexOutOfRange`] when `at` is past the end,
    /// or any error from [`Self::open`] and the final write.
    #[tracing::instrument(skip(self, action), fields(kind = %action.kind))]
    pub fn add_action(
        &self,
        path: &Path,
        action: Action,
        at: Option<usize>,
    ) -> Result<usize, BuilderError> {
        self.modify(path, |project| match at {
            Some(index) => project.insert(index, action).map(|()| index),
            None => {
                project.push(action);
                Ok(project.len() - 1)
            }
        })
    }

    /// Rewrite the action at `index` with `edit`, returning the stored result.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::IndexOutOfRange`] when `index` is past the
    /// end, or any error from [`Self::open`] and the final write.
    #[tracing::instrument(skip(self, edit))]
    pub fn edit_action(
        &self,
        path: &Path,
        index: usize,
        edit: impl FnOnce(Action) -> Action,
    ) -> Result<Action, BuilderError> {
        self.modify(path, |project| {
            let current = project.actions().get(index).cloned().ok_or(
                BuilderError::IndexOutOfRange {
                    index,
                    len: project.len(),
                },
            )?;
            let updated = edit(current);
            project.replace(index, updated.clone())?;
            Ok(updated)
        })
    }

    /// Remove and return the action at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::IndexOutOfRange`] when `index` is past the
    /// end, or any error from [`Self::open`] and the final write.
    #[tracing::instrument(skip(self))]
    pub fn remove_action(&self, path: &Path, index: usize) -> Result<Action, BuilderError> {
        self.modify(path, |project| project.remove(index))
    }

    /// Move the action at `index` one step, returning its new position.
    ///
    /// Moving the first action up or the last one down leaves it in place.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::IndexOutOfRange`] when `index` is past the
    /// end, or any error from [`Self::open`] and the final write.
    #[tracing::instrument(skip(self))]
    pub fn move_action(
        &self,
        path: &Path,
        index: usize,
        direction: Direction,
    ) -> Result<usize, BuilderError> {
        self.modify(path, |project| match direction {
            Direction::Up => project.move_up(index),
            Direction::Down => project.move_down(index),
        })
    }

    /// Open `path`, apply `change`, and write the project back in the format
    /// it was read in. Nothing is written when `change` fails.
    fn modify<T>(
        &self,
        path: &Path,
        change: impl FnOnce(&mut Project) -> Result<T, BuilderError>,
    ) -> Result<T, BuilderError> {
        let mut opened = self.open(path)?;
        let outcome = change(&mut opened.project)?;
        match opened.format {
            FileFormat::Document => self.save_project(path, &opened.project)?,
            FileFormat::Script => self.export_script(path, &opened.project)?,
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahkb_domain::action::RunMode;
    use ahkb_domain::error::{DecodeError, DocumentError};
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryTextStore {
        files: Mutex<HashMap<PathBuf, String>>,
    }

    impl InMemoryTextStore {
        fn with_file(path: &str, contents: &str) -> Self {
            let store = Self::default();
            store
                .files
                .lock()
                .unwrap()
                .insert(PathBuf::from(path), contents.to_string());
            store
        }

        fn get(&self, path: &str) -> Option<String> {
            self.files.lock().unwrap().get(Path::new(path)).cloned()
        }
    }

    impl TextStore for &InMemoryTextStore {
        fn read_text(&self, path: &Path) -> Result<String, BuilderError> {
            self.files.lock().unwrap().get(path).cloned().ok_or_else(|| {
                BuilderError::Storage(Box::new(std::io::Error::from(
                    std::io::ErrorKind::NotFound,
                )))
            })
        }

        fn write_text(&self, path: &Path, contents: &str) -> Result<(), BuilderError> {
            self.files
                .lock()
                .unwrap()
                .insert(path.to_path_buf(), contents.to_string());
            Ok(())
        }
    }

    fn demo() -> Project {
        Project::new()
            .with_application_name("Demo")
            .with_hotkey("^!z")
            .with_actions(vec![
                Action::click("Start", 100, 200),
                Action::sleep("", 500),
                Action::builder(ActionKind::Run)
                    .name("Pad")
                    .command("notepad")
                    .mode(RunMode::Minimized)
                    .build(),
            ])
    }

    fn never(_: &str) -> bool {
        false
    }

    #[test]
    fn should_detect_formats_case_insensitively() {
        assert_eq!(
            FileFormat::detect(Path::new("a/b.JSON")).unwrap(),
            FileFormat::Document
        );
        assert_eq!(
            FileFormat::detect(Path::new("macro.Ahk")).unwrap(),
            FileFormat::Script
        );
        assert!(matches!(
            FileFormat::detect(Path::new("notes.txt")),
            Err(BuilderError::UnsupportedFileType(_))
        ));
        assert!(FileFormat::detect(Path::new("noext")).is_err());
    }

    #[test]
    fn should_save_and_reopen_project() {
        let store = InMemoryTextStore::default();
        let service = ProjectService::new(&store, never);

        service.save_project(Path::new("demo.json"), &demo()).unwrap();
        let opened = service.open(Path::new("demo.json")).unwrap();

        assert_eq!(opened.format, FileFormat::Document);
        assert_eq!(opened.project, demo());
        assert_eq!(opened.dropped(), 0);
    }

    #[test]
    fn should_export_and_reimport_script() {
        let store = InMemoryTextStore::default();
        let service = ProjectService::new(&store, never);

        service.export_script(Path::new("out/Demo.ahk"), &demo()).unwrap();
        let script = store.get("out/Demo.ahk").unwrap();
        assert!(script.starts_with("; Generated by AHK Script Builder - Demo"));
        assert!(script.contains("    Run, notepad, , Min"));

        let opened = service.open(Path::new("out/Demo.ahk")).unwrap();
        assert_eq!(opened.format, FileFormat::Script);
        assert_eq!(opened.project.application_name, "Demo");
        assert_eq!(opened.project.actions(), demo().actions());
    }

    #[test]
    fn should_report_rejected_document_records() {
        let store = InMemoryTextStore::with_file(
            "p.json",
            r#"{ "actions": [{ "type": "Hover" }, { "type": "Sleep", "ms": 9 }] }"#,
        );
        let service = ProjectService::new(&store, never);

        let opened = service.open(Path::new("p.json")).unwrap();
        assert_eq!(opened.project.len(), 1);
        assert_eq!(opened.rejected.len(), 1);
        assert!(matches!(
            opened.rejected[0].error,
            DecodeError::UnknownActionKind(_)
        ));
    }

    #[test]
    fn should_fail_whole_load_for_missing_type() {
        let store = InMemoryTextStore::with_file("p.json", r#"{ "actions": [{ "ms": 9 }] }"#);
        let service = ProjectService::new(&store, never);

        let result = service.open(Path::new("p.json"));
        assert!(matches!(
            result,
            Err(BuilderError::InvalidProjectDocument(DocumentError::MissingKind { index: 0 }))
        ));
    }

    #[test]
    fn should_surface_storage_errors() {
        let store = InMemoryTextStore::default();
        let service = ProjectService::new(&store, never);

        let result = service.open(Path::new("missing.ahk"));
        assert!(matches!(result, Err(BuilderError::Storage(_))));
    }

    #[test]
    fn should_reject_unsupported_file_before_reading() {
        let store = InMemoryTextStore::with_file("notes.txt", "hello");
        let service = ProjectService::new(&store, never);

        let result = service.open(Path::new("notes.txt"));
        assert!(matches!(result, Err(BuilderError::UnsupportedFileType(_))));
    }

    fn stored(store: &InMemoryTextStore, path: &str) -> Project {
        document::from_json(&store.get(path).unwrap()).unwrap().project
    }

    #[test]
    fn should_append_or_insert_added_actions() {
        let store = InMemoryTextStore::default();
        let service = ProjectService::new(&store, never);
        service.save_project(Path::new("p.json"), &demo()).unwrap();

        let appended = service
            .add_action(Path::new("p.json"), Action::key_press("Go", "{Enter}"), None)
            .unwrap();
        let inserted = service
            .add_action(Path::new("p.json"), Action::sleep("First", 10), Some(0))
            .unwrap();

        assert_eq!((appended, inserted), (3, 0));
        let names: Vec<_> = stored(&store, "p.json")
            .actions()
            .iter()
            .map(|a| a.name.clone())
            .collect();
        assert_eq!(names, ["First", "Start", "Sleep", "Pad", "Go"]);
    }

    #[test]
    fn should_leave_file_untouched_when_insert_is_out_of_range() {
        let store = InMemoryTextStore::default();
        let service = ProjectService::new(&store, never);
        service.save_project(Path::new("p.json"), &demo()).unwrap();
        let before = store.get("p.json").unwrap();

        let result = service.add_action(Path::new("p.json"), Action::sleep("", 1), Some(4));

        assert!(matches!(
            result,
            Err(BuilderError::IndexOutOfRange { index: 4, len: 3 })
        ));
        assert_eq!(store.get("p.json").unwrap(), before);
    }

    #[test]
    fn should_edit_action_in_place() {
        let store = InMemoryTextStore::default();
        let service = ProjectService::new(&store, never);
        service.save_project(Path::new("p.json"), &demo()).unwrap();

        let edited = service
            .edit_action(Path::new("p.json"), 1, |action| {
                action.into_builder().milliseconds(750).build()
            })
            .unwrap();

        assert_eq!(edited, Action::sleep("Sleep", 750));
        assert_eq!(stored(&store, "p.json").actions()[1], edited);
    }

    #[test]
    fn should_reject_edit_past_the_end() {
        let store = InMemoryTextStore::default();
        let service = ProjectService::new(&store, never);
        service.save_project(Path::new("p.json"), &demo()).unwrap();

        let result = service.edit_action(Path::new("p.json"), 3, |action| action);
        assert!(matches!(
            result,
            Err(BuilderError::IndexOutOfRange { index: 3, len: 3 })
        ));
    }

    #[test]
    fn should_remove_and_reorder_actions() {
        let store = InMemoryTextStore::default();
        let service = ProjectService::new(&store, never);
        service.save_project(Path::new("p.json"), &demo()).unwrap();

        let removed = service.remove_action(Path::new("p.json"), 0).unwrap();
        assert_eq!(removed, Action::click("Start", 100, 200));

        let moved = service
            .move_action(Path::new("p.json"), 1, Direction::Up)
            .unwrap();
        assert_eq!(moved, 0);
        let stuck = service
            .move_action(Path::new("p.json"), 1, Direction::Down)
            .unwrap();
        assert_eq!(stuck, 1);

        let project = stored(&store, "p.json");
        assert_eq!(project.actions()[0].name, "Pad");
        assert_eq!(project.actions()[1].name, "Sleep");
    }

    #[test]
    fn should_write_edited_script_back_as_script() {
        let store = InMemoryTextStore::default();
        let service = ProjectService::new(&store, never);
        service.export_script(Path::new("Demo.ahk"), &demo()).unwrap();

        service.remove_action(Path::new("Demo.ahk"), 2).unwrap();

        let script = store.get("Demo.ahk").unwrap();
        assert!(script.starts_with("; Generated by AHK Script Builder - Demo"));
        assert!(!script.contains("Run, notepad"));
        let reopened = service.open(Path::new("Demo.ahk")).unwrap();
        assert_eq!(reopened.project.actions(), &demo().actions()[..2]);
    }

    #[test]
    fn should_build_preview_rows() {
        let store = InMemoryTextStore::default();
        let service = ProjectService::new(&store, never);

        let rows = service.preview(&demo());
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0],
            ActionRow {
                position: 1,
                kind: ActionKind::Click,
                name: "Start".to_string(),
                summary: "X=100, Y=200".to_string(),
                comment: ";ACTION:Click;Name=Start;X=100;Y=200".to_string(),
            }
        );
        assert_eq!(rows[2].summary, "Cmd=notepad Params= Mode=Minimized");
    }
}
