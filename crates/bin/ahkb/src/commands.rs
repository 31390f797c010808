//! Subcommand handlers. Each one drives a single `ProjectService` use-case.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};

use ahkb_app::ports::{PathProbe, ProgramCatalog, TextStore};
use ahkb_app::services::project_service::{Direction, FileFormat, ProjectService};
use ahkb_domain::action::{Action, ActionKind};
use ahkb_domain::project::Project;

use crate::cli::{ActionFields, Step};
use crate::config::ProjectConfig;

pub fn new_project<S: TextStore, P: PathProbe>(
    service: &ProjectService<S, P>,
    defaults: &ProjectConfig,
    output: &Path,
    name: Option<String>,
    hotkey: Option<String>,
) -> anyhow::Result<Project> {
    let project = Project::new()
        .with_application_name(name.unwrap_or_else(|| defaults.default_name.clone()))
        .with_hotkey(hotkey.unwrap_or_else(|| defaults.default_hotkey.clone()));
    service
        .save_project(output, &project)
        .with_context(|| format!("writing {}", output.display()))?;
    println!("created {}", output.display());
    Ok(project)
}

pub fn export<S: TextStore, P: PathProbe>(
    service: &ProjectService<S, P>,
    input: &Path,
    output: Option<PathBuf>,
) -> anyhow::Result<PathBuf> {
    let opened = service
        .open(input)
        .with_context(|| format!("opening {}", input.display()))?;
    let output = output
        .unwrap_or_else(|| PathBuf::from(format!("{}.ahk", opened.project.application_name)));
    service
        .export_script(&output, &opened.project)
        .with_context(|| format!("writing {}", output.display()))?;
    println!(
        "exported {} actions to {}",
        opened.project.len(),
        output.display()
    );
    Ok(output)
}

pub fn import<S: TextStore, P: PathProbe>(
    service: &ProjectService<S, P>,
    script: &Path,
    output: Option<PathBuf>,
) -> anyhow::Result<PathBuf> {
    if FileFormat::detect(script)? != FileFormat::Script {
        bail!("{} is not an .ahk script", script.display());
    }
    let opened = service
        .open(script)
        .with_context(|| format!("importing {}", script.display()))?;
    let output = output.unwrap_or_else(|| script.with_extension("json"));
    service
        .save_project(&output, &opened.project)
        .with_context(|| format!("writing {}", output.display()))?;
    println!(
        "imported {} actions ({} skipped) into {}",
        opened.project.len(),
        opened.dropped(),
        output.display()
    );
    Ok(output)
}

/// Returns the one-based position of the new action.
pub fn add<S: TextStore, P: PathProbe>(
    service: &ProjectService<S, P>,
    file: &Path,
    kind: ActionKind,
    fields: ActionFields,
    at: Option<NonZeroUsize>,
) -> anyhow::Result<usize> {
    let action = apply_fields(fields, Action::builder(kind).build());
    let summary = format!("{} {} ({action})", action.kind, action.name);
    let index = service
        .add_action(file, action, at.map(zero_based))
        .with_context(|| format!("adding to {}", file.display()))?;
    println!("added #{}: {summary}", index + 1);
    Ok(index + 1)
}

pub fn edit<S: TextStore, P: PathProbe>(
    service: &ProjectService<S, P>,
    file: &Path,
    position: NonZeroUsize,
    kind: Option<ActionKind>,
    fields: ActionFields,
) -> anyhow::Result<Action> {
    if kind.is_none() && fields == ActionFields::default() {
        bail!("nothing to change, pass --kind or at least one field flag");
    }
    let action = service
        .edit_action(file, zero_based(position), |action| {
            let action = match kind {
                Some(kind) => action.into_builder().kind(kind).build(),
                None => action,
            };
            apply_fields(fields, action)
        })
        .with_context(|| format!("editing #{position} in {}", file.display()))?;
    println!("updated #{position}: {} {} ({action})", action.kind, action.name);
    Ok(action)
}

pub fn remove<S: TextStore, P: PathProbe>(
    service: &ProjectService<S, P>,
    file: &Path,
    position: NonZeroUsize,
) -> anyhow::Result<Action> {
    let action = service
        .remove_action(file, zero_based(position))
        .with_context(|| format!("removing #{position} from {}", file.display()))?;
    println!("removed #{position}: {} {}", action.kind, action.name);
    Ok(action)
}

/// Returns the action's new one-based position.
pub fn move_action<S: TextStore, P: PathProbe>(
    service: &ProjectService<S, P>,
    file: &Path,
    position: NonZeroUsize,
    step: Step,
) -> anyhow::Result<usize> {
    let direction = match step {
        Step::Up => Direction::Up,
        Step::Down => Direction::Down,
    };
    let index = service
        .move_action(file, zero_based(position), direction)
        .with_context(|| format!("moving #{position} in {}", file.display()))?;
    println!("moved #{position} to #{}", index + 1);
    Ok(index + 1)
}

pub fn show<S: TextStore, P: PathProbe>(
    service: &ProjectService<S, P>,
    file: &Path,
) -> anyhow::Result<()> {
    let opened = service
        .open(file)
        .with_context(|| format!("opening {}", file.display()))?;
    let project = &opened.project;
    println!(
        "{} (hotkey {})",
        project.application_name, project.hotkey_expression
    );
    for row in service.preview(project) {
        println!(
            "{:>3}  {:<10}  {:<24}  {}",
            row.position,
            row.kind.as_str(),
            row.name,
            row.summary
        );
        println!("     {}", row.comment);
    }
    if opened.dropped() > 0 {
        println!("{} entries could not be decoded", opened.dropped());
    }
    Ok(())
}

pub fn programs(catalog: &impl ProgramCatalog) -> anyhow::Result<()> {
    let programs = catalog
        .installed_programs()
        .context("scanning start menu")?;
    for name in &programs {
        println!("{name}");
    }
    Ok(())
}

fn zero_based(position: NonZeroUsize) -> usize {
    position.get() - 1
}

/// Overlay the flags that were given; a blank name falls back to the kind.
fn apply_fields(fields: ActionFields, mut action: Action) -> Action {
    if let Some(name) = fields.name {
        action.name = name;
    }
    if let Some(x) = fields.x {
        action.x = x;
    }
    if let Some(y) = fields.y {
        action.y = y;
    }
    if let Some(ms) = fields.ms {
        action.milliseconds = ms;
    }
    if let Some(command) = fields.command {
        action.command = command;
    }
    if let Some(params) = fields.params {
        action.parameters = params;
    }
    if let Some(mode) = fields.mode {
        action.mode = mode;
    }
    action.into_builder().build()
}
