//! Compile Use Case
//!
//! Runs one grammar family over its input tree:
//! lock → prepare temp → discover → compile each → reconcile → cleanup.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use crate::domain::ports::{CompileEvent, CompileEventSink, ProcessRunner};
use crate::domain::services::visit;
use crate::domain::value_objects::{CompilationUnit, ProgramArguments, SourceTree};
use crate::error::GrammarResult;
use crate::infrastructure::fs::{RunLock, TempOutputDir};

use super::options::CompileOptions;
use super::reconcile;
use super::result::CompileOutcome;

/// Compile use case - drives the compiler once per grammar file
pub struct CompileUseCase<R, E>
where
    R: ProcessRunner,
    E: CompileEventSink,
{
    runner: R,
    events: E,
}

impl<R, E> CompileUseCase<R, E>
where
    R: ProcessRunner,
    E: CompileEventSink,
{
    /// Create a new compile use case
    pub fn new(runner: R, events: E) -> Self {
        Self { runner, events }
    }

    /// The runner that launches the compiler
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run the task to completion or to its first hard failure
    ///
    /// The temp directory is removed on every path that created it. A
    /// cleanup failure is only reported as an event and never replaces the
    /// run's own result.
    pub fn execute(&self, options: &CompileOptions) -> GrammarResult<CompileOutcome> {
        options.validate()?;
        let _lock = RunLock::acquire(&options.temp_dir)?;

        self.events.on_event(CompileEvent::Started {
            task: options.family.task_name().to_string(),
            input: options.input_dir.clone(),
            output: options.output_dir.clone(),
            temp: options.temp_dir.clone(),
        });

        let temp = TempOutputDir::prepare(&options.temp_dir)?;
        let result = self.run_in(&temp, options);

        if let Err(e) = temp.cleanup() {
            self.events.on_event(CompileEvent::CleanupFailed {
                path: temp.path().to_path_buf(),
                error: e.to_string(),
            });
        }

        let outcome = result?;
        self.events.on_event(CompileEvent::Completed {
            task: options.family.task_name().to_string(),
            compiled: outcome.compiled.len(),
            copied: outcome.written(),
        });
        Ok(outcome)
    }

    fn run_in(&self, temp: &TempOutputDir, options: &CompileOptions) -> GrammarResult<CompileOutcome> {
        let tree = visit(&options.input_dir, &options.suffix)?;
        self.events.on_event(CompileEvent::Discovered {
            compilable: tree.compilable().count(),
            passthrough: tree.passthrough().count(),
        });

        let compiled = self.compile_each(&tree, temp, options)?;

        let promotion = reconcile::promote_compiled(
            temp.path(),
            &options.output_dir,
            &options.custom_sources,
            &self.events,
        )?;
        let promoted: HashSet<PathBuf> = promotion.promoted.iter().cloned().collect();
        let passthrough = reconcile::copy_passthrough(&tree, &options.output_dir, &promoted)?;

        self.events.on_event(CompileEvent::Reconciled {
            compiled: promotion.promoted.len(),
            passthrough: passthrough.len(),
        });

        Ok(CompileOutcome {
            compiled,
            promoted: promotion.promoted,
            passthrough,
            skipped: promotion.skipped,
        })
    }

    fn compile_each(
        &self,
        tree: &SourceTree,
        temp: &TempOutputDir,
        options: &CompileOptions,
    ) -> GrammarResult<Vec<PathBuf>> {
        let family = options.family;
        let detailed = self.events.wants_detailed_events();
        let mut compiled = Vec::new();

        for (index, file) in tree.compilable().enumerate() {
            let unit = CompilationUnit::new(tree, file, temp.path(), &options.output_dir);
            fs::create_dir_all(unit.temp_parent())?;

            let mut arguments = ProgramArguments::new();
            arguments.add_all(&options.arguments);
            family.augment_arguments(&unit, &mut arguments);
            arguments.add_file(&unit.input);

            if detailed {
                self.events.on_event(CompileEvent::FileCompiling {
                    index,
                    path: unit.relative.clone(),
                    args: arguments.to_vec(),
                });
            }

            family.invoke_compiler(
                &self.runner,
                &options.classpath,
                &arguments,
                &unit,
                &self.events,
            )?;

            if detailed {
                self.events.on_event(CompileEvent::FileCompiled {
                    index,
                    path: unit.relative.clone(),
                });
            }
            compiled.push(unit.relative);
        }

        Ok(compiled)
    }
}
