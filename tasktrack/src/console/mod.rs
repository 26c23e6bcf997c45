//! Console menu driving a [`TaskManager`].
//!
//! The menu reads one line per prompt, turns it into task values, and calls
//! the manager. Input that fails to parse or validate is reported and the
//! same prompt is asked again. End of input ends the session the same way
//! the exit option does.

pub mod input;

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use chrono::Local;
use tasktrack_core::{Priority, Task, TaskId, TaskStatus};

use crate::config::AppConfig;
use crate::tasks::TaskManager;
use input::{MenuChoice, format_hint, parse_due, parse_optional, truncate_to_format};

/// Whether the session continues after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Interactive menu over a line-oriented reader and a writer.
pub struct Menu<R, W> {
    manager: TaskManager,
    config: AppConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Creates a menu that drives `manager` with the given settings.
    pub const fn new(manager: TaskManager, config: AppConfig, input: R, output: W) -> Self {
        Self {
            manager,
            config,
            input,
            output,
        }
    }

    /// Returns the manager driven by this menu.
    pub const fn manager(&self) -> &TaskManager {
        &self.manager
    }

    /// Consumes the menu, returning the manager and the writer.
    pub fn into_parts(self) -> (TaskManager, W) {
        (self.manager, self.output)
    }

    /// Runs the menu loop until the exit option is chosen or input ends.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from reading input or writing output.
    pub fn run(&mut self) -> io::Result<()> {
        tracing::info!("console session started");
        loop {
            self.print_options()?;
            let Some(line) = self.read_line()? else {
                break;
            };
            let Some(choice) = MenuChoice::parse(&line) else {
                tracing::warn!(input = %line.trim(), "invalid menu option");
                writeln!(self.output, "Invalid option, please try again.")?;
                continue;
            };
            tracing::debug!(?choice, "menu option selected");
            if self.dispatch(choice)? == Flow::Stop {
                break;
            }
        }
        writeln!(self.output, "Goodbye.")?;
        tracing::info!(tasks = self.manager.len(), "console session ended");
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        match choice {
            MenuChoice::AddTask => self.add_task(),
            MenuChoice::RemoveTask => self.remove_task(),
            MenuChoice::FindTask => self.find_task(),
            MenuChoice::ListByStatus => self.list_by_status(),
            MenuChoice::ListByPriority => self.list_by_priority(),
            MenuChoice::ListAll => {
                let tasks = self.manager.list_all();
                self.print_tasks(&tasks)?;
                Ok(Flow::Continue)
            }
            MenuChoice::UpdateStatus => self.update_status(),
            MenuChoice::ListOverdue => {
                let tasks = self.manager.list_overdue();
                self.print_tasks(&tasks)?;
                Ok(Flow::Continue)
            }
            MenuChoice::Exit => Ok(Flow::Stop),
        }
    }

    fn print_options(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- MAIN MENU ---")?;
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, choice.label())?;
        }
        write!(self.output, "Select an option: ")?;
        self.output.flush()
    }

    fn add_task(&mut self) -> io::Result<Flow> {
        loop {
            let Some(title) = self.prompt("Title: ", |s| Ok::<_, String>(s.to_string()))? else {
                return Ok(Flow::Stop);
            };
            let Some(description) =
                self.prompt("Description: ", |s| Ok::<_, String>(s.to_string()))?
            else {
                return Ok(Flow::Stop);
            };
            let format = self.config.datetime_format.clone();
            let due_label = format!("Due date ({}, blank for none): ", format_hint(&format));
            let Some(due_at) = self.prompt(&due_label, |s| parse_due(s, &format))? else {
                return Ok(Flow::Stop);
            };
            let default_priority = self.config.default_priority;
            let priority_label = format!(
                "Priority ({}) [{default_priority}]: ",
                labels(&Priority::ALL)
            );
            let Some(priority) = self.prompt(&priority_label, parse_optional::<Priority>)? else {
                return Ok(Flow::Stop);
            };

            let description = (!description.is_empty()).then_some(description);
            let priority = priority.unwrap_or(default_priority);
            // Due dates are typed at the format's precision; stamp creation the same way.
            let created_at = truncate_to_format(Local::now().naive_local(), &format);
            match Task::create_at(created_at, title, description, due_at, Some(priority)) {
                Ok(task) => {
                    writeln!(
                        self.output,
                        "Task added: {}",
                        task.display_with(&self.config.datetime_format)
                    )?;
                    self.manager.add(task);
                    return Ok(Flow::Continue);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "task rejected");
                    writeln!(self.output, "Error: {e}. Please enter the task again.")?;
                }
            }
        }
    }

    fn remove_task(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompt("Task id to remove: ", str::parse::<TaskId>)? else {
            return Ok(Flow::Stop);
        };
        if self.manager.remove(&id) {
            writeln!(self.output, "Task removed.")?;
        } else {
            writeln!(self.output, "No task with id {id}.")?;
        }
        Ok(Flow::Continue)
    }

    fn find_task(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompt("Task id to find: ", str::parse::<TaskId>)? else {
            return Ok(Flow::Stop);
        };
        match self.manager.find_by_id(&id) {
            Some(task) => writeln!(
                self.output,
                "Task found: {}",
                task.display_with(&self.config.datetime_format)
            )?,
            None => writeln!(self.output, "No task with id {id}.")?,
        }
        Ok(Flow::Continue)
    }

    fn list_by_status(&mut self) -> io::Result<Flow> {
        let label = format!("Status ({}): ", labels(&TaskStatus::ALL));
        let Some(status) = self.prompt(&label, str::parse::<TaskStatus>)? else {
            return Ok(Flow::Stop);
        };
        let tasks = self.manager.list_by_status(status);
        self.print_tasks(&tasks)?;
        Ok(Flow::Continue)
    }

    fn list_by_priority(&mut self) -> io::Result<Flow> {
        let label = format!("Priority ({}): ", labels(&Priority::ALL));
        let Some(priority) = self.prompt(&label, str::parse::<Priority>)? else {
            return Ok(Flow::Stop);
        };
        let tasks = self.manager.list_by_priority(priority);
        self.print_tasks(&tasks)?;
        Ok(Flow::Continue)
    }

    fn update_status(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompt("Task id to update: ", str::parse::<TaskId>)? else {
            return Ok(Flow::Stop);
        };
        if self.manager.find_by_id(&id).is_none() {
            writeln!(self.output, "No task with id {id}.")?;
            return Ok(Flow::Continue);
        }
        let label = format!("New status ({}): ", labels(&TaskStatus::ALL));
        let Some(status) = self.prompt(&label, str::parse::<TaskStatus>)? else {
            return Ok(Flow::Stop);
        };
        if let Some(task) = self.manager.find_by_id_mut(&id) {
            task.set_status(status);
            tracing::debug!(task_id = %id, %status, "task status updated");
            writeln!(
                self.output,
                "Task updated: {}",
                task.display_with(&self.config.datetime_format)
            )?;
        }
        Ok(Flow::Continue)
    }

    fn print_tasks(&mut self, tasks: &[Task]) -> io::Result<()> {
        if tasks.is_empty() {
            return writeln!(self.output, "No tasks found.");
        }
        for task in tasks {
            writeln!(
                self.output,
                "  {}",
                task.display_with(&self.config.datetime_format)
            )?;
        }
        Ok(())
    }

    /// Asks `label` until `parse` accepts the answer. `None` means input ended.
    fn prompt<T, E: Display>(
        &mut self,
        label: &str,
        parse: impl Fn(&str) -> Result<T, E>,
    ) -> io::Result<Option<T>> {
        loop {
            write!(self.output, "{label}")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    tracing::warn!(error = %e, "input rejected");
                    writeln!(self.output, "Error: {e}")?;
                }
            }
        }
    }

    /// Reads one line without its terminator. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Joins enum labels for a prompt, e.g. `low, medium, high, urgent`.
fn labels<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
