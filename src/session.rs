//! Interactive session state
//!
//! One task is selected at a time. Its form fields and last output live here
//! until the task changes or the user clears them.

use crate::dispatcher::{Dispatcher, Outcome};
use crate::error::{AssistError, AssistResult};
use crate::input::{self, InputMethod};
use crate::speech::SpeechRecognizer;
use crate::task::{Field, Task, TaskInputs};
use tracing::debug;

pub const HELP: &str = "\
Commands:
  task <name>          select a task (generate, translate, open, play)
  set <field> <value>  fill a field of the current task
  input text|audio     choose how the question is entered (generate)
  listen               record the question from the microphone now
  run                  run the current task
  clear                reset the current task's inputs and output
  show                 show the current task and its fields
  tasks                list tasks
  help                 show this help
  quit                 leave";

/// A parsed line of interactive input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Task(Task),
    Set(Field, String),
    Input(InputMethod),
    Listen,
    Run,
    Clear,
    Show,
    Tasks,
    Help,
    Quit,
}

/// Parse one line; blank lines yield `None`
pub fn parse_command(line: &str) -> AssistResult<Option<SessionCommand>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    let command = match head.to_lowercase().as_str() {
        "task" | "select" => SessionCommand::Task(rest.parse()?),
        "set" => {
            let (name, value) = match rest.split_once(char::is_whitespace) {
                Some((name, value)) => (name, value.trim()),
                None => (rest, ""),
            };
            let field =
                Field::parse(name).ok_or_else(|| AssistError::UnknownCommand(line.to_string()))?;
            SessionCommand::Set(field, value.to_string())
        }
        "input" => SessionCommand::Input(
            rest.parse()
                .map_err(|_| AssistError::UnknownCommand(line.to_string()))?,
        ),
        "listen" => SessionCommand::Listen,
        "run" | "go" => SessionCommand::Run,
        "clear" | "reset" => SessionCommand::Clear,
        "show" => SessionCommand::Show,
        "tasks" => SessionCommand::Tasks,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        _ => return Err(AssistError::UnknownCommand(line.to_string())),
    };
    Ok(Some(command))
}

/// Result of a run: an optional inline notice from input acquisition, then
/// the dispatch result itself
#[derive(Debug)]
pub struct RunReport {
    pub notice: Option<AssistError>,
    pub result: AssistResult<Outcome>,
}

#[derive(Debug, Clone)]
pub struct Session {
    task: Task,
    method: InputMethod,
    inputs: TaskInputs,
    last_output: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Task::GenerateResponse)
    }
}

impl Session {
    pub fn new(task: Task) -> Self {
        Self {
            task,
            method: InputMethod::Text,
            inputs: TaskInputs::default(),
            last_output: None,
        }
    }

    pub fn task(&self) -> Task {
        self.task
    }

    pub fn method(&self) -> InputMethod {
        self.method
    }

    pub fn inputs(&self) -> &TaskInputs {
        &self.inputs
    }

    pub fn last_output(&self) -> Option<&str> {
        self.last_output.as_deref()
    }

    /// Switch task; a different task starts from an empty form
    pub fn select(&mut self, task: Task) {
        if task != self.task {
            debug!("Task changed: {} -> {}", self.task, task);
            self.task = task;
            self.clear();
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) -> AssistResult<()> {
        if !self.task.fields().contains(&field) {
            return Err(AssistError::UnknownField {
                field: field.name().to_string(),
                task: self.task.to_string(),
            });
        }
        self.inputs.set(field, value);
        Ok(())
    }

    pub fn set_method(&mut self, method: InputMethod) {
        self.method = method;
    }

    /// Drop every input and the last output of the current task
    pub fn clear(&mut self) {
        self.method = InputMethod::Text;
        self.inputs = TaskInputs::default();
        self.last_output = None;
    }

    /// Record the question by voice, replacing whatever was typed
    pub async fn listen(
        &mut self,
        recognizer: Option<&dyn SpeechRecognizer>,
    ) -> AssistResult<Option<AssistError>> {
        if self.task != Task::GenerateResponse {
            return Err(AssistError::UnknownField {
                field: Field::Question.name().to_string(),
                task: self.task.to_string(),
            });
        }
        let acquired = input::acquire(InputMethod::Audio, "", recognizer).await;
        self.inputs.set(Field::Question, acquired.text);
        Ok(acquired.notice)
    }

    /// Run the current task, acquiring the question first in audio mode
    pub async fn run(
        &mut self,
        dispatcher: &Dispatcher,
        recognizer: Option<&dyn SpeechRecognizer>,
    ) -> RunReport {
        let mut notice = None;
        if self.task == Task::GenerateResponse && self.method == InputMethod::Audio {
            let acquired =
                input::acquire(self.method, &self.inputs.question, recognizer).await;
            self.inputs.set(Field::Question, acquired.text);
            notice = acquired.notice;
        }

        let result = dispatcher.dispatch(self.task, &self.inputs).await;
        self.last_output = result.as_ref().ok().map(ToString::to_string);
        RunReport { notice, result }
    }

    /// Human-readable view of the current form
    pub fn summary(&self) -> String {
        let mut out = format!("Task: {}", self.task);
        if self.task == Task::GenerateResponse {
            out.push_str(&format!(" (input: {:?})", self.method));
        }
        for field in self.task.fields() {
            out.push_str(&format!("\n  {:<9} {}", field.name(), self.inputs.get(*field)));
        }
        if let Some(output) = &self.last_output {
            out.push_str(&format!("\nLast output:\n{}", output));
        }
        out
    }
}
