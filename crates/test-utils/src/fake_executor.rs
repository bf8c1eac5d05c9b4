use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use fidbatch::errors::Result;
use fidbatch::exec::{ExecOutcome, ExecutorBackend};

/// A fake executor that:
/// - records every command the controller dispatches
/// - replays a scripted sequence of outcomes instead of running processes.
///
/// When the script runs out, remaining commands succeed with exit code 0.
pub struct FakeExecutor {
    outcomes: VecDeque<ExecOutcome>,
    executed: Arc<Mutex<Vec<Vec<String>>>>,
}

impl FakeExecutor {
    pub fn new(
        outcomes: Vec<ExecOutcome>,
        executed: Arc<Mutex<Vec<Vec<String>>>>,
    ) -> Self {
        Self {
            outcomes: outcomes.into(),
            executed,
        }
    }

    /// Convenience constructor scripting plain exit codes.
    pub fn with_exit_codes(
        codes: &[i32],
        executed: Arc<Mutex<Vec<Vec<String>>>>,
    ) -> Self {
        let outcomes = codes.iter().map(|&c| ExecOutcome::Exited(c)).collect();
        Self::new(outcomes, executed)
    }
}

impl ExecutorBackend for FakeExecutor {
    fn run_command<'a>(
        &'a mut self,
        cmd: &'a [String],
    ) -> Pin<Box<dyn Future<Output = Result<ExecOutcome>> + Send + 'a>> {
        let outcome = self.outcomes.pop_front().unwrap_or(ExecOutcome::Exited(0));
        let executed = Arc::clone(&self.executed);

        Box::pin(async move {
            {
                let mut guard = executed.lock().unwrap();
                guard.push(cmd.to_vec());
            }
            Ok(outcome)
        })
    }
}
