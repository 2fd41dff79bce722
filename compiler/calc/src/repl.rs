use calc_eval::{Evaluator, RecordingTrace};

/// Line-oriented session state, independent of the terminal.
#[derive(Debug)]
pub struct ReplSession {
    evaluator: Evaluator,
    trace: bool,
    last: Option<f64>,
}

impl ReplSession {
    pub fn new(evaluator: Evaluator) -> Self {
        Self {
            evaluator,
            trace: false,
            last: None,
        }
    }

    pub fn prompt(&self) -> &'static str {
        "calc> "
    }

    pub fn last_value(&self) -> Option<f64> {
        self.last
    }

    /// Handle one input line; returns the lines to print and whether to exit.
    pub fn handle_line(&mut self, line: &str) -> (Vec<String>, bool) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return (Vec::new(), false);
        }
        if trimmed.starts_with(':') {
            return self.handle_command(trimmed);
        }
        (self.submit(trimmed), false)
    }

    fn handle_command(&mut self, command: &str) -> (Vec<String>, bool) {
        match command {
            ":help" => (
                vec![
                    "commands: :help, :quit, :trace, :last".to_string(),
                    "enter an expression such as 2(3+4) or -5*(1.5-2)".to_string(),
                ],
                false,
            ),
            ":q" | ":quit" | ":exit" => (Vec::new(), true),
            ":trace" => {
                self.trace = !self.trace;
                let state = if self.trace { "on" } else { "off" };
                (vec![format!("trace {state}")], false)
            }
            ":last" => match self.last {
                Some(value) => (vec![value.to_string()], false),
                None => (vec!["(no result yet)".to_string()], false),
            },
            _ => (vec![format!("error: unknown command '{command}'")], false),
        }
    }

    fn submit(&mut self, expression: &str) -> Vec<String> {
        let mut out = Vec::new();
        let mut trace = RecordingTrace::new();
        let result = self.evaluator.evaluate_traced(expression, &mut trace);
        if self.trace {
            out.extend(trace.events().iter().map(|e| format!("  {e}")));
        }
        match result {
            Ok(value) => {
                self.last = Some(value);
                out.push(value.to_string());
            }
            Err(err) => out.push(format!("error: {err}")),
        }
        out
    }
}
