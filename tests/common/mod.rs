#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;

use lastpass_alfred::{Captured, Config, LastPass, Runner};

/// Plays back canned results in order and remembers what it was asked to run.
/// Once the script runs out, every call succeeds with empty output.
#[derive(Default)]
pub struct ScriptedRunner {
    responses: RefCell<VecDeque<io::Result<Captured>>>,
    calls: RefCell<Vec<Vec<String>>>,
}

impl ScriptedRunner {
    pub fn new() -> ScriptedRunner {
        ScriptedRunner::default()
    }

    pub fn ok<S: Into<String>>(self, stdout: S) -> ScriptedRunner {
        self.respond(Ok(Captured {
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }))
    }

    pub fn fail<S: Into<String>>(self, code: i32, stderr: S) -> ScriptedRunner {
        self.respond(Ok(Captured {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }))
    }

    pub fn missing(self) -> ScriptedRunner {
        self.respond(Err(io::Error::new(io::ErrorKind::NotFound, "No such file or directory")))
    }

    fn respond(self, response: io::Result<Captured>) -> ScriptedRunner {
        self.responses.borrow_mut().push_back(response);
        self
    }

    /// Every invocation so far, program first.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }
}

impl Runner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<Captured> {
        let mut call = vec![program.to_owned()];
        call.extend(args.iter().map(|arg| (*arg).to_owned()));
        self.calls.borrow_mut().push(call);

        self.responses.borrow_mut().pop_front().unwrap_or_else(|| {
            Ok(Captured {
                code: Some(0),
                ..Captured::default()
            })
        })
    }
}

pub fn lastpass(runner: &ScriptedRunner) -> LastPass<&ScriptedRunner> {
    LastPass::with_runner(&Config::default(), runner)
}

pub fn lastpass_with<'a>(config: &Config, runner: &'a ScriptedRunner) -> LastPass<&'a ScriptedRunner> {
    LastPass::with_runner(config, runner)
}
